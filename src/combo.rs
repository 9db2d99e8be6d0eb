//! Resolution of an external format/type vocabulary into pixel formats.
//!
//! Graphics APIs describe a pixel transfer as a channel-layout token plus a
//! component-type token. [`resolve_combo`] maps such a pair to the engine's
//! own [`PixelFormat`]; unsupported pairs yield `None` and must not reach
//! the conversion orchestrator.

use crate::format::PixelFormat;

/// Which channels a transfer names, and in what order.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComponentLayout {
    Red,
    Green,
    Blue,
    Alpha,
    Rg,
    Rgb,
    Rgba,
    Bgra,
    RedInteger,
    GreenInteger,
    BlueInteger,
    AlphaInteger,
    RgInteger,
    RgbInteger,
    RgbaInteger,
    BgraInteger,
    Depth,
    Stencil,
    DepthStencil,
}

/// How each component (or the whole packed pixel) is stored.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComponentType {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    F32,
    /// 3-3-2 bits in one byte, first component in the high bits.
    Packed332,
    /// 2-3-3 bits in one byte, first component in the low bits.
    Packed233Rev,
    Packed565,
    Packed565Rev,
    Packed4444,
    Packed4444Rev,
    Packed5551,
    Packed1555Rev,
    Packed8888,
    Packed8888Rev,
    Packed1010102,
    Packed2101010Rev,
    /// 24-bit depth over 8-bit stencil in one u32.
    Packed248,
    /// One f32 depth element, then 8-bit stencil in a second u32 element.
    PackedFloat248Rev,
}

/// Resolve a layout/type pair to a pixel format.
///
/// Pure, total lookup; `None` means the combination is not supported and
/// no conversion may be attempted for it.
pub fn resolve_combo(layout: ComponentLayout, ty: ComponentType) -> Option<PixelFormat> {
    use ComponentLayout as L;
    use ComponentType as T;
    use PixelFormat as F;

    Some(match (layout, ty) {
        (L::Red, T::U8) => F::R8Unorm,
        (L::Red, T::I8) => F::R8Snorm,
        (L::Red, T::U16) => F::R16Unorm,
        (L::Red, T::I16) => F::R16Snorm,
        (L::Red, T::U32) => F::R32Unorm,
        (L::Red, T::I32) => F::R32Snorm,
        (L::Red, T::F32) => F::R32Float,

        (L::Green, T::U8) => F::G8Unorm,
        (L::Green, T::I8) => F::G8Snorm,
        (L::Green, T::U16) => F::G16Unorm,
        (L::Green, T::I16) => F::G16Snorm,
        (L::Green, T::U32) => F::G32Unorm,
        (L::Green, T::I32) => F::G32Snorm,
        (L::Green, T::F32) => F::G32Float,

        (L::Blue, T::U8) => F::B8Unorm,
        (L::Blue, T::I8) => F::B8Snorm,
        (L::Blue, T::U16) => F::B16Unorm,
        (L::Blue, T::I16) => F::B16Snorm,
        (L::Blue, T::U32) => F::B32Unorm,
        (L::Blue, T::I32) => F::B32Snorm,
        (L::Blue, T::F32) => F::B32Float,

        (L::Alpha, T::U8) => F::A8Unorm,
        (L::Alpha, T::I8) => F::A8Snorm,
        (L::Alpha, T::U16) => F::A16Unorm,
        (L::Alpha, T::I16) => F::A16Snorm,
        (L::Alpha, T::U32) => F::A32Unorm,
        (L::Alpha, T::I32) => F::A32Snorm,
        (L::Alpha, T::F32) => F::A32Float,

        (L::Rg, T::U8) => F::Rg8Unorm,
        (L::Rg, T::I8) => F::Rg8Snorm,
        (L::Rg, T::U16) => F::Rg16Unorm,
        (L::Rg, T::I16) => F::Rg16Snorm,
        (L::Rg, T::U32) => F::Rg32Unorm,
        (L::Rg, T::I32) => F::Rg32Snorm,
        (L::Rg, T::F32) => F::Rg32Float,

        (L::Rgb, T::U8) => F::Rgb8Unorm,
        (L::Rgb, T::I8) => F::Rgb8Snorm,
        (L::Rgb, T::U16) => F::Rgb16Unorm,
        (L::Rgb, T::I16) => F::Rgb16Snorm,
        (L::Rgb, T::U32) => F::Rgb32Unorm,
        (L::Rgb, T::I32) => F::Rgb32Snorm,
        (L::Rgb, T::F32) => F::Rgb32Float,
        (L::Rgb, T::Packed332) => F::Rgb332Unorm,
        (L::Rgb, T::Packed233Rev) => F::Rgb233Unorm,
        (L::Rgb, T::Packed565) => F::Rgb565Unorm,
        (L::Rgb, T::Packed565Rev) => F::Rgb565RevUnorm,

        (L::Rgba, T::U8) => F::Rgba8Unorm,
        (L::Rgba, T::I8) => F::Rgba8Snorm,
        (L::Rgba, T::U16) => F::Rgba16Unorm,
        (L::Rgba, T::I16) => F::Rgba16Snorm,
        (L::Rgba, T::U32) => F::Rgba32Unorm,
        (L::Rgba, T::I32) => F::Rgba32Snorm,
        (L::Rgba, T::F32) => F::Rgba32Float,
        (L::Rgba, T::Packed4444) => F::Rgba4Unorm,
        (L::Rgba, T::Packed4444Rev) => F::Rgba4RevUnorm,
        (L::Rgba, T::Packed5551) => F::Rgb5A1Unorm,
        (L::Rgba, T::Packed1555Rev) => F::A1Rgb5Unorm,
        (L::Rgba, T::Packed8888) => F::Rgba8Unorm,
        (L::Rgba, T::Packed8888Rev) => F::Rgba8RevUnorm,
        (L::Rgba, T::Packed1010102) => F::Rgb10A2Unorm,
        (L::Rgba, T::Packed2101010Rev) => F::A2Rgb10Unorm,

        (L::Bgra, T::U8) => F::Bgra8Unorm,
        (L::Bgra, T::I8) => F::Bgra8Snorm,
        (L::Bgra, T::U16) => F::Bgra16Unorm,
        (L::Bgra, T::I16) => F::Bgra16Snorm,
        (L::Bgra, T::U32) => F::Bgra32Unorm,
        (L::Bgra, T::I32) => F::Bgra32Snorm,
        (L::Bgra, T::F32) => F::Bgra32Float,
        (L::Bgra, T::Packed4444) => F::Bgra4Unorm,
        (L::Bgra, T::Packed4444Rev) => F::Bgra4RevUnorm,
        (L::Bgra, T::Packed5551) => F::Bgr5A1Unorm,
        (L::Bgra, T::Packed1555Rev) => F::A1Bgr5Unorm,
        (L::Bgra, T::Packed8888) => F::Bgra8Unorm,
        (L::Bgra, T::Packed8888Rev) => F::Bgra8RevUnorm,
        (L::Bgra, T::Packed1010102) => F::Bgr10A2Unorm,
        (L::Bgra, T::Packed2101010Rev) => F::A2Bgr10Unorm,

        (L::RedInteger, T::U8) => F::R8Uint,
        (L::RedInteger, T::I8) => F::R8Sint,
        (L::RedInteger, T::U16) => F::R16Uint,
        (L::RedInteger, T::I16) => F::R16Sint,
        (L::RedInteger, T::U32) => F::R32Uint,
        (L::RedInteger, T::I32) => F::R32Sint,

        (L::GreenInteger, T::U8) => F::G8Uint,
        (L::GreenInteger, T::I8) => F::G8Sint,
        (L::GreenInteger, T::U16) => F::G16Uint,
        (L::GreenInteger, T::I16) => F::G16Sint,
        (L::GreenInteger, T::U32) => F::G32Uint,
        (L::GreenInteger, T::I32) => F::G32Sint,

        (L::BlueInteger, T::U8) => F::B8Uint,
        (L::BlueInteger, T::I8) => F::B8Sint,
        (L::BlueInteger, T::U16) => F::B16Uint,
        (L::BlueInteger, T::I16) => F::B16Sint,
        (L::BlueInteger, T::U32) => F::B32Uint,
        (L::BlueInteger, T::I32) => F::B32Sint,

        (L::AlphaInteger, T::U8) => F::A8Uint,
        (L::AlphaInteger, T::I8) => F::A8Sint,
        (L::AlphaInteger, T::U16) => F::A16Uint,
        (L::AlphaInteger, T::I16) => F::A16Sint,
        (L::AlphaInteger, T::U32) => F::A32Uint,
        (L::AlphaInteger, T::I32) => F::A32Sint,

        (L::RgInteger, T::U8) => F::Rg8Uint,
        (L::RgInteger, T::I8) => F::Rg8Sint,
        (L::RgInteger, T::U16) => F::Rg16Uint,
        (L::RgInteger, T::I16) => F::Rg16Sint,
        (L::RgInteger, T::U32) => F::Rg32Uint,
        (L::RgInteger, T::I32) => F::Rg32Sint,

        (L::RgbInteger, T::U8) => F::Rgb8Uint,
        (L::RgbInteger, T::I8) => F::Rgb8Sint,
        (L::RgbInteger, T::U16) => F::Rgb16Uint,
        (L::RgbInteger, T::I16) => F::Rgb16Sint,
        (L::RgbInteger, T::U32) => F::Rgb32Uint,
        (L::RgbInteger, T::I32) => F::Rgb32Sint,
        (L::RgbInteger, T::Packed332) => F::Rgb332Uint,
        (L::RgbInteger, T::Packed233Rev) => F::Rgb233Uint,
        (L::RgbInteger, T::Packed565) => F::Rgb565Uint,
        (L::RgbInteger, T::Packed565Rev) => F::Rgb565RevUint,

        (L::RgbaInteger, T::U8) => F::Rgba8Uint,
        (L::RgbaInteger, T::I8) => F::Rgba8Sint,
        (L::RgbaInteger, T::U16) => F::Rgba16Uint,
        (L::RgbaInteger, T::I16) => F::Rgba16Sint,
        (L::RgbaInteger, T::U32) => F::Rgba32Uint,
        (L::RgbaInteger, T::I32) => F::Rgba32Sint,
        (L::RgbaInteger, T::Packed4444) => F::Rgba4Uint,
        (L::RgbaInteger, T::Packed4444Rev) => F::Rgba4RevUint,
        (L::RgbaInteger, T::Packed5551) => F::Rgb5A1Uint,
        (L::RgbaInteger, T::Packed1555Rev) => F::A1Rgb5Uint,
        (L::RgbaInteger, T::Packed8888) => F::Rgba8Uint,
        (L::RgbaInteger, T::Packed8888Rev) => F::Rgba8RevUint,
        (L::RgbaInteger, T::Packed1010102) => F::Rgb10A2Uint,
        (L::RgbaInteger, T::Packed2101010Rev) => F::A2Rgb10Uint,

        (L::BgraInteger, T::U8) => F::Bgra8Uint,
        (L::BgraInteger, T::I8) => F::Bgra8Sint,
        (L::BgraInteger, T::U16) => F::Bgra16Uint,
        (L::BgraInteger, T::I16) => F::Bgra16Sint,
        (L::BgraInteger, T::U32) => F::Bgra32Uint,
        (L::BgraInteger, T::I32) => F::Bgra32Sint,
        (L::BgraInteger, T::Packed4444) => F::Bgra4Uint,
        (L::BgraInteger, T::Packed4444Rev) => F::Bgra4RevUint,
        (L::BgraInteger, T::Packed5551) => F::Bgr5A1Uint,
        (L::BgraInteger, T::Packed1555Rev) => F::A1Bgr5Uint,
        (L::BgraInteger, T::Packed8888) => F::Bgra8Uint,
        (L::BgraInteger, T::Packed8888Rev) => F::Bgra8RevUint,
        (L::BgraInteger, T::Packed1010102) => F::Bgr10A2Uint,
        (L::BgraInteger, T::Packed2101010Rev) => F::A2Bgr10Uint,

        (L::Depth, T::U8) => F::D8Unorm,
        (L::Depth, T::I8) => F::D8Snorm,
        (L::Depth, T::U16) => F::D16Unorm,
        (L::Depth, T::I16) => F::D16Snorm,
        (L::Depth, T::U32) => F::D32Unorm,
        (L::Depth, T::I32) => F::D32Snorm,
        (L::Depth, T::F32) => F::D32Float,

        (L::Stencil, T::U8) => F::S8Uint,
        (L::Stencil, T::I8) => F::S8Sint,
        (L::Stencil, T::U16) => F::S16Uint,
        (L::Stencil, T::I16) => F::S16Sint,
        (L::Stencil, T::U32) => F::S32Uint,
        (L::Stencil, T::I32) => F::S32Sint,
        (L::Stencil, T::F32) => F::S32Float,

        (L::DepthStencil, T::Packed248) => F::D24UnormS8Uint,
        (L::DepthStencil, T::PackedFloat248Rev) => F::D32FloatS8Uint,

        _ => return None,
    })
}
