//! Pixel format identifiers and their static conversion descriptors.
//!
//! One [`FormatDesc`] record per [`PixelFormat`], built at compile time and
//! shared process-wide. The descriptor carries everything the decode/encode
//! pipelines need: storage element type, component count, per-slot canonical
//! channel index, and the shift/max/mask triple for bit-field extraction.

/// Storage element type of one formatted pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Element {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    F32,
}

impl Element {
    /// Width of one storage element in bytes.
    pub(crate) const fn width(self) -> usize {
        match self {
            Element::U8 | Element::I8 => 1,
            Element::U16 | Element::I16 => 2,
            Element::U32 | Element::I32 | Element::F32 => 4,
        }
    }
}

/// Formats that bypass the generic per-component pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Special {
    None,
    /// 24-bit unorm depth + 8-bit stencil packed into one u32 element.
    Depth24Stencil8,
    /// 32-bit float depth element followed by a u32 stencil element.
    Depth32FloatStencil8,
}

/// Static conversion metadata for one pixel format.
pub(crate) struct FormatDesc {
    pub(crate) element: Element,
    pub(crate) components: u8,
    pub(crate) bytes_per_pixel: u8,
    /// Whether conversion pivots through `[f64; 4]` rather than `[u32; 4]`.
    pub(crate) float_domain: bool,
    /// Integer storage encodes a fixed-point fraction in [0,1] or [-1,1].
    pub(crate) normalized: bool,
    pub(crate) signed: bool,
    /// All components share one storage element via shift/mask.
    pub(crate) packed: bool,
    pub(crate) special: Special,
    /// Canonical channel slot (red=0, green=1, blue=2, alpha=3) for the
    /// n'th stored component; -1 means the slot is absent and keeps its
    /// default value.
    pub(crate) index: [i8; 4],
    pub(crate) shift: [u8; 4],
    /// Maximum representable magnitude per component. Divisor/multiplier
    /// for normalized conversion.
    pub(crate) max: [u32; 4],
    /// Extraction mask per component. Invariant: `mask == max << shift`.
    pub(crate) mask: [u32; 4],
}

/// Maximum value of an `nbits`-wide field (`2^nbits - 1` unsigned,
/// `2^(nbits-1) - 1` signed). Computed in u64 so a 32-bit shift is legal.
const fn max_value(signed: bool, nbits: u8) -> u32 {
    let bits = if signed && nbits > 0 { nbits - 1 } else { nbits };
    ((1u64 << bits) - 1) as u32
}

// Descriptor flag columns.
const FP: u8 = 1 << 0; // floating intermediate
const NORM: u8 = 1 << 1; // normalized fixed-point
const SIGNED: u8 = 1 << 2;
const PACKED: u8 = 1 << 3;

const fn desc(
    element: Element,
    components: u8,
    bytes_per_pixel: u8,
    flags: u8,
    index: [i8; 4],
    bits: [u8; 4],
    shift: [u8; 4],
) -> FormatDesc {
    let signed = flags & SIGNED != 0;
    let max = [
        max_value(signed, bits[0]),
        max_value(signed, bits[1]),
        max_value(signed, bits[2]),
        max_value(signed, bits[3]),
    ];
    FormatDesc {
        element,
        components,
        bytes_per_pixel,
        float_domain: flags & FP != 0,
        normalized: flags & NORM != 0,
        signed,
        packed: flags & PACKED != 0,
        special: Special::None,
        index,
        shift,
        max,
        mask: [
            max[0] << shift[0],
            max[1] << shift[1],
            max[2] << shift[2],
            max[3] << shift[3],
        ],
    }
}

impl FormatDesc {
    const fn with_special(mut self, special: Special) -> Self {
        self.special = special;
        self
    }
}

macro_rules! format_table {
    ($( $(#[$attr:meta])* $name:ident = $desc:expr; )+) => {
        /// Identifier for one specific binary pixel encoding.
        ///
        /// The set is closed and known at build time; every identifier has a
        /// descriptor, so metadata lookups are total. Obtain one from
        /// [`resolve_combo`](crate::resolve_combo) or name it directly.
        #[repr(u8)]
        #[non_exhaustive]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum PixelFormat {
            $( $(#[$attr])* $name, )+
        }

        impl PixelFormat {
            /// Every supported format, in declaration order.
            pub const ALL: &'static [PixelFormat] = &[ $(PixelFormat::$name,)+ ];
        }

        static DESCRIPTORS: [FormatDesc; PixelFormat::ALL.len()] = [ $($desc,)+ ];
    };
}

use Element::{F32, I8, I16, I32, U8, U16, U32};

format_table! {
    // Single red channel
    R8Unorm = desc(U8, 1, 1, FP | NORM, [0, -1, -1, -1], [8, 0, 0, 0], [0, 0, 0, 0]);
    R8Snorm = desc(I8, 1, 1, FP | NORM | SIGNED, [0, -1, -1, -1], [8, 0, 0, 0], [0, 0, 0, 0]);
    R16Unorm = desc(U16, 1, 2, FP | NORM, [0, -1, -1, -1], [16, 0, 0, 0], [0, 0, 0, 0]);
    R16Snorm = desc(I16, 1, 2, FP | NORM | SIGNED, [0, -1, -1, -1], [16, 0, 0, 0], [0, 0, 0, 0]);
    R32Unorm = desc(U32, 1, 4, FP | NORM, [0, -1, -1, -1], [32, 0, 0, 0], [0, 0, 0, 0]);
    R32Snorm = desc(I32, 1, 4, FP | NORM | SIGNED, [0, -1, -1, -1], [32, 0, 0, 0], [0, 0, 0, 0]);
    R32Float = desc(F32, 1, 4, FP, [0, -1, -1, -1], [0, 0, 0, 0], [0, 0, 0, 0]);

    // Single green channel
    G8Unorm = desc(U8, 1, 1, FP | NORM, [1, -1, -1, -1], [8, 0, 0, 0], [0, 0, 0, 0]);
    G8Snorm = desc(I8, 1, 1, FP | NORM | SIGNED, [1, -1, -1, -1], [8, 0, 0, 0], [0, 0, 0, 0]);
    G16Unorm = desc(U16, 1, 2, FP | NORM, [1, -1, -1, -1], [16, 0, 0, 0], [0, 0, 0, 0]);
    G16Snorm = desc(I16, 1, 2, FP | NORM | SIGNED, [1, -1, -1, -1], [16, 0, 0, 0], [0, 0, 0, 0]);
    G32Unorm = desc(U32, 1, 4, FP | NORM, [1, -1, -1, -1], [32, 0, 0, 0], [0, 0, 0, 0]);
    G32Snorm = desc(I32, 1, 4, FP | NORM | SIGNED, [1, -1, -1, -1], [32, 0, 0, 0], [0, 0, 0, 0]);
    G32Float = desc(F32, 1, 4, FP, [1, -1, -1, -1], [0, 0, 0, 0], [0, 0, 0, 0]);

    // Single blue channel
    B8Unorm = desc(U8, 1, 1, FP | NORM, [2, -1, -1, -1], [8, 0, 0, 0], [0, 0, 0, 0]);
    B8Snorm = desc(I8, 1, 1, FP | NORM | SIGNED, [2, -1, -1, -1], [8, 0, 0, 0], [0, 0, 0, 0]);
    B16Unorm = desc(U16, 1, 2, FP | NORM, [2, -1, -1, -1], [16, 0, 0, 0], [0, 0, 0, 0]);
    B16Snorm = desc(I16, 1, 2, FP | NORM | SIGNED, [2, -1, -1, -1], [16, 0, 0, 0], [0, 0, 0, 0]);
    B32Unorm = desc(U32, 1, 4, FP | NORM, [2, -1, -1, -1], [32, 0, 0, 0], [0, 0, 0, 0]);
    B32Snorm = desc(I32, 1, 4, FP | NORM | SIGNED, [2, -1, -1, -1], [32, 0, 0, 0], [0, 0, 0, 0]);
    B32Float = desc(F32, 1, 4, FP, [2, -1, -1, -1], [0, 0, 0, 0], [0, 0, 0, 0]);

    // Single alpha channel
    A8Unorm = desc(U8, 1, 1, FP | NORM, [3, -1, -1, -1], [8, 0, 0, 0], [0, 0, 0, 0]);
    A8Snorm = desc(I8, 1, 1, FP | NORM | SIGNED, [3, -1, -1, -1], [8, 0, 0, 0], [0, 0, 0, 0]);
    A16Unorm = desc(U16, 1, 2, FP | NORM, [3, -1, -1, -1], [16, 0, 0, 0], [0, 0, 0, 0]);
    A16Snorm = desc(I16, 1, 2, FP | NORM | SIGNED, [3, -1, -1, -1], [16, 0, 0, 0], [0, 0, 0, 0]);
    A32Unorm = desc(U32, 1, 4, FP | NORM, [3, -1, -1, -1], [32, 0, 0, 0], [0, 0, 0, 0]);
    A32Snorm = desc(I32, 1, 4, FP | NORM | SIGNED, [3, -1, -1, -1], [32, 0, 0, 0], [0, 0, 0, 0]);
    A32Float = desc(F32, 1, 4, FP, [3, -1, -1, -1], [0, 0, 0, 0], [0, 0, 0, 0]);

    // Red-green
    Rg8Unorm = desc(U8, 2, 2, FP | NORM, [0, 1, -1, -1], [8, 8, 0, 0], [0, 0, 0, 0]);
    Rg8Snorm = desc(I8, 2, 2, FP | NORM | SIGNED, [0, 1, -1, -1], [8, 8, 0, 0], [0, 0, 0, 0]);
    Rg16Unorm = desc(U16, 2, 4, FP | NORM, [0, 1, -1, -1], [16, 16, 0, 0], [0, 0, 0, 0]);
    Rg16Snorm = desc(I16, 2, 4, FP | NORM | SIGNED, [0, 1, -1, -1], [16, 16, 0, 0], [0, 0, 0, 0]);
    Rg32Unorm = desc(U32, 2, 8, FP | NORM, [0, 1, -1, -1], [32, 32, 0, 0], [0, 0, 0, 0]);
    Rg32Snorm = desc(I32, 2, 8, FP | NORM | SIGNED, [0, 1, -1, -1], [32, 32, 0, 0], [0, 0, 0, 0]);
    Rg32Float = desc(F32, 2, 8, FP, [0, 1, -1, -1], [0, 0, 0, 0], [0, 0, 0, 0]);

    // RGB
    Rgb8Unorm = desc(U8, 3, 3, FP | NORM, [0, 1, 2, -1], [8, 8, 8, 0], [0, 0, 0, 0]);
    Rgb8Snorm = desc(I8, 3, 3, FP | NORM | SIGNED, [0, 1, 2, -1], [8, 8, 8, 0], [0, 0, 0, 0]);
    Rgb16Unorm = desc(U16, 3, 6, FP | NORM, [0, 1, 2, -1], [16, 16, 16, 0], [0, 0, 0, 0]);
    Rgb16Snorm = desc(I16, 3, 6, FP | NORM | SIGNED, [0, 1, 2, -1], [16, 16, 16, 0], [0, 0, 0, 0]);
    Rgb32Unorm = desc(U32, 3, 12, FP | NORM, [0, 1, 2, -1], [32, 32, 32, 0], [0, 0, 0, 0]);
    Rgb32Snorm = desc(I32, 3, 12, FP | NORM | SIGNED, [0, 1, 2, -1], [32, 32, 32, 0], [0, 0, 0, 0]);
    Rgb32Float = desc(F32, 3, 12, FP, [0, 1, 2, -1], [0, 0, 0, 0], [0, 0, 0, 0]);

    Rgb332Unorm = desc(U8, 3, 1, FP | NORM | PACKED, [0, 1, 2, -1], [3, 3, 2, 0], [5, 2, 0, 0]);
    Rgb233Unorm = desc(U8, 3, 1, FP | NORM | PACKED, [0, 1, 2, -1], [3, 3, 2, 0], [0, 3, 6, 0]);
    Rgb565Unorm = desc(U16, 3, 2, FP | NORM | PACKED, [0, 1, 2, -1], [5, 6, 5, 0], [11, 5, 0, 0]);
    Rgb565RevUnorm = desc(U16, 3, 2, FP | NORM | PACKED, [0, 1, 2, -1], [5, 6, 5, 0], [0, 5, 11, 0]);

    // RGBA
    Rgba8Unorm = desc(U32, 4, 4, FP | NORM | PACKED, [0, 1, 2, 3], [8, 8, 8, 8], [0, 8, 16, 24]);
    Rgba8Snorm = desc(U32, 4, 4, FP | NORM | SIGNED | PACKED, [0, 1, 2, 3], [8, 8, 8, 8], [0, 8, 16, 24]);
    Rgba16Unorm = desc(U16, 4, 8, FP | NORM, [0, 1, 2, 3], [16, 16, 16, 16], [0, 0, 0, 0]);
    Rgba16Snorm = desc(I16, 4, 8, FP | NORM | SIGNED, [0, 1, 2, 3], [16, 16, 16, 16], [0, 0, 0, 0]);
    Rgba32Unorm = desc(U32, 4, 16, FP | NORM, [0, 1, 2, 3], [32, 32, 32, 32], [0, 0, 0, 0]);
    Rgba32Snorm = desc(I32, 4, 16, FP | NORM | SIGNED, [0, 1, 2, 3], [32, 32, 32, 32], [0, 0, 0, 0]);
    Rgba32Float = desc(F32, 4, 16, FP, [0, 1, 2, 3], [0, 0, 0, 0], [0, 0, 0, 0]);

    Rgba4Unorm = desc(U16, 4, 2, FP | NORM | PACKED, [0, 1, 2, 3], [4, 4, 4, 4], [12, 8, 4, 0]);
    Rgba4RevUnorm = desc(U16, 4, 2, FP | NORM | PACKED, [0, 1, 2, 3], [4, 4, 4, 4], [0, 4, 8, 12]);
    Rgb5A1Unorm = desc(U16, 4, 2, FP | NORM | PACKED, [0, 1, 2, 3], [5, 5, 5, 1], [11, 6, 1, 0]);
    A1Rgb5Unorm = desc(U16, 4, 2, FP | NORM | PACKED, [0, 1, 2, 3], [5, 5, 5, 1], [0, 5, 10, 15]);
    Rgba8RevUnorm = desc(U32, 4, 4, FP | NORM | PACKED, [0, 1, 2, 3], [8, 8, 8, 8], [24, 16, 8, 0]);
    Rgb10A2Unorm = desc(U32, 4, 4, FP | NORM | PACKED, [0, 1, 2, 3], [10, 10, 10, 2], [22, 12, 2, 0]);
    A2Rgb10Unorm = desc(U32, 4, 4, FP | NORM | PACKED, [0, 1, 2, 3], [10, 10, 10, 2], [0, 10, 20, 30]);

    // BGRA
    Bgra8Unorm = desc(U32, 4, 4, FP | NORM | PACKED, [0, 1, 2, 3], [8, 8, 8, 8], [16, 8, 0, 24]);
    Bgra8Snorm = desc(U32, 4, 4, FP | NORM | SIGNED | PACKED, [0, 1, 2, 3], [8, 8, 8, 8], [16, 8, 0, 24]);
    Bgra16Unorm = desc(U16, 4, 8, FP | NORM, [2, 1, 0, 3], [16, 16, 16, 16], [0, 0, 0, 0]);
    Bgra16Snorm = desc(I16, 4, 8, FP | NORM | SIGNED, [2, 1, 0, 3], [16, 16, 16, 16], [0, 0, 0, 0]);
    Bgra32Unorm = desc(U32, 4, 16, FP | NORM, [2, 1, 0, 3], [32, 32, 32, 32], [0, 0, 0, 0]);
    Bgra32Snorm = desc(I32, 4, 16, FP | NORM | SIGNED, [2, 1, 0, 3], [32, 32, 32, 32], [0, 0, 0, 0]);
    Bgra32Float = desc(F32, 4, 16, FP, [2, 1, 0, 3], [0, 0, 0, 0], [0, 0, 0, 0]);

    Bgra4Unorm = desc(U16, 4, 2, FP | NORM | PACKED, [0, 1, 2, 3], [4, 4, 4, 4], [4, 8, 12, 0]);
    Bgra4RevUnorm = desc(U16, 4, 2, FP | NORM | PACKED, [0, 1, 2, 3], [4, 4, 4, 4], [0, 12, 8, 4]);
    Bgr5A1Unorm = desc(U16, 4, 2, FP | NORM | PACKED, [0, 1, 2, 3], [5, 5, 5, 1], [1, 6, 11, 0]);
    A1Bgr5Unorm = desc(U16, 4, 2, FP | NORM | PACKED, [0, 1, 2, 3], [5, 5, 5, 1], [10, 5, 0, 15]);
    Bgra8RevUnorm = desc(U32, 4, 4, FP | NORM | PACKED, [0, 1, 2, 3], [8, 8, 8, 8], [24, 0, 8, 16]);
    Bgr10A2Unorm = desc(U32, 4, 4, FP | NORM | PACKED, [0, 1, 2, 3], [10, 10, 10, 2], [2, 12, 22, 0]);
    A2Bgr10Unorm = desc(U32, 4, 4, FP | NORM | PACKED, [0, 1, 2, 3], [10, 10, 10, 2], [20, 10, 0, 30]);

    // Single red channel, pure integer
    R8Uint = desc(U8, 1, 1, 0, [0, -1, -1, -1], [8, 0, 0, 0], [0, 0, 0, 0]);
    R8Sint = desc(I8, 1, 1, SIGNED, [0, -1, -1, -1], [8, 0, 0, 0], [0, 0, 0, 0]);
    R16Uint = desc(U16, 1, 2, 0, [0, -1, -1, -1], [16, 0, 0, 0], [0, 0, 0, 0]);
    R16Sint = desc(I16, 1, 2, SIGNED, [0, -1, -1, -1], [16, 0, 0, 0], [0, 0, 0, 0]);
    R32Uint = desc(U32, 1, 4, 0, [0, -1, -1, -1], [32, 0, 0, 0], [0, 0, 0, 0]);
    R32Sint = desc(I32, 1, 4, SIGNED, [0, -1, -1, -1], [32, 0, 0, 0], [0, 0, 0, 0]);

    // Single green channel, pure integer
    G8Uint = desc(U8, 1, 1, 0, [1, -1, -1, -1], [8, 0, 0, 0], [0, 0, 0, 0]);
    G8Sint = desc(I8, 1, 1, SIGNED, [1, -1, -1, -1], [8, 0, 0, 0], [0, 0, 0, 0]);
    G16Uint = desc(U16, 1, 2, 0, [1, -1, -1, -1], [16, 0, 0, 0], [0, 0, 0, 0]);
    G16Sint = desc(I16, 1, 2, SIGNED, [1, -1, -1, -1], [16, 0, 0, 0], [0, 0, 0, 0]);
    G32Uint = desc(U32, 1, 4, 0, [1, -1, -1, -1], [32, 0, 0, 0], [0, 0, 0, 0]);
    G32Sint = desc(I32, 1, 4, SIGNED, [1, -1, -1, -1], [32, 0, 0, 0], [0, 0, 0, 0]);

    // Single blue channel, pure integer
    B8Uint = desc(U8, 1, 1, 0, [2, -1, -1, -1], [8, 0, 0, 0], [0, 0, 0, 0]);
    B8Sint = desc(I8, 1, 1, SIGNED, [2, -1, -1, -1], [8, 0, 0, 0], [0, 0, 0, 0]);
    B16Uint = desc(U16, 1, 2, 0, [2, -1, -1, -1], [16, 0, 0, 0], [0, 0, 0, 0]);
    B16Sint = desc(I16, 1, 2, SIGNED, [2, -1, -1, -1], [16, 0, 0, 0], [0, 0, 0, 0]);
    B32Uint = desc(U32, 1, 4, 0, [2, -1, -1, -1], [32, 0, 0, 0], [0, 0, 0, 0]);
    B32Sint = desc(I32, 1, 4, SIGNED, [2, -1, -1, -1], [32, 0, 0, 0], [0, 0, 0, 0]);

    // Single alpha channel, pure integer
    A8Uint = desc(U8, 1, 1, 0, [3, -1, -1, -1], [8, 0, 0, 0], [0, 0, 0, 0]);
    A8Sint = desc(I8, 1, 1, SIGNED, [3, -1, -1, -1], [8, 0, 0, 0], [0, 0, 0, 0]);
    A16Uint = desc(U16, 1, 2, 0, [3, -1, -1, -1], [16, 0, 0, 0], [0, 0, 0, 0]);
    A16Sint = desc(I16, 1, 2, SIGNED, [3, -1, -1, -1], [16, 0, 0, 0], [0, 0, 0, 0]);
    A32Uint = desc(U32, 1, 4, 0, [3, -1, -1, -1], [32, 0, 0, 0], [0, 0, 0, 0]);
    A32Sint = desc(I32, 1, 4, SIGNED, [3, -1, -1, -1], [32, 0, 0, 0], [0, 0, 0, 0]);

    // Red-green, pure integer
    Rg8Uint = desc(U8, 2, 2, 0, [0, 1, -1, -1], [8, 8, 0, 0], [0, 0, 0, 0]);
    Rg8Sint = desc(I8, 2, 2, SIGNED, [0, 1, -1, -1], [8, 8, 0, 0], [0, 0, 0, 0]);
    Rg16Uint = desc(U16, 2, 4, 0, [0, 1, -1, -1], [16, 16, 0, 0], [0, 0, 0, 0]);
    Rg16Sint = desc(I16, 2, 4, SIGNED, [0, 1, -1, -1], [16, 16, 0, 0], [0, 0, 0, 0]);
    Rg32Uint = desc(U32, 2, 8, 0, [0, 1, -1, -1], [32, 32, 0, 0], [0, 0, 0, 0]);
    Rg32Sint = desc(I32, 2, 8, SIGNED, [0, 1, -1, -1], [32, 32, 0, 0], [0, 0, 0, 0]);

    // RGB, pure integer
    Rgb8Uint = desc(U8, 3, 3, 0, [0, 1, 2, -1], [8, 8, 8, 0], [0, 0, 0, 0]);
    Rgb8Sint = desc(I8, 3, 3, SIGNED, [0, 1, 2, -1], [8, 8, 8, 0], [0, 0, 0, 0]);
    Rgb16Uint = desc(U16, 3, 6, 0, [0, 1, 2, -1], [16, 16, 16, 0], [0, 0, 0, 0]);
    Rgb16Sint = desc(I16, 3, 6, SIGNED, [0, 1, 2, -1], [16, 16, 16, 0], [0, 0, 0, 0]);
    Rgb32Uint = desc(U32, 3, 12, 0, [0, 1, 2, -1], [32, 32, 32, 0], [0, 0, 0, 0]);
    Rgb32Sint = desc(I32, 3, 12, SIGNED, [0, 1, 2, -1], [32, 32, 32, 0], [0, 0, 0, 0]);

    Rgb332Uint = desc(U8, 3, 1, PACKED, [0, 1, 2, -1], [3, 3, 2, 0], [5, 2, 0, 0]);
    Rgb233Uint = desc(U8, 3, 1, PACKED, [0, 1, 2, -1], [3, 3, 2, 0], [0, 3, 6, 0]);
    Rgb565Uint = desc(U16, 3, 2, PACKED, [0, 1, 2, -1], [5, 6, 5, 0], [11, 5, 0, 0]);
    Rgb565RevUint = desc(U16, 3, 2, PACKED, [0, 1, 2, -1], [5, 6, 5, 0], [0, 5, 11, 0]);

    // RGBA, pure integer
    Rgba8Uint = desc(U32, 4, 4, PACKED, [0, 1, 2, 3], [8, 8, 8, 8], [0, 8, 16, 24]);
    Rgba8Sint = desc(U32, 4, 4, SIGNED | PACKED, [0, 1, 2, 3], [8, 8, 8, 8], [0, 8, 16, 24]);
    Rgba16Uint = desc(U16, 4, 8, 0, [0, 1, 2, 3], [16, 16, 16, 16], [0, 0, 0, 0]);
    Rgba16Sint = desc(I16, 4, 8, SIGNED, [0, 1, 2, 3], [16, 16, 16, 16], [0, 0, 0, 0]);
    Rgba32Uint = desc(U32, 4, 16, 0, [0, 1, 2, 3], [32, 32, 32, 32], [0, 0, 0, 0]);
    Rgba32Sint = desc(I32, 4, 16, SIGNED, [0, 1, 2, 3], [32, 32, 32, 32], [0, 0, 0, 0]);

    Rgba4Uint = desc(U16, 4, 2, PACKED, [0, 1, 2, 3], [4, 4, 4, 4], [12, 8, 4, 0]);
    Rgba4RevUint = desc(U16, 4, 2, PACKED, [0, 1, 2, 3], [4, 4, 4, 4], [0, 4, 8, 12]);
    Rgb5A1Uint = desc(U16, 4, 2, PACKED, [0, 1, 2, 3], [5, 5, 5, 1], [11, 6, 1, 0]);
    A1Rgb5Uint = desc(U16, 4, 2, PACKED, [0, 1, 2, 3], [5, 5, 5, 1], [0, 5, 10, 15]);
    Rgba8RevUint = desc(U32, 4, 4, PACKED, [0, 1, 2, 3], [8, 8, 8, 8], [24, 16, 8, 0]);
    Rgb10A2Uint = desc(U32, 4, 4, PACKED, [0, 1, 2, 3], [10, 10, 10, 2], [22, 12, 2, 0]);
    A2Rgb10Uint = desc(U32, 4, 4, PACKED, [0, 1, 2, 3], [10, 10, 10, 2], [0, 10, 20, 30]);

    // BGRA, pure integer
    Bgra8Uint = desc(U32, 4, 4, PACKED, [0, 1, 2, 3], [8, 8, 8, 8], [16, 8, 0, 24]);
    Bgra8Sint = desc(U32, 4, 4, SIGNED | PACKED, [0, 1, 2, 3], [8, 8, 8, 8], [16, 8, 0, 24]);
    Bgra16Uint = desc(U16, 4, 8, 0, [2, 1, 0, 3], [16, 16, 16, 16], [0, 0, 0, 0]);
    Bgra16Sint = desc(I16, 4, 8, SIGNED, [2, 1, 0, 3], [16, 16, 16, 16], [0, 0, 0, 0]);
    Bgra32Uint = desc(U32, 4, 16, 0, [2, 1, 0, 3], [32, 32, 32, 32], [0, 0, 0, 0]);
    Bgra32Sint = desc(I32, 4, 16, SIGNED, [2, 1, 0, 3], [32, 32, 32, 32], [0, 0, 0, 0]);

    Bgra4Uint = desc(U16, 4, 2, PACKED, [0, 1, 2, 3], [4, 4, 4, 4], [4, 8, 12, 0]);
    Bgra4RevUint = desc(U16, 4, 2, PACKED, [0, 1, 2, 3], [4, 4, 4, 4], [0, 12, 8, 4]);
    Bgr5A1Uint = desc(U16, 4, 2, PACKED, [0, 1, 2, 3], [5, 5, 5, 1], [1, 6, 11, 0]);
    A1Bgr5Uint = desc(U16, 4, 2, PACKED, [0, 1, 2, 3], [5, 5, 5, 1], [10, 5, 0, 15]);
    Bgra8RevUint = desc(U32, 4, 4, PACKED, [0, 1, 2, 3], [8, 8, 8, 8], [24, 0, 8, 16]);
    Bgr10A2Uint = desc(U32, 4, 4, PACKED, [0, 1, 2, 3], [10, 10, 10, 2], [2, 12, 22, 0]);
    A2Bgr10Uint = desc(U32, 4, 4, PACKED, [0, 1, 2, 3], [10, 10, 10, 2], [20, 10, 0, 30]);

    // Depth
    D8Unorm = desc(U8, 1, 1, FP | NORM, [0, -1, -1, -1], [8, 0, 0, 0], [0, 0, 0, 0]);
    D8Snorm = desc(I8, 1, 1, FP | NORM | SIGNED, [0, -1, -1, -1], [8, 0, 0, 0], [0, 0, 0, 0]);
    D16Unorm = desc(U16, 1, 2, FP | NORM, [0, -1, -1, -1], [16, 0, 0, 0], [0, 0, 0, 0]);
    D16Snorm = desc(I16, 1, 2, FP | NORM | SIGNED, [0, -1, -1, -1], [16, 0, 0, 0], [0, 0, 0, 0]);
    D32Unorm = desc(U32, 1, 4, FP | NORM, [0, -1, -1, -1], [32, 0, 0, 0], [0, 0, 0, 0]);
    D32Snorm = desc(I32, 1, 4, FP | NORM | SIGNED, [0, -1, -1, -1], [32, 0, 0, 0], [0, 0, 0, 0]);
    D32Float = desc(F32, 1, 4, FP, [0, -1, -1, -1], [0, 0, 0, 0], [0, 0, 0, 0]);

    // Stencil
    S8Uint = desc(U8, 1, 1, 0, [0, -1, -1, -1], [0, 0, 0, 0], [0, 0, 0, 0]);
    S8Sint = desc(I8, 1, 1, SIGNED, [0, -1, -1, -1], [0, 0, 0, 0], [0, 0, 0, 0]);
    S16Uint = desc(U16, 1, 2, 0, [0, -1, -1, -1], [0, 0, 0, 0], [0, 0, 0, 0]);
    S16Sint = desc(I16, 1, 2, SIGNED, [0, -1, -1, -1], [0, 0, 0, 0], [0, 0, 0, 0]);
    S32Uint = desc(U32, 1, 4, 0, [0, -1, -1, -1], [0, 0, 0, 0], [0, 0, 0, 0]);
    S32Sint = desc(I32, 1, 4, SIGNED, [0, -1, -1, -1], [0, 0, 0, 0], [0, 0, 0, 0]);
    S32Float = desc(F32, 1, 4, 0, [0, -1, -1, -1], [0, 0, 0, 0], [0, 0, 0, 0]);

    // Combined depth+stencil. Depth occupies the high bits of the packed
    // variant so the two fields never overlap.
    D24UnormS8Uint = desc(U32, 2, 4, FP, [0, 1, -1, -1], [24, 8, 0, 0], [8, 0, 0, 0])
        .with_special(Special::Depth24Stencil8);
    D32FloatS8Uint = desc(F32, 2, 8, FP, [0, 1, -1, -1], [0, 8, 0, 0], [0, 0, 0, 0])
        .with_special(Special::Depth32FloatStencil8);
}

impl PixelFormat {
    /// The conversion descriptor for this format.
    pub(crate) fn describe(self) -> &'static FormatDesc {
        &DESCRIPTORS[self as usize]
    }

    /// Bytes occupied by one formatted pixel.
    pub fn bytes_per_pixel(self) -> usize {
        self.describe().bytes_per_pixel as usize
    }

    /// Number of logical components (1-4). Combined depth+stencil counts
    /// as 2.
    pub fn components(self) -> usize {
        self.describe().components as usize
    }

    /// Bytes per image row at the given width, padded up to the next
    /// multiple of 4.
    pub fn row_stride(self, width: u32) -> u64 {
        (self.bytes_per_pixel() as u64 * u64::from(width) + 3) & !3
    }

    /// Whether conversion through this format pivots on floating-point
    /// intermediate values. Source and destination of one conversion must
    /// agree on this.
    pub fn needs_float_intermediate(self) -> bool {
        self.describe().float_domain
    }

    /// Whether this is one of the combined depth+stencil encodings.
    pub fn is_depth_stencil(self) -> bool {
        !matches!(self.describe().special, Special::None)
    }

    /// Whether all components share one storage element via bit fields.
    pub fn is_packed(self) -> bool {
        self.describe().packed
    }

    /// Whether integer storage encodes a fixed-point fraction in `[0, 1]`
    /// (unsigned) or `[-1, 1]` (signed).
    pub fn is_normalized(self) -> bool {
        self.describe().normalized
    }

    /// Whether the storage type is signed.
    pub fn is_signed(self) -> bool {
        self.describe().signed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_is_max_shifted() {
        for fmt in PixelFormat::ALL {
            let d = fmt.describe();
            for c in 0..4 {
                assert_eq!(
                    d.mask[c],
                    d.max[c] << d.shift[c],
                    "{fmt:?} component {c}"
                );
            }
        }
    }

    #[test]
    fn unpacked_formats_have_zero_shift() {
        for fmt in PixelFormat::ALL {
            let d = fmt.describe();
            if !d.packed && matches!(d.special, Special::None) {
                assert_eq!(d.shift, [0, 0, 0, 0], "{fmt:?}");
            }
        }
    }

    #[test]
    fn packed_masks_are_disjoint_and_fit_the_element() {
        for fmt in PixelFormat::ALL {
            let d = fmt.describe();
            if !d.packed && matches!(d.special, Special::None) {
                continue;
            }
            let element_mask = match d.element.width() {
                1 => 0xFFu32,
                2 => 0xFFFF,
                _ => 0xFFFF_FFFF,
            };
            let mut seen = 0u32;
            for c in 0..d.components as usize {
                if d.index[c] < 0 {
                    continue;
                }
                // Stencil of the split depth+stencil format lives in a
                // second u32 element, disjoint by construction.
                if matches!(d.special, Special::Depth32FloatStencil8) && c == 1 {
                    continue;
                }
                assert_eq!(seen & d.mask[c], 0, "{fmt:?} component {c} overlaps");
                assert_eq!(
                    d.mask[c] & !element_mask,
                    0,
                    "{fmt:?} component {c} exceeds element width"
                );
                seen |= d.mask[c];
            }
        }
    }

    #[test]
    fn component_counts_match_indices() {
        for fmt in PixelFormat::ALL {
            let d = fmt.describe();
            assert!((1..=4).contains(&d.components), "{fmt:?}");
            for c in 0..4usize {
                if c >= d.components as usize {
                    assert_eq!(d.index[c], -1, "{fmt:?} slot {c} beyond components");
                } else {
                    assert!((-1..4).contains(&d.index[c]), "{fmt:?} slot {c}");
                }
            }
        }
    }

    #[test]
    fn bytes_per_pixel_is_consistent() {
        for fmt in PixelFormat::ALL {
            let d = fmt.describe();
            let expected = match d.special {
                Special::Depth24Stencil8 => 4,
                Special::Depth32FloatStencil8 => 8,
                Special::None if d.packed => d.element.width(),
                Special::None => d.element.width() * d.components as usize,
            };
            assert_eq!(d.bytes_per_pixel as usize, expected, "{fmt:?}");
        }
    }

    #[test]
    fn row_stride_rounds_to_four_bytes() {
        assert_eq!(PixelFormat::R8Unorm.row_stride(3), 4);
        assert_eq!(PixelFormat::Rgba8Unorm.row_stride(3), 12);
        assert_eq!(PixelFormat::Rgb8Unorm.row_stride(3), 12);
        assert_eq!(PixelFormat::Rgb8Unorm.row_stride(1), 4);
        assert_eq!(PixelFormat::R8Unorm.row_stride(0), 0);
    }

    #[test]
    fn signed_maxima_halve_the_range() {
        assert_eq!(PixelFormat::R8Snorm.describe().max[0], 127);
        assert_eq!(PixelFormat::R16Snorm.describe().max[0], 32767);
        assert_eq!(PixelFormat::R32Snorm.describe().max[0], 0x7FFF_FFFF);
        assert_eq!(PixelFormat::R8Unorm.describe().max[0], 255);
        assert_eq!(PixelFormat::R32Unorm.describe().max[0], 0xFFFF_FFFF);
    }
}
