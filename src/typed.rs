//! Typed whole-image conversions over [`rgb`] pixel types.
//!
//! Available with the `rgb` feature; the `imgref` feature adds
//! [`convert_image`] over [`imgref`] 2D views.

use alloc::vec;
use alloc::vec::Vec;

use enough::Stop;
use rgb::{AsPixels, Bgra, ComponentBytes, Gray, Rgb, Rgba};

use crate::error::ConvertError;
use crate::format::PixelFormat;
use crate::ConvertRequest;

mod sealed {
    pub trait Sealed {}
}

/// `rgb` pixel types with an unambiguous engine encoding.
///
/// The four-byte formats backing [`Rgba<u8>`] and [`Bgra<u8>`] are packed
/// u32 encodings; the byte layouts match on little-endian targets, which is
/// how every producer of such buffers lays them out.
pub trait FormatPixel: Copy + sealed::Sealed {
    /// The engine format with this type's memory layout.
    const FORMAT: PixelFormat;
}

macro_rules! format_pixel {
    ($($ty:ty => $fmt:ident,)+) => {
        $(
            impl sealed::Sealed for $ty {}
            impl FormatPixel for $ty {
                const FORMAT: PixelFormat = PixelFormat::$fmt;
            }
        )+
    };
}

format_pixel! {
    Gray<u8> => R8Unorm,
    Rgb<u8> => Rgb8Unorm,
    Rgba<u8> => Rgba8Unorm,
    Bgra<u8> => Bgra8Unorm,
}

/// Convert a packed pixel slice (no row padding) into another typed layout.
pub fn convert_slice<S, D>(
    src: &[S],
    width: u32,
    height: u32,
    stop: impl Stop,
) -> Result<Vec<D>, ConvertError>
where
    S: FormatPixel,
    D: FormatPixel,
    [S]: ComponentBytes<u8>,
    [u8]: AsPixels<D>,
{
    let w = width as usize;
    let h = height as usize;
    let needed = w
        .checked_mul(h)
        .ok_or(ConvertError::DimensionsTooLarge { width, height })?;
    if src.len() < needed {
        return Err(ConvertError::BufferTooSmall {
            needed,
            actual: src.len(),
        });
    }

    let src_bpp = S::FORMAT.bytes_per_pixel();
    let src_rs = usize::try_from(S::FORMAT.row_stride(width))
        .map_err(|_| ConvertError::DimensionsTooLarge { width, height })?;
    let padded_len = src_rs
        .checked_mul(h)
        .ok_or(ConvertError::DimensionsTooLarge { width, height })?;
    let mut padded = vec![0u8; padded_len];
    for y in 0..h {
        let row = src[y * w..(y + 1) * w].as_bytes();
        padded[y * src_rs..y * src_rs + w * src_bpp].copy_from_slice(row);
    }

    let out = ConvertRequest::new(S::FORMAT, D::FORMAT).convert_to_vec(&padded, width, height, stop)?;

    let dst_bpp = D::FORMAT.bytes_per_pixel();
    let dst_rs = D::FORMAT.row_stride(width) as usize;
    let mut pixels: Vec<D> = Vec::with_capacity(needed);
    for y in 0..h {
        let row = &out[y * dst_rs..][..w * dst_bpp];
        pixels.extend_from_slice(row.as_pixels());
    }
    Ok(pixels)
}

/// Convert a whole [`imgref::ImgRef`] into a new [`imgref::ImgVec`].
///
/// Handles strided source views; the result is packed (stride == width).
#[cfg(feature = "imgref")]
pub fn convert_image<S, D>(
    src: imgref::ImgRef<'_, S>,
    stop: impl Stop,
) -> Result<imgref::ImgVec<D>, ConvertError>
where
    S: FormatPixel,
    D: FormatPixel,
    [S]: ComponentBytes<u8>,
    [u8]: AsPixels<D>,
{
    let too_large = || ConvertError::DimensionsTooLarge {
        width: u32::MAX,
        height: u32::MAX,
    };
    let width = u32::try_from(src.width()).map_err(|_| too_large())?;
    let height = u32::try_from(src.height()).map_err(|_| too_large())?;

    let mut packed: Vec<S> = Vec::with_capacity(src.width() * src.height());
    for row in src.rows() {
        packed.extend_from_slice(row);
    }
    let pixels = convert_slice(&packed, width, height, stop)?;
    Ok(imgref::ImgVec::new(pixels, src.width(), src.height()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use enough::Unstoppable;

    #[test]
    fn rgba_to_bgra_swaps_channels() {
        let src = [Rgba::new(1u8, 2, 3, 4), Rgba::new(250, 128, 0, 255)];
        let out: Vec<Bgra<u8>> = convert_slice(&src, 2, 1, Unstoppable).unwrap();
        assert_eq!(out[0], Bgra { b: 3, g: 2, r: 1, a: 4 });
        assert_eq!(out[1], Bgra { b: 0, g: 128, r: 250, a: 255 });
    }

    #[test]
    fn gray_widens_with_opaque_alpha() {
        let src = [Gray::new(0u8), Gray::new(255), Gray::new(7)];
        // R8Unorm carries a single red channel; green and blue stay at the
        // intermediate default of zero.
        let out: Vec<Rgba<u8>> = convert_slice(&src, 3, 1, Unstoppable).unwrap();
        assert_eq!(out[0], Rgba::new(0, 0, 0, 255));
        assert_eq!(out[1], Rgba::new(255, 0, 0, 255));
        assert_eq!(out[2], Rgba::new(7, 0, 0, 255));
    }

    #[test]
    fn odd_width_row_padding_is_stripped() {
        // 3 wide x 2 high Rgb8 (9-byte rows padded to 12 internally).
        let src = [
            Rgb::new(1u8, 2, 3),
            Rgb::new(4, 5, 6),
            Rgb::new(7, 8, 9),
            Rgb::new(10, 11, 12),
            Rgb::new(13, 14, 15),
            Rgb::new(16, 17, 18),
        ];
        let out: Vec<Rgba<u8>> = convert_slice(&src, 3, 2, Unstoppable).unwrap();
        assert_eq!(out.len(), 6);
        assert_eq!(out[3], Rgba::new(10, 11, 12, 255));
        assert_eq!(out[5], Rgba::new(16, 17, 18, 255));
    }

    #[cfg(feature = "imgref")]
    #[test]
    fn imgref_conversion_preserves_dimensions() {
        let img = imgref::ImgVec::new(vec![Rgba::new(9u8, 8, 7, 6); 12], 4, 3);
        let out: imgref::ImgVec<Bgra<u8>> = convert_image(img.as_ref(), Unstoppable).unwrap();
        assert_eq!(out.width(), 4);
        assert_eq!(out.height(), 3);
        assert!(out.buf().iter().all(|&p| p == Bgra { b: 7, g: 8, r: 9, a: 6 }));
    }
}
