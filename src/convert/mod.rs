//! Buffer conversion orchestrator.
//!
//! Walks a width x height image row by row, decoding each source pixel into
//! the canonical intermediate value and encoding it into the destination.
//! Use top-level [`convert_pixels`] or a [`ConvertRequest`] when limits or
//! cancellation matter.

mod decode;
mod encode;

use alloc::vec;
use alloc::vec::Vec;
use enough::Stop;

use crate::error::ConvertError;
use crate::format::PixelFormat;
use crate::limits::Limits;

/// Strides and byte extents of one side of a conversion, resolved once per
/// call at the given width.
struct Extent {
    pixel_stride: usize,
    row_stride: usize,
    total: usize,
}

impl Extent {
    fn resolve(format: PixelFormat, width: u32, height: u32) -> Result<Extent, ConvertError> {
        let too_large = ConvertError::DimensionsTooLarge { width, height };
        let row_stride = usize::try_from(format.row_stride(width)).map_err(|_| too_large)?;
        let total = row_stride
            .checked_mul(height as usize)
            .ok_or(ConvertError::DimensionsTooLarge { width, height })?;
        Ok(Extent {
            pixel_stride: format.bytes_per_pixel(),
            row_stride,
            total,
        })
    }
}

/// A pixel format conversion, configured once and applied to whole images.
///
/// The source and destination format must agree on the intermediate domain
/// (see [`PixelFormat::needs_float_intermediate`]); mixing a pure-integer
/// format with a normalized or floating one is rejected up front.
#[derive(Clone, Debug)]
pub struct ConvertRequest<'a> {
    src_format: PixelFormat,
    dst_format: PixelFormat,
    limits: Option<&'a Limits>,
}

impl<'a> ConvertRequest<'a> {
    pub fn new(src_format: PixelFormat, dst_format: PixelFormat) -> Self {
        Self {
            src_format,
            dst_format,
            limits: None,
        }
    }

    /// Apply resource limits, checked before any pixel work.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Convert `width` x `height` pixels from `src` into `dst`.
    ///
    /// Both buffers must hold at least `height * row_stride` bytes for their
    /// respective format; rows are padded to 4-byte boundaries. The call
    /// either completes the whole image or returns an error before touching
    /// any pixel.
    pub fn convert(
        &self,
        dst: &mut [u8],
        src: &[u8],
        width: u32,
        height: u32,
        stop: impl Stop,
    ) -> Result<(), ConvertError> {
        self.run(dst, src, width, height, &stop)
    }

    /// Convert into a freshly allocated destination buffer of exactly
    /// `height * row_stride` bytes.
    pub fn convert_to_vec(
        &self,
        src: &[u8],
        width: u32,
        height: u32,
        stop: impl Stop,
    ) -> Result<Vec<u8>, ConvertError> {
        let dst_extent = Extent::resolve(self.dst_format, width, height)?;
        let mut dst = vec![0u8; dst_extent.total];
        self.run(&mut dst, src, width, height, &stop)?;
        Ok(dst)
    }

    fn run(
        &self,
        dst: &mut [u8],
        src: &[u8],
        width: u32,
        height: u32,
        stop: &dyn Stop,
    ) -> Result<(), ConvertError> {
        let sd = self.src_format.describe();
        let dd = self.dst_format.describe();
        if sd.float_domain != dd.float_domain {
            return Err(ConvertError::DomainMismatch {
                src: self.src_format,
                dst: self.dst_format,
            });
        }

        let se = Extent::resolve(self.src_format, width, height)?;
        let de = Extent::resolve(self.dst_format, width, height)?;
        if let Some(limits) = self.limits {
            limits.check(width, height)?;
            limits.check_memory(de.total)?;
        }
        if src.len() < se.total {
            return Err(ConvertError::BufferTooSmall {
                needed: se.total,
                actual: src.len(),
            });
        }
        if dst.len() < de.total {
            return Err(ConvertError::BufferTooSmall {
                needed: de.total,
                actual: dst.len(),
            });
        }

        let w = width as usize;
        let h = height as usize;

        // One domain for the whole call; each loop advances the source and
        // destination cursors by their own strides.
        if sd.float_domain {
            for y in 0..h {
                if y % 16 == 0 {
                    stop.check()?;
                }
                let src_row = &src[y * se.row_stride..];
                let dst_row = &mut dst[y * de.row_stride..];
                for x in 0..w {
                    let spx = &src_row[x * se.pixel_stride..][..se.pixel_stride];
                    let dpx = &mut dst_row[x * de.pixel_stride..][..de.pixel_stride];
                    let mid = decode::decode_float(sd, spx);
                    encode::encode_float(dd, &mid, dpx);
                }
            }
        } else {
            for y in 0..h {
                if y % 16 == 0 {
                    stop.check()?;
                }
                let src_row = &src[y * se.row_stride..];
                let dst_row = &mut dst[y * de.row_stride..];
                for x in 0..w {
                    let spx = &src_row[x * se.pixel_stride..][..se.pixel_stride];
                    let dpx = &mut dst_row[x * de.pixel_stride..][..de.pixel_stride];
                    let mid = decode::decode_int(sd, spx);
                    encode::encode_int(dd, &mid, dpx);
                }
            }
        }
        Ok(())
    }
}

/// Convert `width` x `height` pixels from `src_format` to `dst_format`.
///
/// Shorthand for an unlimited, non-cancellable [`ConvertRequest`].
pub fn convert_pixels(
    dst: &mut [u8],
    src: &[u8],
    width: u32,
    height: u32,
    src_format: PixelFormat,
    dst_format: PixelFormat,
) -> Result<(), ConvertError> {
    ConvertRequest::new(src_format, dst_format).convert(dst, src, width, height, enough::Unstoppable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::PixelFormat as F;

    fn one_pixel(src_fmt: F, dst_fmt: F, src: &[u8]) -> Vec<u8> {
        // Pad the single pixel out to its 4-byte-aligned row.
        let mut row = vec![0u8; src_fmt.row_stride(1) as usize];
        row[..src.len()].copy_from_slice(src);
        ConvertRequest::new(src_fmt, dst_fmt)
            .convert_to_vec(&row, 1, 1, enough::Unstoppable)
            .unwrap()
    }

    #[test]
    fn packed_332_follows_the_descriptor_table() {
        // Check extraction against the declared shift/mask columns rather
        // than hand-computed bit positions.
        let d = F::Rgb332Unorm.describe();
        let raw = 0b1110_0100u8;
        let out = one_pixel(F::Rgb332Unorm, F::Rgba32Float, &[raw]);
        for c in 0..3usize {
            let field = ((u32::from(raw) & d.mask[c]) >> d.shift[c]) as f64;
            let expected = (field / f64::from(d.max[c])) as f32;
            let at = d.index[c] as usize * 4;
            let got = f32::from_ne_bytes(out[at..at + 4].try_into().unwrap());
            assert_eq!(got, expected, "component {c}");
        }
    }

    #[test]
    fn default_alpha_is_opaque() {
        // 3-component source leaves the alpha slot at its default 1.0.
        let out = one_pixel(F::Rgb8Unorm, F::Rgba32Float, &[10, 20, 30]);
        let alpha = f32::from_ne_bytes(out[12..16].try_into().unwrap());
        assert_eq!(alpha, 1.0);

        // Same in the integer domain.
        let out = one_pixel(F::Rgb8Uint, F::Rgba32Uint, &[10, 20, 30]);
        let alpha = u32::from_ne_bytes(out[12..16].try_into().unwrap());
        assert_eq!(alpha, 1);
    }

    #[test]
    fn snorm_minimum_clamps_to_minus_one() {
        let out = one_pixel(F::R8Snorm, F::R32Float, &[0x80]); // -128
        let red = f32::from_ne_bytes(out[0..4].try_into().unwrap());
        assert_eq!(red, -1.0);

        let out = one_pixel(F::R16Snorm, F::R32Float, &i16::MIN.to_ne_bytes());
        let red = f32::from_ne_bytes(out[0..4].try_into().unwrap());
        assert_eq!(red, -1.0);
    }

    #[test]
    fn snorm_values_divide_by_the_signed_max() {
        let out = one_pixel(F::R8Snorm, F::R32Float, &[127]);
        let red = f32::from_ne_bytes(out[0..4].try_into().unwrap());
        assert_eq!(red, 1.0);

        let out = one_pixel(F::R8Snorm, F::R32Float, &(-64i8).to_ne_bytes());
        let red = f32::from_ne_bytes(out[0..4].try_into().unwrap());
        assert_eq!(red, (-64.0 / 127.0) as f32);
    }

    #[test]
    fn bgra_reorders_into_canonical_slots() {
        // Bgra16Unorm stores B,G,R,A; the intermediate is canonical RGBA.
        let mut src = Vec::new();
        for v in [0x1111u16, 0x2222, 0x3333, 0x4444] {
            src.extend_from_slice(&v.to_ne_bytes());
        }
        let out = one_pixel(F::Bgra16Unorm, F::Rgba16Unorm, &src);
        let mut channels = [0u16; 4];
        for (i, ch) in channels.iter_mut().enumerate() {
            *ch = u16::from_ne_bytes(out[i * 2..i * 2 + 2].try_into().unwrap());
        }
        // red, green, blue, alpha
        assert_eq!(channels, [0x3333, 0x2222, 0x1111, 0x4444]);
    }

    #[test]
    fn depth_stencil_split_roundtrip() {
        let d = F::D24UnormS8Uint.describe();
        // Encode depth 0.5 + stencil 200 through the float pivot by
        // converting from the split representation.
        let mut src = [0u8; 8];
        src[0..4].copy_from_slice(&0.5f32.to_ne_bytes());
        src[4..8].copy_from_slice(&200u32.to_ne_bytes());
        let packed = one_pixel(F::D32FloatS8Uint, F::D24UnormS8Uint, &src);

        let raw = u32::from_ne_bytes(packed[0..4].try_into().unwrap());
        assert_eq!((raw & d.mask[1]) >> d.shift[1], 200);

        let back = one_pixel(F::D24UnormS8Uint, F::D32FloatS8Uint, &packed);
        let depth = f32::from_ne_bytes(back[0..4].try_into().unwrap());
        let stencil = u32::from_ne_bytes(back[4..8].try_into().unwrap());
        assert!(
            (f64::from(depth) - 0.5).abs() <= 1.0 / f64::from(d.max[0]),
            "depth {depth} not within one step of 0.5"
        );
        assert_eq!(stencil, 200);
    }

    #[test]
    fn depth_and_stencil_fields_do_not_overlap() {
        // Full-scale depth must leave the stencil byte untouched.
        let mut src = [0u8; 8];
        src[0..4].copy_from_slice(&1.0f32.to_ne_bytes());
        src[4..8].copy_from_slice(&0u32.to_ne_bytes());
        let packed = one_pixel(F::D32FloatS8Uint, F::D24UnormS8Uint, &src);
        let raw = u32::from_ne_bytes(packed[0..4].try_into().unwrap());
        let d = F::D24UnormS8Uint.describe();
        assert_eq!(raw & d.mask[1], 0);
        assert_eq!((raw & d.mask[0]) >> d.shift[0], d.max[0]);
    }

    #[test]
    fn strides_advance_rows_independently() {
        // 3 pixels of R8 (row stride 4) widened to R16 (row stride 8): the
        // padding bytes stay zero and every pixel lands in its own row slot.
        let mut src = vec![0u8; 8];
        src[0..3].copy_from_slice(&[10, 20, 30]); // row 0
        src[4..7].copy_from_slice(&[40, 50, 60]); // row 1
        let out = ConvertRequest::new(F::R8Unorm, F::R16Unorm)
            .convert_to_vec(&src, 3, 2, enough::Unstoppable)
            .unwrap();
        assert_eq!(out.len(), 16);
        let px = |row: usize, col: usize| {
            u16::from_ne_bytes(out[row * 8 + col * 2..][..2].try_into().unwrap())
        };
        assert_eq!(px(0, 0), 10 * 257);
        assert_eq!(px(0, 2), 30 * 257);
        assert_eq!(px(1, 0), 40 * 257);
        assert_eq!(px(1, 2), 60 * 257);
    }

    #[test]
    fn zero_area_is_a_no_op() {
        let mut dst = [0u8; 0];
        convert_pixels(&mut dst, &[], 0, 5, F::R8Unorm, F::R8Unorm).unwrap();
        convert_pixels(&mut dst, &[], 5, 0, F::R8Unorm, F::R8Unorm).unwrap();
    }

    #[test]
    fn domain_mismatch_is_rejected() {
        let mut dst = [0u8; 4];
        let err = convert_pixels(&mut dst, &[0; 4], 1, 1, F::R8Unorm, F::R8Uint).unwrap_err();
        assert!(matches!(err, ConvertError::DomainMismatch { .. }));
    }

    #[test]
    fn short_buffers_are_rejected_before_any_write() {
        let src = [0u8; 4];
        let mut dst = [0xAAu8; 2]; // needs 4
        let err = convert_pixels(&mut dst, &src, 1, 1, F::R8Unorm, F::Rgba8Unorm).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::BufferTooSmall {
                needed: 4,
                actual: 2
            }
        ));
        assert_eq!(dst, [0xAA, 0xAA]);

        let err = convert_pixels(&mut [0u8; 16], &src[..2], 2, 1, F::R8Unorm, F::Rgba8Unorm)
            .unwrap_err();
        assert!(matches!(err, ConvertError::BufferTooSmall { needed: 4, .. }));
    }

    #[test]
    fn limits_reject_large() {
        let limits = Limits {
            max_pixels: Some(1),
            ..Default::default()
        };
        let err = ConvertRequest::new(F::R8Unorm, F::R8Unorm)
            .with_limits(&limits)
            .convert_to_vec(&[0u8; 8], 2, 1, enough::Unstoppable)
            .unwrap_err();
        assert!(matches!(err, ConvertError::LimitExceeded(_)));
    }
}
