#![no_main]
use libfuzzer_sys::fuzz_target;
use pxcast::*;

fuzz_target!(|data: &[u8]| {
    // First two bytes pick the format pair; the rest is pixel data.
    let [a, b, rest @ ..] = data else { return };
    let src_fmt = PixelFormat::ALL[*a as usize % PixelFormat::ALL.len()];
    let dst_fmt = PixelFormat::ALL[*b as usize % PixelFormat::ALL.len()];
    if src_fmt.needs_float_intermediate() != dst_fmt.needs_float_intermediate() {
        return;
    }

    let width = 4u32;
    let row = src_fmt.row_stride(width) as usize;
    let height = (rest.len() / row).min(64) as u32;
    let needed = row * height as usize;

    let converted = ConvertRequest::new(src_fmt, dst_fmt)
        .convert_to_vec(&rest[..needed], width, height, enough::Unstoppable)
        .expect("sized source must convert");

    // The output is canonical: reconverting it in the destination format
    // must succeed, and in the integer domain (no NaN concerns) it must be
    // the identity.
    let again = ConvertRequest::new(dst_fmt, dst_fmt)
        .convert_to_vec(&converted, width, height, enough::Unstoppable)
        .expect("canonical output must reconvert");
    if !dst_fmt.needs_float_intermediate() {
        assert_eq!(again, converted, "{src_fmt:?} -> {dst_fmt:?} not stable");
    }
});
