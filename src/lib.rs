//! # pxcast
//!
//! Bit-exact conversion between uncompressed GPU pixel encodings: packed and
//! unpacked, normalized and pure-integer, float, depth, stencil, and the
//! combined depth+stencil layouts — around 150 formats in all.
//!
//! Every conversion decodes each source pixel into a canonical four-slot
//! intermediate value (64-bit floating or 32-bit integer, picked once per
//! call) and encodes it into the destination. One generic pipeline covers
//! the whole format space; per-format constants come from a static
//! descriptor table resolved once per call, so no pair-specific conversion
//! code exists anywhere.
//!
//! Rows are padded to 4-byte boundaries; use [`PixelFormat::row_stride`] to
//! size buffers.
//!
//! ## Precision
//!
//! The intermediate domain (floating vs. integer) must match between source
//! and destination — mixing a pure-integer format with a normalized or
//! floating one is rejected, never silently truncated. Within one domain,
//! round trips are lossless whenever the destination carries at least the
//! source's per-channel precision.
//!
//! ## Usage
//!
//! ```
//! use pxcast::{ConvertRequest, PixelFormat, Unstoppable};
//!
//! // Two RGBA8 pixels into BGRA8.
//! let src = [255u8, 0, 0, 255, 0, 255, 0, 128];
//! let dst = ConvertRequest::new(PixelFormat::Rgba8Unorm, PixelFormat::Bgra8Unorm)
//!     .convert_to_vec(&src, 2, 1, Unstoppable)?;
//! assert_eq!(dst, [0, 0, 255, 255, 0, 255, 0, 128]);
//! # Ok::<(), pxcast::ConvertError>(())
//! ```
//!
//! External format/type vocabularies resolve through [`resolve_combo`]; a
//! `None` result means the pair is unsupported and must not be converted.
//!
//! ## Non-Goals
//!
//! - Color-space conversion, gamma, scaling, compression — this crate moves
//!   bits between layouts and numeric domains, nothing else.
//! - Compressed texture formats (see dxt-lossless-transform and friends).

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod combo;
mod convert;
mod error;
mod format;
mod limits;

#[cfg(feature = "rgb")]
pub mod typed;

// Re-exports
pub use combo::{resolve_combo, ComponentLayout, ComponentType};
pub use convert::{convert_pixels, ConvertRequest};
pub use enough::{Stop, Unstoppable};
pub use error::ConvertError;
pub use format::PixelFormat;
pub use limits::Limits;
