//! Compression engine
//!
//! Decode, re-encode under a fixed per-format policy, and replace the file on
//! disk only when the new encoding is strictly smaller. Each call is isolated:
//! a failure for one file has no effect on any other.

pub mod codec;
pub mod engine;
pub mod error;
pub mod scratch;

pub use codec::JPEG_QUALITY;
pub use engine::{SizeOutcome, compress};
pub use error::CompressError;
