//! # img-size-compress - shrink images in place, never grow them
//!
//! Point it at a directory and every JPEG and PNG directly inside is decoded,
//! re-encoded under a fixed policy and written back only when the new encoding
//! is strictly smaller. Per-file sizes come out as a single JSON line on stdout.
//!
//! ## Quick Start
//!
//! ```bash
//! img-size-compress ./photos
//! # [{"name":"a.jpg","original":50000,"final":30000},{"name":"b.png","original":2000,"final":2000}]
//!
//! # Human-readable report instead of JSON
//! img-size-compress ./photos --format table
//! ```
//!
//! ## Re-encode policy
//!
//! - **JPEG**: lossy, quality 75
//! - **PNG**: lossless, best compression with adaptive filtering
//!
//! The output format always matches the input. Nothing is resized.
//!
//! ## Safety of in-place replacement
//!
//! The new encoding is written to a scratch file in the same directory and
//! renamed over the original only when it is smaller. The scratch file is
//! removed on every path, and a failed replacement leaves the original intact.
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use img_size_compress::compress::compress;
//! use img_size_compress::scanner::scan_directory;
//! use std::path::Path;
//!
//! for candidate in scan_directory(Path::new("photos"))? {
//!     match compress(&candidate.path, candidate.format) {
//!         Ok(outcome) => println!("{}: {} -> {}", candidate.name, outcome.original, outcome.final_size),
//!         Err(err) => eprintln!("Skipping {}: {}", candidate.name, err),
//!     }
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod compress;
pub mod report;
pub mod runner;
pub mod scanner;

pub use cli::{Cli, Output};
pub use report::CompressionResult;
