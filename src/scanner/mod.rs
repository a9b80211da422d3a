pub mod directory;
pub mod types;

// Re-export main types for easier access
pub use directory::scan_directory;
pub use types::{Candidate, ImageFormat};
