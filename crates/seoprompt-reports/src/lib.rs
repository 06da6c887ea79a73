//! Downloadable prompt files for seoprompt.
//!
//! This crate provides:
//! - The two download formats (Markdown, plain text)
//! - File stem sanitizing
//! - Writing downloads into an output directory

pub mod download;
pub mod filename;
pub mod validation;

pub use download::{downloads_for, write_download, Download, DownloadError, DownloadFormat};
pub use filename::{sanitize_file_stem, DEFAULT_FILE_STEM};
pub use validation::validate_output_directory;
