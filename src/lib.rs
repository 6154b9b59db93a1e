//! Sort the lines of a text file into a new file.
//!
//! The whole input is read into memory, split into lines (`\n`, `\r\n` and
//! `\r` are all accepted), optionally stripped of blank lines, sorted and
//! written back out with `\n` after every line. Case-insensitive sorting
//! compares lowercased lines but writes them with their original case, and
//! keeps lines that differ only in case in input order.
//!
//! ```no_run
//! use line_sort::{sort_lines, SortConfig};
//!
//! let config = SortConfig::new()
//!     .with_case_sensitive(false)
//!     .with_remove_empty_lines(true);
//! let written = sort_lines("timetable.fet", &config)?;
//! assert_eq!(written.to_str(), Some("timetable_sorted.fet"));
//! # Ok::<(), line_sort::SortError>(())
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod fs;
pub mod lines;
pub mod logging;
pub mod path;
pub mod sorter;

// Re-export commonly used types
pub use config::{presets, Comparison, SortConfig};
pub use error::{SortError, SortResult};
pub use fs::{FileSystem, StdFileSystem};
pub use path::derive_output_path;
pub use sorter::LineSorter;

use std::path::{Path, PathBuf};

/// Sort the lines of `input` according to `config` and return the path
/// of the written file.
pub fn sort_lines(input: impl AsRef<Path>, config: &SortConfig) -> SortResult<PathBuf> {
    LineSorter::new(config.clone()).sort(input.as_ref())
}

/// Sort with the default settings: case-sensitive, blank lines kept, output
/// next to the input with `_sorted` before the extension.
pub fn sort_lines_simple(input: impl AsRef<Path>) -> SortResult<PathBuf> {
    sort_lines(input, &SortConfig::default())
}
