//! Configuration for sort operations

use crate::path::derive_output_path;
use std::fmt;
use std::path::{Path, PathBuf};

/// How lines are compared while sorting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// Plain code point order
    CaseSensitive,
    /// Order of the lowercased lines; equal keys keep their input order
    CaseInsensitive,
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Comparison::CaseSensitive => "case-sensitive",
            Comparison::CaseInsensitive => "case-insensitive",
        };
        write!(f, "{name}")
    }
}

/// Settings for a single sort
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortConfig {
    /// Compare lines with their original case
    pub case_sensitive: bool,
    /// Drop lines that are empty after trimming whitespace
    pub remove_empty_lines: bool,
    /// Output file path; derived from the input path when unset
    pub output_path: Option<PathBuf>,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            remove_empty_lines: false,
            output_path: None,
        }
    }
}

impl SortConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn with_remove_empty_lines(mut self, remove_empty_lines: bool) -> Self {
        self.remove_empty_lines = remove_empty_lines;
        self
    }

    pub fn with_output_path(mut self, output_path: Option<PathBuf>) -> Self {
        self.output_path = output_path;
        self
    }

    /// Get the effective comparison
    pub fn comparison(&self) -> Comparison {
        if self.case_sensitive {
            Comparison::CaseSensitive
        } else {
            Comparison::CaseInsensitive
        }
    }

    /// The explicit output path, or the one derived from `input`
    pub fn resolve_output_path(&self, input: &Path) -> PathBuf {
        match &self.output_path {
            Some(path) => path.clone(),
            None => derive_output_path(input),
        }
    }
}

/// Preset configurations for common use cases
pub mod presets {
    use super::*;

    /// Configuration for case-insensitive sorting
    pub fn case_insensitive() -> SortConfig {
        SortConfig::new().with_case_sensitive(false)
    }

    /// Configuration that drops blank lines
    pub fn compact() -> SortConfig {
        SortConfig::new().with_remove_empty_lines(true)
    }

    /// Case-insensitive and without blank lines
    pub fn normalized() -> SortConfig {
        case_insensitive().with_remove_empty_lines(true)
    }
}
