//! Default output path derivation

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Suffix inserted before the extension of a derived output path
pub const SORTED_SUFFIX: &str = "_sorted";

/// Derive the output path for `input` by inserting [`SORTED_SUFFIX`]
/// before its extension.
///
/// `a/b.fet` becomes `a/b_sorted.fet`, `report` becomes `report_sorted`.
/// Names starting with a dot and no other dot (`.env`) have no extension.
pub fn derive_output_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or(input.as_os_str());

    let mut name = OsString::from(stem);
    name.push(SORTED_SUFFIX);
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }

    input.with_file_name(name)
}
