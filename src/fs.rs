//! File system collaborator used by the sorter.
//!
//! Sorting logic only needs to read a whole file and write a whole file, so
//! the trait is kept to those two calls. Tests swap in an in-memory version.

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

/// Whole-file text access
pub trait FileSystem {
    /// Read the full contents of `path` as UTF-8
    fn read_text(&self, path: &Path) -> io::Result<String>;

    /// Create or truncate `path` and write `contents` to it
    fn write_text(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// [`FileSystem`] backed by the real disk
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn read_text(&self, path: &Path) -> io::Result<String> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        // Invalid UTF-8 surfaces as ErrorKind::InvalidData.
        file.read_to_string(&mut contents)?;
        Ok(contents)
    }

    fn write_text(&self, path: &Path, contents: &str) -> io::Result<()> {
        let mut output = BufWriter::new(File::create(path)?);
        output.write_all(contents.as_bytes())?;
        output.flush()?;
        Ok(())
    }
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn read_text(&self, path: &Path) -> io::Result<String> {
        (**self).read_text(path)
    }

    fn write_text(&self, path: &Path, contents: &str) -> io::Result<()> {
        (**self).write_text(path, contents)
    }
}
