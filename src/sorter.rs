use crate::config::SortConfig;
use crate::error::{SortContext, SortResult};
use crate::fs::{FileSystem, StdFileSystem};
use crate::lines::{join_lines, retain_non_blank, sort_lines_by, split_lines};
use std::path::{Path, PathBuf};

/// Reads one file, sorts its lines and writes them to another.
///
/// Holds no state between calls; the same sorter can be reused for any
/// number of inputs.
pub struct LineSorter<F = StdFileSystem> {
    config: SortConfig,
    fs: F,
}

impl LineSorter {
    pub fn new(config: SortConfig) -> Self {
        Self::with_file_system(config, StdFileSystem)
    }
}

impl<F: FileSystem> LineSorter<F> {
    pub fn with_file_system(config: SortConfig, fs: F) -> Self {
        Self { config, fs }
    }

    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    /// Sort the lines of `input` into the configured output file and
    /// return the path that was written.
    ///
    /// The input is read completely before the output is created, so the
    /// output may be the input itself.
    pub fn sort(&self, input: &Path) -> SortResult<PathBuf> {
        let output = self.config.resolve_output_path(input);
        let comparison = self.config.comparison();

        let text = self.fs.read_text(input).with_read_context(input)?;
        let mut lines = split_lines(&text);
        tracing::debug!(path = %input.display(), lines = lines.len(), "Read input");

        if self.config.remove_empty_lines {
            let dropped = retain_non_blank(&mut lines);
            tracing::debug!(dropped, "Removed blank lines");
        }

        tracing::debug!(%comparison, "Sorting lines");
        sort_lines_by(&mut lines, comparison);

        self.fs
            .write_text(&output, &join_lines(&lines))
            .with_write_context(&output)?;

        tracing::info!(
            lines = lines.len(),
            input = %input.display(),
            output = %output.display(),
            "Successfully sorted {} lines from '{}' to '{}'",
            lines.len(),
            input.display(),
            output.display()
        );

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::presets;
    use crate::error::SortError;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::io;

    #[derive(Default)]
    struct MemoryFileSystem {
        files: RefCell<HashMap<PathBuf, String>>,
        read_only: bool,
    }

    impl MemoryFileSystem {
        fn with_file(path: &str, contents: &str) -> Self {
            let fs = Self::default();
            fs.files
                .borrow_mut()
                .insert(PathBuf::from(path), contents.to_string());
            fs
        }

        fn contents(&self, path: &str) -> Option<String> {
            self.files.borrow().get(Path::new(path)).cloned()
        }
    }

    impl FileSystem for MemoryFileSystem {
        fn read_text(&self, path: &Path) -> io::Result<String> {
            self.files
                .borrow()
                .get(path)
                .cloned()
                .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
        }

        fn write_text(&self, path: &Path, contents: &str) -> io::Result<()> {
            if self.read_only {
                return Err(io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    "read-only file system",
                ));
            }
            self.files
                .borrow_mut()
                .insert(path.to_path_buf(), contents.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_default_sort_derives_output() {
        let fs = MemoryFileSystem::with_file("fruit.txt", "cherry\nbanana\napple\n");
        let sorter = LineSorter::with_file_system(SortConfig::default(), &fs);

        let output = sorter.sort(Path::new("fruit.txt")).unwrap();

        assert_eq!(output, PathBuf::from("fruit_sorted.txt"));
        assert_eq!(
            fs.contents("fruit_sorted.txt").as_deref(),
            Some("apple\nbanana\ncherry\n")
        );
        assert_eq!(
            fs.contents("fruit.txt").as_deref(),
            Some("cherry\nbanana\napple\n")
        );
    }

    #[test]
    fn test_case_insensitive_without_blanks() {
        let fs = MemoryFileSystem::with_file("in.fet", "banana\nApple\n\ncherry\n");
        let sorter = LineSorter::with_file_system(presets::normalized(), &fs);

        let output = sorter.sort(Path::new("in.fet")).unwrap();

        assert_eq!(output, PathBuf::from("in_sorted.fet"));
        assert_eq!(
            fs.contents("in_sorted.fet").as_deref(),
            Some("Apple\nbanana\ncherry\n")
        );
    }

    #[test]
    fn test_blank_lines_kept_first() {
        let fs = MemoryFileSystem::with_file("in.txt", "b\n\na\n   \n");
        let sorter = LineSorter::with_file_system(SortConfig::default(), &fs);

        sorter.sort(Path::new("in.txt")).unwrap();

        assert_eq!(
            fs.contents("in_sorted.txt").as_deref(),
            Some("\n   \na\nb\n")
        );
    }

    #[test]
    fn test_explicit_output_path() {
        let fs = MemoryFileSystem::with_file("in.txt", "2\r\n1\r\n");
        let config = SortConfig::new().with_output_path(Some(PathBuf::from("out/result.txt")));
        let sorter = LineSorter::with_file_system(config, &fs);

        let output = sorter.sort(Path::new("in.txt")).unwrap();

        assert_eq!(output, PathBuf::from("out/result.txt"));
        assert_eq!(fs.contents("out/result.txt").as_deref(), Some("1\n2\n"));
        assert!(fs.contents("in_sorted.txt").is_none());
    }

    #[test]
    fn test_sort_in_place() {
        let fs = MemoryFileSystem::with_file("list", "z\ny\n");
        let config = SortConfig::new().with_output_path(Some(PathBuf::from("list")));
        let sorter = LineSorter::with_file_system(config, &fs);

        sorter.sort(Path::new("list")).unwrap();

        assert_eq!(fs.contents("list").as_deref(), Some("y\nz\n"));
    }

    #[test]
    fn test_empty_input_writes_empty_output() {
        let fs = MemoryFileSystem::with_file("empty.txt", "");
        let sorter = LineSorter::with_file_system(SortConfig::default(), &fs);

        sorter.sort(Path::new("empty.txt")).unwrap();

        assert_eq!(fs.contents("empty_sorted.txt").as_deref(), Some(""));
    }

    #[test]
    fn test_missing_input() {
        let fs = MemoryFileSystem::default();
        let sorter = LineSorter::with_file_system(SortConfig::default(), &fs);

        let err = sorter.sort(Path::new("ghost.txt")).unwrap_err();

        assert!(matches!(err, SortError::FileNotFound { ref path } if path == Path::new("ghost.txt")));
        assert!(fs.contents("ghost_sorted.txt").is_none());
    }

    #[test]
    fn test_write_failure_is_io() {
        let fs = MemoryFileSystem {
            read_only: true,
            ..MemoryFileSystem::with_file("in.txt", "a\n")
        };
        let sorter = LineSorter::with_file_system(SortConfig::default(), &fs);

        let err = sorter.sort(Path::new("in.txt")).unwrap_err();

        match err {
            SortError::Io { context, source } => {
                assert_eq!(context, "writing 'in_sorted.txt'");
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
            }
            other => panic!("expected an io failure, got {other:?}"),
        }
    }
}
