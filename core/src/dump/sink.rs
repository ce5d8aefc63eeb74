//! Output destinations for finished dump files.
//!
//! A sink receives the complete file contents in one call, after every
//! object has been dumped, so a failed export never leaves a partial file
//! behind.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

/// Errors that can occur while writing a dump file.
#[derive(Debug)]
pub enum SinkError {
    /// The file name is not a single plain path segment.
    InvalidName(String),
    /// An IO error occurred while writing.
    Io(std::io::Error),
}

impl std::fmt::Display for SinkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(name) => write!(f, "invalid dump file name: {name:?}"),
            Self::Io(err) => write!(f, "IO error: {err}"),
        }
    }
}

impl std::error::Error for SinkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SinkError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Check that `name` is a single non-empty path segment.
///
/// Object names come straight from the host, so separators and `.`/`..`
/// are rejected rather than letting a name escape the sink's root.
pub fn validate_file_name(name: &str) -> Result<&str, SinkError> {
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\', '\0']) {
        return Err(SinkError::InvalidName(name.to_owned()));
    }
    Ok(name)
}

/// Destination for dump files.
pub trait DumpSink {
    /// Write `data` to the file `name`, creating or overwriting it.
    fn write(&self, name: &str, data: &[u8]) -> Result<(), SinkError>;
}

/// Writes dump files into a directory on disk.
///
/// The directory is created on first write if it does not exist. Existing
/// files with the same name are overwritten.
#[derive(Debug, Clone)]
pub struct FileSystemSink {
    root: PathBuf,
}

impl FileSystemSink {
    /// Create a sink writing into `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Output directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl DumpSink for FileSystemSink {
    fn write(&self, name: &str, data: &[u8]) -> Result<(), SinkError> {
        let name = validate_file_name(name)?;
        std::fs::create_dir_all(&self.root)?;
        let path = self.root.join(name);
        std::fs::write(&path, data)?;
        log::debug!("wrote {} bytes to {}", data.len(), path.display());
        Ok(())
    }
}

/// In-memory sink for tests and tools that post-process dumps.
///
/// Clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    files: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Contents of a written file.
    pub fn get(&self, name: &str) -> Option<Vec<u8>> {
        self.files.read().get(name).cloned()
    }

    /// Contents of a written file as UTF-8 text.
    pub fn get_string(&self, name: &str) -> Option<String> {
        self.get(name)
            .and_then(|bytes| String::from_utf8(bytes).ok())
    }

    /// Names of all written files, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.files.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Whether nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.files.read().is_empty()
    }
}

impl DumpSink for MemorySink {
    fn write(&self, name: &str, data: &[u8]) -> Result<(), SinkError> {
        let name = validate_file_name(name)?;
        self.files.write().insert(name.to_owned(), data.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("assetdump_sink_test_{name}"));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_validate_file_name() {
        assert!(validate_file_name("Cube.dump").is_ok());
        assert!(validate_file_name("Cube").is_ok());
        assert!(validate_file_name("").is_err());
        assert!(validate_file_name(".").is_err());
        assert!(validate_file_name("..").is_err());
        assert!(validate_file_name("a/b.dump").is_err());
        assert!(validate_file_name("a\\b.dump").is_err());
    }

    #[test]
    fn test_memory_sink_write_and_overwrite() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.write("a.dump", b"first").unwrap();
        sink.write("a.dump", b"second").unwrap();
        assert_eq!(sink.get_string("a.dump").as_deref(), Some("second"));
        assert_eq!(sink.names(), vec!["a.dump"]);
    }

    #[test]
    fn test_memory_sink_clones_share_storage() {
        let sink = MemorySink::new();
        let clone = sink.clone();
        clone.write("b.dump", b"data").unwrap();
        assert_eq!(sink.get("b.dump"), Some(b"data".to_vec()));
    }

    #[test]
    fn test_memory_sink_rejects_bad_name() {
        let sink = MemorySink::new();
        assert!(matches!(
            sink.write("../escape.dump", b""),
            Err(SinkError::InvalidName(_))
        ));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_filesystem_sink_creates_root_and_overwrites() {
        let dir = temp_dir("overwrite");
        let sink = FileSystemSink::new(&dir);

        sink.write("Cube.dump", b"old contents").unwrap();
        sink.write("Cube.dump", b"new").unwrap();
        assert_eq!(std::fs::read(dir.join("Cube.dump")).unwrap(), b"new");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_filesystem_sink_rejects_bad_name() {
        let dir = temp_dir("bad_name");
        let sink = FileSystemSink::new(&dir);
        assert!(sink.write("nested/Cube.dump", b"").is_err());
        assert!(!dir.join("nested").exists());
    }
}
