//! Opening document sources as readable streams.

use std::fs::File;
use std::io::{self, BufReader, Cursor, Read};
use std::path::{Path, PathBuf};

/// A document source: a file on disk or bytes already in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileLike {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

impl From<PathBuf> for FileLike {
    fn from(path: PathBuf) -> Self {
        FileLike::Path(path)
    }
}

impl From<&Path> for FileLike {
    fn from(path: &Path) -> Self {
        FileLike::Path(path.to_path_buf())
    }
}

impl From<Vec<u8>> for FileLike {
    fn from(bytes: Vec<u8>) -> Self {
        FileLike::Bytes(bytes)
    }
}

impl From<&[u8]> for FileLike {
    fn from(bytes: &[u8]) -> Self {
        FileLike::Bytes(bytes.to_vec())
    }
}

/// Opens `source` for reading. The file handle is closed when the returned
/// reader is dropped.
pub fn open_as_file(source: &FileLike) -> io::Result<Box<dyn Read>> {
    match source {
        FileLike::Path(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
        FileLike::Bytes(bytes) => Ok(Box::new(Cursor::new(bytes.clone()))),
    }
}
