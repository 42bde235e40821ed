//! Loading file contents into arena-owned buffers.
//!
//! Each loader opens a [`TemporaryScope`](crate::TemporaryScope) around
//! its allocation, so a failed read or a UTF-8 error leaves the arena
//! exactly as it was.

use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use stratum_core::ArenaError;
use tracing::debug;

use crate::arena::Arena;
use crate::handle::Allocation;

/// Errors from the arena-backed loaders.
#[derive(Debug)]
pub enum LoadError {
    /// Opening or reading the source failed.
    Io(io::Error),
    /// The arena had no room for the contents.
    Arena(ArenaError),
    /// Text contents were not valid UTF-8.
    InvalidUtf8,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "i/o error: {err}"),
            Self::Arena(err) => write!(f, "{err}"),
            Self::InvalidUtf8 => write!(f, "contents are not valid UTF-8"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Arena(err) => Some(err),
            Self::InvalidUtf8 => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ArenaError> for LoadError {
    fn from(err: ArenaError) -> Self {
        Self::Arena(err)
    }
}

/// Read a whole file into a block sized to the file.
pub fn read_file(arena: &mut Arena<'_>, path: impl AsRef<Path>) -> Result<Allocation, LoadError> {
    let path = path.as_ref();
    let mut file = File::open(path)?;
    let len = file_len(&file)?;

    let mut scope = arena.begin_temporary();
    let alloc = scope.try_alloc(len)?;
    file.read_exact(scope.bytes_mut(alloc))?;
    scope.keep();

    debug!(path = %path.display(), len, "loaded file into arena");
    Ok(alloc)
}

/// Read a UTF-8 text file, followed by a NUL terminator byte.
///
/// The block is `len + 1` bytes; the returned handle covers the text only,
/// so [`Arena::str`] on it yields the contents without the terminator.
pub fn read_file_string(
    arena: &mut Arena<'_>,
    path: impl AsRef<Path>,
) -> Result<Allocation, LoadError> {
    let path = path.as_ref();
    let mut file = File::open(path)?;
    let len = file_len(&file)?;

    let mut scope = arena.begin_temporary();
    let block = scope.try_alloc(len + 1)?;
    let text = Allocation::new(block.offset, len);
    // The trailing byte is already zero: allocations are zero-filled.
    file.read_exact(scope.bytes_mut(text))?;
    if scope.str(text).is_err() {
        return Err(LoadError::InvalidUtf8);
    }
    scope.keep();

    debug!(path = %path.display(), len, "loaded text file into arena");
    Ok(text)
}

/// Copy the current working directory into the arena.
pub fn current_dir(arena: &mut Arena<'_>) -> Result<Allocation, LoadError> {
    let dir = std::env::current_dir()?;
    let dir = dir.to_str().ok_or(LoadError::InvalidUtf8)?;
    let alloc = arena.try_alloc(dir.len())?;
    arena.bytes_mut(alloc).copy_from_slice(dir.as_bytes());
    Ok(alloc)
}

fn file_len(file: &File) -> Result<usize, LoadError> {
    let len = file.metadata()?.len();
    usize::try_from(len).map_err(|_| {
        LoadError::Io(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("file of {len} bytes does not fit in memory"),
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(contents: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn binary_file_loaded_exactly() {
        let file = temp_file(&[0, 1, 2, 3, 255]);
        let mut buf = vec![0u8; 256];
        let mut arena = Arena::new(&mut buf);
        let a = read_file(&mut arena, file.path()).unwrap();
        assert_eq!(arena.bytes(a), &[0, 1, 2, 3, 255]);
    }

    #[test]
    fn text_file_is_nul_terminated() {
        let file = temp_file(b"void main() {}\n");
        let mut buf = vec![0u8; 256];
        let mut arena = Arena::new(&mut buf);
        let text = read_file_string(&mut arena, file.path()).unwrap();
        assert_eq!(arena.str(text).unwrap(), "void main() {}\n");
        assert_eq!(arena.offset(), text.end() + 1);
        let with_nul = Allocation::new(text.offset(), text.len() + 1);
        assert_eq!(arena.bytes(with_nul).last(), Some(&0));
    }

    #[test]
    fn missing_file_is_io_error() {
        let mut buf = vec![0u8; 64];
        let mut arena = Arena::new(&mut buf);
        let err = read_file(&mut arena, "/definitely/not/here.bin").unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
        assert_eq!(arena.offset(), 0);
    }

    #[test]
    fn too_large_file_is_arena_error() {
        let file = temp_file(&[7u8; 100]);
        let mut buf = vec![0u8; 32];
        let mut arena = Arena::new(&mut buf);
        let err = read_file(&mut arena, file.path()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Arena(ArenaError::CapacityExceeded { requested: 100, .. })
        ));
    }

    #[test]
    fn invalid_utf8_rolls_back() {
        let file = temp_file(&[0xC3, 0x28]);
        let mut buf = vec![0u8; 64];
        let mut arena = Arena::new(&mut buf);
        let err = read_file_string(&mut arena, file.path()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidUtf8));
        assert_eq!(arena.offset(), 0);
    }

    #[test]
    fn current_dir_matches_env() {
        let mut buf = vec![0u8; 4096];
        let mut arena = Arena::new(&mut buf);
        let a = current_dir(&mut arena).unwrap();
        let expected = std::env::current_dir().unwrap();
        assert_eq!(arena.str(a).unwrap(), expected.to_str().unwrap());
    }
}
