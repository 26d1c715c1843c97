use std::fs;
use std::io;
use std::path::Path;

/// Filesystem operations used by the emitter.
///
/// Errors stay as `io::Error` so the emitter can attach the operation and
/// path it was working on.
pub trait FileSystem {
    /// Create `dir` and every missing ancestor. Existing directories are fine.
    fn ensure_dir(&self, dir: &Path) -> io::Result<()>;
    /// Write `contents` to `path`, replacing any existing file.
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;
}

/// Local filesystem implementation
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFs {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for LocalFs {
    fn ensure_dir(&self, dir: &Path) -> io::Result<()> {
        if dir.is_dir() {
            return Ok(());
        }
        fs::create_dir_all(dir)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        fs::write(path, contents)
    }
}

/// Convenience function to get local filesystem
pub fn local() -> LocalFs {
    LocalFs::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn ensure_dir_creates_ancestors_and_is_idempotent() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a/b/c");
        let fs = local();

        fs.ensure_dir(&nested).unwrap();
        fs.ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn write_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("robots.txt");
        let fs = local();

        fs.write(&path, b"first").unwrap();
        fs.write(&path, b"second").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"second");
    }

    #[test]
    fn ensure_dir_fails_when_component_is_a_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("public");
        std::fs::write(&file, "not a dir").unwrap();

        assert!(local().ensure_dir(&file.join("src")).is_err());
    }
}
