use crate::api::FileManager;
use crate::file_error::FileError;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

#[cfg(unix)]
use std::os::unix::fs::FileExt;
#[cfg(windows)]
use std::os::windows::fs::FileExt;

/// A disk-backed [`FileManager`]. Opens (or creates) a single file on
/// construction and keeps it open until [`FileManager::close`].
#[derive(Debug)]
pub struct DiskFileManager {
    file: RwLock<File>,
    path: PathBuf,
}

impl FileManager for DiskFileManager {
    fn open(path: impl AsRef<Path>) -> Result<Self, FileError> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| FileError::Open {
                    path: path.clone(),
                    source,
                })?;
            }
        }

        let created = !path.exists();

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .map_err(|source| FileError::Open {
                path: path.clone(),
                source,
            })?;

        tracing::debug!(?path, created, "opened backing file");

        Ok(Self {
            file: RwLock::new(file),
            path,
        })
    }

    fn read(&self, offset: u64, length: usize) -> Result<Vec<u8>, FileError> {
        let file = self.file.read().expect("DiskFileManager lock poisoned");

        let file_size = file.metadata().map_err(FileError::Size)?.len();

        if offset >= file_size {
            return Ok(Vec::new());
        }

        let readable = (file_size - offset).min(length as u64) as usize;
        let mut buf = vec![0u8; readable];
        let mut read = 0;
        while read < readable {
            let n = Self::read_at(&file, &mut buf[read..], offset + read as u64).map_err(
                |source| FileError::Read {
                    offset,
                    length,
                    source,
                },
            )?;
            if n == 0 {
                buf.truncate(read);
                break;
            }
            read += n;
        }
        Ok(buf)
    }

    fn write(&self, offset: u64, bytes: &[u8]) -> Result<(), FileError> {
        let file = self.file.write().expect("DiskFileManager lock poisoned");

        let mut written = 0;
        while written < bytes.len() {
            let n = Self::write_at(&file, &bytes[written..], offset + written as u64).map_err(
                |source| FileError::Write {
                    offset,
                    length: bytes.len(),
                    source,
                },
            )?;
            if n == 0 {
                return Err(FileError::Write {
                    offset,
                    length: bytes.len(),
                    source: std::io::Error::new(std::io::ErrorKind::WriteZero, "wrote 0 bytes"),
                });
            }
            written += n;
        }

        file.sync_data().map_err(|source| FileError::Write {
            offset,
            length: bytes.len(),
            source,
        })
    }

    fn append(&self, bytes: &[u8]) -> Result<(), FileError> {
        let offset = self.size()?;
        self.write(offset, bytes)
    }

    fn size(&self) -> Result<u64, FileError> {
        let file = self.file.read().expect("DiskFileManager lock poisoned");
        Ok(file.metadata().map_err(FileError::Size)?.len())
    }

    fn close(self) {
        tracing::debug!(path = ?self.path, "closing backing file");
        drop(self.file);
    }
}

impl DiskFileManager {
    #[inline]
    fn read_at(file: &File, buf: &mut [u8], offset: u64) -> std::io::Result<usize> {
        #[cfg(unix)]
        {
            file.read_at(buf, offset)
        }
        #[cfg(windows)]
        {
            file.seek_read(buf, offset)
        }
    }

    #[inline]
    fn write_at(file: &File, buf: &[u8], offset: u64) -> std::io::Result<usize> {
        #[cfg(unix)]
        {
            file.write_at(buf, offset)
        }
        #[cfg(windows)]
        {
            file.seek_write(buf, offset)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn manager() -> (DiskFileManager, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.db");
        (DiskFileManager::open(&path).unwrap(), dir)
    }

    #[test]
    fn opens_missing_file_empty() {
        let (mgr, _dir) = manager();
        assert_eq!(mgr.size().unwrap(), 0);
    }

    #[test]
    fn write_then_read_round_trips() {
        let (mgr, _dir) = manager();
        mgr.write(0, b"hello").unwrap();
        assert_eq!(mgr.read(0, 5).unwrap(), b"hello");
    }

    #[test]
    fn read_past_end_of_file_is_short_not_error() {
        let (mgr, _dir) = manager();
        mgr.write(0, b"ab").unwrap();
        assert_eq!(mgr.read(0, 100).unwrap(), b"ab");
        assert_eq!(mgr.read(10, 100).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn append_writes_at_current_end() {
        let (mgr, _dir) = manager();
        mgr.append(b"abc").unwrap();
        mgr.append(b"def").unwrap();
        assert_eq!(mgr.read(0, 6).unwrap(), b"abcdef");
    }

    #[test]
    fn reopen_preserves_contents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.db");
        {
            let mgr = DiskFileManager::open(&path).unwrap();
            mgr.write(0, b"persisted").unwrap();
            mgr.close();
        }
        let mgr = DiskFileManager::open(&path).unwrap();
        assert_eq!(mgr.read(0, 9).unwrap(), b"persisted");
    }
}
