//! Helpers for reading small kernel pseudo-files.

use std::{fs::File, io::Read, path::Path};

use crate::collection::error::{CollectionError, CollectionResult};

cfg_if::cfg_if! {
    if #[cfg(target_os = "linux")] {
        use rustix::fs::{Mode, OFlags};

        /// Opens a file read-only through `openat`, with `O_CLOEXEC` set so the
        /// descriptor never leaks into a child process.
        #[inline]
        pub(crate) fn open_read_only(path: &Path) -> std::io::Result<File> {
            let fd = rustix::fs::openat(
                rustix::fs::CWD,
                path,
                OFlags::RDONLY | OFlags::CLOEXEC,
                Mode::empty(),
            )?;

            Ok(File::from(fd))
        }
    } else {
        #[inline]
        pub(crate) fn open_read_only(path: &Path) -> std::io::Result<File> {
            File::open(path)
        }
    }
}

/// Reads the start of a file into `buffer`, returning the filled portion.
///
/// At most `buffer.len() - 1` bytes are read, anything past that is left
/// unread. The file is closed before this returns.
pub(crate) fn read_bounded<'a>(path: &Path, buffer: &'a mut [u8]) -> CollectionResult<&'a [u8]> {
    let Some(limit) = buffer.len().checked_sub(1) else {
        return Err(CollectionError::NoCapacity {
            path: path.to_path_buf(),
        });
    };

    let mut file = open_read_only(path).map_err(|err| CollectionError::unreadable(path, err))?;
    let mut filled = 0;

    while filled < limit {
        match file.read(&mut buffer[filled..limit]) {
            Ok(0) => break,
            Ok(read) => filled += read,
            Err(err) if err.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(CollectionError::unreadable(path, err)),
        }
    }

    Ok(&buffer[..filled])
}
