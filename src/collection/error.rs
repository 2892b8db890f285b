use std::{
    io,
    path::{Path, PathBuf},
};

/// An error to do with reading a CPU data source or one of its per-core files.
///
/// These never reach the caller of [`crate::collection::cpuinfo::get_cpu_info`];
/// they are logged and absorbed where they occur.
#[derive(Debug)]
pub enum CollectionError {
    /// The file at `path` could not be opened or read.
    Unreadable { path: PathBuf, source: io::Error },

    /// A bounded read was asked to fill a buffer with no room for any bytes.
    NoCapacity { path: PathBuf },

    /// Reading CPU data is not supported on this platform.
    Unsupported,
}

impl CollectionError {
    pub(crate) fn unreadable(path: &Path, source: io::Error) -> Self {
        Self::Unreadable {
            path: path.to_path_buf(),
            source,
        }
    }

    /// The file this error is about, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            CollectionError::Unreadable { path, .. } | CollectionError::NoCapacity { path } => {
                Some(path)
            }
            CollectionError::Unsupported => None,
        }
    }
}

impl std::fmt::Display for CollectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectionError::Unreadable { path, source } => {
                write!(f, "unable to read {path:?}: {source}")
            }
            CollectionError::NoCapacity { path } => {
                write!(f, "no buffer space to read {path:?} into")
            }
            CollectionError::Unsupported => {
                write!(
                    f,
                    "cpufreq-info does not support reading CPU data on this platform."
                )
            }
        }
    }
}

impl std::error::Error for CollectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CollectionError::Unreadable { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// A [`Result`] with the error type being a [`CollectionError`].
pub(crate) type CollectionResult<T> = Result<T, CollectionError>;
