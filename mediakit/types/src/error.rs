/*!
    Error types for the mediakit crate ecosystem.
*/

use std::fmt;
use std::path::PathBuf;

/// Boxed error cause carried across the backend boundary.
pub type Cause = Box<dyn std::error::Error + Send + Sync>;

/**
    Error type returned by session open operations.

    Not-found conditions are passed through from the backend unchanged so
    callers can branch on them; every other failure is collapsed into
    [`OpenFailed`](Error::OpenFailed) with the original cause attached.
*/
#[derive(Debug)]
pub enum Error {
    /// The file does not exist.
    FileNotFound {
        /// Path that was requested.
        path: PathBuf,
    },
    /// The directory that should contain the file does not exist.
    DirectoryNotFound {
        /// Path that was requested.
        path: PathBuf,
    },
    /// Opening the container or constructing the stream session failed.
    OpenFailed {
        /// The underlying backend failure.
        source: Cause,
    },
}

impl Error {
    /**
        Create an open failure wrapping the given cause.
    */
    pub fn open_failed(source: impl Into<Cause>) -> Self {
        Self::OpenFailed {
            source: source.into(),
        }
    }

    /**
        Returns true if this is one of the two not-found conditions.
    */
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::FileNotFound { .. } | Self::DirectoryNotFound { .. }
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileNotFound { path } => {
                write!(f, "media file not found: {}", path.display())
            }
            Self::DirectoryNotFound { path } => {
                write!(f, "containing directory not found: {}", path.display())
            }
            Self::OpenFailed { source } => {
                write!(f, "failed to open the media file: {source}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::OpenFailed { source } => Some(source.as_ref()),
            _ => None,
        }
    }
}

/**
    Error type produced by a decoder backend.

    Backends must keep the two not-found conditions distinguishable from
    everything else; the session layer relies on that split when it
    classifies open failures.
*/
#[derive(Debug)]
pub enum BackendError {
    /// The file does not exist.
    FileNotFound {
        /// Path that was requested.
        path: PathBuf,
    },
    /// The directory that should contain the file does not exist.
    DirectoryNotFound {
        /// Path that was requested.
        path: PathBuf,
    },
    /// Any other backend failure (corrupt file, unsupported container,
    /// codec negotiation failure, I/O error).
    Other(Cause),
}

impl BackendError {
    /**
        Create a generic backend failure from the given cause.
    */
    pub fn other(cause: impl Into<Cause>) -> Self {
        Self::Other(cause.into())
    }
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileNotFound { path } => write!(f, "file not found: {}", path.display()),
            Self::DirectoryNotFound { path } => {
                write!(f, "directory not found: {}", path.display())
            }
            Self::Other(cause) => write!(f, "{cause}"),
        }
    }
}

impl std::error::Error for BackendError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Other(cause) => Some(cause.as_ref()),
            _ => None,
        }
    }
}

impl From<BackendError> for Error {
    fn from(e: BackendError) -> Self {
        match e {
            BackendError::FileNotFound { path } => Self::FileNotFound { path },
            BackendError::DirectoryNotFound { path } => Self::DirectoryNotFound { path },
            BackendError::Other(cause) => Self::OpenFailed { source: cause },
        }
    }
}

/**
    Result type alias for the mediakit crate ecosystem.
*/
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn error_display() {
        let e = Error::FileNotFound {
            path: PathBuf::from("/tmp/missing.mp4"),
        };
        assert_eq!(format!("{e}"), "media file not found: /tmp/missing.mp4");

        let e = Error::DirectoryNotFound {
            path: PathBuf::from("/tmp/nodir/clip.mp4"),
        };
        assert_eq!(
            format!("{e}"),
            "containing directory not found: /tmp/nodir/clip.mp4"
        );

        let e = Error::open_failed("moov atom not found");
        assert_eq!(
            format!("{e}"),
            "failed to open the media file: moov atom not found"
        );
    }

    #[test]
    fn open_failed_keeps_cause() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "truncated");
        let e = Error::open_failed(io_err);
        let source = StdError::source(&e).unwrap();
        assert!(source.to_string().contains("truncated"));
    }

    #[test]
    fn not_found_has_no_source() {
        let e = Error::FileNotFound {
            path: PathBuf::from("x.mkv"),
        };
        assert!(StdError::source(&e).is_none());
        assert!(e.is_not_found());
    }

    #[test]
    fn backend_error_classification() {
        let e: Error = BackendError::FileNotFound {
            path: PathBuf::from("a.mp4"),
        }
        .into();
        assert!(matches!(e, Error::FileNotFound { .. }));

        let e: Error = BackendError::DirectoryNotFound {
            path: PathBuf::from("d/a.mp4"),
        }
        .into();
        assert!(matches!(e, Error::DirectoryNotFound { .. }));

        let e: Error = BackendError::other("unsupported container").into();
        assert!(matches!(e, Error::OpenFailed { .. }));
        assert!(!e.is_not_found());
    }
}
