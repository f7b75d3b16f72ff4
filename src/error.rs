//! A module defining the errors that may arise while duplicating a stream
//! to its two destinations.

use crate::ExitStatus;
use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::io::Error as IoError;

/// An error which arises while copying input to the two output streams.
///
/// Read and write outcomes are tracked separately so that callers can tell
/// which side of the copy failed: the classic C rendition of this utility
/// folded both into a single variable and could silently swallow a failed
/// write, a behavior this crate deliberately does not reproduce.
#[derive(Debug)]
pub enum TeeError {
    /// The input stream failed while reading the next chunk.
    Read(IoError),
    /// One of the output streams failed while the chunk was being written.
    Write(IoError),
}

impl TeeError {
    /// The exit status the process should report for this error.
    ///
    /// The status mirrors the platform error code of the underlying I/O
    /// failure, falling back to the generic error status when the failure
    /// carries no OS-level code.
    pub fn status(&self) -> ExitStatus {
        self.io_error().into()
    }

    /// Borrows the underlying I/O error, whichever side it came from.
    pub fn io_error(&self) -> &IoError {
        match *self {
            TeeError::Read(ref e) | TeeError::Write(ref e) => e,
        }
    }
}

impl Eq for TeeError {}
impl PartialEq for TeeError {
    fn eq(&self, other: &Self) -> bool {
        use self::TeeError::*;

        match (self, other) {
            (&Read(ref a), &Read(ref b)) | (&Write(ref a), &Write(ref b)) => {
                a.kind() == b.kind() && a.raw_os_error() == b.raw_os_error()
            }
            _ => false,
        }
    }
}

impl Display for TeeError {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            TeeError::Read(ref e) => write!(fmt, "failed to read input: {}", e),
            TeeError::Write(ref e) => write!(fmt, "failed to write output: {}", e),
        }
    }
}

impl Error for TeeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.io_error())
    }
}
