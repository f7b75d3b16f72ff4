//! A minimal `tee`-like utility which duplicates standard input to both
//! standard output and standard error.
//!
//! The crate exposes the pieces the `tee-dup` binary is built from: a
//! [`tee`] copy loop generic over any reader/writer pair, a [`Broadcast`]
//! writer which forwards its input to two destinations, and a small
//! OS-agnostic [`io`] layer for working with raw stdio handles.
//!
//! [`tee`]: crate::tee
//! [`Broadcast`]: crate::Broadcast

#![deny(missing_copy_implementations)]
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(trivial_casts)]
#![deny(unused_import_braces)]
#![deny(unused_qualifications)]

pub mod error;
pub mod io;

mod exit_status;
mod tee;
#[cfg(unix)]
#[path = "sys/unix.rs"]
mod sys;
#[cfg(windows)]
#[path = "sys/windows/mod.rs"]
mod sys;

pub use self::exit_status::{ExitStatus, EXIT_ERROR, EXIT_SUCCESS};
pub use self::tee::{tee, Broadcast, CHUNK_SIZE};

/// A private trait for wrapping and borrowing inner types.
trait FromInner: Sized {
    /// The inner type.
    type Inner;
    /// Borrow a reference to the inner type.
    fn inner(&self) -> &Self::Inner;
    /// Convert an inner value to its wrapper.
    fn from_inner(inner: Self::Inner) -> Self;
}
