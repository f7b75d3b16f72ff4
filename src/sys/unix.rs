//! Unix-specific plumbing for the raw file descriptor wrappers.

use std::io::{Error, ErrorKind, Result};

#[path = "unix/io.rs"]
pub mod io;

pub(crate) trait IsMinusOne {
    fn is_minus_one(&self) -> bool;
}

// The syscalls made in this crate return either ssize_t (read, write)
// or c_int (dup, fcntl, pipe), so only those two widths are needed.
macro_rules! impl_is_minus_one {
    ($($t:ident)*) => ($(impl IsMinusOne for $t {
        fn is_minus_one(&self) -> bool {
            *self == -1
        }
    })*)
}

impl_is_minus_one! { i32 isize }

/// Runs a syscall, converting its `-1` failure convention into an
/// `io::Result` and retrying while it fails with `EINTR`.
pub(crate) fn cvt_r<T: IsMinusOne, F: FnMut() -> T>(mut f: F) -> Result<T> {
    loop {
        let ret = {
            let status = f();
            if status.is_minus_one() {
                Err(Error::last_os_error())
            } else {
                Ok(status)
            }
        };

        match ret {
            Err(ref e) if e.kind() == ErrorKind::Interrupted => {}
            other => return other,
        }
    }
}
