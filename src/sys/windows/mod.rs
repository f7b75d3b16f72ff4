//! Extensions and implementations specific to Windows platforms.

use std::io::{Error, Result};
use winapi::shared::minwindef::BOOL;

pub mod io;

pub(crate) fn cvt(ret: BOOL) -> Result<BOOL> {
    if ret == 0 {
        Err(Error::last_os_error())
    } else {
        Ok(ret)
    }
}
