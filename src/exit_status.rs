use std::fmt;
use std::io;
use std::process;

/// Exit code for a run which copied its entire input successfully.
pub const EXIT_SUCCESS: ExitStatus = ExitStatus::Code(0);
/// Exit code for a run which failed without an OS error code to report.
pub const EXIT_ERROR: ExitStatus = ExitStatus::Code(1);

/// Describes the result of a process after it has terminated.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ExitStatus {
    /// Normal termination with an exit code.
    Code(i32),

    /// Termination by signal, with the signal number.
    ///
    /// Never generated on Windows.
    Signal(i32),
}

impl ExitStatus {
    /// Was termination successful? Signal termination not considered a success,
    /// and success is defined as a zero exit status.
    pub fn success(self) -> bool {
        self == EXIT_SUCCESS
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ExitStatus::Code(code) => write!(f, "exit code: {}", code),
            ExitStatus::Signal(code) => write!(f, "signal: {}", code),
        }
    }
}

impl<'a> From<&'a io::Error> for ExitStatus {
    /// Maps an I/O failure to the status its process should exit with:
    /// the platform error code of the failure when one is available,
    /// otherwise the generic [`EXIT_ERROR`].
    fn from(err: &'a io::Error) -> ExitStatus {
        err.raw_os_error().map_or(EXIT_ERROR, ExitStatus::Code)
    }
}

impl From<process::ExitStatus> for ExitStatus {
    fn from(exit: process::ExitStatus) -> ExitStatus {
        #[cfg(unix)]
        fn get_signal(exit: process::ExitStatus) -> Option<i32> {
            ::std::os::unix::process::ExitStatusExt::signal(&exit)
        }

        #[cfg(windows)]
        fn get_signal(_exit: process::ExitStatus) -> Option<i32> {
            None
        }

        match exit.code() {
            Some(code) => ExitStatus::Code(code),
            None => get_signal(exit).map_or(EXIT_ERROR, ExitStatus::Signal),
        }
    }
}
