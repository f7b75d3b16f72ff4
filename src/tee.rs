//! Defines the copy loop which duplicates an input stream to two output
//! streams, chunk by chunk.

use crate::error::TeeError;
use std::io::{ErrorKind, Read, Result as IoResult, Write};

/// The maximum number of bytes transferred per read.
///
/// Matches the fixed buffer of the classic utility being modeled: input is
/// consumed and re-emitted in chunks of at most this size.
pub const CHUNK_SIZE: usize = 64;

/// A writer which forwards anything written to it to two destinations.
///
/// Each buffer is delivered to `first` in its entirety before `second`
/// sees any of it. Short writes on either destination are retried until
/// the whole buffer has been consumed.
#[derive(Debug)]
pub struct Broadcast<W1, W2> {
    /// The primary destination, written first.
    pub first: W1,
    /// The secondary destination, written once the primary has the chunk.
    pub second: W2,
}

impl<W1: Write, W2: Write> Write for Broadcast<W1, W2> {
    fn write(&mut self, buf: &[u8]) -> IoResult<usize> {
        self.first.write_all(buf)?;
        self.second.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> IoResult<()> {
        self.first.flush()?;
        self.second.flush()
    }
}

/// Copies `reader` to both `first` and `second` until the input is
/// exhausted, returning the total number of bytes duplicated.
///
/// Bytes appear in both outputs in exactly the order they were read, and
/// in the same chunking (at most [`CHUNK_SIZE`] bytes per write). Reads
/// interrupted by a signal are retried.
///
/// A failing write aborts the copy immediately with [`TeeError::Write`].
/// The C program this models kept reading after a failed write and could
/// end up discarding the failure entirely; aborting is a deliberate
/// departure from that behavior.
pub fn tee<R, W1, W2>(mut reader: R, first: W1, second: W2) -> Result<u64, TeeError>
where
    R: Read,
    W1: Write,
    W2: Write,
{
    let mut dest = Broadcast { first, second };
    let mut buf = [0u8; CHUNK_SIZE];
    let mut total = 0u64;

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(TeeError::Read(e)),
        };

        dest.write_all(&buf[..n]).map_err(TeeError::Write)?;
        total += n as u64;
    }

    dest.flush().map_err(TeeError::Write)?;
    Ok(total)
}
