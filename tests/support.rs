//! Shared helpers for exercising the copy loop and the `tee-dup` binary.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::io::{self, Read, Write};
use std::process::{Command, Output, Stdio};
use std::thread;

// Convenience re-exports
pub use tee_dup::error::TeeError;
pub use tee_dup::{tee, Broadcast, ExitStatus, CHUNK_SIZE, EXIT_ERROR, EXIT_SUCCESS};

/// A single scripted outcome for a `ScriptedReader`.
#[derive(Debug)]
pub enum ReadStep {
    /// Yield these bytes as one successful read.
    Chunk(Vec<u8>),
    /// Fail once with `ErrorKind::Interrupted`, as a signal would cause.
    Interrupted,
    /// Fail with the given raw OS error code.
    OsErr(i32),
}

/// A reader which plays back a fixed script of read outcomes, then
/// reports end of input.
#[derive(Debug)]
pub struct ScriptedReader {
    steps: VecDeque<ReadStep>,
}

impl ScriptedReader {
    pub fn new<I: IntoIterator<Item = ReadStep>>(steps: I) -> Self {
        ScriptedReader {
            steps: steps.into_iter().collect(),
        }
    }

    /// How many scripted steps have not been consumed yet.
    pub fn remaining(&self) -> usize {
        self.steps.len()
    }
}

impl Read for ScriptedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.steps.pop_front() {
            None => Ok(0),
            Some(ReadStep::Chunk(bytes)) => {
                assert!(bytes.len() <= buf.len(), "scripted chunk exceeds buffer");
                buf[..bytes.len()].copy_from_slice(&bytes);
                Ok(bytes.len())
            }
            Some(ReadStep::Interrupted) => {
                Err(io::Error::new(io::ErrorKind::Interrupted, "interrupted"))
            }
            Some(ReadStep::OsErr(code)) => Err(io::Error::from_raw_os_error(code)),
        }
    }
}

/// A writer which records everything written to it, failing once its
/// byte quota is exhausted.
#[derive(Debug)]
pub struct QuotaWriter {
    pub written: Vec<u8>,
    /// Sizes of the individual `write` calls that were accepted.
    pub chunks: Vec<usize>,
    quota: Option<usize>,
    fail_with: i32,
}

impl QuotaWriter {
    /// A writer which accepts everything.
    pub fn unlimited() -> Self {
        QuotaWriter {
            written: Vec::new(),
            chunks: Vec::new(),
            quota: None,
            fail_with: 0,
        }
    }

    /// A writer which accepts up to `quota` bytes and then fails each
    /// subsequent write with the given raw OS error code.
    pub fn with_quota(quota: usize, fail_with: i32) -> Self {
        QuotaWriter {
            written: Vec::new(),
            chunks: Vec::new(),
            quota: Some(quota),
            fail_with,
        }
    }
}

impl Write for QuotaWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Some(quota) = self.quota {
            if self.written.len() + buf.len() > quota {
                return Err(io::Error::from_raw_os_error(self.fail_with));
            }
        }

        self.written.extend_from_slice(buf);
        self.chunks.push(buf.len());
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A writer which accepts at most a fixed number of bytes per call,
/// forcing every larger write to come back as a short write.
#[derive(Debug)]
pub struct DribbleWriter {
    pub written: Vec<u8>,
    max_per_call: usize,
}

impl DribbleWriter {
    pub fn new(max_per_call: usize) -> Self {
        assert!(max_per_call > 0, "writer must make some progress");
        DribbleWriter {
            written: Vec::new(),
            max_per_call,
        }
    }
}

impl Write for DribbleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = buf.len().min(self.max_per_call);
        self.written.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs the `tee-dup` binary with the given arguments, feeding it `input`
/// on stdin and capturing both output streams.
pub fn run_tee_dup(args: &[&str], input: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_tee-dup"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn tee-dup");

    let mut stdin = child.stdin.take().expect("child stdin missing");
    let input = input.to_vec();
    let feeder = thread::spawn(move || {
        // The child may exit before consuming everything we have,
        // in which case our write fails. That is not the test's concern.
        let _ = stdin.write_all(&input);
    });

    let output = child.wait_with_output().expect("failed to wait on tee-dup");
    feeder.join().expect("stdin feeder panicked");
    output
}

/// A deterministic but non-repeating byte pattern of the given length.
pub fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 % 251) as u8).collect()
}
