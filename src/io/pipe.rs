use crate::io::FileDesc;
use crate::sys;
use crate::FromInner;
use std::io::Result as IoResult;

/// An anonymous OS pipe, exposed as a connected reader/writer pair.
///
/// Used in tests to stand in for the stdio streams: bytes written into
/// `writer` come back out of `reader`, and closing `writer` is observed
/// as end of input on the other end.
#[derive(Debug)]
pub struct Pipe {
    /// The end bytes come out of.
    pub reader: FileDesc,
    /// The end bytes go into.
    pub writer: FileDesc,
}

impl Pipe {
    /// Creates a fresh pipe pair.
    ///
    /// On Unix both descriptors are created with their CLOEXEC flag set,
    /// though on systems without `pipe2` (like BSD) the flag is applied
    /// in a separate, nonatomic step.
    pub fn new() -> IoResult<Pipe> {
        let (reader, writer) = sys::io::pipe()?;
        Ok(Pipe {
            reader: FileDesc::from_inner(reader),
            writer: FileDesc::from_inner(writer),
        })
    }
}
