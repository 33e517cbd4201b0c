use std::fs::File;
use std::io::{self, BufWriter, Seek, SeekFrom, Write};
use std::path::Path;

use byteorder::{LittleEndian, WriteBytesExt};
use log::{debug, warn};
use thiserror::Error;

use crate::riff::tag::Tag;
use crate::riff::HEADER_LEN;

#[derive(Error, Debug)]
pub enum RiffError {
    #[error("output sink unavailable")]
    SinkUnavailable(#[source] io::Error),
    #[error("ascend without a matching descend")]
    NoOpenChunk,
    #[error("chunk identifier must be exactly 4 bytes, got {0}")]
    InvalidIdentifier(usize),
    #[error("container chunk {0} requires a form type")]
    MissingFormType(Tag),
}

// One currently open, not yet size patched chunk.
struct Frame {
    header_offset: u64,
    id: Tag,
}

/// Incremental writer for nested RIFF chunks.
///
/// Chunk sizes are not known until their content has been written, so
/// `descend` emits a header with a placeholder size and pushes a frame,
/// and the matching `ascend` pops it, seeks back, and patches the real
/// size in. Frames close in strict LIFO order, mirroring the chunk tree.
///
/// Any sink I/O failure poisons the writer: the stack keeps balancing so
/// teardown terminates, but every further operation reports
/// [`RiffError::SinkUnavailable`] without touching the sink again.
pub struct ChunkWriter<W: Write + Seek> {
    inner: W,
    stack: Vec<Frame>,
    poisoned: bool,
}

impl ChunkWriter<BufWriter<File>> {
    /// Creates (truncating) the file at `path` and wraps it.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, RiffError> {
        let file = File::create(path).map_err(RiffError::SinkUnavailable)?;
        Ok(ChunkWriter::new(BufWriter::new(file)))
    }
}

impl<W: Write + Seek> ChunkWriter<W> {
    pub fn new(sink: W) -> Self {
        ChunkWriter {
            inner: sink,
            stack: Vec::new(),
            poisoned: false,
        }
    }

    /// False once any sink write or seek has failed.
    pub fn healthy(&self) -> bool {
        !self.poisoned
    }

    /// Number of currently open frames.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    fn guard(&self) -> Result<(), RiffError> {
        if self.poisoned {
            Err(RiffError::SinkUnavailable(io::Error::new(
                io::ErrorKind::Other,
                "sink previously failed",
            )))
        } else {
            Ok(())
        }
    }

    fn sink<T>(&mut self, res: io::Result<T>) -> Result<T, RiffError> {
        match res {
            Ok(v) => Ok(v),
            Err(e) => {
                self.poisoned = true;
                Err(RiffError::SinkUnavailable(e))
            }
        }
    }

    /// Opens a chunk: records the header offset, pushes a frame, and
    /// writes the header with a zero placeholder size.
    ///
    /// Container ids (`RIFF`, `LIST`) must supply a form type, which is
    /// written right after the header and counts toward the chunk size.
    /// `form` is ignored for non-container ids.
    pub fn descend(&mut self, id: Tag, form: Option<Tag>) -> Result<(), RiffError> {
        self.guard()?;
        if id.is_container() && form.is_none() {
            return Err(RiffError::MissingFormType(id));
        }

        let pos = self.inner.stream_position();
        let header_offset = self.sink(pos)?;
        debug!("descend {} at offset {}", id, header_offset);

        // The frame goes on the stack before the header write so that a
        // failed write still leaves ascend bookkeeping balanced.
        self.stack.push(Frame { header_offset, id });

        let res = emit_header(&mut self.inner, id, form);
        self.sink(res)
    }

    /// Closes the innermost open chunk: patches its size field and pads
    /// the stream out to an even offset if the content length was odd.
    ///
    /// This is the only operation that moves the cursor backward.
    pub fn ascend(&mut self) -> Result<(), RiffError> {
        let frame = self.stack.pop().ok_or(RiffError::NoOpenChunk)?;
        self.guard()?;

        let res = patch_header(&mut self.inner, &frame);
        self.sink(res)
    }

    /// Appends raw content bytes at the cursor, growing the innermost
    /// open chunk. Valid at top level too, although RIFF practice always
    /// wraps top level content in a `RIFF` container.
    pub fn write(&mut self, buf: &[u8]) -> Result<(), RiffError> {
        self.guard()?;
        let res = self.inner.write_all(buf);
        self.sink(res)
    }

    /// Scoped descend: opens the chunk, runs `f`, and closes every frame
    /// `f` left open on any exit path, so a caller cannot forget to
    /// close a chunk it opened.
    pub fn chunk<F>(&mut self, id: Tag, form: Option<Tag>, f: F) -> Result<(), RiffError>
    where
        F: FnOnce(&mut Self) -> Result<(), RiffError>,
    {
        let depth = self.stack.len();
        let ret = match self.descend(id, form) {
            Ok(()) => f(self),
            Err(e) => Err(e),
        };

        let mut closed = Ok(());
        while self.stack.len() > depth {
            closed = self.ascend();
        }
        ret.and(closed)
    }

    /// Closes every remaining open frame, innermost first, and flushes.
    pub fn finish(mut self) -> Result<(), RiffError> {
        self.close_out()?;
        let res = self.inner.flush();
        self.sink(res)
    }

    fn close_out(&mut self) -> Result<(), RiffError> {
        let mut ret = Ok(());
        while !self.stack.is_empty() {
            let res = self.ascend();
            if ret.is_ok() {
                ret = res;
            }
        }
        ret
    }
}

impl<W: Write + Seek> Drop for ChunkWriter<W> {
    fn drop(&mut self) {
        // Implicit close out: frames the caller never ascended still get
        // their sizes patched, keeping the emitted file well formed.
        if !self.stack.is_empty() && self.close_out().is_err() {
            warn!("chunk writer dropped with an unusable sink, output is incomplete");
        }
        let _ = self.inner.flush();
    }
}

fn emit_header<W: Write>(sink: &mut W, id: Tag, form: Option<Tag>) -> io::Result<()> {
    sink.write_all(id.as_bytes())?;
    sink.write_u32::<LittleEndian>(0)?;
    if id.is_container() {
        if let Some(form) = form {
            sink.write_all(form.as_bytes())?;
        }
    }
    Ok(())
}

fn patch_header<W: Write + Seek>(sink: &mut W, frame: &Frame) -> io::Result<()> {
    let end = sink.stream_position()?;
    let size = (end - frame.header_offset - HEADER_LEN) as u32;

    sink.seek(SeekFrom::Start(frame.header_offset + 4))?;
    sink.write_u32::<LittleEndian>(size)?;
    sink.seek(SeekFrom::Start(end))?;

    // Pad out to an even offset. The pad byte occupies stream space (so
    // the parent's offset delta accounts for it) but is not part of the
    // size just recorded.
    if end & 0x01 == 1 {
        sink.write_all(&[0])?;
    }

    debug!("ascend {} size {}", frame.id, size);
    Ok(())
}
