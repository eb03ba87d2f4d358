//! Log sinks
//!
//! An [`Output`] is a cheap, cloneable handle to a writer. The logger keeps
//! one handle and callers may keep others; the writer itself lives as long as
//! the last handle.

use crate::error::Result;
use parking_lot::Mutex;
use std::cell::RefCell;
use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

type SharedWriter = Arc<Mutex<dyn Write + Send>>;

thread_local! {
    /// Writers this thread currently holds the lock of
    static ACTIVE_SINKS: RefCell<Vec<usize>> = const { RefCell::new(Vec::new()) };
}

/// Whether this thread is inside some sink's `write`/`flush`
pub(crate) fn writing_on_this_thread() -> bool {
    ACTIVE_SINKS.with(|sinks| !sinks.borrow().is_empty())
}

/// Marks a writer as busy on this thread until dropped
struct ActiveSink;

impl ActiveSink {
    fn enter(key: usize) -> Option<Self> {
        ACTIVE_SINKS.with(|sinks| {
            let mut sinks = sinks.borrow_mut();
            if sinks.contains(&key) {
                return None;
            }
            sinks.push(key);
            Some(ActiveSink)
        })
    }
}

impl Drop for ActiveSink {
    fn drop(&mut self) {
        ACTIVE_SINKS.with(|sinks| {
            sinks.borrow_mut().pop();
        });
    }
}

/// Handle to the byte stream log lines are written to
#[derive(Clone)]
pub struct Output {
    writer: SharedWriter,
}

impl Output {
    /// Wrap an owned writer
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Arc::new(Mutex::new(writer)),
        }
    }

    /// Wrap a writer the caller already shares, so the caller can keep using it
    pub fn from_shared<W: Write + Send + 'static>(writer: Arc<Mutex<W>>) -> Self {
        Self { writer }
    }

    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }

    /// Append to a file, creating it if needed
    pub fn file(path: impl AsRef<Path>) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.as_ref())?;

        Ok(Self::new(BufWriter::new(file)))
    }

    /// Write one complete record and flush it.
    ///
    /// The writer stays locked for the whole record, so records from
    /// concurrent callers never interleave. A writer that logs back into
    /// its own sink from inside `write` gets `WouldBlock` for the nested
    /// record instead of waiting on a lock its own thread holds.
    pub fn write_all(&self, buf: &[u8]) -> io::Result<()> {
        let Some(_active) = ActiveSink::enter(self.key()) else {
            return Err(io::Error::new(
                io::ErrorKind::WouldBlock,
                "log sink written to from inside its own write",
            ));
        };

        let mut writer = self.writer.lock();
        writer.write_all(buf)?;
        writer.flush()
    }

    fn key(&self) -> usize {
        Arc::as_ptr(&self.writer).cast::<()>() as usize
    }

    /// Whether both handles point at the same writer
    pub fn same_sink(&self, other: &Output) -> bool {
        Arc::ptr_eq(&self.writer, &other.writer)
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::stdout()
    }
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Output")
            .field("writer", &Arc::as_ptr(&self.writer).cast::<()>())
            .finish()
    }
}

/// In-memory sink that captures everything written to it.
///
/// Clones share the same buffer, so a test can hand one clone to a logger
/// and inspect another.
#[derive(Debug, Clone, Default)]
pub struct MemoryOutput {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemoryOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured bytes decoded as UTF-8 (lossy)
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.buffer.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.buffer.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Write for MemoryOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl From<MemoryOutput> for Output {
    fn from(memory: MemoryOutput) -> Self {
        Output::new(memory)
    }
}
