// std imports
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

// ---

/// Writer that can be shared between workers.
///
/// Every `write_all` holds the lock for its whole duration, so a line
/// written with a single `write_all` call never interleaves with others.
pub struct SharedWriter<W> {
    inner: Arc<Mutex<W>>,
}

impl<W: Write> SharedWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner: Arc::new(Mutex::new(inner)),
        }
    }

    /// Runs `f` with exclusive access to the underlying writer.
    pub fn with<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        let mut guard = self.lock();
        f(&mut *guard)
    }

    fn lock(&self) -> MutexGuard<'_, W> {
        // a panicking writer leaves the stream usable for other workers
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W> Clone for SharedWriter<W> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<W: Write> Write for SharedWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.lock().write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.lock().flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_target() {
        let writer = SharedWriter::new(Vec::new());
        let mut a = writer.clone();
        let mut b = writer.clone();
        a.write_all(b"first\n").unwrap();
        b.write_all(b"second\n").unwrap();
        b.flush().unwrap();
        writer.with(|buf| assert_eq!(buf, b"first\nsecond\n"));
    }
}
