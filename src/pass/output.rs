//! Password output through a buffer that is wiped after every flush.

use std::io::{self, Write};

use zeroize::Zeroize;

const DEFAULT_CAPACITY: usize = 8 * 1024;

/// Buffered writer that zeroizes its buffer whenever it is drained.
///
/// The buffer never grows past its initial capacity, so no stale copies are
/// left behind by reallocation. Writes larger than the buffer go straight to
/// the inner writer.
pub struct SecureBufWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> SecureBufWriter<W> {
    pub fn new(inner: W) -> Self {
        Self::with_capacity(DEFAULT_CAPACITY, inner)
    }

    pub fn with_capacity(capacity: usize, inner: W) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(capacity),
        }
    }

    fn drain(&mut self) -> io::Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        let result = self.inner.write_all(&self.buf);
        self.buf.zeroize();
        result
    }
}

impl<W: Write> Write for SecureBufWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.buf.len() + data.len() > self.buf.capacity() {
            self.drain()?;
        }
        if data.len() >= self.buf.capacity() {
            return self.inner.write(data);
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.drain()?;
        self.inner.flush()
    }
}

impl<W: Write> Drop for SecureBufWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush();
        self.buf.zeroize();
    }
}

/// Write each password on its own line and flush.
///
/// Passwords are taken one at a time, so a lazy [`Batch`](super::Batch) never
/// holds more than one in memory.
pub fn write_lines<W, I>(out: W, passwords: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut out = SecureBufWriter::new(out);
    for pw in passwords {
        out.write_all(pw.as_ref().as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()
}
