use std::io::{self, ErrorKind, Write};

/// Result writer that goes quiet once the reader hangs up.
///
/// The first `BrokenPipe` marks the sink closed; that write and every later
/// one is discarded instead of failing.
pub struct OutputSink<W: Write> {
    inner: W,
    closed: bool,
}

impl<W: Write> OutputSink<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            closed: false,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        if self.closed {
            return Ok(());
        }
        let result = writeln!(self.inner, "{line}");
        self.absorb(result)
    }

    /// Write preformatted text that already carries its own newlines.
    pub fn write_block(&mut self, block: &str) -> io::Result<()> {
        if self.closed {
            return Ok(());
        }
        let result = self.inner.write_all(block.as_bytes());
        self.absorb(result)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        if self.closed {
            return Ok(());
        }
        let result = self.inner.flush();
        self.absorb(result)
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    fn absorb(&mut self, result: io::Result<()>) -> io::Result<()> {
        match result {
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                tracing::debug!("output closed, discarding remaining results");
                self.closed = true;
                Ok(())
            }
            other => other,
        }
    }
}
