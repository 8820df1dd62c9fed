//! Console over async reader/writer pairs, stdio by default

use tokio::io::{
    AsyncBufRead,
    AsyncBufReadExt,
    AsyncWrite,
    AsyncWriteExt,
    BufReader,
    Stdin,
    Stdout,
};
use crate::{
    console::Console,
    error::{Error, ErrorCode},
};

/// Represents a console over the process stdin/stdout
pub type StdConsole = IoConsole<BufReader<Stdin>, Stdout>;

/// Represents a console over any buffered reader and writer
#[derive(Debug)]
pub struct IoConsole<R, W> {
    reader: R,
    writer: W,
}

impl StdConsole {
    /// Creates a new console bound to the process stdin/stdout
    #[inline]
    pub fn stdio() -> Self {
        Self::new(
            BufReader::new(tokio::io::stdin()),
            tokio::io::stdout())
    }
}

impl Default for StdConsole {
    #[inline]
    fn default() -> Self {
        Self::stdio()
    }
}

impl<R, W> IoConsole<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Creates a new [`IoConsole`]
    #[inline]
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Unwraps the underlying reader and writer
    #[inline]
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    async fn write_flushed(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.writer.write_all(bytes).await?;
        self.writer.flush().await?;
        Ok(())
    }
}

impl<R, W> Console for IoConsole<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    async fn write_line(&mut self, line: &str) -> Result<(), Error> {
        let mut bytes = Vec::with_capacity(line.len() + 1);
        bytes.extend_from_slice(line.as_bytes());
        bytes.push(b'\n');
        self.write_flushed(&bytes).await
    }

    async fn read_line(&mut self, prompt: &str) -> Result<String, Error> {
        self.write_flushed(prompt.as_bytes()).await?;

        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf).await? == 0 {
            #[cfg(feature = "tracing")]
            tracing::debug!(logger = "elicitor", "Input stream reached EOF");
            return Err(Error::new(ErrorCode::TransportClosed, "Input stream closed"));
        }

        let len = buf
            .iter()
            .rposition(|b| !matches!(b, b'\n' | b'\r'))
            .map_or(0, |i| i + 1);
        buf.truncate(len);
        // Invalid UTF-8 is replaced rather than failing the whole collection
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
