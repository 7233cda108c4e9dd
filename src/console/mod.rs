//! # Console
//!
//! The line-oriented text channel a [`ShopSession`](crate::lifecycle::ShopSession)
//! talks to the customer through.
//!
//! The [`Console`] trait is the seam: the binary uses [`StreamConsole::stdio`], while
//! tests drive the same session over in-memory byte buffers:
//!
//! ```rust
//! use burger_shop::console::{Console, StreamConsole};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut console = StreamConsole::new(&b"Tokyo\n"[..], Vec::new());
//! let answer = console.prompt("Which shop? ").await.unwrap();
//! assert_eq!(answer, "Tokyo");
//!
//! let (_, written) = console.into_parts();
//! assert_eq!(written, b"Which shop? ");
//! # }
//! ```

pub mod error;

pub use error::*;

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout};

/// Line-based text I/O with the customer.
#[async_trait]
pub trait Console: Send {
    /// Writes `text` as-is and flushes it, so prompts without a trailing
    /// newline are visible before the next read.
    async fn write(&mut self, text: &str) -> Result<(), ConsoleError>;

    /// Reads one line, without its line terminator.
    ///
    /// # Errors
    /// [`ConsoleError::Closed`] once the input is exhausted.
    async fn read_line(&mut self) -> Result<String, ConsoleError>;

    /// Writes `question` and reads the answer.
    async fn prompt(&mut self, question: &str) -> Result<String, ConsoleError> {
        self.write(question).await?;
        self.read_line().await
    }
}

/// A [`Console`] over any buffered async reader and async writer.
#[derive(Debug)]
pub struct StreamConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> StreamConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consumes the console, returning the reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl StreamConsole<BufReader<Stdin>, Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

#[async_trait]
impl<R, W> Console for StreamConsole<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn write(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.flush().await?;
        Ok(())
    }

    async fn read_line(&mut self) -> Result<String, ConsoleError> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf).await? == 0 {
            return Err(ConsoleError::Closed);
        }
        // Undecodable bytes become U+FFFD so the line is rejected as a selection.
        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
