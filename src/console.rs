use anyhow::{Context, Result};
use std::fmt::Display;
use std::io::{BufRead, Stdin, Stdout, Write};

/// Line-oriented prompt/response over any reader and writer.
///
/// The session and the manual importer talk to the user only through this
/// type, so tests can drive them with in-memory buffers.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<std::io::StdinLock<'static>, Stdout> {
    /// Console bound to the process's stdin and stdout
    pub fn stdio() -> Self {
        let stdin: Stdin = std::io::stdin();
        Self::new(stdin.lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `message` without a newline and return the user's trimmed reply.
    ///
    /// Returns `None` once input is exhausted. Bytes that are not valid UTF-8
    /// are replaced rather than treated as an error.
    pub fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message).context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush stdout")?;

        let mut buf = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .context("Failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }

    /// Print one line of text
    pub fn say(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.output, "{}", text).context("Failed to write to stdout")
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
