// Terminal adapters: stdin for lines, stdout for info, stderr for errors.
//
// Lines are read as raw bytes. Bytes that are not valid UTF-8 are replaced rather than
// ending the session, so a garbled line reaches dispatch like any other unknown input.

use crate::shared::infrastructure::console::{Console, LineReader};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};

pub struct BufferedLineReader<R> {
    reader: R,
    buffer: Vec<u8>,
}

pub type StdinLineReader = BufferedLineReader<BufReader<Stdin>>;

impl<R: AsyncBufRead + Unpin + Send> BufferedLineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: Vec::new(),
        }
    }
}

impl StdinLineReader {
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

#[async_trait::async_trait]
impl<R: AsyncBufRead + Unpin + Send> LineReader for BufferedLineReader<R> {
    async fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        self.buffer.clear();
        if self.reader.read_until(b'\n', &mut self.buffer).await? == 0 {
            return Ok(None);
        }
        let line = self
            .buffer
            .strip_suffix(b"\n")
            .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
            .unwrap_or(self.buffer.as_slice());
        Ok(Some(String::from_utf8_lossy(line).into_owned()))
    }
}

#[derive(Default)]
pub struct StdioConsole;

impl Console for StdioConsole {
    fn info(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{message}");
    }

    fn fatal(&self, message: &str) {
        eprintln!("{message}");
    }
}
