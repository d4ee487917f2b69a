//! Operator prompt over an async line reader

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout};

use crate::generation::{ClassificationPrompt, DecisionProvider, GenerationError};

/// Asks the classification question and reads one line per answer.
///
/// End of input yields `None`, which cancels the run. Bytes that are not
/// UTF-8 are replaced rather than failing the read.
pub struct ConsoleDecisionProvider<R, W> {
    reader: R,
    writer: W,
}

impl ConsoleDecisionProvider<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> ConsoleDecisionProvider<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

#[async_trait]
impl<R, W> DecisionProvider for ConsoleDecisionProvider<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn ask(
        &mut self,
        prompt: &ClassificationPrompt,
    ) -> Result<Option<String>, GenerationError> {
        self.writer
            .write_all(format!("{}\n", prompt.question()).as_bytes())
            .await?;
        self.writer.flush().await?;

        // Invalid UTF-8 is decoded lossily so the classifier rejects it
        let mut line = Vec::new();
        if self.reader.read_until(b'\n', &mut line).await? == 0 {
            tracing::debug!(operation_id = %prompt.operation_id, "Operator input closed");
            return Ok(None);
        }

        let answer = String::from_utf8_lossy(&line)
            .trim_end_matches(['\n', '\r'])
            .to_string();
        Ok(Some(answer))
    }
}
