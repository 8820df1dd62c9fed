//! Console that replays a fixed list of answers

use std::collections::VecDeque;
use crate::{
    console::Console,
    error::{Error, ErrorCode},
};

/// Represents a console that answers prompts from a script and records the transcript
///
/// # Example
/// ```
/// use elicitor::console::{Console, ScriptedConsole};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mut console = ScriptedConsole::new(["Alice"]);
/// let name = console.read_line("name: ").await.unwrap();
///
/// assert_eq!(name, "Alice");
/// assert_eq!(console.transcript(), ["name: Alice"]);
/// # }
/// ```
#[derive(Debug, Default, Clone)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    transcript: Vec<String>,
    reads: usize,
}

impl ScriptedConsole {
    /// Creates a new [`ScriptedConsole`] with answers given in order
    #[inline]
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
            reads: 0,
        }
    }

    /// Returns every written line, prompts are recorded together with the answer
    #[inline]
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Returns the number of lines read so far
    #[inline]
    pub fn reads(&self) -> usize {
        self.reads
    }

    /// Returns the number of answers not consumed yet
    #[inline]
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    /// Counts transcript lines that start with `prefix`
    #[inline]
    pub fn count_lines(&self, prefix: &str) -> usize {
        self.transcript
            .iter()
            .filter(|line| line.starts_with(prefix))
            .count()
    }
}

impl Console for ScriptedConsole {
    async fn write_line(&mut self, line: &str) -> Result<(), Error> {
        if line.is_empty() {
            self.transcript.push(String::new());
        } else {
            self.transcript.extend(line.lines().map(String::from));
        }
        Ok(())
    }

    async fn read_line(&mut self, prompt: &str) -> Result<String, Error> {
        let Some(answer) = self.answers.pop_front() else {
            self.transcript.push(prompt.into());
            return Err(Error::new(ErrorCode::TransportClosed, "Script exhausted"));
        };
        self.reads += 1;
        self.transcript.push(format!("{prompt}{answer}"));
        Ok(answer)
    }
}
