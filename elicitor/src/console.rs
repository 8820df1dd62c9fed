//! Line-oriented console the prompter talks to the operator through

use std::future::Future;
use crate::error::Error;

pub use io::{IoConsole, StdConsole};
pub use scripted::ScriptedConsole;

pub mod io;
pub mod scripted;

/// Describes a line-oriented console: a visible transcript plus a blocking line reader
pub trait Console {
    /// Writes a single line to the transcript
    fn write_line(&mut self, line: &str) -> impl Future<Output = Result<(), Error>>;

    /// Writes `prompt` without a line break and waits for one line of input.
    ///
    /// Returns the line without its line terminator. A closed input is reported
    /// as [`ErrorCode::TransportClosed`](crate::error::ErrorCode::TransportClosed).
    fn read_line(&mut self, prompt: &str) -> impl Future<Output = Result<String, Error>>;
}

impl<C: Console + ?Sized> Console for &mut C {
    #[inline]
    fn write_line(&mut self, line: &str) -> impl Future<Output = Result<(), Error>> {
        (**self).write_line(line)
    }

    #[inline]
    fn read_line(&mut self, prompt: &str) -> impl Future<Output = Result<String, Error>> {
        (**self).read_line(prompt)
    }
}
