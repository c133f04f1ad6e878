use std::collections::VecDeque;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::FactoryError;

/// Supplies one line of text per prompt. Lines come back without their
/// terminator.
pub trait InputSource {
    fn read_line(&mut self, prompt: &str) -> Result<String, FactoryError>;
}

impl<I: InputSource + ?Sized> InputSource for &mut I {
    fn read_line(&mut self, prompt: &str) -> Result<String, FactoryError> {
        (**self).read_line(prompt)
    }
}

/// Prompts on `writer` and reads the answer from `reader`.
#[derive(Debug)]
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl ConsoleInput<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> InputSource for ConsoleInput<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<String, FactoryError> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(FactoryError::EndOfInput);
        }
        let len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(len);
        Ok(line)
    }
}

/// Pre-recorded answers, handed out in order regardless of the prompt.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }

    /// Prompts seen so far, oldest first.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> Result<String, FactoryError> {
        self.prompts.push(prompt.to_string());
        self.lines.pop_front().ok_or(FactoryError::EndOfInput)
    }
}
