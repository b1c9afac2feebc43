//! Dialog provider that answers from a predefined script
//!
//! Useful for automation and tests: answers are handed out in order and
//! every line that would have been shown is kept in a transcript.

use super::interface::{
    format_line, InputOptions, InputRequester, MessageDisplay, MessageOptions,
};
use crate::error::{Error, Result};
use std::collections::VecDeque;

#[derive(Debug, Default)]
pub struct ScriptedDialog {
    answers: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an answer for the next unanswered input request
    pub fn with_answer(mut self, answer: impl Into<String>) -> Self {
        self.answers.push_back(answer.into());
        self
    }

    pub fn with_answers<I, S>(mut self, answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.answers.extend(answers.into_iter().map(Into::into));
        self
    }

    /// Every message and prompt shown so far, formatted as the console prints it
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    pub fn remaining_answers(&self) -> usize {
        self.answers.len()
    }
}

impl MessageDisplay for ScriptedDialog {
    fn display(&mut self, message: &str, options: &MessageOptions) -> Result<()> {
        self.transcript.push(format_line(message, options.title.as_deref()));
        Ok(())
    }
}

impl InputRequester for ScriptedDialog {
    fn request_input(&mut self, prompt: &str, options: &InputOptions) -> Result<String> {
        self.transcript.push(format_line(prompt, options.title.as_deref()));
        let answer = self.answers.pop_front().ok_or(Error::InputExhausted)?;
        log::debug!("Auto-answering '{prompt}' with '{answer}'");
        Ok(answer)
    }
}
