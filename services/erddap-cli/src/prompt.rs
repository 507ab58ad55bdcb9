//! Line-oriented user input.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

/// Source of answers for interactive workflows.
pub trait Prompter {
    /// Show `prompt` and return the answer, trimmed. End of input is an
    /// empty answer.
    fn ask(&mut self, prompt: &str) -> Result<String>;
}

/// Prompts on stdout, reads answers from stdin.
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;

        let mut line = String::new();
        io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        Ok(line.trim().to_string())
    }
}

/// Answers from a fixed script, recording every prompt shown.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: std::collections::VecDeque<String>,
    pub prompts: Vec<String>,
}

#[cfg(test)]
impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            prompts: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

#[cfg(test)]
impl Prompter for ScriptedPrompter {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        Ok(self
            .answers
            .pop_front()
            .map(|a| a.trim().to_string())
            .unwrap_or_default())
    }
}
