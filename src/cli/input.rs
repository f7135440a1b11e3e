//! Line sources for the menu loop: a line editor for people, stdin for scripts.

use std::io::{BufRead, Lines};

use rustyline::{error::ReadlineError, DefaultEditor};

use crate::errors::CliError;

/// What a single read produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    /// Ctrl-C at the prompt.
    Interrupted,
    Eof,
}

pub trait LineInput {
    fn read_line(&mut self, prompt: &str) -> Result<InputEvent, CliError>;

    /// Whether the source can answer follow-up confirmation prompts.
    fn is_interactive(&self) -> bool {
        false
    }
}

/// Interactive input with history, backed by `rustyline`.
pub struct EditorInput {
    editor: DefaultEditor,
}

impl EditorInput {
    pub fn new() -> Result<Self, CliError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineInput for EditorInput {
    fn read_line(&mut self, prompt: &str) -> Result<InputEvent, CliError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    self.editor.add_history_entry(trimmed).ok();
                }
                Ok(InputEvent::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(InputEvent::Interrupted),
            Err(ReadlineError::Eof) => Ok(InputEvent::Eof),
            Err(err) => Err(err.into()),
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

/// Non-interactive input: one answer per line, prompts are not echoed.
pub struct ScriptInput<R> {
    lines: Lines<R>,
}

impl<R: BufRead> ScriptInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

impl<R: BufRead> LineInput for ScriptInput<R> {
    fn read_line(&mut self, _prompt: &str) -> Result<InputEvent, CliError> {
        match self.lines.next() {
            Some(line) => Ok(InputEvent::Line(line?)),
            None => Ok(InputEvent::Eof),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn script_input_yields_lines_then_eof() {
        let mut input = ScriptInput::new(Cursor::new("1\n2024-01-05\n"));
        assert_eq!(input.read_line("> ").unwrap(), InputEvent::Line("1".into()));
        assert_eq!(
            input.read_line("> ").unwrap(),
            InputEvent::Line("2024-01-05".into())
        );
        assert_eq!(input.read_line("> ").unwrap(), InputEvent::Eof);
        assert!(!input.is_interactive());
    }
}
