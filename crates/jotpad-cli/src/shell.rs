//! Interactive note pad.
//!
//! Mounts a [`NotesPanel`] on the terminal and turns typed commands into the
//! gestures a pointer-driven UI would produce: row clicks, the "New Note"
//! control, field edits followed by a blur, and confirmed deletes.

use std::io::{BufRead, Write};

use jotpad_core::view::{Confirm, NotesPanel};
use jotpad_core::{AppController, NoteRepository};

use crate::error::CliError;

pub const HELP_TEXT: &str = "\
Commands:
  new               create a note and open it
  select <ID>       open a note
  title <TEXT>      set the open note's title
  body <TEXT>       set the open note's body (\\n for line breaks)
  delete <ID>       delete a note (asks first)
  show              redraw the notes
  help              show this help
  quit              leave";

/// One line typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    New,
    Select(String),
    Title(String),
    Body(String),
    Delete(String),
    Show,
    Help,
    Quit,
    Empty,
}

impl ShellCommand {
    /// Parse a prompt line. Text after `title`/`body` is kept verbatim.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        let (word, rest) = trimmed
            .split_once(char::is_whitespace)
            .unwrap_or((trimmed, ""));

        let command = match word.to_ascii_lowercase().as_str() {
            "" => Self::Empty,
            "new" | "add" => Self::New,
            "select" | "open" => Self::Select(required_id(word, rest)?),
            "title" => Self::Title(rest.to_string()),
            "body" => Self::Body(rest.replace("\\n", "\n")),
            "delete" | "rm" => Self::Delete(required_id(word, rest)?),
            "show" | "list" => Self::Show,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => return Err(format!("Unknown command `{other}`; type `help`")),
        };
        Ok(command)
    }
}

fn required_id(word: &str, rest: &str) -> Result<String, String> {
    let id = rest.trim();
    if id.is_empty() {
        Err(format!("`{word}` needs a note id"))
    } else {
        Ok(id.to_string())
    }
}

/// Yes/no prompt that reads its answer from a line-based input.
pub struct PromptConfirm<'a, R: ?Sized, W: ?Sized> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead + ?Sized, W: Write + ?Sized> PromptConfirm<'a, R, W> {
    pub fn new(input: &'a mut R, output: &'a mut W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead + ?Sized, W: Write + ?Sized> Confirm for PromptConfirm<'_, R, W> {
    fn confirm(&mut self, message: &str) -> bool {
        if write!(self.output, "{message} [y/N] ")
            .and_then(|()| self.output.flush())
            .is_err()
        {
            return false;
        }

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(e) => {
                tracing::warn!("Failed to read confirmation: {}", e);
                false
            }
        }
    }
}

/// Accepts `y`/`yes` in any case.
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Confirmation that always agrees (`--yes`).
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, message: &str) -> bool {
        tracing::debug!("Auto-confirmed: {}", message);
        true
    }
}

pub struct Shell<R, W> {
    input: R,
    output: W,
    assume_yes: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub const fn new(input: R, output: W, assume_yes: bool) -> Self {
        Self {
            input,
            output,
            assume_yes,
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until `quit` or end of input
    pub fn run<Repo: NoteRepository>(
        &mut self,
        controller: &mut AppController<Repo, NotesPanel>,
    ) -> Result<(), CliError> {
        controller.view().render(&mut self.output)?;

        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                break;
            }

            let command = match ShellCommand::parse(&line) {
                Ok(command) => command,
                Err(message) => {
                    writeln!(self.output, "{message}")?;
                    continue;
                }
            };

            match command {
                ShellCommand::Quit => break,
                ShellCommand::Empty => continue,
                ShellCommand::Help => writeln!(self.output, "{HELP_TEXT}")?,
                other => {
                    self.execute(other, controller)?;
                    writeln!(self.output)?;
                    controller.view().render(&mut self.output)?;
                }
            }
        }

        Ok(())
    }

    fn execute<Repo: NoteRepository>(
        &mut self,
        command: ShellCommand,
        controller: &mut AppController<Repo, NotesPanel>,
    ) -> Result<(), CliError> {
        let event = match command {
            ShellCommand::New => Some(controller.view().list().click_add()),
            ShellCommand::Select(id) => {
                let event = controller.view().list().click_item(&id);
                if event.is_none() {
                    writeln!(self.output, "No note with id {id}")?;
                }
                event
            }
            ShellCommand::Title(text) => {
                if !controller.view().editor().is_visible() {
                    writeln!(self.output, "No note open; use `new` first")?;
                    return Ok(());
                }
                controller.view_mut().editor_mut().input_title(text);
                controller.view().editor().blur()
            }
            ShellCommand::Body(text) => {
                if !controller.view().editor().is_visible() {
                    writeln!(self.output, "No note open; use `new` first")?;
                    return Ok(());
                }
                controller.view_mut().editor_mut().input_body(text);
                controller.view().editor().blur()
            }
            ShellCommand::Delete(id) => {
                let list = controller.view().list();
                if list.click_item(&id).is_none() {
                    writeln!(self.output, "No note with id {id}")?;
                    return Ok(());
                }

                let event = if self.assume_yes {
                    list.click_delete(&id, &mut AssumeYes)
                } else {
                    let mut confirm = PromptConfirm::new(&mut self.input, &mut self.output);
                    list.click_delete(&id, &mut confirm)
                };
                if event.is_none() {
                    writeln!(self.output, "Delete cancelled")?;
                }
                event
            }
            ShellCommand::Show | ShellCommand::Help | ShellCommand::Quit | ShellCommand::Empty => {
                None
            }
        };

        if let Some(event) = event {
            controller.dispatch(event)?;
        }
        Ok(())
    }
}
