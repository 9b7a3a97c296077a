//! Line command parsing for the terminal host.
//!
//! Each line is one command; most become a single `UiEvent`.

use tasklist_core::{Control, Intent, Key, Target, TaskId, UiEvent};

pub const HELP: &str = "\
commands:
  add <text>        add a task directly
  type <text>       type into the new-task input
  enter             press Enter in the new-task input
  edit <id>         click Edit/Save on a task
  input <id> <text> type into a task being edited
  save <id>         press Enter in a task being edited
  blur <id>         move focus away from a task being edited
  esc <id>          press Escape in a task being edited
  delete <id>       click Delete on a task
  list              print the list
  json              print the view description as JSON
  help              show this help
  quit              exit";

/// One parsed terminal command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Events(Vec<UiEvent>),
    /// Bypasses the composer so the list repaints once.
    Dispatch(Intent),
    List,
    Json,
    Help,
    Quit,
}

/// Parse failure shown to the user as a hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Unknown(String),
    MissingId(&'static str),
    BadId(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown(word) => write!(f, "unknown command `{word}`; try `help`"),
            Self::MissingId(command) => write!(f, "`{command}` needs a task id"),
            Self::BadId(value) => write!(f, "`{value}` is not a task id"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses one input line; blank lines parse to `None`.
pub fn parse_line(line: &str) -> Result<Option<Command>, ParseError> {
    let line = line.trim_start();
    let (word, rest) = split_word(line);
    if word.is_empty() {
        return Ok(None);
    }

    let command = match word {
        "add" => Command::Dispatch(Intent::AddTask {
            text: rest.to_string(),
        }),
        "type" => Command::Events(vec![UiEvent::input(Target::Composer, rest)]),
        "enter" => Command::Events(vec![UiEvent::key(Target::Composer, Key::Enter)]),
        "edit" => {
            let id = task_id("edit", rest)?;
            Command::Events(vec![UiEvent::click(Control::EditButton(id))])
        }
        "input" => {
            let (raw_id, text) = split_word(rest);
            let id = task_id("input", raw_id)?;
            Command::Events(vec![UiEvent::input(Target::TaskInput(id), text)])
        }
        "save" => {
            let id = task_id("save", rest)?;
            Command::Events(vec![UiEvent::key(Target::TaskInput(id), Key::Enter)])
        }
        "blur" => {
            let id = task_id("blur", rest)?;
            Command::Events(vec![UiEvent::blur(Target::TaskInput(id))])
        }
        "esc" => {
            let id = task_id("esc", rest)?;
            Command::Events(vec![UiEvent::key(Target::TaskInput(id), Key::Escape)])
        }
        "delete" | "rm" => {
            let id = task_id("delete", rest)?;
            Command::Events(vec![UiEvent::click(Control::DeleteButton(id))])
        }
        "list" | "ls" => Command::List,
        "json" => Command::Json,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(ParseError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn split_word(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (line, ""),
    }
}

fn task_id(command: &'static str, raw: &str) -> Result<TaskId, ParseError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ParseError::MissingId(command));
    }
    TaskId::parse(raw).ok_or_else(|| ParseError::BadId(raw.to_string()))
}
