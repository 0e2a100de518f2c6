//! Line-oriented scripts that drive a [`TodoProgram`].
//!
//! Each line is one command:
//!
//! ```text
//! # comments and blank lines are ignored
//! input .new-todo Buy milk
//! key .new-todo Enter
//! click .destroy[1]
//! dblclick label
//! check .toggle on
//! blur #todo-0
//! render
//! dump
//! ```
//!
//! `input` sets the element's text, `key` presses a key in it, `check` takes
//! `on` or `off`. `render` prints the document as HTML and `dump` prints the
//! application state as JSON.
//!
//! The text of `input` is everything after the single space that follows the
//! selector, taken verbatim.

use crate::TodoProgram;
use composable_ui_core::event::{DomEvent, Key};
use composable_ui_core::selector::{Selector, SelectorError};
use composable_ui_runtime::RuntimeError;
use std::io::Write;
use thiserror::Error;

/// Errors produced while parsing or running a script
#[derive(Error, Debug)]
pub enum ScriptError {
    /// The first word of a line is not a command
    #[error("line {line}: unknown command `{command}`")]
    UnknownCommand {
        /// 1-based line number
        line: usize,
        /// The unrecognized word
        command: String,
    },

    /// A command is missing an argument
    #[error("line {line}: `{command}` expects {expected}")]
    MissingArgument {
        /// 1-based line number
        line: usize,
        /// The command
        command: &'static str,
        /// Description of the missing argument
        expected: &'static str,
    },

    /// A command received more arguments than it takes
    #[error("line {line}: unexpected argument `{found}`")]
    UnexpectedArgument {
        /// 1-based line number
        line: usize,
        /// The extra text
        found: String,
    },

    /// `check` was given something other than `on` or `off`
    #[error("line {line}: expected `on` or `off`, found `{found}`")]
    InvalidCheck {
        /// 1-based line number
        line: usize,
        /// The argument given
        found: String,
    },

    /// The selector could not be parsed
    #[error("line {line}: {source}")]
    Selector {
        /// 1-based line number
        line: usize,
        /// The parse failure
        #[source]
        source: SelectorError,
    },

    /// The event could not be delivered
    #[error("line {line}: {source}")]
    Runtime {
        /// 1-based line number
        line: usize,
        /// The routing failure
        #[source]
        source: RuntimeError,
    },

    /// Writing output failed
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the state snapshot failed
    #[error("failed to serialize state: {0}")]
    Json(#[from] serde_json::Error),
}

/// One parsed command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Deliver a DOM event to the selected element
    Event {
        /// The target element
        selector: Selector,
        /// The event
        event: DomEvent,
    },
    /// Print the current document as HTML
    Render,
    /// Print the application state as JSON
    Dump,
}

/// A command with the line it came from
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptLine {
    /// 1-based line number
    pub line: usize,
    /// The command
    pub command: Command,
}

/// Splits off the first whitespace-delimited word; the remainder starts after
/// the single whitespace character that ended the word.
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.char_indices().find(|(_, c)| c.is_whitespace()) {
        Some((i, c)) => (&s[..i], &s[i + c.len_utf8()..]),
        None => (s, ""),
    }
}

fn strip_comment(text: &str) -> &str {
    let trimmed = text.trim_start();
    if trimmed.starts_with('#') { "" } else { text }
}

/// Parses one line; `Ok(None)` for blank lines and comments
///
/// # Errors
///
/// Returns a [`ScriptError`] describing the first problem on the line.
pub fn parse_line(line: usize, text: &str) -> Result<Option<Command>, ScriptError> {
    let text = strip_comment(text);
    let (word, rest) = split_word(text);
    if word.is_empty() {
        return Ok(None);
    }

    let command: &'static str = match word {
        "input" => "input",
        "key" => "key",
        "click" => "click",
        "dblclick" => "dblclick",
        "check" => "check",
        "blur" => "blur",
        "render" | "dump" => {
            let extra = rest.trim();
            if !extra.is_empty() {
                return Err(ScriptError::UnexpectedArgument {
                    line,
                    found: extra.to_string(),
                });
            }
            return Ok(Some(if word == "render" { Command::Render } else { Command::Dump }));
        }
        other => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: other.to_string(),
            });
        }
    };

    let (raw_selector, argument) = split_word(rest);
    if raw_selector.is_empty() {
        return Err(ScriptError::MissingArgument {
            line,
            command,
            expected: "a selector",
        });
    }
    let selector = raw_selector
        .parse::<Selector>()
        .map_err(|source| ScriptError::Selector { line, source })?;

    let trimmed = argument.trim();
    let event = match command {
        "input" => DomEvent::Input(argument.trim_end_matches(['\r', '\n']).to_string()),
        "key" => {
            if trimmed.is_empty() {
                return Err(ScriptError::MissingArgument {
                    line,
                    command,
                    expected: "a key name",
                });
            }
            match trimmed.parse::<Key>() {
                Ok(key) => DomEvent::KeyDown(key),
                Err(never) => match never {},
            }
        }
        "check" => match trimmed {
            "on" => DomEvent::Check(true),
            "off" => DomEvent::Check(false),
            "" => {
                return Err(ScriptError::MissingArgument {
                    line,
                    command,
                    expected: "`on` or `off`",
                });
            }
            other => {
                return Err(ScriptError::InvalidCheck {
                    line,
                    found: other.to_string(),
                });
            }
        },
        _ => {
            if !trimmed.is_empty() {
                return Err(ScriptError::UnexpectedArgument {
                    line,
                    found: trimmed.to_string(),
                });
            }
            match command {
                "click" => DomEvent::Click,
                "dblclick" => DomEvent::DoubleClick,
                _ => DomEvent::Blur,
            }
        }
    };

    Ok(Some(Command::Event { selector, event }))
}

/// Parses a whole script
///
/// # Errors
///
/// Returns the error of the first line that fails to parse.
pub fn parse_script(source: &str) -> Result<Vec<ScriptLine>, ScriptError> {
    source
        .lines()
        .enumerate()
        .filter_map(|(i, text)| {
            parse_line(i + 1, text)
                .map(|command| command.map(|command| ScriptLine { line: i + 1, command }))
                .transpose()
        })
        .collect()
}

/// Runs parsed commands against `program`, writing `render`/`dump` output to `out`
///
/// # Errors
///
/// Stops at the first event that cannot be delivered, or on an output failure.
pub fn run(program: &mut TodoProgram, script: &[ScriptLine], out: &mut impl Write) -> Result<(), ScriptError> {
    for ScriptLine { line, command } in script {
        match command {
            Command::Event { selector, event } => {
                let action = program
                    .dispatch(selector, event.clone())
                    .map_err(|source| ScriptError::Runtime { line: *line, source })?;
                match action {
                    Some(action) => tracing::info!(line, ?action, "Dispatched"),
                    None => tracing::debug!(line, %selector, "Event ignored"),
                }
            }
            Command::Render => writeln!(out, "{}", program.render_html())?,
            Command::Dump => {
                let json = program.state(serde_json::to_string_pretty)?;
                writeln!(out, "{json}")?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Command {
        parse_line(1, text).unwrap().unwrap()
    }

    fn event(selector: &str, event: DomEvent) -> Command {
        Command::Event {
            selector: selector.parse().unwrap(),
            event,
        }
    }

    #[test]
    fn skips_blank_lines_and_comments() {
        assert_eq!(parse_line(1, "").unwrap(), None);
        assert_eq!(parse_line(1, "   ").unwrap(), None);
        assert_eq!(parse_line(1, "  # click .destroy").unwrap(), None);
    }

    #[test]
    fn input_keeps_text_verbatim() {
        assert_eq!(
            parse("input .new-todo Buy milk"),
            event(".new-todo", DomEvent::Input("Buy milk".to_string()))
        );
        assert_eq!(
            parse("input .new-todo   padded  "),
            event(".new-todo", DomEvent::Input("  padded  ".to_string()))
        );
        assert_eq!(parse("input #todo-0"), event("#todo-0", DomEvent::Input(String::new())));
    }

    #[test]
    fn parses_event_commands() {
        assert_eq!(parse("key .new-todo Enter"), event(".new-todo", DomEvent::KeyDown(Key::Enter)));
        assert_eq!(parse("click .destroy[1]"), event(".destroy[1]", DomEvent::Click));
        assert_eq!(parse("dblclick label"), event("label", DomEvent::DoubleClick));
        assert_eq!(parse("check .toggle on"), event(".toggle", DomEvent::Check(true)));
        assert_eq!(parse("check .toggle-all off"), event(".toggle-all", DomEvent::Check(false)));
        assert_eq!(parse("blur #todo-3"), event("#todo-3", DomEvent::Blur));
        assert_eq!(parse("render"), Command::Render);
        assert_eq!(parse("dump"), Command::Dump);
    }

    #[test]
    fn reports_bad_lines() {
        assert!(matches!(
            parse_line(3, "explode .x"),
            Err(ScriptError::UnknownCommand { line: 3, .. })
        ));
        assert!(matches!(
            parse_line(1, "click"),
            Err(ScriptError::MissingArgument { command: "click", .. })
        ));
        assert!(matches!(
            parse_line(1, "key .new-todo"),
            Err(ScriptError::MissingArgument { command: "key", .. })
        ));
        assert!(matches!(
            parse_line(1, "check .toggle maybe"),
            Err(ScriptError::InvalidCheck { .. })
        ));
        assert!(matches!(
            parse_line(1, "click .destroy now"),
            Err(ScriptError::UnexpectedArgument { .. })
        ));
        assert!(matches!(
            parse_line(1, "render please"),
            Err(ScriptError::UnexpectedArgument { .. })
        ));
        assert!(matches!(
            parse_line(1, "click .toggle[x]"),
            Err(ScriptError::Selector { .. })
        ));
    }

    #[test]
    fn parse_script_numbers_lines() {
        let script = parse_script("# setup\ninput .new-todo a\n\nkey .new-todo Enter\n").unwrap();
        let lines: Vec<usize> = script.iter().map(|l| l.line).collect();
        assert_eq!(lines, vec![2, 4]);
    }

    #[test]
    fn parse_script_stops_at_first_error() {
        let err = parse_script("render\nbogus\nalso bogus").unwrap_err();
        assert_eq!(err.to_string(), "line 2: unknown command `bogus`");
    }
}
