//! Line-oriented event language for the terminal front-end
//!
//! ```text
//! go form                      # navigate
//! set firstName Jan            # type a value and leave the field
//! check consent                # flip a checkbox
//! toggle destinations Španělsko
//! submit
//! ok                           # acknowledge the dialog
//! ```

use thiserror::Error;

use crate::form::FieldValue;
use crate::navigation::{Destination, FormEvent, ShellEvent, UnknownDestination};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Events applied in order
    Events(Vec<ShellEvent>),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("`{command}` needs a {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error(transparent)]
    Destination(#[from] UnknownDestination),
}

pub const HELP: &str = "\
go <home|form|profile|settings>  switch screen
menu                             open or close the drawer
set <field> <text>               type a value and leave the field
check <field>                    flip a checkbox
toggle <field> <option>          select or deselect an option
touch <field>                    leave a field without typing
submit                           send the form
ok                               acknowledge the dialog
show                             redraw the screen
quit                             exit";

/// Parse one line; blank lines and `#` comments yield `None`.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (keyword, rest) = split_word(line);
    let command = match keyword.to_ascii_lowercase().as_str() {
        "go" => {
            let (target, _) = split_word(rest);
            if target.is_empty() {
                return Err(missing("go", "destination"));
            }
            single(ShellEvent::Navigate(target.parse::<Destination>()?))
        }
        "menu" => single(ShellEvent::ToggleDrawer),
        "set" => {
            let (field, value) = split_word(rest);
            if field.is_empty() {
                return Err(missing("set", "field"));
            }
            Command::Events(vec![
                form_event(FormEvent::SetValue {
                    field: field.to_string(),
                    value: FieldValue::Text(value.to_string()),
                }),
                form_event(FormEvent::MarkTouched(field.to_string())),
            ])
        }
        "check" => {
            let field = required_word(rest, "check", "field")?;
            Command::Events(vec![
                form_event(FormEvent::ToggleFlag(field.clone())),
                form_event(FormEvent::MarkTouched(field)),
            ])
        }
        "toggle" => {
            let (field, option) = split_word(rest);
            if field.is_empty() {
                return Err(missing("toggle", "field"));
            }
            if option.is_empty() {
                return Err(missing("toggle", "option"));
            }
            single(form_event(FormEvent::ToggleOption {
                field: field.to_string(),
                option: option.to_string(),
            }))
        }
        "touch" => single(form_event(FormEvent::MarkTouched(required_word(
            rest, "touch", "field",
        )?))),
        "submit" => single(form_event(FormEvent::Submit)),
        "ok" => single(form_event(FormEvent::Acknowledge)),
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::UnknownCommand(other.to_string())),
    };
    Ok(Some(command))
}

fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (input, ""),
    }
}

fn required_word(
    rest: &str,
    command: &'static str,
    argument: &'static str,
) -> Result<String, CommandError> {
    let (word, _) = split_word(rest);
    if word.is_empty() {
        Err(missing(command, argument))
    } else {
        Ok(word.to_string())
    }
}

fn missing(command: &'static str, argument: &'static str) -> CommandError {
    CommandError::MissingArgument { command, argument }
}

fn single(event: ShellEvent) -> Command {
    Command::Events(vec![event])
}

fn form_event(event: FormEvent) -> ShellEvent {
    ShellEvent::Form(event)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_and_comment_lines() {
        assert_eq!(parse(""), Ok(None));
        assert_eq!(parse("   # just a note"), Ok(None));
    }

    #[test]
    fn test_navigation() {
        assert_eq!(
            parse("go Form"),
            Ok(Some(Command::Events(vec![ShellEvent::Navigate(Destination::Form)])))
        );
        assert_eq!(
            parse("go inbox"),
            Err(CommandError::Destination(UnknownDestination("inbox".to_string())))
        );
        assert_eq!(
            parse("go"),
            Err(CommandError::MissingArgument {
                command: "go",
                argument: "destination"
            })
        );
    }

    #[test]
    fn test_set_keeps_spaces_and_touches() {
        let parsed = parse("set address  Dlouhá 12, Praha ").unwrap();
        assert_eq!(
            parsed,
            Some(Command::Events(vec![
                ShellEvent::Form(FormEvent::SetValue {
                    field: "address".to_string(),
                    value: FieldValue::Text("Dlouhá 12, Praha".to_string()),
                }),
                ShellEvent::Form(FormEvent::MarkTouched("address".to_string())),
            ]))
        );
    }

    #[test]
    fn test_set_without_value_clears() {
        let parsed = parse("set note").unwrap();
        assert!(matches!(
            parsed,
            Some(Command::Events(ref events)) if events[0] == ShellEvent::Form(FormEvent::SetValue {
                field: "note".to_string(),
                value: FieldValue::Text(String::new()),
            })
        ));
    }

    #[test]
    fn test_toggle_needs_option() {
        assert_eq!(
            parse("toggle destinations"),
            Err(CommandError::MissingArgument {
                command: "toggle",
                argument: "option"
            })
        );
        assert!(parse("toggle destinations Španělsko").unwrap().is_some());
    }

    #[test]
    fn test_simple_keywords() {
        assert_eq!(parse("QUIT"), Ok(Some(Command::Quit)));
        assert_eq!(parse("show"), Ok(Some(Command::Show)));
        assert_eq!(
            parse("ok"),
            Ok(Some(Command::Events(vec![ShellEvent::Form(FormEvent::Acknowledge)])))
        );
        assert_eq!(
            parse("dance"),
            Err(CommandError::UnknownCommand("dance".to_string()))
        );
    }
}
