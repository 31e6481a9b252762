use edsim_core::{FieldKey, WeatherCondition};

use crate::error::AppError;

pub const HELP: &str = "\
Commands:
  start                     open hospital selection
  select <name|number>      choose a hospital
  set <field|number> <value>
                            fill in a field (empty value clears it)
  submit                    validate and show results
  new                       new entry for the same hospital
  back                      previous screen
  reset                     change hospital (back to the start)
  show                      redraw the current screen
  json                      print the last submission as JSON
  help                      this list
  quit                      exit

Fields: 1 newAdmissions, 2 occupancyRate, 3 nextDayDischarge,
        4 sameDayDischarge, 5 bedsPerDoctor, 6 highUrgencyPercentage,
        7 weatherCondition";

/// One line of user input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Start,
    Select(String),
    Set { key: FieldKey, value: String },
    Submit,
    NewEntry,
    Back,
    Reset,
    Show,
    Json,
    Help,
    Quit,
}

impl Command {
    /// Parse a line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, AppError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "" => return Ok(None),
            "start" => Command::Start,
            "select" => {
                if rest.is_empty() {
                    return Err(AppError::MissingArgument("hospital"));
                }
                Command::Select(rest.to_string())
            }
            "set" => parse_set(rest)?,
            "submit" => Command::Submit,
            "new" => Command::NewEntry,
            "back" => Command::Back,
            "reset" => Command::Reset,
            "show" => Command::Show,
            "json" => Command::Json,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(AppError::UnknownCommand(word.to_string())),
        };
        Ok(Some(command))
    }
}

fn parse_set(rest: &str) -> Result<Command, AppError> {
    let (field, value) = match rest.split_once(char::is_whitespace) {
        Some((field, value)) => (field, value.trim()),
        None => (rest, ""),
    };
    if field.is_empty() {
        return Err(AppError::MissingArgument("field"));
    }

    let key = match field.parse::<usize>() {
        Ok(n) => n
            .checked_sub(1)
            .and_then(|i| FieldKey::ALL.get(i).copied())
            .ok_or_else(|| edsim_core::CoreError::UnknownField(field.to_string()))?,
        Err(_) => field.parse::<FieldKey>()?,
    };

    // The weather control only offers its canonical spellings.
    let value = match key {
        FieldKey::WeatherCondition => WeatherCondition::parse_loose(value)
            .map(|w| w.as_str().to_string())
            .unwrap_or_else(|| value.to_string()),
        _ => value.to_string(),
    };

    Ok(Command::Set { key, value })
}
