//! Command Interpreter
//!
//! Turns one line of user input into a [`Command`] and applies it to the
//! [`SharedState`]. Every outcome, including failures, comes back as
//! human-readable lines for the console log; the interpreter itself never
//! fails.
//!
//! # Vocabulary
//!
//! | Command | Effect |
//! |---------|--------|
//! | `help` | list commands |
//! | `start_marquee` / `stop_marquee` | toggle scrolling |
//! | `set_text <words...>` | replace the banner text |
//! | `set_speed <ms>` / `speed <ms>` | change the scroll interval |
//! | `set_art <on\|off>` | toggle the ASCII-art banner |
//! | `clear` / `cls` | wipe the console log |
//! | `status` | dump the shared state (debug commands only) |
//! | `exit` | stop the console |

use thiserror::Error;

use crate::state::{SharedState, MIN_SPEED_MS};

/// Command names offered for tab completion, in help order
const BASE_COMMANDS: &[&str] = &[
    "help",
    "start_marquee",
    "stop_marquee",
    "set_text",
    "set_speed",
    "speed",
    "set_art",
    "clear",
    "cls",
    "exit",
];

/// Only available when debug commands are enabled
const STATUS_COMMAND: &str = "status";

/// A tokenized input line
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Command {
    /// First token (empty for blank input)
    pub name: String,
    /// Remaining tokens in order
    pub arguments: Vec<String>,
}

impl Command {
    /// Split a line on whitespace into name and arguments
    pub fn parse(line: &str) -> Self {
        let mut tokens = line.split_whitespace().map(str::to_string);
        let name = tokens.next().unwrap_or_default();
        Self {
            name,
            arguments: tokens.collect(),
        }
    }

    /// Whether the line held no tokens at all
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

/// Recoverable command failures, rendered as `Error: ...` lines
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// Command name not in the vocabulary
    #[error("Unknown command '{0}'.")]
    UnknownCommand(String),

    /// A required argument was not given
    #[error("{command} requires an argument. Usage: {usage}")]
    MissingArgument {
        /// Command that was invoked
        command: String,
        /// Usage hint
        usage: &'static str,
    },

    /// Speed argument was not an unsigned integer
    #[error("Invalid speed value '{0}'.")]
    InvalidSpeed(String),

    /// `set_art` with something other than on/off
    #[error("Invalid art mode '{0}'. Use 'on' or 'off'.")]
    InvalidArtMode(String),
}

/// Lines produced by one dispatch
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandResponse {
    /// Human-readable output, in order
    pub lines: Vec<String>,
    /// The caller should wipe the console log region
    pub clear_log: bool,
}

impl CommandResponse {
    fn line(text: impl Into<String>) -> Self {
        Self {
            lines: vec![text.into()],
            clear_log: false,
        }
    }

    fn lines(lines: Vec<String>) -> Self {
        Self {
            lines,
            clear_log: false,
        }
    }

    fn clear() -> Self {
        Self {
            lines: Vec::new(),
            clear_log: true,
        }
    }

    fn error(err: CommandError) -> Self {
        Self::line(format!("Error: {err}"))
    }

    /// Whether there is nothing to show or do
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && !self.clear_log
    }
}

/// Maps commands to state mutations
#[derive(Clone, Debug)]
pub struct CommandInterpreter {
    /// Whether `status` is part of the vocabulary
    debug_commands: bool,
}

impl CommandInterpreter {
    /// Create an interpreter; `debug_commands` enables `status`
    pub fn new(debug_commands: bool) -> Self {
        Self { debug_commands }
    }

    /// Every command name this interpreter accepts
    pub fn command_names(&self) -> Vec<&'static str> {
        let mut names = BASE_COMMANDS.to_vec();
        if self.debug_commands {
            names.push(STATUS_COMMAND);
        }
        names
    }

    /// Parse and dispatch a raw line
    pub fn execute(&self, state: &mut SharedState, line: &str) -> CommandResponse {
        self.dispatch(state, &Command::parse(line))
    }

    /// Apply a command to the state and describe the outcome
    pub fn dispatch(&self, state: &mut SharedState, command: &Command) -> CommandResponse {
        if command.is_empty() {
            return CommandResponse::default();
        }

        tracing::debug!(
            command = %command.name,
            args = command.arguments.len(),
            "Dispatching command"
        );

        let result = match command.name.as_str() {
            "help" => Ok(self.help()),
            "start_marquee" => Ok(CommandResponse::line(start_marquee(state))),
            "stop_marquee" => Ok(CommandResponse::line(stop_marquee(state))),
            "set_text" => set_text(state, &command.arguments).map(CommandResponse::line),
            "set_speed" | "speed" => {
                set_speed(state, &command.name, &command.arguments).map(CommandResponse::line)
            }
            "set_art" => set_art(state, &command.arguments).map(CommandResponse::line),
            "clear" | "cls" => Ok(CommandResponse::clear()),
            STATUS_COMMAND if self.debug_commands => Ok(CommandResponse::line(state.describe())),
            "exit" => {
                state.running = false;
                Ok(CommandResponse::line("Exiting program."))
            }
            other => Err(CommandError::UnknownCommand(other.to_string())),
        };

        result.unwrap_or_else(CommandResponse::error)
    }

    fn help(&self) -> CommandResponse {
        let mut lines = vec![
            "Available commands:".to_string(),
            " - help                Show this help message".to_string(),
            " - start_marquee       Start the marquee animation".to_string(),
            " - stop_marquee        Stop the marquee animation".to_string(),
            " - set_text <text>     Set the marquee text".to_string(),
            " - set_speed <ms>      Set the marquee speed (alias: speed)".to_string(),
            " - set_art <on|off>    Toggle the ASCII-art banner".to_string(),
            " - clear               Clear the console (alias: cls)".to_string(),
        ];
        if self.debug_commands {
            lines.push(" - status              Show the current state".to_string());
        }
        lines.push(" - exit                Exit the program".to_string());
        CommandResponse::lines(lines)
    }
}

impl Default for CommandInterpreter {
    fn default() -> Self {
        Self::new(cfg!(debug_assertions))
    }
}

fn start_marquee(state: &mut SharedState) -> &'static str {
    if state.animating {
        "Marquee is already running."
    } else {
        state.animating = true;
        "Marquee started."
    }
}

fn stop_marquee(state: &mut SharedState) -> &'static str {
    if state.animating {
        state.animating = false;
        "Marquee stopped."
    } else {
        "Marquee is not running."
    }
}

fn set_text(state: &mut SharedState, arguments: &[String]) -> Result<String, CommandError> {
    if arguments.is_empty() {
        return Err(CommandError::MissingArgument {
            command: "set_text".to_string(),
            usage: "set_text <text>",
        });
    }

    // Tokens are never blank, so a joined text is never empty
    state.marquee_text = arguments.join(" ");
    Ok(format!("Marquee text set to \"{}\".", state.marquee_text))
}

fn set_speed(
    state: &mut SharedState,
    name: &str,
    arguments: &[String],
) -> Result<String, CommandError> {
    let raw = arguments.first().ok_or_else(|| CommandError::MissingArgument {
        command: name.to_string(),
        usage: "set_speed <ms>",
    })?;

    let requested: u64 = raw
        .parse()
        .map_err(|_| CommandError::InvalidSpeed(raw.clone()))?;

    let effective = requested.max(MIN_SPEED_MS);
    if effective == state.speed_ms() {
        return Ok(format!("Marquee speed is already set to {effective}ms."));
    }

    state.set_speed_ms(effective);
    if effective != requested {
        Ok(format!(
            "Marquee speed set to {effective}ms (minimum is {MIN_SPEED_MS}ms)."
        ))
    } else {
        Ok(format!("Marquee speed set to {effective}ms."))
    }
}

fn set_art(state: &mut SharedState, arguments: &[String]) -> Result<String, CommandError> {
    let raw = arguments.first().ok_or_else(|| CommandError::MissingArgument {
        command: "set_art".to_string(),
        usage: "set_art <on|off>",
    })?;

    let enabled = match raw.as_str() {
        "on" => true,
        "off" => false,
        other => return Err(CommandError::InvalidArtMode(other.to_string())),
    };

    if state.ascii_art == enabled {
        return Ok(format!("ASCII art is already {raw}."));
    }

    state.ascii_art = enabled;
    Ok(format!("ASCII art turned {raw}."))
}
