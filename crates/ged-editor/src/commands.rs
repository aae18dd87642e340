//! Command table.
//!
//! Maps command names (and the single-letter aliases of the classic
//! editor protocol) to typed `Command`s. The table is static: each entry
//! carries its arity, a usage line, and the parser that turns argument
//! tokens into a `Command`.
//!
//! | name     | alias | args           |
//! |----------|-------|----------------|
//! | allocate | I     | width height   |
//! | clear    | C     |                |
//! | pixel    | L     | x y color      |
//! | hline    | H     | x1 x2 y color  |
//! | vline    | V     | x y1 y2 color  |
//! | fill     | F     | x y color      |
//! | show     | S     |                |
//! | help     | ?     |                |
//! | quit     | X     |                |

use crate::parser::{parse_color, parse_number, tokenize};
use ged_core::{Canvas, CanvasError, Color};

/// A fully parsed command, ready to run against a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Allocate { width: u32, height: u32 },
    Clear,
    Pixel { x: u32, y: u32, color: Color },
    HLine { x1: u32, x2: u32, y: u32, color: Color },
    VLine { x: u32, y1: u32, y2: u32, color: Color },
    Fill { x: u32, y: u32, color: Color },
    Show,
    Help,
    Quit,
}

/// What the session should do after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Canvas updated (or nothing to do); read the next line.
    Done,
    /// Print the canvas.
    Show,
    /// Print the command table.
    Help,
    /// Stop the loop.
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command '{0}'")]
    Unknown(String),

    #[error("'{name}' takes {expected} argument(s), got {}", .args.len())]
    Arity {
        name: &'static str,
        expected: usize,
        args: Vec<String>,
    },

    #[error("'{token}' is not a valid number: {reason}")]
    InvalidNumber { token: String, reason: &'static str },

    #[error(transparent)]
    Canvas(#[from] CanvasError),
}

/// One row of the command table.
pub struct CommandSpec {
    pub name: &'static str,
    pub alias: &'static str,
    pub arity: usize,
    pub usage: &'static str,
    pub summary: &'static str,
    parse: fn(&[&str]) -> Result<Command, CommandError>,
}

impl CommandSpec {
    /// Check the argument count, then build the command.
    pub fn parse(&self, args: &[&str]) -> Result<Command, CommandError> {
        if args.len() != self.arity {
            return Err(CommandError::Arity {
                name: self.name,
                expected: self.arity,
                args: args.iter().map(|a| a.to_string()).collect(),
            });
        }
        (self.parse)(args)
    }

    pub fn matches(&self, name: &str) -> bool {
        self.name == name || self.alias == name
    }
}

impl std::fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandSpec")
            .field("name", &self.name)
            .field("alias", &self.alias)
            .field("arity", &self.arity)
            .finish()
    }
}

pub static COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "allocate",
        alias: "I",
        arity: 2,
        usage: "allocate WIDTH HEIGHT",
        summary: "create a new canvas filled with O",
        parse: |args| {
            Ok(Command::Allocate {
                width: parse_number(args[0])?,
                height: parse_number(args[1])?,
            })
        },
    },
    CommandSpec {
        name: "clear",
        alias: "C",
        arity: 0,
        usage: "clear",
        summary: "reset every pixel to O",
        parse: |_| Ok(Command::Clear),
    },
    CommandSpec {
        name: "pixel",
        alias: "L",
        arity: 3,
        usage: "pixel X Y COLOR",
        summary: "paint one pixel",
        parse: |args| {
            Ok(Command::Pixel {
                x: parse_number(args[0])?,
                y: parse_number(args[1])?,
                color: parse_color(args[2])?,
            })
        },
    },
    CommandSpec {
        name: "hline",
        alias: "H",
        arity: 4,
        usage: "hline X1 X2 Y COLOR",
        summary: "paint row Y from column X1 to X2",
        parse: |args| {
            Ok(Command::HLine {
                x1: parse_number(args[0])?,
                x2: parse_number(args[1])?,
                y: parse_number(args[2])?,
                color: parse_color(args[3])?,
            })
        },
    },
    CommandSpec {
        name: "vline",
        alias: "V",
        arity: 4,
        usage: "vline X Y1 Y2 COLOR",
        summary: "paint column X from row Y1 to Y2",
        parse: |args| {
            Ok(Command::VLine {
                x: parse_number(args[0])?,
                y1: parse_number(args[1])?,
                y2: parse_number(args[2])?,
                color: parse_color(args[3])?,
            })
        },
    },
    CommandSpec {
        name: "fill",
        alias: "F",
        arity: 3,
        usage: "fill X Y COLOR",
        summary: "flood-fill the region around X,Y",
        parse: |args| {
            Ok(Command::Fill {
                x: parse_number(args[0])?,
                y: parse_number(args[1])?,
                color: parse_color(args[2])?,
            })
        },
    },
    CommandSpec {
        name: "show",
        alias: "S",
        arity: 0,
        usage: "show",
        summary: "print the canvas",
        parse: |_| Ok(Command::Show),
    },
    CommandSpec {
        name: "help",
        alias: "?",
        arity: 0,
        usage: "help",
        summary: "list commands",
        parse: |_| Ok(Command::Help),
    },
    CommandSpec {
        name: "quit",
        alias: "X",
        arity: 0,
        usage: "quit",
        summary: "leave the editor",
        parse: |_| Ok(Command::Quit),
    },
];

/// Look up a command by name or alias. Names are case-sensitive.
pub fn resolve(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|spec| spec.matches(name))
}

/// Tokenize and parse one input line.
///
/// Returns `Ok(None)` for blank lines.
pub fn parse_line(line: &str) -> Result<Option<Command>, CommandError> {
    let words = tokenize(line);
    let Some((name, args)) = words.split_first() else {
        return Ok(None);
    };
    let spec = resolve(name).ok_or_else(|| CommandError::Unknown(name.to_string()))?;
    log::trace!("resolved '{name}' -> {} {args:?}", spec.name);
    spec.parse(args).map(Some)
}

impl Command {
    /// Run the command against `canvas`.
    ///
    /// # Errors
    /// Canvas validation failures; the canvas is unchanged when one occurs.
    pub fn execute(self, canvas: &mut Canvas) -> Result<Outcome, CanvasError> {
        match self {
            Command::Allocate { width, height } => canvas.allocate(width, height)?,
            Command::Clear => canvas.clear(),
            Command::Pixel { x, y, color } => canvas.set_pixel(x, y, color)?,
            Command::HLine { x1, x2, y, color } => canvas.draw_horizontal(x1, x2, y, color)?,
            Command::VLine { x, y1, y2, color } => canvas.draw_vertical(x, y1, y2, color)?,
            Command::Fill { x, y, color } => canvas.flood_fill(x, y, color)?,
            Command::Show => return Ok(Outcome::Show),
            Command::Help => return Ok(Outcome::Help),
            Command::Quit => return Ok(Outcome::Quit),
        }
        Ok(Outcome::Done)
    }
}
