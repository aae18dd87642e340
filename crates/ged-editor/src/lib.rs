pub mod commands;
pub mod parser;
pub mod session;

pub use commands::{COMMANDS, Command, CommandError, CommandSpec, Outcome, parse_line, resolve};
pub use session::{Session, SessionConfig};
