//! Interactive session: read a line, run it, report, repeat.
//!
//! The session owns the canvas. Every failure is turned into one message
//! line on the output and the loop carries on; only `quit` or the end of
//! the input stops it.

use crate::commands::{COMMANDS, CommandError, Outcome, parse_line};
use ged_core::Canvas;
use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;

pub const START_BANNER: &str = "================= Start ==============================";
pub const END_BANNER: &str = "================= End ================================";
pub const FAREWELL: &str = "==================== Bye =============================";

// ─── Config ───────────────────────────────────────────────────────────────

/// Configuration for a `Session`.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Print the start and end banners. Default: **true**.
    pub banners: bool,

    /// Echo each non-blank input line as `> line` before its output.
    /// Useful when commands come from a script. Default: **false**.
    pub echo: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            banners: true,
            echo: false,
        }
    }
}

// ─── Session ──────────────────────────────────────────────────────────────

pub struct Session<W: Write> {
    canvas: Canvas,
    out: W,
    config: SessionConfig,
}

impl<W: Write> Session<W> {
    pub fn new(out: W, config: SessionConfig) -> Self {
        Self {
            canvas: Canvas::new(),
            out,
            config,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Read commands from `input` until `quit` or end of input.
    ///
    /// Lines are decoded lossily, so invalid UTF-8 only spoils its own line.
    ///
    /// # Errors
    /// Only I/O failures on `input` or the output writer.
    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        if self.config.banners {
            writeln!(self.out, "{START_BANNER}")?;
        }

        let mut handled = 0usize;
        for raw in input.split(b'\n') {
            let raw = raw?;
            let raw = raw.strip_suffix(b"\r").unwrap_or(&raw[..]);
            // Bad bytes become U+FFFD and get rejected as an ordinary bad token.
            let line = String::from_utf8_lossy(raw);
            handled += 1;
            if self.handle_line(&line)?.is_break() {
                break;
            }
        }
        log::debug!("session finished after {handled} lines");

        if self.config.banners {
            writeln!(self.out, "{END_BANNER}")?;
        }
        self.out.flush()
    }

    /// Run one input line and write whatever it produces.
    ///
    /// Returns `Break` once the line was a quit command.
    pub fn handle_line(&mut self, line: &str) -> io::Result<ControlFlow<()>> {
        if self.config.echo && !line.trim().is_empty() {
            writeln!(self.out, "> {}", line.trim())?;
        }

        let result = parse_line(line)
            .and_then(|command| match command {
                Some(command) => Ok(command.execute(&mut self.canvas)?),
                None => Ok(Outcome::Done),
            });

        match result {
            Ok(Outcome::Done) => {}
            Ok(Outcome::Show) => {
                for row in self.canvas.render() {
                    writeln!(self.out, "{row}")?;
                }
            }
            Ok(Outcome::Help) => self.write_help()?,
            Ok(Outcome::Quit) => {
                writeln!(self.out, "{FAREWELL}")?;
                return Ok(ControlFlow::Break(()));
            }
            Err(err) => {
                log::debug!("rejected {line:?}: {err}");
                writeln!(self.out, "{}", report(&err))?;
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    fn write_help(&mut self) -> io::Result<()> {
        for spec in COMMANDS {
            writeln!(
                self.out,
                "  {:<22} {:<2} {}",
                spec.usage, spec.alias, spec.summary
            )?;
        }
        Ok(())
    }
}

/// The user-visible message for a rejected line.
pub fn report(err: &CommandError) -> String {
    match err {
        CommandError::Unknown(name) => format!("Unknown command: '{name}'."),
        CommandError::Arity { args, .. } => format!("Parameters: '{}' invalid.", args.join(" ")),
        CommandError::InvalidNumber { .. } | CommandError::Canvas(_) => {
            format!("Input invalid. Message: '{err}'")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ged_core::Color;

    fn quiet() -> Session<Vec<u8>> {
        Session::new(
            Vec::new(),
            SessionConfig {
                banners: false,
                echo: false,
            },
        )
    }

    fn output(session: Session<Vec<u8>>) -> String {
        String::from_utf8(session.into_output()).unwrap()
    }

    #[test]
    fn blank_line_prints_nothing() {
        let mut session = quiet();
        assert!(session.handle_line("   ").unwrap().is_continue());
        assert_eq!(output(session), "");
    }

    #[test]
    fn quit_breaks_with_farewell() {
        let mut session = quiet();
        assert!(session.handle_line("quit").unwrap().is_break());
        assert_eq!(output(session), format!("{FAREWELL}\n"));
    }

    #[test]
    fn errors_do_not_stop_the_loop() {
        let mut session = quiet();
        assert!(session.handle_line("nope").unwrap().is_continue());
        assert!(session.handle_line("pixel 1").unwrap().is_continue());
        assert!(session.handle_line("pixel 1 1 A").unwrap().is_continue());
        assert_eq!(
            output(session),
            "Unknown command: 'nope'.\n\
             Parameters: '1' invalid.\n\
             Input invalid. Message: 'pixel (1, 1) is out of bounds: no canvas allocated'\n"
        );
    }

    #[test]
    fn canvas_state_survives_rejected_commands() {
        let mut session = quiet();
        session.handle_line("allocate 2 2").unwrap();
        session.handle_line("pixel 1 1 A").unwrap();
        session.handle_line("fill 9 9 B").unwrap();
        session.handle_line("allocate 2 0").unwrap();
        assert_eq!(session.canvas().color_at(1, 1), Some(Color::ALL[0]));
        assert_eq!(session.canvas().pixel_count(), 4);
    }

    #[test]
    fn echo_prefixes_commands() {
        let mut session = Session::new(
            Vec::new(),
            SessionConfig {
                banners: false,
                echo: true,
            },
        );
        session.handle_line("allocate 1 1").unwrap();
        session.handle_line("").unwrap();
        session.handle_line(" show ").unwrap();
        assert_eq!(output(session), "> allocate 1 1\n> show\nO\n");
    }

    #[test]
    fn help_lists_every_command() {
        let mut session = quiet();
        session.handle_line("help").unwrap();
        let text = output(session);
        assert_eq!(text.lines().count(), COMMANDS.len());
        assert!(text.contains("allocate WIDTH HEIGHT"));
        assert!(text.contains("fill X Y COLOR"));
    }
}
