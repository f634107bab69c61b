use std::io::{BufRead, Write};

use anyhow::{Context, bail};
use battleboats_core::{Coord2, parse_coordinate};

pub const INVALID_COORDINATE: &str = "Invalid coordinate. Please re-enter";

/// Line based terminal I/O. Generic so sessions can be driven from scripted
/// input in tests.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, text: impl std::fmt::Display) -> anyhow::Result<()> {
        writeln!(self.output, "{}", text).context("Could not write to output")
    }

    /// Prints `prompt` without a newline and reads the reply with its line
    /// terminator removed. Bytes that are not UTF-8 come back as replacement
    /// characters so callers reject the line instead of failing.
    pub fn prompt(&mut self, prompt: &str) -> anyhow::Result<String> {
        write!(self.output, "{}", prompt).context("Could not write to output")?;
        self.output.flush().context("Could not flush output")?;

        let mut buf = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .context("Could not read from input")?;
        if read == 0 {
            bail!("Input closed before the game finished");
        }
        let line = String::from_utf8_lossy(&buf);
        log::trace!("read {:?}", line);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Keeps prompting until a well formed coordinate is entered.
    pub fn prompt_coordinate(&mut self, prompt: &str) -> anyhow::Result<Coord2> {
        loop {
            let reply = self.prompt(prompt)?;
            match parse_coordinate(&reply) {
                Ok(coords) => return Ok(coords),
                Err(err) => {
                    log::debug!("rejected coordinate {:?}: {}", reply, err);
                    self.say(INVALID_COORDINATE)?;
                }
            }
        }
    }
}
