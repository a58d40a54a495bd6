// console.rs — Buffered console output with ANSI colors
//
// All output accumulates in a pre-allocated String buffer and is flushed to
// stdout in as few writes as possible. Redirection is detected at
// initialization: a redirected stdout gets no escape sequences and the
// default width. Width comes from the terminal itself, falling back to the
// configured default when it is unavailable or reported as zero.

use std::io::{IsTerminal, Write};

use crate::ansi_codes;
use crate::config::Config;

/// Initial buffer capacity. Listings are bursty; one directory's output
/// almost always fits without reallocation.
const INITIAL_BUFFER_SIZE: usize = 64 * 1024;

pub struct Console {
    buffer:        String,
    is_redirected: bool,
    console_width: usize,
}

impl Console {
    /// Initialize the console: detect redirection and query the width.
    pub fn initialize(config: &Config) -> Console {
        let is_redirected = !std::io::stdout().is_terminal();

        let console_width = if is_redirected {
            config.default_width
        } else {
            match crossterm::terminal::size() {
                Ok((cols, _rows)) if cols > 0 => cols as usize,
                _ => config.default_width,
            }
        };

        Console {
            buffer: String::with_capacity(INITIAL_BUFFER_SIZE),
            is_redirected,
            console_width,
        }
    }

    /// Console width in columns.
    pub fn width(&self) -> usize {
        self.console_width
    }

    /// True when escape sequences should be emitted at all.
    pub fn color_active(&self) -> bool {
        !self.is_redirected
    }

    /// Append plain text to the buffer.
    pub fn print(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    /// Append text wrapped in an SGR sequence + reset. The wrap is applied
    /// around the text only; callers pad outside it so escape sequences
    /// never enter width math. With color inactive, or no sequence for the
    /// category, the text goes out unwrapped.
    pub fn print_colored(&mut self, sgr: Option<&str>, text: &str) {
        match sgr {
            Some(seq) if self.color_active() => {
                self.buffer.push_str(seq);
                self.buffer.push_str(text);
                self.buffer.push_str(ansi_codes::RESET_ALL);
            }
            _ => self.buffer.push_str(text),
        }
    }

    /// Append `count` spaces.
    pub fn pad(&mut self, count: usize) {
        for _ in 0..count {
            self.buffer.push(' ');
        }
    }

    /// Terminate the current output line.
    pub fn newline(&mut self) {
        self.buffer.push('\n');
    }

    /// Flush the buffer to stdout.
    pub fn flush(&mut self) -> Result<(), std::io::Error> {
        if self.buffer.is_empty() {
            return Ok(());
        }

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(self.buffer.as_bytes())?;
        stdout.flush()?;
        self.buffer.clear();
        Ok(())
    }

    /// Buffered but not yet flushed output. Test seam.
    #[cfg(test)]
    pub fn buffered(&self) -> &str {
        &self.buffer
    }

    /// Build a console with explicit width and color state. Test seam.
    #[cfg(test)]
    pub fn with_state(width: usize, color_active: bool) -> Console {
        Console {
            buffer:        String::new(),
            is_redirected: !color_active,
            console_width: width,
        }
    }
}

impl Drop for Console {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_accumulates() {
        let mut console = Console::with_state(80, false);
        console.print("alpha");
        console.pad(2);
        console.print("beta");
        console.newline();
        assert_eq!(console.buffered(), "alpha  beta\n");
    }

    #[test]
    fn colored_wraps_text_only() {
        let mut console = Console::with_state(80, true);
        console.print_colored(Some("\x1b[0;34m"), "src");
        console.pad(2);
        assert_eq!(console.buffered(), "\x1b[0;34msrc\x1b[0m  ");
    }

    #[test]
    fn colored_without_sequence_is_plain() {
        let mut console = Console::with_state(80, true);
        console.print_colored(None, "notes.txt");
        assert_eq!(console.buffered(), "notes.txt");
    }

    #[test]
    fn colored_suppressed_when_redirected() {
        let mut console = Console::with_state(80, false);
        console.print_colored(Some("\x1b[0;34m"), "src");
        assert_eq!(console.buffered(), "src");
    }
}
