//! Terminal collaborator
//!
//! The shell talks to the user only through the [`Terminal`] trait so a
//! session can be driven from a script in tests. [`ConsoleTerminal`] is the
//! real implementation over any line reader and writer.

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

/// Colour tag for a piece of output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Header,
    Success,
    Warning,
    Error,
    /// Playlist name
    Name,
    /// Playlist rating
    Rating,
    /// Song name
    Song,
}

impl Tone {
    fn color(self) -> Option<Color> {
        match self {
            Tone::Plain => None,
            Tone::Header => Some(Color::Magenta),
            Tone::Success | Tone::Song => Some(Color::Green),
            Tone::Warning | Tone::Rating => Some(Color::Yellow),
            Tone::Error => Some(Color::Red),
            Tone::Name => Some(Color::Cyan),
        }
    }
}

/// Line-oriented terminal used by the shell
pub trait Terminal {
    /// Clear the screen
    fn clear(&mut self) -> io::Result<()>;

    /// Write text (no newline added)
    fn write(&mut self, tone: Tone, text: &str) -> io::Result<()>;

    /// Flush pending output
    fn flush(&mut self) -> io::Result<()>;

    /// Read one line without its line ending
    ///
    /// Returns `Ok(None)` once input is closed.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Write a plain line
    fn line(&mut self, text: &str) -> io::Result<()> {
        self.write(Tone::Plain, text)?;
        self.write(Tone::Plain, "\n")
    }

    fn header(&mut self, text: &str) -> io::Result<()> {
        self.write(Tone::Header, &format!("\n=== {} ===\n", text))
    }

    fn success(&mut self, message: &str) -> io::Result<()> {
        self.write(Tone::Success, &format!("[SUCCESS] {}\n", message))
    }

    fn warning(&mut self, message: &str) -> io::Result<()> {
        self.write(Tone::Warning, &format!("[WARNING] {}\n", message))
    }

    fn error(&mut self, message: &str) -> io::Result<()> {
        self.write(Tone::Error, &format!("[ERROR] {}\n", message))
    }

    /// Write a prompt followed by a space and flush it
    fn prompt(&mut self, prompt: &str) -> io::Result<()> {
        self.write(Tone::Plain, prompt)?;
        self.write(Tone::Plain, " ")?;
        self.flush()
    }
}

/// Terminal over a buffered reader and a writer
pub struct ConsoleTerminal<R, W> {
    input: R,
    output: W,
    color: bool,
    clear_screen: bool,
}

impl ConsoleTerminal<StdinLock<'static>, Stdout> {
    /// Terminal on the process's stdin and stdout
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleTerminal<R, W> {
    /// Create a terminal with colour and clearing enabled
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            color: true,
            clear_screen: true,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    /// Consume the terminal, returning the writer
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Terminal for ConsoleTerminal<R, W> {
    fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    fn write(&mut self, tone: Tone, text: &str) -> io::Result<()> {
        match tone.color().filter(|_| self.color) {
            Some(color) => queue!(
                self.output,
                SetForegroundColor(color),
                Print(text),
                ResetColor
            ),
            None => self.output.write_all(text.as_bytes()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        let line = buf.trim_end_matches(['\n', '\r']);
        Ok(Some(line.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn output_of(term: ConsoleTerminal<Cursor<&[u8]>, Vec<u8>>) -> String {
        String::from_utf8(term.into_output()).unwrap()
    }

    #[test]
    fn test_plain_messages() {
        let mut term = ConsoleTerminal::new(Cursor::new(&b""[..]), Vec::new()).with_color(false);
        term.success("Saved").unwrap();
        term.warning("Careful").unwrap();
        term.error("Broken").unwrap();
        term.header("TITLE").unwrap();

        assert_eq!(
            output_of(term),
            "[SUCCESS] Saved\n[WARNING] Careful\n[ERROR] Broken\n\n=== TITLE ===\n"
        );
    }

    #[test]
    fn test_colored_message_has_escape_codes() {
        let mut term = ConsoleTerminal::new(Cursor::new(&b""[..]), Vec::new());
        term.error("Broken").unwrap();

        let out = output_of(term);
        assert!(out.contains("\x1b["));
        assert!(out.contains("[ERROR] Broken"));
    }

    #[test]
    fn test_clear_can_be_disabled() {
        let mut term = ConsoleTerminal::new(Cursor::new(&b""[..]), Vec::new())
            .with_clear_screen(false);
        term.clear().unwrap();
        assert!(output_of(term).is_empty());
    }

    #[test]
    fn test_read_line_strips_endings_and_reports_eof() {
        let mut term = ConsoleTerminal::new(Cursor::new(&b"first\r\nsecond\n"[..]), Vec::new());
        assert_eq!(term.read_line().unwrap().as_deref(), Some("first"));
        assert_eq!(term.read_line().unwrap().as_deref(), Some("second"));
        assert_eq!(term.read_line().unwrap(), None);
    }
}
