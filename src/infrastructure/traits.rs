//! I/O boundary traits for testability
//!
//! The calculator only talks to a line-oriented console. Production wires it to
//! stdin/stdout; tests drive it from in-memory buffers.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use colored::Colorize;

/// Line-oriented interactive console.
pub trait Console {
    /// Show `message` and read one line, without its line terminator.
    /// Returns `None` once the input is exhausted.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>>;

    /// Print a line of regular output.
    fn say(&mut self, line: &str) -> io::Result<()>;

    /// Print a line telling the user their input was rejected.
    fn warn(&mut self, line: &str) -> io::Result<()>;
}

// ============================================================
// REAL IMPLEMENTATION
// ============================================================

/// Console over any buffered reader and writer.
#[derive(Debug)]
pub struct LineConsole<R, W> {
    reader: R,
    writer: W,
    styled: bool,
}

/// The console used by the binary.
pub type StdioConsole = LineConsole<StdinLock<'static>, Stdout>;

impl LineConsole<StdinLock<'static>, Stdout> {
    /// Console bound to the process' stdin and stdout.
    pub fn stdio(styled: bool) -> Self {
        Self::new(io::stdin().lock(), io::stdout()).styled(styled)
    }
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    /// Plain (uncolored) console.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            styled: false,
        }
    }

    /// Enable or disable colored prompts and warnings.
    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        if self.styled {
            write!(self.writer, "{}", message.cyan())?;
        } else {
            write!(self.writer, "{}", message)?;
        }
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", line)
    }

    fn warn(&mut self, line: &str) -> io::Result<()> {
        if self.styled {
            writeln!(self.writer, "{}", line.yellow())
        } else {
            writeln!(self.writer, "{}", line)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Cursor;

    fn console(input: &str) -> LineConsole<Cursor<Vec<u8>>, Vec<u8>> {
        LineConsole::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn given_lines_when_prompting_then_strips_terminators() {
        let mut c = console("10\r\n  +  \nlast");
        assert_eq!(c.prompt("a:").unwrap(), Some("10".to_string()));
        assert_eq!(c.prompt("b:").unwrap(), Some("  +  ".to_string()));
        assert_eq!(c.prompt("c:").unwrap(), Some("last".to_string()));
        assert_eq!(c.prompt("d:").unwrap(), None);
    }

    #[test]
    fn given_empty_line_when_prompting_then_returns_empty_string_not_none() {
        let mut c = console("\n");
        assert_eq!(c.prompt("x:").unwrap(), Some(String::new()));
    }

    #[rstest]
    #[case("Masukkan angka kedua:")]
    #[case("Masukkan operator (+, -, *, /, %, **): ")]
    fn given_prompt_when_writing_then_text_is_printed_verbatim(#[case] message: &str) {
        let mut c = console("7\n");
        c.prompt(message).unwrap();
        assert_eq!(String::from_utf8(c.into_writer()).unwrap(), message);
    }

    #[test]
    fn given_plain_console_when_writing_then_no_escape_codes() {
        let mut c = console("1\n");
        c.prompt("Masukkan angka pertama:").unwrap();
        c.say("hello").unwrap();
        c.warn("careful").unwrap();
        let out = String::from_utf8(c.into_writer()).unwrap();
        assert_eq!(out, "Masukkan angka pertama:hello\ncareful\n");
    }
}
