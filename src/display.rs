//! Frame output: the crossterm-backed terminal and an in-memory sink.

use crossterm::cursor::{MoveTo, MoveUp};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{execute, queue};
use std::io::{self, Write};

/// Where rendered frames and payload echoes go.
pub trait FrameSink {
    /// Wipe the previous frame and home the cursor.
    fn clear_frame(&mut self) -> io::Result<()>;
    fn write_lines(&mut self, lines: &[String]) -> io::Result<()>;
    /// Print the payload, then step the cursor back up so the next frame
    /// overwrites it instead of scrolling.
    fn echo_payload(&mut self, payload: &str) -> io::Result<()>;
}

/// Terminal output. Lines end in `\r\n` since raw mode disables output
/// post-processing.
pub struct TerminalDisplay<W: Write> {
    out: W,
}

impl TerminalDisplay<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameSink for TerminalDisplay<W> {
    fn clear_frame(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))
    }

    fn write_lines(&mut self, lines: &[String]) -> io::Result<()> {
        for line in lines {
            self.out.write_all(line.as_bytes())?;
            self.out.write_all(b"\r\n")?;
        }
        self.out.flush()
    }

    fn echo_payload(&mut self, payload: &str) -> io::Result<()> {
        self.out.write_all(payload.as_bytes())?;
        self.out.write_all(b"\r\n")?;
        queue!(self.out, MoveUp(1))?;
        self.out.flush()
    }
}

/// Keeps the last frame and every echoed payload in memory.
#[derive(Debug, Default)]
pub struct BufferDisplay {
    pub frame: Vec<String>,
    pub echoes: Vec<String>,
    pub clears: usize,
}

impl BufferDisplay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameSink for BufferDisplay {
    fn clear_frame(&mut self) -> io::Result<()> {
        self.frame.clear();
        self.clears += 1;
        Ok(())
    }

    fn write_lines(&mut self, lines: &[String]) -> io::Result<()> {
        self.frame.extend_from_slice(lines);
        Ok(())
    }

    fn echo_payload(&mut self, payload: &str) -> io::Result<()> {
        self.echoes.push(payload.to_string());
        Ok(())
    }
}

/// Raw keyboard mode for as long as the guard lives.
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    pub fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        tracing::debug!("Raw mode enabled");
        Ok(Self { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Leave the cursor below the last frame before handing the shell back.
        let _ = execute!(io::stdout(), MoveTo(0, 22));
        if let Err(e) = terminal::disable_raw_mode() {
            tracing::error!("Failed to restore terminal mode: {}", e);
        }
    }
}
