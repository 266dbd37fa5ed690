use crate::terminal::span::SpanLine;
use crate::terminal::{KeyCode, KeyEvent};
use crossterm::cursor::{MoveDown, MoveToColumn, MoveUp};
use crossterm::event::{Event, KeyEventKind, poll, read};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{
    self, BeginSynchronizedUpdate, Clear, ClearType, EndSynchronizedUpdate,
};
use crossterm::{execute, queue};
use std::io::{self, Stdout, Write};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalEvent {
    Key(KeyEvent),
    Resize { width: u16, height: u16 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPos {
    pub col: u16,
    pub row: u16,
}

/// Inline renderer: redraws a block of lines in place below the prompt.
pub struct Terminal {
    stdout: Stdout,
    drawn_rows: u16,
    cursor_row: u16,
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            drawn_rows: 0,
            cursor_row: 0,
        }
    }

    pub fn enter_raw_mode(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()
    }

    pub fn exit_raw_mode(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()
    }

    pub fn poll(&self, timeout: Duration) -> io::Result<bool> {
        poll(timeout)
    }

    pub fn read_event(&mut self) -> io::Result<TerminalEvent> {
        loop {
            match read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    return Ok(TerminalEvent::Key(map_key_event(key)));
                }
                Event::Resize(width, height) => {
                    return Ok(TerminalEvent::Resize { width, height });
                }
                _ => continue,
            }
        }
    }

    pub fn draw(&mut self, lines: &[SpanLine], cursor: Option<CursorPos>) -> io::Result<()> {
        queue!(self.stdout, BeginSynchronizedUpdate)?;
        if self.cursor_row > 0 {
            queue!(self.stdout, MoveUp(self.cursor_row))?;
        }
        queue!(self.stdout, MoveToColumn(0), Clear(ClearType::FromCursorDown))?;

        for (idx, line) in lines.iter().enumerate() {
            if idx > 0 {
                queue!(self.stdout, Print("\r\n"))?;
            }
            for span in line {
                if span.dim {
                    queue!(
                        self.stdout,
                        SetAttribute(Attribute::Dim),
                        Print(span.text.as_str()),
                        SetAttribute(Attribute::Reset)
                    )?;
                } else {
                    queue!(self.stdout, Print(span.text.as_str()))?;
                }
            }
        }

        let last_row = u16::try_from(lines.len().saturating_sub(1)).unwrap_or(u16::MAX);
        self.drawn_rows = last_row.saturating_add(1);
        self.cursor_row = last_row;
        if let Some(pos) = cursor {
            let row = pos.row.min(last_row);
            if last_row > row {
                queue!(self.stdout, MoveUp(last_row - row))?;
            }
            queue!(self.stdout, MoveToColumn(pos.col))?;
            self.cursor_row = row;
        }

        queue!(self.stdout, EndSynchronizedUpdate)?;
        self.stdout.flush()
    }

    /// Leaves the cursor on a fresh line below the drawn block.
    pub fn finish(&mut self) -> io::Result<()> {
        let below = self.drawn_rows.saturating_sub(1).saturating_sub(self.cursor_row);
        if below > 0 {
            queue!(self.stdout, MoveDown(below))?;
        }
        execute!(self.stdout, Print("\r\n"))?;
        self.drawn_rows = 0;
        self.cursor_row = 0;
        Ok(())
    }
}

fn map_key_event(event: crossterm::event::KeyEvent) -> KeyEvent {
    KeyEvent::new(map_key_code(event.code), event.modifiers)
}

fn map_key_code(code: crossterm::event::KeyCode) -> KeyCode {
    match code {
        crossterm::event::KeyCode::Char(ch) => KeyCode::Char(ch),
        crossterm::event::KeyCode::Backspace => KeyCode::Backspace,
        crossterm::event::KeyCode::Enter => KeyCode::Enter,
        crossterm::event::KeyCode::Esc => KeyCode::Esc,
        crossterm::event::KeyCode::Tab => KeyCode::Tab,
        _ => KeyCode::Other,
    }
}
