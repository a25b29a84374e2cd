//! Terminal backend: raw mode, alternate screen, and frame flushing.
//!
//! Each frame is a full redraw. The frame is small and adjacent cells mostly
//! share a style, so coalescing style changes keeps the write volume low
//! without any diffing machinery.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::term::fb::{CellStyle, FrameBuffer};
use crate::types::Rgb;

pub struct TerminalRenderer {
    stdout: io::Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    /// Switch the terminal into game mode: raw input, alternate screen,
    /// hidden cursor, cleared viewport.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout
            .queue(terminal::EnterAlternateScreen)?
            .queue(terminal::DisableLineWrap)?
            .queue(cursor::Hide)?
            .queue(terminal::Clear(terminal::ClearType::All))?;
        self.stdout.flush()?;
        Ok(())
    }

    /// Undo everything `enter` did. Safe to call on any exit path.
    pub fn exit(&mut self) -> Result<()> {
        self.stdout
            .queue(ResetColor)?
            .queue(cursor::Show)?
            .queue(terminal::EnableLineWrap)?
            .queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Flush one frame, top to bottom. A style command is only queued when
    /// the style differs from the previous cell's.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.stdout.queue(cursor::MoveTo(0, 0))?;

        let mut active: Option<CellStyle> = None;
        for y in 0..fb.height() {
            if y > 0 {
                self.stdout.queue(Print("\r\n"))?;
            }
            for cell in fb.row(y) {
                if active != Some(cell.style) {
                    self.stdout
                        .queue(SetForegroundColor(rgb_to_color(cell.style.fg)))?
                        .queue(SetBackgroundColor(rgb_to_color(cell.style.bg)))?;
                    active = Some(cell.style);
                }
                self.stdout.queue(Print(cell.ch))?;
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
