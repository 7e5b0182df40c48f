//! Alternate-screen terminal session and frame drawing.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use crossterm::{execute, queue};

use flock_render::BrailleCanvas;

/// Raw-mode alternate screen with a hidden cursor.  Dropping it restores the
/// terminal, including on early return through `?`.
pub struct Screen {
    out:        Stdout,
    target_fps: f64,
}

impl Screen {
    /// `target_fps` sets the color of the frame-rate overlay.
    pub fn enter(target_fps: f64) -> Result<Self> {
        let mut out = io::stdout();
        enable_raw_mode().context("failed to enable raw mode")?;
        execute!(out, EnterAlternateScreen, Hide).context("failed to enter alternate screen")?;
        Ok(Self { out, target_fps })
    }

    /// Drain pending input without blocking.  True on `q`, `Esc` or `Ctrl-C`.
    pub fn quit_requested(&mut self) -> Result<bool> {
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if is_quit(key) => return Ok(true),
                Event::Resize(cols, rows) => {
                    log::debug!("terminal resized to {cols}×{rows}; domain unchanged");
                }
                _ => {}
            }
        }
        Ok(false)
    }

    /// Draw the braille rows, then each predator glyph in magenta, then the
    /// optional frame-rate overlay (green at or above the target, red below).
    pub fn draw(&mut self, canvas: &BrailleCanvas, potential_fps: Option<f64>) -> Result<()> {
        for (row, line) in canvas.rows().enumerate() {
            queue!(self.out, MoveTo(0, term_coord(row)), Print(line))?;
        }
        for (col, row, glyph) in canvas.overlays() {
            queue!(
                self.out,
                MoveTo(term_coord(col), term_coord(row)),
                SetForegroundColor(Color::Magenta),
                Print(glyph),
                ResetColor,
            )?;
        }
        if let Some(fps) = potential_fps {
            queue!(
                self.out,
                MoveTo(0, 0),
                SetForegroundColor(fps_color(fps, self.target_fps)),
                Print(format!("{fps:>7.0} fps")),
                ResetColor,
            )?;
        }
        self.out.flush()?;
        Ok(())
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        if let Err(err) = execute!(self.out, Show, LeaveAlternateScreen) {
            log::error!("failed to leave alternate screen: {err}");
        }
        if let Err(err) = disable_raw_mode() {
            log::error!("failed to disable raw mode: {err}");
        }
    }
}

fn is_quit(key: KeyEvent) -> bool {
    matches!(
        (key.code, key.modifiers),
        (KeyCode::Esc, _) | (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL)
    )
}

fn fps_color(fps: f64, target: f64) -> Color {
    if fps >= target { Color::Green } else { Color::Red }
}

fn term_coord(v: usize) -> u16 {
    u16::try_from(v).unwrap_or(u16::MAX)
}
