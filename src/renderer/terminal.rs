//! Terminal drawing of a sampled frame.
//!
//! Each function receives a writer and an immutable frame. The layout is a
//! two-line banner, the level line, then the playfield grid.

use std::io::Write;

use crossterm::{
    QueueableCommand, cursor,
    style::{self, Color, Print},
    terminal,
};

use super::sample::{Cell, Frame};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_FULL: Color = Color::Cyan;
const C_HALF: Color = Color::Blue;
const C_BULLET: Color = Color::White;
const C_CROSSHAIR: Color = Color::Yellow;
const C_TITLE_BG: Color = Color::Green;
const C_KEY_BG: Color = Color::Yellow;
const C_LEVEL_BG: Color = Color::Red;

/// Rows used above the playfield
pub const HEADER_ROWS: u16 = 3;

/// Clear the screen and draw the static banner
pub fn draw_banner<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(style::SetBackgroundColor(C_TITLE_BG))?;
    out.queue(style::SetForegroundColor(Color::Black))?;
    out.queue(Print(" Ring Shot "))?;
    out.queue(style::ResetColor)?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print("Press "))?;
    draw_key(out, " Space ")?;
    out.queue(Print(" to shoot, "))?;
    draw_key(out, " Ctrl-C ")?;
    out.queue(Print(" to exit"))?;

    out.flush()
}

fn draw_key<W: Write>(out: &mut W, label: &str) -> std::io::Result<()> {
    out.queue(style::SetBackgroundColor(C_KEY_BG))?;
    out.queue(style::SetForegroundColor(Color::Black))?;
    out.queue(Print(label))?;
    out.queue(style::ResetColor)?;
    Ok(())
}

/// Draw one complete frame below the banner
pub fn draw_frame<W: Write>(out: &mut W, frame: &Frame) -> std::io::Result<()> {
    draw_level(out, frame.level)?;

    for (row, cells) in frame.rows().enumerate() {
        out.queue(cursor::MoveTo(0, HEADER_ROWS + row as u16))?;
        for &cell in cells {
            draw_cell(out, cell)?;
        }
    }

    // Park cursor below the playfield and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, HEADER_ROWS + frame.height))?;
    out.flush()
}

fn draw_level<W: Write>(out: &mut W, level: u32) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(0, HEADER_ROWS - 1))?;
    out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
    out.queue(Print("Level "))?;
    out.queue(style::SetBackgroundColor(C_LEVEL_BG))?;
    out.queue(Print(format!(" {level} ")))?;
    out.queue(style::ResetColor)?;
    Ok(())
}

fn draw_cell<W: Write>(out: &mut W, cell: Cell) -> std::io::Result<()> {
    match cell {
        Cell::Empty => {
            out.queue(Print(' '))?;
        }
        Cell::Full => fill(out, C_FULL)?,
        Cell::Half => fill(out, C_HALF)?,
        Cell::Bullet => fill(out, C_BULLET)?,
        Cell::Crosshair => {
            out.queue(style::SetForegroundColor(C_CROSSHAIR))?;
            out.queue(Print('+'))?;
            out.queue(style::ResetColor)?;
        }
    }
    Ok(())
}

fn fill<W: Write>(out: &mut W, color: Color) -> std::io::Result<()> {
    out.queue(style::SetBackgroundColor(color))?;
    out.queue(Print(' '))?;
    out.queue(style::ResetColor)?;
    Ok(())
}
