//! Row-diffing terminal painter.
//!
//! Paints the visible window of page lines, comparing each row to the
//! previously painted frame and touching only rows that changed. One flush
//! per frame keeps output to a single syscall.

use std::io::{self, stdout, Stdout, Write};

use crossterm::cursor;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};

use crate::types::{Attr, Line, Rgb};

/// Paints window rows onto the alternate screen, diffing against the
/// previous frame.
///
/// Generic over the output so tests can paint into a byte buffer; the
/// runtime always uses stdout.
pub struct Painter<W: Write = Stdout> {
    out: W,
    previous: Option<Vec<Line>>,
}

impl Painter {
    pub fn new() -> Self {
        Self::with_writer(stdout())
    }
}

impl<W: Write> Painter<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            previous: None,
        }
    }

    /// Enter the alternate screen and hide the cursor.
    pub fn enter(&mut self) -> io::Result<()> {
        execute!(
            self.out,
            EnterAlternateScreen,
            cursor::Hide,
            Clear(ClearType::All)
        )?;
        self.invalidate();
        Ok(())
    }

    /// Restore the cursor and leave the alternate screen.
    pub fn exit(&mut self) -> io::Result<()> {
        execute!(self.out, ResetColor, cursor::Show, LeaveAlternateScreen)
    }

    /// Forget the previous frame; the next paint redraws every row.
    /// Use after a resize or anything else that corrupts the screen.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    /// Paint the window rows, skipping rows unchanged since the last frame.
    ///
    /// Returns true if anything was written.
    pub fn paint(&mut self, rows: &[Line]) -> io::Result<bool> {
        let mut changed = false;

        for (y, line) in rows.iter().enumerate() {
            let same = match &self.previous {
                Some(prev) if prev.len() == rows.len() => prev.get(y) == Some(line),
                _ => false,
            };
            if same {
                continue;
            }
            changed = true;
            self.paint_row(y as u16, line)?;
        }

        if changed {
            queue!(self.out, ResetColor)?;
            self.out.flush()?;
        }
        self.previous = Some(rows.to_vec());
        Ok(changed)
    }

    fn paint_row(&mut self, y: u16, line: &Line) -> io::Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(0, y),
            Clear(ClearType::UntilNewLine)
        )?;
        for span in &line.spans {
            queue!(self.out, SetForegroundColor(to_color(span.style.fg)))?;
            for attr in attributes(span.style.attrs) {
                queue!(self.out, SetAttribute(attr))?;
            }
            queue!(self.out, Print(&span.text), SetAttribute(Attribute::Reset))?;
        }
        Ok(())
    }
}

impl Default for Painter {
    fn default() -> Self {
        Self::new()
    }
}
fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn attributes(attrs: Attr) -> Vec<Attribute> {
    let mut out = Vec::new();
    if attrs.contains(Attr::BOLD) {
        out.push(Attribute::Bold);
    }
    if attrs.contains(Attr::ITALIC) {
        out.push(Attribute::Italic);
    }
    if attrs.contains(Attr::UNDERLINE) {
        out.push(Attribute::Underlined);
    }
    if attrs.contains(Attr::DIM) {
        out.push(Attribute::Dim);
    }
    out
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn painter() -> Painter<Vec<u8>> {
        Painter::with_writer(Vec::new())
    }

    #[test]
    fn test_painter_starts_invalid() {
        let painter = Painter::new();
        assert!(!painter.has_previous());
    }

    #[test]
    fn test_identical_frame_writes_nothing() {
        let mut p = painter();
        let rows = vec![Line::plain("hello"), Line::blank()];
        assert!(p.paint(&rows).unwrap());
        assert!(p.has_previous());

        let len = p.out.len();
        assert!(!p.paint(&rows).unwrap());
        assert_eq!(p.out.len(), len);
    }

    #[test]
    fn test_invalidate_repaints_every_row() {
        let mut p = painter();
        let rows = vec![Line::plain("a"), Line::plain("b")];
        p.paint(&rows).unwrap();

        // After invalidation the same frame repaints in full, the resize
        // recovery path.
        let before = p.out.len();
        p.invalidate();
        assert!(p.paint(&rows).unwrap());

        let tail = String::from_utf8_lossy(&p.out[before..]).into_owned();
        assert!(tail.contains("\x1b[1;1H")); // Row 0 cursor move
        assert!(tail.contains("\x1b[2;1H")); // Row 1 cursor move
    }

    #[test]
    fn test_row_count_change_forces_full_repaint() {
        let mut p = painter();
        p.paint(&[Line::plain("a"), Line::plain("b")]).unwrap();
        // Same first row, different height: the diff must not skip row 0.
        let before = p.out.len();
        assert!(p.paint(&[Line::plain("a")]).unwrap());
        let tail = String::from_utf8_lossy(&p.out[before..]).into_owned();
        assert!(tail.contains("\x1b[1;1H"));
    }

    #[test]
    fn test_attribute_mapping() {
        assert!(attributes(Attr::empty()).is_empty());

        let attrs = attributes(Attr::BOLD | Attr::DIM);
        assert!(attrs.contains(&Attribute::Bold));
        assert!(attrs.contains(&Attribute::Dim));
        assert!(!attrs.contains(&Attribute::Italic));
    }

    #[test]
    fn test_color_mapping() {
        let c = to_color(Rgb::new(1, 2, 3));
        assert_eq!(c, Color::Rgb { r: 1, g: 2, b: 3 });
    }
}
