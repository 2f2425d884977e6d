//! Core types shared across the page.
//!
//! Block identity, colors, text attributes, and the styled span/line model
//! the sections emit and the renderer paints.

use bitflags::bitflags;

// =============================================================================
// Block Identity
// =============================================================================

/// The page sections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionKind {
    Header,
    Summary,
    Timeline,
    Skills,
    Projects,
    Certifications,
    Footer,
}

/// Identifier for a revealable content block.
///
/// Maps 1:1 to a displayable block: one timeline entry, one skill category
/// card, and so on. `index` is the block's fixed position inside its section,
/// which is also its ordinal for stagger purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockId {
    pub section: SectionKind,
    pub index: u16,
}

impl BlockId {
    pub const fn new(section: SectionKind, index: u16) -> Self {
        Self { section, index }
    }

    /// The block's fixed position in its containing sequence.
    pub const fn ordinal(&self) -> usize {
        self.index as usize
    }
}

// =============================================================================
// Colors
// =============================================================================

/// RGB color (24-bit truecolor).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: Self = Self::new(235, 235, 235);
    pub const GRAY: Self = Self::new(130, 140, 150);
    pub const DARK_GRAY: Self = Self::new(80, 88, 96);
    pub const BLUE: Self = Self::new(96, 165, 250);
    pub const PURPLE: Self = Self::new(167, 139, 250);
    pub const GREEN: Self = Self::new(74, 222, 128);
    pub const YELLOW: Self = Self::new(250, 204, 21);
    pub const PINK: Self = Self::new(244, 114, 182);
    pub const CYAN: Self = Self::new(103, 232, 249);
}

// =============================================================================
// Text Attributes (bitflags)
// =============================================================================

bitflags! {
    /// Text styling flags for a span.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const BOLD      = 0b0000_0001;
        const ITALIC    = 0b0000_0010;
        const UNDERLINE = 0b0000_0100;
        const DIM       = 0b0000_1000;
    }
}

// =============================================================================
// Spans and Lines
// =============================================================================

/// Foreground color plus attributes for one span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: Rgb,
    pub attrs: Attr,
}

impl Style {
    pub const fn new(fg: Rgb) -> Self {
        Self {
            fg,
            attrs: Attr::empty(),
        }
    }

    pub const fn bold(fg: Rgb) -> Self {
        Self {
            fg,
            attrs: Attr::BOLD,
        }
    }

    pub const fn dim(fg: Rgb) -> Self {
        Self {
            fg,
            attrs: Attr::DIM,
        }
    }

    pub const fn with_attrs(mut self, attrs: Attr) -> Self {
        self.attrs = attrs;
        self
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new(Rgb::WHITE)
    }
}

/// A run of text with one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::default())
    }

    pub fn width(&self) -> usize {
        self.text.chars().count()
    }
}

/// One rendered row of the page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    /// An empty row.
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(vec![Span::plain(text)])
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self::new(vec![Span::new(text, style)])
    }

    /// Display width in terminal columns.
    pub fn width(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }

    /// Concatenated text without styling, mostly for tests.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_id_ordinal() {
        let id = BlockId::new(SectionKind::Timeline, 3);
        assert_eq!(id.ordinal(), 3);
        assert_eq!(id.section, SectionKind::Timeline);
    }

    #[test]
    fn test_block_id_equality() {
        let a = BlockId::new(SectionKind::Skills, 0);
        let b = BlockId::new(SectionKind::Skills, 0);
        let c = BlockId::new(SectionKind::Skills, 1);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_attr_flags() {
        let attrs = Attr::BOLD | Attr::ITALIC;
        assert!(attrs.contains(Attr::BOLD));
        assert!(!attrs.contains(Attr::UNDERLINE));
    }

    #[test]
    fn test_line_width_and_text() {
        let line = Line::new(vec![
            Span::new("abc", Style::bold(Rgb::BLUE)),
            Span::plain(" def"),
        ]);
        assert_eq!(line.width(), 7);
        assert_eq!(line.text(), "abc def");
        assert_eq!(Line::blank().width(), 0);
    }
}
