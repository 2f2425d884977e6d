//! Declarative page assembly.
//!
//! Every section is a function from content plus current state to styled
//! lines. `build_page` runs them top to bottom and records the row extent
//! of each revealable block as it goes, so the viewport always sees
//! geometry consistent with what gets painted.
//!
//! Hidden blocks render as blank lines of the same height as their revealed
//! form - reveals change what a block looks like, never where anything sits.

pub mod certifications;
pub mod footer;
pub mod header;
pub mod projects;
pub mod skills;
pub mod timeline;

use spark_signals::{signal, Signal};

use crate::content;
use crate::pipeline::viewport::BlockExtent;
use crate::state::{blink, hover};
use crate::types::{BlockId, Line, Rgb, SectionKind, Span, Style};

// =============================================================================
// Page Signals
// =============================================================================

/// The reactive inputs the page is built from.
///
/// The mount loop writes these after every state transition; the page
/// derived reads them, so any change rebuilds exactly one page.
#[derive(Clone)]
pub struct PageSignals {
    /// Typewriter output, rendered in the header.
    pub typed: Signal<String>,
    /// Caret blink phase from the shared blink clock.
    pub caret_on: Signal<bool>,
    /// Revealed timeline entries, in reveal order.
    pub timeline_revealed: Signal<Vec<BlockId>>,
    /// Revealed skill categories, in reveal order.
    pub skills_revealed: Signal<Vec<BlockId>>,
    /// Hovered skill category, last write wins.
    pub hovered: Signal<Option<BlockId>>,
    /// Content width in columns.
    pub width: Signal<u16>,
}

impl PageSignals {
    pub fn new(width: u16) -> Self {
        Self {
            typed: signal(String::new()),
            caret_on: blink::blink_signal(),
            timeline_revealed: signal(Vec::new()),
            skills_revealed: signal(Vec::new()),
            hovered: hover::hovered_signal(),
            width: signal(width),
        }
    }
}

/// A fully built page: lines to paint plus block geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub lines: Vec<Line>,
    pub extents: Vec<BlockExtent>,
}

impl Page {
    pub fn rows(&self) -> usize {
        self.lines.len()
    }
}

/// Build the whole page from the current signal values.
///
/// Reading the signals here is what ties the page derived to them.
pub fn build_page(signals: &PageSignals) -> Page {
    let width = signals.width.get() as usize;
    let typed = signals.typed.get();
    let caret_on = signals.caret_on.get();
    let timeline_revealed = signals.timeline_revealed.get();
    let skills_revealed = signals.skills_revealed.get();
    let hovered = signals.hovered.get();

    let mut page = PageBuilder::new(width);
    header::push(&mut page, &typed, caret_on);
    timeline::push(&mut page, &timeline_revealed);
    skills::push(&mut page, &skills_revealed, hovered);
    projects::push(&mut page);
    certifications::push(&mut page);
    footer::push(&mut page);
    page.finish()
}

/// Candidate blocks for the timeline reveal tracker, in ordinal order.
pub fn timeline_blocks() -> Vec<BlockId> {
    (0..content::TIMELINE.len() as u16)
        .map(|i| BlockId::new(SectionKind::Timeline, i))
        .collect()
}

/// Candidate blocks for the skills reveal tracker, in ordinal order.
pub fn skills_blocks() -> Vec<BlockId> {
    (0..content::SKILLS.len() as u16)
        .map(|i| BlockId::new(SectionKind::Skills, i))
        .collect()
}

// =============================================================================
// Page Builder
// =============================================================================

/// Accumulates lines and block extents during a build.
pub struct PageBuilder {
    lines: Vec<Line>,
    extents: Vec<BlockExtent>,
    width: usize,
}

impl PageBuilder {
    fn new(width: usize) -> Self {
        Self {
            lines: Vec::new(),
            extents: Vec::new(),
            width: width.max(20),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    pub fn blank(&mut self) {
        self.lines.push(Line::blank());
    }

    /// Section heading with an underline rule, original-page style.
    pub fn heading(&mut self, title: &str) {
        self.lines
            .push(Line::styled(title.to_string(), Style::bold(Rgb::WHITE)));
        self.lines.push(Line::styled(
            "─".repeat(title.chars().count().min(self.width)),
            Style::new(Rgb::PURPLE),
        ));
        self.blank();
    }

    /// Append a revealable block.
    ///
    /// Records the block's extent, then appends either its lines or an
    /// equal count of blanks when hidden, keeping page geometry stable
    /// across reveals.
    pub fn block(&mut self, id: BlockId, revealed: bool, lines: Vec<Line>) {
        self.extents
            .push(BlockExtent::new(id, self.lines.len(), lines.len()));
        if revealed {
            self.lines.extend(lines);
        } else {
            self.lines.extend(std::iter::repeat_n(Line::blank(), lines.len()));
        }
    }

    fn finish(self) -> Page {
        Page {
            lines: self.lines,
            extents: self.extents,
        }
    }
}

// =============================================================================
// Text helpers
// =============================================================================

/// Greedy word wrap to `width` columns. Words longer than the width get a
/// line of their own rather than being split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();
    let mut line = String::new();
    let mut cols = 0usize;

    for word in text.split_whitespace() {
        let wlen = word.chars().count();
        if cols > 0 && cols + 1 + wlen > width {
            out.push(std::mem::take(&mut line));
            cols = 0;
        }
        if cols > 0 {
            line.push(' ');
            cols += 1;
        }
        line.push_str(word);
        cols += wlen;
    }
    if !line.is_empty() {
        out.push(line);
    }
    out
}

/// Proficiency bar: `filled` out of `width` cells.
pub fn bar(pct: u8, width: usize) -> String {
    let filled = (pct.min(100) as usize * width) / 100;
    let mut s = String::with_capacity(width);
    for i in 0..width {
        s.push(if i < filled { '█' } else { '░' });
    }
    s
}

/// Convenience for a labelled row: dim label padded to `pad`, plain value.
pub(crate) fn labelled(label: &str, value: &str, pad: usize) -> Line {
    Line::new(vec![
        Span::new(format!("{label:<pad$}"), Style::dim(Rgb::GRAY)),
        Span::plain(value.to_string()),
    ])
}

// =============================================================================
// Tests
// =============================================================================
