//! Experience & Education timeline.
//!
//! Each entry is one revealable block: a marker row, organization and
//! period rows along a vertical rail, bullets, and skill tags. Entries are
//! revealed in ordinal order by the tracker's 300ms stagger.

use crate::content::{self, EntryKind};
use crate::types::{BlockId, Line, Rgb, SectionKind, Span, Style};

use super::PageBuilder;

pub fn push(page: &mut PageBuilder, revealed: &[BlockId]) {
    page.heading("EXPERIENCE & EDUCATION");

    let width = page.width();
    for (index, entry) in content::TIMELINE.iter().enumerate() {
        let id = BlockId::new(SectionKind::Timeline, index as u16);
        page.block(id, revealed.contains(&id), entry_lines(entry, width));
    }
}

fn entry_lines(entry: &content::TimelineEntry, width: usize) -> Vec<Line> {
    let accent = match entry.kind {
        EntryKind::Experience => Rgb::BLUE,
        EntryKind::Education => Rgb::GREEN,
    };
    let badge = match entry.kind {
        EntryKind::Experience => "Experience",
        EntryKind::Education => "Education",
    };

    let mut lines = vec![
        Line::new(vec![
            Span::new("● ", Style::new(accent)),
            Span::new(format!("[{badge}] "), Style::dim(accent)),
            Span::new(entry.title, Style::bold(Rgb::WHITE)),
        ]),
        Line::new(vec![
            Span::new("│ ", Style::dim(Rgb::DARK_GRAY)),
            Span::new(entry.organization, Style::new(accent)),
            Span::new(
                format!("  {} · {}", entry.period, entry.location),
                Style::dim(Rgb::GRAY),
            ),
        ]),
    ];

    // The rail and bullet marker take 6 columns; wrap the text to the rest.
    for bullet in entry.bullets {
        for (i, part) in super::wrap_text(bullet, width.saturating_sub(6))
            .into_iter()
            .enumerate()
        {
            let rail = if i == 0 { "│   • " } else { "│     " };
            lines.push(Line::new(vec![
                Span::new(rail, Style::dim(Rgb::DARK_GRAY)),
                Span::new(part, Style::new(Rgb::GRAY)),
            ]));
        }
    }

    lines.push(Line::new(vec![
        Span::new("│   ", Style::dim(Rgb::DARK_GRAY)),
        Span::new(entry.tags.join(" · "), Style::dim(Rgb::PURPLE)),
    ]));
    lines.push(Line::blank());
    lines
}
