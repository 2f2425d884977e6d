//! Technical Expertise grid.
//!
//! Each category card is one revealable block (randomized stagger) and one
//! hover target. While hovered, every skill row shows its proficiency bar
//! and percentage; otherwise just the name. Both forms occupy one row per
//! skill, so hover never shifts page geometry.

use crate::content;
use crate::types::{BlockId, Line, Rgb, SectionKind, Span, Style};

use super::{bar, PageBuilder};

const BAR_WIDTH: usize = 20;
const NAME_PAD: usize = 14;

/// Accent per category, cycled by ordinal like the original's gradients.
const ACCENTS: [Rgb; 6] = [
    Rgb::BLUE,
    Rgb::GREEN,
    Rgb::PURPLE,
    Rgb::YELLOW,
    Rgb::PINK,
    Rgb::CYAN,
];

pub fn push(page: &mut PageBuilder, revealed: &[BlockId], hovered: Option<BlockId>) {
    page.heading("TECHNICAL EXPERTISE");

    for (index, category) in content::SKILLS.iter().enumerate() {
        let id = BlockId::new(SectionKind::Skills, index as u16);
        let lines = category_lines(category, index, hovered == Some(id));
        page.block(id, revealed.contains(&id), lines);
    }
}

fn category_lines(
    category: &content::SkillCategory,
    ordinal: usize,
    hovered: bool,
) -> Vec<Line> {
    let accent = ACCENTS[ordinal % ACCENTS.len()];

    let mut lines = vec![Line::new(vec![
        Span::new("◆ ", Style::new(accent)),
        Span::new(category.name, Style::bold(Rgb::WHITE)),
    ])];

    for skill in category.items {
        let mut spans = vec![Span::new(
            format!("   {:<width$}", skill.name, width = NAME_PAD),
            Style::new(Rgb::GRAY),
        )];
        if hovered {
            spans.push(Span::new(bar(skill.proficiency, BAR_WIDTH), Style::new(accent)));
            spans.push(Span::new(
                format!(" {:>3}%", skill.proficiency),
                Style::dim(Rgb::WHITE),
            ));
        }
        lines.push(Line::new(spans));
    }

    lines.push(Line::blank());
    lines
}
