//! Project cards. Static layout, no reveal behavior.

use crate::content;
use crate::types::{Line, Rgb, Span, Style};

use super::PageBuilder;

pub fn push(page: &mut PageBuilder) {
    page.heading("PROJECTS");

    let width = page.width();
    for project in &content::PROJECTS {
        page.push(Line::new(vec![
            Span::new("▪ ", Style::new(Rgb::PURPLE)),
            Span::new(project.title, Style::bold(Rgb::WHITE)),
            Span::new(format!("  {}", project.tech), Style::dim(Rgb::CYAN)),
        ]));
        // Bullet marker takes 6 columns; wrap the text to the rest.
        for bullet in project.bullets {
            for (i, part) in super::wrap_text(bullet, width.saturating_sub(6))
                .into_iter()
                .enumerate()
            {
                let marker = if i == 0 { "    • " } else { "      " };
                page.push(Line::new(vec![
                    Span::new(marker, Style::dim(Rgb::DARK_GRAY)),
                    Span::new(part, Style::new(Rgb::GRAY)),
                ]));
            }
        }
        page.blank();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullets_wrap_to_width() {
        let mut page = PageBuilder::new(40);
        push(&mut page);
        let built = page.finish();

        for line in &built.lines {
            let text = line.text();
            if text.starts_with("    • ") || text.starts_with("      ") {
                assert!(line.width() <= 40, "overflow: {text:?}");
            }
        }
    }
}
