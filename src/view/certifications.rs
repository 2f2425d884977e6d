//! Certification grid. Static layout, no reveal behavior.

use crate::content;
use crate::types::{Line, Rgb, Span, Style};

use super::PageBuilder;

pub fn push(page: &mut PageBuilder) {
    page.heading("CERTIFICATIONS");

    for cert in &content::CERTIFICATIONS {
        page.push(Line::new(vec![
            Span::new("✓ ", Style::new(Rgb::GREEN)),
            Span::new(format!("{:<18}", cert.name), Style::new(Rgb::WHITE)),
            Span::new(cert.provider, Style::dim(Rgb::GRAY)),
        ]));
    }
    page.blank();
}
