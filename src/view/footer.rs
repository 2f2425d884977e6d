//! Contact footer. Static layout, no reveal behavior.

use crate::content;
use crate::types::{Line, Rgb, Span, Style};

use super::{labelled, PageBuilder};

pub fn push(page: &mut PageBuilder) {
    page.heading("GET IN TOUCH");

    for row in &content::CONTACT {
        page.push(labelled(row.label, row.value, 10));
    }
    page.blank();

    for link in &content::LINKS {
        page.push(Line::new(vec![
            Span::new(format!("{:<10}", link.label), Style::new(Rgb::BLUE)),
            Span::new(link.url, Style::dim(Rgb::GRAY)),
        ]));
    }
    page.blank();
    page.push(Line::styled(
        format!("© 2026 {} · built with folio-tui", content::NAME),
        Style::dim(Rgb::DARK_GRAY),
    ));
    page.blank();
}
