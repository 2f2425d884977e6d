//! Header - name, typewriter role line, contact rows.

use crate::content;
use crate::types::{Attr, Line, Rgb, Span, Style};

use super::{labelled, PageBuilder};

/// Caret glyph appended by the view, not part of the typewriter machine.
const CARET: char = '▍';

pub fn push(page: &mut PageBuilder, typed: &str, caret_on: bool) {
    page.blank();
    page.push(Line::styled(content::NAME, Style::bold(Rgb::BLUE)));
    page.push(role_line(typed, caret_on));
    page.blank();

    for row in &content::CONTACT {
        page.push(labelled(row.label, row.value, 10));
    }
    page.blank();

    for line in super::wrap_text(content::SUMMARY, page.width()) {
        page.push(Line::styled(line, Style::new(Rgb::GRAY)));
    }
    page.blank();
}

/// The typewriter output plus a blinking caret. The caret's cell is always
/// occupied (a space when off) so the line never changes width mid-blink.
fn role_line(typed: &str, caret_on: bool) -> Line {
    let caret = if caret_on { CARET } else { ' ' };
    Line::new(vec![
        Span::new(
            typed.to_string(),
            Style::new(Rgb::WHITE).with_attrs(Attr::ITALIC),
        ),
        Span::new(caret.to_string(), Style::new(Rgb::BLUE)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_line_caret_phases() {
        let on = role_line("abc", true);
        let off = role_line("abc", false);
        assert_eq!(on.text(), format!("abc{CARET}"));
        assert_eq!(off.text(), "abc ");
        assert_eq!(on.width(), off.width());
    }
}
