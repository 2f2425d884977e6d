//! The full portfolio page.
//!
//! ```sh
//! cargo run --example portfolio
//! ```
//!
//! Scroll with arrows / PageUp / PageDown / mouse wheel, hover skill cards
//! for proficiency bars, quit with `q`, Esc, or Ctrl+C.

use std::io;

fn main() -> io::Result<()> {
    let mut app = folio_tui::mount()?;
    app.run()?;
    app.unmount()
}
