//! Test support utilities for bannerkit.
//!
//! This module provides helper types and functions that are useful for
//! testing the banner pipeline, but are not part of the public API.

use crate::figlet::FigletFont;

/// A tiny deterministic two-row font: every glyph is the character doubled
/// into a 2x2 block, so rendered output is easy to assert on.
pub fn tiny_font() -> FigletFont {
    let mut font = FigletFont::new("tiny", 2);
    for ch in 'A'..='Z' {
        let cell = format!("{ch}{ch}");
        font.add_glyph(ch, &[cell.as_str(), cell.as_str()]);
    }
    font.add_glyph(' ', &["  ", "  "]);
    font
}
