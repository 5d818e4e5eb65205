//! Built-in block font.
//!
//! A compact five-row `#` font registered in code so the toolkit renders
//! without any font files on disk. Covers the uppercase alphabet, digits and
//! common punctuation; lowercase input falls back to the uppercase glyphs.

use once_cell::sync::Lazy;

use crate::figlet::FigletFont;

/// Name the built-in font is registered under.
pub const BUILTIN_FONT_NAME: &str = "block";

const HEIGHT: usize = 5;

#[rustfmt::skip]
static GLYPHS: &[(char, [&str; HEIGHT])] = &[
    (' ', ["  ",
           "  ",
           "  ",
           "  ",
           "  "]),
    ('A', [" ### ",
           "#   #",
           "#####",
           "#   #",
           "#   #"]),
    ('B', ["#### ",
           "#   #",
           "#### ",
           "#   #",
           "#### "]),
    ('C', [" ####",
           "#    ",
           "#    ",
           "#    ",
           " ####"]),
    ('D', ["#### ",
           "#   #",
           "#   #",
           "#   #",
           "#### "]),
    ('E', ["#####",
           "#    ",
           "#### ",
           "#    ",
           "#####"]),
    ('F', ["#####",
           "#    ",
           "#### ",
           "#    ",
           "#    "]),
    ('G', [" ####",
           "#    ",
           "#  ##",
           "#   #",
           " ####"]),
    ('H', ["#   #",
           "#   #",
           "#####",
           "#   #",
           "#   #"]),
    ('I', ["#####",
           "  #  ",
           "  #  ",
           "  #  ",
           "#####"]),
    ('J', ["#####",
           "   # ",
           "   # ",
           "#  # ",
           " ##  "]),
    ('K', ["#   #",
           "#  # ",
           "###  ",
           "#  # ",
           "#   #"]),
    ('L', ["#    ",
           "#    ",
           "#    ",
           "#    ",
           "#####"]),
    ('M', ["#   #",
           "## ##",
           "# # #",
           "#   #",
           "#   #"]),
    ('N', ["#   #",
           "##  #",
           "# # #",
           "#  ##",
           "#   #"]),
    ('O', [" ### ",
           "#   #",
           "#   #",
           "#   #",
           " ### "]),
    ('P', ["#### ",
           "#   #",
           "#### ",
           "#    ",
           "#    "]),
    ('Q', [" ### ",
           "#   #",
           "# # #",
           "#  # ",
           " ## #"]),
    ('R', ["#### ",
           "#   #",
           "#### ",
           "#  # ",
           "#   #"]),
    ('S', [" ####",
           "#    ",
           " ### ",
           "    #",
           "#### "]),
    ('T', ["#####",
           "  #  ",
           "  #  ",
           "  #  ",
           "  #  "]),
    ('U', ["#   #",
           "#   #",
           "#   #",
           "#   #",
           " ### "]),
    ('V', ["#   #",
           "#   #",
           "#   #",
           " # # ",
           "  #  "]),
    ('W', ["#   #",
           "#   #",
           "# # #",
           "## ##",
           "#   #"]),
    ('X', ["#   #",
           " # # ",
           "  #  ",
           " # # ",
           "#   #"]),
    ('Y', ["#   #",
           " # # ",
           "  #  ",
           "  #  ",
           "  #  "]),
    ('Z', ["#####",
           "   # ",
           "  #  ",
           " #   ",
           "#####"]),
    ('0', [" ### ",
           "#  ##",
           "# # #",
           "##  #",
           " ### "]),
    ('1', ["  #  ",
           " ##  ",
           "  #  ",
           "  #  ",
           "#####"]),
    ('2', [" ### ",
           "#   #",
           "  ## ",
           " #   ",
           "#####"]),
    ('3', ["#### ",
           "    #",
           " ### ",
           "    #",
           "#### "]),
    ('4', ["#  # ",
           "#  # ",
           "#####",
           "   # ",
           "   # "]),
    ('5', ["#####",
           "#    ",
           "#### ",
           "    #",
           "#### "]),
    ('6', [" ### ",
           "#    ",
           "#### ",
           "#   #",
           " ### "]),
    ('7', ["#####",
           "   # ",
           "  #  ",
           " #   ",
           "#    "]),
    ('8', [" ### ",
           "#   #",
           " ### ",
           "#   #",
           " ### "]),
    ('9', [" ### ",
           "#   #",
           " ####",
           "    #",
           " ### "]),
    ('!', ["#",
           "#",
           "#",
           " ",
           "#"]),
    ('?', [" ### ",
           "#   #",
           "  ## ",
           "     ",
           "  #  "]),
    ('.', [" ",
           " ",
           " ",
           " ",
           "#"]),
    (',', ["  ",
           "  ",
           "  ",
           " #",
           "# "]),
    ('-', ["    ",
           "    ",
           "####",
           "    ",
           "    "]),
    ('_', ["     ",
           "     ",
           "     ",
           "     ",
           "#####"]),
    (':', [" ",
           "#",
           " ",
           "#",
           " "]),
    ('\'', ["#",
            "#",
            " ",
            " ",
            " "]),
];

static BLOCK: Lazy<FigletFont> = Lazy::new(build_block_font);

/// The shared built-in font instance.
pub(crate) fn block_font() -> FigletFont {
    BLOCK.clone()
}

fn build_block_font() -> FigletFont {
    let mut font = FigletFont::new(BUILTIN_FONT_NAME, HEIGHT);
    for (ch, rows) in GLYPHS {
        // one blank column of letter spacing after every glyph
        let spaced: Vec<String> = rows.iter().map(|row| format!("{row} ")).collect();
        let spaced: Vec<&str> = spaced.iter().map(String::as_str).collect();
        font.add_glyph(*ch, &spaced);
    }
    font
}
