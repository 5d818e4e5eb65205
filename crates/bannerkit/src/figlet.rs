//! FIGlet (`.flf`) font parsing and full-size rendering.

use std::{fs, path::Path};

use crate::error::{BannerError, Result};

/// A single FIGlet character: glyph art rows plus the widest row length.
#[derive(Clone, Debug)]
pub struct FigletGlyph {
    pub width: usize,
    pub rows: Vec<String>,
}

/// A parsed FIGlet font.
///
/// Only the mandatory ASCII charset (32..=126) is loaded from `.flf` files.
/// Rendering uses the full-size layout: glyph rows are concatenated
/// horizontally as-is, hardblanks become spaces, no smushing or kerning.
#[derive(Clone)]
pub struct FigletFont {
    name: String,
    height: usize,
    hardblank: char,
    comments: Vec<String>,
    glyphs: Vec<Option<FigletGlyph>>,
}

impl FigletFont {
    pub fn new(name: impl Into<String>, height: usize) -> Self {
        Self {
            name: name.into(),
            height,
            hardblank: '$',
            comments: Vec::new(),
            glyphs: vec![None; 256],
        }
    }

    /// Loads a `.flf` file; the file stem becomes the font name.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes =
            fs::read(path).map_err(|e| BannerError::Parse(format!("figlet read error: {e}")))?;
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("figlet");
        Self::from_bytes(name, &bytes)
    }

    pub fn from_bytes(name: &str, bytes: &[u8]) -> Result<Self> {
        // Reject gzip-compressed .flf files (1F 8B signature) up front; only
        // plain-text fonts are supported.
        if bytes.len() >= 2 && bytes[0] == 0x1F && bytes[1] == 0x8B {
            return Err(BannerError::Parse(
                "gzip compressed .flf not supported; provide a plain .flf".into(),
            ));
        }
        let content = std::str::from_utf8(bytes)
            .map_err(|e| BannerError::Parse(format!("utf8 error: {e}")))?;
        Self::parse_content(name, content)
    }

    fn parse_content(name: &str, content: &str) -> Result<Self> {
        let mut lines = content.lines();
        let header_line = lines
            .next()
            .ok_or_else(|| BannerError::Parse("missing header".into()))?;
        if !header_line.starts_with("flf2a") {
            return Err(BannerError::Parse("not a flf2a header".into()));
        }
        let header_parts: Vec<&str> = header_line.split_whitespace().collect();
        if header_parts.len() < 6 {
            return Err(BannerError::Parse("incomplete header".into()));
        }

        let hardblank = header_parts[0].chars().nth(5).unwrap_or('$');
        let height: usize = header_parts
            .get(1)
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| BannerError::Parse("missing height".into()))?;
        if height == 0 {
            return Err(BannerError::Parse("zero glyph height".into()));
        }
        let comment_count: usize = header_parts
            .get(5)
            .and_then(|s| s.parse().ok())
            .unwrap_or(0);

        let mut font = FigletFont::new(name, height);
        font.hardblank = hardblank;

        for _ in 0..comment_count {
            if let Some(c) = lines.next() {
                font.comments.push(c.to_string());
            }
        }

        // Required charset: ASCII 32-126. Stop at the first incomplete glyph;
        // tagged extension characters after the range are not loaded.
        for ch in 32u8..=126 {
            match Self::read_character(&mut lines, height) {
                Ok(char_lines) => {
                    let rows: Vec<&str> = char_lines.iter().map(String::as_str).collect();
                    font.add_glyph(ch as char, &rows);
                }
                Err(_) => break,
            }
        }

        Ok(font)
    }

    fn read_character<'a, I>(lines: &mut I, height: usize) -> Result<Vec<String>>
    where
        I: Iterator<Item = &'a str>,
    {
        let mut char_lines = Vec::new();

        for _ in 0..height {
            let line = lines
                .next()
                .ok_or_else(|| BannerError::Parse("incomplete character".into()))?;

            // '@' marks end of row, '@@' end of glyph
            if let Some(stripped) = line.strip_suffix("@@") {
                char_lines.push(stripped.to_string());
                break;
            } else if let Some(stripped) = line.strip_suffix('@') {
                char_lines.push(stripped.to_string());
            } else {
                return Err(BannerError::Parse("character line missing @ marker".into()));
            }
        }

        Ok(char_lines)
    }

    /// Registers glyph art for `ch`, replacing any previous glyph.
    pub fn add_glyph(&mut self, ch: char, rows: &[&str]) {
        if ch as u32 >= 256 {
            return;
        }
        let glyph = FigletGlyph {
            width: rows.iter().map(|r| r.chars().count()).max().unwrap_or(0),
            rows: rows.iter().map(|r| r.to_string()).collect(),
        };
        self.glyphs[ch as usize] = Some(glyph);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.iter().filter(|g| g.is_some()).count()
    }

    pub fn has_char(&self, ch: char) -> bool {
        self.glyph(ch).is_some()
    }

    pub fn glyph(&self, ch: char) -> Option<&FigletGlyph> {
        ((ch as u32) < 256)
            .then(|| self.glyphs[ch as usize].as_ref())
            .flatten()
    }

    /// Renders `text` into banner lines. Empty input renders to no lines.
    ///
    /// Newlines in the input stack their banner blocks vertically. Characters
    /// the font lacks fall back to the opposite case when that glyph exists
    /// and are skipped otherwise; rendering itself never fails.
    pub fn render(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }
        let mut banner = Vec::new();
        for line in text.split('\n') {
            banner.extend(self.render_line(line));
        }
        banner
    }

    fn render_line(&self, line: &str) -> Vec<String> {
        let mut rows = vec![String::new(); self.height];
        for ch in line.chars() {
            let Some(glyph) = self.lookup(ch) else {
                continue;
            };
            for (i, row) in rows.iter_mut().enumerate() {
                let glyph_row = glyph.rows.get(i).map(String::as_str).unwrap_or("");
                let mut len = 0;
                for c in glyph_row.chars() {
                    row.push(if c == self.hardblank { ' ' } else { c });
                    len += 1;
                }
                // keep glyph columns rectangular so the next character
                // starts on a straight edge
                for _ in len..glyph.width {
                    row.push(' ');
                }
            }
        }
        rows
    }

    fn lookup(&self, ch: char) -> Option<&FigletGlyph> {
        if let Some(glyph) = self.glyph(ch) {
            return Some(glyph);
        }
        if !ch.is_ascii_alphabetic() {
            return None;
        }
        let folded = if ch.is_ascii_lowercase() {
            ch.to_ascii_uppercase()
        } else {
            ch.to_ascii_lowercase()
        };
        self.glyph(folded)
    }
}
