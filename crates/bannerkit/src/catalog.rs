//! Font lookup backing the rendering engine boundary.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::builtin;
use crate::error::{BannerError, Result};
use crate::figlet::FigletFont;
use crate::{RawBanner, RenderEngine};

/// Name → font registry implementing [`RenderEngine`].
///
/// A new catalog holds the built-in block font, which is also the default
/// used when a request names no font. Additional `.flf` fonts can be loaded
/// from a directory; the file stem becomes the font name.
pub struct FontCatalog {
    fonts: BTreeMap<String, FigletFont>,
    default_font: String,
}

impl FontCatalog {
    pub fn new() -> Self {
        let mut fonts = BTreeMap::new();
        fonts.insert(builtin::BUILTIN_FONT_NAME.to_string(), builtin::block_font());
        Self {
            fonts,
            default_font: builtin::BUILTIN_FONT_NAME.to_string(),
        }
    }

    /// Registers `font` under `name`, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, font: FigletFont) {
        self.fonts.insert(name.into(), font);
    }

    /// Loads every `.flf` file in `dir`. Returns the number of fonts loaded.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize> {
        let entries = fs::read_dir(dir)
            .map_err(|e| BannerError::Parse(format!("font dir read error: {e}")))?;
        let mut loaded = 0;
        for entry in entries {
            let entry =
                entry.map_err(|e| BannerError::Parse(format!("font dir read error: {e}")))?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("flf") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let font = FigletFont::load(&path)?;
            self.fonts.insert(stem.to_string(), font);
            loaded += 1;
        }
        Ok(loaded)
    }

    /// Makes `name` the font used when requests name none.
    pub fn set_default(&mut self, name: &str) -> Result<()> {
        if !self.fonts.contains_key(name) {
            return Err(BannerError::FontNotFound(name.to_string()));
        }
        self.default_font = name.to_string();
        Ok(())
    }

    pub fn default_font(&self) -> &str {
        &self.default_font
    }

    pub fn get(&self, name: &str) -> Option<&FigletFont> {
        self.fonts.get(name)
    }
}

impl Default for FontCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderEngine for FontCatalog {
    fn render(&self, text: &str, font: Option<&str>) -> Result<RawBanner> {
        let name = font.unwrap_or(&self.default_font);
        let font = self
            .fonts
            .get(name)
            .ok_or_else(|| BannerError::FontNotFound(name.to_string()))?;
        Ok(font.render(text))
    }

    fn font_names(&self) -> Vec<String> {
        self.fonts.keys().cloned().collect()
    }
}
