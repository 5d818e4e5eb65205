//! bannerkit: ASCII banner pipeline.
//! FIGlet rendering, alignment normalization, ANSI color embedding, export encoding.

pub mod align;
mod builtin;
pub mod catalog;
pub mod color;
mod error;
pub mod export;
pub mod figlet;
pub mod request;
pub use align::Alignment;
pub use catalog::FontCatalog;
pub use color::AnsiColor;
pub use error::{BannerError, Result};
pub use export::{ExportFormat, ExportOptions, ExportPayload};
pub use figlet::FigletFont;
pub use request::{ExportRequest, PreviewRequest};

// Test utilities
pub mod test_support;

/// Raw multi-line glyph output produced by a rendering engine.
///
/// May be empty (empty input text); lines may have unequal length.
pub type RawBanner = Vec<String>;

/// The font-rendering capability the banner pipeline depends on.
///
/// Kept behind a trait so the pipeline can run against a stub engine in
/// tests; [`FontCatalog`] is the shipped implementation.
pub trait RenderEngine {
    /// Renders `text` with the named font, or the engine default when `font`
    /// is `None`. Fails with [`BannerError::FontNotFound`] for unknown names.
    fn render(&self, text: &str, font: Option<&str>) -> Result<RawBanner>;

    /// Names of the fonts this engine can render with.
    fn font_names(&self) -> Vec<String>;
}
