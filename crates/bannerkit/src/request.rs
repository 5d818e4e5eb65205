//! Request-boundary operations: the surface the I/O front ends call.
//!
//! Both operations run the same linear pipeline: render the raw glyph lines
//! through the engine, normalize their alignment, then either hand the text
//! back (preview) or encode it for download (export).

use crate::align::Alignment;
use crate::color::AnsiColor;
use crate::error::{BannerError, Result};
use crate::export::{self, ExportOptions, ExportPayload};
use crate::{RawBanner, RenderEngine};

/// A preview request: render text and normalize it for display.
///
/// `color` rides along for the presentation layer (terminal escapes or CSS);
/// the preview text itself stays plain.
#[derive(Clone, Debug, Default)]
pub struct PreviewRequest {
    pub text: String,
    pub font: Option<String>,
    pub align: Alignment,
    pub color: Option<AnsiColor>,
}

/// An export request: render, normalize and serialize for download.
#[derive(Clone, Debug, Default)]
pub struct ExportRequest {
    pub text: String,
    pub font: Option<String>,
    pub align: Alignment,
    pub options: ExportOptions,
}

/// Renders and alignment-normalizes a banner into a single string.
pub fn render_normalized(
    engine: &dyn RenderEngine,
    text: &str,
    font: Option<&str>,
    align: Alignment,
) -> Result<String> {
    let raw: RawBanner = engine.render(text, font)?;
    Ok(align.normalize(&raw).join("\n"))
}

/// Renders a banner for preview.
///
/// An unknown font substitutes an inline error message in place of the
/// banner; this operation never fails.
pub fn preview(engine: &dyn RenderEngine, request: &PreviewRequest) -> String {
    match render_normalized(engine, &request.text, request.font.as_deref(), request.align) {
        Ok(banner) => banner,
        Err(BannerError::FontNotFound(name)) => format!("[Error] Font '{name}' not found."),
        Err(other) => format!("[Error] {other}"),
    }
}

/// Renders and encodes a banner for download.
///
/// An unknown font propagates as [`BannerError::FontNotFound`] so the I/O
/// layer can reject the request naming the font.
pub fn export(engine: &dyn RenderEngine, request: &ExportRequest) -> Result<ExportPayload> {
    let banner = render_normalized(engine, &request.text, request.font.as_deref(), request.align)?;
    Ok(export::encode(&banner, &request.options))
}
