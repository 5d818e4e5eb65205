//! Export encoding: serializing a normalized banner for download.

use serde::Serialize;

use crate::color::{self, AnsiColor};

/// Variable name used by the Python export when the caller supplies none
/// (or an illegal identifier).
pub const DEFAULT_VAR_NAME: &str = "BANNER";

/// Downloadable representation selector.
///
/// Parsing is permissive: any name other than `raw` or `json` falls back to
/// `Python`, the historical default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Python,
    Raw,
    Json,
}

impl ExportFormat {
    pub fn from_name(name: &str) -> Self {
        match name {
            "raw" => Self::Raw,
            "json" => Self::Json,
            _ => Self::Python,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Raw => "raw",
            Self::Json => "json",
        }
    }
}

/// Options controlling a single export.
///
/// Color escapes are only embedded when both the `embed_color` flag and a
/// recognized color token are present.
#[derive(Clone, Debug)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub var_name: String,
    pub embed_color: bool,
    pub color: Option<AnsiColor>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Python,
            var_name: DEFAULT_VAR_NAME.to_string(),
            embed_color: false,
            color: None,
        }
    }
}

/// The encoded download: content bytes plus the filename and media type the
/// I/O layer should attach.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportPayload {
    pub bytes: Vec<u8>,
    pub filename: &'static str,
    pub media_type: &'static str,
}

/// JSON document written by [`ExportFormat::Json`].
#[derive(Debug, Serialize)]
struct BannerDocument<'a> {
    text_lines: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<&'a str>,
}

/// Serializes `banner` according to `options`. This never fails: every
/// banner, including ones full of quotes, backslashes and escape bytes,
/// produces a valid document in each format.
pub fn encode(banner: &str, options: &ExportOptions) -> ExportPayload {
    let color = if options.embed_color {
        options.color
    } else {
        None
    };
    match options.format {
        ExportFormat::Raw => ExportPayload {
            bytes: color::embed(banner, color).into_bytes(),
            filename: "banner.txt",
            media_type: "text/plain; charset=utf-8",
        },
        ExportFormat::Json => {
            let document = BannerDocument {
                text_lines: banner.lines().collect(),
                color: color.map(AnsiColor::name),
            };
            // a document of plain strings cannot fail to serialize
            let bytes = serde_json::to_vec_pretty(&document).unwrap_or_default();
            ExportPayload {
                bytes,
                filename: "banner.json",
                media_type: "application/json; charset=utf-8",
            }
        }
        ExportFormat::Python => ExportPayload {
            bytes: python_module(banner, &options.var_name, color).into_bytes(),
            filename: "banner.py",
            media_type: "text/x-source; charset=utf-8",
        },
    }
}

/// Generates a Python module defining the banner constant, with a guarded
/// entry point printing it when the module is executed directly.
fn python_module(banner: &str, var_name: &str, color: Option<AnsiColor>) -> String {
    let var = legal_identifier(var_name).unwrap_or(DEFAULT_VAR_NAME);
    let text = color::embed(banner, color);
    // JSON string escaping doubles as Python string-literal escaping: both
    // use \" \\ \n \r \t \uXXXX, and serde_json never escapes '/'
    let literal = serde_json::to_string(&text).unwrap_or_else(|_| String::from("\"\""));
    format!(
        "# Generated ASCII banner (variable: {var})\n{var} = {literal}\n\nif __name__ == '__main__':\n    print({var})\n"
    )
}

const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];

/// Accepts `name` when it can be embedded verbatim as the assigned variable:
/// `[A-Za-z_][A-Za-z0-9_]*` and not a Python keyword.
fn legal_identifier(name: &str) -> Option<&str> {
    let mut chars = name.chars();
    let first = chars.next()?;
    if !(first.is_ascii_alphabetic() || first == '_') {
        return None;
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    if PYTHON_KEYWORDS.contains(&name) {
        return None;
    }
    Some(name)
}
