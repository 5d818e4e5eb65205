//! HTTP routes: HTML preview form, plain-text banner, export download.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use bannerkit::export::DEFAULT_VAR_NAME;
use bannerkit::{
    color, request, Alignment, AnsiColor, BannerError, ExportFormat, ExportOptions,
    ExportRequest, FontCatalog, PreviewRequest, RenderEngine,
};
use serde::Deserialize;
use tracing::info;

use crate::AppState;

type AppStateArc = Arc<AppState>;

pub fn banner_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/", get(index))
        .route("/ascii", get(ascii_plain))
        .route("/export", get(export))
}

/// Query parameters shared by the three endpoints. Every field is optional;
/// loose values fall back permissively when parsed into the pipeline enums.
#[derive(Debug, Default, Deserialize)]
pub struct BannerQuery {
    text: Option<String>,
    #[serde(default)]
    font: String,
    #[serde(default)]
    align: String,
    #[serde(default)]
    color: String,
    #[serde(default)]
    format: String,
    var: Option<String>,
    #[serde(default)]
    embed_color: String,
}

fn font_opt(font: &str) -> Option<&str> {
    (!font.is_empty()).then_some(font)
}

fn truthy(value: &str) -> bool {
    matches!(value, "1" | "true" | "yes")
}

fn font_error(err: BannerError) -> (StatusCode, String) {
    match err {
        BannerError::FontNotFound(name) => (
            StatusCode::BAD_REQUEST,
            format!("Error: Font '{name}' not found."),
        ),
        other => (StatusCode::INTERNAL_SERVER_ERROR, format!("Error: {other}")),
    }
}

/// HTML preview page. Renders nothing until text is supplied; an unknown
/// font shows up as an inline error message in the banner area.
async fn index(State(state): State<AppStateArc>, Query(q): Query<BannerQuery>) -> Html<String> {
    let text = q.text.unwrap_or_default();
    let banner = if text.is_empty() {
        String::new()
    } else {
        request::preview(
            &state.catalog,
            &PreviewRequest {
                text: text.clone(),
                font: font_opt(&q.font).map(str::to_string),
                align: Alignment::from_name(&q.align),
                color: AnsiColor::from_name(&q.color),
            },
        )
    };
    Html(render_page(
        &state.catalog,
        &text,
        &q.font,
        &q.align,
        &q.color,
        &banner,
    ))
}

/// Plain-text banner, optionally wrapped in ANSI color escapes.
async fn ascii_plain(
    State(state): State<AppStateArc>,
    Query(q): Query<BannerQuery>,
) -> Result<Response, (StatusCode, String)> {
    let text = q.text.unwrap_or_else(|| "Hello".to_string());
    let banner = request::render_normalized(
        &state.catalog,
        &text,
        font_opt(&q.font),
        Alignment::from_name(&q.align),
    )
    .map_err(font_error)?;
    let body = color::embed(&banner, AnsiColor::from_name(&q.color));
    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response())
}

/// Banner download in the requested export format.
async fn export(
    State(state): State<AppStateArc>,
    Query(q): Query<BannerQuery>,
) -> Result<Response, (StatusCode, String)> {
    let export_request = ExportRequest {
        text: q.text.unwrap_or_else(|| "Hello".to_string()),
        font: font_opt(&q.font).map(str::to_string),
        align: Alignment::from_name(&q.align),
        options: ExportOptions {
            format: ExportFormat::from_name(&q.format),
            var_name: q.var.unwrap_or_else(|| DEFAULT_VAR_NAME.to_string()),
            embed_color: truthy(&q.embed_color),
            color: AnsiColor::from_name(&q.color),
        },
    };
    let payload = request::export(&state.catalog, &export_request).map_err(font_error)?;
    info!("export {} ({} bytes)", payload.filename, payload.bytes.len());
    Ok((
        [
            (header::CONTENT_TYPE, payload.media_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", payload.filename),
            ),
        ],
        payload.bytes,
    )
        .into_response())
}

const PAGE_STYLE: &str = r#"
  body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, monospace; background:#071026; color:#dbeafe; padding:20px; }
  .panel { max-width:1000px; margin:auto; }
  form { display:flex; gap:8px; flex-wrap:wrap; align-items:end; margin-bottom:12px; }
  label { font-size:0.85rem; color:#9fb0d9; display:block; }
  input, select { padding:8px; border-radius:6px; background:#001428; color:#dbeafe; border:1px solid #153047; }
  button { padding:8px 12px; border-radius:6px; border:none; cursor:pointer; background:#2b9a77; color:white; }
  pre.banner { background:#001528; padding:18px; border-radius:8px; overflow:auto; white-space:pre; font-family: Menlo, Monaco, "Courier New", monospace; font-size:13px; }
  .meta { color:#8fa6c8; font-size:0.9rem; margin-top:10px; }
"#;

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn selected(current: &str, option: &str) -> &'static str {
    if current == option {
        " selected"
    } else {
        ""
    }
}

/// Browsers don't render ANSI escapes; the preview maps color tokens to a
/// CSS palette instead.
fn css_color(color: Option<AnsiColor>) -> &'static str {
    match color {
        Some(AnsiColor::Red) => "#ff6b6b",
        Some(AnsiColor::Green) => "#7ee787",
        Some(AnsiColor::Yellow) => "#ffd86b",
        Some(AnsiColor::Blue) => "#7fb4ff",
        Some(AnsiColor::Magenta) => "#d48bff",
        Some(AnsiColor::Cyan) => "#7fffd4",
        Some(AnsiColor::White) => "#e6eef8",
        None => "#dbeafe",
    }
}

fn render_page(
    catalog: &FontCatalog,
    text: &str,
    font: &str,
    align: &str,
    color_name: &str,
    banner: &str,
) -> String {
    let mut font_options = String::from("<option value=\"\">(use default)</option>");
    for name in catalog.font_names() {
        let escaped = escape_html(&name);
        font_options.push_str(&format!(
            "<option value=\"{escaped}\"{}>{escaped}</option>",
            selected(font, &name)
        ));
    }

    let mut align_options = String::new();
    for mode in ["left", "center", "right"] {
        align_options.push_str(&format!(
            "<option value=\"{mode}\"{}>{mode}</option>",
            selected(align, mode)
        ));
    }

    let mut color_options = String::from("<option value=\"\">(none)</option>");
    for color in AnsiColor::ALL {
        color_options.push_str(&format!(
            "<option value=\"{0}\"{1}>{0}</option>",
            color.name(),
            selected(color_name, color.name())
        ));
    }

    let preview = if banner.is_empty() {
        String::from("<div class=\"meta\">Enter text and press Preview or Export.</div>")
    } else {
        format!(
            "<label>Preview</label>\n<pre class=\"banner\" style=\"color: {};\">{}</pre>",
            css_color(AnsiColor::from_name(color_name)),
            escape_html(banner)
        )
    };

    format!(
        r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<title>bannerkit</title>
<style>{PAGE_STYLE}</style>
</head>
<body>
  <div class="panel">
    <h1>bannerkit</h1>
    <form method="get" action="/">
      <div>
        <label for="text">Text</label>
        <input id="text" name="text" value="{text}" required>
      </div>
      <div>
        <label for="font">Font</label>
        <select id="font" name="font">{font_options}</select>
      </div>
      <div>
        <label for="align">Align</label>
        <select id="align" name="align">{align_options}</select>
      </div>
      <div>
        <label for="color">Color (preview)</label>
        <select id="color" name="color">{color_options}</select>
      </div>
      <div style="display:flex; gap:6px;">
        <button type="submit">Preview</button>
        <button formaction="/export" formmethod="get" type="submit">Export</button>
      </div>
    </form>
    {preview}
    <div class="meta">
      <strong>Usage:</strong> preview via query params or use <code>/export?format=python|raw|json</code> to download.
    </div>
  </div>
</body>
</html>
"#,
        text = escape_html(text),
    )
}
