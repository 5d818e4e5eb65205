use bannerkit::export::{encode, DEFAULT_VAR_NAME};
use bannerkit::{AnsiColor, ExportFormat, ExportOptions};
use pretty_assertions::assert_eq;

fn options(format: ExportFormat) -> ExportOptions {
    ExportOptions {
        format,
        ..Default::default()
    }
}

#[test]
fn raw_payload_is_verbatim_utf8() {
    let payload = encode("AB\nCD", &options(ExportFormat::Raw));
    assert_eq!(payload.bytes, b"AB\nCD");
    assert_eq!(payload.filename, "banner.txt");
    assert_eq!(payload.media_type, "text/plain; charset=utf-8");
}

#[test]
fn raw_embeds_color_only_when_flag_and_token_present() {
    let mut opts = options(ExportFormat::Raw);
    opts.color = Some(AnsiColor::Green);
    let plain = encode("X", &opts);
    assert_eq!(plain.bytes, b"X");

    opts.embed_color = true;
    let colored = encode("X", &opts);
    assert_eq!(colored.bytes, b"\x1b[92mX\x1b[0m");

    opts.color = None;
    let flag_only = encode("X", &opts);
    assert_eq!(flag_only.bytes, b"X");
}

#[test]
fn raw_reencoding_is_byte_identical() {
    let mut opts = options(ExportFormat::Raw);
    opts.embed_color = true;
    opts.color = Some(AnsiColor::Blue);

    let first = encode("AA\nBB", &opts);
    let text = String::from_utf8(first.bytes.clone()).unwrap();
    let second = encode(&text, &opts);
    assert_eq!(first, second);
}

#[test]
fn json_document_lists_lines_and_color() {
    let mut opts = options(ExportFormat::Json);
    opts.embed_color = true;
    opts.color = Some(AnsiColor::Red);

    let payload = encode("AA\nBB", &opts);
    assert_eq!(payload.filename, "banner.json");
    assert_eq!(payload.media_type, "application/json; charset=utf-8");

    let doc: serde_json::Value = serde_json::from_slice(&payload.bytes).unwrap();
    assert_eq!(doc["text_lines"], serde_json::json!(["AA", "BB"]));
    assert_eq!(doc["color"], "red");
}

#[test]
fn json_omits_color_without_flag() {
    let mut opts = options(ExportFormat::Json);
    opts.color = Some(AnsiColor::Red);

    let payload = encode("AA\nBB", &opts);
    let doc: serde_json::Value = serde_json::from_slice(&payload.bytes).unwrap();
    assert!(doc.get("color").is_none());
}

#[test]
fn json_lines_rejoin_to_the_banner() {
    let banner = "  A  \n B B \nCCCCC";
    let payload = encode(banner, &options(ExportFormat::Json));
    let doc: serde_json::Value = serde_json::from_slice(&payload.bytes).unwrap();
    let rejoined = doc["text_lines"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect::<Vec<_>>()
        .join("\n");
    assert_eq!(rejoined, banner);
}

#[test]
fn python_module_round_trips_hostile_banner_text() {
    let banner = "say \"hi\"\\\n 'single' and\ttab";
    let mut opts = options(ExportFormat::Python);
    opts.var_name = "ART".to_string();

    let payload = encode(banner, &opts);
    assert_eq!(payload.filename, "banner.py");
    assert_eq!(payload.media_type, "text/x-source; charset=utf-8");

    let source = String::from_utf8(payload.bytes).unwrap();
    assert!(source.starts_with("# Generated ASCII banner (variable: ART)\n"));
    assert!(source.contains("if __name__ == '__main__':"));
    assert!(source.contains("print(ART)"));

    let assignment = source
        .lines()
        .find(|line| line.starts_with("ART = "))
        .unwrap();
    let literal = &assignment["ART = ".len()..];
    let decoded: String = serde_json::from_str(literal).unwrap();
    assert_eq!(decoded, banner);
}

#[test]
fn python_module_embeds_color_inside_the_literal() {
    let mut opts = options(ExportFormat::Python);
    opts.embed_color = true;
    opts.color = Some(AnsiColor::Magenta);

    let source = String::from_utf8(encode("ART", &opts).bytes).unwrap();
    let assignment = source
        .lines()
        .find(|line| line.starts_with("BANNER = "))
        .unwrap();
    let decoded: String = serde_json::from_str(&assignment["BANNER = ".len()..]).unwrap();
    assert_eq!(decoded, "\x1b[95mART\x1b[0m");
}

#[test]
fn illegal_variable_names_fall_back() {
    for bad in ["2cool", "has-dash", "class", "", "a b"] {
        let mut opts = options(ExportFormat::Python);
        opts.var_name = bad.to_string();
        let source = String::from_utf8(encode("X", &opts).bytes).unwrap();
        assert!(
            source.contains(&format!("{DEFAULT_VAR_NAME} = ")),
            "var {bad:?} should fall back to {DEFAULT_VAR_NAME}"
        );
        assert!(source.contains(&format!("print({DEFAULT_VAR_NAME})")));
    }
}

#[test]
fn legal_variable_names_are_kept_verbatim() {
    let mut opts = options(ExportFormat::Python);
    opts.var_name = "_my_banner2".to_string();
    let source = String::from_utf8(encode("X", &opts).bytes).unwrap();
    assert!(source.contains("_my_banner2 = "));
}

#[test]
fn unknown_format_names_fall_back_to_python() {
    assert_eq!(ExportFormat::from_name("raw"), ExportFormat::Raw);
    assert_eq!(ExportFormat::from_name("json"), ExportFormat::Json);
    assert_eq!(ExportFormat::from_name("python"), ExportFormat::Python);
    assert_eq!(ExportFormat::from_name("yaml"), ExportFormat::Python);
    assert_eq!(ExportFormat::from_name(""), ExportFormat::Python);
}
