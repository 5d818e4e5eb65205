use assert_cmd::Command;
use predicates::prelude::*;

fn bannerkit() -> Command {
    Command::cargo_bin("bannerkit").expect("binary builds")
}

#[test]
fn render_writes_banner_to_stdout() {
    bannerkit()
        .args(["render", "--text", "HI"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#"));
}

#[test]
fn render_unknown_font_fails_naming_it() {
    bannerkit()
        .args(["render", "--text", "HI", "--font", "doom"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("doom"));
}

#[test]
fn render_with_color_wraps_in_escapes() {
    bannerkit()
        .args(["render", "--text", "A", "--color", "red"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("\x1b[91m"));
}

#[test]
fn render_with_unknown_color_stays_plain() {
    bannerkit()
        .args(["render", "--text", "A", "--color", "orange"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn fonts_lists_the_builtin_default() {
    bannerkit()
        .args(["fonts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("block (default)"));
}

#[test]
fn export_writes_python_module() {
    let dir = std::env::temp_dir().join(format!("bannerkit-cli-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let out = dir.join("banner.py");

    bannerkit()
        .args([
            "export",
            "--text",
            "HI",
            "--var",
            "ART",
            "--output",
            out.to_str().unwrap(),
        ])
        .assert()
        .success();

    let source = std::fs::read_to_string(&out).unwrap();
    assert!(source.contains("ART = "));
    assert!(source.contains("print(ART)"));

    std::fs::remove_dir_all(&dir).unwrap();
}
