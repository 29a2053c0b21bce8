use assert_cmd::Command;
use image::{Rgba, RgbaImage};
use std::fs;
use tempfile::TempDir;

fn textmap() -> Command {
    Command::cargo_bin("textmap").unwrap()
}

#[test]
fn test_count_emits_running_totals_per_file() {
    let temp = TempDir::new().unwrap();
    let docs = temp.path().join("docs");
    fs::create_dir_all(&docs).unwrap();
    fs::write(docs.join("readme.md"), "Hello world. Foo bar.").unwrap();

    let output = textmap().arg("count").arg(temp.path()).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(
        "docs/readme.md line_count 3 character_count 19 \
         character_without_spaces_count 17 word_count 3"
    ));
    // Each progress line is followed by a blank line
    assert!(stdout.contains("word_count 3\n\n"));
}

#[test]
fn test_count_progress_shows_running_totals() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.md"), "one.").unwrap();
    fs::write(temp.path().join("b.md"), "two.").unwrap();

    let output = textmap().arg("count").arg(temp.path()).output().unwrap();
    assert!(output.status.success());

    // Each file contributes 2 segments; whichever file is visited second
    // must report the accumulated total, not its own counts
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("line_count 2 "));
    assert!(stdout.contains("line_count 4 "));
}

#[test]
fn test_count_json_is_machine_readable() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("doc.md"), "Hello world. Foo bar.").unwrap();

    let output = textmap()
        .arg("count")
        .arg(temp.path())
        .args(["--quiet", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON");
    assert_eq!(value["total"]["line_count"], 3);
    assert_eq!(value["total"]["character_count"], 19);
    assert_eq!(value["total"]["character_without_spaces_count"], 17);
    assert_eq!(value["total"]["word_count"], 3);
    assert_eq!(value["files"].as_array().unwrap().len(), 1);
}

#[test]
fn test_count_missing_root_reports_zero_totals() {
    let temp = TempDir::new().unwrap();

    let output = textmap()
        .arg("count")
        .arg(temp.path().join("does-not-exist"))
        .args(["--quiet", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["total"]["line_count"], 0);
    assert!(value["files"].as_array().unwrap().is_empty());
}

#[test]
fn test_count_writes_report_to_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("doc.md"), "Hello.").unwrap();
    let report_path = temp.path().join("report.json");

    textmap()
        .arg("count")
        .arg(temp.path())
        .args(["--quiet", "--format", "json", "--output"])
        .arg(&report_path)
        .assert()
        .success();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(value["total"]["line_count"], 2);
}

#[test]
fn test_mask_writes_masked_image() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("input.png");
    let output_path = temp.path().join("masked.png");

    let mut img = RgbaImage::new(2, 2);
    img.put_pixel(0, 0, Rgba([255, 255, 255, 255]));
    img.put_pixel(1, 0, Rgba([255, 0, 0, 255]));
    img.put_pixel(0, 1, Rgba([255, 255, 255, 255]));
    img.put_pixel(1, 1, Rgba([0, 0, 0, 255]));
    img.save(&input).unwrap();

    textmap()
        .arg("mask")
        .arg(&input)
        .arg("--output")
        .arg(&output_path)
        .assert()
        .success();

    let masked = image::open(&output_path).unwrap().to_rgba8();
    assert_eq!(masked.dimensions(), (2, 2));
    assert_eq!(*masked.get_pixel(0, 0), Rgba([0, 0, 0, 0]));
    assert_eq!(*masked.get_pixel(1, 0), Rgba([0, 0, 0, 255]));
    assert_eq!(*masked.get_pixel(0, 1), Rgba([0, 0, 0, 0]));
    assert_eq!(*masked.get_pixel(1, 1), Rgba([0, 0, 0, 255]));
}

#[test]
fn test_mask_default_output_adds_bw_suffix() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("logo.png");

    let img = RgbaImage::new(1, 1);
    img.save(&input).unwrap();

    textmap().arg("mask").arg(&input).assert().success();

    assert!(temp.path().join("logo_bw.png").exists());
}

#[test]
fn test_mask_missing_input_fails() {
    let temp = TempDir::new().unwrap();

    textmap()
        .arg("mask")
        .arg(temp.path().join("nope.png"))
        .assert()
        .failure();
}
