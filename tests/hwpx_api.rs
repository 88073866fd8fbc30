//! Integration test: HWPX package extraction and rewriting

use hwp_text_rs::{hwpx, Package};
use pretty_assertions::assert_eq;
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;
use zip::write::{FileOptions, ZipWriter};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn utf16le_with_bom(text: &str) -> Vec<u8> {
    let mut out = vec![0xFF, 0xFE];
    for unit in text.encode_utf16() {
        out.extend_from_slice(&unit.to_le_bytes());
    }
    out
}

fn build_package(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut buf = Vec::new();
    let mut zip = ZipWriter::new(Cursor::new(&mut buf));
    let options: FileOptions<()> = FileOptions::default();
    for (name, data) in entries {
        zip.start_file(*name, options).unwrap();
        zip.write_all(data).unwrap();
    }
    zip.finish().unwrap();
    buf
}

const SECTION0: &[u8] = br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><hs:sec xmlns:hs="http://www.hancom.co.kr/hwpml/2011/section"><hp:p><hp:run><hp:t>Hello HWPX</hp:t></hp:run></hp:p></hs:sec>"#;

const SECTION1: &[u8] = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><hs:sec xmlns:hs="http://www.hancom.co.kr/hwpml/2011/section"><hp:p><hp:run><hp:t>두 번째 문단</hp:t></hp:run></hp:p></hs:sec>"#.as_bytes();

const PNG_STUB: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

fn sample_package() -> Vec<u8> {
    build_package(&[
        ("mimetype", b"application/hwp+zip"),
        ("version.xml", br#"<?xml version="1.0"?><hv:HCFVersion/>"#),
        ("Contents/content.hpf", br#"<?xml version="1.0"?><opf:package/>"#),
        ("Contents/section0.xml", SECTION0),
        ("Contents/section1.xml", SECTION1),
        ("BinData/image1.png", PNG_STUB),
        (
            "Preview/PrvText.txt",
            &utf16le_with_bom("Hello HWPX\n두 번째 문단"),
        ),
    ])
}

#[test]
fn test_extract_text() {
    init_logger();
    let bytes = sample_package();
    let text = hwpx::extract_text_from_bytes(&bytes).unwrap();
    assert_eq!(text, "Hello HWPX\n두 번째 문단");
}

#[test]
fn test_extract_only_contents_xml_entries() {
    init_logger();
    // version.xml is outside Contents/, content.hpf is not .xml; neither
    // may contribute text
    let bytes = build_package(&[
        ("version.xml", br#"<?xml version="1.0"?><v>9.9</v>"#),
        ("Contents/content.hpf", br#"<?xml version="1.0"?><t>meta</t>"#),
        ("Contents/section0.xml", SECTION0),
    ]);

    let text = hwpx::extract_text_from_bytes(&bytes).unwrap();
    assert_eq!(text, "Hello HWPX");
}

#[test]
fn test_extract_empty_package() {
    init_logger();
    let bytes = build_package(&[("mimetype", b"application/hwp+zip")]);
    assert_eq!(hwpx::extract_text_from_bytes(&bytes).unwrap(), "");
}

#[test]
fn test_replace_text_rewrites_xml_and_preview() {
    init_logger();
    let input = NamedTempFile::new().unwrap();
    std::fs::write(input.path(), sample_package()).unwrap();
    let output = NamedTempFile::new().unwrap();

    hwpx::replace_text(input.path(), output.path(), "Hello", "Goodbye").unwrap();

    let text = hwpx::extract_text(output.path()).unwrap();
    assert_eq!(text, "Goodbye HWPX\n두 번째 문단");

    let pkg = Package::open(output.path()).unwrap();
    let preview = pkg.entry("Preview/PrvText.txt").unwrap();
    assert_eq!(
        preview.data(),
        utf16le_with_bom("Goodbye HWPX\n두 번째 문단").as_slice()
    );
}

#[test]
fn test_replace_text_copies_other_entries_byte_for_byte() {
    init_logger();
    let input = NamedTempFile::new().unwrap();
    std::fs::write(input.path(), sample_package()).unwrap();
    let output = NamedTempFile::new().unwrap();

    hwpx::replace_text(input.path(), output.path(), "Hello", "Goodbye").unwrap();

    let pkg = Package::open(output.path()).unwrap();
    assert_eq!(pkg.entry("mimetype").unwrap().data(), b"application/hwp+zip");
    assert_eq!(pkg.entry("BinData/image1.png").unwrap().data(), PNG_STUB);
    assert_eq!(
        pkg.entry("Contents/content.hpf").unwrap().data(),
        br#"<?xml version="1.0"?><opf:package/>"#
    );
}

#[test]
fn test_replace_text_preserves_entry_order() {
    init_logger();
    let input = NamedTempFile::new().unwrap();
    std::fs::write(input.path(), sample_package()).unwrap();
    let output = NamedTempFile::new().unwrap();

    hwpx::replace_text(input.path(), output.path(), "Hello", "Goodbye").unwrap();

    let before = Package::open(input.path()).unwrap();
    let after = Package::open(output.path()).unwrap();
    let names = |pkg: &Package| -> Vec<String> {
        pkg.entries().map(|e| e.name().to_string()).collect()
    };
    assert_eq!(names(&before), names(&after));
}

#[test]
fn test_replace_text_without_match_keeps_text() {
    init_logger();
    let input = NamedTempFile::new().unwrap();
    std::fs::write(input.path(), sample_package()).unwrap();
    let output = NamedTempFile::new().unwrap();

    hwpx::replace_text(input.path(), output.path(), "absent phrase", "x").unwrap();

    assert_eq!(
        hwpx::extract_text(output.path()).unwrap(),
        "Hello HWPX\n두 번째 문단"
    );
}

#[test]
fn test_replace_korean_text() {
    init_logger();
    let input = NamedTempFile::new().unwrap();
    std::fs::write(input.path(), sample_package()).unwrap();
    let output = NamedTempFile::new().unwrap();

    hwpx::replace_text(input.path(), output.path(), "두 번째", "마지막").unwrap();

    assert_eq!(
        hwpx::extract_text(output.path()).unwrap(),
        "Hello HWPX\n마지막 문단"
    );
}

#[test]
fn test_extract_not_a_zip_fails() {
    init_logger();
    let err = hwpx::extract_text_from_bytes(b"definitely not a zip archive");
    assert!(err.is_err());
}
