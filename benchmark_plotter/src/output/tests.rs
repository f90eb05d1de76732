//!
//! The output writing tests.
//!

use std::str::FromStr;

use super::format::Format;
use super::Output;

#[test]
fn ok_write_creates_directory() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let path = directory.path().join("docs").join("report.md");

    Output::from("# Title\n".to_owned())
        .write_to_file(path.as_path())
        .expect("Always valid");

    assert_eq!(
        std::fs::read_to_string(path).expect("Read"),
        "# Title\n".to_owned()
    );
}

#[test]
fn ok_write_overwrites() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let path = directory.path().join("image.png");
    std::fs::write(path.as_path(), vec![0u8; 64]).expect("Write");

    Output::from(vec![1u8, 2, 3])
        .write_to_file(path.as_path())
        .expect("Always valid");

    assert_eq!(std::fs::read(path).expect("Read"), vec![1u8, 2, 3]);
}

#[test]
fn ok_format_parsing() {
    assert_eq!(Format::from_str("PNG").expect("Always valid"), Format::Png);
    assert_eq!(Format::from_str("svg").expect("Always valid"), Format::Svg);
    assert_eq!(Format::default().extension(), "png");
}

#[test]
fn error_format_unknown() {
    let error = Format::from_str("gif").expect_err("Always fails");
    assert!(error.to_string().contains("png, svg"));
}
