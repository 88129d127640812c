//! Integration tests for the failure paths that never reach the rendering
//! engine. Input validation runs before pdfium is bound, so these tests
//! need no native library and run everywhere.

use pdf2jpg::{convert, ConversionConfig, Pdf2JpgError};

#[test]
fn missing_input_reports_file_not_found_and_writes_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let out_dir = tmp.path().join("pages");

    let err = convert(
        tmp.path().join("no-such.pdf"),
        &out_dir,
        &ConversionConfig::default(),
    )
    .unwrap_err();

    assert!(matches!(err, Pdf2JpgError::FileNotFound { .. }));
    assert!(
        !out_dir.exists(),
        "output directory must not be created for an invalid input"
    );
}

#[test]
fn non_pdf_input_reports_not_a_pdf_and_writes_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let bogus = tmp.path().join("image.jpg");
    std::fs::write(&bogus, b"\xFF\xD8\xFF\xE0 definitely not a pdf").unwrap();
    let out_dir = tmp.path().join("pages");

    let err = convert(&bogus, &out_dir, &ConversionConfig::default()).unwrap_err();

    match err {
        Pdf2JpgError::NotAPdf { path, magic } => {
            assert_eq!(path, bogus);
            assert_eq!(magic[0], 0xFF);
        }
        other => panic!("expected NotAPdf, got {other:?}"),
    }
    assert!(!out_dir.exists());
}

#[test]
fn error_messages_are_actionable() {
    let tmp = tempfile::tempdir().unwrap();

    let err = convert(
        tmp.path().join("gone.pdf"),
        tmp.path().join("pages"),
        &ConversionConfig::default(),
    )
    .unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains("gone.pdf"));
    assert!(msg.contains("Check the path"));
}
