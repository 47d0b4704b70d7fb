/*!
 * Common test utilities for the duospeak test suite
 */

use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Decoration span opener emitted by the highlighter
static SPAN_OPEN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<span class="[a-z-]+">"#).expect("Invalid span regex")
});

/// The dialogue script used by most workflow tests
pub const SAMPLE_SCRIPT: &str = "A: Xin chào\nB: Chào bạn\nC: ignored";

/// The document the sample script must produce with default voices
pub const SAMPLE_DOCUMENT: &str = "<speak xml:lang=\"vi-VN\">\n  <voice name=\"vi-VN-Voice1\">Xin chào</voice>\n  <voice name=\"vi-VN-Voice2\">Chào bạn</voice>\n</speak>";

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Remove the decoration spans from a fragment, leaving escaped markup text.
///
/// Every literal `<` of the fragment belongs to span markup (the document's
/// own brackets are entity-escaped), so the spans can be stripped textually.
pub fn strip_decoration_spans(fragment: &str) -> String {
    SPAN_OPEN_REGEX
        .replace_all(fragment, "")
        .replace("</span>", "")
}

/// Reverse entity escaping; inverse substitution order of the escape step
pub fn unescape_html(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// Round-trip a fragment back to the markup document it decorates
pub fn fragment_to_document(fragment: &str) -> String {
    unescape_html(&strip_decoration_spans(fragment))
}
