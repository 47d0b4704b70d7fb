/*!
 * End-to-end generation workflow tests
 */

use duospeak::app_config::Config;
use duospeak::app_controller::Controller;
use duospeak::clipboard::MockClipboard;

use crate::common;

/// Test the full generate path: script in, contract document and
/// round-trippable fragment out
#[test]
fn test_generate_withSampleScript_shouldProduceDocumentAndFragment() {
    let mut controller = Controller::new_for_test().unwrap();

    let output = controller.generate(common::SAMPLE_SCRIPT);

    assert_eq!(output.document, common::SAMPLE_DOCUMENT);
    assert_eq!(common::fragment_to_document(&output.fragment), output.document);
    assert_eq!(controller.last_document(), Some(common::SAMPLE_DOCUMENT));
}

/// Test that each generation replaces the retained document wholesale
#[test]
fn test_generate_withSecondScript_shouldReplaceRetainedDocument() {
    let mut controller = Controller::new_for_test().unwrap();
    controller.generate(common::SAMPLE_SCRIPT);

    controller.generate("A: only line");

    let retained = controller.last_document().unwrap();
    assert!(retained.contains("only line"));
    assert!(!retained.contains("Xin chào"));
}

/// Test generation honors a customized configuration
#[test]
fn test_generate_withCustomConfig_shouldUseConfiguredVoicesAndLanguage() {
    let mut config = Config::default();
    config.language = "en-US".to_string();
    config.voices.voice_a = "en-US-Guy".to_string();
    config.voices.voice_b = "en-US-Jenny".to_string();
    let mut controller = Controller::with_config(config).unwrap();

    let output = controller.generate("A: hello\nB: hi");

    assert_eq!(
        output.document,
        "<speak xml:lang=\"en-US\">\n  <voice name=\"en-US-Guy\">hello</voice>\n  <voice name=\"en-US-Jenny\">hi</voice>\n</speak>"
    );
}

/// Test an invalid configuration is rejected at controller construction
#[test]
fn test_with_config_withInvalidConfig_shouldFail() {
    let mut config = Config::default();
    config.voices.voice_a = String::new();

    assert!(Controller::with_config(config).is_err());
}

/// Test the file workflow writes fragment and document next to the script
#[test]
fn test_run_file_withScript_shouldWriteSiblingOutputs() {
    let temp_dir = common::create_temp_dir().unwrap();
    let dir_path = temp_dir.path().to_path_buf();
    let script = common::create_test_file(&dir_path, "chat.txt", common::SAMPLE_SCRIPT).unwrap();
    let mut controller = Controller::new_for_test().unwrap();

    let output = controller.run_file(&script, false).unwrap();

    let fragment_path = dir_path.join("chat.ssml.html");
    let document_path = dir_path.join("chat.ssml.xml");
    assert!(fragment_path.exists());
    assert!(document_path.exists());
    assert_eq!(
        std::fs::read_to_string(&document_path).unwrap(),
        common::SAMPLE_DOCUMENT
    );
    assert_eq!(
        std::fs::read_to_string(&fragment_path).unwrap(),
        output.fragment
    );
}

/// Test existing outputs are not overwritten without force
#[test]
fn test_run_file_withExistingOutput_shouldSkipWithoutForce() {
    let temp_dir = common::create_temp_dir().unwrap();
    let dir_path = temp_dir.path().to_path_buf();
    let script = common::create_test_file(&dir_path, "chat.txt", common::SAMPLE_SCRIPT).unwrap();
    common::create_test_file(&dir_path, "chat.ssml.xml", "old content").unwrap();
    let mut controller = Controller::new_for_test().unwrap();

    controller.run_file(&script, false).unwrap();

    assert_eq!(
        std::fs::read_to_string(dir_path.join("chat.ssml.xml")).unwrap(),
        "old content"
    );

    // With force, the stale output is replaced
    controller.run_file(&script, true).unwrap();
    assert_eq!(
        std::fs::read_to_string(dir_path.join("chat.ssml.xml")).unwrap(),
        common::SAMPLE_DOCUMENT
    );
}

/// Test the folder workflow processes every script it finds
#[test]
fn test_run_folder_withSeveralScripts_shouldProcessAll() {
    let temp_dir = common::create_temp_dir().unwrap();
    let dir_path = temp_dir.path().to_path_buf();
    common::create_test_file(&dir_path, "one.txt", "A: one").unwrap();
    common::create_test_file(&dir_path, "two.txt", "B: two").unwrap();
    common::create_test_file(&dir_path, "notes.md", "not a script").unwrap();
    let mut controller = Controller::new_for_test().unwrap();

    let processed = controller.run_folder(&dir_path, false).unwrap();

    assert_eq!(processed, 2);
    assert!(dir_path.join("one.ssml.html").exists());
    assert!(dir_path.join("two.ssml.xml").exists());
    assert!(!dir_path.join("notes.ssml.html").exists());
}

/// Test the folder workflow on an empty directory
#[test]
fn test_run_folder_withNoScripts_shouldProcessNothing() {
    let temp_dir = common::create_temp_dir().unwrap();
    let mut controller = Controller::new_for_test().unwrap();

    let processed = controller.run_folder(temp_dir.path(), false).unwrap();

    assert_eq!(processed, 0);
}

/// Test the standalone page option is honored by the file workflow
#[test]
fn test_run_file_withStandalonePage_shouldWrapFragment() {
    let temp_dir = common::create_temp_dir().unwrap();
    let dir_path = temp_dir.path().to_path_buf();
    let script = common::create_test_file(&dir_path, "chat.txt", common::SAMPLE_SCRIPT).unwrap();
    let mut config = Config::default();
    config.output.standalone_page = true;
    let mut controller = Controller::with_config(config).unwrap();

    controller.run_file(&script, false).unwrap();

    let page = std::fs::read_to_string(dir_path.join("chat.ssml.html")).unwrap();
    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains("<span class=\"tag-name\">speak</span>"));
}

/// Test generate-then-copy as a user would trigger it
#[tokio::test]
async fn test_generate_then_copy_shouldPutDocumentOnClipboard() {
    let mut controller = Controller::new_for_test().unwrap();
    controller.generate(common::SAMPLE_SCRIPT);
    let clipboard = MockClipboard::working();

    let copied = controller.copy_to_clipboard(&clipboard).await;

    assert!(copied);
    assert_eq!(clipboard.writes(), vec![common::SAMPLE_DOCUMENT.to_string()]);
}
