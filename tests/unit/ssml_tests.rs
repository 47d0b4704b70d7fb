/*!
 * Tests for speech markup generation
 */

use duospeak::dialogue::{DialogueLine, Speaker, parse_dialogue};
use duospeak::ssml::{SsmlDocument, VoiceBinding};

use crate::common;

/// Test the documented example end to end
#[test]
fn test_document_withSampleScript_shouldMatchContractExactly() {
    let lines = parse_dialogue(common::SAMPLE_SCRIPT);
    let voices = VoiceBinding::new("vi-VN-Voice1", "vi-VN-Voice2");

    let document = SsmlDocument::from_dialogue(&lines, &voices, "vi-VN");

    assert_eq!(document.to_string(), common::SAMPLE_DOCUMENT);
}

/// Test that each element carries exactly its speaker's bound identifier
#[test]
fn test_from_dialogue_withManyLines_shouldBindVoicesPerSpeaker() {
    let script = "A: 1\nB: 2\nA: 3\nB: 4\nB: 5";
    let lines = parse_dialogue(script);
    let voices = VoiceBinding::new("voice-of-a", "voice-of-b");

    let document = SsmlDocument::from_dialogue(&lines, &voices, "en");

    for (line, element) in lines.iter().zip(document.elements.iter()) {
        let expected = match line.speaker {
            Speaker::A => "voice-of-a",
            Speaker::B => "voice-of-b",
        };
        assert_eq!(element.voice, expected);
        assert_ne!(
            element.voice,
            match line.speaker {
                Speaker::A => "voice-of-b",
                Speaker::B => "voice-of-a",
            }
        );
    }
}

/// Test that skipped lines produce no elements
#[test]
fn test_from_dialogue_withSkippedLines_shouldOmitThem() {
    let lines = parse_dialogue("A: kept\nX: dropped\n\nB: kept too");
    let voices = VoiceBinding::new("va", "vb");

    let document = SsmlDocument::from_dialogue(&lines, &voices, "en");

    assert_eq!(document.elements.len(), 2);
    assert!(!document.to_string().contains("dropped"));
}

/// Test an empty dialogue
#[test]
fn test_document_withNoElements_shouldRenderBareRoot() {
    let document = SsmlDocument::new("vi-VN");

    assert_eq!(document.to_string(), "<speak xml:lang=\"vi-VN\">\n</speak>");
}

/// Test that spoken text is inserted without escaping
#[test]
fn test_document_withSensitiveText_shouldStayRaw() {
    let lines = vec![DialogueLine::new(Speaker::A, "ham & cheese < 5 > 2")];
    let voices = VoiceBinding::new("va", "vb");

    let document = SsmlDocument::from_dialogue(&lines, &voices, "en");

    assert!(
        document
            .to_string()
            .contains("<voice name=\"va\">ham & cheese < 5 > 2</voice>")
    );
}

/// Test voice lookup by speaker
#[test]
fn test_voice_binding_voiceFor_shouldReturnBoundIdentifier() {
    let voices = VoiceBinding::new("first", "second");

    assert_eq!(voices.voice_for(Speaker::A), "first");
    assert_eq!(voices.voice_for(Speaker::B), "second");
}
