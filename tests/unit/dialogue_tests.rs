/*!
 * Tests for dialogue script parsing
 */

use duospeak::dialogue::{DialogueLine, Speaker, parse_dialogue};

/// Test speaker classification of marked lines
#[test]
fn test_parse_dialogue_withBothMarkers_shouldRouteToEachSpeaker() {
    let script = "A: first line\nB: second line\nA: third line";

    let lines = parse_dialogue(script);

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], DialogueLine::new(Speaker::A, "first line"));
    assert_eq!(lines[1], DialogueLine::new(Speaker::B, "second line"));
    assert_eq!(lines[2], DialogueLine::new(Speaker::A, "third line"));
}

/// Test that original line order is preserved
#[test]
fn test_parse_dialogue_withInterleavedSpeakers_shouldPreserveOrder() {
    let script = "B: one\nA: two\nB: three";

    let lines = parse_dialogue(script);

    let speakers: Vec<Speaker> = lines.iter().map(|l| l.speaker).collect();
    assert_eq!(speakers, vec![Speaker::B, Speaker::A, Speaker::B]);
}

/// Test the permissive skip policy for unrecognized prefixes
#[test]
fn test_parse_dialogue_withUnrecognizedPrefixes_shouldSkipSilently() {
    let script = "C: other speaker\nNarrator: aside\nA: kept\nnot a marker at all";

    let lines = parse_dialogue(script);

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].text, "kept");
}

/// Test blank and whitespace-only line handling
#[test]
fn test_parse_dialogue_withBlankAndWhitespaceLines_shouldDropThem() {
    let script = "A: before\n\n   \n\t\nB: after";

    let lines = parse_dialogue(script);

    assert_eq!(lines.len(), 2);
}

/// Test whitespace trimming of the spoken text
#[test]
fn test_parse_dialogue_withPaddedText_shouldTrimIt() {
    let lines = parse_dialogue("A:    padded text   ");

    assert_eq!(lines[0].text, "padded text");
}

/// Test that the marker must start the line
#[test]
fn test_parse_dialogue_withLeadingWhitespaceBeforeMarker_shouldSkip() {
    let lines = parse_dialogue(" A: not at line start");

    assert!(lines.is_empty());
}

/// Test lowercase markers are not recognized
#[test]
fn test_parse_dialogue_withLowercaseMarker_shouldSkip() {
    let lines = parse_dialogue("a: lowercase\nb: lowercase");

    assert!(lines.is_empty());
}

/// Test a marker with no text after it
#[test]
fn test_parse_dialogue_withBareMarker_shouldKeepEmptyUtterance() {
    let lines = parse_dialogue("A:");

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0], DialogueLine::new(Speaker::A, ""));
}

/// Test an empty script
#[test]
fn test_parse_dialogue_withEmptyScript_shouldReturnNoLines() {
    assert!(parse_dialogue("").is_empty());
}
