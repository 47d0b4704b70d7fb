/*!
 * Decoration stages for the markup highlighter.
 *
 * Each stage consumes and produces the same token-list representation,
 * attaching decoration classes without touching token texts. Because a
 * stage classifies tokens instead of rewriting the string, no stage can
 * mistake another stage's output for markup, which the chained-substitution
 * approach this replaces was sensitive to.
 */

use super::token::{SpanClass, Token, TokenKind};

/// Attribute names eligible for decoration
const RECOGNIZED_ATTRIBUTES: [&str; 2] = ["xml:lang", "name"];

/// A named decoration stage over the token list
pub trait DecorationStage {
    /// Stage name used in debug logging
    fn name(&self) -> &'static str;

    /// Attach decoration classes, preserving token count, kinds, and texts
    fn apply(&self, tokens: Vec<Token>) -> Vec<Token>;
}

/// Marks the identifier immediately following `<` or `</` as a tag name.
///
/// The closing slash stays outside the decorated token.
pub struct TagNameStage;

impl DecorationStage for TagNameStage {
    fn name(&self) -> &'static str {
        "tag-names"
    }

    fn apply(&self, mut tokens: Vec<Token>) -> Vec<Token> {
        let mut expect_tag_name = false;

        for token in tokens.iter_mut() {
            match token.kind {
                TokenKind::OpenBracket => expect_tag_name = true,
                TokenKind::Slash if expect_tag_name => {}
                TokenKind::Ident if expect_tag_name => {
                    if token.class.is_none() {
                        token.class = Some(SpanClass::TagName);
                    }
                    expect_tag_name = false;
                }
                _ => expect_tag_name = false,
            }
        }

        tokens
    }
}

/// Marks recognized attribute names and their quoted values.
///
/// Only `xml:lang` and `name` are recognized; any other attribute name is
/// left undecorated, as is its value. Whitespace, `=`, and the quote
/// characters stay untouched either way.
pub struct AttributeStage;

impl DecorationStage for AttributeStage {
    fn name(&self) -> &'static str {
        "attributes"
    }

    fn apply(&self, mut tokens: Vec<Token>) -> Vec<Token> {
        let mut in_tag = false;
        let mut seen_tag_name = false;
        let mut decorate_value = false;

        for token in tokens.iter_mut() {
            match token.kind {
                TokenKind::OpenBracket => {
                    in_tag = true;
                    seen_tag_name = false;
                    decorate_value = false;
                }
                TokenKind::CloseBracket => {
                    in_tag = false;
                    decorate_value = false;
                }
                TokenKind::Ident if in_tag => {
                    if !seen_tag_name {
                        // First identifier in the tag is the tag name
                        seen_tag_name = true;
                    } else if RECOGNIZED_ATTRIBUTES.contains(&token.text.as_str()) {
                        if token.class.is_none() {
                            token.class = Some(SpanClass::AttrName);
                        }
                        decorate_value = true;
                    } else {
                        decorate_value = false;
                    }
                }
                TokenKind::Value if in_tag && decorate_value => {
                    if token.class.is_none() {
                        token.class = Some(SpanClass::AttrValue);
                    }
                    decorate_value = false;
                }
                _ => {}
            }
        }

        tokens
    }
}

/// Marks every angle bracket, structural or stray
pub struct BracketStage;

impl DecorationStage for BracketStage {
    fn name(&self) -> &'static str {
        "brackets"
    }

    fn apply(&self, mut tokens: Vec<Token>) -> Vec<Token> {
        for token in tokens.iter_mut() {
            if matches!(token.kind, TokenKind::OpenBracket | TokenKind::CloseBracket)
                && token.class.is_none()
            {
                token.class = Some(SpanClass::Bracket);
            }
        }

        tokens
    }
}
