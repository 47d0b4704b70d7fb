/*!
 * Syntax highlighting for generated markup.
 *
 * The highlighter tokenizes a markup document, runs a fixed pipeline of
 * named decoration stages over the token list (tag names, attributes,
 * brackets), and renders an HTML-escaped fragment with presentational
 * wrapper spans. The fragment carries no information of its own: stripping
 * the spans and un-escaping the entities reproduces the input document
 * byte-for-byte.
 */

pub mod stages;
pub mod token;

// Re-export types used externally
pub use stages::{AttributeStage, BracketStage, DecorationStage, TagNameStage};
pub use token::{SpanClass, Token, TokenKind, tokenize};

use log::debug;

/// Fixed decoration pipeline over a markup token list
pub struct HighlightPipeline {
    stages: Vec<Box<dyn DecorationStage>>,
}

impl HighlightPipeline {
    /// Standard pipeline: tag names, attributes, brackets
    pub fn standard() -> Self {
        HighlightPipeline {
            stages: vec![
                Box::new(TagNameStage),
                Box::new(AttributeStage),
                Box::new(BracketStage),
            ],
        }
    }

    /// Run every stage over the token list in order
    pub fn run(&self, mut tokens: Vec<Token>) -> Vec<Token> {
        for stage in &self.stages {
            tokens = stage.apply(tokens);
            debug!("Applied highlight stage '{}'", stage.name());
        }
        tokens
    }
}

/// Escape the three HTML-sensitive characters.
///
/// Ampersand is escaped first so the entities produced for the brackets are
/// not themselves re-escaped.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render decorated tokens to an HTML fragment
fn render(tokens: &[Token]) -> String {
    let mut out = String::new();

    for token in tokens {
        match token.class {
            Some(class) => {
                out.push_str("<span class=\"");
                out.push_str(class.css_class());
                out.push_str("\">");
                out.push_str(&escape_html(&token.text));
                out.push_str("</span>");
            }
            None => out.push_str(&escape_html(&token.text)),
        }
    }

    out
}

/// Highlight a markup document string into an HTML-safe fragment.
///
/// Total over any input; a string with no recognized tags renders as
/// escaped text with no decoration spans. The input is never mutated.
pub fn highlight(markup: &str) -> String {
    let tokens = HighlightPipeline::standard().run(tokenize(markup));
    render(&tokens)
}

/// Stylesheet for the decoration classes, used by the standalone page
const PAGE_STYLE: &str = "\
body { background: #1e1e1e; color: #d4d4d4; font-family: monospace; }
pre.ssml-output { padding: 1em; white-space: pre-wrap; }
.tag-name { color: #569cd6; }
.attr-name { color: #9cdcfe; }
.attr-value { color: #ce9178; }
.bracket { color: #808080; }
";

/// Wrap a highlighted fragment in a standalone HTML page with the
/// stylesheet for the decoration classes.
pub fn wrap_standalone_page(fragment: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>SSML preview</title>\n<style>\n{}</style>\n</head>\n<body>\n<pre class=\"ssml-output\">{}</pre>\n</body>\n</html>\n",
        PAGE_STYLE, fragment
    )
}
