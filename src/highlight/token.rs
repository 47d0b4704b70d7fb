/*!
 * Token representation and lexer for markup highlighting.
 *
 * The lexer is total: any input string is split into a token list whose
 * texts concatenate back to the input byte-for-byte. Decoration stages only
 * ever attach classes to tokens; they never change token texts, so the
 * round-trip guarantee of the highlighter rests on this invariant.
 */

/// Decoration classes attached by the highlight stages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanClass {
    /// Element name after an opening `<` or `</`
    TagName,
    /// Recognized attribute name
    AttrName,
    /// Quoted attribute value content
    AttrValue,
    /// Angle bracket
    Bracket,
}

impl SpanClass {
    /// CSS class name emitted on the wrapper span
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::TagName => "tag-name",
            Self::AttrName => "attr-name",
            Self::AttrValue => "attr-value",
            Self::Bracket => "bracket",
        }
    }
}

/// Lexical role of a token within the markup string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `<`
    OpenBracket,
    /// `>`
    CloseBracket,
    /// `/` inside a tag
    Slash,
    /// Tag or attribute name inside a tag
    Ident,
    /// `=` inside a tag
    Equals,
    /// `"` inside a tag
    Quote,
    /// Content of a quoted attribute value
    Value,
    /// Whitespace inside a tag
    Whitespace,
    /// Character data outside tags, or an unexpected character inside one
    Text,
}

/// One lexical token of a markup string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Lexical role
    pub kind: TokenKind,
    /// Exact source text of the token
    pub text: String,
    /// Decoration assigned by a pipeline stage, if any
    pub class: Option<SpanClass>,
}

impl Token {
    /// Create an undecorated token
    pub fn new(kind: TokenKind, text: &str) -> Self {
        Token {
            kind,
            text: text.to_string(),
            class: None,
        }
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, ':' | '_' | '-' | '.')
}

/// Split a markup string into tokens.
///
/// Angle brackets are tokenized wherever they appear, including inside
/// character data, so every literal bracket can later carry a bracket
/// decoration. An unterminated tag or quoted value lexes to the end of the
/// input without error.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut chars = input.chars().peekable();
    let mut in_tag = false;

    while let Some(&c) = chars.peek() {
        if !in_tag {
            match c {
                '<' => {
                    chars.next();
                    tokens.push(Token::new(TokenKind::OpenBracket, "<"));
                    in_tag = true;
                }
                '>' => {
                    chars.next();
                    tokens.push(Token::new(TokenKind::CloseBracket, ">"));
                }
                _ => {
                    let mut text = String::new();
                    while let Some(&c) = chars.peek() {
                        if c == '<' || c == '>' {
                            break;
                        }
                        text.push(c);
                        chars.next();
                    }
                    tokens.push(Token::new(TokenKind::Text, &text));
                }
            }
        } else {
            match c {
                '>' => {
                    chars.next();
                    tokens.push(Token::new(TokenKind::CloseBracket, ">"));
                    in_tag = false;
                }
                '<' => {
                    // Stray opener; restart the tag context
                    chars.next();
                    tokens.push(Token::new(TokenKind::OpenBracket, "<"));
                }
                '/' => {
                    chars.next();
                    tokens.push(Token::new(TokenKind::Slash, "/"));
                }
                '=' => {
                    chars.next();
                    tokens.push(Token::new(TokenKind::Equals, "="));
                }
                '"' => {
                    chars.next();
                    tokens.push(Token::new(TokenKind::Quote, "\""));
                    let mut value = String::new();
                    while let Some(&c) = chars.peek() {
                        if c == '"' {
                            break;
                        }
                        value.push(c);
                        chars.next();
                    }
                    if !value.is_empty() {
                        tokens.push(Token::new(TokenKind::Value, &value));
                    }
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        tokens.push(Token::new(TokenKind::Quote, "\""));
                    }
                }
                c if c.is_whitespace() => {
                    let mut ws = String::new();
                    while let Some(&c) = chars.peek() {
                        if !c.is_whitespace() {
                            break;
                        }
                        ws.push(c);
                        chars.next();
                    }
                    tokens.push(Token::new(TokenKind::Whitespace, &ws));
                }
                c if is_ident_char(c) => {
                    let mut ident = String::new();
                    while let Some(&c) = chars.peek() {
                        if !is_ident_char(c) {
                            break;
                        }
                        ident.push(c);
                        chars.next();
                    }
                    tokens.push(Token::new(TokenKind::Ident, &ident));
                }
                _ => {
                    chars.next();
                    let mut text = String::new();
                    text.push(c);
                    tokens.push(Token::new(TokenKind::Text, &text));
                }
            }
        }
    }

    tokens
}
