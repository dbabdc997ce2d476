//! Token definitions for Rill.

use smol_str::SmolStr;
use std::fmt;

/// A lexical token: kind, source lexeme, and the line it was scanned on.
///
/// Tokens are stored by value inside AST nodes, so they stay cheap to clone:
/// the lexeme is a `SmolStr` and everything else is `Copy`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: SmolStr,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<SmolStr>, line: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}[{}]", self.line, self.kind, self.lexeme)
    }
}

/// Token kinds for Rill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    // ========================================================================
    // Single-character tokens
    // ========================================================================
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // ========================================================================
    // One or two character tokens
    // ========================================================================
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // ========================================================================
    // Literals
    // ========================================================================
    Identifier,
    String,
    Number,

    // ========================================================================
    // Keywords
    // ========================================================================
    And,
    As,
    Break,
    Class,
    Continue,
    Else,
    False,
    Fun,
    For,
    From,
    If,
    Import,
    Nil,
    Or,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    Eof,
}

impl TokenKind {
    /// Look up the keyword kind for an identifier, if it is one.
    pub fn keyword(identifier: &str) -> Option<TokenKind> {
        let kind = match identifier {
            "and" => TokenKind::And,
            "as" => TokenKind::As,
            "break" => TokenKind::Break,
            "class" => TokenKind::Class,
            "continue" => TokenKind::Continue,
            "else" => TokenKind::Else,
            "false" => TokenKind::False,
            "fun" => TokenKind::Fun,
            "for" => TokenKind::For,
            "from" => TokenKind::From,
            "if" => TokenKind::If,
            "import" => TokenKind::Import,
            "nil" => TokenKind::Nil,
            "or" => TokenKind::Or,
            "return" => TokenKind::Return,
            "super" => TokenKind::Super,
            "this" => TokenKind::This,
            "true" => TokenKind::True,
            "var" => TokenKind::Var,
            "while" => TokenKind::While,
            _ => return None,
        };
        Some(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(TokenKind::keyword("super"), Some(TokenKind::Super));
        assert_eq!(TokenKind::keyword("while"), Some(TokenKind::While));
        assert_eq!(TokenKind::keyword("import"), Some(TokenKind::Import));
        assert_eq!(TokenKind::keyword("banana"), None);
        assert_eq!(TokenKind::keyword(""), None);
    }

    #[test]
    fn test_token_ordering() {
        // Ordered by kind first, then lexeme, then line. Tokens are used as
        // map keys by downstream passes.
        let a = Token::new(TokenKind::Identifier, "a", 7);
        let b = Token::new(TokenKind::Identifier, "b", 1);
        let kw = Token::new(TokenKind::And, "and", 9);
        assert!(a < b);
        assert!(kw < a);

        let a_later = Token::new(TokenKind::Identifier, "a", 8);
        assert!(a < a_later);
    }

    #[test]
    fn test_token_display() {
        let token = Token::new(TokenKind::Number, "42", 3);
        assert_eq!(token.to_string(), "3 Number[42]");
    }
}
