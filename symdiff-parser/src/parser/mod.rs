pub mod error;

use crate::tokenizer::{tokenize_complete, Token, TokenKind};
use crate::tree::{Tree, TreeKind};
use std::ops::Range;
use symdiff_error::{Error, ErrorKind};

/// The token kinds that may start a tag.
const TAG_START: &[TokenKind] = &[TokenKind::Name, TokenKind::Add, TokenKind::Sub, TokenKind::Mul];

/// The token kinds that may start an operand.
const OPERAND_START: &[TokenKind] = &[
    TokenKind::OpenParen,
    TokenKind::Number,
    TokenKind::Sub,
    TokenKind::String,
];

/// The deepest tuple nesting the reader accepts. Building, simplifying and differentiating all
/// recurse once per level, so this bounds their stack usage for any input read from text.
pub const MAX_DEPTH: usize = 256;

/// A reader for the tagged-tuple literal syntax, such as `(add, (number, 0), (variable, "x"))`.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,

    /// The number of tuples currently open.
    depth: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
            depth: 0,
        }
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Advances the cursor past any whitespace.
    fn skip_whitespace(&mut self) {
        while self.tokens.get(self.cursor).is_some_and(Token::is_whitespace) {
            self.cursor += 1;
        }
    }

    /// Returns the next non-whitespace token without advancing the cursor past it.
    fn peek_token(&mut self) -> Option<&Token<'source>> {
        self.skip_whitespace();
        self.tokens.get(self.cursor)
    }

    /// Returns the next token to be parsed, then advances the cursor. Whitespace tokens are
    /// skipped.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        self.skip_whitespace();
        match self.tokens.get(self.cursor) {
            Some(token) => {
                // cloning is cheap: only Range<_> is cloned
                let token = token.clone();
                self.cursor += 1;
                Ok(token)
            },
            None => Err(self.error(error::UnexpectedEof)),
        }
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser; if not, an error is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        let value = T::parse(self)?;
        if self.peek_token().is_none() {
            Ok(value)
        } else {
            Err(self.error(error::ExpectedEof))
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

impl Parse for Tree {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        match token.kind {
            TokenKind::OpenParen => {
                if input.depth >= MAX_DEPTH {
                    let kind = error::NestingTooDeep { limit: MAX_DEPTH };
                    return Err(Error::new(vec![token.span], kind));
                }
                input.depth += 1;
                let tree = parse_tuple(input, token.span);
                input.depth -= 1;
                tree
            },
            TokenKind::Number => parse_number(token.lexeme, token.span, false),
            TokenKind::Sub => {
                let number = input.next_token()?;
                if number.kind != TokenKind::Number {
                    return Err(Error::new(vec![number.span], error::UnexpectedToken {
                        expected: &[TokenKind::Number],
                        found: number.kind,
                    }));
                }
                parse_number(number.lexeme, token.span.start..number.span.end, true)
            },
            TokenKind::String => {
                let inner = &token.lexeme[1..token.lexeme.len() - 1];
                Ok(Tree::string(inner).with_span(token.span))
            },
            kind => Err(Error::new(vec![token.span], error::UnexpectedToken {
                expected: OPERAND_START,
                found: kind,
            })),
        }
    }
}

/// Parses a numeric literal, negating it if `negative` is set.
fn parse_number(lexeme: &str, span: Range<usize>, negative: bool) -> Result<Tree, Error> {
    let value = lexeme.parse::<f64>()
        .map_err(|_| Error::new(vec![span.clone()], error::InvalidNumber { lexeme: lexeme.to_string() }))?;
    if !value.is_finite() {
        return Err(Error::new(vec![span], error::InvalidNumber { lexeme: lexeme.to_string() }));
    }
    let value = if negative { -value } else { value };
    Ok(Tree::number(value).with_span(span))
}

/// Parses the remainder of a tuple after its opening parenthesis: a tag, then any number of
/// comma-separated operands, then the closing parenthesis.
fn parse_tuple(input: &mut Parser, open: Range<usize>) -> Result<Tree, Error> {
    let tag = match input.next_token() {
        Ok(token) if TAG_START.contains(&token.kind) => token.lexeme.to_string(),
        Ok(token) if token.kind == TokenKind::CloseParen => {
            return Err(Error::new(vec![open.start..token.span.end], error::MissingTag));
        },
        Ok(token) => return Err(Error::new(vec![token.span], error::UnexpectedToken {
            expected: TAG_START,
            found: token.kind,
        })),
        Err(_) => return Err(Error::new(vec![open], error::UnclosedParenthesis)),
    };

    let mut args = Vec::new();
    loop {
        let token = input.next_token()
            .map_err(|_| Error::new(vec![open.clone()], error::UnclosedParenthesis))?;
        match token.kind {
            TokenKind::CloseParen => {
                let span = open.start..token.span.end;
                return Ok(Tree::from(TreeKind::Tuple { tag, args }).with_span(span));
            },
            TokenKind::Comma => args.push(Tree::parse(input)?),
            kind => return Err(Error::new(vec![token.span], error::UnexpectedToken {
                expected: &[TokenKind::Comma, TokenKind::CloseParen],
                found: kind,
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::tree;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn number() {
        let mut parser = Parser::new("16");
        let tree = parser.try_parse_full::<Tree>().unwrap();
        assert_eq!(tree, Tree::number(16.0));
        assert_eq!(tree.span, 0..2);
    }

    #[test]
    fn negative_number() {
        let mut parser = Parser::new("(number, - 2.5)");
        let tree = parser.try_parse_full::<Tree>().unwrap();
        assert_eq!(tree, tree!((number, -2.5)));
    }

    #[test]
    fn nested_matches_macro() {
        let mut parser = Parser::new(r#"(add, (multiply, (number, 2), (variable, "x")), (number, 3))"#);
        let tree = parser.try_parse_full::<Tree>().unwrap();
        assert_eq!(tree, tree!((add, (multiply, (number, 2), (variable, "x")), (number, 3))));
    }

    #[test]
    fn symbolic_tags() {
        let mut parser = Parser::new(r#"(+, (-, (number, 1)), (*, (number, 2), (number, 3)))"#);
        let tree = parser.try_parse_full::<Tree>().unwrap();
        let (tag, args) = tree.as_tuple().unwrap();
        assert_eq!(tag, "+");
        assert_eq!(args[0].as_tuple().unwrap().0, "-");
        assert_eq!(args[1].as_tuple().unwrap().0, "*");
    }

    #[test]
    fn spans_point_at_subtrees() {
        let source = r#"(sin, (variable, "x"))"#;
        let mut parser = Parser::new(source);
        let tree = parser.try_parse_full::<Tree>().unwrap();
        assert_eq!(tree.span, 0..source.len());

        let inner = &tree.as_tuple().unwrap().1[0];
        assert_eq!(&source[inner.span.clone()], r#"(variable, "x")"#);
    }

    #[test]
    fn unclosed_parenthesis() {
        let mut parser = Parser::new("(negate, (number, 1)");
        let err = parser.try_parse_full::<Tree>().unwrap_err();
        assert!(err.is::<error::UnclosedParenthesis>());
        assert_eq!(err.spans, vec![0..1]);
    }

    #[test]
    fn missing_tag() {
        let mut parser = Parser::new("()");
        let err = parser.try_parse_full::<Tree>().unwrap_err();
        assert!(err.is::<error::MissingTag>());
    }

    #[test]
    fn trailing_input() {
        let mut parser = Parser::new("(number, 1) (number, 2)");
        let err = parser.try_parse_full::<Tree>().unwrap_err();
        assert!(err.is::<error::ExpectedEof>());
        assert_eq!(err.spans, vec![12..13]);
    }

    #[test]
    fn unexpected_token() {
        let mut parser = Parser::new("(number $ 1)");
        let err = parser.try_parse_full::<Tree>().unwrap_err();
        assert_eq!(
            err.downcast_ref::<error::UnexpectedToken>(),
            Some(&error::UnexpectedToken {
                expected: &[TokenKind::Comma, TokenKind::CloseParen],
                found: TokenKind::Symbol,
            }),
        );
    }

    #[test]
    fn infinite_number() {
        let source = "(number, 1e999)";
        let err = Parser::new(source).try_parse_full::<Tree>().unwrap_err();
        assert_eq!(
            err.downcast_ref::<error::InvalidNumber>(),
            Some(&error::InvalidNumber { lexeme: "1e999".to_string() }),
        );
        assert_eq!(&source[err.spans[0].clone()], "1e999");

        let err = Parser::new("(number, -1e999)").try_parse_full::<Tree>().unwrap_err();
        assert!(err.is::<error::InvalidNumber>());
    }

    /// Nests `depth - 1` negations around a number tuple, giving `depth` tuples in total.
    fn nested(depth: usize) -> String {
        let mut source = "(negate, ".repeat(depth - 1);
        source.push_str("(number, 1)");
        source.push_str(&")".repeat(depth - 1));
        source
    }

    #[test]
    fn nesting_limit() {
        let tree = Parser::new(&nested(MAX_DEPTH)).try_parse_full::<Tree>().unwrap();
        assert_eq!(tree.as_tuple().map(|(tag, _)| tag), Some("negate"));

        let source = nested(MAX_DEPTH + 1);
        let err = Parser::new(&source).try_parse_full::<Tree>().unwrap_err();
        assert_eq!(
            err.downcast_ref::<error::NestingTooDeep>(),
            Some(&error::NestingTooDeep { limit: MAX_DEPTH }),
        );
        // the innermost tuple is the one past the limit
        assert_eq!(&source[err.spans[0].clone()], "(");
        assert_eq!(err.spans[0].start, source.find("(number").unwrap());
    }

    #[test]
    fn far_too_deep_input_is_an_error() {
        let source = "(negate, ".repeat(100_000);
        let err = Parser::new(&source).try_parse_full::<Tree>().unwrap_err();
        assert!(err.is::<error::NestingTooDeep>());
    }

    #[test]
    fn empty_input() {
        let mut parser = Parser::new("   ");
        let err = parser.try_parse_full::<Tree>().unwrap_err();
        assert!(err.is::<error::UnexpectedEof>());
    }
}
