//! Tokenizer and recursive descent parser for sanitized expression text

use crate::core::{CalcError, CalcResult, Operator};
use std::iter::Peekable;

/// Lexical unit of sanitized expression text
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal
    Number(f64),
    /// Binary or unary operator
    Operator(Operator),
    /// Left parenthesis
    LeftParen,
    /// Right parenthesis
    RightParen,
}

/// Expression tree produced by [`Parser`]
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    /// Numeric literal
    Number(f64),
    /// Binary operation
    BinaryOp {
        /// Left operand
        left: Box<AstNode>,
        /// Operator
        op: Operator,
        /// Right operand
        right: Box<AstNode>,
    },
    /// Unary negation
    Negate(Box<AstNode>),
}

impl AstNode {
    /// Literal leaf
    #[must_use]
    pub fn number(value: f64) -> Self {
        Self::Number(value)
    }

    /// Binary node over two subtrees
    #[must_use]
    pub fn binary(left: AstNode, op: Operator, right: AstNode) -> Self {
        Self::BinaryOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Negation of a subtree
    #[must_use]
    pub fn negate(inner: AstNode) -> Self {
        Self::Negate(Box::new(inner))
    }
}

/// Splits expression text into tokens, consuming it from the front
#[derive(Debug)]
pub struct Tokenizer<'a> {
    rest: &'a str,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer over `input`
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { rest: input }
    }

    /// Consumes the remaining input into tokens
    pub fn tokenize(&mut self) -> CalcResult<Vec<Token>> {
        std::iter::from_fn(|| self.next_token().transpose()).collect()
    }

    /// Pops the next token; `Ok(None)` once the input is exhausted
    pub fn next_token(&mut self) -> CalcResult<Option<Token>> {
        self.rest = self.rest.trim_start();
        let Some(ch) = self.rest.chars().next() else {
            return Ok(None);
        };

        if ch.is_ascii_digit() || ch == '.' {
            return self.literal().map(Some);
        }

        let token = match ch {
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            _ => Operator::from_char(ch)
                .map(Token::Operator)
                .ok_or_else(|| CalcError::parse(format!("Unexpected character: '{ch}'")))?,
        };
        self.rest = &self.rest[ch.len_utf8()..];
        Ok(Some(token))
    }

    // A second '.' ends the literal; the parser then rejects the stray ".N".
    fn literal(&mut self) -> CalcResult<Token> {
        let mut seen_dot = false;
        let len = self
            .rest
            .find(|c: char| {
                if c == '.' && !seen_dot {
                    seen_dot = true;
                    false
                } else {
                    !c.is_ascii_digit()
                }
            })
            .unwrap_or(self.rest.len());

        let (digits, rest) = self.rest.split_at(len);
        self.rest = rest;
        digits
            .parse()
            .map(Token::Number)
            .map_err(|_| CalcError::parse(format!("Invalid number: '{digits}'")))
    }
}

/// Recursive descent parser over a token stream
///
/// ```text
/// expression ::= term (('+' | '-') term)*
/// term       ::= unary (('*' | '/') unary)*
/// unary      ::= ('-' | '+') unary | primary
/// primary    ::= NUMBER | '(' expression ')'
/// ```
///
/// Nesting of parentheses and signs is capped at [`MAX_NESTING`], and the
/// tree it builds is at most [`MAX_HEIGHT`] nodes tall. Deeper input is a
/// parse error.
#[derive(Debug)]
pub struct Parser {
    tokens: Peekable<std::vec::IntoIter<Token>>,
    consumed: usize,
    nesting: usize,
}

/// Deepest run of open parentheses and unary signs the parser accepts
pub const MAX_NESTING: usize = 200;

/// Tallest expression tree the parser builds
pub const MAX_HEIGHT: usize = 2_000;

/// Subtree plus its height
type Branch = (AstNode, usize);

impl Parser {
    /// Creates a parser that owns `tokens`
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens: tokens.into_iter().peekable(),
            consumed: 0,
            nesting: 0,
        }
    }

    /// Tokenizes and parses `input` in one step
    pub fn parse_str(input: &str) -> CalcResult<AstNode> {
        let tokens = Tokenizer::new(input.trim()).tokenize()?;
        Self::new(tokens).parse()
    }

    /// Parses the whole token stream into one tree
    pub fn parse(&mut self) -> CalcResult<AstNode> {
        if self.tokens.peek().is_none() {
            return Err(CalcError::EmptyExpression);
        }

        let (ast, _) = self.expression()?;
        match self.tokens.peek() {
            None => Ok(ast),
            Some(token) => Err(CalcError::parse(format!(
                "Unexpected token {token:?} at position {}",
                self.consumed
            ))),
        }
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.tokens.next();
        if token.is_some() {
            self.consumed += 1;
        }
        token
    }

    /// Consumes the next token if it is one of `ops`
    fn eat_operator(&mut self, ops: [Operator; 2]) -> Option<Operator> {
        match self.tokens.peek() {
            Some(Token::Operator(op)) if ops.contains(op) => {
                let op = *op;
                self.bump();
                Some(op)
            }
            _ => None,
        }
    }

    fn expression(&mut self) -> CalcResult<Branch> {
        let mut left = self.term()?;
        while let Some(op) = self.eat_operator([Operator::Add, Operator::Subtract]) {
            let right = self.term()?;
            left = Self::join(left, op, right)?;
        }
        Ok(left)
    }

    fn term(&mut self) -> CalcResult<Branch> {
        let mut left = self.unary()?;
        while let Some(op) = self.eat_operator([Operator::Multiply, Operator::Divide]) {
            let right = self.unary()?;
            left = Self::join(left, op, right)?;
        }
        Ok(left)
    }

    fn unary(&mut self) -> CalcResult<Branch> {
        match self.eat_operator([Operator::Subtract, Operator::Add]) {
            Some(Operator::Subtract) => {
                let (inner, height) = self.nested(Self::unary)?;
                Ok((AstNode::negate(inner), Self::grow(height)?))
            }
            Some(_) => self.nested(Self::unary),
            None => self.primary(),
        }
    }

    fn primary(&mut self) -> CalcResult<Branch> {
        match self.bump() {
            Some(Token::Number(n)) => Ok((AstNode::number(n), 1)),
            Some(Token::LeftParen) => {
                let inner = self.nested(Self::expression)?;
                match self.bump() {
                    Some(Token::RightParen) => Ok(inner),
                    Some(t) => Err(CalcError::parse(format!("Expected ')' but found {t:?}"))),
                    None => Err(CalcError::parse("Unclosed parenthesis")),
                }
            }
            Some(t) => Err(CalcError::parse(format!("Unexpected token: {t:?}"))),
            None => Err(CalcError::parse("Unexpected end of expression")),
        }
    }

    /// Runs `rule` one nesting level deeper
    fn nested(&mut self, rule: fn(&mut Self) -> CalcResult<Branch>) -> CalcResult<Branch> {
        if self.nesting >= MAX_NESTING {
            return Err(CalcError::parse("Expression nested too deeply"));
        }
        self.nesting += 1;
        let branch = rule(self);
        self.nesting -= 1;
        branch
    }

    fn join(left: Branch, op: Operator, right: Branch) -> CalcResult<Branch> {
        let height = Self::grow(left.1.max(right.1))?;
        Ok((AstNode::binary(left.0, op, right.0), height))
    }

    fn grow(height: usize) -> CalcResult<usize> {
        if height >= MAX_HEIGHT {
            return Err(CalcError::parse("Expression nested too deeply"));
        }
        Ok(height + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        Tokenizer::new(input).tokenize().unwrap()
    }

    // ===== Tokenizer =====

    #[test]
    fn test_tokenize_simple_sum() {
        assert_eq!(
            tokens("5+3"),
            vec![
                Token::Number(5.0),
                Token::Operator(Operator::Add),
                Token::Number(3.0),
            ]
        );
    }

    #[test]
    fn test_tokenize_decimals() {
        assert_eq!(tokens("1.5"), vec![Token::Number(1.5)]);
        assert_eq!(tokens("0."), vec![Token::Number(0.0)]);
        assert_eq!(tokens(".25"), vec![Token::Number(0.25)]);
    }

    #[test]
    fn test_tokenize_second_dot_starts_new_literal() {
        assert_eq!(tokens("1.2.3"), vec![Token::Number(1.2), Token::Number(0.3)]);
    }

    #[test]
    fn test_tokenize_parens_and_whitespace() {
        assert_eq!(
            tokens(" ( 2 ) "),
            vec![Token::LeftParen, Token::Number(2.0), Token::RightParen]
        );
    }

    #[test]
    fn test_tokenize_lone_dot_fails() {
        let err = Tokenizer::new(".").tokenize().unwrap_err();
        assert!(matches!(err, CalcError::ParseError(_)));
    }

    #[test]
    fn test_tokenize_unknown_character() {
        let err = Tokenizer::new("2^3").tokenize().unwrap_err();
        assert_eq!(err, CalcError::parse("Unexpected character: '^'"));
    }

    // ===== Parser =====

    #[test]
    fn test_parse_precedence() {
        let ast = Parser::parse_str("1+2*3").unwrap();
        assert_eq!(
            ast,
            AstNode::binary(
                AstNode::number(1.0),
                Operator::Add,
                AstNode::binary(AstNode::number(2.0), Operator::Multiply, AstNode::number(3.0)),
            )
        );
    }

    #[test]
    fn test_parse_left_associative() {
        let ast = Parser::parse_str("8-3-2").unwrap();
        assert_eq!(
            ast,
            AstNode::binary(
                AstNode::binary(AstNode::number(8.0), Operator::Subtract, AstNode::number(3.0)),
                Operator::Subtract,
                AstNode::number(2.0),
            )
        );
    }

    #[test]
    fn test_parse_unary_minus_after_operator() {
        let ast = Parser::parse_str("5*-3").unwrap();
        assert_eq!(
            ast,
            AstNode::binary(
                AstNode::number(5.0),
                Operator::Multiply,
                AstNode::negate(AstNode::number(3.0)),
            )
        );
    }

    #[test]
    fn test_parse_unary_plus_is_identity() {
        assert_eq!(
            Parser::parse_str("5-+3").unwrap(),
            Parser::parse_str("5-3").unwrap()
        );
    }

    #[test]
    fn test_parse_double_negation() {
        let ast = Parser::parse_str("--4").unwrap();
        assert_eq!(ast, AstNode::negate(AstNode::negate(AstNode::number(4.0))));
    }

    #[test]
    fn test_parse_parentheses() {
        let ast = Parser::parse_str("(1+2)*3").unwrap();
        assert_eq!(
            ast,
            AstNode::binary(
                AstNode::binary(AstNode::number(1.0), Operator::Add, AstNode::number(2.0)),
                Operator::Multiply,
                AstNode::number(3.0),
            )
        );
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Parser::parse_str(""), Err(CalcError::EmptyExpression));
        assert_eq!(Parser::parse_str("   "), Err(CalcError::EmptyExpression));
    }

    #[test]
    fn test_parse_trailing_operator() {
        assert!(matches!(
            Parser::parse_str("5+"),
            Err(CalcError::ParseError(_))
        ));
    }

    #[test]
    fn test_parse_operator_then_binary() {
        assert!(matches!(
            Parser::parse_str("5-*3"),
            Err(CalcError::ParseError(_))
        ));
    }

    #[test]
    fn test_parse_unclosed_paren() {
        assert_eq!(
            Parser::parse_str("(1+2"),
            Err(CalcError::parse("Unclosed parenthesis"))
        );
    }

    #[test]
    fn test_parse_stray_close_paren() {
        assert!(matches!(
            Parser::parse_str("1+2)"),
            Err(CalcError::ParseError(_))
        ));
    }

    #[test]
    fn test_parse_adjacent_numbers() {
        assert!(matches!(
            Parser::parse_str("1.2.3"),
            Err(CalcError::ParseError(_))
        ));
    }

    #[test]
    fn test_parse_mismatched_paren_token() {
        let mut parser = Parser::new(vec![
            Token::LeftParen,
            Token::Number(1.0),
            Token::LeftParen,
        ]);
        assert!(matches!(parser.parse(), Err(CalcError::ParseError(_))));
    }

    #[test]
    fn test_parse_nesting_limit() {
        let depth = MAX_NESTING;
        let ok = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
        assert_eq!(Parser::parse_str(&ok), Ok(AstNode::number(1.0)));

        let deep = format!("{}1{}", "(".repeat(depth + 1), ")".repeat(depth + 1));
        assert_eq!(
            Parser::parse_str(&deep),
            Err(CalcError::parse("Expression nested too deeply"))
        );
    }

    #[test]
    fn test_parse_huge_paren_nesting_is_error() {
        let text = format!("{}1{}", "(".repeat(200_000), ")".repeat(200_000));
        assert_eq!(
            Parser::parse_str(&text),
            Err(CalcError::parse("Expression nested too deeply"))
        );
    }

    #[test]
    fn test_parse_huge_sign_run_is_error() {
        let text = format!("{}1", "-".repeat(200_000));
        assert_eq!(
            Parser::parse_str(&text),
            Err(CalcError::parse("Expression nested too deeply"))
        );
    }

    #[test]
    fn test_parse_long_chain_height_limit() {
        let terms = vec!["1"; MAX_HEIGHT].join("+");
        assert!(Parser::parse_str(&terms).is_ok());

        let terms = vec!["1"; 200_000].join("+");
        assert_eq!(
            Parser::parse_str(&terms),
            Err(CalcError::parse("Expression nested too deeply"))
        );
    }
}
