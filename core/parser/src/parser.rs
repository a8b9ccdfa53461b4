//! FILENAME: core/parser/src/parser.rs
//! PURPOSE: Recursive descent parser that converts a stream of Tokens into an OperationExpression.
//! CONTEXT: This is the second stage of the parsing pipeline. It takes tokens
//! from the Lexer and builds the call the dispatcher will execute.
//!
//! GRAMMAR:
//!   statement  --> (IDENTIFIER "=")? call
//!   call       --> IDENTIFIER "(" arguments? ")"
//!   arguments  --> argument ("," argument)*
//!   argument   --> NUMBER | "-" NUMBER | STRING | IDENTIFIER | "?"

use crate::ast::{Expression, OperationExpression, Value};
use crate::lexer::Lexer;
use crate::token::Token;

/// Parser errors with descriptive messages.
#[derive(Debug, PartialEq, Clone)]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        ParseError {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Parse error: {}", self.message)
    }
}

impl std::error::Error for ParseError {}

pub type ParseResult<T> = Result<T, ParseError>;

/// The Parser struct holds the lexer and current token state.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current_token: Token,
}

impl<'a> Parser<'a> {
    /// Creates a new parser from an input string.
    /// Automatically advances to the first token.
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer::new(input);
        let current_token = lexer.next_token();
        Parser {
            lexer,
            current_token,
        }
    }

    /// Parses the entire input as one statement.
    pub fn parse(&mut self) -> ParseResult<OperationExpression> {
        if self.current_token == Token::EOF {
            return Err(ParseError::new("Empty expression"));
        }

        let first = self.expect_identifier("Expected operation name or output name")?;

        let (output, name) = if self.current_token == Token::Equals {
            self.advance();
            let name = self.expect_identifier("Expected operation name after '='")?;
            (Some(first), name)
        } else {
            (None, first)
        };

        let args = self.parse_arguments()?;

        // Ensure we consumed all tokens
        if self.current_token != Token::EOF {
            return Err(ParseError::new(format!(
                "Unexpected token after expression: {:?}",
                self.current_token
            )));
        }

        Ok(OperationExpression { output, name, args })
    }

    /// Advances to the next token.
    fn advance(&mut self) {
        self.current_token = self.lexer.next_token();
    }

    /// Checks if the current token matches the expected token.
    /// If it matches, advances and returns Ok. Otherwise returns an error.
    fn expect(&mut self, expected: Token) -> ParseResult<()> {
        if self.current_token == expected {
            self.advance();
            Ok(())
        } else {
            Err(ParseError::new(format!(
                "Expected {:?}, found {:?}",
                expected, self.current_token
            )))
        }
    }

    fn expect_identifier(&mut self, message: &str) -> ParseResult<String> {
        match self.current_token.clone() {
            Token::Identifier(name) => {
                self.advance();
                Ok(name)
            }
            token => Err(ParseError::new(format!("{}, found {:?}", message, token))),
        }
    }

    /// Parses "(" arguments? ")".
    fn parse_arguments(&mut self) -> ParseResult<Vec<Expression>> {
        self.expect(Token::LParen)?;

        let mut args = Vec::new();

        // Handle empty argument list
        if self.current_token == Token::RParen {
            self.advance();
            return Ok(args);
        }

        args.push(self.parse_argument()?);

        while self.current_token == Token::Comma {
            self.advance();
            args.push(self.parse_argument()?);
        }

        self.expect(Token::RParen)?;

        Ok(args)
    }

    fn parse_argument(&mut self) -> ParseResult<Expression> {
        match self.current_token.clone() {
            Token::Number(n) => {
                self.advance();
                Ok(Expression::Literal(Value::Number(n)))
            }

            // Negative number literal
            Token::Minus => {
                self.advance();
                match self.current_token.clone() {
                    Token::Number(n) => {
                        self.advance();
                        Ok(Expression::Literal(Value::Number(-n)))
                    }
                    token => Err(ParseError::new(format!(
                        "Expected number after '-', found {:?}",
                        token
                    ))),
                }
            }

            Token::String(s) => {
                self.advance();
                Ok(Expression::Literal(Value::String(s)))
            }

            Token::Identifier(name) => {
                self.advance();
                Ok(Expression::Symbol(name))
            }

            Token::Question => {
                self.advance();
                Ok(Expression::Undefined)
            }

            Token::EOF => Err(ParseError::new("Unexpected end of expression")),

            Token::Illegal(ch) => Err(ParseError::new(format!("Illegal character: {}", ch))),

            token => Err(ParseError::new(format!("Unexpected token: {:?}", token))),
        }
    }
}

/// Convenience function to parse an expression string directly.
pub fn parse(input: &str) -> ParseResult<OperationExpression> {
    let mut parser = Parser::new(input);
    parser.parse()
}
