//! FILENAME: core/parser/src/lib.rs
//! PURPOSE: Library root for the operation expression parser.
//! CONTEXT: This module exposes the lexer, parser, and AST components
//! needed to turn a textual operation call into a structured expression.
//!
//! PIPELINE: Expression String --> Lexer --> Tokens --> Parser --> OperationExpression --> Dispatcher
//!
//! SUPPORTED FEATURES:
//! - Calls: addrasterband(rc1, rc2)
//! - Assignment of the result: rc3 = addrasterband(rc1, rc2)
//! - Number literals, including negatives: 10, -2.5
//! - String literals in single or double quotes: 'items', "sum"
//! - Bare identifiers (symbols, column names, keywords)
//! - The undefined placeholder: ?

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod token;


// Re-export commonly used types for convenience
pub use ast::{Expression, OperationExpression, Value};
pub use lexer::Lexer;
pub use parser::{parse, ParseError, ParseResult, Parser};
pub use token::Token;
