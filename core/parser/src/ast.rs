//! FILENAME: core/parser/src/ast.rs
//! PURPOSE: Defines the syntax tree for operation expressions.
//! CONTEXT: An expression is a single operation call, optionally assigned to
//! an output name:
//!
//!   rc3 = addrasterband(rc1, rc2)
//!   groupby(tbl, items, "sum")
//!
//! Arguments are literals, symbol names, or the `?` placeholder. Symbol
//! resolution happens later, against the caller's symbol table.

/// A parsed `[output =] name(args...)` statement.
#[derive(Debug, PartialEq, Clone)]
pub struct OperationExpression {
    /// Name the result is assigned to, if any.
    pub output: Option<String>,
    /// Operation name as written.
    pub name: String,
    pub args: Vec<Expression>,
}

/// One argument of an operation call.
#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Literal(Value),
    /// A bare identifier: either a symbol or a plain word such as a column name.
    Symbol(String),
    /// The `?` placeholder.
    Undefined,
}

/// Literal values that can appear as arguments.
#[derive(Debug, PartialEq, Clone)]
pub enum Value {
    Number(f64),
    String(String),
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "\"{}\"", s.replace('"', "\"\"")),
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Literal(v) => write!(f, "{}", v),
            Expression::Symbol(s) => write!(f, "{}", s),
            Expression::Undefined => write!(f, "?"),
        }
    }
}

impl std::fmt::Display for OperationExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(output) = &self.output {
            write!(f, "{} = ", output)?;
        }
        write!(f, "{}(", self.name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", arg)?;
        }
        write!(f, ")")
    }
}
