//! FILENAME: core/operations/src/dispatcher.rs
//! Dispatcher - Resolves operation calls and runs them.
//!
//! Algorithm for a call:
//! 1. Look up the operation by name (case-insensitive)
//! 2. Check the argument count against the declared parameters
//! 3. Check every argument's kind, and reject empty entities where the
//!    parameter does not allow them
//! 4. Run the operation on borrowed arguments and return the new entity
//!
//! Inputs are never modified: operations only read their arguments.

use once_cell::sync::Lazy;
use parser::{Expression, OperationExpression};

use crate::argument::{Argument, OperationResult};
use crate::config::EngineConfig;
use crate::definition::OperationMetadata;
use crate::error::{OpResult, OperationError};
use crate::logging::{log_enter, log_exit, log_info, log_warn};
use crate::registry::{Operation, OperationRegistry};
use crate::symbol_table::SymbolTable;

/// Shared engine behind the free `execute` function.
static DEFAULT_ENGINE: Lazy<Engine> = Lazy::new(Engine::new);

pub struct Engine {
    registry: OperationRegistry,
    config: EngineConfig,
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new()
    }
}

impl Engine {
    /// Creates an engine with the built-in operations and default settings.
    pub fn new() -> Self {
        Engine {
            registry: OperationRegistry::with_builtins(),
            config: EngineConfig::default(),
        }
    }

    /// Creates an engine with the built-in operations and the given settings.
    /// Opens the log file when one is configured. The log file is shared by
    /// the whole process, so the most recently configured one wins.
    pub fn with_config(config: EngineConfig) -> OpResult<Self> {
        Engine::with_registry(OperationRegistry::with_builtins(), config)
    }

    pub fn with_registry(registry: OperationRegistry, config: EngineConfig) -> OpResult<Self> {
        if let Some(path) = &config.log_file {
            let path = crate::logging::init_log_file(path)?;
            log_info!("CONFIG", "log file opened at {}", path.display());
        }
        Ok(Engine { registry, config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Adds an operation, replacing one with the same name.
    pub fn register(&mut self, operation: Box<dyn Operation>) {
        let name = operation.metadata().name.clone();
        if self.registry.register(operation).is_some() {
            log_info!("OPS", "replaced operation {}", name);
        }
    }

    /// Metadata of all registered operations, sorted by name.
    pub fn operations(&self) -> Vec<&OperationMetadata> {
        self.registry.metadata()
    }

    pub fn metadata(&self, name: &str) -> Option<&OperationMetadata> {
        self.registry.get(name).map(|op| op.metadata())
    }

    // ========================================================================
    // EXECUTION
    // ========================================================================

    /// Runs operation `name` with positional arguments.
    pub fn execute(&self, name: &str, args: Vec<Argument>) -> OpResult<OperationResult> {
        log_enter!("OPS", "execute", "{} ({} args)", name, args.len());

        let result = self.run(name, &args);

        match &result {
            Ok(output) => log_exit!("OPS", "execute", "{} -> {}", name, output.kind()),
            Err(e) => log_warn!("OPS", "{} failed: {}", name, e),
        }
        result
    }

    fn run(&self, name: &str, args: &[Argument]) -> OpResult<OperationResult> {
        let operation = self
            .registry
            .get(name)
            .ok_or_else(|| OperationError::UnknownOperation(name.to_string()))?;

        validate(operation.metadata(), args)?;
        operation.execute(args, &self.config)
    }

    /// Parses and runs `out = name(args...)` against a symbol table.
    ///
    /// Identifiers naming a symbol resolve to that entity; other identifiers
    /// and string literals are passed as text, `?` as the placeholder. When the
    /// expression names an output, the result is stored under that name.
    pub fn execute_expression(
        &self,
        expression: &str,
        symbols: &mut SymbolTable,
    ) -> OpResult<OperationResult> {
        let parsed = parser::parse(expression)?;
        log_info!("OPS", "expression {}", parsed);

        let args = self.resolve_arguments(&parsed, symbols)?;
        let result = self.execute(&parsed.name, args)?;

        if let Some(output) = &parsed.output {
            symbols.insert(output.clone(), result.clone());
        }
        Ok(result)
    }

    fn resolve_arguments(
        &self,
        parsed: &OperationExpression,
        symbols: &SymbolTable,
    ) -> OpResult<Vec<Argument>> {
        let metadata = self
            .metadata(&parsed.name)
            .ok_or_else(|| OperationError::UnknownOperation(parsed.name.clone()))?;

        parsed
            .args
            .iter()
            .enumerate()
            .map(|(i, expr)| match expr {
                Expression::Literal(parser::Value::Number(n)) => Ok(Argument::Number(*n)),
                Expression::Literal(parser::Value::String(s)) => Ok(Argument::Text(s.clone())),
                Expression::Undefined => Ok(Argument::Text(self.config.placeholder.clone())),
                Expression::Symbol(name) => {
                    if let Some(value) = symbols.get(name) {
                        return Ok(value.clone());
                    }
                    // A bare word is only text where the parameter takes text.
                    let takes_text = metadata
                        .parameters
                        .get(i)
                        .map_or(true, |p| p.accepts(crate::definition::ArgumentKind::Text));
                    if takes_text {
                        Ok(Argument::Text(name.clone()))
                    } else {
                        Err(OperationError::UnknownSymbol(name.clone()))
                    }
                }
            })
            .collect()
    }
}

/// Checks argument count, kinds and emptiness against the declared parameters.
fn validate(metadata: &OperationMetadata, args: &[Argument]) -> OpResult<()> {
    if args.len() < metadata.required_count() || args.len() > metadata.max_count() {
        return Err(OperationError::ArgumentCount {
            operation: metadata.name.clone(),
            expected: metadata.arity(),
            found: args.len(),
        });
    }

    for (arg, param) in args.iter().zip(&metadata.parameters) {
        if !param.accepts(arg.kind()) {
            return Err(OperationError::ArgumentKind {
                operation: metadata.name.clone(),
                parameter: param.name.clone(),
                expected: param.expected(),
                found: arg.kind(),
            });
        }
        if !param.allow_empty && arg.is_empty() {
            return Err(OperationError::EmptyInput {
                operation: metadata.name.clone(),
                parameter: param.name.clone(),
            });
        }
    }
    Ok(())
}

/// Runs an operation on the shared default engine.
pub fn execute(name: &str, args: Vec<Argument>) -> OpResult<OperationResult> {
    DEFAULT_ENGINE.execute(name, args)
}
