/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST statement by statement, evaluates expressions,
/// maintains the variable store and collects printed output. It is the core
/// execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates statements and expressions in source order.
/// - Applies the operand-type rules of every operator.
/// - Reports runtime errors such as division by zero or invalid operations.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a sequence of
/// tokens, each corresponding to a number, string, keyword, operator,
/// delimiter or identifier. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source lines.
/// - Skips whitespace.
/// - Reports lexical errors for unrecognized input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token sequence produced by the lexer and
/// constructs the list of statements that make up a program.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (statements, expressions).
/// - Validates grammar and precedence, reporting errors with location info.
/// - Consumes every token or fails.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum: integers, strings and booleans.
/// - Implements rendering for `print` and the truthiness rule for `if`.
pub mod value;
