/// Binary operator evaluation logic.
///
/// Handles arithmetic, string concatenation and comparisons, including the
/// table of operand types each operator accepts.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the runtime context with its variable
/// store and output buffer, and statement execution.
pub mod core;

/// Utility functions for evaluation.
///
/// Provides helpers and reusable routines shared by evaluation logic.
pub mod utils;
