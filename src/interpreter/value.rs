/// Runtime value representation.
///
/// Defines the `Value` enum with its rendering and truthiness rules.
pub mod core;
