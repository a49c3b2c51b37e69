/// The runtime value type.
///
/// Defines the `Value` enum (integers and booleans) together with the checked
/// conversions the evaluator uses when an operation needs one particular type.
pub mod core;
