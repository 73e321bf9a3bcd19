/// The builtin bodies that work on values: `len`, `first`, `last`,
/// `tail`, and `push`.
pub mod builtin;
/// Call application and the builtin table.
pub mod core;
/// The `print` builtin.
pub mod print;
