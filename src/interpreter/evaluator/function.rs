/// The builtin function table and call dispatch.
pub mod core;
/// Argument domains: the per-argument constraints a builtin declares.
///
/// Checked before any math primitive is called.
pub mod domain;
