/// Snapshot-to-JSON conversion command.
pub mod convert;
/// Snapshot type table inspection command.
pub mod types;
