//! CLI command implementations.
//!
//! One command per store operation, plus shell completions:
//! - `create`: Insert a record
//! - `read`: List records (or show one by id)
//! - `update`: Replace a record's fields by id
//! - `delete`: Remove a record by id
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod create;
pub mod delete;
pub mod read;
pub mod update;

pub use completions::CompletionsCommand;
pub use create::CreateCommand;
pub use delete::DeleteCommand;
pub use read::ReadCommand;
pub use update::UpdateCommand;
