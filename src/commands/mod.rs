//! Command implementations
//!
//! Each command is a module with an `execute` function that takes the loaded
//! config plus its collaborators, so tests can swap in scripted pickers,
//! fake multiplexers and in-memory writers.

pub mod init;
pub mod list;
pub mod pick;

pub use init::execute as init;
pub use list::execute as list;
pub use pick::execute as pick;
