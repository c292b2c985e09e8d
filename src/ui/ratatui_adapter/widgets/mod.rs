//! Ratatui widgets for the picker

mod entry_list;
mod help_bar;
mod search_bar;

pub use entry_list::{EntryList, abbreviate_home};
pub use help_bar::{HelpBar, KeyHint};
pub use search_bar::SearchBar;
