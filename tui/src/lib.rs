//! Terminal user interface for the folio portfolio: an editor-styled shell with an explorer, tabbed panes and a resizable terminal.

pub mod app;
pub mod components;
pub mod handlers;
pub mod state;
pub mod utils;

// Re-export main types for convenience
pub use app::App;
