// UI components for the TUI

pub mod command_palette;
pub mod editor;
pub mod project_detail;
pub mod sidebar;
pub mod status;
pub mod tab_bar;
pub mod terminal;

pub use command_palette::CommandPaletteComponent;
pub use editor::EditorComponent;
pub use project_detail::ProjectDetailComponent;
pub use sidebar::SidebarComponent;
pub use status::{StatusComponent, TitleBarComponent};
pub use tab_bar::TabBarComponent;
pub use terminal::TerminalComponent;
