pub mod config;
pub mod contact;
pub mod content;
pub mod events;
pub mod resize;
pub mod terminal;
pub mod typing;
pub mod workbench;

// Re-export main types for convenience
pub use config::{Config, ConfigError};
pub use contact::{ContactDesk, ContactError, ContactForm, FormField, FormRelay, SubmitStatus};
pub use content::{Content, ContentError, TabKind};
pub use events::{AppEvent, EventBus, EventSender};
pub use resize::{PanelResize, ResizeLimits};
pub use terminal::{CommandKind, Effects, Evaluation, Interpreter, SystemEffects};
pub use typing::Typewriter;
pub use workbench::Workbench;
