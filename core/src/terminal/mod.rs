pub mod commands;
pub mod effects;
pub mod history;
pub mod interpreter;

#[cfg(test)]
mod tests;

pub use commands::{dispatch, parse_input, Action, CommandKind, ParsedInput, Reply};
pub use effects::{EffectError, Effects, SystemEffects};
pub use history::SessionHistory;
pub use interpreter::{Evaluation, Interpreter, PROMPT};
