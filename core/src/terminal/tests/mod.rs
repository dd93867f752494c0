pub mod interpreter_tests;

// Test utilities
use crate::content::Content;
use crate::terminal::{EffectError, Effects, Interpreter};
use chrono::{DateTime, Local, TimeZone};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Effects double that records every request instead of touching the OS
#[derive(Default)]
pub struct RecordingEffects {
    pub opened: Mutex<Vec<String>>,
    pub downloads: Mutex<Vec<(String, String)>>,
    pub fail: bool,
}

impl RecordingEffects {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl Effects for RecordingEffects {
    fn open_url(&self, url: &str) -> Result<(), EffectError> {
        self.opened.lock().unwrap().push(url.to_string());
        if self.fail {
            return Err(EffectError::Launch {
                opener: "test-opener".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "blocked"),
            });
        }
        Ok(())
    }

    fn download(&self, source: &str, file_name: &str) -> Result<PathBuf, EffectError> {
        self.downloads
            .lock()
            .unwrap()
            .push((source.to_string(), file_name.to_string()));
        if self.fail {
            return Err(EffectError::MissingAsset(PathBuf::from(source)));
        }
        Ok(PathBuf::from("/tmp").join(file_name))
    }

    fn now(&self) -> DateTime<Local> {
        fixed_now()
    }
}

/// 2025-03-04 05:06:07 local time
pub fn fixed_now() -> DateTime<Local> {
    Local.with_ymd_and_hms(2025, 3, 4, 5, 6, 7).unwrap()
}

pub fn test_content() -> Arc<Content> {
    Arc::new(Content::builtin().expect("builtin content"))
}

/// Interpreter over the builtin content plus a handle on its recording effects
pub fn setup_interpreter() -> (Interpreter, Arc<RecordingEffects>) {
    setup_interpreter_with(RecordingEffects::default())
}

pub fn setup_interpreter_with(effects: RecordingEffects) -> (Interpreter, Arc<RecordingEffects>) {
    let effects = Arc::new(effects);
    let interpreter = Interpreter::new(test_content(), effects.clone());
    (interpreter, effects)
}
