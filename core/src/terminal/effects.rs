use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};
use std::io;
use std::process::{Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use thiserror::Error;
use tracing::debug;

/// Sample resume served when the asset directory has none
const BUILTIN_RESUME: &[u8] = include_bytes!("../../assets/resume.pdf");
const BUILTIN_RESUME_PATH: &str = "resume.pdf";

/// Platform capabilities the terminal commands need.
///
/// Implementations are fire-and-forget from the interpreter's point of view:
/// errors are logged, never shown in the scrollback.
pub trait Effects: Send + Sync {
    /// Open a URL in the user's browser
    fn open_url(&self, url: &str) -> Result<(), EffectError>;

    /// Copy a static asset to the download directory; returns the written path
    fn download(&self, source: &str, file_name: &str) -> Result<PathBuf, EffectError>;

    /// Current local time, for `date`
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Errors produced by platform effects
#[derive(Error, Debug)]
pub enum EffectError {
    #[error("failed to launch '{opener}': {source}")]
    Launch {
        opener: String,
        #[source]
        source: std::io::Error,
    },

    #[error("asset not found: {0}")]
    MissingAsset(PathBuf),

    #[error("failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Effects backed by the host OS: a browser opener process and the filesystem
#[derive(Debug, Clone)]
pub struct SystemEffects {
    asset_dir: PathBuf,
    download_dir: PathBuf,
}

impl SystemEffects {
    pub fn new(asset_dir: PathBuf, download_dir: PathBuf) -> Self {
        Self {
            asset_dir,
            download_dir,
        }
    }

    fn opener() -> (&'static str, &'static [&'static str]) {
        if cfg!(target_os = "macos") {
            ("open", &[])
        } else if cfg!(target_os = "windows") {
            ("cmd", &["/C", "start", ""])
        } else {
            ("xdg-open", &[])
        }
    }

    /// Resolve an asset path such as `/resume.pdf` against the asset directory
    pub fn asset_path(&self, source: &str) -> PathBuf {
        self.asset_dir.join(source.trim_start_matches('/'))
    }
}

impl Effects for SystemEffects {
    fn open_url(&self, url: &str) -> Result<(), EffectError> {
        let (program, prefix) = Self::opener();
        let mut command = Command::new(program);
        command.args(prefix).arg(url);
        launch_detached(&mut command)
            .map(|_| ())
            .map_err(|source| EffectError::Launch {
                opener: program.to_string(),
                source,
            })
    }

    fn download(&self, source: &str, file_name: &str) -> Result<PathBuf, EffectError> {
        let from = self.asset_path(source);
        let to = self.download_dir.join(file_name);
        if from.is_file() {
            copy_file(&from, &to)?;
        } else if source.trim_start_matches('/') == BUILTIN_RESUME_PATH {
            debug!("{} not found, writing the built-in resume", from.display());
            write_file(BUILTIN_RESUME, &from, &to)?;
        } else {
            return Err(EffectError::MissingAsset(from));
        }
        Ok(to)
    }
}

/// Spawn `command` with null stdio and reap it on a background thread once it exits
pub(crate) fn launch_detached(command: &mut Command) -> io::Result<JoinHandle<Option<ExitStatus>>> {
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    let pid = child.id();
    debug!("Launched opener pid {}", pid);
    Ok(thread::spawn(move || match child.wait() {
        Ok(status) => {
            debug!("Opener pid {} exited with {}", pid, status);
            Some(status)
        }
        Err(e) => {
            debug!("Could not wait on opener pid {}: {}", pid, e);
            None
        }
    }))
}

fn copy_file(from: &Path, to: &Path) -> Result<(), EffectError> {
    let wrap = |source| EffectError::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    };
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent).map_err(wrap)?;
    }
    fs::copy(from, to).map(|_| ()).map_err(wrap)
}

fn write_file(bytes: &[u8], from: &Path, to: &Path) -> Result<(), EffectError> {
    let wrap = |source| EffectError::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    };
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent).map_err(wrap)?;
    }
    fs::write(to, bytes).map_err(wrap)
}
