use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub enum LogTarget<'a> {
    /// One-shot commands: warnings and errors on stderr.
    Stderr,
    /// The terminal UI owns the screen, so it logs to a file.
    File(&'a Path),
}

impl LogTarget<'_> {
    /// Filter used when `RUST_LOG` is unset.
    pub fn default_directive(&self) -> &'static str {
        match self {
            LogTarget::Stderr => "checklist=warn",
            LogTarget::File(_) => "checklist=info",
        }
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init(target: LogTarget<'_>) -> Result<()> {
    let default = target.default_directive();
    match target {
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(filter(default))
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .try_init()
            .context("install stderr logger")?,
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("create log dir {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("open log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(filter(default))
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false),
                )
                .try_init()
                .context("install file logger")?
        }
    }
    Ok(())
}

fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into())
}
