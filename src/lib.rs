//! Diagnostics for an application's environment configuration.
//!
//! The core is [`find_key`]: locate the first `KEY=` line of an environment
//! file and hand its value to [`classify`]. The [`report`] module builds the
//! two diagnostic programs on top of it.

pub mod error;
pub use error::Error;
pub use error::ErrorKind;

pub mod result;
pub use result::Result;

pub mod options;
pub use options::Options;

pub mod env;
pub use env::{GetEnv, ServerVars, SystemEnv};

pub mod line_splitter;

pub mod entry;
pub use entry::{find_key, ConfigEntry};

pub mod classify;
pub use classify::{classify, Emptiness, Format, ValueClassification};

pub mod inspector;
pub use inspector::{load, EnvFileInspector};

pub mod framework;
pub use framework::{Bootstrap, ConfigSource, ConfigValue};

pub mod metadata;
pub use metadata::{file_metadata, FileMetadata};

pub mod report;

/// Installs the stderr logger. `KEYPROBE_LOG` takes an `EnvFilter` directive,
/// otherwise only warnings are shown unless `debug` is set.
pub fn init_logging(debug: bool) {
    use tracing_subscriber::EnvFilter;

    let default_level = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("KEYPROBE_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
