//! Configuration file for the `qml` binary.
//!
//! Every key is optional; command-line flags win over file values, and
//! file values win over the built-in defaults (alethic reading, equivalence
//! entry rule).
//!
//! # Example
//!
//! ```toml
//! [parser]
//! flavor = "deontic"
//! entry = "implication"
//! ```

use std::path::{Path, PathBuf};

use qml_core::{EntryRule, ModalFlavor};
use serde::Deserialize;

// ── Types ─────────────────────────────────────────────────────────────────────

/// Errors raised by the CLI itself, outside of formula parsing.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("could not read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not parse '{}': {source}", path.display())]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub parser: ParserSection,
}

/// `[parser]` section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParserSection {
    pub flavor: Option<ModalFlavor>,
    pub entry: Option<EntryRule>,
}

/// Parser settings after flags, file and defaults have been merged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    pub flavor: ModalFlavor,
    pub entry: EntryRule,
}

// ── Functions ─────────────────────────────────────────────────────────────────

pub fn read_config(path: &Path) -> Result<Config, CliError> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| CliError::Config {
        path: path.to_path_buf(),
        source,
    })
}

pub fn resolve(
    config: &Config,
    flavor: Option<ModalFlavor>,
    entry: Option<EntryRule>,
) -> Settings {
    Settings {
        flavor: flavor.or(config.parser.flavor).unwrap_or_default(),
        entry: entry.or(config.parser.entry).unwrap_or_default(),
    }
}
