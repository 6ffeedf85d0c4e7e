use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CssGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Required input not found: {}", path.display())]
    MissingInput { path: PathBuf },

    #[error("Failed to read file: {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid regular expression: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl CssGuardError {
    /// Short category label used as the headline of stderr error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Configuration error",
            Self::MissingInput { .. } => "Missing input",
            Self::FileRead { .. } => "File read error",
            Self::FileWrite { .. } => "File write error",
            Self::InvalidPattern { .. } => "Invalid pattern",
            Self::InvalidGlob { .. } => "Invalid glob",
            Self::Io(_) => "IO error",
            Self::TomlParse(_) | Self::TomlSerialize(_) => "TOML error",
            Self::JsonSerialize(_) => "JSON error",
        }
    }

    /// Message without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) => msg.clone(),
            Self::MissingInput { path } => format!("'{}' does not exist", path.display()),
            Self::FileRead { path, .. } => format!("cannot read '{}'", path.display()),
            Self::FileWrite { path, .. } => format!("cannot write '{}'", path.display()),
            Self::InvalidPattern { pattern, .. } | Self::InvalidGlob { pattern, .. } => {
                format!("'{pattern}'")
            }
            Self::Io(e) => e.to_string(),
            Self::TomlParse(e) => e.to_string(),
            Self::TomlSerialize(e) => e.to_string(),
            Self::JsonSerialize(e) => e.to_string(),
        }
    }

    /// Underlying cause, when one exists.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileRead { source, .. } | Self::FileWrite { source, .. } => {
                Some(source.to_string())
            }
            Self::InvalidPattern { source, .. } => Some(source.to_string()),
            Self::InvalidGlob { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }

    /// Display text followed by the underlying cause, on one line.
    #[must_use]
    pub fn describe(&self) -> String {
        match self.detail() {
            Some(detail) => format!("{self}: {detail}"),
            None => self.to_string(),
        }
    }

    /// Actionable hint for the user.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::MissingInput { .. } => {
                Some("Check `rules.css_root` in .css-guard.toml or pass --css-root")
            }
            Self::TomlParse(_) | Self::Config(_) => {
                Some("Run `css-guard config validate` to inspect the configuration")
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CssGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
