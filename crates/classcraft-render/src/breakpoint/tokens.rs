//! The breakpoint → token table and its file formats.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::Breakpoint;
use crate::error::{ConfigError, Result};

/// File extensions recognized by [`BreakpointTokens::from_file`].
pub const CONFIG_EXTENSIONS: &[&str] = &[".yaml", ".yml", ".json"];

/// Mapping from each [`Breakpoint`] to the token spliced into class names.
///
/// # Example
///
/// ```rust
/// use classcraft_render::{Breakpoint, BreakpointTokens};
///
/// let tokens = BreakpointTokens::default().with(Breakpoint::Phone, "xs");
/// assert_eq!(tokens.token(Breakpoint::Phone), "xs");
/// assert_eq!(tokens.token(Breakpoint::Tablet), "sm");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BreakpointTokens {
    phone: String,
    tablet: String,
    laptop: String,
    desktop: String,
    widescreen: String,
    ultrawide: String,
}

impl Default for BreakpointTokens {
    fn default() -> Self {
        Self::bootstrap()
    }
}

impl BreakpointTokens {
    /// The Bootstrap 5 infixes: none, `sm`, `md`, `lg`, `xl`, `xxl`.
    pub fn bootstrap() -> Self {
        Self {
            phone: String::new(),
            tablet: "sm".to_string(),
            laptop: "md".to_string(),
            desktop: "lg".to_string(),
            widescreen: "xl".to_string(),
            ultrawide: "xxl".to_string(),
        }
    }

    /// Returns the token for a breakpoint. May be empty.
    pub fn token(&self, breakpoint: Breakpoint) -> &str {
        match breakpoint {
            Breakpoint::Phone => &self.phone,
            Breakpoint::Tablet => &self.tablet,
            Breakpoint::Laptop => &self.laptop,
            Breakpoint::Desktop => &self.desktop,
            Breakpoint::Widescreen => &self.widescreen,
            Breakpoint::Ultrawide => &self.ultrawide,
        }
    }

    /// Replaces one token, returning `self` for chaining.
    ///
    /// The token is not validated here; [`validate`](Self::validate) runs when
    /// the table is installed process-wide.
    pub fn with(mut self, breakpoint: Breakpoint, token: impl Into<String>) -> Self {
        *self.slot(breakpoint) = token.into();
        self
    }

    fn slot(&mut self, breakpoint: Breakpoint) -> &mut String {
        match breakpoint {
            Breakpoint::Phone => &mut self.phone,
            Breakpoint::Tablet => &mut self.tablet,
            Breakpoint::Laptop => &mut self.laptop,
            Breakpoint::Desktop => &mut self.desktop,
            Breakpoint::Widescreen => &mut self.widescreen,
            Breakpoint::Ultrawide => &mut self.ultrawide,
        }
    }

    /// Iterates `(breakpoint, token)` pairs in ascending width order.
    pub fn iter(&self) -> impl Iterator<Item = (Breakpoint, &str)> + '_ {
        Breakpoint::ALL.into_iter().map(|bp| (bp, self.token(bp)))
    }

    /// Checks that every token can be spliced into a class name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidToken`] for the first token that contains
    /// whitespace or starts or ends with `-`.
    pub fn validate(&self) -> Result<()> {
        for (breakpoint, token) in self.iter() {
            let reason = if token.chars().any(char::is_whitespace) {
                Some("contains whitespace")
            } else if token.starts_with('-') || token.ends_with('-') {
                Some("starts or ends with '-'")
            } else {
                None
            };

            if let Some(reason) = reason {
                return Err(ConfigError::InvalidToken {
                    breakpoint,
                    token: token.to_string(),
                    reason,
                });
            }
        }
        Ok(())
    }

    /// Parses a table from YAML. Missing keys keep their default token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed YAML or unknown keys, and
    /// [`ConfigError::InvalidToken`] if a token fails validation.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let tokens: Self = serde_yaml::from_str(content).map_err(|e| ConfigError::Parse {
            path: None,
            message: e.to_string(),
        })?;
        tokens.validate()?;
        Ok(tokens)
    }

    /// Parses a table from JSON. Missing keys keep their default token.
    ///
    /// # Errors
    ///
    /// Same as [`from_yaml`](Self::from_yaml).
    pub fn from_json(content: &str) -> Result<Self> {
        let tokens: Self = serde_json::from_str(content).map_err(|e| ConfigError::Parse {
            path: None,
            message: e.to_string(),
        })?;
        tokens.validate()?;
        Ok(tokens)
    }

    /// Loads a table from a `.yaml`, `.yml` or `.json` file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedFormat`] for other extensions,
    /// [`ConfigError::Load`] if the file cannot be read, and the parse and
    /// validation errors of [`from_yaml`](Self::from_yaml).
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let tokens = BreakpointTokens::from_file("./config/breakpoints.yaml")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let is_json = match extension.as_deref() {
            Some("yaml") | Some("yml") => false,
            Some("json") => true,
            _ => {
                return Err(ConfigError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Load {
            path: path.to_path_buf(),
            source,
        })?;

        let parsed = if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        };

        parsed.map_err(|err| match err {
            ConfigError::Parse { message, .. } => ConfigError::Parse {
                path: Some(path.to_path_buf()),
                message,
            },
            other => other,
        })
    }

    /// Serializes the table to YAML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::Parse {
            path: None,
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bootstrap_tokens() {
        let tokens = BreakpointTokens::bootstrap();
        let collected: Vec<&str> = tokens.iter().map(|(_, t)| t).collect();
        assert_eq!(collected, vec!["", "sm", "md", "lg", "xl", "xxl"]);
    }

    #[test]
    fn with_replaces_single_token() {
        let tokens = BreakpointTokens::default().with(Breakpoint::Ultrawide, "2xl");
        assert_eq!(tokens.token(Breakpoint::Ultrawide), "2xl");
        assert_eq!(tokens.token(Breakpoint::Widescreen), "xl");
    }

    #[test]
    fn yaml_partial_keeps_defaults() {
        let tokens = BreakpointTokens::from_yaml("phone: xs\n").unwrap();
        assert_eq!(tokens.token(Breakpoint::Phone), "xs");
        assert_eq!(tokens.token(Breakpoint::Tablet), "sm");
    }

    #[test]
    fn yaml_rejects_unknown_keys() {
        let err = BreakpointTokens::from_yaml("watch: w\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { path: None, .. }));
    }

    #[test]
    fn json_partial_keeps_defaults() {
        let tokens = BreakpointTokens::from_json(r#"{"desktop": "desk"}"#).unwrap();
        assert_eq!(tokens.token(Breakpoint::Desktop), "desk");
        assert_eq!(tokens.token(Breakpoint::Laptop), "md");
    }

    #[test]
    fn validate_rejects_whitespace() {
        let err = BreakpointTokens::default()
            .with(Breakpoint::Laptop, "m d")
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidToken { breakpoint: Breakpoint::Laptop, .. }
        ));
    }

    #[test]
    fn validate_rejects_dangling_hyphen() {
        let err = BreakpointTokens::from_yaml("tablet: sm-\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidToken { breakpoint: Breakpoint::Tablet, .. }
        ));
    }

    #[test]
    fn validate_accepts_empty_tokens() {
        let tokens = BreakpointTokens::default().with(Breakpoint::Tablet, "");
        assert!(tokens.validate().is_ok());
    }

    #[test]
    fn yaml_round_trip() {
        let tokens = BreakpointTokens::default().with(Breakpoint::Phone, "xs");
        let yaml = tokens.to_yaml().unwrap();
        assert_eq!(BreakpointTokens::from_yaml(&yaml).unwrap(), tokens);
    }
}
