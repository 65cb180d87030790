//! The closed set of responsive breakpoints.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A responsive-width qualifier.
///
/// Breakpoints are mobile-first: a rule qualified with [`Breakpoint::Laptop`]
/// applies from laptop width upwards. A rule without a breakpoint applies at
/// every width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    /// Portrait phones (extra small, the base width).
    Phone,
    /// Landscape phones and small tablets (576px and up).
    Tablet,
    /// Tablets and small laptops (768px and up).
    Laptop,
    /// Laptops and desktops (992px and up).
    Desktop,
    /// Large desktops (1200px and up).
    Widescreen,
    /// Extra large screens (1400px and up).
    Ultrawide,
}

impl Breakpoint {
    /// All breakpoints in ascending width order.
    pub const ALL: [Breakpoint; 6] = [
        Breakpoint::Phone,
        Breakpoint::Tablet,
        Breakpoint::Laptop,
        Breakpoint::Desktop,
        Breakpoint::Widescreen,
        Breakpoint::Ultrawide,
    ];

    /// Returns the lowercase name used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            Breakpoint::Phone => "phone",
            Breakpoint::Tablet => "tablet",
            Breakpoint::Laptop => "laptop",
            Breakpoint::Desktop => "desktop",
            Breakpoint::Widescreen => "widescreen",
            Breakpoint::Ultrawide => "ultrawide",
        }
    }

    /// Returns this breakpoint's token in the current process-wide table.
    pub fn token(self) -> String {
        super::breakpoint_tokens().token(self).to_string()
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Breakpoint {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Breakpoint::ALL
            .into_iter()
            .find(|bp| bp.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ConfigError::UnknownBreakpoint(s.to_string()))
    }
}
