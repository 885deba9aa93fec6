//! The ordered fill table matched positionally against color atoms.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The stock palette, in assignment order.
pub const DEFAULT_FILLS: [&str; 4] = ["#FF0000", "#FFFF00", "#00FF00", "#0000FF"];

/// An ordered fill table; the i-th color atom receives the i-th fill.
///
/// Fills are opaque strings passed through to the SVG `fill` attribute, so
/// anything SVG accepts (`#RRGGBB`, named colors, `rgb(..)`) works.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(Vec<String>);

impl Default for Palette {
    fn default() -> Self {
        Self(DEFAULT_FILLS.iter().map(|s| s.to_string()).collect())
    }
}

impl Palette {
    pub fn new(fills: Vec<String>) -> Self {
        Self(fills)
    }

    /// The fill at `index`, if the palette is deep enough.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Fills in assignment order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for Palette {
    type Err = CoreError;

    /// Parse a comma-separated fill list, e.g. `"#FF0000,#00FF00,orange"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fills: Vec<String> = s
            .split(',')
            .map(str::trim)
            .filter(|fill| !fill.is_empty())
            .map(str::to_string)
            .collect();
        if fills.is_empty() {
            return Err(CoreError::EmptyPalette);
        }
        Ok(Self(fills))
    }
}
