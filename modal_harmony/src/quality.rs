// Chord quality of a diatonic triad.

use crate::error::{Result, TheoryError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Quality of the triad built on a scale degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Major,
    Minor,
    Diminished,
}

impl Quality {
    pub const ALL: [Quality; 3] = [Quality::Major, Quality::Minor, Quality::Diminished];

    pub fn name(self) -> &'static str {
        match self {
            Quality::Major => "major",
            Quality::Minor => "minor",
            Quality::Diminished => "diminished",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Quality {
    type Err = TheoryError;

    /// Accepts the full names in any case, plus `M`, `m` and `dim`.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "M" => return Ok(Quality::Major),
            "m" => return Ok(Quality::Minor),
            _ => {}
        }
        match s.to_ascii_lowercase().as_str() {
            "major" | "maj" => Ok(Quality::Major),
            "minor" | "min" => Ok(Quality::Minor),
            "diminished" | "dim" => Ok(Quality::Diminished),
            _ => Err(TheoryError::InvalidArgument(format!(
                "chord quality must be one of major, minor, diminished (got {s:?})"
            ))),
        }
    }
}
