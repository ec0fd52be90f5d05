//! Stereo layout and eye selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::StereoError;

/// How the left and right views are packed into one source frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StereoFormat {
    /// One view; both eyes sample the full frame.
    #[default]
    Mono,
    /// Left view in the left half, right view in the right half.
    #[serde(alias = "sbs")]
    SideBySide,
    /// Views stacked vertically; the left eye samples the lower half of
    /// texture `v`, the right eye the upper half.
    #[serde(alias = "tb", alias = "over-under")]
    TopBottom,
}

impl StereoFormat {
    pub const ALL: [StereoFormat; 3] = [
        StereoFormat::Mono,
        StereoFormat::SideBySide,
        StereoFormat::TopBottom,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StereoFormat::Mono => "Mono",
            StereoFormat::SideBySide => "Side by Side",
            StereoFormat::TopBottom => "Top / Bottom",
        }
    }
}

impl fmt::Display for StereoFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StereoFormat::Mono => write!(f, "mono"),
            StereoFormat::SideBySide => write!(f, "side-by-side"),
            StereoFormat::TopBottom => write!(f, "top-bottom"),
        }
    }
}

impl FromStr for StereoFormat {
    type Err = StereoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mono" => Ok(StereoFormat::Mono),
            "sbs" | "side-by-side" | "side_by_side" => Ok(StereoFormat::SideBySide),
            "tb" | "top-bottom" | "top_bottom" | "over-under" => Ok(StereoFormat::TopBottom),
            other => Err(StereoError::InvalidArgument(format!(
                "unsupported stereo format '{other}'"
            ))),
        }
    }
}

impl TryFrom<u8> for StereoFormat {
    type Error = StereoError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        StereoFormat::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| {
                StereoError::InvalidArgument(format!("unsupported stereo format code {value}"))
            })
    }
}

/// One of the viewer's two eyes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Eye {
    #[default]
    Left,
    Right,
}

impl Eye {
    pub const BOTH: [Eye; 2] = [Eye::Left, Eye::Right];

    pub fn index(self) -> usize {
        match self {
            Eye::Left => 0,
            Eye::Right => 1,
        }
    }
}

impl fmt::Display for Eye {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Eye::Left => write!(f, "left"),
            Eye::Right => write!(f, "right"),
        }
    }
}
