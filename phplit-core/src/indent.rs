//! Indentation unit for generated PHP code.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

const SPACES: &str = "        ";

/// Width a tab is assumed to occupy when measuring line length.
pub const TAB_WIDTH: usize = 4;

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "IndentRepr")]
pub enum Indent {
    /// Spaces with the specified width (1 to 8).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation (PSR-12).
    pub const PSR: Self = Self::Spaces(4);

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(n @ 1..=8) => &SPACES[..usize::from(*n)],
            // Fallback to 4 whitespaces
            Self::Spaces(_) => &SPACES[..4],
            Self::Tab => "\t",
        }
    }

    /// Number of columns one indent level is counted as when wrapping.
    pub fn width(&self) -> usize {
        match self {
            Self::Tab => TAB_WIDTH,
            Self::Spaces(_) => self.as_str().len(),
        }
    }

    /// Indentation for `level` nested levels.
    pub fn repeat(&self, level: usize) -> String {
        self.as_str().repeat(level)
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::Tab
    }
}

impl fmt::Display for Indent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tab => write!(f, "tab"),
            Self::Spaces(n) => write!(f, "{}", n),
        }
    }
}

impl FromStr for Indent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "tab" | "tabs" | "\t" => Ok(Self::Tab),
            other => {
                let width: u8 = other
                    .parse()
                    .map_err(|_| format!("invalid indentation '{}': expected 'tab' or 1-8", s))?;
                Self::try_from(width)
            }
        }
    }
}

impl TryFrom<u8> for Indent {
    type Error = String;

    fn try_from(width: u8) -> Result<Self, Self::Error> {
        if (1..=8).contains(&width) {
            Ok(Self::Spaces(width))
        } else {
            Err(format!(
                "invalid indentation width {}: expected 1 to 8 spaces",
                width
            ))
        }
    }
}

/// Accepts `indentation = "tab"`, `indentation = "4"` or `indentation = 4`.
#[derive(Deserialize)]
#[serde(untagged)]
enum IndentRepr {
    Width(u8),
    Name(String),
}

impl TryFrom<IndentRepr> for Indent {
    type Error = String;

    fn try_from(repr: IndentRepr) -> Result<Self, Self::Error> {
        match repr {
            IndentRepr::Width(width) => Self::try_from(width),
            IndentRepr::Name(name) => name.parse(),
        }
    }
}

impl Serialize for Indent {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Tab => serializer.serialize_str("tab"),
            Self::Spaces(n) => serializer.serialize_u8(*n),
        }
    }
}
