//! The three-color vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the three colors a vertex can carry.
///
/// Declaration order is the canonical order used whenever a vertex's two
/// alternative colors have to be enumerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Blue,
}

/// Returned when a token is not one of `red`, `green`, `blue`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color token {0:?}")]
pub struct ParseColorError(pub String);

impl Color {
    /// All colors in canonical order.
    pub const ALL: [Self; 3] = [Self::Red, Self::Green, Self::Blue];

    /// Returns the textual token for this color.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }

    /// Returns the two colors different from `self`, in canonical order.
    #[must_use]
    pub const fn others(&self) -> [Self; 2] {
        match self {
            Self::Red => [Self::Green, Self::Blue],
            Self::Green => [Self::Red, Self::Blue],
            Self::Blue => [Self::Red, Self::Green],
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "red" => Ok(Self::Red),
            "green" => Ok(Self::Green),
            "blue" => Ok(Self::Blue),
            other => Err(ParseColorError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_others_excludes_self() {
        for color in Color::ALL {
            let [a, b] = color.others();
            assert_ne!(a, color);
            assert_ne!(b, color);
            assert_ne!(a, b);
            assert!(a < b);
        }
    }

    #[test]
    fn test_parse_tokens() {
        assert_eq!("red".parse::<Color>(), Ok(Color::Red));
        assert_eq!(" green ".parse::<Color>(), Ok(Color::Green));
        assert_eq!("blue".parse::<Color>(), Ok(Color::Blue));
        assert_eq!(
            "purple".parse::<Color>(),
            Err(ParseColorError("purple".to_string()))
        );
        assert!("Red".parse::<Color>().is_err());
    }

    #[test]
    fn test_display_matches_token() {
        for color in Color::ALL {
            assert_eq!(color.to_string().parse::<Color>(), Ok(color));
        }
    }
}
