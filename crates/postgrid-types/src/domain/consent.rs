use serde::{Deserialize, Serialize};
use std::fmt;

/// Visitor's cookie preference.
///
/// `Unset` is the absence of a stored choice and is never persisted itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsentFlag {
    #[default]
    Unset,
    Accepted,
    Declined,
}

impl ConsentFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsentFlag::Unset => "unset",
            ConsentFlag::Accepted => "accepted",
            ConsentFlag::Declined => "declined",
        }
    }

    /// Interpret a stored value; anything unrecognised counts as no choice
    pub fn from_stored(value: &str) -> Self {
        match value {
            "accepted" => ConsentFlag::Accepted,
            "declined" => ConsentFlag::Declined,
            _ => ConsentFlag::Unset,
        }
    }

    /// Whether the consent banner should still be offered
    pub fn needs_prompt(&self) -> bool {
        matches!(self, ConsentFlag::Unset)
    }
}

impl fmt::Display for ConsentFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_stored() {
        assert_eq!(ConsentFlag::from_stored("accepted"), ConsentFlag::Accepted);
        assert_eq!(ConsentFlag::from_stored("declined"), ConsentFlag::Declined);
        assert_eq!(ConsentFlag::from_stored("maybe"), ConsentFlag::Unset);
        assert_eq!(ConsentFlag::from_stored(""), ConsentFlag::Unset);
    }

    #[test]
    fn test_only_unset_needs_prompt() {
        assert!(ConsentFlag::Unset.needs_prompt());
        assert!(!ConsentFlag::Accepted.needs_prompt());
        assert!(!ConsentFlag::Declined.needs_prompt());
    }
}
