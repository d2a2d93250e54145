use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Congressional chamber.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chamber {
    /// US House of Representatives.
    #[serde(rename = "house")]
    House,

    /// US Senate.
    #[serde(rename = "senate")]
    Senate,
}

impl Chamber {
    /// The lowercase form used in API paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            Chamber::House => "house",
            Chamber::Senate => "senate",
        }
    }
}

impl std::fmt::Display for Chamber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Chamber {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("house") {
            Ok(Chamber::House)
        } else if trimmed.eq_ignore_ascii_case("senate") {
            Ok(Chamber::Senate)
        } else {
            Err(Error::InvalidChamber(s.to_string()))
        }
    }
}

impl TryFrom<&str> for Chamber {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("house".parse::<Chamber>().unwrap(), Chamber::House);
        assert_eq!("HOUSE".parse::<Chamber>().unwrap(), Chamber::House);
        assert_eq!("Senate".parse::<Chamber>().unwrap(), Chamber::Senate);
        assert_eq!(" senate ".parse::<Chamber>().unwrap(), Chamber::Senate);
    }

    #[test]
    fn rejects_anything_else() {
        for input in ["", "joint", "houses", "sen", "congress", "h0use"] {
            let err = input.parse::<Chamber>().unwrap_err();
            assert!(matches!(err, Error::InvalidChamber(_)), "{input:?}");
            assert!(err.is_validation());
        }
    }

    #[test]
    fn displays_lowercase() {
        assert_eq!(Chamber::House.to_string(), "house");
        assert_eq!(Chamber::Senate.to_string(), "senate");
    }
}
