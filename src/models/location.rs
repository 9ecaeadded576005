use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Region a shopping search is scoped to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Location {
    #[default]
    Australia,
    #[serde(rename = "New Zealand")]
    #[value(name = "new-zealand")]
    NewZealand,
}

impl Location {
    pub const ALL: [Location; 2] = [Location::Australia, Location::NewZealand];

    /// Regional Google domain passed to the shopping search
    pub fn google_domain(&self) -> &'static str {
        match self {
            Location::Australia => "google.com.au",
            Location::NewZealand => "google.co.nz",
        }
    }

    /// Two-letter country code passed as `gl`
    pub fn country_code(&self) -> &'static str {
        match self {
            Location::Australia => "au",
            Location::NewZealand => "nz",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Australia => write!(f, "Australia"),
            Location::NewZealand => write!(f, "New Zealand"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_australia_domain() {
        let location = Location::Australia;
        assert_eq!(location.google_domain(), "google.com.au");
        assert_eq!(location.country_code(), "au");
        assert_eq!(location.to_string(), "Australia");
    }

    #[test]
    fn test_new_zealand_domain() {
        let location = Location::NewZealand;
        assert_eq!(location.google_domain(), "google.co.nz");
        assert_eq!(location.country_code(), "nz");
        assert_eq!(location.to_string(), "New Zealand");
    }

    #[test]
    fn test_default_is_australia() {
        assert_eq!(Location::default(), Location::Australia);
    }

    #[test]
    fn test_serde_uses_display_names() {
        let json = serde_json::to_string(&Location::NewZealand).unwrap();
        assert_eq!(json, "\"New Zealand\"");
        let parsed: Location = serde_json::from_str("\"Australia\"").unwrap();
        assert_eq!(parsed, Location::Australia);
    }
}
