use serde::{Deserialize, Serialize};
use std::fmt;

/// Quarterly release window used by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
    #[serde(other)]
    Unknown,
}

impl Season {
    /// Get season from string (case insensitive)
    pub fn from_str_loose(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "winter" => Self::Winter,
            "spring" => Self::Spring,
            "summer" => Self::Summer,
            "fall" | "autumn" => Self::Fall,
            _ => Self::Unknown,
        }
    }

    /// Get season display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Winter => "Winter",
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Fall => "Fall",
            Self::Unknown => "Unknown",
        }
    }

    /// GraphQL enum value
    pub fn as_graphql(&self) -> Option<&'static str> {
        match self {
            Self::Winter => Some("WINTER"),
            Self::Spring => Some("SPRING"),
            Self::Summer => Some("SUMMER"),
            Self::Fall => Some("FALL"),
            Self::Unknown => None,
        }
    }

    /// Get season from month (1-12); anything else is `Unknown`
    pub fn from_month(month: u32) -> Self {
        match month {
            12 | 1 | 2 => Self::Winter,
            3..=5 => Self::Spring,
            6..=8 => Self::Summer,
            9..=11 => Self::Fall,
            _ => Self::Unknown,
        }
    }

    /// Following season in the cycle. `Unknown` has no successor.
    pub fn next(&self) -> Self {
        match self {
            Self::Winter => Self::Spring,
            Self::Spring => Self::Summer,
            Self::Summer => Self::Fall,
            Self::Fall => Self::Winter,
            Self::Unknown => Self::Unknown,
        }
    }

    /// Get all seasons in chronological order
    pub fn all() -> [Self; 4] {
        [Self::Winter, Self::Spring, Self::Summer, Self::Fall]
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_month_quarters() {
        let expected = [
            (1, Season::Winter),
            (2, Season::Winter),
            (3, Season::Spring),
            (5, Season::Spring),
            (6, Season::Summer),
            (8, Season::Summer),
            (9, Season::Fall),
            (11, Season::Fall),
            (12, Season::Winter),
        ];
        for (month, season) in expected {
            assert_eq!(Season::from_month(month), season, "month {}", month);
        }
    }

    #[test]
    fn test_invalid_month_is_unknown() {
        assert_eq!(Season::from_month(0), Season::Unknown);
        assert_eq!(Season::from_month(13), Season::Unknown);
        assert_eq!(Season::Unknown.next(), Season::Unknown);
        assert_eq!(Season::Unknown.as_graphql(), None);
    }

    #[test]
    fn test_next_cycles_through_all() {
        let mut season = Season::Winter;
        for expected in [Season::Spring, Season::Summer, Season::Fall, Season::Winter] {
            season = season.next();
            assert_eq!(season, expected);
        }
    }

    #[test]
    fn test_loose_parsing_and_serde() {
        assert_eq!(Season::from_str_loose("Autumn"), Season::Fall);
        assert_eq!(Season::from_str_loose(" SPRING "), Season::Spring);
        assert_eq!(Season::from_str_loose("monsoon"), Season::Unknown);

        let json = serde_json::to_string(&Season::Summer).unwrap();
        assert_eq!(json, "\"SUMMER\"");
        let parsed: Season = serde_json::from_str("\"RAINY\"").unwrap();
        assert_eq!(parsed, Season::Unknown);
    }
}
