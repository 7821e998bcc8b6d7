use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A day of the week. Declaration order is calendar order, starting Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// Identifier used as the JSON key.
    pub fn as_str(self) -> &'static str {
        match self {
            Day::Monday => "monday",
            Day::Tuesday => "tuesday",
            Day::Wednesday => "wednesday",
            Day::Thursday => "thursday",
            Day::Friday => "friday",
            Day::Saturday => "saturday",
            Day::Sunday => "sunday",
        }
    }

    /// Capitalised name for headings.
    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Day {
    type Err = CoreError;

    /// Accepts the identifier or its three-letter abbreviation, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Day::ALL
            .into_iter()
            .find(|d| d.as_str() == lower || (lower.len() == 3 && d.as_str().starts_with(&lower)))
            .ok_or_else(|| CoreError::invalid_key("day", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_order_is_calendar_order() {
        assert_eq!(Day::ALL.first(), Some(&Day::Monday));
        assert_eq!(Day::ALL.last(), Some(&Day::Sunday));
        assert!(Day::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_day_parse() {
        assert_eq!("monday".parse::<Day>().unwrap(), Day::Monday);
        assert_eq!("Thursday".parse::<Day>().unwrap(), Day::Thursday);
        assert_eq!("SUN".parse::<Day>().unwrap(), Day::Sunday);
        assert_eq!("wed".parse::<Day>().unwrap(), Day::Wednesday);
    }

    #[test]
    fn test_day_parse_rejects_unknown() {
        for bad in ["", "mo", "funday", "mondays", "monday/breakfast"] {
            let err = bad.parse::<Day>().unwrap_err();
            assert!(
                matches!(err, CoreError::InvalidKey { kind: "day", .. }),
                "{bad:?} gave {err}"
            );
        }
    }

    #[test]
    fn test_day_serde_uses_lowercase_identifier() {
        assert_eq!(serde_json::to_string(&Day::Saturday).unwrap(), "\"saturday\"");
        let parsed: Day = serde_json::from_str("\"friday\"").unwrap();
        assert_eq!(parsed, Day::Friday);
    }
}
