use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::HolidayError;

/// French school holiday zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchoolZone {
    A,
    B,
    C,
}

impl SchoolZone {
    pub const ALL: [SchoolZone; 3] = [SchoolZone::A, SchoolZone::B, SchoolZone::C];

    /// Single-letter identifier.
    pub fn letter(self) -> &'static str {
        match self {
            SchoolZone::A => "A",
            SchoolZone::B => "B",
            SchoolZone::C => "C",
        }
    }

    /// Name used by the French open-data calendar ("Zone A").
    pub fn dataset_name(self) -> &'static str {
        match self {
            SchoolZone::A => "Zone A",
            SchoolZone::B => "Zone B",
            SchoolZone::C => "Zone C",
        }
    }
}

impl fmt::Display for SchoolZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

impl FromStr for SchoolZone {
    type Err = HolidayError;

    /// Accepts `C`, `c`, `zone c` and `Zone-C`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize(s);
        let key = key.strip_prefix("zone").unwrap_or(&key);
        SchoolZone::ALL
            .into_iter()
            .find(|zone| zone.letter().eq_ignore_ascii_case(key))
            .ok_or_else(|| HolidayError::InvalidZone {
                kind: "school",
                value: s.to_string(),
                expected: expected_list(SchoolZone::ALL.iter().map(|z| z.letter())),
            })
    }
}

/// French bank holiday zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BankZone {
    Metropole,
    AlsaceMoselle,
    Guadeloupe,
    Guyane,
    Martinique,
    Mayotte,
    LaReunion,
    SaintBarthelemy,
    SaintMartin,
}

impl BankZone {
    pub const ALL: [BankZone; 9] = [
        BankZone::Metropole,
        BankZone::AlsaceMoselle,
        BankZone::Guadeloupe,
        BankZone::Guyane,
        BankZone::Martinique,
        BankZone::Mayotte,
        BankZone::LaReunion,
        BankZone::SaintBarthelemy,
        BankZone::SaintMartin,
    ];

    /// Official French name of the zone.
    pub fn name(self) -> &'static str {
        match self {
            BankZone::Metropole => "Métropole",
            BankZone::AlsaceMoselle => "Alsace-Moselle",
            BankZone::Guadeloupe => "Guadeloupe",
            BankZone::Guyane => "Guyane",
            BankZone::Martinique => "Martinique",
            BankZone::Mayotte => "Mayotte",
            BankZone::LaReunion => "La Réunion",
            BankZone::SaintBarthelemy => "Saint-Barthélémy",
            BankZone::SaintMartin => "Saint-Martin",
        }
    }
}

impl fmt::Display for BankZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BankZone {
    type Err = HolidayError;

    /// Matches the official name ignoring case, accents, spaces and dashes,
    /// so `metropole`, `Métropole` and `alsace moselle` are all accepted.
    /// `Réunion` is accepted without its article.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize(s);
        BankZone::ALL
            .into_iter()
            .find(|zone| {
                let name = normalize(zone.name());
                name == key || name.strip_prefix("la") == Some(key.as_str())
            })
            .ok_or_else(|| HolidayError::InvalidZone {
                kind: "bank holiday",
                value: s.to_string(),
                expected: expected_list(BankZone::ALL.iter().map(|z| z.name())),
            })
    }
}

fn expected_list<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

/// Lowercases, folds French accents and drops separators.
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_' | '\'' | '.'))
        .map(|c| match c.to_lowercase().next().unwrap_or(c) {
            'à' | 'â' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'î' | 'ï' => 'i',
            'ô' | 'ö' => 'o',
            'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_school_zone() {
        assert_eq!("A".parse::<SchoolZone>(), Ok(SchoolZone::A));
        assert_eq!("b".parse::<SchoolZone>(), Ok(SchoolZone::B));
        assert_eq!("Zone C".parse::<SchoolZone>(), Ok(SchoolZone::C));
        assert_eq!("zone-c".parse::<SchoolZone>(), Ok(SchoolZone::C));
    }

    #[test]
    fn test_parse_school_zone_rejects_unknown() {
        let error = "D".parse::<SchoolZone>().unwrap_err();
        assert_eq!(
            error,
            HolidayError::InvalidZone {
                kind: "school",
                value: "D".to_string(),
                expected: "A, B, C".to_string(),
            }
        );
        assert!("".parse::<SchoolZone>().is_err());
        assert!("zone".parse::<SchoolZone>().is_err());
    }

    #[test]
    fn test_parse_bank_zone() {
        assert_eq!("Métropole".parse::<BankZone>(), Ok(BankZone::Metropole));
        assert_eq!("metropole".parse::<BankZone>(), Ok(BankZone::Metropole));
        assert_eq!(
            "Alsace Moselle".parse::<BankZone>(),
            Ok(BankZone::AlsaceMoselle)
        );
        assert_eq!("la-reunion".parse::<BankZone>(), Ok(BankZone::LaReunion));
        assert_eq!("Réunion".parse::<BankZone>(), Ok(BankZone::LaReunion));
        assert_eq!(
            "saint barthelemy".parse::<BankZone>(),
            Ok(BankZone::SaintBarthelemy)
        );
    }

    #[test]
    fn test_parse_bank_zone_rejects_unknown() {
        assert!(matches!(
            "Atlantis".parse::<BankZone>(),
            Err(HolidayError::InvalidZone { kind: "bank holiday", .. })
        ));
    }

    #[test]
    fn test_zone_names_round_trip() {
        for zone in BankZone::ALL {
            assert_eq!(zone.name().parse::<BankZone>(), Ok(zone));
        }
        for zone in SchoolZone::ALL {
            assert_eq!(zone.dataset_name().parse::<SchoolZone>(), Ok(zone));
        }
    }
}
