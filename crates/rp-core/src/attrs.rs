//! Categorical user attributes used by the area filter.
//!
//! Labels match the strings stored in user profiles (`"Homme"`, `"Femme"`,
//! `"N1"` … `"NC"`).  Parsing is case-insensitive; an unrecognised label is
//! an error here and an unset attribute further up the stack.

use std::str::FromStr;

use crate::CoreError;

// ── Gender ────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Profile label.
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male   => "Homme",
            Gender::Female => "Femme",
        }
    }
}

impl FromStr for Gender {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "homme" | "male" | "m" => Ok(Gender::Male),
            "femme" | "female" | "f" => Ok(Gender::Female),
            _ => Err(CoreError::UnknownLabel { kind: "gender", label: s.to_owned() }),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Tier ──────────────────────────────────────────────────────────────────────

/// Competitive ranking ladder, strongest first.
///
/// The derived `Ord` follows declaration order, so `Tier::N1 < Tier::NC`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tier {
    N1,
    N2,
    N3,
    R4,
    R5,
    R6,
    D7,
    D8,
    D9,
    P10,
    P11,
    P12,
    /// Not ranked.
    NC,
}

impl Tier {
    /// Every tier in ladder order.
    pub const ALL: [Tier; 13] = [
        Tier::N1, Tier::N2, Tier::N3,
        Tier::R4, Tier::R5, Tier::R6,
        Tier::D7, Tier::D8, Tier::D9,
        Tier::P10, Tier::P11, Tier::P12,
        Tier::NC,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::N1  => "N1",
            Tier::N2  => "N2",
            Tier::N3  => "N3",
            Tier::R4  => "R4",
            Tier::R5  => "R5",
            Tier::R6  => "R6",
            Tier::D7  => "D7",
            Tier::D8  => "D8",
            Tier::D9  => "D9",
            Tier::P10 => "P10",
            Tier::P11 => "P11",
            Tier::P12 => "P12",
            Tier::NC  => "NC",
        }
    }
}

impl FromStr for Tier {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        Tier::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(label))
            .ok_or_else(|| CoreError::UnknownLabel { kind: "tier", label: s.to_owned() })
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
