//! Shift and rotation pattern models.
//!
//! This module defines the closed [`Shift`] enumeration and the
//! [`RotationPattern`] that repeats those shifts day after day.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A named work category for one calendar day.
///
/// `Unassigned` is a sentinel produced only when no rotation applies to a
/// date. It can never be part of a [`RotationPattern`] or stored as an override.
///
/// # Example
///
/// ```
/// use shift_rotation_engine::models::Shift;
///
/// let shift: Shift = "Mañana".parse().unwrap();
/// assert_eq!(shift, Shift::Morning);
/// assert!(shift.is_assignable());
/// assert!(!Shift::Unassigned.is_assignable());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shift {
    /// Morning shift.
    #[serde(alias = "manana", alias = "mañana", alias = "Mañana", alias = "Manana")]
    Morning,
    /// Afternoon shift.
    #[serde(alias = "tarde", alias = "Tarde")]
    Afternoon,
    /// Night shift.
    #[serde(alias = "noche", alias = "Noche")]
    Night,
    /// Day off.
    #[serde(alias = "libre", alias = "Libre", alias = "free")]
    Off,
    /// No rotation applies to the date.
    Unassigned,
}

impl Shift {
    /// The assignable shifts in display order.
    pub const ALL: [Shift; 4] = [Shift::Morning, Shift::Afternoon, Shift::Night, Shift::Off];

    /// Returns `true` for every value except [`Shift::Unassigned`].
    pub fn is_assignable(self) -> bool {
        self != Shift::Unassigned
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shift::Morning => write!(f, "Morning"),
            Shift::Afternoon => write!(f, "Afternoon"),
            Shift::Night => write!(f, "Night"),
            Shift::Off => write!(f, "Off"),
            Shift::Unassigned => write!(f, "Unassigned"),
        }
    }
}

impl FromStr for Shift {
    type Err = EngineError;

    /// Parses a shift name case-insensitively, accepting English and Spanish names.
    ///
    /// `Unassigned` is not parseable; it is never user input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "morning" | "mañana" | "manana" => Ok(Shift::Morning),
            "afternoon" | "tarde" => Ok(Shift::Afternoon),
            "night" | "noche" => Ok(Shift::Night),
            "off" | "libre" | "free" => Ok(Shift::Off),
            _ => Err(EngineError::InvalidShift {
                value: s.to_string(),
            }),
        }
    }
}

/// One full rotation cycle: an ordered, non-empty sequence of assignable shifts.
///
/// The cycle length is the number of shifts in the sequence. Day offset `k`
/// from the rotation start maps to position `k % cycle_length`.
///
/// # Example
///
/// ```
/// use shift_rotation_engine::models::{RotationPattern, Shift};
///
/// let pattern = RotationPattern::parse("morning, afternoon, night, off").unwrap();
/// assert_eq!(pattern.cycle_length(), 4);
/// assert_eq!(pattern.shift_at(5), Shift::Afternoon);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Shift>", into = "Vec<Shift>")]
pub struct RotationPattern {
    shifts: Vec<Shift>,
}

impl RotationPattern {
    /// Creates a pattern from a sequence of shifts.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPattern`] if the sequence is empty or
    /// contains [`Shift::Unassigned`].
    pub fn new(shifts: Vec<Shift>) -> EngineResult<Self> {
        if shifts.is_empty() {
            return Err(EngineError::InvalidPattern {
                message: "pattern must contain at least one shift".to_string(),
            });
        }
        if let Some(position) = shifts.iter().position(|s| !s.is_assignable()) {
            return Err(EngineError::InvalidPattern {
                message: format!("position {} is Unassigned", position + 1),
            });
        }
        Ok(Self { shifts })
    }

    /// Parses a comma-separated list of shift names, e.g. `"morning, night, off"`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPattern`] for blank input or any
    /// unrecognized shift name.
    pub fn parse(input: &str) -> EngineResult<Self> {
        if input.trim().is_empty() {
            return Err(EngineError::InvalidPattern {
                message: "pattern must contain at least one shift".to_string(),
            });
        }

        let shifts = input
            .split(',')
            .map(|part| {
                part.parse::<Shift>()
                    .map_err(|_| EngineError::InvalidPattern {
                        message: format!("unknown shift '{}'", part.trim()),
                    })
            })
            .collect::<EngineResult<Vec<_>>>()?;

        Self::new(shifts)
    }

    /// Returns the number of days in one rotation cycle.
    pub fn cycle_length(&self) -> usize {
        self.shifts.len()
    }

    /// Returns the shifts of one cycle in order.
    pub fn shifts(&self) -> &[Shift] {
        &self.shifts
    }

    /// Returns the shift at the given day offset, wrapping around the cycle.
    pub fn shift_at(&self, day_offset: u64) -> Shift {
        let index = (day_offset % self.shifts.len() as u64) as usize;
        self.shifts[index]
    }
}

impl TryFrom<Vec<Shift>> for RotationPattern {
    type Error = EngineError;

    fn try_from(shifts: Vec<Shift>) -> Result<Self, Self::Error> {
        Self::new(shifts)
    }
}

impl From<RotationPattern> for Vec<Shift> {
    fn from(pattern: RotationPattern) -> Self {
        pattern.shifts
    }
}
