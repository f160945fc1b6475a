//! Die kinds known to the tray.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::TrayError;

pub const DIE_D4: u8 = 0;
pub const DIE_D6: u8 = 1;
pub const DIE_D8: u8 = 2;
pub const DIE_D10: u8 = 3;
pub const DIE_D12: u8 = 4;
pub const DIE_D20: u8 = 5;
pub const DIE_D100: u8 = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DieKind {
    D4,
    D6,
    D8,
    D10,
    D12,
    D20,
    /// Percentile: a hundreds die rolled together with a linked d10
    D100,
}

impl DieKind {
    pub const ALL: [DieKind; 7] = [
        DieKind::D4,
        DieKind::D6,
        DieKind::D8,
        DieKind::D10,
        DieKind::D12,
        DieKind::D20,
        DieKind::D100,
    ];

    pub fn id(self) -> u8 {
        match self {
            DieKind::D4 => DIE_D4,
            DieKind::D6 => DIE_D6,
            DieKind::D8 => DIE_D8,
            DieKind::D10 => DIE_D10,
            DieKind::D12 => DIE_D12,
            DieKind::D20 => DIE_D20,
            DieKind::D100 => DIE_D100,
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    pub fn faces(self) -> u32 {
        match self {
            DieKind::D4 => 4,
            DieKind::D6 => 6,
            DieKind::D8 => 8,
            DieKind::D10 => 10,
            DieKind::D12 => 12,
            DieKind::D20 => 20,
            // Ten faces marked 00..90
            DieKind::D100 => 10,
        }
    }

    pub fn is_percentile(self) -> bool {
        self == DieKind::D100
    }

    /// Kind of the linked body rolled alongside this one, if any
    pub fn secondary_kind(self) -> Option<DieKind> {
        match self {
            DieKind::D100 => Some(DieKind::D10),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DieKind::D4 => "d4",
            DieKind::D6 => "d6",
            DieKind::D8 => "d8",
            DieKind::D10 => "d10",
            DieKind::D12 => "d12",
            DieKind::D20 => "d20",
            DieKind::D100 => "d100",
        }
    }
}

impl fmt::Display for DieKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DieKind {
    type Err = TrayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        DieKind::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == key)
            .ok_or_else(|| TrayError::UnknownKind(s.to_string()))
    }
}
