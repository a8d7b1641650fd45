//! Account roles offered on the registration form

use serde::{Deserialize, Serialize};

/// The kind of account being registered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    Donor,
    Donee,
    BloodManager,
}

impl Role {
    /// All roles in selector order
    pub const ALL: [Role; 3] = [Role::Donor, Role::Donee, Role::BloodManager];

    pub fn next(&self) -> Self {
        match self {
            Self::Donor => Self::Donee,
            Self::Donee => Self::BloodManager,
            Self::BloodManager => Self::Donor,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Donor => Self::BloodManager,
            Self::Donee => Self::Donor,
            Self::BloodManager => Self::Donee,
        }
    }

    /// Selector index (0-based)
    pub fn index(&self) -> usize {
        match self {
            Self::Donor => 0,
            Self::Donee => 1,
            Self::BloodManager => 2,
        }
    }

    /// Role for a 0-based selector index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Label shown on the role button
    pub fn label(&self) -> &'static str {
        match self {
            Self::Donor => "DONOR",
            Self::Donee => "DONEE",
            Self::BloodManager => "BLOOD MANAGER",
        }
    }

    /// Icon shown next to the label
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Donor => "🩸",
            Self::Donee => "♥",
            Self::BloodManager => "⚙",
        }
    }

    /// Human-readable noun used in messages
    pub fn noun(&self) -> &'static str {
        match self {
            Self::Donor => "donor",
            Self::Donee => "donee",
            Self::BloodManager => "blood manager",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_donor() {
        assert_eq!(Role::default(), Role::Donor);
    }

    #[test]
    fn test_next_cycles_through_all() {
        let mut role = Role::Donor;
        for expected in [Role::Donee, Role::BloodManager, Role::Donor] {
            role = role.next();
            assert_eq!(role, expected);
        }
    }

    #[test]
    fn test_prev_is_inverse_of_next() {
        for role in Role::ALL {
            assert_eq!(role.next().prev(), role);
        }
    }

    #[test]
    fn test_index_round_trip() {
        for role in Role::ALL {
            assert_eq!(Role::from_index(role.index()), Some(role));
        }
        assert_eq!(Role::from_index(3), None);
    }

    #[test]
    fn test_serde_uses_screaming_case() {
        let json = serde_json::to_string(&Role::BloodManager).unwrap();
        assert_eq!(json, "\"BLOOD_MANAGER\"");
        let parsed: Role = serde_json::from_str("\"DONEE\"").unwrap();
        assert_eq!(parsed, Role::Donee);
    }
}
