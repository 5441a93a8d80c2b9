use serde::{Deserialize, Serialize};

/// One of the two participants of a match.
///
/// The turn order is fixed: [`Role::First`] always opens the match, then
/// the roles strictly alternate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    First,
    Second,
}

impl Role {
    /// Both roles, in turn order.
    pub const ALL: [Role; 2] = [Role::First, Role::Second];

    pub fn opponent(self) -> Role {
        match self {
            Role::First => Role::Second,
            Role::Second => Role::First,
        }
    }

    /// Position of this role in [`Role::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::First => write!(f, "First"),
            Role::Second => write!(f, "Second"),
        }
    }
}
