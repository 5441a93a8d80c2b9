use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::Role;

/// Points per role, indexed by [`Role`].
///
/// Kept in `i64`: a score parameter may be any `i32`, and every colored edge adds one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score([i64; 2]);

impl Score {
    pub fn new(first: i64, second: i64) -> Self {
        Self([first, second])
    }

    /// Both roles start a match with the same number of points.
    pub(crate) fn uniform(points: i64) -> Self {
        Self([points; 2])
    }

    pub(crate) fn add(&mut self, role: Role, points: i32) {
        self.0[role.index()] += i64::from(points);
    }

    /// `role`'s points minus its opponent's.
    pub fn difference(&self, role: Role) -> i64 {
        self[role] - self[role.opponent()]
    }

    pub fn total(&self) -> i64 {
        self.0.iter().sum()
    }
}

impl Index<Role> for Score {
    type Output = i64;

    fn index(&self, role: Role) -> &i64 {
        &self.0[role.index()]
    }
}

/// The zero-sum outcome of a finished match.
///
/// The margin is stored from the point of view of [`Role::First`]: positive
/// means `First` is ahead, negative means `Second` is ahead, zero is a draw.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    margin: i64,
}

impl MatchResult {
    /// A result where `reference` wins by `margin` (or loses, if it is negative).
    pub fn zero_sum(margin: i64, reference: Role) -> Self {
        match reference {
            Role::First => Self { margin },
            Role::Second => Self { margin: -margin },
        }
    }

    /// The margin from `First`'s point of view.
    pub fn margin(&self) -> i64 {
        self.margin
    }

    /// What the match is worth to `role`. The payoffs of both roles sum to zero.
    pub fn payoff(&self, role: Role) -> i64 {
        match role {
            Role::First => self.margin,
            Role::Second => -self.margin,
        }
    }

    pub fn winner(&self) -> Option<Role> {
        match self.margin.signum() {
            1 => Some(Role::First),
            -1 => Some(Role::Second),
            _ => None,
        }
    }

    pub fn loser(&self) -> Option<Role> {
        self.winner().map(Role::opponent)
    }

    pub fn is_draw(&self) -> bool {
        self.margin == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payoffs_are_zero_sum() {
        for margin in [-3, 0, 5] {
            for reference in Role::ALL {
                let result = MatchResult::zero_sum(margin, reference);
                assert_eq!(result.payoff(Role::First) + result.payoff(Role::Second), 0);
                assert_eq!(result.payoff(reference), margin);
            }
        }
    }

    #[test]
    fn winner_and_loser() {
        let result = MatchResult::zero_sum(2, Role::Second);
        assert_eq!(result.margin(), -2);
        assert_eq!(result.winner(), Some(Role::Second));
        assert_eq!(result.loser(), Some(Role::First));
        assert!(!result.is_draw());

        let draw = MatchResult::zero_sum(0, Role::First);
        assert_eq!(draw.winner(), None);
        assert_eq!(draw.loser(), None);
        assert!(draw.is_draw());
    }

    #[test]
    fn score_difference() {
        let score = Score::new(4, 7);
        assert_eq!(score[Role::First], 4);
        assert_eq!(score.difference(Role::First), -3);
        assert_eq!(score.difference(Role::Second), 3);
        assert_eq!(score.total(), 11);
    }
}
