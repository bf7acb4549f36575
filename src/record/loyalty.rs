//! Loyalty variant state: membership tier, discount percentage, point ledger
//!
//! The point balance is mutated only through `add_points`/`redeem_points`.
//! Insufficient balance on redemption is a routine business outcome and is
//! reported as `false`, never as an error.

use crate::validation::{validate_discount, validate_points, ValidationError, ValidationResult};

/// Membership tier for loyalty customers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipTier {
    Bronze,
    Silver,
    Gold,
}

impl MembershipTier {
    /// Returns the wire/display name of the tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipTier::Bronze => "Bronze",
            MembershipTier::Silver => "Silver",
            MembershipTier::Gold => "Gold",
        }
    }

    /// Parses a tier name; unknown names are rejected.
    pub fn parse(value: &str) -> ValidationResult<Self> {
        match value {
            "Bronze" => Ok(MembershipTier::Bronze),
            "Silver" => Ok(MembershipTier::Silver),
            "Gold" => Ok(MembershipTier::Gold),
            other => Err(ValidationError::UnknownTier {
                value: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for MembershipTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Loyalty-specific state and operations.
#[derive(Debug, Clone, PartialEq)]
pub struct LoyaltyStatus {
    tier: MembershipTier,
    discount_pct: f64,
    points: i64,
}

impl LoyaltyStatus {
    /// Creates loyalty state with a validated discount and a zero balance.
    pub fn new(tier: MembershipTier, discount_pct: f64) -> ValidationResult<Self> {
        validate_discount(discount_pct)?;
        Ok(Self {
            tier,
            discount_pct,
            points: 0,
        })
    }

    /// Returns the membership tier.
    pub fn tier(&self) -> MembershipTier {
        self.tier
    }

    /// Returns the discount percentage (0-100).
    pub fn discount_pct(&self) -> f64 {
        self.discount_pct
    }

    /// Returns the current point balance.
    pub fn points(&self) -> i64 {
        self.points
    }

    /// Replaces the tier.
    pub fn set_tier(&mut self, tier: MembershipTier) {
        self.tier = tier;
    }

    /// Replaces the discount percentage after re-validation.
    pub fn set_discount_pct(&mut self, discount_pct: f64) -> ValidationResult<()> {
        validate_discount(discount_pct)?;
        self.discount_pct = discount_pct;
        Ok(())
    }

    /// Adds points to the balance. No upper bound.
    pub fn add_points(&mut self, points: i64) -> ValidationResult<()> {
        validate_points(points)?;
        self.points += points;
        Ok(())
    }

    /// Redeems points if the balance covers them.
    ///
    /// Returns `false` (balance unchanged) when the balance is insufficient;
    /// this is an expected outcome, not an error.
    pub fn redeem_points(&mut self, points: i64) -> ValidationResult<bool> {
        validate_points(points)?;
        if self.points >= points {
            self.points -= points;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Trusted restore of the point balance from previously-encoded data.
    ///
    /// Bypasses the point validator; reserved for the codec. Not a general
    /// setter.
    pub(crate) fn restore_points(&mut self, points: i64) {
        self.points = points;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_round_trip() {
        for tier in [
            MembershipTier::Bronze,
            MembershipTier::Silver,
            MembershipTier::Gold,
        ] {
            assert_eq!(MembershipTier::parse(tier.as_str()).unwrap(), tier);
        }
    }

    #[test]
    fn test_unknown_tier_rejected() {
        assert!(MembershipTier::parse("Platinum").is_err());
        assert!(MembershipTier::parse("bronze").is_err());
    }

    #[test]
    fn test_new_validates_discount() {
        assert!(LoyaltyStatus::new(MembershipTier::Gold, 20.0).is_ok());
        assert!(LoyaltyStatus::new(MembershipTier::Gold, 150.0).is_err());
    }

    #[test]
    fn test_point_ledger_sequence() {
        let mut status = LoyaltyStatus::new(MembershipTier::Silver, 15.0).unwrap();
        assert_eq!(status.points(), 0);

        status.add_points(500).unwrap();
        status.add_points(300).unwrap();
        assert_eq!(status.points(), 800);

        assert!(status.redeem_points(600).unwrap());
        assert_eq!(status.points(), 200);

        // Insufficient balance: false, balance untouched.
        assert!(!status.redeem_points(500).unwrap());
        assert_eq!(status.points(), 200);
    }

    #[test]
    fn test_negative_points_rejected() {
        let mut status = LoyaltyStatus::new(MembershipTier::Bronze, 10.0).unwrap();
        assert!(status.add_points(-50).is_err());
        assert!(status.redeem_points(-1).is_err());
        assert_eq!(status.points(), 0);
    }

    #[test]
    fn test_restore_bypasses_validation() {
        let mut status = LoyaltyStatus::new(MembershipTier::Bronze, 10.0).unwrap();
        status.restore_points(1234);
        assert_eq!(status.points(), 1234);
    }
}
