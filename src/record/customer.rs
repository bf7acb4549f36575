//! The customer record: a validated profile plus one variant payload
//!
//! The three variants form a closed sum. Dispatch for discount, summary and
//! snapshot behavior is an exhaustive match over the variant, so a missing
//! case is a compile error rather than a runtime surprise.

use chrono::NaiveDate;
use serde_json::Value;

use super::clock::Clock;
use super::corporate::CorporateAccount;
use super::loyalty::{LoyaltyStatus, MembershipTier};
use super::profile::Profile;
use crate::codec::Snapshot;
use crate::validation::ValidationResult;

/// Discriminating tag for the three record variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantKind {
    Standard,
    Loyalty,
    Corporate,
}

impl VariantKind {
    /// Returns the wire name of the variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            VariantKind::Standard => "standard",
            VariantKind::Loyalty => "loyalty",
            VariantKind::Corporate => "corporate",
        }
    }
}

impl std::fmt::Display for VariantKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Standard variant state.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardInfo {
    registered_on: NaiveDate,
}

impl StandardInfo {
    /// Returns the registration date.
    pub fn registered_on(&self) -> NaiveDate {
        self.registered_on
    }

    /// Replaces the registration date.
    pub fn set_registered_on(&mut self, date: NaiveDate) {
        self.registered_on = date;
    }
}

/// Variant-specific payload of a customer record. Immutable discrimination:
/// a record never changes variant after construction.
#[derive(Debug, Clone, PartialEq)]
pub enum Variant {
    Standard(StandardInfo),
    Loyalty(LoyaltyStatus),
    Corporate(CorporateAccount),
}

/// A customer record: validated base profile plus variant payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    profile: Profile,
    variant: Variant,
}

impl Customer {
    /// Creates a standard customer registered today (per the injected clock).
    pub fn standard(profile: Profile, clock: &dyn Clock) -> Self {
        Self::standard_registered_on(profile, clock.today())
    }

    /// Creates a standard customer with an explicit registration date.
    pub fn standard_registered_on(profile: Profile, registered_on: NaiveDate) -> Self {
        Self {
            profile,
            variant: Variant::Standard(StandardInfo { registered_on }),
        }
    }

    /// Creates a loyalty customer with a validated discount and zero points.
    pub fn loyalty(
        profile: Profile,
        tier: MembershipTier,
        discount_pct: f64,
    ) -> ValidationResult<Self> {
        let status = LoyaltyStatus::new(tier, discount_pct)?;
        Ok(Self {
            profile,
            variant: Variant::Loyalty(status),
        })
    }

    /// Creates a corporate customer with validated company fields and zero
    /// used credit.
    pub fn corporate(
        profile: Profile,
        company_name: &str,
        tax_id: &str,
        contact_name: &str,
        credit_limit: f64,
    ) -> ValidationResult<Self> {
        let account = CorporateAccount::new(company_name, tax_id, contact_name, credit_limit)?;
        Ok(Self {
            profile,
            variant: Variant::Corporate(account),
        })
    }

    /// Returns the base profile.
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Returns the base profile for mutation through its validated setters.
    pub fn profile_mut(&mut self) -> &mut Profile {
        &mut self.profile
    }

    /// Returns the variant tag.
    pub fn kind(&self) -> VariantKind {
        match &self.variant {
            Variant::Standard(_) => VariantKind::Standard,
            Variant::Loyalty(_) => VariantKind::Loyalty,
            Variant::Corporate(_) => VariantKind::Corporate,
        }
    }

    /// Returns the variant payload.
    pub fn variant(&self) -> &Variant {
        &self.variant
    }

    /// Standard payload, if this is a standard record.
    pub fn as_standard(&self) -> Option<&StandardInfo> {
        match &self.variant {
            Variant::Standard(info) => Some(info),
            _ => None,
        }
    }

    /// Mutable standard payload, if this is a standard record.
    pub fn as_standard_mut(&mut self) -> Option<&mut StandardInfo> {
        match &mut self.variant {
            Variant::Standard(info) => Some(info),
            _ => None,
        }
    }

    /// Loyalty payload, if this is a loyalty record.
    pub fn as_loyalty(&self) -> Option<&LoyaltyStatus> {
        match &self.variant {
            Variant::Loyalty(status) => Some(status),
            _ => None,
        }
    }

    /// Mutable loyalty payload, if this is a loyalty record.
    pub fn as_loyalty_mut(&mut self) -> Option<&mut LoyaltyStatus> {
        match &mut self.variant {
            Variant::Loyalty(status) => Some(status),
            _ => None,
        }
    }

    /// Corporate payload, if this is a corporate record.
    pub fn as_corporate(&self) -> Option<&CorporateAccount> {
        match &self.variant {
            Variant::Corporate(account) => Some(account),
            _ => None,
        }
    }

    /// Mutable corporate payload, if this is a corporate record.
    pub fn as_corporate_mut(&mut self) -> Option<&mut CorporateAccount> {
        match &mut self.variant {
            Variant::Corporate(account) => Some(account),
            _ => None,
        }
    }

    /// Computes the discount granted on a purchase amount.
    ///
    /// The amount is trusted (it is not persisted); it is not re-validated
    /// here.
    ///
    /// - Standard: no discount.
    /// - Loyalty: the configured percentage of the amount.
    /// - Corporate: a fixed 15%, regardless of any configured field.
    pub fn discount(&self, amount: f64) -> f64 {
        match &self.variant {
            Variant::Standard(_) => 0.0,
            Variant::Loyalty(status) => amount * (status.discount_pct() / 100.0),
            Variant::Corporate(_) => amount * 0.15,
        }
    }

    /// One-line human-readable form including the variant.
    pub fn summary(&self) -> String {
        match &self.variant {
            Variant::Standard(info) => format!(
                "[standard] {} | registered: {}",
                self.profile.summary(),
                info.registered_on().format("%Y-%m-%d")
            ),
            Variant::Loyalty(status) => format!(
                "[loyalty] {} | tier: {} | discount: {}% | points: {}",
                self.profile.summary(),
                status.tier(),
                status.discount_pct(),
                status.points()
            ),
            Variant::Corporate(account) => format!(
                "[corporate] {} | company: {} | available credit: {}",
                self.profile.summary(),
                account.company_name(),
                account.available_credit()
            ),
        }
    }

    /// Structured key-value snapshot of the full record state.
    ///
    /// Base keys first, then the `variant` tag, then variant-specific keys.
    /// This is the sole encoding path of the codec and is total for any valid
    /// record.
    pub fn snapshot(&self) -> Snapshot {
        let mut map = Snapshot::new();
        self.profile.snapshot_into(&mut map);
        map.insert("variant".into(), Value::String(self.kind().as_str().into()));

        match &self.variant {
            Variant::Standard(info) => {
                map.insert(
                    "registered_on".into(),
                    Value::String(info.registered_on().format("%Y-%m-%d").to_string()),
                );
            }
            Variant::Loyalty(status) => {
                map.insert("tier".into(), Value::String(status.tier().as_str().into()));
                map.insert("discount_pct".into(), json_number(status.discount_pct()));
                map.insert("points".into(), Value::from(status.points()));
            }
            Variant::Corporate(account) => {
                map.insert(
                    "company_name".into(),
                    Value::String(account.company_name().into()),
                );
                map.insert("tax_id".into(), Value::String(account.tax_id().into()));
                map.insert(
                    "contact_name".into(),
                    Value::String(account.contact_name().into()),
                );
                map.insert("credit_limit".into(), json_number(account.credit_limit()));
                map.insert("credit_used".into(), json_number(account.credit_used()));
                // Derived convenience value; ignored on decode.
                map.insert(
                    "credit_available".into(),
                    json_number(account.available_credit()),
                );
            }
        }

        map
    }
}

/// Encodes a finite f64 as a JSON number.
///
/// Validated amounts and percentages are always finite, so the fallback to 0
/// is unreachable in practice.
fn json_number(value: f64) -> Value {
    serde_json::Number::from_f64(value)
        .map(Value::Number)
        .unwrap_or_else(|| Value::from(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::clock::FixedClock;

    fn sample_profile() -> Profile {
        Profile::new(
            "Juan Pérez",
            "juan@email.com",
            "912345678",
            "Av. Libertador 1234, Santiago",
        )
        .unwrap()
    }

    fn fixed_clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2026, 2, 15).unwrap())
    }

    #[test]
    fn test_standard_defaults_to_clock_date() {
        let customer = Customer::standard(sample_profile(), &fixed_clock());
        assert_eq!(customer.kind(), VariantKind::Standard);
        assert_eq!(
            customer.as_standard().unwrap().registered_on(),
            NaiveDate::from_ymd_opt(2026, 2, 15).unwrap()
        );
    }

    #[test]
    fn test_discount_per_variant() {
        let standard = Customer::standard(sample_profile(), &fixed_clock());
        assert_eq!(standard.discount(100000.0), 0.0);

        let loyalty =
            Customer::loyalty(sample_profile(), MembershipTier::Gold, 20.0).unwrap();
        assert_eq!(loyalty.discount(100000.0), 20000.0);

        // Corporate discount is fixed at 15% no matter what is configured.
        let corporate = Customer::corporate(
            sample_profile(),
            "Tech Solutions",
            "76.123.456-7",
            "María González",
            500000.0,
        )
        .unwrap();
        assert_eq!(corporate.discount(100000.0), 15000.0);
    }

    #[test]
    fn test_loyalty_constructor_rejects_bad_discount() {
        assert!(Customer::loyalty(sample_profile(), MembershipTier::Bronze, 101.0).is_err());
    }

    #[test]
    fn test_variant_accessors_are_exclusive() {
        let loyalty =
            Customer::loyalty(sample_profile(), MembershipTier::Silver, 10.0).unwrap();
        assert!(loyalty.as_loyalty().is_some());
        assert!(loyalty.as_standard().is_none());
        assert!(loyalty.as_corporate().is_none());
    }

    #[test]
    fn test_snapshot_has_base_keys_and_tag() {
        let customer = Customer::standard(sample_profile(), &fixed_clock());
        let snapshot = customer.snapshot();

        assert_eq!(snapshot["name"], "Juan Pérez");
        assert_eq!(snapshot["email"], "juan@email.com");
        assert_eq!(snapshot["phone"], "912345678");
        assert_eq!(snapshot["address"], "Av. Libertador 1234, Santiago");
        assert_eq!(snapshot["variant"], "standard");
        assert_eq!(snapshot["registered_on"], "2026-02-15");
    }

    #[test]
    fn test_corporate_snapshot_includes_derived_available() {
        let mut customer = Customer::corporate(
            sample_profile(),
            "Tech Solutions",
            "76.123.456-7",
            "María González",
            300000.0,
        )
        .unwrap();
        customer
            .as_corporate_mut()
            .unwrap()
            .use_credit(100000.0)
            .unwrap();

        let snapshot = customer.snapshot();
        assert_eq!(snapshot["credit_limit"], 300000.0);
        assert_eq!(snapshot["credit_used"], 100000.0);
        assert_eq!(snapshot["credit_available"], 200000.0);
    }

    #[test]
    fn test_summary_names_the_variant() {
        let loyalty =
            Customer::loyalty(sample_profile(), MembershipTier::Gold, 20.0).unwrap();
        let summary = loyalty.summary();
        assert!(summary.starts_with("[loyalty]"));
        assert!(summary.contains("Gold"));
    }
}
