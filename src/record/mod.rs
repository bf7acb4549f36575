//! Customer record model for custodb
//!
//! A record is a validated base `Profile` plus exactly one variant payload:
//!
//! - standard: registration date (defaults to the injected clock's today)
//! - loyalty: membership tier, discount percentage, point ledger
//! - corporate: company identity, credit ledger
//!
//! # Principles
//!
//! 1. A record can never hold a field value that fails its validator
//! 2. Construction is all-or-nothing; setters re-validate on every write
//! 3. The variant is immutable after construction
//! 4. Routine business outcomes (insufficient points/credit) are booleans,
//!    validation failures are errors

mod clock;
mod corporate;
mod customer;
mod loyalty;
mod profile;

pub use clock::{Clock, FixedClock, SystemClock};
pub use corporate::CorporateAccount;
pub use customer::{Customer, StandardInfo, Variant, VariantKind};
pub use loyalty::{LoyaltyStatus, MembershipTier};
pub use profile::Profile;
