//! Snapshot codec: customer records to and from flat key-value maps
//!
//! Encode is total: any valid record produces its full snapshot. Decode reads
//! the `variant` tag (absent or unknown tags fall back to standard), rebuilds
//! the record through the normal validating constructors, then applies the
//! trusted-restore values (loyalty points, corporate used credit) that bypass
//! the live mutator checks because they were produced by this same codec.
//!
//! A single decode is one unit: it either yields a fully-constructed record
//! or fails with a `ValidationError`; nothing partially-constructed is
//! observable. Skip-and-continue over a collection is the store's policy, not
//! the codec's.

use chrono::NaiveDate;
use serde_json::Value;

use crate::record::{Clock, Customer, MembershipTier, Profile};
use crate::validation::{ValidationError, ValidationResult};

/// Flat key-value representation of a record's state.
///
/// Leaf values are strings, numbers and booleans; the discriminating key is
/// `variant` with values `standard`, `loyalty`, `corporate`.
pub type Snapshot = serde_json::Map<String, Value>;

/// Default membership tier applied when a loyalty snapshot omits `tier`.
const DEFAULT_TIER: &str = "Bronze";
/// Default discount applied when a loyalty snapshot omits `discount_pct`.
const DEFAULT_DISCOUNT_PCT: f64 = 10.0;
/// Default company name applied when a corporate snapshot omits it.
const DEFAULT_COMPANY_NAME: &str = "Unknown";
/// Placeholder tax id applied when a corporate snapshot omits it.
const DEFAULT_TAX_ID: &str = "00.000.000-0";
/// Default credit limit applied when a corporate snapshot omits it.
const DEFAULT_CREDIT_LIMIT: f64 = 100000.0;

/// Encodes a record as its snapshot map. Total for any valid record.
pub fn encode(customer: &Customer) -> Snapshot {
    customer.snapshot()
}

/// Decodes a snapshot map back into a record.
///
/// The clock supplies the registration date for standard snapshots that omit
/// `registered_on`; a present-but-malformed date fails the whole decode
/// rather than silently defaulting.
pub fn decode(snapshot: &Snapshot, clock: &dyn Clock) -> ValidationResult<Customer> {
    let profile = Profile::new(
        require_str(snapshot, "name")?,
        require_str(snapshot, "email")?,
        require_str(snapshot, "phone")?,
        require_str(snapshot, "address")?,
    )?;

    match snapshot.get("variant").and_then(Value::as_str) {
        Some("loyalty") => decode_loyalty(snapshot, profile),
        Some("corporate") => decode_corporate(snapshot, profile),
        // Absent or unknown tags are standard records.
        _ => decode_standard(snapshot, profile, clock),
    }
}

fn decode_standard(
    snapshot: &Snapshot,
    profile: Profile,
    clock: &dyn Clock,
) -> ValidationResult<Customer> {
    match optional_str(snapshot, "registered_on")? {
        Some(date_str) => {
            let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| {
                ValidationError::MalformedDate {
                    value: date_str.to_string(),
                }
            })?;
            Ok(Customer::standard_registered_on(profile, date))
        }
        None => Ok(Customer::standard(profile, clock)),
    }
}

fn decode_loyalty(snapshot: &Snapshot, profile: Profile) -> ValidationResult<Customer> {
    let tier = MembershipTier::parse(optional_str(snapshot, "tier")?.unwrap_or(DEFAULT_TIER))?;
    let discount_pct =
        optional_f64(snapshot, "discount_pct")?.unwrap_or(DEFAULT_DISCOUNT_PCT);
    let points = optional_i64(snapshot, "points")?.unwrap_or(0);

    let mut customer = Customer::loyalty(profile, tier, discount_pct)?;
    if let Some(status) = customer.as_loyalty_mut() {
        // Trusted restore: produced by this codec, not re-validated.
        status.restore_points(points);
    }
    Ok(customer)
}

fn decode_corporate(snapshot: &Snapshot, profile: Profile) -> ValidationResult<Customer> {
    let company_name = optional_str(snapshot, "company_name")?
        .unwrap_or(DEFAULT_COMPANY_NAME)
        .to_string();
    let tax_id = optional_str(snapshot, "tax_id")?
        .unwrap_or(DEFAULT_TAX_ID)
        .to_string();
    // The contact defaults to the record's own name.
    let contact_name = optional_str(snapshot, "contact_name")?
        .unwrap_or(profile.name())
        .to_string();
    let credit_limit =
        optional_f64(snapshot, "credit_limit")?.unwrap_or(DEFAULT_CREDIT_LIMIT);
    let credit_used = optional_f64(snapshot, "credit_used")?.unwrap_or(0.0);

    let mut customer =
        Customer::corporate(profile, &company_name, &tax_id, &contact_name, credit_limit)?;
    if let Some(account) = customer.as_corporate_mut() {
        // Trusted restore: bypasses the use_credit check, so an inconsistent
        // store can yield used > limit.
        account.restore_credit_used(credit_used);
    }
    Ok(customer)
}

/// Reads a required string key.
fn require_str<'a>(snapshot: &'a Snapshot, field: &'static str) -> ValidationResult<&'a str> {
    match snapshot.get(field) {
        None => Err(ValidationError::MissingField { field }),
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(ValidationError::TypeMismatch {
            field,
            expected: "a string",
            actual: json_type_name(other),
        }),
    }
}

/// Reads an optional string key; present-but-non-string is an error.
fn optional_str<'a>(
    snapshot: &'a Snapshot,
    field: &'static str,
) -> ValidationResult<Option<&'a str>> {
    match snapshot.get(field) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => Err(ValidationError::TypeMismatch {
            field,
            expected: "a string",
            actual: json_type_name(other),
        }),
    }
}

/// Reads an optional numeric key as f64.
fn optional_f64(snapshot: &Snapshot, field: &'static str) -> ValidationResult<Option<f64>> {
    match snapshot.get(field) {
        None => Ok(None),
        Some(Value::Number(n)) => Ok(n.as_f64()),
        Some(other) => Err(ValidationError::TypeMismatch {
            field,
            expected: "a number",
            actual: json_type_name(other),
        }),
    }
}

/// Reads an optional integer key. A fractional number fails even when it is
/// numerically whole-adjacent; point counts are integers strictly.
fn optional_i64(snapshot: &Snapshot, field: &'static str) -> ValidationResult<Option<i64>> {
    match snapshot.get(field) {
        None => Ok(None),
        Some(Value::Number(n)) => n.as_i64().map(Some).ok_or(ValidationError::TypeMismatch {
            field,
            expected: "an integer",
            actual: "float",
        }),
        Some(other) => Err(ValidationError::TypeMismatch {
            field,
            expected: "an integer",
            actual: json_type_name(other),
        }),
    }
}

/// Returns the JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
