//! Base customer profile: the four validated identity/contact fields
//!
//! Invariant: a `Profile` can never hold a value that fails its validator.
//! Construction is all-or-nothing — every field is validated before any is
//! assigned — and every setter re-validates and normalizes on write (values
//! are trimmed; the email is additionally lower-cased).

use serde_json::Value;

use crate::codec::Snapshot;
use crate::validation::{
    validate_address, validate_email, validate_name, validate_phone, ValidationResult,
};

/// Validated identity/contact fields shared by every record variant.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    name: String,
    email: String,
    phone: String,
    address: String,
}

impl Profile {
    /// Creates a profile, validating every field.
    ///
    /// If any field fails validation no profile exists; nothing
    /// partially-constructed is observable.
    pub fn new(name: &str, email: &str, phone: &str, address: &str) -> ValidationResult<Self> {
        validate_name(name)?;
        validate_email(email)?;
        validate_phone(phone)?;
        validate_address(address)?;

        Ok(Self {
            name: name.trim().to_string(),
            email: email.trim().to_lowercase(),
            phone: phone.trim().to_string(),
            address: address.trim().to_string(),
        })
    }

    /// Returns the full name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the normalized (lower-cased) email.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the phone number as entered (trimmed).
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Returns the postal address.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Replaces the name after re-validation.
    pub fn set_name(&mut self, name: &str) -> ValidationResult<()> {
        validate_name(name)?;
        self.name = name.trim().to_string();
        Ok(())
    }

    /// Replaces the email after re-validation; stored lower-cased.
    pub fn set_email(&mut self, email: &str) -> ValidationResult<()> {
        validate_email(email)?;
        self.email = email.trim().to_lowercase();
        Ok(())
    }

    /// Replaces the phone number after re-validation.
    pub fn set_phone(&mut self, phone: &str) -> ValidationResult<()> {
        validate_phone(phone)?;
        self.phone = phone.trim().to_string();
        Ok(())
    }

    /// Replaces the address after re-validation.
    pub fn set_address(&mut self, address: &str) -> ValidationResult<()> {
        validate_address(address)?;
        self.address = address.trim().to_string();
        Ok(())
    }

    /// One-line human-readable form.
    pub fn summary(&self) -> String {
        format!(
            "{} | email: {} | phone: {}",
            self.name, self.email, self.phone
        )
    }

    /// Appends the base keys (name, email, phone, address) to a snapshot map.
    pub(crate) fn snapshot_into(&self, map: &mut Snapshot) {
        map.insert("name".into(), Value::String(self.name.clone()));
        map.insert("email".into(), Value::String(self.email.clone()));
        map.insert("phone".into(), Value::String(self.phone.clone()));
        map.insert("address".into(), Value::String(self.address.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> Profile {
        Profile::new(
            "Juan Pérez",
            "Juan@Email.com",
            "+56912345678",
            "Av. Libertador 1234, Santiago",
        )
        .unwrap()
    }

    #[test]
    fn test_construction_normalizes_fields() {
        let profile = Profile::new(
            "  Juan Pérez  ",
            "  Juan@Email.COM ",
            " 912345678 ",
            "  Av. Libertador 1234, Santiago ",
        )
        .unwrap();

        assert_eq!(profile.name(), "Juan Pérez");
        assert_eq!(profile.email(), "juan@email.com");
        assert_eq!(profile.phone(), "912345678");
        assert_eq!(profile.address(), "Av. Libertador 1234, Santiago");
    }

    #[test]
    fn test_construction_is_all_or_nothing() {
        // A 5-character address must reject the whole profile.
        let result = Profile::new("Juan Pérez", "juan@email.com", "912345678", "Calle");
        assert!(result.is_err());
    }

    #[test]
    fn test_setters_revalidate() {
        let mut profile = sample_profile();

        assert!(profile.set_email("not-an-email").is_err());
        // The stored value is untouched after a failed write.
        assert_eq!(profile.email(), "juan@email.com");

        profile.set_email("Nuevo@Email.com").unwrap();
        assert_eq!(profile.email(), "nuevo@email.com");
    }

    #[test]
    fn test_set_phone_rejects_wrong_leading_digit() {
        let mut profile = sample_profile();
        assert!(profile.set_phone("812345678").is_err());
        assert_eq!(profile.phone(), "+56912345678");
    }

    #[test]
    fn test_summary_contains_identity() {
        let summary = sample_profile().summary();
        assert!(summary.contains("Juan Pérez"));
        assert!(summary.contains("juan@email.com"));
    }
}
