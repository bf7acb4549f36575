//! Field validators for customer records
//!
//! Validation semantics:
//! - Validators are pure: no mutation, no I/O, deterministic
//! - A validator either returns `Ok(())` or a `ValidationError` with a
//!   human-readable reason
//! - Validators never substitute defaults for invalid values
//!
//! Rules are exact and exhaustive; composition order never matters.

use std::sync::OnceLock;

use regex::Regex;

use super::errors::{ValidationError, ValidationResult};

/// Letters (including accented vowels and the letter ñ, both cases) and
/// whitespace only. Anchored over the whole trimmed value.
fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-zA-ZáéíóúÁÉÍÓÚñÑ\s]+$").expect("valid name pattern"))
}

/// `local-part@domain.tld` with an alphabetic extension of at least two
/// characters. Anchored over the whole trimmed value.
fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email pattern")
    })
}

/// Chilean mobile number: optional `+56`/`56` prefix, then `9` and exactly
/// eight more digits. Applied after separator stripping.
fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(\+?56)?9[0-9]{8}$").expect("valid phone pattern"))
}

/// Validates a full name: trimmed length >= 3, letters and spaces only.
pub fn validate_name(name: &str) -> ValidationResult<()> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyValue { field: "name" });
    }
    if trimmed.chars().count() < 3 {
        return Err(ValidationError::TooShort {
            field: "name",
            min: 3,
            actual: trimmed.chars().count(),
        });
    }
    if !name_pattern().is_match(trimmed) {
        return Err(ValidationError::InvalidFormat {
            field: "name",
            value: name.to_string(),
            reason: "only letters and spaces are allowed",
        });
    }
    Ok(())
}

/// Validates an email address against the anchored `user@domain.tld` pattern.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyValue { field: "email" });
    }
    if !email_pattern().is_match(trimmed) {
        return Err(ValidationError::InvalidFormat {
            field: "email",
            value: email.to_string(),
            reason: "expected user@domain.tld",
        });
    }
    Ok(())
}

/// Validates a phone number as a Chilean mobile number.
///
/// Spaces, hyphens and parentheses are stripped before matching, so
/// `+56 9 1234 5678` and `+56912345678` are both accepted.
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    if phone.trim().is_empty() {
        return Err(ValidationError::EmptyValue { field: "phone" });
    }
    let stripped: String = phone
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();
    if !phone_pattern().is_match(&stripped) {
        return Err(ValidationError::InvalidFormat {
            field: "phone",
            value: phone.to_string(),
            reason: "expected a Chilean mobile number starting with 9",
        });
    }
    Ok(())
}

/// Validates a postal address: trimmed length >= 10, no structural check.
pub fn validate_address(address: &str) -> ValidationResult<()> {
    let trimmed = address.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyValue { field: "address" });
    }
    if trimmed.chars().count() < 10 {
        return Err(ValidationError::TooShort {
            field: "address",
            min: 10,
            actual: trimmed.chars().count(),
        });
    }
    Ok(())
}

/// Validates a discount percentage: 0 <= value <= 100 inclusive.
pub fn validate_discount(discount: f64) -> ValidationResult<()> {
    if !discount.is_finite() || !(0.0..=100.0).contains(&discount) {
        return Err(ValidationError::OutOfRange {
            field: "discount_pct",
            min: 0.0,
            max: 100.0,
            value: discount,
        });
    }
    Ok(())
}

/// Validates a point count: value >= 0.
///
/// Integer-ness is carried by the type; the codec rejects fractional JSON
/// numbers before they can reach this check.
pub fn validate_points(points: i64) -> ValidationResult<()> {
    if points < 0 {
        return Err(ValidationError::NegativePoints { value: points });
    }
    Ok(())
}

/// Validates a monetary amount: strictly positive (zero is rejected).
pub fn validate_amount(amount: f64) -> ValidationResult<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(ValidationError::NonPositiveAmount { value: amount });
    }
    Ok(())
}

/// Validates a company name: trimmed length >= 3.
pub fn validate_company_name(name: &str) -> ValidationResult<()> {
    min_length(name, "company_name", 3)
}

/// Validates a company tax id: trimmed length >= 5.
pub fn validate_tax_id(tax_id: &str) -> ValidationResult<()> {
    min_length(tax_id, "tax_id", 5)
}

/// Validates a contact-person name: trimmed length >= 3.
pub fn validate_contact_name(contact: &str) -> ValidationResult<()> {
    min_length(contact, "contact_name", 3)
}

fn min_length(value: &str, field: &'static str, min: usize) -> ValidationResult<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyValue { field });
    }
    if trimmed.chars().count() < min {
        return Err(ValidationError::TooShort {
            field,
            min,
            actual: trimmed.chars().count(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_accepts_letters_and_spaces() {
        assert!(validate_name("Juan Pérez").is_ok());
        assert!(validate_name("María José Ñuñez").is_ok());
        assert!(validate_name("  Ana Luisa  ").is_ok());
    }

    #[test]
    fn test_name_rejects_short_values() {
        assert!(validate_name("AB").is_err());
        assert!(validate_name("  a  ").is_err());
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
    }

    #[test]
    fn test_name_rejects_digits_and_symbols() {
        assert!(validate_name("Juan123").is_err());
        assert!(validate_name("Juan_Perez").is_err());
        assert!(validate_name("Juan@Perez").is_err());
    }

    #[test]
    fn test_email_accepts_standard_addresses() {
        assert!(validate_email("juan@email.com").is_ok());
        assert!(validate_email("juan.perez+tag@mail.example.org").is_ok());
        assert!(validate_email("  user@domain.cl  ").is_ok());
    }

    #[test]
    fn test_email_rejects_malformed_addresses() {
        // No @ separator
        assert!(validate_email("juan.email.com").is_err());
        // Extension too short
        assert!(validate_email("juan@email.c").is_err());
        // No extension
        assert!(validate_email("juan@email").is_err());
        assert!(validate_email("").is_err());
    }

    #[test]
    fn test_email_match_is_anchored() {
        assert!(validate_email("ok@mail.com extra").is_err());
        assert!(validate_email("pre ok@mail.com").is_err());
    }

    #[test]
    fn test_phone_accepts_chilean_mobiles() {
        assert!(validate_phone("+56912345678").is_ok());
        assert!(validate_phone("56912345678").is_ok());
        assert!(validate_phone("912345678").is_ok());
        // Separators are stripped before matching
        assert!(validate_phone("+56 9 1234 5678").is_ok());
        assert!(validate_phone("(+56) 9-1234-5678").is_ok());
    }

    #[test]
    fn test_phone_rejects_wrong_shapes() {
        // Wrong leading digit
        assert!(validate_phone("812345678").is_err());
        // Too short / too long
        assert!(validate_phone("91234567").is_err());
        assert!(validate_phone("9123456789").is_err());
        // Wrong country prefix
        assert!(validate_phone("+57912345678").is_err());
        assert!(validate_phone("").is_err());
    }

    #[test]
    fn test_address_minimum_length() {
        assert!(validate_address("Av. Libertador 1234, Santiago").is_ok());
        assert!(validate_address("Calle").is_err());
        assert!(validate_address("         x        ").is_err());
        assert!(validate_address("").is_err());
    }

    #[test]
    fn test_discount_range() {
        assert!(validate_discount(0.0).is_ok());
        assert!(validate_discount(15.5).is_ok());
        assert!(validate_discount(100.0).is_ok());
        assert!(validate_discount(-0.1).is_err());
        assert!(validate_discount(150.0).is_err());
        assert!(validate_discount(f64::NAN).is_err());
    }

    #[test]
    fn test_points_non_negative() {
        assert!(validate_points(0).is_ok());
        assert!(validate_points(100).is_ok());
        assert!(validate_points(-50).is_err());
    }

    #[test]
    fn test_amount_strictly_positive() {
        assert!(validate_amount(1000.50).is_ok());
        assert!(validate_amount(0.01).is_ok());
        assert!(validate_amount(0.0).is_err());
        assert!(validate_amount(-100.0).is_err());
        assert!(validate_amount(f64::INFINITY).is_err());
    }

    #[test]
    fn test_corporate_field_lengths() {
        assert!(validate_company_name("Tech Solutions Chile SpA").is_ok());
        assert!(validate_company_name("AB").is_err());
        assert!(validate_tax_id("76.123.456-7").is_ok());
        assert!(validate_tax_id("1234").is_err());
        assert!(validate_contact_name("María González").is_ok());
        assert!(validate_contact_name("MG").is_err());
    }

    #[test]
    fn test_validators_are_idempotent() {
        // Running a validator twice over the same value gives the same result.
        for _ in 0..2 {
            assert!(validate_name("Juan Pérez").is_ok());
            assert!(validate_email("juan@email.com").is_ok());
            assert!(validate_phone("912345678").is_ok());
        }
    }
}
