//! Validation subsystem for custodb
//!
//! One pure validator per field kind, plus the `ValidationError` type shared
//! by every rejecting path in the core (validators, setters, constructors and
//! the codec). Validators are side-effect-free and order-independent when
//! composed.

mod errors;
mod rules;

pub use errors::{ValidationError, ValidationResult};
pub use rules::{
    validate_address, validate_amount, validate_company_name, validate_contact_name,
    validate_discount, validate_email, validate_name, validate_phone, validate_points,
    validate_tax_id,
};
