//! Corporate variant state: company identity and the credit ledger
//!
//! The credit-used accumulator is mutated only through `use_credit` and
//! `pay_credit`. `use_credit` enforces available credit going forward;
//! `set_credit_limit` deliberately does not compare the new limit against the
//! current usage, so available credit can go negative until usage is paid
//! down. That gap matches the persisted data this store must stay compatible
//! with (see DESIGN.md).

use crate::validation::{
    validate_amount, validate_company_name, validate_contact_name, validate_tax_id,
    ValidationResult,
};

/// Corporate-specific state and operations.
#[derive(Debug, Clone, PartialEq)]
pub struct CorporateAccount {
    company_name: String,
    tax_id: String,
    contact_name: String,
    credit_limit: f64,
    credit_used: f64,
}

impl CorporateAccount {
    /// Creates corporate state with validated fields and zero used credit.
    pub fn new(
        company_name: &str,
        tax_id: &str,
        contact_name: &str,
        credit_limit: f64,
    ) -> ValidationResult<Self> {
        validate_company_name(company_name)?;
        validate_tax_id(tax_id)?;
        validate_contact_name(contact_name)?;
        validate_amount(credit_limit)?;

        Ok(Self {
            company_name: company_name.trim().to_string(),
            tax_id: tax_id.trim().to_string(),
            contact_name: contact_name.trim().to_string(),
            credit_limit,
            credit_used: 0.0,
        })
    }

    /// Returns the company name.
    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    /// Returns the company tax id.
    pub fn tax_id(&self) -> &str {
        &self.tax_id
    }

    /// Returns the contact-person name.
    pub fn contact_name(&self) -> &str {
        &self.contact_name
    }

    /// Returns the credit limit.
    pub fn credit_limit(&self) -> f64 {
        self.credit_limit
    }

    /// Returns the credit currently in use.
    pub fn credit_used(&self) -> f64 {
        self.credit_used
    }

    /// Derived value: limit minus used.
    ///
    /// Normally >= 0, but a limit reduction or an inconsistent restored store
    /// can take it negative until usage is reduced.
    pub fn available_credit(&self) -> f64 {
        self.credit_limit - self.credit_used
    }

    /// Replaces the company name after re-validation.
    pub fn set_company_name(&mut self, name: &str) -> ValidationResult<()> {
        validate_company_name(name)?;
        self.company_name = name.trim().to_string();
        Ok(())
    }

    /// Replaces the tax id after re-validation.
    pub fn set_tax_id(&mut self, tax_id: &str) -> ValidationResult<()> {
        validate_tax_id(tax_id)?;
        self.tax_id = tax_id.trim().to_string();
        Ok(())
    }

    /// Replaces the contact-person name after re-validation.
    pub fn set_contact_name(&mut self, contact: &str) -> ValidationResult<()> {
        validate_contact_name(contact)?;
        self.contact_name = contact.trim().to_string();
        Ok(())
    }

    /// Replaces the credit limit.
    ///
    /// Validates the amount only; the new limit is NOT checked against the
    /// currently used credit.
    pub fn set_credit_limit(&mut self, new_limit: f64) -> ValidationResult<()> {
        validate_amount(new_limit)?;
        self.credit_limit = new_limit;
        Ok(())
    }

    /// Returns true iff the amount fits within the available credit.
    pub fn check_credit(&self, amount: f64) -> ValidationResult<bool> {
        validate_amount(amount)?;
        Ok(amount <= self.available_credit())
    }

    /// Consumes credit if available.
    ///
    /// Returns `false` (usage unchanged) when the amount exceeds the
    /// available credit; an expected outcome, not an error.
    pub fn use_credit(&mut self, amount: f64) -> ValidationResult<bool> {
        if self.check_credit(amount)? {
            self.credit_used += amount;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Pays down used credit.
    ///
    /// Overpayment is silently clamped to the outstanding used amount: used
    /// credit never goes negative and no refund is produced.
    pub fn pay_credit(&mut self, amount: f64) -> ValidationResult<()> {
        validate_amount(amount)?;
        let payment = amount.min(self.credit_used);
        self.credit_used -= payment;
        Ok(())
    }

    /// Trusted restore of the used-credit accumulator from previously-encoded
    /// data.
    ///
    /// Bypasses the `use_credit` check; reserved for the codec. A restored
    /// record may start with used > limit if the stored data is inconsistent.
    pub(crate) fn restore_credit_used(&mut self, used: f64) {
        self.credit_used = used;
    }
}
