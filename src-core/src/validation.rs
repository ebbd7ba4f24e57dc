//! Presence and range checks for the transaction form, and the parse step
//! that turns raw form strings into a `TransactionInput`.

use std::fmt;

use crate::error::FraudScopeError;
use crate::fields::{FieldId, FormValues};
use crate::types::TransactionInput;

pub const MIN_AGE: f64 = 18.0;
pub const MAX_AGE: f64 = 100.0;
/// Earliest accepted card expiry, as a YYYYMM number.
pub const MIN_CARD_EXPIRY: f64 = 202501.0;

pub const MSG_REQUIRED: &str = "This field is required";
pub const MSG_AGE_RANGE: &str = "Age must be between 18 and 100";
pub const MSG_NEGATIVE_AMOUNT: &str = "Amount cannot be negative";
pub const MSG_CARD_EXPIRED: &str = "Card must still be valid";

/// A failed check on a single field, shown inline next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FieldId,
    pub message: String,
}

impl FieldError {
    fn new(field: FieldId, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field.label(), self.message)
    }
}

/// Check one field's raw value.
///
/// Range rules only apply to values that parse as numbers. Anything that
/// does not parse is left for `parse_input` to report with the field name.
pub fn validate_field(field: FieldId, raw: &str) -> Result<(), FieldError> {
    let value = raw.trim();

    if field.is_required() && value.is_empty() {
        return Err(FieldError::new(field, MSG_REQUIRED));
    }

    let Ok(number) = value.parse::<f64>() else {
        return Ok(());
    };

    match field {
        FieldId::Age if !(MIN_AGE..=MAX_AGE).contains(&number) => {
            Err(FieldError::new(field, MSG_AGE_RANGE))
        }
        FieldId::Amount if number < 0.0 => Err(FieldError::new(field, MSG_NEGATIVE_AMOUNT)),
        FieldId::CardExpiry if number < MIN_CARD_EXPIRY => {
            Err(FieldError::new(field, MSG_CARD_EXPIRED))
        }
        _ => Ok(()),
    }
}

/// Run every field check. Fails closed: one failing field blocks the
/// submission, and all failures are reported together.
pub fn validate_form(values: &FormValues) -> Result<(), FraudScopeError> {
    let errors: Vec<FieldError> = values
        .iter()
        .filter_map(|(field, raw)| validate_field(field, raw).err())
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(FraudScopeError::Validation(errors))
    }
}

fn invalid(field: FieldId, raw: &str) -> FraudScopeError {
    FraudScopeError::InvalidValue {
        field: field.wire_name(),
        value: raw.trim().to_string(),
    }
}

fn parse_integer(values: &FormValues, field: FieldId) -> Result<i64, FraudScopeError> {
    let raw = values.get(field);
    let value = raw.trim();
    if let Ok(n) = value.parse::<i64>() {
        return Ok(n);
    }
    // Decimal input is truncated toward zero: "37.9" scores as 37.
    match value.parse::<f64>() {
        Ok(f) if f.is_finite() && f.abs() < i64::MAX as f64 => Ok(f.trunc() as i64),
        _ => Err(invalid(field, raw)),
    }
}

fn parse_amount(values: &FormValues) -> Result<f64, FraudScopeError> {
    let raw = values.get(FieldId::Amount);
    match raw.trim().parse::<f64>() {
        Ok(f) if f.is_finite() => Ok(f),
        _ => Err(invalid(FieldId::Amount, raw)),
    }
}

/// Convert raw form values into the payload sent to the scoring service.
pub fn parse_input(values: &FormValues) -> Result<TransactionInput, FraudScopeError> {
    Ok(TransactionInput {
        gender: parse_integer(values, FieldId::Gender)?,
        age: parse_integer(values, FieldId::Age)?,
        house_type_id: parse_integer(values, FieldId::HouseType)?,
        contact_availability_id: parse_integer(values, FieldId::ContactAvailable)?,
        home_country: parse_integer(values, FieldId::HomeCountry)?,
        account_no: parse_integer(values, FieldId::AccountNo)?,
        card_expiry_date: parse_integer(values, FieldId::CardExpiry)?,
        transaction_amount: parse_amount(values)?,
        transaction_country: parse_integer(values, FieldId::TransactionCountry)?,
        large_purchase: parse_integer(values, FieldId::LargePurchase)?,
        product_id: parse_integer(values, FieldId::ProductId)?,
        cif: parse_integer(values, FieldId::Cif)?,
        transaction_currency_code: parse_integer(values, FieldId::CurrencyCode)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::FormPreset;

    #[test]
    fn test_age_boundaries() {
        assert!(validate_field(FieldId::Age, "17").is_err());
        assert!(validate_field(FieldId::Age, "18").is_ok());
        assert!(validate_field(FieldId::Age, "100").is_ok());
        assert!(validate_field(FieldId::Age, "101").is_err());
        assert!(validate_field(FieldId::Age, "17.9").is_err());
        assert!(validate_field(FieldId::Age, "-5").is_err());
    }

    #[test]
    fn test_age_message() {
        let err = validate_field(FieldId::Age, "12").unwrap_err();
        assert_eq!(err.field, FieldId::Age);
        assert_eq!(err.message, MSG_AGE_RANGE);
    }

    #[test]
    fn test_amount_boundaries() {
        assert!(validate_field(FieldId::Amount, "0").is_ok());
        assert!(validate_field(FieldId::Amount, "0.00").is_ok());
        assert!(validate_field(FieldId::Amount, "1500.5").is_ok());
        let err = validate_field(FieldId::Amount, "-0.01").unwrap_err();
        assert_eq!(err.message, MSG_NEGATIVE_AMOUNT);
    }

    #[test]
    fn test_card_expiry() {
        assert!(validate_field(FieldId::CardExpiry, "202501").is_ok());
        assert!(validate_field(FieldId::CardExpiry, "202812").is_ok());
        let err = validate_field(FieldId::CardExpiry, "202412").unwrap_err();
        assert_eq!(err.message, MSG_CARD_EXPIRED);
    }

    #[test]
    fn test_required() {
        for field in FieldId::ALL {
            let err = validate_field(field, "   ").unwrap_err();
            assert_eq!(err.message, MSG_REQUIRED, "{:?}", field);
        }
    }

    #[test]
    fn test_unparseable_passes_range_checks() {
        assert!(validate_field(FieldId::Age, "abc").is_ok());
    }

    #[test]
    fn test_validate_form_reports_all_failures() {
        let values = FormValues::default()
            .with(FieldId::Age, "5")
            .with(FieldId::Amount, "-3")
            .with(FieldId::Cif, "");
        match validate_form(&values) {
            Err(FraudScopeError::Validation(errors)) => {
                let fields: Vec<FieldId> = errors.iter().map(|e| e.field).collect();
                assert_eq!(fields, vec![FieldId::Age, FieldId::Amount, FieldId::Cif]);
            }
            other => panic!("expected validation failure, got {:?}", other),
        }
    }

    #[test]
    fn test_presets_validate() {
        for preset in FormPreset::ALL {
            assert!(validate_form(&FormValues::preset(preset)).is_ok(), "{:?}", preset);
        }
    }

    #[test]
    fn test_parse_default_values() {
        let input = parse_input(&FormValues::default()).unwrap();
        assert_eq!(input.gender, 1);
        assert_eq!(input.age, 37);
        assert_eq!(input.account_no, 12345);
        assert_eq!(input.card_expiry_date, 202512);
        assert_eq!(input.transaction_amount, 0.0);
        assert_eq!(input.cif, 67890);
    }

    #[test]
    fn test_parse_accepts_whole_floats() {
        let values = FormValues::default().with(FieldId::Age, "37.0");
        assert_eq!(parse_input(&values).unwrap().age, 37);
    }

    #[test]
    fn test_parse_truncates_decimal_integers() {
        let values = FormValues::default().with(FieldId::Age, "37.5");
        assert!(validate_form(&values).is_ok());
        assert_eq!(parse_input(&values).unwrap().age, 37);

        let values = FormValues::default().with(FieldId::ProductId, "2.99");
        assert_eq!(parse_input(&values).unwrap().product_id, 2);
    }

    #[test]
    fn test_parse_names_offending_field() {
        let values = FormValues::default().with(FieldId::Age, "thirty");
        match parse_input(&values) {
            Err(FraudScopeError::InvalidValue { field, value }) => {
                assert_eq!(field, "Age");
                assert_eq!(value, "thirty");
            }
            other => panic!("expected invalid value, got {:?}", other),
        }

        let values = FormValues::default().with(FieldId::Amount, "12,50");
        let err = parse_input(&values).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for TransactionAmount: 12,50");
    }
}
