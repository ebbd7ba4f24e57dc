//! The thirteen transaction form fields and the raw values typed into them.

use serde::{Deserialize, Serialize};

/// A form field. Variants are declared in payload order, so `FieldId::ALL`
/// doubles as the serialization order of `TransactionInput`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldId {
    Gender,
    Age,
    HouseType,
    ContactAvailable,
    HomeCountry,
    AccountNo,
    CardExpiry,
    Amount,
    TransactionCountry,
    LargePurchase,
    ProductId,
    Cif,
    CurrencyCode,
}

/// How a field is presented in the form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// Free numeric entry with optional HTML `min`/`max`/`step` hints.
    Number {
        min: Option<f64>,
        max: Option<f64>,
        step: Option<f64>,
    },
    /// Fixed list of `(value, label)` options.
    Select(&'static [(&'static str, &'static str)]),
}

pub const GENDER_OPTIONS: &[(&str, &str)] = &[("0", "Female"), ("1", "Male")];

pub const HOUSE_TYPE_OPTIONS: &[(&str, &str)] =
    &[("0", "Other"), ("1", "House"), ("2", "Apartment"), ("3", "Villa")];

pub const CONTACT_OPTIONS: &[(&str, &str)] = &[("0", "No"), ("1", "Yes"), ("2", "Partially")];

pub const COUNTRY_OPTIONS: &[(&str, &str)] = &[
    ("1", "France"),
    ("2", "United States"),
    ("3", "United Kingdom"),
    ("4", "Germany"),
    ("5", "Other"),
];

pub const CURRENCY_OPTIONS: &[(&str, &str)] = &[("1", "EUR"), ("2", "USD"), ("3", "Other")];

pub const YES_NO_OPTIONS: &[(&str, &str)] = &[("0", "No"), ("1", "Yes")];

pub const PRODUCT_OPTIONS: &[(&str, &str)] =
    &[("1", "Standard"), ("2", "Intermediate"), ("3", "Premium")];

impl FieldId {
    pub const ALL: [FieldId; 13] = [
        FieldId::Gender,
        FieldId::Age,
        FieldId::HouseType,
        FieldId::ContactAvailable,
        FieldId::HomeCountry,
        FieldId::AccountNo,
        FieldId::CardExpiry,
        FieldId::Amount,
        FieldId::TransactionCountry,
        FieldId::LargePurchase,
        FieldId::ProductId,
        FieldId::Cif,
        FieldId::CurrencyCode,
    ];

    /// Element id used by the web form.
    pub fn dom_id(self) -> &'static str {
        match self {
            FieldId::Gender => "gender",
            FieldId::Age => "age",
            FieldId::HouseType => "houseType",
            FieldId::ContactAvailable => "contactAvailable",
            FieldId::HomeCountry => "homeCountry",
            FieldId::AccountNo => "accountNo",
            FieldId::CardExpiry => "cardExpiry",
            FieldId::Amount => "amount",
            FieldId::TransactionCountry => "transactionCountry",
            FieldId::LargePurchase => "largePurchase",
            FieldId::ProductId => "productId",
            FieldId::Cif => "cif",
            FieldId::CurrencyCode => "currencyCode",
        }
    }

    /// Key of this field in the `/predict` payload.
    pub fn wire_name(self) -> &'static str {
        match self {
            FieldId::Gender => "Gender",
            FieldId::Age => "Age",
            FieldId::HouseType => "HouseTypeID",
            FieldId::ContactAvailable => "ContactAvaliabilityID",
            FieldId::HomeCountry => "HomeCountry",
            FieldId::AccountNo => "AccountNo",
            FieldId::CardExpiry => "CardExpiryDate",
            FieldId::Amount => "TransactionAmount",
            FieldId::TransactionCountry => "TransactionCountry",
            FieldId::LargePurchase => "LargePurchase",
            FieldId::ProductId => "ProductID",
            FieldId::Cif => "CIF",
            FieldId::CurrencyCode => "TransactionCurrencyCode",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldId::Gender => "Gender",
            FieldId::Age => "Age",
            FieldId::HouseType => "Housing type",
            FieldId::ContactAvailable => "Contact available",
            FieldId::HomeCountry => "Home country",
            FieldId::AccountNo => "Account number",
            FieldId::CardExpiry => "Card expiry (YYYYMM)",
            FieldId::Amount => "Amount (€)",
            FieldId::TransactionCountry => "Transaction country",
            FieldId::LargePurchase => "Large purchase",
            FieldId::ProductId => "Product",
            FieldId::Cif => "CIF",
            FieldId::CurrencyCode => "Currency",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            FieldId::Gender => FieldKind::Select(GENDER_OPTIONS),
            FieldId::HouseType => FieldKind::Select(HOUSE_TYPE_OPTIONS),
            FieldId::ContactAvailable => FieldKind::Select(CONTACT_OPTIONS),
            FieldId::HomeCountry | FieldId::TransactionCountry => FieldKind::Select(COUNTRY_OPTIONS),
            FieldId::LargePurchase => FieldKind::Select(YES_NO_OPTIONS),
            FieldId::ProductId => FieldKind::Select(PRODUCT_OPTIONS),
            FieldId::CurrencyCode => FieldKind::Select(CURRENCY_OPTIONS),
            FieldId::Age => FieldKind::Number {
                min: Some(18.0),
                max: Some(100.0),
                step: Some(1.0),
            },
            FieldId::Amount => FieldKind::Number {
                min: Some(0.0),
                max: None,
                step: Some(0.01),
            },
            FieldId::CardExpiry => FieldKind::Number {
                min: Some(202501.0),
                max: None,
                step: Some(1.0),
            },
            FieldId::AccountNo | FieldId::Cif => FieldKind::Number {
                min: None,
                max: None,
                step: Some(1.0),
            },
        }
    }

    /// Every field in the form is mandatory.
    pub fn is_required(self) -> bool {
        true
    }

    /// Only the amount is fractional; everything else is an integer code.
    pub fn is_integer(self) -> bool {
        !matches!(self, FieldId::Amount)
    }

    pub fn from_dom_id(id: &str) -> Option<FieldId> {
        FieldId::ALL.into_iter().find(|f| f.dom_id() == id)
    }
}

/// Form sections, in display order.
pub const FORM_SECTIONS: &[(&str, &[FieldId])] = &[
    (
        "Customer",
        &[
            FieldId::Gender,
            FieldId::Age,
            FieldId::HouseType,
            FieldId::ContactAvailable,
            FieldId::HomeCountry,
        ],
    ),
    ("Account", &[FieldId::AccountNo, FieldId::CardExpiry, FieldId::Cif]),
    (
        "Transaction",
        &[
            FieldId::Amount,
            FieldId::TransactionCountry,
            FieldId::CurrencyCode,
            FieldId::LargePurchase,
            FieldId::ProductId,
        ],
    ),
];

/// Canned sets of form values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPreset {
    /// Values the form starts with and resets to.
    Default,
    /// The transaction profile the model most often flags.
    FraudExample,
    /// A domestic everyday purchase.
    Legitimate,
    /// A large foreign-currency purchase from an account with no reachable contact.
    Suspicious,
}

impl FormPreset {
    pub const ALL: [FormPreset; 4] = [
        FormPreset::Default,
        FormPreset::FraudExample,
        FormPreset::Legitimate,
        FormPreset::Suspicious,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FormPreset::Default => "default",
            FormPreset::FraudExample => "fraud",
            FormPreset::Legitimate => "legitimate",
            FormPreset::Suspicious => "suspicious",
        }
    }

    pub fn from_name(name: &str) -> Option<FormPreset> {
        FormPreset::ALL.into_iter().find(|p| p.name() == name)
    }

    /// Raw values in `FieldId::ALL` order.
    fn raw(self) -> [&'static str; 13] {
        match self {
            FormPreset::Default => [
                "1", "37", "0", "1", "1", "12345", "202512", "0.00", "1", "0", "3", "67890", "1",
            ],
            FormPreset::FraudExample => [
                "0", "37", "0", "1", "1", "12345", "202512", "0.00", "1", "0", "3", "67890", "1",
            ],
            FormPreset::Legitimate => [
                "1", "35", "2", "1", "1", "12345", "202512", "89.99", "1", "0", "1", "67890", "1",
            ],
            FormPreset::Suspicious => [
                "0", "22", "1", "0", "1", "99999", "202601", "15000.00", "3", "1", "3", "99999", "3",
            ],
        }
    }
}

/// Raw, unvalidated form contents keyed by field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValues {
    values: [String; 13],
}

impl FormValues {
    pub fn preset(preset: FormPreset) -> Self {
        Self {
            values: preset.raw().map(|v| v.to_string()),
        }
    }

    pub fn empty() -> Self {
        Self {
            values: Default::default(),
        }
    }

    pub fn get(&self, field: FieldId) -> &str {
        &self.values[field as usize]
    }

    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        self.values[field as usize] = value.into();
    }

    pub fn with(mut self, field: FieldId, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> {
        FieldId::ALL.into_iter().map(move |f| (f, self.get(f)))
    }
}

impl Default for FormValues {
    fn default() -> Self {
        Self::preset(FormPreset::Default)
    }
}
