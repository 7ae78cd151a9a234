//! Per-field validation rules.
//!
//! Each rule looks at one raw value and never fails: a missing value is
//! reported as an invalid result with a field-specific message.

use std::sync::LazyLock;

use chrono::{Days, Months, NaiveDate};
use regex::Regex;
use serde::Serialize;

use crate::documents::{is_valid_cnpj, is_valid_cpf};
use crate::field::FieldName;
use crate::masks::remove_mask;

pub const MSG_INVALID_EMAIL: &str = "Email inválido";
pub const MSG_SHORT_PASSWORD: &str = "A senha deve ter no mínimo 8 caracteres";
pub const MSG_SHORT_NAME: &str = "O nome deve ter no mínimo 3 caracteres";
pub const MSG_INVALID_PHONE: &str = "Telefone inválido";
pub const MSG_INVALID_DATE: &str = "Data inválida";
pub const MSG_FUTURE_DATE: &str = "Data não pode ser futura";
pub const MSG_INVALID_CPF: &str = "CPF inválido";
pub const MSG_INVALID_CNPJ: &str = "CNPJ inválido";

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MIN_NAME_LENGTH: usize = 3;
pub const MIN_PHONE_DIGITS: usize = 10;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{2})/([0-9]{2})/([0-9]{4})$").expect("valid regex"));

/// Outcome of checking one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Empty when valid.
    pub message: String,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: String::new(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
        }
    }
}

/// Message reported when `field` has no value.
pub fn required_message(field: FieldName) -> &'static str {
    match field {
        FieldName::Email => "O email é obrigatório",
        FieldName::Password => "A senha é obrigatória",
        FieldName::Name | FieldName::PjName => "O nome é obrigatório",
        FieldName::Cpf => "O CPF é obrigatório",
        FieldName::BirthDate => "A data de nascimento é obrigatória",
        FieldName::Phone => "O telefone é obrigatório",
        FieldName::Cnpj => "O CNPJ é obrigatório",
        FieldName::PjPhone => "O telefone da empresa é obrigatório",
        FieldName::StartUpDate => "A data de abertura é obrigatória",
    }
}

/// Message reported when `field` holds a value its rule can never accept,
/// such as an array.
pub fn invalid_message(field: FieldName) -> &'static str {
    match field {
        FieldName::Email => MSG_INVALID_EMAIL,
        FieldName::Password => MSG_SHORT_PASSWORD,
        FieldName::Name | FieldName::PjName => MSG_SHORT_NAME,
        FieldName::Phone | FieldName::PjPhone => MSG_INVALID_PHONE,
        FieldName::BirthDate | FieldName::StartUpDate => MSG_INVALID_DATE,
        FieldName::Cpf => MSG_INVALID_CPF,
        FieldName::Cnpj => MSG_INVALID_CNPJ,
    }
}

/// Check a raw `value` against the rule for `field`.
///
/// `None` and the empty string both count as missing. `today` bounds the
/// date fields: a date after it is rejected.
pub fn validate(field: FieldName, value: Option<&str>, today: NaiveDate) -> ValidationResult {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return ValidationResult::invalid(required_message(field));
    };

    match field {
        FieldName::Email => validate_email(value),
        FieldName::Password => {
            validate_min_length(value, MIN_PASSWORD_LENGTH, MSG_SHORT_PASSWORD)
        }
        FieldName::Name | FieldName::PjName => {
            validate_min_length(value, MIN_NAME_LENGTH, MSG_SHORT_NAME)
        }
        FieldName::Phone | FieldName::PjPhone => validate_phone(value),
        FieldName::BirthDate | FieldName::StartUpDate => validate_past_date(value, today),
        FieldName::Cpf => check(is_valid_cpf(value), MSG_INVALID_CPF),
        FieldName::Cnpj => check(is_valid_cnpj(value), MSG_INVALID_CNPJ),
    }
}

fn check(ok: bool, message: &str) -> ValidationResult {
    if ok {
        ValidationResult::valid()
    } else {
        ValidationResult::invalid(message)
    }
}

fn validate_email(value: &str) -> ValidationResult {
    check(EMAIL_RE.is_match(value), MSG_INVALID_EMAIL)
}

/// Length is counted in UTF-16 code units, the unit browsers use for
/// `minlength`, so an emoji counts twice.
fn validate_min_length(value: &str, min: usize, message: &str) -> ValidationResult {
    check(value.encode_utf16().count() >= min, message)
}

fn validate_phone(value: &str) -> ValidationResult {
    check(remove_mask(value).len() >= MIN_PHONE_DIGITS, MSG_INVALID_PHONE)
}

fn validate_past_date(value: &str, today: NaiveDate) -> ValidationResult {
    let Some(date) = parse_date(value) else {
        return ValidationResult::invalid(MSG_INVALID_DATE);
    };
    check(date <= today, MSG_FUTURE_DATE)
}

/// Parse `DD/MM/YYYY`.
///
/// Out-of-range parts roll over instead of failing: `32/01/2020` is
/// 2020-02-01 and `00/13/2020` is 2020-12-31.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let caps = DATE_RE.captures(value)?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;
    rollover_date(day, month, year)
}

fn rollover_date(day: u32, month: u32, year: i32) -> Option<NaiveDate> {
    let january = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let first_of_month = match month {
        0 => january.checked_sub_months(Months::new(1))?,
        m => january.checked_add_months(Months::new(m - 1))?,
    };
    match day {
        0 => first_of_month.checked_sub_days(Days::new(1)),
        d => first_of_month.checked_add_days(Days::new(u64::from(d - 1))),
    }
}
