//! Registration pipeline.
//!
//! Picks the field list for the registrant kind, then checks each field in
//! order and stops at the first failure, so a request reports at most one
//! error.

use std::borrow::Cow;

use chrono::NaiveDate;
use serde_json::Value;

use crate::error::CoreError;
use crate::field::{FieldName, RegistrantKind};
use crate::rules;

/// Body key carrying the registrant kind, as sent by the frontend.
pub const KIND_KEY: &str = "singUpType";
/// Correctly spelled alternative for [`KIND_KEY`].
pub const KIND_KEY_ALIAS: &str = "signUpType";

pub const MSG_REGISTERED: &str = "Registrado com sucesso";

/// Untyped form values keyed by field wire name.
pub type RawFormValues = serde_json::Map<String, Value>;

/// A registration that passed every check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registered {
    pub kind: RegistrantKind,
    pub message: &'static str,
}

/// Validate a whole request body, reading the kind from [`KIND_KEY`].
pub fn register_form(values: &RawFormValues, today: NaiveDate) -> Result<Registered, CoreError> {
    let raw_kind = values
        .get(KIND_KEY)
        .or_else(|| values.get(KIND_KEY_ALIAS))
        .and_then(Value::as_str);
    register_raw(raw_kind, values, today)
}

/// Validate `values` for a kind given as its wire string.
///
/// An unknown or missing kind fails before any field is looked at.
pub fn register_raw(
    kind: Option<&str>,
    values: &RawFormValues,
    today: NaiveDate,
) -> Result<Registered, CoreError> {
    let kind = kind
        .and_then(RegistrantKind::parse)
        .ok_or(CoreError::InvalidKind)?;
    register(kind, values, today)
}

/// Validate `values` against every field `kind` requires.
pub fn register(
    kind: RegistrantKind,
    values: &RawFormValues,
    today: NaiveDate,
) -> Result<Registered, CoreError> {
    validate_in_order(kind.fields(), |field| check_field(field, values, today))?;
    Ok(Registered {
        kind,
        message: MSG_REGISTERED,
    })
}

/// Run `check` over `fields` in order, stopping at the first error.
pub fn validate_in_order<F>(fields: &[FieldName], check: F) -> Result<(), CoreError>
where
    F: FnMut(FieldName) -> Result<(), CoreError>,
{
    fields.iter().copied().try_for_each(check)
}

/// A submitted value as the field rules see it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// Absent, or one of `null`, `false`, `0` and `""`.
    Missing,
    /// A string, or the JSON text of a number or `true`.
    Text(Cow<'a, str>),
    /// An array or object. No rule accepts these.
    Structured,
}

/// Presence check followed by the field's rule.
pub fn check_field(
    field: FieldName,
    values: &RawFormValues,
    today: NaiveDate,
) -> Result<(), CoreError> {
    let text = match field_value(values.get(field.as_str())) {
        FieldValue::Missing => return Err(CoreError::FieldRequired { field }),
        FieldValue::Structured => {
            return Err(CoreError::FieldInvalid {
                field,
                message: rules::invalid_message(field).to_string(),
            })
        }
        FieldValue::Text(text) => text,
    };

    let result = rules::validate(field, Some(text.as_ref()), today);
    if result.is_valid {
        Ok(())
    } else {
        Err(CoreError::FieldInvalid {
            field,
            message: result.message,
        })
    }
}

/// Classify a submitted value.
///
/// Numbers and `true` are checked through their JSON text, so a phone sent
/// as `11999998888` passes while `["11999998888"]` does not.
pub fn field_value(value: Option<&Value>) -> FieldValue<'_> {
    match value {
        None | Some(Value::Null | Value::Bool(false)) => FieldValue::Missing,
        Some(Value::String(s)) if s.is_empty() => FieldValue::Missing,
        Some(Value::String(s)) => FieldValue::Text(Cow::Borrowed(s.as_str())),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => FieldValue::Missing,
        Some(scalar @ (Value::Number(_) | Value::Bool(true))) => {
            FieldValue::Text(Cow::Owned(scalar.to_string()))
        }
        Some(Value::Array(_) | Value::Object(_)) => FieldValue::Structured,
    }
}
