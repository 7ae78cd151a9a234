//! Form field identifiers and the per-kind field lists.

use std::fmt;

/// Wire value for an individual registration.
pub const KIND_INDIVIDUAL: &str = "pf";
/// Wire value for a business registration.
pub const KIND_BUSINESS: &str = "pj";

/// Every field the sign-up form can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldName {
    Email,
    Password,
    Name,
    Cpf,
    BirthDate,
    Phone,
    PjName,
    Cnpj,
    PjPhone,
    StartUpDate,
}

impl FieldName {
    /// JSON key used by the frontend for this field.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::Email => "email",
            FieldName::Password => "password",
            FieldName::Name => "name",
            FieldName::Cpf => "cpf",
            FieldName::BirthDate => "birthDate",
            FieldName::Phone => "phone",
            FieldName::PjName => "pjName",
            FieldName::Cnpj => "cnpj",
            FieldName::PjPhone => "pjPhone",
            FieldName::StartUpDate => "startUpDate",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const INDIVIDUAL_FIELDS: &[FieldName] = &[
    FieldName::Email,
    FieldName::Password,
    FieldName::Name,
    FieldName::Cpf,
    FieldName::BirthDate,
    FieldName::Phone,
];

const BUSINESS_FIELDS: &[FieldName] = &[
    FieldName::Email,
    FieldName::Password,
    FieldName::PjName,
    FieldName::Cnpj,
    FieldName::PjPhone,
    FieldName::StartUpDate,
];

/// Who is registering: a person (`pf`) or a company (`pj`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrantKind {
    Individual,
    Business,
}

impl RegistrantKind {
    /// Parse the wire value. Anything other than `pf` / `pj` is rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            KIND_INDIVIDUAL => Some(RegistrantKind::Individual),
            KIND_BUSINESS => Some(RegistrantKind::Business),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RegistrantKind::Individual => KIND_INDIVIDUAL,
            RegistrantKind::Business => KIND_BUSINESS,
        }
    }

    /// Fields required for this kind, in validation order.
    ///
    /// The order decides which error a request reports when several fields
    /// are wrong.
    pub fn fields(self) -> &'static [FieldName] {
        match self {
            RegistrantKind::Individual => INDIVIDUAL_FIELDS,
            RegistrantKind::Business => BUSINESS_FIELDS,
        }
    }
}

impl fmt::Display for RegistrantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
