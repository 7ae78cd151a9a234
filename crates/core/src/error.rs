use crate::field::FieldName;

/// Why a registration was refused.
///
/// Every variant is a client-input error; the `Display` text is the
/// message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("Tipo de cadastro inválido")]
    InvalidKind,

    #[error("O campo {field} é obrigatório")]
    FieldRequired { field: FieldName },

    #[error("{message}")]
    FieldInvalid { field: FieldName, message: String },
}

impl CoreError {
    /// The field that failed, if the error is tied to one.
    pub fn field(&self) -> Option<FieldName> {
        match self {
            CoreError::InvalidKind => None,
            CoreError::FieldRequired { field } | CoreError::FieldInvalid { field, .. } => {
                Some(*field)
            }
        }
    }
}
