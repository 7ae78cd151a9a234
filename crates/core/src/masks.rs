//! Display masks for phone numbers, tax IDs and dates.
//!
//! A mask strips everything but digits, caps the digit count and, once
//! enough digits are present, inserts the separators the frontend shows
//! while the user types.

use std::sync::LazyLock;

use regex::Regex;

/// A digit grouping and the template that re-joins the groups.
#[derive(Debug)]
pub struct MaskPattern {
    regex: Regex,
    /// Replacement template in `regex` syntax (`${1}` etc).
    format: &'static str,
    max_length: usize,
}

impl MaskPattern {
    fn new(pattern: &str, format: &'static str, max_length: usize) -> Self {
        Self {
            regex: Regex::new(pattern).expect("valid regex"),
            format,
            max_length,
        }
    }
}

static PHONE: LazyLock<MaskPattern> =
    LazyLock::new(|| MaskPattern::new(r"(\d{2})(\d{4,5})(\d{4})", "(${1}) ${2}-${3}", 11));

static CPF: LazyLock<MaskPattern> =
    LazyLock::new(|| MaskPattern::new(r"(\d{3})(\d{3})(\d{3})(\d{2})", "${1}.${2}.${3}-${4}", 11));

static CNPJ: LazyLock<MaskPattern> = LazyLock::new(|| {
    MaskPattern::new(
        r"(\d{2})(\d{3})(\d{3})(\d{4})(\d{2})",
        "${1}.${2}.${3}/${4}-${5}",
        14,
    )
});

static DATE: LazyLock<MaskPattern> =
    LazyLock::new(|| MaskPattern::new(r"(\d{2})(\d{2})(\d{4})", "${1}/${2}/${3}", 8));

/// The masks the sign-up form uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskKind {
    Phone,
    Cpf,
    Cnpj,
    Date,
}

impl MaskKind {
    pub fn pattern(self) -> &'static MaskPattern {
        match self {
            MaskKind::Phone => &PHONE,
            MaskKind::Cpf => &CPF,
            MaskKind::Cnpj => &CNPJ,
            MaskKind::Date => &DATE,
        }
    }

    /// Shorthand for [`apply_mask`] with this kind's pattern.
    pub fn apply(self, value: &str) -> String {
        apply_mask(value, self.pattern())
    }
}

/// Format `value` with `pattern`.
///
/// - Input longer than the pattern allows is cut to its first
///   `max_length` digits and returned without separators.
/// - Input too short for the grouping comes back as bare digits.
///
/// ```
/// use cadastro_core::masks::{apply_mask, MaskKind};
///
/// assert_eq!(apply_mask("11999998888", MaskKind::Phone.pattern()), "(11) 99999-8888");
/// assert_eq!(apply_mask("119999988887", MaskKind::Phone.pattern()), "11999998888");
/// ```
pub fn apply_mask(value: &str, pattern: &MaskPattern) -> String {
    if value.is_empty() {
        return String::new();
    }

    let cleaned = remove_mask(value);

    // Only ASCII digits remain, so byte slicing is char-safe.
    if cleaned.len() > pattern.max_length {
        return cleaned[..pattern.max_length].to_string();
    }

    if pattern.regex.is_match(&cleaned) {
        return pattern
            .regex
            .replacen(&cleaned, 1, pattern.format)
            .into_owned();
    }

    cleaned
}

/// Drop every character that is not an ASCII digit.
pub fn remove_mask(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}
