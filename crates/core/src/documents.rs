//! CPF and CNPJ check-digit validation.
//!
//! Both functions accept masked or bare input; separators are ignored.

use crate::masks::remove_mask;

pub const CPF_LENGTH: usize = 11;
pub const CNPJ_LENGTH: usize = 14;

/// CNPJ weights, right-aligned against the digits being checked.
const CNPJ_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

fn to_digits(value: &str) -> Vec<u32> {
    remove_mask(value)
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect()
}

/// Check digit at 1-based `position` (10 or 11) of a CPF.
fn cpf_check_digit(digits: &[u32], position: u32) -> u32 {
    let sum: u32 = digits
        .iter()
        .take(position as usize - 1)
        .zip((2..=position).rev())
        .map(|(d, weight)| d * weight)
        .sum();
    match (sum * 10) % 11 {
        10 | 11 => 0,
        r => r,
    }
}

/// Check digit over the first `length` (12 or 13) digits of a CNPJ.
fn cnpj_check_digit(digits: &[u32], length: usize) -> u32 {
    let weights = &CNPJ_WEIGHTS[CNPJ_WEIGHTS.len() - length..];
    let sum: u32 = digits[..length]
        .iter()
        .zip(weights)
        .map(|(d, weight)| d * weight)
        .sum();
    match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    }
}

/// Whether `value` is a well-formed CPF with matching check digits.
///
/// Sequences of a single repeated digit pass the checksum but are never
/// issued, so they are rejected.
pub fn is_valid_cpf(value: &str) -> bool {
    let digits = to_digits(value);
    if digits.len() != CPF_LENGTH || digits.iter().all(|&d| d == digits[0]) {
        return false;
    }
    cpf_check_digit(&digits, 10) == digits[9] && cpf_check_digit(&digits, 11) == digits[10]
}

/// Whether `value` is a well-formed CNPJ with matching check digits.
pub fn is_valid_cnpj(value: &str) -> bool {
    let digits = to_digits(value);
    if digits.len() != CNPJ_LENGTH || digits.iter().all(|&d| d == 0) {
        return false;
    }
    cnpj_check_digit(&digits, 12) == digits[12] && cnpj_check_digit(&digits, 13) == digits[13]
}
