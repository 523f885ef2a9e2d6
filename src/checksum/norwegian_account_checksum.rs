use crate::checksum::{mod11_complement, parse_digits, weighted_sum, Validator};

const ACCOUNT_LENGTH: usize = 11;
const WEIGHTS: [u32; 10] = [5, 4, 3, 2, 7, 6, 5, 4, 3, 2];

/// Norwegian account number check digit: mod-11 over the first 10 digits,
/// compared with the 11th.
pub struct NorwegianAccountChecksum;

impl Validator for NorwegianAccountChecksum {
    fn is_valid_match(&self, value: &str) -> bool {
        // https://no.wikipedia.org/wiki/MOD11
        if value.len() != ACCOUNT_LENGTH {
            return false;
        }
        let Some(digits) = parse_digits(value) else {
            return false;
        };
        let expected = mod11_complement(weighted_sum(&digits[..10], &WEIGHTS));
        expected == digits[10]
    }
}
