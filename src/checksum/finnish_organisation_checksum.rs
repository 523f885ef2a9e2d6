use crate::checksum::{parse_digits, weighted_sum, Validator};

const BUSINESS_ID_LENGTH: usize = 8;
const MULTIPLIERS: [u32; 7] = [7, 9, 10, 5, 8, 4, 2];

/// Finnish business id (Y-tunnus / FO-nummer): 7 digits and a check digit.
pub struct FinnishOrganisationChecksum;

impl Validator for FinnishOrganisationChecksum {
    fn is_valid_match(&self, value: &str) -> bool {
        // http://www.finlex.fi/sv/laki/ajantasa/2001/20010288
        if value.len() != BUSINESS_ID_LENGTH {
            return false;
        }
        match parse_digits(value) {
            Some(digits) => finnish_organisation_check_digit(&digits[..7]) == digits[7],
            None => false,
        }
    }
}

/// `0` when the weighted sum is divisible by 11, otherwise `11 - (sum mod 11)`.
/// A result of 10 cannot match any digit. A result of 1 marks numbers reserved
/// for testing, which are still reported as valid.
pub fn finnish_organisation_check_digit(first_seven: &[u32]) -> u32 {
    match weighted_sum(first_seven, &MULTIPLIERS) % 11 {
        0 => 0,
        m => 11 - m,
    }
}
