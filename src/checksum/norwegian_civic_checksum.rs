use crate::checksum::{mod11_complement, parse_digits, weighted_sum, Validator};

const CIVIC_NUMBER_LENGTH: usize = 11;
const K1_WEIGHTS: [u32; 9] = [3, 7, 6, 1, 8, 9, 4, 5, 2];
// The last weight applies to the first check digit.
const K2_WEIGHTS: [u32; 10] = [5, 4, 3, 2, 7, 6, 5, 4, 3, 2];

/// Norwegian fødselsnummer: DDMMYY + 3 digit individual number + 2 check digits.
pub struct NorwegianCivicChecksum;

impl Validator for NorwegianCivicChecksum {
    fn is_valid_match(&self, value: &str) -> bool {
        if value.len() != CIVIC_NUMBER_LENGTH {
            return false;
        }
        let Some(digits) = parse_digits(value) else {
            return false;
        };
        norwegian_civic_check_digits(&digits[..9]) == Some((digits[9], digits[10]))
    }
}

/// Computes both check digits (k1, k2) from the first nine digits. `None` if
/// either check digit would be 10, which makes the number invalid.
pub fn norwegian_civic_check_digits(first_nine: &[u32]) -> Option<(u32, u32)> {
    if first_nine.len() != K1_WEIGHTS.len() {
        return None;
    }
    let k1 = mod11_complement(weighted_sum(first_nine, &K1_WEIGHTS));
    if k1 == 10 {
        return None;
    }

    let mut with_k1 = first_nine.to_vec();
    with_k1.push(k1);
    let k2 = mod11_complement(weighted_sum(&with_k1, &K2_WEIGHTS));
    if k2 == 10 {
        return None;
    }
    Some((k1, k2))
}
