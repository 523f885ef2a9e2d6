use crate::checksum::{parse_digits, weighted_sum, Validator};

/// Weights applied from the last digit backwards.
const WEIGHTS: [u32; 11] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 1];

/// Mod-11 check used by Swedish (and Norwegian) bank accounts. Only defined for
/// values of at most 11 digits, anything longer is rejected.
pub struct Mod11Checksum;

impl Validator for Mod11Checksum {
    fn is_valid_match(&self, value: &str) -> bool {
        if value.len() > WEIGHTS.len() {
            return false;
        }
        match parse_digits(value) {
            Some(mut digits) => {
                digits.reverse();
                weighted_sum(&digits, &WEIGHTS) % 11 == 0
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::checksum::*;

    #[test]
    fn validate_mod11_numbers() {
        let valid = vec![
            "123456789",   // Handelsbanken account
            "0001234560",  // SEB clearing 5000, digits 2-4 + account
            "95501234566", // Avanza clearing + account
            "12345678908",
        ];
        for value in valid {
            assert!(Mod11Checksum.is_valid_match(value), "{value}");
        }
    }

    #[test]
    fn reject_invalid_mod11_numbers() {
        let invalid = vec![
            "123456780",
            "95501234567",
            "12345678907",
            "1234a6789",
            "",
            // longer than 11 digits is always rejected
            "000000000000",
            "6789123456789",
        ];
        for value in invalid {
            assert!(!Mod11Checksum.is_valid_match(value), "{value}");
        }
    }
}
