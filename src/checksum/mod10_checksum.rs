use crate::checksum::{parse_digits, Validator};

/// Luhn style mod-10 check. Walking right to left (1-indexed), digits at even
/// positions are doubled and products above 9 have 9 subtracted. The value is
/// valid when the total is a multiple of 10.
pub struct Mod10Checksum;

impl Validator for Mod10Checksum {
    fn is_valid_match(&self, value: &str) -> bool {
        match parse_digits(value) {
            Some(digits) => luhn_sum(&digits, false) % 10 == 0,
            None => false,
        }
    }
}

/// Returns the digit to append to `value` to make it pass [`Mod10Checksum`].
/// `None` if `value` is not made of digits.
pub fn mod10_check_digit(value: &str) -> Option<u32> {
    let digits = parse_digits(value)?;
    // The appended digit shifts every position by one, so the doubling starts
    // with the last existing digit.
    let sum = luhn_sum(&digits, true);
    Some(match sum % 10 {
        0 => 0,
        rem => 10 - rem,
    })
}

fn luhn_sum(digits: &[u32], double_first: bool) -> u32 {
    let mut double = double_first;
    let mut sum = 0;
    for digit in digits.iter().rev() {
        let mut value = *digit;
        if double {
            value *= 2;
            if value > 9 {
                value -= 9;
            }
        }
        sum += value;
        double = !double;
    }
    sum
}

#[cfg(test)]
mod test {
    use crate::checksum::*;

    #[test]
    fn validate_mod10_numbers() {
        let valid = vec![
            "7907179191", // civic number 790717-9191
            "5560360793", // organisation number
            "2208319232", // Nordea personkonto
            "12345674",
            "1234567897",
            "0",
        ];
        for value in valid {
            assert!(Mod10Checksum.is_valid_match(value), "{value}");
        }
    }

    #[test]
    fn reject_invalid_mod10_numbers() {
        let invalid = vec!["7907179192", "12345675", "", "79071791a1", "790717-9191"];
        for value in invalid {
            assert!(!Mod10Checksum.is_valid_match(value), "{value}");
        }
    }

    #[test]
    fn computed_check_digit_completes_the_number() {
        let prefixes = vec!["790717919", "120315123", "1234567", "123456789", "000101123"];
        for prefix in prefixes {
            let digit = mod10_check_digit(prefix).unwrap();
            let complete = format!("{prefix}{digit}");
            assert!(Mod10Checksum.is_valid_match(&complete), "{complete}");
        }
        assert_eq!(mod10_check_digit("790717919"), Some(1));
        assert_eq!(mod10_check_digit("120315123"), Some(6));
        assert_eq!(mod10_check_digit("12a"), None);
    }
}
