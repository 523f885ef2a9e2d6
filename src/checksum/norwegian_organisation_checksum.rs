use crate::checksum::{mod11_complement, parse_digits, Validator};

const ORGANISATION_NUMBER_LENGTH: usize = 9;

/// Norwegian organisation number (organisasjonsnummer) control digit.
pub struct NorwegianOrganisationChecksum;

impl Validator for NorwegianOrganisationChecksum {
    fn is_valid_match(&self, value: &str) -> bool {
        // https://www.brreg.no/om-oss/registrene-vare/om-enhetsregisteret/organisasjonsnummeret/
        if value.len() != ORGANISATION_NUMBER_LENGTH {
            return false;
        }
        match parse_digits(value) {
            Some(digits) => {
                let (body, control) = digits.split_at(digits.len() - 1);
                norwegian_organisation_control_digit(body) == Some(control[0])
            }
            None => false,
        }
    }
}

/// Computes the control digit for the digits preceding it. The weights 2..=7
/// are applied cyclically starting from the rightmost digit. Returns `None`
/// when the computed control is 10, which no valid number can carry.
pub fn norwegian_organisation_control_digit(body: &[u32]) -> Option<u32> {
    let sum: u32 = body
        .iter()
        .rev()
        .zip((2..=7).cycle())
        .map(|(digit, weight)| digit * weight)
        .sum();

    match mod11_complement(sum) {
        control if control >= 10 => None,
        control => Some(control),
    }
}

#[cfg(test)]
mod test {
    use crate::checksum::*;

    #[test]
    fn validate_norwegian_organisation_numbers() {
        // 123456785 is the example used by Brønnøysundregistrene
        let valid = vec!["123456785", "974760673", "923609016"];
        for value in valid {
            assert!(NorwegianOrganisationChecksum.is_valid_match(value), "{value}");
        }
    }

    #[test]
    fn reject_invalid_norwegian_organisation_numbers() {
        let invalid = vec!["123456784", "12345678", "1234567850", "12345678a"];
        for value in invalid {
            assert!(
                !NorwegianOrganisationChecksum.is_valid_match(value),
                "{value}"
            );
        }
    }

    #[test]
    fn control_digit_of_ten_is_rejected() {
        // a weighted sum of 0 gives 11, folded to 0
        assert_eq!(
            norwegian_organisation_control_digit(&[0, 0, 0, 0, 0, 0, 0, 0]),
            Some(0)
        );
        let mut body = [0; 8];
        // rightmost weight is 2, so 6 * 2 = 12 -> 12 mod 11 = 1 -> control 10
        body[7] = 6;
        assert_eq!(norwegian_organisation_control_digit(&body), None);
        assert_eq!(norwegian_organisation_control_digit(&[1, 2, 3, 4, 5, 6, 7, 8]), Some(5));
    }
}
