use crate::checksum::Validator;

const HETU_LENGTH: usize = 11;

/// Check characters indexed by `DDMMYYZZZ mod 31`.
pub const FINNISH_CONTROL_CHARS: &str = "0123456789ABCDEFHJKLMNPRSTUVWXY";

/// Finnish personal identity code (henkilötunnus) check character.
///
/// Only checks the structure and the check character, the embedded date is
/// validated by [`crate::CivicNumberFi`].
pub struct FinnishCivicChecksum;

impl Validator for FinnishCivicChecksum {
    fn is_valid_match(&self, value: &str) -> bool {
        /*
         * DDMMYYCZZZQ where:
         * - DDMMYY is the date of birth
         * - C is the century marker ('+' 1800s, '-' 1900s, 'A' 2000s)
         * - ZZZ is the individual number
         * - Q is the control character
         */
        if value.len() != HETU_LENGTH || !value.is_ascii() {
            return false;
        }

        let date_part = &value[..6];
        let century_marker = value.as_bytes()[6];
        let individual_number = &value[7..10];
        let control_char = value.as_bytes()[10] as char;

        if !matches!(century_marker, b'-' | b'+' | b'A') {
            return false;
        }

        finnish_check_character(date_part, individual_number) == Some(control_char)
    }
}

/// Computes the check character for a six digit date part and a three digit
/// individual number. `None` if either part is not made of the expected digits.
pub fn finnish_check_character(date_part: &str, individual_number: &str) -> Option<char> {
    if date_part.len() != 6 || individual_number.len() != 3 {
        return None;
    }
    if !date_part
        .bytes()
        .chain(individual_number.bytes())
        .all(|b| b.is_ascii_digit())
    {
        return None;
    }
    // at most 999_999_999, fits in a u32
    let numeric_value: u32 = format!("{date_part}{individual_number}").parse().ok()?;
    FINNISH_CONTROL_CHARS
        .chars()
        .nth((numeric_value % 31) as usize)
}
