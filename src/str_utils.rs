/// Characters with no significance in written bank account numbers.
pub const ACCOUNT_SEPARATORS: &[char] = &['-', ' ', ',', '.'];

/// Characters allowed between the groups of a Swedish civic or organisation number.
pub const ID_SEPARATORS: &[char] = &[' ', '-'];

/// Remove every occurrence of the given characters
pub fn remove_all(input: &str, to_remove: &[char]) -> String {
    input.chars().filter(|c| !to_remove.contains(c)).collect()
}

/// Keep only the ASCII digits of the input
pub fn digits_only(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// True when the input is non-empty and made only of ASCII digits
pub fn is_numeric(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
}

/// Convert an all-digit string to its digit values. Returns `None` if any
/// character is not an ASCII digit.
pub fn to_digits(input: &str) -> Option<Vec<u32>> {
    input.chars().map(|c| c.to_digit(10)).collect()
}

/// Left pad with zeros up to `width`. Longer inputs are returned unchanged.
pub fn pad_left_zeros(input: &str, width: usize) -> String {
    format!("{input:0>width$}")
}

/// Split an ASCII string at `index`, or `None` if it is too short.
pub fn split_at_checked(input: &str, index: usize) -> Option<(&str, &str)> {
    if index <= input.len() && input.is_char_boundary(index) {
        Some(input.split_at(index))
    } else {
        None
    }
}
