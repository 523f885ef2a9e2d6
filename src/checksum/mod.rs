mod finnish_civic_checksum;
mod finnish_organisation_checksum;
mod mod10_checksum;
mod mod11_checksum;
mod norwegian_account_checksum;
mod norwegian_civic_checksum;
mod norwegian_organisation_checksum;

pub use crate::checksum::finnish_civic_checksum::{
    finnish_check_character, FinnishCivicChecksum, FINNISH_CONTROL_CHARS,
};
pub use crate::checksum::finnish_organisation_checksum::{
    finnish_organisation_check_digit, FinnishOrganisationChecksum,
};
pub use crate::checksum::mod10_checksum::{mod10_check_digit, Mod10Checksum};
pub use crate::checksum::mod11_checksum::Mod11Checksum;
pub use crate::checksum::norwegian_account_checksum::NorwegianAccountChecksum;
pub use crate::checksum::norwegian_civic_checksum::{
    norwegian_civic_check_digits, NorwegianCivicChecksum,
};
pub use crate::checksum::norwegian_organisation_checksum::{
    norwegian_organisation_control_digit, NorwegianOrganisationChecksum,
};
use serde::{Deserialize, Serialize};

pub trait Validator: Send + Sync {
    fn is_valid_match(&self, value: &str) -> bool;
}

/// Every checksum scheme known to the crate, usable wherever the scheme is
/// only known at runtime (e.g. from configuration).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum ChecksumAlgorithm {
    Mod10,
    Mod11,
    NorwegianAccountMod11,
    NorwegianOrganisationNumber,
    NorwegianCivicNumber,
    FinnishCivicNumber,
    FinnishOrganisationNumber,
}

impl Validator for ChecksumAlgorithm {
    fn is_valid_match(&self, value: &str) -> bool {
        match self {
            ChecksumAlgorithm::Mod10 => Mod10Checksum.is_valid_match(value),
            ChecksumAlgorithm::Mod11 => Mod11Checksum.is_valid_match(value),
            ChecksumAlgorithm::NorwegianAccountMod11 => {
                NorwegianAccountChecksum.is_valid_match(value)
            }
            ChecksumAlgorithm::NorwegianOrganisationNumber => {
                NorwegianOrganisationChecksum.is_valid_match(value)
            }
            ChecksumAlgorithm::NorwegianCivicNumber => {
                NorwegianCivicChecksum.is_valid_match(value)
            }
            ChecksumAlgorithm::FinnishCivicNumber => FinnishCivicChecksum.is_valid_match(value),
            ChecksumAlgorithm::FinnishOrganisationNumber => {
                FinnishOrganisationChecksum.is_valid_match(value)
            }
        }
    }
}

/// Parse a string made only of ASCII digits. Empty input is rejected.
fn parse_digits(value: &str) -> Option<Vec<u32>> {
    if value.is_empty() {
        return None;
    }
    value.chars().map(|c| c.to_digit(10)).collect()
}

/// Sum of pairwise products of digits and weights, over the shorter of the two
#[inline]
fn weighted_sum(digits: &[u32], weights: &[u32]) -> u32 {
    digits.iter().zip(weights).map(|(d, w)| d * w).sum()
}

/// `11 - (sum mod 11)`, with 11 folded to 0. A result of 10 has no digit.
#[inline]
fn mod11_complement(sum: u32) -> u32 {
    match 11 - (sum % 11) {
        11 => 0,
        k => k,
    }
}
