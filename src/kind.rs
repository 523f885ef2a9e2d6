use serde::{Deserialize, Serialize};

/// Issuing country of an identifier, displayed as its ISO 3166-1 alpha-2 code.
#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
pub enum Country {
    #[serde(rename = "SE")]
    #[strum(serialize = "SE")]
    Sweden,
    #[serde(rename = "NO")]
    #[strum(serialize = "NO")]
    Norway,
    #[serde(rename = "FI")]
    #[strum(serialize = "FI")]
    Finland,
}

impl Country {
    pub fn two_letter_iso_code(&self) -> &'static str {
        self.into()
    }
}

/// Every identifier family the crate can validate.
#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum IdentifierKind {
    BankAccountSe,
    BankAccountNo,
    CivicNumberSe,
    OrganisationNumberSe,
    DateOfBirthSe,
    CivicNumberNo,
    OrganisationNumberNo,
    CivicNumberFi,
    OrganisationNumberFi,
}

impl IdentifierKind {
    pub fn country(&self) -> Country {
        match self {
            IdentifierKind::BankAccountSe
            | IdentifierKind::CivicNumberSe
            | IdentifierKind::OrganisationNumberSe
            | IdentifierKind::DateOfBirthSe => Country::Sweden,
            IdentifierKind::BankAccountNo
            | IdentifierKind::CivicNumberNo
            | IdentifierKind::OrganisationNumberNo => Country::Norway,
            IdentifierKind::CivicNumberFi | IdentifierKind::OrganisationNumberFi => {
                Country::Finland
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}
