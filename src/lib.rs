// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod bank;
mod checksum;
mod config;
mod dates;
mod error;
mod kind;
mod national_id;
mod observability;
mod registry;
mod str_utils;

// This is the public API of the library
pub use bank::{AccountTypeNo, AccountTypeSe, BankAccount, BankAccountNo, BankAccountSe};
pub use checksum::{
    finnish_check_character, finnish_organisation_check_digit, mod10_check_digit,
    norwegian_civic_check_digits, norwegian_organisation_control_digit, ChecksumAlgorithm,
    FinnishCivicChecksum, FinnishOrganisationChecksum, Mod10Checksum, Mod11Checksum,
    NorwegianAccountChecksum, NorwegianCivicChecksum, NorwegianOrganisationChecksum, Validator,
    FINNISH_CONTROL_CHARS,
};
pub use config::{NorwayRegistryConfig, ParseOptions, RegistryEncoding};
pub use dates::age_in_years;
pub use error::{AgeError, ValidationError};
pub use kind::{Country, IdentifierKind};
pub use national_id::{
    CivicNumberFi, CivicNumberNo, CivicNumberSe, DateOfBirthSe, NationalId, NationalIdentifier,
    OrganisationNumberFi, OrganisationNumberNo, OrganisationNumberSe,
};
pub use observability::labels::Labels;
pub use registry::norway::{NorwayBankRegistry, RegisterRow};
pub use registry::sweden::{lookup_swedish_clearing, SWEDBANK, SWEDISH_CLEARING_REGISTRY};
pub use registry::{BankLookup, ClearingEntry, ClearingRegistry, UNKNOWN_BANK};
