use crate::bank::{
    bank_account_value, clean, strip_repeated_clearing, AccountTypeSe, BankAccount,
};
use crate::checksum::{Mod10Checksum, Mod11Checksum, Validator};
use crate::config::ParseOptions;
use crate::error::ValidationError;
use crate::kind::IdentifierKind;
use crate::national_id::CivicNumberSe;
use crate::observability::metrics::record_outcome;
use crate::registry::sweden::{lookup_swedish_clearing, SWEDBANK};
use crate::registry::{clearing_prefix, BankLookup, CLEARING_LOOKUP_DIGITS};
use crate::str_utils::{is_numeric, pad_left_zeros, split_at_checked};
use serde::Deserialize;
use std::str::FromStr;

const MIN_LENGTH: usize = 6;
const PERSONKONTO_CLEARING: &str = "3300";
const BANK_FILE_ACCOUNT_LENGTH: usize = 12;

/// A validated Swedish bank account.
#[derive(Deserialize, Clone, Debug)]
#[serde(try_from = "String")]
pub struct BankAccountSe {
    clearing_number: String,
    account_number: String,
    account_type: AccountTypeSe,
    bank: &'static str,
}

/// Clearing number, account number and account type as they move through
/// the validation steps. Each step consumes one and returns the next.
#[derive(Clone, Debug, PartialEq, Eq)]
struct AccountParts {
    clearing: String,
    account: String,
    account_type: AccountTypeSe,
}

impl AccountParts {
    fn with_account(self, account: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            ..self
        }
    }

    fn strip_repeated_clearing(self, account_length: usize) -> Self {
        let account =
            strip_repeated_clearing(&self.clearing, &self.account, account_length).to_string();
        self.with_account(account)
    }
}

impl BankAccountSe {
    /// Parses a full account number (clearing number first). Separators are
    /// ignored. Both a 4 and a 5 digit clearing number are tried.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        record_outcome(IdentifierKind::BankAccountSe, Self::resolve(raw))
    }

    pub fn is_valid(raw: &str) -> bool {
        Self::parse(raw).is_ok()
    }

    /// Parses an account given as separate clearing and account numbers.
    pub fn from_parts(
        clearing_number: &str,
        account_number: &str,
    ) -> Result<Self, ValidationError> {
        record_outcome(
            IdentifierKind::BankAccountSe,
            Self::build(&clean(clearing_number), &clean(account_number)),
        )
    }

    fn resolve(raw: &str) -> Result<Self, ValidationError> {
        let cleaned = clean(raw);
        let length = cleaned.chars().count();
        if length < MIN_LENGTH {
            return Err(ValidationError::length("account number", length, "at least 6"));
        }

        let with_four = Self::attempt(&cleaned, 4);
        let with_five = Self::attempt(&cleaned, 5).and_then(|account| {
            if account.bank == SWEDBANK {
                Ok(account)
            } else {
                Err(ValidationError::length(
                    "clearing number",
                    5,
                    "4. Only Swedbank uses 5",
                ))
            }
        });

        match (with_four, with_five) {
            (Ok(four), Ok(five)) if four.bank == SWEDBANK => Ok(five),
            (Ok(_), Ok(_)) => Err(ValidationError::AmbiguousParse(raw.to_string())),
            (Ok(four), Err(_)) => Ok(four),
            (Err(_), Ok(five)) => Ok(five),
            (Err(err), Err(_)) => Err(err),
        }
    }

    fn attempt(cleaned: &str, clearing_length: usize) -> Result<Self, ValidationError> {
        let (clearing, account) =
            split_at_checked(cleaned, clearing_length).ok_or(ValidationError::NonNumericInput {
                field: "clearing number",
            })?;
        Self::build(clearing, account)
    }

    fn build(clearing: &str, account: &str) -> Result<Self, ValidationError> {
        if clearing.is_empty() || account.is_empty() {
            return Err(ValidationError::length(
                if clearing.is_empty() { "clearing number" } else { "account number" },
                0,
                "at least 1",
            ));
        }
        let account = account.trim_start_matches('0');

        if !is_numeric(clearing) {
            return Err(ValidationError::NonNumericInput {
                field: "clearing number",
            });
        }
        if !(4..=5).contains(&clearing.len()) {
            return Err(ValidationError::length("clearing number", clearing.len(), "4-5"));
        }
        if !account.is_empty() && !is_numeric(account) {
            return Err(ValidationError::NonNumericInput {
                field: "account number",
            });
        }

        let prefix = clearing_prefix(clearing).ok_or(ValidationError::NonNumericInput {
            field: "clearing number",
        })?;
        let lookup = lookup_swedish_clearing(prefix);
        if lookup.account_type == AccountTypeSe::Unknown {
            return Err(ValidationError::UnknownIssuer {
                clearing_number: clearing.to_string(),
            });
        }
        let (parts, lookup) = repair_misstored_personkonto(
            AccountParts {
                clearing: clearing.to_string(),
                account: account.to_string(),
                account_type: lookup.account_type,
            },
            lookup,
        )?;
        let is_swedbank = lookup.bank == SWEDBANK;

        let parts = check_account_number(parts, is_swedbank)?;

        // The fifth Swedbank clearing digit only tells the account variants apart.
        let mut clearing_number = parts.clearing;
        if parts.account_type == AccountTypeSe::Type5 && is_swedbank {
            clearing_number.truncate(CLEARING_LOOKUP_DIGITS);
        }

        Ok(Self {
            clearing_number,
            account_number: parts.account,
            account_type: parts.account_type,
            bank: lookup.bank,
        })
    }

    pub fn account_type(&self) -> AccountTypeSe {
        self.account_type
    }

    /// Fixed width form used in bank files: the first four clearing digits
    /// and the account number left padded to 12 digits.
    pub fn bank_file_format(&self) -> Result<String, ValidationError> {
        let clearing = &self.clearing_number;
        if !(4..=5).contains(&clearing.len()) {
            return Err(ValidationError::length("clearing number", clearing.len(), "4-5"));
        }
        let account = pad_left_zeros(&self.account_number, BANK_FILE_ACCOUNT_LENGTH);
        if account.len() > BANK_FILE_ACCOUNT_LENGTH {
            return Err(ValidationError::length(
                "account number",
                account.len(),
                "at most 12",
            ));
        }
        Ok(format!("{}{account}", &clearing[..CLEARING_LOOKUP_DIGITS]))
    }
}

fn check_account_number(
    parts: AccountParts,
    is_swedbank: bool,
) -> Result<AccountParts, ValidationError> {
    match parts.account_type {
        AccountTypeSe::Type1 => validate_type1(parts.strip_repeated_clearing(7)),
        AccountTypeSe::Type2 => validate_type2(parts.strip_repeated_clearing(7)),
        AccountTypeSe::Type3 => validate_type3(parts),
        AccountTypeSe::Type4 => validate_type4(parts.strip_repeated_clearing(9)),
        AccountTypeSe::Type5 if is_swedbank => validate_type5(repair_swedbank(parts)),
        AccountTypeSe::Type5 => validate_type5(parts),
        AccountTypeSe::Unknown => Err(ValidationError::UnknownIssuer {
            clearing_number: parts.clearing,
        }),
    }
}

/// Some stored Nordea personkonto accounts carry clearing 3300 and an 11 digit
/// account whose first four digits are the real clearing number. The repair
/// only applies when that clearing number belongs to a Type2 bank, and the
/// bank is looked up again from it.
fn repair_misstored_personkonto(
    parts: AccountParts,
    lookup: BankLookup<'static, AccountTypeSe>,
) -> Result<(AccountParts, BankLookup<'static, AccountTypeSe>), ValidationError> {
    if parts.clearing != PERSONKONTO_CLEARING
        || parts.account.len() != 11
        || parts.account_type != AccountTypeSe::Type3
    {
        return Ok((parts, lookup));
    }
    let (clearing, account) = parts.account.split_at(CLEARING_LOOKUP_DIGITS);
    let repaired = clearing_prefix(clearing)
        .map(lookup_swedish_clearing)
        .ok_or(ValidationError::NonNumericInput {
            field: "clearing number",
        })?;
    match repaired.account_type {
        AccountTypeSe::Unknown => Err(ValidationError::UnknownIssuer {
            clearing_number: clearing.to_string(),
        }),
        AccountTypeSe::Type2 => Ok((
            AccountParts {
                clearing: clearing.to_string(),
                account: account.to_string(),
                account_type: AccountTypeSe::Type2,
            },
            repaired,
        )),
        _ => Ok((parts, lookup)),
    }
}

/// Personkonto accounts written as a twelve digit civic number drop the century.
fn personkonto_account(account: &str) -> &str {
    if account.len() == 12 && CivicNumberSe::validate(account, &ParseOptions::default()).is_ok() {
        &account[2..]
    } else {
        account
    }
}

/// Swedbank accounts are often written with the fifth clearing digit at the
/// start of the account, or with the five digit clearing repeated.
fn repair_swedbank(parts: AccountParts) -> AccountParts {
    match (parts.clearing.len(), parts.account.len()) {
        (4, 11) => {
            let (fifth_digit, account) = parts.account.split_at(1);
            AccountParts {
                clearing: format!("{}{fifth_digit}", parts.clearing),
                account: account.to_string(),
                account_type: parts.account_type,
            }
        }
        (5, 15) if parts.account.starts_with(&parts.clearing) => {
            let account = parts.account[5..].to_string();
            parts.with_account(account)
        }
        _ => parts,
    }
}

fn require_four_digit_clearing(parts: &AccountParts) -> Result<(), ValidationError> {
    match parts.clearing.len() {
        4 => Ok(()),
        actual => Err(ValidationError::length("clearing number", actual, "4")),
    }
}

fn padded_account(
    account: &str,
    length: usize,
    expected: &'static str,
) -> Result<String, ValidationError> {
    let padded = pad_left_zeros(account, length);
    if padded.len() != length {
        return Err(ValidationError::length("account number", padded.len(), expected));
    }
    Ok(padded)
}

/// Mod-11 over the last three clearing digits and a 7 digit account.
fn validate_type1(parts: AccountParts) -> Result<AccountParts, ValidationError> {
    require_four_digit_clearing(&parts)?;
    let account = padded_account(&parts.account, 7, "7")?;
    if !Mod11Checksum.is_valid_match(&format!("{}{account}", &parts.clearing[1..])) {
        return Err(ValidationError::InvalidChecksum { scheme: "Type 1" });
    }
    Ok(parts.with_account(account))
}

/// Mod-11 over the whole clearing number and a 7 digit account.
fn validate_type2(parts: AccountParts) -> Result<AccountParts, ValidationError> {
    require_four_digit_clearing(&parts)?;
    let account = padded_account(&parts.account, 7, "7")?;
    if !Mod11Checksum.is_valid_match(&format!("{}{account}", parts.clearing)) {
        return Err(ValidationError::InvalidChecksum { scheme: "Type 2" });
    }
    Ok(parts.with_account(account))
}

fn validate_type3(parts: AccountParts) -> Result<AccountParts, ValidationError> {
    let parts = if parts.clearing == PERSONKONTO_CLEARING {
        let account = personkonto_account(&parts.account).to_string();
        parts.with_account(account)
    } else {
        parts
    };
    let parts = parts.strip_repeated_clearing(10);
    require_four_digit_clearing(&parts)?;
    let account = padded_account(&parts.account, 10, "10")?;
    if !Mod10Checksum.is_valid_match(&account) {
        return Err(ValidationError::InvalidChecksum { scheme: "Type 3" });
    }
    Ok(parts.with_account(account))
}

fn validate_type4(parts: AccountParts) -> Result<AccountParts, ValidationError> {
    require_four_digit_clearing(&parts)?;
    let account = padded_account(&parts.account, 9, "9")?;
    if !Mod11Checksum.is_valid_match(&account) {
        return Err(ValidationError::InvalidChecksum { scheme: "Type 4" });
    }
    Ok(parts.with_account(account))
}

/// 7 to 10 digits, never padded.
fn validate_type5(parts: AccountParts) -> Result<AccountParts, ValidationError> {
    let length = parts.account.len();
    if !(7..=10).contains(&length) {
        return Err(ValidationError::length("account number", length, "7-10"));
    }
    if !Mod10Checksum.is_valid_match(&parts.account) {
        return Err(ValidationError::InvalidChecksum { scheme: "Type 5" });
    }
    Ok(parts)
}

impl BankAccount for BankAccountSe {
    fn clearing_number(&self) -> &str {
        &self.clearing_number
    }

    fn account_number(&self) -> &str {
        &self.account_number
    }

    fn bank(&self) -> &str {
        self.bank
    }
}

impl FromStr for BankAccountSe {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for BankAccountSe {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for BankAccountSe {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

bank_account_value!(BankAccountSe);
