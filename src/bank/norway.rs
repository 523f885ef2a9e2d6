use crate::bank::{bank_account_value, clean, strip_repeated_clearing, AccountTypeNo, BankAccount};
use crate::checksum::{Mod11Checksum, Validator};
use crate::error::ValidationError;
use crate::kind::IdentifierKind;
use crate::observability::metrics::record_outcome;
use crate::registry::clearing_prefix;
use crate::registry::norway::NorwayBankRegistry;
use crate::str_utils::{is_numeric, split_at_checked};

const FULL_LENGTH: usize = 11;
const CLEARING_LENGTH: usize = 4;
const ACCOUNT_LENGTH: usize = 7;

/// A validated Norwegian bank account: 4 digit clearing number, 6 digit
/// account and a check digit.
#[derive(Clone, Debug)]
pub struct BankAccountNo {
    clearing_number: String,
    account_number: String,
    account_type: AccountTypeNo,
    bank: String,
}

impl BankAccountNo {
    /// Parses an 11 digit account number. The clearing number must be listed
    /// in `registry`.
    pub fn parse(raw: &str, registry: &NorwayBankRegistry) -> Result<Self, ValidationError> {
        record_outcome(IdentifierKind::BankAccountNo, Self::resolve(raw, registry))
    }

    pub fn is_valid(raw: &str, registry: &NorwayBankRegistry) -> bool {
        Self::parse(raw, registry).is_ok()
    }

    pub fn from_parts(
        clearing_number: &str,
        account_number: &str,
        registry: &NorwayBankRegistry,
    ) -> Result<Self, ValidationError> {
        record_outcome(
            IdentifierKind::BankAccountNo,
            Self::build(&clean(clearing_number), &clean(account_number), registry),
        )
    }

    fn resolve(raw: &str, registry: &NorwayBankRegistry) -> Result<Self, ValidationError> {
        let cleaned = clean(raw);
        let length = cleaned.chars().count();
        if length != FULL_LENGTH {
            return Err(ValidationError::length("account number", length, "11"));
        }
        let (clearing, account) = split_at_checked(&cleaned, CLEARING_LENGTH).ok_or(
            ValidationError::NonNumericInput {
                field: "clearing number",
            },
        )?;
        Self::build(clearing, account, registry)
    }

    fn build(
        clearing: &str,
        account: &str,
        registry: &NorwayBankRegistry,
    ) -> Result<Self, ValidationError> {
        if !is_numeric(clearing) {
            return Err(ValidationError::NonNumericInput {
                field: "clearing number",
            });
        }
        if clearing.len() != CLEARING_LENGTH {
            return Err(ValidationError::length("clearing number", clearing.len(), "4"));
        }
        if !is_numeric(account) {
            return Err(ValidationError::NonNumericInput {
                field: "account number",
            });
        }

        let entry = clearing_prefix(clearing)
            .and_then(|prefix| registry.find(prefix))
            .ok_or_else(|| ValidationError::UnknownIssuer {
                clearing_number: clearing.to_string(),
            })?;

        let account = strip_repeated_clearing(clearing, account, ACCOUNT_LENGTH);
        if account.len() != ACCOUNT_LENGTH {
            return Err(ValidationError::length("account number", account.len(), "7"));
        }
        if !Mod11Checksum.is_valid_match(&format!("{clearing}{account}")) {
            return Err(ValidationError::InvalidChecksum { scheme: "Type 1" });
        }

        Ok(Self {
            clearing_number: clearing.to_string(),
            account_number: account.to_string(),
            account_type: entry.account_type,
            bank: entry.bank.clone(),
        })
    }

    pub fn account_type(&self) -> AccountTypeNo {
        self.account_type
    }
}

impl BankAccount for BankAccountNo {
    fn clearing_number(&self) -> &str {
        &self.clearing_number
    }

    fn account_number(&self) -> &str {
        &self.account_number
    }

    fn bank(&self) -> &str {
        &self.bank
    }
}

bank_account_value!(BankAccountNo);
