mod account_type;
mod norway;
mod sweden;

pub use crate::bank::account_type::{AccountTypeNo, AccountTypeSe};
pub use crate::bank::norway::BankAccountNo;
pub use crate::bank::sweden::BankAccountSe;

use crate::str_utils::{remove_all, ACCOUNT_SEPARATORS};

/// Common view of a validated bank account.
pub trait BankAccount {
    fn clearing_number(&self) -> &str;

    /// The account number without the clearing number.
    fn account_number(&self) -> &str;

    fn bank(&self) -> &str;

    /// Clearing number followed by account number, no separators.
    fn canonical(&self) -> String {
        format!("{}{}", self.clearing_number(), self.account_number())
    }
}

/// Removes the separators people write in account numbers.
pub(crate) fn clean(raw: &str) -> String {
    remove_all(raw, ACCOUNT_SEPARATORS)
}

/// Drops a clearing number that was repeated at the start of the account
/// number, when the account is longer than `account_length`.
pub(crate) fn strip_repeated_clearing<'a>(
    clearing: &str,
    account: &'a str,
    account_length: usize,
) -> &'a str {
    if account.len() > account_length {
        if let Some(rest) = account.strip_prefix(clearing) {
            return rest;
        }
    }
    account
}

/// Implements `Display`, `Serialize` and equality of an account type in
/// terms of [`BankAccount`].
macro_rules! bank_account_value {
    ($account:ty) => {
        impl std::fmt::Display for $account {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                use $crate::bank::BankAccount;
                write!(
                    f,
                    "Bank: {}, Clearing: {}, Account: {}",
                    self.bank(),
                    self.clearing_number(),
                    self.account_number()
                )
            }
        }

        impl serde::Serialize for $account {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&$crate::bank::BankAccount::canonical(self))
            }
        }

        impl PartialEq for $account {
            fn eq(&self, other: &Self) -> bool {
                $crate::bank::BankAccount::canonical(self)
                    == $crate::bank::BankAccount::canonical(other)
            }
        }

        impl Eq for $account {}

        impl std::hash::Hash for $account {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                std::hash::Hash::hash(&$crate::bank::BankAccount::canonical(self), state)
            }
        }
    };
}

pub(crate) use bank_account_value;
