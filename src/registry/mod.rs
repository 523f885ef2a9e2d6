pub mod norway;
pub mod sweden;

/// Bank name reported when a clearing number is not in the registry.
pub const UNKNOWN_BANK: &str = "Unknown bank";

/// Number of leading clearing digits used for the registry lookup.
pub const CLEARING_LOOKUP_DIGITS: usize = 4;

/// A bank and account type for an inclusive range of clearing numbers. Single
/// value entries have `from == to`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClearingEntry<T> {
    pub bank: String,
    pub from: u32,
    pub to: u32,
    pub account_type: T,
}

impl<T> ClearingEntry<T> {
    pub fn range(bank: impl Into<String>, from: u32, to: u32, account_type: T) -> Self {
        Self {
            bank: bank.into(),
            from,
            to,
            account_type,
        }
    }

    pub fn exact(bank: impl Into<String>, clearing: u32, account_type: T) -> Self {
        Self::range(bank, clearing, clearing, account_type)
    }

    pub fn contains(&self, clearing: u32) -> bool {
        self.from <= clearing && clearing <= self.to
    }
}

/// Result of a registry lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BankLookup<'a, T> {
    pub bank: &'a str,
    pub account_type: T,
}

/// Ordered, read-only table of clearing entries. Lookups return the first
/// entry, in declared order, whose range contains the clearing number.
#[derive(Clone, Debug)]
pub struct ClearingRegistry<T> {
    entries: Vec<ClearingEntry<T>>,
    fallback: T,
}

impl<T: Copy> ClearingRegistry<T> {
    /// `fallback` is the account type reported alongside [`UNKNOWN_BANK`].
    pub fn new(entries: Vec<ClearingEntry<T>>, fallback: T) -> Self {
        Self { entries, fallback }
    }

    pub fn find(&self, clearing: u32) -> Option<&ClearingEntry<T>> {
        self.entries.iter().find(|entry| entry.contains(clearing))
    }

    pub fn lookup(&self, clearing: u32) -> BankLookup<'_, T> {
        match self.find(clearing) {
            Some(entry) => BankLookup {
                bank: &entry.bank,
                account_type: entry.account_type,
            },
            None => BankLookup {
                bank: UNKNOWN_BANK,
                account_type: self.fallback,
            },
        }
    }

    pub fn entries(&self) -> &[ClearingEntry<T>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Numeric value of the first four digits of a clearing number. Swedbank
/// writes a fifth digit that is not part of the lookup.
pub fn clearing_prefix(clearing_number: &str) -> Option<u32> {
    let prefix = clearing_number.get(..CLEARING_LOOKUP_DIGITS)?;
    if !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    prefix.parse().ok()
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Kind {
        Unknown,
        A,
        B,
    }

    fn registry() -> ClearingRegistry<Kind> {
        ClearingRegistry::new(
            vec![
                ClearingEntry::range("Bank A", 1000, 1999, Kind::A),
                ClearingEntry::exact("Bank B", 1500, Kind::B),
                ClearingEntry::range("Bank B", 2000, 2099, Kind::B),
            ],
            Kind::Unknown,
        )
    }

    #[test]
    fn first_match_in_declared_order_wins() {
        let registry = registry();
        assert_eq!(
            registry.lookup(1500),
            BankLookup {
                bank: "Bank A",
                account_type: Kind::A
            }
        );
        assert_eq!(registry.lookup(2000).bank, "Bank B");
        assert_eq!(registry.lookup(2099).account_type, Kind::B);
    }

    #[test]
    fn unknown_clearing_uses_fallback() {
        let registry = registry();
        assert_eq!(
            registry.lookup(999),
            BankLookup {
                bank: UNKNOWN_BANK,
                account_type: Kind::Unknown
            }
        );
        assert_eq!(registry.find(2100), None);
        assert_eq!(registry.len(), 3);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_clearing_prefix() {
        assert_eq!(clearing_prefix("8327"), Some(8327));
        assert_eq!(clearing_prefix("83279"), Some(8327));
        assert_eq!(clearing_prefix("0012"), Some(12));
        assert_eq!(clearing_prefix("832"), None);
        assert_eq!(clearing_prefix("83a7"), None);
        assert_eq!(clearing_prefix("+327"), None);
    }
}
