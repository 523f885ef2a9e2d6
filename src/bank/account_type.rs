use serde::{Deserialize, Serialize};

/// Account number types for Swedish bank accounts, following the Bankgirot
/// document "Bank account numbers in Swedish banks".
#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
)]
pub enum AccountTypeSe {
    #[default]
    Unknown,
    /// 4 clearing digits + 7 account digits. Checksum: mod-11 over the last 3
    /// clearing digits and the account (Bankgirot type 1, comment 1).
    Type1,
    /// 4 clearing digits + 7 account digits. Checksum: mod-11 over the whole
    /// clearing number and the account (type 1, comment 2).
    Type2,
    /// 4 clearing digits + 10 account digits. Checksum: mod-10 over the
    /// account (type 2, comment 1).
    Type3,
    /// 4 clearing digits + 9 account digits. Checksum: mod-11 over the
    /// account (type 2, comment 2).
    Type4,
    /// 4-5 clearing digits + 7-10 account digits. Checksum: mod-10 over the
    /// account (type 2, comment 3).
    Type5,
}

/// Norwegian accounts come in a single layout: 4 clearing digits, 6 account
/// digits and a check digit.
#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
)]
pub enum AccountTypeNo {
    Unknown,
    #[default]
    Type1,
}
