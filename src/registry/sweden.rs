use crate::bank::AccountTypeSe;
use crate::registry::{BankLookup, ClearingEntry, ClearingRegistry};
use lazy_static::lazy_static;

pub const SWEDBANK: &str = "Swedbank";
pub const NORDEA: &str = "Nordea";

/// Clearing number series of Swedish banks: (bank, from, to, account type).
const CLEARING_RANGES: &[(&str, u32, u32, AccountTypeSe)] = &[
    ("Avanza Bank", 9550, 9569, AccountTypeSe::Type2),
    ("Citibank", 9040, 9049, AccountTypeSe::Type2),
    ("Danske Bank", 1200, 1399, AccountTypeSe::Type1),
    ("Danske Bank", 2400, 2499, AccountTypeSe::Type1),
    ("Danske Bank", 9180, 9189, AccountTypeSe::Type3),
    ("DnB NOR Bank", 9190, 9199, AccountTypeSe::Type2),
    ("DnB NOR Bank", 9260, 9269, AccountTypeSe::Type2),
    ("Forex Bank", 9400, 9449, AccountTypeSe::Type1),
    ("Fortis Bank S.A/NV Stocholm Branch", 9470, 9479, AccountTypeSe::Type2),
    ("GE Money Bank", 9460, 9469, AccountTypeSe::Type1),
    ("Handelsbanken", 6000, 6999, AccountTypeSe::Type4),
    ("ICA Banken AB", 9270, 9279, AccountTypeSe::Type1),
    ("IKANO Bank", 9170, 9179, AccountTypeSe::Type1),
    ("Länsförsäkringar Bank", 3400, 3409, AccountTypeSe::Type1),
    ("Länsförsäkringar Bank", 9020, 9029, AccountTypeSe::Type2),
    ("Länsförsäkringar Bank", 9060, 9069, AccountTypeSe::Type1),
    ("Marginalen Bank", 9230, 9239, AccountTypeSe::Type1),
    (NORDEA, 1100, 1199, AccountTypeSe::Type1),
    (NORDEA, 1400, 2099, AccountTypeSe::Type1),
    (NORDEA, 3000, 3299, AccountTypeSe::Type1),
    // personkonto
    (NORDEA, 3300, 3300, AccountTypeSe::Type3),
    (NORDEA, 3301, 3399, AccountTypeSe::Type1),
    (NORDEA, 3410, 3781, AccountTypeSe::Type1),
    (NORDEA, 3782, 3782, AccountTypeSe::Type3),
    (NORDEA, 3783, 3999, AccountTypeSe::Type1),
    (NORDEA, 4000, 4999, AccountTypeSe::Type2),
    ("Nordea/Plusgirot", 9500, 9549, AccountTypeSe::Type5),
    ("Nordea/Plusgirot", 9960, 9969, AccountTypeSe::Type5),
    ("Nordnet", 9100, 9109, AccountTypeSe::Type2),
    ("Resurs Bank", 9280, 9289, AccountTypeSe::Type1),
    ("Royal Bank of Scotland", 9090, 9099, AccountTypeSe::Type2),
    ("SBAB", 9250, 9259, AccountTypeSe::Type1),
    ("SEB", 5000, 5999, AccountTypeSe::Type1),
    ("SEB", 9120, 9124, AccountTypeSe::Type1),
    ("SEB", 9130, 9149, AccountTypeSe::Type1),
    ("Skandiabanken", 9150, 9169, AccountTypeSe::Type2),
    ("Sparbanken Syd", 9570, 9579, AccountTypeSe::Type3),
    (
        "Sparbanken Öresund AB (fd Spb Finn, fd Spb Gripen)",
        9300,
        9349,
        AccountTypeSe::Type3,
    ),
    (SWEDBANK, 7000, 7999, AccountTypeSe::Type1),
    (SWEDBANK, 8000, 8999, AccountTypeSe::Type5),
    ("Ålandsbanken Sverige AB", 2300, 2399, AccountTypeSe::Type2),
];

lazy_static! {
    pub static ref SWEDISH_CLEARING_REGISTRY: ClearingRegistry<AccountTypeSe> =
        ClearingRegistry::new(
            CLEARING_RANGES
                .iter()
                .map(|(bank, from, to, account_type)| {
                    ClearingEntry::range(*bank, *from, *to, *account_type)
                })
                .collect(),
            AccountTypeSe::Unknown,
        );
}

/// Bank and account type for the first four digits of a Swedish clearing number.
pub fn lookup_swedish_clearing(clearing: u32) -> BankLookup<'static, AccountTypeSe> {
    SWEDISH_CLEARING_REGISTRY.lookup(clearing)
}
