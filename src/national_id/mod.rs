mod finland;
mod norway;
mod sweden;

pub use crate::national_id::finland::{CivicNumberFi, OrganisationNumberFi};
pub use crate::national_id::norway::{CivicNumberNo, OrganisationNumberNo};
pub use crate::national_id::sweden::{CivicNumberSe, DateOfBirthSe, OrganisationNumberSe};

use crate::kind::{Country, IdentifierKind};
use serde::{Deserialize, Serialize};

/// Capabilities shared by every national identification number.
pub trait NationalIdentifier {
    /// Canonical string form. Equality, ordering and hashing use it.
    fn normal_form(&self) -> &str;

    fn is_company(&self) -> bool;

    fn kind(&self) -> IdentifierKind;

    fn country(&self) -> Country {
        self.kind().country()
    }

    fn two_letter_iso_code(&self) -> &'static str {
        self.country().two_letter_iso_code()
    }
}

/// Implements comparison, hashing, `Display`, `Serialize` and the string
/// conversions of a value type in terms of its normal form and its `FromStr`.
macro_rules! normal_form_value {
    ($value:ty) => {
        impl PartialEq for $value {
            fn eq(&self, other: &Self) -> bool {
                $crate::national_id::NationalIdentifier::normal_form(self)
                    == $crate::national_id::NationalIdentifier::normal_form(other)
            }
        }

        impl Eq for $value {}

        impl PartialOrd for $value {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $value {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                $crate::national_id::NationalIdentifier::normal_form(self)
                    .cmp($crate::national_id::NationalIdentifier::normal_form(other))
            }
        }

        impl std::hash::Hash for $value {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                std::hash::Hash::hash(
                    $crate::national_id::NationalIdentifier::normal_form(self),
                    state,
                )
            }
        }

        impl std::fmt::Display for $value {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::national_id::NationalIdentifier::normal_form(self))
            }
        }

        impl serde::Serialize for $value {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str($crate::national_id::NationalIdentifier::normal_form(self))
            }
        }

        impl TryFrom<&str> for $value {
            type Error = $crate::error::ValidationError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl TryFrom<String> for $value {
            type Error = $crate::error::ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }
    };
}

pub(crate) use normal_form_value;

/// Any national identification number, tagged with its kind.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum NationalId {
    CivicNumberSe(CivicNumberSe),
    OrganisationNumberSe(OrganisationNumberSe),
    DateOfBirthSe(DateOfBirthSe),
    CivicNumberNo(CivicNumberNo),
    OrganisationNumberNo(OrganisationNumberNo),
    CivicNumberFi(CivicNumberFi),
    OrganisationNumberFi(OrganisationNumberFi),
}

impl NationalId {
    fn as_identifier(&self) -> &dyn NationalIdentifier {
        match self {
            NationalId::CivicNumberSe(id) => id,
            NationalId::OrganisationNumberSe(id) => id,
            NationalId::DateOfBirthSe(id) => id,
            NationalId::CivicNumberNo(id) => id,
            NationalId::OrganisationNumberNo(id) => id,
            NationalId::CivicNumberFi(id) => id,
            NationalId::OrganisationNumberFi(id) => id,
        }
    }
}

impl NationalIdentifier for NationalId {
    fn normal_form(&self) -> &str {
        self.as_identifier().normal_form()
    }

    fn is_company(&self) -> bool {
        self.as_identifier().is_company()
    }

    fn kind(&self) -> IdentifierKind {
        self.as_identifier().kind()
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for NationalId {
                fn from(id: $variant) -> Self {
                    NationalId::$variant(id)
                }
            }
        )*
    };
}

impl_from_variant!(
    CivicNumberSe,
    OrganisationNumberSe,
    DateOfBirthSe,
    CivicNumberNo,
    OrganisationNumberNo,
    CivicNumberFi,
    OrganisationNumberFi
);

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn shared_capabilities() {
        let ids: Vec<NationalId> = vec![
            "197907179191".parse::<CivicNumberSe>().unwrap().into(),
            "5560360793".parse::<OrganisationNumberSe>().unwrap().into(),
            "790717".parse::<DateOfBirthSe>().unwrap().into(),
            "11077941012".parse::<CivicNumberNo>().unwrap().into(),
            "923609016".parse::<OrganisationNumberNo>().unwrap().into(),
            "131052-308T".parse::<CivicNumberFi>().unwrap().into(),
            "0112038-9".parse::<OrganisationNumberFi>().unwrap().into(),
        ];

        let summary: Vec<(&str, bool, &str, IdentifierKind)> = ids
            .iter()
            .map(|id| (id.normal_form(), id.is_company(), id.two_letter_iso_code(), id.kind()))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("197907179191", false, "SE", IdentifierKind::CivicNumberSe),
                ("5560360793", true, "SE", IdentifierKind::OrganisationNumberSe),
                ("790717", false, "SE", IdentifierKind::DateOfBirthSe),
                ("11077941012", false, "NO", IdentifierKind::CivicNumberNo),
                ("923609016", true, "NO", IdentifierKind::OrganisationNumberNo),
                ("131052-308T", false, "FI", IdentifierKind::CivicNumberFi),
                ("0112038-9", true, "FI", IdentifierKind::OrganisationNumberFi),
            ]
        );
    }

    #[test]
    fn tagged_serialization() {
        let id: NationalId = "923609016".parse::<OrganisationNumberNo>().unwrap().into();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#"{"kind":"organisation_number_no","value":"923609016"}"#);
        assert_eq!(serde_json::from_str::<NationalId>(&json).unwrap(), id);

        let invalid = r#"{"kind":"organisation_number_no","value":"923609017"}"#;
        assert!(serde_json::from_str::<NationalId>(invalid).is_err());
    }

    #[test]
    fn ordered_and_deduplicated_by_normal_form() {
        let set: BTreeSet<NationalId> = ["974760673", "974 760 673", "123456785"]
            .iter()
            .map(|raw| NationalId::from(raw.parse::<OrganisationNumberNo>().unwrap()))
            .collect();
        let normal_forms: Vec<&str> = set.iter().map(|id| id.normal_form()).collect();
        assert_eq!(normal_forms, vec!["123456785", "974760673"]);
    }
}
