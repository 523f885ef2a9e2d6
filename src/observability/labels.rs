use crate::error::ValidationError;
use crate::kind::{Country, IdentifierKind};
use metrics::{IntoLabels, Label, SharedString};

const IDENTIFIER: &str = "identifier";
const REASON: &str = "reason";
const COUNTRY: &str = "country";

/// Label set attached to the crate's counters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Labels(Vec<Label>);

impl Labels {
    pub fn new(
        labels: &[(
            impl Into<SharedString> + Clone,
            impl Into<SharedString> + Clone,
        )],
    ) -> Self {
        Labels(labels.iter().map(Label::from).collect())
    }

    /// `identifier=<kind>`
    pub fn for_identifier(kind: IdentifierKind) -> Self {
        Labels::new(&[(IDENTIFIER, kind.as_str())])
    }

    /// `country=<ISO code>`
    pub fn for_country(country: Country) -> Self {
        Labels::new(&[(COUNTRY, country.two_letter_iso_code())])
    }

    /// Copy of these labels with the failure reason added.
    pub fn with_reason(&self, error: &ValidationError) -> Labels {
        self.clone_with_labels(&[(REASON, error.reason_code())])
    }

    pub fn clone_with_labels(
        &self,
        additional_labels: &[(
            impl Into<SharedString> + Clone,
            impl Into<SharedString> + Clone,
        )],
    ) -> Labels {
        let mut labels = self.0.clone();
        labels.extend(additional_labels.iter().map(Label::from));
        Labels(labels)
    }
}

impl IntoLabels for Labels {
    fn into_labels(self) -> Vec<Label> {
        self.0
    }
}
