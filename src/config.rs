use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;

/// Options shared by the national identification parsers.
#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Accept ten-digit Swedish civic numbers and guess the century.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub guess_year_when_ten_digits: bool,

    /// Require Norwegian civic numbers to carry a real calendar date.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub strict_birth_date: bool,

    /// Date used as "today" when guessing centuries. Defaults to the local date.
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn guess_year_when_ten_digits(&self, guess_year_when_ten_digits: bool) -> Self {
        self.mutate_clone(|x| x.guess_year_when_ten_digits = guess_year_when_ten_digits)
    }

    pub fn strict_birth_date(&self, strict_birth_date: bool) -> Self {
        self.mutate_clone(|x| x.strict_birth_date = strict_birth_date)
    }

    pub fn reference_date(&self, reference_date: NaiveDate) -> Self {
        self.mutate_clone(|x| x.reference_date = Some(reference_date))
    }

    pub(crate) fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}

/// Character encoding of a Norwegian bank register file.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RegistryEncoding {
    Utf8,
    /// The register published by Bits is Windows-1252.
    #[default]
    Windows1252,
}

#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NorwayRegistryConfig {
    /// The first line of the register file holds column names.
    #[serde(default = "default_skip_header")]
    pub skip_header: bool,

    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub encoding: RegistryEncoding,
}

fn default_skip_header() -> bool {
    true
}

impl Default for NorwayRegistryConfig {
    fn default() -> Self {
        Self {
            skip_header: default_skip_header(),
            encoding: RegistryEncoding::default(),
        }
    }
}

impl NorwayRegistryConfig {
    pub fn skip_header(&self, skip_header: bool) -> Self {
        self.mutate_clone(|x| x.skip_header = skip_header)
    }

    pub fn encoding(&self, encoding: RegistryEncoding) -> Self {
        self.mutate_clone(|x| x.encoding = encoding)
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_options_from_json() {
        let options: ParseOptions = serde_json::from_str(
            r#"{"guess_year_when_ten_digits": true, "reference_date": "2012-03-15"}"#,
        )
        .unwrap();
        assert_eq!(
            options,
            ParseOptions::new()
                .guess_year_when_ten_digits(true)
                .reference_date(NaiveDate::from_ymd_opt(2012, 3, 15).unwrap())
        );
        assert!(!options.strict_birth_date);
    }

    #[test]
    fn null_fields_fall_back_to_defaults() {
        let options: ParseOptions = serde_json::from_str(
            r#"{"guess_year_when_ten_digits": null, "strict_birth_date": null}"#,
        )
        .unwrap();
        assert_eq!(options, ParseOptions::default());

        let config: NorwayRegistryConfig =
            serde_json::from_str(r#"{"encoding": null}"#).unwrap();
        assert_eq!(config, NorwayRegistryConfig::default());
        assert!(config.skip_header);
        assert_eq!(config.encoding, RegistryEncoding::Windows1252);
    }

    #[test]
    fn registry_config_from_json() {
        let config: NorwayRegistryConfig =
            serde_json::from_str(r#"{"skip_header": false, "encoding": "utf8"}"#).unwrap();
        assert_eq!(
            config,
            NorwayRegistryConfig::default()
                .skip_header(false)
                .encoding(RegistryEncoding::Utf8)
        );
    }

    #[test]
    fn today_uses_reference_date_when_set() {
        let date = NaiveDate::from_ymd_opt(2015, 7, 16).unwrap();
        assert_eq!(ParseOptions::new().reference_date(date).today(), date);
    }

    #[test]
    fn builder_does_not_mutate_original() {
        let options = ParseOptions::new();
        let strict = options.strict_birth_date(true);
        assert!(!options.strict_birth_date);
        assert!(strict.strict_birth_date);
    }
}
