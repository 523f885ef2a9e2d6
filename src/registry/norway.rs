use crate::bank::AccountTypeNo;
use crate::config::{NorwayRegistryConfig, RegistryEncoding};
use crate::kind::Country;
use crate::observability::metrics::record_registry_load;
use crate::registry::{BankLookup, ClearingEntry, ClearingRegistry};
use std::io::Read;

const FIELD_SEPARATOR: char = ';';
const REFERENCE_PREFIX: &str = "Se reg.nr ";

/// One row of the Norwegian bank register:
/// `clearingNumber;branchNumber;checkNumber;bankName`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterRow {
    pub clearing_number: u32,
    pub branch_number: Option<u32>,
    pub check_number: u32,
    pub bank: String,
}

impl RegisterRow {
    /// Parses a register line. Rows whose clearing or check number is not an
    /// integer, or that have fewer than four fields, are rejected.
    pub fn parse(line: &str) -> Option<Self> {
        let mut fields = line.split(FIELD_SEPARATOR);
        let clearing = fields.next()?;
        let branch = fields.next()?;
        let check = fields.next()?;
        let bank = fields.next()?;

        Some(Self {
            clearing_number: clearing.trim().parse().ok()?,
            branch_number: branch.trim().parse().ok(),
            check_number: check.trim().parse().ok()?,
            bank: remove_reference(bank).to_string(),
        })
    }
}

/// Banks that were merged into another institution are listed as
/// `Se reg.nr NNNN <name>`; only `<name>` is kept.
fn remove_reference(bank: &str) -> &str {
    match bank.strip_prefix(REFERENCE_PREFIX) {
        Some(rest) => rest.get(4..).unwrap_or_default().trim(),
        None => bank,
    }
}

/// Exact-value clearing table for Norwegian banks, built from an externally
/// supplied register. Read-only once built; share it by reference.
#[derive(Clone, Debug)]
pub struct NorwayBankRegistry {
    rows: Vec<RegisterRow>,
    registry: ClearingRegistry<AccountTypeNo>,
}

impl NorwayBankRegistry {
    /// Builds the registry from already decoded register lines. Lines that do
    /// not parse are skipped and counted.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let mut skipped = 0;
        let rows: Vec<RegisterRow> = lines
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| {
                let row = RegisterRow::parse(line);
                if row.is_none() {
                    skipped += 1;
                }
                row
            })
            .collect();

        record_registry_load(Country::Norway, rows.len(), skipped);
        Self::from_rows(rows)
    }

    pub fn from_rows(rows: Vec<RegisterRow>) -> Self {
        let entries = rows
            .iter()
            .map(|row| {
                ClearingEntry::exact(row.bank.clone(), row.clearing_number, AccountTypeNo::Type1)
            })
            .collect();
        Self {
            rows,
            // Norway has a single account layout, so unknown banks keep it too.
            registry: ClearingRegistry::new(entries, AccountTypeNo::Type1),
        }
    }

    /// Decodes a register file and builds the registry from its lines.
    pub fn from_bytes(bytes: &[u8], config: &NorwayRegistryConfig) -> Self {
        let text = match config.encoding {
            RegistryEncoding::Utf8 => encoding_rs::UTF_8.decode(bytes).0,
            RegistryEncoding::Windows1252 => encoding_rs::WINDOWS_1252.decode(bytes).0,
        };
        let skip = usize::from(config.skip_header);
        Self::from_lines(text.lines().skip(skip))
    }

    pub fn from_reader<R: Read>(
        mut reader: R,
        config: &NorwayRegistryConfig,
    ) -> std::io::Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(Self::from_bytes(&bytes, config))
    }

    pub fn find(&self, clearing: u32) -> Option<&ClearingEntry<AccountTypeNo>> {
        self.registry.find(clearing)
    }

    pub fn lookup(&self, clearing: u32) -> BankLookup<'_, AccountTypeNo> {
        self.registry.lookup(clearing)
    }

    pub fn rows(&self) -> &[RegisterRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::registry::UNKNOWN_BANK;
    use metrics::{Key, Label};
    use metrics_util::debugging::DebugValue;
    use metrics_util::debugging::DebuggingRecorder;
    use metrics_util::CompositeKey;
    use metrics_util::MetricKind::Counter;

    const REGISTER: &str = "Bank identifier;Branch;Check;Bank name\n\
        1234;;5;Testbanken ASA\n\
        1503;12;2;DNB Bank ASA\n\
        abcd;;1;Broken clearing\n\
        1594;;x;Broken check\n\
        2801;;7;Se reg.nr 1503 DNB Bank ASA\n";

    #[test]
    fn parse_register_rows() {
        assert_eq!(
            RegisterRow::parse("1503;12;2;DNB Bank ASA"),
            Some(RegisterRow {
                clearing_number: 1503,
                branch_number: Some(12),
                check_number: 2,
                bank: "DNB Bank ASA".to_string(),
            })
        );
        assert_eq!(
            RegisterRow::parse("1234;;5;Testbanken ASA").map(|row| row.branch_number),
            Some(None)
        );
        assert_eq!(RegisterRow::parse("1234;;5"), None);
        assert_eq!(RegisterRow::parse("abcd;;5;Bank"), None);
        assert_eq!(RegisterRow::parse("1234;;x;Bank"), None);
    }

    #[test]
    fn merged_bank_references_are_removed() {
        assert_eq!(remove_reference("Se reg.nr 1503 DNB Bank ASA"), "DNB Bank ASA");
        assert_eq!(remove_reference("Se reg.nr 15"), "");
        assert_eq!(remove_reference("Sparebank 1"), "Sparebank 1");
    }

    #[test]
    fn header_is_skipped_and_bad_rows_ignored() {
        let registry = NorwayBankRegistry::from_bytes(
            REGISTER.as_bytes(),
            &NorwayRegistryConfig::default().encoding(RegistryEncoding::Utf8),
        );
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.lookup(1234).bank, "Testbanken ASA");
        assert_eq!(registry.lookup(2801).bank, "DNB Bank ASA");
        assert_eq!(registry.lookup(1503).account_type, AccountTypeNo::Type1);
        assert_eq!(registry.find(1594), None);
        assert_eq!(
            registry.lookup(9999),
            BankLookup {
                bank: UNKNOWN_BANK,
                account_type: AccountTypeNo::Type1
            }
        );
    }

    #[test]
    fn header_can_be_kept() {
        let registry = NorwayBankRegistry::from_bytes(
            b"1234;;5;Testbanken ASA",
            &NorwayRegistryConfig::default().skip_header(false),
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn windows_1252_names_are_decoded() {
        // "Sparebanken Sør" with 0xF8 for 'ø'
        let mut bytes = b"header\n4312;;1;Sparebanken S".to_vec();
        bytes.push(0xF8);
        bytes.push(b'r');

        let registry = NorwayBankRegistry::from_bytes(&bytes, &NorwayRegistryConfig::default());
        assert_eq!(registry.lookup(4312).bank, "Sparebanken Sør");
    }

    #[test]
    fn from_reader_reads_everything() {
        let registry = NorwayBankRegistry::from_reader(
            REGISTER.as_bytes(),
            &NorwayRegistryConfig::default(),
        )
        .unwrap();
        assert_eq!(registry.rows().len(), 3);
        assert!(!registry.is_empty());
    }

    #[test]
    fn registry_load_is_counted() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        metrics::with_local_recorder(&recorder, || {
            NorwayBankRegistry::from_bytes(REGISTER.as_bytes(), &NorwayRegistryConfig::default());
        });

        let snapshot = snapshotter.snapshot().into_hashmap();
        let labels = vec![Label::new("country", "NO")];

        let loaded = CompositeKey::new(
            Counter,
            Key::from_parts("registry.rows_loaded", labels.clone()),
        );
        let skipped = CompositeKey::new(Counter, Key::from_parts("registry.rows_skipped", labels));

        assert_eq!(
            snapshot.get(&loaded).expect("metric not found"),
            &(None, None, DebugValue::Counter(3))
        );
        assert_eq!(
            snapshot.get(&skipped).expect("metric not found"),
            &(None, None, DebugValue::Counter(2))
        );
    }
}
