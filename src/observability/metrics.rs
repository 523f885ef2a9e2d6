use crate::error::ValidationError;
use crate::kind::{Country, IdentifierKind};
use crate::observability::labels::Labels;
use metrics::counter;

/// Counts the outcome of a parse and hands the result back unchanged.
pub(crate) fn record_outcome<T>(
    kind: IdentifierKind,
    result: Result<T, ValidationError>,
) -> Result<T, ValidationError> {
    let labels = Labels::for_identifier(kind);
    match &result {
        Ok(_) => counter!("validation.success", labels).increment(1),
        Err(err) => counter!("validation.failure", labels.with_reason(err)).increment(1),
    }
    result
}

pub(crate) fn record_registry_load(country: Country, rows_loaded: usize, rows_skipped: usize) {
    let labels = Labels::for_country(country);
    counter!("registry.rows_loaded", labels.clone()).increment(rows_loaded as u64);
    counter!("registry.rows_skipped", labels).increment(rows_skipped as u64);
}
