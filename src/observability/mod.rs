pub mod labels;
pub(crate) mod metrics;
