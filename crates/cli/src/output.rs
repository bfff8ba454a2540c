use diet_insights_core::domain::{DatasetEnvelope, Record};
use diet_insights_core::transform;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Chart,
    Envelope,
    Ratios,
}

/// Pretty JSON for `records`, which may be a filtered subset of `envelope.records`.
pub fn render(
    view: View,
    envelope: &DatasetEnvelope,
    records: &[Record],
) -> serde_json::Result<String> {
    match view {
        View::Chart => serde_json::to_string_pretty(&transform::to_chart_series(records)),
        View::Envelope => serde_json::to_string_pretty(&envelope.with_records(records.to_vec())),
        View::Ratios => serde_json::to_string_pretty(&transform::macro_ratios(records)),
    }
}
