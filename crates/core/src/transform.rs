use crate::domain::record::{FIELD_CARBS, FIELD_DIET_TYPE, FIELD_FAT, FIELD_PROTEIN};
use crate::domain::{ChartSeries, MacroRatios, Record};
use std::borrow::Cow;
use std::collections::HashSet;

/// Projects records into index-aligned label/macro arrays, preserving order.
pub fn to_chart_series(records: &[Record]) -> ChartSeries {
    let mut series = ChartSeries::with_capacity(records.len());
    for record in records {
        series.labels.push(record.field(FIELD_DIET_TYPE));
        series.protein.push(record.field(FIELD_PROTEIN));
        series.carbs.push(record.field(FIELD_CARBS));
        series.fat.push(record.field(FIELD_FAT));
    }
    series
}

/// Keeps records whose `Diet_type` is listed in `include`, in their original order.
///
/// An empty `include` means "no filter" and hands back the input as-is.
pub fn filter_by_diet<'a, S: AsRef<str>>(
    records: &'a [Record],
    include: &[S],
) -> Cow<'a, [Record]> {
    if include.is_empty() {
        return Cow::Borrowed(records);
    }

    let wanted: HashSet<&str> = include.iter().map(AsRef::as_ref).collect();
    Cow::Owned(
        records
            .iter()
            .filter(|r| r.diet_type().is_some_and(|d| wanted.contains(d)))
            .cloned()
            .collect(),
    )
}

/// Diet with the largest protein value; ties keep the earliest record.
pub fn highest_protein_diet(records: &[Record]) -> Option<&str> {
    let mut best: Option<(&str, f64)> = None;
    for record in records {
        let (Some(diet), Some(protein)) = (record.diet_type(), record.protein_g()) else {
            continue;
        };
        if best.map_or(true, |(_, p)| protein > p) {
            best = Some((diet, protein));
        }
    }
    best.map(|(diet, _)| diet)
}

/// Protein:carbs and carbs:fat per record, in input order.
pub fn macro_ratios(records: &[Record]) -> Vec<MacroRatios> {
    records
        .iter()
        .map(|r| MacroRatios {
            diet_type: r.diet_type().map(str::to_string),
            protein_to_carbs: ratio(r.protein_g(), r.carbs_g()),
            carbs_to_fat: ratio(r.carbs_g(), r.fat_g()),
        })
        .collect()
}

fn ratio(numerator: Option<f64>, divisor: Option<f64>) -> Option<f64> {
    let (n, d) = (numerator?, divisor?);
    Some(if d == 0.0 { 0.0 } else { n / d })
}
