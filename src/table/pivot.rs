use super::types::{IndicatorRecord, IndicatorTable};
use crate::districts;

/// Pivot long-form records into a wide per-district table.
///
/// Rows appear in order of first appearance of each district code, columns
/// in order of first appearance of each indicator name. When the same
/// (district, indicator) pair occurs more than once, the first non-missing
/// value wins. Records without a district name fall back to the lookup
/// table, then to a `distrito-<code>` placeholder for unknown codes.
pub fn from_records(records: &[IndicatorRecord]) -> IndicatorTable {
    let mut table = IndicatorTable::new();

    for rec in records {
        if table.district_index(rec.district_code).is_none() {
            let name = rec
                .district
                .clone()
                .or_else(|| districts::district_name(rec.district_code).map(String::from))
                .unwrap_or_else(|| format!("distrito-{}", rec.district_code));
            // Cannot fail: the code was just checked as absent.
            let _ = table.push_district(rec.district_code, name);
        }
    }

    for rec in records {
        let row = table
            .district_index(rec.district_code)
            .expect("district registered in first pass");
        match rec.value {
            Some(v) => table.fill_cell(row, &rec.indicator, v),
            None => table.ensure_column(&rec.indicator),
        }
    }

    table
}
