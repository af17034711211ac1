//! Stateless data-preparation transforms for raw indicator records.
//!
//! The municipal source files carry accented headers, Spanish number
//! formatting and stray whitespace. Everything here is pure: inputs are
//! borrowed or consumed and a new value is returned, caller data is never
//! mutated in place.

use crate::table::IndicatorRecord;

/// Normalize a header or indicator name: strip Spanish diacritics, lowercase,
/// and replace spaces and hyphens with underscores.
///
/// `"Tasa de Paro"` becomes `"tasa_de_paro"`, `"Enseñanza"` becomes
/// `"ensenanza"`.
pub fn normalize_header(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.trim().chars() {
        for lc in c.to_lowercase() {
            out.push(match lc {
                'á' | 'à' | 'â' | 'ä' => 'a',
                'é' | 'è' | 'ê' | 'ë' => 'e',
                'í' | 'ì' | 'î' | 'ï' => 'i',
                'ó' | 'ò' | 'ô' | 'ö' => 'o',
                'ú' | 'ù' | 'û' | 'ü' => 'u',
                'ñ' => 'n',
                'ç' => 'c',
                ' ' | '-' => '_',
                other => other,
            });
        }
    }
    out
}

/// Parse a number in Spanish formatting: `.` is a thousands separator and
/// `,` the decimal mark. `"1.234,56"` parses to `1234.56`.
///
/// Unparseable or empty input yields None. Values already in standard
/// formatting must not pass through here (`"10.5"` would read as `105`).
pub fn parse_decimal(s: &str) -> Option<f64> {
    let cleaned = s.trim().replace('.', "").replace(',', ".");
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}

/// Clean a batch of records: trim district names, normalize indicator names.
/// Returns a new vector in the same order; values are untouched.
pub fn clean_records(records: Vec<IndicatorRecord>) -> Vec<IndicatorRecord> {
    records
        .into_iter()
        .map(|rec| IndicatorRecord {
            district_code: rec.district_code,
            district: rec.district.map(|d| d.trim().to_string()),
            indicator: normalize_header(&rec.indicator),
            value: rec.value,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header_strips_diacritics() {
        assert_eq!(normalize_header("Población"), "poblacion");
        assert_eq!(normalize_header("Enseñanza"), "ensenanza");
        assert_eq!(normalize_header("Vicálvaro"), "vicalvaro");
    }

    #[test]
    fn test_normalize_header_spaces_and_hyphens() {
        assert_eq!(normalize_header("Tasa de Paro"), "tasa_de_paro");
        assert_eq!(
            normalize_header("Moncloa-Aravaca densidad"),
            "moncloa_aravaca_densidad"
        );
    }

    #[test]
    fn test_normalize_header_already_clean() {
        assert_eq!(normalize_header("renta_media"), "renta_media");
    }

    #[test]
    fn test_normalize_header_trims() {
        assert_eq!(normalize_header("  renta media "), "renta_media");
    }

    #[test]
    fn test_parse_decimal_spanish_formats() {
        assert_eq!(parse_decimal("1.234,56"), Some(1234.56));
        assert_eq!(parse_decimal("28,5"), Some(28.5));
        assert_eq!(parse_decimal("16.500"), Some(16500.0));
        assert_eq!(parse_decimal(" 42 "), Some(42.0));
    }

    #[test]
    fn test_parse_decimal_invalid() {
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("   "), None);
        assert_eq!(parse_decimal("n/d"), None);
    }

    #[test]
    fn test_clean_records_is_pure_and_ordered() {
        let records = vec![
            IndicatorRecord {
                district_code: 1,
                district: Some("  Centro ".to_string()),
                indicator: "Renta Media".to_string(),
                value: Some(16500.0),
            },
            IndicatorRecord {
                district_code: 2,
                district: None,
                indicator: "Tasa de Paro".to_string(),
                value: None,
            },
        ];
        let cleaned = clean_records(records);
        assert_eq!(cleaned.len(), 2);
        assert_eq!(cleaned[0].district.as_deref(), Some("Centro"));
        assert_eq!(cleaned[0].indicator, "renta_media");
        assert_eq!(cleaned[0].value, Some(16500.0));
        assert_eq!(cleaned[1].indicator, "tasa_de_paro");
        assert_eq!(cleaned[1].value, None);
    }
}
