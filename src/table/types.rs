use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// One observation in long form, as produced by the upstream indicator
/// dataset. Serde aliases accept the Spanish column names used by the
/// municipal open-data files.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IndicatorRecord {
    #[serde(alias = "cod_distrito")]
    pub district_code: u8,

    /// Display name; filled from the district lookup table when absent.
    #[serde(default, alias = "distrito")]
    pub district: Option<String>,

    #[serde(alias = "indicador", alias = "indicador_completo")]
    pub indicator: String,

    /// Missing observations are permitted here; they must be resolved
    /// upstream before scoring.
    #[serde(default, alias = "valor", alias = "valor_indicador")]
    pub value: Option<f64>,
}

/// A wide indicator table: one row per district, one column per indicator.
///
/// Column vectors are parallel to the district rows, so `column(name)[i]`
/// belongs to `district_rows()[i]`. Cells are `None` where no observation
/// exists.
#[derive(Debug, Clone, Default)]
pub struct IndicatorTable {
    districts: Vec<(u8, String)>,
    columns: Vec<Column>,
}

#[derive(Debug, Clone)]
struct Column {
    name: String,
    values: Vec<Option<f64>>,
}

impl IndicatorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of district rows.
    pub fn len(&self) -> usize {
        self.districts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.districts.is_empty()
    }

    /// District identity rows `(code, name)` in table order.
    pub fn district_rows(&self) -> &[(u8, String)] {
        &self.districts
    }

    /// Column names in table order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// The cells of a column, parallel to `district_rows()`.
    pub fn column(&self, name: &str) -> Option<&[Option<f64>]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    /// Single cell by district code and indicator name.
    pub fn get(&self, district_code: u8, indicator: &str) -> Option<f64> {
        let row = self.district_index(district_code)?;
        self.column(indicator)?.get(row).copied().flatten()
    }

    /// Append a district row. Existing columns grow with an empty cell.
    pub fn push_district(&mut self, code: u8, name: impl Into<String>) -> Result<()> {
        if self.district_index(code).is_some() {
            bail!("district {} already present in table", code);
        }
        self.districts.push((code, name.into()));
        for col in &mut self.columns {
            col.values.push(None);
        }
        Ok(())
    }

    /// Add a full column. The value vector must match the row count.
    pub fn insert_column(&mut self, name: impl Into<String>, values: Vec<Option<f64>>) -> Result<()> {
        let name = name.into();
        if self.has_column(&name) {
            bail!("column '{}' already present in table", name);
        }
        if values.len() != self.districts.len() {
            bail!(
                "column '{}' has {} values for {} districts",
                name,
                values.len(),
                self.districts.len()
            );
        }
        self.columns.push(Column { name, values });
        Ok(())
    }

    pub(crate) fn district_index(&self, code: u8) -> Option<usize> {
        self.districts.iter().position(|(c, _)| *c == code)
    }

    /// Set a cell only if it is still empty (first non-missing value wins).
    pub(crate) fn fill_cell(&mut self, row: usize, indicator: &str, value: f64) {
        let rows = self.districts.len();
        let idx = match self.columns.iter().position(|c| c.name == indicator) {
            Some(i) => i,
            None => {
                self.columns.push(Column {
                    name: indicator.to_string(),
                    values: vec![None; rows],
                });
                self.columns.len() - 1
            }
        };
        let cell = &mut self.columns[idx].values[row];
        if cell.is_none() {
            *cell = Some(value);
        }
    }

    /// Ensure a column exists even when every cell is missing.
    pub(crate) fn ensure_column(&mut self, indicator: &str) {
        if !self.has_column(indicator) {
            let rows = self.districts.len();
            self.columns.push(Column {
                name: indicator.to_string(),
                values: vec![None; rows],
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_district_table() -> IndicatorTable {
        let mut t = IndicatorTable::new();
        t.push_district(1, "Centro").unwrap();
        t.push_district(3, "Retiro").unwrap();
        t
    }

    #[test]
    fn test_push_district_rejects_duplicates() {
        let mut t = two_district_table();
        assert!(t.push_district(1, "Centro").is_err());
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn test_insert_column_and_get() {
        let mut t = two_district_table();
        t.insert_column("renta_media", vec![Some(16500.0), Some(21400.0)])
            .unwrap();
        assert!(t.has_column("renta_media"));
        assert_eq!(t.get(3, "renta_media"), Some(21400.0));
        assert_eq!(t.get(1, "tasa_paro"), None);
    }

    #[test]
    fn test_insert_column_length_mismatch() {
        let mut t = two_district_table();
        assert!(t.insert_column("renta_media", vec![Some(1.0)]).is_err());
    }

    #[test]
    fn test_insert_column_rejects_duplicate_name() {
        let mut t = two_district_table();
        t.insert_column("renta_media", vec![None, None]).unwrap();
        assert!(t.insert_column("renta_media", vec![None, None]).is_err());
    }

    #[test]
    fn test_push_district_grows_existing_columns() {
        let mut t = two_district_table();
        t.insert_column("renta_media", vec![Some(1.0), Some(2.0)])
            .unwrap();
        t.push_district(5, "Chamartín").unwrap();
        assert_eq!(t.column("renta_media").unwrap().len(), 3);
        assert_eq!(t.get(5, "renta_media"), None);
    }

    #[test]
    fn test_record_deserializes_spanish_aliases() {
        let json = r#"{"cod_distrito": 7, "distrito": "Chamberí", "indicador_completo": "renta_media", "valor_indicador": 23100.5}"#;
        let rec: IndicatorRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.district_code, 7);
        assert_eq!(rec.district.as_deref(), Some("Chamberí"));
        assert_eq!(rec.indicator, "renta_media");
        assert_eq!(rec.value, Some(23100.5));
    }

    #[test]
    fn test_record_missing_value_is_none() {
        let json = r#"{"district_code": 2, "indicator": "tasa_paro"}"#;
        let rec: IndicatorRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.value, None);
        assert_eq!(rec.district, None);
    }
}
