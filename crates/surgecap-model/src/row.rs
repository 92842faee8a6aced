use std::collections::BTreeMap;
use std::fmt;

/// A cell value after normalization.
///
/// Converters are total: a value outside a converter's domain becomes
/// `Missing`, never an error and never a raw string left in a field declared
/// numeric.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Number(f64),
    Missing,
}

impl Value {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// CSV field representation. `Missing` writes as the empty field.
    pub fn as_csv_field(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => format_number(*n),
            Self::Missing => String::new(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::Missing => Ok(()),
        }
    }
}

/// Whole numbers render without a trailing `.0` so coerced survey answers
/// round-trip as `1`/`0` in the output CSV.
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

/// One CSV line as read from the feed: raw header string to raw value, in
/// input column order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceRow {
    fields: Vec<(String, String)>,
}

impl SourceRow {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(header, value)| (header.as_str(), value.as_str()))
    }

    pub fn get(&self, header: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(h, _)| h == header)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, String)> for SourceRow {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// One row after normalization: canonical short name to (possibly coerced,
/// location-repaired) value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedRow {
    values: BTreeMap<String, Value>,
}

impl NormalizedRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, short_name: impl Into<String>, value: Value) {
        self.values.insert(short_name.into(), value);
    }

    pub fn get(&self, short_name: &str) -> Option<&Value> {
        self.values.get(short_name)
    }

    pub fn contains(&self, short_name: &str) -> bool {
        self.values.contains_key(short_name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Restrict the row to the given column set, dropping everything else.
    pub fn retain_columns(&mut self, wanted: &[&str]) {
        self.values.retain(|name, _| wanted.contains(&name.as_str()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_numbers_render_without_fraction() {
        assert_eq!(Value::Number(1.0).as_csv_field(), "1");
        assert_eq!(Value::Number(0.0).as_csv_field(), "0");
        assert_eq!(Value::Number(-75.28).as_csv_field(), "-75.28");
    }

    #[test]
    fn missing_renders_empty() {
        assert_eq!(Value::Missing.as_csv_field(), "");
    }

    #[test]
    fn retain_columns_drops_unlisted_fields() {
        let mut row = NormalizedRow::new();
        row.insert("hospitalname", Value::text("Test Hospital"));
        row.insert("burnstaff", Value::text("4"));
        row.retain_columns(&["hospitalname"]);
        assert!(row.contains("hospitalname"));
        assert!(!row.contains("burnstaff"));
        assert_eq!(row.len(), 1);
    }
}
