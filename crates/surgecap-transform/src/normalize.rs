//! Per-row normalization: header remap, value coercion, location repair.

use std::collections::BTreeSet;

use surgecap_geo::{GeoError, LocationDirectory};
use surgecap_header::HeaderLookup;
use surgecap_model::{NormalizedRow, SourceRow, Value};
use surgecap_schema::SurveyProfile;

use crate::convert::ConverterTable;

/// Shared, read-only context for normalizing every row of one run.
#[derive(Debug, Clone, Copy)]
pub struct RowNormalizer<'a> {
    lookup: &'a HeaderLookup,
    directory: &'a LocationDirectory,
    converters: &'a ConverterTable,
    profile: &'a SurveyProfile,
}

impl<'a> RowNormalizer<'a> {
    pub fn new(
        lookup: &'a HeaderLookup,
        directory: &'a LocationDirectory,
        converters: &'a ConverterTable,
        profile: &'a SurveyProfile,
    ) -> Self {
        Self {
            lookup,
            directory,
            converters,
            profile,
        }
    }

    /// Normalize one row.
    ///
    /// Headers that resolve to no canonical field are added to `unmapped`
    /// (reported once per file by the caller) and dropped from the output.
    /// The facility name is rewritten to canonical form, coordinates are
    /// unconditionally taken from the directory (the feed's own values are
    /// known-bad often enough that the geocoded ones always win), and the
    /// county is filled in when the feed has none. A facility missing from
    /// the directory is a hard error for the row; blank geodata must never
    /// pass through.
    pub fn normalize(
        &self,
        source: &SourceRow,
        unmapped: &mut BTreeSet<String>,
    ) -> Result<NormalizedRow, GeoError> {
        let mut row = NormalizedRow::new();
        for (raw_header, raw_value) in source.iter() {
            let Some(short_name) = self.lookup.resolve(raw_header) else {
                unmapped.insert(raw_header.to_string());
                continue;
            };
            let value = match self.converters.converter_for(short_name) {
                Some(converter) => converter.apply(raw_value.trim()),
                None => Value::text(raw_value),
            };
            row.insert(short_name, value);
        }

        let raw_name = match row.get(self.profile.name_field) {
            Some(Value::Text(name)) => name.trim().to_string(),
            _ => String::new(),
        };
        let canonical = self.directory.canonical_name_for(&raw_name).to_string();
        let location = self.directory.require_location(&canonical)?;

        row.insert(
            self.profile.name_field,
            Value::text(location.canonical_name.as_str()),
        );
        row.insert(self.profile.latitude_field, Value::Number(location.latitude));
        row.insert(self.profile.longitude_field, Value::Number(location.longitude));
        if !row.contains(self.profile.county_field) {
            row.insert(self.profile.county_field, Value::text(location.county.as_str()));
        }

        Ok(row)
    }
}
