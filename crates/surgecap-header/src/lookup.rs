//! Alias-to-canonical header lookup.
//!
//! Built once per run from a survey schema and never mutated afterward.
//! Keys are normalized at build time the same way queries are normalized at
//! resolve time: surrounding whitespace trimmed and apostrophes removed.
//! The hosted publishing platform cannot store an apostrophe in a column
//! name, and several historical aliases contain one (survey questions with
//! contractions), so the stripped form is the only key that can match both.

use std::collections::HashMap;

use surgecap_model::CanonicalField;

use crate::error::{HeaderError, Result};

/// Remove every apostrophe from a header string. Idempotent.
pub fn strip_apostrophes(header: &str) -> String {
    header.replace('\'', "")
}

fn lookup_key(header: &str) -> String {
    strip_apostrophes(header.trim())
}

/// Read-only index from raw header strings to canonical short names.
#[derive(Debug, Clone)]
pub struct HeaderLookup {
    alias_to_canonical: HashMap<String, &'static str>,
    canonical_to_preferred: HashMap<&'static str, &'static str>,
}

impl HeaderLookup {
    /// Build the lookup from a field list.
    ///
    /// Fails with `HeaderConflict` if two fields claim the same alias
    /// (after key normalization); duplicate aliases within one field are
    /// tolerated, first occurrence wins.
    pub fn build(fields: &[CanonicalField]) -> Result<Self> {
        Self::build_inner(fields, false)
    }

    /// Like `build`, but additionally maps every canonical short name to
    /// itself, so already-normalized headers resolve too. This is the
    /// variant validation uses to define "every valid header".
    pub fn build_master(fields: &[CanonicalField]) -> Result<Self> {
        Self::build_inner(fields, true)
    }

    fn build_inner(fields: &[CanonicalField], include_short_names: bool) -> Result<Self> {
        let mut alias_to_canonical = HashMap::new();
        let mut canonical_to_preferred = HashMap::new();
        for field in fields {
            canonical_to_preferred.insert(field.short_name, field.preferred_alias());
            if include_short_names {
                insert_alias(&mut alias_to_canonical, field.short_name, field)?;
            }
            for alias in field.aliases {
                insert_alias(&mut alias_to_canonical, alias, field)?;
            }
        }
        Ok(Self {
            alias_to_canonical,
            canonical_to_preferred,
        })
    }

    /// Resolve a raw header to its canonical short name.
    ///
    /// Apostrophes are stripped before lookup. Returns `None` for
    /// unrecognized headers; callers decide whether that is fatal.
    pub fn resolve(&self, raw_header: &str) -> Option<&'static str> {
        self.alias_to_canonical
            .get(&lookup_key(raw_header))
            .copied()
    }

    /// Preferred display name for a canonical short name.
    pub fn preferred_alias(&self, short_name: &str) -> Option<&'static str> {
        self.canonical_to_preferred.get(short_name).copied()
    }

    pub fn contains(&self, raw_header: &str) -> bool {
        self.resolve(raw_header).is_some()
    }

    pub fn len(&self) -> usize {
        self.alias_to_canonical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alias_to_canonical.is_empty()
    }
}

fn insert_alias(
    map: &mut HashMap<String, &'static str>,
    alias: &str,
    field: &CanonicalField,
) -> Result<()> {
    let key = lookup_key(alias);
    if let Some(&existing) = map.get(&key) {
        if existing != field.short_name {
            return Err(HeaderError::HeaderConflict {
                alias: key,
                first: existing.to_string(),
                second: field.short_name.to_string(),
            });
        }
        return Ok(());
    }
    map.insert(key, field.short_name);
    Ok(())
}

/// Short names of the fields allowed in the public-release extract.
pub fn public_fields(fields: &[CanonicalField]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|f| f.is_public)
        .map(|f| f.short_name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> Vec<CanonicalField> {
        vec![
            CanonicalField {
                short_name: "hospitalname",
                aliases: &["HospitalName", "hospitalName"],
                is_public: true,
            },
            CanonicalField {
                short_name: "needn95",
                aliases: &[
                    "Does your facility anticipate material/supply shortages of the following?-N95's Response ?",
                ],
                is_public: false,
            },
        ]
    }

    #[test]
    fn resolves_registered_aliases() {
        let lookup = HeaderLookup::build(&fields()).unwrap();
        assert_eq!(lookup.resolve("HospitalName"), Some("hospitalname"));
        assert_eq!(lookup.resolve("hospitalName"), Some("hospitalname"));
        assert_eq!(lookup.resolve("HospitalZip"), None);
    }

    #[test]
    fn resolves_headers_with_apostrophes() {
        let lookup = HeaderLookup::build(&fields()).unwrap();
        let raw =
            "Does your facility anticipate material/supply shortages of the following?-N95's Response ?";
        assert_eq!(lookup.resolve(raw), Some("needn95"));
        // The platform-safe stripped spelling resolves to the same field.
        assert_eq!(lookup.resolve(&strip_apostrophes(raw)), Some("needn95"));
    }

    #[test]
    fn stripping_is_idempotent() {
        let raw = "PAPR's Hoods Response ?";
        let once = strip_apostrophes(raw);
        let twice = strip_apostrophes(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn master_lookup_accepts_short_names() {
        let fields = fields();
        let plain = HeaderLookup::build(&fields).unwrap();
        let master = HeaderLookup::build_master(&fields).unwrap();
        assert_eq!(plain.resolve("hospitalname"), None);
        assert_eq!(master.resolve("hospitalname"), Some("hospitalname"));
    }

    #[test]
    fn conflicting_alias_fails_construction() {
        let conflicting = vec![
            CanonicalField {
                short_name: "icuavail",
                aliases: &["ICU Beds Available"],
                is_public: true,
            },
            CanonicalField {
                short_name: "icu24h",
                aliases: &["ICU Beds Available"],
                is_public: true,
            },
        ];
        let err = HeaderLookup::build(&conflicting).unwrap_err();
        assert!(matches!(err, HeaderError::HeaderConflict { .. }));
    }

    #[test]
    fn duplicate_alias_within_one_field_is_tolerated() {
        let fields = vec![CanonicalField {
            short_name: "icuavail",
            aliases: &["ICU Beds Available", "ICU Beds Available"],
            is_public: true,
        }];
        let lookup = HeaderLookup::build(&fields).unwrap();
        assert_eq!(lookup.resolve("ICU Beds Available"), Some("icuavail"));
    }

    #[test]
    fn public_fields_filters_by_flag() {
        let names = public_fields(&fields());
        assert_eq!(names, vec!["hospitalname"]);
    }

    #[test]
    fn preferred_alias_is_first_registered() {
        let lookup = HeaderLookup::build(&fields()).unwrap();
        assert_eq!(lookup.preferred_alias("hospitalname"), Some("HospitalName"));
        assert_eq!(lookup.preferred_alias("missing"), None);
    }
}
