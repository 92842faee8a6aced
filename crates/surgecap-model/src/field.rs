/// One normalized data column in a survey schema.
///
/// `short_name` is the stable identifier a column is normalized to; it never
/// changes across schema revisions. `aliases` holds every raw header string
/// that has historically meant this field, in order; the first alias is the
/// preferred display name. Within one schema no alias may belong to two
/// fields, which `HeaderLookup::build` enforces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalField {
    pub short_name: &'static str,
    pub aliases: &'static [&'static str],
    pub is_public: bool,
}

impl CanonicalField {
    /// The preferred display name: the first historical alias, falling back
    /// to the short name for fields that never appeared under a long header.
    pub fn preferred_alias(&self) -> &'static str {
        self.aliases.first().copied().unwrap_or(self.short_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preferred_alias_is_first() {
        let field = CanonicalField {
            short_name: "hospitalname",
            aliases: &["HospitalName", "hospitalName"],
            is_public: true,
        };
        assert_eq!(field.preferred_alias(), "HospitalName");
    }

    #[test]
    fn preferred_alias_falls_back_to_short_name() {
        let field = CanonicalField {
            short_name: "hospitalcounty",
            aliases: &[],
            is_public: true,
        };
        assert_eq!(field.preferred_alias(), "hospitalcounty");
    }
}
