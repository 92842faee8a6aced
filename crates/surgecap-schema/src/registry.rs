//! Survey schema registry.
//!
//! One schema per survey type, built at compile time and immutable at
//! runtime. The hospital and long-term-care schemas are independently
//! maintained instances of the same structure; their field sets are
//! disjoint and never merged.

use surgecap_model::{CanonicalField, SurveyType, UnknownSurveyType};

use crate::hospital::{HOSPITAL_BINARY_RESPONSE_FIELDS, HOSPITAL_FIELDS};
use crate::long_term_care::{LTC_BINARY_RESPONSE_FIELDS, LTC_FIELDS};

/// The per-survey well-known field names and reference-dataset property
/// names the enrichment pipeline needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurveyProfile {
    /// Short name of the facility-name column.
    pub name_field: &'static str,
    pub latitude_field: &'static str,
    pub longitude_field: &'static str,
    /// Short name of the county column, populated from the Location
    /// Directory when the feed does not carry one.
    pub county_field: &'static str,
    /// Property holding the canonical facility name in the GeoJSON
    /// reference collection.
    pub geojson_name_property: &'static str,
    /// Property holding the pipe-delimited name alias list.
    pub geojson_alias_property: &'static str,
    /// Property holding the geocoded county.
    pub geojson_county_property: &'static str,
}

/// A complete survey schema: the ordered canonical field list plus the
/// survey profile.
#[derive(Debug)]
pub struct SurveySchema {
    pub survey: SurveyType,
    pub fields: &'static [CanonicalField],
    pub profile: SurveyProfile,
    binary_response: &'static [&'static str],
}

static HOSPITAL_SCHEMA: SurveySchema = SurveySchema {
    survey: SurveyType::Hospital,
    fields: HOSPITAL_FIELDS,
    profile: SurveyProfile {
        name_field: "hospitalname",
        latitude_field: "hospitallatitude",
        longitude_field: "hospitallongitude",
        county_field: "hospitalcounty",
        geojson_name_property: "HospitalName",
        geojson_alias_property: "HospitalNameAliases",
        geojson_county_property: "GeocodedHospitalCounty",
    },
    binary_response: HOSPITAL_BINARY_RESPONSE_FIELDS,
};

static LTC_SCHEMA: SurveySchema = SurveySchema {
    survey: SurveyType::LongTermCare,
    fields: LTC_FIELDS,
    profile: SurveyProfile {
        name_field: "ltcname",
        latitude_field: "ltclatitude",
        longitude_field: "ltclongitude",
        county_field: "ltccounty",
        geojson_name_property: "LTCName",
        geojson_alias_property: "LTCNameAliases",
        geojson_county_property: "GeocodedLTCCounty",
    },
    binary_response: LTC_BINARY_RESPONSE_FIELDS,
};

impl SurveySchema {
    /// The schema for a survey type. Pure data; no side effects.
    pub fn for_survey(survey: SurveyType) -> &'static SurveySchema {
        match survey {
            SurveyType::Hospital => &HOSPITAL_SCHEMA,
            SurveyType::LongTermCare => &LTC_SCHEMA,
        }
    }

    /// The schema for a feed prefix string (`HOS` / `LTC`).
    pub fn for_prefix(prefix: &str) -> Result<&'static SurveySchema, UnknownSurveyType> {
        Ok(Self::for_survey(prefix.parse()?))
    }

    pub fn field(&self, short_name: &str) -> Option<&CanonicalField> {
        self.fields.iter().find(|f| f.short_name == short_name)
    }

    /// The Yes/No survey-question fields the binary converter targets.
    pub fn binary_response_fields(&self) -> &'static [&'static str] {
        self.binary_response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn survey_schemas_are_disjoint() {
        let hospital = SurveySchema::for_survey(SurveyType::Hospital);
        let ltc = SurveySchema::for_survey(SurveyType::LongTermCare);
        for field in hospital.fields {
            assert!(
                ltc.field(field.short_name).is_none(),
                "field {} appears in both schemas",
                field.short_name
            );
        }
    }

    #[test]
    fn profiles_name_real_fields() {
        for survey in [SurveyType::Hospital, SurveyType::LongTermCare] {
            let schema = SurveySchema::for_survey(survey);
            let profile = &schema.profile;
            for short_name in [
                profile.name_field,
                profile.latitude_field,
                profile.longitude_field,
                profile.county_field,
            ] {
                assert!(
                    schema.field(short_name).is_some(),
                    "{survey}: profile names unknown field {short_name}"
                );
            }
        }
    }

    #[test]
    fn binary_response_fields_exist_in_schema() {
        for survey in [SurveyType::Hospital, SurveyType::LongTermCare] {
            let schema = SurveySchema::for_survey(survey);
            for short_name in schema.binary_response_fields() {
                assert!(
                    schema.field(short_name).is_some(),
                    "{survey}: converter targets unknown field {short_name}"
                );
            }
        }
    }

    #[test]
    fn hospital_public_subset_matches_release_list() {
        let schema = SurveySchema::for_survey(SurveyType::Hospital);
        let field = schema.field("numicubeds").expect("numicubeds");
        assert!(field.is_public);
        // Employee call-out data never went in the public extract.
        let field = schema.field("ttlempcall").expect("ttlempcall");
        assert!(!field.is_public);
    }

    #[test]
    fn ltc_has_no_public_extract() {
        let schema = SurveySchema::for_survey(SurveyType::LongTermCare);
        assert!(schema.fields.iter().all(|f| !f.is_public));
    }

    #[test]
    fn unknown_prefix_is_rejected() {
        assert!(SurveySchema::for_prefix("EMS").is_err());
        assert!(SurveySchema::for_prefix("HOS").is_ok());
    }
}
