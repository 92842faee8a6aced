//! Resolution against the shipped survey schemas.

use surgecap_header::{HeaderLookup, public_fields, strip_apostrophes};
use surgecap_model::SurveyType;
use surgecap_schema::SurveySchema;

/// Every registered alias resolves to its own field, for both surveys, and
/// anything else resolves to nothing.
#[test]
fn every_registered_alias_resolves() {
    for survey in [SurveyType::Hospital, SurveyType::LongTermCare] {
        let schema = SurveySchema::for_survey(survey);
        let lookup = HeaderLookup::build(schema.fields)
            .unwrap_or_else(|e| panic!("{survey} schema has an alias conflict: {e}"));
        for field in schema.fields {
            for alias in field.aliases {
                assert_eq!(
                    lookup.resolve(alias),
                    Some(field.short_name),
                    "{survey}: alias {alias:?} did not resolve"
                );
            }
        }
        assert_eq!(lookup.resolve("Definitely Not A Survey Header"), None);
    }
}

#[test]
fn resolution_survives_apostrophe_stripping() {
    let schema = SurveySchema::for_survey(SurveyType::Hospital);
    let lookup = HeaderLookup::build(schema.fields).unwrap();
    for field in schema.fields {
        for alias in field.aliases {
            let stripped = strip_apostrophes(alias);
            assert_eq!(
                lookup.resolve(&stripped),
                Some(field.short_name),
                "{:?} stopped resolving once stripped",
                alias
            );
            // Stripping again changes nothing.
            assert_eq!(lookup.resolve(&strip_apostrophes(&stripped)), Some(field.short_name));
        }
    }
}

#[test]
fn known_apostrophe_header_resolves() {
    let schema = SurveySchema::for_survey(SurveyType::Hospital);
    let lookup = HeaderLookup::build(schema.fields).unwrap();
    assert_eq!(
        lookup.resolve(
            "Does your facility anticipate material/supply shortages of the following?-N95's Response ?"
        ),
        Some("needn95")
    );
}

#[test]
fn hospital_public_fields_are_all_flagged_public() {
    let schema = SurveySchema::for_survey(SurveyType::Hospital);
    let names = public_fields(schema.fields);
    assert!(!names.is_empty());
    for name in &names {
        let field = schema.field(name).expect("public name is in the schema");
        assert!(field.is_public);
    }
    // Spot checks against the release list.
    assert!(names.contains(&"hospitalname"));
    assert!(names.contains(&"numvent"));
    assert!(!names.contains(&"ttlempcall"));
}

#[test]
fn master_variant_covers_fieldnames_and_aliases() {
    let schema = SurveySchema::for_survey(SurveyType::LongTermCare);
    let master = HeaderLookup::build_master(schema.fields).unwrap();
    for field in schema.fields {
        assert_eq!(master.resolve(field.short_name), Some(field.short_name));
    }
}
