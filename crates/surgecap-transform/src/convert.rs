//! Value converters applied to specific canonical fields.
//!
//! Converters are total functions: anything outside the expected domain
//! becomes `Value::Missing`, never an error. Questionnaire data is known to
//! be inconsistently filled in, and a raw string must never survive into a
//! field declared numeric.

use std::collections::HashMap;

use surgecap_model::Value;
use surgecap_schema::SurveySchema;

use crate::error::{Result, TransformError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Converter {
    /// Categorical Yes/No survey answer to binary: `Y` -> 1, `N` -> 0,
    /// anything else -> missing.
    YesNoBinary,
}

impl Converter {
    pub fn apply(self, raw: &str) -> Value {
        match self {
            Self::YesNoBinary => match raw {
                "Y" => Value::Number(1.0),
                "N" => Value::Number(0.0),
                _ => Value::Missing,
            },
        }
    }
}

/// Which converter, if any, applies to each canonical field.
#[derive(Debug, Clone, Default)]
pub struct ConverterTable {
    by_field: HashMap<&'static str, Converter>,
}

impl ConverterTable {
    /// Register `converter` for every listed field.
    ///
    /// Every target must name a field the schema defines; an unknown target
    /// fails construction rather than first failing use.
    pub fn with_targets(
        schema: &SurveySchema,
        converter: Converter,
        targets: &[&'static str],
    ) -> Result<Self> {
        let mut by_field = HashMap::new();
        for &field in targets {
            if schema.field(field).is_none() {
                return Err(TransformError::UnknownConverterTarget {
                    field: field.to_string(),
                });
            }
            by_field.insert(field, converter);
        }
        Ok(Self { by_field })
    }

    /// The standard table for a survey: the binary converter over the
    /// schema's Yes/No response fields.
    pub fn binary_for_schema(schema: &SurveySchema) -> Result<Self> {
        Self::with_targets(schema, Converter::YesNoBinary, schema.binary_response_fields())
    }

    pub fn converter_for(&self, short_name: &str) -> Option<Converter> {
        self.by_field.get(short_name).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.by_field.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use surgecap_model::SurveyType;

    #[test]
    fn yes_no_is_total() {
        let conv = Converter::YesNoBinary;
        assert_eq!(conv.apply("Y"), Value::Number(1.0));
        assert_eq!(conv.apply("N"), Value::Number(0.0));
        assert_eq!(conv.apply(""), Value::Missing);
        assert_eq!(conv.apply("y"), Value::Missing);
        assert_eq!(conv.apply("yes"), Value::Missing);
        assert_eq!(conv.apply("maybe"), Value::Missing);
    }

    #[test]
    fn unknown_target_fails_construction() {
        let schema = SurveySchema::for_survey(SurveyType::Hospital);
        let err = ConverterTable::with_targets(schema, Converter::YesNoBinary, &["nosuchfield"])
            .unwrap_err();
        assert!(matches!(err, TransformError::UnknownConverterTarget { .. }));
    }

    #[test]
    fn standard_tables_build_for_both_surveys() {
        for survey in [SurveyType::Hospital, SurveyType::LongTermCare] {
            let schema = SurveySchema::for_survey(survey);
            let table = ConverterTable::binary_for_schema(schema).unwrap();
            assert!(!table.is_empty());
        }
    }

    #[test]
    fn gloves_response_is_converted() {
        let schema = SurveySchema::for_survey(SurveyType::Hospital);
        let table = ConverterTable::binary_for_schema(schema).unwrap();
        let conv = table.converter_for("needgloves").expect("needgloves registered");
        assert_eq!(conv.apply("Y"), Value::Number(1.0));
        // Free-text fields are never converted.
        assert!(table.converter_for("hospitalname").is_none());
    }
}
