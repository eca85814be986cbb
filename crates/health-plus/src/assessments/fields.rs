use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::AssessmentError;
use super::key::AssessmentKey;

/// Raw value supplied for a single form field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    fn is_blank(&self) -> bool {
        matches!(self, FieldValue::Text(text) if text.trim().is_empty())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Flag(value) => write!(f, "{value}"),
            FieldValue::Integer(value) => write!(f, "{value}"),
            FieldValue::Float(value) => write!(f, "{value}"),
            FieldValue::Text(value) => f.write_str(value),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(value.into())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

/// Field-value source handed to the dispatcher, keyed by form field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssessmentFields(BTreeMap<String, FieldValue>);

impl AssessmentFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, handy for tests and canned data.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<K, V> FromIterator<(K, V)> for AssessmentFields
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = AssessmentFields::new();
        for (name, value) in iter {
            fields.insert(name, value);
        }
        fields
    }
}

/// Coerces named fields into typed values, attributing failures to one assessment.
pub(crate) struct FieldReader<'a> {
    assessment: AssessmentKey,
    fields: &'a AssessmentFields,
}

impl<'a> FieldReader<'a> {
    pub(crate) fn new(assessment: AssessmentKey, fields: &'a AssessmentFields) -> Self {
        Self { assessment, fields }
    }

    pub(crate) fn integer(&self, name: &'static str) -> Result<i32, AssessmentError> {
        let value = self.required(name)?;
        self.coerce_integer(name, value)
    }

    pub(crate) fn integer_or(
        &self,
        name: &'static str,
        default: i32,
    ) -> Result<i32, AssessmentError> {
        match self.present(name) {
            Some(value) => self.coerce_integer(name, value),
            None => Ok(default),
        }
    }

    pub(crate) fn float(&self, name: &'static str) -> Result<f64, AssessmentError> {
        let value = self.required(name)?;
        self.coerce_float(name, value)
    }

    pub(crate) fn optional_float(
        &self,
        name: &'static str,
    ) -> Result<Option<f64>, AssessmentError> {
        self.present(name)
            .map(|value| self.coerce_float(name, value))
            .transpose()
    }

    pub(crate) fn text(&self, name: &'static str) -> Result<String, AssessmentError> {
        let value = self.required(name)?;
        Ok(match value {
            FieldValue::Text(text) => text.trim().to_string(),
            other => other.to_string(),
        })
    }

    /// Presence-of-value flag: absent reads as `false`.
    pub(crate) fn flag(&self, name: &'static str) -> Result<bool, AssessmentError> {
        let Some(value) = self.fields.get(name) else {
            return Ok(false);
        };

        match value {
            FieldValue::Flag(flag) => Ok(*flag),
            FieldValue::Integer(number) => Ok(*number != 0),
            FieldValue::Float(number) => Ok(*number != 0.0),
            FieldValue::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
                "yes" | "y" | "true" | "on" | "1" => Ok(true),
                "no" | "n" | "false" | "off" | "0" | "" => Ok(false),
                _ => Err(self.invalid(name, value, "expected yes or no")),
            },
        }
    }

    /// Reject a value that coerced fine but is outside the accepted vocabulary.
    pub(crate) fn invalid(
        &self,
        name: &'static str,
        value: &FieldValue,
        reason: &str,
    ) -> AssessmentError {
        AssessmentError::InvalidField {
            assessment: self.assessment,
            field: name,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    fn present(&self, name: &str) -> Option<&'a FieldValue> {
        self.fields.get(name).filter(|value| !value.is_blank())
    }

    fn required(&self, name: &'static str) -> Result<&'a FieldValue, AssessmentError> {
        self.present(name).ok_or(AssessmentError::MissingField {
            assessment: self.assessment,
            field: name,
        })
    }

    fn coerce_integer(
        &self,
        name: &'static str,
        value: &FieldValue,
    ) -> Result<i32, AssessmentError> {
        let wide = match value {
            FieldValue::Integer(number) => *number,
            FieldValue::Float(number) if number.fract() == 0.0 && number.is_finite() => {
                *number as i64
            }
            FieldValue::Text(text) => text
                .trim()
                .parse::<i64>()
                .map_err(|_| self.invalid(name, value, "expected a whole number"))?,
            _ => return Err(self.invalid(name, value, "expected a whole number")),
        };

        i32::try_from(wide).map_err(|_| self.invalid(name, value, "number out of range"))
    }

    fn coerce_float(&self, name: &'static str, value: &FieldValue) -> Result<f64, AssessmentError> {
        match value {
            FieldValue::Integer(number) => Ok(*number as f64),
            FieldValue::Float(number) => Ok(*number),
            FieldValue::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| self.invalid(name, value, "expected a number")),
            FieldValue::Flag(_) => Err(self.invalid(name, value, "expected a number")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(fields: &AssessmentFields) -> FieldReader<'_> {
        FieldReader::new(AssessmentKey::Fitness, fields)
    }

    #[test]
    fn integer_text_is_parsed() {
        let fields = AssessmentFields::new().with("age", "42");
        assert_eq!(reader(&fields).integer("age").expect("coerces"), 42);
    }

    #[test]
    fn whole_floats_coerce_to_integers() {
        let fields = AssessmentFields::new().with("age", 42.0);
        assert_eq!(reader(&fields).integer("age").expect("coerces"), 42);

        let fields = AssessmentFields::new().with("age", 42.5);
        assert!(matches!(
            reader(&fields).integer("age"),
            Err(AssessmentError::InvalidField { field: "age", .. })
        ));
    }

    #[test]
    fn non_numeric_text_is_invalid() {
        let fields = AssessmentFields::new().with("age", "forty");
        match reader(&fields).integer("age") {
            Err(AssessmentError::InvalidField { field, value, .. }) => {
                assert_eq!(field, "age");
                assert_eq!(value, "forty");
            }
            other => panic!("expected invalid field, got {other:?}"),
        }
    }

    #[test]
    fn missing_and_blank_required_fields_are_reported() {
        let fields = AssessmentFields::new().with("resting_hr", "  ");
        let reader = reader(&fields);
        assert_eq!(
            reader.integer("age"),
            Err(AssessmentError::MissingField {
                assessment: AssessmentKey::Fitness,
                field: "age",
            })
        );
        assert!(matches!(
            reader.integer("resting_hr"),
            Err(AssessmentError::MissingField { field: "resting_hr", .. })
        ));
    }

    #[test]
    fn optional_fields_fall_back_to_defaults() {
        let fields = AssessmentFields::new().with("minutes", "");
        let reader = reader(&fields);
        assert_eq!(reader.integer_or("minutes", 0).expect("defaults"), 0);
        assert_eq!(reader.integer_or("absent", 7).expect("defaults"), 7);
        assert_eq!(reader.optional_float("psa").expect("absent"), None);
    }

    #[test]
    fn flags_follow_presence_of_value() {
        let fields = AssessmentFields::new()
            .with("smoking", "yes")
            .with("diabetes", "no")
            .with("checkbox", "on")
            .with("native", true)
            .with("garbled", "maybe");
        let reader = reader(&fields);

        assert!(reader.flag("smoking").expect("flag"));
        assert!(!reader.flag("diabetes").expect("flag"));
        assert!(reader.flag("checkbox").expect("flag"));
        assert!(reader.flag("native").expect("flag"));
        assert!(!reader.flag("absent").expect("flag"));
        assert!(matches!(
            reader.flag("garbled"),
            Err(AssessmentError::InvalidField { field: "garbled", .. })
        ));
    }

    #[test]
    fn fields_deserialize_from_mixed_json() {
        let fields: AssessmentFields =
            serde_json::from_str(r#"{"weight": 70.5, "height": "175", "smoking": true, "age": 40}"#)
                .expect("deserializes");
        assert_eq!(fields.get("weight"), Some(&FieldValue::Float(70.5)));
        assert_eq!(fields.get("height"), Some(&FieldValue::Text("175".to_string())));
        assert_eq!(fields.get("smoking"), Some(&FieldValue::Flag(true)));
        assert_eq!(fields.get("age"), Some(&FieldValue::Integer(40)));
    }
}
