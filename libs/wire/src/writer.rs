//! Field-by-field construction of JSON objects.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::enums::WireEnum;
use crate::parsable::{AdditionalData, Serializable};

/// Builds one JSON object. Unset (`None`) fields are omitted entirely,
/// matching the wire convention of the generated clients: absence, not
/// `null`, signals an unset field.
#[derive(Debug, Default)]
pub struct FieldWriter {
    fields: Map<String, Value>,
}

impl FieldWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_str(&mut self, name: &str, value: Option<&str>) {
        if let Some(v) = value {
            self.fields.insert(name.to_owned(), Value::from(v));
        }
    }

    pub fn write_bool(&mut self, name: &str, value: Option<bool>) {
        if let Some(v) = value {
            self.fields.insert(name.to_owned(), Value::from(v));
        }
    }

    pub fn write_i32(&mut self, name: &str, value: Option<i32>) {
        if let Some(v) = value {
            self.fields.insert(name.to_owned(), Value::from(v));
        }
    }

    pub fn write_i64(&mut self, name: &str, value: Option<i64>) {
        if let Some(v) = value {
            self.fields.insert(name.to_owned(), Value::from(v));
        }
    }

    pub fn write_f64(&mut self, name: &str, value: Option<f64>) {
        if let Some(v) = value {
            self.fields.insert(name.to_owned(), Value::from(v));
        }
    }

    pub fn write_uuid(&mut self, name: &str, value: Option<Uuid>) {
        if let Some(v) = value {
            self.fields.insert(name.to_owned(), Value::from(v.to_string()));
        }
    }

    /// RFC 3339 with a `Z` suffix, millisecond precision.
    pub fn write_datetime(&mut self, name: &str, value: Option<DateTime<Utc>>) {
        if let Some(v) = value {
            self.fields.insert(
                name.to_owned(),
                Value::from(v.to_rfc3339_opts(SecondsFormat::Millis, true)),
            );
        }
    }

    pub fn write_enum<E: WireEnum>(&mut self, name: &str, value: Option<E>) {
        if let Some(v) = value {
            self.fields.insert(name.to_owned(), Value::from(v.as_wire()));
        }
    }

    pub fn write_object<T: Serializable>(&mut self, name: &str, value: Option<&T>) {
        if let Some(v) = value {
            let mut nested = FieldWriter::new();
            v.serialize_fields(&mut nested);
            self.fields.insert(name.to_owned(), nested.finish());
        }
    }

    pub fn write_collection<T: Serializable>(&mut self, name: &str, values: Option<&[T]>) {
        if let Some(items) = values {
            let rendered = items
                .iter()
                .map(|item| {
                    let mut nested = FieldWriter::new();
                    item.serialize_fields(&mut nested);
                    nested.finish()
                })
                .collect::<Vec<_>>();
            self.fields.insert(name.to_owned(), Value::Array(rendered));
        }
    }

    pub fn write_str_collection(&mut self, name: &str, values: Option<&[String]>) {
        if let Some(items) = values {
            self.fields.insert(name.to_owned(), Value::from(items.to_vec()));
        }
    }

    pub fn write_uuid_collection(&mut self, name: &str, values: Option<&[Uuid]>) {
        if let Some(items) = values {
            let rendered = items
                .iter()
                .map(|v| Value::from(v.to_string()))
                .collect::<Vec<_>>();
            self.fields.insert(name.to_owned(), Value::Array(rendered));
        }
    }

    pub fn write_enum_collection<E: WireEnum>(&mut self, name: &str, values: Option<&[E]>) {
        if let Some(items) = values {
            let rendered = items
                .iter()
                .map(|v| Value::from(v.as_wire()))
                .collect::<Vec<_>>();
            self.fields.insert(name.to_owned(), Value::Array(rendered));
        }
    }

    /// Writes preserved unknown fields. Typed fields already written keep
    /// precedence over stale additional-data entries of the same name.
    pub fn write_additional_data(&mut self, data: &AdditionalData) {
        for (name, value) in data {
            if !self.fields.contains_key(name) {
                self.fields.insert(name.clone(), value.clone());
            }
        }
    }

    /// Consumes the writer, yielding the finished JSON object.
    #[must_use]
    pub fn finish(self) -> Value {
        Value::Object(self.fields)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_none_fields_are_omitted() {
        let mut writer = FieldWriter::new();
        writer.write_str("present", Some("yes"));
        writer.write_str("absent", None);
        writer.write_bool("flag", None);
        assert_eq!(writer.finish(), json!({"present": "yes"}));
    }

    #[test]
    fn test_empty_collection_still_written() {
        let mut writer = FieldWriter::new();
        writer.write_str_collection("tags", Some(&[]));
        assert_eq!(writer.finish(), json!({"tags": []}));
    }

    #[test]
    fn test_datetime_rendering() {
        let mut writer = FieldWriter::new();
        let when = DateTime::parse_from_rfc3339("2023-01-25T14:45:00.123Z")
            .unwrap()
            .with_timezone(&Utc);
        writer.write_datetime("lastModifiedDateTime", Some(when));
        assert_eq!(
            writer.finish(),
            json!({"lastModifiedDateTime": "2023-01-25T14:45:00.123Z"})
        );
    }

    #[test]
    fn test_additional_data_does_not_clobber_typed_fields() {
        let mut data = AdditionalData::new();
        data.insert("name".into(), json!("stale"));
        data.insert("extra".into(), json!(1));

        let mut writer = FieldWriter::new();
        writer.write_str("name", Some("fresh"));
        writer.write_additional_data(&data);
        assert_eq!(writer.finish(), json!({"name": "fresh", "extra": 1}));
    }
}
