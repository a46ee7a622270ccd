//! Typed read access to a borrowed JSON value.

use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::enums::WireEnum;
use crate::errors::Error;

/// Returns the JSON shape name used in mismatch errors.
pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A borrowed view of one JSON value, with typed extractors for every field
/// shape the Graph wire format uses.
///
/// Extractors return an error when the underlying value has the wrong shape;
/// absence and `null` are handled by the caller (the parse driver skips both
/// before a node is ever constructed).
#[derive(Clone, Copy, Debug)]
pub struct ParseNode<'a> {
    value: &'a Value,
}

impl<'a> ParseNode<'a> {
    #[must_use]
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    /// The raw JSON value behind this node.
    #[must_use]
    pub fn value(&self) -> &'a Value {
        self.value
    }

    /// The `@odata.type` tag of this node, when the payload carries one.
    #[must_use]
    pub fn discriminator(&self) -> Option<&'a str> {
        self.value.get("@odata.type").and_then(Value::as_str)
    }

    fn mismatch(&self, expected: &'static str) -> Error {
        Error::Mismatch {
            expected,
            found: kind_of(self.value),
        }
    }

    pub fn string(&self) -> Result<String, Error> {
        self.value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| self.mismatch("string"))
    }

    pub fn boolean(&self) -> Result<bool, Error> {
        self.value.as_bool().ok_or_else(|| self.mismatch("boolean"))
    }

    pub fn int64(&self) -> Result<i64, Error> {
        self.value.as_i64().ok_or_else(|| self.mismatch("integer"))
    }

    pub fn int32(&self) -> Result<i32, Error> {
        let wide = self.int64()?;
        i32::try_from(wide).map_err(|_| Error::OutOfRange {
            value: wide,
            target: "i32",
        })
    }

    pub fn float64(&self) -> Result<f64, Error> {
        self.value.as_f64().ok_or_else(|| self.mismatch("number"))
    }

    pub fn uuid(&self) -> Result<Uuid, Error> {
        let raw = self.string()?;
        Ok(Uuid::parse_str(&raw)?)
    }

    /// An RFC 3339 timestamp, normalized to UTC.
    pub fn datetime(&self) -> Result<DateTime<Utc>, Error> {
        let raw = self.string()?;
        Ok(DateTime::parse_from_rfc3339(&raw)?.with_timezone(&Utc))
    }

    /// A string enumeration value. Unknown strings are an error naming the
    /// enum type, matching the behavior of the generated Graph clients.
    pub fn enumeration<E: WireEnum>(&self) -> Result<E, Error> {
        let raw = self.string()?;
        E::from_wire(&raw).ok_or(Error::UnknownEnumValue {
            type_name: E::TYPE_NAME,
            value: raw,
        })
    }

    /// A nested object, decoded through the given factory. The factory is
    /// either `parse_node::<T>` for concrete types or an `Any*::from_node`
    /// discriminator switch for abstract ones.
    pub fn object<T>(
        &self,
        factory: impl FnOnce(&ParseNode<'_>) -> Result<T, Error>,
    ) -> Result<T, Error> {
        factory(self)
    }

    /// A JSON array of objects. Null entries are skipped, as the generated
    /// deserializers only keep non-nil collection items.
    pub fn collection<T>(
        &self,
        factory: impl Fn(&ParseNode<'_>) -> Result<T, Error>,
    ) -> Result<Vec<T>, Error> {
        self.elements()?
            .map(|node| factory(&node))
            .collect::<Result<Vec<_>, _>>()
    }

    pub fn string_collection(&self) -> Result<Vec<String>, Error> {
        self.elements()?.map(|node| node.string()).collect()
    }

    pub fn uuid_collection(&self) -> Result<Vec<Uuid>, Error> {
        self.elements()?.map(|node| node.uuid()).collect()
    }

    pub fn enum_collection<E: WireEnum>(&self) -> Result<Vec<E>, Error> {
        self.elements()?.map(|node| node.enumeration()).collect()
    }

    fn elements(&self) -> Result<impl Iterator<Item = ParseNode<'a>>, Error> {
        let items = self.value.as_array().ok_or_else(|| self.mismatch("array"))?;
        Ok(items
            .iter()
            .filter(|item| !item.is_null())
            .map(ParseNode::new))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_extractors() {
        let value = json!("hello");
        assert_eq!(ParseNode::new(&value).string().unwrap(), "hello");

        let value = json!(true);
        assert!(ParseNode::new(&value).boolean().unwrap());

        let value = json!(42);
        assert_eq!(ParseNode::new(&value).int32().unwrap(), 42);
        assert_eq!(ParseNode::new(&value).int64().unwrap(), 42);
    }

    #[test]
    fn test_int32_range_check() {
        let value = json!(i64::from(i32::MAX) + 1);
        let err = ParseNode::new(&value).int32().unwrap_err();
        assert!(matches!(err, Error::OutOfRange { target: "i32", .. }));
    }

    #[test]
    fn test_int_rejects_float() {
        let value = json!(1.5);
        assert!(ParseNode::new(&value).int64().is_err());
    }

    #[test]
    fn test_shape_mismatch_names_shapes() {
        let value = json!({});
        let err = ParseNode::new(&value).string().unwrap_err();
        assert_eq!(err.to_string(), "expected string, found object");
    }

    #[test]
    fn test_datetime_normalizes_to_utc() {
        let value = json!("2023-01-25T09:45:00-05:00");
        let parsed = ParseNode::new(&value).datetime().unwrap();
        assert_eq!(parsed.to_rfc3339(), "2023-01-25T14:45:00+00:00");
    }

    #[test]
    fn test_uuid_parse() {
        let value = json!("c5ba949e-4c0c-4fd7-8f3e-1f367bb0b7b9");
        assert!(ParseNode::new(&value).uuid().is_ok());

        let value = json!("not-a-guid");
        assert!(matches!(
            ParseNode::new(&value).uuid().unwrap_err(),
            Error::Guid(_)
        ));
    }

    #[test]
    fn test_string_collection_skips_nulls() {
        let value = json!(["a", null, "b"]);
        let parsed = ParseNode::new(&value).string_collection().unwrap();
        assert_eq!(parsed, vec!["a".to_owned(), "b".to_owned()]);
    }

    #[test]
    fn test_discriminator() {
        let value = json!({"@odata.type": "#microsoft.graph.sitePage"});
        assert_eq!(
            ParseNode::new(&value).discriminator(),
            Some("#microsoft.graph.sitePage")
        );

        let value = json!({});
        assert_eq!(ParseNode::new(&value).discriminator(), None);
    }
}
