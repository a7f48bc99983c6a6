use serde_json::{Map, Value};

/// Outcome of looking up one field of a loosely-typed upstream record.
///
/// Upstream payloads both omit fields and send explicit `null`s, and some
/// defaulting rules care about the difference, so lookups never collapse
/// the two.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field<T> {
    /// Key not present in the record
    Missing,
    /// Key present with `null`, or with a value of the wrong JSON type
    Null,
    Present(T),
}

impl<T> Field<T> {
    pub fn is_missing(&self) -> bool {
        matches!(self, Field::Missing)
    }

    pub fn present(self) -> Option<T> {
        match self {
            Field::Present(v) => Some(v),
            Field::Missing | Field::Null => None,
        }
    }

    /// The present value, or `default` when missing or null
    pub fn or(self, default: T) -> T {
        self.present().unwrap_or(default)
    }

    pub fn and_then<U>(self, f: impl FnOnce(T) -> Field<U>) -> Field<U> {
        match self {
            Field::Present(v) => f(v),
            Field::Missing => Field::Missing,
            Field::Null => Field::Null,
        }
    }

    fn filter_map<U>(self, f: impl FnOnce(T) -> Option<U>) -> Field<U> {
        self.and_then(|v| f(v).map_or(Field::Null, Field::Present))
    }
}

/// One upstream record: a JSON object whose fields may be absent or null.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    fields: Map<String, Value>,
}

impl RawRecord {
    /// Wrap a decoded JSON value; anything but an object becomes an empty record
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self { fields },
            _ => Self::default(),
        }
    }

    pub fn get(&self, key: &str) -> Field<&Value> {
        classify(self.fields.get(key))
    }

    /// String field of a JSON object nested inside a record, e.g. one entry of `cores`
    pub fn nested_str<'v>(value: &'v Value, key: &str) -> Field<&'v str> {
        match value.as_object() {
            Some(obj) => classify(obj.get(key)).filter_map(Value::as_str),
            None => Field::Null,
        }
    }

    pub fn str(&self, key: &str) -> Field<&str> {
        self.get(key).filter_map(Value::as_str)
    }

    pub fn int(&self, key: &str) -> Field<i64> {
        self.get(key).filter_map(Value::as_i64)
    }

    pub fn float(&self, key: &str) -> Field<f64> {
        self.get(key).filter_map(Value::as_f64)
    }

    pub fn bool(&self, key: &str) -> Field<bool> {
        self.get(key).filter_map(Value::as_bool)
    }

    pub fn array(&self, key: &str) -> Field<&[Value]> {
        self.get(key).filter_map(|v| v.as_array().map(Vec::as_slice))
    }

    /// A number nested under a unit key, e.g. `{"diameter": {"meters": 3.7}}`
    pub fn measure(&self, key: &str, unit: &str) -> Field<f64> {
        self.get(key)
            .filter_map(Value::as_object)
            .and_then(|obj| classify(obj.get(unit)).filter_map(Value::as_f64))
    }
}

fn classify(value: Option<&Value>) -> Field<&Value> {
    match value {
        None => Field::Missing,
        Some(Value::Null) => Field::Null,
        Some(v) => Field::Present(v),
    }
}

impl From<Value> for RawRecord {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}
