//! The descriptor tree.
//!
//! A descriptor is an ordered map of keys to [`Value`]s. Values are a closed
//! set of variants so every payload a builder produces is checked by the
//! compiler, while still serializing to the open JSON shape the host reads
//! (see [`crate::wire`]).

use crate::reference::Reference;
use crate::unit::UnitValue;
use indexmap::IndexMap;

/// One node of a descriptor tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Unit(UnitValue),
    /// `{"_enum": type, "_value": value}`
    Enum(EnumValue),
    /// `{"_class": name}`
    Class(String),
    /// `{"_path": path}`
    Path(String),
    /// `{"_obj": class, "_value": {..}}`
    Object(Object),
    /// An untyped nested map.
    Descriptor(Descriptor),
    Reference(Reference),
    /// Order is significant.
    List(Vec<Value>),
}

impl Value {
    pub fn class(name: impl Into<String>) -> Self {
        Self::Class(name.into())
    }

    pub fn path(path: impl Into<String>) -> Self {
        Self::Path(path.into())
    }

    pub fn as_reference(&self) -> Option<&Reference> {
        match self {
            Self::Reference(reference) => Some(reference),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_descriptor(&self) -> Option<&Descriptor> {
        match self {
            Self::Descriptor(descriptor) => Some(descriptor),
            _ => None,
        }
    }

    pub fn as_unit(&self) -> Option<&UnitValue> {
        match self {
            Self::Unit(unit) => Some(unit),
            _ => None,
        }
    }

    /// Path to the first NaN or infinite float below this value.
    pub(crate) fn non_finite_path(&self) -> Option<String> {
        match self {
            Self::Float(value) if !value.is_finite() => Some(String::new()),
            Self::Object(object) => object.descriptor.non_finite_path(),
            Self::Descriptor(descriptor) => descriptor.non_finite_path(),
            Self::List(items) => items.iter().enumerate().find_map(|(index, item)| {
                item.non_finite_path().map(|rest| join_path(&index.to_string(), &rest))
            }),
            _ => None,
        }
    }
}

fn join_path(head: &str, rest: &str) -> String {
    if rest.is_empty() {
        head.to_string()
    } else {
        format!("{head}.{rest}")
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<UnitValue> for Value {
    fn from(value: UnitValue) -> Self {
        Self::Unit(value)
    }
}

impl From<EnumValue> for Value {
    fn from(value: EnumValue) -> Self {
        Self::Enum(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Self::Object(value)
    }
}

impl From<Descriptor> for Value {
    fn from(value: Descriptor) -> Self {
        Self::Descriptor(value)
    }
}

impl From<Reference> for Value {
    fn from(value: Reference) -> Self {
        Self::Reference(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

/// An enumerated value: `value` drawn from the host enumeration `enum_type`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EnumValue {
    enum_type: String,
    value: String,
}

impl EnumValue {
    pub fn new(enum_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            enum_type: enum_type.into(),
            value: value.into(),
        }
    }

    pub fn enum_type(&self) -> &str {
        &self.enum_type
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A descriptor tagged with the host class it instantiates.
#[derive(Clone, Debug, PartialEq)]
pub struct Object {
    class: String,
    descriptor: Descriptor,
}

impl Object {
    pub fn new(class: impl Into<String>) -> Self {
        Self::from_descriptor(class, Descriptor::new())
    }

    pub fn from_descriptor(class: impl Into<String>, descriptor: Descriptor) -> Self {
        Self {
            class: class.into(),
            descriptor,
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.descriptor.insert(key, value);
        self
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }
}

/// Keyed properties of a command or nested object.
///
/// Keys keep their insertion order for serialization, but two descriptors
/// holding the same entries in a different order are equal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Descriptor {
    entries: IndexMap<String, Value>,
}

impl Descriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace `key`, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub(crate) fn non_finite_path(&self) -> Option<String> {
        self.entries.iter().find_map(|(key, value)| {
            value.non_finite_path().map(|rest| join_path(key, &rest))
        })
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Descriptor {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut descriptor = Descriptor::new();
        for (key, value) in iter {
            descriptor.insert(key, value);
        }
        descriptor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::by_id;
    use crate::unit;

    #[test]
    fn key_order_does_not_affect_equality() {
        let a = Descriptor::new().with("width", 1).with("height", 2);
        let b = Descriptor::new().with("height", 2).with("width", 1);
        assert_eq!(a, b);
        assert_eq!(a.keys().collect::<Vec<_>>(), vec!["width", "height"]);
    }

    #[test]
    fn list_order_affects_equality() {
        let a = Value::from(vec![1, 2]);
        let b = Value::from(vec![2, 1]);
        assert_ne!(a, b);
    }

    #[test]
    fn insert_replaces_existing_key() {
        let mut descriptor = Descriptor::new().with("name", "a");
        let previous = descriptor.insert("name", "b");
        assert_eq!(previous, Some(Value::from("a")));
        assert_eq!(descriptor.len(), 1);
    }

    #[test]
    fn object_class_takes_part_in_equality() {
        let a = Object::new("layer").with("name", "x");
        let b = Object::new("document").with("name", "x");
        assert_ne!(a, b);
    }

    #[test]
    fn accessors_match_variants() {
        let value = Value::from(by_id("layer", 1));
        assert!(value.as_reference().is_some());
        assert!(value.as_object().is_none());

        let value = Value::from(unit::pixels(3.0).unwrap());
        assert_eq!(value.as_unit().map(UnitValue::value), Some(3.0));
    }

    #[test]
    fn non_finite_path_points_at_the_float() {
        let descriptor = Descriptor::new().with(
            "to",
            Object::new("layer").with("scale", vec![Value::from(1.0), Value::from(f64::NAN)]),
        );
        assert_eq!(descriptor.non_finite_path().as_deref(), Some("to.scale.1"));
        assert_eq!(Descriptor::new().with("a", 1.5).non_finite_path(), None);
    }

    #[test]
    fn collects_from_pairs() {
        let descriptor: Descriptor = [("a", true), ("b", false)].into_iter().collect();
        assert_eq!(descriptor.get("b"), Some(&Value::Bool(false)));
    }
}
