//! Wire form of descriptors.
//!
//! The host reads descriptors as JSON in which typed values are objects with
//! discriminator keys:
//!
//! ```json
//! {
//!   "command": "set",
//!   "descriptor": {
//!     "null": { "_ref": "layer", "_enum": "ordinal", "_value": "targetEnum" },
//!     "to": { "_obj": "layer", "_value": { "opacity": { "_unit": "percentUnit", "_value": 50 } } }
//!   }
//! }
//! ```
//!
//! Serialization goes through `serde::Serialize`; reading a wire value back
//! goes through `serde_json::Value` and [`parse_value`].

use crate::command::Command;
use crate::reference::{self, Domain, Ordinal, RefNode, Reference, Selector};
use crate::unit::{UnitKind, UnitValue};
use crate::value::{Descriptor, EnumValue, Object, Value};
use crate::{DescriptorError, Result};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Map;

pub const REF: &str = "_ref";
pub const ID: &str = "_id";
pub const INDEX: &str = "_index";
pub const NAME: &str = "_name";
pub const ENUM: &str = "_enum";
pub const PROPERTY: &str = "_property";
pub const VALUE: &str = "_value";
pub const UNIT: &str = "_unit";
pub const OBJ: &str = "_obj";
pub const CLASS: &str = "_class";
pub const PATH: &str = "_path";

pub const COMMAND: &str = "command";
pub const DESCRIPTOR: &str = "descriptor";

impl Serialize for UnitValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(UNIT, self.kind().symbol())?;
        map.serialize_entry(VALUE, &self.value())?;
        map.end()
    }
}

impl Serialize for EnumValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(ENUM, self.enum_type())?;
        map.serialize_entry(VALUE, self.value())?;
        map.end()
    }
}

impl Serialize for Object {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(OBJ, self.class())?;
        map.serialize_entry(VALUE, self.descriptor())?;
        map.end()
    }
}

impl Serialize for Descriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for RefNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if let Selector::ClassTag = self.selector() {
            map.serialize_entry(CLASS, &self.domain().map(Domain::as_str))?;
            return map.end();
        }
        map.serialize_entry(REF, &self.domain().map(Domain::as_str))?;
        match self.selector() {
            Selector::Id(id) => map.serialize_entry(ID, id)?,
            Selector::Index(index) => map.serialize_entry(INDEX, index)?,
            Selector::Name(name) => map.serialize_entry(NAME, name)?,
            Selector::Ordinal(ordinal) => {
                map.serialize_entry(ENUM, Ordinal::ENUM_TYPE)?;
                map.serialize_entry(VALUE, ordinal.symbol())?;
            }
            Selector::Enumerated { enum_type, value } => {
                map.serialize_entry(ENUM, enum_type)?;
                map.serialize_entry(VALUE, value)?;
            }
            Selector::Property(name) => map.serialize_entry(PROPERTY, name)?,
            Selector::Class | Selector::ClassTag => {}
        }
        map.end()
    }
}

struct NodeList<'a>(&'a Reference);

impl Serialize for NodeList<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for node in self.0.nodes() {
            seq.serialize_element(node)?;
        }
        seq.end()
    }
}

impl Serialize for Reference {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if !self.is_chain() {
            return self.outermost().serialize(serializer);
        }
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(REF, &NodeList(self))?;
        map.end()
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Bool(value) => serializer.serialize_bool(*value),
            Value::Integer(value) => serializer.serialize_i64(*value),
            Value::Float(value) => serializer.serialize_f64(*value),
            Value::String(value) => serializer.serialize_str(value),
            Value::Unit(unit) => unit.serialize(serializer),
            Value::Enum(value) => value.serialize(serializer),
            Value::Class(name) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(CLASS, name)?;
                map.end()
            }
            Value::Path(path) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(PATH, path)?;
                map.end()
            }
            Value::Object(object) => object.serialize(serializer),
            Value::Descriptor(descriptor) => descriptor.serialize(serializer),
            Value::Reference(reference) => reference.serialize(serializer),
            Value::List(items) => items.serialize(serializer),
        }
    }
}

impl Serialize for Command {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(COMMAND, self.verb())?;
        map.serialize_entry(DESCRIPTOR, self.descriptor())?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let json = serde_json::Value::deserialize(deserializer)?;
        parse_value(&json).map_err(serde::de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Command {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let json = serde_json::Value::deserialize(deserializer)?;
        parse_command(&json).map_err(serde::de::Error::custom)
    }
}

fn malformed(message: impl Into<String>) -> DescriptorError {
    DescriptorError::MalformedWire(message.into())
}

/// Read a wire command back into a [`Command`].
pub fn parse_command(json: &serde_json::Value) -> Result<Command> {
    let map = json
        .as_object()
        .ok_or_else(|| DescriptorError::MalformedPayload("command must be a JSON object".into()))?;
    let verb = map
        .get(COMMAND)
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| DescriptorError::MalformedPayload("command verb must be a string".into()))?;
    let descriptor = match map.get(DESCRIPTOR) {
        Some(serde_json::Value::Object(entries)) => parse_descriptor(entries)?,
        Some(_) => {
            return Err(DescriptorError::MalformedPayload(
                "descriptor must be a JSON object".into(),
            ))
        }
        None => Descriptor::new(),
    };
    Command::new(verb, descriptor)
}

/// Read one wire value back into the descriptor tree.
pub fn parse_value(json: &serde_json::Value) -> Result<Value> {
    match json {
        serde_json::Value::Null => Err(malformed("null is not a descriptor value")),
        serde_json::Value::Bool(value) => Ok(Value::Bool(*value)),
        serde_json::Value::Number(number) => number
            .as_i64()
            .map(Value::Integer)
            .or_else(|| number.as_f64().map(Value::Float))
            .ok_or_else(|| malformed(format!("unrepresentable number {number}"))),
        serde_json::Value::String(value) => Ok(Value::String(value.clone())),
        serde_json::Value::Array(items) => items
            .iter()
            .map(parse_value)
            .collect::<Result<Vec<_>>>()
            .map(Value::List),
        serde_json::Value::Object(map) => parse_tagged(map),
    }
}

fn parse_descriptor(map: &Map<String, serde_json::Value>) -> Result<Descriptor> {
    let mut descriptor = Descriptor::new();
    for (key, value) in map {
        descriptor.insert(key.as_str(), parse_value(value)?);
    }
    Ok(descriptor)
}

fn str_field<'a>(map: &'a Map<String, serde_json::Value>, key: &str) -> Result<&'a str> {
    map.get(key)
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| malformed(format!("`{key}` must be a string")))
}

fn u32_field(map: &Map<String, serde_json::Value>, key: &str) -> Result<u32> {
    map.get(key)
        .and_then(serde_json::Value::as_u64)
        .and_then(|value| u32::try_from(value).ok())
        .ok_or_else(|| malformed(format!("`{key}` must be an unsigned 32-bit integer")))
}

fn parse_tagged(map: &Map<String, serde_json::Value>) -> Result<Value> {
    if map.contains_key(REF) {
        return parse_reference(map).map(Value::Reference);
    }
    if map.contains_key(UNIT) {
        let symbol = str_field(map, UNIT)?;
        let kind = UnitKind::from_symbol(symbol)
            .ok_or_else(|| malformed(format!("unknown unit `{symbol}`")))?;
        let value = map
            .get(VALUE)
            .and_then(serde_json::Value::as_f64)
            .ok_or_else(|| malformed("unit value must be a number"))?;
        return UnitValue::new(kind, value).map(Value::Unit);
    }
    if map.contains_key(OBJ) {
        let class = str_field(map, OBJ)?;
        let descriptor = match map.get(VALUE) {
            Some(serde_json::Value::Object(entries)) => parse_descriptor(entries)?,
            Some(_) => return Err(malformed(format!("`{VALUE}` of object `{class}` must be an object"))),
            // Flat form: the object's keys sit next to `_obj`.
            None => {
                let mut descriptor = Descriptor::new();
                for (key, value) in map.iter().filter(|(key, _)| key.as_str() != OBJ) {
                    descriptor.insert(key.as_str(), parse_value(value)?);
                }
                descriptor
            }
        };
        return Ok(Value::Object(Object::from_descriptor(class, descriptor)));
    }
    if map.contains_key(ENUM) {
        let enum_type = str_field(map, ENUM)?;
        let value = str_field(map, VALUE)?;
        return Ok(Value::Enum(EnumValue::new(enum_type, value)));
    }
    if map.contains_key(CLASS) {
        return str_field(map, CLASS).map(Value::class);
    }
    if map.contains_key(PATH) {
        return str_field(map, PATH).map(Value::path);
    }
    parse_descriptor(map).map(Value::Descriptor)
}

fn parse_reference(map: &Map<String, serde_json::Value>) -> Result<Reference> {
    match map.get(REF) {
        Some(serde_json::Value::Array(items)) => {
            let nodes = items
                .iter()
                .map(|item| {
                    item.as_object()
                        .ok_or_else(|| malformed("reference chain entries must be objects"))
                        .and_then(parse_node)
                })
                .collect::<Result<Vec<_>>>()?;
            reference::chain(nodes)
        }
        _ => parse_node(map).map(Reference::from),
    }
}

fn parse_node(map: &Map<String, serde_json::Value>) -> Result<RefNode> {
    if !map.contains_key(REF) && map.contains_key(CLASS) {
        let domain = Domain::new(str_field(map, CLASS)?);
        return Ok(RefNode::new(Some(domain), Selector::ClassTag));
    }
    let domain = match map.get(REF) {
        Some(serde_json::Value::String(name)) => Some(Domain::new(name.as_str())),
        Some(serde_json::Value::Null) => None,
        _ => return Err(malformed(format!("`{REF}` must be a string, null or a list"))),
    };

    let selector = if map.contains_key(ID) {
        Selector::Id(u32_field(map, ID)?)
    } else if map.contains_key(INDEX) {
        Selector::Index(u32_field(map, INDEX)?)
    } else if map.contains_key(NAME) {
        Selector::Name(str_field(map, NAME)?.to_string())
    } else if map.contains_key(ENUM) {
        let enum_type = str_field(map, ENUM)?;
        let value = str_field(map, VALUE)?;
        match Ordinal::from_symbol(value) {
            Some(ordinal) if enum_type == Ordinal::ENUM_TYPE => Selector::Ordinal(ordinal),
            _ => Selector::Enumerated {
                enum_type: enum_type.to_string(),
                value: value.to_string(),
            },
        }
    } else if map.contains_key(PROPERTY) {
        Selector::Property(str_field(map, PROPERTY)?.to_string())
    } else {
        Selector::Class
    };

    Ok(RefNode::new(domain, selector))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{
        bare_property, by_class, by_enum, by_index, by_property, chain, class_tag, wrapper,
    };
    use crate::unit;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn unit_value_serializes_with_unit_tag() {
        let json = serde_json::to_value(unit::percent(50.0).unwrap()).unwrap();
        assert_eq!(json, json!({"_unit": "percentUnit", "_value": 50.0}));
    }

    #[test]
    fn single_node_serializes_flat() {
        let json = serde_json::to_value(wrapper("layer").target()).unwrap();
        assert_eq!(
            json,
            json!({"_ref": "layer", "_enum": "ordinal", "_value": "targetEnum"})
        );
    }

    #[test]
    fn chain_serializes_as_list() {
        let reference = chain([by_enum("path", "path", "vectorMask"), wrapper("layer").target()]).unwrap();
        let json = serde_json::to_value(reference).unwrap();
        assert_eq!(
            json,
            json!({"_ref": [
                {"_ref": "path", "_enum": "path", "_value": "vectorMask"},
                {"_ref": "layer", "_enum": "ordinal", "_value": "targetEnum"}
            ]})
        );
    }

    #[test]
    fn selectors_serialize_with_their_own_keys() {
        assert_eq!(
            serde_json::to_value(by_index("guide", 2)).unwrap(),
            json!({"_ref": "guide", "_index": 2})
        );
        assert_eq!(
            serde_json::to_value(by_property("artboards")).unwrap(),
            json!({"_ref": "property", "_property": "artboards"})
        );
        assert_eq!(
            serde_json::to_value(bare_property("vectorToolMode")).unwrap(),
            json!({"_ref": null, "_property": "vectorToolMode"})
        );
        assert_eq!(
            serde_json::to_value(by_class("layerSection")).unwrap(),
            json!({"_ref": "layerSection"})
        );
    }

    #[test]
    fn typed_values_serialize_with_discriminators() {
        let descriptor = Descriptor::new()
            .with("mode", Value::class("RGBColorMode"))
            .with("in", Value::path("/tmp/a.psd"))
            .with("fill", EnumValue::new("fill", "white"))
            .with("to", Object::new("layer").with("name", "Sky"))
            .with("dashes", Vec::<Value>::new());
        let json = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(
            json,
            json!({
                "mode": {"_class": "RGBColorMode"},
                "in": {"_path": "/tmp/a.psd"},
                "fill": {"_enum": "fill", "_value": "white"},
                "to": {"_obj": "layer", "_value": {"name": "Sky"}},
                "dashes": []
            })
        );
    }

    #[test]
    fn serialization_keeps_insertion_order() {
        let descriptor = Descriptor::new().with("b", 1).with("a", 2);
        let text = serde_json::to_string(&descriptor).unwrap();
        assert_eq!(text, r#"{"b":1,"a":2}"#);
    }

    #[test]
    fn parse_reads_back_every_tagged_shape() {
        let json = json!({
            "null": {"_ref": [
                {"_ref": null, "_property": "ns"},
                {"_ref": "document", "_id": 12}
            ]},
            "to": {"_obj": "layer", "_value": {"opacity": {"_unit": "percentUnit", "_value": 40}}},
            "using": {"_enum": "alignDistributeSelector", "_value": "ADSLefts"},
            "mode": {"_class": "grayscaleMode"},
            "in": {"_path": "/a.png"},
            "raw": {"x": 1.5, "flag": true, "items": ["a", 2]}
        });
        let value = parse_value(&json).unwrap();
        let descriptor = value.as_descriptor().unwrap();

        let target = descriptor.get("null").and_then(Value::as_reference).unwrap();
        assert_eq!(target.len(), 2);
        assert_eq!(target.domain(), Some(&Domain::DOCUMENT));

        let to = descriptor.get("to").and_then(Value::as_object).unwrap();
        assert_eq!(to.class(), "layer");
        assert_eq!(
            to.descriptor().get("opacity"),
            Some(&Value::Unit(unit::percent(40.0).unwrap()))
        );
        assert_eq!(descriptor.get("mode"), Some(&Value::class("grayscaleMode")));
        assert_eq!(descriptor.get("in"), Some(&Value::path("/a.png")));
    }

    #[test]
    fn parse_recognizes_ordinals_only_under_the_ordinal_type() {
        let target = parse_value(&json!({"_ref": "layer", "_enum": "ordinal", "_value": "targetEnum"})).unwrap();
        assert_eq!(target, Value::from(wrapper("layer").target()));

        let mask = parse_value(&json!({"_ref": "path", "_enum": "path", "_value": "vectorMask"})).unwrap();
        assert_eq!(mask, Value::from(by_enum("path", "path", "vectorMask")));
    }

    #[test]
    fn ordinal_typed_enum_reads_back_equal() {
        let reference = by_enum("document", "ordinal", "targetEnum");
        let json = serde_json::to_value(&reference).unwrap();
        assert_eq!(parse_value(&json).unwrap(), Value::from(reference));
    }

    #[test]
    fn class_tag_in_a_chain_round_trips() {
        let json = json!({"_ref": [
            {"_ref": "document", "_id": 4},
            {"_class": "guide"}
        ]});
        let reference = chain([wrapper("document").id(4), class_tag("guide")]).unwrap();
        assert_eq!(serde_json::to_value(&reference).unwrap(), json);
        assert_eq!(parse_value(&json).unwrap(), Value::from(reference));
    }

    #[test]
    fn parse_accepts_flat_objects() {
        let value = parse_value(&json!({"_obj": "guide", "position": 3})).unwrap();
        assert_eq!(value, Value::from(Object::new("guide").with("position", 3)));
    }

    #[test]
    fn parse_rejects_unknown_units_and_nulls() {
        let err = parse_value(&json!({"_unit": "furlongUnit", "_value": 1})).unwrap_err();
        assert!(matches!(err, DescriptorError::MalformedWire(_)));
        assert!(parse_value(&json!(null)).is_err());
        assert!(parse_value(&json!({"_ref": []})).is_err());
        assert!(parse_value(&json!({"_ref": "layer", "_id": -1})).is_err());
    }

    #[test]
    fn parse_command_requires_object_descriptor() {
        let err = parse_command(&json!({"command": "hide", "descriptor": [1]})).unwrap_err();
        assert!(matches!(err, DescriptorError::MalformedPayload(_)));

        let err = parse_command(&json!({"command": "", "descriptor": {}})).unwrap_err();
        assert!(matches!(err, DescriptorError::MalformedPayload(_)));
    }
}
