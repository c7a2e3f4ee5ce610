//! References into the host object model.
//!
//! A reference names *which* host object an operation applies to: the target
//! layer, document #2, the layer called "Sky", the `workPath` property of a
//! path. Nodes are composed innermost-first into chains when one object is
//! only reachable through another ("the vector mask of the target layer").
//!
//! The resolver accepts every selector value as given. Whether layer id 7
//! exists is only known to the host.

use crate::{DescriptorError, Result};
use std::borrow::Cow;
use std::fmt;
use strum_macros::{Display, EnumIter, EnumString};

/// Class of host object a reference points at (`layer`, `document`, ...).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Domain(Cow<'static, str>);

impl Domain {
    pub const APPLICATION: Domain = Domain::from_static("application");
    pub const BRUSHES: Domain = Domain::from_static("brushes");
    pub const CONTENT_LAYER: Domain = Domain::from_static("contentLayer");
    pub const DOCUMENT: Domain = Domain::from_static("document");
    pub const GUIDE: Domain = Domain::from_static("guide");
    pub const LAYER: Domain = Domain::from_static("layer");
    pub const LAYER_SECTION: Domain = Domain::from_static("layerSection");
    pub const PATH: Domain = Domain::from_static("path");
    pub const PROPERTY: Domain = Domain::from_static("property");

    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Domain {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

impl From<String> for Domain {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// Ordinal position keywords.
///
/// `current` is accepted as an alias of `target`: the host only knows one
/// "the object the user is working on" ordinal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum Ordinal {
    #[strum(to_string = "target", serialize = "current")]
    Target,
    Front,
    Back,
    Next,
    Previous,
    None,
    First,
    Last,
    All,
}

impl Ordinal {
    /// Enumeration type the host files ordinals under.
    pub const ENUM_TYPE: &'static str = "ordinal";

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Target => "targetEnum",
            Self::Front => "front",
            Self::Back => "back",
            Self::Next => "next",
            Self::Previous => "previous",
            Self::None => "none",
            Self::First => "first",
            Self::Last => "last",
            Self::All => "allEnum",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let ordinal = match symbol {
            "targetEnum" => Self::Target,
            "front" => Self::Front,
            "back" => Self::Back,
            "next" => Self::Next,
            "previous" => Self::Previous,
            "none" => Self::None,
            "first" => Self::First,
            "last" => Self::Last,
            "allEnum" => Self::All,
            _ => return None,
        };
        Some(ordinal)
    }
}

/// How a node picks an instance out of its domain.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Selector {
    Id(u32),
    /// 1-based position.
    Index(u32),
    Name(String),
    Ordinal(Ordinal),
    /// A non-ordinal enumerated selector, e.g. the `vectorMask` path.
    Enumerated { enum_type: String, value: String },
    /// A named property of the object given by the next node.
    Property(String),
    /// No instance selector: the class itself.
    Class,
    /// The class written as `{"_class": domain}` inside a chain.
    ClassTag,
}

/// One selector in a reference.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RefNode {
    domain: Option<Domain>,
    selector: Selector,
}

impl RefNode {
    pub fn new(domain: Option<Domain>, selector: Selector) -> Self {
        Self { domain, selector }
    }

    /// Domain this node selects from. Only untagged property nodes lack one.
    pub fn domain(&self) -> Option<&Domain> {
        self.domain.as_ref()
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }
}

/// A single node, or a non-empty chain of nodes ordered innermost-first.
///
/// The single and chained forms are distinct on the wire, so a one-node chain
/// is not equal to the bare node.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Reference {
    head: RefNode,
    tail: Vec<RefNode>,
    chained: bool,
}

impl Reference {
    /// Whether this reference serializes as a list of nodes.
    pub fn is_chain(&self) -> bool {
        self.chained
    }

    /// Nodes, innermost first.
    pub fn nodes(&self) -> impl Iterator<Item = &RefNode> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// The node that decides what the whole reference resolves to.
    pub fn outermost(&self) -> &RefNode {
        self.tail.last().unwrap_or(&self.head)
    }

    /// Domain of the outermost node.
    pub fn domain(&self) -> Option<&Domain> {
        self.outermost().domain()
    }

    /// Nest this reference inside `owner`: `[self.., owner..]`.
    pub fn within(self, owner: Reference) -> Reference {
        let Reference { head, mut tail, .. } = self;
        tail.push(owner.head);
        tail.extend(owner.tail);
        Reference {
            head,
            tail,
            chained: true,
        }
    }

    fn into_nodes(self) -> impl Iterator<Item = RefNode> {
        std::iter::once(self.head).chain(self.tail)
    }
}

impl From<RefNode> for Reference {
    fn from(node: RefNode) -> Self {
        Self {
            head: node,
            tail: Vec::new(),
            chained: false,
        }
    }
}

fn node(domain: impl Into<Domain>, selector: Selector) -> Reference {
    RefNode::new(Some(domain.into()), selector).into()
}

pub fn by_id(domain: impl Into<Domain>, id: u32) -> Reference {
    node(domain, Selector::Id(id))
}

pub fn by_index(domain: impl Into<Domain>, index: u32) -> Reference {
    node(domain, Selector::Index(index))
}

pub fn by_name(domain: impl Into<Domain>, name: impl Into<String>) -> Reference {
    node(domain, Selector::Name(name.into()))
}

pub fn by_ordinal(domain: impl Into<Domain>, ordinal: Ordinal) -> Reference {
    node(domain, Selector::Ordinal(ordinal))
}

/// An enumerated selector.
///
/// An `ordinal` type with a known ordinal symbol is the same node as
/// [`by_ordinal`], so both read back identically from the wire.
pub fn by_enum(
    domain: impl Into<Domain>,
    enum_type: impl Into<String>,
    value: impl Into<String>,
) -> Reference {
    let enum_type = enum_type.into();
    let value = value.into();
    let selector = match Ordinal::from_symbol(&value) {
        Some(ordinal) if enum_type == Ordinal::ENUM_TYPE => Selector::Ordinal(ordinal),
        _ => Selector::Enumerated { enum_type, value },
    };
    node(domain, selector)
}

/// A property segment filed under the generic `property` class.
pub fn by_property(name: impl Into<String>) -> Reference {
    property_in(Domain::PROPERTY, name)
}

/// A property segment filed under a specific class, e.g. `path`/`workPath`.
pub fn property_in(domain: impl Into<Domain>, name: impl Into<String>) -> Reference {
    node(domain, Selector::Property(name.into()))
}

/// A property segment with a null class.
pub fn bare_property(name: impl Into<String>) -> Reference {
    RefNode::new(None, Selector::Property(name.into())).into()
}

pub fn by_class(domain: impl Into<Domain>) -> Reference {
    node(domain, Selector::Class)
}

/// A class entry in a chain, written `{"_class": domain}` with no `_ref`.
pub fn class_tag(domain: impl Into<Domain>) -> Reference {
    node(domain, Selector::ClassTag)
}

/// Compose references innermost-first into one chain.
///
/// Chained inputs are flattened, so the result is always a flat list of
/// nodes.
pub fn chain<I, R>(parts: I) -> Result<Reference>
where
    I: IntoIterator<Item = R>,
    R: Into<Reference>,
{
    let mut nodes = parts.into_iter().flat_map(|part| {
        let reference: Reference = part.into();
        reference.into_nodes()
    });
    let head = nodes.next().ok_or(DescriptorError::EmptyReference)?;
    Ok(Reference {
        head,
        tail: nodes.collect(),
        chained: true,
    })
}

/// Domain the reference ultimately resolves to.
pub fn domain_of(reference: &Reference) -> Option<&Domain> {
    reference.domain()
}

/// Fail with [`DescriptorError::InvalidReferenceKind`] unless `reference`
/// resolves to `expected`.
pub fn require_domain(
    operation: &'static str,
    reference: &Reference,
    expected: &Domain,
) -> Result<()> {
    let found = reference.domain();
    if found == Some(expected) {
        return Ok(());
    }
    tracing::debug!(
        operation,
        expected = %expected,
        found = ?found,
        "reference rejected by domain precondition"
    );
    Err(DescriptorError::InvalidReferenceKind {
        operation,
        expected: expected.clone(),
        found: found.cloned(),
    })
}

/// Constructors pre-bound to one domain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct References {
    domain: Domain,
}

impl References {
    pub const fn new(domain: Domain) -> Self {
        Self { domain }
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// The object the user is working on.
    pub fn current(&self) -> Reference {
        self.ordinal(Ordinal::Target)
    }

    /// Same node as [`References::current`].
    pub fn target(&self) -> Reference {
        self.ordinal(Ordinal::Target)
    }

    pub fn id(&self, id: u32) -> Reference {
        by_id(self.domain.clone(), id)
    }

    pub fn index(&self, index: u32) -> Reference {
        by_index(self.domain.clone(), index)
    }

    pub fn name(&self, name: impl Into<String>) -> Reference {
        by_name(self.domain.clone(), name)
    }

    pub fn ordinal(&self, ordinal: Ordinal) -> Reference {
        by_ordinal(self.domain.clone(), ordinal)
    }

    pub fn class(&self) -> Reference {
        by_class(self.domain.clone())
    }
}

/// Shorthand for [`References::new`].
pub fn wrapper(domain: impl Into<Domain>) -> References {
    References::new(domain.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn by_id_reports_its_domain() {
        let reference = by_id("layer", 7);
        assert_eq!(domain_of(&reference), Some(&Domain::LAYER));
        assert!(!reference.is_chain());
    }

    #[test]
    fn chain_domain_is_the_outermost_node() {
        let mask = by_enum(Domain::PATH, "path", "vectorMask");
        let layer = wrapper(Domain::LAYER).target();
        let reference = chain([mask, layer]).unwrap();

        assert_eq!(reference.len(), 2);
        assert_eq!(domain_of(&reference), Some(&Domain::LAYER));
        assert_eq!(
            reference.nodes().next().and_then(RefNode::domain),
            Some(&Domain::PATH)
        );
    }

    #[test]
    fn empty_chain_is_rejected() {
        let err = chain(Vec::<Reference>::new()).unwrap_err();
        assert_eq!(err, DescriptorError::EmptyReference);
    }

    #[test]
    fn chain_flattens_nested_chains() {
        let inner = chain([bare_property("ns"), bare_property("documentExtensionData")]).unwrap();
        let reference = chain([inner, by_id("document", 3)]).unwrap();
        assert_eq!(reference.len(), 3);
        assert_eq!(reference.domain(), Some(&Domain::DOCUMENT));
    }

    #[test]
    fn ordinal_enum_is_the_ordinal_node() {
        assert_eq!(
            by_enum("layer", "ordinal", "targetEnum"),
            by_ordinal("layer", Ordinal::Target)
        );
        assert_eq!(
            by_enum("path", "path", "vectorMask").outermost().selector(),
            &Selector::Enumerated {
                enum_type: "path".into(),
                value: "vectorMask".into()
            }
        );
    }

    #[test]
    fn class_tag_keeps_its_domain() {
        let reference = chain([by_id("document", 1), class_tag(Domain::GUIDE)]).unwrap();
        assert_eq!(domain_of(&reference), Some(&Domain::GUIDE));
        assert_ne!(class_tag("guide"), by_class("guide"));
    }

    #[test]
    fn single_node_chain_differs_from_bare_node() {
        let bare = by_class("path");
        let listed = chain([by_class("path")]).unwrap();
        assert_ne!(bare, listed);
        assert_eq!(bare.domain(), listed.domain());
    }

    #[test]
    fn within_appends_the_owner() {
        let reference = by_property("targetPathVisibility").within(by_index("document", 1));
        let domains: Vec<_> = reference.nodes().map(|n| n.domain().cloned()).collect();
        assert_eq!(domains, vec![Some(Domain::PROPERTY), Some(Domain::DOCUMENT)]);
        assert!(reference.is_chain());
    }

    #[test]
    fn wrapper_matches_direct_construction() {
        let layers = wrapper("layer");
        assert_eq!(layers.id(4), by_id("layer", 4));
        assert_eq!(layers.index(2), by_index("layer", 2));
        assert_eq!(layers.name("Sky"), by_name("layer", "Sky"));
        assert_eq!(layers.current(), by_ordinal("layer", Ordinal::Target));
        assert_eq!(layers.current(), layers.target());
        assert_eq!(layers.class(), by_class("layer"));
    }

    #[test]
    fn owned_and_static_domains_compare_by_content() {
        assert_eq!(Domain::new("layer"), Domain::LAYER);
    }

    #[test]
    fn require_domain_accepts_matching_reference() {
        let reference = by_index("layer", 3);
        assert!(require_domain("hide", &reference, &Domain::LAYER).is_ok());
    }

    #[test]
    fn require_domain_rejects_other_domain() {
        let reference = by_index("document", 1);
        let err = require_domain("hide", &reference, &Domain::LAYER).unwrap_err();
        assert_eq!(
            err,
            DescriptorError::InvalidReferenceKind {
                operation: "hide",
                expected: Domain::LAYER,
                found: Some(Domain::DOCUMENT),
            }
        );
    }

    #[test]
    fn require_domain_rejects_untagged_property() {
        let err = require_domain("select", &bare_property("x"), &Domain::LAYER).unwrap_err();
        assert!(matches!(
            err,
            DescriptorError::InvalidReferenceKind { found: None, .. }
        ));
    }

    #[test]
    fn current_is_an_alias_of_target() {
        assert_eq!("current".parse::<Ordinal>().unwrap(), Ordinal::Target);
        assert_eq!(Ordinal::Target.to_string(), "target");
        assert_eq!("previous".parse::<Ordinal>().unwrap(), Ordinal::Previous);
    }

    #[test]
    fn ordinal_symbols_round_trip() {
        for ordinal in Ordinal::iter() {
            assert_eq!(Ordinal::from_symbol(ordinal.symbol()), Some(ordinal));
        }
    }
}
