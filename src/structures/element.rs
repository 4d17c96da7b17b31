//! Conceptual Monster group elements, identified by conjugacy-class label.

use std::fmt;

/// Label reserved for the identity element.
pub const IDENTITY_LABEL: &str = "e";

/// Known (ATLAS class label, element order) pairs, ascending by order.
///
/// ATLAS naming encodes the element order in the label: every element of
/// class `12A` has order 12, with trailing letters ranking classes of equal
/// order by decreasing centralizer size. The Monster has 194 classes; this
/// table is a documented sample across orders 1–71, not the full list.
static KNOWN_CLASSES: [(&str, u64); 43] = [
    ("1A", 1),
    ("2A", 2),
    ("2B", 2),
    ("3A", 3),
    ("3B", 3),
    ("3C", 3),
    ("4A", 4),
    ("4B", 4),
    ("4C", 4),
    ("4D", 4),
    ("5A", 5),
    ("5B", 5),
    ("6A", 6),
    ("6B", 6),
    ("6C", 6),
    ("7A", 7),
    ("7B", 7),
    ("8A", 8),
    ("8B", 8),
    ("9A", 9),
    ("9B", 9),
    ("10A", 10),
    ("10B", 10),
    ("11A", 11),
    ("12A", 12),
    ("13A", 13),
    ("13B", 13),
    ("14A", 14),
    ("15A", 15),
    ("16A", 16),
    ("17A", 17),
    ("18A", 18),
    ("19A", 19),
    ("20A", 20),
    ("21A", 21),
    ("23A", 23),
    ("24A", 24),
    ("29A", 29),
    ("31A", 31),
    ("41A", 41),
    ("47A", 47),
    ("59A", 59),
    ("71A", 71),
];

/// A conceptual element of the Monster group.
///
/// An element is identified only by a caller-supplied label; any string is
/// accepted at construction and no group arithmetic is available. Queries
/// answer from the static class table: the identity and the listed ATLAS
/// classes have known orders, everything else is honestly `None`.
///
/// # Example
///
/// ```
/// use monstrum::MonsterElement;
///
/// let e = MonsterElement::identity();
/// assert_eq!(e.order(), Some(1));
///
/// let g = MonsterElement::new("2A");
/// assert_eq!(g.order(), Some(2));
///
/// let unknown = MonsterElement::new("not-a-class");
/// assert_eq!(unknown.order(), None);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct MonsterElement {
    label: String,
}

#[cfg(feature = "rand")]
impl rand::distributions::Distribution<MonsterElement> for rand::distributions::Standard {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> MonsterElement {
        let (label, _) = KNOWN_CLASSES[rng.gen_range(0..KNOWN_CLASSES.len())];
        MonsterElement::new(label)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for MonsterElement {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.label.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for MonsterElement {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        Ok(Self::new(label))
    }
}

impl MonsterElement {
    /// Create an element with the given label.
    ///
    /// No validation happens here: unrecognized labels are legal and simply
    /// answer `None` from the lookup queries.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// The identity element, labeled `"e"`.
    pub fn identity() -> Self {
        Self::new(IDENTITY_LABEL)
    }

    /// The label this element was constructed with, verbatim.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether this is the identity.
    ///
    /// Both `"e"` and the ATLAS class label `"1A"` qualify; class 1A
    /// contains exactly the identity.
    pub fn is_identity(&self) -> bool {
        self.label == IDENTITY_LABEL || self.label == "1A"
    }

    /// Element order from the class table.
    ///
    /// The identity always maps to `Some(1)`. Labels outside the table map
    /// to `None` on every call; no numeric default is ever invented, because
    /// determining the order of an arbitrary Monster element is a genuine
    /// computation this crate does not attempt.
    pub fn order(&self) -> Option<u64> {
        if self.label == IDENTITY_LABEL {
            return Some(1);
        }
        KNOWN_CLASSES
            .iter()
            .find(|&&(label, _)| label == self.label)
            .map(|&(_, order)| order)
    }

    /// Canonical ATLAS label of this element's conjugacy class, when known.
    ///
    /// `"e"` normalizes to `"1A"`; table labels answer themselves; unknown
    /// labels answer `None`.
    pub fn conjugacy_class(&self) -> Option<&'static str> {
        if self.label == IDENTITY_LABEL {
            return Some("1A");
        }
        KNOWN_CLASSES
            .iter()
            .find(|&&(label, _)| label == self.label)
            .map(|&(label, _)| label)
    }

    /// Read-only view of the full (label, order) table.
    pub fn known_classes() -> &'static [(&'static str, u64)] {
        &KNOWN_CLASSES
    }
}

impl Default for MonsterElement {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Debug for MonsterElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MonsterElement({:?})", self.label)
    }
}

impl fmt::Display for MonsterElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}
