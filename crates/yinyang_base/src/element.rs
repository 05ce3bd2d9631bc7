//! The five elements, yin/yang polarity, and the generation/overcoming cycle.
//!
//! Generation: Wood → Fire → Earth → Metal → Water → Wood.
//! Overcoming: Wood → Earth → Water → Fire → Metal → Wood.
//!
//! Both cycles are offsets on the same ring of five, so every relation
//! lookup is index arithmetic on [`ALL_ELEMENTS`].

use serde::{Deserialize, Serialize};

/// The five elements (wuxing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in generation order.
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

/// Element used when a symbol cannot be resolved.
pub const FALLBACK_ELEMENT: Element = Element::Earth;

impl Element {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// Chinese character.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// 0-based index into ALL_ELEMENTS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    const fn step(self, offset: u8) -> Self {
        ALL_ELEMENTS[((self.index() + offset) % 5) as usize]
    }

    /// The element this one generates ("I generate").
    pub const fn generates(self) -> Self {
        self.step(1)
    }

    /// The element this one overcomes ("I overcome").
    pub const fn overcomes(self) -> Self {
        self.step(2)
    }

    /// The element that overcomes this one ("overcomes me").
    pub const fn overcome_by(self) -> Self {
        self.step(3)
    }

    /// The element that generates this one ("generates me").
    pub const fn generated_by(self) -> Self {
        self.step(4)
    }

    /// Relation of `other` as seen from `self`.
    pub const fn relation_to(self, other: Element) -> ElementRelation {
        match (other.index() + 5 - self.index()) % 5 {
            0 => ElementRelation::Same,
            1 => ElementRelation::Generates,
            2 => ElementRelation::Overcomes,
            3 => ElementRelation::OvercomeBy,
            _ => ElementRelation::GeneratedBy,
        }
    }
}

/// How one element stands relative to a reference element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ElementRelation {
    /// Same element.
    Same,
    /// The reference generates it.
    Generates,
    /// The reference overcomes it.
    Overcomes,
    /// It overcomes the reference.
    OvercomeBy,
    /// It generates the reference.
    GeneratedBy,
}

/// Yin/yang polarity of a stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "Yang",
            Self::Yin => "Yin",
        }
    }

    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Yang => "阳",
            Self::Yin => "阴",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, e) in ALL_ELEMENTS.iter().enumerate() {
            assert_eq!(e.index() as usize, i);
        }
    }

    #[test]
    fn generation_cycle() {
        assert_eq!(Element::Wood.generates(), Element::Fire);
        assert_eq!(Element::Fire.generates(), Element::Earth);
        assert_eq!(Element::Earth.generates(), Element::Metal);
        assert_eq!(Element::Metal.generates(), Element::Water);
        assert_eq!(Element::Water.generates(), Element::Wood);
    }

    #[test]
    fn overcoming_cycle() {
        assert_eq!(Element::Wood.overcomes(), Element::Earth);
        assert_eq!(Element::Earth.overcomes(), Element::Water);
        assert_eq!(Element::Water.overcomes(), Element::Fire);
        assert_eq!(Element::Fire.overcomes(), Element::Metal);
        assert_eq!(Element::Metal.overcomes(), Element::Wood);
    }

    #[test]
    fn inverse_lookups_agree() {
        for e in ALL_ELEMENTS {
            assert_eq!(e.generated_by().generates(), e);
            assert_eq!(e.overcome_by().overcomes(), e);
        }
    }

    #[test]
    fn wood_relations() {
        assert_eq!(Element::Wood.generated_by(), Element::Water);
        assert_eq!(Element::Wood.overcome_by(), Element::Metal);
    }

    #[test]
    fn relation_to_covers_all_five() {
        let w = Element::Wood;
        assert_eq!(w.relation_to(Element::Wood), ElementRelation::Same);
        assert_eq!(w.relation_to(Element::Fire), ElementRelation::Generates);
        assert_eq!(w.relation_to(Element::Earth), ElementRelation::Overcomes);
        assert_eq!(w.relation_to(Element::Metal), ElementRelation::OvercomeBy);
        assert_eq!(w.relation_to(Element::Water), ElementRelation::GeneratedBy);
    }
}
