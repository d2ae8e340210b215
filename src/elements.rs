//! Five-element (五行) classification of stems and branches.

pub use naming_types::{Element, ElementRelations};

use crate::error::{NamingError, Result};
use crate::sexagenary::{Branch, Pillar, Stem};

/// 甲乙木 丙丁火 戊己土 庚辛金 壬癸水
pub fn stem_element(stem: Stem) -> Element {
    match stem {
        Stem::Jia | Stem::Yi => Element::Wood,
        Stem::Bing | Stem::Ding => Element::Fire,
        Stem::Wu | Stem::Ji => Element::Earth,
        Stem::Geng | Stem::Xin => Element::Metal,
        Stem::Ren | Stem::Gui => Element::Water,
    }
}

/// 寅卯木 巳午火 申酉金 亥子水, 辰戌丑未土
pub fn branch_element(branch: Branch) -> Element {
    match branch {
        Branch::Zi | Branch::Hai => Element::Water,
        Branch::Yin | Branch::Mao => Element::Wood,
        Branch::Si | Branch::Wu => Element::Fire,
        Branch::Shen | Branch::You => Element::Metal,
        Branch::Chou | Branch::Chen | Branch::Wei | Branch::Xu => Element::Earth,
    }
}

impl Pillar {
    /// Elements of the stem and the branch, in that order.
    pub fn elements(&self) -> [Element; 2] {
        [stem_element(self.stem), branch_element(self.branch)]
    }
}

/// Parse 金 / 木 / 水 / 火 / 土.
pub fn parse_element(s: &str) -> Result<Element> {
    Element::from_chinese(s.trim()).ok_or_else(|| NamingError::UnknownElement(s.to_string()))
}

/// 生 and 克 neighbours of `element`.
pub fn relations(element: Element) -> ElementRelations {
    let source_of = |f: fn(&Element) -> Element| {
        Element::ALL
            .into_iter()
            .find(|e| f(e) == element)
            .unwrap_or(element)
    };
    ElementRelations {
        element,
        generates: element.generates(),
        generated_by: source_of(Element::generates),
        overcomes: element.overcomes(),
        overcome_by: source_of(Element::overcomes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem_table() {
        let expected = [
            Element::Wood,
            Element::Wood,
            Element::Fire,
            Element::Fire,
            Element::Earth,
            Element::Earth,
            Element::Metal,
            Element::Metal,
            Element::Water,
            Element::Water,
        ];
        for (stem, want) in Stem::ALL.into_iter().zip(expected) {
            assert_eq!(stem_element(stem), want, "{stem}");
        }
    }

    #[test]
    fn test_branch_table() {
        let expected = "水土木木土火火土金金土水";
        for (branch, want) in Branch::ALL.into_iter().zip(expected.chars()) {
            assert_eq!(
                branch_element(branch).as_chinese(),
                want.to_string(),
                "{branch}"
            );
        }
    }

    #[test]
    fn test_pillar_elements() {
        let p: Pillar = "丙寅".parse().unwrap();
        assert_eq!(p.elements(), [Element::Fire, Element::Wood]);
    }

    #[test]
    fn test_parse_element() {
        assert_eq!(parse_element("水").unwrap(), Element::Water);
        assert_eq!(parse_element(" 土 ").unwrap(), Element::Earth);
        assert!(matches!(parse_element("风"), Err(NamingError::UnknownElement(_))));
    }

    #[test]
    fn test_relations() {
        let wood = relations(Element::Wood);
        assert_eq!(wood.generates, Element::Fire);
        assert_eq!(wood.generated_by, Element::Water);
        assert_eq!(wood.overcomes, Element::Earth);
        assert_eq!(wood.overcome_by, Element::Metal);

        for e in Element::ALL {
            let r = relations(e);
            assert_eq!(r.generated_by.generates(), e);
            assert_eq!(r.overcome_by.overcomes(), e);
        }
    }
}
