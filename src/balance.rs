//! Elemental balance of a chart: tally the eight stem/branch elements, then
//! read the two scarcest as favorable (喜用神) and the two most abundant as
//! unfavorable (忌神).
//!
//! Favorability is relative to the chart itself. Ties in the tally are
//! broken by declaration order (金, 木, 水, 火, 土).

use naming_types::{ElementTally, ElementalProfile};

use crate::sexagenary::FourPillars;

pub fn tally(pillars: &FourPillars) -> ElementTally {
    let mut tally = ElementTally::default();
    for pillar in pillars.as_array() {
        for element in pillar.elements() {
            tally.increment(element);
        }
    }
    tally
}

pub fn compute_profile(pillars: &FourPillars) -> ElementalProfile {
    profile_from_tally(tally(pillars))
}

pub fn profile_from_tally(tally: ElementTally) -> ElementalProfile {
    let mut ranked = tally.entries();
    // stable: equal counts keep declaration order
    ranked.sort_by_key(|&(_, count)| count);

    ElementalProfile {
        tally,
        favorable: [ranked[0].0, ranked[1].0],
        unfavorable: [ranked[3].0, ranked[4].0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::Element;
    use crate::sexagenary::Pillar;

    fn pillars(y: &str, m: &str, d: &str, h: &str) -> FourPillars {
        FourPillars::parse(y, m, d, h).unwrap()
    }

    #[test]
    fn test_profile_worked_example() {
        let p = compute_profile(&pillars("甲子", "乙丑", "丙寅", "丁卯"));
        assert_eq!(
            p.tally,
            ElementTally {
                metal: 0,
                wood: 4,
                water: 1,
                fire: 2,
                earth: 1,
            }
        );
        assert_eq!(p.favorable, [Element::Metal, Element::Water]);
        assert_eq!(p.unfavorable, [Element::Fire, Element::Wood]);
    }

    #[test]
    fn test_all_equal_counts_fall_back_to_declaration_order() {
        let tally = ElementTally {
            metal: 2,
            wood: 2,
            water: 2,
            fire: 1,
            earth: 1,
        };
        let p = profile_from_tally(tally);
        assert_eq!(p.favorable, [Element::Fire, Element::Earth]);
        assert_eq!(p.unfavorable, [Element::Wood, Element::Water]);
    }

    #[test]
    fn test_single_element_chart() {
        // 丙午 in every position: all eight slots are Fire
        let p = compute_profile(&pillars("丙午", "丙午", "丙午", "丙午"));
        assert_eq!(p.tally.fire, 8);
        assert_eq!(p.favorable, [Element::Metal, Element::Wood]);
        assert_eq!(p.unfavorable, [Element::Earth, Element::Fire]);
    }

    #[test]
    fn test_every_cycle_combination_sums_to_eight() {
        for i in 0..60 {
            let fp = FourPillars {
                year: Pillar::from_cycle_index(i),
                month: Pillar::from_cycle_index(i * 7 + 3),
                day: Pillar::from_cycle_index(i * 13 + 11),
                hour: Pillar::from_cycle_index(i * 31 + 29),
            };
            let p = compute_profile(&fp);
            assert_eq!(p.tally.total(), 8);
            for f in p.favorable {
                assert!(!p.unfavorable.contains(&f));
            }
            assert_ne!(p.favorable[0], p.favorable[1]);
            assert_ne!(p.unfavorable[0], p.unfavorable[1]);
        }
    }
}
