//! Name candidate search over a [`CorpusIndex`].
//!
//! All operations are read-only. A limit of 0 yields nothing, and a keyword
//! that matches no poem yields an empty list rather than an error.

use std::collections::BTreeMap;

use naming_types::{CorpusStats, NameCandidate};
use serde::{Deserialize, Serialize};

use crate::corpus::{CollectionId, CorpusCollection, CorpusIndex};

// ── Gender routing ───────────────────────────────────────────────────

/// Which collection to draw from for a given gender string.
///
/// The default follows the traditional convention: 女诗经, 男楚辞. Genders
/// not listed in `genders` go to `default`. When deserialized, a missing
/// field keeps its built-in value; a given `genders` table replaces the
/// built-in one entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenderRouting {
    pub default: CollectionId,
    pub genders: BTreeMap<String, CollectionId>,
}

impl Default for GenderRouting {
    fn default() -> Self {
        Self {
            default: CollectionId::Chuci,
            genders: BTreeMap::from([("female".to_string(), CollectionId::Shijing)]),
        }
    }
}

impl GenderRouting {
    pub fn route(&self, gender: &str) -> CollectionId {
        self.genders
            .get(gender)
            .copied()
            .unwrap_or(self.default)
    }
}

// ── Search ───────────────────────────────────────────────────────────

pub struct NameSearch<'a> {
    index: &'a CorpusIndex,
    routing: GenderRouting,
}

impl<'a> NameSearch<'a> {
    pub fn new(index: &'a CorpusIndex) -> Self {
        Self {
            index,
            routing: GenderRouting::default(),
        }
    }

    pub fn with_routing(mut self, routing: GenderRouting) -> Self {
        self.routing = routing;
        self
    }

    pub fn routing(&self) -> &GenderRouting {
        &self.routing
    }

    pub fn search_collection(
        &self,
        id: CollectionId,
        keyword: Option<&str>,
        limit: usize,
    ) -> Vec<NameCandidate> {
        search_collection(self.index.collection(id), keyword, limit)
    }

    pub fn search_by_gender(
        &self,
        gender: &str,
        keyword: Option<&str>,
        limit: usize,
    ) -> Vec<NameCandidate> {
        self.search_collection(self.routing.route(gender), keyword, limit)
    }

    /// Half the limit (rounded up) from 诗经, the rest from 楚辞; 诗经 first.
    pub fn search_all(&self, keyword: Option<&str>, limit: usize) -> Vec<NameCandidate> {
        let mut results = self.search_collection(CollectionId::Shijing, keyword, limit.div_ceil(2));
        results.extend(self.search_collection(CollectionId::Chuci, keyword, limit / 2));
        results
    }

    pub fn stats(&self) -> CorpusStats {
        self.index.stats()
    }
}

/// Walk a collection in order and emit one candidate per poem keyword.
///
/// With a keyword, a poem is kept only if its text or its keyword list
/// contains it. Stops as soon as `limit` candidates exist, so the last poem
/// may contribute only some of its keywords.
pub fn search_collection(
    collection: &CorpusCollection,
    keyword: Option<&str>,
    limit: usize,
) -> Vec<NameCandidate> {
    let mut results = Vec::new();
    if limit == 0 {
        return results;
    }
    let keyword = keyword.filter(|k| !k.is_empty());

    for poem in &collection.poems {
        if let Some(k) = keyword
            && !poem.contains(k)
            && !poem.keywords.iter().any(|w| w == k)
        {
            continue;
        }

        let origin = poem.origin_label(collection.id);
        for name in &poem.keywords {
            if results.len() >= limit {
                return results;
            }
            results.push(NameCandidate {
                name: name.clone(),
                source: collection.id.source(),
                quote: extract_quote(&poem.content, name),
                origin: origin.clone(),
                meaning: None,
            });
        }
    }

    results
}

/// First verse line containing `name` (trimmed), else the first line as
/// stored, else "".
pub fn extract_quote(lines: &[String], name: &str) -> String {
    match lines.iter().find(|line| line.contains(name)) {
        Some(line) => line.trim().to_string(),
        None => lines.first().cloned().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{CorpusDocument, PoemRecord};
    use naming_types::NameSource;

    fn poem(title: &str, content: &[&str], keywords: &[&str]) -> PoemRecord {
        PoemRecord {
            title: title.into(),
            chapter: Some("国风".into()),
            section: Some("周南".into()),
            author: None,
            content: content.iter().map(|s| s.to_string()).collect(),
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn collection(id: CollectionId, poems: Vec<PoemRecord>) -> CorpusCollection {
        CorpusCollection::new(
            id,
            CorpusDocument {
                name: id.as_chinese().into(),
                description: "test".into(),
                total: poems.len(),
                poems,
            },
        )
    }

    fn synthetic_index() -> CorpusIndex {
        CorpusIndex::new(
            collection(
                CollectionId::Shijing,
                vec![
                    poem("甲", &["关关雎鸠", "在河之洲"], &["关关", "雎鸠", "河洲"]),
                    poem("乙", &["桃之夭夭", "灼灼其华"], &["夭夭", "灼灼"]),
                    poem("丙", &["蒹葭苍苍"], &["蒹葭", "苍苍", "白露", "伊人"]),
                ],
            ),
            collection(
                CollectionId::Chuci,
                vec![
                    poem("丁", &["帝子降兮北渚"], &["帝子", "北渚", "秋风"]),
                    poem("戊", &["若有人兮山之阿"], &["山阿", "薜荔", "女萝"]),
                ],
            ),
        )
    }

    fn names(results: &[NameCandidate]) -> Vec<&str> {
        results.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_quote_prefers_containing_line() {
        let lines = vec!["关关雎鸠".to_string(), "在河之洲".to_string()];
        assert_eq!(extract_quote(&lines, "雎鸠"), "关关雎鸠");
        assert_eq!(extract_quote(&lines, "河之"), "在河之洲");
    }

    #[test]
    fn test_quote_falls_back_to_first_line() {
        let lines = vec![" 关关雎鸠 ".to_string(), "在河之洲".to_string()];
        assert_eq!(extract_quote(&lines, "河洲"), " 关关雎鸠 ");
        assert_eq!(extract_quote(&lines, "雎鸠"), "关关雎鸠");
        assert_eq!(extract_quote(&[], "河洲"), "");
    }

    #[test]
    fn test_limit_zero_returns_nothing() {
        let index = synthetic_index();
        let search = NameSearch::new(&index);
        assert!(search.search_collection(CollectionId::Shijing, None, 0).is_empty());
        assert!(search.search_all(None, 0).is_empty());
    }

    #[test]
    fn test_limit_stops_mid_poem() {
        let index = synthetic_index();
        let search = NameSearch::new(&index);
        let r = search.search_collection(CollectionId::Shijing, None, 4);
        assert_eq!(names(&r), vec!["关关", "雎鸠", "河洲", "夭夭"]);
    }

    #[test]
    fn test_keyword_filters_poems_not_candidates() {
        let index = synthetic_index();
        let search = NameSearch::new(&index);

        // "灼其" only occurs in the text of 乙; all of 乙's keywords come back
        let r = search.search_collection(CollectionId::Shijing, Some("灼其"), 10);
        assert_eq!(names(&r), vec!["夭夭", "灼灼"]);

        // "白露" only occurs in the keyword list of 丙
        let r = search.search_collection(CollectionId::Shijing, Some("白露"), 10);
        assert_eq!(names(&r), vec!["蒹葭", "苍苍", "白露", "伊人"]);
        assert_eq!(r[2].quote, "蒹葭苍苍");
    }

    #[test]
    fn test_keyword_without_match_is_empty() {
        let index = synthetic_index();
        let search = NameSearch::new(&index);
        assert!(search.search_all(Some("不存在"), 10).is_empty());
    }

    #[test]
    fn test_empty_keyword_means_no_filter() {
        let index = synthetic_index();
        let search = NameSearch::new(&index);
        assert_eq!(
            search.search_collection(CollectionId::Chuci, Some(""), 10).len(),
            6
        );
    }

    #[test]
    fn test_candidates_carry_provenance() {
        let index = synthetic_index();
        let search = NameSearch::new(&index);
        let r = search.search_collection(CollectionId::Shijing, Some("雎鸠"), 2);
        assert_eq!(r[1].name, "雎鸠");
        assert_eq!(r[1].quote, "关关雎鸠");
        assert_eq!(r[1].origin, "《诗经·国风·周南·甲》");
        assert_eq!(r[1].source, NameSource::Shijing);
        assert!(r[1].meaning.is_none());
    }

    #[test]
    fn test_search_all_splits_limit() {
        let index = synthetic_index();
        let search = NameSearch::new(&index);

        let r = search.search_all(None, 5);
        assert_eq!(names(&r), vec!["关关", "雎鸠", "河洲", "帝子", "北渚"]);

        let r = search.search_all(None, 10);
        let shijing = r.iter().filter(|c| c.source == NameSource::Shijing).count();
        let chuci = r.iter().filter(|c| c.source == NameSource::Chuci).count();
        assert_eq!((shijing, chuci), (5, 5));
        let first_chuci = r.iter().position(|c| c.source == NameSource::Chuci).unwrap();
        assert!(r[first_chuci..].iter().all(|c| c.source == NameSource::Chuci));
    }

    #[test]
    fn test_gender_routing_default() {
        let index = synthetic_index();
        let search = NameSearch::new(&index);
        let female = search.search_by_gender("female", None, 1);
        assert_eq!(female[0].source, NameSource::Shijing);
        for g in ["male", "neutral", "anything"] {
            assert_eq!(search.search_by_gender(g, None, 1)[0].source, NameSource::Chuci);
        }
    }

    #[test]
    fn test_gender_routing_override() {
        let index = synthetic_index();
        let routing = GenderRouting {
            default: CollectionId::Shijing,
            genders: BTreeMap::from([("male".to_string(), CollectionId::Chuci)]),
        };
        let search = NameSearch::new(&index).with_routing(routing);
        assert_eq!(search.search_by_gender("female", None, 1)[0].source, NameSource::Shijing);
        assert_eq!(search.search_by_gender("male", None, 1)[0].source, NameSource::Chuci);
    }

    #[test]
    fn test_every_listed_keyword_is_findable() {
        let index = synthetic_index();
        let search = NameSearch::new(&index);
        for id in CollectionId::ALL {
            for poem in &index.collection(id).poems {
                for k in &poem.keywords {
                    let r = search.search_collection(id, Some(k), 100);
                    assert!(r.iter().any(|c| &c.name == k), "{k} missing");
                }
            }
        }
    }
}
