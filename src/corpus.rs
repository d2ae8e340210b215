//! The two classical collections (诗经, 楚辞) as loaded, read-only data.
//!
//! A [`CorpusIndex`] is built once and then only read; it is `Send + Sync`
//! and can be shared across threads without locking.
//!
//! On-disk document format:
//!   { "name": "诗经", "description": "...", "total": 305,
//!     "poems": [ { "title": "关雎", "chapter": "国风", "section": "周南",
//!                  "content": "关关雎鸠，在河之洲。...\n...",
//!                  "keywords": ["关关", "关雎", ...] } ] }

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use naming_types::{CollectionStats, CorpusStats, NameSource};
use serde::{Deserialize, Serialize};

use crate::error::{NamingError, Result};

const BUNDLED_SHIJING: &str = include_str!("../data/shijing.json");
const BUNDLED_CHUCI: &str = include_str!("../data/chuci.json");

// ── Collection id ────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionId {
    Shijing,
    Chuci,
}

impl CollectionId {
    pub const ALL: [CollectionId; 2] = [CollectionId::Shijing, CollectionId::Chuci];

    pub fn source(&self) -> NameSource {
        match self {
            Self::Shijing => NameSource::Shijing,
            Self::Chuci => NameSource::Chuci,
        }
    }

    pub fn as_chinese(&self) -> &'static str {
        self.source().as_chinese()
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Shijing => "shijing.json",
            Self::Chuci => "chuci.json",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Shijing => "中国古代诗歌开端，收录西周至春秋中期诗歌",
            Self::Chuci => "战国时期楚国诗歌总集，以屈原作品为主",
        }
    }
}

impl FromStr for CollectionId {
    type Err = NamingError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "shijing" | "诗经" => Ok(Self::Shijing),
            "chuci" | "楚辞" => Ok(Self::Chuci),
            _ => Err(NamingError::Config {
                message: format!("unknown collection {s:?} (expected shijing or chuci)"),
            }),
        }
    }
}

impl fmt::Display for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Shijing => "shijing",
            Self::Chuci => "chuci",
        })
    }
}

// ── Poem ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoemRecord {
    pub title: String,
    /// 风 / 雅 / 颂 division (诗经)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapter: Option<String>,
    /// e.g. 周南, 九歌
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Verse lines; newline-joined in the document.
    #[serde(with = "verse_lines")]
    pub content: Vec<String>,
    pub keywords: Vec<String>,
}

impl PoemRecord {
    pub fn contains(&self, needle: &str) -> bool {
        self.content.iter().any(|line| line.contains(needle))
    }

    /// Citation label for this poem within a collection.
    ///
    /// 诗经: 《诗经·国风·周南·关雎》
    /// 楚辞: 《楚辞·九歌·湘夫人》 屈原
    pub fn origin_label(&self, collection: CollectionId) -> String {
        let mut parts = vec![collection.as_chinese()];
        if collection == CollectionId::Shijing {
            parts.extend(non_empty(&self.chapter));
        }
        parts.extend(non_empty(&self.section));
        parts.push(&self.title);

        let label = format!("《{}》", parts.join("·"));
        match (collection, non_empty(&self.author)) {
            (CollectionId::Chuci, Some(author)) => format!("{label} {author}"),
            _ => label,
        }
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.is_empty())
}

mod verse_lines {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(lines: &[String], s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&lines.join("\n"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
        let text = String::deserialize(d)?;
        if text.is_empty() {
            return Ok(Vec::new());
        }
        Ok(text.split('\n').map(str::to_string).collect())
    }
}

// ── Collection ───────────────────────────────────────────────────────

/// The serialized form of one collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusDocument {
    pub name: String,
    pub description: String,
    pub total: usize,
    pub poems: Vec<PoemRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusCollection {
    pub id: CollectionId,
    pub name: String,
    pub description: String,
    pub total: usize,
    pub poems: Vec<PoemRecord>,
}

impl CorpusCollection {
    pub fn new(id: CollectionId, document: CorpusDocument) -> Self {
        if document.total != document.poems.len() {
            tracing::warn!(
                collection = %id,
                total = document.total,
                poems = document.poems.len(),
                "declared total differs from poem count"
            );
        }
        Self {
            id,
            name: document.name,
            description: document.description,
            total: document.total,
            poems: document.poems,
        }
    }

    /// Parse a collection document. Any missing required field rejects the
    /// whole document.
    pub fn from_json(id: CollectionId, json: &str) -> Result<Self> {
        let document: CorpusDocument =
            serde_json::from_str(json).map_err(|source| NamingError::MalformedCorpus {
                collection: id.to_string(),
                source,
            })?;
        Ok(Self::new(id, document))
    }

    pub fn from_file(id: CollectionId, path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| NamingError::io(path, e))?;
        let collection = Self::from_json(id, &json)?;
        tracing::debug!(
            collection = %id,
            path = %path.display(),
            poems = collection.poems.len(),
            "loaded corpus collection"
        );
        Ok(collection)
    }

    pub fn to_document(&self) -> CorpusDocument {
        CorpusDocument {
            name: self.name.clone(),
            description: self.description.clone(),
            total: self.total,
            poems: self.poems.clone(),
        }
    }

    pub fn stats(&self) -> CollectionStats {
        CollectionStats {
            name: self.name.clone(),
            description: self.description.clone(),
            total: self.total,
        }
    }
}

// ── Index ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusIndex {
    shijing: CorpusCollection,
    chuci: CorpusCollection,
}

impl CorpusIndex {
    pub fn new(shijing: CorpusCollection, chuci: CorpusCollection) -> Self {
        Self { shijing, chuci }
    }

    /// The sample collections compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Ok(Self::new(
            CorpusCollection::from_json(CollectionId::Shijing, BUNDLED_SHIJING)?,
            CorpusCollection::from_json(CollectionId::Chuci, BUNDLED_CHUCI)?,
        ))
    }

    /// Load `shijing.json` and `chuci.json` from `dir`.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        Ok(Self::new(
            CorpusCollection::from_file(
                CollectionId::Shijing,
                &dir.join(CollectionId::Shijing.file_name()),
            )?,
            CorpusCollection::from_file(
                CollectionId::Chuci,
                &dir.join(CollectionId::Chuci.file_name()),
            )?,
        ))
    }

    pub fn collection(&self, id: CollectionId) -> &CorpusCollection {
        match id {
            CollectionId::Shijing => &self.shijing,
            CollectionId::Chuci => &self.chuci,
        }
    }

    pub fn stats(&self) -> CorpusStats {
        CorpusStats {
            shijing: self.shijing.stats(),
            chuci: self.chuci.stats(),
        }
    }
}
