//! Offline corpus build: raw chinese-poetry records → corpus documents with
//! extracted keywords.
//!
//! Expected raw layout (any depth under the root):
//!   {root}/…/shijing.json   [ { "title", "chapter", "section", "content": [..] } ]
//!   {root}/…/chuci.json     [ { "title", "section", "author", "content": [..] } ]

use std::path::{Path, PathBuf};

use naming_types::CollectionStats;
use serde::Deserialize;
use walkdir::WalkDir;

use crate::corpus::{CollectionId, CorpusCollection, CorpusDocument, PoemRecord};
use crate::error::{NamingError, Result};
use crate::keywords::extract_keywords;

const UNKNOWN_AUTHOR: &str = "佚名";

/// A poem as published upstream. Every field may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPoem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub chapter: Option<String>,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub content: RawContent,
}

/// Content is either a list of lines or a single string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawContent {
    Lines(Vec<String>),
    Text(String),
}

impl Default for RawContent {
    fn default() -> Self {
        Self::Lines(Vec::new())
    }
}

impl RawContent {
    fn lines(&self) -> Vec<String> {
        match self {
            Self::Lines(lines) => lines.clone(),
            Self::Text(text) if text.is_empty() => Vec::new(),
            Self::Text(text) => text.split('\n').map(str::to_string).collect(),
        }
    }
}

/// Convert raw records into a collection, extracting keywords per poem.
pub fn build_collection(id: CollectionId, raw: Vec<RawPoem>) -> CorpusCollection {
    let poems: Vec<PoemRecord> = raw
        .into_iter()
        .map(|r| {
            let content = r.content.lines();
            let keywords = extract_keywords(&content.concat());
            let author = match id {
                CollectionId::Chuci => {
                    Some(r.author.filter(|a| !a.is_empty()).unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()))
                }
                CollectionId::Shijing => r.author,
            };
            PoemRecord {
                title: r.title.unwrap_or_default(),
                chapter: r.chapter,
                section: r.section,
                author,
                content,
                keywords,
            }
        })
        .collect();

    CorpusCollection::new(
        id,
        CorpusDocument {
            name: id.as_chinese().to_string(),
            description: id.description().to_string(),
            total: poems.len(),
            poems,
        },
    )
}

/// Find the raw `shijing.json` / `chuci.json` files under `root`.
/// The first match for each collection wins.
pub fn discover_raw_files(root: &Path) -> Vec<(CollectionId, PathBuf)> {
    let mut found: Vec<(CollectionId, PathBuf)> = Vec::new();

    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }
        let file_name = entry.file_name().to_str().unwrap_or("");
        let Some(id) = CollectionId::ALL
            .into_iter()
            .find(|id| id.file_name() == file_name)
        else {
            continue;
        };
        if found.iter().any(|(f, _)| *f == id) {
            continue;
        }
        found.push((id, entry.path().to_path_buf()));
    }

    found
}

fn read_raw(id: CollectionId, path: &Path) -> Result<Vec<RawPoem>> {
    let json = std::fs::read_to_string(path).map_err(|e| NamingError::io(path, e))?;
    serde_json::from_str(&json).map_err(|source| NamingError::MalformedCorpus {
        collection: id.to_string(),
        source,
    })
}

/// Build every collection found under `raw_root` and write the documents
/// into `out_dir`. Both collections must be present.
pub fn build_corpus_dir(raw_root: &Path, out_dir: &Path) -> Result<Vec<CollectionStats>> {
    let found = discover_raw_files(raw_root);
    for id in CollectionId::ALL {
        if !found.iter().any(|(f, _)| *f == id) {
            return Err(NamingError::Config {
                message: format!("no {} under {}", id.file_name(), raw_root.display()),
            });
        }
    }

    std::fs::create_dir_all(out_dir).map_err(|e| NamingError::io(out_dir, e))?;

    let mut stats = Vec::new();
    for (id, path) in found {
        let raw = read_raw(id, &path)?;
        let collection = build_collection(id, raw);

        let out_path = out_dir.join(id.file_name());
        let json = serde_json::to_string_pretty(&collection.to_document())?;
        std::fs::write(&out_path, &json).map_err(|e| NamingError::io(&out_path, e))?;
        tracing::info!(
            collection = %id,
            poems = collection.total,
            path = %out_path.display(),
            bytes = json.len(),
            "wrote corpus document"
        );
        stats.push(collection.stats());
    }

    Ok(stats)
}
