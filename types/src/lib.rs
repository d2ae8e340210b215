use serde::{Deserialize, Serialize};

// ── Five elements ────────────────────────────────────────────────────────

/// One of the five phases (五行).
///
/// Declaration order (金, 木, 水, 火, 土) is the tie-break order used when
/// ranking a tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    #[serde(rename = "金")]
    Metal,
    #[serde(rename = "木")]
    Wood,
    #[serde(rename = "水")]
    Water,
    #[serde(rename = "火")]
    Fire,
    #[serde(rename = "土")]
    Earth,
}

impl Element {
    pub const ALL: [Element; 5] = [
        Element::Metal,
        Element::Wood,
        Element::Water,
        Element::Fire,
        Element::Earth,
    ];

    pub fn as_chinese(&self) -> &'static str {
        match self {
            Self::Metal => "金",
            Self::Wood => "木",
            Self::Water => "水",
            Self::Fire => "火",
            Self::Earth => "土",
        }
    }

    pub fn from_chinese(s: &str) -> Option<Self> {
        match s {
            "金" => Some(Self::Metal),
            "木" => Some(Self::Wood),
            "水" => Some(Self::Water),
            "火" => Some(Self::Fire),
            "土" => Some(Self::Earth),
            _ => None,
        }
    }

    /// 相生: the element this one gives rise to (金生水, 水生木, ...).
    pub fn generates(&self) -> Element {
        match self {
            Self::Metal => Self::Water,
            Self::Water => Self::Wood,
            Self::Wood => Self::Fire,
            Self::Fire => Self::Earth,
            Self::Earth => Self::Metal,
        }
    }

    /// 相克: the element this one overcomes (金克木, 木克土, ...).
    pub fn overcomes(&self) -> Element {
        match self {
            Self::Metal => Self::Wood,
            Self::Wood => Self::Earth,
            Self::Earth => Self::Water,
            Self::Water => Self::Fire,
            Self::Fire => Self::Metal,
        }
    }
}

/// An element with its neighbours in both cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementRelations {
    pub element: Element,
    pub generates: Element,
    pub generated_by: Element,
    pub overcomes: Element,
    pub overcome_by: Element,
}

/// Element counts of a chart. Every element is always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ElementTally {
    pub metal: u8,
    pub wood: u8,
    pub water: u8,
    pub fire: u8,
    pub earth: u8,
}

impl ElementTally {
    pub fn get(&self, element: Element) -> u8 {
        match element {
            Element::Metal => self.metal,
            Element::Wood => self.wood,
            Element::Water => self.water,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
        }
    }

    pub fn increment(&mut self, element: Element) {
        let slot = match element {
            Element::Metal => &mut self.metal,
            Element::Wood => &mut self.wood,
            Element::Water => &mut self.water,
            Element::Fire => &mut self.fire,
            Element::Earth => &mut self.earth,
        };
        *slot += 1;
    }

    pub fn total(&self) -> u32 {
        Element::ALL.iter().map(|&e| self.get(e) as u32).sum()
    }

    /// (element, count) pairs in declaration order.
    pub fn entries(&self) -> [(Element, u8); 5] {
        Element::ALL.map(|e| (e, self.get(e)))
    }
}

/// Tally plus the derived 喜用神 (favorable) and 忌神 (unfavorable) elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementalProfile {
    pub tally: ElementTally,
    pub favorable: [Element; 2],
    pub unfavorable: [Element; 2],
}

// ── Birth chart report ───────────────────────────────────────────────────

/// Four pillars rendered as 干支 strings, with the elemental reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartReport {
    pub year_gan_zhi: String,
    pub month_gan_zhi: String,
    pub day_gan_zhi: String,
    pub hour_gan_zhi: String,
    #[serde(flatten)]
    pub profile: ElementalProfile,
}

/// One of the twelve two-hour periods (时辰).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourPeriod {
    /// Representative hour of day for the period
    pub value: u8,
    /// e.g. "子时"
    pub label: String,
    /// e.g. "23:00-00:59"
    pub time_range: String,
}

// ── Name candidates ──────────────────────────────────────────────────────

/// Classical works a given name may be drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NameSource {
    #[serde(rename = "诗经")]
    Shijing,
    #[serde(rename = "楚辞")]
    Chuci,
    #[serde(rename = "唐诗")]
    TangPoetry,
    #[serde(rename = "宋词")]
    SongCi,
    #[serde(rename = "论语")]
    Analects,
    #[serde(rename = "周易")]
    Zhouyi,
}

impl NameSource {
    pub const ALL: [NameSource; 6] = [
        NameSource::Shijing,
        NameSource::Chuci,
        NameSource::TangPoetry,
        NameSource::SongCi,
        NameSource::Analects,
        NameSource::Zhouyi,
    ];

    pub fn as_chinese(&self) -> &'static str {
        match self {
            Self::Shijing => "诗经",
            Self::Chuci => "楚辞",
            Self::TangPoetry => "唐诗",
            Self::SongCi => "宋词",
            Self::Analects => "论语",
            Self::Zhouyi => "周易",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Shijing => "中国最早的诗歌总集",
            Self::Chuci => "战国时期楚国的诗歌总集",
            Self::TangPoetry => "唐代诗歌作品",
            Self::SongCi => "宋代词作",
            Self::Analects => "儒家经典著作",
            Self::Zhouyi => "儒家经典之一",
        }
    }
}

/// A two-character given name with its quoted provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameCandidate {
    pub name: String,
    pub source: NameSource,
    /// Verse line containing the name (or the poem's first line)
    pub quote: String,
    /// Citation, e.g. "《诗经·国风·周南·关雎》"
    pub origin: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,
}

/// A known source with its short description, for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceInfo {
    pub source: NameSource,
    pub description: String,
}

impl From<NameSource> for SourceInfo {
    fn from(source: NameSource) -> Self {
        Self {
            source,
            description: source.description().to_string(),
        }
    }
}

// ── Corpus summary ───────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionStats {
    pub name: String,
    pub description: String,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusStats {
    pub shijing: CollectionStats,
    pub chuci: CollectionStats,
}
