//! Naming core: birth moment → 四柱八字 → five-element balance, and
//! name candidates drawn from 诗经 / 楚辞.

pub mod balance;
pub mod calendar;
pub mod chart;
pub mod config;
pub mod corpus;
pub mod elements;
pub mod error;
pub mod ingest;
pub mod keywords;
pub mod logger;
pub mod search;
pub mod sexagenary;
pub mod validate;

pub use balance::{compute_profile, profile_from_tally, tally};
pub use calendar::{BirthMoment, CalendarConverter, SolarTermCalendar, ZiShiMode};
pub use chart::compute_chart;
pub use config::NamingConfig;
pub use corpus::{CollectionId, CorpusCollection, CorpusIndex, PoemRecord};
pub use error::{NamingError, Result};
pub use keywords::extract_keywords;
pub use search::{GenderRouting, NameSearch};
pub use sexagenary::{Branch, FourPillars, Pillar, Stem};

pub use naming_types::{
    ChartReport, CollectionStats, CorpusStats, Element, ElementRelations, ElementTally,
    ElementalProfile, HourPeriod, NameCandidate, NameSource, SourceInfo,
};
