//! TOML configuration. Every section and key is optional:
//!
//! ```toml
//! [corpus]
//! dir = "data"
//!
//! [calendar]
//! utc_offset_hours = 8.0
//! zi_shi = "split"        # or "next_day"
//!
//! [search]
//! default_limit = 10
//!
//! [routing]
//! default = "chuci"
//! genders = { female = "shijing" }
//! ```
//!
//! A `genders` table replaces the built-in one, so it must list every
//! gender that should not go to `default`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::calendar::{SolarTermCalendar, ZiShiMode};
use crate::corpus::CorpusIndex;
use crate::error::{NamingError, Result};
use crate::search::GenderRouting;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    pub corpus: CorpusConfig,
    pub calendar: CalendarConfig,
    pub search: SearchConfig,
    pub routing: GenderRouting,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Directory holding `shijing.json` and `chuci.json`; the bundled
    /// sample corpus when unset.
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    pub utc_offset_hours: f64,
    pub zi_shi: ZiShiMode,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            utc_offset_hours: 8.0,
            zi_shi: ZiShiMode::Split,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub default_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { default_limit: 10 }
    }
}

impl NamingConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| NamingError::io(path, e))?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| NamingError::Config {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let offset = self.calendar.utc_offset_hours;
        if !(-12.0..=14.0).contains(&offset) {
            return Err(NamingError::Config {
                message: format!("calendar.utc_offset_hours must be within -12..=14, got {offset}"),
            });
        }
        if self.search.default_limit == 0 {
            return Err(NamingError::Config {
                message: "search.default_limit must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    pub fn calendar(&self) -> SolarTermCalendar {
        SolarTermCalendar::new(self.calendar.utc_offset_hours, self.calendar.zi_shi)
    }

    pub fn load_corpus(&self) -> Result<CorpusIndex> {
        match &self.corpus.dir {
            Some(dir) => CorpusIndex::load_dir(dir),
            None => CorpusIndex::bundled(),
        }
    }
}
