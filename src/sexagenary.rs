//! Heavenly stems (天干), earthly branches (地支) and the pillars they form.
//!
//! Both alphabets are closed enums: a symbol outside them can only enter the
//! system through `from_char` / `FromStr`, which reject it with
//! [`NamingError::UnknownStem`] or [`NamingError::UnknownBranch`].
//!
//! Indices follow the traditional order:
//!   天干: 甲(0) 乙(1) 丙(2) 丁(3) 戊(4) 己(5) 庚(6) 辛(7) 壬(8) 癸(9)
//!   地支: 子(0) 丑(1) 寅(2) 卯(3) 辰(4) 巳(5) 午(6) 未(7) 申(8) 酉(9) 戌(10) 亥(11)

use std::fmt;
use std::str::FromStr;

use crate::error::{NamingError, Result};

// ── Stem ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

impl Stem {
    pub const ALL: [Stem; 10] = [
        Stem::Jia,
        Stem::Yi,
        Stem::Bing,
        Stem::Ding,
        Stem::Wu,
        Stem::Ji,
        Stem::Geng,
        Stem::Xin,
        Stem::Ren,
        Stem::Gui,
    ];

    /// Stem at `index`, wrapping around the ten-stem cycle.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 10]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Jia => '甲',
            Self::Yi => '乙',
            Self::Bing => '丙',
            Self::Ding => '丁',
            Self::Wu => '戊',
            Self::Ji => '己',
            Self::Geng => '庚',
            Self::Xin => '辛',
            Self::Ren => '壬',
            Self::Gui => '癸',
        }
    }

    pub fn from_char(c: char) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.as_char() == c)
            .ok_or_else(|| NamingError::UnknownStem(c.to_string()))
    }
}

impl FromStr for Stem {
    type Err = NamingError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => Err(NamingError::UnknownStem(s.to_string())),
        }
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

// ── Branch ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

impl Branch {
    pub const ALL: [Branch; 12] = [
        Branch::Zi,
        Branch::Chou,
        Branch::Yin,
        Branch::Mao,
        Branch::Chen,
        Branch::Si,
        Branch::Wu,
        Branch::Wei,
        Branch::Shen,
        Branch::You,
        Branch::Xu,
        Branch::Hai,
    ];

    /// Branch at `index`, wrapping around the twelve-branch cycle.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 12]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Zi => '子',
            Self::Chou => '丑',
            Self::Yin => '寅',
            Self::Mao => '卯',
            Self::Chen => '辰',
            Self::Si => '巳',
            Self::Wu => '午',
            Self::Wei => '未',
            Self::Shen => '申',
            Self::You => '酉',
            Self::Xu => '戌',
            Self::Hai => '亥',
        }
    }

    pub fn from_char(c: char) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|b| b.as_char() == c)
            .ok_or_else(|| NamingError::UnknownBranch(c.to_string()))
    }
}

impl FromStr for Branch {
    type Err = NamingError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => Err(NamingError::UnknownBranch(s.to_string())),
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

// ── Pillar ───────────────────────────────────────────────────────────

/// A (stem, branch) pair for one of year / month / day / hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    pub fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Pillar at position `index` of the sixty-term cycle (0 = 甲子).
    pub fn from_cycle_index(index: usize) -> Self {
        Self {
            stem: Stem::from_index(index),
            branch: Branch::from_index(index),
        }
    }

    /// Position in the sixty-term cycle, or `None` when stem and branch
    /// differ in parity (such pairs never occur in the cycle).
    pub fn cycle_index(&self) -> Option<usize> {
        let (s, b) = (self.stem.index(), self.branch.index());
        if s % 2 != b % 2 {
            return None;
        }
        Some((6 * s + 60 - (5 * b) % 60) % 60)
    }
}

impl FromStr for Pillar {
    type Err = NamingError;

    /// Parse a two-character 干支 such as "甲子".
    fn from_str(s: &str) -> Result<Self> {
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != 2 {
            return Err(NamingError::InvalidPillar(s.to_string()));
        }
        Ok(Self {
            stem: Stem::from_char(chars[0])?,
            branch: Branch::from_char(chars[1])?,
        })
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

// ── Four pillars ─────────────────────────────────────────────────────

/// Year, month, day and hour pillars of a birth moment (四柱).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillars {
    pub fn as_array(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    /// Parse four 干支 strings in year, month, day, hour order.
    pub fn parse(year: &str, month: &str, day: &str, hour: &str) -> Result<Self> {
        Ok(Self {
            year: year.parse()?,
            month: month.parse()?,
            day: day.parse()?,
            hour: hour.parse()?,
        })
    }
}
