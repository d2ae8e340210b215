//! Gregorian birth moment → four pillars.
//!
//! The converter is a trait so callers can plug in a different calendrical
//! library. [`SolarTermCalendar`] is the bundled implementation:
//!
//! - day pillar from the Julian Day Number (2000-01-01 is 戊午)
//! - year pillar switches at 立春 (apparent solar longitude 315°)
//! - month pillar switches at each 节, every 30° from 315°; the month stem
//!   follows the 五虎遁 rule from the year stem
//! - hour pillar by two-hour period (23:00–00:59 is 子); the hour stem
//!   follows the 五鼠遁 rule from the day stem
//!
//! Solar longitude uses the low-precision series from Meeus, *Astronomical
//! Algorithms* ch. 25 (about 0.01°, i.e. well under an hour at a term
//! boundary).

use chrono::{Datelike, NaiveDate};
use naming_types::HourPeriod;
use serde::{Deserialize, Serialize};

use crate::error::{NamingError, Result};
use crate::sexagenary::{Branch, FourPillars, Pillar, Stem};

const J2000: f64 = 2_451_545.0;

/// Offset from chrono's day count (0001-01-01 = 1) to the Julian Day Number.
const JDN_CE_OFFSET: i64 = 1_721_425;

/// Solar longitude of 立春, where both the year and the 寅 month begin.
const LICHUN_LONGITUDE: f64 = 315.0;

// ── Input ────────────────────────────────────────────────────────────

/// A civil birth moment, resolved to the hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthMoment {
    pub year: i32,
    /// 1–12
    pub month: u32,
    pub day: u32,
    /// 0–23
    pub hour: u32,
}

impl BirthMoment {
    pub fn new(year: i32, month: u32, day: u32, hour: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
        }
    }

    /// The calendar date, or an error if it does not exist.
    pub fn date(&self) -> Result<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).ok_or_else(|| {
            NamingError::birth(format!(
                "{}-{:02}-{:02} is not a calendar date",
                self.year, self.month, self.day
            ))
        })
    }
}

// ── Converter ────────────────────────────────────────────────────────

pub trait CalendarConverter {
    fn to_sexagenary(&self, moment: &BirthMoment) -> Result<FourPillars>;
}

/// How the late 子 hour (23:00–23:59) is attributed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZiShiMode {
    /// 早晚子时: the day pillar stays on the civil day, the hour stem is
    /// taken from the following day.
    #[default]
    Split,
    /// The day pillar itself advances at 23:00.
    NextDay,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarTermCalendar {
    utc_offset_hours: f64,
    zi_shi: ZiShiMode,
}

impl Default for SolarTermCalendar {
    /// China Standard Time (UTC+8), split 子 hour.
    fn default() -> Self {
        Self {
            utc_offset_hours: 8.0,
            zi_shi: ZiShiMode::Split,
        }
    }
}

impl SolarTermCalendar {
    pub fn new(utc_offset_hours: f64, zi_shi: ZiShiMode) -> Self {
        Self {
            utc_offset_hours,
            zi_shi,
        }
    }
}

impl CalendarConverter for SolarTermCalendar {
    fn to_sexagenary(&self, moment: &BirthMoment) -> Result<FourPillars> {
        let date = moment.date()?;
        if moment.hour > 23 {
            return Err(NamingError::birth(format!(
                "hour must be 0-23, got {}",
                moment.hour
            )));
        }

        let jdn = julian_day_number(date);
        let jd_ut = jdn as f64 - 0.5 + (moment.hour as f64 - self.utc_offset_hours) / 24.0;
        let longitude = apparent_solar_longitude(jd_ut);

        // Year: January and early February before 立春 belong to the previous year
        let mut year = moment.year;
        if moment.month <= 2 && (270.0..LICHUN_LONGITUDE).contains(&longitude) {
            year -= 1;
        }
        let year_pillar = Pillar::from_cycle_index((year - 4).rem_euclid(60) as usize);

        // Month: 0 = 寅 month, 11 = 丑 month
        let month_offset = (normalize_360(longitude - LICHUN_LONGITUDE) / 30.0).floor() as usize;
        let month_pillar = Pillar::new(
            Stem::from_index(year_pillar.stem.index() % 5 * 2 + 2 + month_offset),
            Branch::from_index(month_offset + 2),
        );

        // Day and hour
        let civil_day = (jdn + 49).rem_euclid(60) as usize;
        let late_zi = moment.hour == 23;
        let day_index = match self.zi_shi {
            ZiShiMode::NextDay if late_zi => civil_day + 1,
            _ => civil_day,
        };
        let day_pillar = Pillar::from_cycle_index(day_index);

        let hour_branch = Branch::from_index(((moment.hour + 1) / 2) as usize);
        let hour_day_stem = Stem::from_index(civil_day + usize::from(late_zi));
        let hour_pillar = Pillar::new(
            Stem::from_index(hour_day_stem.index() % 5 * 2 + hour_branch.index()),
            hour_branch,
        );

        Ok(FourPillars {
            year: year_pillar,
            month: month_pillar,
            day: day_pillar,
            hour: hour_pillar,
        })
    }
}

// ── Astronomy helpers ────────────────────────────────────────────────

pub fn julian_day_number(date: NaiveDate) -> i64 {
    date.num_days_from_ce() as i64 + JDN_CE_OFFSET
}

/// Apparent geocentric longitude of the Sun in degrees, [0, 360).
pub fn apparent_solar_longitude(jd_ut: f64) -> f64 {
    let t = (jd_ut - J2000) / 36525.0;
    let mean_longitude = 280.46646 + 36000.76983 * t + 0.0003032 * t * t;
    let mean_anomaly = (357.52911 + 35999.05029 * t - 0.0001537 * t * t).to_radians();
    let center = (1.914602 - 0.004817 * t - 0.000014 * t * t) * mean_anomaly.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * mean_anomaly).sin()
        + 0.000289 * (3.0 * mean_anomaly).sin();
    let omega = (125.04 - 1934.136 * t).to_radians();
    normalize_360(mean_longitude + center - 0.00569 - 0.00478 * omega.sin())
}

/// Normalize an angle to [0, 360) degrees.
fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

// ── Two-hour periods ─────────────────────────────────────────────────

const PERIOD_LABELS: [&str; 12] = [
    "子时", "丑时", "寅时", "卯时", "辰时", "巳时", "午时", "未时", "申时", "酉时", "戌时", "亥时",
];

/// The twelve 时辰, starting with 子时 (23:00-00:59).
pub fn hour_periods() -> Vec<HourPeriod> {
    PERIOD_LABELS
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let start = (i * 2 + 23) % 24;
            let end = (start + 1) % 24;
            HourPeriod {
                value: if i == 0 { 0 } else { (i * 2 - 1) as u8 },
                label: label.to_string(),
                time_range: format!("{start:02}:00-{end:02}:59"),
            }
        })
        .collect()
}

/// The 时辰 containing `hour`.
pub fn hour_period(hour: u32) -> Result<HourPeriod> {
    if hour > 23 {
        return Err(NamingError::birth(format!("hour must be 0-23, got {hour}")));
    }
    let index = ((hour + 1) / 2 % 12) as usize;
    Ok(hour_periods().swap_remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pillars_at(y: i32, m: u32, d: u32, h: u32) -> [String; 4] {
        let p = SolarTermCalendar::default()
            .to_sexagenary(&BirthMoment::new(y, m, d, h))
            .unwrap();
        p.as_array().map(|x| x.to_string())
    }

    #[test]
    fn test_julian_day_number() {
        let d = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        assert_eq!(julian_day_number(d), 2_451_545);
    }

    #[test]
    fn test_reference_day_2000_01_01() {
        // 己卯年 丙子月 戊午日 戊午时
        assert_eq!(pillars_at(2000, 1, 1, 12), ["己卯", "丙子", "戊午", "戊午"]);
    }

    #[test]
    fn test_year_switches_at_lichun() {
        // 立春 2024 falls on Feb 4 around 16:27 CST
        assert_eq!(pillars_at(2024, 2, 4, 12)[0], "癸卯");
        assert_eq!(pillars_at(2024, 2, 4, 12)[1], "乙丑");
        assert_eq!(pillars_at(2024, 2, 4, 18)[0], "甲辰");
        assert_eq!(pillars_at(2024, 2, 4, 18)[1], "丙寅");
    }

    #[test]
    fn test_midsummer_month() {
        // 2024-06-21 is after 芒种 and before 小暑: 庚午 month of 甲辰 year
        let p = pillars_at(2024, 6, 21, 10);
        assert_eq!(p[0], "甲辰");
        assert_eq!(p[1], "庚午");
    }

    #[test]
    fn test_early_zi_hour() {
        // 00:00 on a 戊 day is 壬子
        assert_eq!(pillars_at(2000, 1, 1, 0)[3], "壬子");
    }

    #[test]
    fn test_late_zi_hour_modes() {
        let moment = BirthMoment::new(2000, 1, 1, 23);

        let split = SolarTermCalendar::default().to_sexagenary(&moment).unwrap();
        assert_eq!(split.day.to_string(), "戊午");
        assert_eq!(split.hour.to_string(), "甲子");

        let next = SolarTermCalendar::new(8.0, ZiShiMode::NextDay)
            .to_sexagenary(&moment)
            .unwrap();
        assert_eq!(next.day.to_string(), "己未");
        assert_eq!(next.hour.to_string(), "甲子");
    }

    #[test]
    fn test_invalid_moments() {
        let cal = SolarTermCalendar::default();
        assert!(matches!(
            cal.to_sexagenary(&BirthMoment::new(2023, 2, 29, 0)),
            Err(NamingError::InvalidBirthData { .. })
        ));
        assert!(matches!(
            cal.to_sexagenary(&BirthMoment::new(2023, 13, 1, 0)),
            Err(NamingError::InvalidBirthData { .. })
        ));
        assert!(matches!(
            cal.to_sexagenary(&BirthMoment::new(2023, 1, 1, 24)),
            Err(NamingError::InvalidBirthData { .. })
        ));
    }

    #[test]
    fn test_solar_longitude_near_equinox() {
        // March equinox 2024: 2024-03-20 03:06 UT
        let d = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        let jd = julian_day_number(d) as f64 - 0.5 + 3.1 / 24.0;
        let lon = apparent_solar_longitude(jd);
        assert!(lon < 0.05 || lon > 359.95, "{lon}");
    }

    #[test]
    fn test_hour_periods() {
        let periods = hour_periods();
        assert_eq!(periods.len(), 12);
        assert_eq!(periods[0].label, "子时");
        assert_eq!(periods[0].time_range, "23:00-00:59");
        assert_eq!(periods[1].value, 1);
        assert_eq!(periods[1].time_range, "01:00-02:59");
        assert_eq!(periods[11].value, 21);
        assert_eq!(periods[11].time_range, "21:00-22:59");
    }

    #[test]
    fn test_hour_period_lookup() {
        assert_eq!(hour_period(23).unwrap().label, "子时");
        assert_eq!(hour_period(0).unwrap().label, "子时");
        assert_eq!(hour_period(2).unwrap().label, "丑时");
        assert_eq!(hour_period(12).unwrap().label, "午时");
        assert!(hour_period(24).is_err());
    }
}
