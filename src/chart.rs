use naming_types::ChartReport;

use crate::balance::compute_profile;
use crate::calendar::{BirthMoment, CalendarConverter};
use crate::error::Result;

/// Birth moment → four pillars → elemental profile.
pub fn compute_chart<C>(calendar: &C, moment: &BirthMoment) -> Result<ChartReport>
where
    C: CalendarConverter + ?Sized,
{
    let pillars = calendar.to_sexagenary(moment)?;
    Ok(ChartReport {
        year_gan_zhi: pillars.year.to_string(),
        month_gan_zhi: pillars.month.to_string(),
        day_gan_zhi: pillars.day.to_string(),
        hour_gan_zhi: pillars.hour.to_string(),
        profile: compute_profile(&pillars),
    })
}
