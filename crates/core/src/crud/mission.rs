//! Mission list filter

use chrono::{Datelike, Days, Months, NaiveDate};
use travelgate_domain::{Mission, MissionPhase};

use super::project::text_matches;

/// Calendar window a mission must start in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartWindow {
    /// Sunday to Saturday around today.
    ThisWeek,
    ThisMonth,
    NextMonth,
    /// Calendar quarter of today, same year.
    ThisQuarter,
}

travelgate_domain::impl_wire_conversions!(StartWindow {
    ThisWeek => "CETTE_SEMAINE",
    ThisMonth => "CE_MOIS",
    NextMonth => "MOIS_PROCHAIN",
    ThisQuarter => "TRIMESTRE",
});

fn same_month(left: NaiveDate, right: NaiveDate) -> bool {
    left.year() == right.year() && left.month() == right.month()
}

impl StartWindow {
    pub fn contains(self, start: NaiveDate, today: NaiveDate) -> bool {
        match self {
            Self::ThisWeek => {
                let week_start =
                    today - Days::new(u64::from(today.weekday().num_days_from_sunday()));
                start >= week_start && start <= week_start + Days::new(6)
            }
            Self::ThisMonth => same_month(start, today),
            Self::NextMonth => today
                .with_day(1)
                .and_then(|first| first.checked_add_months(Months::new(1)))
                .is_some_and(|next| same_month(start, next)),
            Self::ThisQuarter => {
                start.year() == today.year() && start.month0() / 3 == today.month0() / 3
            }
        }
    }
}

/// Criteria of the mission list; unset criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissionFilter {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Fragment of the owning project's name.
    pub project: Option<String>,
    pub phase: Option<MissionPhase>,
    pub window: Option<StartWindow>,
}

impl MissionFilter {
    pub fn matches(&self, mission: &Mission, today: NaiveDate) -> bool {
        text_matches(mission.name.as_deref(), self.name.as_deref())
            && text_matches(mission.description.as_deref(), self.description.as_deref())
            && text_matches(mission.project_label(), self.project.as_deref())
            && self.phase.map_or(true, |phase| mission.phase(today) == phase)
            && self.window.map_or(true, |window| {
                mission.start_date.is_some_and(|start| window.contains(start, today))
            })
    }

    pub fn apply(&self, missions: &[Mission], today: NaiveDate) -> Vec<Mission> {
        missions.iter().filter(|m| self.matches(m, today)).cloned().collect()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
