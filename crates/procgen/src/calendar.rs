//! Day records and the validated seven-day window the city is built from.

use city_core::{CityError, CityResult};

/// Number of day records a city is built from.
pub const DAYS_PER_WEEK: usize = 7;

/// Day of the week, numbered 0 (Sunday) through 6 (Saturday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ];

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Three-letter uppercase abbreviation used for labels.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Weekday::Sun => "SUN",
            Weekday::Mon => "MON",
            Weekday::Tue => "TUE",
            Weekday::Wed => "WED",
            Weekday::Thu => "THU",
            Weekday::Fri => "FRI",
            Weekday::Sat => "SAT",
        }
    }
}

/// Activity count for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRecord {
    /// Date identifier as supplied by the data source (e.g. `2026-10-17`).
    pub date: String,
    pub count: u32,
    pub weekday: Weekday,
}

impl DayRecord {
    /// Build a record from the raw weekday index of the data source.
    pub fn new(date: impl Into<String>, count: u32, weekday: u8) -> CityResult<Self> {
        let date = date.into();
        let weekday = Weekday::from_index(weekday)
            .ok_or_else(|| CityError::InvalidWeekday { date: date.clone(), weekday })?;
        Ok(Self { date, count, weekday })
    }
}

/// The last seven days, oldest first, plus the long-window total shown in the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekData {
    days: Vec<DayRecord>,
    total: u64,
}

impl WeekData {
    /// Take the trailing [`DAYS_PER_WEEK`] records of `days` (ordered oldest to newest).
    ///
    /// Fails if fewer records are available or one of the kept records has no date.
    pub fn from_days(days: &[DayRecord], total: u64) -> CityResult<Self> {
        if days.len() < DAYS_PER_WEEK {
            return Err(CityError::NotEnoughDays {
                expected: DAYS_PER_WEEK,
                found: days.len(),
            });
        }
        let week = &days[days.len() - DAYS_PER_WEEK..];
        if let Some(index) = week.iter().position(|d| d.date.trim().is_empty()) {
            return Err(CityError::MissingDate { index });
        }
        Ok(Self {
            days: week.to_vec(),
            total,
        })
    }

    pub fn days(&self) -> &[DayRecord] {
        &self.days
    }

    /// Long-window total supplied by the data source (informational only).
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Sum of the seven daily counts.
    pub fn week_total(&self) -> u64 {
        self.days.iter().map(|d| d.count as u64).sum()
    }

    /// The most recent day.
    pub fn latest(&self) -> &DayRecord {
        // from_days guarantees DAYS_PER_WEEK entries
        &self.days[self.days.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn week(counts: &[u32]) -> Vec<DayRecord> {
        counts
            .iter()
            .enumerate()
            .map(|(i, &c)| DayRecord::new(format!("2026-10-{:02}", 11 + i), c, (i % 7) as u8).unwrap())
            .collect()
    }

    #[test]
    fn weekday_abbreviations_follow_index() {
        assert_eq!(Weekday::from_index(0).unwrap().abbreviation(), "SUN");
        assert_eq!(Weekday::from_index(6).unwrap().abbreviation(), "SAT");
        assert_eq!(Weekday::from_index(7), None);
    }

    #[test]
    fn day_record_rejects_bad_weekday() {
        let err = DayRecord::new("2026-10-17", 3, 9).unwrap_err();
        assert_eq!(
            err,
            CityError::InvalidWeekday { date: "2026-10-17".into(), weekday: 9 }
        );
    }

    #[test]
    fn week_data_requires_seven_days() {
        let err = WeekData::from_days(&week(&[1, 2, 3]), 10).unwrap_err();
        assert_eq!(err, CityError::NotEnoughDays { expected: 7, found: 3 });
    }

    #[test]
    fn week_data_keeps_trailing_seven() {
        let w = WeekData::from_days(&week(&[9, 9, 0, 3, 0, 9, 15, 1, 0]), 500).unwrap();
        let counts: Vec<u32> = w.days().iter().map(|d| d.count).collect();
        assert_eq!(counts, vec![0, 3, 0, 9, 15, 1, 0]);
        assert_eq!(w.week_total(), 28);
        assert_eq!(w.total(), 500);
        assert_eq!(w.latest().count, 0);
    }

    #[test]
    fn week_data_rejects_missing_date() {
        let mut days = week(&[1, 1, 1, 1, 1, 1, 1]);
        days[4].date = String::new();
        assert_eq!(
            WeekData::from_days(&days, 7).unwrap_err(),
            CityError::MissingDate { index: 4 }
        );
    }
}
