use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Opening hours for one day of the week.
///
/// Hours are whole clock hours; `end_hour` is exclusive and may be 24 to
/// close at midnight. A disabled day produces no slots regardless of hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DayHours {
    pub enabled: bool,
    pub start_hour: u32,
    pub end_hour: u32,
}

impl DayHours {
    pub const CLOSED: Self = Self {
        enabled: false,
        start_hour: 0,
        end_hour: 0,
    };

    pub fn open(start_hour: u32, end_hour: u32) -> Self {
        Self {
            enabled: true,
            start_hour,
            end_hour,
        }
    }
}

impl Default for DayHours {
    fn default() -> Self {
        Self::CLOSED
    }
}

/// Weekly business-hours schedule, one entry per day of week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeeklySchedule {
    pub monday: DayHours,
    pub tuesday: DayHours,
    pub wednesday: DayHours,
    pub thursday: DayHours,
    pub friday: DayHours,
    pub saturday: DayHours,
    pub sunday: DayHours,
}

impl Default for WeeklySchedule {
    /// Weekdays 09:00-17:00, weekend closed.
    fn default() -> Self {
        let business = DayHours::open(9, 17);
        Self {
            monday: business,
            tuesday: business,
            wednesday: business,
            thursday: business,
            friday: business,
            saturday: DayHours::CLOSED,
            sunday: DayHours::CLOSED,
        }
    }
}

impl WeeklySchedule {
    /// The hours configured for a given day of week.
    pub fn day(&self, weekday: Weekday) -> &DayHours {
        match weekday {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }
}
