use std::env;

use chrono::Weekday;

use eventcal_core::calendar::MonthCalendarBuilder;
use eventcal_core::storage::DEFAULT_MEMBER_LIMIT;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum members per event (default: 9)
    pub member_limit: usize,
    /// Weekday that opens each row of the month grid (default: Monday)
    pub first_weekday: Weekday,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `EVENTCAL_MEMBER_LIMIT` - Maximum members per event (default: 9)
    /// - `EVENTCAL_FIRST_WEEKDAY` - First weekday of the grid, e.g. `monday`
    ///   or `sun` (default: monday)
    pub fn from_env() -> Self {
        Self {
            member_limit: env::var("EVENTCAL_MEMBER_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MEMBER_LIMIT),
            first_weekday: env::var("EVENTCAL_FIRST_WEEKDAY")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(Weekday::Mon),
        }
    }

    /// Month grid builder matching this configuration.
    pub fn calendar_builder(&self) -> MonthCalendarBuilder {
        MonthCalendarBuilder::new().first_weekday(self.first_weekday)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            member_limit: DEFAULT_MEMBER_LIMIT,
            first_weekday: Weekday::Mon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_builder_uses_first_weekday() {
        let config = Config {
            member_limit: 9,
            first_weekday: Weekday::Sun,
        };

        let layout = config.calendar_builder().build(2024, 3, &[]).unwrap();

        assert_eq!(layout.first_weekday, Weekday::Sun);
        assert_eq!(layout.week_count(), 6);
    }

    #[test]
    fn test_env_values() {
        // All environment mutation stays in this one test
        env::remove_var("EVENTCAL_MEMBER_LIMIT");
        env::remove_var("EVENTCAL_FIRST_WEEKDAY");

        let config = Config::from_env();
        assert_eq!(config, Config::default());
        assert_eq!(config.member_limit, 9);
        assert_eq!(config.first_weekday, Weekday::Mon);

        env::set_var("EVENTCAL_MEMBER_LIMIT", "3");
        env::set_var("EVENTCAL_FIRST_WEEKDAY", "Sunday");
        let config = Config::from_env();
        assert_eq!(config.member_limit, 3);
        assert_eq!(config.first_weekday, Weekday::Sun);

        env::set_var("EVENTCAL_MEMBER_LIMIT", "many");
        env::set_var("EVENTCAL_FIRST_WEEKDAY", "someday");
        let config = Config::from_env();
        assert_eq!(config, Config::default());

        env::remove_var("EVENTCAL_MEMBER_LIMIT");
        env::remove_var("EVENTCAL_FIRST_WEEKDAY");
    }
}
