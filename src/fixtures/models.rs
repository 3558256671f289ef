use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::Serialize;

use crate::football_data::RawFixture;

/// Substituted when the provider record carries no competition.
pub const UNKNOWN_LEAGUE: &str = "Unknown League";

/// How far ahead of `now` the query window reaches.
const WINDOW_DAYS: u64 = 10;

/// The forward-looking query range sent upstream, both ends inclusive.
/// Built fresh per request; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateWindow {
    /// Window starting at the UTC date of `now`; time of day is ignored.
    pub fn starting(now: DateTime<Utc>) -> Self {
        let from = now.date_naive();
        DateWindow {
            from,
            to: from + Days::new(WINDOW_DAYS),
        }
    }
}

impl std::fmt::Display for DateWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // NaiveDate displays as zero-padded YYYY-MM-DD, the format the
        // provider's dateFrom/dateTo parameters expect
        write!(f, "{}..{}", self.from, self.to)
    }
}

/// A scheduled match in the stable output schema served to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    pub id: i64,
    pub home_team: String,
    pub away_team: String,
    /// Kick-off timestamp, copied verbatim from the provider (UTC)
    pub date_time: String,
    pub league: String,
}

impl Fixture {
    pub fn from_raw(raw: RawFixture) -> Self {
        let league = raw
            .competition
            .map(|c| c.name)
            .unwrap_or_else(|| UNKNOWN_LEAGUE.to_string());
        Fixture {
            id: raw.id,
            home_team: raw.home_team.name,
            away_team: raw.away_team.name,
            date_time: raw.utc_date,
            league,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::football_data::models::{CompetitionRef, TeamRef};
    use chrono::TimeZone;

    fn raw(competition: Option<&str>) -> RawFixture {
        RawFixture {
            id: 42,
            home_team: TeamRef {
                name: "Red FC".into(),
            },
            away_team: TeamRef {
                name: "Blue United".into(),
            },
            utc_date: "2024-03-05T18:00:00Z".into(),
            competition: competition.map(|name| CompetitionRef { name: name.into() }),
        }
    }

    #[test]
    fn test_window_spans_ten_days() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 23, 59, 59).unwrap();
        let window = DateWindow::starting(now);
        assert_eq!(window.from, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(window.to, NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
        assert_eq!(window.to, window.from + Days::new(10));
    }

    #[test]
    fn test_window_rolls_over_month_end() {
        let now = Utc.with_ymd_and_hms(2024, 2, 25, 8, 0, 0).unwrap();
        let window = DateWindow::starting(now);
        // 2024 is a leap year
        assert_eq!(window.to, NaiveDate::from_ymd_opt(2024, 3, 6).unwrap());
    }

    #[test]
    fn test_window_formats_zero_padded() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let window = DateWindow::starting(now);
        assert_eq!(window.from.to_string(), "2024-03-01");
        assert_eq!(window.to.to_string(), "2024-03-11");
    }

    #[test]
    fn test_from_raw_maps_all_fields() {
        let fixture = Fixture::from_raw(raw(Some("Premier League")));
        assert_eq!(
            fixture,
            Fixture {
                id: 42,
                home_team: "Red FC".into(),
                away_team: "Blue United".into(),
                date_time: "2024-03-05T18:00:00Z".into(),
                league: "Premier League".into(),
            }
        );
    }

    #[test]
    fn test_from_raw_defaults_missing_competition() {
        let fixture = Fixture::from_raw(raw(None));
        assert_eq!(fixture.league, UNKNOWN_LEAGUE);
        assert_eq!(fixture.home_team, "Red FC");
        assert_eq!(fixture.date_time, "2024-03-05T18:00:00Z");
    }

    #[test]
    fn test_fixture_serializes_camel_case() {
        let json = serde_json::to_value(Fixture::from_raw(raw(Some("Premier League")))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 42,
                "homeTeam": "Red FC",
                "awayTeam": "Blue United",
                "dateTime": "2024-03-05T18:00:00Z",
                "league": "Premier League",
            })
        );
    }
}
