use serde::Deserialize;

use super::enums::{FinishClass, FinishTextClass, LeaderBadge, PlusStat, RankIndicator};

// ---------------------------------------------------------------------------
// SeasonRecord: one quarterback season, immutable for the session
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonRecord {
    pub rank: u32,
    pub score: f64,
    pub player: String,
    pub season: String,
    pub team: String,
    pub mvp_finish: String,
    #[serde(default)]
    pub anya_plus: f64,
    #[serde(default)]
    pub cmp_plus: f64,
    #[serde(default)]
    pub td_plus: f64,
    #[serde(default)]
    pub int_plus: f64,
    #[serde(default)]
    pub rate_plus: f64,
    #[serde(default)]
    pub yds_leader: bool,
    #[serde(default)]
    pub td_leader: bool,
    #[serde(default)]
    pub rush_yds_leader: bool,
    #[serde(default)]
    pub rush_td_leader: bool,
}

impl SeasonRecord {
    /// Season year, or `None` when the season string is not a number.
    pub fn year(&self) -> Option<i32> {
        self.season.trim().parse().ok()
    }

    pub fn rank_indicator(&self) -> RankIndicator {
        RankIndicator::from_rank(self.rank)
    }

    pub fn finish_class(&self) -> FinishClass {
        FinishClass::classify(&self.mvp_finish)
    }

    pub fn finish_text_class(&self) -> FinishTextClass {
        FinishTextClass::classify(&self.mvp_finish)
    }

    pub fn has_badge(&self, badge: LeaderBadge) -> bool {
        match badge {
            LeaderBadge::Yards => self.yds_leader,
            LeaderBadge::Touchdowns => self.td_leader,
            LeaderBadge::RushYards => self.rush_yds_leader,
            LeaderBadge::RushTouchdowns => self.rush_td_leader,
        }
    }

    /// Active leader badges, in the fixed YDS, TD, R-YDS, R-TD order.
    pub fn badges(&self) -> Vec<LeaderBadge> {
        LeaderBadge::ALL
            .into_iter()
            .filter(|b| self.has_badge(*b))
            .collect()
    }

    /// Bonus points from leader flags. Independent of `score`.
    pub fn bonus_points(&self) -> f64 {
        LeaderBadge::ALL
            .into_iter()
            .filter(|b| self.has_badge(*b))
            .map(LeaderBadge::points)
            .sum()
    }

    pub fn plus_value(&self, stat: PlusStat) -> f64 {
        match stat {
            PlusStat::AnyA => self.anya_plus,
            PlusStat::Completion => self.cmp_plus,
            PlusStat::Touchdown => self.td_plus,
            PlusStat::Interception => self.int_plus,
            PlusStat::Rating => self.rate_plus,
        }
    }

    /// Display-only contribution of a plus stat: half its value.
    pub fn stat_points(&self, stat: PlusStat) -> f64 {
        self.plus_value(stat) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_parses_trimmed_season() {
        let record = SeasonRecord {
            season: " 1995 ".into(),
            ..SeasonRecord::default()
        };
        assert_eq!(record.year(), Some(1995));
    }

    #[test]
    fn test_year_rejects_non_numeric() {
        let record = SeasonRecord {
            season: "nineteen-ninety".into(),
            ..SeasonRecord::default()
        };
        assert_eq!(record.year(), None);
    }

    #[test]
    fn test_deserialize_camel_case_with_missing_flags() {
        let json = r#"{
            "rank": 4, "score": 90.25, "player": "A", "season": "2001",
            "team": "X", "mvpFinish": "~3rd", "anyaPlus": 12, "tdLeader": true
        }"#;
        let record: SeasonRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.mvp_finish, "~3rd");
        assert!((record.anya_plus - 12.0).abs() < f64::EPSILON);
        assert!(record.td_leader);
        assert!(!record.yds_leader);
        assert_eq!(record.badges(), vec![LeaderBadge::Touchdowns]);
    }

    #[test]
    fn test_stat_points_halves_value() {
        let record = SeasonRecord {
            int_plus: -3.0,
            rate_plus: 25.0,
            ..SeasonRecord::default()
        };
        assert!((record.stat_points(PlusStat::Interception) + 1.5).abs() < f64::EPSILON);
        assert!((record.stat_points(PlusStat::Rating) - 12.5).abs() < f64::EPSILON);
    }
}
