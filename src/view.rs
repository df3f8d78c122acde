//! Presentation-neutral view-models built from season records.
//!
//! Everything here is a pure function of a [`SeasonRecord`]; the terminal
//! adapter in `app` only decides colours and layout.

use crate::model::{
    FinishClass, FinishTextClass, LeaderBadge, PlusStat, RankIndicator, SeasonRecord,
};

/// Label of the static formula block's toggle, by current visibility.
pub fn formula_toggle_label(visible: bool) -> &'static str {
    if visible {
        "Hide Formula Details"
    } else {
        "Show Formula Details"
    }
}

/// Lines of the static formula explanation.
pub const FORMULA_DETAILS: &[&str] = &[
    "Each advanced stat is a plus stat: 100 is league average for that season.",
    "Stat points = stat+ / 2, shown per stat in the season breakdown.",
    "ANY/A+, Cmp%+, TD%+, INT%+ and Rate+ each contribute.",
    "Leader bonuses: YDS +10, TD +10, R-YDS +5, R-TD +2.5.",
];

pub fn format_score(score: f64) -> String {
    format!("{score:.1}")
}

/// Signed points text, e.g. `"+12.5 pts"` or `"-1.0 pts"`.
pub fn format_points(points: f64) -> String {
    format!("{points:+.1} pts")
}

/// One table row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub rank: u32,
    pub rank_indicator: RankIndicator,
    pub score: String,
    pub player: String,
    pub season: String,
    pub team: String,
    pub finish: String,
    pub finish_class: FinishClass,
    pub finish_text_class: FinishTextClass,
    pub badges: Vec<LeaderBadge>,
}

impl RowView {
    pub fn from_record(record: &SeasonRecord) -> Self {
        Self {
            rank: record.rank,
            rank_indicator: record.rank_indicator(),
            score: format_score(record.score),
            player: record.player.clone(),
            season: record.season.clone(),
            team: record.team.clone(),
            finish: record.mvp_finish.clone(),
            finish_class: record.finish_class(),
            finish_text_class: record.finish_text_class(),
            badges: record.badges(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub stat: PlusStat,
    pub value: String,
    pub points: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BonusCard {
    pub badges: Vec<LeaderBadge>,
    pub points: String,
}

/// Season breakdown shown in the detail panel.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub rank: u32,
    pub title: String,
    pub subtitle: String,
    pub total_score: String,
    pub stats: Vec<StatCard>,
    pub bonus: BonusCard,
}

impl DetailView {
    pub fn from_record(record: &SeasonRecord) -> Self {
        let stats = PlusStat::ALL
            .into_iter()
            .map(|stat| StatCard {
                stat,
                value: record.plus_value(stat).to_string(),
                points: format_points(record.stat_points(stat)),
            })
            .collect();

        Self {
            rank: record.rank,
            title: format!("{} - {}", record.player, record.season),
            subtitle: format!("{} | MVP: {}", record.team, record.mvp_finish),
            total_score: format_score(record.score),
            stats,
            bonus: BonusCard {
                badges: record.badges(),
                points: format_points(record.bonus_points()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_points_sign() {
        assert_eq!(format_points(12.5), "+12.5 pts");
        assert_eq!(format_points(0.0), "+0.0 pts");
        assert_eq!(format_points(-1.0), "-1.0 pts");
    }

    #[test]
    fn test_format_score_one_decimal() {
        assert_eq!(format_score(95.5), "95.5");
        assert_eq!(format_score(88.0), "88.0");
        assert_eq!(format_score(91.26), "91.3");
    }

    #[test]
    fn test_toggle_label() {
        assert_eq!(formula_toggle_label(false), "Show Formula Details");
        assert_eq!(formula_toggle_label(true), "Hide Formula Details");
    }
}
