//! SeasonBrowser tests: filter transitions, panel state machine, view-models.

use pretty_assertions::assert_eq;

use qb_season_browser::browser::{DismissReason, Panel, SeasonBrowser};
use qb_season_browser::model::*;
use qb_season_browser::view::*;

fn records() -> Vec<SeasonRecord> {
    vec![
        SeasonRecord {
            rank: 1,
            score: 98.4,
            player: "Peyton Manning".into(),
            season: "2004".into(),
            team: "Indianapolis Colts".into(),
            mvp_finish: "1st".into(),
            anya_plus: 31.0,
            cmp_plus: 12.0,
            td_plus: 34.0,
            int_plus: 18.0,
            rate_plus: 32.0,
            td_leader: true,
            ..SeasonRecord::default()
        },
        SeasonRecord {
            rank: 12,
            score: 86.2,
            player: "Drew Brees".into(),
            season: "2011".into(),
            team: "New Orleans Saints".into(),
            mvp_finish: "~3rd".into(),
            anya_plus: 18.0,
            cmp_plus: 17.0,
            td_plus: 20.0,
            int_plus: -3.0,
            rate_plus: 18.4,
            yds_leader: true,
            rush_td_leader: true,
            ..SeasonRecord::default()
        },
        SeasonRecord {
            rank: 23,
            score: 75.4,
            player: "Joe Burrow".into(),
            season: "2021".into(),
            team: "Cincinnati Bengals".into(),
            mvp_finish: "6th".into(),
            ..SeasonRecord::default()
        },
    ]
}

fn filtered_ranks(browser: &SeasonBrowser) -> Vec<u32> {
    browser.filtered().map(|r| r.rank).collect()
}

// ═══════════════════════════════════════════════════════════════════════════
// Filter transitions
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_search_recomputes_on_every_keystroke() {
    let mut browser = SeasonBrowser::new(records());
    browser.push_search('b');
    assert_eq!(filtered_ranks(&browser), vec![12, 23]);
    browser.push_search('u');
    assert_eq!(filtered_ranks(&browser), vec![23]);
    browser.pop_search();
    browser.pop_search();
    assert_eq!(filtered_ranks(&browser), vec![1, 12, 23]);
}

#[test]
fn test_player_and_era_transitions() {
    let mut browser = SeasonBrowser::new(records());
    browser.set_era(Era::Modern);
    assert_eq!(filtered_ranks(&browser), vec![23]);

    browser.set_era(Era::All);
    browser.set_player(PlayerFilter::Named("Drew Brees".into()));
    assert_eq!(filtered_ranks(&browser), vec![12]);

    browser.reset_filters();
    assert!(browser.filter().is_default());
    assert_eq!(browser.filtered_len(), 3);
}

#[test]
fn test_cycle_era_walks_selector_order() {
    let mut browser = SeasonBrowser::new(records());
    browser.cycle_era(true);
    assert_eq!(browser.filter().era, Era::Modern);
    browser.cycle_era(false);
    browser.cycle_era(false);
    assert_eq!(browser.filter().era, Era::Nineteen80s);
    assert_eq!(browser.filtered_len(), 0);
}

#[test]
fn test_initial_filter_is_applied() {
    let filter = FilterState {
        search: "2004".into(),
        ..FilterState::default()
    };
    let browser = SeasonBrowser::with_filter(records(), filter);
    assert_eq!(filtered_ranks(&browser), vec![1]);
}

#[test]
fn test_player_options() {
    let browser = SeasonBrowser::new(records());
    assert_eq!(
        browser.players(),
        ["All", "Drew Brees", "Joe Burrow", "Peyton Manning"]
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// Detail panel state machine
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_every_dismissal_path_clears_selection() {
    for reason in [
        DismissReason::CloseIcon,
        DismissReason::CloseButton,
        DismissReason::Scrim,
        DismissReason::Escape,
    ] {
        let mut browser = SeasonBrowser::new(records());
        assert!(browser.activate(0));
        assert!(browser.selected().is_some());

        browser.dismiss(reason);
        assert_eq!(browser.panel(), Panel::Closed, "{reason:?}");
        assert!(browser.selected().is_none(), "{reason:?}");
    }
}

#[test]
fn test_dismiss_leaves_filters_alone() {
    let mut browser = SeasonBrowser::new(records());
    browser.set_search("saints");
    browser.toggle_formula();
    browser.activate(0);
    browser.dismiss(DismissReason::Scrim);

    assert_eq!(browser.filter().search, "saints");
    assert!(browser.formula_visible());
    assert_eq!(filtered_ranks(&browser), vec![12]);
}

#[test]
fn test_activate_while_open_keeps_current_record() {
    let mut browser = SeasonBrowser::new(records());
    assert!(browser.activate(1));
    assert!(!browser.activate(2));
    assert_eq!(browser.selected().map(|r| r.rank), Some(12));
}

#[test]
fn test_dismiss_when_closed_is_noop() {
    let mut browser = SeasonBrowser::new(records());
    browser.dismiss(DismissReason::Escape);
    assert_eq!(browser.panel(), Panel::Closed);
}

#[test]
fn test_selection_comes_from_filtered_view() {
    let mut browser = SeasonBrowser::new(records());
    browser.set_era(Era::Modern);
    assert!(browser.activate(0));
    assert_eq!(browser.selected().map(|r| r.player.as_str()), Some("Joe Burrow"));
}

// ═══════════════════════════════════════════════════════════════════════════
// Formula toggle
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_formula_toggle_label_follows_visibility() {
    let mut browser = SeasonBrowser::new(records());
    assert!(!browser.formula_visible());
    assert_eq!(browser.formula_toggle_label(), "Show Formula Details");
    browser.toggle_formula();
    assert_eq!(browser.formula_toggle_label(), "Hide Formula Details");
    browser.toggle_formula();
    assert_eq!(browser.formula_toggle_label(), "Show Formula Details");
}

// ═══════════════════════════════════════════════════════════════════════════
// View-models
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_row_views() {
    let browser = SeasonBrowser::new(records());
    let rows = browser.rows();
    assert_eq!(rows.len(), 3);

    assert_eq!(rows[0].rank_indicator, RankIndicator::Gold);
    assert_eq!(rows[0].score, "98.4");
    assert_eq!(rows[0].finish_class, FinishClass::First);
    assert_eq!(rows[0].badges, vec![LeaderBadge::Touchdowns]);

    assert_eq!(rows[1].rank_indicator, RankIndicator::None);
    assert_eq!(rows[1].finish_class, FinishClass::Third);
    assert_eq!(rows[1].finish_text_class, FinishTextClass::Third);
    assert_eq!(rows[1].badges, vec![LeaderBadge::Yards, LeaderBadge::RushTouchdowns]);

    assert_eq!(rows[2].finish_class, FinishClass::Other);
    assert_eq!(rows[2].finish_text_class, FinishTextClass::Third);
    assert!(rows[2].badges.is_empty());
}

#[test]
fn test_detail_view() {
    let mut browser = SeasonBrowser::new(records());
    assert!(browser.detail().is_none());
    browser.activate(1);

    let detail = browser.detail().expect("panel is open");
    assert_eq!(detail.title, "Drew Brees - 2011");
    assert_eq!(detail.subtitle, "New Orleans Saints | MVP: ~3rd");
    assert_eq!(detail.total_score, "86.2");

    let cards: Vec<(&str, &str, &str)> = detail
        .stats
        .iter()
        .map(|c| (c.stat.label(), c.value.as_str(), c.points.as_str()))
        .collect();
    assert_eq!(
        cards,
        vec![
            ("ANY/A+", "18", "+9.0 pts"),
            ("Cmp%+", "17", "+8.5 pts"),
            ("TD%+", "20", "+10.0 pts"),
            ("INT%+", "-3", "-1.5 pts"),
            ("Rate+", "18.4", "+9.2 pts"),
        ]
    );

    assert_eq!(
        detail.bonus,
        BonusCard {
            badges: vec![LeaderBadge::Yards, LeaderBadge::RushTouchdowns],
            points: "+12.5 pts".into(),
        }
    );
}
