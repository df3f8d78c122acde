pub mod colors;

use ratatui::style::Color;

use crate::model::{FinishClass, FinishTextClass, LeaderBadge, RankIndicator};
use colors::{GridironColors, MedalColors, ProgramColors};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub name: &'static str,

    pub bar_bg: Color,
    pub text_on_bar: Color,
    pub surface: Color,
    pub scrim: Color,
    pub border: Color,

    pub text_primary: Color,
    pub text_secondary: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    pub row_first: Color,
    pub row_second: Color,
    pub row_third: Color,
}

impl Theme {
    pub fn gridiron() -> Self {
        Self {
            name: "Gridiron",
            bar_bg: GridironColors::TURF,
            text_on_bar: GridironColors::CHALK,
            surface: GridironColors::FIELD,
            scrim: GridironColors::SCRIM,
            border: GridironColors::HASH,
            text_primary: GridironColors::CHALK,
            text_secondary: GridironColors::MUTED,
            accent: GridironColors::LIGHTS,
            success: GridironColors::GREEN,
            warning: GridironColors::AMBER,
            error: GridironColors::RED,
            row_first: GridironColors::ROW_FIRST,
            row_second: GridironColors::ROW_SECOND,
            row_third: GridironColors::ROW_THIRD,
        }
    }

    pub fn program() -> Self {
        Self {
            name: "Program",
            bar_bg: ProgramColors::NAVY,
            text_on_bar: ProgramColors::TEXT_ON_NAVY,
            surface: ProgramColors::SURFACE,
            scrim: ProgramColors::SCRIM,
            border: ProgramColors::BORDER,
            text_primary: ProgramColors::TEXT_PRIMARY,
            text_secondary: ProgramColors::TEXT_SECONDARY,
            accent: ProgramColors::BLUE,
            success: ProgramColors::SUCCESS,
            warning: ProgramColors::BRASS,
            error: ProgramColors::ERROR,
            row_first: ProgramColors::ROW_FIRST,
            row_second: ProgramColors::ROW_SECOND,
            row_third: ProgramColors::ROW_THIRD,
        }
    }

    pub fn next(self) -> Self {
        if self.name == "Gridiron" {
            Self::program()
        } else {
            Self::gridiron()
        }
    }

    /// Theme by name, case-insensitive. Unknown names get the default.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().trim() {
            "program" | "light" => Self::program(),
            _ => Self::gridiron(),
        }
    }

    /// Row background for a finish bucket. `Other` keeps the surface.
    pub fn row_bg(&self, class: FinishClass) -> Option<Color> {
        match class {
            FinishClass::First => Some(self.row_first),
            FinishClass::Second => Some(self.row_second),
            FinishClass::Third => Some(self.row_third),
            FinishClass::Other => None,
        }
    }

    pub fn finish_fg(&self, class: FinishTextClass) -> Color {
        match class {
            FinishTextClass::First => MedalColors::GOLD,
            FinishTextClass::Second => MedalColors::SILVER,
            FinishTextClass::Third => MedalColors::BRONZE,
        }
    }

    pub fn badge_fg(&self, badge: LeaderBadge) -> Color {
        match badge {
            LeaderBadge::Yards => self.accent,
            LeaderBadge::Touchdowns => self.success,
            LeaderBadge::RushYards => self.warning,
            LeaderBadge::RushTouchdowns => self.error,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::gridiron()
    }
}

/// Glyph and colour for a rank decoration. Empty glyph for unranked rows.
pub fn rank_icon(indicator: RankIndicator, theme: &Theme) -> (&'static str, Color) {
    match indicator {
        RankIndicator::Gold => ("●", MedalColors::GOLD),
        RankIndicator::Silver => ("●", MedalColors::SILVER),
        RankIndicator::Bronze => ("●", MedalColors::BRONZE),
        RankIndicator::Top10 => ("★", theme.accent),
        RankIndicator::None => ("", theme.text_secondary),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_cycles() {
        assert_eq!(Theme::gridiron().next().name, "Program");
        assert_eq!(Theme::program().next().name, "Gridiron");
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Theme::from_name("PROGRAM").name, "Program");
        assert_eq!(Theme::from_name("nope").name, "Gridiron");
    }

    #[test]
    fn test_other_finish_has_no_row_tint() {
        let theme = Theme::default();
        assert_eq!(theme.row_bg(FinishClass::Other), None);
        assert_eq!(theme.row_bg(FinishClass::First), Some(theme.row_first));
    }
}
