//! Colour palettes as ratatui Color::Rgb constants.

use ratatui::style::Color;

/// Night-game palette: dark turf background, stadium-light accents.
pub struct GridironColors;

impl GridironColors {
    pub const TURF: Color = Color::Rgb(16, 32, 24); // #102018
    pub const FIELD: Color = Color::Rgb(26, 46, 36); // #1A2E24
    pub const CHALK: Color = Color::Rgb(236, 240, 236); // #ECF0EC
    pub const HASH: Color = Color::Rgb(58, 84, 70); // #3A5446
    pub const LIGHTS: Color = Color::Rgb(96, 165, 250); // #60A5FA
    pub const MUTED: Color = Color::Rgb(148, 163, 154); // #94A39A
    pub const GREEN: Color = Color::Rgb(74, 222, 128); // #4ADE80
    pub const AMBER: Color = Color::Rgb(251, 191, 36); // #FBBF24
    pub const RED: Color = Color::Rgb(248, 113, 113); // #F87171
    pub const SCRIM: Color = Color::Rgb(8, 14, 11); // #080E0B

    // Row tints by MVP finish
    pub const ROW_FIRST: Color = Color::Rgb(58, 50, 18); // #3A3212
    pub const ROW_SECOND: Color = Color::Rgb(40, 44, 52); // #282C34
    pub const ROW_THIRD: Color = Color::Rgb(52, 36, 22); // #342416
}

/// Daytime palette: paper background with navy and brass.
pub struct ProgramColors;

impl ProgramColors {
    pub const NAVY: Color = Color::Rgb(14, 30, 63); // #0E1E3F
    pub const BLUE: Color = Color::Rgb(84, 113, 223); // #5471DF
    pub const BRASS: Color = Color::Rgb(178, 140, 84); // #B28C54
    pub const SUCCESS: Color = Color::Rgb(44, 95, 45); // #2C5F2D
    pub const ERROR: Color = Color::Rgb(184, 80, 66); // #B85042

    pub const SURFACE: Color = Color::Rgb(255, 255, 255); // #FFFFFF
    pub const BORDER: Color = Color::Rgb(209, 217, 232); // #D1D9E8
    pub const SCRIM: Color = Color::Rgb(190, 196, 210); // #BEC4D2

    pub const TEXT_PRIMARY: Color = Color::Rgb(45, 55, 72); // #2D3748
    pub const TEXT_SECONDARY: Color = Color::Rgb(107, 122, 153); // #6B7A99
    pub const TEXT_ON_NAVY: Color = Color::Rgb(255, 255, 255);

    pub const ROW_FIRST: Color = Color::Rgb(250, 240, 212); // #FAF0D4
    pub const ROW_SECOND: Color = Color::Rgb(232, 236, 242); // #E8ECF2
    pub const ROW_THIRD: Color = Color::Rgb(245, 228, 214); // #F5E4D6
}

/// Medal colours, shared by both palettes.
pub struct MedalColors;

impl MedalColors {
    pub const GOLD: Color = Color::Rgb(234, 179, 8); // #EAB308
    pub const SILVER: Color = Color::Rgb(156, 163, 175); // #9CA3AF
    pub const BRONZE: Color = Color::Rgb(205, 127, 50); // #CD7F32
}
