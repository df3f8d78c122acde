use std::fmt;

// ---------------------------------------------------------------------------
// Era buckets (decade filter)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Era {
    #[default]
    All,
    Modern,
    Twenty10s,
    Twenty00s,
    Nineteen90s,
    Nineteen80s,
}

impl Era {
    /// Selector order, as presented in the era dropdown.
    pub const ALL: [Era; 6] = [
        Self::All,
        Self::Modern,
        Self::Twenty10s,
        Self::Twenty00s,
        Self::Nineteen90s,
        Self::Nineteen80s,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Modern => "Modern (2020s)",
            Self::Twenty10s => "2010s",
            Self::Twenty00s => "2000s",
            Self::Nineteen90s => "1990s",
            Self::Nineteen80s => "1980s",
        }
    }

    /// Year range as `[lower, upper)`. `None` for `All`.
    pub fn bounds(self) -> Option<(i32, Option<i32>)> {
        match self {
            Self::All => None,
            Self::Modern => Some((2020, None)),
            Self::Twenty10s => Some((2010, Some(2020))),
            Self::Twenty00s => Some((2000, Some(2010))),
            Self::Nineteen90s => Some((1990, Some(2000))),
            Self::Nineteen80s => Some((1980, Some(1990))),
        }
    }

    /// Whether a season year falls in this bucket. A missing year only
    /// matches `All`.
    pub fn contains(self, year: Option<i32>) -> bool {
        let Some((lower, upper)) = self.bounds() else {
            return true;
        };
        match year {
            Some(y) => y >= lower && upper.map_or(true, |u| y < u),
            None => false,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Modern,
            Self::Modern => Self::Twenty10s,
            Self::Twenty10s => Self::Twenty00s,
            Self::Twenty00s => Self::Nineteen90s,
            Self::Nineteen90s => Self::Nineteen80s,
            Self::Nineteen80s => Self::All,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::All => Self::Nineteen80s,
            Self::Modern => Self::All,
            Self::Twenty10s => Self::Modern,
            Self::Twenty00s => Self::Twenty10s,
            Self::Nineteen90s => Self::Twenty00s,
            Self::Nineteen80s => Self::Nineteen90s,
        }
    }

    /// Parse an era label leniently: `"Modern (2020s)"`, `"modern"`,
    /// `"2020s"`, `"90s"`, `"1990s"` etc. Unknown labels map to `All`.
    pub fn from_str_loose(s: &str) -> Self {
        let lower = s.to_ascii_lowercase();
        match lower.trim() {
            "modern (2020s)" | "modern" | "2020s" | "20s" => Self::Modern,
            "2010s" | "10s" => Self::Twenty10s,
            "2000s" | "00s" => Self::Twenty00s,
            "1990s" | "90s" => Self::Nineteen90s,
            "1980s" | "80s" => Self::Nineteen80s,
            _ => Self::All,
        }
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Player filter: a single name or the "All" sentinel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum PlayerFilter {
    #[default]
    All,
    Named(String),
}

impl PlayerFilter {
    pub const ALL_LABEL: &'static str = "All";

    pub fn label(&self) -> &str {
        match self {
            Self::All => Self::ALL_LABEL,
            Self::Named(name) => name,
        }
    }

    /// `"All"` maps to the sentinel, anything else to an exact name.
    pub fn from_label(label: &str) -> Self {
        if label == Self::ALL_LABEL {
            Self::All
        } else {
            Self::Named(label.to_string())
        }
    }

    pub fn matches(&self, player: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => name == player,
        }
    }
}

impl fmt::Display for PlayerFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Rank decoration (medal / award)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankIndicator {
    Gold,
    Silver,
    Bronze,
    Top10,
    None,
}

impl RankIndicator {
    pub fn from_rank(rank: u32) -> Self {
        match rank {
            1 => Self::Gold,
            2 => Self::Silver,
            3 => Self::Bronze,
            4..=10 => Self::Top10,
            _ => Self::None,
        }
    }
}

// ---------------------------------------------------------------------------
// MVP finish classifiers
// ---------------------------------------------------------------------------

/// Marker used in MVP finish text for an approximate placing, e.g. `"~3rd"`.
pub const APPROX_MARKER: char = '~';

/// Row-level styling bucket. Approximate finishes share third-place styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FinishClass {
    First,
    Second,
    Third,
    Other,
}

impl FinishClass {
    pub fn classify(finish: &str) -> Self {
        match finish {
            "1st" => Self::First,
            "2nd" => Self::Second,
            "3rd" => Self::Third,
            f if f.contains(APPROX_MARKER) => Self::Third,
            _ => Self::Other,
        }
    }
}

/// Finish-text styling bucket. Coarser than [`FinishClass`]: anything
/// outside first and second is styled as third.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FinishTextClass {
    First,
    Second,
    Third,
}

impl FinishTextClass {
    pub fn classify(finish: &str) -> Self {
        match finish {
            "1st" => Self::First,
            "2nd" => Self::Second,
            _ => Self::Third,
        }
    }
}

// ---------------------------------------------------------------------------
// Leader badges and bonus weights
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeaderBadge {
    Yards,
    Touchdowns,
    RushYards,
    RushTouchdowns,
}

impl LeaderBadge {
    pub const ALL: [LeaderBadge; 4] = [
        Self::Yards,
        Self::Touchdowns,
        Self::RushYards,
        Self::RushTouchdowns,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Yards => "YDS",
            Self::Touchdowns => "TD",
            Self::RushYards => "R-YDS",
            Self::RushTouchdowns => "R-TD",
        }
    }

    pub fn points(self) -> f64 {
        match self {
            Self::Yards => 10.0,
            Self::Touchdowns => 10.0,
            Self::RushYards => 5.0,
            Self::RushTouchdowns => 2.5,
        }
    }
}

impl fmt::Display for LeaderBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Advanced "plus" stats
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlusStat {
    AnyA,
    Completion,
    Touchdown,
    Interception,
    Rating,
}

impl PlusStat {
    pub const ALL: [PlusStat; 5] = [
        Self::AnyA,
        Self::Completion,
        Self::Touchdown,
        Self::Interception,
        Self::Rating,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::AnyA => "ANY/A+",
            Self::Completion => "Cmp%+",
            Self::Touchdown => "TD%+",
            Self::Interception => "INT%+",
            Self::Rating => "Rate+",
        }
    }
}

impl fmt::Display for PlusStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
