use crossterm::style::Color;

/// Codeforces rank colors. Bounds are inclusive; ratings outside every band
/// (unrated, below 1000, above 2599) use the terminal's default color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RatingBand {
    Grey,
    Green,
    Cyan,
    Blue,
    Pink,
    Orange,
    DarkOrange,
    Red,
    Default,
}

pub const RATING_BANDS: &[(u32, u32, RatingBand)] = &[
    (1000, 1199, RatingBand::Grey),
    (1200, 1399, RatingBand::Green),
    (1400, 1599, RatingBand::Cyan),
    (1600, 1899, RatingBand::Blue),
    (1900, 2099, RatingBand::Pink),
    (2100, 2299, RatingBand::Orange),
    (2300, 2399, RatingBand::DarkOrange),
    (2400, 2599, RatingBand::Red),
];

impl RatingBand {
    pub fn for_rating(rating: u32) -> Self {
        RATING_BANDS
            .iter()
            .find(|(lo, hi, _)| (*lo..=*hi).contains(&rating))
            .map(|&(_, _, band)| band)
            .unwrap_or(RatingBand::Default)
    }

    pub fn color(self) -> Option<Color> {
        match self {
            RatingBand::Grey => Some(Color::DarkGrey),
            RatingBand::Green => Some(Color::Green),
            RatingBand::Cyan => Some(Color::Cyan),
            RatingBand::Blue => Some(Color::Blue),
            RatingBand::Pink => Some(Color::Magenta),
            RatingBand::Orange => Some(Color::Yellow),
            RatingBand::DarkOrange => Some(Color::AnsiValue(208)),
            RatingBand::Red => Some(Color::Red),
            RatingBand::Default => None,
        }
    }
}

pub const HEADER: Color = Color::Blue;
pub const CONTEST_ID: Color = Color::Green;
pub const PROBLEM_INDEX: Color = Color::Red;
pub const SOLVED_YES: Color = Color::Green;
pub const SOLVED_NO: Color = Color::Red;
