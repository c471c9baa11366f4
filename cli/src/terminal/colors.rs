use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightYellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const BORDER: Color = Color::BrightBlack;

// tray labels
pub const NEUTRAL: Color = Color::BrightBlack;
/// Same order as `study::SPECIES`: Picea abies, Pinus cembra,
/// Acer pseudoplatanus, Sorbus aucuparia.
pub const SPECIES: [Color; 4] = [
    Color::BrightBlue,
    Color::TrueColor { r: 0, g: 139, b: 0 },
    Color::BrightRed,
    Color::TrueColor { r: 205, g: 173, b: 0 },
];
