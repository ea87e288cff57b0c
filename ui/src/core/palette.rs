//! Series colors.
//!
//! The palette is read-only configuration. Builders receive it by reference so
//! a caller (or a test) can swap in another color list without touching global
//! state.

use once_cell::sync::Lazy;

pub const DEFAULT_COLORS: [&str; 9] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#66BB6A", "#BA68C8", "#FF9F40", "#4BC0C0", "#9966FF",
    "#C9CBCF",
];

pub static DEFAULT_PALETTE: Lazy<Palette> = Lazy::new(Palette::default);

/// Alpha bytes appended to `#RRGGBB` colors.
pub const FILL_ALPHA: u8 = 0x99;
pub const BAR_ALPHA: u8 = 0xB3;
pub const LINE_ALPHA: u8 = 0xCC;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    /// Returns `None` for an empty list; a palette must always yield a color.
    pub fn new<I, S>(colors: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        if colors.is_empty() {
            None
        } else {
            Some(Self { colors })
        }
    }

    /// Color for the `index`-th series, cycling through the list.
    pub fn color(&self, index: usize) -> &str {
        &self.colors[index % self.colors.len()]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// `#RRGGBB` → `#RRGGBBAA`. Anything that is not a six-digit hex color is
/// returned unchanged.
pub fn with_alpha(color: &str, alpha: u8) -> String {
    let is_rgb_hex = color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit());
    if is_rgb_hex {
        format!("{color}{alpha:02X}")
    } else {
        color.to_string()
    }
}
