use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative awareness band, ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Buruk")]
    Buruk,
    #[serde(rename = "Kurang Baik")]
    KurangBaik,
    #[serde(rename = "Baik")]
    Baik,
    #[serde(rename = "Sangat Baik")]
    SangatBaik,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Buruk => "Buruk",
            Category::KurangBaik => "Kurang Baik",
            Category::Baik => "Baik",
            Category::SangatBaik => "Sangat Baik",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Converts a 0-100 awareness index into a qualitative [`Category`].
///
/// | Range        | Category    |
/// |--------------|-------------|
/// | > 80         | Sangat Baik |
/// | > 50, <= 80  | Baik        |
/// | > 25, <= 50  | Kurang Baik |
/// | <= 25        | Buruk       |
///
/// Lower bounds are strict: exactly 80.00 is Baik and exactly 25.00 is
/// Buruk. The same thresholds apply to per-respondent indices and to
/// population means.
pub fn categorize(score: f64) -> Category {
    match score {
        s if s > 80.0 => Category::SangatBaik,
        s if s > 50.0 => Category::Baik,
        s if s > 25.0 => Category::KurangBaik,
        _ => Category::Buruk,
    }
}
