//! Data types produced by the population aggregation pipeline.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analyzers::category::Category;
use crate::demographics::DemographicSummary;

/// Aggregated statistics for a single indicator group across the
/// population.
#[derive(Debug, Serialize)]
pub struct GroupAggregate {
    pub code: &'static str,
    pub name: &'static str,
    pub mean: f64,
    pub stddev: f64,
    pub category: Category,
}

/// Population mean of one domain composite (NKKST or NKKSS).
#[derive(Debug, Serialize)]
pub struct CompositeAggregate {
    pub mean: f64,
    pub stddev: f64,
    pub category: Category,
}

/// Population mean of the overall index (NKI) and its qualitative band.
#[derive(Debug, Serialize)]
pub struct OverallAggregate {
    pub mean: f64,
    pub stddev: f64,
    pub category: Category,
}

/// Respondent count per qualitative band of the overall index.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct CategoryDistribution {
    pub sangat_baik: usize,
    pub baik: usize,
    pub kurang_baik: usize,
    pub buruk: usize,
}

impl CategoryDistribution {
    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::SangatBaik => self.sangat_baik,
            Category::Baik => self.baik,
            Category::KurangBaik => self.kurang_baik,
            Category::Buruk => self.buruk,
        }
    }

    pub fn total(&self) -> usize {
        self.sangat_baik + self.baik + self.kurang_baik + self.buruk
    }
}

/// Column-wise means over every computed index, plus the NKI category
/// distribution. Recomputed in full whenever the respondent set changes.
#[derive(Debug, Serialize)]
pub struct PopulationAggregate {
    /// Per-group aggregates in canonical group order, technical first.
    pub groups: Vec<GroupAggregate>,
    pub technical: CompositeAggregate,
    pub social: CompositeAggregate,
    pub overall: OverallAggregate,
    pub distribution: CategoryDistribution,
}

/// Complete survey report written as JSON for presentation and export
/// collaborators.
#[derive(Debug, Serialize)]
pub struct SurveyReport {
    pub schema_version: u8,
    pub algorithm_version: u8,
    pub generated_at: DateTime<Utc>,
    pub respondents: usize,
    pub population: PopulationAggregate,
    pub demographics: DemographicSummary,
}
