use thiserror::Error;

use crate::analyzers::category::{Category, categorize};
use crate::analyzers::types::{
    CategoryDistribution, CompositeAggregate, GroupAggregate, OverallAggregate,
    PopulationAggregate,
};
use crate::analyzers::utility::{mean, stddev};
use crate::encoding;
use crate::scorer::RespondentResult;

/// Population aggregation failures. These are surfaced to the caller,
/// never coerced into a default numeric value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AggregateError {
    /// Zero respondents: means would be undefined, so there is no report.
    #[error("no respondents to aggregate")]
    EmptyPopulation,
}

/// Aggregates per-respondent results into population-level statistics.
///
/// Computes the column-wise arithmetic mean (and standard deviation) of
/// every group score, of NKKST, NKKSS and NKI, categorizes each mean, and
/// tallies the NKI category distribution. Means are kept unrounded so the
/// mean of N individually-computed NKI values is exact; rounding is a
/// presentation concern.
pub fn aggregate_population(
    results: &[RespondentResult],
) -> Result<PopulationAggregate, AggregateError> {
    if results.is_empty() {
        return Err(AggregateError::EmptyPopulation);
    }

    let mut groups = Vec::with_capacity(encoding::ALL_GROUPS.len());

    macro_rules! push_group {
        ($group:expr, $field:ident) => {{
            let series: Vec<f64> = results.iter().map(|r| r.$field).collect();
            let avg = mean(&series);
            groups.push(GroupAggregate {
                code: $group.code,
                name: $group.name,
                mean: avg,
                stddev: stddev(&series, avg),
                category: categorize(avg),
            });
        }};
    }

    push_group!(encoding::SK, sk_total);
    push_group!(encoding::KS, ks_total);
    push_group!(encoding::IW, iw_total);
    push_group!(encoding::KP, kp_total);
    push_group!(encoding::AT, at_total);
    push_group!(encoding::HT, ht_total);
    push_group!(encoding::RS, rs_total);
    push_group!(encoding::KN, kn_total);
    push_group!(encoding::AM, am_total);
    push_group!(encoding::AS, as_total);
    push_group!(encoding::HS, hs_total);

    let nkkst_series: Vec<f64> = results.iter().map(|r| r.nkkst).collect();
    let nkkss_series: Vec<f64> = results.iter().map(|r| r.nkkss).collect();
    let nki_series: Vec<f64> = results.iter().map(|r| r.nki).collect();

    let technical = composite(&nkkst_series);
    let social = composite(&nkkss_series);

    let nki_mean = mean(&nki_series);
    let overall = OverallAggregate {
        mean: nki_mean,
        stddev: stddev(&nki_series, nki_mean),
        category: categorize(nki_mean),
    };

    Ok(PopulationAggregate {
        groups,
        technical,
        social,
        overall,
        distribution: distribution(results),
    })
}

fn composite(series: &[f64]) -> CompositeAggregate {
    let avg = mean(series);
    CompositeAggregate {
        mean: avg,
        stddev: stddev(series, avg),
        category: categorize(avg),
    }
}

/// Tallies each result's NKI category. Counts sum to the respondent count.
pub fn distribution(results: &[RespondentResult]) -> CategoryDistribution {
    let mut dist = CategoryDistribution::default();
    for result in results {
        match result.category() {
            Category::SangatBaik => dist.sangat_baik += 1,
            Category::Baik => dist.baik += 1,
            Category::KurangBaik => dist.kurang_baik += 1,
            Category::Buruk => dist.buruk += 1,
        }
    }
    dist
}
