use serde::Serialize;

use crate::analyzers::category::{Category, categorize};
use crate::analyzers::utility::{mean, round2};
use crate::encoding::{self, IndicatorGroup};

/// One row of raw survey input: identifier, demographic pass-through
/// columns, and one literal answer per elementary item in the canonical
/// registry order.
#[derive(Debug, Clone)]
pub struct RespondentRecord {
    pub id: String,
    pub name: String,
    pub institution: String,
    pub gender: String,
    pub age: String,
    pub education: String,
    pub province: String,
    pub answers: Vec<String>,
}

/// Normalized awareness indices for one respondent. Immutable once
/// computed.
///
/// Each group score is 0-100 with 2-decimal rounding. NKKST averages the
/// six technical groups, NKKSS the five social groups, and NKI averages
/// the two composites. `unmapped_answers` counts answers that fell outside
/// their item's encoding table and scored 0, for data-quality auditing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RespondentResult {
    pub respondent_id: String,

    // technical groups
    pub sk_total: f64,
    pub ks_total: f64,
    pub iw_total: f64,
    pub kp_total: f64,
    pub at_total: f64,
    pub ht_total: f64,

    // social groups
    pub rs_total: f64,
    pub kn_total: f64,
    pub am_total: f64,
    pub as_total: f64,
    pub hs_total: f64,

    pub nkkst: f64,
    pub nkkss: f64,
    pub nki: f64,

    pub unmapped_answers: usize,
}

impl RespondentResult {
    /// Qualitative band of the overall index.
    pub fn category(&self) -> Category {
        categorize(self.nki)
    }
}

/// Walks a record's answers in canonical item order, one group at a time.
struct AnswerCursor<'a> {
    answers: &'a [String],
    pos: usize,
    unmapped: usize,
}

impl AnswerCursor<'_> {
    /// Sums the ordinal scores of one group's items and normalizes against
    /// the group's maximum attainable raw score.
    ///
    /// An unmapped answer scores 0 and lowers the group total; no group is
    /// skipped and no row is rejected.
    fn group_total(&mut self, group: &IndicatorGroup) -> f64 {
        let mut raw: u32 = 0;
        for item in group.items {
            let answer = self
                .answers
                .get(self.pos)
                .map(String::as_str)
                .unwrap_or("");
            let score = item.score(answer);
            if score == 0 {
                self.unmapped += 1;
            }
            raw += u32::from(score);
            self.pos += 1;
        }
        let normalized = round2(f64::from(raw) / f64::from(group.max_raw()) * 100.0);
        // Item scores are 0-4, so this cannot leave [0, 100]; if it ever
        // does, the registry itself is broken.
        debug_assert!((0.0..=100.0).contains(&normalized));
        normalized
    }
}

/// Computes all normalized indices for one respondent.
///
/// Pure and stateless: scoring the same record twice yields bit-identical
/// results, and records have no data dependency on each other.
pub fn score_respondent(record: &RespondentRecord) -> RespondentResult {
    let mut cursor = AnswerCursor {
        answers: &record.answers,
        pos: 0,
        unmapped: 0,
    };

    let sk_total = cursor.group_total(&encoding::SK);
    let ks_total = cursor.group_total(&encoding::KS);
    let iw_total = cursor.group_total(&encoding::IW);
    let kp_total = cursor.group_total(&encoding::KP);
    let at_total = cursor.group_total(&encoding::AT);
    let ht_total = cursor.group_total(&encoding::HT);

    let rs_total = cursor.group_total(&encoding::RS);
    let kn_total = cursor.group_total(&encoding::KN);
    let am_total = cursor.group_total(&encoding::AM);
    let as_total = cursor.group_total(&encoding::AS);
    let hs_total = cursor.group_total(&encoding::HS);

    let nkkst = round2(mean(&[
        sk_total, ks_total, iw_total, kp_total, at_total, ht_total,
    ]));
    let nkkss = round2(mean(&[rs_total, kn_total, am_total, as_total, hs_total]));

    // The two domains weigh equally regardless of group count, so NKI is
    // the mean of the composites, never of all 11 groups.
    let nki = round2((nkkst + nkkss) / 2.0);

    RespondentResult {
        respondent_id: record.id.clone(),
        sk_total,
        ks_total,
        iw_total,
        kp_total,
        at_total,
        ht_total,
        rs_total,
        kn_total,
        am_total,
        as_total,
        hs_total,
        nkkst,
        nkkss,
        nki,
        unmapped_answers: cursor.unmapped,
    }
}
