use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisRequest {
    pub transcript: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissedOpportunity {
    #[serde(rename = "type")]
    pub kind: String,
    pub explanation: String,
}

/// Category name -> integer rating, kept in presentation order.
pub type Scores = IndexMap<String, i64>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub summary: String,
    pub what_worked: Vec<String>,
    pub what_hurt: Vec<String>,
    pub missed_opportunity: MissedOpportunity,
    pub rewrite: String,
    pub cta: String,
    pub scores: Scores,
    pub final_rating: i64,
}

/// Narrative half of an analysis; the rating is derived from the scores when
/// it is turned into an [`AnalysisResponse`].
#[derive(Debug, Clone)]
pub struct AnalysisDraft {
    pub summary: String,
    pub what_worked: Vec<String>,
    pub what_hurt: Vec<String>,
    pub missed_opportunity: MissedOpportunity,
    pub rewrite: String,
    pub cta: String,
}

impl AnalysisResponse {
    pub fn new(draft: AnalysisDraft, scores: Scores) -> Self {
        let final_rating = final_rating(&scores);
        Self {
            summary: draft.summary,
            what_worked: draft.what_worked,
            what_hurt: draft.what_hurt,
            missed_opportunity: draft.missed_opportunity,
            rewrite: draft.rewrite,
            cta: draft.cta,
            scores,
            final_rating,
        }
    }
}

/// Rounded mean of the category scores, halves going to the even neighbour.
/// An empty score set rates 0.
pub fn final_rating(scores: &Scores) -> i64 {
    if scores.is_empty() {
        return 0;
    }
    let sum: i64 = scores.values().sum();
    let mean = sum as f64 / scores.len() as f64;
    mean.round_ties_even() as i64
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
