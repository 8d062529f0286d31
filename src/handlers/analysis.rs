//! Transcript analysis endpoint.
//!
//! No scoring engine exists yet: every valid request receives the same
//! sample analysis, independent of the transcript it carries.

use crate::extract::JsonBody;
use crate::models::{AnalysisDraft, AnalysisRequest, AnalysisResponse, MissedOpportunity, Scores};
use crate::Result;
use axum::Json;

pub const SCORE_CATEGORIES: [&str; 5] = [
    "value_clarity",
    "objection_handling",
    "engagement",
    "next_step",
    "conversion_likelihood",
];

pub async fn analyze_transcript(
    JsonBody(request): JsonBody<AnalysisRequest>,
) -> Result<Json<AnalysisResponse>> {
    tracing::debug!(
        transcript_chars = request.transcript.chars().count(),
        "Analyzing transcript"
    );

    Ok(Json(sample_analysis()))
}

/// The fixed analysis returned until real scoring lands.
pub fn sample_analysis() -> AnalysisResponse {
    let scores: Scores = SCORE_CATEGORIES
        .iter()
        .zip([4, 3, 4, 2, 3])
        .map(|(category, score)| (category.to_string(), score))
        .collect();

    let draft = AnalysisDraft {
        summary: "The agent introduced the product and discussed pricing, but the call ended without a clear commitment.".to_string(),
        what_worked: vec![
            "Clear explanation of the product’s core features".to_string(),
            "Professional and friendly tone throughout the call".to_string(),
            "Responded calmly to initial pricing concerns".to_string(),
        ],
        what_hurt: vec![
            "Did not clearly articulate ROI or business value".to_string(),
            "Missed addressing the client’s hesitation directly".to_string(),
            "No concrete follow-up date was proposed".to_string(),
        ],
        missed_opportunity: MissedOpportunity {
            kind: "next_step".to_string(),
            explanation: "The agent failed to propose a specific follow-up action or timeline."
                .to_string(),
        },
        rewrite: concat!(
            "Thanks for taking the time today. Based on our discussion, I’d recommend a short follow-up ",
            "to walk through how this solution can directly impact your current workflow."
        )
        .to_string(),
        cta: "Schedule a 15-minute follow-up call this week".to_string(),
    };

    AnalysisResponse::new(draft, scores)
}
