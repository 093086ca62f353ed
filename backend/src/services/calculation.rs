//! Calculation service - composes scoring, formatting and advice

use crate::error::ApiError;
use crate::services::advice::AdviceService;
use chrono::{NaiveDate, Utc};
use final_tap_shared::types::{CalculationResult, ScoreResponse};
use final_tap_shared::{format_remaining, score, HabitProfile};
use tracing::info;

pub struct CalculationService;

impl CalculationService {
    /// Score a profile and format its remaining life, without advice
    pub fn score(habits: &HabitProfile, today: NaiveDate) -> Result<ScoreResponse, ApiError> {
        let score = score(habits)?;
        let remaining = format_remaining(score.remaining_years, today)?;

        metrics::histogram!("final_tap_remaining_years").record(score.remaining_years);

        Ok(ScoreResponse { score, remaining })
    }

    /// Full calculation: score, format, then ask for advice
    ///
    /// The profile is owned by the calculation, so nothing the caller does
    /// afterwards can change the result.
    pub async fn calculate(
        advice: &AdviceService,
        habits: HabitProfile,
        today: NaiveDate,
    ) -> Result<CalculationResult, ApiError> {
        let ScoreResponse { score, remaining } = Self::score(&habits, today)?;

        let text = advice.request_advice(&habits, score.remaining_years).await;

        metrics::counter!("final_tap_calculations_total").increment(1);
        info!(
            expectancy = score.expectancy,
            remaining_years = score.remaining_years,
            sins = score.sins,
            virtues = score.virtues,
            "Calculation complete"
        );

        Ok(CalculationResult::new(
            &habits,
            &score,
            remaining,
            text,
            Utc::now(),
        ))
    }
}
