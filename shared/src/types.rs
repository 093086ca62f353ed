//! API request and response types

use crate::duration::RemainingLife;
use crate::habits::{HabitProfile, MedicalCondition};
use crate::longevity::{ImpactBreakdown, LongevityScore};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

// ============================================================================
// Calculation Types
// ============================================================================

/// Body of both `/score` and `/calculate`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateRequest {
    pub habits: HabitProfile,
    /// The user's local date; the server's UTC date when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub today: Option<NaiveDate>,
}

/// Score and formatted duration, without advice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub score: LongevityScore,
    pub remaining: RemainingLife,
}

/// Figures consumed by the charting layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub sins: u32,
    pub virtues: u32,
    pub impact_breakdown: ImpactBreakdown,
}

impl From<&LongevityScore> for ChartData {
    fn from(score: &LongevityScore) -> Self {
        Self {
            sins: score.sins,
            virtues: score.virtues,
            impact_breakdown: score.breakdown,
        }
    }
}

/// Everything the result page shows. Built once, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub id: Uuid,
    pub user_name: String,
    pub remaining_years: u32,
    pub remaining_months: u32,
    pub remaining_days: u32,
    pub raw_remaining_years: f64,
    pub end_date: NaiveDate,
    pub advice: String,
    pub chart_data: ChartData,
    pub calculated_at: DateTime<Utc>,
}

impl CalculationResult {
    pub fn new(
        habits: &HabitProfile,
        score: &LongevityScore,
        remaining: RemainingLife,
        advice: String,
        calculated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_name: habits.name.clone(),
            remaining_years: remaining.years,
            remaining_months: remaining.months,
            remaining_days: remaining.days,
            raw_remaining_years: score.remaining_years,
            end_date: remaining.end_date,
            advice,
            chart_data: ChartData::from(score),
            calculated_at,
        }
    }
}

/// One entry of the medical condition checklist
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionInfo {
    pub id: String,
    pub label: String,
    pub penalty_years: u32,
}

impl From<MedicalCondition> for ConditionInfo {
    fn from(condition: MedicalCondition) -> Self {
        Self {
            id: condition.id().to_string(),
            label: condition.label().to_string(),
            penalty_years: condition.penalty(),
        }
    }
}

/// Condition catalog response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionCatalogResponse {
    pub conditions: Vec<ConditionInfo>,
}

impl ConditionCatalogResponse {
    pub fn full() -> Self {
        Self {
            conditions: MedicalCondition::ALL.into_iter().map(ConditionInfo::from).collect(),
        }
    }
}
