use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct State {
    pub state_id: i64,
    pub state_name: String,
    pub population: i64,
}

/// Case totals across a state's districts.
///
/// Each total is `None` when the state has no districts: SQL `SUM` over
/// an empty set is NULL, and that is reported as-is rather than as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct StateStats {
    pub total_cases: Option<i64>,
    pub total_cured: Option<i64>,
    pub total_active: Option<i64>,
    pub total_deaths: Option<i64>,
}
