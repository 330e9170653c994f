//! Audit models recording how each weekly income was derived.

use serde::{Deserialize, Serialize};

/// A single step in the audit trace recording an income computation.
///
/// Each step captures the input, output, and reasoning for a rule application.
///
/// # Example
///
/// ```
/// use payroll_roster::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "hourly_income".to_string(),
///     rule_name: "Hourly Weekly Income".to_string(),
///     employee_id: "1".to_string(),
///     input: serde_json::json!({"hourly_rate": "15", "hours_worked": "8"}),
///     output: serde_json::json!({"weekly_income": "840"}),
///     reasoning: "$15 x 8 hours x 7 days = $840".to_string(),
/// };
/// assert_eq!(step.rule_id, "hourly_income");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The employee the rule was applied to. Empty when computed standalone.
    #[serde(default)]
    pub employee_id: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}
