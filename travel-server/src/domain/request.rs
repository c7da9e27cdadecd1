//! Budget search requests.
//!
//! Requests arrive loosely typed (form posts send numbers as strings), so
//! the wire form is parsed into a validated [`BudgetRequest`] before it
//! reaches the engine.

use serde::{Deserialize, Serialize};

use super::EngineError;

/// A number that may arrive as JSON number or numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumericField {
    Number(f64),
    Text(String),
}

impl NumericField {
    fn to_f64(&self, field: &str) -> Result<f64, EngineError> {
        let value = match self {
            NumericField::Number(n) => *n,
            NumericField::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| EngineError::validation(format!("{field} must be numeric")))?,
        };

        if !value.is_finite() {
            return Err(EngineError::validation(format!("{field} must be numeric")));
        }
        Ok(value)
    }
}

/// Budget search as received from a client.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawBudgetRequest {
    pub budget: Option<NumericField>,
    pub days: Option<NumericField>,
    #[serde(default)]
    pub starting_city: Option<String>,
    #[serde(default)]
    pub travel_type: Option<String>,
}

/// A validated budget search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetRequest {
    /// Total budget, greater than zero.
    pub budget: f64,

    /// Trip length in days, at least one.
    pub days: u32,

    pub starting_city: String,

    /// Free-form tag; used for display and logging only.
    pub travel_type: String,
}

impl BudgetRequest {
    /// Create and validate a request.
    pub fn new(
        budget: f64,
        days: u32,
        starting_city: impl Into<String>,
        travel_type: impl Into<String>,
    ) -> Result<Self, EngineError> {
        let request = Self {
            budget,
            days,
            starting_city: starting_city.into(),
            travel_type: travel_type.into(),
        };
        request.validate()?;
        Ok(request)
    }

    /// Parse the wire form, rejecting missing or malformed values.
    pub fn parse(raw: &RawBudgetRequest) -> Result<Self, EngineError> {
        let budget = raw
            .budget
            .as_ref()
            .ok_or_else(|| EngineError::validation("budget is required"))?
            .to_f64("budget")?;

        let days = raw
            .days
            .as_ref()
            .ok_or_else(|| EngineError::validation("days is required"))?
            .to_f64("days")?;

        if days.fract() != 0.0 {
            return Err(EngineError::validation("days must be a whole number"));
        }
        if days < 1.0 || days > f64::from(u32::MAX) {
            return Err(EngineError::validation("days must be at least 1"));
        }

        Self::new(
            budget,
            days as u32,
            raw.starting_city.as_deref().unwrap_or_default().trim(),
            raw.travel_type.as_deref().unwrap_or_default().trim(),
        )
    }

    /// Check the numeric invariants.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.budget.is_finite() || self.budget <= 0.0 {
            return Err(EngineError::validation("budget must be greater than zero"));
        }
        if self.days < 1 {
            return Err(EngineError::validation("days must be at least 1"));
        }
        Ok(())
    }
}
