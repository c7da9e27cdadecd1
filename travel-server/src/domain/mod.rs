//! Domain types for the travel recommendation engine.
//!
//! This module contains the core data model: destinations supplied by the
//! catalog, validated budget requests, priced packages and historical
//! search records. Types that carry invariants check them at construction
//! or through an explicit `validate`.

mod destination;
mod error;
mod history;
mod package;
mod request;

pub use destination::{Coordinates, CostBaseline, Destination, SeasonalWindow, month_name, name_key};
pub use error::EngineError;
pub use history::{SearchHistoryEntry, SearchType};
pub use package::{CostBreakdown, PackageOption, Tier, TierPackages};
pub use request::{BudgetRequest, NumericField, RawBudgetRequest};
