//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::{BudgetRequest, PackageOption, Tier, month_name};
use crate::engine::{BudgetRecommendations, DestinationScore, NearbySuggestion, NearbySuggestions};

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the budget and nearby search forms.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Catalog names, offered as suggestions in the forms.
    pub destinations: Vec<String>,
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Budget recommendations fragment.
#[derive(Template)]
#[template(path = "budget_results.html")]
pub struct BudgetResultsTemplate {
    pub summary: String,
    /// Month name the season flags refer to.
    pub month: &'static str,
    pub analyzed: usize,
    pub recommendations: Vec<RecommendationView>,
}

impl BudgetResultsTemplate {
    /// `month` (1-12) is the month of travel used for the season flags.
    pub fn from_result(result: &BudgetRecommendations, month: u8) -> Self {
        Self {
            summary: request_summary(&result.input),
            month: month_name(month),
            analyzed: result.total_cities_analyzed,
            recommendations: result
                .recommendations
                .iter()
                .map(|score| RecommendationView::from_score(score, month))
                .collect(),
        }
    }
}

/// Nearby suggestions fragment.
#[derive(Template)]
#[template(path = "nearby_results.html")]
pub struct NearbyResultsTemplate {
    pub center: String,
    pub radius: String,
    pub total: usize,
    pub suggestions: Vec<SuggestionView>,
    pub preferences: Vec<String>,
}

impl NearbyResultsTemplate {
    pub fn from_result(result: &NearbySuggestions) -> Self {
        let center = match &result.center.name {
            Some(name) => name.clone(),
            None => format!(
                "{:.4}, {:.4}",
                result.center.coordinates.lat, result.center.coordinates.lng
            ),
        };

        Self {
            center,
            radius: format!("{} km", format_amount(result.radius_km)),
            total: result.total,
            suggestions: result.suggestions.iter().map(SuggestionView::from_suggestion).collect(),
            preferences: result.user_preferences.clone(),
        }
    }
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// One recommended destination.
#[derive(Debug, Clone)]
pub struct RecommendationView {
    pub name: String,
    pub region: String,
    pub score: u8,
    pub rating: String,
    pub travel_time: String,
    pub tiers: Vec<TierView>,
    pub best_months: String,
    pub avoid_months: String,
    pub in_season: bool,
    pub avoid_now: bool,
}

impl RecommendationView {
    pub fn from_score(score: &DestinationScore, month: u8) -> Self {
        Self {
            name: score.name.clone(),
            region: score.region.clone(),
            score: score.score,
            rating: format!("{:.1}", score.rating),
            travel_time: format!("~{:.0} h", score.travel_hours),
            tiers: score.packages.iter().map(TierView::from_package).collect(),
            best_months: score.season.best_month_names().join(", "),
            avoid_months: score.season.avoid_month_names().join(", "),
            in_season: score.season.is_best(month),
            avoid_now: score.season.is_avoided(month),
        }
    }

    /// Whether at least one tier fits the budget.
    pub fn is_affordable(&self) -> bool {
        self.tiers.iter().any(|t| t.within_budget)
    }
}

/// One priced tier.
#[derive(Debug, Clone)]
pub struct TierView {
    pub label: &'static str,
    pub total: String,
    pub daily: String,
    pub travel: String,
    pub food: String,
    pub local_transport: String,
    pub activities: String,
    pub within_budget: bool,
}

impl TierView {
    pub fn from_package(package: &PackageOption) -> Self {
        let label = match package.tier {
            Tier::Cheap => "Cheap",
            Tier::Moderate => "Moderate",
            Tier::Premium => "Premium",
        };

        Self {
            label,
            total: format_amount(package.total_cost),
            daily: format_amount(package.daily_average as f64),
            travel: format_amount(package.breakdown.travel),
            food: format_amount(package.breakdown.food),
            local_transport: format_amount(package.breakdown.local_transport),
            activities: format_amount(package.breakdown.activities),
            within_budget: package.within_budget,
        }
    }
}

/// One nearby destination.
#[derive(Debug, Clone)]
pub struct SuggestionView {
    pub name: String,
    pub region: String,
    pub distance: String,
    pub searches: String,
    pub score: i64,
    pub matches_preference: bool,
}

impl SuggestionView {
    pub fn from_suggestion(suggestion: &NearbySuggestion) -> Self {
        let searches = match suggestion.search_count {
            0 => "Not searched yet".to_string(),
            1 => "1 search".to_string(),
            n => format!("{n} searches"),
        };

        Self {
            name: suggestion.name.clone(),
            region: suggestion.region.clone(),
            distance: suggestion.distance_text.clone(),
            searches,
            score: suggestion.popularity_score,
            matches_preference: suggestion.matches_preference,
        }
    }
}

/// e.g. "30,000 for 3 days from Lahore (Solo)"
fn request_summary(input: &BudgetRequest) -> String {
    let mut summary = format!(
        "{} for {} day{}",
        format_amount(input.budget),
        input.days,
        if input.days == 1 { "" } else { "s" }
    );
    if !input.starting_city.is_empty() {
        summary.push_str(&format!(" from {}", input.starting_city));
    }
    if !input.travel_type.is_empty() {
        summary.push_str(&format!(" ({})", input.travel_type));
    }
    summary
}

/// Round to a whole unit and group thousands, e.g. 10950.4 -> "10,950".
pub fn format_amount(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
