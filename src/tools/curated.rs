//! Curated allow-list of OpenBB tools exposed over MCP.
//!
//! A fixed set of 60 essential tools covering the major financial-data
//! domains while keeping the agent-facing surface small enough to audit and
//! cheap in context. Endpoints get renamed, superseded, or broken upstream;
//! freezing the manifest at build time avoids silently growing the surface
//! or exposing duplicates and dead tools. Widening or shrinking the list is
//! a code change, not a runtime operation.
//!
//! Operational notes for consumers:
//! - `economy_balance_of_payments` and
//!   `fixedincome_government_treasury_rates` need date-range parameters to
//!   stay under response token limits.
//! - `economy_survey_bls_search` should be called with a specific query, a
//!   category, and `include_extras=false`.
//! - Paid endpoints are covered by free alternatives: peer comparison via
//!   `equity_discovery_filings`, ratios via `equity_fundamental_multiples`,
//!   institutional ownership via `equity_ownership_form_13f`, risk premia
//!   via `economy_fred_series` spreads.
//! - Deprecated rate tools are reachable through
//!   `economy_interest_rates(duration=...)` and `economy_fred_series`
//!   (`"EFFR"`, `"SOFR"`).

use std::collections::HashSet;
use std::sync::OnceLock;

/// Curated tool identifiers, grouped by domain.
///
/// Identifiers follow the `<domain>_<subdomain...>_<action>` convention of
/// the upstream REST surface. Matching is exact and case-sensitive.
const CURATED_TOOLS: [&str; 60] = [
    // Economy (15) — GDP & growth
    "economy_gdp_real",
    "economy_gdp_nominal",
    "economy_gdp_forecast",
    // Economy — inflation & prices
    "economy_cpi",
    "economy_retail_prices",
    "economy_house_price_index",
    // Economy — interest rates & money
    "economy_interest_rates",
    // Economy — employment & trade
    "economy_unemployment",
    "economy_balance_of_payments",
    "economy_survey_nonfarm_payrolls",
    // Economy — FRED & BLS access
    "economy_fred_series",
    "economy_fred_search",
    "economy_survey_bls_series",
    "economy_survey_bls_search",
    // Economy — leading indicators
    "economy_composite_leading_indicator",
    // Equity (19) — search & quotes
    "equity_search",
    "equity_price_quote",
    "equity_price_historical",
    "equity_price_performance",
    // Equity — fundamental analysis
    "equity_fundamental_balance",
    "equity_fundamental_income",
    "equity_fundamental_cash",
    "equity_fundamental_dividends",
    "equity_fundamental_metrics",
    "equity_fundamental_multiples",
    "equity_fundamental_trailing_dividend_yield",
    // Equity — company research & screening
    "equity_profile",
    "equity_estimates_consensus",
    "equity_discovery_filings",
    "equity_discovery_gainers",
    "equity_discovery_undervalued_large_caps",
    "equity_discovery_growth_tech_equities",
    // Equity — ownership data
    "equity_ownership_insider_trading",
    "equity_ownership_form_13f",
    // Fixed income (6)
    "fixedincome_government_treasury_rates",
    "fixedincome_government_yield_curve",
    "fixedincome_spreads_tcm",
    "fixedincome_spreads_treasury_effr",
    "fixedincome_bond_indices",
    "fixedincome_mortgage_indices",
    // ETF (8)
    "etf_search",
    "etf_info",
    "etf_holdings",
    "etf_price_performance",
    "etf_historical",
    "etf_sectors",
    "etf_countries",
    "etf_equity_exposure",
    // Index (3)
    "index_price_historical",
    "index_constituents",
    "index_available",
    // Derivatives (4)
    "derivatives_options_chains",
    "derivatives_options_unusual",
    "derivatives_options_snapshots",
    "derivatives_futures_curve",
    // News (2)
    "news_world",
    "news_company",
    // Currency (1)
    "currency_price_historical",
    // Commodity (1)
    "commodity_price_spot",
    // Cryptocurrency (1)
    "crypto_price_historical",
];

static CURATED_INDEX: OnceLock<HashSet<&'static str>> = OnceLock::new();

fn curated_index() -> &'static HashSet<&'static str> {
    CURATED_INDEX.get_or_init(|| CURATED_TOOLS.iter().copied().collect())
}

/// Check if a tool is in the curated allow-list.
///
/// Exact string containment: no trimming, case folding, or prefix matching.
/// Total over all inputs, including empty or malformed identifiers.
pub fn is_curated_tool(tool_name: &str) -> bool {
    curated_index().contains(tool_name)
}

/// Number of curated tools.
pub fn curated_tool_count() -> usize {
    curated_index().len()
}

/// All curated tool identifiers, sorted.
pub fn curated_tool_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = curated_index().iter().copied().collect();
    names.sort_unstable();
    names
}

/// Leading `<domain>` segment of a tool identifier.
///
/// Returns `None` for identifiers without a leading segment (empty string,
/// or one starting with `_`). Pairs with
/// [`McpSettings::category_allowed`](crate::McpSettings::category_allowed)
/// when the host narrows the exposed surface by category.
pub fn tool_category(tool_name: &str) -> Option<&str> {
    match tool_name.split('_').next() {
        None | Some("") => None,
        Some(domain) => Some(domain),
    }
}

// =============================================================================
// Tests
// =============================================================================
