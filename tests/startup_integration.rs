//! Startup integration tests — settings resolution driving the curated
//! tool surface the way the host server does at boot.

use openbb_mcp_core::{
    curated_tool_count, curated_tool_names, is_curated_tool, tool_category, McpSettings,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Map, Value};

fn overrides(value: Value) -> Map<String, Value> {
    value
        .as_object()
        .expect("override fixture must be a JSON object")
        .clone()
}

/// Helper: the host's registration walk — every curated tool whose category
/// survives the settings restriction.
fn exposed_tools(settings: &McpSettings) -> Vec<&'static str> {
    curated_tool_names()
        .into_iter()
        .filter(|name| {
            tool_category(name).is_some_and(|category| settings.category_allowed(category))
        })
        .collect()
}

#[test]
fn unrestricted_settings_expose_every_curated_tool() {
    openbb_mcp_core::observability::init_tracing();

    let settings = McpSettings::from_overrides(&Map::new()).unwrap();

    let exposed = exposed_tools(&settings);

    assert_eq!(exposed.len(), curated_tool_count());
    assert_eq!(exposed.len(), 60);
}

#[test]
fn allowed_categories_narrow_the_surface() {
    let settings = McpSettings::from_overrides(&overrides(json!({
        "OPENBB_MCP_ALLOWED_TOOL_CATEGORIES": "equity, etf",
    })))
    .unwrap();

    let exposed = exposed_tools(&settings);

    // 19 equity + 8 etf tools survive the restriction.
    assert_eq!(exposed.len(), 27);
    assert!(exposed.iter().all(|name| is_curated_tool(name)));
    assert!(exposed.contains(&"equity_search"));
    assert!(exposed.contains(&"etf_holdings"));
    assert!(!exposed.contains(&"economy_cpi"));
    assert!(!exposed.contains(&"news_world"));
}

#[test]
fn restriction_to_unknown_category_exposes_nothing() {
    let settings = McpSettings::from_overrides(&overrides(json!({
        "OPENBB_MCP_ALLOWED_TOOL_CATEGORIES": ["options"],
    })))
    .unwrap();

    assert!(exposed_tools(&settings).is_empty());
}

#[test]
fn startup_dump_reflects_resolved_settings() {
    let settings = McpSettings::from_overrides(&overrides(json!({
        "OPENBB_MCP_NAME": "OpenBB MCP (curated)",
        "OPENBB_MCP_DEFAULT_TOOL_CATEGORIES": "equity,etf",
    })))
    .unwrap();

    let dump = settings.to_string();

    assert!(dump.starts_with("McpSettings\n\n"));
    assert!(dump.contains("name: OpenBB MCP (curated)"));
    assert!(dump.contains("default_tool_categories: [\"equity\", \"etf\"]"));
}

#[test]
fn settings_resolve_from_environment() {
    // Only test in this binary that touches the process environment; the
    // other tests go through explicit override maps.
    std::env::set_var("OPENBB_MCP_NAME", "OpenBB MCP (staging)");
    std::env::set_var("OPENBB_MCP_DEFAULT_TOOL_CATEGORIES", "equity, etf,crypto");
    std::env::set_var("OPENBB_MCP_DESCRIBE_RESPONSES", "yes");

    let resolved = McpSettings::from_env();

    std::env::remove_var("OPENBB_MCP_NAME");
    std::env::remove_var("OPENBB_MCP_DEFAULT_TOOL_CATEGORIES");
    std::env::remove_var("OPENBB_MCP_DESCRIBE_RESPONSES");

    let settings = resolved.unwrap();
    assert_eq!(settings.name, "OpenBB MCP (staging)");
    assert_eq!(
        settings.default_tool_categories,
        vec!["equity", "etf", "crypto"]
    );
    assert!(settings.describe_responses);
    assert!(!settings.enable_tool_discovery);
    assert_eq!(settings.allowed_tool_categories, None);
}
