//! YAML configuration loader for UI strings.
//!
//! Tab titles and the category navigation labels come from `yamls/ui.yaml`;
//! they are part of the interface markup, not derived from the loaded data.
//! Filtering by a label with no matching items is valid and shows an empty
//! grid.

use std::fs;
use std::sync::LazyLock;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UiConfig {
    pub tabs: TabTitles,
    /// Category labels in display order. The first entry is expected to be
    /// the "All categories" sentinel.
    pub categories: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct TabTitles {
    pub prompts: String,
    pub assistants: String,
}

fn load_yaml<T: for<'de> Deserialize<'de>>(path: &str) -> T {
    let content = fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {}: {}", path, e));
    serde_yaml::from_str(&content).unwrap_or_else(|e| panic!("Failed to parse {}: {}", path, e))
}

pub static UI: LazyLock<UiConfig> = LazyLock::new(|| load_yaml("yamls/ui.yaml"));

/// Category labels in display order.
pub fn category_labels() -> &'static [String] {
    &UI.categories
}

pub fn tab_title(view: pd_catalog::View) -> &'static str {
    match view {
        pd_catalog::View::Prompts => &UI.tabs.prompts,
        pd_catalog::View::Assistants => &UI.tabs.assistants,
    }
}
