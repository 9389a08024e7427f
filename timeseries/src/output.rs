use indexmap::IndexSet;

use crate::{markup, value::FxIndexMap, Result};

type FxIndexSet<T> = IndexSet<T, std::hash::BuildHasherDefault<rustc_hash::FxHasher>>;

/// Things a page needs beyond the markup of its charts.
///
/// One `PageOutput` is used per rendered page; it numbers the charts on
/// that page and collects their head items and resource modules.
#[derive(Debug, Default)]
pub struct PageOutput {
    nr_charts: u64,
    /// key — item id; value — HTML for the page head
    head_items: FxIndexMap<String, String>,
    resources: FxIndexSet<&'static str>,
}

impl PageOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new chart id, unique within this page.
    pub fn next_chart_id(&mut self, prefix: &str) -> String {
        self.nr_charts += 1;
        format!("{prefix}{}", self.nr_charts)
    }

    /// Number of ids handed out so far.
    pub fn nr_charts(&self) -> u64 {
        self.nr_charts
    }

    /// Adds an item to the page head. An item with the same id is replaced.
    pub fn require_head_item(&mut self, id: impl Into<String>, html: impl Into<String>) {
        self.head_items.insert(id.into(), html.into());
    }

    /// Requires a resource module to be loaded with the page.
    pub fn require_resource(&mut self, module: &'static str) {
        self.resources.insert(module);
    }

    pub fn head_items(&self) -> impl Iterator<Item = (&str, &str)> {
        self.head_items
            .iter()
            .map(|(id, html)| (id.as_str(), html.as_str()))
    }

    pub fn resources(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.resources.iter().copied()
    }

    /// Head items followed by a script loading the required modules.
    pub fn head_html(&self) -> Result<String> {
        let mut html = self.head_items.values().cloned().collect::<String>();
        if !self.resources.is_empty() {
            let modules = serde_json::to_string(&self.resources)?;
            html.push_str(&markup::inline_script(&format!(
                "mw.loader.load({modules});"
            )));
        }
        Ok(html)
    }
}
