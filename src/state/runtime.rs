use pd_catalog::{ALL_CATEGORIES, Catalog, View};

use super::detail::DetailState;
use super::hits::HitMap;

/// Runtime state (catalog loaded in memory). The catalog itself is written
/// once at startup and only read afterwards; everything else is UI selection
/// state.
pub struct State {
    pub catalog: Catalog,
    /// Active top-level view.
    pub view: View,
    /// Active category label for the current view.
    pub active_category: String,
    /// Selected card index within the filtered sequence of the active view.
    pub selected_card: usize,
    /// Open detail overlay (None = closed).
    pub detail: Option<DetailState>,
    /// Screen regions recorded by the last render, for mouse hit-testing.
    pub hits: HitMap,
    /// Whether the UI needs to be redrawn.
    pub dirty: bool,
}

impl State {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            view: View::Prompts,
            active_category: ALL_CATEGORIES.to_string(),
            selected_card: 0,
            detail: None,
            hits: HitMap::default(),
            dirty: true, // Start dirty to ensure initial render
        }
    }

    /// Summary (title, category) pairs of the active view's filtered
    /// sequence, in order. The grid rebuilds from this every frame.
    pub fn visible_cards(&self) -> Vec<(&str, &str)> {
        use pd_catalog::{Card, filter_items};
        match self.view {
            View::Prompts => filter_items(&self.catalog.prompts, &self.active_category)
                .into_iter()
                .map(|i| (i.title(), i.category()))
                .collect(),
            View::Assistants => filter_items(&self.catalog.assistants, &self.active_category)
                .into_iter()
                .map(|i| (i.title(), i.category()))
                .collect(),
        }
    }

    pub fn visible_len(&self) -> usize {
        self.visible_cards().len()
    }

    /// Switch the active view. Always resets the category to the sentinel and
    /// the card selection to the start, so the new view shows its full
    /// sequence immediately.
    pub fn switch_view(&mut self, view: View) {
        self.view = view;
        self.active_category = ALL_CATEGORIES.to_string();
        self.selected_card = 0;
    }

    pub fn select_category(&mut self, label: &str) {
        self.active_category = label.to_string();
        self.selected_card = 0;
    }

    /// Open the detail overlay for card `index` of the filtered sequence.
    /// Out-of-range indices are ignored. The overlay captures its own copy of
    /// the item, mirroring how each card is bound to one item.
    pub fn open_detail(&mut self, index: usize) {
        use pd_catalog::filter_items;
        match self.view {
            View::Prompts => {
                let filtered = filter_items(&self.catalog.prompts, &self.active_category);
                if let Some(item) = filtered.get(index) {
                    self.selected_card = index;
                    self.detail = Some(DetailState::Prompt(super::detail::PromptDetail::new((*item).clone())));
                }
            }
            View::Assistants => {
                let filtered = filter_items(&self.catalog.assistants, &self.active_category);
                if let Some(item) = filtered.get(index) {
                    self.selected_card = index;
                    self.detail =
                        Some(DetailState::Assistant(super::detail::AssistantDetail::new((*item).clone())));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pd_catalog::{AssistantItem, PromptItem};

    fn catalog() -> Catalog {
        let prompt = |title: &str, category: &str| PromptItem {
            title: title.to_string(),
            category: category.to_string(),
            ..Default::default()
        };
        let assistant = |title: &str, category: &str| AssistantItem {
            title: title.to_string(),
            category: category.to_string(),
            ..Default::default()
        };
        Catalog {
            prompts: vec![prompt("p1", "Writing"), prompt("p2", "Coding"), prompt("p3", "Writing")],
            assistants: vec![assistant("a1", "Coding"), assistant("a2", "Support")],
        }
    }

    #[test]
    fn card_count_matches_filtered_length() {
        let mut state = State::new(catalog());
        assert_eq!(state.visible_len(), 3);
        state.select_category("Writing");
        assert_eq!(state.visible_len(), 2);
        state.select_category("Nope");
        assert_eq!(state.visible_len(), 0);
    }

    #[test]
    fn switching_view_resets_category_and_selection() {
        let mut state = State::new(catalog());
        state.select_category("Writing");
        state.selected_card = 1;

        state.switch_view(View::Assistants);
        assert_eq!(state.active_category, ALL_CATEGORIES);
        assert_eq!(state.selected_card, 0);
        assert_eq!(state.visible_len(), 2);
    }

    #[test]
    fn open_detail_maps_filtered_index_to_filtered_item() {
        let mut state = State::new(catalog());
        state.select_category("Writing");

        // Filtered sequence is [p1, p3]; card 1 must open p3, not p2.
        state.open_detail(1);
        match state.detail {
            Some(DetailState::Prompt(ref d)) => assert_eq!(d.item.title, "p3"),
            _ => panic!("expected prompt detail"),
        }
    }

    #[test]
    fn open_detail_out_of_range_is_ignored() {
        let mut state = State::new(catalog());
        state.open_detail(99);
        assert!(state.detail.is_none());
    }

    #[test]
    fn open_detail_respects_active_view() {
        let mut state = State::new(catalog());
        state.switch_view(View::Assistants);
        state.open_detail(0);
        match state.detail {
            Some(DetailState::Assistant(ref d)) => assert_eq!(d.item.title, "a1"),
            _ => panic!("expected assistant detail"),
        }
    }
}
