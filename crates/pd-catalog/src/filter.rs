use crate::types::Card;

/// Sentinel category label that bypasses filtering entirely.
pub const ALL_CATEGORIES: &str = "All categories";

/// Select the items whose `category` equals `label` exactly. No
/// normalization, case-folding, or partial match; a label with zero matches
/// yields an empty sequence, not an error. `ALL_CATEGORIES` is the identity
/// transform.
pub fn filter_items<'a, T: Card>(items: &'a [T], label: &str) -> Vec<&'a T> {
    if label == ALL_CATEGORIES {
        return items.iter().collect();
    }
    items.iter().filter(|item| item.category() == label).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PromptItem;

    fn item(title: &str, category: &str) -> PromptItem {
        PromptItem { title: title.to_string(), category: category.to_string(), ..Default::default() }
    }

    #[test]
    fn all_categories_is_identity() {
        let items = vec![item("a", "Writing"), item("b", "Coding"), item("c", "Writing")];
        let filtered = filter_items(&items, ALL_CATEGORIES);
        assert_eq!(filtered.len(), items.len());
    }

    #[test]
    fn label_selects_equal_category_subsequence() {
        let items = vec![item("a", "Writing"), item("b", "Coding"), item("c", "Writing")];
        let filtered = filter_items(&items, "Writing");
        let titles: Vec<&str> = filtered.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "c"]);
    }

    #[test]
    fn zero_matches_yields_empty() {
        let items = vec![item("a", "Writing")];
        assert!(filter_items(&items, "Marketing").is_empty());
    }

    #[test]
    fn matching_is_case_sensitive() {
        let items = vec![item("a", "Writing")];
        assert!(filter_items(&items, "writing").is_empty());
    }

    #[test]
    fn duplicates_are_kept() {
        let items = vec![item("a", "Writing"), item("a", "Writing")];
        assert_eq!(filter_items(&items, "Writing").len(), 2);
    }
}
