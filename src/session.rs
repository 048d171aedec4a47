//! Edit Session State Machine
//!
//! Pure state and list operations behind the shop detail view: the
//! one-item-at-a-time edit session, the name filter, and the patch functions
//! applied after a confirmed backend response. Kept free of rendering and
//! network concerns so everything here is directly testable.

use std::collections::HashSet;

use crate::models::{MenuItem, UpdateMenuItemBody};

/// Scratch copy of a menu item's editable fields, held while an edit is active
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub name: String,
    pub link: String,
    pub image: String,
    pub description: String,
}

impl Draft {
    fn from_item(item: &MenuItem) -> Self {
        Self {
            name: item.name.clone(),
            link: item.link.clone(),
            image: item.image.clone(),
            description: item.description.clone(),
        }
    }

    /// Wire body for the update call built from this draft
    pub fn to_update_body(&self) -> UpdateMenuItemBody {
        UpdateMenuItemBody {
            new_name: self.name.clone(),
            new_link: self.link.clone(),
            new_image: self.image.clone(),
            new_description: self.description.clone(),
        }
    }
}

/// Edit session for the menu list. The active draft lives inside the
/// `Editing` variant, so a second concurrent draft is not constructible.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditSession {
    #[default]
    Idle,
    Editing {
        /// The `name` the item had when the edit began; update and delete
        /// calls are keyed by it until the backend confirms a rename
        original_name: String,
        draft: Draft,
    },
}

/// Description of the update call a save requires; the caller performs it and
/// applies `apply_update` only on confirmed success
#[derive(Debug, Clone, PartialEq)]
pub struct SaveRequest {
    pub shop_id: String,
    pub original_name: String,
    pub draft: Draft,
}

impl EditSession {
    /// Enter edit mode for `item`, seeding the draft from its confirmed
    /// values. Valid from any state; an in-progress draft is discarded.
    pub fn begin(item: &MenuItem) -> EditSession {
        EditSession::Editing {
            original_name: item.name.clone(),
            draft: Draft::from_item(item),
        }
    }

    /// Leave edit mode; the draft is dropped and the list is untouched
    pub fn cancel(self) -> EditSession {
        EditSession::Idle
    }

    /// Whether the item named `name` is the one being edited
    pub fn is_editing(&self, name: &str) -> bool {
        matches!(self, EditSession::Editing { original_name, .. } if original_name == name)
    }

    /// Describe the update call for the active draft, or None when idle.
    /// The session stays `Editing` until the response lands, so a failed
    /// save leaves the operator's draft intact.
    pub fn save_request(&self, shop_id: &str) -> Option<SaveRequest> {
        match self {
            EditSession::Editing { original_name, draft } => Some(SaveRequest {
                shop_id: shop_id.to_string(),
                original_name: original_name.clone(),
                draft: draft.clone(),
            }),
            EditSession::Idle => None,
        }
    }
}

/// Case-insensitive substring filter on item names only. Empty query returns
/// the full list; order is always preserved.
pub fn filter_menu_items(items: &[MenuItem], query: &str) -> Vec<MenuItem> {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Replace the entry keyed by `original_name` with the draft's confirmed
/// values. A renamed item keeps its position; the new name becomes its key.
/// Returns false if no entry matched.
pub fn apply_update(items: &mut [MenuItem], original_name: &str, draft: &Draft) -> bool {
    match items.iter_mut().find(|item| item.name == original_name) {
        Some(item) => {
            item.name = draft.name.clone();
            item.link = draft.link.clone();
            item.image = draft.image.clone();
            item.description = draft.description.clone();
            true
        }
        None => false,
    }
}

/// Remove the entry named `name`. Returns false if no entry matched.
pub fn apply_delete(items: &mut Vec<MenuItem>, name: &str) -> bool {
    let before = items.len();
    items.retain(|item| item.name != name);
    items.len() != before
}

/// In-flight mutation guard keyed by item identity. A save or delete for a
/// key that already has a request in flight is rejected rather than raced:
/// the backend keys updates by name, so two overlapping mutations on the same
/// item could apply out of order.
#[derive(Debug, Clone, Default)]
pub struct PendingMutations {
    in_flight: HashSet<String>,
}

impl PendingMutations {
    /// Claim `key` for a mutation; false means one is already in flight
    pub fn try_begin(&mut self, key: &str) -> bool {
        self.in_flight.insert(key.to_string())
    }

    /// Release `key` once its response has landed, success or not
    pub fn finish(&mut self, key: &str) {
        self.in_flight.remove(key);
    }

    pub fn is_pending(&self, key: &str) -> bool {
        self.in_flight.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(name: &str) -> MenuItem {
        MenuItem {
            name: name.to_string(),
            link: format!("link-{}", name),
            image: format!("image-{}", name),
            description: format!("desc-{}", name),
        }
    }

    fn make_menu() -> Vec<MenuItem> {
        vec![make_item("Tea"), make_item("Iced Tea"), make_item("Coffee")]
    }

    // ========================
    // Filter
    // ========================

    #[test]
    fn test_filter_empty_query_is_identity() {
        let menu = make_menu();
        assert_eq!(filter_menu_items(&menu, ""), menu);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let menu = vec![make_item("Tea")];
        let filtered = filter_menu_items(&menu, "tea");
        assert_eq!(filtered, menu);
        let filtered = filter_menu_items(&menu, "TEA");
        assert_eq!(filtered, menu);
    }

    #[test]
    fn test_filter_preserves_order() {
        let menu = make_menu();
        let filtered = filter_menu_items(&menu, "tea");
        let names: Vec<&str> = filtered.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Tea", "Iced Tea"]);
    }

    #[test]
    fn test_filter_matches_name_only() {
        // "desc-Coffee" contains "desc" but descriptions are not searched
        let menu = make_menu();
        assert!(filter_menu_items(&menu, "desc").is_empty());
    }

    #[test]
    fn test_filter_no_match_is_empty_not_error() {
        let menu = make_menu();
        assert!(filter_menu_items(&menu, "burger").is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let menu = make_menu();
        let once = filter_menu_items(&menu, "te");
        let twice = filter_menu_items(&once, "te");
        assert_eq!(once, twice);
    }

    // ========================
    // Edit session
    // ========================

    #[test]
    fn test_begin_seeds_draft_from_item() {
        let item = make_item("Tea");
        let session = EditSession::begin(&item);
        match &session {
            EditSession::Editing { original_name, draft } => {
                assert_eq!(original_name, "Tea");
                assert_eq!(draft.name, "Tea");
                assert_eq!(draft.link, "link-Tea");
                assert_eq!(draft.image, "image-Tea");
                assert_eq!(draft.description, "desc-Tea");
            }
            EditSession::Idle => panic!("begin should enter Editing"),
        }
        assert!(session.is_editing("Tea"));
        assert!(!session.is_editing("Coffee"));
    }

    #[test]
    fn test_begin_then_cancel_leaves_list_untouched() {
        let menu = make_menu();
        let before = menu.clone();

        let session = EditSession::begin(&menu[0]);
        let session = session.cancel();

        assert_eq!(session, EditSession::Idle);
        assert_eq!(menu, before);
    }

    #[test]
    fn test_begin_over_active_edit_replaces_draft() {
        let tea = make_item("Tea");
        let coffee = make_item("Coffee");

        let _first = EditSession::begin(&tea);
        let second = EditSession::begin(&coffee);

        assert!(second.is_editing("Coffee"));
        assert!(!second.is_editing("Tea"));
    }

    #[test]
    fn test_save_request_only_while_editing() {
        assert_eq!(EditSession::Idle.save_request("s1"), None);

        let mut session = EditSession::begin(&make_item("Tea"));
        if let EditSession::Editing { draft, .. } = &mut session {
            draft.name = "Chai".to_string();
        }

        let request = session.save_request("s1").unwrap();
        assert_eq!(request.shop_id, "s1");
        assert_eq!(request.original_name, "Tea");
        assert_eq!(request.draft.name, "Chai");

        let body = request.draft.to_update_body();
        assert_eq!(body.new_name, "Chai");
        assert_eq!(body.new_link, "link-Tea");
    }

    // ========================
    // List patching
    // ========================

    #[test]
    fn test_apply_update_renames_in_place() {
        let mut menu = make_menu();

        let mut session = EditSession::begin(&menu[0]);
        if let EditSession::Editing { draft, .. } = &mut session {
            draft.name = "Chai".to_string();
        }
        let request = session.save_request("s1").unwrap();

        assert!(apply_update(&mut menu, &request.original_name, &request.draft));
        assert_eq!(menu.len(), 3);
        assert_eq!(menu[0].name, "Chai");
        assert_eq!(menu[0].link, "link-Tea");
        assert_eq!(menu[0].image, "image-Tea");
        assert_eq!(menu[0].description, "desc-Tea");
        assert!(!menu.iter().any(|i| i.name == "Tea"));
    }

    #[test]
    fn test_failed_save_leaves_list_unchanged() {
        // on failure the view never calls apply_update; the list must equal
        // the pre-edit snapshot
        let menu = make_menu();
        let before = menu.clone();

        let mut session = EditSession::begin(&menu[0]);
        if let EditSession::Editing { draft, .. } = &mut session {
            draft.name = "Chai".to_string();
        }
        // backend said no; session stays Editing, no patch happens
        assert!(session.is_editing("Tea"));
        assert_eq!(menu, before);
    }

    #[test]
    fn test_apply_update_missing_key_is_noop() {
        let mut menu = make_menu();
        let before = menu.clone();
        let draft = Draft::from_item(&make_item("Burger"));
        assert!(!apply_update(&mut menu, "Burger", &draft));
        assert_eq!(menu, before);
    }

    #[test]
    fn test_apply_delete_removes_named_entry() {
        let mut menu = make_menu();
        assert!(apply_delete(&mut menu, "Tea"));
        assert_eq!(menu.len(), 2);
        assert!(!menu.iter().any(|i| i.name == "Tea"));
        assert_eq!(menu[0].name, "Iced Tea");
    }

    #[test]
    fn test_apply_delete_missing_key_is_noop() {
        let mut menu = make_menu();
        let before = menu.clone();
        assert!(!apply_delete(&mut menu, "Burger"));
        assert_eq!(menu, before);
    }

    // ========================
    // Mutation guard
    // ========================

    #[test]
    fn test_second_mutation_on_same_key_rejected() {
        let mut pending = PendingMutations::default();
        assert!(pending.try_begin("Tea"));
        assert!(!pending.try_begin("Tea"));
        assert!(pending.is_pending("Tea"));
    }

    #[test]
    fn test_distinct_keys_may_overlap() {
        let mut pending = PendingMutations::default();
        assert!(pending.try_begin("Tea"));
        assert!(pending.try_begin("Coffee"));
    }

    #[test]
    fn test_key_reusable_after_finish() {
        let mut pending = PendingMutations::default();
        assert!(pending.try_begin("Tea"));
        pending.finish("Tea");
        assert!(!pending.is_pending("Tea"));
        assert!(pending.try_begin("Tea"));
    }
}
