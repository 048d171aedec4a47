//! Wire Models
//!
//! Data structures matching the shop backend's REST payloads.

use serde::{Deserialize, Serialize};

/// Shop record as returned by `GET /shops/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    pub id: String,
    pub name: String,
    pub image_url: String,
    /// Backend insertion order; item names are assumed unique but not enforced here
    pub menu_items: Vec<MenuItem>,
}

/// A single sellable menu entry; `name` is the key the backend expects for
/// update and delete calls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub link: String,
    pub image: String,
    pub description: String,
}

/// Body of `PUT /shops/update-menu-item/{id}/{name}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMenuItemBody {
    pub new_name: String,
    pub new_link: String,
    pub new_image: String,
    pub new_description: String,
}

/// Body of update/delete responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationOutcome {
    pub success: bool,
}
