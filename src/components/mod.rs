//! UI Components

mod brand_dashboard;
mod menu_item_row;
mod owner_dashboard;
mod search_bar;
mod shop_detail;

pub use brand_dashboard::{BrandDashboard, BrandOutletDashboard};
pub use menu_item_row::MenuItemRow;
pub use owner_dashboard::OwnerDashboard;
pub use search_bar::SearchBar;
pub use shop_detail::ShopDetail;
