//! Shop Detail Screen
//!
//! Owns one shop's menu list and the inline edit session. Fetches the shop
//! keyed by the `:id` route param, filters rows by the search query, and
//! patches local state only after the backend confirms a mutation.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use crate::api;
use crate::components::{MenuItemRow, SearchBar};
use crate::context::use_api;
use crate::models::Shop;
use crate::session::{
    apply_delete, apply_update, filter_menu_items, EditSession, PendingMutations,
};

#[component]
pub fn ShopDetail() -> impl IntoView {
    let api_ctx = use_api();
    let params = use_params_map();
    let shop_id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));

    let (shop, set_shop) = signal::<Option<Shop>>(None);
    let (load_failed, set_load_failed) = signal(false);
    let (retry_trigger, set_retry_trigger) = signal(0u32);
    let (query, set_query) = signal(String::new());
    let (session, set_session) = signal(EditSession::Idle);
    let (notice, set_notice) = signal::<Option<String>>(None);
    // In-flight save/delete keys; not reactive state
    let pending = StoredValue::new(PendingMutations::default());

    // Transient mutation-failure notice, auto-dismissed
    let show_notice = move |message: String| {
        set_notice.set(Some(message));
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(4_000).await;
            set_notice.set(None);
        });
    };

    // Fetch once per distinct id; re-runs only when the id changes or the
    // operator retries a failed load
    let fetch_base = api_ctx.base_url.clone();
    Effect::new(move |_| {
        let _ = retry_trigger.get();
        let id = shop_id.get();
        if id.is_empty() {
            return;
        }
        let base = fetch_base.clone();
        set_shop.set(None);
        set_load_failed.set(false);
        set_session.set(EditSession::Idle);
        spawn_local(async move {
            match api::fetch_shop(&base, &id).await {
                Ok(loaded) => set_shop.set(Some(loaded)),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[ShopDetail] Failed to load shop {}: {}", id, e).into(),
                    );
                    set_load_failed.set(true);
                }
            }
        });
    });

    // Persist the active draft. The list is patched only on confirmed
    // success; on failure the session stays open with the draft intact.
    let save_base = api_ctx.base_url.clone();
    let save_item = Callback::new(move |_: ()| {
        let Some(request) =
            session.with_untracked(|s| s.save_request(&shop_id.get_untracked()))
        else {
            return;
        };
        let begun = pending
            .try_update_value(|p| p.try_begin(&request.original_name))
            .unwrap_or(false);
        if !begun {
            web_sys::console::warn_1(
                &format!(
                    "[ShopDetail] Mutation already in flight for {}, save ignored",
                    request.original_name
                )
                .into(),
            );
            return;
        }
        let base = save_base.clone();
        spawn_local(async move {
            let result = api::update_menu_item(
                &base,
                &request.shop_id,
                &request.original_name,
                &request.draft.to_update_body(),
            )
            .await;
            pending.update_value(|p| p.finish(&request.original_name));
            match result {
                Ok(()) => {
                    set_shop.update(|shop| {
                        if let Some(shop) = shop {
                            apply_update(&mut shop.menu_items, &request.original_name, &request.draft);
                        }
                    });
                    set_session.set(EditSession::Idle);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!(
                            "[ShopDetail] Error updating menu item {}: {}",
                            request.original_name, e
                        )
                        .into(),
                    );
                    show_notice(format!("Could not save \"{}\"", request.draft.name));
                }
            }
        });
    });

    // Delete by name key; not available for the row being edited
    let delete_base = api_ctx.base_url.clone();
    let delete_item = Callback::new(move |name: String| {
        if session.with_untracked(|s| s.is_editing(&name)) {
            return;
        }
        let begun = pending
            .try_update_value(|p| p.try_begin(&name))
            .unwrap_or(false);
        if !begun {
            web_sys::console::warn_1(
                &format!("[ShopDetail] Mutation already in flight for {}, delete ignored", name)
                    .into(),
            );
            return;
        }
        let base = delete_base.clone();
        let id = shop_id.get_untracked();
        spawn_local(async move {
            let result = api::delete_menu_item(&base, &id, &name).await;
            pending.update_value(|p| p.finish(&name));
            match result {
                Ok(()) => {
                    set_shop.update(|shop| {
                        if let Some(shop) = shop {
                            apply_delete(&mut shop.menu_items, &name);
                        }
                    });
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[ShopDetail] Error deleting menu item {}: {}", name, e).into(),
                    );
                    show_notice(format!("Could not delete \"{}\"", name));
                }
            }
        });
    });

    view! {
        <div class="shop-detail">
            <h2 class="screen-heading">"Shop Details"</h2>
            {move || notice.get().map(|message| view! { <div class="mutation-notice">{message}</div> })}
            {move || match shop.get() {
                Some(shop_record) => {
                    let shop_name = shop_record.name.clone();
                    let image_alt = shop_record.name.clone();
                    let image_url = shop_record.image_url.clone();
                    let menu_items = shop_record.menu_items;
                    let count_items = menu_items.clone();
                    view! {
                        <div class="shop-card">
                            <h3 class="shop-name">{shop_name}</h3>
                            <img class="shop-image" src=image_url alt=image_alt/>
                            <SearchBar query=query set_query=set_query/>
                            <ul class="menu-list">
                                <For
                                    each=move || filter_menu_items(&menu_items, &query.get())
                                    key=|item| item.name.clone()
                                    children=move |item| view! {
                                        <MenuItemRow
                                            item=item
                                            session=session
                                            set_session=set_session
                                            on_save=save_item
                                            on_delete=delete_item
                                        />
                                    }
                                />
                            </ul>
                            <p class="item-count">{move || {
                                let shown = filter_menu_items(&count_items, &query.get()).len();
                                format!("{} of {} menu items", shown, count_items.len())
                            }}</p>
                        </div>
                    }.into_any()
                }
                None => {
                    if load_failed.get() {
                        view! {
                            <div class="load-error">
                                <p>"Failed to load shop details."</p>
                                <button
                                    class="retry-btn"
                                    on:click=move |_| set_retry_trigger.update(|v| *v += 1)
                                >
                                    "Retry"
                                </button>
                            </div>
                        }.into_any()
                    } else {
                        view! { <p class="loading">"Loading..."</p> }.into_any()
                    }
                }
            }}
        </div>
    }
}
