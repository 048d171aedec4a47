//! Menu Item Row Component
//!
//! One list row: read mode with Edit/Delete actions, or the inline edit form
//! bound to the active draft.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::MenuItem;
use crate::session::{Draft, EditSession};

/// Read signal and write callback for one draft field. Writes are dropped
/// when the session is not editing.
fn draft_binding(
    session: ReadSignal<EditSession>,
    set_session: WriteSignal<EditSession>,
    get: fn(&Draft) -> &str,
    set: fn(&mut Draft, String),
) -> (Signal<String>, Callback<String>) {
    let value = Signal::derive(move || {
        session.with(|s| match s {
            EditSession::Editing { draft, .. } => get(draft).to_string(),
            EditSession::Idle => String::new(),
        })
    });
    let on_input = Callback::new(move |v: String| {
        set_session.update(|s| {
            if let EditSession::Editing { draft, .. } = s {
                set(draft, v);
            }
        });
    });
    (value, on_input)
}

/// Menu list row
///
/// Props:
/// - item: the confirmed server state for this row
/// - session / set_session: the shared edit session (one draft across the list)
/// - on_save: called when the active draft should be persisted
/// - on_delete: called with the row's name key
#[component]
pub fn MenuItemRow(
    item: MenuItem,
    session: ReadSignal<EditSession>,
    set_session: WriteSignal<EditSession>,
    #[prop(into)] on_save: Callback<()>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    let row_name = item.name.clone();
    let editing = {
        let name = row_name.clone();
        move || session.with(|s| s.is_editing(&name))
    };
    let not_editing = {
        let is_editing = editing.clone();
        move || !is_editing()
    };

    let (name_value, set_name) = draft_binding(
        session,
        set_session,
        |d: &Draft| d.name.as_str(),
        |d, v| d.name = v,
    );
    let (description_value, set_description) = draft_binding(
        session,
        set_session,
        |d: &Draft| d.description.as_str(),
        |d, v| d.description = v,
    );
    let (link_value, set_link) = draft_binding(
        session,
        set_session,
        |d: &Draft| d.link.as_str(),
        |d, v| d.link = v,
    );
    let (image_value, set_image) = draft_binding(
        session,
        set_session,
        |d: &Draft| d.image.as_str(),
        |d, v| d.image = v,
    );

    let begin_item = item.clone();
    let begin_edit = Callback::new(move |_: ()| set_session.set(EditSession::begin(&begin_item)));
    let cancel_edit = Callback::new(move |_: ()| {
        set_session.update(|s| *s = std::mem::take(s).cancel());
    });
    let delete_name = row_name.clone();
    let request_delete = Callback::new(move |_: ()| on_delete.run(delete_name.clone()));

    let summary = format!(
        "{} - {} - {} - {}",
        item.name, item.description, item.link, item.image
    );

    view! {
        <li class="menu-item-row">
            <div class="menu-item-text">
                <span class="menu-item-summary">{summary}</span>
            </div>
            <div class="menu-item-actions">
                <Show when=not_editing>
                    <button class="edit-btn" on:click=move |_| begin_edit.run(())>"Edit"</button>
                    <button class="delete-btn" on:click=move |_| request_delete.run(())>"Delete"</button>
                </Show>
                <Show when=editing.clone()>
                    <DraftField placeholder="name" value=name_value on_input=set_name/>
                    <DraftField placeholder="description" value=description_value on_input=set_description/>
                    <DraftField placeholder="link" value=link_value on_input=set_link/>
                    <DraftField placeholder="image" value=image_value on_input=set_image/>
                    <button class="save-btn" on:click=move |_| on_save.run(())>"Save"</button>
                    <button class="cancel-btn" on:click=move |_| cancel_edit.run(())>"Cancel"</button>
                </Show>
            </div>
        </li>
    }
}

/// One text input bound to a draft field
#[component]
fn DraftField(
    placeholder: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <input
            type="text"
            class="draft-input"
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| {
                let target = ev.target().unwrap();
                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                on_input.run(input.value());
            }
        />
    }
}
