use crate::api;
use crate::models::{AdoptionState, Cat, Page};
use crate::notify;
use crate::pagination::PageState;
use crate::services::cat_service::{self, CatFilter};
use crate::services::ListParams;
use crate::Screen;
use dioxus::prelude::*;
use dioxus_crud_components::{ConfirmDialog, PaginationBar};

use super::cat_form::CatFormModal;

#[component]
pub fn CatsScreen(on_navigate: EventHandler<Screen>) -> Element {
    let mut page = use_signal(Page::<Cat>::empty);
    let mut page_state = use_signal(|| PageState::new(10));
    let mut name_filter = use_signal(String::new);
    let mut state_filter = use_signal(String::new);
    let mut loading = use_signal(|| false);
    // None = closed, Some(None) = create, Some(Some(cat)) = edit
    let mut editing = use_signal(|| None::<Option<Cat>>);
    let mut pending_delete = use_signal(|| None::<Cat>);

    let mut load = move || {
        loading.set(true);
        let ps = *page_state.peek();
        let state_value = state_filter.peek().clone();
        let filter = CatFilter {
            name: Some(name_filter.peek().clone()),
            adoption_state: if state_value.is_empty() {
                None
            } else {
                Some(AdoptionState::from_str(&state_value))
            },
            params: ListParams::page(ps.current_page(), ps.rows).sorted_by("name"),
            ..Default::default()
        };

        spawn(async move {
            match api::connect() {
                Ok(client) => match cat_service::list_cats(&client, &filter).await {
                    Ok(result) => {
                        let mut ps = *page_state.peek();
                        ps.set_total(result.total_elements);
                        page_state.set(ps);
                        page.set(result);
                    }
                    Err(e) => notify::handle_error(&e),
                },
                Err(e) => notify::handle_error(&e),
            }
            loading.set(false);
        });
    };

    // Load on mount
    use_effect(move || {
        load();
    });

    rsx! {
        div { style: "padding: 16px; max-width: 900px; margin: 0 auto; min-height: 100vh; background: #f5f5f5;",

            // Header
            div { style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px; padding-top: 8px;",
                h1 { style: "color: #0066cc; margin: 0; font-size: 24px; font-weight: 700;",
                    "🐱 Cats"
                }
                button {
                    class: "btn-success",
                    style: "padding: 10px 16px; font-size: 16px; font-weight: 500;",
                    onclick: move |_| editing.set(Some(None)),
                    "+ New"
                }
            }

            // Search & Filter
            div { style: "display: flex; gap: 12px; margin: 12px 0 16px;",
                input {
                    style: "flex: 1; padding: 14px 16px; font-size: 16px; border: 2px solid #e0e0e0; border-radius: 10px; background: white;",
                    r#type: "text",
                    placeholder: "🔍 Search by name",
                    value: "{name_filter}",
                    oninput: move |e| {
                        name_filter.set(e.value());
                        let mut ps = *page_state.peek();
                        ps.reset();
                        page_state.set(ps);
                        load();
                    },
                }
                select {
                    class: "input",
                    style: "max-width: 200px;",
                    value: "{state_filter}",
                    onchange: move |e| {
                        state_filter.set(e.value());
                        let mut ps = *page_state.peek();
                        ps.reset();
                        page_state.set(ps);
                        load();
                    },
                    option { value: "", "All states" }
                    for state in AdoptionState::all() {
                        option { value: "{state.as_str()}", "{state.display_name()}" }
                    }
                }
            }

            // Table
            if page().is_empty() {
                div { style: "text-align: center; padding: 40px; color: #999;",
                    if loading() {
                        "Loading..."
                    } else {
                        "No cats found"
                    }
                }
            } else {
                div { class: "card", style: "padding: 0; overflow: hidden;",
                    table { class: "table",
                        thead {
                            tr {
                                th { "" }
                                th { "Name" }
                                th { "Color" }
                                th { "Sex" }
                                th { "Entry" }
                                th { "Status" }
                                th { "" }
                            }
                        }
                        tbody {
                            for cat in page().content {
                                CatRow {
                                    cat: cat.clone(),
                                    on_open: move |id| on_navigate.call(Screen::CatDetail(id)),
                                    on_edit: move |cat: Cat| editing.set(Some(Some(cat))),
                                    on_delete: move |cat: Cat| pending_delete.set(Some(cat)),
                                }
                            }
                        }
                    }
                }

                PaginationBar {
                    page: page_state().current_page(),
                    total_pages: page_state().total_pages(),
                    on_page: move |new_page| {
                        let mut ps = *page_state.peek();
                        ps.go_to_page(new_page);
                        page_state.set(ps);
                        load();
                    },
                }
            }

            // Create/edit modal
            if let Some(initial) = editing() {
                CatFormModal {
                    cat: initial,
                    on_close: move |_| editing.set(None),
                    on_saved: move |_| {
                        editing.set(None);
                        load();
                    },
                }
            }

            // Delete confirmation
            if let Some(cat) = pending_delete() {
                ConfirmDialog {
                    title: "Remove cat",
                    message: format!("Remove {} from the inventory?", cat.name),
                    on_cancel: move |_| pending_delete.set(None),
                    on_confirm: move |_| {
                        pending_delete.set(None);
                        let Some(id) = cat.id else { return };
                        spawn(async move {
                            match api::connect() {
                                Ok(client) => match cat_service::delete_cat(&client, id).await {
                                    Ok(()) => {
                                        notify::success("Cat removed");
                                        let mut ps = *page_state.peek();
                                        ps.record_removed();
                                        page_state.set(ps);
                                        load();
                                    }
                                    Err(e) => notify::handle_error(&e),
                                },
                                Err(e) => notify::handle_error(&e),
                            }
                        });
                    },
                }
            }
        }
    }
}

#[component]
fn CatRow(
    cat: Cat,
    on_open: EventHandler<i64>,
    on_edit: EventHandler<Cat>,
    on_delete: EventHandler<Cat>,
) -> Element {
    let badge_style = match cat.adoption_state {
        AdoptionState::NotAdopted => "background: #e8f5e9; color: #2e7d32;",
        AdoptionState::InProcess => "background: #fff3e0; color: #e65100;",
        AdoptionState::Adopted => "background: #e3f2fd; color: #0066cc;",
    };
    let cat_for_edit = cat.clone();
    let cat_for_delete = cat.clone();

    rsx! {
        tr {
            style: "cursor: pointer;",
            onclick: move |_| {
                if let Some(id) = cat.id {
                    on_open.call(id);
                }
            },
            td {
                if let Some(url) = &cat.photo_url {
                    img {
                        src: "{url}",
                        alt: cat.name.clone(),
                        style: "width: 40px; height: 40px; object-fit: cover; border-radius: 8px;",
                    }
                } else {
                    div { style: "width: 40px; height: 40px; background: #f0f0f0; border-radius: 8px; display: flex; align-items: center; justify-content: center;",
                        "🐱"
                    }
                }
            }
            td { style: "font-weight: 600;", "{cat.name}" }
            td { "{cat.color.display_name()}" }
            td { "{cat.sex.display_name()}" }
            td { {crate::format::format_date(cat.entry_date)} }
            td {
                span { style: format!("padding: 4px 10px; border-radius: 12px; font-size: 12px; font-weight: 600; {}", badge_style),
                    "{cat.adoption_state.display_name()}"
                }
            }
            td {
                button {
                    class: "btn-secondary",
                    style: "padding: 6px 10px; margin-right: 6px;",
                    onclick: move |e: Event<MouseData>| {
                        e.stop_propagation();
                        on_edit.call(cat_for_edit.clone());
                    },
                    "✏️"
                }
                button {
                    class: "btn-danger",
                    style: "padding: 6px 10px;",
                    onclick: move |e: Event<MouseData>| {
                        e.stop_propagation();
                        on_delete.call(cat_for_delete.clone());
                    },
                    "🗑️"
                }
            }
        }
    }
}
