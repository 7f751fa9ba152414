use crate::api;
use crate::format;
use crate::models::{Adopter, Page};
use crate::notify;
use crate::pagination::PageState;
use crate::services::adopter_service::{self, AdopterFilter};
use crate::services::ListParams;
use dioxus::prelude::*;
use dioxus_crud_components::{ConfirmDialog, PaginationBar};

use super::adopter_form::AdopterFormModal;

#[component]
pub fn AdoptersScreen() -> Element {
    let mut page = use_signal(Page::<Adopter>::empty);
    let mut page_state = use_signal(|| PageState::new(10));
    let mut name_filter = use_signal(String::new);
    let mut city_filter = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut editing = use_signal(|| None::<Option<Adopter>>);
    let mut pending_delete = use_signal(|| None::<Adopter>);

    let mut load = move || {
        loading.set(true);
        let ps = *page_state.peek();
        let filter = AdopterFilter {
            name: Some(name_filter.peek().clone()),
            city: Some(city_filter.peek().clone()),
            cpf: None,
            params: ListParams::page(ps.current_page(), ps.rows).sorted_by("lastName"),
        };

        spawn(async move {
            match api::connect() {
                Ok(client) => match adopter_service::list_adopters(&client, &filter).await {
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

            div { style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px; padding-top: 8px;",
                h1 { style: "color: #0066cc; margin: 0; font-size: 24px; font-weight: 700;",
                    "👤 Adopters"
                }
                button {
                    class: "btn-success",
                    style: "padding: 10px 16px; font-size: 16px; font-weight: 500;",
                    onclick: move |_| editing.set(Some(None)),
                    "+ New"
                }
            }

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
                input {
                    style: "flex: 1; padding: 14px 16px; font-size: 16px; border: 2px solid #e0e0e0; border-radius: 10px; background: white;",
                    r#type: "text",
                    placeholder: "City",
                    value: "{city_filter}",
                    oninput: move |e| {
                        city_filter.set(e.value());
                        let mut ps = *page_state.peek();
                        ps.reset();
                        page_state.set(ps);
                        load();
                    },
                }
            }

            if page().is_empty() {
                div { style: "text-align: center; padding: 40px; color: #999;",
                    if loading() {
                        "Loading..."
                    } else {
                        "No adopters found"
                    }
                }
            } else {
                div { class: "card", style: "padding: 0; overflow: hidden;",
                    table { class: "table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "CPF" }
                                th { "Phone" }
                                th { "Email" }
                                th { "City" }
                                th { "" }
                            }
                        }
                        tbody {
                            for adopter in page().content {
                                {
                                    let adopter_for_edit = adopter.clone();
                                    let adopter_for_delete = adopter.clone();
                                    rsx! {
                                        tr {
                                            td { style: "font-weight: 600;", "{adopter.full_name()}" }
                                            td { {format::format_cpf(&adopter.cpf)} }
                                            td { {format::format_phone(&adopter.phone)} }
                                            td { "{adopter.email}" }
                                            td { "{adopter.address.city}/{adopter.address.state}" }
                                            td {
                                                button {
                                                    class: "btn-secondary",
                                                    style: "padding: 6px 10px; margin-right: 6px;",
                                                    onclick: move |_| editing.set(Some(Some(adopter_for_edit.clone()))),
                                                    "✏️"
                                                }
                                                button {
                                                    class: "btn-danger",
                                                    style: "padding: 6px 10px;",
                                                    onclick: move |_| pending_delete.set(Some(adopter_for_delete.clone())),
                                                    "🗑️"
                                                }
                                            }
                                        }
                                    }
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

            if let Some(initial) = editing() {
                AdopterFormModal {
                    adopter: initial,
                    on_close: move |_| editing.set(None),
                    on_saved: move |_| {
                        editing.set(None);
                        load();
                    },
                }
            }

            if let Some(adopter) = pending_delete() {
                ConfirmDialog {
                    title: "Remove adopter",
                    message: format!("Remove {} from the registry?", adopter.full_name()),
                    on_cancel: move |_| pending_delete.set(None),
                    on_confirm: move |_| {
                        pending_delete.set(None);
                        let Some(id) = adopter.id else { return };
                        spawn(async move {
                            match api::connect() {
                                Ok(client) => {
                                    match adopter_service::delete_adopter(&client, id).await {
                                        Ok(()) => {
                                            notify::success("Adopter removed");
                                            let mut ps = *page_state.peek();
                                            ps.record_removed();
                                            page_state.set(ps);
                                            load();
                                        }
                                        Err(e) => notify::handle_error(&e),
                                    }
                                }
                                Err(e) => notify::handle_error(&e),
                            }
                        });
                    },
                }
            }
        }
    }
}
