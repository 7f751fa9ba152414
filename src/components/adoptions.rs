use crate::api;
use crate::enrichment::{extract_unique_ids, EntityCache};
use crate::format;
use crate::models::{Adopter, Adoption, AdoptionStatus, Cat, Page};
use crate::notify;
use crate::pagination::PageState;
use crate::services::adoption_service::{self, AdoptionFilter};
use crate::services::{adopter_service, cat_service, ListParams};
use dioxus::prelude::*;
use dioxus_crud_components::{ConfirmDialog, PaginationBar};

use super::adoption_form::AdoptionFormModal;

#[component]
pub fn AdoptionsScreen() -> Element {
    let mut page = use_signal(Page::<Adoption>::empty);
    let mut page_state = use_signal(|| PageState::new(10));
    let mut status_filter = use_signal(String::new);
    let mut loading = use_signal(|| false);
    // Caches live for the screen's lifetime; ids resolved once per visit
    let mut cat_cache = use_signal(EntityCache::<i64, Cat>::new);
    let mut adopter_cache = use_signal(EntityCache::<i64, Adopter>::new);
    // Outstanding lookups; rows show placeholders while > 0
    let mut pending_lookups = use_signal(|| 0usize);
    let mut editing = use_signal(|| None::<Option<Adoption>>);
    let mut pending_delete = use_signal(|| None::<Adoption>);

    // Resolve the cat/adopter ids referenced by the page. Rows where
    // the backend embedded the entity seed the caches without a fetch;
    // the rest fan out one request per distinct missing id. A failed
    // lookup only leaves its own row on the fallback.
    let mut enrich = move |rows: Vec<Adoption>| {
        for row in &rows {
            if let Some(cat) = &row.cat {
                cat_cache.write().insert(row.cat_id, cat.clone());
            }
            if let Some(adopter) = &row.adopter {
                adopter_cache.write().insert(row.adopter_id, adopter.clone());
            }
        }

        let wanted_cats = extract_unique_ids(&rows, |a| Some(a.cat_id));
        let missing_cats = cat_cache.peek().missing_from(&wanted_cats);
        let wanted_adopters = extract_unique_ids(&rows, |a| Some(a.adopter_id));
        let missing_adopters = adopter_cache.peek().missing_from(&wanted_adopters);

        pending_lookups.set(missing_cats.len() + missing_adopters.len());

        for id in missing_cats {
            spawn(async move {
                match api::connect() {
                    Ok(client) => match cat_service::get_cat(&client, id).await {
                        Ok(cat) => {
                            cat_cache.write().insert(id, cat);
                        }
                        Err(e) => log::warn!("Cat lookup {} failed: {}", id, e),
                    },
                    Err(e) => log::warn!("Cat lookup {} failed: {}", id, e),
                }
                let remaining = pending_lookups.peek().saturating_sub(1);
                pending_lookups.set(remaining);
            });
        }
        for id in missing_adopters {
            spawn(async move {
                match api::connect() {
                    Ok(client) => match adopter_service::get_adopter(&client, id).await {
                        Ok(adopter) => {
                            adopter_cache.write().insert(id, adopter);
                        }
                        Err(e) => log::warn!("Adopter lookup {} failed: {}", id, e),
                    },
                    Err(e) => log::warn!("Adopter lookup {} failed: {}", id, e),
                }
                let remaining = pending_lookups.peek().saturating_sub(1);
                pending_lookups.set(remaining);
            });
        }
    };

    let mut load = move || {
        loading.set(true);
        let ps = *page_state.peek();
        let status_value = status_filter.peek().clone();
        let filter = AdoptionFilter {
            status: if status_value.is_empty() {
                None
            } else {
                Some(AdoptionStatus::from_str(&status_value))
            },
            params: ListParams::page(ps.current_page(), ps.rows)
                .sorted_by("adoptionDate")
                .descending(),
            ..Default::default()
        };

        spawn(async move {
            match api::connect() {
                Ok(client) => match adoption_service::list_adoptions(&client, &filter).await {
                    Ok(result) => {
                        let mut ps = *page_state.peek();
                        ps.set_total(result.total_elements);
                        page_state.set(ps);
                        enrich(result.content.clone());
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

    // Display helpers fall back to "-" for ids that never resolved
    let cat_name = move |row: &Adoption| -> String {
        if let Some(cat) = &row.cat {
            return cat.name.clone();
        }
        cat_cache
            .read()
            .get(&row.cat_id)
            .map(|cat| cat.name.clone())
            .unwrap_or_else(|| "-".to_string())
    };
    let adopter_name = move |row: &Adoption| -> String {
        if let Some(adopter) = &row.adopter {
            return adopter.full_name();
        }
        adopter_cache
            .read()
            .get(&row.adopter_id)
            .map(|adopter| adopter.full_name())
            .unwrap_or_else(|| "-".to_string())
    };

    rsx! {
        div { style: "padding: 16px; max-width: 900px; margin: 0 auto; min-height: 100vh; background: #f5f5f5;",

            div { style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px; padding-top: 8px;",
                h1 { style: "color: #0066cc; margin: 0; font-size: 24px; font-weight: 700;",
                    "📋 Adoptions"
                }
                button {
                    class: "btn-success",
                    style: "padding: 10px 16px; font-size: 16px; font-weight: 500;",
                    onclick: move |_| editing.set(Some(None)),
                    "+ New"
                }
            }

            div { style: "display: flex; gap: 12px; align-items: center; margin: 12px 0 16px;",
                select {
                    class: "input",
                    style: "max-width: 220px;",
                    value: "{status_filter}",
                    onchange: move |e| {
                        status_filter.set(e.value());
                        let mut ps = *page_state.peek();
                        ps.reset();
                        page_state.set(ps);
                        load();
                    },
                    option { value: "", "All statuses" }
                    for status in AdoptionStatus::all() {
                        option { value: "{status.as_str()}", "{status.display_name()}" }
                    }
                }
                if pending_lookups() > 0 {
                    span { style: "font-size: 13px; color: #999;", "🔄 Resolving names..." }
                }
            }

            if page().is_empty() {
                div { style: "text-align: center; padding: 40px; color: #999;",
                    if loading() {
                        "Loading..."
                    } else {
                        "No adoptions found"
                    }
                }
            } else {
                div { class: "card", style: "padding: 0; overflow: hidden;",
                    table { class: "table",
                        thead {
                            tr {
                                th { "Cat" }
                                th { "Adopter" }
                                th { "Date" }
                                th { "Status" }
                                th { "Term" }
                                th { "" }
                            }
                        }
                        tbody {
                            for adoption in page().content {
                                {
                                    let row_cat = cat_name(&adoption);
                                    let row_adopter = adopter_name(&adoption);
                                    let adoption_for_edit = adoption.clone();
                                    let adoption_for_delete = adoption.clone();
                                    let badge_style = match adoption.status {
                                        AdoptionStatus::Pending => "background: #fff3e0; color: #e65100;",
                                        AdoptionStatus::Completed => "background: #e8f5e9; color: #2e7d32;",
                                        AdoptionStatus::Canceled => "background: #fbe9e7; color: #c62828;",
                                    };
                                    rsx! {
                                        tr {
                                            td { style: "font-weight: 600;", "{row_cat}" }
                                            td { "{row_adopter}" }
                                            td { {format::format_date(adoption.adoption_date)} }
                                            td {
                                                span { style: format!("padding: 4px 10px; border-radius: 12px; font-size: 12px; font-weight: 600; {}", badge_style),
                                                    "{adoption.status.display_name()}"
                                                }
                                            }
                                            td {
                                                if adoption.term_photo_url.is_some() {
                                                    "📄"
                                                } else {
                                                    "-"
                                                }
                                            }
                                            td {
                                                button {
                                                    class: "btn-secondary",
                                                    style: "padding: 6px 10px; margin-right: 6px;",
                                                    onclick: move |_| editing.set(Some(Some(adoption_for_edit.clone()))),
                                                    "✏️"
                                                }
                                                button {
                                                    class: "btn-danger",
                                                    style: "padding: 6px 10px;",
                                                    onclick: move |_| pending_delete.set(Some(adoption_for_delete.clone())),
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
                AdoptionFormModal {
                    adoption: initial,
                    on_close: move |_| editing.set(None),
                    on_saved: move |_| {
                        editing.set(None);
                        load();
                    },
                }
            }

            if let Some(adoption) = pending_delete() {
                ConfirmDialog {
                    title: "Remove adoption",
                    message: "Remove this adoption record?".to_string(),
                    on_cancel: move |_| pending_delete.set(None),
                    on_confirm: move |_| {
                        pending_delete.set(None);
                        let Some(id) = adoption.id else { return };
                        spawn(async move {
                            match api::connect() {
                                Ok(client) => {
                                    match adoption_service::delete_adoption(&client, id).await {
                                        Ok(()) => {
                                            notify::success("Adoption removed");
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
