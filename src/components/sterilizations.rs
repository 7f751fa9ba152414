use crate::api;
use crate::enrichment::{batch_resolve, extract_unique_ids, EntityCache};
use crate::format;
use crate::models::{Cat, Page, Sterilization, SterilizationStatus};
use crate::notify;
use crate::pagination::PageState;
use crate::services::sterilization_service::{self, SterilizationFilter};
use crate::services::{cat_service, ListParams};
use dioxus::prelude::*;
use dioxus_crud_components::{ConfirmDialog, PaginationBar};
use std::sync::Arc;

use super::sterilization_form::SterilizationFormModal;

#[component]
pub fn SterilizationsScreen() -> Element {
    let mut page = use_signal(Page::<Sterilization>::empty);
    let mut page_state = use_signal(|| PageState::new(10));
    let mut status_filter = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut cat_cache = use_signal(EntityCache::<i64, Cat>::new);
    let mut resolving = use_signal(|| false);
    let mut show_form = use_signal(|| false);
    let mut pending_delete = use_signal(|| None::<Sterilization>);

    // Resolve cat names for the page in one batched fan-out; ids the
    // backend embedded or a previous page already resolved are skipped.
    let mut enrich = move |rows: Vec<Sterilization>| {
        for row in &rows {
            if let Some(cat) = &row.cat {
                cat_cache.write().insert(row.cat_id, cat.clone());
            }
        }
        let wanted = extract_unique_ids(&rows, |s| Some(s.cat_id));
        let missing = cat_cache.peek().missing_from(&wanted);
        if missing.is_empty() {
            return;
        }

        resolving.set(true);
        spawn(async move {
            match api::connect() {
                Ok(client) => {
                    let client = Arc::new(client);
                    let resolved = batch_resolve(missing, |id| {
                        let client = Arc::clone(&client);
                        async move { cat_service::get_cat(&client, id).await }
                    })
                    .await;
                    cat_cache.write().extend(resolved);
                }
                Err(e) => notify::handle_error(&e),
            }
            resolving.set(false);
        });
    };

    let mut load = move || {
        loading.set(true);
        let ps = *page_state.peek();
        let status_value = status_filter.peek().clone();
        let filter = SterilizationFilter {
            status: if status_value.is_empty() {
                None
            } else {
                Some(SterilizationStatus::from_str(&status_value))
            },
            cat_id: None,
            params: ListParams::page(ps.current_page(), ps.rows).sorted_by("scheduledDate"),
        };

        spawn(async move {
            match api::connect() {
                Ok(client) => {
                    match sterilization_service::list_sterilizations(&client, &filter).await {
                        Ok(result) => {
                            let mut ps = *page_state.peek();
                            ps.set_total(result.total_elements);
                            page_state.set(ps);
                            enrich(result.content.clone());
                            page.set(result);
                        }
                        Err(e) => notify::handle_error(&e),
                    }
                }
                Err(e) => notify::handle_error(&e),
            }
            loading.set(false);
        });
    };

    // Load on mount
    use_effect(move || {
        load();
    });

    // Marks a scheduled record as performed today
    let mut complete = move |record: Sterilization| {
        let mut record = record;
        record.status = SterilizationStatus::Completed;
        record.performed_date = Some(chrono::Local::now().date_naive());
        spawn(async move {
            match api::connect() {
                Ok(client) => {
                    match sterilization_service::update_sterilization(&client, &record).await {
                        Ok(_) => {
                            notify::success("Sterilization completed");
                            load();
                        }
                        Err(e) => notify::handle_error(&e),
                    }
                }
                Err(e) => notify::handle_error(&e),
            }
        });
    };

    let mut cancel = move |record: Sterilization| {
        let mut record = record;
        record.status = SterilizationStatus::Canceled;
        spawn(async move {
            match api::connect() {
                Ok(client) => {
                    match sterilization_service::update_sterilization(&client, &record).await {
                        Ok(_) => {
                            notify::success("Sterilization canceled");
                            load();
                        }
                        Err(e) => notify::handle_error(&e),
                    }
                }
                Err(e) => notify::handle_error(&e),
            }
        });
    };

    let cat_name = move |row: &Sterilization| -> String {
        if let Some(cat) = &row.cat {
            return cat.name.clone();
        }
        cat_cache
            .read()
            .get(&row.cat_id)
            .map(|cat| cat.name.clone())
            .unwrap_or_else(|| "-".to_string())
    };

    rsx! {
        div { style: "padding: 16px; max-width: 900px; margin: 0 auto; min-height: 100vh; background: #f5f5f5;",

            div { style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px; padding-top: 8px;",
                h1 { style: "color: #0066cc; margin: 0; font-size: 24px; font-weight: 700;",
                    "🏥 Sterilizations"
                }
                button {
                    class: "btn-success",
                    style: "padding: 10px 16px; font-size: 16px; font-weight: 500;",
                    onclick: move |_| show_form.set(true),
                    "+ Schedule"
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
                    for status in SterilizationStatus::all() {
                        option { value: "{status.as_str()}", "{status.display_name()}" }
                    }
                }
                if resolving() {
                    span { style: "font-size: 13px; color: #999;", "🔄 Resolving names..." }
                }
            }

            if page().is_empty() {
                div { style: "text-align: center; padding: 40px; color: #999;",
                    if loading() {
                        "Loading..."
                    } else {
                        "No sterilizations found"
                    }
                }
            } else {
                div { class: "card", style: "padding: 0; overflow: hidden;",
                    table { class: "table",
                        thead {
                            tr {
                                th { "Cat" }
                                th { "Scheduled" }
                                th { "Performed" }
                                th { "Status" }
                                th { "Notes" }
                                th { "" }
                            }
                        }
                        tbody {
                            for record in page().content {
                                {
                                    let row_cat = cat_name(&record);
                                    let record_for_complete = record.clone();
                                    let record_for_cancel = record.clone();
                                    let record_for_delete = record.clone();
                                    let is_scheduled = record.status == SterilizationStatus::Scheduled;
                                    let badge_style = match record.status {
                                        SterilizationStatus::Scheduled => "background: #ede7f6; color: #5e35b1;",
                                        SterilizationStatus::Completed => "background: #e8f5e9; color: #2e7d32;",
                                        SterilizationStatus::Canceled => "background: #fbe9e7; color: #c62828;",
                                    };
                                    rsx! {
                                        tr {
                                            td { style: "font-weight: 600;", "{row_cat}" }
                                            td { {format::format_date(record.scheduled_date)} }
                                            td {
                                                if let Some(date) = record.performed_date {
                                                    {format::format_date(date)}
                                                } else {
                                                    "-"
                                                }
                                            }
                                            td {
                                                span { style: format!("padding: 4px 10px; border-radius: 12px; font-size: 12px; font-weight: 600; {}", badge_style),
                                                    "{record.status.display_name()}"
                                                }
                                            }
                                            td { style: "max-width: 200px; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                                                "{record.notes.clone().unwrap_or_default()}"
                                            }
                                            td { style: "white-space: nowrap;",
                                                if is_scheduled {
                                                    button {
                                                        class: "btn-success",
                                                        style: "padding: 6px 10px; margin-right: 6px;",
                                                        title: "Mark performed today",
                                                        onclick: move |_| complete(record_for_complete.clone()),
                                                        "✔"
                                                    }
                                                    button {
                                                        class: "btn-secondary",
                                                        style: "padding: 6px 10px; margin-right: 6px;",
                                                        title: "Cancel",
                                                        onclick: move |_| cancel(record_for_cancel.clone()),
                                                        "✖"
                                                    }
                                                }
                                                button {
                                                    class: "btn-danger",
                                                    style: "padding: 6px 10px;",
                                                    onclick: move |_| pending_delete.set(Some(record_for_delete.clone())),
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

            if show_form() {
                SterilizationFormModal {
                    on_close: move |_| show_form.set(false),
                    on_saved: move |_| {
                        show_form.set(false);
                        load();
                    },
                }
            }

            if let Some(record) = pending_delete() {
                ConfirmDialog {
                    title: "Remove sterilization",
                    message: "Remove this sterilization record?".to_string(),
                    on_cancel: move |_| pending_delete.set(None),
                    on_confirm: move |_| {
                        pending_delete.set(None);
                        let Some(id) = record.id else { return };
                        spawn(async move {
                            match api::connect() {
                                Ok(client) => {
                                    match sterilization_service::delete_sterilization(&client, id)
                                        .await
                                    {
                                        Ok(()) => {
                                            notify::success("Sterilization removed");
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
