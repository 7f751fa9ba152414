use crate::api;
use crate::format;
use crate::models::{Cat, Note, Sterilization};
use crate::notify;
use crate::services::sterilization_service::SterilizationFilter;
use crate::services::{cat_service, note_service, sterilization_service, ListParams};
use crate::Screen;
use dioxus::prelude::*;

use super::sterilization_form::SterilizationFormModal;

#[component]
pub fn CatDetailScreen(cat_id: i64, on_navigate: EventHandler<Screen>) -> Element {
    let mut cat = use_signal(|| None::<Cat>);
    let mut notes = use_signal(Vec::<Note>::new);
    let mut history = use_signal(Vec::<Sterilization>::new);
    let mut note_text = use_signal(String::new);
    let mut note_submitted = use_signal(|| false);
    let mut show_schedule = use_signal(|| false);

    let mut load_cat = move || {
        spawn(async move {
            match api::connect() {
                Ok(client) => match cat_service::get_cat(&client, cat_id).await {
                    Ok(record) => cat.set(Some(record)),
                    Err(e) => notify::handle_error(&e),
                },
                Err(e) => notify::handle_error(&e),
            }
        });
    };

    let mut load_notes = move || {
        spawn(async move {
            match api::connect() {
                Ok(client) => match note_service::list_notes(&client, cat_id).await {
                    Ok(list) => notes.set(list),
                    Err(e) => notify::handle_error(&e),
                },
                Err(e) => notify::handle_error(&e),
            }
        });
    };

    let mut load_history = move || {
        spawn(async move {
            match api::connect() {
                Ok(client) => {
                    let filter = SterilizationFilter {
                        cat_id: Some(cat_id),
                        params: ListParams::page(0, 50).sorted_by("scheduledDate"),
                        ..Default::default()
                    };
                    match sterilization_service::list_sterilizations(&client, &filter).await {
                        Ok(result) => history.set(result.content),
                        Err(e) => notify::handle_error(&e),
                    }
                }
                Err(e) => notify::handle_error(&e),
            }
        });
    };

    // The three widgets load independently on mount
    use_effect(move || {
        load_cat();
        load_notes();
        load_history();
    });

    let note_error = if note_text().trim().is_empty() {
        Some("Note must not be empty".to_string())
    } else {
        None
    };

    let mut add_note = move |_| {
        note_submitted.set(true);
        let text = note_text.peek().trim().to_string();
        if text.is_empty() {
            return;
        }
        let note = Note::new(cat_id, chrono::Local::now().date_naive(), text);
        spawn(async move {
            match api::connect() {
                Ok(client) => match note_service::create_note(&client, &note).await {
                    Ok(_) => {
                        note_text.set(String::new());
                        note_submitted.set(false);
                        notify::success("Note added");
                        load_notes();
                    }
                    Err(e) => notify::handle_error(&e),
                },
                Err(e) => notify::handle_error(&e),
            }
        });
    };

    let mut remove_note = move |note_id: i64| {
        spawn(async move {
            match api::connect() {
                Ok(client) => match note_service::delete_note(&client, note_id).await {
                    Ok(()) => {
                        notify::success("Note removed");
                        load_notes();
                    }
                    Err(e) => notify::handle_error(&e),
                },
                Err(e) => notify::handle_error(&e),
            }
        });
    };

    rsx! {
        div { style: "padding: 16px; max-width: 700px; margin: 0 auto; min-height: 100vh; background: #f5f5f5;",

            // Header
            div { style: "display: flex; align-items: center; margin-bottom: 24px;",
                button {
                    class: "btn-secondary",
                    style: "margin-right: 12px; padding: 8px 16px;",
                    onclick: move |_| on_navigate.call(Screen::Cats),
                    "← Back"
                }
                h1 { style: "color: #0066cc; font-size: 24px; font-weight: 700; margin: 0;",
                    if let Some(record) = cat() {
                        "🐱 {record.name}"
                    } else {
                        "🐱 ..."
                    }
                }
            }

            // Profile card
            if let Some(record) = cat() {
                div { class: "card", style: "margin-bottom: 16px;",
                    div { style: "display: flex; gap: 16px; align-items: flex-start;",
                        if let Some(url) = record.photo_url.clone() {
                            img {
                                src: url,
                                alt: record.name.clone(),
                                style: "width: 120px; height: 120px; object-fit: cover; border-radius: 12px;",
                            }
                        } else {
                            div { style: "width: 120px; height: 120px; background: #f0f0f0; border-radius: 12px; display: flex; align-items: center; justify-content: center; font-size: 48px;",
                                "🐱"
                            }
                        }
                        div { style: "flex: 1;",
                            DetailField { label: "Color", value: record.color.display_name().to_string() }
                            DetailField { label: "Sex", value: record.sex.display_name().to_string() }
                            DetailField {
                                label: "Birth date",
                                value: record
                                    .birth_date
                                    .map(format::format_date)
                                    .unwrap_or_else(|| "-".to_string()),
                            }
                            DetailField {
                                label: "Shelter entry",
                                value: format::format_date(record.entry_date),
                            }
                            DetailField {
                                label: "Status",
                                value: record.adoption_state.display_name().to_string(),
                            }
                        }
                    }
                }
            }

            // Sterilization history
            div { class: "card", style: "margin-bottom: 16px;",
                div { style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px;",
                    h2 { style: "margin: 0; font-size: 18px; color: #333;", "🏥 Sterilizations" }
                    button {
                        class: "btn-primary",
                        style: "padding: 8px 12px; font-size: 14px;",
                        onclick: move |_| show_schedule.set(true),
                        "+ Schedule"
                    }
                }
                if history().is_empty() {
                    p { style: "color: #999; font-size: 14px; margin: 0;", "No sterilizations recorded" }
                } else {
                    for record in history() {
                        div { style: "display: flex; justify-content: space-between; padding: 8px 0; border-bottom: 1px solid #f0f0f0; font-size: 14px;",
                            span { {format::format_date(record.scheduled_date)} }
                            span { "{record.status.display_name()}" }
                        }
                    }
                }
            }

            // Notes timeline
            div { class: "card", style: "margin-bottom: 16px;",
                h2 { style: "margin: 0 0 12px 0; font-size: 18px; color: #333;", "📝 Notes" }

                div { style: "display: flex; gap: 8px; margin-bottom: 16px;",
                    input {
                        r#type: "text",
                        class: "input",
                        placeholder: "New note...",
                        value: "{note_text}",
                        oninput: move |e| note_text.set(e.value()),
                    }
                    button {
                        class: "btn-primary",
                        style: "padding: 8px 16px; white-space: nowrap;",
                        onclick: move |e| add_note(e),
                        "Add"
                    }
                }
                if note_submitted() {
                    if let Some(error) = note_error.clone() {
                        div { class: "field-error", style: "margin-top: -8px; margin-bottom: 12px;",
                            "{error}"
                        }
                    }
                }

                if notes().is_empty() {
                    p { style: "color: #999; font-size: 14px; margin: 0;", "No notes yet" }
                } else {
                    for note in notes() {
                        div { style: "display: flex; justify-content: space-between; align-items: flex-start; gap: 8px; padding: 10px 0; border-bottom: 1px solid #f0f0f0;",
                            div {
                                div { style: "font-size: 12px; color: #999; margin-bottom: 2px;",
                                    {format::format_date(note.date)}
                                }
                                div { style: "font-size: 14px; color: #333;", "{note.text}" }
                            }
                            if let Some(id) = note.id {
                                button {
                                    style: "border: none; background: none; color: #c62828; cursor: pointer; font-size: 14px;",
                                    onclick: move |_| remove_note(id),
                                    "✕"
                                }
                            }
                        }
                    }
                }
            }

            if show_schedule() {
                SterilizationFormModal {
                    fixed_cat_id: Some(cat_id),
                    on_close: move |_| show_schedule.set(false),
                    on_saved: move |_| {
                        show_schedule.set(false);
                        load_history();
                    },
                }
            }
        }
    }
}

#[component]
fn DetailField(label: String, value: String) -> Element {
    rsx! {
        div { style: "display: flex; gap: 8px; margin-bottom: 6px; font-size: 14px;",
            span { style: "color: #999; min-width: 100px;", "{label}:" }
            span { style: "color: #333; font-weight: 500;", "{value}" }
        }
    }
}
