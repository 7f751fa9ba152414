use crate::api;
use crate::error::AppError;
use crate::format;
use crate::image_processing;
use crate::models::{AdoptionState, Cat, CatColor, Sex};
use crate::notify;
use crate::services::{cat_service, upload_service};
use dioxus::prelude::*;
use dioxus_crud_components::Modal;

/// Create/edit form for a cat, rendered in a modal.
///
/// `cat: None` opens an empty create form; `cat: Some(..)` edits the
/// given record. `on_saved` fires after a successful POST/PUT so the
/// parent list can reload.
#[component]
pub fn CatFormModal(
    cat: Option<Cat>,
    on_saved: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    let initial = cat.clone();
    let is_edit = initial.is_some();

    let mut name = use_signal(|| cat.as_ref().map(|c| c.name.clone()).unwrap_or_default());
    let mut color = use_signal(|| {
        cat.as_ref()
            .map(|c| c.color.as_str().to_string())
            .unwrap_or_else(|| "other".to_string())
    });
    let mut sex = use_signal(|| {
        cat.as_ref()
            .map(|c| c.sex.as_str().to_string())
            .unwrap_or_else(|| "unknown".to_string())
    });
    let mut birth_date = use_signal(|| {
        cat.as_ref()
            .and_then(|c| c.birth_date)
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    });
    let mut entry_date = use_signal(|| {
        cat.as_ref()
            .map(|c| c.entry_date.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| chrono::Local::now().date_naive().format("%Y-%m-%d").to_string())
    });
    let mut adoption_state = use_signal(|| {
        cat.as_ref()
            .map(|c| c.adoption_state.as_str().to_string())
            .unwrap_or_else(|| AdoptionState::NotAdopted.as_str().to_string())
    });
    let mut photo_path = use_signal(String::new);
    let mut photo_preview = use_signal(|| None::<String>);
    let mut submitted = use_signal(|| false);
    let mut submitting = use_signal(|| false);

    let name_error = {
        let value = name();
        if value.trim().is_empty() {
            Some("Name is required".to_string())
        } else if value.len() > 100 {
            Some("Name must not exceed 100 characters".to_string())
        } else {
            None
        }
    };
    let entry_error = if format::parse_input_date(&entry_date()).is_none() {
        Some("Entry date is required".to_string())
    } else {
        None
    };
    let birth_error = {
        let raw = birth_date();
        if !raw.trim().is_empty() && format::parse_input_date(&raw).is_none() {
            Some("Invalid date".to_string())
        } else {
            None
        }
    };
    let form_valid = name_error.is_none() && entry_error.is_none() && birth_error.is_none();

    let mut show_preview = move || {
        let path = photo_path();
        let path = path.trim();
        if path.is_empty() {
            photo_preview.set(None);
            return;
        }
        match image_processing::image_path_to_data_url(path) {
            Ok(data_url) => photo_preview.set(Some(data_url)),
            Err(e) => {
                photo_preview.set(None);
                notify::handle_error(&e);
            }
        }
    };

    let submit = move |_| {
        // A failed attempt reveals every field error
        submitted.set(true);
        if !form_valid || submitting() {
            return;
        }

        let Some(entry) = format::parse_input_date(&entry_date()) else {
            return;
        };
        let birth = {
            let raw = birth_date();
            if raw.trim().is_empty() {
                None
            } else {
                format::parse_input_date(&raw)
            }
        };

        let mut record = match initial.clone() {
            Some(existing) => existing,
            None => Cat::new(name().trim().to_string(), entry),
        };
        record.name = name().trim().to_string();
        record.color = CatColor::from_str(&color());
        record.sex = Sex::from_str(&sex());
        record.birth_date = birth;
        record.entry_date = entry;
        record.adoption_state = AdoptionState::from_str(&adoption_state());

        submitting.set(true);
        let photo = photo_path().trim().to_string();

        spawn(async move {
            let result: Result<Cat, AppError> = async {
                let client = api::connect()?;
                let mut record = record;
                if !photo.is_empty() {
                    let bytes = image_processing::prepare_for_upload(&photo)?;
                    let url = upload_service::upload_image(&client, bytes).await?;
                    record.photo_url = Some(url);
                }
                if record.id.is_some() {
                    cat_service::update_cat(&client, &record).await
                } else {
                    cat_service::create_cat(&client, &record).await
                }
            }
            .await;

            submitting.set(false);
            match result {
                Ok(_) => {
                    notify::success(if is_edit { "Cat updated" } else { "Cat registered" });
                    on_saved.call(());
                }
                Err(e) => notify::handle_error(&e),
            }
        });
    };

    let title = if is_edit { "Edit cat" } else { "New cat" }.to_string();

    rsx! {
        Modal { title, on_close: move |_| on_close.call(()),

            div { style: "margin-bottom: 16px;",
                label { class: "field-label", "Name *" }
                input {
                    r#type: "text",
                    class: "input",
                    placeholder: "e.g. Frajola",
                    value: "{name}",
                    oninput: move |e| name.set(e.value()),
                    autofocus: true,
                }
                if submitted() {
                    if let Some(error) = name_error.clone() {
                        div { class: "field-error", "{error}" }
                    }
                }
            }

            div { style: "display: flex; gap: 12px; margin-bottom: 16px;",
                div { style: "flex: 1;",
                    label { class: "field-label", "Color" }
                    select {
                        class: "input",
                        value: "{color}",
                        onchange: move |e| color.set(e.value()),
                        for option_color in CatColor::all() {
                            option { value: "{option_color.as_str()}", "{option_color.display_name()}" }
                        }
                    }
                }
                div { style: "flex: 1;",
                    label { class: "field-label", "Sex" }
                    select {
                        class: "input",
                        value: "{sex}",
                        onchange: move |e| sex.set(e.value()),
                        option { value: "unknown", "Unknown" }
                        option { value: "female", "Female" }
                        option { value: "male", "Male" }
                    }
                }
            }

            div { style: "display: flex; gap: 12px; margin-bottom: 16px;",
                div { style: "flex: 1;",
                    label { class: "field-label", "Birth date" }
                    input {
                        r#type: "date",
                        class: "input",
                        value: "{birth_date}",
                        oninput: move |e| birth_date.set(e.value()),
                    }
                    if submitted() {
                        if let Some(error) = birth_error.clone() {
                            div { class: "field-error", "{error}" }
                        }
                    }
                }
                div { style: "flex: 1;",
                    label { class: "field-label", "Shelter entry *" }
                    input {
                        r#type: "date",
                        class: "input",
                        value: "{entry_date}",
                        oninput: move |e| entry_date.set(e.value()),
                    }
                    if submitted() {
                        if let Some(error) = entry_error.clone() {
                            div { class: "field-error", "{error}" }
                        }
                    }
                }
            }

            div { style: "margin-bottom: 16px;",
                label { class: "field-label", "Adoption status" }
                select {
                    class: "input",
                    value: "{adoption_state}",
                    onchange: move |e| adoption_state.set(e.value()),
                    for state in AdoptionState::all() {
                        option { value: "{state.as_str()}", "{state.display_name()}" }
                    }
                }
            }

            div { style: "margin-bottom: 20px;",
                label { class: "field-label", "Photo (local file)" }
                div { style: "display: flex; gap: 8px;",
                    input {
                        r#type: "text",
                        class: "input",
                        placeholder: "/path/to/photo.jpg",
                        value: "{photo_path}",
                        oninput: move |e| photo_path.set(e.value()),
                    }
                    button {
                        class: "btn-secondary",
                        style: "padding: 8px 12px; white-space: nowrap;",
                        onclick: move |_| show_preview(),
                        "Preview"
                    }
                }
                if let Some(data_url) = photo_preview() {
                    img {
                        src: data_url,
                        style: "margin-top: 12px; max-width: 160px; max-height: 160px; border-radius: 8px; object-fit: cover;",
                    }
                }
            }

            button {
                class: "btn-primary",
                style: "width: 100%; padding: 14px; font-size: 16px; font-weight: 600;",
                disabled: submitting(),
                onclick: submit,
                if submitting() {
                    "Saving..."
                } else {
                    "Save"
                }
            }
        }
    }
}
