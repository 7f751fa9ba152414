use crate::api;
use crate::error::AppError;
use crate::format;
use crate::image_processing;
use crate::models::{Adopter, Adoption, AdoptionStatus, Cat};
use crate::notify;
use crate::services::adopter_service::AdopterFilter;
use crate::services::cat_service::CatFilter;
use crate::services::{adopter_service, adoption_service, cat_service, upload_service, ListParams};
use dioxus::prelude::*;
use dioxus_crud_components::Modal;

/// How many options the cat/adopter selects load at most
const SELECT_PAGE_SIZE: usize = 200;

/// Create/edit form for an adoption, rendered in a modal.
///
/// The cat and adopter selects load their options when the modal
/// opens. An optional local photo of the signed adoption term is
/// uploaded on save.
#[component]
pub fn AdoptionFormModal(
    adoption: Option<Adoption>,
    on_saved: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    let initial = adoption.clone();
    let is_edit = initial.is_some();

    let mut cats = use_signal(Vec::<Cat>::new);
    let mut adopters = use_signal(Vec::<Adopter>::new);
    let mut cat_id = use_signal(|| {
        adoption
            .as_ref()
            .map(|a| a.cat_id.to_string())
            .unwrap_or_default()
    });
    let mut adopter_id = use_signal(|| {
        adoption
            .as_ref()
            .map(|a| a.adopter_id.to_string())
            .unwrap_or_default()
    });
    let mut adoption_date = use_signal(|| {
        adoption
            .as_ref()
            .map(|a| a.adoption_date.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| chrono::Local::now().date_naive().format("%Y-%m-%d").to_string())
    });
    let mut status = use_signal(|| {
        adoption
            .as_ref()
            .map(|a| a.status.as_str().to_string())
            .unwrap_or_else(|| AdoptionStatus::Pending.as_str().to_string())
    });
    let mut term_photo_path = use_signal(String::new);
    let mut submitted = use_signal(|| false);
    let mut submitting = use_signal(|| false);

    // Load select options when the modal opens
    use_effect(move || {
        spawn(async move {
            let client = match api::connect() {
                Ok(client) => client,
                Err(e) => {
                    notify::handle_error(&e);
                    return;
                }
            };
            let cat_filter = CatFilter {
                params: ListParams::page(0, SELECT_PAGE_SIZE).sorted_by("name"),
                ..Default::default()
            };
            match cat_service::list_cats(&client, &cat_filter).await {
                Ok(result) => cats.set(result.content),
                Err(e) => notify::handle_error(&e),
            }
            let adopter_filter = AdopterFilter {
                params: ListParams::page(0, SELECT_PAGE_SIZE).sorted_by("lastName"),
                ..Default::default()
            };
            match adopter_service::list_adopters(&client, &adopter_filter).await {
                Ok(result) => adopters.set(result.content),
                Err(e) => notify::handle_error(&e),
            }
        });
    });

    let cat_error = if cat_id().parse::<i64>().unwrap_or(0) <= 0 {
        Some("Select a cat".to_string())
    } else {
        None
    };
    let adopter_error = if adopter_id().parse::<i64>().unwrap_or(0) <= 0 {
        Some("Select an adopter".to_string())
    } else {
        None
    };
    let date_error = if format::parse_input_date(&adoption_date()).is_none() {
        Some("Adoption date is required".to_string())
    } else {
        None
    };
    let form_valid = cat_error.is_none() && adopter_error.is_none() && date_error.is_none();

    let submit = move |_| {
        submitted.set(true);
        if !form_valid || submitting() {
            return;
        }
        let Some(date) = format::parse_input_date(&adoption_date()) else {
            return;
        };
        let (Ok(cat_ref), Ok(adopter_ref)) = (cat_id().parse::<i64>(), adopter_id().parse::<i64>())
        else {
            return;
        };

        let mut record = initial
            .clone()
            .unwrap_or_else(|| Adoption::new(cat_ref, adopter_ref, date));
        record.cat_id = cat_ref;
        record.adopter_id = adopter_ref;
        record.adoption_date = date;
        record.status = AdoptionStatus::from_str(&status());
        // Embedded entities are display-only; never sent back
        record.cat = None;
        record.adopter = None;

        submitting.set(true);
        let term_photo = term_photo_path().trim().to_string();

        spawn(async move {
            let result: Result<Adoption, AppError> = async {
                let client = api::connect()?;
                let mut record = record;
                if !term_photo.is_empty() {
                    let bytes = image_processing::prepare_for_upload(&term_photo)?;
                    let url = upload_service::upload_image(&client, bytes).await?;
                    record.term_photo_url = Some(url);
                }
                if record.id.is_some() {
                    adoption_service::update_adoption(&client, &record).await
                } else {
                    adoption_service::create_adoption(&client, &record).await
                }
            }
            .await;

            submitting.set(false);
            match result {
                Ok(_) => {
                    notify::success(if is_edit {
                        "Adoption updated"
                    } else {
                        "Adoption opened"
                    });
                    on_saved.call(());
                }
                Err(e) => notify::handle_error(&e),
            }
        });
    };

    let title = if is_edit { "Edit adoption" } else { "New adoption" }.to_string();

    rsx! {
        Modal { title, on_close: move |_| on_close.call(()),

            div { style: "margin-bottom: 16px;",
                label { class: "field-label", "Cat *" }
                select {
                    class: "input",
                    value: "{cat_id}",
                    onchange: move |e| cat_id.set(e.value()),
                    option { value: "", "Select..." }
                    for cat in cats() {
                        option { value: "{cat.id.unwrap_or_default()}",
                            "{cat.name} ({cat.adoption_state.display_name()})"
                        }
                    }
                }
                if submitted() {
                    if let Some(error) = cat_error.clone() {
                        div { class: "field-error", "{error}" }
                    }
                }
            }

            div { style: "margin-bottom: 16px;",
                label { class: "field-label", "Adopter *" }
                select {
                    class: "input",
                    value: "{adopter_id}",
                    onchange: move |e| adopter_id.set(e.value()),
                    option { value: "", "Select..." }
                    for adopter in adopters() {
                        option { value: "{adopter.id.unwrap_or_default()}", "{adopter.full_name()}" }
                    }
                }
                if submitted() {
                    if let Some(error) = adopter_error.clone() {
                        div { class: "field-error", "{error}" }
                    }
                }
            }

            div { style: "display: flex; gap: 12px; margin-bottom: 16px;",
                div { style: "flex: 1;",
                    label { class: "field-label", "Adoption date *" }
                    input {
                        r#type: "date",
                        class: "input",
                        value: "{adoption_date}",
                        oninput: move |e| adoption_date.set(e.value()),
                    }
                    if submitted() {
                        if let Some(error) = date_error.clone() {
                            div { class: "field-error", "{error}" }
                        }
                    }
                }
                div { style: "flex: 1;",
                    label { class: "field-label", "Status" }
                    select {
                        class: "input",
                        value: "{status}",
                        onchange: move |e| status.set(e.value()),
                        for option_status in AdoptionStatus::all() {
                            option { value: "{option_status.as_str()}",
                                "{option_status.display_name()}"
                            }
                        }
                    }
                }
            }

            div { style: "margin-bottom: 20px;",
                label { class: "field-label", "Signed term photo (local file, optional)" }
                input {
                    r#type: "text",
                    class: "input",
                    placeholder: "/path/to/term.jpg",
                    value: "{term_photo_path}",
                    oninput: move |e| term_photo_path.set(e.value()),
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
