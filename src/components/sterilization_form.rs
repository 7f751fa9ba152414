use crate::api;
use crate::format;
use crate::models::{Cat, Sterilization};
use crate::notify;
use crate::services::cat_service::CatFilter;
use crate::services::{cat_service, sterilization_service, ListParams};
use dioxus::prelude::*;
use dioxus_crud_components::Modal;

/// Scheduling form for a sterilization, rendered in a modal.
#[component]
pub fn SterilizationFormModal(
    on_saved: EventHandler<()>,
    on_close: EventHandler<()>,
    /// Preselects the cat and locks the select (used from the cat detail screen)
    #[props(default)]
    fixed_cat_id: Option<i64>,
) -> Element {
    let mut cats = use_signal(Vec::<Cat>::new);
    let mut cat_id = use_signal(|| {
        fixed_cat_id
            .map(|id| id.to_string())
            .unwrap_or_default()
    });
    let mut scheduled_date = use_signal(|| {
        chrono::Local::now()
            .date_naive()
            .format("%Y-%m-%d")
            .to_string()
    });
    let mut notes = use_signal(String::new);
    let mut submitted = use_signal(|| false);
    let mut submitting = use_signal(|| false);

    let select_locked = fixed_cat_id.is_some();

    // Load select options when the modal opens
    use_effect(move || {
        spawn(async move {
            match api::connect() {
                Ok(client) => {
                    let filter = CatFilter {
                        params: ListParams::page(0, 200).sorted_by("name"),
                        ..Default::default()
                    };
                    match cat_service::list_cats(&client, &filter).await {
                        Ok(result) => cats.set(result.content),
                        Err(e) => notify::handle_error(&e),
                    }
                }
                Err(e) => notify::handle_error(&e),
            }
        });
    });

    let cat_error = if cat_id().parse::<i64>().unwrap_or(0) <= 0 {
        Some("Select a cat".to_string())
    } else {
        None
    };
    let date_error = if format::parse_input_date(&scheduled_date()).is_none() {
        Some("Scheduled date is required".to_string())
    } else {
        None
    };
    let form_valid = cat_error.is_none() && date_error.is_none();

    let submit = move |_| {
        submitted.set(true);
        if !form_valid || submitting() {
            return;
        }
        let Some(date) = format::parse_input_date(&scheduled_date()) else {
            return;
        };
        let Ok(cat_ref) = cat_id().parse::<i64>() else {
            return;
        };

        let mut record = Sterilization::new(cat_ref, date);
        record.notes = {
            let value = notes().trim().to_string();
            if value.is_empty() {
                None
            } else {
                Some(value)
            }
        };

        submitting.set(true);
        spawn(async move {
            let result = match api::connect() {
                Ok(client) => sterilization_service::create_sterilization(&client, &record).await,
                Err(e) => Err(e),
            };
            submitting.set(false);
            match result {
                Ok(_) => {
                    notify::success("Sterilization scheduled");
                    on_saved.call(());
                }
                Err(e) => notify::handle_error(&e),
            }
        });
    };

    rsx! {
        Modal { title: "Schedule sterilization", on_close: move |_| on_close.call(()),

            div { style: "margin-bottom: 16px;",
                label { class: "field-label", "Cat *" }
                select {
                    class: "input",
                    value: "{cat_id}",
                    disabled: select_locked,
                    onchange: move |e| cat_id.set(e.value()),
                    option { value: "", "Select..." }
                    for cat in cats() {
                        option { value: "{cat.id.unwrap_or_default()}", "{cat.name}" }
                    }
                }
                if submitted() {
                    if let Some(error) = cat_error.clone() {
                        div { class: "field-error", "{error}" }
                    }
                }
            }

            div { style: "margin-bottom: 16px;",
                label { class: "field-label", "Scheduled date *" }
                input {
                    r#type: "date",
                    class: "input",
                    value: "{scheduled_date}",
                    oninput: move |e| scheduled_date.set(e.value()),
                }
                if submitted() {
                    if let Some(error) = date_error.clone() {
                        div { class: "field-error", "{error}" }
                    }
                }
            }

            div { style: "margin-bottom: 20px;",
                label { class: "field-label", "Notes" }
                textarea {
                    class: "input",
                    style: "min-height: 80px; resize: vertical;",
                    placeholder: "Pre-surgery observations...",
                    value: "{notes}",
                    oninput: move |e| notes.set(e.value()),
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
                    "Schedule"
                }
            }
        }
    }
}
