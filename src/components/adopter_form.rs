use crate::api;
use crate::format;
use crate::models::Adopter;
use crate::notify;
use crate::services::{adopter_service, cep_service};
use dioxus::prelude::*;
use dioxus_crud_components::Modal;

/// Create/edit form for an adopter, rendered in a modal.
///
/// Typing a complete 8-digit CEP triggers the postal-code lookup and
/// auto-fills street, neighborhood, city and state. CPF and phone may
/// be typed with or without their masks; they are stripped to digits
/// before submission.
#[component]
pub fn AdopterFormModal(
    adopter: Option<Adopter>,
    on_saved: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    let initial = adopter.clone();
    let is_edit = initial.is_some();
    let base = adopter.unwrap_or_else(Adopter::new);

    let mut first_name = use_signal(|| base.first_name.clone());
    let mut last_name = use_signal(|| base.last_name.clone());
    let mut birth_date = use_signal(|| {
        base.birth_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    });
    let mut cpf = use_signal(|| format::format_cpf(&base.cpf));
    let mut phone = use_signal(|| format::format_phone(&base.phone));
    let mut email = use_signal(|| base.email.clone());
    let mut zip_code = use_signal(|| format::format_cep(&base.address.zip_code));
    let mut street = use_signal(|| base.address.street.clone());
    let mut number = use_signal(|| base.address.number.clone());
    let mut neighborhood = use_signal(|| base.address.neighborhood.clone());
    let mut city = use_signal(|| base.address.city.clone());
    let mut state = use_signal(|| base.address.state.clone());
    let mut complement = use_signal(|| base.address.complement.clone().unwrap_or_default());
    let mut submitted = use_signal(|| false);
    let mut submitting = use_signal(|| false);
    let mut cep_loading = use_signal(|| false);

    let first_name_error = if first_name().trim().len() < 2 {
        Some("First name must have at least 2 characters".to_string())
    } else {
        None
    };
    let last_name_error = if last_name().trim().is_empty() {
        Some("Last name is required".to_string())
    } else {
        None
    };
    let cpf_error = if !format::is_valid_cpf(&cpf()) {
        Some("CPF must have 11 digits".to_string())
    } else {
        None
    };
    let phone_error = if !format::is_valid_phone(&phone()) {
        Some("Phone must have 10 or 11 digits".to_string())
    } else {
        None
    };
    let email_error = if !format::is_valid_email(&email()) {
        Some("Enter a valid email address".to_string())
    } else {
        None
    };
    let cep_error = if format::digits_only(&zip_code()).len() != 8 {
        Some("CEP must have 8 digits".to_string())
    } else {
        None
    };
    let form_valid = first_name_error.is_none()
        && last_name_error.is_none()
        && cpf_error.is_none()
        && phone_error.is_none()
        && email_error.is_none()
        && cep_error.is_none();

    let on_cep_input = move |e: Event<FormData>| {
        zip_code.set(e.value());
        let digits = format::digits_only(&e.value());
        if digits.len() != 8 {
            return;
        }
        cep_loading.set(true);
        spawn(async move {
            match cep_service::lookup_cep(&digits).await {
                Ok(lookup) => {
                    street.set(lookup.logradouro.clone());
                    neighborhood.set(lookup.bairro.clone());
                    city.set(lookup.localidade.clone());
                    state.set(lookup.uf.clone());
                }
                // Autofill is best-effort; the user can still type the address
                Err(e) => log::warn!("CEP lookup failed: {}", e),
            }
            cep_loading.set(false);
        });
    };

    let submit = move |_| {
        submitted.set(true);
        if !form_valid || submitting() {
            return;
        }

        let mut record = initial.clone().unwrap_or_else(Adopter::new);
        record.first_name = first_name().trim().to_string();
        record.last_name = last_name().trim().to_string();
        record.birth_date = format::parse_input_date(&birth_date());
        record.cpf = cpf();
        record.phone = phone();
        record.email = email().trim().to_string();
        record.address.street = street().trim().to_string();
        record.address.number = number().trim().to_string();
        record.address.neighborhood = neighborhood().trim().to_string();
        record.address.city = city().trim().to_string();
        record.address.state = state().trim().to_uppercase();
        record.address.zip_code = zip_code();
        record.address.complement = {
            let value = complement().trim().to_string();
            if value.is_empty() {
                None
            } else {
                Some(value)
            }
        };

        submitting.set(true);
        spawn(async move {
            let result = match api::connect() {
                Ok(client) => {
                    if record.id.is_some() {
                        adopter_service::update_adopter(&client, &record).await
                    } else {
                        adopter_service::create_adopter(&client, &record).await
                    }
                }
                Err(e) => Err(e),
            };

            submitting.set(false);
            match result {
                Ok(_) => {
                    notify::success(if is_edit {
                        "Adopter updated"
                    } else {
                        "Adopter registered"
                    });
                    on_saved.call(());
                }
                Err(e) => notify::handle_error(&e),
            }
        });
    };

    let title = if is_edit { "Edit adopter" } else { "New adopter" }.to_string();

    rsx! {
        Modal { title, on_close: move |_| on_close.call(()),

            div { style: "display: flex; gap: 12px; margin-bottom: 16px;",
                div { style: "flex: 1;",
                    label { class: "field-label", "First name *" }
                    input {
                        r#type: "text",
                        class: "input",
                        value: "{first_name}",
                        oninput: move |e| first_name.set(e.value()),
                        autofocus: true,
                    }
                    if submitted() {
                        if let Some(error) = first_name_error.clone() {
                            div { class: "field-error", "{error}" }
                        }
                    }
                }
                div { style: "flex: 1;",
                    label { class: "field-label", "Last name *" }
                    input {
                        r#type: "text",
                        class: "input",
                        value: "{last_name}",
                        oninput: move |e| last_name.set(e.value()),
                    }
                    if submitted() {
                        if let Some(error) = last_name_error.clone() {
                            div { class: "field-error", "{error}" }
                        }
                    }
                }
            }

            div { style: "display: flex; gap: 12px; margin-bottom: 16px;",
                div { style: "flex: 1;",
                    label { class: "field-label", "CPF *" }
                    input {
                        r#type: "text",
                        class: "input",
                        placeholder: "000.000.000-00",
                        value: "{cpf}",
                        oninput: move |e| cpf.set(e.value()),
                    }
                    if submitted() {
                        if let Some(error) = cpf_error.clone() {
                            div { class: "field-error", "{error}" }
                        }
                    }
                }
                div { style: "flex: 1;",
                    label { class: "field-label", "Birth date" }
                    input {
                        r#type: "date",
                        class: "input",
                        value: "{birth_date}",
                        oninput: move |e| birth_date.set(e.value()),
                    }
                }
            }

            div { style: "display: flex; gap: 12px; margin-bottom: 16px;",
                div { style: "flex: 1;",
                    label { class: "field-label", "Phone *" }
                    input {
                        r#type: "text",
                        class: "input",
                        placeholder: "(00) 00000-0000",
                        value: "{phone}",
                        oninput: move |e| phone.set(e.value()),
                    }
                    if submitted() {
                        if let Some(error) = phone_error.clone() {
                            div { class: "field-error", "{error}" }
                        }
                    }
                }
                div { style: "flex: 1;",
                    label { class: "field-label", "Email *" }
                    input {
                        r#type: "email",
                        class: "input",
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }
                    if submitted() {
                        if let Some(error) = email_error.clone() {
                            div { class: "field-error", "{error}" }
                        }
                    }
                }
            }

            // Address
            div { style: "padding: 12px; background: #f8f9fa; border-radius: 8px; margin-bottom: 20px;",
                div { style: "display: flex; gap: 12px; margin-bottom: 12px;",
                    div { style: "max-width: 160px;",
                        label { class: "field-label",
                            if cep_loading() {
                                "CEP * 🔄"
                            } else {
                                "CEP *"
                            }
                        }
                        input {
                            r#type: "text",
                            class: "input",
                            placeholder: "00000-000",
                            value: "{zip_code}",
                            oninput: on_cep_input,
                        }
                        if submitted() {
                            if let Some(error) = cep_error.clone() {
                                div { class: "field-error", "{error}" }
                            }
                        }
                    }
                    div { style: "flex: 1;",
                        label { class: "field-label", "Street" }
                        input {
                            r#type: "text",
                            class: "input",
                            value: "{street}",
                            oninput: move |e| street.set(e.value()),
                        }
                    }
                }
                div { style: "display: flex; gap: 12px; margin-bottom: 12px;",
                    div { style: "max-width: 120px;",
                        label { class: "field-label", "Number" }
                        input {
                            r#type: "text",
                            class: "input",
                            value: "{number}",
                            oninput: move |e| number.set(e.value()),
                        }
                    }
                    div { style: "flex: 1;",
                        label { class: "field-label", "Neighborhood" }
                        input {
                            r#type: "text",
                            class: "input",
                            value: "{neighborhood}",
                            oninput: move |e| neighborhood.set(e.value()),
                        }
                    }
                }
                div { style: "display: flex; gap: 12px;",
                    div { style: "flex: 1;",
                        label { class: "field-label", "City" }
                        input {
                            r#type: "text",
                            class: "input",
                            value: "{city}",
                            oninput: move |e| city.set(e.value()),
                        }
                    }
                    div { style: "max-width: 80px;",
                        label { class: "field-label", "State" }
                        input {
                            r#type: "text",
                            class: "input",
                            maxlength: "2",
                            value: "{state}",
                            oninput: move |e| state.set(e.value()),
                        }
                    }
                    div { style: "flex: 1;",
                        label { class: "field-label", "Complement" }
                        input {
                            r#type: "text",
                            class: "input",
                            value: "{complement}",
                            oninput: move |e| complement.set(e.value()),
                        }
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
