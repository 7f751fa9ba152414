use dioxus::prelude::*;

/// Pagination control for paged tables.
///
/// `page` is the zero-based current page; `on_page` receives the
/// zero-based page the user navigated to. The component renders a
/// one-based label, so an empty result set still shows "Page 1 of 1".
#[component]
pub fn PaginationBar(page: usize, total_pages: usize, on_page: EventHandler<usize>) -> Element {
    let display_pages = total_pages.max(1);
    let at_first = page == 0;
    let at_last = page + 1 >= display_pages;

    let button_style = |disabled: bool| {
        if disabled {
            "padding: 8px 14px; border-radius: 8px; border: 1px solid #e0e0e0; background: #f5f5f5; color: #bbb;"
        } else {
            "padding: 8px 14px; border-radius: 8px; border: 1px solid #0066cc; background: white; color: #0066cc; cursor: pointer;"
        }
    };

    rsx! {
        div { style: "display: flex; align-items: center; justify-content: center; gap: 12px; padding: 12px 0;",
            button {
                style: button_style(at_first),
                disabled: at_first,
                onclick: move |_| {
                    if page > 0 {
                        on_page.call(page - 1);
                    }
                },
                "← Previous"
            }
            span { style: "font-size: 14px; color: #555;",
                "Page {page + 1} of {display_pages}"
            }
            button {
                style: button_style(at_last),
                disabled: at_last,
                onclick: move |_| on_page.call(page + 1),
                "Next →"
            }
        }
    }
}
