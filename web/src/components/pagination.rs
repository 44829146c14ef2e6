use dioxus::prelude::*;
use lims_core::{Navigation, PagerView};

const NAV_BUTTON: &str = "px-2 py-1 rounded border border-gray-300 text-sm text-gray-700 hover:bg-gray-100 disabled:opacity-40 disabled:cursor-not-allowed";

/// Page-size selector, first/prev/numbered/next/last buttons and the
/// "Page x of y" summary.
#[component]
pub fn PaginationBar(
    pager: PagerView,
    on_navigate: EventHandler<Navigation>,
    on_page_size: EventHandler<usize>,
) -> Element {
    let current = pager.current_page;
    let summary = pager.summary();

    rsx! {
        div {
            class: "flex flex-wrap items-center justify-between gap-3 px-4 py-3 border-t border-gray-200",
            div {
                class: "flex items-center gap-2 text-sm text-gray-600",
                span { "Rows per page" }
                select {
                    class: "border border-gray-300 rounded px-2 py-1",
                    onchange: move |evt: Event<FormData>| {
                        match evt.value().parse::<usize>() {
                            Ok(size) => on_page_size.call(size),
                            Err(_) => log::warn!("unexpected page size {:?}", evt.value()),
                        }
                    },
                    for size in pager.page_sizes.iter().copied() {
                        option {
                            key: "{size}",
                            value: "{size}",
                            selected: size == pager.page_size,
                            "{size}"
                        }
                    }
                }
            }
            nav {
                class: "flex items-center gap-1",
                button {
                    class: NAV_BUTTON,
                    disabled: !pager.can_prev(),
                    onclick: move |_| on_navigate.call(Navigation::First),
                    "«"
                }
                button {
                    class: NAV_BUTTON,
                    disabled: !pager.can_prev(),
                    onclick: move |_| on_navigate.call(Navigation::Prev),
                    "‹"
                }
                for page in pager.window.iter().copied() {
                    button {
                        key: "{page}",
                        class: if page == current {
                            "px-3 py-1 rounded text-sm font-semibold bg-blue-600 text-white"
                        } else {
                            "px-3 py-1 rounded text-sm text-gray-700 hover:bg-gray-100"
                        },
                        onclick: move |_| on_navigate.call(Navigation::Page(page)),
                        "{page}"
                    }
                }
                button {
                    class: NAV_BUTTON,
                    disabled: !pager.can_next(),
                    onclick: move |_| on_navigate.call(Navigation::Next),
                    "›"
                }
                button {
                    class: NAV_BUTTON,
                    disabled: !pager.can_next(),
                    onclick: move |_| on_navigate.call(Navigation::Last),
                    "»"
                }
            }
            span { class: "text-sm text-gray-600", "{summary}" }
        }
    }
}
