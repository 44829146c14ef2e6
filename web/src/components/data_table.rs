use dioxus::prelude::*;
use lims_core::{
    CellContent, DetailView, Navigation, PageRequest, SortableHeader, TableConfig, TableState,
};
use lims_proto::prelude::{ColumnDescriptor, PageMeta, RowRecord, Sorter};

use super::badge::StatusBadge;
use super::pagination::PaginationBar;

/// Who pages the rows of a [`DataTable`].
#[derive(Clone, PartialEq)]
pub enum Pagination<K: 'static = String> {
    /// The table sorts and slices `items` itself.
    Client,
    /// `items` is the page the caller fetched. Navigation, page-size and
    /// sort changes are reported through the handlers and the caller
    /// fetches again.
    Server {
        current_page: usize,
        total_pages: usize,
        total_items: usize,
        items_per_page: usize,
        on_page_change: EventHandler<usize>,
        on_page_size_change: EventHandler<usize>,
        on_sort_change: Option<EventHandler<Sorter<K>>>,
    },
}

impl<K> Default for Pagination<K> {
    fn default() -> Self {
        Pagination::Client
    }
}

impl<K> Pagination<K> {
    fn meta(&self) -> Option<PageMeta> {
        match self {
            Pagination::Client => None,
            Pagination::Server {
                current_page,
                total_pages,
                total_items,
                items_per_page,
                ..
            } => Some(PageMeta::new(
                *current_page,
                *total_pages,
                *total_items,
                *items_per_page,
            )),
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct DataTableProps<R: RowRecord + Clone + PartialEq + 'static> {
    items: Vec<R>,
    columns: Vec<ColumnDescriptor<R::Key>>,
    /// Initial page size in client mode.
    #[props(default = 5)]
    items_per_page: usize,
    /// Initial sort; later changes are ignored.
    #[props(default)]
    default_sorter: Option<Sorter<R::Key>>,
    #[props(default = true)]
    show_details_buttons: bool,
    #[props(default)]
    pagination: Pagination<R::Key>,
    #[props(default)]
    on_row_click: Option<EventHandler<R::Id>>,
}

/// Sortable, paginated table with optional per-row detail panels.
#[allow(non_snake_case)]
pub fn DataTable<R: RowRecord + Clone + PartialEq + 'static>(props: DataTableProps<R>) -> Element {
    let server_meta = props.pagination.meta();
    let (on_page_change, on_page_size_change, on_sort_change) = match &props.pagination {
        Pagination::Server {
            on_page_change,
            on_page_size_change,
            on_sort_change,
            ..
        } => (Some(*on_page_change), Some(*on_page_size_change), *on_sort_change),
        Pagination::Client => (None, None, None),
    };
    let on_row_click = props.on_row_click;

    let mut state = use_signal({
        let items_per_page = props.items_per_page;
        let show_details = props.show_details_buttons;
        let default_sorter = props.default_sorter.clone();
        move || {
            let config = TableConfig {
                items_per_page: items_per_page.max(1),
                show_details_buttons: show_details,
                ..TableConfig::default()
            };
            let state = match server_meta {
                Some(meta) => TableState::server(meta, &config),
                None => TableState::client(&config),
            };
            state.with_sorter(default_sorter)
        }
    });

    // Server metadata always comes from the latest props.
    let sync_props = move |state: &mut TableState<R>| {
        if let Some(meta) = server_meta {
            state.set_server_page(meta);
        }
    };

    let mut current = state.read().clone().with_details(props.show_details_buttons);
    sync_props(&mut current);

    let total = props.items.len();
    let view = current.view(&props.columns, &props.items);
    let column_count = view.column_count();
    let is_empty = view.rows.is_empty();

    let header = view.header.iter().map(|cell| {
        let width = cell
            .width
            .map(|w| format!("width: {w}ch"))
            .unwrap_or_default();
        match cell.sort.clone() {
            Some(SortableHeader { key, indicator }) => rsx! {
                th {
                    class: "px-4 py-2 text-left font-semibold text-gray-700 cursor-pointer select-none {indicator.class()}",
                    style: "{width}",
                    onclick: move |_| {
                        let sorter = {
                            let mut state = state.write();
                            sync_props(&mut *state);
                            state.click_header(key.clone())
                        };
                        if let (Some(sorter), Some(handler)) = (sorter, on_sort_change) {
                            handler.call(sorter);
                        }
                    },
                    "{cell.label} "
                    span { class: "text-gray-400", "{indicator.glyph()}" }
                }
            },
            None => rsx! {
                th {
                    class: "px-4 py-2 text-left font-semibold text-gray-700",
                    style: "{width}",
                    "{cell.label}"
                }
            },
        }
    });

    let body = view.rows.iter().enumerate().map(|(index, row)| {
        let row_key = row.id.to_string();
        let clicked_id = row.id.clone();
        let stripe = if index % 2 == 0 { "bg-white" } else { "bg-gray-50" };
        let details = row.details.clone();

        let cells = row.cells.iter().map(|cell| match cell {
            CellContent::Value(value) => rsx! {
                td { class: "px-4 py-2 text-gray-700", "{value}" }
            },
            CellContent::Toggle { expanded, label } => {
                let toggle_id = row.id.clone();
                let expanded = *expanded;
                rsx! {
                    td {
                        class: "px-4 py-2",
                        button {
                            class: "text-sm text-blue-600 hover:underline",
                            aria_expanded: "{expanded}",
                            onclick: move |evt: MouseEvent| {
                                evt.stop_propagation();
                                state.write().toggle_details(toggle_id.clone());
                            },
                            "{label}"
                        }
                    }
                }
            }
        });

        rsx! {
            tr {
                key: "{row_key}",
                class: "{stripe} border-b border-gray-100 hover:bg-blue-50",
                onclick: move |_| {
                    if let Some(handler) = on_row_click {
                        handler.call(clicked_id.clone());
                    }
                },
                {cells}
            }
            if let Some(details) = details {
                tr {
                    class: "bg-gray-50",
                    td {
                        colspan: "{column_count}",
                        class: "px-6 py-3",
                        DetailPanel { details }
                    }
                }
            }
        }
    });

    rsx! {
        div {
            class: "w-full border border-gray-200 rounded-lg",
            div {
                class: "overflow-x-auto",
                table {
                    class: "w-full border-collapse table-auto",
                    thead {
                        tr { class: "bg-gray-50 border-b border-gray-200", {header} }
                    }
                    tbody { {body} }
                }
            }
            if is_empty {
                div { class: "text-center py-8 text-gray-500", "No records" }
            }
            PaginationBar {
                pager: view.pager.clone(),
                on_navigate: move |nav: Navigation| {
                    let request = {
                        let mut state = state.write();
                        sync_props(&mut *state);
                        state.navigate(nav, total)
                    };
                    if let (Some(PageRequest::Page(page)), Some(handler)) = (request, on_page_change) {
                        handler.call(page);
                    }
                },
                on_page_size: move |size: usize| {
                    let request = {
                        let mut state = state.write();
                        sync_props(&mut *state);
                        state.set_page_size(size)
                    };
                    if let (Some(PageRequest::PageSize(size)), Some(handler)) = (request, on_page_size_change) {
                        handler.call(size);
                    }
                },
            }
        }
    }
}

/// Detail records of one expanded row.
#[component]
fn DetailPanel(details: Vec<DetailView>) -> Element {
    rsx! {
        if details.is_empty() {
            p { class: "text-sm text-gray-500", "No details" }
        }
        ul {
            class: "space-y-2",
            for (index, detail) in details.iter().enumerate() {
                li {
                    key: "{index}",
                    class: "flex flex-wrap items-center gap-3 text-sm",
                    span { class: "font-medium text-gray-900", "{detail.name}" }
                    StatusBadge { status: detail.status.clone() }
                    for (field, value) in detail.fields.iter() {
                        span {
                            class: "text-gray-600",
                            span { class: "text-gray-400", "{field}: " }
                            "{value}"
                        }
                    }
                }
            }
        }
    }
}
