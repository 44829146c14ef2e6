use dioxus::prelude::*;
use lims_proto::prelude::Sorter;

use crate::api::ApiClient;
use crate::components::common::{ErrorState, LoadingState, PageHeader};
use crate::components::data_table::{DataTable, Pagination};
use crate::hooks::use_api;
use crate::models::{patient_columns, PatientField, PatientRow};

/// Patient sample report. Paging and sorting happen on the server; the
/// table only reports what the user asked for.
#[component]
pub fn PatientsReport() -> Element {
    let mut page = use_signal(|| 1usize);
    let mut size = use_signal(|| 10usize);
    let mut sort = use_signal(|| None::<Sorter<PatientField>>);

    let state = use_api(move || {
        let page = *page.read();
        let size = *size.read();
        let sort = sort.read().clone();
        let client = ApiClient::new();
        async move { client.get_patient_report(page, size, sort).await }
    });

    let on_page_change = EventHandler::new(move |next: usize| page.set(next));
    let on_page_size_change = EventHandler::new(move |next: usize| {
        size.set(next);
        page.set(1);
    });
    let on_sort_change = EventHandler::new(move |sorter: Sorter<PatientField>| {
        sort.set(Some(sorter));
        page.set(1);
    });

    // The last page stays visible while the next one loads, so the table
    // keeps its sort indicator and expanded rows.
    let data = state.data.read().clone();
    let content = match data {
        Some(Ok(report)) => {
            let pagination = Pagination::Server {
                current_page: report.meta.current_page,
                total_pages: report.meta.total_pages,
                total_items: report.meta.total_items,
                items_per_page: report.meta.items_per_page,
                on_page_change,
                on_page_size_change,
                on_sort_change: Some(on_sort_change),
            };
            rsx! {
                if state.is_loading() {
                    p { class: "text-sm text-gray-500", "Refreshing..." }
                }
                DataTable::<PatientRow> {
                    items: report.items,
                    columns: patient_columns(),
                    default_sorter: sort.read().clone(),
                    pagination,
                    on_row_click: move |id: u64| log::debug!("patient {id} selected"),
                }
            }
        }
        Some(Err(err)) => rsx! {
            ErrorState { error: err.to_string(), title: Some("Could not load the report".to_string()) }
        },
        None => rsx! {
            LoadingState { message: Some("Loading report...".to_string()) }
        },
    };

    rsx! {
        PageHeader {
            title: "Patient samples".to_string(),
            subtitle: Some("Collected samples with their ordered tests".to_string())
        }
        {content}
    }
}
