use dioxus::prelude::*;
use lims_proto::prelude::Sorter;

use crate::api::ApiClient;
use crate::components::common::{ErrorState, LoadingState, PageHeader};
use crate::components::data_table::DataTable;
use crate::hooks::use_api;
use crate::models::{department_columns, Department, DepartmentField};

/// Department register, loaded once and paged in the browser.
#[component]
pub fn Departments() -> Element {
    let state = use_api(move || {
        let client = ApiClient::new();
        async move { client.get_departments().await }
    });

    rsx! {
        PageHeader {
            title: "Departments".to_string(),
            subtitle: Some("Laboratory departments and their heads".to_string())
        }
        if state.is_loading() {
            LoadingState { message: Some("Loading departments...".to_string()) }
        } else if let Some(Ok(departments)) = state.data.read().as_ref() {
            DataTable::<Department> {
                items: departments.clone(),
                columns: department_columns(),
                items_per_page: 10,
                default_sorter: Some(Sorter::asc(DepartmentField::Name)),
                show_details_buttons: false,
            }
        } else if let Some(Err(err)) = state.data.read().as_ref() {
            ErrorState { error: err.to_string(), title: Some("Could not load departments".to_string()) }
        }
    }
}
