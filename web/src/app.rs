use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use crate::components::layout::AppLayout;
use crate::pages::{departments::Departments, patients::PatientsReport};

#[derive(Routable, Clone, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    PatientsPage {},
    #[route("/departments")]
    DepartmentsPage {},
}

#[component]
pub fn PatientsPage() -> Element {
    rsx! { AppLayout { PatientsReport {} } }
}

#[component]
pub fn DepartmentsPage() -> Element {
    rsx! { AppLayout { Departments {} } }
}

#[component]
pub fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}
