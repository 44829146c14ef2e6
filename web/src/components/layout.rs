use dioxus::prelude::*;
use dioxus_router::{use_route, Link};

use crate::app::Route;

#[component]
pub fn AppLayout(children: Element) -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-gray-50",
            Header {}
            main {
                class: "max-w-7xl mx-auto px-6 py-8",
                div { class: "space-y-6", {children} }
            }
        }
    }
}

#[component]
fn Header() -> Element {
    rsx! {
        header {
            class: "bg-white shadow-sm border-b border-gray-200",
            div {
                class: "px-6 py-4 flex items-center justify-between",
                Link {
                    to: Route::PatientsPage {},
                    class: "text-xl font-bold text-gray-900 hover:text-blue-600",
                    "LIMS Reports"
                }
                nav {
                    class: "flex items-center space-x-1",
                    NavTab { to: Route::PatientsPage {}, label: "Patient samples" }
                    NavTab { to: Route::DepartmentsPage {}, label: "Departments" }
                }
            }
        }
    }
}

#[component]
fn NavTab(to: Route, label: &'static str) -> Element {
    let route = use_route::<Route>();
    let class_str = if route == to {
        "px-3 py-2 rounded-lg text-sm font-medium bg-blue-100 text-blue-700 hover:bg-blue-200"
    } else {
        "px-3 py-2 rounded-lg text-sm font-medium text-gray-700 hover:bg-gray-100 hover:text-gray-900"
    };

    rsx! {
        Link { to, class: class_str, "{label}" }
    }
}
