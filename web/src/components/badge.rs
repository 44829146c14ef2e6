use dioxus::prelude::*;
use lims_core::BadgeTone;

/// Pill showing a detail record's status.
#[component]
pub fn StatusBadge(status: String) -> Element {
    let tone = BadgeTone::from_status(&status);
    rsx! {
        span {
            class: "inline-flex items-center px-2 py-0.5 rounded-full text-xs font-medium {tone.class()}",
            "{status}"
        }
    }
}
