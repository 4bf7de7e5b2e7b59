//! Filter form: date range, region and well name.

use dioxus::prelude::*;
use ogp_core::filter::{FilterCriteria, Region};

const LABEL_STYLE: &str = "display: flex; flex-direction: column; gap: 4px; font-weight: bold; font-size: 13px;";
const INPUT_STYLE: &str = "padding: 6px 8px; border: 1px solid #ccc; border-radius: 4px; font-size: 14px;";

#[derive(Props, Clone, PartialEq)]
pub struct FilterFormProps {
    /// Called with the current criteria, verbatim, on submit
    pub on_submit: EventHandler<FilterCriteria>,
}

/// Four inputs bound to a local `FilterCriteria`. Nothing is validated or
/// trimmed; empty fields are simply left out of the query later on.
#[component]
pub fn FilterForm(props: FilterFormProps) -> Element {
    let mut filters = use_signal(FilterCriteria::default);
    let current = filters();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        props.on_submit.call(filters());
    };

    rsx! {
        div {
            class: "filter-container",
            style: "background: #fff; border-radius: 8px; padding: 16px; margin-bottom: 16px; box-shadow: 0 1px 3px rgba(0,0,0,0.12);",
            form {
                onsubmit: on_submit,
                div {
                    class: "filter-row",
                    style: "display: flex; flex-wrap: wrap; gap: 12px; align-items: flex-end;",
                    label {
                        style: LABEL_STYLE,
                        "Start Date"
                        input {
                            r#type: "date",
                            name: "startDate",
                            style: INPUT_STYLE,
                            value: "{current.start_date}",
                            onchange: move |evt: Event<FormData>| filters.write().start_date = evt.value(),
                        }
                    }
                    label {
                        style: LABEL_STYLE,
                        "End Date"
                        input {
                            r#type: "date",
                            name: "endDate",
                            style: INPUT_STYLE,
                            value: "{current.end_date}",
                            onchange: move |evt: Event<FormData>| filters.write().end_date = evt.value(),
                        }
                    }
                    label {
                        style: LABEL_STYLE,
                        "Region"
                        select {
                            name: "region",
                            style: INPUT_STYLE,
                            onchange: move |evt: Event<FormData>| filters.write().region = evt.value(),
                            option {
                                value: "",
                                selected: current.region.is_empty(),
                                "All Regions"
                            }
                            for region in Region::ALL {
                                option {
                                    value: "{region}",
                                    selected: current.region == region.as_str(),
                                    "{region}"
                                }
                            }
                        }
                    }
                    label {
                        style: LABEL_STYLE,
                        "Well Name"
                        input {
                            r#type: "text",
                            name: "wellName",
                            placeholder: "Enter well name",
                            style: INPUT_STYLE,
                            value: "{current.well_name}",
                            oninput: move |evt: Event<FormData>| filters.write().well_name = evt.value(),
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "filter-button",
                        style: "padding: 8px 16px; background: #1565C0; color: #fff; border: none; border-radius: 4px; cursor: pointer;",
                        "Apply Filters"
                    }
                }
            }
        }
    }
}
