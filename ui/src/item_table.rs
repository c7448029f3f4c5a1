//! Inventory table with stock-level highlighting.

use api::InventoryItem;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPenToSquare, FaPlus, FaTrashCan};
use dioxus_free_icons::Icon;

use crate::components::{Button, ButtonVariant};

fn stock_class(quantity: u32) -> &'static str {
    if quantity < 10 {
        "stock-low"
    } else if quantity < 50 {
        "stock-medium"
    } else {
        "stock-high"
    }
}

#[component]
pub fn ItemTable(
    items: Vec<InventoryItem>,
    loading: bool,
    /// True when a non-empty search query produced this list.
    searching: bool,
    on_add: EventHandler<()>,
    on_edit: EventHandler<InventoryItem>,
    on_delete: EventHandler<String>,
) -> Element {
    if loading {
        return rsx! {
            div {
                class: "table-placeholder",
                div { class: "spinner" }
                p { "Loading inventory..." }
            }
        };
    }

    if items.is_empty() {
        return rsx! {
            div {
                class: "table-placeholder",
                if searching {
                    p { "No items match your search." }
                } else {
                    p { "No items yet." }
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| on_add.call(()),
                        Icon { icon: FaPlus, width: 14, height: 14 }
                        span { "Add your first item" }
                    }
                }
            }
        };
    }

    rsx! {
        div {
            class: "item-table-wrap",
            table {
                class: "item-table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Category" }
                        th { "SKU" }
                        th { "Quantity" }
                        th { "Price" }
                        th { "" }
                    }
                }
                tbody {
                    for item in items {
                        tr {
                            key: "{item.id}",
                            td {
                                p { class: "item-name", "{item.name}" }
                                if !item.description.is_empty() {
                                    p { class: "item-description", "{item.description}" }
                                }
                            }
                            td { "{item.category}" }
                            td { code { "{item.sku}" } }
                            td {
                                span {
                                    class: "stock-badge {stock_class(item.quantity)}",
                                    "{item.quantity}"
                                }
                            }
                            td { "${item.price:.2}" }
                            td {
                                class: "item-actions",
                                button {
                                    class: "icon-button",
                                    aria_label: "Edit {item.name}",
                                    onclick: {
                                        let item = item.clone();
                                        move |_| on_edit.call(item.clone())
                                    },
                                    Icon { icon: FaPenToSquare, width: 16, height: 16 }
                                }
                                button {
                                    class: "icon-button icon-button-danger",
                                    aria_label: "Delete {item.name}",
                                    onclick: {
                                        let id = item.id.clone();
                                        move |_| on_delete.call(id.clone())
                                    },
                                    Icon { icon: FaTrashCan, width: 16, height: 16 }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
