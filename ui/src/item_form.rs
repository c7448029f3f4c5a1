//! Modal create/edit form for inventory records.

use api::{InventoryItem, ItemDraft};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input, Label};

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close`.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Create/edit form. Pass `item` to edit an existing record; the form emits a
/// validated draft through `on_save` and never talks to the backend itself.
#[component]
pub fn ItemForm(
    item: Option<InventoryItem>,
    #[props(default = false)] saving: bool,
    on_save: EventHandler<ItemDraft>,
    on_cancel: EventHandler<()>,
) -> Element {
    let editing = item.is_some();

    // Prefill from the record under edit; a fresh form starts blank.
    let (name, description, category, sku, quantity, price) = match &item {
        Some(i) => (
            i.name.clone(),
            i.description.clone(),
            i.category.clone(),
            i.sku.clone(),
            i.quantity.to_string(),
            i.price.to_string(),
        ),
        None => Default::default(),
    };
    let mut name = use_signal(move || name);
    let mut description = use_signal(move || description);
    let mut category = use_signal(move || category);
    let mut sku = use_signal(move || sku);
    let mut quantity = use_signal(move || quantity);
    let mut price = use_signal(move || price);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let draft = ItemDraft {
            name: name().trim().to_string(),
            description: description().trim().to_string(),
            category: category().trim().to_string(),
            sku: sku().trim().to_string(),
            quantity: quantity().parse().unwrap_or(0),
            price: price().parse().unwrap_or(0.0),
        };
        match draft.validate() {
            Ok(()) => {
                error.set(None);
                on_save.call(draft);
            }
            Err(err) => error.set(Some(err.to_string())),
        }
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            form {
                class: "item-form",
                onsubmit: handle_submit,
                h2 {
                    class: "item-form-title",
                    if editing { "Edit Item" } else { "Add Item" }
                }

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                div {
                    class: "form-field",
                    Label { html_for: "item-name", "Name" }
                    Input {
                        id: "item-name",
                        placeholder: "Product name",
                        value: name(),
                        oninput: move |evt: FormEvent| name.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    Label { html_for: "item-description", "Description" }
                    Input {
                        id: "item-description",
                        placeholder: "Optional description",
                        value: description(),
                        oninput: move |evt: FormEvent| description.set(evt.value()),
                    }
                }

                div {
                    class: "form-row",
                    div {
                        class: "form-field",
                        Label { html_for: "item-category", "Category" }
                        Input {
                            id: "item-category",
                            placeholder: "e.g. Electronics",
                            value: category(),
                            oninput: move |evt: FormEvent| category.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        Label { html_for: "item-sku", "SKU" }
                        Input {
                            id: "item-sku",
                            placeholder: "e.g. WID-001",
                            value: sku(),
                            oninput: move |evt: FormEvent| sku.set(evt.value()),
                        }
                    }
                }

                div {
                    class: "form-row",
                    div {
                        class: "form-field",
                        Label { html_for: "item-quantity", "Quantity" }
                        Input {
                            id: "item-quantity",
                            r#type: "number",
                            min: "0",
                            value: quantity(),
                            oninput: move |evt: FormEvent| quantity.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        Label { html_for: "item-price", "Price" }
                        Input {
                            id: "item-price",
                            r#type: "number",
                            min: "0",
                            step: "0.01",
                            value: price(),
                            oninput: move |evt: FormEvent| price.set(evt.value()),
                        }
                    }
                }

                div {
                    class: "form-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: saving,
                        if saving {
                            "Saving..."
                        } else if editing {
                            "Save Changes"
                        } else {
                            "Add Item"
                        }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
