//! Authenticated dashboard: summary stats, search, the inventory table, and
//! the create/edit modal.

use api::{InventoryItem, InventoryTotals, ItemDraft, SessionState};
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant};
use ui::icons::{FaMagnifyingGlass, FaPlus};
use ui::{use_auth, use_inventory, use_session, Icon, ItemForm, ItemTable, Navbar, StatsCards};

use crate::Route;

fn confirm_delete() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.confirm_with_message("Delete this item?").ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        true
    }
}

#[component]
pub fn Dashboard() -> Element {
    let mut auth = use_auth();
    let session = use_session();
    let inventory = use_inventory();
    let nav = use_navigator();

    let mut items = use_signal(Vec::<InventoryItem>::new);
    let mut totals = use_signal(|| InventoryTotals {
        items: 0,
        units: 0,
        value: 0.0,
    });
    let mut loading = use_signal(|| true);
    let mut search = use_signal(String::new);
    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| Option::<InventoryItem>::None);
    let mut saving = use_signal(|| false);
    let mut notice = use_signal(|| Option::<String>::None);

    // Anonymous users land on the sign-in page
    if !auth().loading && auth().user.is_none() {
        nav.replace(Route::Login {});
    }

    // Fetch the collection once the session is resolved
    let load_inventory = inventory.clone();
    let _ = use_resource(move || {
        let inventory = load_inventory.clone();
        async move {
            if auth().loading || auth().user.is_none() {
                return;
            }
            match inventory.load().await {
                Ok(list) => {
                    items.set(list);
                    totals.set(inventory.totals().await);
                }
                Err(err) => notice.set(Some(format!("Failed to load inventory: {err}"))),
            }
            loading.set(false);
        }
    });

    let save_inventory = inventory.clone();
    let handle_save = move |draft: ItemDraft| {
        let inventory = save_inventory.clone();
        spawn(async move {
            saving.set(true);
            let result = match editing() {
                Some(item) => inventory.update(&item.id, &draft).await.map(|_| ()),
                None => inventory.create(&draft).await.map(|_| ()),
            };
            saving.set(false);
            match result {
                Ok(()) => {
                    items.set(inventory.items().await);
                    totals.set(inventory.totals().await);
                    show_form.set(false);
                    editing.set(None);
                    notice.set(None);
                }
                Err(err) if err.is_forbidden() => {
                    show_form.set(false);
                    editing.set(None);
                    notice.set(Some(
                        "You don't have permission to modify inventory.".to_string(),
                    ));
                }
                Err(err) => notice.set(Some(format!("Failed to save item: {err}"))),
            }
        });
    };

    let delete_inventory = inventory.clone();
    let handle_delete = move |id: String| {
        if !confirm_delete() {
            return;
        }
        let inventory = delete_inventory.clone();
        spawn(async move {
            match inventory.delete(&id).await {
                Ok(()) => {
                    items.set(inventory.items().await);
                    totals.set(inventory.totals().await);
                }
                Err(err) if err.is_forbidden() => {
                    notice.set(Some(
                        "You don't have permission to modify inventory.".to_string(),
                    ));
                }
                Err(err) => notice.set(Some(format!("Failed to delete item: {err}"))),
            }
        });
    };

    let sign_out_session = session.clone();
    let sign_out_inventory = inventory.clone();
    let handle_sign_out = move |_| {
        let session = sign_out_session.clone();
        let inventory = sign_out_inventory.clone();
        spawn(async move {
            session.sign_out().await;
            inventory.clear().await;
            auth.set(SessionState {
                user: None,
                loading: false,
            });
            nav.replace(Route::Login {});
        });
    };

    if auth().loading {
        return rsx! {
            div {
                class: "page-loading",
                div { class: "spinner" }
            }
        };
    }

    let query = search();
    let query = query.trim();
    let visible: Vec<InventoryItem> = if query.is_empty() {
        items()
    } else {
        items().into_iter().filter(|i| i.matches(query)).collect()
    };

    rsx! {
        Navbar {
            user: auth().user.clone(),
            on_sign_out: handle_sign_out,
        }

        main {
            class: "dashboard",

            if let Some(msg) = notice() {
                div {
                    class: "notice",
                    span { "{msg}" }
                    button {
                        class: "notice-dismiss",
                        aria_label: "Dismiss",
                        onclick: move |_| notice.set(None),
                        "Dismiss"
                    }
                }
            }

            StatsCards { totals: totals() }

            div {
                class: "toolbar",
                div {
                    class: "search-box",
                    Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                    input {
                        class: "search-input",
                        r#type: "search",
                        placeholder: "Search by name, category, or SKU",
                        value: "{search}",
                        oninput: move |evt| search.set(evt.value()),
                    }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| {
                        editing.set(None);
                        show_form.set(true);
                    },
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    span { "Add Item" }
                }
            }

            ItemTable {
                items: visible,
                loading: loading(),
                searching: !query.is_empty(),
                on_add: move |_| {
                    editing.set(None);
                    show_form.set(true);
                },
                on_edit: move |item: InventoryItem| {
                    editing.set(Some(item));
                    show_form.set(true);
                },
                on_delete: handle_delete,
            }
        }

        if show_form() {
            ItemForm {
                item: editing(),
                saving: saving(),
                on_save: handle_save,
                on_cancel: move |_| {
                    show_form.set(false);
                    editing.set(None);
                },
            }
        }
    }
}
