//! Summary cards over the inventory totals.

use api::InventoryTotals;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBoxOpen, FaCubes, FaDollarSign};
use dioxus_free_icons::Icon;

#[component]
pub fn StatsCards(totals: InventoryTotals) -> Element {
    rsx! {
        div {
            class: "stats-grid",
            div {
                class: "stat-card",
                Icon { icon: FaBoxOpen, width: 24, height: 24 }
                div {
                    p { class: "stat-label", "Total Items" }
                    p { class: "stat-value", "{totals.items}" }
                }
            }
            div {
                class: "stat-card",
                Icon { icon: FaCubes, width: 24, height: 24 }
                div {
                    p { class: "stat-label", "Total Units" }
                    p { class: "stat-value", "{totals.units}" }
                }
            }
            div {
                class: "stat-card",
                Icon { icon: FaDollarSign, width: 24, height: 24 }
                div {
                    p { class: "stat-label", "Total Value" }
                    p { class: "stat-value", "${totals.value:.2}" }
                }
            }
        }
    }
}
