//! Top navigation bar with the profile slide-in panel.

use api::UserInfo;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBars, FaBoxesStacked, FaRightFromBracket, FaUser, FaXmark};
use dioxus_free_icons::Icon;

use crate::components::{Button, ButtonVariant};

/// Brand bar shown on every authenticated view. The hamburger toggles a
/// profile panel with the signed-in identity and the sign-out action.
#[component]
pub fn Navbar(user: Option<UserInfo>, on_sign_out: EventHandler<()>) -> Element {
    let mut menu_open = use_signal(|| false);

    rsx! {
        header {
            class: "navbar",
            div {
                class: "navbar-brand",
                Icon { icon: FaBoxesStacked, width: 22, height: 22 }
                span { class: "navbar-title", "Stockpile" }
            }
            button {
                class: "navbar-menu-toggle",
                aria_label: "Open menu",
                onclick: move |_| menu_open.set(!menu_open()),
                if menu_open() {
                    Icon { icon: FaXmark, width: 20, height: 20 }
                } else {
                    Icon { icon: FaBars, width: 20, height: 20 }
                }
            }
        }

        if menu_open() {
            div {
                class: "profile-backdrop",
                onclick: move |_| menu_open.set(false),
                aside {
                    class: "profile-panel",
                    onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                    div {
                        class: "profile-identity",
                        Icon { icon: FaUser, width: 28, height: 28 }
                        if let Some(user) = &user {
                            div {
                                p { class: "profile-name", "{user.display_name()}" }
                                p { class: "profile-email", "{user.email}" }
                            }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        class: "profile-sign-out",
                        onclick: move |_| {
                            menu_open.set(false);
                            on_sign_out.call(());
                        },
                        Icon { icon: FaRightFromBracket, width: 16, height: 16 }
                        span { "Sign out" }
                    }
                }
            }
        }
    }
}
