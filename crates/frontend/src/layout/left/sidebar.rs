//! Sidebar component with collapsible menu groups

use crate::layout::center::tabs::tab_label_for_key;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "comptes",
            label: "Comptes",
            icon: "landmark",
            items: vec![(
                "a001_compte_validation",
                tab_label_for_key("a001_compte_validation"),
                "check-circle",
            )],
        },
        MenuGroup {
            id: "references",
            label: "Référentiels",
            icon: "database",
            items: vec![
                (
                    "a003_gestionnaire",
                    tab_label_for_key("a003_gestionnaire"),
                    "users",
                ),
                ("a004_frais", tab_label_for_key("a004_frais"), "percent"),
                (
                    "a005_plan_comptable",
                    tab_label_for_key("a005_plan_comptable"),
                    "book",
                ),
            ],
        },
        MenuGroup {
            id: "operations",
            label: "Opérations",
            icon: "layers",
            items: vec![("a006_retrait", tab_label_for_key("a006_retrait"), "cash")],
        },
        MenuGroup {
            id: "information",
            label: "Information",
            icon: "file-text",
            items: vec![(
                "p900_journal",
                tab_label_for_key("p900_journal"),
                "file-text",
            )],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let (collapsed, set_collapsed) = signal::<Vec<&'static str>>(Vec::new());

    let toggle_group = move |group_id: &'static str| {
        set_collapsed.update(|c| {
            if let Some(pos) = c.iter().position(|g| *g == group_id) {
                c.remove(pos);
            } else {
                c.push(group_id);
            }
        });
    };

    view! {
        <nav class="sidebar">
            {get_menu_groups()
                .into_iter()
                .map(|group| {
                    let group_id = group.id;
                    let is_collapsed = move || collapsed.get().contains(&group_id);
                    view! {
                        <div class="sidebar__group">
                            <button
                                class="sidebar__group-header"
                                on:click=move |_| toggle_group(group_id)
                            >
                                {icon(group.icon)}
                                <span class="sidebar__group-label">{group.label}</span>
                                <span class="sidebar__chevron">
                                    {move || if is_collapsed() {
                                        icon("chevron-right")
                                    } else {
                                        icon("chevron-down")
                                    }}
                                </span>
                            </button>
                            <div class="sidebar__items" class:hidden=is_collapsed>
                                {group
                                    .items
                                    .into_iter()
                                    .map(|(key, label, item_icon)| {
                                        let is_active = move || {
                                            tabs_store.active.get().as_deref() == Some(key)
                                        };
                                        view! {
                                            <button
                                                class="sidebar__item"
                                                class:sidebar__item--active=is_active
                                                on:click=move |_| tabs_store.open_tab(key, label)
                                            >
                                                {icon(item_icon)}
                                                <span>{label}</span>
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}
