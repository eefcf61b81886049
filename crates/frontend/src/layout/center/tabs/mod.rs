//! Tab management: the tab bar, per-tab pages and the key → view mapping.
//!
//! `tab_label_for_key` and `TabPage` are the single source of truth for tab
//! titles and tab content respectively.

pub mod tab;

use crate::domain::a001_compte::ui::list::CompteValidationList;
use crate::domain::a003_gestionnaire::ui::list::GestionnaireList;
use crate::domain::a004_frais::ui::list::FraisList;
use crate::domain::a005_plan_comptable::ui::list::PlanComptableList;
use crate::domain::a006_retrait::ui::list::RetraitList;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::projections::p900_journal::ui::list::JournalList;
use leptos::prelude::*;
use tab::Tab as TabComponent;

/// Human-readable tab title for a tab key. Fallback: the key itself.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "a001_compte_validation" => "Validation des comptes",
        "a003_gestionnaire" => "Gestionnaires",
        "a004_frais" => "Frais et commissions",
        "a005_plan_comptable" => "Plan comptable",
        "a006_retrait" => "Retraits déplacés",
        "p900_journal" => "Journal comptable",
        _ => "Onglet inconnu",
    }
}

// Helper component for rendering individual tab content
#[component]
fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let tab_key = tab.key.clone();
    let tab_key_for_active_check = tab_key.clone();

    // Reactive check: is this tab the active one?
    let is_active = move || tabs_store.active.get().as_ref() == Some(&tab_key_for_active_check);

    // Render content based on tab key
    let content = match tab_key.as_str() {
        "a001_compte_validation" => view! { <CompteValidationList /> }.into_any(),
        "a003_gestionnaire" => view! { <GestionnaireList /> }.into_any(),
        "a004_frais" => view! { <FraisList /> }.into_any(),
        "a005_plan_comptable" => view! { <PlanComptableList /> }.into_any(),
        "a006_retrait" => view! { <RetraitList /> }.into_any(),
        "p900_journal" => view! { <JournalList /> }.into_any(),
        other => {
            log::warn!("Unknown tab key: {}", other);
            view! { <div class="placeholder">{"Écran non disponible"}</div> }.into_any()
        }
    };

    view! {
        <div
            class="tab-page"
            class:hidden=move || !is_active()
            data-tab-key=tab_key
        >
            {content}
        </div>
    }
}

#[component]
pub fn Tabs() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="tabs-container">
            <div class="tabs-bar">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| {
                        view! { <TabComponent tab=tab /> }
                    }
                />
            </div>
            <div class="tab-content">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab: TabData| {
                        view! { <TabPage tab=tab tabs_store=tabs_store /> }
                    }
                />
            </div>
        </div>
    }
}
