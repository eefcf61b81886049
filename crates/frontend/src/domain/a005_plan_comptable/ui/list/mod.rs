//! Chart of accounts, sorted by account number.

use contracts::domain::a005_plan_comptable::aggregate::{CompteComptable, CompteComptableDto};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a005_plan_comptable::api;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, SearchInput, Searchable};
use crate::shared::toast::ToastService;

use super::details::CompteComptableForm;

impl Searchable for CompteComptable {
    fn matches_filter(&self, filter: &str) -> bool {
        let terme = filter.to_lowercase();
        self.numero.contains(filter.trim())
            || self.intitule.to_lowercase().contains(&terme)
    }
}

fn dto_depuis(compte: &CompteComptable) -> CompteComptableDto {
    CompteComptableDto {
        id: Some(compte.to_string_id()),
        numero: compte.numero.clone(),
        intitule: compte.intitule.clone(),
        sens: compte.sens,
        actif: compte.actif,
    }
}

#[component]
pub fn PlanComptableList() -> impl IntoView {
    let toasts = expect_context::<ToastService>();

    let comptes = RwSignal::new(Vec::<CompteComptable>::new());
    let chargement = RwSignal::new(false);
    let (filtre, set_filtre) = signal(String::new());

    let formulaire = RwSignal::new(None::<CompteComptableDto>);

    let charger = move || {
        if chargement.get_untracked() {
            return;
        }
        chargement.set(true);
        spawn_local(async move {
            match api::fetch_plan_comptable().await {
                Ok(liste) => comptes.set(liste),
                Err(e) => toasts.error(e),
            }
            chargement.set(false);
        });
    };
    charger();

    // Always numeric order; the chart reads like the printed OHADA plan.
    let lignes = move || {
        let mut liste = filter_list(comptes.get(), &filtre.get());
        liste.sort_by(|a, b| a.numero.cmp(&b.numero));
        liste
    };

    let apres_sauvegarde = Callback::new(move |_: ()| {
        toasts.success("Compte comptable enregistré");
        formulaire.set(None);
        charger();
    });

    view! {
        <div class="screen plan-comptable-list">
            <div class="screen-toolbar">
                <SearchInput
                    value=filtre
                    on_change=Callback::new(move |valeur: String| set_filtre.set(valeur))
                    placeholder="Numéro ou intitulé..."
                />
                <button
                    class="btn btn-primary"
                    on:click=move |_| formulaire.set(Some(CompteComptableDto::default()))
                >
                    {icon("plus")}
                    "Nouveau compte"
                </button>
                <button
                    class="btn"
                    on:click=move |_| charger()
                    disabled=move || chargement.get()
                    title="Recharger la liste"
                >
                    {icon("refresh")}
                </button>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Numéro"</th>
                        <th>"Classe"</th>
                        <th>"Intitulé"</th>
                        <th>"Sens"</th>
                        <th>"Actif"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=lignes
                        key=|c| c.to_string_id()
                        children=move |c: CompteComptable| {
                            let dto = dto_depuis(&c);
                            let classe = c
                                .classe()
                                .map(|d| d.to_string())
                                .unwrap_or_else(|| "—".to_string());
                            view! {
                                <tr on:click=move |_| formulaire.set(Some(dto.clone()))>
                                    <td class="cell-mono">{c.numero.clone()}</td>
                                    <td>{classe}</td>
                                    <td>{c.intitule.clone()}</td>
                                    <td>{c.sens.libelle()}</td>
                                    <td>{if c.actif { "Oui" } else { "Non" }}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            {move || formulaire.get().map(|dto| view! {
                <CompteComptableForm
                    dto=dto
                    on_saved=apres_sauvegarde
                    on_cancel=Callback::new(move |_| formulaire.set(None))
                />
            })}
        </div>
    }
}
