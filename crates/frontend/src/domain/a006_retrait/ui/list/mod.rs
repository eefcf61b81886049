//! Remote-withdrawal requests between branches.

use contracts::domain::a006_retrait::aggregate::{DemandeRetrait, StatutDemande};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a006_retrait::api;
use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, SearchInput, Searchable};
use crate::shared::toast::ToastService;

use super::details::{DemandeRetraitForm, RejeterDemandeDialog};

impl Searchable for DemandeRetrait {
    fn matches_filter(&self, filter: &str) -> bool {
        let terme = filter.to_lowercase();
        self.numero_compte.to_lowercase().contains(&terme)
            || self.nom_client.to_lowercase().contains(&terme)
            || self.agence_demandeuse.to_lowercase().contains(&terme)
            || self.statut.libelle().to_lowercase().contains(&terme)
    }
}

fn badge_statut(statut: StatutDemande) -> &'static str {
    match statut {
        StatutDemande::EnAttente => "badge badge-pending",
        StatutDemande::Approuvee => "badge badge-ok",
        StatutDemande::Rejetee => "badge badge-error",
        StatutDemande::Servie => "badge badge-done",
    }
}

#[component]
pub fn RetraitList() -> impl IntoView {
    let toasts = expect_context::<ToastService>();

    let demandes = RwSignal::new(Vec::<DemandeRetrait>::new());
    let chargement = RwSignal::new(false);
    let action_en_cours = RwSignal::new(false);
    let (filtre, set_filtre) = signal(String::new());

    let creation_ouverte = RwSignal::new(false);
    let rejet_en_cours = RwSignal::new(None::<DemandeRetrait>);

    let charger = move || {
        if chargement.get_untracked() {
            return;
        }
        chargement.set(true);
        spawn_local(async move {
            match api::fetch_demandes().await {
                Ok(liste) => demandes.set(liste),
                Err(e) => toasts.error(e),
            }
            chargement.set(false);
        });
    };
    charger();

    // Most recent first; a cash desk works on what just arrived.
    let lignes = move || {
        let mut liste = filter_list(demandes.get(), &filtre.get());
        liste.sort_by(|a, b| b.date_creation.cmp(&a.date_creation));
        liste
    };

    let approuver = move |id: String| {
        if action_en_cours.get_untracked() {
            return;
        }
        action_en_cours.set(true);
        spawn_local(async move {
            match api::approuver_demande(&id).await {
                Ok(()) => toasts.success("Demande approuvée"),
                Err(e) => toasts.error(e),
            }
            action_en_cours.set(false);
            charger();
        });
    };

    let servir = move |id: String| {
        if action_en_cours.get_untracked() {
            return;
        }
        action_en_cours.set(true);
        spawn_local(async move {
            match api::servir_demande(&id).await {
                Ok(()) => toasts.success("Retrait servi"),
                Err(e) => toasts.error(e),
            }
            action_en_cours.set(false);
            charger();
        });
    };

    let apres_creation = Callback::new(move |_: ()| {
        toasts.success("Demande envoyée");
        creation_ouverte.set(false);
        charger();
    });

    let apres_rejet = Callback::new(move |_: ()| {
        toasts.success("Demande rejetée");
        rejet_en_cours.set(None);
        charger();
    });

    view! {
        <div class="screen retrait-list">
            <div class="screen-toolbar">
                <SearchInput
                    value=filtre
                    on_change=Callback::new(move |valeur: String| set_filtre.set(valeur))
                    placeholder="Compte, client, agence, statut..."
                />
                <button
                    class="btn btn-primary"
                    on:click=move |_| creation_ouverte.set(true)
                >
                    {icon("plus")}
                    "Nouvelle demande"
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
                        <th>"Compte"</th>
                        <th>"Client"</th>
                        <th>"Montant"</th>
                        <th>"Agence demandeuse"</th>
                        <th>"Reçue le"</th>
                        <th>"Statut"</th>
                        <th>"Motif"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=lignes
                        key=|d| d.to_string_id()
                        children=move |d: DemandeRetrait| {
                            let id_approuver = d.to_string_id();
                            let id_servir = d.to_string_id();
                            let pour_rejet = d.clone();
                            let motif = d.motif.clone().unwrap_or_else(|| "—".to_string());
                            view! {
                                <tr>
                                    <td class="cell-mono">{d.numero_compte.clone()}</td>
                                    <td>{d.nom_client.clone()}</td>
                                    <td class="cell-amount">
                                        {format!("{} {}", d.montant, d.devise)}
                                    </td>
                                    <td>{d.agence_demandeuse.clone()}</td>
                                    <td>{format_timestamp(d.date_creation)}</td>
                                    <td>
                                        <span class=badge_statut(d.statut)>
                                            {d.statut.libelle()}
                                        </span>
                                    </td>
                                    <td>{motif}</td>
                                    <td class="cell-actions">
                                        {d.peut_decider().then(|| view! {
                                            <button
                                                class="btn btn-small btn-primary"
                                                disabled=move || action_en_cours.get()
                                                on:click=move |_| approuver(id_approuver.clone())
                                            >
                                                "Approuver"
                                            </button>
                                            <button
                                                class="btn btn-small btn-danger"
                                                disabled=move || action_en_cours.get()
                                                on:click=move |_| rejet_en_cours.set(Some(pour_rejet.clone()))
                                            >
                                                "Rejeter"
                                            </button>
                                        })}
                                        {d.peut_servir().then(|| view! {
                                            <button
                                                class="btn btn-small"
                                                disabled=move || action_en_cours.get()
                                                on:click=move |_| servir(id_servir.clone())
                                            >
                                                {icon("cash")}
                                                "Servir"
                                            </button>
                                        })}
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            {move || creation_ouverte.get().then(|| view! {
                <DemandeRetraitForm
                    on_saved=apres_creation
                    on_cancel=Callback::new(move |_| creation_ouverte.set(false))
                />
            })}

            {move || rejet_en_cours.get().map(|demande| view! {
                <RejeterDemandeDialog
                    demande=demande
                    on_success=apres_rejet
                    on_cancel=Callback::new(move |_| rejet_en_cours.set(None))
                />
            })}
        </div>
    }
}
