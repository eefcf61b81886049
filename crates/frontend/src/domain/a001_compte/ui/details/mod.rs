//! Read-only account detail modal.
//!
//! Shows the account, the client dossier with one line per required document
//! and the action buttons. The buttons only surface the actions the current
//! review state allows; the actual dialogs belong to the list screen.

use contracts::domain::a001_compte::aggregate::{Compte, EtatValidation};
use contracts::domain::a001_compte::review::{peut_lever_opposition, peut_valider};
use leptos::prelude::*;

use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;

fn ligne_document(label: &str, valeur: Option<&str>) -> impl IntoView {
    let present = valeur.map_or(false, |v| !v.trim().is_empty());
    let (classe, etat) = if present {
        ("doc-present", "Fourni")
    } else {
        ("doc-absent", "Manquant")
    };
    view! {
        <li class=format!("doc-line {}", classe)>
            <span class="doc-label">{label.to_string()}</span>
            <span class="doc-state">{etat}</span>
        </li>
    }
}

#[component]
pub fn CompteDetails(
    compte: Compte,
    on_valider: Callback<()>,
    on_lever: Callback<()>,
    on_rejeter: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let etat = compte.etat_validation();
    let documents: Vec<_> = compte
        .client
        .dossier
        .documents_requis()
        .into_iter()
        .map(|(label, valeur)| (label, valeur.map(|v| v.to_string())))
        .collect();

    let peut_rejeter = etat != EtatValidation::Valide;
    let motif_rejet = compte.motif_rejet.clone();
    let code_gestionnaire = compte
        .code_gestionnaire
        .clone()
        .unwrap_or_else(|| "—".to_string());

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal-card modal-wide" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h3>"Compte " {compte.numero_compte.clone()}</h3>
                    <span class=format!("badge {}", etat.badge_class())>{etat.libelle()}</span>
                    <button class="icon-btn" on:click=move |_| on_close.run(()) title="Fermer">
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body details-grid">
                    <section>
                        <h4>"Compte"</h4>
                        <dl>
                            <dt>"Type"</dt>
                            <dd>{compte.type_compte.libelle()}</dd>
                            <dt>"Statut"</dt>
                            <dd>{compte.statut.libelle()}</dd>
                            <dt>"Solde"</dt>
                            <dd>{format!("{} {}", compte.solde, compte.devise)}</dd>
                            <dt>"Disponible"</dt>
                            <dd>{format!("{} {}", compte.solde_disponible, compte.devise)}</dd>
                            <dt>"Bloqué"</dt>
                            <dd>{format!("{} {}", compte.solde_bloque, compte.devise)}</dd>
                            <dt>"Gestionnaire"</dt>
                            <dd>{code_gestionnaire}</dd>
                            <dt>"Ouvert le"</dt>
                            <dd>{format_timestamp(compte.date_creation)}</dd>
                        </dl>
                    </section>
                    <section>
                        <h4>"Client"</h4>
                        <dl>
                            <dt>"Nom"</dt>
                            <dd>{compte.client.nom.clone()}</dd>
                            <dt>"Type"</dt>
                            <dd>{compte.client.type_client_libelle()}</dd>
                            <dt>"Email"</dt>
                            <dd>{compte.client.email.clone()}</dd>
                            <dt>"Téléphone"</dt>
                            <dd>{compte.client.telephone.clone()}</dd>
                            <dt>"Ville"</dt>
                            <dd>
                                {compte.client.adresse_ville.clone().unwrap_or_else(|| "—".to_string())}
                            </dd>
                            <dt>"Quartier"</dt>
                            <dd>
                                {compte.client.adresse_quartier.clone().unwrap_or_else(|| "—".to_string())}
                            </dd>
                        </dl>
                    </section>
                    <section>
                        <h4>"Pièces du dossier"</h4>
                        <ul class="doc-list">
                            {documents.into_iter().map(|(label, valeur)| {
                                ligne_document(label, valeur.as_deref())
                            }).collect_view()}
                        </ul>
                    </section>
                    {motif_rejet.map(|motif| view! {
                        <section>
                            <h4>"Motif de rejet"</h4>
                            <p class="motif-rejet">{motif}</p>
                        </section>
                    })}
                </div>
                <div class="modal-footer">
                    {peut_valider(etat).then(|| view! {
                        <button class="btn btn-primary" on:click=move |_| on_valider.run(())>
                            {icon("check-circle")}
                            "Valider"
                        </button>
                    })}
                    {peut_lever_opposition(etat).then(|| view! {
                        <button class="btn btn-primary" on:click=move |_| on_lever.run(())>
                            "Lever l'opposition"
                        </button>
                    })}
                    {peut_rejeter.then(|| view! {
                        <button class="btn btn-danger" on:click=move |_| on_rejeter.run(())>
                            "Rejeter"
                        </button>
                    })}
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Fermer"
                    </button>
                </div>
            </div>
        </div>
    }
}
