//! Action dialogs of the validation queue.
//!
//! Each dialog owns its transient state (checklist ticks, reject reason) and
//! performs its own POST. On success it hands the backend message to the
//! parent, which shows the toast, refetches and closes; on failure it shows
//! the error toast itself and stays open so the user can retry.

use contracts::domain::a001_compte::aggregate::{
    Compte, RejeterCompteRequest, ValiderCompteRequest,
};
use contracts::domain::a001_compte::checklist::{
    checklist_opposition, checklist_validation, ChecklistItem,
};
use contracts::domain::a001_compte::review::{confirmation_levee_activee, motif_rejet_valide};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a001_compte::api;
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;

fn basculer_case(cases: RwSignal<Vec<ChecklistItem>>, id: String) {
    cases.update(|liste| {
        if let Some(item) = liste.iter_mut().find(|c| c.id == id) {
            item.checked = !item.checked;
        }
    });
}

#[component]
fn ChecklistView(cases: RwSignal<Vec<ChecklistItem>>) -> impl IntoView {
    view! {
        <ul class="checklist">
            <For
                each=move || cases.get()
                key=|item| item.id.clone()
                children=move |item: ChecklistItem| {
                    let id = item.id.clone();
                    let checked = item.checked;
                    view! {
                        <li class="checklist-item">
                            <label>
                                <input
                                    type="checkbox"
                                    prop:checked=checked
                                    on:change=move |_| basculer_case(cases, id.clone())
                                />
                                <span>{item.label.clone()}</span>
                            </label>
                        </li>
                    }
                }
            />
        </ul>
    }
}

/// Validate a pending account. The checklist is informational; confirmation
/// is never blocked by unticked items.
#[component]
pub fn ValiderDialog(
    compte: Compte,
    on_success: Callback<String>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let toasts = expect_context::<ToastService>();
    let cases = RwSignal::new(checklist_validation(&compte));
    let action_en_cours = RwSignal::new(false);

    let compte_id = compte.to_string_id();
    let numero = compte.numero_compte.clone();
    let nui = compte.client.nui().map(|s| s.to_string());

    let confirmer = move |_| {
        if action_en_cours.get() {
            return;
        }
        action_en_cours.set(true);

        let id = compte_id.clone();
        let body = ValiderCompteRequest {
            checkboxes: cases
                .get()
                .iter()
                .filter(|c| c.checked)
                .map(|c| c.id.clone())
                .collect(),
            nui: nui.clone(),
        };
        spawn_local(async move {
            match api::valider_compte(&id, &body).await {
                Ok(reponse) => {
                    action_en_cours.set(false);
                    on_success.run(reponse.message);
                }
                Err(erreur) => {
                    action_en_cours.set(false);
                    toasts.error(erreur);
                }
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_cancel.run(())>
            <div class="modal-card" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h3>"Valider le compte " {numero}</h3>
                    <button class="icon-btn" on:click=move |_| on_cancel.run(()) title="Fermer">
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    <p>"Contrôles juridiques effectués :"</p>
                    <ChecklistView cases=cases />
                </div>
                <div class="modal-footer">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Annuler"
                    </button>
                    <button
                        class="btn btn-primary"
                        disabled=move || action_en_cours.get()
                        on:click=confirmer
                    >
                        {move || if action_en_cours.get() { "Validation..." } else { "Valider le compte" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Lift an opposition hold. Confirmation stays disabled until the dossier is
/// complete and every checklist item is ticked.
#[component]
pub fn LeverOppositionDialog(
    compte: Compte,
    on_success: Callback<String>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let toasts = expect_context::<ToastService>();
    let cases = RwSignal::new(checklist_opposition());
    let action_en_cours = RwSignal::new(false);

    let manquants: Vec<String> = compte
        .client
        .dossier
        .documents_requis()
        .into_iter()
        .filter(|(_, valeur)| valeur.map_or(true, |v| v.trim().is_empty()))
        .map(|(label, _)| label.to_string())
        .collect();
    let documents_complets = manquants.is_empty();

    let compte_id = compte.to_string_id();
    let numero = compte.numero_compte.clone();
    let nui = compte.client.nui().map(|s| s.to_string());

    let activable = move || {
        confirmation_levee_activee(documents_complets, &cases.get()) && !action_en_cours.get()
    };

    let confirmer = move |_| {
        if action_en_cours.get() {
            return;
        }
        action_en_cours.set(true);

        let id = compte_id.clone();
        let body = ValiderCompteRequest {
            checkboxes: cases
                .get()
                .iter()
                .filter(|c| c.checked)
                .map(|c| c.id.clone())
                .collect(),
            nui: nui.clone(),
        };
        spawn_local(async move {
            match api::valider_compte(&id, &body).await {
                Ok(reponse) => {
                    action_en_cours.set(false);
                    on_success.run(reponse.message);
                }
                Err(erreur) => {
                    action_en_cours.set(false);
                    toasts.error(erreur);
                }
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_cancel.run(())>
            <div class="modal-card" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h3>"Lever l'opposition — compte " {numero}</h3>
                    <button class="icon-btn" on:click=move |_| on_cancel.run(()) title="Fermer">
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {(!documents_complets).then(|| view! {
                        <div class="alert alert-warning">
                            {icon("alert-triangle")}
                            <div>
                                <p>"Dossier client incomplet. Pièces manquantes :"</p>
                                <ul>
                                    {manquants.iter().map(|label| view! {
                                        <li>{label.clone()}</li>
                                    }).collect_view()}
                                </ul>
                            </div>
                        </div>
                    })}
                    <p>"Conditions de levée :"</p>
                    <ChecklistView cases=cases />
                </div>
                <div class="modal-footer">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Annuler"
                    </button>
                    <button
                        class="btn btn-primary"
                        disabled=move || !activable()
                        on:click=confirmer
                    >
                        {move || if action_en_cours.get() { "Levée..." } else { "Lever l'opposition" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Reject the dossier. Requires a non-blank reason.
#[component]
pub fn RejeterDialog(
    compte: Compte,
    on_success: Callback<String>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let toasts = expect_context::<ToastService>();
    let motif = RwSignal::new(String::new());
    let action_en_cours = RwSignal::new(false);

    let compte_id = compte.to_string_id();
    let numero = compte.numero_compte.clone();

    let activable = move || motif_rejet_valide(&motif.get()) && !action_en_cours.get();

    let confirmer = move |_| {
        if action_en_cours.get() || !motif_rejet_valide(&motif.get()) {
            return;
        }
        action_en_cours.set(true);

        let id = compte_id.clone();
        let body = RejeterCompteRequest {
            motif_rejet: motif.get().trim().to_string(),
        };
        spawn_local(async move {
            match api::rejeter_compte(&id, &body).await {
                Ok(reponse) => {
                    action_en_cours.set(false);
                    on_success.run(reponse.message);
                }
                Err(erreur) => {
                    action_en_cours.set(false);
                    toasts.error(erreur);
                }
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_cancel.run(())>
            <div class="modal-card" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h3>"Rejeter le dossier — compte " {numero}</h3>
                    <button class="icon-btn" on:click=move |_| on_cancel.run(()) title="Fermer">
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    <label for="motif-rejet">"Motif du rejet"</label>
                    <textarea
                        id="motif-rejet"
                        rows="4"
                        placeholder="Indiquer le motif communiqué au client"
                        prop:value=move || motif.get()
                        on:input=move |ev| motif.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="modal-footer">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Annuler"
                    </button>
                    <button
                        class="btn btn-danger"
                        disabled=move || !activable()
                        on:click=confirmer
                    >
                        {move || if action_en_cours.get() { "Rejet..." } else { "Rejeter le dossier" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
