//! Dialogs of the withdrawal workflow: creation form and reject-with-reason.

use contracts::domain::a006_retrait::aggregate::{
    DemandeRetrait, DemandeRetraitDto, RejeterDemandeRequest,
};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a006_retrait::api;
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;

#[component]
pub fn DemandeRetraitForm(on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let toasts = expect_context::<ToastService>();
    let brouillon = RwSignal::new(DemandeRetraitDto {
        devise: "XAF".into(),
        ..Default::default()
    });
    let enregistrement = RwSignal::new(false);

    let enregistrer = move |_| {
        if enregistrement.get() {
            return;
        }
        let dto = brouillon.get();
        if let Err(message) = dto.validate() {
            toasts.error(message);
            return;
        }
        enregistrement.set(true);
        spawn_local(async move {
            match api::creer_demande(&dto).await {
                Ok(_) => {
                    enregistrement.set(false);
                    on_saved.run(());
                }
                Err(erreur) => {
                    enregistrement.set(false);
                    toasts.error(erreur);
                }
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_cancel.run(())>
            <div class="modal-card" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h3>"Nouvelle demande de retrait déplacé"</h3>
                    <button class="icon-btn" on:click=move |_| on_cancel.run(()) title="Fermer">
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body form-grid">
                    <label>
                        "Numéro de compte"
                        <input
                            type="text"
                            prop:value=move || brouillon.get().numero_compte
                            on:input=move |ev| brouillon.update(|d| {
                                d.numero_compte = event_target_value(&ev);
                            })
                        />
                    </label>
                    <label>
                        "Montant"
                        <input
                            type="text"
                            inputmode="decimal"
                            prop:value=move || brouillon.get().montant
                            on:input=move |ev| brouillon.update(|d| d.montant = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Devise"
                        <input
                            type="text"
                            prop:value=move || brouillon.get().devise
                            on:input=move |ev| brouillon.update(|d| d.devise = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Agence demandeuse"
                        <input
                            type="text"
                            prop:value=move || brouillon.get().agence_demandeuse
                            on:input=move |ev| brouillon.update(|d| {
                                d.agence_demandeuse = event_target_value(&ev);
                            })
                        />
                    </label>
                </div>
                <div class="modal-footer">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Annuler"
                    </button>
                    <button
                        class="btn btn-primary"
                        disabled=move || enregistrement.get()
                        on:click=enregistrer
                    >
                        {move || if enregistrement.get() { "Envoi..." } else { "Envoyer la demande" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Reject a pending request, reason required.
#[component]
pub fn RejeterDemandeDialog(
    demande: DemandeRetrait,
    on_success: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let toasts = expect_context::<ToastService>();
    let motif = RwSignal::new(String::new());
    let action_en_cours = RwSignal::new(false);

    let demande_id = demande.to_string_id();
    let numero = demande.numero_compte.clone();

    let activable = move || !motif.get().trim().is_empty() && !action_en_cours.get();

    let confirmer = move |_| {
        if action_en_cours.get() || motif.get().trim().is_empty() {
            return;
        }
        action_en_cours.set(true);

        let id = demande_id.clone();
        let body = RejeterDemandeRequest {
            motif: motif.get().trim().to_string(),
        };
        spawn_local(async move {
            match api::rejeter_demande(&id, &body).await {
                Ok(()) => {
                    action_en_cours.set(false);
                    on_success.run(());
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
                    <h3>"Rejeter la demande — compte " {numero}</h3>
                    <button class="icon-btn" on:click=move |_| on_cancel.run(()) title="Fermer">
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    <label for="motif-rejet-demande">"Motif du rejet"</label>
                    <textarea
                        id="motif-rejet-demande"
                        rows="3"
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
                        {move || if action_en_cours.get() { "Rejet..." } else { "Rejeter" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
