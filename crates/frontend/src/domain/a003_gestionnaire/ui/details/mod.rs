//! Create/edit form of a gestionnaire, shown as a modal over the list.

use contracts::domain::a003_gestionnaire::aggregate::GestionnaireDto;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a003_gestionnaire::api;
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;

#[component]
pub fn GestionnaireForm(
    dto: GestionnaireDto,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let toasts = expect_context::<ToastService>();
    let creation = dto.id.is_none();
    let brouillon = RwSignal::new(dto);
    let enregistrement = RwSignal::new(false);

    let titre = if creation {
        "Nouveau gestionnaire"
    } else {
        "Modifier le gestionnaire"
    };

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
            match api::save_gestionnaire(&dto).await {
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
                    <h3>{titre}</h3>
                    <button class="icon-btn" on:click=move |_| on_cancel.run(()) title="Fermer">
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body form-grid">
                    <label>
                        "Code gestionnaire"
                        <input
                            type="text"
                            prop:value=move || brouillon.get().code_gestionnaire
                            on:input=move |ev| brouillon.update(|d| {
                                d.code_gestionnaire = event_target_value(&ev);
                            })
                        />
                    </label>
                    <label>
                        "Nom"
                        <input
                            type="text"
                            prop:value=move || brouillon.get().nom
                            on:input=move |ev| brouillon.update(|d| d.nom = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Prénom"
                        <input
                            type="text"
                            prop:value=move || brouillon.get().prenom
                            on:input=move |ev| brouillon.update(|d| d.prenom = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Email"
                        <input
                            type="email"
                            prop:value=move || brouillon.get().email
                            on:input=move |ev| brouillon.update(|d| d.email = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Téléphone"
                        <input
                            type="tel"
                            prop:value=move || brouillon.get().telephone
                            on:input=move |ev| brouillon.update(|d| {
                                d.telephone = event_target_value(&ev);
                            })
                        />
                    </label>
                    <label>
                        "Agence"
                        <input
                            type="text"
                            prop:value=move || brouillon.get().agence
                            on:input=move |ev| brouillon.update(|d| d.agence = event_target_value(&ev))
                        />
                    </label>
                    <label class="form-check">
                        <input
                            type="checkbox"
                            prop:checked=move || brouillon.get().actif
                            on:change=move |_| brouillon.update(|d| d.actif = !d.actif)
                        />
                        "Actif"
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
                        {move || if enregistrement.get() { "Enregistrement..." } else { "Enregistrer" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
