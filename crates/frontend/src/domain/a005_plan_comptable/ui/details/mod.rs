//! Create/edit form of a chart-of-accounts entry.

use contracts::domain::a005_plan_comptable::aggregate::{CompteComptableDto, SensCompte};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a005_plan_comptable::api;
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;

const SENS: [SensCompte; 3] = [SensCompte::Debit, SensCompte::Credit, SensCompte::Mixte];

#[component]
pub fn CompteComptableForm(
    dto: CompteComptableDto,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let toasts = expect_context::<ToastService>();
    let creation = dto.id.is_none();
    let brouillon = RwSignal::new(dto);
    let enregistrement = RwSignal::new(false);

    let titre = if creation {
        "Nouveau compte comptable"
    } else {
        "Modifier le compte comptable"
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
            match api::save_compte_comptable(&dto).await {
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
                        "Numéro"
                        <input
                            type="text"
                            inputmode="numeric"
                            maxlength="8"
                            prop:value=move || brouillon.get().numero
                            on:input=move |ev| brouillon.update(|d| d.numero = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Intitulé"
                        <input
                            type="text"
                            prop:value=move || brouillon.get().intitule
                            on:input=move |ev| brouillon.update(|d| d.intitule = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Sens"
                        <select on:change=move |ev| {
                            if let Ok(index) = event_target_value(&ev).parse::<usize>() {
                                if let Some(&sens) = SENS.get(index) {
                                    brouillon.update(|d| d.sens = sens);
                                }
                            }
                        }>
                            {SENS.iter().enumerate().map(|(index, &sens)| {
                                view! {
                                    <option
                                        value=index.to_string()
                                        selected=move || brouillon.get().sens == sens
                                    >
                                        {sens.libelle()}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
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
