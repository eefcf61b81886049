//! Create/edit form of a fee schedule line.
//!
//! The calculation mode is a two-way switch: fixed amount or percentage.
//! Switching resets the other mode's value, the DTO only ever carries one.

use contracts::domain::a004_frais::aggregate::{FraisCommissionDto, ModeCalcul, TypeOperation};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a004_frais::api;
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;

#[component]
pub fn FraisForm(
    dto: FraisCommissionDto,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let toasts = expect_context::<ToastService>();
    let creation = dto.id.is_none();
    let brouillon = RwSignal::new(dto);
    let enregistrement = RwSignal::new(false);

    let titre = if creation {
        "Nouvelle ligne de frais"
    } else {
        "Modifier la ligne de frais"
    };

    let est_pourcentage =
        move || matches!(brouillon.get().mode_calcul, ModeCalcul::Pourcentage { .. });

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
            match api::save_frais(&dto).await {
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
                        "Code"
                        <input
                            type="text"
                            prop:value=move || brouillon.get().code
                            on:input=move |ev| brouillon.update(|d| d.code = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Libellé"
                        <input
                            type="text"
                            prop:value=move || brouillon.get().libelle
                            on:input=move |ev| brouillon.update(|d| d.libelle = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Type d'opération"
                        <select on:change=move |ev| {
                            if let Ok(index) = event_target_value(&ev).parse::<usize>() {
                                if let Some(&op) = TypeOperation::tous().get(index) {
                                    brouillon.update(|d| d.type_operation = op);
                                }
                            }
                        }>
                            {TypeOperation::tous().iter().enumerate().map(|(index, op)| {
                                let op = *op;
                                view! {
                                    <option
                                        value=index.to_string()
                                        selected=move || brouillon.get().type_operation == op
                                    >
                                        {op.libelle()}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </label>
                    <fieldset class="mode-calcul">
                        <legend>"Mode de calcul"</legend>
                        <label class="form-check">
                            <input
                                type="radio"
                                name="mode-calcul"
                                prop:checked=move || !est_pourcentage()
                                on:change=move |_| brouillon.update(|d| {
                                    d.mode_calcul = ModeCalcul::MontantFixe {
                                        montant: String::new(),
                                    };
                                })
                            />
                            "Montant fixe"
                        </label>
                        <label class="form-check">
                            <input
                                type="radio"
                                name="mode-calcul"
                                prop:checked=est_pourcentage
                                on:change=move |_| brouillon.update(|d| {
                                    d.mode_calcul = ModeCalcul::Pourcentage { taux: 0.0 };
                                })
                            />
                            "Pourcentage"
                        </label>
                        {move || match brouillon.get().mode_calcul {
                            ModeCalcul::MontantFixe { montant } => view! {
                                <label>
                                    "Montant"
                                    <input
                                        type="text"
                                        inputmode="decimal"
                                        prop:value=montant
                                        on:input=move |ev| brouillon.update(|d| {
                                            d.mode_calcul = ModeCalcul::MontantFixe {
                                                montant: event_target_value(&ev),
                                            };
                                        })
                                    />
                                </label>
                            }
                            .into_any(),
                            ModeCalcul::Pourcentage { taux } => view! {
                                <label>
                                    "Taux (%)"
                                    <input
                                        type="number"
                                        min="0"
                                        max="100"
                                        step="0.01"
                                        prop:value=taux.to_string()
                                        on:input=move |ev| {
                                            let taux = event_target_value(&ev)
                                                .parse::<f64>()
                                                .unwrap_or(0.0);
                                            brouillon.update(|d| {
                                                d.mode_calcul = ModeCalcul::Pourcentage { taux };
                                            });
                                        }
                                    />
                                </label>
                            }
                            .into_any(),
                        }}
                    </fieldset>
                    <label>
                        "Devise"
                        <input
                            type="text"
                            prop:value=move || brouillon.get().devise
                            on:input=move |ev| brouillon.update(|d| d.devise = event_target_value(&ev))
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
