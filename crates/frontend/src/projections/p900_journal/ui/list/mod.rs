//! Read-only accounting journal over a date range.

use chrono::{Datelike, Utc};
use contracts::domain::common::pagination::{borner_page, paginer};
use contracts::projections::p900_journal::dto::{EcritureJournalDto, JournalListRequest};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::projections::p900_journal::api;
use crate::shared::components::PaginationControls;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;

#[component]
pub fn JournalList() -> impl IntoView {
    let toasts = expect_context::<ToastService>();

    // Default period: start of the current month to today.
    let aujourd_hui = Utc::now().date_naive();
    let debut_mois = aujourd_hui.with_day(1).unwrap_or(aujourd_hui);

    let date_from = RwSignal::new(debut_mois.format("%Y-%m-%d").to_string());
    let date_to = RwSignal::new(aujourd_hui.format("%Y-%m-%d").to_string());

    let ecritures = RwSignal::new(Vec::<EcritureJournalDto>::new());
    let chargement = RwSignal::new(false);
    let page = RwSignal::new(0usize);
    let taille_page = RwSignal::new(25usize);

    let charger = move || {
        if chargement.get_untracked() {
            return;
        }
        let requete = JournalListRequest {
            date_from: date_from.get_untracked(),
            date_to: date_to.get_untracked(),
        };
        if let Err(message) = requete.validate() {
            toasts.error(message);
            return;
        }
        chargement.set(true);
        spawn_local(async move {
            match api::fetch_journal(&requete).await {
                Ok(liste) => {
                    ecritures.set(liste);
                    page.set(0);
                }
                Err(e) => toasts.error(e),
            }
            chargement.set(false);
        });
    };
    charger();

    let total_count = Signal::derive(move || ecritures.get().len());
    let total_pages = Signal::derive(move || {
        ecritures.get().len().div_ceil(taille_page.get().max(1))
    });
    // Clamped in case a reload shrinks the result under the remembered page.
    let page_courante = Signal::derive(move || {
        borner_page(ecritures.get().len(), page.get(), taille_page.get())
    });

    let lignes = move || paginer(&ecritures.get(), page_courante.get(), taille_page.get());

    view! {
        <div class="screen journal-list">
            <div class="screen-toolbar">
                <label>
                    "Du "
                    <input
                        type="date"
                        prop:value=move || date_from.get()
                        on:input=move |ev| date_from.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    " au "
                    <input
                        type="date"
                        prop:value=move || date_to.get()
                        on:input=move |ev| date_to.set(event_target_value(&ev))
                    />
                </label>
                <button
                    class="btn btn-primary"
                    on:click=move |_| charger()
                    disabled=move || chargement.get()
                >
                    {icon("refresh")}
                    "Afficher"
                </button>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Date"</th>
                        <th>"Pièce"</th>
                        <th>"Journal"</th>
                        <th>"Débit"</th>
                        <th>"Crédit"</th>
                        <th>"Libellé"</th>
                        <th>"Montant"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || lignes().into_iter().map(|e| view! {
                        <tr>
                            <td>{format_date(&e.date_ecriture)}</td>
                            <td class="cell-mono">{e.numero_piece.clone()}</td>
                            <td>{e.journal_code.clone()}</td>
                            <td class="cell-mono">{e.compte_debit.clone()}</td>
                            <td class="cell-mono">{e.compte_credit.clone()}</td>
                            <td>{e.libelle.clone()}</td>
                            <td class="cell-amount">{format!("{} {}", e.montant, e.devise)}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>

            {move || (total_count.get() == 0 && !chargement.get()).then(|| view! {
                <div class="empty-state">"Aucune écriture sur la période."</div>
            })}

            <PaginationControls
                current_page=page_courante
                total_pages=total_pages
                total_count=total_count
                page_size=Signal::derive(move || taille_page.get())
                on_page_change=Callback::new(move |p: usize| page.set(p))
                on_page_size_change=Callback::new(move |taille: usize| {
                    taille_page.set(taille);
                    page.set(0);
                })
            />
        </div>
    }
}
