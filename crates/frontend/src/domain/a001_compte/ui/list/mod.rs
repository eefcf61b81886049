//! Validation queue of client accounts.
//!
//! The list is the read model: every write goes through an action dialog and
//! is followed by a full refetch, never by a local patch of the rows.

pub mod dialogs;
pub mod state;

use contracts::domain::a001_compte::aggregate::Compte;
use contracts::domain::a001_compte::review::{borner_page, filtrer_comptes, paginer, FiltreStatut};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a001_compte::api;
use crate::shared::components::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::toast::ToastService;

use dialogs::{LeverOppositionDialog, RejeterDialog, ValiderDialog};
use state::{DialogueActif, EtatListe};

use super::details::CompteDetails;

const FILTRES: [FiltreStatut; 3] = [
    FiltreStatut::Tous,
    FiltreStatut::EnAttenteValidation,
    FiltreStatut::MiseEnOpposition,
];

#[component]
pub fn CompteValidationList() -> impl IntoView {
    let toasts = expect_context::<ToastService>();

    let comptes = RwSignal::new(Vec::<Compte>::new());
    let chargement = RwSignal::new(false);
    let erreur = RwSignal::new(None::<String>);

    let etat = RwSignal::new(EtatListe::default());
    let selection = RwSignal::new(None::<Compte>);
    let dialogue = RwSignal::new(DialogueActif::Aucun);

    // The flag only stops a second fetch from piling on top of a running one;
    // it is not a correctness guarantee.
    let charger = move || {
        if chargement.get_untracked() {
            return;
        }
        chargement.set(true);
        spawn_local(async move {
            match api::fetch_comptes().await {
                Ok(liste) => {
                    comptes.set(liste);
                    erreur.set(None);
                }
                Err(e) => erreur.set(Some(e)),
            }
            chargement.set(false);
        });
    };
    charger();

    let filtres = Signal::derive(move || {
        let e = etat.get();
        filtrer_comptes(&comptes.get(), &e.recherche, e.filtre)
    });

    let total_count = Signal::derive(move || filtres.get().len());
    let total_pages = Signal::derive(move || {
        let taille = etat.get().taille_page.max(1);
        filtres.get().len().div_ceil(taille)
    });
    // Clamped to the last page: a refetch or filter change can shrink the
    // list under a remembered page index.
    let page_courante = Signal::derive(move || {
        let e = etat.get();
        borner_page(filtres.get().len(), e.page, e.taille_page)
    });
    let taille_page = Signal::derive(move || etat.get().taille_page);
    let recherche = Signal::derive(move || etat.get().recherche.clone());

    let lignes = move || {
        let taille = etat.get().taille_page;
        paginer(&filtres.get(), page_courante.get(), taille)
    };

    // Any successful action invalidates the whole read model.
    let apres_action = Callback::new(move |message: String| {
        toasts.success(message);
        dialogue.set(DialogueActif::Aucun);
        selection.set(None);
        charger();
    });
    let fermer_dialogue = Callback::new(move |_: ()| dialogue.set(DialogueActif::Aucun));

    view! {
        <div class="screen compte-validation">
            <div class="screen-toolbar">
                <div class="filter-group">
                    {FILTRES.iter().map(|&f| {
                        view! {
                            <button
                                class=move || {
                                    if etat.get().filtre == f {
                                        "filter-btn active"
                                    } else {
                                        "filter-btn"
                                    }
                                }
                                on:click=move |_| etat.update(|e| e.changer_filtre(f))
                            >
                                {f.libelle()}
                            </button>
                        }
                    }).collect_view()}
                </div>
                <SearchInput
                    value=recherche
                    on_change=Callback::new(move |valeur: String| {
                        etat.update(|e| e.changer_recherche(valeur));
                    })
                    placeholder="Numéro, client, email, gestionnaire..."
                />
                <button
                    class="btn"
                    on:click=move |_| charger()
                    disabled=move || chargement.get()
                    title="Recharger la liste"
                >
                    {icon("refresh")}
                </button>
            </div>

            {move || erreur.get().map(|message| view! {
                <div class="alert alert-error">
                    {icon("alert-triangle")}
                    <span>{message}</span>
                </div>
            })}

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Numéro de compte"</th>
                        <th>"Client"</th>
                        <th>"Type client"</th>
                        <th>"Type compte"</th>
                        <th>"Email"</th>
                        <th>"Gestionnaire"</th>
                        <th>"Solde"</th>
                        <th>"État"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=lignes
                        key=|compte| compte.to_string_id()
                        children=move |compte: Compte| {
                            let etat_validation = compte.etat_validation();
                            let ouvrir = compte.clone();
                            let gestionnaire = compte
                                .code_gestionnaire
                                .clone()
                                .unwrap_or_else(|| "—".to_string());
                            view! {
                                <tr on:click=move |_| selection.set(Some(ouvrir.clone()))>
                                    <td>{compte.numero_compte.clone()}</td>
                                    <td>{compte.client.nom.clone()}</td>
                                    <td>{compte.client.type_client_libelle()}</td>
                                    <td>{compte.type_compte.libelle()}</td>
                                    <td>{compte.client.email.clone()}</td>
                                    <td>{gestionnaire}</td>
                                    <td class="cell-amount">
                                        {format!("{} {}", compte.solde, compte.devise)}
                                    </td>
                                    <td>
                                        <span class=format!("badge {}", etat_validation.badge_class())>
                                            {etat_validation.libelle()}
                                        </span>
                                    </td>
                                    <td>
                                        <span class="icon-btn" title="Examiner">{icon("eye")}</span>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            {move || (total_count.get() == 0 && !chargement.get()).then(|| view! {
                <div class="empty-state">"Aucun compte ne correspond aux critères."</div>
            })}

            <PaginationControls
                current_page=page_courante
                total_pages=total_pages
                total_count=total_count
                page_size=taille_page
                on_page_change=Callback::new(move |page: usize| {
                    etat.update(|e| e.page = page);
                })
                on_page_size_change=Callback::new(move |taille: usize| {
                    etat.update(|e| e.changer_taille_page(taille));
                })
            />

            {move || selection.get().map(|compte| {
                let pour_valider = compte.clone();
                let pour_lever = compte.clone();
                let pour_rejeter = compte.clone();
                view! {
                    <CompteDetails
                        compte=compte
                        on_valider=Callback::new(move |_| dialogue.set(DialogueActif::Valider))
                        on_lever=Callback::new(move |_| dialogue.set(DialogueActif::LeverOpposition))
                        on_rejeter=Callback::new(move |_| dialogue.set(DialogueActif::Rejeter))
                        on_close=Callback::new(move |_| {
                            dialogue.set(DialogueActif::Aucun);
                            selection.set(None);
                        })
                    />
                    {move || match dialogue.get() {
                        DialogueActif::Aucun => ().into_any(),
                        DialogueActif::Valider => view! {
                            <ValiderDialog
                                compte=pour_valider.clone()
                                on_success=apres_action
                                on_cancel=fermer_dialogue
                            />
                        }
                        .into_any(),
                        DialogueActif::LeverOpposition => view! {
                            <LeverOppositionDialog
                                compte=pour_lever.clone()
                                on_success=apres_action
                                on_cancel=fermer_dialogue
                            />
                        }
                        .into_any(),
                        DialogueActif::Rejeter => view! {
                            <RejeterDialog
                                compte=pour_rejeter.clone()
                                on_success=apres_action
                                on_cancel=fermer_dialogue
                            />
                        }
                        .into_any(),
                    }}
                }
            })}
        </div>
    }
}
