//! Referential of account managers (gestionnaires).

use std::cmp::Ordering;

use contracts::domain::a003_gestionnaire::aggregate::{Gestionnaire, GestionnaireDto};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a003_gestionnaire::api;
use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    create_sort_toggle, filter_list, get_sort_class, get_sort_indicator, sort_list, SearchInput,
    Searchable, Sortable,
};
use crate::shared::toast::ToastService;

use super::details::GestionnaireForm;

impl Searchable for Gestionnaire {
    fn matches_filter(&self, filter: &str) -> bool {
        let terme = filter.to_lowercase();
        self.code_gestionnaire.to_lowercase().contains(&terme)
            || self.nom.to_lowercase().contains(&terme)
            || self.prenom.to_lowercase().contains(&terme)
            || self.email.to_lowercase().contains(&terme)
            || self.agence.to_lowercase().contains(&terme)
    }
}

impl Sortable for Gestionnaire {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "code" => self.code_gestionnaire.cmp(&other.code_gestionnaire),
            "nom" => self.nom.cmp(&other.nom),
            "agence" => self.agence.cmp(&other.agence),
            "date_creation" => self.date_creation.cmp(&other.date_creation),
            _ => Ordering::Equal,
        }
    }
}

fn dto_depuis(gestionnaire: &Gestionnaire) -> GestionnaireDto {
    GestionnaireDto {
        id: Some(gestionnaire.to_string_id()),
        code_gestionnaire: gestionnaire.code_gestionnaire.clone(),
        nom: gestionnaire.nom.clone(),
        prenom: gestionnaire.prenom.clone(),
        email: gestionnaire.email.clone(),
        telephone: gestionnaire.telephone.clone(),
        agence: gestionnaire.agence.clone(),
        actif: gestionnaire.actif,
    }
}

#[component]
pub fn GestionnaireList() -> impl IntoView {
    let toasts = expect_context::<ToastService>();

    let gestionnaires = RwSignal::new(Vec::<Gestionnaire>::new());
    let chargement = RwSignal::new(false);
    let (filtre, set_filtre) = signal(String::new());
    let (sort_field, set_sort_field) = signal("code".to_string());
    let (sort_ascending, set_sort_ascending) = signal(true);

    // Some(dto) opens the form: empty dto for creation, filled for edit.
    let formulaire = RwSignal::new(None::<GestionnaireDto>);

    let charger = move || {
        if chargement.get_untracked() {
            return;
        }
        chargement.set(true);
        spawn_local(async move {
            match api::fetch_gestionnaires().await {
                Ok(liste) => gestionnaires.set(liste),
                Err(e) => toasts.error(e),
            }
            chargement.set(false);
        });
    };
    charger();

    let lignes = move || {
        let mut liste = filter_list(gestionnaires.get(), &filtre.get());
        sort_list(&mut liste, &sort_field.get(), sort_ascending.get());
        liste
    };

    let apres_sauvegarde = Callback::new(move |_: ()| {
        toasts.success("Gestionnaire enregistré");
        formulaire.set(None);
        charger();
    });

    view! {
        <div class="screen gestionnaire-list">
            <div class="screen-toolbar">
                <SearchInput
                    value=filtre
                    on_change=Callback::new(move |valeur: String| set_filtre.set(valeur))
                    placeholder="Code, nom, agence..."
                />
                <button
                    class="btn btn-primary"
                    on:click=move |_| formulaire.set(Some(GestionnaireDto::default()))
                >
                    {icon("plus")}
                    "Nouveau gestionnaire"
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
                        <th on:click=create_sort_toggle("code", sort_field.into(), set_sort_field, set_sort_ascending)>
                            "Code"
                            <span class=move || get_sort_class(&sort_field.get(), "code")>
                                {move || get_sort_indicator(&sort_field.get(), "code", sort_ascending.get())}
                            </span>
                        </th>
                        <th on:click=create_sort_toggle("nom", sort_field.into(), set_sort_field, set_sort_ascending)>
                            "Nom"
                            <span class=move || get_sort_class(&sort_field.get(), "nom")>
                                {move || get_sort_indicator(&sort_field.get(), "nom", sort_ascending.get())}
                            </span>
                        </th>
                        <th>"Prénom"</th>
                        <th>"Email"</th>
                        <th>"Téléphone"</th>
                        <th on:click=create_sort_toggle("agence", sort_field.into(), set_sort_field, set_sort_ascending)>
                            "Agence"
                            <span class=move || get_sort_class(&sort_field.get(), "agence")>
                                {move || get_sort_indicator(&sort_field.get(), "agence", sort_ascending.get())}
                            </span>
                        </th>
                        <th>"Actif"</th>
                        <th on:click=create_sort_toggle("date_creation", sort_field.into(), set_sort_field, set_sort_ascending)>
                            "Créé le"
                            <span class=move || get_sort_class(&sort_field.get(), "date_creation")>
                                {move || get_sort_indicator(&sort_field.get(), "date_creation", sort_ascending.get())}
                            </span>
                        </th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=lignes
                        key=|g| g.to_string_id()
                        children=move |g: Gestionnaire| {
                            let dto = dto_depuis(&g);
                            view! {
                                <tr on:click=move |_| formulaire.set(Some(dto.clone()))>
                                    <td>{g.code_gestionnaire.clone()}</td>
                                    <td>{g.nom.clone()}</td>
                                    <td>{g.prenom.clone()}</td>
                                    <td>{g.email.clone()}</td>
                                    <td>{g.telephone.clone()}</td>
                                    <td>{g.agence.clone()}</td>
                                    <td>{if g.actif { "Oui" } else { "Non" }}</td>
                                    <td>{format_timestamp(g.date_creation)}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            {move || formulaire.get().map(|dto| view! {
                <GestionnaireForm
                    dto=dto
                    on_saved=apres_sauvegarde
                    on_cancel=Callback::new(move |_| formulaire.set(None))
                />
            })}
        </div>
    }
}
