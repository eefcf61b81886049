//! Fee and commission schedule.

use std::cmp::Ordering;

use contracts::domain::a004_frais::aggregate::{FraisCommission, FraisCommissionDto};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a004_frais::api;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    create_sort_toggle, filter_list, get_sort_class, get_sort_indicator, sort_list, SearchInput,
    Searchable, Sortable,
};
use crate::shared::toast::ToastService;

use super::details::FraisForm;

impl Searchable for FraisCommission {
    fn matches_filter(&self, filter: &str) -> bool {
        let terme = filter.to_lowercase();
        self.code.to_lowercase().contains(&terme)
            || self.libelle.to_lowercase().contains(&terme)
            || self
                .type_operation
                .libelle()
                .to_lowercase()
                .contains(&terme)
    }
}

impl Sortable for FraisCommission {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "code" => self.code.cmp(&other.code),
            "libelle" => self.libelle.cmp(&other.libelle),
            _ => Ordering::Equal,
        }
    }
}

fn dto_depuis(frais: &FraisCommission) -> FraisCommissionDto {
    FraisCommissionDto {
        id: Some(frais.to_string_id()),
        code: frais.code.clone(),
        libelle: frais.libelle.clone(),
        type_operation: frais.type_operation,
        mode_calcul: frais.mode_calcul.clone(),
        devise: frais.devise.clone(),
        actif: frais.actif,
    }
}

#[component]
pub fn FraisList() -> impl IntoView {
    let toasts = expect_context::<ToastService>();

    let frais = RwSignal::new(Vec::<FraisCommission>::new());
    let chargement = RwSignal::new(false);
    let (filtre, set_filtre) = signal(String::new());
    let (sort_field, set_sort_field) = signal("code".to_string());
    let (sort_ascending, set_sort_ascending) = signal(true);

    let formulaire = RwSignal::new(None::<FraisCommissionDto>);

    let charger = move || {
        if chargement.get_untracked() {
            return;
        }
        chargement.set(true);
        spawn_local(async move {
            match api::fetch_frais().await {
                Ok(liste) => frais.set(liste),
                Err(e) => toasts.error(e),
            }
            chargement.set(false);
        });
    };
    charger();

    let lignes = move || {
        let mut liste = filter_list(frais.get(), &filtre.get());
        sort_list(&mut liste, &sort_field.get(), sort_ascending.get());
        liste
    };

    let apres_sauvegarde = Callback::new(move |_: ()| {
        toasts.success("Ligne de frais enregistrée");
        formulaire.set(None);
        charger();
    });

    view! {
        <div class="screen frais-list">
            <div class="screen-toolbar">
                <SearchInput
                    value=filtre
                    on_change=Callback::new(move |valeur: String| set_filtre.set(valeur))
                    placeholder="Code, libellé, opération..."
                />
                <button
                    class="btn btn-primary"
                    on:click=move |_| formulaire.set(Some(FraisCommissionDto::default()))
                >
                    {icon("plus")}
                    "Nouvelle ligne"
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
                        <th on:click=create_sort_toggle("libelle", sort_field.into(), set_sort_field, set_sort_ascending)>
                            "Libellé"
                            <span class=move || get_sort_class(&sort_field.get(), "libelle")>
                                {move || get_sort_indicator(&sort_field.get(), "libelle", sort_ascending.get())}
                            </span>
                        </th>
                        <th>"Opération"</th>
                        <th>"Mode de calcul"</th>
                        <th>"Devise"</th>
                        <th>"Actif"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=lignes
                        key=|f| f.to_string_id()
                        children=move |f: FraisCommission| {
                            let dto = dto_depuis(&f);
                            view! {
                                <tr on:click=move |_| formulaire.set(Some(dto.clone()))>
                                    <td>{f.code.clone()}</td>
                                    <td>{f.libelle.clone()}</td>
                                    <td>{f.type_operation.libelle()}</td>
                                    <td>{f.mode_calcul.libelle()}</td>
                                    <td>{f.devise.clone()}</td>
                                    <td>{if f.actif { "Oui" } else { "Non" }}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            {move || formulaire.get().map(|dto| view! {
                <FraisForm
                    dto=dto
                    on_saved=apres_sauvegarde
                    on_cancel=Callback::new(move |_| formulaire.set(None))
                />
            })}
        </div>
    }
}
