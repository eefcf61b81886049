//! Pure logic of the account-validation review queue: visibility, search,
//! status filter, pagination and dialog gating. The UI layer only binds these
//! functions to signals.

use serde::{Deserialize, Serialize};

use super::aggregate::{Compte, EtatValidation, StatutCompte};
use super::checklist::ChecklistItem;

/// Three-way status filter of the review queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FiltreStatut {
    #[default]
    Tous,
    EnAttenteValidation,
    MiseEnOpposition,
}

impl FiltreStatut {
    pub fn libelle(&self) -> &'static str {
        match self {
            FiltreStatut::Tous => "Tous",
            FiltreStatut::EnAttenteValidation => "En attente de validation",
            FiltreStatut::MiseEnOpposition => "Mise en opposition",
        }
    }
}

/// Only pending and active accounts ever appear in the review queue; closed,
/// suspended and inactive accounts are excluded regardless of other filters.
pub fn visible_dans_la_file(compte: &Compte) -> bool {
    matches!(compte.statut, StatutCompte::EnAttente | StatutCompte::Actif)
}

/// Case-insensitive substring search over account number, client name, client
/// email, account-type label and manager code. Any one match keeps the row.
pub fn correspond_a_la_recherche(compte: &Compte, recherche: &str) -> bool {
    let terme = recherche.trim().to_lowercase();
    if terme.is_empty() {
        return true;
    }

    let champs = [
        compte.numero_compte.as_str(),
        compte.client.nom.as_str(),
        compte.client.email.as_str(),
        compte.type_compte.libelle(),
        compte.code_gestionnaire.as_deref().unwrap_or(""),
    ];
    champs.iter().any(|c| c.to_lowercase().contains(&terme))
}

/// Full queue filter: visibility restriction, then status filter, then text
/// search. Order-preserving and idempotent.
pub fn filtrer_comptes(comptes: &[Compte], recherche: &str, filtre: FiltreStatut) -> Vec<Compte> {
    comptes
        .iter()
        .filter(|c| visible_dans_la_file(c))
        .filter(|c| match filtre {
            FiltreStatut::Tous => true,
            FiltreStatut::EnAttenteValidation => {
                c.etat_validation() == EtatValidation::EnAttenteValidation
            }
            FiltreStatut::MiseEnOpposition => {
                c.etat_validation() == EtatValidation::MiseEnOpposition
            }
        })
        .filter(|c| correspond_a_la_recherche(c, recherche))
        .cloned()
        .collect()
}

// Paging over the filtered queue reuses the generic helpers.
pub use crate::domain::common::pagination::{borner_page, paginer};

// ============================================================================
// Dialog gating
// ============================================================================

/// The validate dialog is only offered for accounts awaiting validation.
pub fn peut_valider(etat: EtatValidation) -> bool {
    etat == EtatValidation::EnAttenteValidation
}

/// The lift-opposition dialog is only offered for accounts under opposition.
pub fn peut_lever_opposition(etat: EtatValidation) -> bool {
    etat == EtatValidation::MiseEnOpposition
}

/// Confirm button of the lift-opposition dialog: requires the document gate
/// AND every manual checkbox. UX-only precondition, the backend re-validates.
pub fn confirmation_levee_activee(documents_complets: bool, cases: &[ChecklistItem]) -> bool {
    documents_complets && !cases.is_empty() && cases.iter().all(|c| c.checked)
}

/// A rejection reason must carry at least one non-whitespace character.
pub fn motif_rejet_valide(motif: &str) -> bool {
    !motif.trim().is_empty()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_compte::aggregate::tests::compte_de_test;
    use crate::domain::a001_compte::checklist::checklist_opposition;

    fn file_de_test() -> Vec<Compte> {
        // One account per interesting combination of statut and review state.
        let mut en_attente = compte_de_test();
        en_attente.numero_compte = "10005-00234-91".into();
        en_attente.statut = StatutCompte::EnAttente;
        en_attente.validation_chef_agence = true;
        en_attente.validation_juridique = false;

        let mut valide = compte_de_test();
        valide.numero_compte = "10005-00567-20".into();
        valide.client.nom = "MBARGA Sylvie".into();
        valide.client.email = "sylvie.mbarga@example.cm".into();
        valide.statut = StatutCompte::Actif;
        valide.validation_chef_agence = true;
        valide.validation_juridique = true;

        let mut opposition = compte_de_test();
        opposition.numero_compte = "10005-00890-55".into();
        opposition.client.nom = "FOUDA Pascal".into();
        opposition.statut = StatutCompte::Actif;
        opposition.est_en_opposition = true;

        let mut cloture = compte_de_test();
        cloture.numero_compte = "10005-00111-07".into();
        cloture.statut = StatutCompte::Cloture;

        let mut suspendu = compte_de_test();
        suspendu.numero_compte = "10005-00222-34".into();
        suspendu.statut = StatutCompte::Suspendu;

        vec![en_attente, valide, opposition, cloture, suspendu]
    }

    #[test]
    fn seuls_en_attente_et_actifs_apparaissent() {
        let resultat = filtrer_comptes(&file_de_test(), "", FiltreStatut::Tous);
        assert_eq!(resultat.len(), 3);
        assert!(resultat.iter().all(visible_dans_la_file));
    }

    #[test]
    fn filtre_par_etat_de_validation() {
        let file = file_de_test();

        let attente = filtrer_comptes(&file, "", FiltreStatut::EnAttenteValidation);
        assert_eq!(attente.len(), 1);
        assert_eq!(attente[0].numero_compte, "10005-00234-91");

        let opposition = filtrer_comptes(&file, "", FiltreStatut::MiseEnOpposition);
        assert_eq!(opposition.len(), 1);
        assert_eq!(opposition[0].numero_compte, "10005-00890-55");
    }

    #[test]
    fn recherche_insensible_a_la_casse() {
        let file = file_de_test();
        let minuscules = filtrer_comptes(&file, "mbarga", FiltreStatut::Tous);
        let majuscules = filtrer_comptes(&file, "MBARGA", FiltreStatut::Tous);

        assert_eq!(minuscules.len(), 1);
        assert_eq!(
            minuscules
                .iter()
                .map(|c| c.numero_compte.clone())
                .collect::<Vec<_>>(),
            majuscules
                .iter()
                .map(|c| c.numero_compte.clone())
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn recherche_sur_code_gestionnaire_et_type() {
        let file = file_de_test();
        // All visible rows share the same manager code in the fixture.
        assert_eq!(filtrer_comptes(&file, "gst-014", FiltreStatut::Tous).len(), 3);
        assert_eq!(
            filtrer_comptes(&file, "compte courant", FiltreStatut::Tous).len(),
            3
        );
        assert!(filtrer_comptes(&file, "introuvable", FiltreStatut::Tous).is_empty());
    }

    #[test]
    fn filtrage_idempotent() {
        let file = file_de_test();
        let une_fois = filtrer_comptes(&file, "10005", FiltreStatut::EnAttenteValidation);
        let deux_fois = filtrer_comptes(&une_fois, "10005", FiltreStatut::EnAttenteValidation);
        assert_eq!(une_fois.len(), deux_fois.len());
        assert_eq!(
            une_fois.iter().map(|c| c.id).collect::<Vec<_>>(),
            deux_fois.iter().map(|c| c.id).collect::<Vec<_>>()
        );
    }

    #[test]
    fn scenario_compte_en_attente() {
        // actif, no opposition, chef ok, juridique missing -> validate
        // offered, lift-opposition not offered.
        let mut c = compte_de_test();
        c.statut = StatutCompte::Actif;
        c.validation_chef_agence = true;
        c.validation_juridique = false;

        let etat = c.etat_validation();
        assert_eq!(etat, EtatValidation::EnAttenteValidation);
        assert!(peut_valider(etat));
        assert!(!peut_lever_opposition(etat));
    }

    #[test]
    fn levee_bloquee_sans_documents_meme_tout_coche() {
        let mut cases = checklist_opposition();
        for c in &mut cases {
            c.checked = true;
        }
        assert!(!confirmation_levee_activee(false, &cases));
        assert!(confirmation_levee_activee(true, &cases));
    }

    #[test]
    fn levee_bloquee_si_une_case_reste_vide() {
        let mut cases = checklist_opposition();
        for c in &mut cases {
            c.checked = true;
        }
        cases[2].checked = false;
        assert!(!confirmation_levee_activee(true, &cases));
    }

    #[test]
    fn motif_de_rejet_blanc_refuse() {
        assert!(!motif_rejet_valide(""));
        assert!(!motif_rejet_valide("   \t  "));
        assert!(motif_rejet_valide("Dossier incomplet"));
    }
}
