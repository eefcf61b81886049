//! Transient dialog checklists.
//!
//! Items are generated fresh each time a dialog opens and discarded on close;
//! the backend is the system of record for any checklist outcome.

use serde::{Deserialize, Serialize};

use super::aggregate::Compte;
use crate::domain::a002_client::aggregate::DossierClient;

/// UI-only checklist line. Never persisted by the console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub label: String,
    pub checked: bool,
}

impl ChecklistItem {
    fn new(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            checked: false,
        }
    }
}

/// Checklist shown in the validate dialog: the account's stored legal
/// checklist when one exists, otherwise the default list for the client type.
pub fn checklist_validation(compte: &Compte) -> Vec<ChecklistItem> {
    if let Some(stockee) = &compte.checklist_juridique {
        if !stockee.is_empty() {
            return stockee
                .iter()
                .map(|e| ChecklistItem {
                    id: e.id.clone(),
                    label: e.label.clone(),
                    checked: false,
                })
                .collect();
        }
    }

    match compte.client.dossier {
        DossierClient::Physique(_) => vec![
            ChecklistItem::new("cni_valide", "CNI en cours de validité"),
            ChecklistItem::new("nui_conforme", "NUI conforme au registre fiscal"),
            ChecklistItem::new("plan_localisation", "Plan de localisation vérifié"),
            ChecklistItem::new("photo_identite", "Photo d'identité conforme"),
        ],
        DossierClient::Morale(_) => vec![
            ChecklistItem::new("nui_conforme", "NUI conforme au registre fiscal"),
            ChecklistItem::new("acte_signataires", "Acte de désignation des signataires vérifié"),
            ChecklistItem::new("siege_localise", "Plan de localisation du siège vérifié"),
        ],
        // No default list for an unrecognized client type.
        DossierClient::Inconnu => Vec::new(),
    }
}

/// Fixed four-item checklist of the lift-opposition dialog. All four must be
/// ticked before the confirm button activates.
pub fn checklist_opposition() -> Vec<ChecklistItem> {
    vec![
        ChecklistItem::new("cni_valide", "CNI en cours de validité"),
        ChecklistItem::new("plan_localisation", "Plan de localisation vérifié"),
        ChecklistItem::new("photo_identite", "Photo d'identité conforme"),
        ChecklistItem::new("specimen_signature", "Spécimen de signature déposé"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_compte::aggregate::tests::compte_de_test;
    use crate::domain::a001_compte::aggregate::ChecklistEntree;
    use crate::domain::a002_client::aggregate::{DocumentsMorale, DossierClient};

    #[test]
    fn checklist_stockee_prioritaire() {
        let mut compte = compte_de_test();
        compte.checklist_juridique = Some(vec![ChecklistEntree {
            id: "verif_speciale".into(),
            label: "Vérification spéciale".into(),
        }]);

        let items = checklist_validation(&compte);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "verif_speciale");
        assert!(!items[0].checked);
    }

    #[test]
    fn checklist_stockee_vide_retombe_sur_le_defaut() {
        let mut compte = compte_de_test();
        compte.checklist_juridique = Some(vec![]);
        assert!(!checklist_validation(&compte).is_empty());
    }

    #[test]
    fn defaut_depend_du_type_client() {
        let mut compte = compte_de_test();
        let physique = checklist_validation(&compte);

        compte.client.dossier = DossierClient::Morale(DocumentsMorale::default());
        let morale = checklist_validation(&compte);

        assert_ne!(physique, morale);
        assert!(morale.iter().any(|i| i.id == "acte_signataires"));
    }

    #[test]
    fn checklist_opposition_a_quatre_cases_non_cochees() {
        let items = checklist_opposition();
        assert_eq!(items.len(), 4);
        assert!(items.iter().all(|i| !i.checked));
    }
}
