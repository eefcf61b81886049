use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::AggregateId;

// ============================================================================
// ID Type
// ============================================================================

/// Unique client identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(pub Uuid);

impl ClientId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ClientId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ClientId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Account holder, either a natural person or a legal entity.
///
/// The compliance dossier is a tagged union keyed by `type_client`, so a
/// client can never carry both document sub-records, or neither.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub nom: String,
    pub email: String,
    pub telephone: String,
    pub adresse_ville: Option<String>,
    pub adresse_quartier: Option<String>,

    #[serde(flatten)]
    pub dossier: DossierClient,
}

impl Client {
    /// NUI (tax identifier) text value, whichever dossier kind carries it.
    pub fn nui(&self) -> Option<&str> {
        match &self.dossier {
            DossierClient::Physique(d) => d.nui.as_deref(),
            DossierClient::Morale(d) => d.nui.as_deref(),
            DossierClient::Inconnu => None,
        }
    }

    pub fn type_client_libelle(&self) -> &'static str {
        match self.dossier {
            DossierClient::Physique(_) => "Personne physique",
            DossierClient::Morale(_) => "Personne morale",
            DossierClient::Inconnu => "Type inconnu",
        }
    }

    /// Document-completeness gate: true when every required dossier field is
    /// present. An unrecognized client type fails the gate outright.
    /// Precondition for lifting an opposition hold; the backend re-validates,
    /// this check only exists for early feedback.
    pub fn dossier_documents_complet(&self) -> bool {
        if matches!(self.dossier, DossierClient::Inconnu) {
            return false;
        }
        self.dossier
            .documents_requis()
            .iter()
            .all(|(_, valeur)| champ_present(valeur))
    }
}

/// Compliance dossier, polymorphic over `type_client`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type_client", rename_all = "snake_case")]
pub enum DossierClient {
    Physique(DocumentsPhysique),
    Morale(DocumentsMorale),
    /// Catch-all for a `type_client` this console does not know. The record
    /// still renders, but the document gate treats it as incomplete, so one
    /// malformed row cannot blank the whole account list.
    #[serde(other)]
    Inconnu,
}

impl DossierClient {
    /// Required dossier fields with their display labels.
    ///
    /// Single source of truth: the completeness gate and the detail view both
    /// iterate this list, so the two can never disagree on what "complete"
    /// means.
    pub fn documents_requis(&self) -> Vec<(&'static str, Option<&str>)> {
        match self {
            DossierClient::Physique(d) => vec![
                ("CNI recto", d.cni_recto_url.as_deref()),
                ("CNI verso", d.cni_verso_url.as_deref()),
                ("NUI (valeur)", d.nui.as_deref()),
                ("NUI (document)", d.nui_url.as_deref()),
                ("Photo d'identité", d.photo_url.as_deref()),
                ("Plan de localisation du domicile", d.plan_localisation_url.as_deref()),
            ],
            DossierClient::Morale(d) => vec![
                ("NUI (valeur)", d.nui.as_deref()),
                ("NUI (document)", d.nui_url.as_deref()),
                ("Plan de localisation du siège", d.plan_localisation_siege_url.as_deref()),
                (
                    "Acte de désignation des signataires",
                    d.acte_designation_signataires_pdf_url.as_deref(),
                ),
            ],
            DossierClient::Inconnu => Vec::new(),
        }
    }
}

/// Dossier of a natural person.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentsPhysique {
    pub cni_recto_url: Option<String>,
    pub cni_verso_url: Option<String>,
    pub nui: Option<String>,
    pub nui_url: Option<String>,
    pub photo_url: Option<String>,
    pub plan_localisation_url: Option<String>,
}

/// Dossier of a legal entity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentsMorale {
    pub nui: Option<String>,
    pub nui_url: Option<String>,
    pub plan_localisation_siege_url: Option<String>,
    pub acte_designation_signataires_pdf_url: Option<String>,
}

fn champ_present(valeur: &Option<&str>) -> bool {
    valeur.map(|v| !v.trim().is_empty()).unwrap_or(false)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn physique_complet() -> DocumentsPhysique {
        DocumentsPhysique {
            cni_recto_url: Some("/docs/cni-recto.jpg".into()),
            cni_verso_url: Some("/docs/cni-verso.jpg".into()),
            nui: Some("P036512345678A".into()),
            nui_url: Some("/docs/nui.jpg".into()),
            photo_url: Some("/docs/photo.jpg".into()),
            plan_localisation_url: Some("/docs/plan.jpg".into()),
        }
    }

    fn morale_complet() -> DocumentsMorale {
        DocumentsMorale {
            nui: Some("M056500112233B".into()),
            nui_url: Some("/docs/nui.jpg".into()),
            plan_localisation_siege_url: Some("/docs/siege.jpg".into()),
            acte_designation_signataires_pdf_url: Some("/docs/signataires.pdf".into()),
        }
    }

    fn client(dossier: DossierClient) -> Client {
        Client {
            id: ClientId::new_v4(),
            nom: "NGONO Martine".into(),
            email: "martine.ngono@example.cm".into(),
            telephone: "+237 699 11 22 33".into(),
            adresse_ville: Some("Douala".into()),
            adresse_quartier: Some("Akwa".into()),
            dossier,
        }
    }

    #[test]
    fn physique_complet_passe_le_controle() {
        let c = client(DossierClient::Physique(physique_complet()));
        assert!(c.dossier_documents_complet());
    }

    #[test]
    fn physique_chaque_champ_manquant_bloque() {
        // Flipping any single required field to None must flip the gate.
        for i in 0..6 {
            let mut d = physique_complet();
            match i {
                0 => d.cni_recto_url = None,
                1 => d.cni_verso_url = None,
                2 => d.nui = None,
                3 => d.nui_url = None,
                4 => d.photo_url = None,
                _ => d.plan_localisation_url = None,
            }
            let c = client(DossierClient::Physique(d));
            assert!(!c.dossier_documents_complet(), "champ {} manquant", i);
        }
    }

    #[test]
    fn champ_vide_ou_blanc_compte_comme_absent() {
        let mut d = physique_complet();
        d.photo_url = Some("   ".into());
        let c = client(DossierClient::Physique(d));
        assert!(!c.dossier_documents_complet());
    }

    #[test]
    fn morale_complet_passe_le_controle() {
        let c = client(DossierClient::Morale(morale_complet()));
        assert!(c.dossier_documents_complet());
    }

    #[test]
    fn morale_chaque_champ_manquant_bloque() {
        for i in 0..4 {
            let mut d = morale_complet();
            match i {
                0 => d.nui = None,
                1 => d.nui_url = None,
                2 => d.plan_localisation_siege_url = None,
                _ => d.acte_designation_signataires_pdf_url = None,
            }
            let c = client(DossierClient::Morale(d));
            assert!(!c.dossier_documents_complet(), "champ {} manquant", i);
        }
    }

    #[test]
    fn morale_sans_acte_signataires_incomplet() {
        let mut d = morale_complet();
        d.acte_designation_signataires_pdf_url = None;
        let c = client(DossierClient::Morale(d));
        assert!(!c.dossier_documents_complet());
    }

    #[test]
    fn dossier_se_deserialise_par_type_client() {
        let json = r#"{
            "id": "7f2f9f9e-3a7e-4c2b-9a15-96a6f9f3b001",
            "nom": "SOCIETE KAMDEM SARL",
            "email": "contact@kamdem.cm",
            "telephone": "+237 233 44 55 66",
            "adresse_ville": "Yaoundé",
            "adresse_quartier": null,
            "type_client": "morale",
            "nui": "M056500112233B",
            "nui_url": "/docs/nui.jpg",
            "plan_localisation_siege_url": "/docs/siege.jpg",
            "acte_designation_signataires_pdf_url": "/docs/acte.pdf"
        }"#;

        let c: Client = serde_json::from_str(json).expect("client morale");
        assert!(matches!(c.dossier, DossierClient::Morale(_)));
        assert_eq!(c.nui(), Some("M056500112233B"));
        assert!(c.dossier_documents_complet());
    }

    #[test]
    fn type_client_inconnu_echoue_au_controle_sans_bloquer_le_parsing() {
        // One record with an unrecognized type must not make the whole list
        // fetch fail; it parses to the catch-all variant and fails the
        // document gate closed.
        let json = r#"{
            "id": "7f2f9f9e-3a7e-4c2b-9a15-96a6f9f3b002",
            "nom": "GROUPEMENT X",
            "email": "x@example.cm",
            "telephone": "",
            "adresse_ville": null,
            "adresse_quartier": null,
            "type_client": "association",
            "nui": "A001122334455C"
        }"#;
        let c: Client = serde_json::from_str(json).expect("client au type inconnu");
        assert!(matches!(c.dossier, DossierClient::Inconnu));
        assert!(!c.dossier_documents_complet());
        assert_eq!(c.nui(), None);
        assert_eq!(c.type_client_libelle(), "Type inconnu");
        assert!(c.dossier.documents_requis().is_empty());
    }
}
