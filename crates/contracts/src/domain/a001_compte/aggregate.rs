use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::a002_client::aggregate::Client;
use crate::domain::common::AggregateId;

// ============================================================================
// ID Type
// ============================================================================

/// Unique account identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompteId(pub Uuid);

impl CompteId {
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

impl AggregateId for CompteId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(CompteId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Enums
// ============================================================================

/// Server-authoritative account lifecycle status. The client only reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatutCompte {
    Actif,
    Inactif,
    Cloture,
    Suspendu,
    EnAttente,
}

impl StatutCompte {
    pub fn libelle(&self) -> &'static str {
        match self {
            StatutCompte::Actif => "Actif",
            StatutCompte::Inactif => "Inactif",
            StatutCompte::Cloture => "Clôturé",
            StatutCompte::Suspendu => "Suspendu",
            StatutCompte::EnAttente => "En attente",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeCompte {
    Courant,
    Epargne,
    Cheque,
}

impl TypeCompte {
    pub fn libelle(&self) -> &'static str {
        match self {
            TypeCompte::Courant => "Compte courant",
            TypeCompte::Epargne => "Compte épargne",
            TypeCompte::Cheque => "Compte chèque",
        }
    }
}

/// Derived review state of an account. Never stored, recomputed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EtatValidation {
    Valide,
    EnAttenteValidation,
    MiseEnOpposition,
}

impl EtatValidation {
    pub fn libelle(&self) -> &'static str {
        match self {
            EtatValidation::Valide => "Validé",
            EtatValidation::EnAttenteValidation => "En attente de validation",
            EtatValidation::MiseEnOpposition => "Mise en opposition",
        }
    }

    /// CSS modifier suffix for the status badge.
    pub fn badge_class(&self) -> &'static str {
        match self {
            EtatValidation::Valide => "badge--success",
            EtatValidation::EnAttenteValidation => "badge--warning",
            EtatValidation::MiseEnOpposition => "badge--danger",
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Bank account as returned by `GET /api/comptes`.
///
/// Balances come over the wire as decimal strings; the console displays them
/// verbatim and never computes with them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Compte {
    pub id: CompteId,
    pub numero_compte: String,
    pub type_compte: TypeCompte,
    pub client: Client,

    pub solde: String,
    pub solde_disponible: String,
    pub solde_bloque: String,
    pub devise: String,

    pub statut: StatutCompte,
    pub validation_chef_agence: bool,
    pub validation_juridique: bool,
    pub dossier_complet: bool,
    pub est_en_opposition: bool,
    pub motif_rejet: Option<String>,

    pub code_gestionnaire: Option<String>,
    pub date_creation: chrono::DateTime<chrono::Utc>,

    /// Legal-review checklist stored server-side, if one was ever recorded.
    pub checklist_juridique: Option<Vec<ChecklistEntree>>,
}

impl Compte {
    /// Review-state evaluator. Opposition wins over everything; an account is
    /// `Valide` only when both validation flags are set and no opposition
    /// hold is active. Total over the three flags, side-effect free.
    pub fn etat_validation(&self) -> EtatValidation {
        if self.est_en_opposition {
            EtatValidation::MiseEnOpposition
        } else if !self.validation_chef_agence || !self.validation_juridique {
            EtatValidation::EnAttenteValidation
        } else {
            EtatValidation::Valide
        }
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }
}

/// One stored checklist line (id + label, no checked state).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistEntree {
    pub id: String,
    pub label: String,
}

// ============================================================================
// Wire DTOs
// ============================================================================

/// Body of `POST /api/comptes/{id}/valider`. The same endpoint validates a
/// pending account or lifts an opposition, depending on server-side state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValiderCompteRequest {
    pub checkboxes: Vec<String>,
    pub nui: Option<String>,
}

/// Body of `POST /api/comptes/{id}/rejeter`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejeterCompteRequest {
    pub motif_rejet: String,
}

/// Response of both account actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResponse {
    pub message: String,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::a002_client::aggregate::{ClientId, DocumentsPhysique, DossierClient};

    pub(crate) fn compte_de_test() -> Compte {
        Compte {
            id: CompteId::new_v4(),
            numero_compte: "10005-00234-91".into(),
            type_compte: TypeCompte::Courant,
            client: Client {
                id: ClientId::new_v4(),
                nom: "ESSOMBA Jean".into(),
                email: "jean.essomba@example.cm".into(),
                telephone: "+237 677 00 11 22".into(),
                adresse_ville: Some("Yaoundé".into()),
                adresse_quartier: None,
                dossier: DossierClient::Physique(DocumentsPhysique::default()),
            },
            solde: "150000.00".into(),
            solde_disponible: "120000.00".into(),
            solde_bloque: "30000.00".into(),
            devise: "XAF".into(),
            statut: StatutCompte::Actif,
            validation_chef_agence: false,
            validation_juridique: false,
            dossier_complet: false,
            est_en_opposition: false,
            motif_rejet: None,
            code_gestionnaire: Some("GST-014".into()),
            date_creation: chrono::Utc::now(),
            checklist_juridique: None,
        }
    }

    #[test]
    fn opposition_prime_sur_les_drapeaux_de_validation() {
        // All four flag combinations must still evaluate to opposition.
        for (chef, juridique) in [(false, false), (true, false), (false, true), (true, true)] {
            let mut c = compte_de_test();
            c.est_en_opposition = true;
            c.validation_chef_agence = chef;
            c.validation_juridique = juridique;
            assert_eq!(c.etat_validation(), EtatValidation::MiseEnOpposition);
        }
    }

    #[test]
    fn un_drapeau_manquant_laisse_en_attente() {
        let mut c = compte_de_test();
        c.validation_chef_agence = true;
        c.validation_juridique = false;
        assert_eq!(c.etat_validation(), EtatValidation::EnAttenteValidation);

        c.validation_chef_agence = false;
        c.validation_juridique = true;
        assert_eq!(c.etat_validation(), EtatValidation::EnAttenteValidation);
    }

    #[test]
    fn deux_drapeaux_sans_opposition_donnent_valide() {
        let mut c = compte_de_test();
        c.validation_chef_agence = true;
        c.validation_juridique = true;
        assert_eq!(c.etat_validation(), EtatValidation::Valide);
    }

    #[test]
    fn statut_se_serialise_en_snake_case() {
        assert_eq!(
            serde_json::to_string(&StatutCompte::EnAttente).unwrap(),
            "\"en_attente\""
        );
        assert_eq!(
            serde_json::from_str::<StatutCompte>("\"cloture\"").unwrap(),
            StatutCompte::Cloture
        );
    }
}
