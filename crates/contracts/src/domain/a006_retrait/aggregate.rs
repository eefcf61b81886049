use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::AggregateId;

// ============================================================================
// ID Type
// ============================================================================

/// Unique withdrawal-request identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DemandeRetraitId(pub Uuid);

impl DemandeRetraitId {
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

impl AggregateId for DemandeRetraitId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(DemandeRetraitId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Enums
// ============================================================================

/// Server-authoritative request lifecycle. The console only posts actions and
/// re-reads the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatutDemande {
    EnAttente,
    Approuvee,
    Rejetee,
    Servie,
}

impl StatutDemande {
    pub fn libelle(&self) -> &'static str {
        match self {
            StatutDemande::EnAttente => "En attente",
            StatutDemande::Approuvee => "Approuvée",
            StatutDemande::Rejetee => "Rejetée",
            StatutDemande::Servie => "Servie",
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Remote-withdrawal request raised by a cash desk on behalf of a customer of
/// another branch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemandeRetrait {
    pub id: DemandeRetraitId,
    pub numero_compte: String,
    pub nom_client: String,
    pub montant: String,
    pub devise: String,
    pub agence_demandeuse: String,
    pub statut: StatutDemande,
    pub motif: Option<String>,
    pub date_creation: chrono::DateTime<chrono::Utc>,
}

impl DemandeRetrait {
    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    /// Approve/reject is only offered while the request is pending; serve is
    /// only offered once approved.
    pub fn peut_decider(&self) -> bool {
        self.statut == StatutDemande::EnAttente
    }

    pub fn peut_servir(&self) -> bool {
        self.statut == StatutDemande::Approuvee
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Creation form of a withdrawal request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DemandeRetraitDto {
    pub numero_compte: String,
    pub montant: String,
    pub devise: String,
    pub agence_demandeuse: String,
}

impl DemandeRetraitDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.numero_compte.trim().is_empty() {
            return Err("Le numéro de compte est obligatoire".into());
        }
        match self.montant.trim().parse::<f64>() {
            Ok(v) if v > 0.0 => {}
            _ => return Err("Le montant doit être un nombre strictement positif".into()),
        }
        if self.devise.trim().is_empty() {
            return Err("La devise est obligatoire".into());
        }
        if self.agence_demandeuse.trim().is_empty() {
            return Err("L'agence demandeuse est obligatoire".into());
        }
        Ok(())
    }
}

/// Body of `POST /api/retraits/{id}/rejeter`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejeterDemandeRequest {
    pub motif: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demande(statut: StatutDemande) -> DemandeRetrait {
        DemandeRetrait {
            id: DemandeRetraitId::new_v4(),
            numero_compte: "10005-00234-91".into(),
            nom_client: "ESSOMBA Jean".into(),
            montant: "250000".into(),
            devise: "XAF".into(),
            agence_demandeuse: "Agence Bafoussam".into(),
            statut,
            motif: None,
            date_creation: chrono::Utc::now(),
        }
    }

    #[test]
    fn decision_uniquement_en_attente() {
        assert!(demande(StatutDemande::EnAttente).peut_decider());
        assert!(!demande(StatutDemande::Approuvee).peut_decider());
        assert!(!demande(StatutDemande::Rejetee).peut_decider());
        assert!(!demande(StatutDemande::Servie).peut_decider());
    }

    #[test]
    fn service_uniquement_apres_approbation() {
        assert!(demande(StatutDemande::Approuvee).peut_servir());
        assert!(!demande(StatutDemande::EnAttente).peut_servir());
        assert!(!demande(StatutDemande::Servie).peut_servir());
    }

    #[test]
    fn montant_nul_refuse() {
        let dto = DemandeRetraitDto {
            numero_compte: "10005-00234-91".into(),
            montant: "0".into(),
            devise: "XAF".into(),
            agence_demandeuse: "Agence Bafoussam".into(),
        };
        assert!(dto.validate().is_err());
    }
}
