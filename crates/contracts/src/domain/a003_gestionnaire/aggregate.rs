use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::AggregateId;

// ============================================================================
// ID Type
// ============================================================================

/// Unique manager identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GestionnaireId(pub Uuid);

impl GestionnaireId {
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

impl AggregateId for GestionnaireId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(GestionnaireId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Portfolio manager (gestionnaire) attached to a branch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gestionnaire {
    pub id: GestionnaireId,
    pub code_gestionnaire: String,
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub telephone: String,
    pub agence: String,
    pub actif: bool,
    pub date_creation: chrono::DateTime<chrono::Utc>,
}

impl Gestionnaire {
    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    /// Update from the form DTO.
    pub fn update(&mut self, dto: &GestionnaireDto) {
        self.code_gestionnaire = dto.code_gestionnaire.clone();
        self.nom = dto.nom.clone();
        self.prenom = dto.prenom.clone();
        self.email = dto.email.clone();
        self.telephone = dto.telephone.clone();
        self.agence = dto.agence.clone();
        self.actif = dto.actif;
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Create/update form of a manager.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GestionnaireDto {
    pub id: Option<String>,
    pub code_gestionnaire: String,
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub telephone: String,
    pub agence: String,
    pub actif: bool,
}

impl Default for GestionnaireDto {
    fn default() -> Self {
        Self {
            id: None,
            code_gestionnaire: String::new(),
            nom: String::new(),
            prenom: String::new(),
            email: String::new(),
            telephone: String::new(),
            agence: String::new(),
            actif: true,
        }
    }
}

impl GestionnaireDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.code_gestionnaire.trim().is_empty() {
            return Err("Le code gestionnaire est obligatoire".into());
        }
        if self.nom.trim().is_empty() {
            return Err("Le nom est obligatoire".into());
        }
        if self.agence.trim().is_empty() {
            return Err("L'agence est obligatoire".into());
        }
        // Minimal shape check; the backend owns real address validation
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err("L'adresse email est invalide".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto_valide() -> GestionnaireDto {
        GestionnaireDto {
            id: None,
            code_gestionnaire: "GST-014".into(),
            nom: "ATANGANA".into(),
            prenom: "Rose".into(),
            email: "rose.atangana@example.cm".into(),
            telephone: "+237 655 44 33 22".into(),
            agence: "Agence Douala Bonanjo".into(),
            actif: true,
        }
    }

    #[test]
    fn dto_complet_est_valide() {
        assert!(dto_valide().validate().is_ok());
    }

    #[test]
    fn champs_obligatoires() {
        let mut dto = dto_valide();
        dto.code_gestionnaire = "  ".into();
        assert!(dto.validate().is_err());

        let mut dto = dto_valide();
        dto.nom = String::new();
        assert!(dto.validate().is_err());

        let mut dto = dto_valide();
        dto.agence = String::new();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn email_sans_arobase_refuse() {
        let mut dto = dto_valide();
        dto.email = "rose.atangana.example.cm".into();
        assert!(dto.validate().is_err());
    }
}
