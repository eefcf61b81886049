use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::AggregateId;

// ============================================================================
// ID Type
// ============================================================================

/// Unique ledger-account identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompteComptableId(pub Uuid);

impl CompteComptableId {
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

impl AggregateId for CompteComptableId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(CompteComptableId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Enums
// ============================================================================

/// Normal balance side of a ledger account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensCompte {
    Debit,
    Credit,
    Mixte,
}

impl SensCompte {
    pub fn libelle(&self) -> &'static str {
        match self {
            SensCompte::Debit => "Débit",
            SensCompte::Credit => "Crédit",
            SensCompte::Mixte => "Mixte",
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Chart-of-accounts entry maintained by the accountant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompteComptable {
    pub id: CompteComptableId,
    pub numero: String,
    pub intitule: String,
    pub sens: SensCompte,
    pub actif: bool,
    pub date_creation: chrono::DateTime<chrono::Utc>,
}

impl CompteComptable {
    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    /// OHADA-style class, derived from the leading digit of the number.
    pub fn classe(&self) -> Option<u8> {
        self.numero
            .chars()
            .next()
            .and_then(|c| c.to_digit(10))
            .map(|d| d as u8)
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompteComptableDto {
    pub id: Option<String>,
    pub numero: String,
    pub intitule: String,
    pub sens: SensCompte,
    pub actif: bool,
}

impl Default for CompteComptableDto {
    fn default() -> Self {
        Self {
            id: None,
            numero: String::new(),
            intitule: String::new(),
            sens: SensCompte::Mixte,
            actif: true,
        }
    }
}

impl CompteComptableDto {
    pub fn validate(&self) -> Result<(), String> {
        let numero = self.numero.trim();
        if numero.is_empty() {
            return Err("Le numéro de compte est obligatoire".into());
        }
        if !numero.chars().all(|c| c.is_ascii_digit()) {
            return Err("Le numéro de compte ne doit contenir que des chiffres".into());
        }
        if !(2..=8).contains(&numero.len()) {
            return Err("Le numéro de compte doit contenir entre 2 et 8 chiffres".into());
        }
        if self.intitule.trim().is_empty() {
            return Err("L'intitulé est obligatoire".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto_valide() -> CompteComptableDto {
        CompteComptableDto {
            id: None,
            numero: "571100".into(),
            intitule: "Caisse agence principale".into(),
            sens: SensCompte::Debit,
            actif: true,
        }
    }

    #[test]
    fn dto_complet_est_valide() {
        assert!(dto_valide().validate().is_ok());
    }

    #[test]
    fn numero_non_numerique_refuse() {
        let mut dto = dto_valide();
        dto.numero = "57A100".into();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn numero_trop_court_ou_trop_long_refuse() {
        let mut dto = dto_valide();
        dto.numero = "5".into();
        assert!(dto.validate().is_err());
        dto.numero = "123456789".into();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn classe_derivee_du_premier_chiffre() {
        let compte = CompteComptable {
            id: CompteComptableId::new_v4(),
            numero: "571100".into(),
            intitule: "Caisse".into(),
            sens: SensCompte::Debit,
            actif: true,
            date_creation: chrono::Utc::now(),
        };
        assert_eq!(compte.classe(), Some(5));
    }
}
