use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::AggregateId;

// ============================================================================
// ID Type
// ============================================================================

/// Unique fee-schedule identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FraisId(pub Uuid);

impl FraisId {
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

impl AggregateId for FraisId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(FraisId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Enums
// ============================================================================

/// Operation the fee applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeOperation {
    OuvertureCompte,
    TenueCompte,
    Virement,
    RetraitDeplace,
    Cloture,
}

impl TypeOperation {
    pub fn libelle(&self) -> &'static str {
        match self {
            TypeOperation::OuvertureCompte => "Ouverture de compte",
            TypeOperation::TenueCompte => "Tenue de compte",
            TypeOperation::Virement => "Virement",
            TypeOperation::RetraitDeplace => "Retrait déplacé",
            TypeOperation::Cloture => "Clôture de compte",
        }
    }

    pub fn tous() -> &'static [TypeOperation] {
        &[
            TypeOperation::OuvertureCompte,
            TypeOperation::TenueCompte,
            TypeOperation::Virement,
            TypeOperation::RetraitDeplace,
            TypeOperation::Cloture,
        ]
    }
}

/// How the fee is computed. Amounts stay decimal strings, the console never
/// does fee arithmetic (the backend owns fee calculation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ModeCalcul {
    MontantFixe { montant: String },
    Pourcentage { taux: f64 },
}

impl ModeCalcul {
    pub fn libelle(&self) -> String {
        match self {
            ModeCalcul::MontantFixe { montant } => format!("Montant fixe : {}", montant),
            ModeCalcul::Pourcentage { taux } => format!("Pourcentage : {} %", taux),
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Fee/commission schedule line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FraisCommission {
    pub id: FraisId,
    pub code: String,
    pub libelle: String,
    pub type_operation: TypeOperation,
    #[serde(flatten)]
    pub mode_calcul: ModeCalcul,
    pub devise: String,
    pub actif: bool,
    pub date_creation: chrono::DateTime<chrono::Utc>,
}

impl FraisCommission {
    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FraisCommissionDto {
    pub id: Option<String>,
    pub code: String,
    pub libelle: String,
    pub type_operation: TypeOperation,
    #[serde(flatten)]
    pub mode_calcul: ModeCalcul,
    pub devise: String,
    pub actif: bool,
}

impl Default for FraisCommissionDto {
    fn default() -> Self {
        Self {
            id: None,
            code: String::new(),
            libelle: String::new(),
            type_operation: TypeOperation::OuvertureCompte,
            mode_calcul: ModeCalcul::MontantFixe {
                montant: String::new(),
            },
            devise: "XAF".into(),
            actif: true,
        }
    }
}

impl FraisCommissionDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.code.trim().is_empty() {
            return Err("Le code est obligatoire".into());
        }
        if self.libelle.trim().is_empty() {
            return Err("Le libellé est obligatoire".into());
        }
        if self.devise.trim().is_empty() {
            return Err("La devise est obligatoire".into());
        }
        match &self.mode_calcul {
            ModeCalcul::MontantFixe { montant } => {
                match montant.trim().parse::<f64>() {
                    Ok(v) if v >= 0.0 => {}
                    _ => return Err("Le montant doit être un nombre positif".into()),
                }
            }
            ModeCalcul::Pourcentage { taux } => {
                if !(0.0..=100.0).contains(taux) {
                    return Err("Le taux doit être compris entre 0 et 100".into());
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto_valide() -> FraisCommissionDto {
        FraisCommissionDto {
            id: None,
            code: "FR-OUV-01".into(),
            libelle: "Frais d'ouverture compte courant".into(),
            type_operation: TypeOperation::OuvertureCompte,
            mode_calcul: ModeCalcul::MontantFixe {
                montant: "5000".into(),
            },
            devise: "XAF".into(),
            actif: true,
        }
    }

    #[test]
    fn dto_complet_est_valide() {
        assert!(dto_valide().validate().is_ok());
    }

    #[test]
    fn montant_negatif_ou_illisible_refuse() {
        let mut dto = dto_valide();
        dto.mode_calcul = ModeCalcul::MontantFixe {
            montant: "-100".into(),
        };
        assert!(dto.validate().is_err());

        dto.mode_calcul = ModeCalcul::MontantFixe {
            montant: "abc".into(),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn taux_hors_bornes_refuse() {
        let mut dto = dto_valide();
        dto.mode_calcul = ModeCalcul::Pourcentage { taux: 101.0 };
        assert!(dto.validate().is_err());

        dto.mode_calcul = ModeCalcul::Pourcentage { taux: 2.5 };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn mode_calcul_etiquete_sur_le_fil() {
        let dto = dto_valide();
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["mode"], "montant_fixe");
        assert_eq!(json["montant"], "5000");
    }
}
