use serde::{Deserialize, Serialize};

/// One posted ledger entry, read-only. Posting itself happens backend-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EcritureJournalDto {
    pub date_ecriture: String, // NaiveDate as string "YYYY-MM-DD"
    pub numero_piece: String,
    pub journal_code: String,
    pub compte_debit: String,
    pub compte_credit: String,
    pub libelle: String,
    pub montant: String,
    pub devise: String,
}

/// Query of the journal viewer: a closed date range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalListRequest {
    pub date_from: String, // "YYYY-MM-DD"
    pub date_to: String,
}

impl JournalListRequest {
    /// Both bounds must parse and the range must not be inverted.
    pub fn validate(&self) -> Result<(), String> {
        let from = chrono::NaiveDate::parse_from_str(&self.date_from, "%Y-%m-%d")
            .map_err(|_| "Date de début invalide (AAAA-MM-JJ attendu)".to_string())?;
        let to = chrono::NaiveDate::parse_from_str(&self.date_to, "%Y-%m-%d")
            .map_err(|_| "Date de fin invalide (AAAA-MM-JJ attendu)".to_string())?;
        if from > to {
            return Err("La date de début doit précéder la date de fin".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn periode_valide() {
        let req = JournalListRequest {
            date_from: "2026-01-01".into(),
            date_to: "2026-01-31".into(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn periode_inversee_refusee() {
        let req = JournalListRequest {
            date_from: "2026-02-01".into(),
            date_to: "2026-01-01".into(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn date_illisible_refusee() {
        let req = JournalListRequest {
            date_from: "01/01/2026".into(),
            date_to: "2026-01-31".into(),
        };
        assert!(req.validate().is_err());
    }
}
