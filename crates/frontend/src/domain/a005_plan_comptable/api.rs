//! REST calls of the chart of accounts.

use contracts::domain::a005_plan_comptable::aggregate::{CompteComptable, CompteComptableDto};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

pub async fn fetch_plan_comptable() -> Result<Vec<CompteComptable>, String> {
    let response = Request::get(&api_url("/api/plan-comptable"))
        .send()
        .await
        .map_err(|e| format!("Serveur injoignable: {}", e))?;

    if !response.ok() {
        return Err(format!("Erreur HTTP {}", response.status()));
    }

    response
        .json::<Vec<CompteComptable>>()
        .await
        .map_err(|e| format!("Réponse illisible: {}", e))
}

/// Create or update, depending on whether the DTO carries an id.
pub async fn save_compte_comptable(dto: &CompteComptableDto) -> Result<CompteComptable, String> {
    let request = match &dto.id {
        Some(id) => Request::put(&api_url(&format!("/api/plan-comptable/{}", id))),
        None => Request::post(&api_url("/api/plan-comptable")),
    };

    let response = request
        .json(dto)
        .map_err(|e| format!("Requête invalide: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Serveur injoignable: {}", e))?;

    if !response.ok() {
        return Err(format!("Erreur HTTP {}", response.status()));
    }

    response
        .json::<CompteComptable>()
        .await
        .map_err(|e| format!("Réponse illisible: {}", e))
}
