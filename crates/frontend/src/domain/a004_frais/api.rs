//! REST calls of the fee/commission schedule.

use contracts::domain::a004_frais::aggregate::{FraisCommission, FraisCommissionDto};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

pub async fn fetch_frais() -> Result<Vec<FraisCommission>, String> {
    let response = Request::get(&api_url("/api/frais"))
        .send()
        .await
        .map_err(|e| format!("Serveur injoignable: {}", e))?;

    if !response.ok() {
        return Err(format!("Erreur HTTP {}", response.status()));
    }

    response
        .json::<Vec<FraisCommission>>()
        .await
        .map_err(|e| format!("Réponse illisible: {}", e))
}

/// Create or update, depending on whether the DTO carries an id.
pub async fn save_frais(dto: &FraisCommissionDto) -> Result<FraisCommission, String> {
    let request = match &dto.id {
        Some(id) => Request::put(&api_url(&format!("/api/frais/{}", id))),
        None => Request::post(&api_url("/api/frais")),
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
        .json::<FraisCommission>()
        .await
        .map_err(|e| format!("Réponse illisible: {}", e))
}
