//! REST calls of the gestionnaire referential.

use contracts::domain::a003_gestionnaire::aggregate::{Gestionnaire, GestionnaireDto};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

pub async fn fetch_gestionnaires() -> Result<Vec<Gestionnaire>, String> {
    let response = Request::get(&api_url("/api/gestionnaires"))
        .send()
        .await
        .map_err(|e| format!("Serveur injoignable: {}", e))?;

    if !response.ok() {
        return Err(format!("Erreur HTTP {}", response.status()));
    }

    response
        .json::<Vec<Gestionnaire>>()
        .await
        .map_err(|e| format!("Réponse illisible: {}", e))
}

/// Create or update, depending on whether the DTO carries an id.
pub async fn save_gestionnaire(dto: &GestionnaireDto) -> Result<Gestionnaire, String> {
    let request = match &dto.id {
        Some(id) => Request::put(&api_url(&format!("/api/gestionnaires/{}", id))),
        None => Request::post(&api_url("/api/gestionnaires")),
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
        .json::<Gestionnaire>()
        .await
        .map_err(|e| format!("Réponse illisible: {}", e))
}
