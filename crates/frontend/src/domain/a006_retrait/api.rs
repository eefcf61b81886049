//! REST calls of the remote-withdrawal workflow.
//!
//! All transitions are backend-owned; the console posts the action and
//! refetches. A stale action (someone else decided first) comes back as an
//! HTTP error with a `message`, surfaced as-is.

use contracts::domain::a006_retrait::aggregate::{
    DemandeRetrait, DemandeRetraitDto, RejeterDemandeRequest,
};
use gloo_net::http::{Request, Response};

use crate::shared::api_utils::api_url;

async fn message_erreur(response: Response) -> String {
    let status = response.status();
    match response.json::<serde_json::Value>().await {
        Ok(corps) => corps
            .get("message")
            .and_then(|m| m.as_str())
            .map(|s| s.to_string())
            .unwrap_or_else(|| format!("Erreur HTTP {}", status)),
        Err(_) => format!("Erreur HTTP {}", status),
    }
}

pub async fn fetch_demandes() -> Result<Vec<DemandeRetrait>, String> {
    let response = Request::get(&api_url("/api/retraits"))
        .send()
        .await
        .map_err(|e| format!("Serveur injoignable: {}", e))?;

    if !response.ok() {
        return Err(message_erreur(response).await);
    }

    response
        .json::<Vec<DemandeRetrait>>()
        .await
        .map_err(|e| format!("Réponse illisible: {}", e))
}

pub async fn creer_demande(dto: &DemandeRetraitDto) -> Result<DemandeRetrait, String> {
    let response = Request::post(&api_url("/api/retraits"))
        .json(dto)
        .map_err(|e| format!("Requête invalide: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Serveur injoignable: {}", e))?;

    if !response.ok() {
        return Err(message_erreur(response).await);
    }

    response
        .json::<DemandeRetrait>()
        .await
        .map_err(|e| format!("Réponse illisible: {}", e))
}

async fn poster_action(url: String) -> Result<(), String> {
    let response = Request::post(&url)
        .send()
        .await
        .map_err(|e| format!("Serveur injoignable: {}", e))?;

    if !response.ok() {
        return Err(message_erreur(response).await);
    }
    Ok(())
}

pub async fn approuver_demande(id: &str) -> Result<(), String> {
    poster_action(api_url(&format!("/api/retraits/{}/approuver", id))).await
}

pub async fn servir_demande(id: &str) -> Result<(), String> {
    poster_action(api_url(&format!("/api/retraits/{}/servir", id))).await
}

pub async fn rejeter_demande(id: &str, body: &RejeterDemandeRequest) -> Result<(), String> {
    let response = Request::post(&api_url(&format!("/api/retraits/{}/rejeter", id)))
        .json(body)
        .map_err(|e| format!("Requête invalide: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Serveur injoignable: {}", e))?;

    if !response.ok() {
        return Err(message_erreur(response).await);
    }
    Ok(())
}
