//! REST calls of the account-validation screen.
//!
//! Three endpoints only: list, validate (also lifts an opposition, the
//! backend decides from its own state) and reject. Failures are mapped to a
//! human-readable string, preferring the backend-provided `message`.

use contracts::domain::a001_compte::aggregate::{
    ActionResponse, Compte, RejeterCompteRequest, ValiderCompteRequest,
};
use gloo_net::http::{Request, Response};

use crate::shared::api_utils::api_url;

/// Generic fallback when the backend gave no usable message.
const ERREUR_GENERIQUE: &str = "Une erreur est survenue, veuillez réessayer";

async fn message_erreur(response: Response) -> String {
    let status = response.status();
    match response.json::<serde_json::Value>().await {
        Ok(corps) => corps
            .get("message")
            .and_then(|m| m.as_str())
            .map(|s| s.to_string())
            .unwrap_or_else(|| format!("{} (HTTP {})", ERREUR_GENERIQUE, status)),
        Err(_) => format!("{} (HTTP {})", ERREUR_GENERIQUE, status),
    }
}

/// Fetch the full account list. The caller replaces its list wholesale.
pub async fn fetch_comptes() -> Result<Vec<Compte>, String> {
    let response = Request::get(&api_url("/api/comptes"))
        .send()
        .await
        .map_err(|e| format!("Serveur injoignable: {}", e))?;

    if !response.ok() {
        return Err(message_erreur(response).await);
    }

    response
        .json::<Vec<Compte>>()
        .await
        .map_err(|e| format!("Réponse illisible: {}", e))
}

/// Validate a pending account, or lift its opposition; the backend picks the
/// transition from its current state.
pub async fn valider_compte(
    id: &str,
    body: &ValiderCompteRequest,
) -> Result<ActionResponse, String> {
    let response = Request::post(&api_url(&format!("/api/comptes/{}/valider", id)))
        .json(body)
        .map_err(|e| format!("Requête invalide: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Serveur injoignable: {}", e))?;

    if !response.ok() {
        return Err(message_erreur(response).await);
    }

    response
        .json::<ActionResponse>()
        .await
        .map_err(|e| format!("Réponse illisible: {}", e))
}

/// Reject the dossier with a reason.
pub async fn rejeter_compte(
    id: &str,
    body: &RejeterCompteRequest,
) -> Result<ActionResponse, String> {
    let response = Request::post(&api_url(&format!("/api/comptes/{}/rejeter", id)))
        .json(body)
        .map_err(|e| format!("Requête invalide: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Serveur injoignable: {}", e))?;

    if !response.ok() {
        return Err(message_erreur(response).await);
    }

    response
        .json::<ActionResponse>()
        .await
        .map_err(|e| format!("Réponse illisible: {}", e))
}
