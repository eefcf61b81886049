//! REST call of the accounting journal viewer.

use contracts::projections::p900_journal::dto::{EcritureJournalDto, JournalListRequest};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

pub async fn fetch_journal(req: &JournalListRequest) -> Result<Vec<EcritureJournalDto>, String> {
    let url = api_url(&format!(
        "/api/journal?date_from={}&date_to={}",
        req.date_from, req.date_to
    ));
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Serveur injoignable: {}", e))?;

    if !response.ok() {
        return Err(format!("Erreur HTTP {}", response.status()));
    }

    response
        .json::<Vec<EcritureJournalDto>>()
        .await
        .map_err(|e| format!("Réponse illisible: {}", e))
}
