//! Background contact-form delivery.
//!
//! Each submission runs on its own task and reports back over the outcome
//! channel; the UI thread never blocks on the network. Overlapping
//! submissions are all allowed to run, and the last outcome to arrive wins
//! the status region.

use reqwest::Client;
use serde_json::Value;
use tokio::sync::mpsc;

use crate::core::contact::SubmitOutcome;

/// POST the serialized form to its endpoint and send the outcome back.
pub fn spawn_submit(
    client: Client,
    tx: mpsc::UnboundedSender<SubmitOutcome>,
    endpoint: String,
    payload: Value,
) {
    tokio::spawn(async move {
        let outcome = submit(&client, &endpoint, &payload).await;
        let _ = tx.send(outcome);
    });
}

async fn submit(client: &Client, endpoint: &str, payload: &Value) -> SubmitOutcome {
    let response = client
        .post(endpoint)
        .header(reqwest::header::ACCEPT, "application/json")
        .json(payload)
        .send()
        .await;

    match response {
        Ok(response) => {
            let status = response.status().as_u16();
            match response.text().await {
                Ok(body) => SubmitOutcome::from_response(status, &body),
                Err(err) => {
                    tracing::error!("contact submission reply unreadable: {err}");
                    SubmitOutcome::network_failure()
                }
            }
        }
        Err(err) => {
            tracing::error!("contact submission failed: {err}");
            SubmitOutcome::network_failure()
        }
    }
}
