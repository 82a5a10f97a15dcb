//! Upstream action-table client — non-streaming and streaming calls.
//!
//! The upstream table keeps its own knowledge base and reasoning chain;
//! this client only submits one row per request and reads the step
//! columns back, defensively: cells may be plain text or completion
//! objects, and any of them may be missing.

use std::collections::HashMap;
use std::pin::Pin;

use futures::Stream;
use reqwest::Client;
use serde_json::{json, Value};
use tokio_stream::StreamExt;
use tracing::debug;

use jalan_core::{Error, Result};

use crate::config::ResolvedUpstream;
use crate::types::{
    GeneratedItinerary, ItineraryPayload, ItineraryRequest, PlannerChunk, ReasoningChain,
    UpstreamOutcome, STEP_COLUMNS,
};

/// Boxed stream type for the streaming call.
pub type BoxedPlannerStream = Pin<Box<dyn Stream<Item = PlannerChunk> + Send>>;

/// HTTP client for the upstream itinerary table.
#[derive(Debug, Clone, Default)]
pub struct UpstreamClient {
    http: Client,
}

impl UpstreamClient {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
        }
    }

    fn rows_url(upstream: &ResolvedUpstream) -> String {
        format!("{}/api/v1/gen_tables/action/rows/add", upstream.base_url)
    }

    fn row_body(upstream: &ResolvedUpstream, req: &ItineraryRequest, stream: bool) -> Value {
        // data is a list even for a single row
        json!({
            "table_id": upstream.table_id,
            "data": [{
                "start_time": req.start_time,
                "dietary": req.dietary,
                "transport": req.transport,
                "accessibility": req.accessibility,
            }],
            "stream": stream,
        })
    }

    /// Submit one request and wait for the complete result.
    pub async fn generate(
        &self,
        upstream: &ResolvedUpstream,
        req: &ItineraryRequest,
    ) -> Result<GeneratedItinerary> {
        let url = Self::rows_url(upstream);
        debug!(table = %upstream.table_id, "calling upstream itinerary table");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&upstream.api_key)
            .header("X-PROJECT-ID", &upstream.project_id)
            .json(&Self::row_body(upstream, req, false))
            .send()
            .await
            .map_err(|e| Error::UpstreamUnavailable(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::UpstreamUnavailable(format!(
                "upstream returned {status}: {body}"
            )));
        }

        let value: Value = response
            .json()
            .await
            .map_err(|e| Error::UpstreamMalformed(format!("non-JSON response: {e}")))?;

        let columns = &value["rows"][0]["columns"];
        if columns.is_null() {
            return Err(Error::UpstreamMalformed(
                "no rows in upstream response".into(),
            ));
        }

        let reasoning = ReasoningChain::from_columns(|name| cell_text(&columns[name]));
        let outcome = parse_final(reasoning.step8_final.as_deref().unwrap_or(""));
        Ok(GeneratedItinerary { outcome, reasoning })
    }

    /// Submit one request and stream step-column increments as they
    /// arrive. The stream always terminates with `Done` or `Error`.
    pub fn generate_stream(
        &self,
        upstream: &ResolvedUpstream,
        req: &ItineraryRequest,
    ) -> BoxedPlannerStream {
        let client = self.http.clone();
        let url = Self::rows_url(upstream);
        let api_key = upstream.api_key.clone();
        let project_id = upstream.project_id.clone();
        let body = Self::row_body(upstream, req, true);

        Box::pin(async_stream::stream! {
            let response = match client
                .post(&url)
                .bearer_auth(&api_key)
                .header("X-PROJECT-ID", &project_id)
                .json(&body)
                .send()
                .await
            {
                Ok(r) => r,
                Err(e) => {
                    yield PlannerChunk::Error(format!("Request failed: {e}"));
                    return;
                }
            };

            if !response.status().is_success() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                yield PlannerChunk::Error(format!("Upstream error {status}: {body}"));
                return;
            }

            let mut stream = response.bytes_stream();
            let mut buffer = String::new();
            let mut accumulated: HashMap<String, String> = HashMap::new();

            'recv: while let Some(chunk) = stream.next().await {
                let bytes = match chunk {
                    Ok(b) => b,
                    Err(e) => {
                        yield PlannerChunk::Error(format!("Stream read error: {e}"));
                        return;
                    }
                };

                buffer.push_str(&String::from_utf8_lossy(&bytes));

                // Process complete SSE lines
                while let Some(line_end) = buffer.find('\n') {
                    let line = buffer[..line_end].trim().to_string();
                    buffer = buffer[line_end + 1..].to_string();

                    if line.is_empty() || line.starts_with(':') {
                        continue;
                    }

                    if let Some(data) = line.strip_prefix("data: ") {
                        if data.trim() == "[DONE]" {
                            break 'recv;
                        }

                        let Ok(parsed) = serde_json::from_str::<Value>(data) else {
                            continue;
                        };
                        let Some(step) = parsed["output_column_name"].as_str() else {
                            continue;
                        };
                        if !STEP_COLUMNS.contains(&step) {
                            continue;
                        }
                        let Some(text) = cell_text(&parsed) else {
                            continue;
                        };

                        accumulated
                            .entry(step.to_string())
                            .or_default()
                            .push_str(&text);
                        yield PlannerChunk::Token {
                            step: step.to_string(),
                            text,
                        };
                    }
                }
            }

            let reasoning = ReasoningChain::from_columns(|name| accumulated.get(name).cloned());
            let outcome = parse_final(reasoning.step8_final.as_deref().unwrap_or(""));
            yield PlannerChunk::Done(Box::new(GeneratedItinerary { outcome, reasoning }));
        })
    }
}

/// Extract text from an upstream cell, whatever its shape: a bare string,
/// `{text}`, or a completion object with `choices`.
fn cell_text(cell: &Value) -> Option<String> {
    if let Some(s) = cell.as_str() {
        return Some(s.to_string());
    }
    if let Some(s) = cell["text"].as_str() {
        return Some(s.to_string());
    }
    if let Some(s) = cell["choices"][0]["message"]["content"].as_str() {
        return Some(s.to_string());
    }
    if let Some(s) = cell["choices"][0]["delta"]["content"].as_str() {
        return Some(s.to_string());
    }
    None
}

/// Parse the final step into the tagged outcome. Anything that isn't the
/// expected JSON shape is carried back verbatim as `Malformed`.
fn parse_final(raw: &str) -> UpstreamOutcome {
    match serde_json::from_str::<ItineraryPayload>(raw) {
        Ok(payload) => UpstreamOutcome::Parsed(payload),
        Err(_) => UpstreamOutcome::Malformed {
            raw: raw.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UpstreamConfig;
    use jalan_query::DietaryPreference;

    fn resolved() -> ResolvedUpstream {
        let mut config = UpstreamConfig::default();
        config.api_key = Some("key".into());
        config.project_id = Some("proj".into());
        config.resolve().unwrap()
    }

    #[test]
    fn test_row_body_uses_wire_labels() {
        let req = ItineraryRequest {
            start_time: "09:00".into(),
            dietary: DietaryPreference::HalalOnly,
            transport: Default::default(),
            accessibility: Default::default(),
        };
        let body = UpstreamClient::row_body(&resolved(), &req, false);

        assert_eq!(body["table_id"], "TripPlanner");
        assert_eq!(body["stream"], false);
        let row = &body["data"][0];
        assert_eq!(row["start_time"], "09:00");
        assert_eq!(row["dietary"], "Halal only");
        assert_eq!(row["transport"], "Public transport");
        assert_eq!(row["accessibility"], "No preference");
    }

    #[test]
    fn test_cell_text_shapes() {
        assert_eq!(cell_text(&json!("plain")), Some("plain".into()));
        assert_eq!(cell_text(&json!({"text": "wrapped"})), Some("wrapped".into()));
        assert_eq!(
            cell_text(&json!({"choices": [{"message": {"content": "chat"}}]})),
            Some("chat".into())
        );
        assert_eq!(
            cell_text(&json!({"choices": [{"delta": {"content": "tok"}}]})),
            Some("tok".into())
        );
        assert_eq!(cell_text(&json!({"other": 1})), None);
    }

    #[test]
    fn test_parse_final_valid_payload() {
        let raw = r#"{
            "itinerary": [{"time": "09:00", "place": "Batu Caves", "type": "Tourist Spot", "reasoning": "early"}],
            "summary": "A short day",
            "transport_notes": "LRT"
        }"#;
        match parse_final(raw) {
            UpstreamOutcome::Parsed(payload) => {
                assert_eq!(payload.itinerary.len(), 1);
                assert_eq!(payload.itinerary[0].place.as_deref(), Some("Batu Caves"));
                assert_eq!(payload.summary.as_deref(), Some("A short day"));
            }
            UpstreamOutcome::Malformed { .. } => panic!("expected parsed payload"),
        }
    }

    #[test]
    fn test_parse_final_malformed_keeps_raw() {
        let raw = "Sorry, I could not produce JSON today.";
        match parse_final(raw) {
            UpstreamOutcome::Malformed { raw: kept } => assert_eq!(kept, raw),
            UpstreamOutcome::Parsed(_) => panic!("expected malformed"),
        }
    }

    #[test]
    fn test_rows_url_joins_base() {
        let url = UpstreamClient::rows_url(&resolved());
        assert_eq!(url, "https://api.jamaibase.com/api/v1/gen_tables/action/rows/add");
    }
}
