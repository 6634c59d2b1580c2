/// Parser Client — the single point of entry for all résumé-parsing calls.
///
/// ARCHITECTURAL RULE: No other module may call the parsing provider directly.
/// All parse requests MUST go through this module.
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::NaiveDate;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const PARSER_API_URL: &str = "https://rest.resumeparsing.com/v10/parser/resume";
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Undecodable parse response: {0}")]
    Decode(String),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct ParseRequest {
    document_as_base64_string: String,
    document_last_modified: String,
}

/// Typed mirror of the provider response, restricted to the subtree the
/// pipeline reads. Every field the provider may omit is an `Option` here so
/// default resolution stays in the extractor, not scattered through traversal.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParseResponse {
    pub value: ParsedValue,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParsedValue {
    pub resume_data: ResumeData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResumeData {
    pub employment_history: Option<EmploymentHistory>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmploymentHistory {
    #[serde(default)]
    pub positions: Vec<ParsedPosition>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParsedPosition {
    pub description: Option<String>,
    pub job_title: Option<JobTitle>,
    pub employer: Option<Employer>,
    #[serde(default)]
    pub is_current: bool,
    pub start_date: Option<DateField>,
    pub end_date: Option<DateField>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobTitle {
    pub normalized: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Employer {
    pub name: Option<EmployerName>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmployerName {
    pub normalized: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DateField {
    pub date: Option<String>,
}

/// The single parsing-provider client used by the resume pipeline.
#[derive(Clone)]
pub struct ParserClient {
    client: Client,
    account_id: String,
    service_key: String,
}

impl ParserClient {
    pub fn new(account_id: String, service_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            account_id,
            service_key,
        }
    }

    /// Sends one document to the parsing provider and returns its structured
    /// response. Single attempt, no retry: a failed call fails this request.
    pub async fn parse(
        &self,
        document: &[u8],
        last_modified: NaiveDate,
    ) -> Result<ParseResponse, ParseError> {
        let request_body = ParseRequest {
            document_as_base64_string: BASE64.encode(document),
            document_last_modified: last_modified.format("%Y-%m-%d").to_string(),
        };

        let response = self
            .client
            .post(PARSER_API_URL)
            .header("accept", "application/json")
            .header("sovren-accountid", &self.account_id)
            .header("sovren-servicekey", &self.service_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ParseError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let parsed: ParseResponse =
            serde_json::from_str(&body).map_err(|e| ParseError::Decode(e.to_string()))?;

        let position_count = parsed
            .value
            .resume_data
            .employment_history
            .as_ref()
            .map(|h| h.positions.len())
            .unwrap_or(0);
        debug!("Parse call succeeded: {position_count} positions");

        Ok(parsed)
    }
}
