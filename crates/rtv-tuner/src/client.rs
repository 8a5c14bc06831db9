// client.rs — TunerClient: the HTTP adapter for the naming service.
//
// Wire shape follows the generative-language REST API: POST a prompt to
// `{base}/v1beta/models/{model}:generateContent`, ask for a JSON response,
// and read the listing out of the first candidate's text part.
//
// The ProgramNamer contract is infallible, so every error path here ends
// in a fallback listing, logged but never propagated.

use std::future::Future;

use serde::{Deserialize, Serialize};

use rtv_goal::Category;
use rtv_session::{ProgramListing, ProgramNamer};

use crate::config::TunerConfig;
use crate::error::TunerError;

/// Listing used when no API key is configured: the raw input, filed as a
/// Documentary. No network call is made.
pub fn fallback_unconfigured(input: &str) -> ProgramListing {
    ProgramListing {
        title: input.to_string(),
        description: "A classic broadcast of personal achievement.".to_string(),
        category: Category::Documentary,
    }
}

/// Listing used when the service is configured but the call fails: the raw
/// input as breaking News.
pub fn fallback_interrupted(input: &str) -> ProgramListing {
    ProgramListing {
        title: input.to_string(),
        description: "Broadcast signal interrupted. Reverting to manual override.".to_string(),
        category: Category::News,
    }
}

/// HTTP client for the generative naming endpoint.
pub struct TunerClient {
    config: TunerConfig,
    http: reqwest::Client,
}

impl TunerClient {
    /// Build a client over the given config. The request timeout from the
    /// config is baked into the HTTP client.
    pub fn new(config: TunerConfig) -> Result<Self, TunerError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { config, http })
    }

    /// Build a client configured from the environment.
    pub fn from_env() -> Result<Self, TunerError> {
        Self::new(TunerConfig::from_env())
    }

    /// Whether calls will actually hit the network.
    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    async fn generate(&self, api_key: &str, input: &str) -> Result<ProgramListing, TunerError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        );
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: listing_prompt(input),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
            },
        };

        let response = self
            .http
            .post(&url)
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TunerError::Status(status));
        }

        let body: GenerateResponse = response.json().await?;
        parse_listing(&body)
    }
}

impl ProgramNamer for TunerClient {
    fn name_program(&self, input: &str) -> impl Future<Output = ProgramListing> + Send {
        async move {
            let Some(api_key) = self.config.api_key.clone() else {
                tracing::debug!("auto-tuner unconfigured, using offline listing");
                return fallback_unconfigured(input);
            };

            match self.generate(&api_key, input).await {
                Ok(listing) => listing,
                Err(err) => {
                    tracing::warn!(error = %err, "naming service failed, reverting to manual override");
                    fallback_interrupted(input)
                }
            }
        }
    }
}

/// The prompt sent to the service: turn the goal into a 1970s TV listing.
fn listing_prompt(input: &str) -> String {
    format!(
        "Transform the user's personal goal: \"{input}\" into a 1970s TV show listing.\n\
         1. Create a catchy, retro TV show title (max 5 words).\n\
         2. Write a short, punchy TV guide description (max 20 words) that sounds like a synopsis.\n\
         3. Categorize it as one of: Sitcom, News, Drama, Sports, Documentary.\n\
         Respond with a JSON object with keys \"title\", \"description\", \"category\"."
    )
}

/// Extract the listing from the first candidate's text part.
fn parse_listing(body: &GenerateResponse) -> Result<ProgramListing, TunerError> {
    let text = body
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .and_then(|content| content.parts.first())
        .map(|part| part.text.trim())
        .filter(|text| !text.is_empty())
        .ok_or(TunerError::EmptyResponse)?;

    Ok(serde_json::from_str(text)?)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_carries_the_goal_and_the_genres() {
        let prompt = listing_prompt("Read 10 Books");
        assert!(prompt.contains("\"Read 10 Books\""));
        assert!(prompt.contains("Sitcom, News, Drama, Sports, Documentary"));
    }

    #[test]
    fn parse_listing_reads_the_first_candidate() {
        let body: GenerateResponse = serde_json::from_str(
            r#"{
                "candidates": [{
                    "content": {
                        "parts": [{
                            "text": "{\"title\":\"The Midnight Jogger\",\"description\":\"One man. One street. Every dawn.\",\"category\":\"Sports\"}"
                        }]
                    }
                }]
            }"#,
        )
        .unwrap();

        let listing = parse_listing(&body).unwrap();
        assert_eq!(listing.title, "The Midnight Jogger");
        assert_eq!(listing.category, Category::Sports);
    }

    #[test]
    fn parse_listing_rejects_unknown_genre() {
        let body: GenerateResponse = serde_json::from_str(
            r#"{
                "candidates": [{
                    "content": {
                        "parts": [{
                            "text": "{\"title\":\"T\",\"description\":\"D\",\"category\":\"Infomercial\"}"
                        }]
                    }
                }]
            }"#,
        )
        .unwrap();
        assert!(matches!(parse_listing(&body), Err(TunerError::Malformed(_))));
    }

    #[test]
    fn parse_listing_rejects_empty_body() {
        let body: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(parse_listing(&body), Err(TunerError::EmptyResponse)));
    }

    #[tokio::test]
    async fn unconfigured_tuner_files_under_documentary() {
        let client = TunerClient::new(TunerConfig::default()).unwrap();
        let listing = client.name_program("Read More").await;
        assert_eq!(listing.title, "Read More");
        assert_eq!(
            listing.description,
            "A classic broadcast of personal achievement."
        );
        assert_eq!(listing.category, Category::Documentary);
    }

    #[tokio::test]
    async fn failing_tuner_reverts_to_manual_override() {
        // Port 1 refuses connections; the call errors and falls back.
        let config = TunerConfig {
            api_key: Some("test-key".to_string()),
            base_url: "http://127.0.0.1:1".to_string(),
            ..TunerConfig::default()
        };
        let client = TunerClient::new(config).unwrap();

        let listing = client.name_program("Read More").await;
        assert_eq!(listing.title, "Read More");
        assert_eq!(
            listing.description,
            "Broadcast signal interrupted. Reverting to manual override."
        );
        assert_eq!(listing.category, Category::News);
    }
}
