//! reqwest-backed adapter for the question and validation services

use super::error::{ApiError, Result};
use super::protocol::{
    PublicQuestionDto, QuestionDto, RANDOM_QUESTION_PATH, VALIDATE_PLACEMENT_PATH,
    ValidatePlacementDto, error_detail, question_path,
};
use async_trait::async_trait;
use numline_application::{PlacementOracle, QuestionSource, ServiceError};
use numline_domain::{PlacementRequest, PlacementVerdict, Question, QuestionDetail, QuestionId};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("numline/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the game API
///
/// One instance serves both ports; `base_url` is the prefix in front of
/// `questions/...` and `game/...` (typically ending in `/api`).
pub struct HttpGameApi {
    client: Client,
    base_url: String,
}

impl HttpGameApi {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/').to_string();
        reqwest::Url::parse(&trimmed).map_err(|e| ApiError::InvalidBaseUrl {
            url: base_url.clone(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: trimmed,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        Self::decode(response).await
    }

    async fn post_json<B: serde::Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.url(path);
        debug!("POST {}", url);
        let response = self.client.post(&url).json(body).send().await?;
        Self::decode(response).await
    }

    /// Turn a response into `T`, mapping every non-2xx status to an error
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let detail = error_detail(&body);
            warn!("Request failed with HTTP {}: {:?}", status.as_u16(), detail);
            if status == StatusCode::NOT_FOUND {
                return Err(ApiError::NotFound(
                    detail.unwrap_or_else(|| "Not found".to_string()),
                ));
            }
            return Err(ApiError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        serde_json::from_str(&body).map_err(|e| ApiError::ParseError {
            error: e.to_string(),
            raw: body,
        })
    }

    pub async fn fetch_random_question(&self) -> Result<Question> {
        let dto: PublicQuestionDto = self.get_json(RANDOM_QUESTION_PATH).await?;
        Ok(dto.into())
    }

    pub async fn fetch_question(&self, id: QuestionId) -> Result<QuestionDetail> {
        let dto: QuestionDto = self.get_json(&question_path(id)).await?;
        Ok(dto.into())
    }

    pub async fn validate_placement(&self, request: &PlacementRequest) -> Result<PlacementVerdict> {
        let dto: ValidatePlacementDto = self.post_json(VALIDATE_PLACEMENT_PATH, request).await?;
        Ok(dto.into())
    }
}

#[async_trait]
impl QuestionSource for HttpGameApi {
    async fn random_question(&self) -> std::result::Result<Question, ServiceError> {
        self.fetch_random_question().await.map_err(ServiceError::from)
    }

    async fn question_detail(
        &self,
        id: QuestionId,
    ) -> std::result::Result<QuestionDetail, ServiceError> {
        self.fetch_question(id).await.map_err(ServiceError::from)
    }
}

#[async_trait]
impl PlacementOracle for HttpGameApi {
    async fn validate(
        &self,
        request: &PlacementRequest,
    ) -> std::result::Result<PlacementVerdict, ServiceError> {
        self.validate_placement(request)
            .await
            .map_err(ServiceError::from)
    }
}
