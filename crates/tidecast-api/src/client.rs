//! HTTP client for the fishing forecast backend.

use chrono::NaiveDate;
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::instrument;

use crate::error::TransportError;
use crate::outcome::ApiOutcome;
use crate::types::{Envelope, FishingSpot, ImageUpload, Prediction, SeaConditions, TideCycle};

/// Prediction failure statuses the backend documents. Their response
/// bodies pass through to the caller untouched; anything else is masked.
const EXPECTED_PREDICTION_STATUSES: [u16; 5] = [422, 204, 405, 415, 400];

pub struct ForecastClient {
    client: reqwest::Client,
    base_url: String,
}

impl ForecastClient {
    /// Create a client against the given backend base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Create a client from the loaded application configuration.
    pub fn from_config(config: &tidecast_core::Config) -> Self {
        Self::new(config.services.base_url.clone())
    }

    /// List all registered fishing spots.
    #[instrument(skip(self), level = "info")]
    pub async fn list_spots(&self) -> ApiOutcome<Vec<FishingSpot>> {
        let url = format!("{}/api/spots", self.base_url);
        self.dispatch(self.client.get(&url)).await
    }

    /// Fetch a single fishing spot by id.
    #[instrument(skip(self), level = "info")]
    pub async fn get_spot(&self, spot_id: &str) -> ApiOutcome<FishingSpot> {
        let url = format!(
            "{}/api/spots/{}",
            self.base_url,
            urlencoding::encode(spot_id)
        );
        self.dispatch(self.client.get(&url)).await
    }

    /// Look up the tide cycle for a calendar date.
    #[instrument(skip(self), level = "info")]
    pub async fn get_tide_cycle(&self, date: NaiveDate) -> ApiOutcome<TideCycle> {
        let url = format!("{}/api/tide-cycles", self.base_url);
        let request = self
            .client
            .get(&url)
            .query(&[("nowdate", date.format("%Y-%m-%d").to_string())]);
        self.dispatch(request).await
    }

    /// Submit a photo for species prediction.
    ///
    /// Pass `token` when the caller is signed in so the backend can attach
    /// the result to their catch log.
    #[instrument(skip(self, image), level = "info")]
    pub async fn request_prediction(
        &self,
        image: ImageUpload,
        token: Option<&str>,
    ) -> ApiOutcome<Prediction> {
        let url = format!("{}/predict", self.base_url);

        let part = match Part::bytes(image.bytes)
            .file_name(image.file_name)
            .mime_str(&image.content_type)
        {
            Ok(part) => part,
            Err(e) => {
                tracing::error!(error = %e, "prediction upload could not be assembled");
                return ApiOutcome::TransportFault(TransportError::Network(e));
            }
        };
        let form = Form::new().part("image", part);

        let mut request = self.client.post(&url).multipart(form);
        if let Some(token) = token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        match request.send().await {
            Ok(response) => Self::read_prediction_outcome(response).await,
            Err(e) => Self::transport_fault(e),
        }
    }

    /// Fetch the assistant's reply for a finished chat run.
    #[instrument(skip(self), level = "info")]
    pub async fn get_assistant_reply(&self, thread_id: &str, run_id: &str) -> ApiOutcome<String> {
        let url = format!("{}/predict/chat", self.base_url);
        let request = self
            .client
            .post(&url)
            .form(&[("thread_id", thread_id), ("run_id", run_id)]);
        self.dispatch(request).await
    }

    /// Fetch land weather for a coordinate.
    ///
    /// The payload aggregates an upstream provider response and stays
    /// loosely typed.
    #[instrument(skip(self), level = "info")]
    pub async fn get_land_weather(&self, lat: f64, lon: f64) -> ApiOutcome<Value> {
        let url = format!("{}/api/get-weather", self.base_url);
        let request = self
            .client
            .post(&url)
            .form(&[("lat", lat.to_string()), ("lon", lon.to_string())]);
        self.dispatch(request).await
    }

    /// Fetch sea conditions near a coordinate.
    #[instrument(skip(self), level = "info")]
    pub async fn get_sea_weather(&self, lat: f64, lon: f64) -> ApiOutcome<SeaConditions> {
        let url = format!("{}/api/get-seaweather", self.base_url);
        let request = self
            .client
            .post(&url)
            .form(&[("lat", lat.to_string()), ("lon", lon.to_string())]);
        self.dispatch(request).await
    }

    /// Send one request and normalize whatever comes back.
    async fn dispatch<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> ApiOutcome<T> {
        match request.send().await {
            Ok(response) => Self::read_outcome(response).await,
            Err(e) => Self::transport_fault(e),
        }
    }

    fn transport_fault<T>(error: reqwest::Error) -> ApiOutcome<T> {
        tracing::error!(error = %error, "request failed without a response");
        ApiOutcome::TransportFault(TransportError::Network(error))
    }

    /// Normalize a response: 200 unwraps the envelope, any other 2xx means
    /// the backend had nothing to return, and a failure status carries its
    /// body to the caller.
    async fn read_outcome<T: DeserializeOwned>(response: reqwest::Response) -> ApiOutcome<T> {
        let status = response.status();

        if status == StatusCode::OK {
            return Self::unwrap_envelope(response).await;
        }

        if status.is_success() {
            tracing::info!(status = status.as_u16(), "backend returned no data");
            return ApiOutcome::Empty;
        }

        Self::business_fault(response).await
    }

    /// Normalize a prediction response. The prediction endpoint never maps
    /// to `Empty`: a bare 2xx is the backend's no-content signal, and only
    /// the documented failure statuses keep their bodies.
    async fn read_prediction_outcome(response: reqwest::Response) -> ApiOutcome<Prediction> {
        let status = response.status();

        if status == StatusCode::OK {
            return Self::unwrap_envelope(response).await;
        }

        if status.is_success() {
            tracing::warn!(status = status.as_u16(), "prediction returned no content");
            return ApiOutcome::BusinessFault {
                status: 204,
                body: json!({ "message": "No content" }),
            };
        }

        if EXPECTED_PREDICTION_STATUSES.contains(&status.as_u16()) {
            return Self::business_fault(response).await;
        }

        tracing::error!(
            status = status.as_u16(),
            "prediction failed with an unexpected status"
        );
        ApiOutcome::BusinessFault {
            status: status.as_u16(),
            body: json!({ "message": "Unhandled error" }),
        }
    }

    async fn unwrap_envelope<T: DeserializeOwned>(response: reqwest::Response) -> ApiOutcome<T> {
        match response.json::<Envelope<T>>().await {
            Ok(envelope) => ApiOutcome::Success(envelope.data),
            Err(e) => {
                tracing::error!(error = %e, "response did not match the envelope contract");
                ApiOutcome::TransportFault(TransportError::Decode(e.to_string()))
            }
        }
    }

    async fn business_fault<T>(response: reqwest::Response) -> ApiOutcome<T> {
        let status = response.status().as_u16();
        let body = response.json::<Value>().await.unwrap_or(Value::Null);
        tracing::warn!(status, %body, "backend reported a failure");
        ApiOutcome::BusinessFault { status, body }
    }
}
