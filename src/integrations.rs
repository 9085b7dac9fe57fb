//! External save/upload adapters.
//!
//! Two fire-and-forget style operations against Apps Script endpoints:
//! - `save_record` — submit a JSON-shaped record as URL-encoded form data
//!   (field `data` = JSON string) to the record-save endpoint
//! - `upload_photo` — submit a base64-encoded image the same way to the
//!   file-upload endpoint
//!
//! There is no retry, no backoff and no idempotency key. A failed submission
//! surfaces as an `IntegrationError` which the wizard converts into a
//! user-facing toast, leaving the session on the same phase.

use crate::config::EndpointsConfig;
use crate::errors::IntegrationError;
use crate::record::{InstallationPhoto, OnboardingRecord};
use anyhow::Context;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Record submitted after the license-confirm phase.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleSavePayload {
    pub box_id: String,
    pub state: String,
    pub license_plate: String,
    pub nickname: String,
    pub vin: String,
    pub make: String,
    pub model: String,
    /// Always `"vehicle"`
    pub data_type: String,
    /// RFC 3339 submission time
    pub timestamp: String,
}

impl VehicleSavePayload {
    /// Build the payload from the accumulated record. Missing fields submit
    /// as empty strings, matching the endpoint's loose contract.
    pub fn from_record(record: &OnboardingRecord) -> Self {
        let vehicle = record.vehicle.clone().unwrap_or_default();
        Self {
            box_id: record.box_id.clone().unwrap_or_default(),
            state: vehicle.state,
            license_plate: vehicle.license_plate,
            nickname: vehicle.nickname.unwrap_or_default(),
            vin: vehicle.vin,
            make: vehicle.make,
            model: vehicle.model,
            data_type: "vehicle".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Record submitted after the satisfaction survey, carrying the complete
/// vehicle data alongside the rating.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CsatSavePayload {
    pub box_id: String,
    pub state: String,
    pub license_plate: String,
    pub nickname: String,
    pub vin: String,
    pub make: String,
    pub model: String,
    pub rating: u8,
    pub feedback: String,
    /// Always `"csat"`
    pub data_type: String,
    pub timestamp: String,
}

impl CsatSavePayload {
    pub fn from_record(record: &OnboardingRecord) -> Self {
        let vehicle = record.vehicle.clone().unwrap_or_default();
        let csat = record.csat.clone();
        Self {
            box_id: record.box_id.clone().unwrap_or_default(),
            state: vehicle.state,
            license_plate: vehicle.license_plate,
            nickname: vehicle.nickname.unwrap_or_default(),
            vin: vehicle.vin,
            make: vehicle.make,
            model: vehicle.model,
            rating: csat.as_ref().map(|c| c.rating).unwrap_or(0),
            feedback: csat.and_then(|c| c.feedback).unwrap_or_default(),
            data_type: "csat".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// JSON wrapper for the file-upload endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UploadPayload {
    image_base64: String,
    content_type: String,
    license_plate: String,
}

/// Response from the record-save endpoint.
#[derive(Debug, Deserialize)]
pub struct SaveResponse {
    pub ok: bool,
    pub error: Option<String>,
}

/// Response from the file-upload endpoint.
#[derive(Debug, Deserialize)]
pub struct UploadResponse {
    pub ok: bool,
    #[serde(rename = "webViewLink")]
    pub web_view_link: Option<String>,
    #[serde(rename = "fileUrl")]
    pub file_url: Option<String>,
    pub error: Option<String>,
}

/// Client for the two external endpoints.
#[derive(Debug, Clone)]
pub struct Integrations {
    client: reqwest::Client,
    sheets_url: String,
    drive_url: String,
}

impl Integrations {
    pub fn new(endpoints: &EndpointsConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            sheets_url: endpoints.sheets_url.clone(),
            drive_url: endpoints.drive_url.clone(),
        }
    }

    /// POST a payload as `data=<json>` form data and return the raw response.
    async fn post_data<T: Serialize>(
        &self,
        url: &str,
        payload: &T,
    ) -> Result<reqwest::Response, IntegrationError> {
        let data = serde_json::to_string(payload)
            .context("Failed to serialize submission payload")
            .map_err(IntegrationError::Other)?;
        let response = self
            .client
            .post(url)
            .form(&[("data", data.as_str())])
            .send()
            .await?
            .error_for_status()?;
        Ok(response)
    }

    /// Submit a record to the save endpoint.
    pub async fn save_record<T: Serialize>(&self, payload: &T) -> Result<(), IntegrationError> {
        tracing::info!(url = %self.sheets_url, "saving record");
        let response: SaveResponse = self
            .post_data(&self.sheets_url, payload)
            .await?
            .json()
            .await?;
        if !response.ok {
            return Err(IntegrationError::Endpoint {
                message: response
                    .error
                    .unwrap_or_else(|| "Record save was rejected".to_string()),
            });
        }
        Ok(())
    }

    /// Upload an installation photo, returning its view link.
    pub async fn upload_photo(
        &self,
        photo: &InstallationPhoto,
        license_plate: &str,
    ) -> Result<String, IntegrationError> {
        let payload = UploadPayload {
            image_base64: BASE64.encode(&photo.bytes),
            content_type: photo.content_type.clone(),
            license_plate: license_plate.to_string(),
        };
        tracing::info!(
            url = %self.drive_url,
            bytes = photo.bytes.len(),
            "uploading installation photo"
        );
        let response: UploadResponse = self
            .post_data(&self.drive_url, &payload)
            .await?
            .json()
            .await?;
        if !response.ok {
            return Err(IntegrationError::Endpoint {
                message: response
                    .error
                    .unwrap_or_else(|| "Photo upload was rejected".to_string()),
            });
        }
        Ok(response
            .web_view_link
            .or(response.file_url)
            .unwrap_or_else(|| "Upload successful".to_string()))
    }
}

/// Read an installation photo from disk, guessing its content type from the
/// file extension.
pub async fn read_photo(path: &Path) -> Result<InstallationPhoto, IntegrationError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| IntegrationError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
    let content_type = mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string();
    Ok(InstallationPhoto {
        path: path.to_path_buf(),
        content_type,
        bytes,
    })
}
