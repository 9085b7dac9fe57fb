//! HTTP adapter tests against a mock server.
//!
//! Exercises the save and upload adapters end to end: form encoding of the
//! `data` field, `ok`/`error` response handling, and link selection for
//! uploaded photos.

use tagpro_onboard::config::EndpointsConfig;
use tagpro_onboard::errors::IntegrationError;
use tagpro_onboard::integrations::{Integrations, VehicleSavePayload};
use tagpro_onboard::record::{InstallationPhoto, OnboardingRecord, VehicleDetails};

use std::path::PathBuf;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn integrations_for(server: &MockServer) -> Integrations {
    Integrations::new(&EndpointsConfig {
        sheets_url: format!("{}/save", server.uri()),
        drive_url: format!("{}/upload", server.uri()),
    })
}

fn sample_payload() -> VehicleSavePayload {
    let mut record = OnboardingRecord::new();
    record.box_id = Some("Tag_Pro-AB12CD".to_string());
    record.vehicle = Some(VehicleDetails {
        state: "NY".to_string(),
        license_plate: "XYZ7890".to_string(),
        vin: "1HGCM82633A004352".to_string(),
        make: "Toyota".to_string(),
        model: "Camry".to_string(),
        nickname: None,
    });
    VehicleSavePayload::from_record(&record)
}

fn sample_photo() -> InstallationPhoto {
    InstallationPhoto {
        path: PathBuf::from("install.jpg"),
        content_type: "image/jpeg".to_string(),
        bytes: b"fake jpeg bytes".to_vec(),
    }
}

// =============================================================================
// save_record
// =============================================================================

#[tokio::test]
async fn test_save_record_posts_url_encoded_form_with_data_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/save"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        // data=<url-encoded JSON object>
        .and(body_string_contains("data=%7B"))
        .and(body_string_contains("boxId"))
        .and(body_string_contains("XYZ7890"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    let result = integrations_for(&server)
        .save_record(&sample_payload())
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_save_record_rejection_surfaces_the_endpoint_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/save"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            serde_json::json!({ "ok": false, "error": "sheet is full" }),
        ))
        .mount(&server)
        .await;

    let result = integrations_for(&server)
        .save_record(&sample_payload())
        .await;
    match result {
        Err(IntegrationError::Endpoint { message }) => assert_eq!(message, "sheet is full"),
        other => panic!("Expected Endpoint error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_save_record_rejection_without_message_uses_a_default() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/save"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "ok": false })))
        .mount(&server)
        .await;

    let result = integrations_for(&server)
        .save_record(&sample_payload())
        .await;
    match result {
        Err(IntegrationError::Endpoint { message }) => {
            assert!(message.contains("rejected"));
        }
        other => panic!("Expected Endpoint error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_save_record_http_error_is_an_http_variant() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/save"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = integrations_for(&server)
        .save_record(&sample_payload())
        .await;
    assert!(matches!(result, Err(IntegrationError::Http(_))));
}

// =============================================================================
// upload_photo
// =============================================================================

#[tokio::test]
async fn test_upload_photo_returns_the_web_view_link() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .and(body_string_contains("imageBase64"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ok": true,
            "webViewLink": "https://drive.example.com/view/abc",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let link = integrations_for(&server)
        .upload_photo(&sample_photo(), "XYZ7890")
        .await
        .unwrap();
    assert_eq!(link, "https://drive.example.com/view/abc");
}

#[tokio::test]
async fn test_upload_photo_falls_back_to_file_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ok": true,
            "fileUrl": "https://drive.example.com/file/def",
        })))
        .mount(&server)
        .await;

    let link = integrations_for(&server)
        .upload_photo(&sample_photo(), "XYZ7890")
        .await
        .unwrap();
    assert_eq!(link, "https://drive.example.com/file/def");
}

#[tokio::test]
async fn test_upload_photo_without_any_link_still_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "ok": true })))
        .mount(&server)
        .await;

    let link = integrations_for(&server)
        .upload_photo(&sample_photo(), "XYZ7890")
        .await
        .unwrap();
    assert_eq!(link, "Upload successful");
}

#[tokio::test]
async fn test_upload_photo_rejection_is_an_endpoint_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            serde_json::json!({ "ok": false, "error": "quota exceeded" }),
        ))
        .mount(&server)
        .await;

    let result = integrations_for(&server)
        .upload_photo(&sample_photo(), "XYZ7890")
        .await;
    match result {
        Err(IntegrationError::Endpoint { message }) => assert_eq!(message, "quota exceeded"),
        other => panic!("Expected Endpoint error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_upload_photo_sends_base64_image_bytes() {
    use base64::Engine as _;
    let photo = sample_photo();
    let encoded = base64::engine::general_purpose::STANDARD.encode(&photo.bytes);
    // The JSON string lands inside a URL-encoded form value, so only check
    // for a URL-safe prefix of the encoded bytes.
    let prefix: String = encoded.chars().take_while(|c| c.is_alphanumeric()).collect();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .and(body_string_contains(prefix))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    integrations_for(&server)
        .upload_photo(&photo, "XYZ7890")
        .await
        .unwrap();
}

// =============================================================================
// Analytics fire-and-forget
// =============================================================================

mod analytics {
    use super::*;
    use tagpro_onboard::analytics::Analytics;
    use tagpro_onboard::phase::Phase;

    #[tokio::test]
    async fn test_events_reach_the_collector_without_blocking() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let analytics = Analytics::new(true, Some(server.uri()));
        analytics.phase_start(Phase::Welcome);

        // Posting happens on a spawned task; poll until it arrives.
        let mut received = Vec::new();
        for _ in 0..50 {
            received = server.received_requests().await.unwrap();
            if !received.is_empty() {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        }
        assert_eq!(received.len(), 1);
        let body = String::from_utf8(received[0].body.clone()).unwrap();
        assert!(body.contains("welcome"));
        assert!(body.contains("funnel_position"));
    }

    #[tokio::test]
    async fn test_disabled_analytics_posts_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let analytics = Analytics::new(false, Some(server.uri()));
        analytics.phase_start(Phase::Welcome);
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;

        assert!(server.received_requests().await.unwrap().is_empty());
    }
}
