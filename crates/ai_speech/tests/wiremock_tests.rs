//! Wiremock-based integration tests for the Whisper client

use ai_speech::{AudioFormat, SpeechConfig, WhisperClient};
use application::SpeechPort;
use bytes::Bytes;
use secrecy::SecretString;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

fn config_for(server: &MockServer) -> SpeechConfig {
    SpeechConfig {
        base_url: server.uri(),
        api_key: Some(SecretString::from("gsk_test_key")),
        ..Default::default()
    }
}

#[tokio::test]
async fn transcribes_downloaded_audio() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/media/voice-note.ogg"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "audio/ogg; codecs=opus")
                .set_body_bytes(vec![0x4f, 0x67, 0x67, 0x53]),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/audio/transcriptions"))
        .and(header("authorization", "Bearer gsk_test_key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "text": "bom dia, tudo bem?",
            "language": "portuguese",
            "duration": 3.5
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = WhisperClient::new(config_for(&server)).unwrap();
    let url = format!("{}/media/voice-note.ogg", server.uri());
    let result = client.transcribe_url(&url).await.unwrap();

    assert_eq!(result.text, "bom dia, tudo bem?");
    assert_eq!(result.detected_language, Some("portuguese".to_string()));
    assert_eq!(result.duration_ms, Some(3500));
}

#[tokio::test]
async fn download_failure_surfaces_as_transcription_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/media/gone.ogg"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = WhisperClient::new(config_for(&server)).unwrap();
    let url = format!("{}/media/gone.ogg", server.uri());
    let err = client.transcribe_url(&url).await.unwrap_err();

    assert!(err.to_string().contains("404"));
}

#[tokio::test]
async fn empty_audio_is_rejected_before_upload() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/media/empty.ogg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(Vec::new()))
        .mount(&server)
        .await;

    // No transcription mock mounted; a request to it would 404 and the
    // assertion below would see the wrong message.
    let client = WhisperClient::new(config_for(&server)).unwrap();
    let url = format!("{}/media/empty.ogg", server.uri());
    let err = client.transcribe_url(&url).await.unwrap_err();

    assert!(err.to_string().contains("empty"));
}

#[tokio::test]
async fn api_error_body_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/audio/transcriptions"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": {"message": "file too small"}
        })))
        .mount(&server)
        .await;

    let client = WhisperClient::new(config_for(&server)).unwrap();
    let err = client
        .transcribe(Bytes::from_static(&[1, 2, 3]), AudioFormat::Ogg)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("file too small"));
}

#[tokio::test]
async fn rate_limit_is_mapped() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/audio/transcriptions"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let client = WhisperClient::new(config_for(&server)).unwrap();
    let err = client
        .transcribe(Bytes::from_static(&[1, 2, 3]), AudioFormat::Opus)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Rate limit exceeded");
}

#[tokio::test]
async fn availability_probe_hits_models_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/models"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": []
        })))
        .mount(&server)
        .await;

    let client = WhisperClient::new(config_for(&server)).unwrap();
    assert!(client.is_available().await);
}
