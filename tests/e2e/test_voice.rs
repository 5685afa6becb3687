use crate::e2e::helpers;

use helpers::{TestContext, ADAM, BELLA, FAKE_MP3, GREETING, TEST_API_KEY};
use hyper::StatusCode;
use serde_json::{json, Value};
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_all_voice_labels(ctx: &TestContext) {
    let response = ctx.client.get("/api/voices").await.unwrap();

    response.assert_status(StatusCode::OK);

    let voices: Vec<Value> = response.json().unwrap();
    assert_eq!(voices.len(), 8);
    let labels: Vec<&str> = voices
        .iter()
        .filter_map(|v| v.get("label").and_then(|l| l.as_str()))
        .collect();
    assert!(labels.contains(&"English Male"));
    assert!(labels.contains(&"Spanish Female"));
    assert_eq!(voices[2].get("language").and_then(|v| v.as_str()), Some("Urdu"));
    assert_eq!(voices[3].get("gender").and_then(|v| v.as_str()), Some("female"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_generate_voice_from_trimmed_text(ctx: &mut TestContext) {
    let mock = ctx.mock_synthesis(ADAM, "Assalamu alaikum").await;

    let response = ctx
        .client
        .post(
            "/api/voice/generate",
            &json!({ "text": "  Assalamu alaikum \n", "voice": "Urdu Male" }),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    response
        .assert_status(StatusCode::OK)
        .assert_header("content-type", "audio/mpeg")
        .assert_header("x-voice-id", ADAM)
        .assert_header(
            "x-character-count",
            &(GREETING.chars().count() + 16).to_string(),
        )
        .assert_header_exists("x-audio-handle");
    assert_eq!(response.body_bytes, FAKE_MP3);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_empty_text_without_calling_provider(ctx: &mut TestContext) {
    let mock = ctx.mock_no_synthesis().await;

    for text in ["", "    "] {
        let response = ctx
            .client
            .post(
                "/api/voice/generate",
                &json!({ "text": text, "voice": "English Male" }),
            )
            .await
            .unwrap();

        response
            .assert_status(StatusCode::BAD_REQUEST)
            .assert_error_message("Please enter some text.");
    }

    mock.assert_async().await;

    let status = ctx.client.get("/api/voice/status").await.unwrap();
    let body = status.body.as_ref().unwrap();
    assert_eq!(body["status"]["kind"], "error");
    assert_eq!(body["status"]["message"], "Please enter some text.");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_unknown_voice_without_calling_provider(ctx: &mut TestContext) {
    let mock = ctx.mock_no_synthesis().await;

    let response = ctx
        .client
        .post(
            "/api/voice/generate",
            &json!({ "text": "hello", "voice": "Arabic Male" }),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("Unknown voice: Arabic Male");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_surface_provider_error_detail(ctx: &mut TestContext) {
    let _mock = ctx.mock_synthesis_error(400, r#"{"detail":"bad voice id"}"#).await;

    let response = ctx
        .client
        .post(
            "/api/voice/generate",
            &json!({ "text": "hello", "voice": "English Female" }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_GATEWAY)
        .assert_error_message("bad voice id");

    let status = ctx.client.get("/api/voice/status").await.unwrap();
    let body = status.body.as_ref().unwrap();
    assert_eq!(body["state"], "failed");
    assert_eq!(body["status"]["message"], "Error: bad voice id");
    assert_eq!(body["download_enabled"], false);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_status_code_when_error_body_is_unparseable(ctx: &mut TestContext) {
    let _mock = ctx.mock_synthesis_error(500, "upstream exploded").await;

    let response = ctx
        .client
        .post(
            "/api/voice/generate",
            &json!({ "text": "hello", "voice": "Hindi Female" }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_GATEWAY);
    assert!(
        response.message().contains("500"),
        "message should carry the status code: {}",
        response.message()
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_not_download_before_generating(ctx: &mut TestContext) {
    let response = ctx.client.get("/api/voice/download").await.unwrap();

    response
        .assert_status(StatusCode::NOT_FOUND)
        .assert_error_message("No voice available to download.");
    assert!(response.header("content-disposition").is_none());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_download_generated_voice(ctx: &mut TestContext) {
    let _mock = ctx.mock_synthesis(BELLA, "Peace").await;

    let generated = ctx
        .client
        .post(
            "/api/voice/generate",
            &json!({ "text": "Peace", "voice": "Spanish Female" }),
        )
        .await
        .unwrap();
    generated.assert_status(StatusCode::OK);

    let response = ctx.client.get("/api/voice/download").await.unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header(
            "content-disposition",
            "attachment; filename=\"Azan_World_Voice.mp3\"",
        )
        .assert_header("content-type", "audio/mpeg");
    assert_eq!(response.body_bytes, FAKE_MP3);
    assert_eq!(
        response.header("x-audio-handle"),
        generated.header("x-audio-handle")
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_replay_recorded_audio_by_handle(ctx: &mut TestContext) {
    let _mock = ctx.mock_synthesis(ADAM, "Replay me").await;

    let generated = ctx
        .client
        .post(
            "/api/voice/generate",
            &json!({ "text": "Replay me", "voice": "English Male" }),
        )
        .await
        .unwrap();
    let handle = generated.header("x-audio-handle").unwrap().clone();

    let response = ctx
        .client
        .get(&format!("/api/voice/audio/{}", handle))
        .await
        .unwrap();
    response.assert_status(StatusCode::OK);
    assert_eq!(response.body_bytes, FAKE_MP3);

    let missing = ctx
        .client
        .get("/api/voice/audio/00000000-0000-0000-0000-000000000000")
        .await
        .unwrap();
    missing.assert_status(StatusCode::NOT_FOUND);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_disable_download_after_failed_generation(ctx: &mut TestContext) {
    let ok = ctx.mock_synthesis(ADAM, "first").await;
    ctx.client
        .post(
            "/api/voice/generate",
            &json!({ "text": "first", "voice": "English Male" }),
        )
        .await
        .unwrap()
        .assert_status(StatusCode::OK);
    ok.assert_async().await;
    drop(ok);

    let _mock = ctx.mock_synthesis_error(422, r#"{"detail":"text too long"}"#).await;
    ctx.client
        .post(
            "/api/voice/generate",
            &json!({ "text": "second", "voice": "English Male" }),
        )
        .await
        .unwrap()
        .assert_status(StatusCode::BAD_GATEWAY);

    let response = ctx.client.get("/api/voice/download").await.unwrap();
    response.assert_status(StatusCode::NOT_FOUND);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_keep_recorded_voice_after_rejected_input(ctx: &mut TestContext) {
    let _mock = ctx.mock_synthesis(BELLA, "keep me").await;

    let generated = ctx
        .client
        .post(
            "/api/voice/generate",
            &json!({ "text": "keep me", "voice": "English Female" }),
        )
        .await
        .unwrap();
    generated.assert_status(StatusCode::OK);

    ctx.client
        .post(
            "/api/voice/generate",
            &json!({ "text": "   ", "voice": "English Female" }),
        )
        .await
        .unwrap()
        .assert_status(StatusCode::BAD_REQUEST);

    let status = ctx.client.get("/api/voice/status").await.unwrap();
    let body = status.body.as_ref().unwrap();
    assert_eq!(body["status"]["message"], "Please enter some text.");
    assert_eq!(body["download_enabled"], true);

    let response = ctx.client.get("/api/voice/download").await.unwrap();
    response.assert_status(StatusCode::OK);
    assert_eq!(response.body_bytes, FAKE_MP3);
    assert_eq!(
        response.header("x-audio-handle"),
        generated.header("x-audio-handle")
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_keep_sessions_apart(ctx: &mut TestContext) {
    let _mock = ctx.mock_synthesis(ADAM, "mine").await;

    ctx.client
        .post_in_session(
            "/api/voice/generate",
            &json!({ "text": "mine", "voice": "English Male" }),
            "page-a",
        )
        .await
        .unwrap()
        .assert_status(StatusCode::OK);

    ctx.client
        .get_in_session("/api/voice/download", "page-a")
        .await
        .unwrap()
        .assert_status(StatusCode::OK);
    ctx.client
        .get_in_session("/api/voice/download", "page-b")
        .await
        .unwrap()
        .assert_status(StatusCode::NOT_FOUND);

    let status = ctx
        .client
        .get_in_session("/api/voice/status", "page-a")
        .await
        .unwrap();
    let body = status.body.as_ref().unwrap();
    assert_eq!(body["state"], "succeeded");
    assert_eq!(body["status"]["kind"], "success");
    assert_eq!(body["status"]["message"], "Voice generated successfully!");
    assert_eq!(body["controls_enabled"], true);
    assert_eq!(body["download_enabled"], true);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_idle_status_for_new_session(ctx: &TestContext) {
    let response = ctx
        .client
        .get_in_session("/api/voice/status", "fresh-page")
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    assert_eq!(body["state"], "idle");
    assert_eq!(body["status"]["kind"], "info");
    assert_eq!(body["status"]["message"], "");
    assert!(body.get("handle_id").is_none());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_never_echo_the_api_key(ctx: &mut TestContext) {
    let _mock = ctx.mock_synthesis_error(401, r#"{"detail":{"status":"invalid_api_key","message":"Invalid API key"}}"#)
        .await;

    let response = ctx
        .client
        .post(
            "/api/voice/generate",
            &json!({ "text": "hello", "voice": "English Male" }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_GATEWAY)
        .assert_error_message("Invalid API key");
    let raw = String::from_utf8_lossy(&response.body_bytes);
    assert!(!raw.contains(TEST_API_KEY));
}
