//! Integration tests for the settings command surface.

use lumen_app::commands;
use lumen_domain::{Region, Theme, Widget};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod support;
use support::TestHarness;

async fn mount_ok(server: &MockServer, endpoint: &str) {
    Mock::given(method("POST"))
        .and(path(endpoint))
        .respond_with(ResponseTemplate::new(200))
        .mount(server)
        .await;
}

#[tokio::test]
async fn display_edits_are_uploaded_as_configured() {
    let harness = TestHarness::start().await;

    commands::set_widget(&harness.context, Region::Left, Widget::Music).unwrap();
    commands::set_widget(&harness.context, Region::Center, Widget::Weather).unwrap();
    commands::set_theme(&harness.context, Theme::Dark).unwrap();
    commands::set_accent_color(&harness.context, "#101010".to_string()).unwrap();
    commands::set_characters_per_second(&harness.context, 3).unwrap();

    Mock::given(method("POST"))
        .and(path("/dashboard/config"))
        .and(body_json(serde_json::json!({
            "leftWidget": "Music",
            "centerWidget": "Weather",
            "rightWidget": "None",
            "theme": "dark",
            "orientation": "horizontal",
            "accentColor": "#101010",
            "charactersPerSecond": 3
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&harness.server)
        .await;

    assert!(commands::upload_display_config(&harness.context).await);
}

#[tokio::test]
async fn characters_per_second_is_clamped_at_the_command_boundary() {
    let harness = TestHarness::start().await;

    commands::set_characters_per_second(&harness.context, 0).unwrap();
    assert_eq!(commands::current_state(&harness.context).display.characters_per_second, 1);

    commands::set_characters_per_second(&harness.context, 42).unwrap();
    assert_eq!(commands::current_state(&harness.context).display.characters_per_second, 10);
}

#[tokio::test]
async fn incomplete_brokerage_credentials_make_no_network_call() {
    let harness = TestHarness::start().await;
    mount_ok(&harness.server, "/xtb/credentials").await;

    commands::set_brokerage_email(&harness.context, "user@example.com".to_string()).unwrap();
    assert!(!commands::save_brokerage_credentials(&harness.context).await);

    assert_eq!(harness.requests_to("/xtb/credentials").await, 0);
}

#[tokio::test]
async fn complete_brokerage_credentials_are_submitted() {
    let harness = TestHarness::start().await;

    Mock::given(method("POST"))
        .and(path("/xtb/credentials"))
        .and(body_json(serde_json::json!({
            "email": "user@example.com",
            "password": "hunter2"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&harness.server)
        .await;

    commands::set_brokerage_email(&harness.context, "user@example.com".to_string()).unwrap();
    commands::set_brokerage_password(&harness.context, "hunter2".to_string()).unwrap();
    assert!(commands::save_brokerage_credentials(&harness.context).await);
}

#[tokio::test]
async fn duplicate_callback_urls_are_rejected_at_save_time() {
    let harness = TestHarness::start().await;
    harness.configure_music_integration();

    let result = commands::save_oauth_client(
        &harness.context,
        "deezer",
        lumen_domain::OAuthClientConfig {
            callback_url: support::CALLBACK_URL.to_string(),
            ..Default::default()
        },
    );

    assert!(result.is_err());
    assert!(!commands::current_state(&harness.context).integrations.contains_key("deezer"));
}

#[tokio::test]
async fn rejected_upload_reports_failure() {
    let harness = TestHarness::start().await;

    Mock::given(method("POST"))
        .and(path("/dashboard/config"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&harness.server)
        .await;

    assert!(!commands::upload_display_config(&harness.context).await);
}
