use super::test_harness::{ViewKind, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_login_and_registration() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Register Now"), "missing register button in {html}");
    assert!(html.contains("University Email"), "missing email label in {html}");
    assert!(!html.contains("Welcome back"), "unexpected welcome in {html}");
    assert!(harness.opener.opened.lock().unwrap().is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn team_view_smoke_warns_then_lists_members() {
    let mut harness = setup_view_harness(ViewKind::Team);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("Please login first in the Home tab"),
        "missing login warning in {html}"
    );

    let mut harness = setup_view_harness(ViewKind::Team);
    harness
        .services
        .login()
        .login(harness.token, "layla.mahmoud@uni.edu")
        .await
        .expect("login");
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Your Study Squad - G001"), "missing heading in {html}");
    assert!(html.contains("Omar Khalil"), "missing member in {html}");
    assert!(
        html.contains("Layla Mahmoud <strong>(You)</strong>"),
        "missing self marker in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn challenges_view_smoke_shows_placeholder() {
    let mut harness = setup_view_harness(ViewKind::Challenges);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Load Challenges"), "missing button in {html}");
    assert!(
        html.contains("Click the button above to load your challenges"),
        "missing placeholder in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn hints_view_smoke_offers_levels() {
    let mut harness = setup_view_harness(ViewKind::Hints);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("1 - Gentle nudge"), "missing level in {html}");
    assert!(html.contains("3 - Almost there"), "missing level in {html}");
    assert!(html.contains("Get Hint"), "missing button in {html}");
    assert!(
        html.contains("stuck—from gentle nudges"),
        "missing intro in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn chat_view_smoke_starts_empty() {
    let mut harness = setup_view_harness(ViewKind::Chat);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Demo mode - responses are simulated"), "{html}");
    assert!(!html.contains("bubble--user"), "unexpected bubble in {html}");
}
