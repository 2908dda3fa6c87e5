use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use services::{AppServices, Clock, Links, SessionStore, views};
use sheets::{
    ChallengeRecord, ChallengeSource, GroupRecord, InMemorySheets, SourceError, Sources,
    StudentRecord,
};
use synchrony_core::fallback::{fallback_challenges, fallback_team};
use synchrony_core::model::{GroupId, Session, SessionId, SessionPhase, SessionToken, Transcript};
use synchrony_core::time::{fixed_clock, fixed_now};

fn seeded_sheets() -> InMemorySheets {
    let sheets = InMemorySheets::new();
    sheets
        .add_student(StudentRecord::new(
            "Sara.Ali@uni.edu",
            Some("Sara Ali"),
            Some("G042"),
        ))
        .unwrap();
    sheets
        .add_group(GroupRecord::new(
            "G042",
            "Sara Ali, Yousef Nasser",
            "Graphs, Heaps",
        ))
        .unwrap();
    sheets
        .add_challenge(ChallengeRecord {
            session_id: "S20231114221320".into(),
            challenge_number: Some("1".into()),
            description: Some("Detect a cycle in a directed graph.".into()),
            topics_involved: Some("Graphs".into()),
            hints_json: Some(r#"["Think DFS.", "Track the recursion stack."]"#.into()),
        })
        .unwrap();
    sheets
}

fn sheet_backed(sheets: InMemorySheets) -> AppServices {
    AppServices::new(
        fixed_clock(),
        Sources::from_sheets(sheets),
        Links::default(),
        Some(11),
    )
}

#[tokio::test]
async fn full_session_against_sheet_data() {
    let services = sheet_backed(seeded_sheets());
    let token = SessionToken::new();

    let welcome = views::home(&services, token, "  sara.ali@UNI.edu ").await;
    assert!(welcome.contains("Welcome back, Sara Ali!"), "{welcome}");
    assert!(welcome.contains("**Your Team (G042):** Sara Ali, Yousef Nasser"));
    assert_eq!(services.sessions().phase(token), SessionPhase::LoggedIn);

    let team = views::team(&services, token);
    assert!(team.contains("### 🎓 Sara Ali **(You)**"));
    assert!(team.contains("**Focus Area:** Heaps"));

    let challenges = views::challenges(&services, token).await;
    assert!(challenges.contains("Here are your 1 collaborative challenges!"));
    assert!(challenges.contains("Detect a cycle in a directed graph."));
    assert_eq!(
        services.sessions().phase(token),
        SessionPhase::ChallengesLoaded
    );

    let hint = views::hints(&services, token, "1", "2 - Clearer guidance");
    assert!(hint.contains("Track the recursion stack."));
    let hint = views::hints(&services, token, "1", "3 - Almost there");
    assert_eq!(hint, "⚠️ Only 2 hints available");

    let mut transcript = Transcript::new();
    assert!(views::chat(&services, token, &mut transcript, "hello team"));
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript.turns()[0].content, "**Sara Ali:** hello team");
    assert!(!views::chat(&services, token, &mut transcript, "   "));
    assert_eq!(transcript.len(), 2);
}

#[tokio::test]
async fn invalid_email_leaves_session_unchanged() {
    let services = AppServices::offline(fixed_clock());
    let token = SessionToken::new();

    assert_eq!(
        views::home(&services, token, "not-an-email").await,
        "❌ Please enter a valid email address"
    );
    assert_eq!(
        views::home(&services, token, "   ").await,
        "❌ Please enter a valid email address"
    );
    assert_eq!(services.sessions().phase(token), SessionPhase::LoggedOut);

    views::home(&services, token, "jane.doe@uni.edu").await;
    let before = services.sessions().get(token).unwrap();
    views::home(&services, token, "broken").await;
    assert_eq!(services.sessions().get(token).unwrap(), before);
}

#[tokio::test]
async fn any_valid_email_gets_a_team_and_time_based_session_id() {
    let services = AppServices::offline(fixed_clock());
    let token = SessionToken::new();
    let outcome = services
        .login()
        .login(token, "nobody@nowhere.org")
        .await
        .unwrap();

    assert!(outcome.session.team().len() >= 3);
    assert_eq!(
        outcome.session.session_id().as_str(),
        fixed_now().format("S%Y%m%d%H%M%S").to_string()
    );
}

#[tokio::test]
async fn actions_before_login_only_warn() {
    let services = AppServices::offline(fixed_clock());
    let token = SessionToken::new();

    assert_eq!(
        views::team(&services, token),
        "⚠️ Please login first in the Home tab"
    );
    assert_eq!(
        views::challenges(&services, token).await,
        "⚠️ No active session. Please login first in the Home tab"
    );
    assert!(services.sessions().get(token).is_none());
    assert_eq!(
        views::hints(&services, token, "1", "1 - Gentle nudge"),
        "⚠️ No active session. Please login first"
    );

    views::home(&services, token, "jane.doe@uni.edu").await;
    assert_eq!(
        views::hints(&services, token, "1", "1 - Gentle nudge"),
        "⚠️ Please load challenges first in the Challenges tab"
    );
}

#[tokio::test]
async fn relogin_drops_loaded_challenges() {
    let services = AppServices::offline(fixed_clock());
    let token = SessionToken::new();

    views::home(&services, token, "jane.doe@uni.edu").await;
    views::challenges(&services, token).await;
    assert_eq!(
        services.sessions().phase(token),
        SessionPhase::ChallengesLoaded
    );

    views::home(&services, token, "omar@uni.edu").await;
    assert_eq!(services.sessions().phase(token), SessionPhase::LoggedIn);
}

#[tokio::test]
async fn connections_do_not_share_sessions() {
    let services = sheet_backed(seeded_sheets());
    let sara = SessionToken::new();
    let guest = SessionToken::new();

    views::home(&services, sara, "sara.ali@uni.edu").await;
    views::home(&services, guest, "jane.doe@uni.edu").await;

    assert_eq!(services.sessions().get(sara).unwrap().name(), "Sara Ali");
    assert_eq!(services.sessions().get(guest).unwrap().name(), "Jane Doe");
    assert!(views::team(&services, guest).contains("Omar Khalil"));
}

/// Challenge sheet that lets the student log in again while the fetch is in
/// flight.
struct ReloginDuringFetch {
    store: Arc<OnceLock<SessionStore>>,
    token: SessionToken,
    fired: AtomicBool,
}

#[async_trait]
impl ChallengeSource for ReloginDuringFetch {
    async fn challenges_for_session(
        &self,
        _session_id: &SessionId,
    ) -> Result<Vec<ChallengeRecord>, SourceError> {
        let store = self.store.get().filter(|_| !self.fired.swap(true, Ordering::SeqCst));
        if let Some(store) = store {
            let newer = Session::start(
                "Omar Khalil",
                GroupId::new("G001"),
                fallback_team(),
                Clock::system().now(),
            );
            store.replace(self.token, newer);
        }
        Ok(Vec::new())
    }
}

#[tokio::test]
async fn challenges_fetched_for_a_replaced_session_are_discarded() {
    let token = SessionToken::new();
    let store = Arc::new(OnceLock::new());
    let mut sources = Sources::in_memory();
    sources.challenges = Arc::new(ReloginDuringFetch {
        store: Arc::clone(&store),
        token,
        fired: AtomicBool::new(false),
    });
    let services = AppServices::new(fixed_clock(), sources, Links::default(), Some(4));
    assert!(store.set(services.sessions().clone()).is_ok());

    views::home(&services, token, "jane.doe@uni.edu").await;
    let shown = views::challenges(&services, token).await;

    assert_eq!(
        shown,
        "⚠️ You logged in again while challenges were loading. Please load them again"
    );
    let session = services.sessions().get(token).unwrap();
    assert_eq!(session.name(), "Omar Khalil");
    assert_eq!(services.sessions().phase(token), SessionPhase::LoggedIn);

    let reloaded = services.challenges().load(token).await.unwrap();
    assert_eq!(reloaded.value, fallback_challenges());
}
