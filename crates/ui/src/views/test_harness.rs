use std::sync::{Arc, Mutex};

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::render::{CHALLENGES_PLACEHOLDER, HINT_PLACEHOLDER};
use services::{AppServices, Links};
use sheets::Sources;
use synchrony_core::model::SessionToken;
use synchrony_core::time::fixed_clock;

use crate::context::{AppContext, UiApp, build_app_context};
use crate::platform::{LinkOpenerRef, UiLinkOpener};
use crate::views::{ChallengesView, ChatView, HintsView, HomeView, StudyPanels, TeamView};

/// Records opened URLs instead of launching a browser.
#[derive(Default)]
pub struct RecordingOpener {
    pub opened: Mutex<Vec<String>>,
}

impl UiLinkOpener for RecordingOpener {
    fn open_url(&self, url: &str) {
        if let Ok(mut opened) = self.opened.lock() {
            opened.push(url.to_string());
        }
    }
}

struct TestApp {
    services: AppServices,
    opener: Arc<RecordingOpener>,
}

impl UiApp for TestApp {
    fn services(&self) -> AppServices {
        self.services.clone()
    }

    fn link_opener(&self) -> LinkOpenerRef {
        self.opener.clone()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Team,
    Challenges,
    Hints,
    Chat,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    context: AppContext,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    use_context_provider(|| props.context.clone());
    use_context_provider(|| props.view);
    use_context_provider(|| StudyPanels::new(CHALLENGES_PLACEHOLDER, HINT_PLACEHOLDER));
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Team => rsx! { TeamView {} },
        ViewKind::Challenges => rsx! { ChallengesView {} },
        ViewKind::Hints => rsx! { HintsView {} },
        ViewKind::Chat => rsx! { ChatView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub services: AppServices,
    pub token: SessionToken,
    pub opener: Arc<RecordingOpener>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let services = AppServices::new(
        fixed_clock(),
        Sources::in_memory(),
        Links::default(),
        Some(3),
    );
    let opener = Arc::new(RecordingOpener::default());
    let app: Arc<dyn UiApp> = Arc::new(TestApp {
        services: services.clone(),
        opener: Arc::clone(&opener),
    });
    let context = build_app_context(&app);
    let token = context.token();

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { context, view });

    ViewHarness {
        dom,
        services,
        token,
        opener,
    }
}
