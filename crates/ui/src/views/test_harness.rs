use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use mindscale_core::Clock;
use mindscale_core::time::fixed_now;
use services::{Evaluator, SessionController};

use crate::context::{UiApp, build_app_context};
use crate::views::test::TestViewHandles;
use crate::views::{HomeView, TestView};
use crate::vm::TestIntent;

#[derive(Clone)]
struct TestApp {
    controller: Arc<SessionController>,
}

impl UiApp for TestApp {
    fn session_controller(&self) -> Arc<SessionController> {
        Arc::clone(&self.controller)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Test,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    test_handles: Option<TestViewHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    if let Some(handles) = props.test_handles.clone() {
        use_context_provider(|| handles);
    }
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
        ViewKind::Test => rsx! { TestView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub test_handles: Option<TestViewHandles>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Dispatches a test-view intent and settles the DOM.
    pub fn dispatch(&mut self, intent: TestIntent) {
        let handles = self
            .test_handles
            .clone()
            .expect("test harness built with ViewKind::Test");
        self.dom.in_runtime(|| handles.dispatch().call(intent));
        drive_dom(&mut self.dom);
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
    let controller = Arc::new(SessionController::standard(
        Clock::fixed(fixed_now()),
        Evaluator::seeded(99),
    ));
    let app = Arc::new(TestApp { controller });

    let test_handles = match view {
        ViewKind::Test => Some(TestViewHandles::default()),
        ViewKind::Home => None,
    };

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            test_handles: test_handles.clone(),
        },
    );

    ViewHarness { dom, test_handles }
}
