//! UI automation tests using egui_kittest and AccessKit
//!
//! These tests verify the UI behavior by simulating user interactions
//! and checking the accessibility tree for expected elements.

use async_trait::async_trait;
use genai::config::AppConfig;
use genai::llm::GenerativeService;
use genai::request::RequestController;
use genai::ui::{AppState, GenAiApp, OutputPanel, OutputView, PromptBar, Theme};
use genai::{GenAiError, FAILED_MESSAGE};
use egui_kittest::kittest::Queryable;
use egui_kittest::Harness;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Prompt bar and output box without a worker behind them
struct TestApp {
    prompt: String,
    submissions: Vec<String>,
    view: TestView,
    theme: Theme,
}

/// Owned counterpart of `OutputView`
enum TestView {
    Loading,
    Error(String),
    Output(String),
    Placeholder(String),
}

impl TestApp {
    fn new() -> Self {
        Self {
            prompt: String::new(),
            submissions: Vec::new(),
            view: TestView::Placeholder("Your output will appear here.".to_string()),
            theme: Theme::dark(),
        }
    }

    fn with_view(mut self, view: TestView) -> Self {
        self.view = view;
        self
    }
}

/// Render the prompt UI for testing
fn render_prompt_ui(app: &mut TestApp, ui: &mut egui::Ui) {
    if PromptBar::new(&mut app.prompt, &app.theme).show(ui) {
        app.submissions.push(app.prompt.clone());
    }

    let view = match &app.view {
        TestView::Loading => OutputView::Loading,
        TestView::Error(message) => OutputView::Error(message),
        TestView::Output(text) => OutputView::Output(text),
        TestView::Placeholder(line) => OutputView::Placeholder(line),
    };
    OutputPanel::new(view, &app.theme).show(ui);
}

fn prompt_harness(app: TestApp) -> Harness<'static, TestApp> {
    Harness::builder()
        .with_size(egui::Vec2::new(600.0, 500.0))
        .build_state(
            |ctx, app: &mut TestApp| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    render_prompt_ui(app, ui);
                });
            },
            app,
        )
}

/// Test that the prompt input field exists and is accessible
#[test]
fn test_prompt_input_exists() {
    let mut harness = prompt_harness(TestApp::new());
    harness.run();

    // Find the prompt input by its accessibility label - if found, test passes
    let _input = harness.get_by_label("Prompt input");
}

/// Test that the submit button exists and is accessible
#[test]
fn test_submit_button_exists() {
    let mut harness = prompt_harness(TestApp::new());
    harness.run();

    let _button = harness.get_by_label("Submit prompt");
}

/// Test that typing text into the input field works
#[test]
fn test_type_text_into_prompt() {
    let mut harness = prompt_harness(TestApp::new());
    harness.run();

    harness.get_by_label("Prompt input").focus();
    harness.run();

    harness.get_by_label("Prompt input").type_text("Explain Rust lifetimes");
    harness.run();

    assert_eq!(harness.state().prompt, "Explain Rust lifetimes");
}

/// Test that clicking submit sends the prompt and keeps the input
#[test]
fn test_submit_sends_prompt() {
    let mut harness = prompt_harness(TestApp::new());
    harness.run();

    harness.get_by_label("Prompt input").focus();
    harness.run();
    harness.get_by_label("Prompt input").type_text("hi");
    harness.run();

    harness.get_by_label("Submit prompt").click();
    harness.run();

    assert_eq!(harness.state().submissions, vec!["hi".to_string()]);
    assert_eq!(harness.state().prompt, "hi", "Input should be kept");
}

/// Test that an empty prompt is submitted as-is
#[test]
fn test_empty_prompt_is_submitted() {
    let mut harness = prompt_harness(TestApp::new());
    harness.run();

    harness.get_by_label("Submit prompt").click();
    harness.run();

    assert_eq!(harness.state().submissions, vec![String::new()]);
}

/// Test that the revealed response is accessible
#[test]
fn test_output_view_accessible() {
    let app = TestApp::new().with_view(TestView::Output("Hello world".to_string()));
    let mut harness = prompt_harness(app);
    harness.run();

    let _output = harness.get_by_label("Response output: Hello world");
}

/// Test that the error banner is accessible
#[test]
fn test_error_view_accessible() {
    let app = TestApp::new().with_view(TestView::Error(FAILED_MESSAGE.to_string()));
    let mut harness = prompt_harness(app);
    harness.run();

    let _error = harness.get_by_label(&format!("Error message: {}", FAILED_MESSAGE));
}

/// Test that the placeholder is shown before any output
#[test]
fn test_placeholder_view_accessible() {
    let mut harness = prompt_harness(TestApp::new());
    harness.run();

    let _placeholder = harness.get_by_label("Placeholder: Your output will appear here.");
}

/// Test that the loading skeleton is accessible
#[test]
fn test_loading_view_accessible() {
    let app = TestApp::new().with_view(TestView::Loading);
    let mut harness = prompt_harness(app);

    // The skeleton keeps requesting frames; a single step is enough
    harness.step();

    let _loading = harness.get_by_label("Loading response");
}

/// Service answering every prompt with an echo
struct EchoService;

#[async_trait]
impl GenerativeService for EchoService {
    async fn generate(&self, prompt: &str) -> genai::Result<String> {
        if prompt == "fail" {
            return Err(GenAiError::NetworkFailure("HTTP 500".to_string()));
        }
        Ok(format!("echo: {}", prompt))
    }
}

fn app_harness() -> Harness<'static, GenAiApp> {
    let controller = RequestController::start(Arc::new(EchoService)).unwrap();
    let state = AppState::new(controller, &AppConfig::default());
    let app = GenAiApp::from_parts(state, Theme::dark());

    Harness::builder()
        .with_size(egui::Vec2::new(900.0, 720.0))
        .build_state(|ctx, app: &mut GenAiApp| app.ui(ctx), app)
}

/// Step frames until `done` holds, failing after a few seconds
fn step_until(harness: &mut Harness<'_, GenAiApp>, done: impl Fn(&GenAiApp) -> bool) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while !done(harness.state()) {
        assert!(Instant::now() < deadline, "UI did not settle in time");
        harness.step();
        std::thread::sleep(Duration::from_millis(10));
    }
    harness.step();
}

fn submit_prompt(harness: &mut Harness<'_, GenAiApp>, prompt: &str) {
    harness.get_by_label("Prompt input").focus();
    harness.step();
    harness.get_by_label("Prompt input").type_text(prompt);
    harness.step();
    harness.get_by_label("Submit prompt").click();
    harness.step();
}

/// Test that the welcome text is shown above the prompt
#[test]
fn test_welcome_text_shown() {
    let mut harness = app_harness();
    harness.step();

    let _heading = harness.get_by_label("Welcome to GenAI");
    let _subtitle =
        harness.get_by_label("A simple gen AI that can help you with your daily tasks.");
}

/// Test the complete flow: enter a prompt, submit, watch the reveal finish
#[test]
fn test_complete_prompt_flow() {
    let mut harness = app_harness();
    harness.step();

    submit_prompt(&mut harness, "hi");
    assert_eq!(harness.state().state().controller.generation(), 1);

    step_until(&mut harness, |app| {
        app.state().displayed_output() == "echo: hi"
    });

    let _output = harness.get_by_label("Response output: echo: hi");
    assert_eq!(
        harness.state().state().controller.input().as_str(),
        "hi",
        "Input should be kept after submission"
    );
}

/// Test that a failing request ends in the error banner
#[test]
fn test_failed_prompt_shows_error() {
    let mut harness = app_harness();
    harness.step();

    submit_prompt(&mut harness, "fail");

    step_until(&mut harness, |app| {
        matches!(app.state().output_view(), OutputView::Error(text) if text == FAILED_MESSAGE)
    });

    let _error = harness.get_by_label(&format!("Error message: {}", FAILED_MESSAGE));
}
