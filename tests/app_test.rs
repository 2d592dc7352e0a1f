use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tempfile::TempDir;
use text_analyzer::app::{App, Focus, JobOutcome, Overlay, Worker};
use text_analyzer::config::{AppConfig, ThemeKind};
use text_analyzer::event::Event;
use text_analyzer::store::{ListKind, Store};
use tokio::sync::mpsc;

fn setup() -> (TempDir, Arc<Store>, App, mpsc::UnboundedReceiver<JobOutcome>) {
    setup_with(AppConfig::default())
}

fn setup_with(config: AppConfig) -> (TempDir, Arc<Store>, App, mpsc::UnboundedReceiver<JobOutcome>) {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(Store::open(dir.path(), config.list_capacity));
    let (tx, rx) = mpsc::unbounded_channel();
    let app = App::new(&config, Worker::new(Arc::clone(&store), tx)).without_saving_settings();
    (dir, store, app, rx)
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_event(key(KeyCode::Char(c)));
    }
}

#[tokio::test]
async fn test_enter_analyses_and_records_history() {
    let (_dir, store, mut app, mut rx) = setup();

    type_text(&mut app, "Hello World!");
    app.handle_event(key(KeyCode::Enter));
    assert!(app.processing);

    let outcome = rx.recv().await.unwrap();
    app.apply_outcome(outcome);

    let result = app.result.as_ref().unwrap();
    assert_eq!(result.upper, "HELLO WORLD!");
    assert_eq!(result.sentence_count, 1);
    assert!(!app.processing);
    assert_eq!(app.status, "Text processed successfully");
    assert_eq!(app.history, vec!["Hello World!"]);
    assert_eq!(store.get(ListKind::History), vec!["Hello World!"]);
    // The input is kept for further edits
    assert_eq!(app.input, "Hello World!");
}

#[tokio::test]
async fn test_empty_input_shows_error() {
    let (_dir, store, mut app, _rx) = setup();

    app.handle_event(key(KeyCode::Enter));
    assert!(matches!(app.overlay, Overlay::Message { ref title, .. } if title == "Input Error"));
    assert!(!app.processing);
    assert!(store.get(ListKind::History).is_empty());

    app.handle_event(key(KeyCode::Esc));
    assert_eq!(app.overlay, Overlay::None);
}

#[tokio::test]
async fn test_favorite_twice_reports_already_present() {
    let (_dir, store, mut app, mut rx) = setup();
    type_text(&mut app, "  keep me  ");

    app.handle_event(ctrl('f'));
    app.apply_outcome(rx.recv().await.unwrap());
    assert_eq!(app.status, "Added to favorites");
    assert_eq!(app.favorites, vec!["keep me"]);

    app.handle_event(ctrl('f'));
    app.apply_outcome(rx.recv().await.unwrap());
    assert_eq!(app.status, "Already in favorites");
    assert_eq!(store.get(ListKind::Favorites), vec!["keep me"]);
}

#[tokio::test]
async fn test_clear_list_requires_confirmation() {
    let (_dir, store, mut app, _rx) = setup();
    store.add(ListKind::History, "old query").unwrap();
    app.reload(ListKind::History);

    app.handle_event(key(KeyCode::Tab));
    assert_eq!(app.focus, Focus::History);

    app.handle_event(ctrl('x'));
    assert_eq!(app.overlay, Overlay::Confirm(ListKind::History));
    app.handle_event(key(KeyCode::Char('n')));
    assert_eq!(store.get(ListKind::History), vec!["old query"]);

    app.handle_event(ctrl('x'));
    app.handle_event(key(KeyCode::Char('y')));
    assert!(store.get(ListKind::History).is_empty());
    assert!(app.history.is_empty());
    assert_eq!(app.status, "History cleared");
}

#[tokio::test]
async fn test_selecting_entry_loads_it_into_input() {
    let (_dir, store, mut app, _rx) = setup();
    store.add(ListKind::Favorites, "first").unwrap();
    store.add(ListKind::Favorites, "second").unwrap();
    app.reload(ListKind::Favorites);

    app.handle_event(key(KeyCode::Tab));
    app.handle_event(key(KeyCode::Tab));
    assert_eq!(app.focus, Focus::Favorites);

    app.handle_event(key(KeyCode::Down));
    app.handle_event(key(KeyCode::Enter));
    assert_eq!(app.input, "first");
    assert_eq!(app.cursor_position, "first".len());
    assert_eq!(app.focus, Focus::Input);
}

#[tokio::test]
async fn test_slash_commands() {
    let (_dir, _store, mut app, _rx) = setup();

    type_text(&mut app, "/help lists");
    app.handle_event(key(KeyCode::Enter));
    assert!(app.input.is_empty());
    assert!(matches!(app.overlay, Overlay::Message { ref title, .. } if title == "Help"));
    app.handle_event(key(KeyCode::Esc));

    type_text(&mut app, "/refresh on");
    app.handle_event(key(KeyCode::Enter));
    assert!(app.auto_refresh);

    type_text(&mut app, "/bogus");
    app.handle_event(key(KeyCode::Enter));
    assert!(app.status.contains("Unknown command 'bogus'"));

    type_text(&mut app, "/clear-favorites");
    app.handle_event(key(KeyCode::Enter));
    assert_eq!(app.overlay, Overlay::Confirm(ListKind::Favorites));
}

#[tokio::test]
async fn test_escaped_slash_is_analysed() {
    let (_dir, _store, mut app, mut rx) = setup();

    type_text(&mut app, "//usr/bin");
    app.handle_event(key(KeyCode::Enter));
    app.apply_outcome(rx.recv().await.unwrap());
    assert_eq!(app.result.as_ref().unwrap().original, "/usr/bin");
}

#[tokio::test]
async fn test_cursor_editing_handles_multibyte_text() {
    let (_dir, _store, mut app, _rx) = setup();

    type_text(&mut app, "héllo");
    app.handle_event(key(KeyCode::Left));
    app.handle_event(key(KeyCode::Left));
    app.handle_event(key(KeyCode::Left));
    app.handle_event(key(KeyCode::Backspace));
    assert_eq!(app.input, "hllo");

    app.handle_event(key(KeyCode::Char('e')));
    app.handle_event(key(KeyCode::End));
    app.handle_event(Event::Paste(" big\nworld".to_string()));
    assert_eq!(app.input, "hello big world");
}

#[tokio::test]
async fn test_ping_without_text_shows_error() {
    let (_dir, _store, mut app, _rx) = setup();

    app.handle_event(ctrl('p'));
    assert!(matches!(app.overlay, Overlay::Message { ref title, .. } if title == "Input Error"));
    assert_eq!(app.ping_display, "Ping: N/A");
}

#[tokio::test]
async fn test_clear_output() {
    let (_dir, _store, mut app, mut rx) = setup();

    type_text(&mut app, "abc");
    app.handle_event(key(KeyCode::Enter));
    app.apply_outcome(rx.recv().await.unwrap());
    assert!(app.result.is_some());

    app.handle_event(ctrl('l'));
    assert!(app.result.is_none());
    assert_eq!(app.status, "Output cleared");
}

#[tokio::test]
async fn test_theme_toggle() {
    let (_dir, _store, mut app, _rx) = setup();
    assert_eq!(app.theme, ThemeKind::Light);

    app.handle_event(ctrl('t'));
    assert_eq!(app.theme, ThemeKind::Dark);
    assert_eq!(app.status, "Dark theme enabled");

    app.handle_event(ctrl('t'));
    assert_eq!(app.theme, ThemeKind::Light);
    assert_eq!(app.status, "Light theme enabled");

    type_text(&mut app, "/theme DARK");
    app.handle_event(key(KeyCode::Enter));
    assert_eq!(app.theme, ThemeKind::Dark);
}

#[tokio::test]
async fn test_auto_refresh_reanalyses_input() {
    let config = AppConfig {
        auto_refresh_secs: 1,
        ..AppConfig::default()
    };
    let (_dir, _store, mut app, mut rx) = setup_with(config);
    let wait = || tokio::time::sleep(Duration::from_millis(1100));

    type_text(&mut app, "hello");
    app.handle_event(ctrl('r'));
    assert!(app.auto_refresh);

    // Not due yet
    app.handle_event(Event::Tick);
    assert!(!app.processing);

    wait().await;
    app.handle_event(Event::Tick);
    assert!(app.processing);
    app.apply_outcome(rx.recv().await.unwrap());
    assert_eq!(app.result.as_ref().unwrap().original, "hello");

    // Skipped while a job is still running
    app.processing = true;
    app.set_status("busy");
    wait().await;
    app.handle_event(Event::Tick);
    assert_eq!(app.status, "busy");
    app.processing = false;

    // Commands and empty input are never refreshed
    app.handle_event(key(KeyCode::Esc));
    type_text(&mut app, "/help");
    app.set_status("idle");
    wait().await;
    app.handle_event(Event::Tick);
    assert!(!app.processing);
    assert_eq!(app.status, "idle");
    assert_eq!(app.overlay, Overlay::None);

    app.handle_event(key(KeyCode::Esc));
    wait().await;
    app.handle_event(Event::Tick);
    assert!(!app.processing);
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_favorite_needs_input_text() {
    let (_dir, store, mut app, mut rx) = setup();

    type_text(&mut app, "analysed");
    app.handle_event(key(KeyCode::Enter));
    app.apply_outcome(rx.recv().await.unwrap());
    app.handle_event(key(KeyCode::Esc));

    // The last result is not reused once the input is cleared
    app.handle_event(ctrl('f'));
    assert!(matches!(
        app.overlay,
        Overlay::Message { ref body, .. } if body == "Enter text to add as favorite."
    ));
    assert!(store.get(ListKind::Favorites).is_empty());
}
