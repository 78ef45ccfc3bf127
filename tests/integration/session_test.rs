//! Connection lifecycle and UI availability transitions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use myq::config::ConnectionConfig;
use myq::connection::ConnectionManager;
use myq::db::MockDatabaseClient;
use myq::tui::app::{Action, App, DialogSeverity};
use myq::tui::Event;

fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

#[test]
fn connect_and_disconnect_toggle_control_availability() {
    let mut app = App::new(&ConnectionConfig::default());
    assert!(app.can_connect());
    assert!(!app.can_disconnect());
    assert!(!app.can_execute());

    app.apply_connect_success("localhost:3306".to_string());
    assert!(!app.can_connect());
    assert!(app.can_disconnect());
    assert!(app.can_execute());

    app.apply_disconnect();
    assert!(app.can_connect());
    assert!(!app.can_disconnect());
    assert!(!app.can_execute());
}

#[test]
fn execute_shortcut_while_disconnected_is_a_usage_warning() {
    let mut app = App::new(&ConnectionConfig::default());

    let action = app.handle_event(ctrl('e'));

    assert_eq!(action, Action::None);
    let dialog = app.dialog.as_ref().expect("warning dialog");
    assert_eq!(dialog.severity, DialogSeverity::Warning);
}

#[tokio::test]
async fn manager_holds_at_most_one_session() {
    let mut manager = ConnectionManager::with_client(
        Box::new(MockDatabaseClient::new()),
        "first @ localhost:3306",
    );
    assert!(manager.is_connected());
    assert_eq!(manager.info(), Some("first @ localhost:3306"));

    manager.disconnect().await;
    assert!(!manager.is_connected());
    assert!(manager.db().is_none());

    // Disconnecting again is a no-op.
    manager.disconnect().await;
    assert!(!manager.is_connected());
}

#[tokio::test]
async fn failed_connect_leaves_manager_disconnected() {
    let mut manager = ConnectionManager::new();
    let config = ConnectionConfig {
        host: "nonexistent.invalid.host".to_string(),
        ..ConnectionConfig::default()
    };

    assert!(manager.connect(&config).await.is_err());
    assert!(!manager.is_connected());
    assert!(manager.info().is_none());
}
