//! Key handling

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

/// Feeds a terminal event into the application state
pub fn handle_event(app: &mut App, event: Event) {
  if let Event::Key(key) = event {
    handle_key(app, key);
  }
}

fn handle_key(app: &mut App, key: KeyEvent) {
  // The alert is blocking: nothing else reacts until it is dismissed
  if app.alert.is_some() {
    if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
      app.dismiss_alert();
    }
    return;
  }

  match (key.code, key.modifiers) {
    (KeyCode::Esc, _) => {
      app.should_quit = true;
    }
    (KeyCode::Enter, KeyModifiers::NONE) => {
      app.submit();
    }
    (KeyCode::Tab | KeyCode::BackTab, _) | (KeyCode::Down | KeyCode::Up, KeyModifiers::NONE) => {
      app.focus_next();
    }
    (KeyCode::Backspace, _) => {
      app.input_backspace();
    }
    (KeyCode::Delete, _) => {
      app.input_delete();
    }
    (KeyCode::Left, _) => {
      app.input_left();
    }
    (KeyCode::Right, _) => {
      app.input_right();
    }
    (KeyCode::Home, _) => {
      app.input_home();
    }
    (KeyCode::End, _) => {
      app.input_end();
    }
    (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
      app.input_char(c);
    }
    _ => {}
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::client::ApiClient;

  fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
  }

  fn test_app() -> App {
    App::new(ApiClient::new("http://127.0.0.1:0/api"))
  }

  #[test]
  fn typing_fills_focused_field() {
    let mut app = test_app();

    handle_event(&mut app, key(KeyCode::Char('h')));
    handle_event(&mut app, key(KeyCode::Char('i')));
    assert_eq!(app.name_input, "hi");

    handle_event(&mut app, key(KeyCode::Tab));
    handle_event(&mut app, key(KeyCode::Char('d')));
    assert_eq!(app.description_input, "d");
  }

  #[test]
  fn esc_quits() {
    let mut app = test_app();

    handle_event(&mut app, key(KeyCode::Esc));
    assert!(app.should_quit);
  }

  #[test]
  fn alert_blocks_all_other_input() {
    let mut app = test_app();

    // Empty submit raises the alert
    handle_event(&mut app, key(KeyCode::Enter));
    assert!(app.alert.is_some());

    // Typing and quitting are swallowed while the alert is up
    handle_event(&mut app, key(KeyCode::Char('x')));
    assert_eq!(app.name_input, "");
    handle_event(&mut app, key(KeyCode::Esc));
    assert!(app.alert.is_none());
    assert!(!app.should_quit);
  }

  #[test]
  fn non_key_events_are_ignored() {
    let mut app = test_app();
    handle_event(&mut app, Event::FocusGained);
    assert_eq!(app.name_input, "");
  }
}
