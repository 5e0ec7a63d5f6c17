//! Application state for the terminal client
//!
//! Rendering is a pure function of this state; requests run on spawned
//! tasks and deliver their results through oneshot channels that the event
//! loop polls between frames.

use std::sync::Arc;

use tokio::sync::oneshot;

use tana::Item;

use crate::client::{ApiClient, HealthResponse};
use crate::error::ClientError;

/// Status line shown when the health check fails
const STATUS_UNREACHABLE: &str = "Backend unreachable";

/// Error banner text for a failed list fetch
const ERR_FETCH_ITEMS: &str = "Failed to fetch items";

/// Error banner text for a failed create
const ERR_ADD_ITEM: &str = "Failed to add item";

/// Alert shown when submitting with an empty field
const ALERT_FILL_FIELDS: &str = "Please fill in both fields";

/// Which form field currently receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
  /// The name input
  Name,
  /// The description input
  Description,
}

/// Terminal application state
pub struct App {
  /// Items fetched from the backend, insertion order
  pub items: Vec<Item>,
  /// True until the initial item fetch completes (either way)
  pub loading: bool,
  /// Error banner text, if any
  pub error: Option<String>,
  /// Backend status line; None until the health check answers
  pub backend_status: Option<String>,
  /// Draft name
  pub name_input: String,
  /// Draft description
  pub description_input: String,
  /// Focused form field
  pub focus: Focus,
  /// Byte cursor into the focused field
  pub cursor_pos: usize,
  /// Blocking alert popup; all other input is ignored until dismissed
  pub alert: Option<String>,
  /// Event loop exit flag
  pub should_quit: bool,

  client: Arc<ApiClient>,
  health_rx: Option<oneshot::Receiver<Result<HealthResponse, ClientError>>>,
  items_rx: Option<oneshot::Receiver<Result<Vec<Item>, ClientError>>>,
  create_rx: Option<oneshot::Receiver<Result<Item, ClientError>>>,
}

impl App {
  /// Creates the initial state
  ///
  /// The state starts in loading mode; call [`start`](Self::start) from
  /// within a runtime to fire the initial requests.
  #[must_use]
  pub fn new(client: ApiClient) -> Self {
    Self {
      items: Vec::new(),
      loading: true,
      error: None,
      backend_status: None,
      name_input: String::new(),
      description_input: String::new(),
      focus: Focus::Name,
      cursor_pos: 0,
      alert: None,
      should_quit: false,
      client: Arc::new(client),
      health_rx: None,
      items_rx: None,
      create_rx: None,
    }
  }

  /// Fires the two independent startup requests: health check and item
  /// list fetch
  pub fn start(&mut self) {
    let (tx, rx) = oneshot::channel();
    let client = Arc::clone(&self.client);
    tokio::spawn(async move {
      let result = client.health().await;
      let _ = tx.send(result);
    });
    self.health_rx = Some(rx);

    let (tx, rx) = oneshot::channel();
    let client = Arc::clone(&self.client);
    tokio::spawn(async move {
      let result = client.list_items().await;
      let _ = tx.send(result);
    });
    self.items_rx = Some(rx);
  }

  /// Submits the draft
  ///
  /// An empty field raises the blocking alert instead of sending anything.
  /// While a create is already in flight, further submits are ignored.
  pub fn submit(&mut self) {
    if self.name_input.is_empty() || self.description_input.is_empty() {
      self.alert = Some(ALERT_FILL_FIELDS.to_string());
      return;
    }

    if self.create_rx.is_some() {
      return;
    }

    let name = self.name_input.clone();
    let description = self.description_input.clone();

    let (tx, rx) = oneshot::channel();
    let client = Arc::clone(&self.client);
    tokio::spawn(async move {
      let result = client.create_item(name, description).await;
      let _ = tx.send(result);
    });
    self.create_rx = Some(rx);
  }

  /// Polls all in-flight requests and folds finished ones into the state
  pub fn poll(&mut self) {
    if let Some(ref mut rx) = self.health_rx {
      match rx.try_recv() {
        Ok(result) => {
          self.health_rx = None;
          self.apply_health_result(result);
        }
        Err(oneshot::error::TryRecvError::Empty) => {}
        Err(oneshot::error::TryRecvError::Closed) => {
          self.health_rx = None;
          self.apply_health_result(Err(ClientError::Api {
            status: 0,
            message: "request dropped".to_string(),
          }));
        }
      }
    }

    if let Some(ref mut rx) = self.items_rx {
      match rx.try_recv() {
        Ok(result) => {
          self.items_rx = None;
          self.apply_items_result(result);
        }
        Err(oneshot::error::TryRecvError::Empty) => {}
        Err(oneshot::error::TryRecvError::Closed) => {
          self.items_rx = None;
          self.apply_items_result(Err(ClientError::Api {
            status: 0,
            message: "request dropped".to_string(),
          }));
        }
      }
    }

    if let Some(ref mut rx) = self.create_rx {
      match rx.try_recv() {
        Ok(result) => {
          self.create_rx = None;
          self.apply_create_result(result);
        }
        Err(oneshot::error::TryRecvError::Empty) => {}
        Err(oneshot::error::TryRecvError::Closed) => {
          self.create_rx = None;
          self.apply_create_result(Err(ClientError::Api {
            status: 0,
            message: "request dropped".to_string(),
          }));
        }
      }
    }
  }

  /// Whether a create request is currently in flight
  #[must_use]
  pub fn create_in_flight(&self) -> bool {
    self.create_rx.is_some()
  }

  // ─── Result reducers (pure state transitions, unit tested) ───

  /// Health check outcome: store the server's message, or the fixed
  /// unreachable string on any failure
  pub fn apply_health_result(&mut self, result: Result<HealthResponse, ClientError>) {
    self.backend_status = Some(match result {
      Ok(health) => health.message,
      Err(err) => {
        tracing::debug!(error = %err, "health check failed");
        STATUS_UNREACHABLE.to_string()
      }
    });
  }

  /// Item list outcome: the loading flag clears regardless of success
  pub fn apply_items_result(&mut self, result: Result<Vec<Item>, ClientError>) {
    match result {
      Ok(items) => {
        self.items = items;
        self.error = None;
      }
      Err(err) => {
        tracing::debug!(error = %err, "item fetch failed");
        self.error = Some(ERR_FETCH_ITEMS.to_string());
      }
    }
    self.loading = false;
  }

  /// Create outcome: append the server-returned record and clear the
  /// draft; on failure keep the draft and show the error banner
  pub fn apply_create_result(&mut self, result: Result<Item, ClientError>) {
    match result {
      Ok(item) => {
        self.items.push(item);
        self.name_input.clear();
        self.description_input.clear();
        self.cursor_pos = 0;
        self.focus = Focus::Name;
        self.error = None;
      }
      Err(err) => {
        tracing::debug!(error = %err, "item create failed");
        self.error = Some(ERR_ADD_ITEM.to_string());
      }
    }
  }

  // ─── Alert ───

  /// Dismisses the blocking alert
  pub fn dismiss_alert(&mut self) {
    self.alert = None;
  }

  // ─── Form editing ───

  /// Moves focus to the other form field
  pub fn focus_next(&mut self) {
    self.focus = match self.focus {
      Focus::Name => Focus::Description,
      Focus::Description => Focus::Name,
    };
    self.cursor_pos = self.focused_input().len();
  }

  /// The field keystrokes currently edit
  fn focused_input(&mut self) -> &mut String {
    match self.focus {
      Focus::Name => &mut self.name_input,
      Focus::Description => &mut self.description_input,
    }
  }

  /// Inserts a character at the cursor
  pub fn input_char(&mut self, c: char) {
    let pos = self.cursor_pos;
    self.focused_input().insert(pos, c);
    self.cursor_pos += c.len_utf8();
  }

  /// Deletes the character before the cursor
  pub fn input_backspace(&mut self) {
    if self.cursor_pos > 0 {
      let pos = self.cursor_pos;
      let input = self.focused_input();
      let prev_char_boundary =
        input[..pos].char_indices().next_back().map(|(i, _)| i).unwrap_or(0);
      input.remove(prev_char_boundary);
      self.cursor_pos = prev_char_boundary;
    }
  }

  /// Deletes the character under the cursor
  pub fn input_delete(&mut self) {
    let pos = self.cursor_pos;
    let input = self.focused_input();
    if pos < input.len() {
      input.remove(pos);
    }
  }

  /// Moves the cursor one character left
  pub fn input_left(&mut self) {
    if self.cursor_pos > 0 {
      let pos = self.cursor_pos;
      self.cursor_pos =
        self.focused_input()[..pos].char_indices().next_back().map(|(i, _)| i).unwrap_or(0);
    }
  }

  /// Moves the cursor one character right
  pub fn input_right(&mut self) {
    let pos = self.cursor_pos;
    let input = self.focused_input();
    if pos < input.len() {
      self.cursor_pos =
        input[pos..].char_indices().nth(1).map(|(i, _)| pos + i).unwrap_or(input.len());
    }
  }

  /// Moves the cursor to the start of the field
  pub fn input_home(&mut self) {
    self.cursor_pos = 0;
  }

  /// Moves the cursor to the end of the field
  pub fn input_end(&mut self) {
    self.cursor_pos = self.focused_input().len();
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn test_app() -> App {
    App::new(ApiClient::new("http://127.0.0.1:0/api"))
  }

  fn sample_items() -> Vec<Item> {
    vec![
      Item::new(1, "Item 1", "This is the first item"),
      Item::new(2, "Item 2", "This is the second item"),
      Item::new(3, "Item 3", "This is the third item"),
    ]
  }

  #[test]
  fn starts_in_loading_state() {
    let app = test_app();
    assert!(app.loading);
    assert!(app.items.is_empty());
    assert!(app.backend_status.is_none());
    assert!(app.error.is_none());
  }

  #[test]
  fn health_success_stores_server_message() {
    let mut app = test_app();

    app.apply_health_result(Ok(HealthResponse {
      status: "OK".to_string(),
      message: "Backend is running!".to_string(),
    }));

    assert_eq!(app.backend_status.as_deref(), Some("Backend is running!"));
  }

  #[test]
  fn health_failure_maps_to_unreachable() {
    let mut app = test_app();

    app.apply_health_result(Err(ClientError::Api {
      status: 500,
      message: "Something went wrong!".to_string(),
    }));

    assert_eq!(app.backend_status.as_deref(), Some("Backend unreachable"));
  }

  #[test]
  fn items_success_fills_list_and_clears_loading() {
    let mut app = test_app();

    app.apply_items_result(Ok(sample_items()));

    assert!(!app.loading);
    assert_eq!(app.items.len(), 3);
    assert!(app.error.is_none());
  }

  #[test]
  fn items_failure_sets_banner_and_still_clears_loading() {
    let mut app = test_app();

    app.apply_items_result(Err(ClientError::Api {
      status: 0,
      message: "connection refused".to_string(),
    }));

    assert!(!app.loading);
    assert_eq!(app.error.as_deref(), Some("Failed to fetch items"));
  }

  #[test]
  fn create_success_appends_and_clears_draft() {
    let mut app = test_app();
    app.apply_items_result(Ok(sample_items()));

    app.name_input = "Item 4".to_string();
    app.description_input = "d".to_string();

    app.apply_create_result(Ok(Item::new(4, "Item 4", "d")));

    // Optimistic append: no refetch, the returned record goes last
    assert_eq!(app.items.len(), 4);
    assert_eq!(app.items[3].id, 4);
    assert!(app.name_input.is_empty());
    assert!(app.description_input.is_empty());
    assert!(app.error.is_none());
  }

  #[test]
  fn create_failure_keeps_draft_and_sets_banner() {
    let mut app = test_app();
    app.apply_items_result(Ok(sample_items()));

    app.name_input = "Item 4".to_string();
    app.description_input = "d".to_string();

    app.apply_create_result(Err(ClientError::Api {
      status: 500,
      message: "Something went wrong!".to_string(),
    }));

    assert_eq!(app.items.len(), 3);
    assert_eq!(app.name_input, "Item 4");
    assert_eq!(app.description_input, "d");
    assert_eq!(app.error.as_deref(), Some("Failed to add item"));
  }

  #[test]
  fn submit_with_empty_fields_raises_alert() {
    let mut app = test_app();

    app.submit();
    assert_eq!(app.alert.as_deref(), Some("Please fill in both fields"));
    assert!(!app.create_in_flight());

    app.dismiss_alert();
    assert!(app.alert.is_none());

    // One filled field is not enough
    app.name_input = "Item 4".to_string();
    app.submit();
    assert_eq!(app.alert.as_deref(), Some("Please fill in both fields"));
    assert!(!app.create_in_flight());
  }

  #[tokio::test]
  async fn submit_with_filled_fields_spawns_request() {
    let mut app = test_app();
    app.name_input = "Item 4".to_string();
    app.description_input = "d".to_string();

    app.submit();
    assert!(app.create_in_flight());
    assert!(app.alert.is_none());
  }

  #[test]
  fn focus_and_cursor_editing() {
    let mut app = test_app();
    assert_eq!(app.focus, Focus::Name);

    app.input_char('a');
    app.input_char('b');
    assert_eq!(app.name_input, "ab");
    assert_eq!(app.cursor_pos, 2);

    app.input_left();
    app.input_char('x');
    assert_eq!(app.name_input, "axb");

    app.focus_next();
    assert_eq!(app.focus, Focus::Description);
    assert_eq!(app.cursor_pos, 0);

    app.input_char('d');
    assert_eq!(app.description_input, "d");
    assert_eq!(app.name_input, "axb");

    app.input_backspace();
    assert_eq!(app.description_input, "");

    app.focus_next();
    assert_eq!(app.focus, Focus::Name);
    // Cursor lands at the end of the newly focused field
    assert_eq!(app.cursor_pos, 3);
  }

  #[test]
  fn multibyte_input_keeps_char_boundaries() {
    let mut app = test_app();

    app.input_char('日');
    app.input_char('本');
    assert_eq!(app.name_input, "日本");

    app.input_left();
    assert_eq!(app.cursor_pos, 3);

    app.input_backspace();
    assert_eq!(app.name_input, "本");
    assert_eq!(app.cursor_pos, 0);
  }
}
