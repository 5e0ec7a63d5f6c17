//! Rendering
//!
//! A pure function of the application state: loading view, header with
//! backend status, error banner, add-item form, item card grid, status bar
//! and the blocking alert popup.

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::app::{App, Focus};

/// Items per grid row
const GRID_COLUMNS: usize = 3;

/// Renders one frame from the current state
pub fn render(frame: &mut Frame, app: &App) {
  if app.loading {
    render_loading(frame);
    return;
  }

  let mut constraints = vec![Constraint::Length(1)]; // Header
  if app.error.is_some() {
    constraints.push(Constraint::Length(1)); // Error banner
  }
  constraints.push(Constraint::Length(5)); // Form
  constraints.push(Constraint::Min(1)); // Items grid
  constraints.push(Constraint::Length(1)); // Status bar

  let chunks = Layout::default()
    .direction(Direction::Vertical)
    .constraints(constraints)
    .split(frame.area());

  let mut next = 0;
  render_header(frame, app, chunks[next]);
  next += 1;

  if app.error.is_some() {
    render_error_banner(frame, app, chunks[next]);
    next += 1;
  }

  render_form(frame, app, chunks[next]);
  render_items(frame, app, chunks[next + 1]);
  render_status_bar(frame, app, chunks[next + 2]);

  if app.alert.is_some() {
    render_alert(frame, app);
  }
}

fn render_loading(frame: &mut Frame) {
  let area = frame.area();
  let vertical_center = Rect {
    x: area.x,
    y: area.y + area.height / 2,
    width: area.width,
    height: 1,
  };

  let loading = Paragraph::new("Loading...")
    .style(Style::default().fg(Color::Yellow))
    .centered();

  frame.render_widget(loading, vertical_center);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
  let (status_text, status_style) = match &app.backend_status {
    // Green when the backend reports itself running, red for anything else
    Some(status) if status.contains("running") => {
      (status.as_str(), Style::default().fg(Color::Green))
    }
    Some(status) => (status.as_str(), Style::default().fg(Color::Red)),
    None => ("...", Style::default().fg(Color::DarkGray)),
  };

  let header = Line::from(vec![
    Span::styled(
      "tana - Item Catalog",
      Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ),
    Span::raw("  Backend: "),
    Span::styled(status_text, status_style),
  ]);

  frame.render_widget(Paragraph::new(header), area);
}

fn render_error_banner(frame: &mut Frame, app: &App, area: Rect) {
  let text = app.error.as_deref().unwrap_or_default();
  let banner = Paragraph::new(text)
    .style(Style::default().fg(Color::White).bg(Color::Red));
  frame.render_widget(banner, area);
}

fn render_form(frame: &mut Frame, app: &App, area: Rect) {
  let form_block = Block::default().borders(Borders::ALL).title("Add New Item");
  let inner = form_block.inner(area);
  frame.render_widget(form_block, area);

  let fields = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
    .split(inner);

  render_input_field(frame, app, fields[0], Focus::Name, "Name", &app.name_input);
  render_input_field(
    frame,
    app,
    fields[1],
    Focus::Description,
    "Description",
    &app.description_input,
  );
}

fn render_input_field(
  frame: &mut Frame,
  app: &App,
  area: Rect,
  field: Focus,
  title: &str,
  value: &str,
) {
  let focused = app.focus == field && app.alert.is_none();

  let border_style = if focused {
    Style::default().fg(Color::Yellow)
  } else {
    Style::default().fg(Color::DarkGray)
  };

  let block = Block::default().borders(Borders::ALL).title(title).border_style(border_style);

  let placeholder = match field {
    Focus::Name => "Item name",
    Focus::Description => "Item description",
  };

  let (text, style) = if value.is_empty() {
    (placeholder, Style::default().fg(Color::DarkGray))
  } else {
    (value, Style::default())
  };

  let field_paragraph = Paragraph::new(text).style(style).block(block);
  frame.render_widget(field_paragraph, area);

  if focused {
    let cursor_column = value[..app.cursor_pos].chars().count() as u16;
    frame.set_cursor_position((area.x + 1 + cursor_column, area.y + 1));
  }
}

fn render_items(frame: &mut Frame, app: &App, area: Rect) {
  let items_block = Block::default().borders(Borders::ALL).title("Items from Backend");
  let inner = items_block.inner(area);
  frame.render_widget(items_block, area);

  if app.items.is_empty() {
    let empty = Paragraph::new("No items yet").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(empty, inner);
    return;
  }

  // Cards laid out in fixed-width rows, three per row
  let row_count = app.items.len().div_ceil(GRID_COLUMNS);
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints(vec![Constraint::Length(5); row_count])
    .split(inner);

  for (row_index, chunk) in app.items.chunks(GRID_COLUMNS).enumerate() {
    if row_index >= rows.len() {
      break;
    }

    let columns = Layout::default()
      .direction(Direction::Horizontal)
      .constraints(vec![
        Constraint::Ratio(1, GRID_COLUMNS as u32);
        GRID_COLUMNS
      ])
      .split(rows[row_index]);

    for (column_index, item) in chunk.iter().enumerate() {
      let card = Paragraph::new(vec![
        Line::from(item.description.as_str()),
        Line::from(Span::styled(
          format!("ID: {}", item.id),
          Style::default().fg(Color::DarkGray),
        )),
      ])
      .wrap(Wrap { trim: false })
      .block(
        Block::default()
          .borders(Borders::ALL)
          .title(Span::styled(
            item.name.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
          )),
      );

      frame.render_widget(card, columns[column_index]);
    }
  }
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
  let status = if app.alert.is_some() {
    "Enter/Esc: Dismiss"
  } else if app.create_in_flight() {
    "Adding item...  Esc: Quit"
  } else {
    "Tab: Switch field  Enter: Add item  Esc: Quit"
  };

  let status_bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
  frame.render_widget(status_bar, area);
}

fn render_alert(frame: &mut Frame, app: &App) {
  let Some(message) = app.alert.as_deref() else {
    return;
  };

  let area = centered_rect(40, 20, frame.area());
  frame.render_widget(Clear, area);

  let popup = Paragraph::new(vec![
    Line::from(message),
    Line::from(""),
    Line::from(Span::styled(
      "Press Enter to continue",
      Style::default().fg(Color::DarkGray),
    )),
  ])
  .wrap(Wrap { trim: false })
  .centered()
  .block(
    Block::default()
      .borders(Borders::ALL)
      .title("Alert")
      .border_style(Style::default().fg(Color::Yellow)),
  );

  frame.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
  let popup_layout = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Percentage((100 - percent_y) / 2),
      Constraint::Percentage(percent_y),
      Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

  Layout::default()
    .direction(Direction::Horizontal)
    .constraints([
      Constraint::Percentage((100 - percent_x) / 2),
      Constraint::Percentage(percent_x),
      Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
