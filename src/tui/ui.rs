use crate::tui::app::App;
use crate::tui::types::{Dialog, Entry, Field, Tone};
use daycare_core::logger::get_recent_logs;
use daycare_core::navigation::BOTTOM_TABS;
use daycare_core::{clock, ScreenId};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

const CURSOR: char = '▏';
const MASK: char = '•';

pub fn render(frame: &mut Frame, app: &App) {
    let screen = app.current_screen();
    let show_tabs = show_bottom_nav(app, screen);

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(if show_tabs { 1 } else { 0 }),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_top_bar(frame, app, screen, main_layout[0]);
    render_body(frame, app, main_layout[1]);
    render_status(frame, app, main_layout[2]);
    if show_tabs {
        render_bottom_nav(frame, screen, main_layout[3]);
    }
    render_help(frame, app, screen, main_layout[4]);

    if app.show_logs {
        render_logs(frame);
    }
    if let Some(dialog) = &app.dialog {
        render_dialog(frame, dialog);
    }
}

fn show_bottom_nav(app: &App, screen: ScreenId) -> bool {
    app.config.ui.show_bottom_nav && screen.bottom_tab().is_some()
}

fn render_top_bar(frame: &mut Frame, app: &App, screen: ScreenId, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let back = if screen.back_target().is_some() { "← " } else { "" };
    let left = Line::from(vec![
        Span::styled(back, Style::default().fg(Color::DarkGray)),
        Span::styled(
            screen.title(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
    ]);

    let session = app.nav.session();
    let mut right = Vec::new();
    if session.is_authenticated {
        right.push(Span::styled(
            session.user_name.clone(),
            Style::default().fg(Color::Green),
        ));
        right.push(Span::raw(" · "));
    }
    right.push(Span::styled(
        clock::now_time_label(),
        Style::default().fg(Color::DarkGray),
    ));

    let top = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(left).block(top.clone()), chunks[0]);
    frame.render_widget(
        Paragraph::new(Line::from(right))
            .alignment(Alignment::Right)
            .block(top),
        chunks[1],
    );
}

fn render_body(frame: &mut Frame, app: &App, area: Rect) {
    let entries = app.entries();
    let selectable = App::selectable(&entries);
    let focused = selectable
        .get(app.selected.min(selectable.len().saturating_sub(1)))
        .copied();

    let items: Vec<ListItem> = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| ListItem::new(entry_line(app, entry, Some(i) == focused)))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::NONE))
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(focused);
    frame.render_stateful_widget(list, area, &mut state);
}

fn entry_line(app: &App, entry: &Entry, focused: bool) -> Line<'static> {
    match entry {
        Entry::Heading(text) => Line::from(Span::styled(
            text.clone(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Entry::Text(text, tone) => Line::from(Span::styled(text.clone(), tone_style(*tone))),
        Entry::Input { field, label } => Line::from(vec![
            Span::styled(format!("{}: ", label), Style::default().fg(Color::Gray)),
            Span::styled(
                input_text(app, *field, focused),
                Style::default().fg(Color::White),
            ),
        ]),
        Entry::Choice { label, value, .. } => Line::from(vec![
            Span::styled(format!("{}: ", label), Style::default().fg(Color::Gray)),
            Span::styled(format!("‹ {} ›", value), Style::default().fg(Color::Cyan)),
        ]),
        Entry::Button { label, .. } => Line::from(Span::styled(
            format!("[ {} ]", label),
            Style::default().fg(Color::Cyan),
        )),
        Entry::Item { title, detail, tone, .. } => Line::from(vec![
            Span::styled(title.clone(), tone_style(*tone).add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(detail.clone(), Style::default().fg(Color::DarkGray)),
        ]),
    }
}

/// Field text as displayed, masked where needed and with a cursor when focused.
pub fn input_text(app: &App, field: Field, focused: bool) -> String {
    let value = app.field_value(field);
    let mut chars: Vec<char> = if field.masked() {
        value.chars().map(|_| MASK).collect()
    } else {
        value.chars().collect()
    };
    if focused {
        let at = app.cursor_position.min(chars.len());
        chars.insert(at, CURSOR);
    }
    chars.into_iter().collect()
}

fn tone_style(tone: Tone) -> Style {
    let color = match tone {
        Tone::Normal => Color::White,
        Tone::Muted => Color::DarkGray,
        Tone::Accent => Color::Cyan,
        Tone::Good => Color::Green,
        Tone::Warn => Color::Yellow,
        Tone::Bad => Color::Red,
        Tone::Staff => Color::LightBlue,
        Tone::Parent => Color::LightMagenta,
    };
    Style::default().fg(color)
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(message) = &app.status_message {
        let status = Paragraph::new(Span::styled(
            message.clone(),
            Style::default().fg(Color::Green).add_modifier(Modifier::ITALIC),
        ));
        frame.render_widget(status, area);
    }
}

fn render_bottom_nav(frame: &mut Frame, screen: ScreenId, area: Rect) {
    let active = screen.bottom_tab();
    let mut spans = Vec::new();
    for (i, (tab, label)) in BOTTOM_TABS.iter().enumerate() {
        let style = if active == Some(*tab) {
            Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" F{} {} ", i + 1, label), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn render_help(frame: &mut Frame, app: &App, screen: ScreenId, area: Rect) {
    let back = if screen.back_target().is_some() { "Esc back" } else { "Esc exit" };
    let mut text = format!("↑↓ move · Enter select · {} · F12 log · Ctrl+C quit", back);
    if app.dialog.is_some() {
        text = "Enter/y confirm · Esc/n cancel".to_string();
    }
    frame.render_widget(
        Paragraph::new(Span::styled(text, Style::default().fg(Color::DarkGray))),
        area,
    );
}

fn render_dialog(frame: &mut Frame, dialog: &Dialog) {
    let area = centered_rect(60, 30, frame.area());
    frame.render_widget(Clear, area);

    let (title, message, confirm) = match dialog {
        Dialog::Notice { title, message } => (title, message, false),
        Dialog::Confirm { title, message, .. } => (title, message, true),
    };
    let color = if confirm { Color::Yellow } else { Color::Cyan };
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    frame.render_widget(
        Paragraph::new(message.clone())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        chunks[0],
    );

    let instructions = if confirm {
        Line::from(vec![
            Span::styled(" [Y] ", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::raw("Yes"),
            Span::raw("  "),
            Span::styled(" [N] ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::raw("No"),
        ])
    } else {
        Line::from(Span::styled(
            " [Enter] OK ",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ))
    };
    frame.render_widget(
        Paragraph::new(instructions).alignment(Alignment::Center),
        chunks[1],
    );
}

fn render_logs(frame: &mut Frame) {
    let area = centered_rect(90, 80, frame.area());
    frame.render_widget(Clear, area);

    let height = area.height.saturating_sub(2) as usize;
    let lines: Vec<Line> = get_recent_logs(height)
        .into_iter()
        .rev()
        .map(|line| {
            let style = if line.contains("ERROR") {
                Style::default().fg(Color::Red)
            } else if line.contains("DEBUG") {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(line, style))
        })
        .collect();

    let block = Block::default()
        .title(" Activity Log (Esc to close) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(Paragraph::new(lines).block(block), area);
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
