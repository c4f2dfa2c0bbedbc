//! UI rendering helpers for the terminal user interface.
//!
//! Everything here is read-only over the session: drawing never changes
//! what plays next.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock};

use crate::app::{NowStatus, Session, ViewState};
use crate::config::UiSettings;
use crate::library::{Track, card_line, format_time};

static CONTROLS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    map.insert("j/k", "up/down");
    map.insert("gg/G", "top/bottom");
    map.insert("enter", "play selected");
    map.insert("space/p", "play/pause");
    map.insert("h/l", "prev/next");
    map.insert("a/c", "enqueue/clear queue");
    map.insert("/", "search");
    map.insert("s", "shuffle");
    map.insert("r", "loop mode");
    map.insert("R", "rescan");
    map.insert("q", "quit");
    map
});

fn controls_text() -> String {
    let order = [
        "j/k", "gg/G", "enter", "space/p", "h/l", "a/c", "/", "s", "r", "R", "q",
    ];
    order
        .iter()
        .filter_map(|k| CONTROLS_MAP.get(k).map(|v| format!("[{k}] {v}")))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Compute the visible slice `[start, end)` of a list of `total` rows in an
/// area `height` rows tall, keeping `selected` centered when possible.
/// Returns the selection's position inside the slice as well.
fn visible_window(total: usize, height: usize, selected: usize) -> (usize, usize, usize) {
    let selected = selected.min(total.saturating_sub(1));
    if total <= height || height == 0 {
        return (0, total, selected);
    }
    let half = height / 2;
    let mut start = selected.saturating_sub(half);
    if start + height > total {
        start = total - height;
    }
    (start, start + height, selected - start)
}

fn status_text(session: &Session, view: &ViewState, paused: bool) -> String {
    let mut parts: Vec<String> = Vec::new();

    match session.now_status() {
        NowStatus::Idle => parts.push("Idle".to_string()),
        NowStatus::Missing(track) => {
            parts.push(format!("Song: {} — {}", track.title, track.artist));
            parts.push("Missing".to_string());
        }
        NowStatus::Ready(track) => {
            parts.push(format!(
                "Song: {} — {} [{}]",
                track.title,
                track.artist,
                format_time(track.duration)
            ));
            parts.push(if paused { "Paused" } else { "Playing" }.to_string());
        }
    }

    parts.push(format!(
        "Shuffle: {}",
        if session.shuffle() { "ON" } else { "OFF" }
    ));
    parts.push(format!("Loop: {}", session.loop_mode().label()));

    let q = if view.search_mode {
        view.input.as_str()
    } else {
        session.query()
    };
    if view.search_mode || !q.trim().is_empty() {
        parts.push(format!("Search: {q}"));
    }

    if !session.current_list().is_empty() {
        parts.push(format!(
            "Pos: {}/{}",
            session.current_idx().saturating_add(1),
            session.current_list().len()
        ));
    }
    parts.push(format!(
        "Tracks: {}/{}",
        session.view().len(),
        session.rows().len()
    ));
    if !session.queue().is_empty() {
        parts.push(format!("Queue: {}", session.queue().len()));
    }

    let mut text = parts.join(" • ");
    if let Some(message) = &view.message {
        text.push('\n');
        text.push_str(message);
    }
    text
}

fn queue_lines(session: &Session) -> Vec<String> {
    session
        .queue()
        .iter()
        .enumerate()
        .map(|(i, path)| match session.track_by_path(path) {
            Some(track) => format!("{}. {}", i + 1, track.title),
            None => format!("{}. {}", i + 1, path.display()),
        })
        .collect()
}

fn padded(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding {
            left: 1,
            right: 0,
            top: 0,
            bottom: 0,
        })
}

fn is_now(session: &Session, track: &Track) -> bool {
    session.now().is_some_and(|now| now.path == track.path)
}

/// Render the whole UI into `frame`.
pub fn draw(
    frame: &mut Frame,
    session: &Session,
    view: &ViewState,
    ui_settings: &UiSettings,
    paused: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(1),
            Constraint::Length(4),
        ])
        .split(frame.area());

    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" vesper ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    let status = Paragraph::new(status_text(session, view, paused))
        .block(padded(" status "))
        .wrap(Wrap { trim: true });
    frame.render_widget(status, chunks[1]);

    let (list_area, queue_area): (Rect, Option<Rect>) =
        if ui_settings.show_queue && !session.queue().is_empty() {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
                .split(chunks[2]);
            (cols[0], Some(cols[1]))
        } else {
            (chunks[2], None)
        };

    // Only build items for the visible window.
    let rows = session.view();
    let height = list_area.height.saturating_sub(2) as usize;
    let (start, end, selected_in_window) = visible_window(rows.len(), height, view.cursor);
    let items: Vec<ListItem> = rows[start..end]
        .iter()
        .map(|track| {
            let marker = if is_now(session, track) { "♪ " } else { "  " };
            ListItem::new(format!("{marker}{}", card_line(track)))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" tracks "))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    if !rows.is_empty() {
        state.select(Some(selected_in_window));
    }
    frame.render_stateful_widget(list, list_area, &mut state);

    if let Some(area) = queue_area {
        let queue = Paragraph::new(queue_lines(session).join("\n"))
            .block(padded(" queue "))
            .wrap(Wrap { trim: true });
        frame.render_widget(queue, area);
    }

    let footer = Paragraph::new(controls_text())
        .block(padded(" controls "))
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[3]);
}
