use crate::tui::state::{AppState, InputMode};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

pub fn draw(f: &mut Frame, state: &mut AppState) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", state.config.title))
        .title_alignment(Alignment::Center);
    let inner = outer.inner(f.area());
    f.render_widget(outer, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(inner);

    // --- Input ---
    let typing = state.mode == InputMode::Typing;
    let pending = state.list.pending_text();
    let input_line = if pending.is_empty() && !typing {
        Line::from(Span::styled(
            state.config.placeholder.clone(),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(format!("> {}", pending))
    };
    let input_style = if typing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    // Column of the cursor inside the input box, after the "> " prefix.
    // The line scrolls horizontally so the cursor never leaves the box.
    let inner_width = chunks[0].width.saturating_sub(2);
    let cursor_col = u16::try_from(state.cursor_position)
        .unwrap_or(u16::MAX)
        .saturating_add(2);
    let scroll_x = if typing {
        cursor_col.saturating_sub(inner_width.saturating_sub(1))
    } else {
        0
    };
    let input = Paragraph::new(input_line)
        .style(input_style)
        .scroll((0, scroll_x))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Add To-Do ")
                .border_style(input_style),
        );
    f.render_widget(input, chunks[0]);
    if typing {
        let max_x = chunks[0].right().saturating_sub(2);
        let cursor_x = chunks[0]
            .x
            .saturating_add(1)
            .saturating_add(cursor_col - scroll_x)
            .min(max_x);
        let cursor_y = chunks[0].y.saturating_add(1);
        f.set_cursor_position((cursor_x, cursor_y));
    }

    // --- Items ---
    let list_style = if typing {
        Style::default()
    } else {
        Style::default().fg(Color::Yellow)
    };
    let title = format!(
        " To-Dos ({}/{}) ",
        state.list.remaining(),
        state.list.len()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(list_style);

    if state.list.is_empty() {
        let empty = Paragraph::new(state.config.empty_message.clone())
            .style(
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::ITALIC),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        f.render_widget(empty, chunks[1]);
    } else {
        let items: Vec<ListItem> = state
            .list
            .items()
            .iter()
            .map(|t| {
                let (checkbox, style) = if t.completed() {
                    (
                        "[x]",
                        Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::CROSSED_OUT),
                    )
                } else {
                    ("[ ]", Style::default().fg(Color::White))
                };
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{} ", checkbox)),
                    Span::styled(t.text().to_string(), style),
                ]))
            })
            .collect();
        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .bg(Color::DarkGray),
        );
        f.render_stateful_widget(list, chunks[1], &mut state.list_state);
    }

    // --- Footer ---
    let f_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);
    let status = Paragraph::new(state.message.clone())
        .style(Style::default().fg(Color::Cyan))
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::TOP | Borders::BOTTOM)
                .title(" Status "),
        );
    let help_text = if typing {
        "Enter:Add | Esc:List"
    } else {
        "a:Add | Space:Done | d:Del | q:Quit"
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::RIGHT | Borders::TOP | Borders::BOTTOM)
                .title(" Actions "),
        );
    f.render_widget(status, f_chunks[0]);
    f.render_widget(help, f_chunks[1]);
}
