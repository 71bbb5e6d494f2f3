use super::*;

const EDIT_MARKER: &str = "[~] ";

pub(in crate::tui_shell) fn draw<S: KeyValueStore>(frame: &mut ratatui::Frame, app: &App<S>) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

    // Header
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "checklist",
            Style::default().fg(Color::Black).bg(Color::White),
        ),
        Span::raw("  "),
        Span::styled(app.location.as_str(), Style::default().fg(Color::Gray)),
    ]))
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    draw_entry(frame, app, chunks[1]);
    draw_list(frame, app, chunks[2]);

    frame.render_widget(Paragraph::new(app.controller.footer().line()), chunks[3]);

    // Status / last result
    let mut lines = Vec::new();
    if let Some(r) = &app.last_result {
        let style = match r.kind {
            EntryKind::Output => Style::default().fg(Color::White),
            EntryKind::Error => Style::default().fg(Color::Red),
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", fmt_ts_ui(&r.ts)),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(r.text.as_str(), style),
        ]));
    }
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::TOP).title("Last")),
        chunks[4],
    );
}

fn draw_entry<S: KeyValueStore>(
    frame: &mut ratatui::Frame,
    app: &App<S>,
    area: ratatui::layout::Rect,
) {
    let focused = app.focus == Focus::Entry;
    let field = app.controller.entry().field();
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title("What needs to be done?");
    frame.render_widget(Paragraph::new(field.value()).block(block), area);
    if focused {
        let x = area.x + 1 + field.cursor_column() as u16;
        frame.set_cursor_position((x, area.y + 1));
    }
}

fn draw_list<S: KeyValueStore>(
    frame: &mut ratatui::Frame,
    app: &App<S>,
    area: ratatui::layout::Rect,
) {
    let list = app.controller.list();
    let focused = app.focus == Focus::List;

    let mut rows = Vec::new();
    let mut edit_cursor = None;
    for (idx, view) in list.views().iter().enumerate() {
        match view.edit_field() {
            Some(field) => {
                rows.push(ListItem::new(Line::from(vec![
                    Span::styled(EDIT_MARKER, Style::default().fg(Color::Green)),
                    Span::styled(
                        field.value().to_string(),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::UNDERLINED),
                    ),
                ])));
                edit_cursor = Some((idx, field.cursor_column()));
            }
            None => rows.push(ListItem::new(view.row().clone())),
        }
    }
    if rows.is_empty() {
        rows.push(ListItem::new(Span::styled(
            "(nothing to do)",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let hints = if edit_cursor.is_some() {
        "Enter: save  Esc: cancel"
    } else if focused {
        "Space: toggle  Enter: edit  d: delete  Tab: new item  q: quit"
    } else {
        "Tab: select items"
    };

    let mut state = ListState::default();
    if focused {
        state.select(list.selected_index());
    }
    let widget = List::new(rows)
        .block(Block::default().borders(Borders::ALL).title(hints))
        .highlight_style(Style::default().bg(Color::DarkGray));
    frame.render_stateful_widget(widget, area, &mut state);

    if let Some((idx, col)) = edit_cursor
        && focused
        && idx >= state.offset()
    {
        let row = (idx - state.offset()) as u16;
        if row + 2 < area.height {
            let x = area.x + 1 + EDIT_MARKER.len() as u16 + col as u16;
            frame.set_cursor_position((x, area.y + 1 + row));
        }
    }
}
