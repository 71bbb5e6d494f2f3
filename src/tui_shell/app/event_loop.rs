use super::*;

pub(super) fn run_loop<S: KeyValueStore>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<S>,
) -> Result<()> {
    loop {
        terminal
            .draw(|f| super::render::draw(f, app))
            .context("draw")?;
        if app.quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(50)).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => handle_key(app, k),
                _ => {}
            }
        }
    }
}

pub(in crate::tui_shell) fn handle_key<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit = true;
        return;
    }

    match app.focus {
        Focus::Entry => handle_entry_key(app, key),
        Focus::List => {
            if let Some(editing) = app.controller.list().editing() {
                handle_edit_key(app, editing, key);
            } else {
                handle_list_key(app, key);
            }
        }
    }

    if app.controller.list().is_empty() {
        app.focus = Focus::Entry;
    }
}

fn handle_entry_key<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            if !app.controller.list().is_empty() {
                app.focus = Focus::List;
            }
        }
        KeyCode::Esc => {
            if app.controller.entry().field().is_empty() {
                app.quit = true;
            } else {
                app.controller.entry_mut().field_mut().clear();
            }
        }
        _ => match app.controller.entry_key(key) {
            Ok(Some(item)) => {
                app.controller.list_mut().select_last();
                app.push_output(format!("added \"{}\"", item.title));
            }
            Ok(None) => {}
            Err(err) => app.push_error(format!("{:#}", err)),
        },
    }
}

fn handle_edit_key<S: KeyValueStore>(
    app: &mut App<S>,
    editing: crate::views::ViewKey,
    key: KeyEvent,
) {
    // Tab moves focus away from the field, which commits like Enter.
    let gesture = match key.code {
        KeyCode::Tab => Gesture::Blur,
        _ => Gesture::EditKey(key),
    };
    let before = app.controller.list().len();
    let res = app.controller.list_gesture(editing, gesture);
    app.report(res);
    if app.controller.list().len() < before {
        app.push_output("blank title: item deleted".to_string());
    }
    if key.code == KeyCode::Tab {
        app.focus = Focus::Entry;
    }
}

fn handle_list_key<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) {
    let selected = app.controller.list().selected_key();
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Tab | KeyCode::Char('i') => app.focus = Focus::Entry,
        KeyCode::Up | KeyCode::Char('k') => app.controller.list_mut().select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.controller.list_mut().select_next(),
        KeyCode::Char(' ') => {
            if let Some(key) = selected {
                let res = app.controller.list_gesture(key, Gesture::Toggle);
                app.report(res);
            }
        }
        KeyCode::Enter | KeyCode::Char('e') => {
            if let Some(key) = selected {
                let res = app.controller.list_gesture(key, Gesture::BeginEdit);
                app.report(res);
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(key) = selected {
                let title = app
                    .controller
                    .list()
                    .views()
                    .iter()
                    .find(|v| v.key() == key)
                    .map(|v| v.item().title.clone())
                    .unwrap_or_default();
                match app.controller.list_gesture(key, Gesture::Delete) {
                    Ok(()) => app.push_output(format!("deleted \"{}\"", title)),
                    Err(err) => app.push_error(format!("{:#}", err)),
                }
            }
        }
        KeyCode::Char('c') => match app.controller.clear_gesture() {
            Ok(0) => {}
            Ok(n) => app.push_output(format!(
                "cleared {} completed {}",
                n,
                crate::model::pluralize(n, "item")
            )),
            Err(err) => app.push_error(format!("{:#}", err)),
        },
        _ => {}
    }
}
