use ratatui::backend::TestBackend;

use super::*;
use crate::model::{Item, ItemId};
use crate::store::{MemoryStore, load_items, save_items};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn press(app: &mut App<MemoryStore>, codes: &[KeyCode]) {
    for code in codes {
        event_loop::handle_key(app, key(*code));
    }
}

fn type_str(app: &mut App<MemoryStore>, s: &str) {
    for c in s.chars() {
        event_loop::handle_key(app, key(KeyCode::Char(c)));
    }
}

fn app_with(items: &[(&str, &str, bool)]) -> Result<App<MemoryStore>> {
    let items: Vec<Item> = items
        .iter()
        .map(|(id, title, completed)| Item {
            id: ItemId(id.to_string()),
            title: title.to_string(),
            completed: *completed,
        })
        .collect();
    let mut store = MemoryStore::new();
    save_items(&mut store, "todos", &items)?;
    Ok(App::new(
        Controller::start(store, "todos"),
        "todos @ memory".to_string(),
    ))
}

fn screen(app: &App<MemoryStore>) -> Result<String> {
    let mut terminal = Terminal::new(TestBackend::new(72, 18)).context("create terminal")?;
    terminal
        .draw(|f| render::draw(f, app))
        .context("draw")?;
    let buf = terminal.backend().buffer();
    let width = buf.area.width as usize;
    let mut out = String::new();
    for row in buf.content().chunks(width) {
        for cell in row {
            out.push_str(cell.symbol());
        }
        out.push('\n');
    }
    Ok(out)
}

fn persisted(app: &App<MemoryStore>) -> Vec<Item> {
    load_items(app.controller.store(), "todos")
}

#[test]
fn typing_and_enter_adds_an_item() -> Result<()> {
    let mut app = app_with(&[])?;
    type_str(&mut app, "  Buy milk ");
    press(&mut app, &[KeyCode::Enter]);

    let items = persisted(&app);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "Buy milk");
    assert!(app.controller.entry().field().is_empty());
    assert_eq!(app.focus, Focus::Entry);
    Ok(())
}

#[test]
fn list_keys_toggle_and_clear() -> Result<()> {
    let mut app = app_with(&[("1", "one", false), ("2", "two", false)])?;
    press(&mut app, &[KeyCode::Tab, KeyCode::Char(' ')]);
    assert_eq!(app.focus, Focus::List);
    assert!(persisted(&app)[0].completed);

    press(&mut app, &[KeyCode::Char('c')]);
    let items = persisted(&app);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id.as_str(), "2");
    assert_eq!(app.controller.list().len(), 1);
    Ok(())
}

#[test]
fn escape_while_editing_keeps_title() -> Result<()> {
    let mut app = app_with(&[("5", "X", false)])?;
    press(&mut app, &[KeyCode::Tab, KeyCode::Char('e')]);
    type_str(&mut app, "yz");
    assert!(app.controller.list().editing().is_some());

    press(&mut app, &[KeyCode::Esc]);
    assert!(app.controller.list().editing().is_none());
    assert!(!app.quit);
    assert_eq!(persisted(&app)[0].title, "X");
    assert_eq!(app.controller.items()[0].title, "X");
    Ok(())
}

#[test]
fn clearing_the_title_deletes_the_item() -> Result<()> {
    let mut app = app_with(&[("5", "X", false)])?;
    press(
        &mut app,
        &[KeyCode::Tab, KeyCode::Enter, KeyCode::Backspace, KeyCode::Enter],
    );
    assert!(persisted(&app).is_empty());
    assert!(app.controller.list().is_empty());
    assert_eq!(app.focus, Focus::Entry);
    Ok(())
}

#[test]
fn tab_while_editing_commits() -> Result<()> {
    let mut app = app_with(&[("5", "X", false)])?;
    press(&mut app, &[KeyCode::Tab, KeyCode::Char('e')]);
    type_str(&mut app, "!");
    press(&mut app, &[KeyCode::Tab]);
    assert_eq!(persisted(&app)[0].title, "X!");
    assert_eq!(app.focus, Focus::Entry);
    Ok(())
}

#[test]
fn ctrl_c_quits_from_anywhere() -> Result<()> {
    let mut app = app_with(&[])?;
    type_str(&mut app, "draft");
    event_loop::handle_key(
        &mut app,
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    );
    assert!(app.quit);
    assert!(persisted(&app).is_empty());
    Ok(())
}

#[test]
fn screen_shows_rows_and_footer() -> Result<()> {
    let app = app_with(&[("1", "one", true), ("2", "two", false)])?;
    let out = screen(&app)?;
    assert!(out.contains("[x] one"), "{}", out);
    assert!(out.contains("[ ] two"), "{}", out);
    assert!(out.contains("1 item left"), "{}", out);
    assert!(out.contains("c: clear completed"), "{}", out);
    assert!(out.contains("todos @ memory"), "{}", out);
    Ok(())
}

#[test]
fn empty_list_hides_footer() -> Result<()> {
    let app = app_with(&[])?;
    let out = screen(&app)?;
    assert!(out.contains("(nothing to do)"), "{}", out);
    assert!(!out.contains("left"), "{}", out);
    Ok(())
}

#[test]
fn status_timestamps_render_as_clock_time() {
    assert_eq!(fmt_ts_ui("2026-10-19T08:05:09Z"), "08:05");
    assert_eq!(fmt_ts_ui("2026-10-19T10:05:09+02:00"), "08:05");
    assert_eq!(fmt_ts_ui("2026-10-19T00:30:00+02:00"), "22:30");
    assert_eq!(fmt_ts_ui("garbage"), "garbage");
}

#[test]
fn terminal_is_restored_only_when_setup_fails() {
    let mut restored = 0;
    let failed: Result<()> = runtime::restore_on_err(Err(anyhow::anyhow!("no tty")), || {
        restored += 1
    });
    assert!(failed.is_err());
    assert_eq!(restored, 1);

    let ok = runtime::restore_on_err(Ok(7), || restored += 1);
    assert_eq!(ok.ok(), Some(7));
    assert_eq!(restored, 1);
}
