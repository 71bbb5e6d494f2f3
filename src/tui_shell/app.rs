use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use crate::controller::Controller;
use crate::store::KeyValueStore;
use crate::views::Gesture;

mod event_loop;
mod render;
mod runtime;
mod status;
mod time_utils;

pub(super) use self::runtime::run;
use self::time_utils::{fmt_ts_ui, now_ts};

/// Which part of the screen receives typed keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum Focus {
    Entry,
    List,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum EntryKind {
    Output,
    Error,
}

#[derive(Clone, Debug)]
pub(in crate::tui_shell) struct StatusEntry {
    pub(in crate::tui_shell) ts: String,
    pub(in crate::tui_shell) kind: EntryKind,
    pub(in crate::tui_shell) text: String,
}

pub(in crate::tui_shell) struct App<S: KeyValueStore> {
    pub(in crate::tui_shell) controller: Controller<S>,
    pub(in crate::tui_shell) location: String,
    pub(in crate::tui_shell) focus: Focus,
    pub(in crate::tui_shell) last_result: Option<StatusEntry>,
    pub(in crate::tui_shell) quit: bool,
}

impl<S: KeyValueStore> App<S> {
    pub(in crate::tui_shell) fn new(controller: Controller<S>, location: String) -> Self {
        let mut app = Self {
            controller,
            location,
            focus: Focus::Entry,
            last_result: None,
            quit: false,
        };
        app.push_output("Enter adds an item; Tab switches to the list.".to_string());
        app
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/app_tests.rs"]
mod tests;
