use super::*;

impl<S: KeyValueStore> App<S> {
    fn push_entry(&mut self, kind: EntryKind, text: String) {
        self.last_result = Some(StatusEntry {
            ts: now_ts(),
            kind,
            text,
        });
    }

    pub(in crate::tui_shell) fn push_output(&mut self, text: String) {
        self.push_entry(EntryKind::Output, text);
    }

    pub(in crate::tui_shell) fn push_error(&mut self, text: String) {
        self.push_entry(EntryKind::Error, text);
    }

    /// Shows a failed operation in the status line; success stays quiet.
    pub(in crate::tui_shell) fn report(&mut self, res: Result<()>) {
        if let Err(err) = res {
            self.push_error(format!("{:#}", err));
        }
    }
}
