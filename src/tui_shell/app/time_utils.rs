use time::{OffsetDateTime, UtcOffset};
use time::format_description::well_known::Rfc3339;

pub(in crate::tui_shell) fn now_ts() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "<time>".to_string())
}

/// UTC `HH:MM` for an RFC 3339 timestamp; anything unparsable is shown as is.
pub(in crate::tui_shell) fn fmt_ts_ui(ts: &str) -> String {
    match OffsetDateTime::parse(ts, &Rfc3339) {
        Ok(dt) => {
            let dt = dt.to_offset(UtcOffset::UTC);
            format!("{:02}:{:02}", dt.hour(), dt.minute())
        }
        Err(_) => ts.to_string(),
    }
}
