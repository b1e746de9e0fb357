use super::*;

fn clock_format() -> &'static [FormatItem<'static>] {
    static FMT: OnceLock<Vec<FormatItem<'static>>> = OnceLock::new();
    FMT.get_or_init(|| {
        time::format_description::parse("[hour]:[minute]:[second]").unwrap_or_default()
    })
}

/// Short age of a status entry. Entries older than an hour get none.
fn age_label(secs: i64) -> Option<String> {
    match secs {
        0..=4 => Some("now".to_string()),
        5..=59 => Some(format!("{}s", secs)),
        60..=3599 => Some(format!("{}m", secs / 60)),
        _ => None,
    }
}

/// `HH:MM:SS` of an RFC 3339 stamp, followed by its age relative to `now`.
/// Unparseable stamps are shown as-is.
pub(in crate::tui_shell) fn fmt_ts_status(ts: &str, now: OffsetDateTime) -> String {
    let Ok(at) = OffsetDateTime::parse(ts, &Rfc3339) else {
        return ts.to_string();
    };
    let clock = at
        .format(clock_format())
        .unwrap_or_else(|_| ts.to_string());
    match age_label((now - at).whole_seconds()) {
        Some(age) => format!("{} {}", clock, age),
        None => clock,
    }
}

pub(in crate::tui_shell) fn now_ts() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default()
}
