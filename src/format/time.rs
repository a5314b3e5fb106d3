use chrono::{DateTime, Local, Utc};

pub(crate) fn format_display_time(value: DateTime<Utc>) -> String {
    value
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}
