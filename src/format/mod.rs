mod text;
mod time;

pub(crate) use text::format_mood_line;
pub(crate) use time::format_display_time;
