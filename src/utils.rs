use chrono::DateTime;

pub(crate) fn escape(text: &str) -> String {
  html_escape::encode_double_quoted_attribute(text).into_owned()
}

pub(crate) fn format_comments(count: u64) -> String {
  match count {
    1 => "1 comment".to_string(),
    _ => format!("{count} comments"),
  }
}

pub(crate) fn format_points(score: u64) -> String {
  match score {
    1 => "1 point".to_string(),
    _ => format!("{score} points"),
  }
}

pub(crate) fn format_timestamp(seconds: i64) -> String {
  DateTime::from_timestamp(seconds, 0).map_or_else(
    || seconds.to_string(),
    |time| time.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
  )
}
