use super::model::Track;

/// Format seconds as `MM:SS`. Unusable values render as `00:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "00:00".to_string();
    }
    let secs = seconds as u64;
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// One-line summary of a track for the browse list.
pub fn card_line(track: &Track) -> String {
    format!(
        "{} — {} • {} • {}",
        track.title,
        track.artist,
        track.album,
        format_time(track.duration)
    )
}
