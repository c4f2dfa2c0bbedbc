use super::model::Track;

/// Keep the tracks whose `"{title} {artist} {album}"` contains `query`,
/// case-insensitively. A blank query returns every track.
pub fn filter_by_query(rows: &[Track], query: &str) -> Vec<Track> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return rows.to_vec();
    }

    rows.iter()
        .filter(|t| {
            format!("{} {} {}", t.title, t.artist, t.album)
                .to_lowercase()
                .contains(&query)
        })
        .cloned()
        .collect()
}
