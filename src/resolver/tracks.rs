//! Track number lookup within an album's track list.

use super::domain::TrackListEntry;

/// Find `target_title` in `track_list` and format its position as
/// `"<position> of <total>"`.
///
/// Matching is exact string equality: a catalog that lists the track as
/// "Song (feat. X)" won't match a search hit titled "Song".
pub fn locate_track(
    track_list: &[TrackListEntry],
    target_title: &str,
    total_tracks: u32,
) -> Option<String> {
    track_list
        .iter()
        .find(|entry| entry.title == target_title)
        .map(|entry| format!("{} of {}", entry.track_position, total_tracks))
}
