use crate::layout::track::Track;

/// Rebuild a definition list by interleaving a gutter track between every
/// pair of user tracks.
///
/// Spacing tracks in the input are discarded first, so the result is always
/// rebuilt from scratch: user tracks land at even positions in their
/// original relative order, gutter tracks at odd positions, and no gutter
/// leads or trails the list. `n` user tracks yield `2n - 1` tracks; an
/// empty input yields an empty list.
pub fn synthesize(tracks: &[Track], spacing: f64) -> Vec<Track> {
    let user: Vec<Track> = tracks.iter().filter(|t| !t.is_spacing()).copied().collect();
    if user.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(user.len() * 2 - 1);
    for (idx, track) in user.into_iter().enumerate() {
        if idx > 0 {
            out.push(Track::spacing(spacing));
        }
        out.push(track);
    }
    out
}

/// Rewrite every gutter track in a live definition list to a new spacing
/// magnitude, leaving user tracks and list structure alone.
///
/// Returns how many tracks were updated.
pub fn refresh_spacing(tracks: &mut [Track], spacing: f64) -> usize {
    let mut updated = 0;
    for track in tracks.iter_mut().filter(|t| t.is_spacing()) {
        track.set_gap(spacing);
        updated += 1;
    }
    updated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::track::TrackSize;

    fn user_tracks(n: usize) -> Vec<Track> {
        (0..n)
            .map(|i| Track::user(TrackSize::Fixed(10.0 + i as f64)))
            .collect()
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(synthesize(&[], 3.0).is_empty());
    }

    #[test]
    fn single_track_gets_no_gutters() {
        let out = synthesize(&user_tracks(1), 3.0);
        assert_eq!(out.len(), 1);
        assert!(!out[0].is_spacing());
    }

    #[test]
    fn interleaves_gutters_at_odd_positions() {
        for n in 1..=6 {
            let user = user_tracks(n);
            let out = synthesize(&user, 5.0);
            assert_eq!(out.len(), 2 * n - 1);

            for (idx, track) in out.iter().enumerate() {
                if idx % 2 == 0 {
                    assert_eq!(*track, user[idx / 2]);
                } else {
                    assert!(track.is_spacing());
                    assert_eq!(track.gap(), Some(5.0));
                }
            }
        }
    }

    #[test]
    fn rebuilds_from_scratch_when_input_already_has_gutters() {
        let first = synthesize(&user_tracks(3), 4.0);
        let again = synthesize(&first, 7.0);
        assert_eq!(again.len(), 5);
        assert_eq!(again[1].gap(), Some(7.0));
        assert_eq!(again[3].gap(), Some(7.0));
        assert_eq!(again[0], first[0]);
        assert_eq!(again[2], first[2]);
        assert_eq!(again[4], first[4]);
    }

    #[test]
    fn refresh_touches_only_gutter_tracks() {
        let mut tracks = synthesize(&user_tracks(4), 2.0);
        let updated = refresh_spacing(&mut tracks, 9.0);
        assert_eq!(updated, 3);
        for (idx, track) in tracks.iter().enumerate() {
            if idx % 2 == 1 {
                assert_eq!(track.gap(), Some(9.0));
            } else {
                assert!(!track.is_spacing());
            }
        }
    }

    #[test]
    fn refresh_preserves_track_count() {
        let mut tracks = synthesize(&user_tracks(5), 2.0);
        let before = tracks.len();
        refresh_spacing(&mut tracks, 0.0);
        assert_eq!(tracks.len(), before);
    }
}
