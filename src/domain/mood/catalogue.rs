//! Mood Context - 歌单

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;

use super::{Mood, MoodError, Song};

/// 心情 -> 歌单
///
/// 只为非别名心情存歌单，fear / disgust 通过 `Mood::playlist_mood` 查找。
#[derive(Debug, Clone)]
pub struct MoodCatalogue {
    playlists: HashMap<Mood, Vec<Song>>,
}

impl MoodCatalogue {
    pub fn new(playlists: HashMap<Mood, Vec<Song>>) -> Self {
        Self { playlists }
    }

    /// 内置宝莱坞歌单
    pub fn builtin() -> Self {
        let playlists = HashMap::from([
            (
                Mood::Happy,
                vec![
                    Song::new("Ghungroo", "Ghungroo song lyrical"),
                    Song::new("Badtameez Dil", "Badtameez Dil Full Song HD"),
                    Song::new("Kar Gayi Chull", "Kar Gayi Chull Kapoor & Sons"),
                ],
            ),
            (
                Mood::Sad,
                vec![
                    Song::new("Agar Tum Saath Ho", "Agar Tum Saath Ho lyrical"),
                    Song::new("Ve Maahi", "Ve Maahi Kesari Full Song"),
                    Song::new(
                        "Tujhe Kitna Chahne Lage",
                        "Tujhe Kitna Chahne Lage Kabir Singh",
                    ),
                ],
            ),
            (
                Mood::Angry,
                vec![
                    Song::new("Sultan Title Track", "Sultan Title Track Full Song"),
                    Song::new("Zinda", "Zinda Bhaag Milkha Bhaag full song"),
                    Song::new("Malhari", "Malhari Bajirao Mastani full song"),
                ],
            ),
            (
                Mood::Neutral,
                vec![
                    Song::new("Iktara", "Iktara lyrical Wake Up Sid"),
                    Song::new("Kun Faya Kun", "Kun Faya Kun Rockstar full song"),
                    Song::new("Shaam", "Shaam Aisha song"),
                ],
            ),
            (
                Mood::Surprise,
                vec![
                    Song::new("Dil Dhadakne Do", "Dil Dhadakne Do Title Track"),
                    Song::new(
                        "Sooraj Ki Baahon Mein",
                        "Sooraj Ki Baahon Mein Zindagi Na Milegi Dobara",
                    ),
                ],
            ),
        ]);
        Self::new(playlists)
    }

    /// 心情对应的歌单（已处理别名）
    pub fn songs_for(&self, mood: Mood) -> &[Song] {
        self.playlists
            .get(&mood.playlist_mood())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// 随机选一首
    pub fn pick<R: Rng + ?Sized>(&self, mood: Mood, rng: &mut R) -> Result<&Song, MoodError> {
        self.songs_for(mood)
            .choose(rng)
            .ok_or(MoodError::EmptyPlaylist(mood))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_every_mood_has_songs() {
        let catalogue = MoodCatalogue::builtin();
        for mood in Mood::ALL {
            assert!(!catalogue.songs_for(mood).is_empty(), "{} has no songs", mood);
        }
    }

    #[test]
    fn test_aliased_moods_share_playlists() {
        let catalogue = MoodCatalogue::builtin();
        assert_eq!(
            catalogue.songs_for(Mood::Fear),
            catalogue.songs_for(Mood::Neutral)
        );
        assert_eq!(
            catalogue.songs_for(Mood::Disgust),
            catalogue.songs_for(Mood::Angry)
        );
    }

    #[test]
    fn test_pick_comes_from_playlist() {
        let catalogue = MoodCatalogue::builtin();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let song = catalogue.pick(Mood::Sad, &mut rng).unwrap();
            assert!(catalogue.songs_for(Mood::Sad).contains(song));
        }
    }

    #[test]
    fn test_pick_covers_playlist() {
        let catalogue = MoodCatalogue::builtin();
        let mut rng = StdRng::seed_from_u64(42);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(catalogue.pick(Mood::Happy, &mut rng).unwrap().name.clone());
        }
        assert_eq!(seen.len(), catalogue.songs_for(Mood::Happy).len());
    }

    #[test]
    fn test_pick_from_empty_playlist() {
        let catalogue = MoodCatalogue::new(HashMap::new());
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(
            catalogue.pick(Mood::Happy, &mut rng),
            Err(MoodError::EmptyPlaylist(Mood::Happy))
        );
    }
}
