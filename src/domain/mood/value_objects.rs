//! Mood Context - Value Objects

use serde::Serialize;

/// 表情识别可能给出的心情
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Angry,
    Neutral,
    Surprise,
    Fear,
    Disgust,
}

impl Mood {
    pub const ALL: [Mood; 7] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Angry,
        Mood::Neutral,
        Mood::Surprise,
        Mood::Fear,
        Mood::Disgust,
    ];

    /// 解析心情标签，大小写不敏感；未知标签按 neutral 处理
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "happy" => Mood::Happy,
            "sad" => Mood::Sad,
            "angry" => Mood::Angry,
            "surprise" | "surprised" => Mood::Surprise,
            "fear" | "fearful" => Mood::Fear,
            "disgust" | "disgusted" => Mood::Disgust,
            _ => Mood::Neutral,
        }
    }

    /// 实际使用哪个心情的歌单
    pub fn playlist_mood(self) -> Mood {
        match self {
            Mood::Fear => Mood::Neutral,
            Mood::Disgust => Mood::Angry,
            other => other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Angry => "angry",
            Mood::Neutral => "neutral",
            Mood::Surprise => "surprise",
            Mood::Fear => "fear",
            Mood::Disgust => "disgust",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
