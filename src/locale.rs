//! Bilingual text
//!
//! The game shows every label in Japanese, English, or both. The language
//! mode only affects what the renderer draws, never gameplay.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which text variant(s) to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageMode {
    #[default]
    Both,
    English,
    Native,
}

impl LanguageMode {
    /// Next mode in the cycle Both -> English -> Native -> Both
    pub fn next(self) -> Self {
        match self {
            LanguageMode::Both => LanguageMode::English,
            LanguageMode::English => LanguageMode::Native,
            LanguageMode::Native => LanguageMode::Both,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageMode::Both => "both",
            LanguageMode::English => "english",
            LanguageMode::Native => "native",
        }
    }
}

impl fmt::Display for LanguageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "both" => Ok(LanguageMode::Both),
            "english" | "en" => Ok(LanguageMode::English),
            "native" | "jp" | "ja" => Ok(LanguageMode::Native),
            other => Err(format!("unknown language mode '{other}' (expected both, english or native)")),
        }
    }
}

/// Every piece of text the game shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKey {
    Title,
    StartGame,
    Controls,
    Quit,
    Resume,
    Paused,
    StartHint,
    PauseHint,
    PlayHint,
    ControlsTitle,
    ControlsLeftPaddle,
    ControlsRightPaddle,
    ControlsPause,
    ControlsLanguage,
    ControlsReturn,
}

impl TextKey {
    /// (Japanese, English)
    fn variants(self) -> (&'static str, &'static str) {
        match self {
            TextKey::Title => ("マーティ・ポン", "Marty Pong"),
            TextKey::StartGame => ("ゲーム開始", "Start Game"),
            TextKey::Controls => ("操作", "Controls"),
            TextKey::Quit => ("終了", "Quit"),
            TextKey::Resume => ("再開", "Resume"),
            TextKey::Paused => ("一時停止", "PAUSED"),
            TextKey::StartHint => ("L: 言語切替", "L: Toggle language"),
            TextKey::PauseHint => ("P/Esc: 再開  L: 言語切替", "P/Esc: Resume  L: Toggle language"),
            TextKey::PlayHint => (
                "W/S: 左  ↑/↓: 右  P: 一時停止",
                "W/S: Left  Up/Down: Right  P: Pause",
            ),
            TextKey::ControlsTitle => ("操作説明", "CONTROLS"),
            TextKey::ControlsLeftPaddle => ("W / S : 左パドル 上下", "W / S : Left paddle"),
            TextKey::ControlsRightPaddle => ("↑ / ↓ : 右パドル 上下", "Up / Down : Right paddle"),
            TextKey::ControlsPause => ("P : 一時停止", "P : Pause"),
            TextKey::ControlsLanguage => ("L : 言語切替", "L : Toggle language"),
            TextKey::ControlsReturn => ("任意のキーで戻る", "Press any key to return"),
        }
    }
}

/// Holds the active language mode and resolves text for it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Localizer {
    mode: LanguageMode,
}

impl Localizer {
    pub fn new(mode: LanguageMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> LanguageMode {
        self.mode
    }

    /// Cycle to the next language mode
    pub fn toggle(&mut self) -> LanguageMode {
        self.mode = self.mode.next();
        log::info!("Language mode: {}", self.mode);
        self.mode
    }

    /// Text for `key` in the current mode
    pub fn text(&self, key: TextKey) -> String {
        text_in(self.mode, key)
    }
}

/// Text for `key` in `mode`
pub fn text_in(mode: LanguageMode, key: TextKey) -> String {
    let (native, english) = key.variants();
    match mode {
        LanguageMode::Both => format!("{native}  /  {english}"),
        LanguageMode::English => english.to_string(),
        LanguageMode::Native => native.to_string(),
    }
}
