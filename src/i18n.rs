//! Internationalization (i18n) support for Tomeo
//!
//! Structure:
//! - i18n.rs: Core types (Language, Key, Locale) and translation lookup
//! - en.rs: English translations
//! - zh.rs: Chinese translations

mod en;
mod zh;

use std::collections::HashMap;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Chinese,
}

impl Language {
    /// Get language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Chinese => "zh",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "zh" => Language::Chinese,
            _ => Language::English,
        }
    }

    /// The other language, for the language toggle
    pub fn toggled(self) -> Self {
        match self {
            Language::English => Language::Chinese,
            Language::Chinese => Language::English,
        }
    }
}

/// Translation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    AppName,

    // Playlist
    OpenFilesTitle,
    MediaFilesFilter,
    AddFiles,
    RemoveSelected,
    ClearPlaylist,
    /// `{}` is the playlist length
    TotalVideos,
    PlaylistEmpty,

    // Transport
    Play,
    Pause,
    Stop,
    Next,
    Previous,
    SkipForward,
    SkipBackward,
    Mute,
    Unmute,
    Fullscreen,
    LibraryButton,
    NoTagSelected,

    // Status
    StatusLoading,
    StatusStalled,
    /// `{}` is the buffer percentage
    StatusBuffering,
    NoVideoOutput,

    // Library
    /// `{}` is the tag count
    TagCount,
    SearchPlaceholder,
    Search,
    AddTag,
    AddVideo,
    AddVideosTitle,
    NewTagLabel,
    EditTag,
    RenameVideo,
    RemoveVideo,
    Save,
    Cancel,
    NoVideos,
    SelectTagFirst,

    // Settings toggles
    ToggleTheme,
    ToggleLanguage,

    DatabaseUnavailable,
}

/// Get translation for a key in the specified language
pub fn t(lang: Language, key: Key) -> &'static str {
    let translations: &HashMap<Key, &'static str> = match lang {
        Language::English => en::translations(),
        Language::Chinese => zh::translations(),
    };

    translations.get(&key).copied().unwrap_or("???")
}

/// Localization context that can be passed around
#[derive(Debug, Clone, Copy, Default)]
pub struct Locale {
    pub language: Language,
}

impl Locale {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Get translation for a key
    pub fn get(&self, key: Key) -> &'static str {
        t(self.language, key)
    }

    /// Translation with its `{}` placeholder filled
    pub fn format(&self, key: Key, arg: impl std::fmt::Display) -> String {
        self.get(key).replace("{}", &arg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_are_filled() {
        let locale = Locale::new(Language::English);
        assert_eq!(locale.format(Key::TotalVideos, 3), "Total 3 videos");
        assert_eq!(locale.format(Key::StatusBuffering, 42), "Buffering 42%");
        assert_eq!(locale.format(Key::TagCount, 0), "0 tags");
    }

    #[test]
    fn status_texts_match_player_wording() {
        let locale = Locale::new(Language::English);
        assert_eq!(locale.get(Key::StatusLoading), "Loading...");
        assert_eq!(locale.get(Key::StatusStalled), "Media Stalled");
    }

    #[test]
    fn every_key_is_translated() {
        let keys = en::translations().keys().copied().collect::<Vec<_>>();
        for key in keys {
            assert_ne!(t(Language::Chinese, key), "???", "{:?}", key);
        }
        assert_eq!(en::translations().len(), zh::translations().len());
    }

    #[test]
    fn language_codes() {
        assert_eq!(Language::from_code("zh"), Language::Chinese);
        assert_eq!(Language::from_code("fr"), Language::English);
        assert_eq!(Language::Chinese.toggled().code(), "en");
    }
}
