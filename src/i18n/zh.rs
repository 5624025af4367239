//! Chinese translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    m.insert(Key::AppName, "Tomeo");

    // Playlist
    m.insert(Key::OpenFilesTitle, "打开文件");
    m.insert(Key::MediaFilesFilter, "媒体文件");
    m.insert(Key::AddFiles, "添加文件");
    m.insert(Key::RemoveSelected, "移除所选");
    m.insert(Key::ClearPlaylist, "清空列表");
    m.insert(Key::TotalVideos, "共 {} 个视频");
    m.insert(Key::PlaylistEmpty, "打开文件开始播放");

    // Transport
    m.insert(Key::Play, "播放");
    m.insert(Key::Pause, "暂停");
    m.insert(Key::Stop, "停止");
    m.insert(Key::Next, "下一个");
    m.insert(Key::Previous, "上一个");
    m.insert(Key::SkipForward, "快进 10 秒");
    m.insert(Key::SkipBackward, "快退 10 秒");
    m.insert(Key::Mute, "静音");
    m.insert(Key::Unmute, "取消静音");
    m.insert(Key::Fullscreen, "全屏");
    m.insert(Key::LibraryButton, "媒体库");
    m.insert(Key::NoTagSelected, "未选标签");

    // Status
    m.insert(Key::StatusLoading, "加载中...");
    m.insert(Key::StatusStalled, "媒体停滞");
    m.insert(Key::StatusBuffering, "缓冲 {}%");
    m.insert(Key::NoVideoOutput, "无视频输出");

    // Library
    m.insert(Key::TagCount, "{} 个标签");
    m.insert(Key::SearchPlaceholder, "搜索标题...");
    m.insert(Key::Search, "搜索");
    m.insert(Key::AddTag, "添加标签");
    m.insert(Key::AddVideo, "添加视频");
    m.insert(Key::AddVideosTitle, "添加视频");
    m.insert(Key::NewTagLabel, "新标签");
    m.insert(Key::EditTag, "重命名");
    m.insert(Key::RenameVideo, "重命名");
    m.insert(Key::RemoveVideo, "移除");
    m.insert(Key::Save, "保存");
    m.insert(Key::Cancel, "取消");
    m.insert(Key::NoVideos, "该标签下没有视频");
    m.insert(Key::SelectTagFirst, "选择一个标签查看视频");

    // Settings toggles
    m.insert(Key::ToggleTheme, "主题");
    m.insert(Key::ToggleLanguage, "English");

    m.insert(Key::DatabaseUnavailable, "媒体库不可用");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
