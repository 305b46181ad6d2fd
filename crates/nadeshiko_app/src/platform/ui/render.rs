use std::time::Duration;

use chrono::NaiveTime;
use nadeshiko_core::PanelViewModel;

use super::constants::*;

/// Front-end details the controller does not track.
#[derive(Debug, Clone, Default)]
pub struct StatusInfo {
    pub active_path: Option<String>,
    pub debounce: Duration,
    pub last_updated: Option<NaiveTime>,
}

/// Text for each region of the panel, ready to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub title: &'static str,
    pub controls: String,
    pub body: String,
    pub status: String,
    pub busy: bool,
}

pub fn render(view: &PanelViewModel, info: &StatusInfo) -> Screen {
    let checkbox = if view.auto_update.is_on() {
        CHECKBOX_ON
    } else {
        CHECKBOX_OFF
    };
    let controls = format!(
        "{}   [a] {} 自動更新（{}）   {}   {}",
        LABEL_UPDATE_NOW,
        checkbox,
        delay_label(info.debounce),
        LABEL_NEXT_FILE,
        LABEL_QUIT
    );

    let activity = if view.translating {
        "変換中"
    } else if view.timer_pending {
        "更新待ち"
    } else {
        "待機中"
    };
    let file = info.active_path.as_deref().unwrap_or("（なし）");
    let updated = info
        .last_updated
        .map(|time| time.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string());

    Screen {
        title: TITLE,
        controls,
        body: view.content.clone(),
        status: format!("ファイル: {} | 状態: {} | 最終更新: {}", file, activity, updated),
        busy: view.translating || view.timer_pending,
    }
}

fn delay_label(delay: Duration) -> String {
    let millis = delay.as_millis();
    if millis % 1000 == 0 {
        format!("{}秒後", millis / 1000)
    } else {
        format!("{}ミリ秒後", millis)
    }
}
