use ratatui::crossterm::event::KeyCode;

pub const TITLE: &str = " Java→なでしこ 変換結果 ";
pub const LABEL_UPDATE_NOW: &str = "[u] 今すぐ変換";
pub const LABEL_NEXT_FILE: &str = "[Tab] 次のファイル";
pub const LABEL_QUIT: &str = "[q] 終了";
pub const CHECKBOX_ON: &str = "[x]";
pub const CHECKBOX_OFF: &str = "[ ]";

pub const KEY_UPDATE_NOW: KeyCode = KeyCode::Char('u');
pub const KEY_TOGGLE_AUTO: KeyCode = KeyCode::Char('a');
pub const KEY_NEXT_FILE: KeyCode = KeyCode::Tab;
pub const KEY_QUIT: KeyCode = KeyCode::Char('q');
