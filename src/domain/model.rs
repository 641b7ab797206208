use serde::{Deserialize, Serialize};
use std::fmt;

/// 一行文字，不含換行符，可以是空字串
pub type Line = String;

/// 依輸入順序排列的行
pub type LineSequence = Vec<Line>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    Read,
    /// 可讀寫，寫入一律附加在檔尾，檔案不存在時建立
    ReadWriteAppend,
}

impl fmt::Display for OpenMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpenMode::Read => write!(f, "read"),
            OpenMode::ReadWriteAppend => write!(f, "read-write-append"),
        }
    }
}

/// 讀取輸入檔時何時停止
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadPolicy {
    /// 遇到第一個空行就停止，檔尾也視為空行
    #[default]
    StopAtBlankLine,
    /// 保留中間的空行，只在檔尾停止
    UntilEof,
}
