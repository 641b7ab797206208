use crate::domain::model::{Line, LineSequence, ReadPolicy};
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;

/// 以行為單位的檔案存取
pub trait FileHandle {
    /// 讀取下一行；到達檔尾時回傳 `None`
    fn next_line(&mut self) -> Result<Option<Line>>;

    /// 讀取下一行，檔尾與空行一樣回傳空字串
    fn read_line(&mut self) -> Result<Line> {
        Ok(self.next_line()?.unwrap_or_default())
    }

    fn write_line(&mut self, line: &str) -> Result<()>;

    fn is_open(&self) -> bool;
}

pub trait IoHandler {
    fn read_all_lines(&mut self) -> Result<LineSequence>;
    fn write_all_lines(&mut self, lines: &[Line]) -> Result<()>;
}

/// 就地修改呼叫端持有的字串序列
pub trait InPlaceManipulator {
    fn manipulate(&mut self);
    fn result(&self) -> LineSequence;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn read_policy(&self) -> ReadPolicy;
    fn worker_threads(&self) -> Option<usize>;
    fn monitor_enabled(&self) -> bool;
    fn log_format(&self) -> LogFormat;
}
