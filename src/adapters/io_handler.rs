use crate::adapters::file::ScopedFile;
use crate::domain::model::{Line, LineSequence, OpenMode, ReadPolicy};
use crate::domain::ports::{ConfigProvider, FileHandle, IoHandler};
use crate::utils::error::Result;
use std::path::Path;

/// 持有輸入與輸出兩個檔案；釋放時兩者一併關閉
pub struct FileIoHandler<F: FileHandle = ScopedFile> {
    input: F,
    output: F,
    read_policy: ReadPolicy,
}

impl<F: FileHandle> FileIoHandler<F> {
    pub fn new(input: F, output: F) -> Self {
        Self {
            input,
            output,
            read_policy: ReadPolicy::default(),
        }
    }

    pub fn with_read_policy(mut self, read_policy: ReadPolicy) -> Self {
        self.read_policy = read_policy;
        self
    }

    pub fn read_policy(&self) -> ReadPolicy {
        self.read_policy
    }
}

impl FileIoHandler<ScopedFile> {
    pub fn open<P: AsRef<Path>, Q: AsRef<Path>>(input_path: P, output_path: Q) -> Result<Self> {
        let input = ScopedFile::open(input_path, OpenMode::Read)?;
        let output = ScopedFile::open(output_path, OpenMode::ReadWriteAppend)?;
        Ok(Self::new(input, output))
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Ok(Self::open(config.input_path(), config.output_path())?
            .with_read_policy(config.read_policy()))
    }

    /// 明確關閉兩個檔案並回報 flush 錯誤
    pub fn close(mut self) -> Result<()> {
        self.input.close()?;
        self.output.close()
    }
}

impl<F: FileHandle> IoHandler for FileIoHandler<F> {
    fn read_all_lines(&mut self) -> Result<LineSequence> {
        let mut lines = Vec::new();

        while self.input.is_open() {
            match self.read_policy {
                ReadPolicy::StopAtBlankLine => {
                    // 空行與檔尾無法區分，兩者都結束讀取
                    let line = self.input.read_line()?;
                    if line.is_empty() {
                        break;
                    }
                    lines.push(line);
                }
                ReadPolicy::UntilEof => match self.input.next_line()? {
                    Some(line) => lines.push(line),
                    None => break,
                },
            }
        }

        Ok(lines)
    }

    fn write_all_lines(&mut self, lines: &[Line]) -> Result<()> {
        for line in lines {
            self.output.write_line(line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MockFile {
        pending: Arc<Mutex<VecDeque<String>>>,
        written: Arc<Mutex<Vec<String>>>,
        reads: Arc<Mutex<usize>>,
        open: bool,
    }

    impl MockFile {
        fn with_lines(lines: &[&str]) -> Self {
            Self {
                pending: Arc::new(Mutex::new(lines.iter().map(|l| l.to_string()).collect())),
                open: true,
                ..Default::default()
            }
        }

        fn closed() -> Self {
            Self::default()
        }

        fn written(&self) -> Vec<String> {
            self.written.lock().unwrap().clone()
        }

        fn reads(&self) -> usize {
            *self.reads.lock().unwrap()
        }
    }

    impl FileHandle for MockFile {
        fn next_line(&mut self) -> Result<Option<Line>> {
            *self.reads.lock().unwrap() += 1;
            Ok(self.pending.lock().unwrap().pop_front())
        }

        fn write_line(&mut self, line: &str) -> Result<()> {
            self.written.lock().unwrap().push(line.to_string());
            Ok(())
        }

        fn is_open(&self) -> bool {
            self.open
        }
    }

    #[test]
    fn test_read_stops_at_first_blank_line() {
        let input = MockFile::with_lines(&["abc", "", "xyz"]);
        let handle = input.clone();
        let mut handler = FileIoHandler::new(input, MockFile::with_lines(&[]));
        assert_eq!(handler.read_policy(), ReadPolicy::StopAtBlankLine);

        assert_eq!(handler.read_all_lines().unwrap(), vec!["abc"]);
        // "xyz" 從未被讀取
        assert_eq!(handle.reads(), 2);
    }

    #[test]
    fn test_read_until_eof_keeps_blank_lines() {
        let input = MockFile::with_lines(&["abc", "", "xyz"]);
        let mut handler = FileIoHandler::new(input, MockFile::with_lines(&[]))
            .with_read_policy(ReadPolicy::UntilEof);
        assert_eq!(handler.read_policy(), ReadPolicy::UntilEof);

        assert_eq!(handler.read_all_lines().unwrap(), vec!["abc", "", "xyz"]);
    }

    #[test]
    fn test_read_from_closed_handle_is_empty() {
        let input = MockFile::closed();
        let handle = input.clone();
        let mut handler = FileIoHandler::new(input, MockFile::with_lines(&[]));

        assert!(handler.read_all_lines().unwrap().is_empty());
        assert_eq!(handle.reads(), 0);
    }

    #[test]
    fn test_write_preserves_order() {
        let output = MockFile::with_lines(&[]);
        let handle = output.clone();
        let mut handler = FileIoHandler::new(MockFile::with_lines(&[]), output);

        let lines = vec!["olleh".to_string(), "dlrow".to_string()];
        handler.write_all_lines(&lines).unwrap();
        assert_eq!(handle.written(), lines);
    }
}
