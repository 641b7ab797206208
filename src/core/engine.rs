use crate::core::reverser::StringReverser;
use crate::domain::ports::{InPlaceManipulator, IoHandler};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub lines_read: usize,
    pub lines_written: usize,
}

/// 讀取 → 反轉 → 寫入，單次執行，沒有重試
pub struct ReversalEngine<H: IoHandler> {
    handler: H,
    worker_threads: Option<usize>,
    monitor: SystemMonitor,
}

impl<H: IoHandler> ReversalEngine<H> {
    pub fn new(handler: H) -> Self {
        Self::new_with_monitoring(handler, false)
    }

    pub fn new_with_monitoring(handler: H, monitor_enabled: bool) -> Self {
        Self {
            handler,
            worker_threads: None,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn with_worker_threads(mut self, worker_threads: Option<usize>) -> Self {
        self.worker_threads = worker_threads;
        self
    }

    pub fn run(&mut self) -> Result<RunSummary> {
        tracing::info!("IO Handler initialised.");

        // Read
        let mut lines = self.handler.read_all_lines()?;
        let lines_read = lines.len();
        tracing::info!("Read {} lines from the input file.", lines_read);
        self.monitor.log_stats("Read");

        // Reverse
        let reversed = {
            let mut reverser =
                StringReverser::new(&mut lines).with_worker_threads(self.worker_threads)?;
            reverser.manipulate();
            reverser.result()
        };
        tracing::info!("Reversed the strings.");
        self.monitor.log_stats("Reverse");

        // Write
        self.handler.write_all_lines(&reversed)?;
        tracing::info!("Persisted the data into the file.");
        self.monitor.log_stats("Write");
        self.monitor.log_final_stats();

        Ok(RunSummary {
            lines_read,
            lines_written: reversed.len(),
        })
    }

    /// 取回 handler；drop 它即關閉兩個檔案
    pub fn into_handler(self) -> H {
        self.handler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Line, LineSequence};
    use crate::utils::error::ReverserError;
    use crate::utils::logger::capture::capture_logs;

    #[derive(Default)]
    struct MockHandler {
        input: LineSequence,
        output: LineSequence,
        fail_write: bool,
    }

    impl IoHandler for MockHandler {
        fn read_all_lines(&mut self) -> Result<LineSequence> {
            Ok(self.input.clone())
        }

        fn write_all_lines(&mut self, lines: &[Line]) -> Result<()> {
            if self.fail_write {
                return Err(ReverserError::Io(std::io::Error::other("disk full")));
            }
            self.output.extend_from_slice(lines);
            Ok(())
        }
    }

    #[test]
    fn test_run_reverses_and_persists_in_order() {
        let handler = MockHandler {
            input: vec!["hello".to_string(), "world".to_string()],
            ..Default::default()
        };

        let mut engine = ReversalEngine::new(handler);
        let summary = engine.run().unwrap();

        assert_eq!(
            summary,
            RunSummary {
                lines_read: 2,
                lines_written: 2
            }
        );
        assert_eq!(engine.into_handler().output, vec!["olleh", "dlrow"]);
    }

    #[test]
    fn test_run_logs_each_stage() {
        let handler = MockHandler {
            input: vec!["abc".to_string()],
            ..Default::default()
        };

        let (result, logs) = capture_logs(|| ReversalEngine::new(handler).run());
        assert!(result.is_ok());

        let stages = [
            "[INFO] IO Handler initialised.",
            "[INFO] Read 1 lines from the input file.",
            "[INFO] Reversed the strings.",
            "[INFO] Persisted the data into the file.",
        ];
        let mut cursor = 0;
        for stage in stages {
            let found = logs[cursor..].find(stage);
            assert!(found.is_some(), "missing '{stage}' in logs: {logs}");
            cursor += found.unwrap() + stage.len();
        }
    }

    #[test]
    fn test_write_failure_propagates() {
        let handler = MockHandler {
            input: vec!["abc".to_string()],
            fail_write: true,
            ..Default::default()
        };

        let err = ReversalEngine::new(handler).run().unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_empty_input_writes_nothing() {
        let mut engine = ReversalEngine::new(MockHandler::default()).with_worker_threads(Some(2));
        let summary = engine.run().unwrap();

        assert_eq!(summary.lines_written, 0);
        assert!(engine.into_handler().output.is_empty());
    }
}
