use crate::domain::model::{Line, LineSequence};
use crate::domain::ports::InPlaceManipulator;
use crate::utils::error::Result;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

/// 少於此行數時直接循序處理
const PARALLEL_THRESHOLD: usize = 64;

/// 以字元 (Unicode scalar value) 為單位反轉一行
pub fn reverse_line(line: &mut Line) {
    *line = line.chars().rev().collect();
}

/// 就地反轉呼叫端的每一行，行的順序不變
pub struct StringReverser<'a> {
    lines: &'a mut LineSequence,
    pool: Option<ThreadPool>,
}

impl<'a> StringReverser<'a> {
    pub fn new(lines: &'a mut LineSequence) -> Self {
        Self { lines, pool: None }
    }

    /// `None` 使用 rayon 的全域 thread pool
    pub fn with_worker_threads(mut self, worker_threads: Option<usize>) -> Result<Self> {
        self.pool = match worker_threads {
            Some(threads) => Some(
                ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|index| format!("reverser-{index}"))
                    .build()?,
            ),
            None => None,
        };
        Ok(self)
    }

    pub fn reverse(&mut self) {
        if self.lines.len() < PARALLEL_THRESHOLD {
            self.lines.iter_mut().for_each(reverse_line);
            return;
        }

        match &self.pool {
            Some(pool) => pool.install(|| self.lines.par_iter_mut().for_each(reverse_line)),
            None => self.lines.par_iter_mut().for_each(reverse_line),
        }
    }
}

impl InPlaceManipulator for StringReverser<'_> {
    fn manipulate(&mut self) {
        self.reverse();
    }

    fn result(&self) -> LineSequence {
        self.lines.clone()
    }
}
