use crate::domain::model::{Line, OpenMode};
use crate::domain::ports::FileHandle;
use crate::utils::error::{ReverserError, Result};
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

enum Stream {
    Reader(BufReader<File>),
    Writer(BufWriter<File>),
}

/// 離開作用域時自動 flush 並關閉的檔案
pub struct ScopedFile {
    path: PathBuf,
    mode: OpenMode,
    stream: Option<Stream>,
}

impl ScopedFile {
    pub fn open<P: AsRef<Path>>(path: P, mode: OpenMode) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let mut options = OpenOptions::new();
        match mode {
            OpenMode::Read => {
                options.read(true);
            }
            OpenMode::ReadWriteAppend => {
                options.read(true).append(true).create(true);
            }
        }

        let file = options
            .open(&path)
            .map_err(|source| ReverserError::FileOpen {
                path: path.clone(),
                mode,
                source,
            })?;

        let stream = match mode {
            OpenMode::Read => Stream::Reader(BufReader::new(file)),
            OpenMode::ReadWriteAppend => Stream::Writer(BufWriter::new(file)),
        };

        tracing::debug!("Opened {} for {}", path.display(), mode);
        Ok(Self {
            path,
            mode,
            stream: Some(stream),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mode(&self) -> OpenMode {
        self.mode
    }

    /// Flush 後釋放檔案；重複呼叫不會出錯
    pub fn close(&mut self) -> Result<()> {
        if let Some(Stream::Writer(mut writer)) = self.stream.take() {
            writer.flush()?;
        }
        Ok(())
    }
}

fn mode_mismatch(path: &Path, mode: OpenMode, operation: &'static str) -> ReverserError {
    ReverserError::ModeMismatch {
        path: path.to_path_buf(),
        mode,
        operation,
    }
}

impl FileHandle for ScopedFile {
    fn next_line(&mut self) -> Result<Option<Line>> {
        let reader = match self.stream.as_mut() {
            Some(Stream::Reader(reader)) => reader,
            Some(Stream::Writer(_)) => return Err(mode_mismatch(&self.path, self.mode, "read from")),
            // 已關閉的檔案等同檔尾
            None => return Ok(None),
        };

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        // 去掉 "\n"、"\r\n"，以及檔尾沒有換行時殘留的 "\r"
        if line.ends_with('\n') {
            line.pop();
        }
        if line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        let writer = match self.stream.as_mut() {
            Some(Stream::Writer(writer)) => writer,
            Some(Stream::Reader(_)) => return Err(mode_mismatch(&self.path, self.mode, "write to")),
            None => {
                return Err(ReverserError::Io(io::Error::new(
                    io::ErrorKind::NotConnected,
                    format!("{} is already closed", self.path.display()),
                )))
            }
        };

        writeln!(writer, "{}", line)?;
        tracing::debug!("Wrote {} to file: {}", line, self.path.display());
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.stream.is_some()
    }
}

impl Drop for ScopedFile {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            tracing::warn!("Failed to flush {} on close: {}", self.path.display(), e);
        }
    }
}
