use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use tracing::Level;

/// Destination for log output. The terminal is owned by the UI while it
/// runs, so logs go to a file or nowhere.
#[derive(Clone, Debug)]
pub enum LogSink {
    File(Arc<Mutex<File>>),
    Discard,
}

impl LogSink {
    pub fn file(path: &Path) -> io::Result<Self> {
        let file = File::options().create(true).append(true).open(path)?;
        Ok(LogSink::File(Arc::new(Mutex::new(file))))
    }
}

pub struct DelegatingWriter {
    sink: LogSink,
}

impl Write for DelegatingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &self.sink {
            LogSink::File(file) => file
                .lock()
                .map_err(|_| io::Error::other("log file lock poisoned"))?
                .write(buf),
            LogSink::Discard => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &self.sink {
            LogSink::File(file) => file
                .lock()
                .map_err(|_| io::Error::other("log file lock poisoned"))?
                .flush(),
            LogSink::Discard => Ok(()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SubscriberMakeWriter {
    sink: LogSink,
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for SubscriberMakeWriter {
    type Writer = DelegatingWriter;

    fn make_writer(&'a self) -> Self::Writer {
        DelegatingWriter {
            sink: self.sink.clone(),
        }
    }
}

/// Install the global tracing subscriber. Safe to call multiple times;
/// subsequent calls are no-ops.
pub fn init(sink: LogSink, level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(SubscriberMakeWriter { sink })
        .with_ansi(false)
        .with_target(false)
        .with_thread_names(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn file_sink_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame-wm.log");
        let sink = LogSink::file(&path).unwrap();
        let make = SubscriberMakeWriter { sink };
        let mut writer = tracing_subscriber::fmt::MakeWriter::make_writer(&make);
        writer.write_all(b"hello\n").unwrap();
        writer.flush().unwrap();

        let mut content = String::new();
        File::open(&path)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "hello\n");
    }

    #[test]
    fn discard_sink_accepts_everything() {
        let mut writer = DelegatingWriter {
            sink: LogSink::Discard,
        };
        assert_eq!(writer.write(b"ignored").unwrap(), 7);
    }

    #[test]
    fn init_twice_is_harmless() {
        init(LogSink::Discard, Level::DEBUG);
        init(LogSink::Discard, Level::INFO);
    }
}
