use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, Once};
use std::thread::{self, ThreadId};

use log::{Level, LevelFilter};

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// Fresh directory under the system temp dir, removed on drop.
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    pub fn new(label: &str) -> Self {
        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!(
            "build-utils-{}-{}-{}",
            label,
            std::process::id(),
            id
        ));
        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create an empty file, along with any missing parent directories.
    pub fn touch(&self, relative: &str) -> PathBuf {
        let file = self.path.join(relative);
        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&file, "").unwrap();
        file
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Records every log line so tests can assert on what was reported.
///
/// Records are tagged with the emitting thread, since the test harness runs
/// tests concurrently against the one global logger.
struct RecordingLogger {
    records: Mutex<Vec<(ThreadId, Level, String)>>,
}

static LOGGER: RecordingLogger = RecordingLogger {
    records: Mutex::new(Vec::new()),
};

static INSTALL: Once = Once::new();

impl log::Log for RecordingLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        self.records.lock().unwrap().push((
            thread::current().id(),
            record.level(),
            record.args().to_string(),
        ));
    }

    fn flush(&self) {}
}

/// Log lines emitted by the current thread since it was created.
pub struct LogCapture;

impl LogCapture {
    pub fn start() -> Self {
        INSTALL.call_once(|| {
            log::set_logger(&LOGGER).unwrap();
            log::set_max_level(LevelFilter::Trace);
        });
        // With a single test thread every test shares the main thread.
        let current = thread::current().id();
        LOGGER
            .records
            .lock()
            .unwrap()
            .retain(|(id, _, _)| *id != current);
        Self
    }

    pub fn records(&self) -> Vec<(Level, String)> {
        let current = thread::current().id();
        LOGGER
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|(id, _, _)| *id == current)
            .map(|(_, level, message)| (*level, message.clone()))
            .collect()
    }

    pub fn at_level(&self, level: Level) -> Vec<String> {
        self.records()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message)
            .collect()
    }
}
