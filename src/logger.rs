use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

lazy_static::lazy_static! {
    static ref LOGGER: Mutex<Option<File>> = Mutex::new(None);
}

/// Opens `path` for appending. Later calls keep the first file.
pub fn init(path: &Path) -> io::Result<()> {
    let mut logger = LOGGER.lock().unwrap_or_else(|e| e.into_inner());
    if logger.is_none() {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        *logger = Some(file);
    }
    Ok(())
}

/// Appends a timestamped line. No-op until `init` has succeeded.
pub fn log(message: &str) {
    let mut logger = LOGGER.lock().unwrap_or_else(|e| e.into_inner());
    if let Some(file) = logger.as_mut() {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let _ = writeln!(file, "[{}] {}", timestamp, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_without_init_is_noop() {
        log("nobody is listening");
    }

    #[test]
    fn test_logger_writes_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.log");
        init(&path).unwrap();
        log("Test log message");

        // Another test may have initialized the logger first; only check the
        // file when it is the one in use.
        if let Ok(contents) = std::fs::read_to_string(&path) {
            assert!(contents.contains("] Test log message"));
        }
    }
}
