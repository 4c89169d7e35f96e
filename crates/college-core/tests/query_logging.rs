//! Checks the log records emitted by failed queries.
//!
//! Installs a process-wide logger, so this file holds a single test.

mod common;

use std::sync::Mutex;

use college_core::ErrorKind;
use log::{Level, LevelFilter, Log, Metadata, Record};

struct Capture {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for Capture {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        self.records
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture {
    records: Mutex::new(Vec::new()),
};

fn take() -> Vec<(Level, String)> {
    std::mem::take(&mut *CAPTURE.records.lock().unwrap())
}

#[test]
fn test_failed_query_logs_exactly_once() {
    log::set_logger(&CAPTURE).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let (_dir, _config, session) = common::provisioned_session();
    take();

    let err = session.select("SELEC name FROM students", &[]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Prepare);
    let records = take();
    assert_eq!(records.len(), 1, "{records:?}");
    assert_eq!(records[0].0, Level::Error);

    let err = session
        .execute("DELETE FROM students WHERE id = ?1", &[])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Execute);
    let records = take();
    assert_eq!(records.len(), 1, "{records:?}");
    assert_eq!(records[0].0, Level::Error);

    session.select("SELECT * FROM students", &[]).unwrap();
    assert!(take().iter().all(|(level, _)| *level > Level::Warn));
}
