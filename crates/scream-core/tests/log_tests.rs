// Checks the session's log lines through a capturing `log::Log`.
// One test per file: the logger is process-global.

use scream_core::{Command, Session};
use std::sync::Mutex;

struct Capture {
    lines: Mutex<Vec<(log::Level, String)>>,
}

impl log::Log for Capture {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture {
    lines: Mutex::new(Vec::new()),
};

fn take_lines() -> Vec<(log::Level, String)> {
    std::mem::take(&mut *CAPTURE.lines.lock().unwrap())
}

#[test]
fn reset_logs_at_debug_from_every_entry_point() {
    log::set_logger(&CAPTURE).unwrap();
    log::set_max_level(log::LevelFilter::Trace);

    let mut s = Session::default();
    take_lines();

    s.reset();
    let lines = take_lines();
    assert!(lines
        .iter()
        .any(|(lvl, msg)| *lvl == log::Level::Debug && msg == "[session] reset"));

    s.on_command(Command::Reset);
    let lines = take_lines();
    assert!(lines
        .iter()
        .any(|(lvl, msg)| *lvl == log::Level::Debug && msg == "[session] reset"));
    assert!(lines
        .iter()
        .any(|(lvl, msg)| *lvl == log::Level::Info && msg == "[keys] reset"));
}
