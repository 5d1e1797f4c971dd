use log::{Metadata, Record};
use multi_logger::{channel_name, context, handles::StdLogHandle, MultiLogger};
use std::sync::{Arc, Mutex};

struct Recorder {
    lines: Mutex<Vec<(String, log::Level, String)>>,
}

impl log::Log for Recorder {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }
    fn log(&self, record: &Record) {
        self.lines.lock().unwrap().push((
            record.target().to_string(),
            record.level(),
            record.args().to_string(),
        ));
    }
    fn flush(&self) {}
}

static RECORDER: Recorder = Recorder {
    lines: Mutex::new(Vec::new()),
};

#[test]
fn test_forwarding_to_the_log_facade() {
    log::set_logger(&RECORDER).unwrap();
    log::set_max_level(log::LevelFilter::Trace);

    let app = Arc::new(StdLogHandle::new(channel_name::APP));
    let audit = Arc::new(StdLogHandle::new(channel_name::AUDIT));
    let mut log = MultiLogger::new(app);
    log.add_channel(audit);

    log.info("service started", &context! {});
    log.select_channel(channel_name::AUDIT).unwrap();
    log.emergency("disk full", &context! { "pct" => 100 });

    let lines = RECORDER.lines.lock().unwrap();
    assert_eq!(lines.len(), 2);

    // channel name becomes the target, empty context adds nothing
    assert_eq!(lines[0].0, "APP");
    assert_eq!(lines[0].1, log::Level::Info);
    assert_eq!(lines[0].2, "service started");

    // emergency is coarsened to Error, context is appended as compact JSON
    assert_eq!(lines[1].0, "AUDIT");
    assert_eq!(lines[1].1, log::Level::Error);
    assert_eq!(lines[1].2, "disk full {\"pct\":100}");
}
