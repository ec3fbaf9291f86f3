use std::time::Instant;

use log::{set_boxed_logger, set_max_level, LevelFilter, Log, Metadata, Record};

struct TestLogger {
    start: Instant,
}

impl Log for TestLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target().starts_with("pokaz")
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let elapsed = self.start.elapsed().as_secs_f32();
        println!("{elapsed:.4} {} {}", record.level(), record.args())
    }

    fn flush(&self) {}
}

/// Installs a logger which prints crate records up to the given level.
/// Repeated installations keep the first logger.
pub fn setup_tests_logging(level: LevelFilter) {
    let logger = TestLogger {
        start: Instant::now(),
    };
    let _ = set_boxed_logger(Box::new(logger));
    set_max_level(level);
}
