use std::sync::mpsc;

use klogfmt::log04::ColorLogger;
use klogfmt::sink::InMemory;

#[test]
fn should_render_application_records() {
    let (sender, receiver) = mpsc::channel();
    let logger = ColorLogger::new(InMemory::<String>::new(sender)).with_target();

    let _ = log04::set_logger(Box::leak(Box::new(logger)));
    log04::set_max_level(log04::LevelFilter::Info);

    log04::info!(target: "auth", "login denied");
    let line = receiver.try_recv().expect("to have line");
    assert!(line.starts_with("\x1b[38;20m["), "Info records render grey");
    assert!(line.ends_with("\x1b[0m"));
    assert!(line.contains("] auth: login denied"));

    log04::debug!("should not show debug record");
    assert!(receiver.try_recv().is_err(), "Debug records are filtered out");

    log04::error!(target: "auth", "token expired");
    let line = receiver.try_recv().expect("to have line");
    assert!(line.starts_with("\x1b[31;20m"), "Error records render red");
    assert!(line.contains("] auth: token expired"));

    log04::warn!(target: "net", "link flapping");
    let line = receiver.try_recv().expect("to have line");
    assert!(line.starts_with("\x1b[33;20m"), "Warn records render yellow");
    assert!(line.contains("] net: link flapping"));
}
