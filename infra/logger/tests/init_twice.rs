use site_logger::{LevelFilter, Logger, LoggerError};

#[test]
fn init_twice_returns_subscriber_error() {
    let logger = Logger::builder()
        .name("site-init-twice")
        .level(LevelFilter::WARN)
        .init()
        .expect("first init should succeed");
    assert!(logger.guard().is_none(), "console-only logger should not create a file guard");

    let err = Logger::builder()
        .name("site-init-twice-second")
        .init()
        .expect_err("second init should fail");

    assert!(matches!(err, LoggerError::Subscriber { .. }), "expected subscriber error, got {err}");
}
