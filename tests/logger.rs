use jsondate::config::LoggingConfig;
use jsondate::logger;
use log::Log;
use std::fs;

#[test]
fn test_disabled_logging_is_noop() {
    let config = LoggingConfig::default();
    assert!(!config.enabled);
    assert!(!logger::init(&config).unwrap());
}

#[test]
fn test_log_file_path_under_app_dir() {
    // No data directory (e.g. HOME unset) is reported as an error, not a panic
    if let Ok(path) = logger::get_log_file_path() {
        assert!(path.ends_with("jsondate/jsondate.log"));
    }
}

#[test]
fn test_dispatch_writes_to_file() {
    let path = std::env::temp_dir().join(format!("jsondate_logger_test_{}.log", std::process::id()));
    let _ = fs::remove_file(&path);

    let (level, file_logger) = logger::build_dispatch(log::LevelFilter::Debug, &path).unwrap().into_log();
    assert_eq!(level, log::LevelFilter::Debug);

    file_logger.log(
        &log::Record::builder()
            .args(format_args!("decoded /Date(0)/"))
            .level(log::Level::Info)
            .target("jsondate")
            .build(),
    );
    file_logger.log(
        &log::Record::builder()
            .args(format_args!("too verbose"))
            .level(log::Level::Trace)
            .target("jsondate")
            .build(),
    );
    file_logger.flush();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("INFO jsondate] decoded /Date(0)/"));
    assert!(!content.contains("too verbose"));

    // Clean up test file
    let _ = fs::remove_file(&path);
}
