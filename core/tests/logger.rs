use tron_core::{info, log::init_logger, warn};

#[test]
fn test_init_logger_with_files() {
    let dir = tempfile::tempdir().unwrap();
    let log_dir = dir.path().to_str().unwrap();

    init_logger(Some(log_dir), "info,tron_core=trace").unwrap();
    info!("logger installed in {}", log_dir);
    warn!("this line also lands in the error log");
    log::logger().flush();

    assert!(dir.path().join("tron-client.log").exists());
    assert!(dir.path().join("tron-client_err.log").exists());

    // the global logger can only be installed once
    assert!(init_logger(None, "info").is_err());
}
