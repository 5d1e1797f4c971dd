use multi_logger::{Level, MultiLoggerError, LEVELS};

#[test]
fn test_tokens_and_display() {
    assert_eq!(Level::Emergency.as_str(), "emergency");
    assert_eq!(Level::Warning.to_string(), "warning");
    for level in LEVELS {
        assert_eq!(level.as_str().parse::<Level>().unwrap(), level);
    }
}

#[test]
fn test_parse_is_case_insensitive() {
    assert_eq!("NOTICE".parse::<Level>().unwrap(), Level::Notice);
    assert_eq!("Debug".parse::<Level>().unwrap(), Level::Debug);

    let err = "verbose".parse::<Level>().unwrap_err();
    assert!(matches!(err, MultiLoggerError::ParseLevel(ref s) if s == "verbose"));
}

#[test]
fn test_severity_order() {
    assert!(Level::Emergency < Level::Alert);
    assert!(Level::Error < Level::Warning);
    assert!(Level::Info < Level::Debug);
}

#[test]
fn test_coarsening_to_log_levels() {
    assert_eq!(Level::Emergency.to_log_level(), log::Level::Error);
    assert_eq!(Level::Alert.to_log_level(), log::Level::Error);
    assert_eq!(Level::Critical.to_log_level(), log::Level::Error);
    assert_eq!(Level::Error.to_log_level(), log::Level::Error);
    assert_eq!(Level::Warning.to_log_level(), log::Level::Warn);
    assert_eq!(Level::Notice.to_log_level(), log::Level::Info);
    assert_eq!(Level::Info.to_log_level(), log::Level::Info);
    assert_eq!(Level::Debug.to_log_level(), log::Level::Debug);
}
