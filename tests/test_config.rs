use graze::config::Config;

#[test]
fn test_config_trace_flag_from_env() {
    // Single test so the env mutations can't race each other.
    unsafe {
        std::env::remove_var("GRAZE_TRACE");
    }
    assert!(!Config::load().trace_rules);

    unsafe {
        std::env::set_var("GRAZE_TRACE", "1");
    }
    assert!(Config::load().trace_rules);

    unsafe {
        std::env::set_var("GRAZE_TRACE", "true");
    }
    assert!(Config::load().trace_rules);

    unsafe {
        std::env::set_var("GRAZE_TRACE", "0");
    }
    assert!(!Config::load().trace_rules);

    unsafe {
        std::env::remove_var("GRAZE_TRACE");
    }
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::load();
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1.trace_rules, cfg2.trace_rules);
}
