use klogfmt::syslog::{DisplayLevel, Priority, Severity};

#[test]
fn should_mask_severity_from_priority() {
    for priority in 0..4096u32 {
        let severity = Severity::from_priority(priority);
        assert_eq!(severity as u32, priority & 7);
    }

    //mask keeps severity in range regardless of magnitude
    assert_eq!(Severity::from_priority(u32::MAX) as u32, 7);
    assert_eq!(Severity::from_priority(2_147_483_647) as u32, 7);
    assert_eq!(Severity::from_priority(2_147_483_640) as u32, 0);
}

#[test]
fn should_decode_priority_parts() {
    let priority = Priority::new(27);
    assert_eq!(priority.severity(), Severity::LOG_ERR); // Daemon (3<<3) | Error (3) = 24 | 3 = 27
    assert_eq!(priority.facility(), 3);

    let priority = Priority::new(0);
    assert_eq!(priority.severity(), Severity::LOG_EMERG);
    assert_eq!(priority.facility(), 0);

    let priority = Priority::default();
    assert_eq!(priority.value(), 118);
    assert_eq!(priority.severity(), Severity::LOG_INFO);
    assert_eq!(priority.facility(), 14);
}

#[test]
fn should_map_every_severity_onto_display_level() {
    let expected = [
        (Severity::LOG_EMERG, DisplayLevel::Critical),
        (Severity::LOG_ALERT, DisplayLevel::Critical),
        (Severity::LOG_CRIT, DisplayLevel::Critical),
        (Severity::LOG_ERR, DisplayLevel::Error),
        (Severity::LOG_WARNING, DisplayLevel::Warn),
        (Severity::LOG_NOTICE, DisplayLevel::Info),
        (Severity::LOG_INFO, DisplayLevel::Info),
        (Severity::LOG_DEBUG, DisplayLevel::Debug),
    ];

    for (severity, level) in expected {
        assert_eq!(severity.display_level(), level);
    }
}
