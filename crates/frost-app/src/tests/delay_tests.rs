use std::time::Duration;

use frost_config::automation::AutomationConfig;

use crate::capture::iteration_delay;

#[test]
fn fixed_delay_is_exact() {
    let automation = AutomationConfig {
        delay_secs: 7,
        random_delay: false,
        ..Default::default()
    };
    assert_eq!(iteration_delay(&automation), Duration::from_secs(7));
}

#[test]
fn random_delay_stays_below_configured() {
    let automation = AutomationConfig {
        delay_secs: 10,
        random_delay: true,
        ..Default::default()
    };
    for _ in 0..100 {
        assert!(iteration_delay(&automation) < Duration::from_secs(10));
    }
}

#[test]
fn random_delay_of_zero_is_zero() {
    let automation = AutomationConfig {
        delay_secs: 0,
        random_delay: true,
        ..Default::default()
    };
    assert_eq!(iteration_delay(&automation), Duration::ZERO);
}
