use brainfloat_runtime::{
    RoundingMode,
    array::ArrayFunctions,
    config::{GlobalConfig, signal::SignalStrategy},
};
use pretty_assertions::assert_eq;

// The global config can only be set once per process, so this file holds a single test.
#[test_log::test]
fn global_config_is_set_once() {
    let mut config = GlobalConfig::default();
    config.kernel.rounding = RoundingMode::TiesAway;
    config.signal.strategy = SignalStrategy::Silent;
    GlobalConfig::set(config);

    let loaded = GlobalConfig::get();
    assert_eq!(loaded.kernel.rounding, RoundingMode::TiesAway);

    let functions = ArrayFunctions::from_global_config();
    assert_eq!(functions.kernel().rounding(), RoundingMode::TiesAway);
    assert_eq!(functions.kernel().signal().counts(), None);

    let second = std::panic::catch_unwind(|| GlobalConfig::set(GlobalConfig::default()));
    assert!(second.is_err());
}
