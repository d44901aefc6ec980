//! Types Module Tests
//!
//! Tests for domain types (Frequency, Direction, SignalLevel, TuningMode)
//! Run with: cargo test --target x86_64-unknown-linux-gnu --no-default-features --features std --test types_tests

use fm_panel::types::{Direction, Frequency, ReceiverReading, SignalLevel, TuningMode};

// =============================================================================
// Frequency Tests
// =============================================================================

#[test]
fn test_frequency_from_tenths_valid() {
    assert!(Frequency::from_tenths(880).is_some()); // Min
    assert!(Frequency::from_tenths(1080).is_some()); // Max
    assert!(Frequency::from_tenths(987).is_some());
}

#[test]
fn test_frequency_from_tenths_invalid() {
    assert!(Frequency::from_tenths(879).is_none());
    assert!(Frequency::from_tenths(1081).is_none());
    assert!(Frequency::from_tenths(0).is_none());
}

#[test]
fn test_frequency_clamped() {
    assert_eq!(Frequency::clamped(500), Frequency::MIN);
    assert_eq!(Frequency::clamped(2000), Frequency::MAX);
    assert_eq!(Frequency::clamped(1000).as_tenths(), 1000);
}

#[test]
fn test_frequency_from_hz_rounds_to_tenths() {
    assert_eq!(Frequency::from_hz(98_700_000).as_tenths(), 987);
    assert_eq!(Frequency::from_hz(98_749_999).as_tenths(), 987);
    // Halves round up
    assert_eq!(Frequency::from_hz(98_750_000).as_tenths(), 988);
    assert_eq!(Frequency::from_hz(107_950_000), Frequency::MAX);
}

#[test]
fn test_frequency_from_hz_clamps_to_band() {
    assert_eq!(Frequency::from_hz(87_500_000), Frequency::MIN);
    assert_eq!(Frequency::from_hz(0), Frequency::MIN);
    assert_eq!(Frequency::from_hz(108_100_000), Frequency::MAX);
    assert_eq!(Frequency::from_hz(u32::MAX), Frequency::MAX);
}

#[test]
fn test_frequency_conversions() {
    let freq = Frequency::from_tenths(987).unwrap();
    assert_eq!(freq.as_hz(), 98_700_000);
    assert_eq!(freq.whole_mhz(), 98);
    assert_eq!(freq.tenths_digit(), 7);
    assert_eq!(freq.offset_from_min(), 107);
    assert!((freq.as_mhz_f32() - 98.7).abs() < 0.001);
}

#[test]
fn test_frequency_display() {
    let freq = Frequency::from_tenths(1043).unwrap();
    assert_eq!(format!("{freq}"), "104.3");
    assert_eq!(format!("{}", Frequency::MIN), "88.0");
}

#[test]
fn test_frequency_step_within_band() {
    let freq = Frequency::from_tenths(1000).unwrap();
    assert_eq!(freq.step(Direction::Up).unwrap().as_tenths(), 1001);
    assert_eq!(freq.step(Direction::Down).unwrap().as_tenths(), 999);
}

#[test]
fn test_frequency_step_at_edges() {
    assert!(Frequency::MAX.step(Direction::Up).is_none());
    assert!(Frequency::MIN.step(Direction::Down).is_none());
    assert_eq!(Frequency::MAX.step(Direction::Down).unwrap().as_tenths(), 1079);
    assert_eq!(Frequency::MIN.step(Direction::Up).unwrap().as_tenths(), 881);
}

#[test]
fn test_frequency_band_edge() {
    assert_eq!(Frequency::band_edge(Direction::Up), Frequency::MAX);
    assert_eq!(Frequency::band_edge(Direction::Down), Frequency::MIN);
}

// =============================================================================
// Direction Tests
// =============================================================================

#[test]
fn test_direction_reverse() {
    assert_eq!(Direction::Up.reverse(), Direction::Down);
    assert_eq!(Direction::Down.reverse(), Direction::Up);
}

// =============================================================================
// SignalLevel Tests
// =============================================================================

#[test]
fn test_signal_level_saturates() {
    assert_eq!(SignalLevel::from_raw(15), SignalLevel::MAX);
    assert_eq!(SignalLevel::from_raw(200), SignalLevel::MAX);
    assert_eq!(SignalLevel::from_raw(7).as_raw(), 7);
}

#[test]
fn test_signal_level_percent() {
    assert_eq!(SignalLevel::from_raw(0).percent(), 0);
    assert_eq!(SignalLevel::from_raw(15).percent(), 100);
    // floor(level * 100 / 15)
    assert_eq!(SignalLevel::from_raw(1).percent(), 6);
    assert_eq!(SignalLevel::from_raw(11).percent(), 73);
    assert_eq!(SignalLevel::from_raw(14).percent(), 93);
}

#[test]
fn test_signal_level_percent_monotonic() {
    for raw in 0..15u8 {
        assert!(SignalLevel::from_raw(raw).percent() < SignalLevel::from_raw(raw + 1).percent());
    }
}

// =============================================================================
// TuningMode Tests
// =============================================================================

#[test]
fn test_tuning_mode_default_manual() {
    assert_eq!(TuningMode::default(), TuningMode::Manual);
}

#[test]
fn test_tuning_mode_indicator() {
    assert_eq!(TuningMode::from_auto(true), TuningMode::Auto);
    assert_eq!(TuningMode::from_auto(false), TuningMode::Manual);
    assert_eq!(TuningMode::Auto.indicator(), "A");
    assert_eq!(TuningMode::Manual.indicator(), "M");
}

// =============================================================================
// ReceiverReading Tests
// =============================================================================

#[test]
fn test_reading_frequency_rounded_onto_dial() {
    let reading = ReceiverReading {
        frequency_hz: 101_299_000,
        stereo: true,
        signal: SignalLevel::from_raw(9),
    };
    assert_eq!(reading.frequency().as_tenths(), 1013);
}
