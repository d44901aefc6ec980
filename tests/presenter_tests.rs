//! Display Presenter Tests
//!
//! Tests the panel layout drawn onto a recording character display.
//! Run with: cargo test --target x86_64-unknown-linux-gnu --no-default-features --features std --test presenter_tests

mod common;

use common::{BusFault, FakeDisplay};
use fm_panel::types::{Frequency, ReceiverReading, SignalLevel, TuningMode};
use fm_panel::ui::glyphs;
use fm_panel::ui::presenter::{frequency_text, signal_text, DisplayPresenter};
use fm_panel::ui::scale::ScalePosition;

fn presenter() -> DisplayPresenter<FakeDisplay> {
    let mut presenter = DisplayPresenter::new(FakeDisplay::new());
    presenter.init().unwrap();
    presenter
}

fn reading(tenths: u16, stereo: bool, level: u8) -> ReceiverReading {
    ReceiverReading {
        frequency_hz: u32::from(tenths) * 100_000,
        stereo,
        signal: SignalLevel::from_raw(level),
    }
}

// =============================================================================
// Field Formatting Tests
// =============================================================================

#[test]
fn signal_text_right_padded() {
    assert_eq!(signal_text(SignalLevel::from_raw(15)).as_str(), "100%");
    assert_eq!(signal_text(SignalLevel::from_raw(11)).as_str(), "73% ");
    assert_eq!(signal_text(SignalLevel::from_raw(1)).as_str(), "6%  ");
    assert_eq!(signal_text(SignalLevel::from_raw(0)).as_str(), "0%  ");
}

#[test]
fn frequency_text_left_padded_below_100() {
    assert_eq!(frequency_text(Frequency::MIN).as_str(), " 88.0");
    assert_eq!(frequency_text(Frequency::from_tenths(987).unwrap()).as_str(), " 98.7");
    assert_eq!(frequency_text(Frequency::from_tenths(1000).unwrap()).as_str(), "100.0");
    assert_eq!(frequency_text(Frequency::MAX).as_str(), "108.0");
}

// =============================================================================
// Init Tests
// =============================================================================

#[test]
fn init_loads_all_glyphs() {
    let presenter = presenter();
    let display = presenter.display();
    for id in 0..8u8 {
        assert_eq!(display.glyphs[usize::from(id)], glyphs::bitmap(id));
    }
}

#[test]
fn init_blanks_status_and_draws_empty_dial() {
    let presenter = presenter();
    let display = presenter.display();
    assert_eq!(display.cells(0, 0, 16), b"                ");
    assert!(display.grid[1].iter().all(|&g| g == glyphs::SCALE));
    assert!(presenter.needle().is_none());
}

#[test]
fn init_propagates_bus_error() {
    let mut display = FakeDisplay::new();
    display.fail = true;
    let mut presenter = DisplayPresenter::new(display);
    assert_eq!(presenter.init(), Err(BusFault));
}

// =============================================================================
// Layout Tests
// =============================================================================

#[test]
fn mode_letter_in_first_cell() {
    let mut presenter = presenter();
    presenter.show_mode(TuningMode::Auto).unwrap();
    assert_eq!(presenter.display().grid[0][0], b'A');
    presenter.show_mode(TuningMode::Manual).unwrap();
    assert_eq!(presenter.display().grid[0][0], b'M');
}

#[test]
fn reading_fills_status_row() {
    let mut presenter = presenter();
    presenter.show_mode(TuningMode::Manual).unwrap();
    presenter.show_reading(&reading(987, true, 11)).unwrap();

    assert_eq!(presenter.display().status_line(), "M Y73%   98.7 67");
}

#[test]
fn mono_clears_stereo_symbol() {
    let mut presenter = presenter();
    presenter.show_reading(&reading(1000, true, 15)).unwrap();
    assert_eq!(
        presenter.display().cells(0, 14, 16),
        &[glyphs::STEREO_LEFT, glyphs::STEREO_RIGHT]
    );

    presenter.show_reading(&reading(1000, false, 15)).unwrap();
    assert_eq!(presenter.display().cells(0, 14, 16), b"  ");
}

#[test]
fn shorter_signal_overwrites_longer() {
    let mut presenter = presenter();
    presenter.show_signal(SignalLevel::from_raw(15)).unwrap();
    presenter.show_signal(SignalLevel::from_raw(0)).unwrap();
    assert_eq!(presenter.display().cells(0, 2, 7), b"Y0%  ");
}

#[test]
fn wide_frequency_fills_field() {
    let mut presenter = presenter();
    presenter.show_frequency(Frequency::MAX).unwrap();
    assert_eq!(presenter.display().cells(0, 8, 13), b"108.0");
    presenter.show_frequency(Frequency::MIN).unwrap();
    assert_eq!(presenter.display().cells(0, 8, 13), b" 88.0");
}

// =============================================================================
// Needle Tests
// =============================================================================

#[test]
fn reading_moves_needle() {
    let mut presenter = presenter();
    presenter.show_reading(&reading(980, false, 5)).unwrap();

    assert_eq!(presenter.needle(), Some(ScalePosition { major: 8, minor: 0 }));
    assert_eq!(presenter.display().needles(), [8]);
    assert_eq!(presenter.display().grid[1][8], glyphs::needle(0));
}

#[test]
fn one_cell_move_leaves_single_needle() {
    let mut presenter = presenter();
    presenter.show_needle(ScalePosition { major: 5, minor: 4 }).unwrap();
    presenter.show_needle(ScalePosition { major: 6, minor: 0 }).unwrap();
    assert_eq!(presenter.display().needles(), [6]);

    presenter.show_needle(ScalePosition { major: 5, minor: 1 }).unwrap();
    assert_eq!(presenter.display().needles(), [5]);
}

#[test]
fn needle_at_band_edges() {
    let mut presenter = presenter();
    presenter.show_reading(&reading(880, false, 0)).unwrap();
    assert_eq!(presenter.display().needles(), [0]);
    assert_eq!(presenter.display().grid[1][1], glyphs::SCALE);

    presenter.show_reading(&reading(1080, false, 0)).unwrap();
    assert_eq!(presenter.display().needles(), [15]);
    assert_eq!(presenter.display().grid[1][14], glyphs::SCALE);
}

#[test]
fn search_jump_blanks_old_needle() {
    let mut presenter = presenter();
    presenter.show_reading(&reading(900, false, 0)).unwrap();
    presenter.show_reading(&reading(1043, true, 9)).unwrap();

    let expected = ScalePosition::from_frequency(Frequency::from_tenths(1043).unwrap());
    assert_eq!(presenter.display().needles(), [usize::from(expected.major)]);
}
