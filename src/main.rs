//! FM Receiver Front Panel Main Application
//!
//! Entry point for the STM32G474-based FM receiver firmware.
//! Initializes hardware, spawns the edge and heartbeat tasks, then runs the
//! tuning controller loop.

#![no_std]
#![no_main]

use core::cell::RefCell;

use defmt::{error, info};
use embassy_executor::Spawner;
use embassy_stm32::exti::ExtiInput;
use embassy_stm32::gpio::{Input, Level, Output, Pull, Speed};
use embassy_stm32::i2c::I2c;
use embassy_stm32::mode::Blocking;
use embassy_stm32::time::Hertz;
use embassy_time::Delay;
use embedded_hal_bus::i2c::RefCellDevice;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use fm_panel::drivers::lcd::Lcd;
use fm_panel::drivers::tea5767::Tea5767;
use fm_panel::input::PanelInputs;
use fm_panel::prelude::*;
use fm_panel::radio::controller::TuningController;

/// Edge latches and status flags shared by every task
static INPUTS: StaticCell<PanelInputs> = StaticCell::new();

/// I2C1, shared by the tuner and the LCD backpack
static I2C_BUS: StaticCell<RefCell<I2c<'static, Blocking>>> = StaticCell::new();

/// Milliseconds since boot, wrapping
fn now_ms() -> u32 {
    Instant::now().as_millis() as u32
}

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("FM Panel Firmware v{}", env!("CARGO_PKG_VERSION"));

    // Initialize STM32G474 peripherals with default clock configuration
    let config = embassy_stm32::Config::default();
    let p = embassy_stm32::init(config);

    info!("Peripherals initialized");

    let led = Output::new(p.PA5, Level::Low, Speed::Low);

    // PB8 = SCL, PB9 = SDA; the TEA5767 is specified for standard mode
    let i2c = I2c::new_blocking(
        p.I2C1,
        p.PB8,
        p.PB9,
        Hertz(I2C_FREQUENCY_HZ),
        Default::default(),
    );
    let bus: &'static RefCell<_> = I2C_BUS.init(RefCell::new(i2c));

    info!("I2C1 initialized at {} Hz", I2C_FREQUENCY_HZ);

    let inputs: &'static PanelInputs = INPUTS.init(PanelInputs::default());

    let encoder_a = ExtiInput::new(p.PA0, p.EXTI0, Pull::Up);
    let encoder_b = Input::new(p.PA1, Pull::Up);
    let switch = ExtiInput::new(p.PA2, p.EXTI2, Pull::Down);

    spawner.must_spawn(heartbeat_task(led));
    spawner.must_spawn(encoder_task(encoder_a, encoder_b, inputs));
    spawner.must_spawn(button_task(switch, inputs));

    let tuner = Tea5767::new(RefCellDevice::new(bus));
    let mut lcd = Lcd::new(RefCellDevice::new(bus), Delay);
    if lcd.init().is_err() {
        error!("LCD controller init failed");
    }

    let mut controller = TuningController::new(&inputs.status, tuner, lcd, default_frequency())
        .with_settle_ms(SEARCH_SETTLE_MS);

    let mut started = start_panel(&mut controller);

    info!("Tasks spawned, entering tuning loop");

    loop {
        inputs.resolve(now_ms());

        if !started {
            started = start_panel(&mut controller);
        } else {
            match controller.step() {
                Ok(events) => {
                    for event in &events {
                        info!("{}", event);
                    }
                    if let Some(settle_ms) = controller.settle_after(&events) {
                        Timer::after_millis(u64::from(settle_ms)).await;
                    }
                }
                Err(e) => error!("tuning step failed: {}", e),
            }
        }

        Timer::after_millis(LOOP_PERIOD_MS).await;
    }
}

/// Run the panel start sequence, logging a failure
fn start_panel<T: Tuner, D: CharacterDisplay>(controller: &mut TuningController<'_, T, D>) -> bool {
    match controller.start() {
        Ok(()) => true,
        Err(e) => {
            error!("panel start failed: {}", e);
            false
        }
    }
}

/// Encoder A-channel edges; B is sampled at each rising edge of A
#[embassy_executor::task]
async fn encoder_task(mut a: ExtiInput<'static>, b: Input<'static>, inputs: &'static PanelInputs) {
    loop {
        a.wait_for_rising_edge().await;
        inputs.encoder.on_edge(now_ms(), b.is_high());
    }
}

/// Push button edges
#[embassy_executor::task]
async fn button_task(mut switch: ExtiInput<'static>, inputs: &'static PanelInputs) {
    loop {
        switch.wait_for_rising_edge().await;
        inputs.button.on_edge(now_ms());
    }
}

/// Heartbeat task - blinks LED to show system is running
#[embassy_executor::task]
async fn heartbeat_task(mut led: Output<'static>) {
    loop {
        led.set_high();
        Timer::after_millis(HEARTBEAT_ON_MS).await;
        led.set_low();
        Timer::after_millis(HEARTBEAT_OFF_MS).await;
    }
}
