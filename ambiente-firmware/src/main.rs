//! Ambiente - Environmental Control Front Panel Firmware
//!
//! Firmware binary for the BitDogLab RP2040 board. A two-axis joystick
//! stands in for temperature and humidity sensors; the panel classifies
//! the readings into fan and humidifier outputs, shows them on the OLED
//! and the 5x5 matrix, and lets the user edit thresholds and calibrate
//! the joystick.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::{I2C1, PIO0};
use embassy_rp::pio::{self, Pio};
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use embassy_rp::pwm::Pwm;
use embassy_time::{Delay, Timer};
use {defmt_rtt as _, panic_probe as _};

use ambiente_core::panel::{Devices, Panel};
use ambiente_drivers::display::{Ssd1306, SSD1306_ADDR};
use ambiente_drivers::matrix::LedMatrix;
use ambiente_drivers::output::{DualBuzzer, PwmIntensity};

use crate::hw::{Joystick, PioMatrixWriter};

mod board;
mod channels;
mod config;
mod hw;
mod tasks;

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => adc::InterruptHandler;
    I2C1_IRQ => i2c::InterruptHandler<I2C1>;
    PIO0_IRQ_0 => pio::InterruptHandler<PIO0>;
});

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Ambiente firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("RP2040 peripherals initialized");

    let config = config::load();

    // Joystick: VRx on ADC1, VRy on ADC0
    let adc = Adc::new(p.ADC, Irqs, adc::Config::default());
    let joystick = Joystick::new(
        adc,
        Channel::new_pin(p.PIN_27, Pull::None),
        Channel::new_pin(p.PIN_26, Pull::None),
    );

    // OLED on I2C1
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = board::I2C_FREQUENCY_HZ;
    let i2c = I2c::new_async(p.I2C1, p.PIN_15, p.PIN_14, Irqs, i2c_config);
    let mut display = Ssd1306::new(i2c, SSD1306_ADDR);
    match display.init().await {
        Ok(()) => info!("SSD1306 initialized"),
        Err(e) => warn!("SSD1306 init failed: {:?}, continuing without display", e),
    }

    // 5x5 WS2812 matrix on PIO0
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);
    let program = PioWs2812Program::new(&mut common);
    let ws2812 = PioWs2812::new(&mut common, sm0, p.DMA_CH0, p.PIN_7, &program);
    let matrix = LedMatrix::new(PioMatrixWriter::new(ws2812));

    // RGB LED: blue is the humidifier, red is the fan
    let rgb = Pwm::new_output_ab(p.PWM_SLICE6, p.PIN_12, p.PIN_13, board::intensity_pwm());
    let (Some(blue), Some(red)) = rgb.split() else {
        defmt::panic!("RGB LED PWM outputs unavailable");
    };

    // Buzzers
    let buzzer_a = Pwm::new_output_b(
        p.PWM_SLICE2,
        p.PIN_21,
        board::buzzer_pwm(board::BUZZER_A_TOP),
    );
    let buzzer_b = Pwm::new_output_a(
        p.PWM_SLICE5,
        p.PIN_10,
        board::buzzer_pwm(board::BUZZER_B_TOP),
    );
    let (Some(low), Some(high)) = (buzzer_a.split().1, buzzer_b.split().0) else {
        defmt::panic!("Buzzer PWM outputs unavailable");
    };

    // Buttons, all active low
    let confirm = Input::new(p.PIN_5, Pull::Up);
    let secondary = Input::new(p.PIN_6, Pull::Up);
    let menu = Input::new(p.PIN_22, Pull::Up);

    let panel = Panel::new(
        Devices {
            joystick,
            confirm,
            display,
            matrix,
            fan: PwmIntensity::new(red),
            humidifier: PwmIntensity::new(blue),
            tone: DualBuzzer::new(low, high, Delay),
            delay: Delay,
        },
        config,
    );

    info!("Spawning tasks...");

    spawner.spawn(tasks::event_log_task()).unwrap();
    spawner.spawn(tasks::buttons_task(menu, secondary)).unwrap();
    spawner.spawn(tasks::panel_task(panel)).unwrap();

    info!("All tasks spawned, panel running");

    // PIO common must outlive the WS2812 state machine
    loop {
        Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
