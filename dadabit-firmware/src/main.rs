//! Dadabit - Robotics Expansion Board Firmware
//!
//! Firmware for an RP2040 controller on the Dadabit expansion board. Reads
//! the I2C sensors on a fixed cadence, decodes the companion controller's
//! status stream, and keeps the wireless module fed with readings.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::Pull;
use embassy_rp::i2c::{Config as I2cConfig, I2c};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use dadabit_hal::i2c::I2cConfig as BusSpeed;
use dadabit_hal::HalI2c;

use crate::board::RainAdc;

mod board;
mod channels;
mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Dadabit firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Companion controller link: UART0 on GP0 (TX) / GP1 (RX), 115200 8N1
    let tx_buf = TX_BUF.init([0u8; 64]);
    let rx_buf = RX_BUF.init([0u8; 256]);
    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, UartConfig::default());
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (_tx, rx) = uart.split();
    info!("UART initialized for companion link");

    // Shared sensor bus: I2C0 on GP5 (SCL) / GP4 (SDA)
    let bus_speed = BusSpeed::STANDARD;
    let mut i2c_config = I2cConfig::default();
    i2c_config.frequency = bus_speed.frequency;
    let bus = HalI2c::new(I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c_config));
    info!("I2C initialized: {:?}", bus_speed);

    // Rain-water sensor on ADC0 (GP26)
    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let rain = RainAdc::new(adc, Channel::new_pin(p.PIN_26, Pull::None));

    unwrap!(spawner.spawn(tasks::serial_rx_task(rx)));
    unwrap!(spawner.spawn(tasks::controller_task(bus, rain)));

    info!("All tasks spawned");
}
