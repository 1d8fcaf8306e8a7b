//! Main controller task
//!
//! Owns the sensor bus, every driver and the sticky readings. Samples the
//! fitted sensors on a fixed cadence and periodically pushes the readings
//! to the wireless module.

use defmt::*;
use embassy_time::{Delay, Duration, Ticker};

use dadabit_core::color::RgbChannel;
use dadabit_core::config::DEFAULT_COLOR_CALIBRATION;
use dadabit_core::sensor::{LineColor, LineSensor};
use dadabit_core::state::BoardReadings;
use dadabit_drivers::sensor::{distance_cm, line_follower, rain_level, Aht10, Apds9960};
use dadabit_drivers::wireless::WifiModule;

use crate::board::{BoardI2c, RainAdc};
use crate::channels::STATUS_REPORT;
use crate::config::{BOARD_PORTS, SAMPLE_INTERVAL_MS, WIFI_PUSH_EVERY};

/// Controller task - sensor sampling loop
#[embassy_executor::task]
pub async fn controller_task(mut bus: BoardI2c, mut rain: RainAdc) {
    info!("Controller task started");

    let ports = &BOARD_PORTS;
    let mut readings = BoardReadings::new();
    let mut temp_humi = Aht10::new(Delay);
    let mut color = Apds9960::new(Delay, DEFAULT_COLOR_CALIBRATION);
    let wifi = WifiModule::new();

    if ports.has_color() {
        match color.init(&mut bus) {
            Ok(id) => info!("Colour sensor ready, id={=u8:#x}", id),
            Err(e) => warn!("Colour sensor init failed: {:?}", e),
        }
    }

    if ports.has_wifi() {
        if let Err(e) = wifi.set_ap_mode(&mut bus) {
            warn!("Wireless module not responding: {:?}", e);
        }
    }

    let mut ticker = Ticker::every(Duration::from_millis(SAMPLE_INTERVAL_MS));
    let mut samples: u32 = 0;

    loop {
        ticker.next().await;
        samples = samples.wrapping_add(1);

        if let Some(report) = STATUS_REPORT.try_take() {
            readings.apply_status(&report);
            debug!("Battery {} mV", readings.battery_mv());
        }

        if ports.has_temp_humi() {
            match temp_humi.measure(&mut bus) {
                Ok(m) => {
                    if !m.ready || !m.settled {
                        debug!("Temp/humi not settled: {:?}", m);
                    }
                    m.apply(&mut readings.temp_humi);
                    debug!(
                        "Temp {} C, humidity {} %",
                        readings.temp_humi.temperature(),
                        readings.temp_humi.humidity()
                    );
                }
                Err(e) => warn!("Temp/humi read failed: {:?}", e),
            }
        }

        if ports.has_color() {
            match color.read_color(&mut bus) {
                Ok(c) => trace!(
                    "Colour {:?} (r={} g={} b={})",
                    c,
                    color.get_color(&mut bus, RgbChannel::Red),
                    color.get_color(&mut bus, RgbChannel::Green),
                    color.get_color(&mut bus, RgbChannel::Blue)
                ),
                Err(e) => warn!("Colour read failed: {:?}", e),
            }
        }

        if ports.has_line_follower() {
            trace!(
                "Line S1..S4 black: {} {} {} {}",
                line_follower(&mut bus, LineSensor::S1, LineColor::Black),
                line_follower(&mut bus, LineSensor::S2, LineColor::Black),
                line_follower(&mut bus, LineSensor::S3, LineColor::Black),
                line_follower(&mut bus, LineSensor::S4, LineColor::Black)
            );
        }

        if ports.has_ultrasonic() {
            trace!("Distance {} cm", distance_cm(&mut bus));
        }

        let rain_value = if ports.has_rainwater() {
            rain_level(&mut rain)
        } else {
            0
        };

        if ports.has_wifi() && samples % WIFI_PUSH_EVERY == 0 {
            match wifi.try_is_connected(&mut bus) {
                Ok(connected) => debug!("Wireless connected: {}", connected),
                Err(e) => warn!("Wireless status query failed: {:?}", e),
            }
            if let Err(e) =
                wifi.push_sensor_data(&mut bus, ports, &readings.temp_humi, rain_value)
            {
                warn!("Sensor push failed: {:?}", e);
            }
        }
    }
}
