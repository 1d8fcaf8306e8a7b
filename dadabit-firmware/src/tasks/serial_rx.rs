//! Companion serial receive task
//!
//! Feeds whatever bytes arrived into the framer and forwards decoded
//! status reports to the controller.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use dadabit_protocol::{Command, CommandFramer};

use crate::channels::STATUS_REPORT;

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 32;

/// Serial RX task - one framer poll per received chunk
#[embassy_executor::task]
pub async fn serial_rx_task(mut rx: BufferedUartRx) {
    info!("Serial RX task started");

    let mut framer: CommandFramer = CommandFramer::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) => {
                trace!("RX: {} bytes", n);

                match framer.poll(&buf[..n]) {
                    Some(Command::Status(report)) => {
                        debug!("Status report: {:?}", report);
                        STATUS_REPORT.signal(report);
                    }
                    None => {
                        // Partial frame or unrecognised command
                    }
                }
            }
            Err(e) => {
                warn!("UART read error: {:?}", e);
                // A partial frame may be missing bytes
                framer.reset();
            }
        }
    }
}
