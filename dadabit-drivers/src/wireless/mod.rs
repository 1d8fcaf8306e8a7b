//! Wireless module driver (I2C 0x69)
//!
//! Frames are built by [`dadabit_protocol::wireless`] and written in one
//! bus transaction. Queries read a fixed-size reply straight after the
//! write.

use dadabit_core::config::PortConfig;
use dadabit_core::state::TempHumiState;
use dadabit_hal::I2cBus;
use dadabit_protocol::wireless::{
    parse_connectivity, scrape_field_value, CloudFields, WirelessError, WirelessFrame,
    FIELD_REPLY_LEN, STATUS_REPLY_LEN,
};

/// Fixed I2C address
pub const WIFI_ADDR: u8 = 0x69;

/// Errors talking to the wireless module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WifiError<E> {
    /// Bus transaction failed
    Bus(E),
    /// Command could not be framed
    Frame(WirelessError),
}

impl<E> From<WirelessError> for WifiError<E> {
    fn from(e: WirelessError) -> Self {
        WifiError::Frame(e)
    }
}

/// Wireless module
///
/// Holds no state of its own; every call is one command (plus a reply read
/// for queries).
#[derive(Debug, Default)]
pub struct WifiModule;

impl WifiModule {
    pub const fn new() -> Self {
        Self
    }

    fn send<B: I2cBus>(&self, bus: &mut B, frame: &WirelessFrame) -> Result<(), WifiError<B::Error>> {
        bus.write(WIFI_ADDR, frame.as_bytes()).map_err(WifiError::Bus)
    }

    fn reply<B: I2cBus, const N: usize>(&self, bus: &mut B) -> Result<[u8; N], WifiError<B::Error>> {
        let mut buf = [0u8; N];
        bus.read(WIFI_ADDR, &mut buf).map_err(WifiError::Bus)?;
        Ok(buf)
    }

    /// Switch the module to access-point mode
    pub fn set_ap_mode<B: I2cBus>(&self, bus: &mut B) -> Result<(), WifiError<B::Error>> {
        self.send(bus, &WirelessFrame::access_point_mode())
    }

    /// Push temperature, humidity and rain level
    ///
    /// Fields for modules that `ports` does not list go out as `NO`.
    pub fn push_sensor_data<B: I2cBus>(
        &self,
        bus: &mut B,
        ports: &PortConfig,
        temp_humi: &TempHumiState,
        rain_level: u8,
    ) -> Result<(), WifiError<B::Error>> {
        let fitted = ports.has_temp_humi();
        let frame = WirelessFrame::sensor_push(
            fitted.then_some(temp_humi.temperature()),
            fitted.then_some(temp_humi.humidity()),
            ports.has_rainwater().then_some(rain_level),
        )?;
        self.send(bus, &frame)
    }

    /// Join a router (station mode only)
    pub fn connect_router<B: I2cBus>(
        &self,
        bus: &mut B,
        ssid: &str,
        password: &str,
    ) -> Result<(), WifiError<B::Error>> {
        self.send(bus, &WirelessFrame::router_credentials(ssid, password)?)
    }

    /// Ask whether the module is connected to a router
    ///
    /// A failed transfer reads as not connected.
    pub fn is_connected<B: I2cBus>(&self, bus: &mut B) -> bool {
        self.try_is_connected(bus).unwrap_or(false)
    }

    /// Connectivity query, reporting bus failures
    pub fn try_is_connected<B: I2cBus>(&self, bus: &mut B) -> Result<bool, WifiError<B::Error>> {
        self.send(bus, &WirelessFrame::connectivity_query())?;
        let reply: [u8; STATUS_REPLY_LEN] = self.reply(bus)?;
        Ok(parse_connectivity(&reply))
    }

    /// Upload up to eight fields to the cloud channel
    ///
    /// Returns false without touching the bus when there is nothing to
    /// send.
    pub fn upload_cloud<B: I2cBus>(
        &self,
        bus: &mut B,
        write_key: &str,
        fields: &CloudFields,
    ) -> Result<bool, WifiError<B::Error>> {
        match WirelessFrame::cloud_upload(write_key, fields)? {
            Some(frame) => {
                self.send(bus, &frame)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Fetch one field of a cloud channel
    ///
    /// Returns an empty string when the query cannot be framed or the
    /// transfer fails.
    pub fn query_cloud_field<B: I2cBus>(
        &self,
        bus: &mut B,
        channel_id: &str,
        read_key: &str,
        field_id: &str,
    ) -> heapless::String<3> {
        self.try_query_cloud_field(bus, channel_id, read_key, field_id)
            .unwrap_or_default()
    }

    /// Cloud field query, reporting bus and framing failures
    pub fn try_query_cloud_field<B: I2cBus>(
        &self,
        bus: &mut B,
        channel_id: &str,
        read_key: &str,
        field_id: &str,
    ) -> Result<heapless::String<3>, WifiError<B::Error>> {
        let frame = WirelessFrame::cloud_field_query(channel_id, read_key, field_id)?;
        self.send(bus, &frame)?;
        let reply: [u8; FIELD_REPLY_LEN] = self.reply(bus)?;
        Ok(scrape_field_value(&reply, field_id))
    }

    /// Read the module's 3-byte data buffer unparsed
    pub fn read_raw<B: I2cBus>(&self, bus: &mut B) -> Result<[u8; STATUS_REPLY_LEN], WifiError<B::Error>> {
        self.reply(bus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::{FakeBus, FakeError};
    use dadabit_core::config::{I2cPort, IoPort};
    use dadabit_protocol::wireless::CLOUD_FIELDS;

    fn readings(temperature: i16, humidity: i16) -> TempHumiState {
        let mut state = TempHumiState::new();
        state.update_temperature(temperature);
        state.update_humidity(humidity);
        state
    }

    #[test]
    fn test_set_ap_mode() {
        let mut bus = FakeBus::new();
        WifiModule::new().set_ap_mode(&mut bus).unwrap();
        assert_eq!(bus.writes_to(WIFI_ADDR), vec![b"L0$".to_vec()]);
    }

    #[test]
    fn test_push_sensor_data_all_fitted() {
        let mut bus = FakeBus::new();
        let ports = PortConfig {
            temp_humi: Some(I2cPort::Port4),
            rainwater: Some(IoPort::Port1),
            ..PortConfig::EMPTY
        };
        WifiModule::new()
            .push_sensor_data(&mut bus, &ports, &readings(23, 41), 87)
            .unwrap();
        assert_eq!(bus.writes_to(WIFI_ADDR), vec![b"A23|41|87$".to_vec()]);
    }

    #[test]
    fn test_push_sensor_data_unfitted_as_no() {
        let mut bus = FakeBus::new();
        WifiModule::new()
            .push_sensor_data(&mut bus, &PortConfig::EMPTY, &readings(23, 41), 87)
            .unwrap();
        assert_eq!(bus.writes_to(WIFI_ADDR), vec![b"ANO|NO|NO$".to_vec()]);

        let ports = PortConfig {
            rainwater: Some(IoPort::Port2),
            ..PortConfig::EMPTY
        };
        let mut bus = FakeBus::new();
        WifiModule::new()
            .push_sensor_data(&mut bus, &ports, &TempHumiState::new(), 0)
            .unwrap();
        assert_eq!(bus.writes_to(WIFI_ADDR), vec![b"ANO|NO|0$".to_vec()]);
    }

    #[test]
    fn test_connect_router() {
        let mut bus = FakeBus::new();
        WifiModule::new()
            .connect_router(&mut bus, "iot", "12345678")
            .unwrap();
        assert_eq!(bus.writes_to(WIFI_ADDR), vec![b"Iiot|||12345678$$$".to_vec()]);
    }

    #[test]
    fn test_is_connected() {
        let wifi = WifiModule::new();
        let mut bus = FakeBus::new();
        bus.push_response(WIFI_ADDR, &[0x4A, 1, 0]);
        bus.push_response(WIFI_ADDR, &[0x4A, 0, 0]);
        bus.push_response(WIFI_ADDR, &[0x4B, 1, 0]);

        assert!(wifi.is_connected(&mut bus));
        assert!(!wifi.is_connected(&mut bus));
        assert_eq!(wifi.try_is_connected(&mut bus), Ok(false));
        assert_eq!(bus.writes_to(WIFI_ADDR).len(), 3);
        assert!(bus.writes_to(WIFI_ADDR).iter().all(|w| w == b"J0$"));
    }

    #[test]
    fn test_is_connected_bus_error() {
        let wifi = WifiModule::new();
        let mut bus = FakeBus::new();
        // No scripted reply
        assert_eq!(
            wifi.try_is_connected(&mut bus),
            Err(WifiError::Bus(FakeError::Nack))
        );
        assert!(!wifi.is_connected(&mut bus));
    }

    #[test]
    fn test_upload_cloud() {
        let mut bus = FakeBus::new();
        let mut fields: CloudFields = [None; CLOUD_FIELDS];
        fields[0] = Some(5.0);
        fields[2] = Some(7.0);

        assert_eq!(WifiModule::new().upload_cloud(&mut bus, "X", &fields), Ok(true));
        assert_eq!(bus.writes_to(WIFI_ADDR), vec![b"KX|1|5|3|7$".to_vec()]);
    }

    #[test]
    fn test_upload_cloud_nothing_to_send() {
        let mut bus = FakeBus::new();
        let empty: CloudFields = [None; CLOUD_FIELDS];
        let wifi = WifiModule::new();

        assert_eq!(wifi.upload_cloud(&mut bus, "X", &empty), Ok(false));
        let mut fields = empty;
        fields[4] = Some(1.0);
        assert_eq!(wifi.upload_cloud(&mut bus, "", &fields), Ok(false));
        assert!(bus.log.is_empty());
    }

    #[test]
    fn test_query_cloud_field() {
        let mut bus = FakeBus::new();
        let mut reply = [0u8; FIELD_REPLY_LEN];
        let body = br#"{"entry_id":3,"field6":"215"}"#;
        reply[..body.len()].copy_from_slice(body);
        bus.push_response(WIFI_ADDR, &reply);

        let value = WifiModule::new().query_cloud_field(&mut bus, "12345", "READKEY", "6");
        assert_eq!(value.as_str(), "215");
        assert_eq!(bus.writes_to(WIFI_ADDR), vec![b"M12345|READKEY|6$".to_vec()]);
    }

    #[test]
    fn test_query_cloud_field_short_reply() {
        let mut bus = FakeBus::new();
        bus.push_response(WIFI_ADDR, b"field6:\"1\"");
        assert_eq!(
            WifiModule::new().try_query_cloud_field(&mut bus, "1", "K", "6"),
            Err(WifiError::Bus(FakeError::ShortRead))
        );
    }

    #[test]
    fn test_query_cloud_field_failure_reads_empty() {
        let wifi = WifiModule::new();

        let mut bus = FakeBus::new();
        bus.push_response(WIFI_ADDR, b"field6:\"1\"");
        assert_eq!(wifi.query_cloud_field(&mut bus, "1", "K", "6").as_str(), "");

        // Unframeable query never reaches the bus
        let mut bus = FakeBus::new();
        let channel = "9".repeat(200);
        assert_eq!(wifi.query_cloud_field(&mut bus, &channel, "K", "6").as_str(), "");
        assert!(bus.log.is_empty());
    }

    #[test]
    fn test_frame_error_skips_bus() {
        let mut bus = FakeBus::new();
        let ssid = "s".repeat(200);
        assert_eq!(
            WifiModule::new().connect_router(&mut bus, &ssid, "pw"),
            Err(WifiError::Frame(WirelessError::FrameTooLong))
        );
        assert!(bus.log.is_empty());
    }

    #[test]
    fn test_read_raw() {
        let mut bus = FakeBus::new();
        bus.push_response(WIFI_ADDR, &[1, 2, 3]);
        assert_eq!(WifiModule::new().read_raw(&mut bus), Ok([1, 2, 3]));
        assert!(bus.writes_to(WIFI_ADDR).is_empty());
    }
}
