/// Test helper to assemble raw SBD frames from raw (pre-scaled) field
/// counts, the way the flight encoder lays them out on the wire.
use lasp_sbd::core::FRAME_MIN_LEN;

#[derive(Clone)]
#[allow(dead_code)]
pub struct FrameBuilder {
    buf: [u8; FRAME_MIN_LEN],
}

#[allow(dead_code)]
impl FrameBuilder {
    /// Start from an all-zero frame of the minimum valid length.
    pub fn new() -> Self {
        Self {
            buf: [0u8; FRAME_MIN_LEN],
        }
    }

    pub fn modem_latitude_raw(mut self, raw: u32) -> Self {
        self.buf[0..4].copy_from_slice(&raw.to_be_bytes());
        self
    }

    pub fn modem_longitude_raw(mut self, raw: u32) -> Self {
        self.buf[4..8].copy_from_slice(&raw.to_be_bytes());
        self
    }

    pub fn modem_altitude(mut self, meters: u16) -> Self {
        self.buf[8..10].copy_from_slice(&meters.to_be_bytes());
        self
    }

    pub fn modem_fix_quality(mut self, quality: u8) -> Self {
        self.buf[10] = quality;
        self
    }

    pub fn sensor_latitude_raw(mut self, raw: u32) -> Self {
        self.buf[11..15].copy_from_slice(&raw.to_be_bytes());
        self
    }

    pub fn sensor_longitude_raw(mut self, raw: u32) -> Self {
        self.buf[15..19].copy_from_slice(&raw.to_be_bytes());
        self
    }

    pub fn internal_temp_raw(mut self, raw: u8) -> Self {
        self.buf[19] = raw;
        self
    }

    pub fn battery_voltage_raw(mut self, raw: u8) -> Self {
        self.buf[20] = raw;
        self
    }

    pub fn frame_number(mut self, counter: u16) -> Self {
        self.buf[21..23].copy_from_slice(&counter.to_be_bytes());
        self
    }

    /// Overwrite a single byte at an absolute offset.
    pub fn byte(mut self, offset: usize, value: u8) -> Self {
        self.buf[offset] = value;
        self
    }

    pub fn build(self) -> [u8; FRAME_MIN_LEN] {
        self.buf
    }
}
