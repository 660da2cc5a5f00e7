use core::fmt::Write;
use heapless::String;

use crate::constants::VALUE_MAX;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    NotFinite,
    Format,
}

/// Logical channels the device exchanges with Adafruit IO.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feed {
    Temperature,
    Humidity,
    Current,
    Power,
    LedControl,
}

impl Feed {
    pub const ALL: [Feed; 5] = [
        Feed::Temperature,
        Feed::Humidity,
        Feed::Current,
        Feed::Power,
        Feed::LedControl,
    ];

    /// Key of the feed in cfg.toml (`[feeds]` table)
    pub const fn key(self) -> &'static str {
        match self {
            Feed::Temperature => "temperature",
            Feed::Humidity => "humidity",
            Feed::Current => "current",
            Feed::Power => "power",
            Feed::LedControl => "led_control",
        }
    }

    /// Commands flow from the service to the device; everything else is published telemetry.
    pub const fn is_command(self) -> bool {
        matches!(self, Feed::LedControl)
    }

    /// Decimal places used when a reading is reported back to a user
    pub const fn precision(self) -> usize {
        match self {
            Feed::Temperature | Feed::Humidity => 1,
            Feed::Current => 2,
            Feed::Power | Feed::LedControl => 0,
        }
    }

    /// Render a reading for a status report, rounded to [`Feed::precision`].
    pub fn format_value(self, value: f32) -> Result<String<VALUE_MAX>, Error> {
        if !value.is_finite() {
            return Err(Error::NotFinite);
        }

        let mut report: String<VALUE_MAX> = String::new();
        write!(report, "{:.*}", self.precision(), value).map_err(|_| Error::Format)?;
        Ok(report)
    }
}
