//! Adafruit IO REST v2 addressing and the LED command payload.
//!
//! Companion services read the last value of a telemetry feed with
//! `GET {last_value_url}` and drive the LED with `POST {data_url}` carrying
//! [`value_body`], both authenticated with the [`AIO_KEY_HEADER`] header.

use core::fmt::Write;
use heapless::String;
use serde::Serialize;

use crate::config::Config;
use crate::constants::{BODY_MAX, URL_MAX};
use crate::feed::Feed;

/// Header carrying the Adafruit IO key
pub const AIO_KEY_HEADER: &str = "X-AIO-Key";

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    UrlTooLong,
    BodyTooLong,
    InvalidCommand,
}

fn feed_url(config: &Config, feed: Feed, suffix: &str) -> Result<String<URL_MAX>, Error> {
    let mut url: String<URL_MAX> = String::new();
    write!(
        url,
        "https://{}/api/v2/{}/feeds/{}/data{}",
        config.io_server,
        config.io_username,
        config.feed(feed),
        suffix
    )
    .map_err(|_| Error::UrlTooLong)?;
    Ok(url)
}

/// URL returning the most recent data point of a feed.
pub fn last_value_url(config: &Config, feed: Feed) -> Result<String<URL_MAX>, Error> {
    feed_url(config, feed, "/last")
}

/// URL accepting a new data point for a feed.
pub fn data_url(config: &Config, feed: Feed) -> Result<String<URL_MAX>, Error> {
    feed_url(config, feed, "")
}

#[derive(Serialize)]
struct DataPoint<'a> {
    value: &'a str,
}

/// JSON body `{"value":"..."}` for a data point.
pub fn value_body(value: &str) -> Result<String<BODY_MAX>, Error> {
    serde_json_core::ser::to_string(&DataPoint { value }).map_err(|_| {
        log::warn!("Data point does not fit in {} bytes", BODY_MAX);
        Error::BodyTooLong
    })
}

/// State requested on the LED control feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedCommand {
    On,
    Off,
}

impl LedCommand {
    pub const fn payload(self) -> &'static str {
        match self {
            LedCommand::On => "1",
            LedCommand::Off => "0",
        }
    }

    pub fn parse(payload: &[u8]) -> Result<Self, Error> {
        match payload.trim_ascii() {
            b"1" => Ok(LedCommand::On),
            b"0" => Ok(LedCommand::Off),
            other => {
                log::warn!("Unknown LED command payload: {:?}", other);
                Err(Error::InvalidCommand)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::sample;

    #[test]
    fn last_value_url_addresses_feed() {
        assert_eq!(
            last_value_url(&sample(), Feed::Temperature).unwrap(),
            "https://io.adafruit.com/api/v2/maria/feeds/temperatura-dht22/data/last"
        );
    }

    #[test]
    fn data_url_addresses_feed() {
        assert_eq!(
            data_url(&sample(), Feed::LedControl).unwrap(),
            "https://io.adafruit.com/api/v2/maria/feeds/esp32-led/data"
        );
    }

    #[test]
    fn body_wraps_and_escapes_value() {
        assert_eq!(value_body("1").unwrap(), r#"{"value":"1"}"#);
        assert_eq!(value_body(r#"a"b\c"#).unwrap(), r#"{"value":"a\"b\\c"}"#);
    }

    #[test]
    fn body_escapes_control_characters() {
        let body = value_body("a\nb\u{1}").unwrap();
        assert!(!body.chars().any(|c| c.is_control()));
        assert!(body.starts_with(r#"{"value":"a\nb\u00"#));
        assert!(body.ends_with(r#"01"}"#));
    }

    #[test]
    fn body_rejects_oversized_value() {
        let value = "9".repeat(BODY_MAX);
        assert_eq!(value_body(&value), Err(Error::BodyTooLong));
    }

    #[test]
    fn led_command_payloads() {
        assert_eq!(LedCommand::On.payload(), "1");
        assert_eq!(LedCommand::Off.payload(), "0");
        assert_eq!(LedCommand::parse(b"1"), Ok(LedCommand::On));
        assert_eq!(LedCommand::parse(b" 0\n"), Ok(LedCommand::Off));
    }

    #[test]
    fn led_command_rejects_unknown_payload() {
        assert_eq!(LedCommand::parse(b"ON"), Err(Error::InvalidCommand));
        assert_eq!(LedCommand::parse(b""), Err(Error::InvalidCommand));
        assert_eq!(LedCommand::parse(b"10"), Err(Error::InvalidCommand));
    }
}
