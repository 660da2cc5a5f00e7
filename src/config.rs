use crate::constants::PLACEHOLDER_PREFIX;
use crate::feed::Feed;
pub use crate::secret::Secret;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    EmptyField(&'static str),
    Placeholder(&'static str),
    InvalidPort,
    DuplicateFeed(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    // Wi-Fi SSID to connect to
    pub wifi_ssid: &'static str,

    // Wi-Fi pre-shared key (password)
    pub wifi_password: Secret,

    // Adafruit IO account name (MQTT username and first topic level)
    pub io_username: &'static str,

    // Adafruit IO key (MQTT password and REST X-AIO-Key header)
    pub io_key: Secret,

    // Adafruit IO broker hostname
    pub io_server: &'static str,

    // Adafruit IO broker port (1883 plain, 8883 TLS)
    pub io_server_port: u16,

    // Feed names on Adafruit IO
    pub feeds: Feeds,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feeds {
    pub temperature: &'static str,
    pub humidity: &'static str,
    pub current: &'static str,
    pub power: &'static str,
    pub led_control: &'static str,
}

// config values are generated at compile time
include!(concat!(env!("OUT_DIR"), "/config.rs"));

pub const WIFI_SSID: &str = CONFIG.wifi_ssid;
pub const WIFI_PASSWORD: Secret = CONFIG.wifi_password;
pub const AIO_USERNAME: &str = CONFIG.io_username;
pub const AIO_KEY: Secret = CONFIG.io_key;
pub const AIO_SERVER: &str = CONFIG.io_server;
pub const AIO_SERVER_PORT: u16 = CONFIG.io_server_port;
pub const FEED_TEMPERATURE: &str = CONFIG.feeds.temperature;
pub const FEED_HUMIDITY: &str = CONFIG.feeds.humidity;
pub const FEED_CURRENT: &str = CONFIG.feeds.current;
pub const FEED_POWER: &str = CONFIG.feeds.power;
pub const FEED_LED_CONTROL: &str = CONFIG.feeds.led_control;

impl Feeds {
    pub const fn get(&self, feed: Feed) -> &'static str {
        match feed {
            Feed::Temperature => self.temperature,
            Feed::Humidity => self.humidity,
            Feed::Current => self.current,
            Feed::Power => self.power,
            Feed::LedControl => self.led_control,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Feed, &'static str)> + '_ {
        Feed::ALL.into_iter().map(move |feed| (feed, self.get(feed)))
    }
}

impl Config {
    pub const fn feed(&self, feed: Feed) -> &'static str {
        self.feeds.get(feed)
    }

    /// Check the values a connection setup relies on.
    ///
    /// Returns the first problem found: an empty field, a value left from
    /// cfg.toml.example, port 0, or two feeds sharing a name.
    pub fn validate(&self) -> Result<(), Error> {
        let fields = [
            ("wifi_ssid", self.wifi_ssid),
            ("wifi_password", self.wifi_password.expose()),
            ("io_username", self.io_username),
            ("io_key", self.io_key.expose()),
            ("io_server", self.io_server),
        ];
        let feeds = self.feeds.iter().map(|(feed, name)| (feed.key(), name));

        for (field, value) in fields.into_iter().chain(feeds) {
            if value.is_empty() {
                log::warn!("Configuration field {} is empty", field);
                return Err(Error::EmptyField(field));
            }
            if value.starts_with(PLACEHOLDER_PREFIX) {
                log::warn!("Configuration field {} still holds a placeholder", field);
                return Err(Error::Placeholder(field));
            }
        }

        if self.io_server_port == 0 {
            log::warn!("Configuration io_server_port is 0");
            return Err(Error::InvalidPort);
        }

        for (i, (feed, name)) in self.feeds.iter().enumerate() {
            if self.feeds.iter().skip(i + 1).any(|(_, other)| other == name) {
                log::warn!("Feed name {:?} is used more than once", name);
                return Err(Error::DuplicateFeed(feed.key()));
            }
        }

        Ok(())
    }

    /// Log the configuration with credentials redacted.
    pub fn log_summary(&self) {
        log::info!("WiFi SSID: {:?}, password: {}", self.wifi_ssid, self.wifi_password);
        log::info!(
            "Adafruit IO: {}@{}:{}, key: {}",
            self.io_username,
            self.io_server,
            self.io_server_port,
            self.io_key
        );
        for (feed, name) in self.feeds.iter() {
            log::info!("Feed {}: {}", feed.key(), name);
        }
    }
}
