// Shape of cfg.toml, shared by build.rs and the tests.
// Expects `constants` (src/constants.rs) and `serde::Deserialize` in scope.

#[derive(Deserialize)]
struct RawConfig {
    wifi_ssid: String,
    wifi_password: String,
    io_username: String,
    io_key: String,
    #[serde(default = "default_io_server")]
    io_server: String,
    #[serde(default = "default_io_server_port")]
    io_server_port: u16,
    #[serde(default)]
    feeds: RawFeeds,
}

#[derive(Deserialize)]
#[serde(default)]
struct RawFeeds {
    temperature: String,
    humidity: String,
    current: String,
    power: String,
    led_control: String,
}

impl Default for RawFeeds {
    fn default() -> Self {
        Self {
            temperature: constants::DEFAULT_FEED_TEMPERATURE.into(),
            humidity: constants::DEFAULT_FEED_HUMIDITY.into(),
            current: constants::DEFAULT_FEED_CURRENT.into(),
            power: constants::DEFAULT_FEED_POWER.into(),
            led_control: constants::DEFAULT_FEED_LED_CONTROL.into(),
        }
    }
}

fn default_io_server() -> String {
    constants::DEFAULT_IO_SERVER.into()
}

fn default_io_server_port() -> u16 {
    constants::DEFAULT_IO_SERVER_PORT
}

impl RawConfig {
    fn parse(toml_str: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let raw: RawConfig = toml::from_str(toml_str)?;
        if raw.io_server_port == 0 {
            return Err("io_server_port must be in 1..=65535".into());
        }
        Ok(raw)
    }

    /// String fields keyed as in cfg.toml; the last five are the feeds.
    fn fields(&self) -> [(&'static str, &str); 10] {
        [
            ("wifi_ssid", self.wifi_ssid.as_str()),
            ("wifi_password", self.wifi_password.as_str()),
            ("io_username", self.io_username.as_str()),
            ("io_key", self.io_key.as_str()),
            ("io_server", self.io_server.as_str()),
            ("feeds.temperature", self.feeds.temperature.as_str()),
            ("feeds.humidity", self.feeds.humidity.as_str()),
            ("feeds.current", self.feeds.current.as_str()),
            ("feeds.power", self.feeds.power.as_str()),
            ("feeds.led_control", self.feeds.led_control.as_str()),
        ]
    }
}
