/// Default Adafruit IO broker hostname
pub const DEFAULT_IO_SERVER: &str = "io.adafruit.com";
/// Default Adafruit IO broker port (plain MQTT)
pub const DEFAULT_IO_SERVER_PORT: u16 = 1883;

pub const DEFAULT_FEED_TEMPERATURE: &str = "temperatura-dht22";
pub const DEFAULT_FEED_HUMIDITY: &str = "humedad-dht22";
pub const DEFAULT_FEED_CURRENT: &str = "corriente-sct013";
pub const DEFAULT_FEED_POWER: &str = "potencia-sct013";
pub const DEFAULT_FEED_LED_CONTROL: &str = "esp32-led";

/// Every placeholder in cfg.toml.example starts with this prefix
pub const PLACEHOLDER_PREFIX: &str = "YOUR_";

/// Capacity of an MQTT topic ("{username}/feeds/{feed}")
pub const MQTT_TOPIC_MAX: usize = 128;
/// Capacity of a REST URL for a feed
pub const URL_MAX: usize = 256;
/// Capacity of a reading rendered for a report
pub const VALUE_MAX: usize = 32;
/// Capacity of a JSON request body
pub const BODY_MAX: usize = 64;
