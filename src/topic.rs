use core::fmt::Write;
use heapless::String;

use crate::config::Config;
use crate::constants::MQTT_TOPIC_MAX;
use crate::feed::Feed;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    TopicTooLong,
}

/// Adafruit IO topic of a feed: `{username}/feeds/{feed}`.
pub fn feed_topic(config: &Config, feed: Feed) -> Result<String<MQTT_TOPIC_MAX>, Error> {
    let mut topic: String<MQTT_TOPIC_MAX> = String::new();
    write!(topic, "{}/feeds/{}", config.io_username, config.feed(feed))
        .map_err(|_| Error::TopicTooLong)?;
    Ok(topic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::sample;

    fn config(username: &'static str) -> Config {
        Config {
            io_username: username,
            ..sample()
        }
    }

    #[test]
    fn builds_topic_from_username_and_feed() {
        let config = config("maria");
        assert_eq!(
            feed_topic(&config, Feed::Temperature).unwrap(),
            "maria/feeds/temperatura-dht22"
        );
        assert_eq!(
            feed_topic(&config, Feed::LedControl).unwrap(),
            "maria/feeds/esp32-led"
        );
    }

    #[test]
    fn topics_are_distinct_per_feed() {
        let config = config("maria");
        for (i, a) in Feed::ALL.iter().enumerate() {
            for b in &Feed::ALL[i + 1..] {
                assert_ne!(feed_topic(&config, *a), feed_topic(&config, *b));
            }
        }
    }

    #[test]
    fn rejects_topic_over_capacity() {
        let long = "u".repeat(MQTT_TOPIC_MAX);
        let config = config(Box::leak(long.into_boxed_str()));
        assert_eq!(feed_topic(&config, Feed::Power), Err(Error::TopicTooLong));
    }
}
