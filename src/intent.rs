//! Voice-assistant intents and the feeds they touch.
//!
//! A companion skill backend resolves an intent name to an [`Intent`], reads
//! the feeds from [`Intent::feeds`] through the REST API and writes
//! [`Intent::led_command`] to the LED control feed.

use crate::api::LedCommand;
use crate::feed::Feed;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Temperature,
    Humidity,
    Current,
    Power,
    FullStatus,
    LedOn,
    LedOff,
    Stop,
    Cancel,
    Help,
}

impl Intent {
    /// Resolve an intent name as sent by the skill.
    pub fn from_name(name: &str) -> Option<Self> {
        let intent = match name {
            "TemperaturaIntent" => Intent::Temperature,
            "HumedadIntent" => Intent::Humidity,
            "CorrienteIntent" => Intent::Current,
            "PotenciaIntent" => Intent::Power,
            "EstadoCompletoIntent" => Intent::FullStatus,
            "EncenderLedIntent" => Intent::LedOn,
            "ApagarLedIntent" => Intent::LedOff,
            "AMAZON.StopIntent" => Intent::Stop,
            "AMAZON.CancelIntent" => Intent::Cancel,
            "AMAZON.HelpIntent" => Intent::Help,
            _ => {
                log::warn!("Unknown intent: {}", name);
                return None;
            }
        };
        Some(intent)
    }

    /// Telemetry feeds whose last value answers the intent.
    pub const fn feeds(self) -> &'static [Feed] {
        match self {
            Intent::Temperature => &[Feed::Temperature],
            Intent::Humidity => &[Feed::Humidity],
            Intent::Current => &[Feed::Current],
            Intent::Power => &[Feed::Power],
            Intent::FullStatus => &[Feed::Temperature, Feed::Humidity, Feed::Power],
            _ => &[],
        }
    }

    pub const fn led_command(self) -> Option<LedCommand> {
        match self {
            Intent::LedOn => Some(LedCommand::On),
            Intent::LedOff => Some(LedCommand::Off),
            _ => None,
        }
    }

    /// Help keeps the conversation open for a follow-up question.
    pub const fn ends_session(self) -> bool {
        !matches!(self, Intent::Help)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_reading_intents_map_to_one_feed() {
        let cases = [
            ("TemperaturaIntent", Feed::Temperature),
            ("HumedadIntent", Feed::Humidity),
            ("CorrienteIntent", Feed::Current),
            ("PotenciaIntent", Feed::Power),
        ];
        for (name, feed) in cases {
            let intent = Intent::from_name(name).unwrap();
            assert_eq!(intent.feeds(), [feed]);
            assert_eq!(intent.led_command(), None);
        }
    }

    #[test]
    fn full_status_reads_temperature_humidity_and_power() {
        let intent = Intent::from_name("EstadoCompletoIntent").unwrap();
        assert_eq!(
            intent.feeds(),
            [Feed::Temperature, Feed::Humidity, Feed::Power]
        );
    }

    #[test]
    fn led_intents_write_commands() {
        let on = Intent::from_name("EncenderLedIntent").unwrap();
        let off = Intent::from_name("ApagarLedIntent").unwrap();
        assert_eq!(on.led_command(), Some(LedCommand::On));
        assert_eq!(off.led_command(), Some(LedCommand::Off));
        assert!(on.feeds().is_empty());
    }

    #[test]
    fn only_help_keeps_session_open() {
        assert!(!Intent::Help.ends_session());
        assert!(Intent::Stop.ends_session());
        assert!(Intent::Cancel.ends_session());
        assert!(Intent::Temperature.ends_session());
    }

    #[test]
    fn unknown_intent_is_rejected() {
        assert_eq!(Intent::from_name("WeatherIntent"), None);
        assert_eq!(Intent::from_name(""), None);
    }
}
