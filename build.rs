use std::{env, error::Error, fs, path::Path};

use serde::Deserialize;

#[allow(dead_code)]
mod constants {
    include!("src/constants.rs");
}

include!("config_file.rs");

const CONFIG_FILE: &str = "cfg.toml";
const EXAMPLE_CONFIG_FILE: &str = "cfg.toml.example";

fn main() -> Result<(), Box<dyn Error>> {
    // Tell Cargo to rerun if either toml or the shared defaults change
    println!("cargo:rerun-if-changed={CONFIG_FILE}");
    println!("cargo:rerun-if-changed={EXAMPLE_CONFIG_FILE}");
    println!("cargo:rerun-if-changed=config_file.rs");
    println!("cargo:rerun-if-changed=src/constants.rs");

    // Fresh checkouts only have the template
    let path = if Path::new(CONFIG_FILE).exists() {
        CONFIG_FILE
    } else {
        println!("cargo:warning={CONFIG_FILE} not found, building with {EXAMPLE_CONFIG_FILE}");
        EXAMPLE_CONFIG_FILE
    };

    // Read and parse
    let toml_str = fs::read_to_string(path)?;
    let raw = RawConfig::parse(&toml_str).map_err(|e| format!("{path}: {e}"))?;

    let fields = raw.fields();
    for (name, value) in fields {
        if value.is_empty() {
            println!("cargo:warning={path}: {name} is empty");
        } else if value.starts_with(constants::PLACEHOLDER_PREFIX) {
            println!("cargo:warning={path}: {name} still holds a placeholder value");
        }
    }

    let feeds = &fields[5..];
    for (i, (name, value)) in feeds.iter().enumerate() {
        if feeds[i + 1..].iter().any(|(_, other)| other == value) {
            println!("cargo:warning={path}: {name} = {value:?} is used by more than one feed");
        }
    }

    // Generate Rust code
    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("config.rs");
    let code = format!(
        r#"
        pub const CONFIG: Config = Config {{
            wifi_ssid: {ssid:?},
            wifi_password: Secret::new({psk:?}),
            io_username: {user:?},
            io_key: Secret::new({key:?}),
            io_server: {server:?},
            io_server_port: {port},
            feeds: Feeds {{
                temperature: {temperature:?},
                humidity: {humidity:?},
                current: {current:?},
                power: {power:?},
                led_control: {led:?},
            }},
        }};
    "#,
        ssid = raw.wifi_ssid,
        psk = raw.wifi_password,
        user = raw.io_username,
        key = raw.io_key,
        server = raw.io_server,
        port = raw.io_server_port,
        temperature = raw.feeds.temperature,
        humidity = raw.feeds.humidity,
        current = raw.feeds.current,
        power = raw.feeds.power,
        led = raw.feeds.led_control,
    );

    fs::write(dest_path, code)?;
    Ok(())
}
