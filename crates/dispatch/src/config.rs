//! Command line and environment configuration.
//!
//! Every flag can also come from a `VT52_*` environment variable; an explicit
//! flag wins over the environment.

use std::time::Duration;

use clap::{Parser, ValueEnum};
use vt52_core::normalize_word;
use vt52_engine::GameOptions;
use vt52_transport::SerialSettings;
use vt52_types::{
    Pacing, DEFAULT_BAUDRATE, DEFAULT_HOST, DEFAULT_SEND_DELAY_MS, DEFAULT_SERIAL_PORT,
    DEFAULT_TELNET_PORT, SERIAL_READ_TIMEOUT_MS,
};

use crate::error::DispatchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// One session over a serial line.
    Serial,
    /// TCP server, one session per connection.
    Telnet,
}

/// Serve a VT52 terminal over a serial line or telnet.
#[derive(Parser, Debug, Clone)]
#[command(name = "vt52-terminal", version)]
pub struct Cli {
    /// Connection mode
    #[arg(long, value_enum, env = "VT52_MODE", default_value = "serial")]
    pub mode: Mode,

    /// Serial device, or TCP port number in telnet mode
    #[arg(long, env = "VT52_PORT", default_value = DEFAULT_SERIAL_PORT)]
    pub port: String,

    /// Serial line speed
    #[arg(long, env = "VT52_BAUDRATE", default_value_t = DEFAULT_BAUDRATE)]
    pub baudrate: u32,

    /// Address to listen on in telnet mode
    #[arg(long, env = "VT52_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Delay after every send, in milliseconds
    #[arg(
        long,
        env = "VT52_SEND_DELAY_MS",
        default_value_t = DEFAULT_SEND_DELAY_MS
    )]
    pub send_delay_ms: u64,

    /// Skip the scripted pauses between screens
    #[arg(long)]
    pub no_pauses: bool,

    /// Seconds running sessions may keep going after shutdown (0 aborts them)
    #[arg(long, env = "VT52_DRAIN_SECS", default_value_t = 0)]
    pub drain_secs: u64,

    /// Comma-separated target words for the game
    #[arg(long, env = "VT52_WORDS", value_delimiter = ',')]
    pub words: Vec<String>,

    /// Log filter (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Settings shared by every session of one run.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub pacing: Pacing,
    /// Validated, uppercased words. Empty selects the built-in list.
    pub words: Vec<String>,
}

impl SessionSettings {
    pub fn options(&self, seed: u32) -> GameOptions {
        GameOptions {
            pacing: self.pacing,
            words: self.words.clone(),
            seed,
            ..GameOptions::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// How long running sessions may continue after shutdown.
    pub drain_timeout: Duration,
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone)]
pub enum Endpoint {
    Serial(SerialSettings),
    Network(ServerConfig),
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub endpoint: Endpoint,
    pub session: SessionSettings,
}

impl Cli {
    pub fn resolve(&self) -> Result<RunConfig, DispatchError> {
        let pacing = Pacing {
            send_delay: Duration::from_millis(self.send_delay_ms),
            pauses: !self.no_pauses,
        };

        let words = self
            .words
            .iter()
            .map(|w| validate_word(w))
            .collect::<Result<Vec<_>, _>>()?;

        let endpoint = match self.mode {
            Mode::Serial => Endpoint::Serial(SerialSettings {
                path: self.port.clone(),
                baud_rate: self.baudrate,
                read_timeout: Duration::from_millis(SERIAL_READ_TIMEOUT_MS),
                send_delay: pacing.send_delay,
            }),
            Mode::Telnet => Endpoint::Network(ServerConfig {
                host: self.host.clone(),
                port: telnet_port(&self.port)?,
                drain_timeout: Duration::from_secs(self.drain_secs),
            }),
        };

        Ok(RunConfig {
            endpoint,
            session: SessionSettings { pacing, words },
        })
    }
}

/// The serial placeholder selects the default telnet port.
fn telnet_port(port: &str) -> Result<u16, DispatchError> {
    if port == DEFAULT_SERIAL_PORT {
        return Ok(DEFAULT_TELNET_PORT);
    }
    port.trim()
        .parse()
        .map_err(|_| DispatchError::InvalidPort(port.to_string()))
}

fn validate_word(word: &str) -> Result<String, DispatchError> {
    normalize_word(word).ok_or_else(|| DispatchError::InvalidWord(word.to_string()))
}
