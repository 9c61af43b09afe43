use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::feed::Field;

/// Command-line arguments for the plotting feed
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Serial device the counter is attached to
    #[arg(default_value = "/dev/ttyUSB0")]
    pub port: String,

    /// Baud rate for the port
    #[arg(short, long, default_value_t = 9600)]
    pub baud: u32,

    /// Port parity
    #[arg(long, value_enum, default_value_t = ParityArg::None)]
    pub parity: ParityArg,

    /// Stop bits for the port
    #[arg(short, long = "stop", value_enum, default_value_t = StopBitsArg::One)]
    pub stop_bits: StopBitsArg,

    /// Bits per character
    #[arg(long = "bits", value_enum, default_value_t = DataBitsArg::Eight)]
    pub data_bits: DataBitsArg,

    /// Give up after this many seconds without data (waits forever if unset)
    #[arg(short, long, value_parser = parse_timeout)]
    pub timeout: Option<Duration>,

    /// Reset the counter's window and peaks before reading
    #[arg(short = 'z', long, default_value_t = false)]
    pub reset: bool,

    /// Print counts per minute instead of counts per second
    #[arg(short, long, default_value_t = false)]
    pub minute: bool,

    /// Log every decoded frame and parse error to stderr
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParityArg {
    None,
    Even,
    Odd,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopBitsArg {
    #[value(name = "1")]
    One,
    #[value(name = "2")]
    Two,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataBitsArg {
    #[value(name = "5")]
    Five,
    #[value(name = "6")]
    Six,
    #[value(name = "7")]
    Seven,
    #[value(name = "8")]
    Eight,
}

impl From<ParityArg> for serialport::Parity {
    fn from(arg: ParityArg) -> Self {
        match arg {
            ParityArg::None => serialport::Parity::None,
            ParityArg::Even => serialport::Parity::Even,
            ParityArg::Odd => serialport::Parity::Odd,
        }
    }
}

impl From<StopBitsArg> for serialport::StopBits {
    fn from(arg: StopBitsArg) -> Self {
        match arg {
            StopBitsArg::One => serialport::StopBits::One,
            StopBitsArg::Two => serialport::StopBits::Two,
        }
    }
}

impl From<DataBitsArg> for serialport::DataBits {
    fn from(arg: DataBitsArg) -> Self {
        match arg {
            DataBitsArg::Five => serialport::DataBits::Five,
            DataBitsArg::Six => serialport::DataBits::Six,
            DataBitsArg::Seven => serialport::DataBits::Seven,
            DataBitsArg::Eight => serialport::DataBits::Eight,
        }
    }
}

fn parse_timeout(s: &str) -> Result<Duration, String> {
    let secs: f64 = s.parse().map_err(|e| format!("{e}"))?;
    Duration::try_from_secs_f64(secs).map_err(|e| format!("{e}"))
}

impl Cli {
    /// Which reading to print
    pub fn field(&self) -> Field {
        if self.minute {
            Field::PerMinute
        } else {
            Field::PerSecond
        }
    }

    /// Port settings from the line options
    pub fn port_builder(&self) -> serialport::SerialPortBuilder {
        serialport::new(self.port.as_str(), self.baud)
            .parity(self.parity.into())
            .stop_bits(self.stop_bits.into())
            .data_bits(self.data_bits.into())
            .timeout(self.timeout.unwrap_or(POLL_INTERVAL))
    }
}

/// Read timeout used when no idle limit is given
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);
