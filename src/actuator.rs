//! Actuator output capability and the serial implementation.
//!
//! The microcontroller side expects one intensity per update as the decimal
//! text of the value followed by a newline (`"128\n"`); it parses digits,
//! applies complete lines, and ignores everything else.

use std::io::Write;
use std::time::Duration;

use thiserror::Error;

/// Errors from the serial actuator transport.
#[derive(Debug, Error)]
pub enum ActuatorError {
    /// The port could not be opened or configured.
    #[error("serial port error: {0}")]
    Serial(#[from] serialport::Error),
    /// A write or flush failed mid-session.
    #[error("serial write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Something that can receive an 8-bit feedback intensity.
pub trait Actuator {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Deliver one intensity update.
    fn set_intensity(&mut self, level: u8) -> Result<(), Self::Error>;
}

/// An [`Actuator`] speaking the newline-delimited decimal protocol over a
/// serial port.
///
/// # Example
/// ```no_run
/// use haptos::{Actuator, SerialActuator};
///
/// let mut actuator = SerialActuator::open("/dev/ttyUSB0", 9600)?;
/// actuator.set_intensity(128)?;
/// # Ok::<(), haptos::ActuatorError>(())
/// ```
pub struct SerialActuator {
    port: Box<dyn serialport::SerialPort>,
}

impl SerialActuator {
    /// Open a serial connection to the actuator's microcontroller.
    ///
    /// `port_name` is a platform port name (`"/dev/ttyUSB0"`, `"COM9"`).
    /// Fails fast when the port is unavailable; there is no retry.
    pub fn open(port_name: &str, baud_rate: u32) -> Result<Self, ActuatorError> {
        let port = serialport::new(port_name, baud_rate)
            .timeout(Duration::from_millis(100))
            .open()?;
        tracing::info!(port = port_name, baud_rate, "actuator port open");
        Ok(Self { port })
    }

    /// List serial port names visible on this machine.
    pub fn list_ports() -> Vec<String> {
        serialport::available_ports()
            .map(|ports| ports.into_iter().map(|p| p.port_name).collect())
            .unwrap_or_default()
    }
}

impl Actuator for SerialActuator {
    type Error = ActuatorError;

    fn set_intensity(&mut self, level: u8) -> Result<(), ActuatorError> {
        self.port.write_all(encode(level).as_bytes())?;
        self.port.flush()?;
        Ok(())
    }
}

/// One protocol frame: the decimal intensity terminated by a newline.
fn encode(level: u8) -> String {
    format!("{level}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_are_decimal_plus_newline() {
        assert_eq!(encode(0), "0\n");
        assert_eq!(encode(128), "128\n");
        assert_eq!(encode(255), "255\n");
        // No padding; the firmware accumulates digits until the newline.
        assert_eq!(encode(7), "7\n");
    }
}
