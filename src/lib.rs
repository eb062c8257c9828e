//! Line position classifier for the Cytron Maker Line sensor.
//!
//! The Maker Line reports where a line sits under its five sensors either as
//! one analog voltage or as five digital outputs. [`MakerLine`] reads the
//! configured output on every query and classifies it into a
//! [`LinePosition`].
//!
//! ```
//! use makerline::{Config, Interface, LinePosition, MakerLine};
//!
//! struct Fixed(u16);
//!
//! impl Interface for Fixed {
//!     type AnalogChannel = u8;
//!     type DigitalChannel = u8;
//!     type Error = core::convert::Infallible;
//!
//!     fn read_analog(&mut self, _channel: &u8) -> Result<u16, Self::Error> {
//!         Ok(self.0)
//!     }
//!
//!     fn read_digital(&mut self, _channel: &u8) -> Result<bool, Self::Error> {
//!         Ok(false)
//!     }
//! }
//!
//! let mut config = Config::new();
//! config.init_analog(1).unwrap();
//!
//! let mut line = MakerLine::new(Fixed(500), &config);
//! assert!(line.is_line_detected_on(LinePosition::Center));
//! assert!(!line.is_line_detected_on(LinePosition::Left));
//! ```

#![no_std]

pub mod analog;
pub mod config;
pub mod digital;
pub mod hal;
pub mod mode;
pub mod types;

pub use config::{AnalogConfig, Config, ConfigError, DigitalConfig};
pub use mode::{Mode, ModeError};
pub use types::{DigitalSample, LinePosition, RawSample, Resolution};

/// Maker Line classifier
pub struct MakerLine<'c, I: Interface> {
    bus: I,
    config: &'c Config<I::AnalogChannel, I::DigitalChannel>,
}

impl<'c, I: Interface> MakerLine<'c, I> {
    pub fn new(bus: I, config: &'c Config<I::AnalogChannel, I::DigitalChannel>) -> Self {
        Self { bus, config }
    }

    pub fn mode(&self) -> Mode {
        self.config.mode()
    }

    pub fn config(&self) -> &'c Config<I::AnalogChannel, I::DigitalChannel> {
        self.config
    }

    /// Gives the acquisition interface back.
    pub fn release(self) -> I {
        self.bus
    }

    /// Return true if the line is at `position` right now.
    ///
    /// Never fails: an unconfigured sensor, an ambiguous digital pattern and
    /// a failed acquisition all read as `false`.
    pub fn is_line_detected_on(&mut self, position: LinePosition) -> bool {
        match self.try_is_line_detected_on(position) {
            Ok(detected) => detected,
            Err(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("maker line: acquisition failed, reporting {} as not detected", position);
                false
            }
        }
    }

    /// Like [`is_line_detected_on`](Self::is_line_detected_on), but reports
    /// acquisition failures.
    pub fn try_is_line_detected_on(
        &mut self,
        position: LinePosition,
    ) -> Result<bool, Error<I::Error>> {
        Ok(match self.read_sample()? {
            Some(RawSample::Analog(value)) => analog::is_on(value, position),
            Some(RawSample::Digital(sample)) => digital::is_on(sample, position),
            None => false,
        })
    }

    /// Acquires a sample and classifies it.
    ///
    /// Returns `None` when unconfigured or when the digital pattern is
    /// ambiguous. An analog sample always classifies.
    pub fn position(&mut self) -> Result<Option<LinePosition>, Error<I::Error>> {
        Ok(match self.read_sample()? {
            Some(RawSample::Analog(value)) => Some(analog::classify(value)),
            Some(RawSample::Digital(sample)) => digital::classify(sample),
            None => None,
        })
    }

    /// Acquires a fresh sample from the configured outputs, or `None` when
    /// unconfigured.
    pub fn read_sample(&mut self) -> Result<Option<RawSample>, Error<I::Error>> {
        let config = self.config;
        Ok(match config {
            Config::Uninitialized => None,
            Config::Analog(analog) => {
                let raw = self.bus.read_analog(&analog.channel)?;
                let value = analog.resolution.to_10bit(raw);
                #[cfg(feature = "defmt")]
                defmt::trace!("maker line: analog raw {=u16}, scaled {=u16}", raw, value);
                Some(RawSample::Analog(value))
            }
            Config::Digital(digital) => {
                let [l, cl, c, cr, r] = digital.channels();
                let sample = DigitalSample::from_levels(
                    self.bus.read_digital(l)?,
                    self.bus.read_digital(cl)?,
                    self.bus.read_digital(c)?,
                    self.bus.read_digital(cr)?,
                    self.bus.read_digital(r)?,
                );
                #[cfg(feature = "defmt")]
                defmt::trace!("maker line: digital {}", sample);
                Some(RawSample::Digital(sample))
            }
        })
    }

    /// Get a 10-bit analog reading. Requires analog mode.
    pub fn analog_value(&mut self) -> Result<u16, Error<I::Error>> {
        self.mode().is_analog().map_err(Error::ModeError)?;
        match self.read_sample()? {
            Some(RawSample::Analog(value)) => Ok(value),
            _ => Err(Error::ModeError(ModeError {
                expected: Mode::Analog,
                actual: self.mode(),
            })),
        }
    }

    /// Get the digital pattern. Requires digital mode.
    pub fn digital_sample(&mut self) -> Result<DigitalSample, Error<I::Error>> {
        self.mode().is_digital().map_err(Error::ModeError)?;
        match self.read_sample()? {
            Some(RawSample::Digital(sample)) => Ok(sample),
            _ => Err(Error::ModeError(ModeError {
                expected: Mode::Digital,
                actual: self.mode(),
            })),
        }
    }
}

/// Raw-sample acquisition provided by the host.
///
/// Each call performs one blocking conversion or pin read.
pub trait Interface {
    type AnalogChannel;
    type DigitalChannel;
    type Error;

    /// Reads the analog channel at the ADC's native resolution.
    fn read_analog(&mut self, channel: &Self::AnalogChannel) -> Result<u16, Self::Error>;
    /// Reads a digital channel, `true` meaning the sensor sees the line.
    fn read_digital(&mut self, channel: &Self::DigitalChannel) -> Result<bool, Self::Error>;
}

impl<T: Interface> Interface for &mut T {
    type AnalogChannel = T::AnalogChannel;
    type DigitalChannel = T::DigitalChannel;
    type Error = T::Error;

    fn read_analog(&mut self, channel: &Self::AnalogChannel) -> Result<u16, Self::Error> {
        T::read_analog(self, channel)
    }

    fn read_digital(&mut self, channel: &Self::DigitalChannel) -> Result<bool, Self::Error> {
        T::read_digital(self, channel)
    }
}

#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<I> {
    InterfaceError(I),
    ModeError(ModeError),
}

impl<I> From<I> for Error<I> {
    fn from(t: I) -> Self {
        Error::InterfaceError(t)
    }
}

impl<I: core::fmt::Debug> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InterfaceError(e) => write!(f, "acquisition failed: {e:?}"),
            Error::ModeError(e) => write!(f, "{e}"),
        }
    }
}

impl<I: core::fmt::Debug> core::error::Error for Error<I> {}
