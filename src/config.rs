//! Acquisition configuration.
//!
//! Built once at start-up and then lent to [`MakerLine`](crate::MakerLine)
//! by shared reference.

use crate::mode::Mode;
use crate::types::Resolution;

/// Analog channel of the sensor.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnalogConfig<A> {
    pub channel: A,
    pub resolution: Resolution,
}

impl<A> AnalogConfig<A> {
    pub fn new(channel: A) -> Self {
        Self {
            channel,
            resolution: Resolution::default(),
        }
    }

    pub fn with_resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = resolution;
        self
    }
}

/// Digital channels of the sensor, one per physical position.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitalConfig<D> {
    pub far_left: D,
    pub left: D,
    pub center: D,
    pub right: D,
    pub far_right: D,
}

impl<D> DigitalConfig<D> {
    /// Maps the board's D1..D5 outputs onto physical positions.
    ///
    /// D1 is the far-right sensor and D5 the far-left one.
    pub fn from_outputs(d1: D, d2: D, d3: D, d4: D, d5: D) -> Self {
        Self {
            far_left: d5,
            left: d4,
            center: d3,
            right: d2,
            far_right: d1,
        }
    }

    /// Channels listed far-left to far-right.
    pub fn channels(&self) -> [&D; 5] {
        [
            &self.far_left,
            &self.left,
            &self.center,
            &self.right,
            &self.far_right,
        ]
    }
}

/// Which acquisition mode is active, with the channels it needs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Config<A, D> {
    #[default]
    Uninitialized,
    Analog(AnalogConfig<A>),
    Digital(DigitalConfig<D>),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The requested mode was already configured. The first configuration
    /// is kept.
    AlreadyInitialized(Mode),
    /// Analog and digital were both requested. Analog is kept.
    ModeConflict { requested: Mode, previous: Mode },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::AlreadyInitialized(mode) => {
                write!(f, "{mode:?} mode already initialized")
            }
            ConfigError::ModeConflict {
                requested,
                previous,
            } => write!(
                f,
                "{requested:?} mode requested after {previous:?}, keeping analog"
            ),
        }
    }
}

impl core::error::Error for ConfigError {}

impl<A, D> Config<A, D> {
    pub const fn new() -> Self {
        Config::Uninitialized
    }

    pub fn analog(channel: A) -> Self {
        Config::Analog(AnalogConfig::new(channel))
    }

    pub fn digital(d1: D, d2: D, d3: D, d4: D, d5: D) -> Self {
        Config::Digital(DigitalConfig::from_outputs(d1, d2, d3, d4, d5))
    }

    pub fn mode(&self) -> Mode {
        match self {
            Config::Uninitialized => Mode::Uninitialized,
            Config::Analog(_) => Mode::Analog,
            Config::Digital(_) => Mode::Digital,
        }
    }

    /// Switches to analog mode on `channel`.
    ///
    /// A second initialization is reported as an error. Analog always takes
    /// precedence over digital, so a conflicting call still leaves analog
    /// mode active.
    pub fn init_analog(&mut self, channel: A) -> Result<(), ConfigError> {
        self.init_analog_config(AnalogConfig::new(channel))
    }

    pub fn init_analog_config(&mut self, analog: AnalogConfig<A>) -> Result<(), ConfigError> {
        match self {
            Config::Uninitialized => {
                #[cfg(feature = "defmt")]
                defmt::debug!("maker line: analog mode, {}", analog.resolution);
                *self = Config::Analog(analog);
                Ok(())
            }
            Config::Analog(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("maker line: analog mode already initialized");
                Err(ConfigError::AlreadyInitialized(Mode::Analog))
            }
            Config::Digital(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("maker line: analog requested over digital, switching to analog");
                *self = Config::Analog(analog);
                Err(ConfigError::ModeConflict {
                    requested: Mode::Analog,
                    previous: Mode::Digital,
                })
            }
        }
    }

    /// Switches to digital mode with outputs D1..D5.
    ///
    /// Fails without changing anything if a mode is already configured.
    pub fn init_digital(&mut self, d1: D, d2: D, d3: D, d4: D, d5: D) -> Result<(), ConfigError> {
        self.init_digital_config(DigitalConfig::from_outputs(d1, d2, d3, d4, d5))
    }

    pub fn init_digital_config(&mut self, digital: DigitalConfig<D>) -> Result<(), ConfigError> {
        match self {
            Config::Uninitialized => {
                #[cfg(feature = "defmt")]
                defmt::debug!("maker line: digital mode");
                *self = Config::Digital(digital);
                Ok(())
            }
            Config::Analog(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("maker line: digital requested over analog, keeping analog");
                Err(ConfigError::ModeConflict {
                    requested: Mode::Digital,
                    previous: Mode::Analog,
                })
            }
            Config::Digital(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("maker line: digital mode already initialized");
                Err(ConfigError::AlreadyInitialized(Mode::Digital))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_uninitialized() {
        let config: Config<u8, u8> = Config::new();
        assert_eq!(config.mode(), Mode::Uninitialized);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn digital_outputs_map_to_positions() {
        let digital = DigitalConfig::from_outputs(12, 13, 14, 15, 16);
        assert_eq!(digital.far_right, 12);
        assert_eq!(digital.right, 13);
        assert_eq!(digital.center, 14);
        assert_eq!(digital.left, 15);
        assert_eq!(digital.far_left, 16);
        assert_eq!(digital.channels(), [&16, &15, &14, &13, &12]);
    }

    #[test]
    fn init_once() {
        let mut config: Config<u8, u8> = Config::new();
        assert_eq!(config.init_analog(1), Ok(()));
        assert_eq!(config, Config::analog(1));
        assert_eq!(
            config.init_analog(2),
            Err(ConfigError::AlreadyInitialized(Mode::Analog))
        );
        assert_eq!(config, Config::analog(1));

        let mut config: Config<u8, u8> = Config::new();
        assert_eq!(config.init_digital(12, 13, 14, 15, 16), Ok(()));
        assert_eq!(
            config.init_digital(0, 0, 0, 0, 0),
            Err(ConfigError::AlreadyInitialized(Mode::Digital))
        );
        assert_eq!(config, Config::digital(12, 13, 14, 15, 16));
    }

    #[test]
    fn analog_wins_conflicts() {
        let mut config: Config<u8, u8> = Config::new();
        config.init_analog(1).unwrap();
        assert_eq!(
            config.init_digital(12, 13, 14, 15, 16),
            Err(ConfigError::ModeConflict {
                requested: Mode::Digital,
                previous: Mode::Analog,
            })
        );
        assert_eq!(config.mode(), Mode::Analog);

        let mut config: Config<u8, u8> = Config::new();
        config.init_digital(12, 13, 14, 15, 16).unwrap();
        assert_eq!(
            config.init_analog(1),
            Err(ConfigError::ModeConflict {
                requested: Mode::Analog,
                previous: Mode::Digital,
            })
        );
        assert_eq!(config, Config::analog(1));
    }

    #[test]
    fn resolution() {
        let analog = AnalogConfig::new(3u8).with_resolution(Resolution::Bits12);
        assert_eq!(analog.channel, 3);
        assert_eq!(analog.resolution, Resolution::Bits12);
        assert_eq!(AnalogConfig::new(3u8).resolution, Resolution::Bits10);
    }
}
