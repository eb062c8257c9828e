/// Acquisition mode of a Maker Line configuration.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Mode {
    Uninitialized,
    Analog,
    Digital,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeError {
    pub expected: Mode,
    pub actual: Mode,
}

impl core::fmt::Display for ModeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "expected {:?} mode, configured for {:?}", self.expected, self.actual)
    }
}

impl core::error::Error for ModeError {}

macro_rules! impl_mode_check {
    ($modename:ident $fn_name:ident) => {
        /// Returns an error unless this is the
        #[doc = concat!("`", stringify!($modename), "`")]
        /// mode.
        pub fn $fn_name(self) -> Result<(), ModeError> {
            if self == Mode::$modename {
                Ok(())
            } else {
                Err(ModeError {
                    expected: Mode::$modename,
                    actual: self,
                })
            }
        }
    };
}

impl Mode {
    impl_mode_check!(Analog is_analog);
    impl_mode_check!(Digital is_digital);

    pub fn is_initialized(self) -> bool {
        self != Mode::Uninitialized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_checks() {
        assert_eq!(Mode::Analog.is_analog(), Ok(()));
        assert_eq!(Mode::Digital.is_digital(), Ok(()));
        assert_eq!(
            Mode::Uninitialized.is_analog(),
            Err(ModeError {
                expected: Mode::Analog,
                actual: Mode::Uninitialized,
            })
        );
        assert_eq!(
            Mode::Analog.is_digital(),
            Err(ModeError {
                expected: Mode::Digital,
                actual: Mode::Analog,
            })
        );
        assert!(!Mode::Uninitialized.is_initialized());
        assert!(Mode::Digital.is_initialized());
    }
}
