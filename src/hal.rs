//! [`Interface`] implementations over embedded-hal peripherals.
//!
//! embedded-hal 1.0 has no ADC trait, so the analog side goes through
//! [`AnalogRead`], which a board implements for its converter.

use core::convert::Infallible;

use embedded_hal::digital::InputPin;

use crate::Interface;

/// One single-ended ADC channel.
pub trait AnalogRead {
    type Error;
    /// Performs one blocking conversion.
    fn read(&mut self) -> Result<u16, Self::Error>;
}

impl<T: AnalogRead> AnalogRead for &mut T {
    type Error = T::Error;

    fn read(&mut self) -> Result<u16, Self::Error> {
        T::read(self)
    }
}

/// Analog-mode acquisition through a single ADC channel.
///
/// The channel identifier is `()`; there are no digital channels.
pub struct AnalogPin<A> {
    adc: A,
}

impl<A: AnalogRead> AnalogPin<A> {
    pub fn new(adc: A) -> Self {
        Self { adc }
    }

    pub fn release(self) -> A {
        self.adc
    }
}

impl<A: AnalogRead> Interface for AnalogPin<A> {
    type AnalogChannel = ();
    type DigitalChannel = Infallible;
    type Error = A::Error;

    fn read_analog(&mut self, _channel: &()) -> Result<u16, A::Error> {
        self.adc.read()
    }

    fn read_digital(&mut self, channel: &Infallible) -> Result<bool, A::Error> {
        match *channel {}
    }
}

/// Digital-mode acquisition through GPIO inputs, addressed by index.
pub struct InputPins<P, const N: usize> {
    pins: [P; N],
}

#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError<E> {
    Pin(E),
    NoSuchPin(usize),
}

impl<P: InputPin, const N: usize> InputPins<P, N> {
    pub fn new(pins: [P; N]) -> Self {
        Self { pins }
    }

    pub fn release(self) -> [P; N] {
        self.pins
    }
}

impl<P: InputPin, const N: usize> Interface for InputPins<P, N> {
    type AnalogChannel = Infallible;
    type DigitalChannel = usize;
    type Error = PinError<P::Error>;

    fn read_analog(&mut self, channel: &Infallible) -> Result<u16, Self::Error> {
        match *channel {}
    }

    fn read_digital(&mut self, channel: &usize) -> Result<bool, Self::Error> {
        self.pins
            .get_mut(*channel)
            .ok_or(PinError::NoSuchPin(*channel))?
            .is_high()
            .map_err(PinError::Pin)
    }
}
