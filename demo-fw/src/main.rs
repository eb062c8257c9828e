#![no_std]
#![no_main]

#[macro_use]
mod pinout;

#[cfg(all(feature = "analog", feature = "digital"))]
compile_error!("enable exactly one of the `analog` and `digital` features");

use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_time::Timer;
use makerline::{Interface, LinePosition, MakerLine};
use {defmt_rtt as _, panic_probe as _};

const POLL_MS: u64 = 50;

#[cfg(feature = "analog")]
mod adc {
    use core::convert::Infallible;

    use embassy_nrf::saadc::Saadc;
    use makerline::hal::AnalogRead;

    pub struct SaadcChannel<'d>(pub Saadc<'d, 1>);

    impl AnalogRead for SaadcChannel<'_> {
        type Error = Infallible;

        fn read(&mut self) -> Result<u16, Infallible> {
            let mut buf = [0; 1];
            self.0.blocking_sample(&mut buf);
            // Single-ended readings can dip slightly below zero.
            Ok(buf[0].max(0) as u16)
        }
    }
}

#[cfg(feature = "analog")]
embassy_nrf::bind_interrupts!(struct Irqs {
    SAADC => embassy_nrf::saadc::InterruptHandler;
});

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());

    #[cfg(feature = "analog")]
    {
        use embassy_nrf::saadc::{self, Saadc};
        use makerline::hal::AnalogPin;
        use makerline::{AnalogConfig, Config, Resolution};

        let mut adc_config = saadc::Config::default();
        adc_config.resolution = saadc::Resolution::_12BIT;
        // Full scale at VDD, matching the sensor's output swing.
        let mut channel = saadc::ChannelConfig::single_ended(pinout!(p.line_an));
        channel.reference = saadc::Reference::VDD1_4;
        channel.gain = saadc::Gain::GAIN1_4;
        let mut adc = Saadc::new(p.SAADC, Irqs, adc_config, [channel]);
        adc.calibrate().await;

        let config = Config::Analog(AnalogConfig::new(()).with_resolution(Resolution::Bits12));
        info!("maker line in analog mode");
        run(MakerLine::new(AnalogPin::new(adc::SaadcChannel(adc)), &config)).await
    }

    #[cfg(feature = "digital")]
    {
        use embassy_nrf::gpio::{Input, Pull};
        use makerline::hal::InputPins;
        use makerline::Config;

        let pins = InputPins::new([
            Input::new(pinout!(p.line_d1), Pull::None),
            Input::new(pinout!(p.line_d2), Pull::None),
            Input::new(pinout!(p.line_d3), Pull::None),
            Input::new(pinout!(p.line_d4), Pull::None),
            Input::new(pinout!(p.line_d5), Pull::None),
        ]);
        // Indices into `pins`, D1..D5.
        let config = Config::digital(0, 1, 2, 3, 4);
        info!("maker line in digital mode");
        run(MakerLine::new(pins, &config)).await
    }
}

async fn run<I: Interface>(mut line: MakerLine<'_, I>) -> ! {
    let mut last = None;
    loop {
        match line.position() {
            Ok(position) if position != last => {
                match position {
                    Some(LinePosition::None) => info!("line lost"),
                    Some(position) => info!("line at {}", position),
                    None => info!("ambiguous pattern"),
                }
                last = position;
            }
            Ok(_) => {}
            Err(_) => warn!("maker line read failed"),
        }
        Timer::after_millis(POLL_MS).await;
    }
}
