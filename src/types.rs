use bitbybit::bitfield;

/// Where the line sits under the sensor array.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum LinePosition {
    FarLeft = 0,
    Left = 1,
    Center = 2,
    Right = 3,
    FarRight = 4,
    /// Every sensor sees the line.
    All = 5,
    /// No sensor sees the line.
    None = 6,
}

impl LinePosition {
    pub const ALL: [LinePosition; 7] = [
        LinePosition::FarLeft,
        LinePosition::Left,
        LinePosition::Center,
        LinePosition::Right,
        LinePosition::FarRight,
        LinePosition::All,
        LinePosition::None,
    ];
}

impl From<LinePosition> for u8 {
    fn from(position: LinePosition) -> u8 {
        position as u8
    }
}

impl TryFrom<u8> for LinePosition {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, u8> {
        LinePosition::ALL.get(value as usize).copied().ok_or(value)
    }
}

/// One reading of the five digital outputs.
///
/// Bit 4 is the far-left sensor and bit 0 the far-right one, so the binary
/// representation reads in the same order as the sensors are mounted.
#[bitfield(u8, default = 0)]
#[derive(Debug)]
pub struct DigitalSample {
    #[bit(4, rw)]
    pub far_left: bool,
    #[bit(3, rw)]
    pub left: bool,
    #[bit(2, rw)]
    pub center: bool,
    #[bit(1, rw)]
    pub right: bool,
    #[bit(0, rw)]
    pub far_right: bool,
}

impl DigitalSample {
    pub const EMPTY: u8 = 0b00000;
    pub const FULL: u8 = 0b11111;

    /// Builds a sample from levels listed far-left to far-right.
    pub const fn from_levels(
        far_left: bool,
        left: bool,
        center: bool,
        right: bool,
        far_right: bool,
    ) -> Self {
        Self::new_with_raw_value(
            (far_left as u8) << 4
                | (left as u8) << 3
                | (center as u8) << 2
                | (right as u8) << 1
                | far_right as u8,
        )
    }

    /// The five sensor bits, far-left in bit 4.
    pub fn bits(&self) -> u8 {
        self.raw_value() & Self::FULL
    }

    /// Number of sensors currently seeing the line.
    pub fn count(&self) -> u32 {
        self.bits().count_ones()
    }
}

impl PartialEq for DigitalSample {
    fn eq(&self, other: &Self) -> bool {
        self.bits() == other.bits()
    }
}

impl Eq for DigitalSample {}

#[cfg(feature = "defmt")]
impl defmt::Format for DigitalSample {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "DigitalSample({=u8:b})", self.bits())
    }
}

/// ADC resolution of the analog channel.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Resolution {
    Bits8,
    #[default]
    Bits10,
    Bits12,
    Bits14,
}

impl Resolution {
    pub const fn bits(self) -> u32 {
        match self {
            Resolution::Bits8 => 8,
            Resolution::Bits10 => 10,
            Resolution::Bits12 => 12,
            Resolution::Bits14 => 14,
        }
    }

    /// Rescales a raw reading into the 10-bit domain used by the band table.
    pub const fn to_10bit(self, raw: u16) -> u16 {
        match self.bits() {
            bits if bits > 10 => raw >> (bits - 10),
            bits => raw << (10 - bits),
        }
    }
}

/// A freshly acquired reading.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RawSample {
    /// Reading in the 10-bit domain, 0..=1023.
    Analog(u16),
    Digital(DigitalSample),
}
