//! Analog input trait

/// Multiplexed ADC with selectable input channels
///
/// Mirrors the select-then-read model of single-converter MCUs: the
/// converter is pointed at a channel, then sampled. Reads may block until
/// the conversion completes.
pub trait AnalogInput {
    /// Conversion error reported by the peripheral
    type Error;

    /// Route the converter to `channel`
    fn select_channel(&mut self, channel: u8);

    /// Convert the selected channel (12-bit, 0-4095)
    fn read(&mut self) -> Result<u16, Self::Error>;

    /// Select `channel` and convert it
    fn read_channel(&mut self, channel: u8) -> Result<u16, Self::Error> {
        self.select_channel(channel);
        self.read()
    }
}
