/// Selects how many bits the internal bit-reader consumes per step.
///
/// Every variant decodes to the same output through [`super::reader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoderSpeed {
    OneBit = 1,
    TwoBits = 2,
    ThreeBits = 3,
    FourBits = 4,
    FiveBits = 5,
}

impl DecoderSpeed {
    /// Returns every known speed variant, handy for exercising the decoder
    /// against all of them in tests.
    pub fn known() -> Vec<DecoderSpeed> {
        vec![
            DecoderSpeed::OneBit,
            DecoderSpeed::TwoBits,
            DecoderSpeed::ThreeBits,
            DecoderSpeed::FourBits,
            DecoderSpeed::FiveBits,
        ]
    }
}
