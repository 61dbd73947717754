/// Advisory vibration intensities: short for a correct drop, long for an
/// incorrect one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HapticPulse {
    Short,
    Long,
}

#[derive(Debug, thiserror::Error)]
#[error("haptic feedback unavailable: {0}")]
pub struct HapticError(pub String);

/// Platform vibration seam. Failures are logged by the caller and never
/// surface to gameplay.
pub trait HapticSink {
    fn pulse(&self, pulse: HapticPulse) -> Result<(), HapticError>;
}

/// For hosts without vibration support.
pub struct NullHaptics;

impl HapticSink for NullHaptics {
    fn pulse(&self, _pulse: HapticPulse) -> Result<(), HapticError> {
        Ok(())
    }
}
