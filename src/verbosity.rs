// third-party imports
use enumset::{EnumSet, EnumSetType};

// ---

/// Individual bits of the verbosity bitmask.
///
/// The discriminant order defines the bit positions, so `Verbose` is `0x1`
/// and `SshLib` is `0x2`.
#[derive(EnumSetType, Debug)]
#[enumset(serialize_repr = "u32")]
pub enum VerbosityFlag {
    /// Enables debug-level console messages.
    Verbose,
    /// Enables protocol library tracing in the scanning layer.
    SshLib,
}

/// Verbosity configuration, set once at startup and read-only afterwards.
pub type Verbosity = EnumSet<VerbosityFlag>;

/// Builds verbosity from a raw bitmask, ignoring unknown bits.
pub fn from_bits(bits: u32) -> Verbosity {
    Verbosity::from_u32_truncated(bits)
}
