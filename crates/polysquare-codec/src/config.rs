//! Codec configuration.

use polysquare_core::UnknownSymbolPolicy;

/// Configuration fixed when a codec is constructed.
///
/// Applies uniformly to every encode call made through the codec. There
/// is no global default to mutate; each codec carries its own copy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CodecConfig {
    /// What encode does with symbols absent from the table.
    /// Default: [`UnknownSymbolPolicy::Fail`].
    pub on_unknown: UnknownSymbolPolicy,
}

impl CodecConfig {
    /// Config that drops unknown symbols from encoded output.
    pub const fn skip_unknown() -> Self {
        Self {
            on_unknown: UnknownSymbolPolicy::Skip,
        }
    }

    /// Config that fails the encode on the first unknown symbol.
    pub const fn fail_on_unknown() -> Self {
        Self {
            on_unknown: UnknownSymbolPolicy::Fail,
        }
    }

    /// Replace the unknown-symbol policy.
    pub const fn with_on_unknown(mut self, policy: UnknownSymbolPolicy) -> Self {
        self.on_unknown = policy;
        self
    }
}

impl From<UnknownSymbolPolicy> for CodecConfig {
    fn from(on_unknown: UnknownSymbolPolicy) -> Self {
        Self { on_unknown }
    }
}
