//! The [`SquareCipher`] capability trait.

use polysquare_core::CodecError;

/// A reversible text-to-token substitution backed by a square grid.
///
/// # Contract
///
/// - `encode` and `decode` are pure: same input, same output, no state
///   carried between calls.
/// - For any text made only of symbols the cipher knows,
///   `decode(encode(text)) == text`.
/// - `kind` is a fixed identifier for the cipher variant.
///
/// # Object safety
///
/// This trait is object-safe; callers may hold `Box<dyn SquareCipher>`
/// or `Arc<dyn SquareCipher>` and share it across threads.
///
/// # Examples
///
/// ```
/// use polysquare_codec::{CodecConfig, PolybiusCodec, SquareCipher};
///
/// let cipher: Box<dyn SquareCipher> =
///     Box::new(PolybiusCodec::lowercase(CodecConfig::default()));
/// assert_eq!(cipher.kind(), "polybius");
/// assert_eq!(cipher.encode("ab").unwrap(), "1-1 1-2");
/// assert_eq!(cipher.decode("1-1 1-2").unwrap(), "ab");
/// ```
pub trait SquareCipher: Send + Sync {
    /// Identifier for this cipher variant.
    fn kind(&self) -> &'static str;

    /// Encode `text` into a space-separated token message.
    fn encode(&self, text: &str) -> Result<String, CodecError>;

    /// Decode a token message back into text.
    fn decode(&self, message: &str) -> Result<String, CodecError>;
}
