/// Configuration options for the construct-stack parser.
///
/// # Examples
///
/// ```rust
/// use jsonstack::{ParserOptions, parse_with_options};
///
/// let options = ParserOptions {
///     allow_trailing_data: true,
///     ..Default::default()
/// };
/// let value = parse_with_options(&b"{\"a\":1} garbage"[..], options).unwrap();
/// assert!(value.has_child("a"));
/// ```
///
/// # Default
///
/// No depth limit; every other option defaults to `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParserOptions {
    /// Maximum number of simultaneously open constructs.
    ///
    /// Nesting is tracked on an explicit stack, so without a limit depth is
    /// bounded only by available memory. Exceeding the limit fails the parse
    /// with `SyntaxError::DepthLimitExceeded`.
    ///
    /// # Default
    ///
    /// `None`
    pub max_depth: Option<usize>,

    /// Whether to stop reading as soon as the root object closes.
    ///
    /// When `false`, the parser keeps reading until the source is exhausted
    /// and rejects anything but whitespace after the root object. When
    /// `true`, bytes after the root object are never read.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_trailing_data: bool,

    /// Whether a null construct must hold exactly the literal `null`
    /// (compared case-insensitively, surrounding whitespace ignored).
    ///
    /// When `false`, any text following an `n` or `N` up to the next
    /// delimiter produces a null value.
    ///
    /// # Default
    ///
    /// `false`
    pub strict_null_literal: bool,

    #[cfg(any(test, feature = "fuzzing"))]
    /// Panic on errors instead of returning them.
    ///
    /// Enabled only in test builds to produce backtraces on parse failures.
    pub panic_on_error: bool,
}
