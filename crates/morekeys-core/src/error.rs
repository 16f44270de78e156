// Morekeys Spec Errors
// Failure cases surfaced while decoding key spec strings

/// Key specification parsing errors
///
/// All of these are deterministic functions of malformed input, surfaced
/// synchronously to the caller. They indicate authoring errors in a layout
/// definition, never transient conditions, so nothing here is retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeySpecError {
    /// The key spec model builder received an empty spec.
    #[error("empty key spec")]
    EmptySpec,

    /// A key spec decoded to an empty label.
    #[error("empty label: {0}")]
    EmptyLabel(String),

    /// A key spec declared an output part but it decoded to nothing.
    #[error("empty output text: {0}")]
    EmptyOutputText(String),

    /// A key spec contained more than one unescaped output separator.
    #[error("multiple output texts: {0}")]
    MultipleOutputTexts(String),

    /// A `!code/` part named a code that is not registered and is not a hex
    /// literal.
    #[error("unknown key code: {0}")]
    UnknownCode(String),

    /// An integer option spec did not carry a base-10 integer after its
    /// prefix.
    #[error("integer should follow {prefix}: {spec}")]
    MalformedIntOption { prefix: String, spec: String },
}
