//! Error types for color parsing and palette persistence.

/// Rejections produced when a host value cannot become a color.
///
/// Neither variant carries partial state: a rejected input leaves the caller's
/// palette untouched.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, miette::Diagnostic)]
pub enum ColorError {
    #[error("'{input}' is not a 6 digit hex color")]
    #[diagnostic(
        code(floem_palette::format),
        help("expected '#' followed by exactly six hex digits, e.g. #3B82F6")
    )]
    Format { input: String },

    #[error("'{input}' is not a number for field {field}")]
    #[diagnostic(code(floem_palette::validation))]
    Validation { field: &'static str, input: String },
}

/// Context attached to key/value store failures.
#[derive(thiserror::Error, Debug, miette::Diagnostic)]
pub enum StoreErrorCouldNot {
    #[error("📑 Could not open palette store at '{path}'")]
    OpenStore { path: String },

    #[error("📦 Could not open bucket '{bucket}'")]
    OpenBucket { bucket: String },

    #[error("🔼 Could not read key '{key}'")]
    ReadKey { key: String },

    #[error("🔽 Could not write key '{key}'")]
    WriteKey { key: String },

    #[error("❌ Could not remove key '{key}'")]
    RemoveKey { key: String },

    #[error("🎨 Could not decode palette stored under '{key}'")]
    DecodePalette { key: String },

    #[error("🎨 Could not encode palette for '{key}'")]
    EncodePalette { key: String },
}
