pub mod config;
pub mod error;
pub mod field;
pub mod mask;
pub mod terminal;

pub use config::FormatterConfig;
pub use error::{ConfigError, DateError, EditRejection};
pub use field::{DateField, ValueChanged};
pub use mask::edit::TextEdit;
pub use mask::format::DateFormat;
pub use mask::render::SeparatorPolicy;
pub use mask::{EditOutcome, MaskedDateFormatter};
