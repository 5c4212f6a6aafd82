/// Analysis modules: post-scan summaries for logging.

pub mod extensions;

pub use extensions::{summarise_extensions, ExtensionStats};
