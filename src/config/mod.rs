//! Configuration for tparse.
//!
//! Settings live in `~/.tparse/config.yaml`; command-line flags override
//! them.

mod settings;

pub use settings::{ColorSetting, Config, ExportConfig, GeneralConfig, ParserConfig};
