use std::fmt;
use std::process::Command;

use crate::error::TparseError;
use crate::things::types::ThingsContainer;

/// Base of the Things JSON import command.
pub const THINGS_JSON_URL: &str = "things:///json?";

/// A callback URL with percent-encoded query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackUrl {
    base_url: String,
    params: Vec<(String, String)>,
}

impl CallbackUrl {
    /// Start a URL from `base_url`, which should end in `?`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            params: Vec::new(),
        }
    }

    /// The Things import URL carrying `container` as its `data` parameter.
    ///
    /// # Errors
    ///
    /// Returns `TparseError::Json` if the container cannot be serialized.
    pub fn for_container(base_url: &str, container: &ThingsContainer) -> Result<Self, TparseError> {
        let mut url = Self::new(base_url);
        url.add_parameter("data", &container.export()?);
        Ok(url)
    }

    /// Append a parameter; the value is percent-encoded.
    pub fn add_parameter(&mut self, name: &str, value: &str) -> &mut Self {
        self.params
            .push((name.to_string(), urlencoding::encode(value).into_owned()));
        self
    }

    /// The full URL.
    #[must_use]
    pub fn to_url(&self) -> String {
        let query = self
            .params
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}{query}", self.base_url)
    }

    /// Hand the URL to the system so Things picks it up.
    ///
    /// # Errors
    ///
    /// Returns `TparseError::NotSupported` outside macOS, or
    /// `TparseError::Delivery` if `open` fails.
    pub fn open(&self) -> Result<(), TparseError> {
        if !cfg!(target_os = "macos") {
            return Err(TparseError::NotSupported(
                "opening Things URLs requires macOS".to_string(),
            ));
        }

        let url = self.to_url();
        log::debug!("opening {} byte callback URL", url.len());
        let output = Command::new("open").arg(&url).output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(TparseError::Delivery(stderr.trim().to_string()));
        }

        Ok(())
    }
}

impl Default for CallbackUrl {
    fn default() -> Self {
        Self::new(THINGS_JSON_URL)
    }
}

impl fmt::Display for CallbackUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_url())
    }
}
