use serde::{Deserialize, Serialize};

use crate::scoring::DomainConfig;

/// Top-level config file schema.
///
/// Example YAML:
/// ```yaml
/// domains:
///   - name: economia
///     indicators:
///       - indicator: renta_media
///         weight: 0.6
///       - indicator: tasa_paro
///         weight: 0.4
///         polarity: negative
/// ```
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Domain weight sets. A domain with a built-in name replaces that
    /// built-in; new names are added alongside.
    #[serde(default)]
    pub domains: Vec<DomainConfig>,
}
