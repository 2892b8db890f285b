use serde::Deserialize;

/// General output flags. Each of these can also be set from the command line,
/// which takes precedence.
#[derive(Clone, Debug, Default, Deserialize)]
#[cfg_attr(test, serde(deny_unknown_fields), derive(PartialEq, Eq))]
pub(crate) struct FlagConfig {
    pub(crate) format: Option<String>,
    pub(crate) decimal_ids: Option<bool>,
    pub(crate) no_header: Option<bool>,
}
