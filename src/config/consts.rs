/// Target run when the command line names none
pub const DEFAULT_TARGET: &str = "default";
/// Separator placed between compiled stylesheets when none is configured
pub const DEFAULT_SASS_SEPARATOR: &str = "\n";
/// The theme pipeline compiled into the binary
pub const BUILTIN_PIPELINE: &str = include_str!("../../configs/okta-theme.yaml");
/// Name reported for the embedded pipeline in logs and errors
pub const BUILTIN_PIPELINE_NAME: &str = "<builtin okta-theme.yaml>";
