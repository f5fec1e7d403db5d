use crate::core::{DetectionReason, EnvironmentProbe, InterpreterPrefixes, VirtualEnvStatus};
use crate::utils::error::Result;

pub const DEFAULT_MARKER_ENV_VARS: &[&str] = &["CONDA_PREFIX"];

/// True when the install prefix differs from the runtime prefix.
///
/// A missing `base_prefix` means the runtime prefix. `real_prefix` is only
/// consulted when `base_prefix` is empty, and a missing one counts as differing.
pub fn prefixes_differ(prefixes: &InterpreterPrefixes) -> bool {
    let base = prefixes.base_prefix.as_deref().unwrap_or(&prefixes.prefix);
    if !base.is_empty() {
        return base != prefixes.prefix;
    }
    prefixes
        .real_prefix
        .as_deref()
        .map_or(true, |real| real != prefixes.prefix)
}

/// Decides whether we run inside an isolated Python environment.
///
/// Any marker variable being set wins without asking the interpreter.
pub fn is_virtual_env<P: EnvironmentProbe>(
    probe: &P,
    markers: &[String],
) -> Result<VirtualEnvStatus> {
    if let Some(marker) = markers.iter().find(|m| probe.env_var_present(m.as_str())) {
        tracing::debug!("Marker variable {} is set", marker);
        return Ok(VirtualEnvStatus {
            is_virtual_env: true,
            reason: DetectionReason::MarkerVariable,
            marker: Some(marker.clone()),
            prefixes: None,
        });
    }

    let prefixes = probe.interpreter_prefixes()?;
    let isolated = prefixes_differ(&prefixes);
    tracing::debug!(
        "prefix={} base={:?} real={:?} isolated={}",
        prefixes.prefix,
        prefixes.base_prefix,
        prefixes.real_prefix,
        isolated
    );

    Ok(VirtualEnvStatus {
        is_virtual_env: isolated,
        reason: if isolated {
            DetectionReason::PrefixMismatch
        } else {
            DetectionReason::SamePrefix
        },
        marker: None,
        prefixes: Some(prefixes),
    })
}
