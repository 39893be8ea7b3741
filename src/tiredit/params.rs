//! # Editable-Parameter Registry
//!
//! TiRiFiC def files carry far more keys than an astronomer would want to
//! fiddle with by hand; only the per-ring model parameters below are offered
//! for editing. Matching checks the name itself and the name followed by
//! `_`, so the numbered disks tirific supports are covered (both `VROT` and
//! `VROT_2` are accepted given this list, `VROTX` is not).

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// The per-ring parameters that can be edited with this tool.
pub const EDITABLE_PARAMS: &[&str] = &[
    "VROT", "Z0", "SBR", "INCL", "PA", "XPOS", "YPOS", "VSYS", "SDIS", "VRAD", "VVER", "DVRO",
    "DVRA", "DVVE", "WM0A", "WM1A", "WM1P", "WM2A", "WM2P", "WM3A", "WM3P", "WM4A", "WM4P", "LS0",
    "LC0", "SM0A", "SM1A", "SM1P", "SM2A", "SM2P", "SM3A", "SM3P", "SM4A", "SM4P", "VM0A", "VM1A",
    "VM1P", "VM2A", "VM2P", "VM3A", "VM3P", "VM4A", "VM4P", "GA1A", "GA1P", "GA2A", "GA2P", "GA3A",
    "GA3P", "GA4A", "GA4P", "GA1D", "GA2D", "GA3D", "GA4D", "AZ1P", "AZ2P", "AZ1W", "AZ2W", "CLNR",
];

static EXACT_NAMES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| EDITABLE_PARAMS.iter().copied().collect());

/// The set of parameter names recognized for editing: the built-in list
/// plus any user-configured extras.
#[derive(Debug, Clone, Default)]
pub struct ParamSet {
    extra: Vec<String>,
}

impl ParamSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extends the built-in list with names from configuration.
    pub fn with_extra(extra: Vec<String>) -> Self {
        Self { extra }
    }

    /// True if `key` names an editable parameter: an exact match of a
    /// recognized name, or a recognized name followed by `_` (multi-disk
    /// suffixes like `VROT_2`).
    pub fn matches(&self, key: &str) -> bool {
        if EXACT_NAMES.contains(key) {
            return true;
        }
        if EDITABLE_PARAMS.iter().any(|name| has_disk_suffix(key, name)) {
            return true;
        }
        self.extra
            .iter()
            .any(|name| key == name || has_disk_suffix(key, name))
    }
}

fn has_disk_suffix(key: &str, name: &str) -> bool {
    key.len() > name.len() && key.starts_with(name) && key.as_bytes()[name.len()] == b'_'
}
