//! # Edit Session
//!
//! An [`EditSession`] owns one loaded def file and mediates everything an
//! interactive front-end needs: the ordered samples of a parameter over the
//! model's rings, a pending-edit buffer that collects per-ring changes, and
//! the write that folds the pending values back into the file.
//!
//! Loading a new file replaces the session wholesale; successive loads are
//! never merged. Re-selecting a parameter discards any commits that were
//! not written out, the same way replotting discarded drags in the
//! point-dragging front-end this models.

use crate::deffile::{self, LoadedDef};
use crate::error::{Result, TireditError};
use crate::format;
use crate::model::DefDocument;
use crate::params::ParamSet;
use std::path::{Path, PathBuf};

/// The ordered samples of one editable parameter, ready to plot or edit.
#[derive(Debug, Clone, PartialEq)]
pub struct RingSeries {
    pub param: String,
    /// Ring radii from `RADI`, one per ring.
    pub radii: Vec<f64>,
    /// Parameter values, one per ring.
    pub samples: Vec<f64>,
    /// Rings whose value failed to parse and were replaced by the previous
    /// ring's value.
    pub substituted: Vec<usize>,
}

/// A written-out edit: the parameter and its serialized value before and
/// after.
#[derive(Debug, Clone)]
pub struct WrittenEdit {
    pub param: String,
    pub before: String,
    pub after: String,
}

/// Which ring currently owns an in-progress drag.
///
/// Only one drag may be live at a time; a second press is refused until the
/// first releases. The state lives on the session, not in any process-wide
/// slot.
#[derive(Debug, Default)]
pub struct DragState {
    owner: Option<usize>,
}

impl DragState {
    /// Claims the drag for `ring`. Returns false if another drag is live.
    pub fn begin(&mut self, ring: usize) -> bool {
        if self.owner.is_some() {
            return false;
        }
        self.owner = Some(ring);
        true
    }

    pub fn owner(&self) -> Option<usize> {
        self.owner
    }

    /// Releases the drag, returning the ring that held it.
    pub fn release(&mut self) -> Option<usize> {
        self.owner.take()
    }
}

#[derive(Debug)]
struct PendingEdit {
    param: String,
    samples: Vec<f64>,
}

/// One editing session over a single def file.
#[derive(Debug)]
pub struct EditSession {
    source: PathBuf,
    document: DefDocument,
    candidates: Vec<String>,
    pending: Option<PendingEdit>,
    drag: DragState,
}

impl EditSession {
    /// Reads `path` and starts a session over it.
    pub fn open(path: &Path, params: &ParamSet) -> Result<Self> {
        let loaded = deffile::read_def(path, params)?;
        Ok(Self::from_loaded(path, loaded))
    }

    /// Starts a session over an already parsed def file.
    pub fn from_loaded(source: impl Into<PathBuf>, loaded: LoadedDef) -> Self {
        Self {
            source: source.into(),
            document: loaded.document,
            candidates: loaded.candidates,
            pending: None,
            drag: DragState::default(),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn document(&self) -> &DefDocument {
        &self.document
    }

    /// Editable parameters found in the file, in file order.
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// The parameter currently staged for editing, with its working samples.
    pub fn selected(&self) -> Option<(&str, &[f64])> {
        self.pending
            .as_ref()
            .map(|p| (p.param.as_str(), p.samples.as_slice()))
    }

    /// Ring count from `NUR`. Files carry it as a float string ("5.0");
    /// any float form is accepted and truncated.
    pub fn ring_count(&self) -> Result<usize> {
        let raw = self.require("NUR")?;
        let n: f64 = raw
            .trim()
            .parse()
            .map_err(|_| TireditError::NonNumericSample {
                key: "NUR".to_string(),
                ring: 0,
            })?;
        Ok(n as usize)
    }

    /// The ordered samples of `param` over the model's rings.
    ///
    /// `NUR` and `RADI` must be present. Radii must all parse; a sample
    /// that fails to parse at ring i > 0 is replaced by ring i-1's value
    /// and recorded in [`RingSeries::substituted`], while a failure at
    /// ring 0 has nothing to fall back on and is an error.
    pub fn series(&self, param: &str) -> Result<RingSeries> {
        let nrings = self.ring_count()?;
        let radii_raw = self.require("RADI")?;
        let samples_raw = self.document.get(param)?;

        let radii = parse_strict("RADI", radii_raw, nrings)?;
        let (samples, substituted) = parse_with_fallback(param, samples_raw, nrings)?;

        Ok(RingSeries {
            param: param.to_string(),
            radii,
            samples,
            substituted,
        })
    }

    /// Stages `param` for editing, loading its current samples as the
    /// working buffer. Unwritten commits to a previously selected
    /// parameter are discarded.
    pub fn select(&mut self, param: &str) -> Result<RingSeries> {
        let series = self.series(param)?;
        self.pending = Some(PendingEdit {
            param: series.param.clone(),
            samples: series.samples.clone(),
        });
        self.drag = DragState::default();
        Ok(series)
    }

    /// Commits a new value for one ring of the selected parameter.
    pub fn commit(&mut self, ring: usize, value: f64) -> Result<()> {
        let pending = self
            .pending
            .as_mut()
            .ok_or_else(|| TireditError::Api("No parameter selected".to_string()))?;
        if ring >= pending.samples.len() {
            return Err(TireditError::IndexOutOfRange {
                index: ring,
                len: pending.samples.len(),
            });
        }
        pending.samples[ring] = value;
        Ok(())
    }

    /// Claims a drag on `ring`. Returns false (without error) if another
    /// drag is already live.
    pub fn begin_drag(&mut self, ring: usize) -> Result<bool> {
        let pending = self
            .pending
            .as_ref()
            .ok_or_else(|| TireditError::Api("No parameter selected".to_string()))?;
        if ring >= pending.samples.len() {
            return Err(TireditError::IndexOutOfRange {
                index: ring,
                len: pending.samples.len(),
            });
        }
        Ok(self.drag.begin(ring))
    }

    /// Commits `value` to the ring that owns the live drag.
    pub fn drag(&mut self, value: f64) -> Result<()> {
        let ring = self
            .drag
            .owner()
            .ok_or_else(|| TireditError::Api("No drag in progress".to_string()))?;
        self.commit(ring, value)
    }

    /// Releases the live drag, returning the ring that held it.
    pub fn end_drag(&mut self) -> Option<usize> {
        self.drag.release()
    }

    /// Formats the pending samples and writes the whole document to `path`.
    ///
    /// The new value is persisted into the document, so the session can
    /// move on to another parameter without losing this edit.
    pub fn write(&mut self, path: &Path, legacy_spacing: bool) -> Result<WrittenEdit> {
        let pending = self
            .pending
            .as_ref()
            .ok_or_else(|| TireditError::Api("No parameter selected".to_string()))?;
        let after = format::format_samples(&pending.param, &pending.samples);
        let before = self.document.get(&pending.param)?.to_string();

        deffile::write_def(
            &mut self.document,
            path,
            Some((&pending.param, &after)),
            legacy_spacing,
        )?;

        Ok(WrittenEdit {
            param: pending.param.clone(),
            before,
            after,
        })
    }

    /// Writes the document with no edit applied, normalizing line spacing.
    pub fn rewrite(&mut self, path: &Path) -> Result<()> {
        deffile::write_def(&mut self.document, path, None, false)
    }

    fn require(&self, key: &'static str) -> Result<&str> {
        self.document
            .get(key)
            .map_err(|_| TireditError::MissingRequiredKey(key))
    }
}

fn parse_strict(key: &str, raw: &str, nrings: usize) -> Result<Vec<f64>> {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    if tokens.len() < nrings {
        return Err(TireditError::TooFewSamples {
            key: key.to_string(),
            expected: nrings,
            found: tokens.len(),
        });
    }
    tokens[..nrings]
        .iter()
        .enumerate()
        .map(|(ring, token)| {
            token.parse().map_err(|_| TireditError::NonNumericSample {
                key: key.to_string(),
                ring,
            })
        })
        .collect()
}

fn parse_with_fallback(key: &str, raw: &str, nrings: usize) -> Result<(Vec<f64>, Vec<usize>)> {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    if tokens.len() < nrings {
        return Err(TireditError::TooFewSamples {
            key: key.to_string(),
            expected: nrings,
            found: tokens.len(),
        });
    }

    let mut samples = Vec::with_capacity(nrings);
    let mut substituted = Vec::new();
    for (ring, token) in tokens[..nrings].iter().enumerate() {
        match token.parse::<f64>() {
            Ok(value) => samples.push(value),
            Err(_) if ring > 0 => {
                // Carry the previous ring's value forward rather than fail
                // the whole series.
                let previous = samples[ring - 1];
                samples.push(previous);
                substituted.push(ring);
            }
            Err(_) => {
                return Err(TireditError::NonNumericSample {
                    key: key.to_string(),
                    ring,
                })
            }
        }
    }
    Ok((samples, substituted))
}
