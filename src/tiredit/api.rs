//! # API Facade
//!
//! The single entry point for all tiredit operations, regardless of the
//! front-end driving it. The facade dispatches to the command layer,
//! owns the live [`EditSession`], and returns structured
//! `Result<CmdResult>` values — it never prints and never exits.
//!
//! Loading a file replaces any existing session; edits that were staged
//! but not written out are gone at that point, and the load result says so.

use crate::commands::{self, config::ConfigAction, CmdMessage, CmdResult};
use crate::config::TireditConfig;
use crate::error::{Result, TireditError};
use crate::params::ParamSet;
use crate::session::EditSession;
use std::path::{Path, PathBuf};

pub struct TireditApi {
    config: TireditConfig,
    config_dir: PathBuf,
    params: ParamSet,
    session: Option<EditSession>,
}

impl TireditApi {
    pub fn new(config: TireditConfig, config_dir: impl Into<PathBuf>) -> Self {
        let params = ParamSet::with_extra(config.extra_params.clone());
        Self {
            config,
            config_dir: config_dir.into(),
            params,
            session: None,
        }
    }

    /// Reads a def file, replacing any session in progress.
    pub fn load(&mut self, path: &Path) -> Result<CmdResult> {
        let (session, mut result) = commands::load::run(path, &self.params)?;
        let had_session = self.session.replace(session).is_some();
        if had_session {
            result.add_message(CmdMessage::warning(
                "Any prior unwritten parameter changes have been lost",
            ));
        }
        Ok(result)
    }

    /// The ring series for `param` in the loaded file.
    pub fn show(&self, param: &str) -> Result<CmdResult> {
        commands::show::run(self.session()?, param)
    }

    /// Stages `(ring, value)` edits to `param`.
    pub fn edit(&mut self, param: &str, edits: &[(usize, f64)]) -> Result<CmdResult> {
        commands::edit::run(self.session_mut()?, param, edits)
    }

    /// Writes the loaded document with the staged edit applied.
    pub fn write(&mut self, path: &Path) -> Result<CmdResult> {
        let legacy_spacing = self.config.legacy_spacing;
        commands::write::run(self.session_mut()?, path, legacy_spacing)
    }

    /// Writes the loaded document unchanged, normalizing spacing.
    pub fn rewrite(&mut self, path: &Path) -> Result<CmdResult> {
        commands::write::rewrite(self.session_mut()?, path)
    }

    /// Shows or changes configuration.
    pub fn config(&mut self, action: ConfigAction) -> Result<CmdResult> {
        let result = commands::config::run(&mut self.config, &self.config_dir, action)?;
        // Changes to the extra parameter list apply to subsequent loads.
        self.params = ParamSet::with_extra(self.config.extra_params.clone());
        Ok(result)
    }

    fn session(&self) -> Result<&EditSession> {
        self.session
            .as_ref()
            .ok_or_else(|| TireditError::Api("No def file loaded".to_string()))
    }

    fn session_mut(&mut self) -> Result<&mut EditSession> {
        self.session
            .as_mut()
            .ok_or_else(|| TireditError::Api("No def file loaded".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn def_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    fn api(dir: &Path) -> TireditApi {
        TireditApi::new(TireditConfig::default(), dir)
    }

    #[test]
    fn operations_require_a_loaded_file() {
        let dir = tempfile::tempdir().unwrap();
        let api = api(dir.path());
        assert!(matches!(api.show("VROT"), Err(TireditError::Api(_))));
    }

    #[test]
    fn load_edit_write_flow() {
        let dir = tempfile::tempdir().unwrap();
        let file = def_file("NUR= 2.0\nRADI= 0.0 10.0\nVROT= 0.0 100.0\n");
        let out = dir.path().join("out.def");

        let mut api = api(dir.path());
        let loaded = api.load(file.path()).unwrap();
        assert_eq!(loaded.candidates, vec!["VROT"]);

        api.edit("VROT", &[(1, 110.0)]).unwrap();
        let result = api.write(&out).unwrap();
        assert_eq!(
            result.written.unwrap().after,
            "+0.00000E+00 +1.10000E+02"
        );

        let text = std::fs::read_to_string(&out).unwrap();
        assert!(text.contains("VROT=+0.00000E+00 +1.10000E+02\n"));
    }

    #[test]
    fn reload_warns_about_lost_changes() {
        let dir = tempfile::tempdir().unwrap();
        let file = def_file("NUR= 2.0\nRADI= 0.0 10.0\nVROT= 0.0 100.0\n");

        let mut api = api(dir.path());
        api.load(file.path()).unwrap();
        let second = api.load(file.path()).unwrap();
        assert!(second
            .messages
            .iter()
            .any(|m| m.content.contains("have been lost")));
    }

    #[test]
    fn extra_params_from_config_become_candidates() {
        let dir = tempfile::tempdir().unwrap();
        let file = def_file("NUR= 2.0\nRADI= 0.0 10.0\nOUTSET= 1.0 2.0\n");

        let config = TireditConfig {
            extra_params: vec!["OUTSET".to_string()],
            ..TireditConfig::default()
        };
        let mut api = TireditApi::new(config, dir.path());
        let loaded = api.load(file.path()).unwrap();
        assert_eq!(loaded.candidates, vec!["OUTSET"]);
    }

    #[test]
    fn normalized_spacing_config_applies_to_writes() {
        let dir = tempfile::tempdir().unwrap();
        let file = def_file("NUR= 2.0\nRADI= 0.0 10.0\nVROT= 0.0 100.0\n");
        let out = dir.path().join("out.def");

        let config = TireditConfig {
            legacy_spacing: false,
            ..TireditConfig::default()
        };
        let mut api = TireditApi::new(config, dir.path());
        api.load(file.path()).unwrap();
        api.edit("VROT", &[(0, 5.0)]).unwrap();
        api.write(&out).unwrap();

        let text = std::fs::read_to_string(&out).unwrap();
        assert!(text.contains("VROT= +5.00000E+00 +1.00000E+02\n"));
    }
}
