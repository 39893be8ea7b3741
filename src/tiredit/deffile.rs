//! # Def-File Reader / Writer
//!
//! A def file is line oriented: `KEY= VALUE` pairs, bare section-header
//! lines, and blank lines that matter for the layout. Parsing splits each
//! line on `=`; a line that splits into more than two parts is malformed
//! and aborts the whole read — there is no usable partial document.
//!
//! Rendering walks the document in insertion order. The edited key (if
//! any) is written with its new value; blank-line placeholders come out as
//! a single space; everything else is written `KEY= VALUE`. By default the
//! edited line carries no space after the `=`, the output convention of
//! the tool this format comes from; `legacy_spacing = false` normalizes it.

use crate::error::{Result, TireditError};
use crate::model::{self, DefDocument};
use crate::params::ParamSet;
use std::fs;
use std::path::Path;

/// A parsed def file: the ordered document plus the keys that can be
/// offered for editing, in file order.
#[derive(Debug, Clone)]
pub struct LoadedDef {
    pub document: DefDocument,
    pub candidates: Vec<String>,
}

/// Parses def-file text into a document.
///
/// Fails with [`TireditError::MalformedLine`] on the first line that splits
/// into more than two parts; nothing after that line is processed.
pub fn parse_def(input: &str, params: &ParamSet) -> Result<LoadedDef> {
    let mut document = DefDocument::new();
    let mut candidates = Vec::new();
    let mut blanks = 0usize;

    for (line_no, line) in input.lines().enumerate() {
        let parts: Vec<&str> = line.split('=').collect();
        match parts.as_slice() {
            [key, value] => {
                let key = key.trim();
                if params.matches(key) {
                    candidates.push(key.to_string());
                }
                document.set(key, value.trim());
            }
            [content] => {
                let content = content.trim();
                if content.is_empty() {
                    document.set(model::blank_key(blanks), "");
                    blanks += 1;
                } else {
                    // Key-only line, e.g. a section header.
                    document.set(content, "");
                }
            }
            _ => return Err(TireditError::MalformedLine { line: line_no + 1 }),
        }
    }

    Ok(LoadedDef {
        document,
        candidates,
    })
}

/// Reads and parses a def file.
pub fn read_def(path: &Path, params: &ParamSet) -> Result<LoadedDef> {
    let content = fs::read_to_string(path)?;
    parse_def(&content, params)
}

/// Renders the document back to def-file text, substituting `edited` as
/// `(key, new_value)` if given.
///
/// Fails with [`TireditError::KeyNotFound`] before emitting anything if the
/// edited key is not in the document.
pub fn render_def(
    document: &DefDocument,
    edited: Option<(&str, &str)>,
    legacy_spacing: bool,
) -> Result<String> {
    if let Some((key, _)) = edited {
        document.get(key)?;
    }

    let mut out = String::new();
    for (key, value) in document.iter() {
        match edited {
            Some((edited_key, new_value)) if key == edited_key => {
                if legacy_spacing {
                    out.push_str(&format!("{}={}\n", key, new_value));
                } else {
                    out.push_str(&format!("{}= {}\n", key, new_value));
                }
            }
            _ if model::is_blank_key(key) => out.push_str(" \n"),
            _ => out.push_str(&format!("{}= {}\n", key, value)),
        }
    }
    Ok(out)
}

/// Writes the document to `path`, substituting `edited`, then persists the
/// new value into the document so subsequent writes reflect it.
pub fn write_def(
    document: &mut DefDocument,
    path: &Path,
    edited: Option<(&str, &str)>,
    legacy_spacing: bool,
) -> Result<()> {
    let rendered = render_def(document, edited, legacy_spacing)?;
    fs::write(path, rendered)?;
    if let Some((key, value)) = edited {
        document.set(key, value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParamSet;

    const SAMPLE: &str = "LOGNAME= galaxy.log\n\
                          ACTION= 1\n\
                          \n\
                          NUR= 4.0\n\
                          RADI= 0.0 10.0 20.0 30.0\n\
                          VROT= 0.0 100.0 120.0 130.0\n\
                          VROT_2= 0.0 95.0 110.0 118.0\n\
                          INCL= 60.0 60.0 61.0 62.0\n\
                          \n\
                          # FITTING\n\
                          VARY= VROT 1:4\n";

    fn parse(input: &str) -> LoadedDef {
        parse_def(input, &ParamSet::new()).unwrap()
    }

    #[test]
    fn keys_come_back_in_file_order() {
        let loaded = parse(SAMPLE);
        let keys: Vec<&str> = loaded.document.keys().collect();
        assert_eq!(
            keys,
            vec![
                "LOGNAME", "ACTION", "BLANK000", "NUR", "RADI", "VROT", "VROT_2", "INCL",
                "BLANK001", "# FITTING", "VARY",
            ]
        );
    }

    #[test]
    fn values_are_trimmed() {
        let loaded = parse(SAMPLE);
        assert_eq!(loaded.document.get("NUR").unwrap(), "4.0");
        assert_eq!(loaded.document.get("VARY").unwrap(), "VROT 1:4");
    }

    #[test]
    fn candidates_are_collected_in_file_order() {
        let loaded = parse(SAMPLE);
        assert_eq!(loaded.candidates, vec!["VROT", "VROT_2", "INCL"]);
    }

    #[test]
    fn consecutive_blanks_number_upward() {
        let loaded = parse("A= 1\n\n\n\nB= 2\n");
        let keys: Vec<&str> = loaded.document.keys().collect();
        assert_eq!(keys, vec!["A", "BLANK000", "BLANK001", "BLANK002", "B"]);
    }

    #[test]
    fn whitespace_only_lines_count_as_blank() {
        let loaded = parse("A= 1\n   \t\nB= 2\n");
        assert!(loaded.document.contains_key("BLANK000"));
    }

    #[test]
    fn key_only_lines_get_empty_values() {
        let loaded = parse("HEADER\nA= 1\n");
        assert_eq!(loaded.document.get("HEADER").unwrap(), "");
    }

    #[test]
    fn double_equals_aborts_the_read() {
        let err = parse_def("A= 1\nB= 2 = 3\nC= 4\n", &ParamSet::new()).unwrap_err();
        assert!(matches!(
            err,
            crate::error::TireditError::MalformedLine { line: 2 }
        ));
    }

    #[test]
    fn render_without_edit_normalizes_spacing() {
        let loaded = parse("A=1\nB=  2\n\nC= 3\n");
        let out = render_def(&loaded.document, None, true).unwrap();
        assert_eq!(out, "A= 1\nB= 2\n \nC= 3\n");
    }

    #[test]
    fn roundtrip_is_stable_after_normalization() {
        let loaded = parse(SAMPLE);
        let first = render_def(&loaded.document, None, true).unwrap();
        let reparsed = parse(&first);
        let second = render_def(&reparsed.document, None, true).unwrap();
        assert_eq!(first, second);
        assert_eq!(loaded.document, reparsed.document);
    }

    #[test]
    fn edited_key_is_written_without_a_space() {
        let loaded = parse("A= 1\nVROT= 0.0 100.0\nB= 2\n");
        let out = render_def(&loaded.document, Some(("VROT", "+1.00000E+02")), true).unwrap();
        assert_eq!(out, "A= 1\nVROT=+1.00000E+02\nB= 2\n");
    }

    #[test]
    fn normalized_spacing_applies_to_the_edited_key_too() {
        let loaded = parse("VROT= 0.0\n");
        let out = render_def(&loaded.document, Some(("VROT", "+5.00000E+01")), false).unwrap();
        assert_eq!(out, "VROT= +5.00000E+01\n");
    }

    #[test]
    fn rendering_an_unknown_edit_key_fails() {
        let loaded = parse("A= 1\n");
        assert!(render_def(&loaded.document, Some(("VROT", "x")), true).is_err());
    }

    #[test]
    fn write_persists_the_edited_value() {
        let dir = tempfile::tempdir().unwrap();
        let out_path = dir.path().join("out.def");

        let mut loaded = parse("VROT= 0.0 100.0\nINCL= 60.0 60.0\n");
        write_def(
            &mut loaded.document,
            &out_path,
            Some(("VROT", "+5.00000E+01 +9.00000E+01")),
            true,
        )
        .unwrap();

        assert_eq!(
            loaded.document.get("VROT").unwrap(),
            "+5.00000E+01 +9.00000E+01"
        );
        let written = std::fs::read_to_string(&out_path).unwrap();
        assert_eq!(
            written,
            "VROT=+5.00000E+01 +9.00000E+01\nINCL= 60.0 60.0\n"
        );

        // A later write of another key reflects the persisted value.
        let second = render_def(&loaded.document, Some(("INCL", "+6.10000E+01")), true).unwrap();
        assert_eq!(
            second,
            "VROT= +5.00000E+01 +9.00000E+01\nINCL=+6.10000E+01\n"
        );
    }
}
