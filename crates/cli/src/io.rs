//! JSON point files and field selection.
//!
//! A curve file is a JSON array of objects. Two fields, named on the command
//! line, are read as X and Y; every other field rides along untouched.

use anyhow::{bail, Context, Result};
use plcurve::{Axes, Monotone, Xy};
use serde_json::{Map, Value};
use std::fs;
use std::io::Write;
use std::path::Path;

/// One point as read from disk.
pub type Record = Map<String, Value>;

/// Selects X and Y by field name.
#[derive(Clone, Debug)]
pub struct FieldAxes {
    pub x: String,
    pub y: String,
}

impl Axes<Record> for FieldAxes {
    #[inline]
    fn x(&self, p: &Record) -> f64 {
        p.get(&self.x).and_then(Value::as_f64).unwrap_or(f64::NAN)
    }
    #[inline]
    fn y(&self, p: &Record) -> f64 {
        p.get(&self.y).and_then(Value::as_f64).unwrap_or(f64::NAN)
    }
}

impl FieldAxes {
    /// Render a synthesized point under the selected field names.
    /// Non-finite values become `null`.
    pub fn to_json(&self, p: Xy) -> Value {
        let mut m = Map::with_capacity(2);
        m.insert(self.x.clone(), Value::from(p.x));
        m.insert(self.y.clone(), Value::from(p.y));
        Value::Object(m)
    }

    pub fn curve_to_json(&self, c: &Monotone<Xy>) -> Value {
        Value::Array(c.iter().map(|&p| self.to_json(p)).collect())
    }
}

/// Parse a curve document, requiring numeric X and Y fields on every point.
pub fn parse_points(text: &str, axes: &FieldAxes) -> Result<Vec<Record>> {
    let doc: Value = serde_json::from_str(text).context("parsing JSON")?;
    let Value::Array(items) = doc else {
        bail!("expected a JSON array of points");
    };
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            let Value::Object(rec) = item else {
                bail!("point {i} is not a JSON object");
            };
            for field in [&axes.x, &axes.y] {
                if !rec.get(field).is_some_and(Value::is_number) {
                    bail!("point {i} has no numeric field `{field}`");
                }
            }
            Ok(rec)
        })
        .collect()
}

pub fn load_points(path: &Path, axes: &FieldAxes) -> Result<Vec<Record>> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_points(&text, axes).with_context(|| format!("loading {}", path.display()))
}

/// Load a curve and check that X is weakly increasing.
pub fn load_curve(path: &Path, axes: &FieldAxes) -> Result<Monotone<Record>> {
    let points = load_points(path, axes)?;
    Monotone::new(points, axes)
        .with_context(|| format!("{} is not sorted by `{}`", path.display(), axes.x))
}

/// Pretty-print `value` to `out`, or to stdout.
pub fn write_json(out: Option<&Path>, value: &Value) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("creating {}", parent.display()))?;
                }
            }
            fs::write(path, text + "\n").with_context(|| format!("writing {}", path.display()))
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{text}")?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    fn pq() -> FieldAxes {
        FieldAxes {
            x: "p".into(),
            y: "q".into(),
        }
    }

    #[test]
    fn parse_keeps_extra_fields() {
        let pts = parse_points(r#"[{"p": 1, "q": 2.5, "id": "a"}]"#, &pq()).unwrap();
        assert_eq!(pts.len(), 1);
        assert_eq!(pq().x(&pts[0]), 1.0);
        assert_eq!(pq().y(&pts[0]), 2.5);
        assert_eq!(pts[0]["id"], json!("a"));
    }

    #[test]
    fn parse_rejects_missing_or_non_numeric_fields() {
        let err = parse_points(r#"[{"p": 1, "q": 2}, {"p": 3}]"#, &pq()).unwrap_err();
        assert!(err.to_string().contains("point 1"));
        assert!(parse_points(r#"[{"p": "1", "q": 2}]"#, &pq()).is_err());
        assert!(parse_points(r#"{"p": 1, "q": 2}"#, &pq()).is_err());
        assert!(parse_points(r#"[[1, 2]]"#, &pq()).is_err());
    }

    #[test]
    fn load_curve_checks_order() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("good.json");
        let bad = dir.path().join("bad.json");
        fs::write(&good, r#"[{"p": 0, "q": 1}, {"p": 0, "q": 3}, {"p": 2, "q": 0}]"#).unwrap();
        fs::write(&bad, r#"[{"p": 2, "q": 1}, {"p": 1, "q": 3}]"#).unwrap();
        assert_eq!(load_curve(&good, &pq()).unwrap().len(), 3);
        let err = load_curve(&bad, &pq()).unwrap_err();
        assert!(format!("{err:#}").contains("index 1"));
        assert!(load_curve(&dir.path().join("missing.json"), &pq()).is_err());
    }

    #[test]
    fn write_json_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested/out.json");
        let curve = Monotone::assume(vec![Xy::new(1.0, f64::NAN)]);
        write_json(Some(&out), &pq().curve_to_json(&curve)).unwrap();
        let back: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(back, json!([{"p": 1.0, "q": null}]));
    }
}
