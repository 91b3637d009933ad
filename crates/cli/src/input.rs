//! Point input: CSV files (via polars) and whitespace/comma separated lines.

use anyhow::{bail, Context, Result};
use hulls::api::{draw_points, CloudCfg, CloudReplay, Spread};
use hulls::Point;
use polars::prelude::*;
use std::io::BufRead;
use std::path::Path;

/// Read integer `x`,`y` columns from a CSV file with a header row.
pub fn read_points_csv(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([col("x"), col("y")])
        .collect()
        .with_context(|| format!("reading x,y columns from {}", path.display()))?;
    let xs = integer_column(&df, "x", path)?;
    let ys = integer_column(&df, "y", path)?;
    let mut points = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => points.push(Point::new(x, y)),
            _ => bail!("{}: row {} has a missing or non-integer coordinate", path.display(), row + 1),
        }
    }
    tracing::info!(rows = points.len(), path = %path.display(), "points_csv");
    Ok(points)
}

/// Column `name` as `i32`. Float or text columns are rejected, not truncated.
fn integer_column(df: &DataFrame, name: &str, path: &Path) -> Result<Int32Chunked> {
    let series = df.column(name)?;
    if !series.dtype().is_integer() {
        bail!(
            "{}: column '{name}' holds non-integer coordinates ({})",
            path.display(),
            series.dtype()
        );
    }
    // Out-of-range values become nulls and are rejected per row.
    Ok(series.cast(&DataType::Int32)?.i32()?.clone())
}

/// Parse one `x y` / `x,y` line. Blank lines and `#` comments yield `None`.
pub fn parse_point_line(line: &str) -> Result<Option<Point>> {
    let line = line.split('#').next().unwrap_or("").trim();
    if line.is_empty() {
        return Ok(None);
    }
    let fields: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|f| !f.is_empty())
        .collect();
    let [x, y] = fields.as_slice() else {
        bail!("expected two coordinates, got '{line}'");
    };
    let x: i32 = x.parse().with_context(|| format!("bad x coordinate '{x}'"))?;
    let y: i32 = y.parse().with_context(|| format!("bad y coordinate '{y}'"))?;
    Ok(Some(Point::new(x, y)))
}

/// Iterate points from a line-oriented reader, skipping blanks and comments.
pub fn points_from_reader<R: BufRead>(reader: R) -> impl Iterator<Item = Result<Point>> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let parsed = line
                .context("reading input")
                .and_then(|l| parse_point_line(&l))
                .with_context(|| format!("line {}", i + 1));
            parsed.transpose()
        })
}

/// Random cloud on the default canvas.
pub fn random_points(count: usize, seed: u64, disk: bool) -> Vec<Point> {
    let cfg = CloudCfg {
        count,
        spread: if disk { Spread::Disk } else { Spread::Box },
        ..CloudCfg::default()
    };
    let points = draw_points(cfg, CloudReplay { seed, index: 0 });
    tracing::info!(count, seed, disk, "random_points");
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn parses_lines() {
        assert_eq!(parse_point_line("3 4").unwrap(), Some(Point::new(3, 4)));
        assert_eq!(parse_point_line(" -1, 7 ").unwrap(), Some(Point::new(-1, 7)));
        assert_eq!(parse_point_line("# comment").unwrap(), None);
        assert_eq!(parse_point_line("").unwrap(), None);
        assert!(parse_point_line("1 2 3").is_err());
        assert!(parse_point_line("1.5 2").is_err());
    }

    #[test]
    fn reader_skips_blanks_and_reports_line() {
        let text = "0 0\n\n4 0 # corner\n4 4\nnope\n";
        let items: Vec<_> = points_from_reader(text.as_bytes()).collect();
        assert_eq!(items.len(), 4);
        assert_eq!(items[1].as_ref().unwrap(), &Point::new(4, 0));
        let err = items[3].as_ref().unwrap_err();
        assert!(format!("{err:#}").contains("line 5"));
    }

    #[test]
    fn reads_csv_columns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.csv");
        fs::write(&path, "x,y\n0,0\n4,0\n4,4\n0,4\n2,2\n").unwrap();
        let points = read_points_csv(&path).unwrap();
        assert_eq!(points.len(), 5);
        assert_eq!(points[4], Point::new(2, 2));
    }

    #[test]
    fn csv_with_fractional_coordinates_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("floats.csv");
        fs::write(&path, "x,y\n1.5,2\n4.9,0\n3,3\n").unwrap();
        let err = read_points_csv(&path).unwrap_err();
        assert!(format!("{err:#}").contains("non-integer"));
    }

    #[test]
    fn csv_with_out_of_range_coordinates_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wide.csv");
        fs::write(&path, "x,y\n0,0\n9999999999,1\n3,3\n").unwrap();
        assert!(read_points_csv(&path).is_err());
    }

    #[test]
    fn random_points_are_seeded() {
        assert_eq!(random_points(10, 5, false), random_points(10, 5, false));
        assert_eq!(random_points(10, 5, true).len(), 10);
    }
}
