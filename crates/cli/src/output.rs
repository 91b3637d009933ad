//! JSON views of hull results.

use hulls::{AlgorithmChoice, Hull, HullError, Point};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HullReport {
    pub algorithm: &'static str,
    pub points: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hull: Option<Vec<[i32; 2]>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degenerate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HullReport {
    pub fn new(choice: AlgorithmChoice, points: &[Point], result: &Result<Hull, HullError>) -> Self {
        let mut report = Self {
            algorithm: choice.key(),
            points: points.len(),
            hull: None,
            area: None,
            degenerate: None,
            error: None,
        };
        match result {
            Ok(hull) => {
                report.hull = Some(hull.vertices().iter().map(|p| [p.x, p.y]).collect());
                report.area = Some(hull.twice_area().abs() as f64 / 2.0);
                report.degenerate = Some(hull.is_degenerate());
            }
            Err(e) => report.error = Some(e.to_string()),
        }
        report
    }
}

#[derive(Debug, Serialize)]
pub struct CompareReport {
    pub agree: bool,
    pub results: Vec<HullReport>,
}
