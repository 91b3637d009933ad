//! Print the hull of a few random clouds under every algorithm.
//!
//! Usage:
//!   cargo run -p hulls --example compare_algorithms -- 12
//!
//! The optional argument is the number of points per cloud (default 12).

use hulls::api::{compute_all, draw_points, vertex_sets_agree, CloudCfg, CloudReplay};

fn main() {
    let count = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(12);
    let cfg = CloudCfg {
        count,
        ..CloudCfg::default()
    };
    let mut tok = CloudReplay { seed: 2025, index: 0 };
    for i in 0..3 {
        let points = draw_points(cfg, tok);
        tok = tok.next();
        let results = compute_all(&points);
        println!("cloud {i}: n={}", points.len());
        for (choice, result) in &results {
            match result {
                Ok(hull) => {
                    let verts: Vec<String> = hull.vertices().iter().map(|p| p.to_string()).collect();
                    println!("  {:<24} h={} [{}]", choice.label(), hull.len(), verts.join(" "));
                }
                Err(e) => println!("  {:<24} error: {e}", choice.label()),
            }
        }
        println!("  vertex sets agree: {}", vertex_sets_agree(&results));
    }
}
