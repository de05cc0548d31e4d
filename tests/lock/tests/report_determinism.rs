//! In-process determinism of reports and digests, with the digest
//! recomputed independently from the domain bytes.

use sha2::{Digest, Sha256};
use waypoint_harness::grid_file::parse_grid_text;
use waypoint_harness::runner::run;
use waypoint_kernel::proof::hash::HashDomain;
use waypoint_search::policy::SearchPolicy;
use waypoint_search::strategy::{SearchConfig, Strategy};

const MAZE: &str = "\
2 1 1 0 1
1 0 1 1 1
1 0 0 0 1
1 1 1 1 3
";

fn independent_digest(domain: HashDomain, bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(domain.as_bytes());
    hasher.update(bytes);
    format!("sha256:{}", hex::encode(hasher.finalize()))
}

#[test]
fn run_digest_matches_independent_sha256() {
    let fixture = parse_grid_text(MAZE).unwrap();
    for strategy in Strategy::ALL {
        let report = run(&fixture, &SearchConfig::new(strategy), &SearchPolicy::default()).unwrap();
        assert_eq!(
            report.digest.as_str(),
            independent_digest(HashDomain::RunReport, &report.report_bytes),
            "{strategy}"
        );
    }
}

#[test]
fn search_digest_matches_independent_sha256() {
    let fixture = parse_grid_text(MAZE).unwrap();
    let report = run(
        &fixture,
        &SearchConfig::new(Strategy::AStar),
        &SearchPolicy::default(),
    )
    .unwrap();
    let bytes = report.result.to_canonical_json_bytes().unwrap();
    assert_eq!(
        report.result.digest().unwrap().as_str(),
        independent_digest(HashDomain::SearchReport, &bytes)
    );
}

#[test]
fn repeated_runs_are_byte_identical() {
    let fixture = parse_grid_text(MAZE).unwrap();
    for strategy in Strategy::ALL {
        let config = SearchConfig::new(strategy);
        let first = run(&fixture, &config, &SearchPolicy::default()).unwrap();
        for _ in 0..3 {
            let again = run(&fixture, &config, &SearchPolicy::default()).unwrap();
            assert_eq!(first.report_bytes, again.report_bytes, "{strategy}");
            assert_eq!(first.digest, again.digest, "{strategy}");
            assert_eq!(first.rendered, again.rendered, "{strategy}");
        }
    }
}

#[test]
fn report_is_compact_sorted_integer_json() {
    let fixture = parse_grid_text(MAZE).unwrap();
    let report = run(
        &fixture,
        &SearchConfig::new(Strategy::BreadthFirst),
        &SearchPolicy::default(),
    )
    .unwrap();
    let text = std::str::from_utf8(&report.report_bytes).unwrap();
    assert!(!text.contains(' '), "canonical JSON is compact");
    assert!(!text.contains('.'), "canonical JSON carries no floats");

    assert!(text.starts_with(r#"{"found":true,"goal":[3,4],"grid_digest":"sha256:"#));
    let heuristic_at = text.find(r#""heuristic":"#).unwrap();
    let strategy_at = text.find(r#""strategy":"#).unwrap();
    assert!(heuristic_at < strategy_at, "keys are written in sorted order");

    let value: serde_json::Value = serde_json::from_str(text).unwrap();
    assert_eq!(value["found"], true);
    assert_eq!(value["stats"]["path_cost"], report.result.stats.path_cost);
}

#[test]
fn path_digest_ignores_strategy_when_paths_coincide() {
    let fixture = parse_grid_text("2 1 1 1 3\n").unwrap();
    let digests: Vec<String> = Strategy::ALL
        .into_iter()
        .map(|s| {
            run(&fixture, &SearchConfig::new(s), &SearchPolicy::default())
                .unwrap()
                .result
                .path_digest()
                .unwrap()
                .to_string()
        })
        .collect();
    assert!(digests.windows(2).all(|w| w[0] == w[1]));
}
