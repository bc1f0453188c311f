use approx::assert_abs_diff_eq;
use pretty_assertions::assert_eq;
use tests::scan_detections;
use vecta_data::{ScanLog, ScanRecord};
use vecta_scan::{evaluate_detection_risk, ScanReport, ScanRiskLevel};

#[test]
fn scan_fixture_scores_and_recommends_in_order() {
    let counts = scan_detections();
    let result = evaluate_detection_risk(&counts);

    // 2.5*2 + 1.5 + 2.0 + 1.0 (unknown Bucket) = 9.5
    assert_abs_diff_eq!(result.score, 9.5);
    assert_eq!(result.level, ScanRiskLevel::High);

    let report = ScanReport::new(counts, result);
    assert_eq!(
        report.recommendations,
        vec![
            "Remove or cover old tires".to_string(),
            "Remove coconut shells".to_string(),
            "Dispose of bottles properly".to_string(),
        ]
    );
    let text = report.to_string();
    assert!(text.contains("  - Bucket: 1\n"));
    assert!(text.contains("Risk Score: 9.5\n"));
}

#[test]
fn scans_accumulate_in_the_log() {
    let dir = tempfile::tempdir().unwrap();
    let log = ScanLog::new(dir.path().join("environment_scans.csv"));

    let counts = scan_detections();
    let result = evaluate_detection_risk(&counts);
    for user in 1..=3 {
        log.append(&ScanRecord::now(user, Some("tester"), &counts, &result))
            .unwrap();
    }

    let rows = log.read_all().unwrap();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r.risk_level == "HIGH RISK"));
    assert_eq!(rows[2].user_id, 3);
}
