use growth_radar::catalog::MetricId;
use growth_radar::chart::{Domain, aggregate_chart};
use growth_radar::filter::{EmployeeFilter, Selection, employees};
use growth_radar::import::import_file;
use growth_radar::parser::parse_with_report;

const FIXTURE: &str = "tests/fixtures/sample_log.csv";

#[test]
fn test_full_pipeline() {
    let outcome = import_file(FIXTURE).expect("Failed to import fixture");

    // the truncated week-1 row for 이서연 is line 5
    assert_eq!(outcome.skipped_rows, vec![5]);
    assert_eq!(outcome.records.len(), 16);
    assert_eq!(employees(&outcome.records), vec!["김민수", "이서연"]);

    let chart = aggregate_chart(&outcome.records);
    assert_eq!(chart.latest_week, 2);
    assert_eq!(chart.baseline(), [1, 1, 1, 1, 0, 0]);
    assert_eq!(chart.cumulative(), [4, 2, 3, 2, 2, -1]);
    assert_eq!(chart.domain, Domain { min: -2, max: 5 });
}

#[test]
fn test_quoted_narrative_fields() {
    let outcome = import_file(FIXTURE).unwrap();

    let first = &outcome.records[0];
    assert_eq!(first.behavior, "팀 위키 정리, 질문 목록 작성");

    let lee = outcome
        .records
        .iter()
        .find(|r| r.employee == "이서연" && r.week == 0)
        .unwrap();
    assert_eq!(lee.feedback, "\"왜\"를 더 물어보기");
}

#[test]
fn test_filtered_chart_for_one_employee_and_metric() {
    let outcome = import_file(FIXTURE).unwrap();
    let selection = Selection {
        employee: EmployeeFilter::Only("김민수".into()),
        metric: Some(MetricId::Ownership),
    };

    let filtered = selection.apply(&outcome.records);
    assert_eq!(filtered.len(), 2);

    let chart = aggregate_chart(&filtered);
    assert_eq!(chart.baseline()[0], 1);
    assert_eq!(chart.cumulative()[0], 3);
    assert_eq!(chart.cumulative()[1..], [0, 0, 0, 0, 0]);
    assert_eq!(chart.latest_week, 1);
}

#[test]
fn test_reparse_is_identical() {
    let text = std::fs::read_to_string(FIXTURE).unwrap();
    assert_eq!(
        parse_with_report(&text).unwrap(),
        parse_with_report(&text).unwrap()
    );
}
