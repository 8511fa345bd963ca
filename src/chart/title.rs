use crate::filter::{EmployeeFilter, Selection};

/// Heading shown above the radar chart for the current selection.
pub fn chart_title(selection: &Selection) -> String {
    let who = match &selection.employee {
        EmployeeFilter::All => "팀 전체".to_string(),
        EmployeeFilter::Only(name) => format!("담당자 {name}"),
    };

    match selection.metric {
        Some(metric) => format!(
            "{who} '{}' 관련 역량 분석",
            metric.metric().short_label()
        ),
        None => format!("{who} 역량 변화 (0주차 대비)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MetricId;

    #[test]
    fn test_team_wide_title() {
        assert_eq!(
            chart_title(&Selection::default()),
            "팀 전체 역량 변화 (0주차 대비)"
        );
    }

    #[test]
    fn test_employee_and_metric_title() {
        let selection = Selection {
            employee: EmployeeFilter::Only("kim".into()),
            metric: Some(MetricId::Improvement),
        };
        assert_eq!(chart_title(&selection), "담당자 kim '개선력' 관련 역량 분석");
    }
}
