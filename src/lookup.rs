//! 최근접 이웃 탐색과 허용오차 기반 표준치 일치 판정.
//!
//! 모든 함수는 전체 함수(total)다. 범위를 벗어난 목표값은 `None` 이웃과 불일치로 끝난다.

use serde::Serialize;
use tracing::{debug, trace};

use crate::series::{Designation, ReferenceData, ReferenceSeries, Resolver, SeriesKind};

/// 표준치 일치로 보는 최대 차이(mm). 열린 구간이므로 정확히 이 값만큼 떨어지면 불일치.
pub const TOLERANCE_MM: f64 = 1e-3;

/// `|value - target| < TOLERANCE_MM`
pub fn is_exact_match(value: f64, target: f64) -> bool {
    (value - target).abs() < TOLERANCE_MM
}

/// 목표값보다 엄격히 작은 값 중 가장 가까운 값과 엄격히 큰 값 중 가장 가까운 값.
///
/// 한 번의 순회로 현재 최적값보다 더 가까울 때만 교체하므로
/// 같은 거리의 후보가 둘이면 먼저 나온 쪽이 남는다.
pub fn find_nearest<I>(values: I, target: f64) -> (Option<f64>, Option<f64>)
where
    I: IntoIterator<Item = f64>,
{
    let mut lower: Option<f64> = None;
    let mut upper: Option<f64> = None;
    for v in values {
        if v < target && lower.map_or(true, |l| target - v < target - l) {
            trace!(candidate = v, target, "lower");
            lower = Some(v);
        }
        if v > target && upper.map_or(true, |u| v - target < u - target) {
            trace!(candidate = v, target, "upper");
            upper = Some(v);
        }
    }
    (lower, upper)
}

/// (키, 값) 목록을 순서대로 훑어 키가 허용오차 안에 드는 첫 값을 돌려준다.
pub fn tolerant_lookup<V, I>(pairs: I, key: f64) -> Option<V>
where
    I: IntoIterator<Item = (f64, V)>,
{
    pairs
        .into_iter()
        .find(|(k, _)| is_exact_match(*k, key))
        .map(|(_, v)| v)
}

/// 계열 안의 mm 값에 대한 호칭(게이지 번호, 분수 표기)을 찾는다.
pub fn resolve_designation(series: &ReferenceSeries, value: f64) -> Option<Designation> {
    match &series.resolver {
        Resolver::Gauge(points) => {
            tolerant_lookup(points.iter().map(|p| (p.mm, p.gauge)), value).map(Designation::Gauge)
        }
        Resolver::Fraction(fractions) => fractions.label_for_mm(value).map(Designation::Fraction),
        Resolver::None => None,
    }
}

/// 이웃 또는 일치 값 하나.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesValue {
    pub mm: f64,
    pub designation: Option<Designation>,
}

impl SeriesValue {
    fn resolve(series: &ReferenceSeries, mm: f64) -> Self {
        Self {
            mm,
            designation: resolve_designation(series, mm),
        }
    }
}

/// 계열 하나에 대한 조회 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesMatch {
    pub kind: SeriesKind,
    pub label: &'static str,
    pub lower: Option<SeriesValue>,
    pub upper: Option<SeriesValue>,
    pub is_exact: bool,
    /// 일치한 표준치. `is_exact`일 때만 있다.
    pub exact: Option<SeriesValue>,
}

impl SeriesMatch {
    pub fn designation(&self) -> Option<Designation> {
        self.exact.and_then(|e| e.designation)
    }
}

/// 전체 계열 조회 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupReport {
    pub target_mm: f64,
    pub series: Vec<SeriesMatch>,
    /// 어느 계열에서든 표준치와 일치했는지
    pub any_exact: bool,
}

impl LookupReport {
    pub fn get(&self, kind: SeriesKind) -> Option<&SeriesMatch> {
        self.series.iter().find(|m| m.kind == kind)
    }
}

/// 계열 하나를 조회한다. 이웃 탐색과 일치 탐색은 서로 독립된 순회다.
pub fn lookup_series(series: &ReferenceSeries, target: f64) -> SeriesMatch {
    let (lower, upper) = find_nearest(series.values_mm.iter().copied(), target);
    let exact = series
        .values_mm
        .iter()
        .copied()
        .find(|v| is_exact_match(*v, target))
        .map(|v| SeriesValue::resolve(series, v));
    let result = SeriesMatch {
        kind: series.kind,
        label: series.label,
        lower: lower.map(|v| SeriesValue::resolve(series, v)),
        upper: upper.map(|v| SeriesValue::resolve(series, v)),
        is_exact: exact.is_some(),
        exact,
    };
    debug!(
        series = series.label,
        target,
        lower = ?lower,
        upper = ?upper,
        exact = ?result.exact.map(|e| e.mm),
        "series lookup"
    );
    result
}

/// 모든 계열을 순서대로 조회한다.
pub fn lookup(data: &ReferenceData, target: f64) -> LookupReport {
    let series: Vec<SeriesMatch> = data
        .series()
        .iter()
        .map(|s| lookup_series(s, target))
        .collect();
    let any_exact = series.iter().any(|m| m.is_exact);
    LookupReport {
        target_mm: target,
        series,
        any_exact,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn neighbours_bracket_target(target in -1.0_f64..30.0) {
            let data = ReferenceData::build();
            for series in data.series() {
                let (lower, upper) = find_nearest(series.values_mm.iter().copied(), target);
                if let Some(l) = lower {
                    prop_assert!(l < target);
                    prop_assert!(!series.values_mm.iter().any(|v| *v > l && *v < target));
                } else {
                    prop_assert!(series.values_mm.iter().all(|v| *v >= target));
                }
                if let Some(u) = upper {
                    prop_assert!(u > target);
                    prop_assert!(!series.values_mm.iter().any(|v| *v < u && *v > target));
                } else {
                    prop_assert!(series.values_mm.iter().all(|v| *v <= target));
                }
            }
        }

        #[test]
        fn exact_flag_agrees_with_scan(target in 0.0_f64..26.0) {
            let data = ReferenceData::build();
            let report = lookup(&data, target);
            for (series, m) in data.series().iter().zip(&report.series) {
                let expected = series.values_mm.iter().any(|v| (v - target).abs() < TOLERANCE_MM);
                prop_assert_eq!(m.is_exact, expected);
            }
            prop_assert_eq!(report.any_exact, report.series.iter().any(|m| m.is_exact));
        }
    }
}
