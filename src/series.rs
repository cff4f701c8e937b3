//! 조회 대상 기준 계열(게이지 4종, 분수 인치, 미터 권장치)을 묶는다.
//! 프로세스 시작 시 한 번 만들고 이후에는 읽기 전용 참조로만 넘긴다.

use std::fmt;

use serde::Serialize;

use crate::fractional::FractionalInchSeries;
use crate::gauge_db::{find_table, GaugeMaterial, GaugePoint, METRIC_STANDARD_MM};

/// 기준 계열 종류. 선언 순서가 출력 순서다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    SteelGauge,
    GalvanizedGauge,
    StainlessGauge,
    FractionalInches,
    AluminumGauge,
    MetricStandard,
}

impl SeriesKind {
    pub const ALL: [SeriesKind; 6] = [
        SeriesKind::SteelGauge,
        SeriesKind::GalvanizedGauge,
        SeriesKind::StainlessGauge,
        SeriesKind::FractionalInches,
        SeriesKind::AluminumGauge,
        SeriesKind::MetricStandard,
    ];

    /// 기본(영문) 표시 이름.
    pub fn label(&self) -> &'static str {
        match self {
            SeriesKind::SteelGauge => "Steel Gauge",
            SeriesKind::GalvanizedGauge => "Galvanized Gauge",
            SeriesKind::StainlessGauge => "Stainless Gauge",
            SeriesKind::FractionalInches => "Fractional Inches",
            SeriesKind::AluminumGauge => "Aluminum Gauge",
            SeriesKind::MetricStandard => "Metric Standard",
        }
    }
}

/// 두께 값에 붙는 사람이 읽는 호칭.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Designation {
    Gauge(u32),
    Fraction(&'static str),
}

impl fmt::Display for Designation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Designation::Gauge(n) => write!(f, "Gauge {n}"),
            Designation::Fraction(label) => write!(f, "{label}\""),
        }
    }
}

/// mm 값 → 호칭 해석 방식.
#[derive(Debug, Clone)]
pub enum Resolver {
    /// 허용오차 기반 선형 탐색
    Gauge(&'static [GaugePoint]),
    /// 역매핑 정확 일치
    Fraction(FractionalInchSeries),
    None,
}

#[derive(Debug, Clone)]
pub struct ReferenceSeries {
    pub kind: SeriesKind,
    pub label: &'static str,
    /// 작성 순서 그대로의 mm 값
    pub values_mm: Vec<f64>,
    pub resolver: Resolver,
}

impl ReferenceSeries {
    fn gauge(kind: SeriesKind, material: GaugeMaterial) -> Self {
        let table = find_table(material);
        Self {
            kind,
            label: kind.label(),
            values_mm: table.values_mm().collect(),
            resolver: Resolver::Gauge(table.points),
        }
    }

    fn fractional(series: FractionalInchSeries) -> Self {
        Self {
            kind: SeriesKind::FractionalInches,
            label: SeriesKind::FractionalInches.label(),
            values_mm: series.values_mm(),
            resolver: Resolver::Fraction(series),
        }
    }

    fn metric() -> Self {
        Self {
            kind: SeriesKind::MetricStandard,
            label: SeriesKind::MetricStandard.label(),
            values_mm: METRIC_STANDARD_MM.to_vec(),
            resolver: Resolver::None,
        }
    }

    pub fn min_mm(&self) -> Option<f64> {
        self.values_mm.iter().copied().reduce(f64::min)
    }

    pub fn max_mm(&self) -> Option<f64> {
        self.values_mm.iter().copied().reduce(f64::max)
    }
}

/// 여섯 개 기준 계열 전체.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    series: Vec<ReferenceSeries>,
}

impl ReferenceData {
    pub fn build() -> Self {
        let series = SeriesKind::ALL
            .iter()
            .map(|kind| match kind {
                SeriesKind::SteelGauge => ReferenceSeries::gauge(*kind, GaugeMaterial::Steel),
                SeriesKind::GalvanizedGauge => {
                    ReferenceSeries::gauge(*kind, GaugeMaterial::Galvanized)
                }
                SeriesKind::StainlessGauge => {
                    ReferenceSeries::gauge(*kind, GaugeMaterial::Stainless)
                }
                SeriesKind::FractionalInches => {
                    ReferenceSeries::fractional(FractionalInchSeries::build())
                }
                SeriesKind::AluminumGauge => {
                    ReferenceSeries::gauge(*kind, GaugeMaterial::Aluminum)
                }
                SeriesKind::MetricStandard => ReferenceSeries::metric(),
            })
            .collect();
        Self { series }
    }

    pub fn series(&self) -> &[ReferenceSeries] {
        &self.series
    }

    pub fn get(&self, kind: SeriesKind) -> Option<&ReferenceSeries> {
        self.series.iter().find(|s| s.kind == kind)
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::build()
    }
}
