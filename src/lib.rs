//! 판금 두께 조회 로직을 라이브러리로 분리해 CLI 외의 다른 화면에서도 그대로 쓸 수 있게 한다.
//!
//! 입력(mm 또는 인치 분수) → [`input`] → [`lookup`]이 [`series`]의 기준 계열을 훑어
//! 계열별 최근접 이웃과 표준치 일치를 돌려준다.

pub mod app;
pub mod config;
pub mod fractional;
pub mod gauge_db;
pub mod i18n;
pub mod input;
pub mod lookup;
pub mod series;
pub mod ui_cli;
pub mod units;

pub use input::{parse_thickness, InputParseError, Thickness};
pub use lookup::{
    find_nearest, is_exact_match, lookup, resolve_designation, LookupReport, SeriesMatch,
    TOLERANCE_MM,
};
pub use series::{Designation, ReferenceData, ReferenceSeries, SeriesKind};
