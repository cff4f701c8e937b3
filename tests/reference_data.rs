//! 기준 계열 전체에 대한 허용오차/역매핑 성질.
use thickness_finder::fractional::{FractionalInchSeries, FRACTIONAL_INCH_LABELS};
use thickness_finder::gauge_db::gauge_tables;
use thickness_finder::{is_exact_match, resolve_designation, Designation, ReferenceData, SeriesKind};

#[test]
fn every_value_matches_itself_within_open_tolerance() {
    let data = ReferenceData::build();
    for series in data.series() {
        for &v in &series.values_mm {
            assert!(is_exact_match(v, v));
            assert!(!is_exact_match(v, v + 0.0011), "{} {v}", series.label);
            assert!(!is_exact_match(v, v - 0.0011), "{} {v}", series.label);
        }
    }
}

#[test]
fn fraction_labels_round_trip() {
    let data = ReferenceData::build();
    let frac = data.get(SeriesKind::FractionalInches).unwrap();
    let series = FractionalInchSeries::build();
    assert_eq!(series.entries().len(), FRACTIONAL_INCH_LABELS.len());
    for entry in series.entries() {
        assert_eq!(series.label_for_mm(entry.mm), Some(entry.label));
        assert_eq!(
            resolve_designation(frac, entry.mm),
            Some(Designation::Fraction(entry.label))
        );
    }
}

#[test]
fn every_gauge_pair_resolves() {
    let data = ReferenceData::build();
    let kinds = [
        SeriesKind::SteelGauge,
        SeriesKind::GalvanizedGauge,
        SeriesKind::StainlessGauge,
        SeriesKind::AluminumGauge,
    ];
    for (table, kind) in gauge_tables().iter().zip(kinds) {
        let series = data.get(kind).unwrap();
        assert_eq!(series.label, table.name);
        for point in table.points {
            assert_eq!(
                resolve_designation(series, point.mm),
                Some(Designation::Gauge(point.gauge)),
                "{} {}",
                table.name,
                point.mm
            );
        }
    }
}

#[test]
fn rounded_fraction_values() {
    let series = FractionalInchSeries::build();
    let mm = |label: &str| {
        series
            .entries()
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.mm)
    };
    assert_eq!(mm("1/64"), Some(0.397));
    assert_eq!(mm("1/16"), Some(1.587));
    assert_eq!(mm("9/16"), Some(14.287));
    assert_eq!(mm("15/16"), Some(23.812));
    assert_eq!(mm("1"), Some(25.4));
}
