//! 1/64" 간격 분수 인치 계열과 mm 역매핑.

use num_rational::Ratio;
use tracing::warn;

use crate::input::parse_ratio;
use crate::units::{inch_to_mm, round_to};

/// 분수 인치 계열의 mm 값은 소수 3자리로 반올림해 보관한다.
pub const FRACTION_MM_PLACES: usize = 3;

/// 1/64" ~ 1" 까지의 분수 표기. 작성 순서가 곧 오름차순이다.
pub const FRACTIONAL_INCH_LABELS: [&str; 64] = [
    "1/64", "1/32", "3/64", "1/16", "5/64", "3/32", "7/64", "1/8", "9/64", "5/32", "11/64",
    "3/16", "13/64", "7/32", "15/64", "1/4", "17/64", "9/32", "19/64", "5/16", "21/64",
    "11/32", "23/64", "3/8", "25/64", "13/32", "27/64", "7/16", "29/64", "15/32", "31/64",
    "1/2", "33/64", "17/32", "35/64", "9/16", "37/64", "19/32", "39/64", "5/8", "41/64",
    "21/32", "43/64", "11/16", "45/64", "23/32", "47/64", "3/4", "49/64", "25/32", "51/64",
    "13/16", "53/64", "27/32", "55/64", "7/8", "57/64", "29/32", "59/64", "15/16", "61/64",
    "31/32", "63/64", "1",
];

#[derive(Debug, Clone, PartialEq)]
pub struct FractionalInch {
    pub label: &'static str,
    pub ratio: Ratio<i64>,
    pub inches: f64,
    /// 소수 3자리 반올림된 mm 값
    pub mm: f64,
}

#[derive(Debug, Clone)]
pub struct FractionalInchSeries {
    entries: Vec<FractionalInch>,
    /// mm → 분수 표기 역매핑. 같은 mm로 반올림되는 분수가 있으면 나중 것이 덮어쓴다.
    reverse: Vec<(f64, &'static str)>,
}

impl FractionalInchSeries {
    pub fn build() -> Self {
        Self::from_labels(&FRACTIONAL_INCH_LABELS)
    }

    pub fn from_labels(labels: &[&'static str]) -> Self {
        let mut entries = Vec::with_capacity(labels.len());
        let mut reverse: Vec<(f64, &'static str)> = Vec::with_capacity(labels.len());
        for &label in labels {
            let ratio = match parse_ratio(label) {
                Ok(r) => r,
                Err(err) => {
                    warn!(label, %err, "skipping unparsable fraction");
                    continue;
                }
            };
            let inches = ratio_to_f64(ratio);
            let mm = round_to(inch_to_mm(inches), FRACTION_MM_PLACES);
            match reverse.iter_mut().find(|(key, _)| *key == mm) {
                Some(slot) => slot.1 = label,
                None => reverse.push((mm, label)),
            }
            entries.push(FractionalInch {
                label,
                ratio,
                inches,
                mm,
            });
        }
        Self { entries, reverse }
    }

    pub fn entries(&self) -> &[FractionalInch] {
        &self.entries
    }

    pub fn values_mm(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.mm).collect()
    }

    /// 계열에서 나온 mm 값의 분수 표기를 찾는다. 키는 정확히 같아야 한다.
    pub fn label_for_mm(&self, mm: f64) -> Option<&'static str> {
        self.reverse
            .iter()
            .find(|(key, _)| *key == mm)
            .map(|(_, label)| *label)
    }
}

/// 정확한 유리수를 가장 가까운 f64로 바꾼다.
pub fn ratio_to_f64(ratio: Ratio<i64>) -> f64 {
    *ratio.numer() as f64 / *ratio.denom() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_has_64_increasing_entries() {
        let series = FractionalInchSeries::build();
        assert_eq!(series.entries().len(), 64);
        for pair in series.entries().windows(2) {
            assert!(pair[0].inches < pair[1].inches);
            assert!(pair[0].mm < pair[1].mm, "{} vs {}", pair[0].label, pair[1].label);
        }
        assert_eq!(series.entries()[63].mm, 25.4);
    }

    #[test]
    fn known_values() {
        let series = FractionalInchSeries::build();
        let eighth = series.entries().iter().find(|e| e.label == "1/8").unwrap();
        assert_eq!(eighth.mm, 3.175);
        assert_eq!(eighth.ratio, Ratio::new(1, 8));
        let sixteenth = series.entries().iter().find(|e| e.label == "1/16").unwrap();
        assert_eq!(sixteenth.mm, 1.587);
        assert_eq!(series.label_for_mm(23.812), Some("15/16"));
    }

    #[test]
    fn later_label_overwrites_on_collision() {
        // 같은 값을 다른 표기로 두 번 넣으면 역매핑에는 나중 것만 남는다.
        let series = FractionalInchSeries::from_labels(&["1/8", "2/16"]);
        assert_eq!(series.entries().len(), 2);
        assert_eq!(series.label_for_mm(3.175), Some("2/16"));
    }

    #[test]
    fn unparsable_label_is_skipped() {
        let series = FractionalInchSeries::from_labels(&["1/8", "x/0", "1/4"]);
        assert_eq!(series.entries().len(), 2);
    }
}
