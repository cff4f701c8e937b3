use serde::{Deserialize, Serialize};

/// 1 in = 25.4 mm (정의값).
pub const MM_PER_INCH: f64 = 25.4;

/// 두께 입력에 쓰이는 길이 단위. 내부 기준은 밀리미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Millimeter,
    Inch,
}

impl LengthUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            LengthUnit::Millimeter => "mm",
            LengthUnit::Inch => "in",
        }
    }
}

fn to_mm(value: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Millimeter => value,
        LengthUnit::Inch => value * MM_PER_INCH,
    }
}

fn from_mm(value_mm: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Millimeter => value_mm,
        LengthUnit::Inch => value_mm / MM_PER_INCH,
    }
}

/// 길이를 다른 단위로 변환한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    if from == to {
        return value;
    }
    from_mm(to_mm(value, from), to)
}

/// 인치를 밀리미터로 환산한다.
pub fn inch_to_mm(inches: f64) -> f64 {
    to_mm(inches, LengthUnit::Inch)
}

/// 소수점 `places` 자리로 반올림한다.
///
/// 부동소수 값의 정확한 2진 표현을 기준으로 하고 동률은 짝수 쪽으로 보낸다.
/// `(x * 1000.0).round()`는 1.5875처럼 경계에 걸린 값을 다르게 처리하므로 쓰지 않는다.
pub fn round_to(value: f64, places: usize) -> f64 {
    format!("{value:.places$}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inch_to_mm_uses_exact_factor() {
        assert_eq!(inch_to_mm(1.0), 25.4);
        assert_eq!(inch_to_mm(0.125), 3.175);
    }

    #[test]
    fn convert_roundtrip() {
        let mm = convert_length(0.75, LengthUnit::Inch, LengthUnit::Millimeter);
        let back = convert_length(mm, LengthUnit::Millimeter, LengthUnit::Inch);
        assert!((back - 0.75).abs() < 1e-12);
    }

    #[test]
    fn round_to_follows_binary_value() {
        // 1/16" = 1.5875 mm 이지만 f64로는 1.58749999... 이다.
        assert_eq!(round_to(0.0625 * 25.4, 3), 1.587);
        // 23.8125는 정확히 표현되는 동률이므로 짝수 쪽으로 간다.
        assert_eq!(round_to(23.8125, 3), 23.812);
        assert_eq!(round_to(0.015625 * 25.4, 3), 0.397);
    }
}
