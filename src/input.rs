//! 사용자 입력 문자열을 두께(mm)로 해석한다.
//!
//! `/`가 들어 있으면 인치 분수(예: `1/8`), 아니면 mm 소수(예: `3.5`)로 본다.

use num_rational::Ratio;
use thiserror::Error;
use tracing::debug;

use crate::fractional::ratio_to_f64;
use crate::units::{convert_length, LengthUnit};

/// 입력 해석 실패. 이 입력에 대한 처리는 여기서 멈춘다.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputParseError {
    #[error("empty input")]
    Empty,
    #[error("malformed fraction '{0}'")]
    MalformedFraction(String),
    #[error("zero denominator in '{0}'")]
    ZeroDenominator(String),
    #[error("not a number: '{0}'")]
    MalformedNumber(String),
    #[error("value is not finite: '{0}'")]
    NonFinite(String),
}

/// 해석된 입력 두께.
#[derive(Debug, Clone, PartialEq)]
pub struct Thickness {
    /// 앞뒤 공백을 제거한 원래 입력
    pub input: String,
    pub unit: LengthUnit,
    /// 분수로 입력된 경우의 정확한 값(인치)
    pub ratio: Option<Ratio<i64>>,
    /// 입력 단위 기준 값
    pub value: f64,
    pub mm: f64,
}

impl Thickness {
    pub fn is_fraction(&self) -> bool {
        self.ratio.is_some()
    }
}

/// `a/b` 또는 정수 문자열을 정확한 유리수로 해석한다.
///
/// 분자에는 부호를 허용하고 분모에는 허용하지 않는다. 슬래시 주변 공백은 받지 않는다.
pub fn parse_ratio(text: &str) -> Result<Ratio<i64>, InputParseError> {
    let s = text.trim();
    if s.is_empty() {
        return Err(InputParseError::Empty);
    }
    let malformed = || InputParseError::MalformedFraction(s.to_string());
    match s.split_once('/') {
        Some((numer, denom)) => {
            if !denom.starts_with(|c: char| c.is_ascii_digit()) {
                return Err(malformed());
            }
            let n: i64 = numer.parse().map_err(|_| malformed())?;
            let d: i64 = denom.parse().map_err(|_| malformed())?;
            if d == 0 {
                return Err(InputParseError::ZeroDenominator(s.to_string()));
            }
            Ok(Ratio::new(n, d))
        }
        None => s.parse::<i64>().map(Ratio::from_integer).map_err(|_| malformed()),
    }
}

/// 입력 문자열을 mm 두께로 해석한다.
pub fn parse_thickness(text: &str) -> Result<Thickness, InputParseError> {
    let s = text.trim();
    if s.is_empty() {
        return Err(InputParseError::Empty);
    }
    let thickness = if s.contains('/') {
        let ratio = parse_ratio(s)?;
        let inches = ratio_to_f64(ratio);
        Thickness {
            input: s.to_string(),
            unit: LengthUnit::Inch,
            ratio: Some(ratio),
            value: inches,
            mm: convert_length(inches, LengthUnit::Inch, LengthUnit::Millimeter),
        }
    } else {
        let mm: f64 = s
            .parse()
            .map_err(|_| InputParseError::MalformedNumber(s.to_string()))?;
        if !mm.is_finite() {
            return Err(InputParseError::NonFinite(s.to_string()));
        }
        Thickness {
            input: s.to_string(),
            unit: LengthUnit::Millimeter,
            ratio: None,
            value: mm,
            mm,
        }
    };
    debug!(input = s, mm = thickness.mm, unit = thickness.unit.symbol(), "parsed thickness");
    Ok(thickness)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_is_inches() {
        let t = parse_thickness("1/8").unwrap();
        assert_eq!(t.unit, LengthUnit::Inch);
        assert_eq!(t.ratio, Some(Ratio::new(1, 8)));
        assert_eq!(t.mm, 3.175);
    }

    #[test]
    fn decimal_is_millimetres() {
        let t = parse_thickness(" 3.175 ").unwrap();
        assert_eq!(t.unit, LengthUnit::Millimeter);
        assert!(!t.is_fraction());
        assert_eq!(t.input, "3.175");
        assert_eq!(t.mm, 3.175);
    }

    #[test]
    fn improper_and_signed_fractions() {
        assert_eq!(parse_ratio("3/2").unwrap(), Ratio::new(3, 2));
        assert_eq!(parse_ratio("-1/4").unwrap(), Ratio::new(-1, 4));
        assert_eq!(parse_ratio("1").unwrap(), Ratio::from_integer(1));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            parse_thickness("abc"),
            Err(InputParseError::MalformedNumber("abc".into()))
        );
        assert_eq!(
            parse_thickness("1/0"),
            Err(InputParseError::ZeroDenominator("1/0".into()))
        );
        assert!(matches!(
            parse_thickness("1/x"),
            Err(InputParseError::MalformedFraction(_))
        ));
        assert!(matches!(
            parse_thickness("1.5/2"),
            Err(InputParseError::MalformedFraction(_))
        ));
        assert!(matches!(
            parse_thickness("1/-8"),
            Err(InputParseError::MalformedFraction(_))
        ));
        assert!(matches!(
            parse_thickness("1 / 8"),
            Err(InputParseError::MalformedFraction(_))
        ));
        assert_eq!(parse_thickness("   "), Err(InputParseError::Empty));
        assert!(matches!(
            parse_thickness("inf"),
            Err(InputParseError::NonFinite(_))
        ));
    }
}
