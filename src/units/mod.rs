//! 단위 정의 및 변환 모듈.

pub mod length;

pub use length::{convert_length, inch_to_mm, round_to, LengthUnit, MM_PER_INCH};
