//! 판금 게이지 번호 ↔ 두께(mm) 테이블.
//! 값은 일반적으로 통용되는 Manufacturers' Standard Gauge 계열 표를 mm로 환산한 참고치이다.

/// 게이지 테이블의 한 행. 두께(mm)와 게이지 번호를 담는다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugePoint {
    pub mm: f64,
    pub gauge: u32,
}

impl GaugePoint {
    pub const fn new(mm: f64, gauge: u32) -> Self {
        Self { mm, gauge }
    }
}

/// 재질 계열.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaugeMaterial {
    Steel,
    Galvanized,
    Stainless,
    Aluminum,
}

#[derive(Debug)]
pub struct GaugeTable {
    pub material: GaugeMaterial,
    pub name: &'static str,
    /// 작성 순서 그대로의 (mm, gauge) 목록. 정렬을 가정하지 않는다.
    pub points: &'static [GaugePoint],
}

impl GaugeTable {
    /// 테이블에 등록된 두께 값을 작성 순서대로 돌려준다.
    pub fn values_mm(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.mm)
    }
}

pub fn gauge_tables() -> &'static [GaugeTable] {
    GAUGE_TABLES
}

pub fn find_table(material: GaugeMaterial) -> &'static GaugeTable {
    match material {
        GaugeMaterial::Steel => &GAUGE_TABLES[0],
        GaugeMaterial::Galvanized => &GAUGE_TABLES[1],
        GaugeMaterial::Stainless => &GAUGE_TABLES[2],
        GaugeMaterial::Aluminum => &GAUGE_TABLES[3],
    }
}

const GAUGE_TABLES: &[GaugeTable] = &[
    GaugeTable {
        material: GaugeMaterial::Steel,
        name: "Steel Gauge",
        points: &[
            gp(6.073, 3),
            gp(5.695, 4),
            gp(5.314, 5),
            gp(4.935, 6),
            gp(4.554, 7),
            gp(4.176, 8),
            gp(3.797, 9),
            gp(3.416, 10),
            gp(3.038, 11),
            gp(2.657, 12),
            gp(2.278, 13),
            gp(1.897, 14),
            gp(1.709, 15),
            gp(1.519, 16),
            gp(1.367, 17),
            gp(1.214, 18),
            gp(1.062, 19),
            gp(0.912, 20),
            gp(0.836, 21),
            gp(0.759, 22),
            gp(0.683, 23),
            gp(0.607, 24),
            gp(0.531, 25),
            gp(0.455, 26),
            gp(0.378, 28),
        ],
    },
    GaugeTable {
        material: GaugeMaterial::Galvanized,
        name: "Galvanized Gauge",
        points: &[
            gp(4.27, 8),
            gp(3.891, 9),
            gp(3.51, 10),
            gp(3.132, 11),
            gp(2.753, 12),
            gp(2.372, 13),
            gp(1.994, 14),
            gp(1.803, 15),
            gp(1.613, 16),
            gp(1.46, 17),
            gp(1.311, 18),
            gp(1.158, 19),
            gp(1.006, 20),
            gp(0.93, 21),
            gp(0.853, 22),
            gp(0.777, 23),
            gp(0.701, 24),
            gp(0.627, 25),
            gp(0.551, 26),
            gp(0.475, 28),
        ],
    },
    GaugeTable {
        material: GaugeMaterial::Stainless,
        name: "Stainless Gauge",
        points: &[
            gp(4.762, 7),
            gp(4.366, 8),
            gp(3.97, 9),
            gp(3.571, 10),
            gp(3.175, 11),
            gp(2.779, 12),
            gp(2.388, 13),
            gp(1.984, 14),
            gp(1.778, 15),
            gp(1.587, 16),
            gp(1.422, 17),
            gp(1.27, 18),
            gp(1.118, 19),
            gp(0.952, 20),
            gp(0.864, 21),
            gp(0.787, 22),
            gp(0.711, 23),
            gp(0.635, 24),
            gp(0.559, 25),
            gp(0.483, 26),
            gp(0.406, 28),
        ],
    },
    GaugeTable {
        material: GaugeMaterial::Aluminum,
        name: "Aluminum Gauge",
        points: &[
            gp(4.115, 6),
            gp(3.665, 7),
            gp(3.264, 8),
            gp(2.906, 9),
            gp(2.588, 10),
            gp(2.304, 11),
            gp(2.052, 12),
            gp(1.829, 13),
            gp(1.628, 14),
            gp(1.448, 15),
            gp(1.29, 16),
            gp(1.143, 17),
            gp(1.024, 18),
            gp(0.914, 19),
            gp(0.813, 20),
            gp(0.711, 21),
            gp(0.635, 22),
            gp(0.584, 23),
            gp(0.508, 24),
            gp(0.457, 25),
            gp(0.432, 26),
            gp(0.32, 28),
        ],
    },
];

const fn gp(mm: f64, gauge: u32) -> GaugePoint {
    GaugePoint::new(mm, gauge)
}

/// 미터 권장 두께 계열(mm). 게이지 번호가 없다.
pub const METRIC_STANDARD_MM: &[f64] = &[
    0.5, 0.6, 0.7, 0.8, 1.0, 1.2, 1.5, 2.0, 2.5, 3.0, 4.0, 5.0, 6.0, 8.0, 10.0,
];

// NOTE:
// - 게이지 27은 통용 표에도 없다. 번호가 연속이라고 가정하지 말 것.
// - Galvanized 표는 아연 도금층을 포함한 두께이므로 같은 번호의 Steel 값보다 두껍다.

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_have_unique_keys() {
        for table in gauge_tables() {
            let values: Vec<f64> = table.values_mm().collect();
            for (i, a) in values.iter().enumerate() {
                assert!(
                    values[i + 1..].iter().all(|b| b != a),
                    "{} has duplicate {a}",
                    table.name
                );
            }
        }
    }

    #[test]
    fn find_table_matches_material() {
        for table in gauge_tables() {
            assert_eq!(find_table(table.material).material, table.material);
        }
        assert_eq!(find_table(GaugeMaterial::Steel).points[0], gp(6.073, 3));
    }

    #[test]
    fn gauge_27_is_absent() {
        for table in gauge_tables() {
            assert!(table.points.iter().all(|p| p.gauge != 27));
        }
    }
}
