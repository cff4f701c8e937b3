use std::fmt::Write as _;
use std::io::{self, BufRead, Write};

use serde::Serialize;

use crate::app::Evaluation;
use crate::config::Config;
use crate::i18n::{keys, Translator};
use crate::input::InputParseError;
use crate::lookup::{SeriesMatch, SeriesValue};
use crate::series::{ReferenceData, Resolver};
use crate::units::LengthUnit;

/// 프롬프트를 출력하고 한 줄을 읽는다. 입력 끝(EOF)이면 `None`.
pub fn read_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    let n = io::stdin().lock().read_line(&mut buf)?;
    if n == 0 {
        return Ok(None);
    }
    Ok(Some(buf))
}

pub fn format_input_error(tr: &Translator, err: &InputParseError) -> String {
    format!(
        "{}: {} ({err})",
        tr.t(keys::ERROR_PREFIX),
        tr.t(keys::INPUT_REJECTED)
    )
}

fn format_value(value: &SeriesValue, precision: usize, with_designation: bool) -> String {
    match value.designation {
        Some(d) if with_designation => format!("{:.precision$} mm ({d})", value.mm),
        _ => format!("{:.precision$} mm", value.mm),
    }
}

fn write_series(out: &mut String, m: &SeriesMatch, tr: &Translator, cfg: &Config) {
    let p = cfg.precision;
    let show = cfg.show_neighbor_designations;
    let none = tr.t(keys::NONE);
    let _ = writeln!(out, "{}", tr.series_label(m.kind));
    let lower = m.lower.map(|v| format_value(&v, p, show));
    let upper = m.upper.map(|v| format_value(&v, p, show));
    let _ = writeln!(
        out,
        "  {} {}",
        tr.t(keys::LOWER),
        lower.as_deref().unwrap_or(none)
    );
    let _ = writeln!(
        out,
        "  {} {}",
        tr.t(keys::UPPER),
        upper.as_deref().unwrap_or(none)
    );
    if let Some(exact) = &m.exact {
        let _ = writeln!(
            out,
            "  ✅ {} {}",
            tr.t(keys::STANDARD),
            format_value(exact, p, true)
        );
    }
}

/// 사람이 읽는 텍스트 형식으로 결과를 만든다.
pub fn render_text(eval: &Evaluation, tr: &Translator, cfg: &Config) -> String {
    let p = cfg.precision;
    let t = &eval.thickness;
    let mut out = String::new();
    let accepted = match t.unit {
        LengthUnit::Inch => format!("{}\" = {:.p$} mm", t.input, t.mm),
        LengthUnit::Millimeter => format!("{} mm", t.input),
    };
    let _ = writeln!(out, "{} {accepted}", tr.t(keys::ACCEPTED));
    let _ = writeln!(out, "{}", "-".repeat(40));
    for m in &eval.report.series {
        write_series(&mut out, m, tr, cfg);
    }
    if !eval.report.any_exact {
        let _ = writeln!(out, "ℹ️ {}", tr.t(keys::NO_STANDARD));
    }
    out
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    input: &'a str,
    unit: LengthUnit,
    target_mm: f64,
    any_exact: bool,
    series: &'a [SeriesMatch],
}

/// JSON 형식으로 결과를 만든다.
pub fn render_json(eval: &Evaluation) -> Result<String, serde_json::Error> {
    let out = JsonOutput {
        input: &eval.thickness.input,
        unit: eval.thickness.unit,
        target_mm: eval.report.target_mm,
        any_exact: eval.report.any_exact,
        series: &eval.report.series,
    };
    serde_json::to_string_pretty(&out)
}

/// 모든 기준 계열과 값을 나열한다.
pub fn render_series_list(data: &ReferenceData, tr: &Translator, cfg: &Config) -> String {
    let p = cfg.precision;
    let mut out = String::new();
    let _ = writeln!(out, "{}", tr.t(keys::LIST_HEADING));
    for series in data.series() {
        let _ = writeln!(out, "\n{}", tr.series_label(series.kind));
        match &series.resolver {
            Resolver::Gauge(points) => {
                for point in points.iter() {
                    let _ = writeln!(out, "  {:>3}  {:.p$} mm", point.gauge, point.mm);
                }
            }
            Resolver::Fraction(fractions) => {
                for entry in fractions.entries() {
                    let _ = writeln!(out, "  {:>6}\"  {:.p$} mm", entry.label, entry.mm);
                }
            }
            Resolver::None => {
                for mm in &series.values_mm {
                    let _ = writeln!(out, "  {mm:.p$} mm");
                }
            }
        }
    }
    out
}
