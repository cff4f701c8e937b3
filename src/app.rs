use thiserror::Error;
use tracing::debug;

use crate::config::{Config, ConfigError, OutputFormat};
use crate::i18n::{self, Translator};
use crate::input::{parse_thickness, InputParseError, Thickness};
use crate::lookup::{lookup, LookupReport};
use crate::series::ReferenceData;
use crate::ui_cli;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Input(#[from] InputParseError),
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),
}

/// 입력 하나에 대한 해석 결과와 조회 결과.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub thickness: Thickness,
    pub report: LookupReport,
}

/// 입력 문자열을 해석해 전체 계열을 조회한다. 해석에 실패하면 결과는 만들지 않는다.
pub fn evaluate(data: &ReferenceData, input: &str) -> Result<Evaluation, InputParseError> {
    let thickness = parse_thickness(input)?;
    let report = lookup(data, thickness.mm);
    debug!(
        input = %thickness.input,
        any_exact = report.any_exact,
        "evaluated input"
    );
    Ok(Evaluation { thickness, report })
}

/// 설정에 맞는 형식으로 결과를 문자열로 만든다.
pub fn render(eval: &Evaluation, tr: &Translator, cfg: &Config) -> Result<String, AppError> {
    match cfg.output {
        OutputFormat::Text => Ok(ui_cli::render_text(eval, tr, cfg)),
        OutputFormat::Json => Ok(ui_cli::render_json(eval)?),
    }
}

/// 입력 하나를 처리해 출력한다.
pub fn run_once(
    data: &ReferenceData,
    tr: &Translator,
    cfg: &Config,
    input: &str,
) -> Result<(), AppError> {
    let eval = evaluate(data, input)?;
    println!("{}", render(&eval, tr, cfg)?);
    Ok(())
}

/// 대화형 루프를 실행한다. 잘못된 입력은 알리고 다음 입력을 기다린다.
pub fn run(data: &ReferenceData, tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(i18n::keys::APP_TITLE));
    println!("{}", tr.t(i18n::keys::INPUT_HINT));
    loop {
        let line = ui_cli::read_line(tr.t(i18n::keys::PROMPT_INPUT))?;
        let Some(line) = line else {
            break;
        };
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("q") {
            break;
        }
        match run_once(data, tr, cfg, trimmed) {
            Ok(()) => {}
            Err(AppError::Input(err)) => eprintln!("{}", ui_cli::format_input_error(tr, &err)),
            Err(other) => return Err(other),
        }
    }
    println!("{}", tr.t(i18n::keys::APP_EXIT));
    Ok(())
}
