use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use thickness_finder::app::{self, AppError};
use thickness_finder::config::{self, Config, OutputFormat};
use thickness_finder::i18n::{self, Translator};
use thickness_finder::series::ReferenceData;
use thickness_finder::ui_cli;
use tracing::Level;

/// 판금 두께(mm 또는 인치 분수)에 가장 가까운 게이지/분수/미터 표준치를 찾는다.
#[derive(Debug, Parser)]
#[command(name = "thickness_finder", version, about)]
struct Cli {
    /// 조회할 두께. 예: 3.5 (mm), 1/8 (inch). 생략하면 대화형 모드
    #[arg(allow_hyphen_values = true)]
    input: Option<String>,
    /// 설정 파일 경로
    #[arg(long)]
    config: Option<PathBuf>,
    /// 표시 언어 (en, ru, ko, auto)
    #[arg(long)]
    lang: Option<String>,
    /// 출력 형식
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
    /// mm 값 소수 자릿수
    #[arg(long)]
    precision: Option<usize>,
    /// 기준 계열 전체를 출력
    #[arg(long)]
    list: bool,
    /// 로그 상세도 (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 조회를 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match try_run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err((tr, err)) => {
            match &err {
                AppError::Input(parse_err) => {
                    eprintln!("{}", ui_cli::format_input_error(&tr, parse_err))
                }
                other => eprintln!("{}: {other}", tr.t(i18n::keys::ERROR_PREFIX)),
            }
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<(), (Translator, AppError)> {
    let path = cli.config.clone().unwrap_or_else(Config::default_path);
    let fallback_tr = || Translator::new(&i18n::resolve_language(cli.lang.as_deref(), None));
    let mut cfg = config::load_or_default(&path).map_err(|e| (fallback_tr(), e.into()))?;
    if let Some(format) = cli.format {
        cfg.output = format;
    }
    if let Some(precision) = cli.precision {
        cfg.precision = precision;
    }
    let lang = i18n::resolve_language(cli.lang.as_deref(), Some(&cfg.language));
    let tr = Translator::new_with_pack(&lang, None);
    let data = ReferenceData::build();

    let result = if cli.list {
        println!("{}", ui_cli::render_series_list(&data, &tr, &cfg));
        Ok(())
    } else if let Some(input) = cli.input.as_deref() {
        app::run_once(&data, &tr, &cfg, input)
    } else {
        app::run(&data, &tr, &cfg)
    };
    result.map_err(|e| (tr, e))
}
