use std::collections::HashMap;
use std::fs;
use std::path::Path;

use sys_locale::get_locale;
use tracing::debug;

use crate::series::SeriesKind;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const APP_TITLE: &str = "general.app_title";
    pub const INPUT_HINT: &str = "general.input_hint";
    pub const PROMPT_INPUT: &str = "prompt.input";

    pub const ACCEPTED: &str = "result.accepted";
    pub const LOWER: &str = "result.lower";
    pub const UPPER: &str = "result.upper";
    pub const STANDARD: &str = "result.standard";
    pub const NO_STANDARD: &str = "result.no_standard";
    pub const NONE: &str = "result.none";
    pub const INPUT_REJECTED: &str = "error.input_rejected";

    pub const LIST_HEADING: &str = "list.heading";

    pub const SERIES_STEEL: &str = "series.steel_gauge";
    pub const SERIES_GALVANIZED: &str = "series.galvanized_gauge";
    pub const SERIES_STAINLESS: &str = "series.stainless_gauge";
    pub const SERIES_FRACTIONAL: &str = "series.fractional_inches";
    pub const SERIES_ALUMINUM: &str = "series.aluminum_gauge";
    pub const SERIES_METRIC: &str = "series.metric_standard";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Ru,
    Ko,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ru") {
            Language::Ru
        } else if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
            Language::Ko => "ko",
        }
    }
}

/// 계열 종류에 대응하는 번역 키.
pub fn series_key(kind: SeriesKind) -> &'static str {
    match kind {
        SeriesKind::SteelGauge => keys::SERIES_STEEL,
        SeriesKind::GalvanizedGauge => keys::SERIES_GALVANIZED,
        SeriesKind::StainlessGauge => keys::SERIES_STAINLESS,
        SeriesKind::FractionalInches => keys::SERIES_FRACTIONAL,
        SeriesKind::AluminumGauge => keys::SERIES_ALUMINUM,
        SeriesKind::MetricStandard => keys::SERIES_METRIC,
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(en/ru/ko)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&Path>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides(Path::new("locales"), lang_code));
        if overrides.is_some() {
            debug!(lang = lang_code, "loaded language pack overrides");
        }
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩이 우선이고, 없으면 내장 문자열, 그래도 없으면 영어.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.as_str();
        }
        let built_in = match self.lang {
            Language::En => en(key),
            Language::Ru => ru(key),
            Language::Ko => ko(key),
        };
        built_in.or_else(|| en(key)).unwrap_or(key)
    }

    pub fn series_label(&self, kind: SeriesKind) -> &str {
        self.t(series_key(kind))
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("en") => Some("en".into()),
        other if other.starts_with("ru") => Some("ru".into()),
        other if other.starts_with("ko") => Some("ko".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    normalize_lang(&lang)
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 중첩 테이블은 `a.b` 형태의 플랫 키로 편다.
fn load_overrides(dir: &Path, lang: &str) -> Option<HashMap<String, String>> {
    let path = dir.join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    walk(&format!("{prefix}.{k}"), v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Bye.",
        APP_TITLE => "=== Sheet Metal Thickness Finder ===",
        INPUT_HINT => "Enter a value in millimetres (e.g. 3.5) or a fractional inch (e.g. 1/8).",
        PROMPT_INPUT => "Thickness (empty or q to quit): ",
        ACCEPTED => "Accepted:",
        LOWER => "Nearest lower:",
        UPPER => "Nearest upper:",
        STANDARD => "Standard:",
        NO_STANDARD => "No exact standard value found in any series.",
        NONE => "-",
        INPUT_REJECTED => "Invalid input format. Enter a number or an inch fraction",
        LIST_HEADING => "Reference series",
        SERIES_STEEL => "Steel Gauge",
        SERIES_GALVANIZED => "Galvanized Gauge",
        SERIES_STAINLESS => "Stainless Gauge",
        SERIES_FRACTIONAL => "Fractional Inches",
        SERIES_ALUMINUM => "Aluminum Gauge",
        SERIES_METRIC => "Metric Standard",
        _ => return None,
    };
    Some(s)
}

fn ru(key: &str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        ERROR_PREFIX => "Ошибка",
        APP_EXIT => "До свидания.",
        APP_TITLE => "=== Калькулятор толщины листового металла ===",
        INPUT_HINT => {
            "Введите значение в миллиметрах (например, 3.5) или в дюймах в виде дроби (например, 1/8)."
        }
        PROMPT_INPUT => "Толщина (пусто или q для выхода): ",
        ACCEPTED => "Принято к расчету:",
        LOWER => "Ближайшее меньшее:",
        UPPER => "Ближайшее большее:",
        STANDARD => "Стандарт:",
        NO_STANDARD => "Точное стандартное значение не найдено ни в одном из рядов.",
        INPUT_REJECTED => "Некорректный формат ввода. Введите число или дюймовую дробь",
        LIST_HEADING => "Справочные ряды",
        SERIES_STEEL => "Сталь (Steel Gauge)",
        SERIES_GALVANIZED => "Оцинкованная сталь (Galvanized)",
        SERIES_STAINLESS => "Нержавеющая сталь (Stainless)",
        SERIES_FRACTIONAL => "Дюймовые размеры (Fractional Inches)",
        SERIES_ALUMINUM => "Алюминий (Aluminum Gauge)",
        SERIES_METRIC => "Метрический стандарт",
        _ => return None,
    };
    Some(s)
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        APP_TITLE => "=== 판금 두께 조회 ===",
        INPUT_HINT => "mm 값(예: 3.5) 또는 인치 분수(예: 1/8)를 입력하세요.",
        PROMPT_INPUT => "두께 입력 (엔터 또는 q로 종료): ",
        ACCEPTED => "계산 기준:",
        LOWER => "가장 가까운 작은 값:",
        UPPER => "가장 가까운 큰 값:",
        STANDARD => "표준치:",
        NO_STANDARD => "어느 계열에서도 일치하는 표준치가 없습니다.",
        INPUT_REJECTED => "입력 형식이 올바르지 않습니다. 숫자나 인치 분수를 입력하세요",
        LIST_HEADING => "기준 계열",
        SERIES_STEEL => "강판 (Steel Gauge)",
        SERIES_GALVANIZED => "아연도 강판 (Galvanized)",
        SERIES_STAINLESS => "스테인리스 (Stainless)",
        SERIES_FRACTIONAL => "인치 분수 (Fractional Inches)",
        SERIES_ALUMINUM => "알루미늄 (Aluminum Gauge)",
        SERIES_METRIC => "미터 표준",
        _ => return None,
    };
    Some(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_english() {
        let tr = Translator::new("ru");
        assert_eq!(tr.t(keys::NONE), "-");
        assert_eq!(tr.t(keys::LOWER), "Ближайшее меньшее:");
        assert_eq!(Translator::new("xx").language(), Language::En);
        assert_eq!(tr.t("no.such.key"), "no.such.key");
    }

    #[test]
    fn every_series_has_a_label() {
        for lang in ["en", "ru", "ko"] {
            let tr = Translator::new(lang);
            for kind in SeriesKind::ALL {
                assert_ne!(tr.series_label(kind), series_key(kind));
            }
        }
    }

    #[test]
    fn explicit_language_wins() {
        assert_eq!(resolve_language(Some("RU"), Some("en")), "ru");
        assert_eq!(resolve_language(Some("auto"), Some("ko-KR")), "ko");
    }

    #[test]
    fn nested_pack_keys_are_flattened() {
        let map = parse_toml_to_map("[result]\nlower = \"Below:\"\n").unwrap();
        assert_eq!(map.get("result.lower").map(String::as_str), Some("Below:"));
    }
}
