use crate::common::*;

pub const ENV_GOOGLE_SHEET_ID: &str = "GOOGLE_SHEET_ID";
pub const ENV_GOOGLE_API_KEY: &str = "GOOGLE_API_KEY";
pub const ENV_GOOGLE_ACCESS_TOKEN: &str = "GOOGLE_ACCESS_TOKEN";
pub const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";

#[doc = r#"
    환경변수를 읽어와서 반환하고, 환경변수가 설정되지 않은 경우 치명적 오류로 처리하는 함수.

    # Arguments
    * `key` - 조회할 환경변수 키명

    # Panics
    환경변수가 설정되지 않은 경우 애플리케이션 종료
"#]
fn get_env_or_panic(key: &str) -> String {
    match env::var(key) {
        Ok(val) => val,
        Err(_) => {
            let msg = format!("[ENV file read Error] '{}' must be set", key);
            error!("{}", msg);
            panic!("{}", msg);
        }
    }
}

#[doc = r#"
    설정 파일 값이 비어있으면 환경변수 값으로 대체해주는 함수.
    둘 다 없거나 공백뿐이면 None.
"#]
pub fn non_empty_or_env(configured: Option<&str>, env_key: &str) -> Option<String> {
    configured
        .map(str::trim)
        .filter(|val| !val.is_empty())
        .map(str::to_string)
        .or_else(|| {
            env::var(env_key)
                .ok()
                .map(|val| val.trim().to_string())
                .filter(|val| !val.is_empty())
        })
}

#[doc = r#"
    서버 설정 정보 파일의 경로를 환경변수에서 읽어와 전역 변수로 초기화.

    `SERVER_CONFIG_PATH` 환경변수를 통해 TOML 형식의 설정 파일 경로를 지정받는다.
    이 파일에는 실행 모드, Google Sheets 연결 정보, LLM 연결 정보,
    차트 스타일, 차트 판별 정책이 포함되어 있다.

    # Panics
    `SERVER_CONFIG_PATH` 환경변수가 설정되지 않은 경우
"#]
pub static SERVER_CONFIG_PATH: once_lazy<String> =
    once_lazy::new(|| get_env_or_panic("SERVER_CONFIG_PATH"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_value_is_trimmed_and_preferred() {
        assert_eq!(
            non_empty_or_env(Some("  sheet-1 "), "SHEET_CHART_AGENT_TEST_UNSET_KEY"),
            Some("sheet-1".to_string())
        );
    }

    #[test]
    fn blank_value_without_env_is_none() {
        assert_eq!(
            non_empty_or_env(Some("   "), "SHEET_CHART_AGENT_TEST_UNSET_KEY"),
            None
        );
        assert_eq!(non_empty_or_env(None, "SHEET_CHART_AGENT_TEST_UNSET_KEY"), None);
    }
}
