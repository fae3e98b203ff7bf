use crate::common::*;

pub const DEFAULT_DUAL_AXIS_RATIO_THRESHOLD: f64 = 10.0;

pub const DEFAULT_MAGNITUDE_KEYWORDS: [&str; 5] = ["revenue", "sales", "income", "profit", "amount"];

pub const DEFAULT_COUNT_KEYWORDS: [&str; 5] = ["customer", "user", "count", "total", "number"];

#[doc = r#"
    차트 종류 자동 판별 휴리스틱의 정책값.

    - `dual_axis_ratio_threshold`: 앞의 두 숫자 컬럼 평균의 배율이 이 값 이상이면 이중 축 차트
    - `magnitude_keywords`: 금액성(큰 값) 컬럼을 나타내는 컬럼명 키워드. 통화 포맷에도 사용
    - `count_keywords`: 건수성(작은 값) 컬럼을 나타내는 컬럼명 키워드
"#]
#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
#[serde(default)]
pub struct ClassifierConfig {
    pub dual_axis_ratio_threshold: f64,
    pub magnitude_keywords: Vec<String>,
    pub count_keywords: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            dual_axis_ratio_threshold: DEFAULT_DUAL_AXIS_RATIO_THRESHOLD,
            magnitude_keywords: DEFAULT_MAGNITUDE_KEYWORDS
                .iter()
                .map(|kw| kw.to_string())
                .collect(),
            count_keywords: DEFAULT_COUNT_KEYWORDS
                .iter()
                .map(|kw| kw.to_string())
                .collect(),
        }
    }
}
