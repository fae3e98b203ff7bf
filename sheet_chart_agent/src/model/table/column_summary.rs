use crate::common::*;

#[doc = "숫자 컬럼 하나에 대한 기술통계 (count, mean, std, min, 25%, 50%, 75%, max)"]
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
#[getset(get = "pub")]
pub struct ColumnSummary {
    name: String,
    count: usize,
    mean: f64,
    /* 표본 표준편차 (n - 1). 값이 하나뿐이면 NaN */
    std: f64,
    min: f64,
    q1: f64,
    median: f64,
    q3: f64,
    max: f64,
}

impl ColumnSummary {
    #[doc = "값이 하나도 없으면 None"]
    pub fn from_values(name: &str, values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let count: usize = values.len();
        let mean: f64 = values.iter().sum::<f64>() / count as f64;

        let std: f64 = if count > 1 {
            let sq_sum: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
            (sq_sum / (count - 1) as f64).sqrt()
        } else {
            f64::NAN
        };

        let mut sorted: Vec<f64> = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        Some(Self {
            name: name.to_string(),
            count,
            mean,
            std,
            min: sorted[0],
            q1: quantile(&sorted, 0.25),
            median: quantile(&sorted, 0.5),
            q3: quantile(&sorted, 0.75),
            max: sorted[count - 1],
        })
    }

    #[doc = "describe 표의 행 순서대로 (라벨, 값) 목록"]
    pub fn stat_rows(&self) -> [(&'static str, f64); 8] {
        [
            ("count", self.count as f64),
            ("mean", self.mean),
            ("std", self.std),
            ("min", self.min),
            ("25%", self.q1),
            ("50%", self.median),
            ("75%", self.q3),
            ("max", self.max),
        ]
    }
}

/* 정렬된 값에서 선형보간 분위수 */
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos: f64 = q * (sorted.len() - 1) as f64;
    let lo: usize = pos.floor() as usize;
    let hi: usize = pos.ceil() as usize;

    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}
