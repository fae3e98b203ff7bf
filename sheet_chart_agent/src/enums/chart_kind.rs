use crate::common::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    Line,
    #[serde(alias = "dual-axis", alias = "dualaxis")]
    DualAxis,
}

impl ChartKind {
    #[doc = "파일명, 로그에 사용하는 차트 종류 식별자"]
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::DualAxis => "dual_axis",
        }
    }
}

impl Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
