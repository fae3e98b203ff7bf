use crate::common::*;

#[doc = "차트 종류를 누가 결정하는지: 로컬 휴리스틱(auto) 또는 LLM 추천(ai)"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualizeMode {
    #[default]
    Auto,
    Ai,
}
