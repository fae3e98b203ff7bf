use crate::common::*;

#[doc = r#"
    차트 렌더링 스타일 설정. 전역 상태로 두지 않고 ChartServiceImpl 생성 시 주입한다.
    색상은 [R, G, B] 배열로 표기한다.
"#]
#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
#[serde(default)]
pub struct ChartStyleConfig {
    pub width: u32,
    pub height: u32,
    pub font_family: String,
    pub title_font_size: u32,
    pub label_font_size: u32,
    pub value_font_size: u32,
    pub background: [u8; 3],
    pub text_color: [u8; 3],
    pub grid_color: [u8; 3],
    /* bar / line 차트 시리즈 색상 (순환 사용) */
    pub palette: Vec<[u8; 3]>,
    /* 이중 축 차트의 좌측(bar) / 우측(line) 고정 색상 */
    pub primary_color: [u8; 3],
    pub secondary_color: [u8; 3],
    pub output_dir: String,
    pub image_format: String,
    /* x축 카테고리 라벨이 이 길이보다 길면 90도 회전 */
    pub rotate_label_threshold: usize,
}

impl Default for ChartStyleConfig {
    fn default() -> Self {
        Self {
            width: 1400,
            height: 800,
            font_family: "sans-serif".to_string(),
            title_font_size: 32,
            label_font_size: 18,
            value_font_size: 14,
            background: [255, 255, 255],
            text_color: [40, 40, 40],
            grid_color: [225, 225, 225],
            palette: vec![
                [68, 1, 84],
                [59, 82, 139],
                [33, 145, 140],
                [94, 201, 98],
                [253, 231, 37],
            ],
            primary_color: [46, 134, 171],
            secondary_color: [162, 59, 114],
            output_dir: "charts".to_string(),
            image_format: "png".to_string(),
            rotate_label_threshold: 8,
        }
    }
}
