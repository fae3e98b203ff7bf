use crate::common::*;

#[doc = "차트 기본 파일명에 붙는 로컬 시각 문자열 (예: 20250901_093000)"]
pub fn get_current_local_file_stamp() -> String {
    convert_file_stamp(Local::now())
}

#[doc = "주어진 로컬 시각을 파일명용 yyyyMMdd_HHmmss 문자열로 변환"]
pub fn convert_file_stamp(local_time: DateTime<Local>) -> String {
    local_time.format("%Y%m%d_%H%M%S").to_string()
}
