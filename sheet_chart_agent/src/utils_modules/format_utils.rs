#[doc = "소수점 없이 반올림한 뒤 천 단위 구분기호(,)를 넣어주는 함수"]
pub fn format_thousands(value: f64) -> String {
    let rounded: f64 = value.round();

    if !rounded.is_finite() {
        return rounded.to_string();
    }

    let digits: String = format!("{:.0}", rounded.abs());
    let mut grouped: String = String::with_capacity(digits.len() + digits.len() / 3);

    for (idx, c) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if rounded < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[doc = "통화 기호가 붙은 금액 문자열 (-1234.5 -> -$1,235)"]
pub fn format_currency(value: f64) -> String {
    let plain: String = format_thousands(value);

    match plain.strip_prefix('-') {
        Some(abs) => format!("-${}", abs),
        None => format!("${}", plain),
    }
}

#[doc = "컬럼명에 키워드 중 하나라도 포함되어 있는지 (대소문자 무시)"]
pub fn matches_keyword(column_name: &str, keywords: &[String]) -> bool {
    let lowered: String = column_name.to_lowercase();
    keywords
        .iter()
        .any(|kw| !kw.is_empty() && lowered.contains(&kw.to_lowercase()))
}

#[doc = "차트 값 라벨 포맷. 금액 컬럼이면 통화 포맷, 아니면 천 단위 구분만 한다."]
pub fn format_value_label(value: f64, as_currency: bool) -> String {
    if as_currency {
        format_currency(value)
    } else {
        format_thousands(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_thousands(0.0), "0");
        assert_eq!(format_thousands(999.0), "999");
        assert_eq!(format_thousands(1000.0), "1,000");
        assert_eq!(format_thousands(1234567.4), "1,234,567");
        assert_eq!(format_thousands(-45210.6), "-45,211");
        assert_eq!(format_thousands(-0.3), "0");
    }

    #[test]
    fn currency_prefix_goes_after_sign() {
        assert_eq!(format_currency(2000.0), "$2,000");
        assert_eq!(format_currency(-1500.0), "-$1,500");
    }

    #[test]
    fn keyword_match_is_case_insensitive_substring() {
        let keywords: Vec<String> = vec!["revenue".to_string(), "sales".to_string()];
        assert!(matches_keyword("Monthly Revenue", &keywords));
        assert!(matches_keyword("SALES_KRW", &keywords));
        assert!(!matches_keyword("Customers", &keywords));
    }

    #[test]
    fn value_label_switches_on_currency_flag() {
        assert_eq!(format_value_label(1000.0, true), "$1,000");
        assert_eq!(format_value_label(1000.0, false), "1,000");
    }
}
