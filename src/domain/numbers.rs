//! 자유 텍스트에서 공백으로 구분된 숫자를 추출한다.

use std::sync::LazyLock;

use regex::Regex;

// 부호(선택) + 정수부 + 소수부(선택). 토큰 전체가 일치해야 한다.
static NUMBER_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?[0-9]+(?:\.[0-9]+)?$").expect("number pattern is valid")
});

/// 앞뒤가 공백 또는 문자열 경계인 숫자만 순서대로 지연 생성한다.
pub fn generator_numbers(text: &str) -> impl Iterator<Item = f64> + '_ {
    text.split_whitespace()
        .filter(|token| NUMBER_TOKEN.is_match(token))
        .filter_map(|token| token.parse::<f64>().ok())
}

/// 호출자가 넘긴 추출기로 숫자를 모아 합산한다.
pub fn sum_profit<'a, F, I>(text: &'a str, extract: F) -> f64
where
    F: FnOnce(&'a str) -> I,
    I: Iterator<Item = f64>,
{
    // `Sum`은 빈 입력에서 -0.0을 돌려주므로 0.0부터 접는다.
    extract(text).fold(0.0, |acc, n| acc + n)
}
