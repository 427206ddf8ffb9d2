//! Random value generators shared by the entity blueprints.

use chrono::{Duration, NaiveDateTime, Utc};
use rand::{rngs::StdRng, Rng};

const SURNAMES: &[&str] = &["김", "이", "박", "최", "정", "강", "조", "윤", "장", "임", "한", "오"];

const GIVEN_NAMES: &[&str] = &[
    "영희", "철수", "민준", "서연", "지훈", "수빈", "하은", "도윤", "순자", "영수", "정숙",
    "광수", "미경", "성호", "은주", "지우",
];

const EMAIL_LOCAL_PARTS: &[&str] = &["care", "family", "guardian", "staff", "nurse", "member"];

const EMAIL_DOMAINS: &[&str] = &["example.com", "agape-care.kr", "mail.test"];

const SENTENCES: &[&str] = &[
    "어르신들의 반응이 매우 좋았습니다.",
    "다음 회차에는 준비물을 미리 안내해 주세요.",
    "프로그램 시간이 조금 더 길었으면 좋겠습니다.",
    "담당 선생님께서 친절하게 설명해 주셨습니다.",
    "휠체어 이용자를 위한 동선이 잘 마련되어 있었습니다.",
    "보호자 참여가 가능해서 만족스러웠습니다.",
    "식사 후 바로 진행되어 다소 피곤해 하셨습니다.",
    "실내 온도가 적당해서 편안했습니다.",
];

/// Pick one element of a non-empty slice.
///
/// # Panics
/// Panics if `items` is empty; every caller passes a constant table.
pub fn pick<'a, T>(rng: &mut StdRng, items: &'a [T]) -> &'a T {
    &items[rng.random_range(0..items.len())]
}

/// Pick one label of a non-empty table as an owned string.
pub fn pick_str(rng: &mut StdRng, items: &[&str]) -> String {
    pick(rng, items).to_string()
}

/// Resolve a nullable field: `Some` with the given probability, `None` otherwise.
pub fn maybe<T>(
    rng: &mut StdRng,
    probability: f64,
    value: impl FnOnce(&mut StdRng) -> T,
) -> Option<T> {
    if rng.random_bool(probability) {
        Some(value(rng))
    } else {
        None
    }
}

pub fn korean_name(rng: &mut StdRng) -> String {
    format!("{}{}", pick(rng, SURNAMES), pick(rng, GIVEN_NAMES))
}

pub fn phone_number(rng: &mut StdRng) -> String {
    format!(
        "010-{:04}-{:04}",
        rng.random_range(0..10_000),
        rng.random_range(0..10_000)
    )
}

/// An email address that is unlikely, but not guaranteed, to be unique.
///
/// The seeder overrides emails with index-based addresses where uniqueness matters.
pub fn email(rng: &mut StdRng) -> String {
    format!(
        "{}{}@{}",
        pick(rng, EMAIL_LOCAL_PARTS),
        rng.random_range(1_000..1_000_000),
        pick(rng, EMAIL_DOMAINS)
    )
}

pub fn sentence(rng: &mut StdRng) -> String {
    pick_str(rng, SENTENCES)
}

/// A foreign key into a table of roughly `upper` rows.
///
/// The referenced row may not exist; the seeder replaces these with real parent IDs.
pub fn loose_id(rng: &mut StdRng, upper: i32) -> i32 {
    rng.random_range(1..=upper.max(1))
}

/// A timestamp within the last `days` days.
pub fn past(rng: &mut StdRng, days: i64) -> NaiveDateTime {
    Utc::now().naive_utc() - Duration::minutes(rng.random_range(0..=days.max(1) * 24 * 60))
}

/// A timestamp at least an hour and at most `days` days from now.
pub fn upcoming(rng: &mut StdRng, days: i64) -> NaiveDateTime {
    Utc::now().naive_utc() + Duration::hours(rng.random_range(1..=days.max(1) * 24))
}
