use chrono::Duration;
use entity::json::{MembershipBenefits, UserPreferences};
use rand::{rngs::StdRng, Rng};
use sea_orm::ActiveValue;

use crate::server::{
    factory::{
        generate::{email, korean_name, loose_id, maybe, past, phone_number, pick, pick_str},
        Blueprint,
    },
    util::password::hash_password,
};

const ROLES: &[&str] = &["member", "member", "member", "guardian", "staff", "admin"];
const LANGUAGES: &[&str] = &["ko", "ko", "en"];
const THEMES: &[&str] = &["light", "dark", "system"];
const PROVIDERS: &[&str] = &["email", "kakao", "naver", "google"];
const TIERS: &[&str] = &["basic", "silver", "gold", "platinum"];
const BENEFITS: &[(&str, &str)] = &[
    ("프로그램 할인", "유료 프로그램 수강료 할인"),
    ("우선 예약", "인기 프로그램 우선 예약"),
    ("주차 지원", "방문 시 무료 주차"),
    ("건강 상담", "월 1회 간호사 건강 상담"),
    ("보호자 동반", "보호자 1인 무료 동반"),
    ("기기 대여", "보조기기 대여료 면제"),
    ("식사 제공", "프로그램 당일 점심 제공"),
    ("생일 선물", "생일 축하 선물 증정"),
];

impl Blueprint for entity::user::ActiveModel {
    fn draft(rng: &mut StdRng) -> Self {
        let password = format!("password{}", rng.random_range(1_000..10_000));

        entity::user::ActiveModel {
            email: ActiveValue::Set(email(rng)),
            name: ActiveValue::Set(korean_name(rng)),
            password_hash: ActiveValue::Set(hash_password(&password)),
            phone: ActiveValue::Set(maybe(rng, 0.8, phone_number)),
            role: ActiveValue::Set(pick_str(rng, ROLES)),
            preferences: ActiveValue::Set(UserPreferences {
                language: pick_str(rng, LANGUAGES),
                theme: pick_str(rng, THEMES),
                email_notifications: rng.random_bool(0.7),
                sms_notifications: rng.random_bool(0.4),
            }),
            created_at: ActiveValue::Set(past(rng, 365)),
            ..Default::default()
        }
    }
}

impl Blueprint for entity::auth_provider::ActiveModel {
    fn draft(rng: &mut StdRng) -> Self {
        entity::auth_provider::ActiveModel {
            user_id: ActiveValue::Set(loose_id(rng, 30)),
            provider: ActiveValue::Set(pick_str(rng, PROVIDERS)),
            provider_user_id: ActiveValue::Set(format!("{:016x}", rng.random::<u64>())),
            created_at: ActiveValue::Set(past(rng, 365)),
            ..Default::default()
        }
    }
}

impl Blueprint for entity::benefit::ActiveModel {
    fn draft(rng: &mut StdRng) -> Self {
        let (name, description) = pick(rng, BENEFITS);

        entity::benefit::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(description.to_string()),
            discount_percent: ActiveValue::Set(rng.random_range(1..=6) * 5),
            ..Default::default()
        }
    }
}

impl Blueprint for entity::membership::ActiveModel {
    fn draft(rng: &mut StdRng) -> Self {
        let started_at = past(rng, 365);
        let benefit_count = rng.random_range(1..=3);
        let benefits = (0..benefit_count).map(|_| loose_id(rng, 8)).collect();

        entity::membership::ActiveModel {
            user_id: ActiveValue::Set(loose_id(rng, 30)),
            tier: ActiveValue::Set(pick_str(rng, TIERS)),
            benefits: ActiveValue::Set(MembershipBenefits(benefits)),
            started_at: ActiveValue::Set(started_at),
            expires_at: ActiveValue::Set(maybe(rng, 0.6, |_| started_at + Duration::days(365))),
            ..Default::default()
        }
    }
}
