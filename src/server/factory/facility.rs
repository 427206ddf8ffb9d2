use chrono::Duration;
use entity::json::VenueMeta;
use rand::{rngs::StdRng, seq::SliceRandom, Rng};
use sea_orm::ActiveValue;

use crate::server::factory::{
    generate::{loose_id, maybe, past, pick, pick_str, upcoming},
    Blueprint,
};

const VENUE_NAMES: &[&str] = &[
    "아가페 본관",
    "아가페 별관",
    "햇살 주간보호센터",
    "푸른솔 요양원",
    "은빛 복지관",
    "사랑채 커뮤니티홀",
];
const DISTRICTS: &[&str] = &["마포구", "서대문구", "은평구", "성북구", "노원구", "송파구"];
const STREETS: &[&str] = &["월드컵로", "연희로", "통일로", "보문로", "동일로", "올림픽로"];
const AMENITIES: &[&str] = &["엘리베이터", "장애인 화장실", "휴게실", "정원", "물리치료실", "식당"];
const ROOM_NAMES: &[&str] = &["프로그램실", "다목적실", "상담실", "재활실", "음악실", "미술실"];
const DEVICE_KINDS: &[(&str, &str)] = &[
    ("wheelchair", "휠체어"),
    ("walker", "보행보조기"),
    ("tablet", "태블릿"),
    ("blood_pressure_monitor", "혈압계"),
    ("hearing_aid", "보청기"),
];
const DEVICE_STATUSES: &[&str] = &["available", "available", "rented", "maintenance"];
const EQUIPMENT_NAMES: &[&str] = &["접이식 의자", "빔 프로젝터", "무선 마이크", "요가 매트", "전동 침대", "안마 의자"];
const CONDITIONS: &[&str] = &["new", "good", "good", "fair", "needs_repair"];
const RESERVATION_STATUSES: &[&str] = &["pending", "confirmed", "confirmed", "cancelled"];

impl Blueprint for entity::venue::ActiveModel {
    fn draft(rng: &mut StdRng) -> Self {
        let mut amenities: Vec<String> = AMENITIES.iter().map(|a| a.to_string()).collect();
        amenities.shuffle(rng);
        amenities.truncate(rng.random_range(1..=AMENITIES.len()));

        entity::venue::ActiveModel {
            name: ActiveValue::Set(pick_str(rng, VENUE_NAMES)),
            address: ActiveValue::Set(format!(
                "서울특별시 {} {} {}",
                pick(rng, DISTRICTS),
                pick(rng, STREETS),
                rng.random_range(1..300)
            )),
            capacity: ActiveValue::Set(rng.random_range(2..=20) * 10),
            meta: ActiveValue::Set(VenueMeta {
                amenities,
                parking: rng.random_bool(0.7),
                wheelchair_accessible: rng.random_bool(0.9),
            }),
            created_at: ActiveValue::Set(past(rng, 730)),
            ..Default::default()
        }
    }
}

impl Blueprint for entity::room::ActiveModel {
    fn draft(rng: &mut StdRng) -> Self {
        let floor = rng.random_range(1..=4);

        entity::room::ActiveModel {
            venue_id: ActiveValue::Set(loose_id(rng, 5)),
            name: ActiveValue::Set(format!(
                "{} {}{:02}",
                pick(rng, ROOM_NAMES),
                floor,
                rng.random_range(1..20)
            )),
            floor: ActiveValue::Set(floor),
            capacity: ActiveValue::Set(rng.random_range(4..=30)),
            created_at: ActiveValue::Set(past(rng, 730)),
            ..Default::default()
        }
    }
}

impl Blueprint for entity::device::ActiveModel {
    fn draft(rng: &mut StdRng) -> Self {
        let (kind, label) = pick(rng, DEVICE_KINDS);

        entity::device::ActiveModel {
            name: ActiveValue::Set(format!("{} {}호", label, rng.random_range(1..100))),
            kind: ActiveValue::Set(kind.to_string()),
            serial_number: ActiveValue::Set(format!("DEV-{:08X}", rng.random::<u32>())),
            status: ActiveValue::Set(pick_str(rng, DEVICE_STATUSES)),
            ..Default::default()
        }
    }
}

impl Blueprint for entity::device_rental::ActiveModel {
    fn draft(rng: &mut StdRng) -> Self {
        let rented_at = past(rng, 60);
        let due_at = rented_at + Duration::days(rng.random_range(7..=30));

        entity::device_rental::ActiveModel {
            device_id: ActiveValue::Set(loose_id(rng, 15)),
            user_id: ActiveValue::Set(loose_id(rng, 30)),
            rented_at: ActiveValue::Set(rented_at),
            due_at: ActiveValue::Set(due_at),
            returned_at: ActiveValue::Set(maybe(rng, 0.5, |rng| {
                rented_at + Duration::days(rng.random_range(1..=30))
            })),
            ..Default::default()
        }
    }
}

impl Blueprint for entity::equipment::ActiveModel {
    fn draft(rng: &mut StdRng) -> Self {
        entity::equipment::ActiveModel {
            venue_id: ActiveValue::Set(maybe(rng, 0.8, |rng| loose_id(rng, 5))),
            name: ActiveValue::Set(pick_str(rng, EQUIPMENT_NAMES)),
            quantity: ActiveValue::Set(rng.random_range(1..=40)),
            condition: ActiveValue::Set(pick_str(rng, CONDITIONS)),
            ..Default::default()
        }
    }
}

impl Blueprint for entity::reservation::ActiveModel {
    fn draft(rng: &mut StdRng) -> Self {
        entity::reservation::ActiveModel {
            equipment_id: ActiveValue::Set(loose_id(rng, 25)),
            user_id: ActiveValue::Set(loose_id(rng, 30)),
            quantity: ActiveValue::Set(rng.random_range(1..=5)),
            reserved_for: ActiveValue::Set(upcoming(rng, 30)),
            status: ActiveValue::Set(pick_str(rng, RESERVATION_STATUSES)),
            created_at: ActiveValue::Set(past(rng, 30)),
            ..Default::default()
        }
    }
}
