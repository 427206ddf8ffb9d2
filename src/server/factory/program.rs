use chrono::Duration;
use entity::json::ProgramBenefits;
use rand::{rngs::StdRng, Rng};
use sea_orm::ActiveValue;

use crate::server::factory::{
    generate::{loose_id, maybe, past, pick, pick_str, sentence, upcoming},
    Blueprint,
};

const PROGRAMS: &[(&str, &str)] = &[
    ("치매 예방 인지활동", "cognitive"),
    ("회상 요법 모임", "cognitive"),
    ("실버 요가", "exercise"),
    ("의자 체조", "exercise"),
    ("근력 강화 운동", "exercise"),
    ("원예 치료", "therapy"),
    ("미술 치료", "therapy"),
    ("음악 치료", "therapy"),
    ("노래 교실", "leisure"),
    ("영화 감상회", "leisure"),
    ("스마트폰 활용 교실", "education"),
    ("건강 강좌", "education"),
];
const BENEFIT_LABELS: &[&str] = &["간식 제공", "교재 제공", "수료증 발급", "보호자 참관 가능", "송영 서비스"];
const SESSION_STATUSES: &[&str] = &["scheduled", "scheduled", "scheduled", "completed", "cancelled"];
const RESERVATION_STATUSES: &[&str] = &["pending", "confirmed", "confirmed", "cancelled"];
const PARTICIPANT_STATUSES: &[&str] = &["enrolled", "enrolled", "waitlisted", "withdrawn"];

impl Blueprint for entity::program::ActiveModel {
    fn draft(rng: &mut StdRng) -> Self {
        let (title, category) = pick(rng, PROGRAMS);
        let benefits = BENEFIT_LABELS
            .iter()
            .filter(|_| rng.random_bool(0.4))
            .map(|label| label.to_string())
            .collect();

        entity::program::ActiveModel {
            title: ActiveValue::Set(title.to_string()),
            category: ActiveValue::Set(category.to_string()),
            description: ActiveValue::Set(maybe(rng, 0.7, sentence)),
            instructor_id: ActiveValue::Set(maybe(rng, 0.8, |rng| loose_id(rng, 30))),
            capacity: ActiveValue::Set(rng.random_range(1..=6) * 5),
            price: ActiveValue::Set(rng.random_range(0..=10) * 5_000),
            benefits: ActiveValue::Set(ProgramBenefits(benefits)),
            created_at: ActiveValue::Set(past(rng, 180)),
            ..Default::default()
        }
    }
}

impl Blueprint for entity::session::ActiveModel {
    fn draft(rng: &mut StdRng) -> Self {
        let starts_at = upcoming(rng, 30);

        entity::session::ActiveModel {
            program_id: ActiveValue::Set(loose_id(rng, 24)),
            room_id: ActiveValue::Set(maybe(rng, 0.9, |rng| loose_id(rng, 20))),
            starts_at: ActiveValue::Set(starts_at),
            ends_at: ActiveValue::Set(starts_at + Duration::minutes(rng.random_range(2..=4) * 30)),
            status: ActiveValue::Set(pick_str(rng, SESSION_STATUSES)),
            ..Default::default()
        }
    }
}

impl Blueprint for entity::room_reservation::ActiveModel {
    fn draft(rng: &mut StdRng) -> Self {
        let starts_at = upcoming(rng, 30);

        entity::room_reservation::ActiveModel {
            room_id: ActiveValue::Set(loose_id(rng, 20)),
            user_id: ActiveValue::Set(loose_id(rng, 30)),
            session_id: ActiveValue::Set(maybe(rng, 0.5, |rng| loose_id(rng, 72))),
            starts_at: ActiveValue::Set(starts_at),
            ends_at: ActiveValue::Set(starts_at + Duration::hours(rng.random_range(1..=3))),
            status: ActiveValue::Set(pick_str(rng, RESERVATION_STATUSES)),
            created_at: ActiveValue::Set(past(rng, 30)),
            ..Default::default()
        }
    }
}

impl Blueprint for entity::program_participant::ActiveModel {
    fn draft(rng: &mut StdRng) -> Self {
        entity::program_participant::ActiveModel {
            program_id: ActiveValue::Set(loose_id(rng, 24)),
            user_id: ActiveValue::Set(loose_id(rng, 30)),
            status: ActiveValue::Set(pick_str(rng, PARTICIPANT_STATUSES)),
            joined_at: ActiveValue::Set(past(rng, 120)),
            ..Default::default()
        }
    }
}

impl Blueprint for entity::review::ActiveModel {
    fn draft(rng: &mut StdRng) -> Self {
        entity::review::ActiveModel {
            program_id: ActiveValue::Set(loose_id(rng, 24)),
            user_id: ActiveValue::Set(loose_id(rng, 30)),
            rating: ActiveValue::Set(rng.random_range(1..=5)),
            comment: ActiveValue::Set(maybe(rng, 0.75, sentence)),
            created_at: ActiveValue::Set(past(rng, 90)),
            ..Default::default()
        }
    }
}
