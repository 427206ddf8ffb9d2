use entity::json::ActivityMeta;
use rand::{rngs::StdRng, Rng};
use sea_orm::ActiveValue;

use crate::server::factory::{
    generate::{loose_id, maybe, past, pick, pick_str, sentence},
    Blueprint,
};

const PROMPTS: &[(&str, &str)] = &[
    (
        "이번 주 식단에서 저염식 메뉴를 알려줘",
        "이번 주 저염식 메뉴는 월요일 두부조림, 수요일 닭가슴살 채소찜, 금요일 연두부 된장국입니다.",
    ),
    (
        "혈압약 복용 시간을 정리해줘",
        "혈압약은 매일 아침 식후 8시 30분에 복용하도록 일정이 등록되어 있습니다.",
    ),
    (
        "내일 참여 가능한 프로그램이 있을까?",
        "내일 오전 10시 실버 요가와 오후 2시 원예 치료에 빈자리가 있습니다.",
    ),
    (
        "보호자 면회 규정을 알려줘",
        "면회는 평일 오후 2시부터 5시까지 가능하며 사전 예약이 필요합니다.",
    ),
    (
        "낙상 예방 운동을 추천해줘",
        "의자에 앉아서 하는 발목 돌리기와 벽 잡고 발뒤꿈치 들기를 하루 10회씩 권장합니다.",
    ),
];
const MODELS: &[&str] = &["care-assistant-mini", "care-assistant", "care-assistant-large"];
const ACTIONS: &[(&str, &str)] = &[
    ("login", "/login"),
    ("view_program", "/programs"),
    ("reserve_room", "/reservations"),
    ("update_profile", "/mypage"),
    ("view_meal_plan", "/meals"),
    ("view_medication", "/medications"),
];
const USER_AGENTS: &[&str] = &["Mozilla/5.0 (iPhone)", "Mozilla/5.0 (Windows NT 10.0)", "Mozilla/5.0 (Linux; Android 14)"];
const NOTIFICATIONS: &[(&str, &str)] = &[
    ("예약 확정", "신청하신 프로그램 예약이 확정되었습니다."),
    ("일정 변경", "예약하신 세션의 시간이 변경되었습니다."),
    ("복약 알림", "오늘 복용해야 할 약이 있습니다."),
    ("공지사항", "다음 주 월요일은 시설 점검으로 휴관합니다."),
    ("대여 반납 안내", "대여하신 보조기기의 반납일이 다가왔습니다."),
];

impl Blueprint for entity::ai_interaction::ActiveModel {
    fn draft(rng: &mut StdRng) -> Self {
        let (prompt, response) = pick(rng, PROMPTS);

        entity::ai_interaction::ActiveModel {
            user_id: ActiveValue::Set(loose_id(rng, 30)),
            prompt: ActiveValue::Set(prompt.to_string()),
            response: ActiveValue::Set(response.to_string()),
            model: ActiveValue::Set(pick_str(rng, MODELS)),
            tokens: ActiveValue::Set(rng.random_range(40..=900)),
            created_at: ActiveValue::Set(past(rng, 60)),
            ..Default::default()
        }
    }
}

impl Blueprint for entity::user_activity::ActiveModel {
    fn draft(rng: &mut StdRng) -> Self {
        let (action, path) = pick(rng, ACTIONS);

        entity::user_activity::ActiveModel {
            user_id: ActiveValue::Set(loose_id(rng, 30)),
            action: ActiveValue::Set(action.to_string()),
            meta: ActiveValue::Set(ActivityMeta {
                path: path.to_string(),
                ip_address: maybe(rng, 0.9, |rng| {
                    format!("192.168.{}.{}", rng.random_range(0..=255), rng.random_range(1..=254))
                }),
                user_agent: maybe(rng, 0.8, |rng| pick_str(rng, USER_AGENTS)),
            }),
            created_at: ActiveValue::Set(past(rng, 30)),
            ..Default::default()
        }
    }
}

impl Blueprint for entity::notification::ActiveModel {
    fn draft(rng: &mut StdRng) -> Self {
        let (title, body) = pick(rng, NOTIFICATIONS);

        entity::notification::ActiveModel {
            user_id: ActiveValue::Set(loose_id(rng, 30)),
            title: ActiveValue::Set(title.to_string()),
            body: ActiveValue::Set(body.to_string()),
            is_read: ActiveValue::Set(rng.random_bool(0.5)),
            created_at: ActiveValue::Set(past(rng, 30)),
            ..Default::default()
        }
    }
}

impl Blueprint for entity::message::ActiveModel {
    fn draft(rng: &mut StdRng) -> Self {
        entity::message::ActiveModel {
            sender_id: ActiveValue::Set(loose_id(rng, 30)),
            recipient_id: ActiveValue::Set(loose_id(rng, 30)),
            content: ActiveValue::Set(sentence(rng)),
            is_read: ActiveValue::Set(rng.random_bool(0.6)),
            created_at: ActiveValue::Set(past(rng, 30)),
            ..Default::default()
        }
    }
}
