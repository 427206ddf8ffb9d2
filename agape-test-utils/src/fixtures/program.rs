use chrono::{Duration, Utc};
use entity::json::ProgramBenefits;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn program<'a>(&'a self) -> ProgramFixtures<'a> {
        ProgramFixtures { setup: self }
    }
}

pub struct ProgramFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> ProgramFixtures<'a> {
    pub async fn insert_program(
        &self,
        title: &str,
        category: &str,
    ) -> Result<entity::program::Model, TestError> {
        Ok(
            entity::prelude::Program::insert(entity::program::ActiveModel {
                title: ActiveValue::Set(title.to_string()),
                category: ActiveValue::Set(category.to_string()),
                description: ActiveValue::Set(None),
                instructor_id: ActiveValue::Set(None),
                capacity: ActiveValue::Set(20),
                price: ActiveValue::Set(0),
                benefits: ActiveValue::Set(ProgramBenefits(vec!["간식 제공".to_string()])),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a one hour session for `program_id` starting tomorrow.
    pub async fn insert_session(
        &self,
        program_id: i32,
        room_id: Option<i32>,
    ) -> Result<entity::session::Model, TestError> {
        let starts_at = Utc::now().naive_utc() + Duration::days(1);

        Ok(
            entity::prelude::Session::insert(entity::session::ActiveModel {
                program_id: ActiveValue::Set(program_id),
                room_id: ActiveValue::Set(room_id),
                starts_at: ActiveValue::Set(starts_at),
                ends_at: ActiveValue::Set(starts_at + Duration::hours(1)),
                status: ActiveValue::Set("scheduled".to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_room_reservation(
        &self,
        room_id: i32,
        user_id: i32,
    ) -> Result<entity::room_reservation::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::RoomReservation::insert(entity::room_reservation::ActiveModel {
                room_id: ActiveValue::Set(room_id),
                user_id: ActiveValue::Set(user_id),
                session_id: ActiveValue::Set(None),
                starts_at: ActiveValue::Set(now + Duration::days(2)),
                ends_at: ActiveValue::Set(now + Duration::days(2) + Duration::hours(2)),
                status: ActiveValue::Set("confirmed".to_string()),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_ai_interaction(
        &self,
        user_id: i32,
        prompt: &str,
    ) -> Result<entity::ai_interaction::Model, TestError> {
        Ok(
            entity::prelude::AiInteraction::insert(entity::ai_interaction::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                prompt: ActiveValue::Set(prompt.to_string()),
                response: ActiveValue::Set("오늘 식단은 저염식으로 준비되어 있습니다.".to_string()),
                model: ActiveValue::Set("care-assistant-mini".to_string()),
                tokens: ActiveValue::Set(42),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
