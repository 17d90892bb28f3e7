use async_graphql::{Context, ErrorExtensions, Object, Result, ID};
use sea_orm::DatabaseConnection;
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    model::{
        dance_class::{CreateDanceClassDto, UpdateDanceClassDto},
        dancer::{CreateDancerDto, UpdateDancerDto},
    },
    server::{
        error::AppError,
        graphql::types::{
            DanceClassInput, DanceClassObject, DanceClassPatchInput, DancerInput, DancerObject,
            DancerPatchInput,
        },
        service::{dance_class::DanceClassService, dancer::DancerService},
        util::parse::parse_id,
        validation::{parse_body, FieldRule, Mode, DANCER_RULES, DANCE_CLASS_RULES},
    },
};

/// Runs a GraphQL input through the same rule table and DTO as a REST body.
fn validated<I, T>(rules: &[FieldRule], input: &I, mode: Mode) -> Result<T, AppError>
where
    I: Serialize,
    T: DeserializeOwned,
{
    let body = serde_json::to_value(input)?;
    parse_body(rules, body, mode)
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn add_dancer(&self, ctx: &Context<'_>, dancer: DancerInput) -> Result<DancerObject> {
        let db = ctx.data::<DatabaseConnection>()?;
        let dto: CreateDancerDto =
            validated(DANCER_RULES, &dancer, Mode::Create).map_err(|e| e.extend())?;

        let dancer = DancerService::new(db)
            .create(dto.into())
            .await
            .map_err(|e| e.extend())?;

        Ok(dancer.into())
    }

    async fn update_dancer(
        &self,
        ctx: &Context<'_>,
        id: ID,
        dancer: DancerPatchInput,
    ) -> Result<DancerObject> {
        let db = ctx.data::<DatabaseConnection>()?;
        let id = parse_id(&id).map_err(|e| e.extend())?;
        let dto: UpdateDancerDto =
            validated(DANCER_RULES, &dancer, Mode::Update).map_err(|e| e.extend())?;

        let dancer = DancerService::new(db)
            .update(id, dto.into())
            .await
            .map_err(|e| e.extend())?;

        Ok(dancer.into())
    }

    async fn delete_dancer(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let db = ctx.data::<DatabaseConnection>()?;
        let id = parse_id(&id).map_err(|e| e.extend())?;

        DancerService::new(db)
            .delete(id)
            .await
            .map_err(|e| e.extend())?;

        Ok(true)
    }

    async fn add_dance_class(
        &self,
        ctx: &Context<'_>,
        dance_class: DanceClassInput,
    ) -> Result<DanceClassObject> {
        let db = ctx.data::<DatabaseConnection>()?;
        let dto: CreateDanceClassDto =
            validated(DANCE_CLASS_RULES, &dance_class, Mode::Create).map_err(|e| e.extend())?;

        let class = DanceClassService::new(db)
            .create(dto.into())
            .await
            .map_err(|e| e.extend())?;

        Ok(class.into())
    }

    async fn update_dance_class(
        &self,
        ctx: &Context<'_>,
        id: ID,
        dance_class: DanceClassPatchInput,
    ) -> Result<DanceClassObject> {
        let db = ctx.data::<DatabaseConnection>()?;
        let id = parse_id(&id).map_err(|e| e.extend())?;
        let dto: UpdateDanceClassDto =
            validated(DANCE_CLASS_RULES, &dance_class, Mode::Update).map_err(|e| e.extend())?;

        let class = DanceClassService::new(db)
            .update(id, dto.into())
            .await
            .map_err(|e| e.extend())?;

        Ok(class.into())
    }

    async fn delete_dance_class(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let db = ctx.data::<DatabaseConnection>()?;
        let id = parse_id(&id).map_err(|e| e.extend())?;

        DanceClassService::new(db)
            .delete(id)
            .await
            .map_err(|e| e.extend())?;

        Ok(true)
    }
}
