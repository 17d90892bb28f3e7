use async_graphql::{Context, ErrorExtensions, Object, Result, ID};
use sea_orm::DatabaseConnection;

use crate::server::{
    graphql::types::{DanceClassObject, DancerObject, UserObject},
    middleware::auth::CurrentUser,
    service::{dance_class::DanceClassService, dancer::DancerService},
    util::parse::parse_id,
};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Every dancer, in creation order.
    async fn dancers(&self, ctx: &Context<'_>) -> Result<Vec<DancerObject>> {
        let db = ctx.data::<DatabaseConnection>()?;

        let dancers = DancerService::new(db)
            .get_all()
            .await
            .map_err(|e| e.extend())?;

        Ok(dancers.into_iter().map(DancerObject::from).collect())
    }

    async fn dancer(&self, ctx: &Context<'_>, id: ID) -> Result<DancerObject> {
        let db = ctx.data::<DatabaseConnection>()?;
        let id = parse_id(&id).map_err(|e| e.extend())?;

        let dancer = DancerService::new(db)
            .get_by_id(id)
            .await
            .map_err(|e| e.extend())?;

        Ok(dancer.into())
    }

    /// Every dance class, in creation order.
    async fn dance_classes(&self, ctx: &Context<'_>) -> Result<Vec<DanceClassObject>> {
        let db = ctx.data::<DatabaseConnection>()?;

        let classes = DanceClassService::new(db)
            .get_all()
            .await
            .map_err(|e| e.extend())?;

        Ok(classes.into_iter().map(DanceClassObject::from).collect())
    }

    async fn dance_class(&self, ctx: &Context<'_>, id: ID) -> Result<DanceClassObject> {
        let db = ctx.data::<DatabaseConnection>()?;
        let id = parse_id(&id).map_err(|e| e.extend())?;

        let class = DanceClassService::new(db)
            .get_by_id(id)
            .await
            .map_err(|e| e.extend())?;

        Ok(class.into())
    }

    /// The signed-in user, or null when nobody is signed in.
    async fn current_user(&self, ctx: &Context<'_>) -> Option<UserObject> {
        ctx.data_opt::<CurrentUser>()
            .and_then(|CurrentUser(identity)| identity.clone())
            .map(UserObject::from)
    }
}
