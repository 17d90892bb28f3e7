use crate::server::{
    data::dancer::DancerRepository,
    model::dancer::{CreateDancerParam, UpdateDancerParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_id;
mod get_all;
mod update;
