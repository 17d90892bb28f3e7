use crate::server::{
    data::dance_class::DanceClassRepository,
    error::{internal::InternalError, AppError},
    model::dance_class::{CreateDanceClassParam, EnrolledDancer, UpdateDanceClassParam},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_id;
mod get_all;
mod update;

fn ballet_param() -> CreateDanceClassParam {
    CreateDanceClassParam {
        name: "Ballet".to_string(),
        semester: "Fall".to_string(),
        teacher: "Ms Smith".to_string(),
        teaching_assistant: None,
        class_length: 60,
        class_type: "Ballet".to_string(),
        location: "Studio A".to_string(),
        days_of_week: vec!["Monday".to_string(), "Wednesday".to_string()],
        dancers: vec![EnrolledDancer {
            first_name: "Alice".to_string(),
            last_name: "Smith".to_string(),
            age: 12,
        }],
    }
}
