use sea_orm::entity::prelude::*;

/// A dance class document.
///
/// `days_of_week` and `dancers` are stored by value as JSON arrays; the embedded
/// dancers have no row of their own and are dropped together with the class.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "dance_class")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub semester: String,
    pub teacher: String,
    pub teaching_assistant: Option<String>,
    pub class_length: i32,
    pub class_type: String,
    pub location: String,
    pub days_of_week: Json,
    pub dancers: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
