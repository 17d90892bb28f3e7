//! GraphQL object and input types.
//!
//! Inputs also derive `Serialize` so resolvers can run them through the same JSON
//! rule tables as REST bodies. Patch inputs skip absent fields so an update only
//! checks what the client sent.

use async_graphql::{InputObject, SimpleObject, ID};
use serde::Serialize;

use crate::server::model::{
    dance_class::{DanceClass, EnrolledDancer},
    dancer::Dancer,
    identity::Identity,
};

#[derive(SimpleObject, Debug, Clone)]
#[graphql(name = "Dancer")]
pub struct DancerObject {
    pub id: ID,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
}

impl From<Dancer> for DancerObject {
    fn from(dancer: Dancer) -> Self {
        Self {
            id: ID::from(dancer.id),
            first_name: dancer.first_name,
            last_name: dancer.last_name,
            age: dancer.age,
        }
    }
}

#[derive(SimpleObject, Debug, Clone)]
#[graphql(name = "EnrolledDancer")]
pub struct EnrolledDancerObject {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
}

impl From<EnrolledDancer> for EnrolledDancerObject {
    fn from(dancer: EnrolledDancer) -> Self {
        Self {
            first_name: dancer.first_name,
            last_name: dancer.last_name,
            age: dancer.age,
        }
    }
}

#[derive(SimpleObject, Debug, Clone)]
#[graphql(name = "DanceClass")]
pub struct DanceClassObject {
    pub id: ID,
    pub name: String,
    pub semester: String,
    pub teacher: String,
    pub teaching_assistant: Option<String>,
    /// Length of one session in minutes
    pub class_length: i32,
    pub class_type: String,
    pub location: String,
    pub days_of_week: Vec<String>,
    pub dancers: Vec<EnrolledDancerObject>,
}

impl From<DanceClass> for DanceClassObject {
    fn from(class: DanceClass) -> Self {
        Self {
            id: ID::from(class.id),
            name: class.name,
            semester: class.semester,
            teacher: class.teacher,
            teaching_assistant: class.teaching_assistant,
            class_length: class.class_length,
            class_type: class.class_type,
            location: class.location,
            days_of_week: class.days_of_week,
            dancers: class
                .dancers
                .into_iter()
                .map(EnrolledDancerObject::from)
                .collect(),
        }
    }
}

/// The signed-in user, if any.
#[derive(SimpleObject, Debug, Clone)]
#[graphql(name = "User")]
pub struct UserObject {
    pub id: ID,
    pub name: String,
    pub email: Option<String>,
}

impl From<Identity> for UserObject {
    fn from(identity: Identity) -> Self {
        Self {
            id: ID::from(identity.id),
            name: identity.name,
            email: identity.email,
        }
    }
}

#[derive(InputObject, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DancerInput {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
}

#[derive(InputObject, Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct DancerPatchInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
}

#[derive(InputObject, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EnrolledDancerInput {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
}

#[derive(InputObject, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DanceClassInput {
    pub name: String,
    pub semester: String,
    pub teacher: String,
    pub teaching_assistant: Option<String>,
    pub class_length: i32,
    pub class_type: String,
    pub location: String,
    pub days_of_week: Vec<String>,
    pub dancers: Option<Vec<EnrolledDancerInput>>,
}

#[derive(InputObject, Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct DanceClassPatchInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semester: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teaching_assistant: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_length: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_of_week: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dancers: Option<Vec<EnrolledDancerInput>>,
}
