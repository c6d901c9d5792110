//! Raw JSON document shapes.
//!
//! These mirror the input documents field for field and are only used as a
//! decoding target; [`crate::elaborate`] validates them and builds the
//! semantic model.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct ClassInput {
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<AttributeInput>,
    #[serde(default)]
    pub methods: Vec<MethodInput>,
    #[serde(default)]
    pub relationships: Vec<RelationshipInput>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AttributeInput {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub access: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MethodInput {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<String>,
    pub return_type: Option<String>,
    pub access: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RelationshipInput {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub target: Option<String>,
    pub source_multiplicity: Option<String>,
    pub target_multiplicity: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TableInput {
    pub title: String,
    pub fields: Vec<FieldInput>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FieldInput {
    pub name: String,
    #[serde(rename = "type")]
    pub key: String,
    pub datatype: String,
    #[serde(default)]
    pub not_null: bool,
    #[serde(default, rename = "not null")]
    pub not_null_spaced: bool,
    #[serde(default)]
    pub unique: bool,
    #[serde(default)]
    pub auto_increment: bool,
    pub references: Option<ReferenceInput>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReferenceInput {
    pub table: String,
    pub field: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UseCaseDiagramInput {
    #[serde(default = "default_system_name")]
    pub system: String,
    #[serde(default)]
    pub actors: Vec<ActorInput>,
    #[serde(default)]
    pub use_cases: Vec<UseCaseInput>,
    #[serde(default)]
    pub relations: Vec<AssociationInput>,
}

fn default_system_name() -> String {
    "Use-Case Diagram".to_string()
}

#[derive(Debug, Deserialize)]
pub(crate) struct ActorInput {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UseCaseInput {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default)]
    pub extends: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AssociationInput {
    pub actor_id: Option<String>,
    pub use_case_id: Option<String>,
}
