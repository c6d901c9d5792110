//! Validation and elaboration of decoded documents into the semantic model.
//!
//! Every check runs before anything is rejected so one pass reports all
//! problems. Dangling relationship targets are not errors here; the router
//! skips them and reports why.

use std::collections::HashMap;

use log::debug;

use erdraw_core::semantic::{
    Actor, Association, Attribute, Diagram, Entity, Field, FieldKey, Method, Reference,
    RelationKind, Relationship, UseCase, UseCaseDiagram, Visibility,
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    schema::{
        AttributeInput, ClassInput, FieldInput, MethodInput, RelationshipInput, TableInput,
        UseCaseDiagramInput,
    },
};

/// Builds a class diagram from decoded class records.
pub(crate) fn class_diagram(inputs: Vec<ClassInput>) -> Result<Diagram, ParseError> {
    let mut collector = DiagnosticCollector::new();

    check_entity_names(
        &mut collector,
        inputs.iter().map(|input| input.name.as_str()),
    );
    for (index, input) in inputs.iter().enumerate() {
        let members = input
            .attributes
            .iter()
            .map(|attribute| ("attributes", attribute.name.as_str()))
            .chain(
                input
                    .methods
                    .iter()
                    .map(|method| ("methods", method.name.as_str())),
            );
        check_member_names(&mut collector, index, &input.name, members);
    }
    collector.finish()?;

    let entities = inputs.into_iter().map(class_entity).collect();
    Ok(Diagram::Class(entities))
}

/// Builds a table diagram from decoded table records.
pub(crate) fn table_diagram(inputs: Vec<TableInput>) -> Result<Diagram, ParseError> {
    let mut collector = DiagnosticCollector::new();

    check_entity_names(
        &mut collector,
        inputs.iter().map(|input| input.title.as_str()),
    );
    for (index, input) in inputs.iter().enumerate() {
        let members = input
            .fields
            .iter()
            .map(|field| ("fields", field.name.as_str()));
        check_member_names(&mut collector, index, &input.title, members);

        for (field_index, field) in input.fields.iter().enumerate() {
            if field.key == "FK" && field.references.is_none() {
                collector.emit(Diagnostic::warning(format!(
                    "foreign key `{}.{}` at `$[{index}].fields[{field_index}]` has no `references` \
                     and will not be connected",
                    input.title, field.name
                )));
            }
        }
    }
    collector.finish()?;

    let entities = inputs.into_iter().map(table_entity).collect();
    Ok(Diagram::Table(entities))
}

/// Builds a use-case diagram from a decoded document.
pub(crate) fn use_case_diagram(input: UseCaseDiagramInput) -> Result<Diagram, ParseError> {
    let mut collector = DiagnosticCollector::new();

    check_ids(
        &mut collector,
        "actors",
        input.actors.iter().map(|actor| actor.id.as_str()),
    );
    check_ids(
        &mut collector,
        "use_cases",
        input.use_cases.iter().map(|use_case| use_case.id.as_str()),
    );
    collector.finish()?;

    let mut diagram = UseCaseDiagram::new(input.system);
    for actor in input.actors {
        diagram = diagram.with_actor(Actor::new(actor.id, actor.name));
    }
    for use_case in input.use_cases {
        diagram = diagram.with_use_case(
            UseCase::new(use_case.id, use_case.name)
                .with_includes(use_case.includes)
                .with_extends(use_case.extends),
        );
    }
    for relation in input.relations {
        diagram = diagram.with_association(Association::new(
            relation.actor_id.unwrap_or_default(),
            relation.use_case_id.unwrap_or_default(),
        ));
    }

    Ok(Diagram::UseCase(diagram))
}

fn check_entity_names<'a>(
    collector: &mut DiagnosticCollector,
    names: impl Iterator<Item = &'a str>,
) {
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for (index, name) in names.enumerate() {
        if name.trim().is_empty() {
            collector.emit(
                Diagnostic::error(format!("entity at `$[{index}]` has an empty name"))
                    .with_code(ErrorCode::E200),
            );
            continue;
        }
        if let Some(first) = seen.get(name) {
            collector.emit(
                Diagnostic::error(format!(
                    "entity `{name}` at `$[{index}]` is already defined at `$[{first}]`"
                ))
                .with_code(ErrorCode::E201)
                .with_help("entity names must be unique; relationships refer to them by name"),
            );
            continue;
        }
        seen.insert(name, index);
    }
}

fn check_member_names<'a>(
    collector: &mut DiagnosticCollector,
    entity_index: usize,
    entity_name: &str,
    members: impl Iterator<Item = (&'static str, &'a str)>,
) {
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for (section, name) in members {
        let position = positions.entry(section).or_default();
        if name.trim().is_empty() {
            collector.emit(
                Diagnostic::error(format!(
                    "member `$[{entity_index}].{section}[{position}]` of `{entity_name}` has an \
                     empty name"
                ))
                .with_code(ErrorCode::E202),
            );
        }
        *position += 1;
    }
}

fn check_ids<'a>(
    collector: &mut DiagnosticCollector,
    section: &str,
    ids: impl Iterator<Item = &'a str>,
) {
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for (index, id) in ids.enumerate() {
        if id.trim().is_empty() {
            collector.emit(
                Diagnostic::error(format!("`{section}[{index}]` has an empty id"))
                    .with_code(ErrorCode::E200),
            );
            continue;
        }
        if let Some(first) = seen.get(id) {
            collector.emit(
                Diagnostic::error(format!(
                    "id `{id}` at `{section}[{index}]` is already used by `{section}[{first}]`"
                ))
                .with_code(ErrorCode::E203),
            );
            continue;
        }
        seen.insert(id, index);
    }
}

fn class_entity(input: ClassInput) -> Entity {
    let attributes = input.attributes.into_iter().map(attribute).collect();
    let methods = input.methods.into_iter().map(method).collect();

    input
        .relationships
        .into_iter()
        .map(relationship)
        .fold(Entity::class(input.name, attributes, methods), |entity, rel| {
            entity.with_relationship(rel)
        })
}

fn table_entity(input: TableInput) -> Entity {
    let fields = input.fields.into_iter().map(field).collect();
    Entity::table(input.title, fields)
}

fn visibility(access: Option<&str>) -> Visibility {
    let Some(access) = access else {
        return Visibility::default();
    };
    access.parse().unwrap_or_else(|err| {
        debug!(access, err:%; "Unknown access modifier, using private");
        Visibility::default()
    })
}

fn attribute(input: AttributeInput) -> Attribute {
    let visibility = visibility(input.access.as_deref());
    Attribute::new(input.name, input.type_name, visibility)
}

fn method(input: MethodInput) -> Method {
    let visibility = visibility(input.access.as_deref());
    let return_type = input.return_type.unwrap_or_else(|| "void".to_string());
    Method::new(input.name, input.parameters, return_type, visibility)
}

fn relationship(input: RelationshipInput) -> Relationship {
    let kind = input
        .kind
        .as_deref()
        .map(RelationKind::from)
        .unwrap_or_default();
    let mut relationship = Relationship::new(kind, input.target.unwrap_or_default());
    if let Some(multiplicity) = input.source_multiplicity {
        relationship = relationship.with_source_multiplicity(multiplicity);
    }
    if let Some(multiplicity) = input.target_multiplicity {
        relationship = relationship.with_target_multiplicity(multiplicity);
    }
    relationship
}

fn field(input: FieldInput) -> Field {
    let field = Field::new(input.name, FieldKey::from(input.key.as_str()), input.datatype)
        .with_not_null(input.not_null || input.not_null_spaced)
        .with_unique(input.unique)
        .with_auto_increment(input.auto_increment);
    match input.references {
        Some(reference) => field.with_references(Reference::new(reference.table, reference.field)),
        None => field,
    }
}
