//! Use-case diagram model: actors, use cases and their links.

/// A participant outside the system boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    id: String,
    name: String,
}

impl Actor {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A use case inside the system boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UseCase {
    id: String,
    name: String,
    includes: Vec<String>,
    extends: Vec<String>,
}

impl UseCase {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            includes: Vec::new(),
            extends: Vec::new(),
        }
    }

    pub fn with_includes(mut self, includes: Vec<String>) -> Self {
        self.includes = includes;
        self
    }

    pub fn with_extends(mut self, extends: Vec<String>) -> Self {
        self.extends = extends;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ids of use cases this one includes
    pub fn includes(&self) -> &[String] {
        &self.includes
    }

    /// Ids of use cases this one extends
    pub fn extends(&self) -> &[String] {
        &self.extends
    }
}

/// Link between an actor and a use case, by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Association {
    actor_id: String,
    use_case_id: String,
}

impl Association {
    pub fn new(actor_id: impl Into<String>, use_case_id: impl Into<String>) -> Self {
        Self {
            actor_id: actor_id.into(),
            use_case_id: use_case_id.into(),
        }
    }

    pub fn actor_id(&self) -> &str {
        &self.actor_id
    }

    pub fn use_case_id(&self) -> &str {
        &self.use_case_id
    }
}

/// A complete use-case diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UseCaseDiagram {
    system: String,
    actors: Vec<Actor>,
    use_cases: Vec<UseCase>,
    associations: Vec<Association>,
}

impl UseCaseDiagram {
    /// Creates an empty diagram whose system boundary is titled `system`.
    pub fn new(system: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            actors: Vec::new(),
            use_cases: Vec::new(),
            associations: Vec::new(),
        }
    }

    pub fn with_actor(mut self, actor: Actor) -> Self {
        self.actors.push(actor);
        self
    }

    pub fn with_use_case(mut self, use_case: UseCase) -> Self {
        self.use_cases.push(use_case);
        self
    }

    pub fn with_association(mut self, association: Association) -> Self {
        self.associations.push(association);
        self
    }

    pub fn system(&self) -> &str {
        &self.system
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub fn use_cases(&self) -> &[UseCase] {
        &self.use_cases
    }

    pub fn associations(&self) -> &[Association] {
        &self.associations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_preserves_order() {
        let diagram = UseCaseDiagram::new("School portal")
            .with_actor(Actor::new("A1", "Student"))
            .with_actor(Actor::new("A2", "Lecturer"))
            .with_use_case(UseCase::new("UC1", "Log in"))
            .with_use_case(UseCase::new("UC2", "View grades").with_includes(vec!["UC1".into()]))
            .with_association(Association::new("A1", "UC2"));

        assert_eq!(diagram.system(), "School portal");
        let actor_ids: Vec<_> = diagram.actors().iter().map(Actor::id).collect();
        assert_eq!(actor_ids, ["A1", "A2"]);
        assert_eq!(diagram.use_cases()[1].includes(), ["UC1".to_string()]);
        assert!(diagram.use_cases()[1].extends().is_empty());
        assert_eq!(diagram.associations()[0].use_case_id(), "UC2");
    }
}
