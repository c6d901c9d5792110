//! Entities, their members, and the relationships between them.

use std::{fmt, str::FromStr};

/// Member visibility in a class diagram.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    #[default]
    Private,
    Protected,
}

impl Visibility {
    /// Returns the UML symbol for this visibility
    pub fn symbol(self) -> char {
        match self {
            Self::Public => '+',
            Self::Private => '-',
            Self::Protected => '#',
        }
    }
}

impl FromStr for Visibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(Self::Public),
            "private" => Ok(Self::Private),
            "protected" => Ok(Self::Protected),
            _ => Err(format!(
                "invalid visibility `{s}`, valid values: public, private, protected"
            )),
        }
    }
}

/// A class attribute, rendered as `- name: Type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    name: String,
    type_name: String,
    visibility: Visibility,
}

impl Attribute {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>, visibility: Visibility) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            visibility,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {}",
            self.visibility.symbol(),
            self.name,
            self.type_name
        )
    }
}

/// A class method, rendered as `+ name(a, b): Return`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    name: String,
    parameters: Vec<String>,
    return_type: String,
    visibility: Visibility,
}

impl Method {
    pub fn new(
        name: impl Into<String>,
        parameters: Vec<String>,
        return_type: impl Into<String>,
        visibility: Visibility,
    ) -> Self {
        Self {
            name: name.into(),
            parameters,
            return_type: return_type.into(),
            visibility,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    pub fn return_type(&self) -> &str {
        &self.return_type
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}({}): {}",
            self.visibility.symbol(),
            self.name,
            self.parameters.join(", "),
            self.return_type
        )
    }
}

/// Key role of a table field, shown in the narrow type column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKey {
    Primary,
    Foreign,
    /// Any other marker; displayed verbatim
    Other(String),
}

impl FieldKey {
    pub fn is_foreign(&self) -> bool {
        matches!(self, Self::Foreign)
    }
}

impl From<&str> for FieldKey {
    fn from(value: &str) -> Self {
        match value {
            "PK" => Self::Primary,
            "FK" => Self::Foreign,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => write!(f, "PK"),
            Self::Foreign => write!(f, "FK"),
            Self::Other(text) => write!(f, "{text}"),
        }
    }
}

/// Target of a foreign key: `table.field`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    table: String,
    field: String,
}

impl Reference {
    pub fn new(table: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            field: field.into(),
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn field(&self) -> &str {
        &self.field
    }
}

/// A table field with its constraint flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    key: FieldKey,
    datatype: String,
    not_null: bool,
    unique: bool,
    auto_increment: bool,
    references: Option<Reference>,
}

impl Field {
    pub fn new(name: impl Into<String>, key: FieldKey, datatype: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key,
            datatype: datatype.into(),
            not_null: false,
            unique: false,
            auto_increment: false,
            references: None,
        }
    }

    pub fn with_not_null(mut self, not_null: bool) -> Self {
        self.not_null = not_null;
        self
    }

    pub fn with_unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    pub fn with_auto_increment(mut self, auto_increment: bool) -> Self {
        self.auto_increment = auto_increment;
        self
    }

    pub fn with_references(mut self, references: Reference) -> Self {
        self.references = Some(references);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn key(&self) -> &FieldKey {
        &self.key
    }

    pub fn datatype(&self) -> &str {
        &self.datatype
    }

    pub fn not_null(&self) -> bool {
        self.not_null
    }

    pub fn unique(&self) -> bool {
        self.unique
    }

    pub fn auto_increment(&self) -> bool {
        self.auto_increment
    }

    pub fn references(&self) -> Option<&Reference> {
        self.references.as_ref()
    }

    /// Multi-line description shown in the wide column of a table box.
    ///
    /// ```
    /// use erdraw_core::semantic::{Field, FieldKey};
    ///
    /// let field = Field::new("email", FieldKey::Other(String::new()), "VARCHAR(255)")
    ///     .with_not_null(true)
    ///     .with_unique(true);
    /// assert_eq!(field.description(), "email\nVARCHAR(255)\nNOT NULL, UNIQUE");
    /// ```
    pub fn description(&self) -> String {
        let mut description = format!("{}\n{}", self.name, self.datatype);
        let mut flags = Vec::new();
        if self.not_null {
            flags.push("NOT NULL");
        }
        if self.unique {
            flags.push("UNIQUE");
        }
        if !flags.is_empty() {
            description.push('\n');
            description.push_str(&flags.join(", "));
        }
        description
    }
}

/// The member lists of an entity, by diagram type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Members {
    /// Attribute and method sections of a class box
    Class {
        attributes: Vec<Attribute>,
        methods: Vec<Method>,
    },
    /// Field rows of a table box
    Table { fields: Vec<Field> },
}

/// Semantic kind of a relationship.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    Inheritance,
    Composition,
    Aggregation,
    Association,
    /// Schema-derived link from a foreign key field to the referenced table
    ForeignKey,
    /// Use case that always runs another use case
    Include,
    /// Use case that optionally adds behavior to another use case
    Extend,
    /// Unrecognized or missing kind; drawn as a bare line
    #[default]
    Other,
}

impl From<&str> for RelationKind {
    fn from(value: &str) -> Self {
        match value {
            "inheritance" => Self::Inheritance,
            "composition" => Self::Composition,
            "aggregation" => Self::Aggregation,
            "association" => Self::Association,
            "foreign-key" | "foreign_key" => Self::ForeignKey,
            "include" => Self::Include,
            "extend" => Self::Extend,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inheritance => write!(f, "inheritance"),
            Self::Composition => write!(f, "composition"),
            Self::Aggregation => write!(f, "aggregation"),
            Self::Association => write!(f, "association"),
            Self::ForeignKey => write!(f, "foreign-key"),
            Self::Include => write!(f, "include"),
            Self::Extend => write!(f, "extend"),
            Self::Other => write!(f, "default"),
        }
    }
}

/// Constraint details of a foreign key relationship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKey {
    field_index: usize,
    field: String,
    referenced_field: String,
    unique: bool,
    not_null: bool,
}

impl ForeignKey {
    pub fn new(
        field_index: usize,
        field: impl Into<String>,
        referenced_field: impl Into<String>,
        unique: bool,
        not_null: bool,
    ) -> Self {
        Self {
            field_index,
            field: field.into(),
            referenced_field: referenced_field.into(),
            unique,
            not_null,
        }
    }

    /// Row of the referencing field in the source table
    pub fn field_index(&self) -> usize {
        self.field_index
    }

    /// Name of the referencing field in the source table
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Name of the referenced field in the target table
    pub fn referenced_field(&self) -> &str {
        &self.referenced_field
    }

    pub fn unique(&self) -> bool {
        self.unique
    }

    pub fn not_null(&self) -> bool {
        self.not_null
    }
}

/// A directed link from the owning entity to a target entity, by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    kind: RelationKind,
    target: String,
    source_multiplicity: Option<String>,
    target_multiplicity: Option<String>,
    foreign_key: Option<ForeignKey>,
}

impl Relationship {
    pub fn new(kind: RelationKind, target: impl Into<String>) -> Self {
        Self {
            kind,
            target: target.into(),
            source_multiplicity: None,
            target_multiplicity: None,
            foreign_key: None,
        }
    }

    /// Creates the relationship implied by a foreign key field.
    ///
    /// Returns `None` when the field is not a foreign key or lacks a reference.
    pub fn from_foreign_key_field(index: usize, field: &Field) -> Option<Self> {
        if !field.key().is_foreign() {
            return None;
        }
        let reference = field.references()?;
        Some(Self {
            foreign_key: Some(ForeignKey::new(
                index,
                field.name(),
                reference.field(),
                field.unique(),
                field.not_null(),
            )),
            ..Self::new(RelationKind::ForeignKey, reference.table())
        })
    }

    pub fn with_source_multiplicity(mut self, multiplicity: impl Into<String>) -> Self {
        self.source_multiplicity = Some(multiplicity.into());
        self
    }

    pub fn with_target_multiplicity(mut self, multiplicity: impl Into<String>) -> Self {
        self.target_multiplicity = Some(multiplicity.into());
        self
    }

    pub fn kind(&self) -> RelationKind {
        self.kind
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn source_multiplicity(&self) -> Option<&str> {
        self.source_multiplicity.as_deref()
    }

    pub fn target_multiplicity(&self) -> Option<&str> {
        self.target_multiplicity.as_deref()
    }

    pub fn foreign_key(&self) -> Option<&ForeignKey> {
        self.foreign_key.as_ref()
    }
}

/// A diagrammed class or table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    name: String,
    members: Members,
    relationships: Vec<Relationship>,
}

impl Entity {
    /// Creates a class entity with the given sections.
    pub fn class(name: impl Into<String>, attributes: Vec<Attribute>, methods: Vec<Method>) -> Self {
        Self {
            name: name.into(),
            members: Members::Class {
                attributes,
                methods,
            },
            relationships: Vec::new(),
        }
    }

    /// Creates a table entity.
    ///
    /// One [`RelationKind::ForeignKey`] relationship is derived per referencing
    /// field, in field order.
    pub fn table(name: impl Into<String>, fields: Vec<Field>) -> Self {
        let relationships = fields
            .iter()
            .enumerate()
            .filter_map(|(index, field)| Relationship::from_foreign_key_field(index, field))
            .collect();
        Self {
            name: name.into(),
            members: Members::Table { fields },
            relationships,
        }
    }

    pub fn with_relationship(mut self, relationship: Relationship) -> Self {
        self.relationships.push(relationship);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &Members {
        &self.members
    }

    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    /// Table field at `index`; always `None` for class entities.
    pub fn field(&self, index: usize) -> Option<&Field> {
        match &self.members {
            Members::Table { fields } => fields.get(index),
            Members::Class { .. } => None,
        }
    }

    /// Index of the first table field named `name`; always `None` for class entities.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        match &self.members {
            Members::Table { fields } => fields.iter().position(|field| field.name() == name),
            Members::Class { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fk(name: &str, table: &str) -> Field {
        Field::new(name, FieldKey::Foreign, "INT").with_references(Reference::new(table, "id"))
    }

    #[test]
    fn test_member_display() {
        let attribute = Attribute::new("name", "String", Visibility::Protected);
        assert_eq!(attribute.to_string(), "# name: String");

        let method = Method::new(
            "placeOrder",
            vec!["Cart cart".to_string(), "int qty".to_string()],
            "Order",
            Visibility::Public,
        );
        assert_eq!(method.to_string(), "+ placeOrder(Cart cart, int qty): Order");
    }

    #[test]
    fn test_visibility_defaults_to_private() {
        assert_eq!(Visibility::default().symbol(), '-');
        assert!("internal".parse::<Visibility>().is_err());
    }

    #[test]
    fn test_field_key_from_str() {
        assert_eq!(FieldKey::from("PK"), FieldKey::Primary);
        assert_eq!(FieldKey::from("FK"), FieldKey::Foreign);
        assert_eq!(FieldKey::from("IDX").to_string(), "IDX");
    }

    #[test]
    fn test_field_description_without_flags() {
        let field = Field::new("id", FieldKey::Primary, "INT");
        assert_eq!(field.description(), "id\nINT");
    }

    #[test]
    fn test_table_derives_foreign_keys_in_field_order() {
        let table = Entity::table(
            "orders",
            vec![
                Field::new("id", FieldKey::Primary, "INT"),
                fk("customer_id", "customers").with_unique(true),
                Field::new("note", FieldKey::Foreign, "TEXT"),
                fk("product_id", "products").with_not_null(true),
            ],
        );

        let targets: Vec<_> = table.relationships().iter().map(|r| r.target()).collect();
        assert_eq!(targets, ["customers", "products"]);

        let first = table.relationships()[0].foreign_key().unwrap();
        assert_eq!(first.field(), "customer_id");
        assert_eq!(first.referenced_field(), "id");
        assert!(first.unique());
        assert!(!first.not_null());

        assert_eq!(first.field_index(), 1);
        assert_eq!(table.relationships()[1].foreign_key().unwrap().field_index(), 3);

        assert_eq!(table.field_index("product_id"), Some(3));
        assert_eq!(table.field_index("missing"), None);
        assert_eq!(table.field(3).map(Field::name), Some("product_id"));
        assert!(table.field(4).is_none());
    }

    #[test]
    fn test_foreign_keys_keep_their_own_rows() {
        let table = Entity::table("c", vec![fk("ref", "a"), fk("ref", "b")]);

        let rows: Vec<_> = table
            .relationships()
            .iter()
            .filter_map(Relationship::foreign_key)
            .map(ForeignKey::field_index)
            .collect();
        assert_eq!(rows, [0, 1]);
    }

    #[test]
    fn test_relation_kind_from_str() {
        assert_eq!(RelationKind::from("composition"), RelationKind::Composition);
        assert_eq!(RelationKind::from("dependency"), RelationKind::Other);
        assert_eq!(RelationKind::Other.to_string(), "default");
    }
}
