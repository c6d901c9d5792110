//! Integration tests for the DiagramBuilder API

use erdraw::{
    DiagramBuilder, ErdrawError,
    color::Color,
    config::AppConfig,
    layout::DiagramLayout,
    routing::SkipReason,
    semantic::DiagramKind,
};

const LIBRARY: &str = r#"[
  {"name": "Person", "attributes": [{"name": "name", "type": "String", "access": "protected"}]},
  {"name": "Member",
   "attributes": [{"name": "memberId", "type": "int"}],
   "methods": [{"name": "borrow", "parameters": ["book: Book"], "return_type": "Loan", "access": "public"}],
   "relationships": [{"type": "inheritance", "target": "Person"}]},
  {"name": "Loan",
   "relationships": [{"type": "association", "target": "Member", "source_multiplicity": "*", "target_multiplicity": "1"}]},
  {"name": "Library",
   "relationships": [{"type": "composition", "target": "Shelf"}]},
  {"name": "Shelf",
   "relationships": [{"type": "aggregation", "target": "Person"}]}
]"#;

const SHOP: &str = r#"[
  {"title": "customers", "fields": [
    {"name": "id", "type": "PK", "datatype": "INT"},
    {"name": "email", "type": "", "datatype": "TEXT", "unique": true}
  ]},
  {"title": "orders", "fields": [
    {"name": "id", "type": "PK", "datatype": "INT"},
    {"name": "customer_id", "type": "FK", "datatype": "INT", "not null": true,
     "references": {"table": "customers", "field": "id"}},
    {"name": "coupon_id", "type": "FK", "datatype": "INT",
     "references": {"table": "coupons", "field": "id"}}
  ]}
]"#;

fn entity_layout(builder: &DiagramBuilder, source: &str) -> erdraw::layout::EntityLayout {
    let diagram = builder.parse(source, None).expect("Failed to parse diagram");
    match builder.layout(&diagram).expect("Failed to lay out diagram") {
        DiagramLayout::Entities(layout) => layout,
        DiagramLayout::UseCase(_) => panic!("expected an entity layout"),
    }
}

#[test]
fn test_builder_api_exists() {
    let _builder = DiagramBuilder::default();
}

#[test]
fn test_five_class_example() {
    let builder = DiagramBuilder::default();
    let layout = entity_layout(&builder, LIBRARY);

    assert_eq!(layout.boxes().len(), 5);
    let xs: Vec<f32> = layout.boxes().iter().map(|b| b.bounds().min_x()).collect();
    assert_eq!(xs, [0.0, 390.0, 780.0, 0.0, 390.0]);

    assert_eq!(layout.edges().len(), 4);
    assert!(layout.skipped().is_empty());

    let palette = AppConfig::default().style().class_palette().unwrap();
    for (index, edge) in layout.edges().iter().enumerate() {
        assert_eq!(edge.style().stroke().color(), palette.color(index));
    }
}

#[test]
fn test_table_skips_unknown_reference() {
    let builder = DiagramBuilder::default();
    let layout = entity_layout(&builder, SHOP);

    assert_eq!(layout.edges().len(), 1);
    assert_eq!(layout.skipped().len(), 1);

    let skipped = &layout.skipped()[0];
    assert_eq!(skipped.source(), "orders");
    assert_eq!(skipped.target(), "coupons");
    assert_eq!(skipped.reason(), SkipReason::UnknownTarget);

    // The routed edge still takes the first palette color
    assert_eq!(
        layout.edges()[0].style().stroke().color(),
        Color::new("#FF0000").unwrap()
    );
}

#[test]
fn test_layout_is_deterministic() {
    let builder = DiagramBuilder::default();
    let diagram = builder.parse(LIBRARY, None).unwrap();

    let first = builder.render_drawio(&diagram).unwrap();
    let second = builder.render_drawio(&diagram).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_skips_do_not_shift_colors_of_later_edges() {
    let source = r#"[
      {"name": "A", "relationships": [{"type": "association", "target": "Missing"}]},
      {"name": "B", "relationships": [{"type": "association", "target": "A"}]}
    ]"#;
    let builder = DiagramBuilder::default();
    let layout = entity_layout(&builder, source);

    assert_eq!(layout.edges().len(), 1);
    assert_eq!(
        layout.edges()[0].style().stroke().color(),
        Color::new("#FF0000").unwrap()
    );
}

#[test]
fn test_skips_leave_routes_of_later_edges_unchanged() {
    let with_dangling = r#"[
      {"name": "A", "relationships": [
        {"type": "association", "target": "Missing"},
        {"type": "association", "target": "C"}
      ]},
      {"name": "B", "relationships": [{"type": "composition", "target": "A"}]},
      {"name": "C", "relationships": [{"type": "inheritance", "target": "B"}]},
      {"name": "D", "relationships": [{"type": "aggregation", "target": "A"}]}
    ]"#;
    let without_dangling = r#"[
      {"name": "A", "relationships": [
        {"type": "association", "target": "C"}
      ]},
      {"name": "B", "relationships": [{"type": "composition", "target": "A"}]},
      {"name": "C", "relationships": [{"type": "inheritance", "target": "B"}]},
      {"name": "D", "relationships": [{"type": "aggregation", "target": "A"}]}
    ]"#;
    let builder = DiagramBuilder::default();
    let skipping = entity_layout(&builder, with_dangling);
    let clean = entity_layout(&builder, without_dangling);

    assert_eq!(skipping.skipped().len(), 1);
    assert!(clean.skipped().is_empty());
    assert_eq!(skipping.edges().len(), 4);
    assert_eq!(skipping.edges(), clean.edges());
}

#[test]
fn test_render_use_case_diagram() {
    let source = r#"{
      "system": "Library",
      "actors": [{"id": "A1", "name": "Reader"}],
      "use_cases": [
        {"id": "UC1", "name": "Search"},
        {"id": "UC2", "name": "Borrow", "includes": ["UC1"]}
      ],
      "relations": [{"actor_id": "A1", "use_case_id": "UC2"}]
    }"#;
    let builder = DiagramBuilder::default();
    let diagram = builder.parse(source, None).unwrap();
    assert_eq!(diagram.kind(), DiagramKind::UseCase);

    let drawio = builder.render_drawio(&diagram).unwrap();
    assert!(drawio.contains(r#"<diagram name="Use-Case Diagram""#));
    assert!(drawio.contains("&amp;lt;&amp;lt;include&amp;gt;&amp;gt;"));
    assert!(drawio.contains("dashed=1;"));
    assert!(drawio.contains(r#"source="3" target="5""#));
}

#[test]
fn test_forced_kind_mismatch_is_parse_error() {
    let builder = DiagramBuilder::default();
    let result = builder.parse(LIBRARY, Some(DiagramKind::UseCase));
    assert!(matches!(result, Err(ErdrawError::Parse { .. })));
}

#[test]
fn test_invalid_config_is_reported() {
    let config: AppConfig = toml::from_str(
        r#"
        [style]
        class_palette = []
        "#,
    )
    .unwrap();
    let builder = DiagramBuilder::new(config);
    let diagram = builder.parse(LIBRARY, None).unwrap();

    assert!(matches!(
        builder.render_drawio(&diagram),
        Err(ErdrawError::Config(_))
    ));
}

#[test]
fn test_builder_reusability() {
    let builder = DiagramBuilder::default();

    let classes = builder.parse(LIBRARY, None).unwrap();
    let tables = builder.parse(SHOP, None).unwrap();

    assert!(builder.render_drawio(&classes).unwrap().contains("Class Diagram"));
    assert!(builder.render_drawio(&tables).unwrap().contains(r#"name="ERD""#));
}
