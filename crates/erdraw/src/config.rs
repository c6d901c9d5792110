//! Configuration types for erdraw layout and styling.
//!
//! Every constant the layout engine relies on lives here so it can be tuned
//! from a TOML file instead of being baked into the engine. All types
//! implement [`serde::Deserialize`] and fill in any omitted field from their
//! defaults, so a configuration file only needs the values it changes.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Box dimensions, gaps and nudge steps per diagram kind.
//! - [`StyleConfig`] - Edge palettes, the per-kind arrow table and background color.
//!
//! # Example
//!
//! ```
//! # use erdraw::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().class().box_width(), 240.0);
//! assert_eq!(config.style().class_palette().unwrap().len(), 7);
//! ```

use serde::Deserialize;

use erdraw_core::{
    color::Color,
    draw::{ArrowHead, ArrowStyle},
    semantic::RelationKind,
};

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Checks every value the engine depends on.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first invalid setting: a non-positive or
    /// non-finite dimension, an empty palette, or an unparsable color.
    pub fn validate(&self) -> Result<(), String> {
        self.layout.validate()?;
        self.style.class_palette()?;
        self.style.table_palette()?;
        self.style.background_color()?;
        Ok(())
    }
}

/// Layout settings for each diagram kind.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LayoutConfig {
    #[serde(default)]
    class: ClassLayoutConfig,

    #[serde(default)]
    table: TableLayoutConfig,

    #[serde(default)]
    use_case: UseCaseLayoutConfig,
}

impl LayoutConfig {
    pub fn new(
        class: ClassLayoutConfig,
        table: TableLayoutConfig,
        use_case: UseCaseLayoutConfig,
    ) -> Self {
        Self {
            class,
            table,
            use_case,
        }
    }

    /// Returns the class diagram settings.
    pub fn class(&self) -> &ClassLayoutConfig {
        &self.class
    }

    /// Returns the table diagram settings.
    pub fn table(&self) -> &TableLayoutConfig {
        &self.table
    }

    /// Returns the use-case diagram settings.
    pub fn use_case(&self) -> &UseCaseLayoutConfig {
        &self.use_case
    }

    fn validate(&self) -> Result<(), String> {
        let class = &self.class;
        let table = &self.table;
        let use_case = &self.use_case;

        let positive = [
            ("layout.class.box_width", class.box_width),
            ("layout.class.line_height", class.line_height),
            ("layout.class.nudge_step", class.nudge_step),
            ("layout.table.type_column_width", table.type_column_width),
            ("layout.table.name_column_width", table.name_column_width),
            ("layout.table.row_height", table.row_height),
            ("layout.table.column_width", table.column_width),
            ("layout.table.nudge_step", table.nudge_step),
            ("layout.use_case.actor_width", use_case.actor_width),
            ("layout.use_case.actor_height", use_case.actor_height),
            ("layout.use_case.use_case_width", use_case.use_case_width),
            ("layout.use_case.use_case_height", use_case.use_case_height),
        ];
        for (key, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("`{key}` must be a positive number, got {value}"));
            }
        }

        let non_negative = [
            ("layout.class.padding", class.padding),
            ("layout.class.title_height", class.title_height),
            ("layout.class.min_section_height", class.min_section_height),
            ("layout.class.separator_height", class.separator_height),
            ("layout.table.padding", table.padding),
            ("layout.use_case.padding", use_case.padding),
            ("layout.use_case.actor_x", use_case.actor_x),
        ];
        for (key, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("`{key}` must be zero or positive, got {value}"));
            }
        }

        Ok(())
    }
}

/// Dimensions for class diagrams.
///
/// A class box is a title bar followed by an attribute section and a method
/// section split by a separator line. Each section is at least
/// `min_section_height` tall.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClassLayoutConfig {
    box_width: f32,
    padding: f32,
    title_height: f32,
    line_height: f32,
    min_section_height: f32,
    separator_height: f32,
    nudge_step: f32,
}

impl Default for ClassLayoutConfig {
    fn default() -> Self {
        Self {
            box_width: 240.0,
            padding: 150.0,
            title_height: 30.0,
            line_height: 20.0,
            min_section_height: 25.0,
            separator_height: 1.0,
            nudge_step: 10.0,
        }
    }
}

impl ClassLayoutConfig {
    pub fn box_width(&self) -> f32 {
        self.box_width
    }

    /// Gap between grid columns and rows. Routing stubs sit half of it away
    /// from the box they leave.
    pub fn padding(&self) -> f32 {
        self.padding
    }

    pub fn title_height(&self) -> f32 {
        self.title_height
    }

    /// Height of a single attribute or method line.
    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    pub fn min_section_height(&self) -> f32 {
        self.min_section_height
    }

    pub fn separator_height(&self) -> f32 {
        self.separator_height
    }

    /// Distance a colliding waypoint is moved per retry.
    pub fn nudge_step(&self) -> f32 {
        self.nudge_step
    }
}

/// Dimensions for table (ER) diagrams.
///
/// A table box is a stack of equal rows: the title row and then one row per
/// field, each split into a key column and a name column.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TableLayoutConfig {
    type_column_width: f32,
    name_column_width: f32,
    row_height: f32,
    column_width: f32,
    padding: f32,
    nudge_step: f32,
}

impl Default for TableLayoutConfig {
    fn default() -> Self {
        Self {
            type_column_width: 60.0,
            name_column_width: 320.0,
            row_height: 40.0,
            column_width: 400.0,
            padding: 100.0,
            nudge_step: 5.0,
        }
    }
}

impl TableLayoutConfig {
    pub fn type_column_width(&self) -> f32 {
        self.type_column_width
    }

    pub fn name_column_width(&self) -> f32 {
        self.name_column_width
    }

    /// Total width of a table box.
    pub fn box_width(&self) -> f32 {
        self.type_column_width + self.name_column_width
    }

    pub fn row_height(&self) -> f32 {
        self.row_height
    }

    /// Horizontal grid pitch without the padding gap. This is wider than a
    /// table box so stubs have room on the left side.
    pub fn column_width(&self) -> f32 {
        self.column_width
    }

    pub fn padding(&self) -> f32 {
        self.padding
    }

    pub fn nudge_step(&self) -> f32 {
        self.nudge_step
    }
}

/// Dimensions for use-case diagrams.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UseCaseLayoutConfig {
    actor_width: f32,
    actor_height: f32,
    use_case_width: f32,
    use_case_height: f32,
    padding: f32,
    actor_x: f32,
}

impl Default for UseCaseLayoutConfig {
    fn default() -> Self {
        Self {
            actor_width: 80.0,
            actor_height: 100.0,
            use_case_width: 160.0,
            use_case_height: 80.0,
            padding: 80.0,
            actor_x: 50.0,
        }
    }
}

impl UseCaseLayoutConfig {
    pub fn actor_width(&self) -> f32 {
        self.actor_width
    }

    pub fn actor_height(&self) -> f32 {
        self.actor_height
    }

    pub fn use_case_width(&self) -> f32 {
        self.use_case_width
    }

    pub fn use_case_height(&self) -> f32 {
        self.use_case_height
    }

    pub fn padding(&self) -> f32 {
        self.padding
    }

    /// Left edge of the actor column.
    pub fn actor_x(&self) -> f32 {
        self.actor_x
    }

    /// Left edge of the use-case area, two gaps right of the actor column.
    pub fn use_case_x(&self) -> f32 {
        self.actor_x + self.actor_width + 2.0 * self.padding
    }
}

/// Visual styling configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Edge colors for class diagrams, cycled by routed relationship index.
    class_palette: Vec<String>,

    /// Edge colors for table diagrams.
    table_palette: Vec<String>,

    arrows: ArrowStyleTable,

    /// Page background, as a color string.
    background_color: Option<String>,
}

const CLASS_PALETTE: [&str; 7] = [
    "#FF0000", "#00AA00", "#0000FF", "#FFAA00", "#00AAAA", "#AA00AA", "#000000",
];

impl Default for StyleConfig {
    fn default() -> Self {
        let class_palette: Vec<String> = CLASS_PALETTE.iter().map(ToString::to_string).collect();
        let mut table_palette = class_palette.clone();
        table_palette.push("#AAAAAA".to_string());

        Self {
            class_palette,
            table_palette,
            arrows: ArrowStyleTable::default(),
            background_color: None,
        }
    }
}

impl StyleConfig {
    /// Returns the parsed class diagram palette.
    ///
    /// # Errors
    ///
    /// Returns an error if the palette is empty or holds an invalid color.
    pub fn class_palette(&self) -> Result<Palette, String> {
        Palette::parse("style.class_palette", &self.class_palette)
    }

    /// Returns the parsed table diagram palette.
    ///
    /// # Errors
    ///
    /// Returns an error if the palette is empty or holds an invalid color.
    pub fn table_palette(&self) -> Result<Palette, String> {
        Palette::parse("style.table_palette", &self.table_palette)
    }

    /// Returns the arrow heads drawn for each class relationship kind.
    pub fn arrows(&self) -> &ArrowStyleTable {
        &self.arrows
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }
}

/// An ordered, non-empty list of edge colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Creates a palette from already parsed colors, or `None` if `colors` is empty.
    pub fn new(colors: Vec<Color>) -> Option<Self> {
        if colors.is_empty() {
            None
        } else {
            Some(Self { colors })
        }
    }

    fn parse(key: &str, values: &[String]) -> Result<Self, String> {
        let colors = values
            .iter()
            .map(|value| {
                Color::new(value).map_err(|err| format!("Invalid color `{value}` in `{key}`: {err}"))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(colors).ok_or_else(|| format!("`{key}` must contain at least one color"))
    }

    /// Returns the color for the `index`-th routed edge, wrapping around.
    pub fn color(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; an empty palette cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Arrow heads drawn at each end of a class relationship, by kind.
///
/// Foreign keys are not listed here; their arrows follow the field's
/// cardinality instead.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ArrowStyleTable {
    inheritance: ArrowStyle,
    composition: ArrowStyle,
    aggregation: ArrowStyle,
    association: ArrowStyle,
    default: ArrowStyle,
}

impl Default for ArrowStyleTable {
    fn default() -> Self {
        Self {
            inheritance: ArrowStyle::new(ArrowHead::None, false, ArrowHead::Block, false),
            composition: ArrowStyle::new(ArrowHead::Diamond, true, ArrowHead::None, false),
            aggregation: ArrowStyle::new(ArrowHead::Diamond, false, ArrowHead::None, false),
            association: ArrowStyle::new(ArrowHead::None, false, ArrowHead::Open, false),
            default: ArrowStyle::new(ArrowHead::None, false, ArrowHead::None, false),
        }
    }
}

impl ArrowStyleTable {
    /// Returns the arrow style for `kind`, falling back to the default entry.
    pub fn for_kind(&self, kind: RelationKind) -> ArrowStyle {
        match kind {
            RelationKind::Inheritance => self.inheritance,
            RelationKind::Composition => self.composition,
            RelationKind::Aggregation => self.aggregation,
            RelationKind::Association => self.association,
            RelationKind::ForeignKey
            | RelationKind::Include
            | RelationKind::Extend
            | RelationKind::Other => self.default,
        }
    }
}
