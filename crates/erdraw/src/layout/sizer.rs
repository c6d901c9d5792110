//! Box sizing from member counts.
//!
//! Sizes depend only on how many members an entity has, never on the text
//! itself, so layout is independent of fonts.

use erdraw_core::{
    geometry::Size,
    semantic::{Entity, Members},
};

use crate::config::{ClassLayoutConfig, LayoutConfig, TableLayoutConfig};

/// Height of one class box section holding `count` lines.
pub fn class_section_height(count: usize, config: &ClassLayoutConfig) -> f32 {
    config
        .min_section_height()
        .max(count as f32 * config.line_height())
}

/// Size of a class box: title bar, attribute section, separator, method section.
pub fn class_box_size(attributes: usize, methods: usize, config: &ClassLayoutConfig) -> Size {
    let height = config.title_height()
        + class_section_height(attributes, config)
        + config.separator_height()
        + class_section_height(methods, config);
    Size::new(config.box_width(), height)
}

/// Size of a table box: one title row plus one row per field.
pub fn table_box_size(fields: usize, config: &TableLayoutConfig) -> Size {
    let rows = 1 + fields;
    Size::new(config.box_width(), config.row_height() * rows as f32)
}

/// Size of any entity box, picked by its member layout.
pub fn entity_box_size(entity: &Entity, config: &LayoutConfig) -> Size {
    match entity.members() {
        Members::Class {
            attributes,
            methods,
        } => class_box_size(attributes.len(), methods.len(), config.class()),
        Members::Table { fields } => table_box_size(fields.len(), config.table()),
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_empty_class_reserves_minimum_sections() {
        let size = class_box_size(0, 0, &ClassLayoutConfig::default());

        assert_approx_eq!(f32, size.width(), 240.0);
        // 30 title + 25 + 1 separator + 25
        assert_approx_eq!(f32, size.height(), 81.0);
    }

    #[test]
    fn test_class_sections_grow_with_lines() {
        let config = ClassLayoutConfig::default();

        // One line stays under the minimum section height
        assert_approx_eq!(f32, class_section_height(1, &config), 25.0);
        assert_approx_eq!(f32, class_section_height(2, &config), 40.0);

        let size = class_box_size(3, 2, &config);
        assert_approx_eq!(f32, size.height(), 30.0 + 60.0 + 1.0 + 40.0);
    }

    #[test]
    fn test_table_rows() {
        let config = TableLayoutConfig::default();

        let empty = table_box_size(0, &config);
        assert_approx_eq!(f32, empty.width(), 380.0);
        assert_approx_eq!(f32, empty.height(), 40.0);

        assert_approx_eq!(f32, table_box_size(3, &config).height(), 160.0);
    }

    #[test]
    fn test_entity_box_size_dispatches_on_members() {
        let config = LayoutConfig::default();

        let class = Entity::class("A", Vec::new(), Vec::new());
        assert_approx_eq!(f32, entity_box_size(&class, &config).width(), 240.0);

        let table = Entity::table("t", Vec::new());
        assert_approx_eq!(f32, entity_box_size(&table, &config).width(), 380.0);
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    /// Height never decreases when a member is added to either section.
    fn check_class_height_monotone(attributes: usize, methods: usize) -> Result<(), TestCaseError> {
        let config = ClassLayoutConfig::default();
        let base = class_box_size(attributes, methods, &config).height();

        prop_assert!(class_box_size(attributes + 1, methods, &config).height() >= base);
        prop_assert!(class_box_size(attributes, methods + 1, &config).height() >= base);
        Ok(())
    }

    /// Each section is at least the minimum height.
    fn check_class_height_floor(attributes: usize, methods: usize) -> Result<(), TestCaseError> {
        let config = ClassLayoutConfig::default();
        let floor = config.title_height()
            + 2.0 * config.min_section_height()
            + config.separator_height();

        prop_assert!(class_box_size(attributes, methods, &config).height() >= floor);
        Ok(())
    }

    fn check_table_height_monotone(fields: usize) -> Result<(), TestCaseError> {
        let config = TableLayoutConfig::default();
        let base = table_box_size(fields, &config).height();

        prop_assert!(base >= config.row_height());
        prop_assert!(table_box_size(fields + 1, &config).height() > base);
        Ok(())
    }

    proptest! {
        #[test]
        fn class_height_monotone(attributes in 0usize..200, methods in 0usize..200) {
            check_class_height_monotone(attributes, methods)?;
        }

        #[test]
        fn class_height_floor(attributes in 0usize..200, methods in 0usize..200) {
            check_class_height_floor(attributes, methods)?;
        }

        #[test]
        fn table_height_monotone(fields in 0usize..200) {
            check_table_height_monotone(fields)?;
        }
    }
}
