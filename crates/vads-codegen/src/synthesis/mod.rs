//! Example synthesis: property values, composite children and whole examples.

mod composite;
mod generator;
mod values;

pub use composite::{
    ACTION_TEXTS, CHOICE_GROUP_NAME, CHOICE_LABELS, ChildProp, CompositeInfo, CompositeKind,
    SECTION_HEADERS, SLOT_PLACEHOLDER, detect_composite_component, generate_composite_children,
    generate_slot_content,
};
pub use generator::{DEFAULT_ACCESSIBLE_TEXT, ExampleGenerator, render_attribute};
pub use values::{
    BREADCRUMB_LIST, OPTION_LIST, PURPOSE_VALUES, SCREEN_READER_TEXT, STRING_DEFAULTS,
    ValueGenerator, first_union_literal,
};
