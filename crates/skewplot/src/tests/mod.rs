//! Integration tests for the widget
//!
//! Tests are organized by topic:
//! - `interaction` - Key handling and slider state changes
//! - `render` - Rendered output on a test terminal
