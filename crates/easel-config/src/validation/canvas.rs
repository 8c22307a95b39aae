//! Validation for the `[canvas]` section.

use crate::schema::EaselConfig;

use super::helpers::validate_range;

pub(crate) fn validate_canvas(errors: &mut Vec<String>, config: &EaselConfig) {
    let canvas = &config.canvas;
    validate_range(errors, "canvas.max_commands", canvas.max_commands, 1, 65536);
    validate_range(
        errors,
        "canvas.string_pool_bytes",
        canvas.string_pool_bytes,
        256,
        1_048_576,
    );
    validate_range(
        errors,
        "canvas.wire_buffer_bytes",
        canvas.wire_buffer_bytes,
        1024,
        4_194_304,
    );
    validate_range(
        errors,
        "canvas.text_buffer_bytes",
        canvas.text_buffer_bytes,
        256,
        1_048_576,
    );
    validate_range(
        errors,
        "canvas.max_content_blocks",
        canvas.max_content_blocks,
        1,
        4096,
    );
    if canvas.export_path.trim().is_empty() {
        errors.push("canvas.export_path must not be empty".into());
    }
}
