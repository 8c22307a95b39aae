//! Validation for palette color strings.

use crate::colors::validate_color;
use crate::schema::EaselConfig;

pub(crate) fn validate_palette(errors: &mut Vec<String>, config: &EaselConfig) {
    for (role, value) in config.colors.entries() {
        if !validate_color(value) {
            errors.push(format!("colors.{role} = {value:?} is not a valid color"));
        }
    }
}
