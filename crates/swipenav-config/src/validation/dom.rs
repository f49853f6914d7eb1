//! DOM identifier validation.

use crate::schema::SwipeNavConfig;
use swipenav_common::Side;

use super::helpers::validate_identifier;

pub(crate) fn validate_dom(errors: &mut Vec<String>, config: &SwipeNavConfig) {
    let dom = &config.dom;
    validate_identifier(errors, "dom.viewport_id", &dom.viewport_id);
    validate_identifier(errors, "dom.animating_class", &dom.animating_class);
    validate_identifier(
        errors,
        "dom.indicator_active_class",
        &dom.indicator_active_class,
    );

    for side in Side::ALL {
        if dom.indicators.for_side(side).trim().is_empty() {
            errors.push(format!("dom.indicators.{} selector is empty", side.as_str()));
        }
    }
}
