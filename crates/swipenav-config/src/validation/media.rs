//! Media binding validation.

use std::collections::HashSet;

use crate::schema::SwipeNavConfig;

use super::helpers::validate_identifier;

pub(crate) fn validate_media(errors: &mut Vec<String>, config: &SwipeNavConfig) {
    let mut ids = HashSet::new();
    for (i, binding) in config.media.iter().enumerate() {
        let name = format!("media[{i}].element_id");
        validate_identifier(errors, &name, &binding.element_id);
        if !ids.insert(binding.element_id.as_str()) {
            errors.push(format!(
                "{name} = {:?} is bound more than once",
                binding.element_id
            ));
        }
        if !config.grid.panels.contains(&binding.panel) {
            errors.push(format!(
                "media[{i}].panel = {} is not in grid.panels",
                binding.panel
            ));
        }
    }
}
