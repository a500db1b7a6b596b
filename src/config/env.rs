use std::env;

use super::types::Config;

pub(super) fn apply_env(config: &mut Config) {
    if let Ok(val) = env::var("TASK_FILES_TASKS") {
        config.files_tasks = val;
    }
    if let Ok(val) = env::var("TASK_DISPLAY_MIN_DESC_WIDTH") {
        if let Ok(n) = val.parse() {
            config.display_min_desc_width = n;
        }
    }
}
