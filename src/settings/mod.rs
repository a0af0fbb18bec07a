pub mod settings_struct;

pub use settings_struct::{
    init_settings, update_settings_from_content, FetchSettings, ServerSettings, Settings, GLOBAL,
};
