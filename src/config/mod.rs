mod settings;

pub use settings::{
    InviterConfig, Settings, SlackConfig, load_settings, parse_list, verbose_from_env,
};
