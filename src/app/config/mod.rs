mod load_config;

pub use load_config::{
    default_config_path, default_secrets_path, load_api_key, load_config, load_secrets,
};
