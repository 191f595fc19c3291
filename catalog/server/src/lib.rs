pub mod config {
    use serde::Deserialize;

    #[derive(Deserialize, Debug, Clone)]
    pub struct Config {
        #[serde(default = "default_database_url")]
        pub database_url: String,
        #[serde(default = "default_port")]
        pub port: u16,
        /// Directory holding the built front-end.
        #[serde(default = "default_static_dir")]
        pub static_dir: String,
    }

    impl Config {
        /// Loads configuration from environment variables.
        pub fn from_env() -> anyhow::Result<Self> {
            Self::from_environment(config::Environment::default())
        }

        /// Loads configuration from the given environment source.
        pub fn from_environment(environment: config::Environment) -> anyhow::Result<Self> {
            let settings = config::Config::builder().add_source(environment).build()?;

            let config: Config = settings.try_deserialize()?;
            Ok(config)
        }
    }

    fn default_database_url() -> String {
        "sqlite://catalog.sqlite?mode=rwc".to_string()
    }

    fn default_port() -> u16 {
        5000
    }

    fn default_static_dir() -> String {
        "dist".to_string()
    }

}
pub mod entities;
pub mod fields;
pub mod project;
pub mod resource;
pub mod seed;
pub mod web;
