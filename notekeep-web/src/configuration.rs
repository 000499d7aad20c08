use config::builder::{ConfigBuilder, DefaultState};
use notekeep::errors::NoteStoreError;
use notekeep::notestore::{util, BoxedNoteStore};
use notekeep::{InMemoryStore, PostgreSQLStoreBuilder};
use sqlx::postgres::PgConnectOptions;

#[derive(serde::Deserialize, Debug, PartialEq, Eq)]
pub enum NoteStoreType {
    InMemory,
    PostgreSQL,
}

#[derive(serde::Deserialize, Debug)]
pub struct Settings {
    database: Option<DatabaseSettings>,
    pub host: String,
    pub port: u16,
    pub debug: bool,
    pub notestoretype: NoteStoreType,
    populateinmemorystore: bool,
}

impl Settings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub async fn get_note_store(&self) -> Result<BoxedNoteStore, NoteStoreError> {
        match self.notestoretype {
            NoteStoreType::InMemory => {
                let store: BoxedNoteStore = Box::new(InMemoryStore::new());
                if self.populateinmemorystore {
                    util::populate_test_data(&store).await?;
                }
                Ok(store)
            }
            NoteStoreType::PostgreSQL => {
                let db_options = match self.database {
                    Some(ref database) => database.options()?,
                    None => {
                        return Err(NoteStoreError::PostgreSQLError(sqlx::Error::Configuration(
                            "When notestoretype is set to PostgreSQL, you must configure the keys under database".into(),
                        )))
                    }
                };
                let store = PostgreSQLStoreBuilder::new(db_options).build().await?;
                Ok(Box::new(store))
            }
        }
    }
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct DatabaseSettings {
    pub port: String,
    pub host: String,
    pub name: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl DatabaseSettings {
    pub fn options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        Ok(self.options_without_db()?.database(&self.name))
    }

    pub fn options_without_db(&self) -> Result<PgConnectOptions, sqlx::Error> {
        let port = self.port.parse().map_err(|e| {
            sqlx::Error::Configuration(format!("Failed to parse port number: {}", e).into())
        })?;
        let options = PgConnectOptions::new().host(&self.host).port(port);
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => Ok(options.username(username).password(password)),
            (Some(_), None) => Err(sqlx::Error::Configuration(
                "Password expected when a username is set".into(),
            )),
            (None, _) => Ok(options),
        }
    }
}

lazy_static! {
    pub static ref CONFIGURATION: Settings =
        get_configuration().expect("Failed to read configuration.yml.");
}

fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, config::ConfigError> {
    config::Config::builder()
        .set_default("debug", false)?
        .set_default("host", "localhost")?
        .set_default("port", 8080)?
        .set_default("notestoretype", "InMemory")?
        .set_default("populateinmemorystore", false)
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let config = builder_with_defaults()?
        .add_source(config::File::with_name("configuration").required(false))
        .add_source(
            config::Environment::default()
                .prefix("notekeep")
                .separator("_"),
        )
        .build()?;
    config.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use notekeep::NoteStore;

    #[test]
    fn defaults() {
        let settings: Settings = builder_with_defaults()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(settings.host, "localhost");
        assert!(!settings.debug);
        assert_eq!(settings.port, 8080);
        assert_eq!(settings.notestoretype, NoteStoreType::InMemory);
        assert!(!settings.populateinmemorystore);
    }

    #[test]
    fn database_requires_password_with_username() {
        let db = DatabaseSettings {
            port: "5432".into(),
            host: "localhost".into(),
            name: "notekeep".into(),
            username: Some("user".into()),
            password: None,
        };
        assert!(db.options().is_err());
    }

    #[test]
    fn database_port_must_be_a_number() {
        let db = DatabaseSettings {
            port: "not a port".into(),
            host: "localhost".into(),
            name: "notekeep".into(),
            username: None,
            password: None,
        };
        assert!(db.options_without_db().is_err());
    }

    #[tokio::test]
    async fn populated_in_memory_store() {
        let settings = Settings {
            database: None,
            host: "localhost".into(),
            port: 8080,
            debug: false,
            notestoretype: NoteStoreType::InMemory,
            populateinmemorystore: true,
        };
        let store = settings.get_note_store().await.unwrap();
        assert_eq!(store.list_notes().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn postgresql_without_database_settings() {
        let settings = Settings {
            database: None,
            host: "localhost".into(),
            port: 8080,
            debug: false,
            notestoretype: NoteStoreType::PostgreSQL,
            populateinmemorystore: false,
        };
        assert!(settings.get_note_store().await.is_err());
    }
}
