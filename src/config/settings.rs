use serde::{Deserialize, Serialize};
use config::{Config, ConfigError, Environment, File};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub store: StoreSettings,
    pub auth: AuthSettings,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StoreSettings {
    pub url: String,
    pub api_key: String,
    pub timeout_seconds: Option<u64>,  // Timeout total das consultas REST
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AuthSettings {
    pub login_path: String,  // View de login para onde o gate redireciona
    pub timeout_seconds: u64,  // Resolução de sessão que estourar vira "carregando"
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let mut builder = Config::builder()
            // Arquivo de configuração base
            .add_source(File::with_name("config/default").required(false))
            // Arquivo específico do ambiente
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false));

        // Adicionar variáveis de ambiente específicas
        if let Ok(url) = std::env::var("STORE_URL") {
            builder = builder.set_override("store.url", url)?;
        }
        if let Ok(api_key) = std::env::var("STORE_API_KEY") {
            builder = builder.set_override("store.api_key", api_key)?;
        }

        // Também suportar o prefixo do painel
        builder = builder.add_source(Environment::with_prefix("PAINEL"));

        let s = builder.build()?;

        s.try_deserialize()
    }
}
