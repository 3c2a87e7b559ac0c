use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "profile-viewer", version, about = "Show a user profile in the terminal")]
pub struct Cli {
    /// Config file (default: ~/.config/profile-viewer/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Override which user id the screen loads
    #[arg(long, value_name = "ID")]
    pub user_id: Option<String>,

    /// Basic-auth email; the password comes from the config file or PROFILE_VIEWER_PASSWORD
    #[arg(long, value_name = "EMAIL")]
    pub email: Option<String>,

    /// Accept any TLS certificate and hostname (development servers only)
    #[arg(long)]
    pub insecure_dev_tls: bool,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Apply command-line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.server.base_url = base_url.clone();
        }
        if let Some(user_id) = &self.user_id {
            config.profile.user_id = user_id.clone();
        }
        if let Some(email) = &self.email {
            config.auth.email = Some(email.clone());
        }
        if self.insecure_dev_tls {
            config.server.insecure_dev_tls = true;
        }
    }
}
