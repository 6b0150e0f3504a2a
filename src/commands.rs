//! Command-line surface over the API endpoints.
//!
//! Each subcommand maps to exactly one endpoint call. Payloads are passed as
//! JSON strings and printed back as JSON.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use thiserror::Error;

use places_admin_client::api::{auth, categories, images, places, social, tags};
use places_admin_client::config::ConfigError;
use places_admin_client::{ApiClient, ApiError};

#[derive(Parser, Debug)]
#[command(name = "places-admin", version, about = "Admin client for the places backend")]
pub struct Cli {
    /// Build mode; `production` selects VITE_API_BASE_URL_PROD
    #[arg(long, global = true)]
    pub mode: Option<String>,

    /// Override the backend base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in and store the session token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// End the session
    Logout,
    /// Show whether a session token is stored
    Whoami,
    #[command(subcommand)]
    Places(CatalogAction),
    #[command(subcommand)]
    Categories(CatalogAction),
    #[command(subcommand)]
    Tags(TagAction),
    #[command(subcommand)]
    Images(ImageAction),
    #[command(subcommand)]
    Social(SocialAction),
}

/// Actions shared by places and categories.
#[derive(Subcommand, Debug)]
pub enum CatalogAction {
    List,
    Show {
        id: String,
    },
    Add {
        #[arg(long)]
        data: String,
    },
    Edit {
        id: String,
        #[arg(long)]
        data: String,
    },
    Delete {
        id: String,
    },
}

/// Tags have no delete endpoint.
#[derive(Subcommand, Debug)]
pub enum TagAction {
    List,
    Show {
        id: String,
    },
    Add {
        #[arg(long)]
        data: String,
    },
    Edit {
        id: String,
        #[arg(long)]
        data: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ImageAction {
    /// List the images of a place
    List { place_id: String },
    Show { id: String },
    /// Upload an image file to a place
    Add {
        place_id: String,
        #[arg(long)]
        file: PathBuf,
    },
    Edit {
        id: String,
        #[arg(long)]
        data: String,
    },
    Delete { id: String },
}

#[derive(Subcommand, Debug)]
pub enum SocialAction {
    /// List the social media records of a place
    List { place_id: String },
    Show { id: String },
    Add {
        place_id: String,
        #[arg(long)]
        data: String,
    },
    Edit {
        id: String,
        #[arg(long)]
        data: String,
    },
    Delete { id: String },
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("Invalid --data JSON: {0}")]
    InvalidData(#[from] serde_json::Error),
    #[error("Failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CommandError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, CommandError::Api(e) if e.is_unauthorized())
    }
}

#[derive(Clone, Copy)]
enum Catalog {
    Places,
    Categories,
}

/// Run one command and return the payload to print.
pub async fn run(client: &ApiClient, command: Command) -> Result<Value, CommandError> {
    match command {
        Command::Login { email, password } => Ok(auth::login(client, &email, &password).await?),
        Command::Logout => Ok(auth::logout(client).await?),
        Command::Whoami => {
            let state = client.session().state();
            Ok(json!({ "session": state.label() }))
        }
        Command::Places(action) => run_catalog(client, Catalog::Places, action).await,
        Command::Categories(action) => run_catalog(client, Catalog::Categories, action).await,
        Command::Tags(action) => run_tags(client, action).await,
        Command::Images(action) => run_images(client, action).await,
        Command::Social(action) => run_social(client, action).await,
    }
}

async fn run_catalog(
    client: &ApiClient,
    catalog: Catalog,
    action: CatalogAction,
) -> Result<Value, CommandError> {
    let value = match (catalog, action) {
        (Catalog::Places, CatalogAction::List) => places::get_places(client).await?,
        (Catalog::Places, CatalogAction::Show { id }) => places::place_details(client, id).await?,
        (Catalog::Places, CatalogAction::Add { data }) => {
            places::add_place(client, &parse_data(&data)?).await?
        }
        (Catalog::Places, CatalogAction::Edit { id, data }) => {
            places::edit_place(client, id, &parse_data(&data)?).await?
        }
        (Catalog::Places, CatalogAction::Delete { id }) => places::delete_place(client, id).await?,

        (Catalog::Categories, CatalogAction::List) => categories::get_categories(client).await?,
        (Catalog::Categories, CatalogAction::Show { id }) => {
            categories::category_details(client, id).await?
        }
        (Catalog::Categories, CatalogAction::Add { data }) => {
            categories::add_category(client, &parse_data(&data)?).await?
        }
        (Catalog::Categories, CatalogAction::Edit { id, data }) => {
            categories::edit_category(client, id, &parse_data(&data)?).await?
        }
        (Catalog::Categories, CatalogAction::Delete { id }) => {
            categories::delete_category(client, id).await?
        }
    };
    Ok(value)
}

async fn run_tags(client: &ApiClient, action: TagAction) -> Result<Value, CommandError> {
    let value = match action {
        TagAction::List => tags::get_tags(client).await?,
        TagAction::Show { id } => tags::tag_details(client, id).await?,
        TagAction::Add { data } => tags::add_tag(client, &parse_data(&data)?).await?,
        TagAction::Edit { id, data } => tags::edit_tag(client, id, &parse_data(&data)?).await?,
    };
    Ok(value)
}

async fn run_images(client: &ApiClient, action: ImageAction) -> Result<Value, CommandError> {
    let value = match action {
        ImageAction::List { place_id } => images::get_place_images(client, place_id).await?,
        ImageAction::Show { id } => images::image_details(client, id).await?,
        ImageAction::Add { place_id, file } => {
            let data = tokio::fs::read(&file)
                .await
                .map_err(|source| CommandError::ReadFile {
                    path: file.clone(),
                    source,
                })?;
            let file_name = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "upload".to_string());
            let form = images::image_form(data, &file_name)?;
            images::add_place_image(client, place_id, form).await?
        }
        ImageAction::Edit { id, data } => {
            images::edit_image(client, id, &parse_data(&data)?).await?
        }
        ImageAction::Delete { id } => images::delete_image(client, id).await?,
    };
    Ok(value)
}

async fn run_social(client: &ApiClient, action: SocialAction) -> Result<Value, CommandError> {
    let value = match action {
        SocialAction::List { place_id } => social::get_place_social_media(client, place_id).await?,
        SocialAction::Show { id } => social::social_media_details(client, id).await?,
        SocialAction::Add { place_id, data } => {
            social::add_place_social_media(client, place_id, &parse_data(&data)?).await?
        }
        SocialAction::Edit { id, data } => {
            social::edit_social_media(client, id, &parse_data(&data)?).await?
        }
        SocialAction::Delete { id } => social::delete_social_media(client, id).await?,
    };
    Ok(value)
}

/// Message printed on stderr when a command fails.
///
/// A rejected login is a credentials problem, not an expired session, even
/// though the 401 also runs session recovery.
pub fn failure_message(err: &CommandError, session_ended: bool, logging_in: bool) -> String {
    if logging_in && err.is_unauthorized() {
        format!("Login failed: invalid email or password. {}", err)
    } else if session_ended || err.is_unauthorized() {
        "Session expired. Run 'places-admin login' again.".to_string()
    } else {
        format!("Error: {}", err)
    }
}

fn parse_data(data: &str) -> Result<Value, CommandError> {
    Ok(serde_json::from_str(data)?)
}
