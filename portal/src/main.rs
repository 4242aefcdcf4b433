use std::str::FromStr;

use clap::Parser;
use options::{Command, DataFormat, Options};
use portal_lib::{
    CourseCode, FileTokenStore, Notification, Portal, PortalError, RemoteClient, RemoteConfig,
    Session,
};
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

use crate::model::CatalogView;

mod model;
mod options;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Options::parse();

    let store = FileTokenStore::new(&args.token_file);
    let session = Session::restore(&store)?;
    let config = RemoteConfig::new(args.base_url.clone());
    if !config.is_configured() {
        tracing::info!("no API base URL configured, running on mock data");
    }
    let mut portal = Portal::new(RemoteClient::https(config, session), store);
    portal.set_semester(args.semester.clone());

    let output = match args.command {
        Command::Courses { query } => {
            portal.refresh().await;
            serde_json::to_value(CatalogView::new(
                portal.catalog(),
                portal.search(&query),
                Vec::new(),
            ))?
        }
        Command::Enroll { codes } => {
            portal.refresh().await;
            let mut notifications = Vec::new();
            for code in codes {
                let code = CourseCode::from_str(&code)?;
                notifications.push(outcome(portal.enroll(code.as_str()).await));
            }
            catalog_view(&portal, notifications)?
        }
        Command::Drop { codes } => {
            portal.refresh().await;
            let mut notifications = Vec::new();
            for code in codes {
                let code = CourseCode::from_str(&code)?;
                notifications.push(outcome(portal.drop(code.as_str()).await));
            }
            catalog_view(&portal, notifications)?
        }
        Command::Check { code } => {
            portal.refresh().await;
            let code = CourseCode::from_str(&code)?;
            serde_json::to_value(portal.check(code.as_str()).await?)?
        }
        Command::Login { email, password } => {
            serde_json::to_value(portal.login(&email, &password).await?)?
        }
        Command::Logout => {
            portal.logout().await?;
            json!({ "authenticated": false })
        }
        Command::Whoami => serde_json::to_value(portal.current_user().await)?,
    };

    let result = match args.format {
        DataFormat::Json => match args.pretty {
            true => serde_json::to_string_pretty(&output)?,
            false => serde_json::to_string(&output)?,
        },
    };
    println!("{result}");

    Ok(())
}

/// Failed changes are reported next to the catalog rather than aborting the remaining ones.
fn outcome(result: Result<Notification, PortalError>) -> Notification {
    result.unwrap_or_else(|err| {
        tracing::debug!(error = %err, "action failed");
        err.notification()
    })
}

fn catalog_view<C, S>(
    portal: &Portal<C, S>,
    notifications: Vec<Notification>,
) -> Result<Value, serde_json::Error> {
    let catalog = portal.catalog();
    serde_json::to_value(CatalogView::new(
        catalog,
        catalog.available(),
        notifications,
    ))
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    PortalError(#[from] portal_lib::PortalError),
    #[error(transparent)]
    StoreError(#[from] portal_lib::StoreError),
    #[error(transparent)]
    InvalidCourseCode(#[from] portal_lib::ParseCodeError),
    #[error(transparent)]
    JsonSerializeFailed(#[from] serde_json::Error),
}
