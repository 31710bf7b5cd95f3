use std::path::Path;

use tracing::info;

pub mod config;
pub mod stack;

const STACK_NAME: &str = "ApplicationStack";
const STACK_DESCRIPTION: &str = "Core application infrastructure";

#[tokio::main]
async fn main() -> Result<(), config::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    config::load_env_file(Path::new(".env"));
    let resolved_config = config::resolve()?;

    let mut app = stack::App::new(&resolved_config.region).await;
    let stack = stack::Stack::new(
        &mut app,
        STACK_NAME,
        stack::StackProps {
            environment: stack::Environment {
                account: resolved_config.account_id.clone(),
                region: resolved_config.region.clone(),
            },
            description: String::from(STACK_DESCRIPTION),
        },
    )
    .await;

    info!(
        stack_name = stack.stack_name.as_str(),
        account = stack.environment.account.as_str(),
        region = stack.environment.region.as_str(),
        "registered stack"
    );

    return Ok(());
}
