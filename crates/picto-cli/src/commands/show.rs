use anyhow::Context;
use picto_config::PictoConfig;
use picto_db::error::DatabaseError;
use picto_db::service::PictoService;

use crate::cli::{ShowArgs, ShowKind};

/// Handle `picto show`.
pub async fn handle(args: &ShowArgs, config: &PictoConfig) -> anyhow::Result<()> {
    let service = PictoService::new_local(&config.database.path)
        .await
        .with_context(|| format!("failed to open database at {}", config.database.path))?;
    println!("{}", render(args, &service).await?);
    Ok(())
}

async fn render(args: &ShowArgs, service: &PictoService) -> anyhow::Result<String> {
    let value = match args.kind {
        ShowKind::User => service.user_to_dict(args.id).await.map(serde_json::to_value),
        ShowKind::Post => service.post_to_dict(args.id).await.map(serde_json::to_value),
        ShowKind::Comment => service
            .comment_to_dict(args.id)
            .await
            .map(serde_json::to_value),
    };

    let value = match value {
        Ok(json) => json?,
        Err(DatabaseError::NoResult) => {
            anyhow::bail!("{:?} {} not found", args.kind, args.id)
        }
        Err(error) => return Err(error.into()),
    };
    Ok(serde_json::to_string_pretty(&value)?)
}
