use crate::cli::actions::Action;
use crate::gate;
use anyhow::Result;

/// Handle the server action
pub async fn handle(action: Action) -> Result<()> {
    match action {
        Action::Server { port, secret } => {
            gate::new(port, secret).await?;
        }
    }

    Ok(())
}
