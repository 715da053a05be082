use std::{error::Error, sync::Arc};

use churn::{
    executable_utils::{initialize_executable, run_backend},
    scorers::RuleBasedScorer,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    println!("Starting backend...");
    let config = initialize_executable()?;
    run_backend(config.backend, Arc::new(RuleBasedScorer::new())).await
}
