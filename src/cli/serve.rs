use crate::{
    config::{self, Overrides},
    error, server,
};

pub async fn serve(overrides: Overrides) {
    let config = match config::load(&overrides).await {
        Ok(config) => config,
        Err(e) => error!("Cannot load configuration: {}", e),
    };

    if let Err(e) = server::start_api_server(config).await {
        error!("Server stopped: {}", e);
    }
}
