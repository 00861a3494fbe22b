use tokio::runtime::Runtime;

use sl_server::ServerConfig;

pub fn run(
    host: Option<String>,
    port: Option<u16>,
    seed: Option<u64>,
    quip_seed: Option<u64>,
) -> Result<(), String> {
    sl_server::init_tracing();

    let mut config = ServerConfig::load();
    if let Some(host) = host {
        config = config.with_host(host);
    }
    if let Some(port) = port {
        config = config.with_port(port);
    }
    if let Some(seed) = seed {
        config = config.with_lineup_seed(seed);
    }
    if let Some(seed) = quip_seed {
        config = config.with_quip_seed(seed);
    }

    let runtime = Runtime::new().map_err(|e| format!("failed to start runtime: {e}"))?;
    runtime
        .block_on(sl_server::serve(config))
        .map_err(|e| e.to_string())
}
