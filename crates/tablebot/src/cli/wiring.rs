//! Construction of the command registry and its collaborators.

use std::sync::Arc;
use tablebot::{
    BotConfig, CommandRegistry, GatewayClient, OpenSeaClient, ParseCommand, ReadCommand,
    RigsCommand, RigsGraphClient, RigsStatsCommand, StatementValidator, TablelandParser,
};
use tracing::debug;

/// Build the frozen command registry from configuration.
///
/// The parser handle and each HTTP client are constructed once here and
/// shared by the commands that use them; nothing is mutated afterwards.
pub(crate) fn build_registry(
    config: &BotConfig,
) -> Result<Arc<CommandRegistry>, Box<dyn std::error::Error>> {
    let validator: Arc<dyn StatementValidator> = Arc::new(TablelandParser::new());
    let gateway = Arc::new(GatewayClient::new(&config.gateway.base_url));
    let market = Arc::new(OpenSeaClient::new(BotConfig::opensea_api_key()));
    let rigs = Arc::new(RigsGraphClient::new(&config.market.rigs_endpoint));

    let registry = CommandRegistry::new()
        .register(Arc::new(ParseCommand::new(validator.clone())))?
        .register(Arc::new(ReadCommand::new(validator, gateway)))?
        .register(Arc::new(RigsCommand::new(rigs)))?
        .register(Arc::new(RigsStatsCommand::new(
            market,
            config.market.collection_slug.clone(),
        )))?;

    debug!(commands = registry.len(), "command registry built");
    Ok(Arc::new(registry))
}
