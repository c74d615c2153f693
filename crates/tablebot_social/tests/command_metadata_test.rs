//! The registration payloads are what Discord renders; pin their shape.

use serde_json::Value;
use std::sync::Arc;
use tablebot_gateway::GatewayClient;
use tablebot_market::{OpenSeaClient, RigsGraphClient};
use tablebot_parser::{StatementValidator, TablelandParser};
use tablebot_social::{
    ParseCommand, ReadCommand, RigsCommand, RigsStatsCommand, SlashCommand,
};

fn parser() -> Arc<dyn StatementValidator> {
    Arc::new(TablelandParser::new())
}

fn payload(command: &dyn SlashCommand) -> Value {
    serde_json::to_value(command.register()).unwrap()
}

#[test]
fn parse_takes_a_required_statement() {
    let command = ParseCommand::new(parser());
    assert_eq!(command.name(), "parse");

    let payload = payload(&command);
    assert_eq!(payload["name"], "parse");
    assert_eq!(payload["options"][0]["name"], "statement");
    assert_eq!(payload["options"][0]["required"], true);
}

#[test]
fn read_takes_a_required_statement() {
    let command = ReadCommand::new(parser(), Arc::new(GatewayClient::default()));
    assert_eq!(command.name(), "read");

    let payload = payload(&command);
    assert_eq!(payload["name"], "read");
    assert_eq!(payload["options"][0]["name"], "statement");
    assert_eq!(payload["options"][0]["required"], true);
}

#[test]
fn rigs_takes_a_positive_token_id() {
    let command = RigsCommand::new(Arc::new(RigsGraphClient::new(
        "https://example.com/graphql",
    )));
    assert_eq!(command.name(), "rigs");

    let payload = payload(&command);
    assert_eq!(payload["name"], "rigs");
    assert_eq!(payload["options"][0]["name"], "token_id");
    assert_eq!(payload["options"][0]["required"], true);
    assert_eq!(payload["options"][0]["min_value"], 1);
}

#[test]
fn rigs_stats_takes_no_options() {
    let command = RigsStatsCommand::new(Arc::new(OpenSeaClient::new(None)), "tableland-rigs");
    assert_eq!(command.name(), "rigs-stats");

    let payload = payload(&command);
    assert_eq!(payload["name"], "rigs-stats");
    assert!(
        payload["options"].is_null()
            || payload["options"].as_array().is_none_or(Vec::is_empty)
    );
}
