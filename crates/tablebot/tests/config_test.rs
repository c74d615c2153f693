use tablebot::BotConfig;

#[test]
fn defaults_are_runnable() {
    let config = BotConfig::load(None).unwrap();
    assert_eq!(config.gateway.base_url, "https://testnet.tableland.network");
    assert_eq!(config.market.collection_slug, "tableland-rigs");
    assert!(config.discord.guild_id.is_none());
}

#[test]
fn partial_files_fill_in_defaults() {
    let config: BotConfig = toml::from_str(
        r#"
        [discord]
        guild_id = 1071603734
        "#,
    )
    .unwrap();

    assert_eq!(config.discord.guild_id, Some(1071603734));
    assert_eq!(config.gateway.base_url, "https://testnet.tableland.network");
    assert!(!config.market.rigs_endpoint.is_empty());
}

#[test]
fn every_section_is_overridable() {
    let config: BotConfig = toml::from_str(
        r#"
        [gateway]
        base_url = "https://staging.tableland.network"

        [market]
        collection_slug = "tableland-rigs"
        rigs_endpoint = "https://staging.tableland.xyz/graphql"
        "#,
    )
    .unwrap();

    assert_eq!(config.gateway.base_url, "https://staging.tableland.network");
    assert_eq!(
        config.market.rigs_endpoint,
        "https://staging.tableland.xyz/graphql"
    );
}

#[test]
fn unknown_keys_are_rejected_gracefully_or_ignored() {
    // toml's serde impl ignores unknown fields by default; a config written
    // for a newer bot version must not break an older binary.
    let parsed: Result<BotConfig, _> = toml::from_str(
        r#"
        [discord]
        guild_id = 42
        future_flag = true
        "#,
    );
    assert!(parsed.is_ok());
}
