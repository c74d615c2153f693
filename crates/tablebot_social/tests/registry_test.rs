use async_trait::async_trait;
use serenity::all::{CommandInteraction, Context, CreateCommand};
use std::sync::Arc;
use tablebot_social::{CommandRegistry, DiscordErrorKind, DiscordResult, SlashCommand};

struct StubCommand {
    name: &'static str,
}

#[async_trait]
impl SlashCommand for StubCommand {
    fn name(&self) -> &'static str {
        self.name
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new(self.name()).description("stub")
    }

    async fn run(&self, _ctx: &Context, _interaction: &CommandInteraction) -> DiscordResult<()> {
        Ok(())
    }
}

fn stub(name: &'static str) -> Arc<dyn SlashCommand> {
    Arc::new(StubCommand { name })
}

#[test]
fn lookup_finds_registered_commands() {
    let registry = CommandRegistry::new()
        .register(stub("parse"))
        .unwrap()
        .register(stub("read"))
        .unwrap();

    assert_eq!(registry.len(), 2);
    assert!(registry.get("parse").is_some());
    assert!(registry.get("read").is_some());
}

#[test]
fn lookup_misses_unregistered_names() {
    let registry = CommandRegistry::new().register(stub("parse")).unwrap();

    assert!(registry.get("write").is_none());
    // Names are exact; no normalization happens at dispatch time.
    assert!(registry.get("Parse").is_none());
    assert!(registry.get("").is_none());
}

#[test]
fn duplicate_registration_is_rejected() {
    let err = CommandRegistry::new()
        .register(stub("parse"))
        .unwrap()
        .register(stub("parse"))
        .unwrap_err();

    assert!(matches!(
        err.kind(),
        DiscordErrorKind::DuplicateCommand(name) if name.as_str() == "parse"
    ));
}

#[test]
fn create_commands_covers_every_registration() {
    let registry = CommandRegistry::new()
        .register(stub("parse"))
        .unwrap()
        .register(stub("rigs-stats"))
        .unwrap();

    let payload = registry.create_commands();
    assert_eq!(payload.len(), 2);

    let mut names: Vec<String> = payload
        .into_iter()
        .map(|command| {
            serde_json::to_value(command).unwrap()["name"]
                .as_str()
                .unwrap()
                .to_owned()
        })
        .collect();
    names.sort();
    assert_eq!(names, vec!["parse", "rigs-stats"]);
}

#[test]
fn empty_registry_is_empty() {
    let registry = CommandRegistry::new();
    assert!(registry.is_empty());
    assert_eq!(registry.create_commands().len(), 0);
}
