//! The slash-command trait and the command registry.

use crate::{DiscordError, DiscordErrorKind, DiscordResult};
use async_trait::async_trait;
use serenity::all::{CommandInteraction, Context, CreateCommand};
use std::collections::HashMap;
use std::sync::Arc;

/// A named slash command.
///
/// Implementations hold their collaborators (parser handle, gateway client,
/// market clients) behind `Arc`s supplied at construction; `run` must not
/// touch any mutable shared state.
#[async_trait]
pub trait SlashCommand: Send + Sync {
    /// The command name users invoke, e.g. `rigs-stats`.
    fn name(&self) -> &'static str;

    /// Command metadata for registration with Discord.
    fn register(&self) -> CreateCommand;

    /// Handle one invocation.
    ///
    /// Expected user-facing failures (bad SQL, unreachable collaborator)
    /// are replied to inside the handler and reported as `Ok`; an `Err`
    /// means the handler itself could not respond and lets the dispatcher
    /// send its generic failure reply.
    async fn run(&self, ctx: &Context, interaction: &CommandInteraction) -> DiscordResult<()>;
}

/// Immutable mapping from command name to handler.
///
/// Built once at startup from a static list and shared read-only with the
/// event handler; never mutated afterwards, so concurrent invocations need
/// no locking.
///
/// # Examples
///
/// ```ignore
/// let registry = CommandRegistry::new()
///     .register(Arc::new(ParseCommand::new(parser)))?
///     .register(Arc::new(ReadCommand::new(parser, gateway)))?;
/// ```
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, Arc<dyn SlashCommand>>,
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.commands.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a command, keyed by its name.
    ///
    /// # Errors
    ///
    /// Returns [`DiscordErrorKind::DuplicateCommand`] when the name is
    /// already taken; startup should fail loudly rather than shadow a
    /// handler.
    pub fn register(mut self, command: Arc<dyn SlashCommand>) -> DiscordResult<Self> {
        let name = command.name().to_owned();
        if self.commands.contains_key(&name) {
            return Err(DiscordError::new(DiscordErrorKind::DuplicateCommand(name)));
        }
        self.commands.insert(name, command);
        Ok(self)
    }

    /// Look up a handler by command name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn SlashCommand>> {
        self.commands.get(name)
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterate over the registered handlers.
    pub fn commands(&self) -> impl Iterator<Item = &Arc<dyn SlashCommand>> {
        self.commands.values()
    }

    /// Registration payload for every command, for deployment to Discord.
    pub fn create_commands(&self) -> Vec<CreateCommand> {
        self.commands().map(|command| command.register()).collect()
    }
}
