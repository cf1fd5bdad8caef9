//! Command queues between the core and the layer that drives it.
//!
//! A [`CommandQueue`] holds one FIFO of `(Command, payload)` pairs per
//! [`Target`]. Producers push intents such as "open this file" or "show this
//! error"; the consuming layer drains its target once per frame. The queue
//! is a plain value owned by the caller.

use std::collections::VecDeque;

use tracing::trace;

/// Consumer a command is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Application,
    WidgetManager,
    CurrentTab,
}

/// Operation requested by a queued entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    OpenFile,
    CloseAllTabs,
    CreateErrorWindow,
    OpenBoardOptions,
}

/// A queued command with its string payload (a path, an error message, ...)
pub type CommandPair = (Command, String);

/// Per-target FIFO queues.
#[derive(Debug, Clone, Default)]
pub struct CommandQueue {
    application: VecDeque<CommandPair>,
    widget_manager: VecDeque<CommandPair>,
    current_tab: VecDeque<CommandPair>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues `command` for `target`
    pub fn push(&mut self, target: Target, command: Command, payload: impl Into<String>) {
        let payload = payload.into();
        trace!(?target, ?command, payload = %payload, "Queued command");
        self.queue_mut(target).push_back((command, payload));
    }

    /// Shows `message` in an error window
    pub fn report_error(&mut self, message: impl Into<String>) {
        self.push(Target::WidgetManager, Command::CreateErrorWindow, message);
    }

    /// Oldest command for `target`
    pub fn front(&self, target: Target) -> Option<&CommandPair> {
        self.queue(target).front()
    }

    /// Removes and returns the oldest command for `target`
    pub fn pop(&mut self, target: Target) -> Option<CommandPair> {
        self.queue_mut(target).pop_front()
    }

    pub fn is_empty(&self, target: Target) -> bool {
        self.queue(target).is_empty()
    }

    pub fn len(&self, target: Target) -> usize {
        self.queue(target).len()
    }

    /// Removes every command for `target`, oldest first
    pub fn drain(&mut self, target: Target) -> impl Iterator<Item = CommandPair> + '_ {
        self.queue_mut(target).drain(..)
    }

    fn queue(&self, target: Target) -> &VecDeque<CommandPair> {
        match target {
            Target::Application => &self.application,
            Target::WidgetManager => &self.widget_manager,
            Target::CurrentTab => &self.current_tab,
        }
    }

    fn queue_mut(&mut self, target: Target) -> &mut VecDeque<CommandPair> {
        match target {
            Target::Application => &mut self.application,
            Target::WidgetManager => &mut self.widget_manager,
            Target::CurrentTab => &mut self.current_tab,
        }
    }
}
