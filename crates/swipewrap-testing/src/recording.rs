//! Headless renderer that remembers what it was asked to do.

use std::convert::Infallible;
use swipewrap_core::OffsetRenderer;

/// One `set_offset` call as seen by the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OffsetCommand {
    pub offset: f32,
    pub animated: bool,
}

impl OffsetCommand {
    pub fn instant(offset: f32) -> Self {
        Self {
            offset,
            animated: false,
        }
    }

    pub fn animated(offset: f32) -> Self {
        Self {
            offset,
            animated: true,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct RecordingRenderer {
    commands: Vec<OffsetCommand>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[OffsetCommand] {
        &self.commands
    }

    pub fn last(&self) -> Option<OffsetCommand> {
        self.commands.last().copied()
    }

    /// Offset the strip was last placed at, animated or not.
    pub fn current_offset(&self) -> Option<f32> {
        self.last().map(|command| command.offset)
    }

    /// Drains the recorded commands.
    pub fn take(&mut self) -> Vec<OffsetCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl OffsetRenderer for RecordingRenderer {
    type Error = Infallible;

    fn set_offset(&mut self, offset: f32, animated: bool) -> Result<(), Self::Error> {
        self.commands.push(OffsetCommand { offset, animated });
        Ok(())
    }
}
