//! Command runner test utilities

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use image_bot::version::command::{CommandOutput, CommandRunner, Invocation};
use image_bot::version::error::ResolveError;

/// Successful output with the given stdout
pub fn success(stdout: &str) -> CommandOutput {
    CommandOutput {
        success: true,
        code: Some(0),
        stdout: stdout.to_string(),
        stderr: String::new(),
    }
}

/// Failed output with the given exit code and stderr
pub fn failure(code: i32, stderr: &str) -> CommandOutput {
    CommandOutput {
        success: false,
        code: Some(code),
        stdout: String::new(),
        stderr: stderr.to_string(),
    }
}

/// Runner answering from a fixed table keyed by command line
#[derive(Default)]
pub struct ScriptedRunner {
    outputs: HashMap<String, CommandOutput>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output(mut self, command_line: &str, output: CommandOutput) -> Self {
        self.outputs.insert(command_line.to_string(), output);
        self
    }

    /// Command lines run so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn run(&self, invocation: &Invocation) -> Result<CommandOutput, ResolveError> {
        let command_line = invocation.to_string();
        self.calls.lock().unwrap().push(command_line.clone());

        self.outputs
            .get(&command_line)
            .cloned()
            .ok_or_else(|| ResolveError::command(&command_line, "not scripted"))
    }
}
