use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{ScriptInvocation, ScriptOutcome, VerificationScript};

/// Records every invocation and answers with a fixed exit code.
pub struct FakeVerificationScript {
    pub invocations: Mutex<Vec<ScriptInvocation>>,
    pub exit_code: Mutex<Option<i32>>,
}

impl Default for FakeVerificationScript {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeVerificationScript {
    pub fn new() -> Self {
        Self { invocations: Mutex::new(Vec::new()), exit_code: Mutex::new(Some(0)) }
    }

    pub fn set_exit_code(&self, code: Option<i32>) {
        *self.exit_code.lock().unwrap() = code;
    }

    pub fn invocations(&self) -> Vec<ScriptInvocation> {
        self.invocations.lock().unwrap().clone()
    }
}

impl VerificationScript for FakeVerificationScript {
    fn run(&self, invocation: &ScriptInvocation) -> Result<ScriptOutcome, AppError> {
        self.invocations.lock().unwrap().push(invocation.clone());
        Ok(ScriptOutcome { code: *self.exit_code.lock().unwrap() })
    }
}
