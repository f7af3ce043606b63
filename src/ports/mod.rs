mod verification_script;

pub use verification_script::{ScriptInvocation, ScriptOutcome, VerificationScript};
