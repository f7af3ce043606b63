mod verification_script_stub;

pub use self::verification_script_stub::FakeVerificationScript;
