pub mod bash_script;
pub mod settings_file;

pub use bash_script::BashScriptRunner;
pub use settings_file::load_settings;
