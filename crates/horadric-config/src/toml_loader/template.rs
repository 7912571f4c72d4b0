/// Default TOML config content. Every key is commented out so the serde
/// defaults stay authoritative until the user opts in.
pub(crate) fn default_config_toml() -> String {
    r##"# Horadric Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[provider]
# model = "gemini-2.5-flash-preview-05-20"
# api_key_env = "GOOGLE_API_KEY"   # environment variable holding the key
# base_url = "https://generativelanguage.googleapis.com/v1beta/models"
# connect_timeout_secs = 10
# request_timeout_secs = 120
# temperature = 1.0                # 0.0-2.0, provider default when unset
# max_output_tokens = 8192

[assistant]
# wiki_url = "https://pd2reawakening.com/wiki/index.php?title=Main_Page"

[logging]
# level = "INFO"                   # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
