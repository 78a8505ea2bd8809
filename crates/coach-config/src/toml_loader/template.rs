//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# coach configuration
# Only override what you want to change -- missing fields use defaults.

[model]
# model = "claude-sonnet-4-20250514"
# max_tokens = 4096            # 1-64000
# temperature = 0.7            # 0.0-1.0
# api_url = "https://api.anthropic.com/v1/messages"
# request_timeout_secs = 120   # 5-600
# connect_timeout_secs = 10    # 1-60

[data]
# exercises_path = "data/exercises.json"
# rules_path = "data/rules.txt"
# tiers = ["beginner", "late-beginner", "early-intermediate", "intermediate", "upper-intermediate"]

[credentials]
# Looked up in the environment first, then as a KEY=value line in key_file.
# env_var = "CLAUDE_API_KEY"
# key_file = "config.ini"

[logging]
# level = "info"               # trace, debug, info, warn, error
"##
}
