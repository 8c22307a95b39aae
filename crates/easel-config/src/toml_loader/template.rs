//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Easel Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[theme]
name = "easel-dark"
# alternate = "easel-light"   # theme swapped in by /theme

[colors]
# Semantic roles the assistant can paint with by name.
# primary = "#00d4ff"
# secondary = "#ff6b00"
# accent = "#cba6f7"
# background = "#0b0e14"
# surface = "#161b22"
# text = "#f0ece4"
# text_muted = "#888888"
# border = "#30363d"
# success = "#00ff88"
# warning = "#ffb020"
# danger = "#ff4444"

[ai]
# model = "claude-sonnet-4-20250514"
# max_tokens = 4096       # 256-32768
# temperature = 0.7       # 0.0-1.0
# timeout_secs = 120      # 5-600
# max_history = 40        # 2-200
# default_mode = "draw"   # draw, chat

[canvas]
# max_commands = 256          # 1-65536
# string_pool_bytes = 4096    # 256-1048576
# wire_buffer_bytes = 16384   # 1024-4194304
# text_buffer_bytes = 4096    # 256-1048576
# max_content_blocks = 64     # 1-4096
# export_path = "easel-canvas.svg"

[logging]
# level = "info"          # trace, debug, info, warn, error
"##
}
