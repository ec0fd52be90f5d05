//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# stereovr Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[video]
# source = "/path/to/frame.png"   # omit for the built-in test pattern
# format = "mono"                 # mono, side-by-side (sbs), top-bottom (tb)
# wide_field = false              # true for 180 degree sources
# sphere_radius = 500.0           # 1.0-10000.0
# width_segments = 60             # 3-512
# height_segments = 40            # 2-512
# preview_eye = "left"            # left, right

[scenes]
# home_background = "#222222"
# video_background = "#101010"
# menu_box_color = "#ffffff"
# menu_box_size = 1.0             # 0.1-10.0
# menu_box_distance = 3.0         # 0.5-100.0

[controllers]
# count = 2                       # 0-2
# ray_length = 5.0                # 0.1-100.0
# desktop_pointer = true

[window]
# title = "stereovr"
# width = 1280
# height = 720
# fov_y_degrees = 70.0            # 30.0-150.0
# near = 0.1
# far = 1000.0                    # must exceed video.sphere_radius

[keybinds]
# toggle_scene = "Space"
# format_mono = "Numpad1"
# format_side_by_side = "Numpad2"
# format_top_bottom = "Numpad3"
# toggle_wide_field = "F"
# toggle_fullscreen = "F11"
# quit = "Escape"

[logging]
# level = "INFO"                  # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
