/// Configuration written to `~/.cmd_pal/config` on first run.
pub const DEFAULT_CONFIG: &str = r#"
# CMD_PAL Configuration File
#
# This file contains the configuration settings for CMD_PAL.
# Each section represents a different widget in the CMD_PAL interface.
#
# Available options for each section:
#   type (required): The type of widget to display. Options are 'log', 'parse_command', and 'display'.
#
#   value (required): The value associated with the widget type.
#     - For 'log': The file path for the log file (e.g., '~/my_log.txt').
#     - For 'parse_command': The command to be executed and parsed (e.g., 'ls -la').
#     - For 'display': The command to be executed and displayed (e.g., 'date').
#
#   interval (required): The time interval (in seconds) between updates for the widget.
#
# Additional options specific to 'parse_command' type:
#   clean (optional, default=False): If set to True, entries that disappear from the
#     command output are removed. Otherwise old entries are kept as history.
#   split (optional, default=False): If set to True, the output of the command will be
#     split by newline characters (newest line first).
#   action (optional, default='insert'): The action to perform when a button is clicked.
#     - 'insert': Switches to the last app frontmost and inserts the text
#     - 'show': Shows the command in a terminal window (new or existing)
#     - 'run': Runs the command internally and displays the output in the bottom status field.
#
#   When using the parse_command type, you can assign custom labels to buttons with
#   lines like "ls -lah ;: My ls" to create a [My ls] button.

# Default config assumes zsh shell but you can customize it to be whatever
[History]
type = parse_command
# history in zsh is stored like ": 1687218706:0;ls" so we cleanup.
value = tail -n 50 ~/.zsh_history | cut -d ";" -f2- -s
interval = 4
clean = True
split = True
action = show


[Clipboard]
type = parse_command
value = pbpaste
interval = 4
clean = False
split = False
action = insert

[Ruby Shell]
type = parse_command
value = tail -n 50 ~/.pry_history
interval = 4
clean = True
split = True
action = insert

[notes.txt]
type = log
value = ~/.cmd_pal/notes.txt
interval = 10

[Uptime]
type = display
value = uptime
interval = 10
"#;
