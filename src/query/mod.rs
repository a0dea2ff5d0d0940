//! Read-only questions about a command tree, used by explanation logic.

pub mod command;
pub mod predicates;

pub use command::{
    assignment_has_value, command_has_assignment, command_has_option, command_has_program,
    command_has_subcommand, get_all_arguments, get_all_assignments, get_all_redirects,
    get_all_subcommands, get_command_option, get_command_options, get_command_program,
    get_last_node, get_program_node_position, get_sudo_option, get_sudo_options, with_sudo,
};
pub use predicates::*;
