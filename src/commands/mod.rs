pub type CmdResult<T> = union_gen::Result<(T, i32)>;

pub(crate) struct GlobalArgs {}

pub mod config;
pub mod init;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run_json($args))
    };
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (union_gen::Result<serde_json::Value>, i32) {
    match command {
        // Commands without global context
        crate::Commands::Init(args) => dispatch!(args, init),

        // Commands with global context
        crate::Commands::Config(args) => dispatch!(args, global, config),
    }
}
