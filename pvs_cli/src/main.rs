mod cmd_find;
mod cmd_help;
mod cmd_parse;
mod util;

use cmd_find::exec_find_cmd;
use cmd_help::{exec_help_cmd, exec_version_cmd, string_is_help_flag};
use cmd_parse::exec_parse_cmd;
use env_logger::Env;
use log::error;
use std::{env, process};
use util::dyn_error::DynError;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Cmd {
    Parse,
    Find,
    Help,
    Version,
}

pub(crate) fn parse_cmd(s: &str) -> Option<Cmd> {
    let cmd = match s {
        "parse" => Cmd::Parse,
        "find" => Cmd::Find,
        "help" | "-?" | "/?" => Cmd::Help,
        "version" | "-V" | "--version" => Cmd::Version,
        _ if string_is_help_flag(s) => Cmd::Help,
        _ => return None,
    };
    Some(cmd)
}

fn init_log() {
    let env = Env::default().default_filter_or("warn");
    env_logger::from_env(env).init();
}

fn exec(mut args: impl Iterator<Item = String>) -> Result<(), DynError> {
    let cmd = match args.next() {
        None => Cmd::Help,
        Some(arg) => match parse_cmd(&arg) {
            Some(cmd) => cmd,
            None => return Err(format!("サブコマンド '{}' はありません。", arg).into()),
        },
    };

    match cmd {
        Cmd::Parse => exec_parse_cmd(args),
        Cmd::Find => exec_find_cmd(args),
        Cmd::Help => {
            exec_help_cmd();
            Ok(())
        }
        Cmd::Version => {
            exec_version_cmd();
            Ok(())
        }
    }
}

fn main() {
    init_log();

    let mut args = env::args();
    args.next();

    if let Err(err) = exec(args) {
        error!("{}", err.to_message());
        eprintln!("詳しくは `{} help` を参照してください。", env!("CARGO_PKG_NAME"));
        process::exit(1);
    }
}
