mod docs;
mod lsp_server;

mod utils {
    mod uri;

    pub(crate) use uri::Uri;
}

use pvs_parser::rust_api::LookupMode;
use std::{
    env,
    io::{self, Write},
    process,
};

enum Arg {
    Help,
    Version,
    Start(LookupMode),
}

fn write_help(w: &mut impl Write) -> io::Result<()> {
    write!(
        w,
        r#"{name} {version}

    USAGE:
        {name} [OPTIONS] [SUBCOMMAND]

    EXAMPLE:
        {name} start
        {name} start --scoped

    SUBCOMMANDS:
        start           PVS の LSP サーバーとして起動する
                        (--scoped: 名前を引くときに宣言の有効範囲を考慮する)
        help            ヘルプを表示する (--help と同じ)
        version         バージョン番号を表示する (--version と同じ)

    OPTIONS:
        -h, --help      ヘルプを表示する
        -V, --version   バージョン番号を表示する
"#,
        name = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
    )
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Arg, String> {
    let subcommand = match args.next() {
        None => return Ok(Arg::Help),
        Some(x) => x,
    };

    match subcommand.as_str() {
        "-h" | "--help" | "help" | "-?" | "/?" => Ok(Arg::Help),
        "-V" | "--version" | "version" => Ok(Arg::Version),
        "start" => {
            let mut lookup = LookupMode::ByCategory;

            for arg in args {
                match arg.as_str() {
                    "--scoped" => lookup = LookupMode::Scoped,
                    _ => return Err(format!("Unknown argument '{}'.", arg)),
                }
            }

            Ok(Arg::Start(lookup))
        }
        subcommand => Err(format!("Unknown subcommand '{}'.", subcommand)),
    }
}

fn main() {
    let mut args = env::args();
    args.next();

    match parse_args(args) {
        Ok(Arg::Help) => {
            write_help(&mut io::stdout()).ok();
        }
        Ok(Arg::Version) => println!("{}", env!("CARGO_PKG_VERSION")),
        Ok(Arg::Start(lookup)) => lsp_server::start_lsp_server(lookup),
        Err(message) => {
            eprintln!("{}", message);
            write_help(&mut io::stderr()).ok();
            process::exit(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Arg, String> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_start_defaults_to_lookup_by_category() {
        match parse(&["start"]) {
            Ok(Arg::Start(LookupMode::ByCategory)) => {}
            _ => panic!(),
        }
    }

    #[test]
    fn test_start_scoped() {
        match parse(&["start", "--scoped"]) {
            Ok(Arg::Start(LookupMode::Scoped)) => {}
            _ => panic!(),
        }
    }

    #[test]
    fn test_unknown_argument() {
        assert!(parse(&["start", "--watch"]).is_err());
        assert!(parse(&["stop"]).is_err());
    }
}
