use crate::{cmd_help::string_is_help_flag, util::dyn_error::DynError};
use log::debug;
use pvs_parser::rust_api::{Driver, DriverConfig};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, PartialEq)]
pub(crate) struct ParseArgs {
    pub(crate) test: bool,
    pub(crate) files: Vec<PathBuf>,
    pub(crate) help: bool,
}

pub(crate) fn parse_parse_args(args: impl Iterator<Item = String>) -> Result<ParseArgs, DynError> {
    let mut parse_args = ParseArgs::default();

    for arg in args {
        match arg.as_str() {
            "--test" | "-test" => parse_args.test = true,
            _ if string_is_help_flag(&arg) => parse_args.help = true,
            _ if arg.starts_with('-') => {
                return Err(format!("不明なオプション '{}' があります。", arg).into())
            }
            _ => parse_args.files.push(PathBuf::from(arg)),
        }
    }

    if parse_args.files.is_empty() && !parse_args.help {
        return Err("ソースファイルが指定されていません。".into());
    }

    Ok(parse_args)
}

/// 1つのファイルを処理して、標準出力に書く内容を作る。
fn parse_file(driver: &Driver, path: &Path, test: bool) -> Result<String, DynError> {
    let mut out = String::new();

    if test {
        out += &format!("Parsing file {}\n", path.display());
    }

    let result = driver
        .index(path)
        .map_err(|err| DynError::in_file(path, err))?;
    debug!(
        "{}: {} diagnostics",
        path.display(),
        result.diagnostics.len()
    );

    if !result.is_ok() || !test {
        let json = serde_json::to_string(&result.diagnostics)?;
        out += &json;
        out += "\n";
        return Ok(out);
    }

    out += &format!("{} parsed successfully!\n", path.display());
    for dump in &result.dumps {
        out += dump;
    }
    Ok(out)
}

pub(crate) fn exec_parse_cmd(args: impl Iterator<Item = String>) -> Result<(), DynError> {
    let parse_args = parse_parse_args(args)?;
    if parse_args.help {
        crate::cmd_help::exec_help_cmd();
        return Ok(());
    }

    let driver = Driver::new(DriverConfig {
        dump: parse_args.test,
        ..DriverConfig::default()
    });

    // ファイルごとに独立して処理する。出力は引数の順に並べる。
    let outputs = parse_args
        .files
        .par_iter()
        .map(|path| parse_file(&driver, path, parse_args.test))
        .collect::<Vec<_>>();

    for output in outputs {
        print!("{}", output?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &[&str]) -> impl Iterator<Item = String> {
        s.iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn test_parse_args() {
        let parse_args = parse_parse_args(args(&["--test", "a.pvs", "b.pvs"])).ok().unwrap();
        assert_eq!(
            parse_args,
            ParseArgs {
                test: true,
                files: vec![PathBuf::from("a.pvs"), PathBuf::from("b.pvs")],
                help: false,
            }
        );
    }

    #[test]
    fn test_parse_args_accepts_single_dash_test() {
        let parse_args = parse_parse_args(args(&["a.pvs", "-test"])).ok().unwrap();
        assert!(parse_args.test);
    }

    #[test]
    fn test_parse_args_requires_file() {
        assert!(parse_parse_args(args(&["--test"])).is_err());
        assert!(parse_parse_args(args(&["--help"])).is_ok());
    }

    #[test]
    fn test_parse_args_rejects_unknown_option() {
        assert!(parse_parse_args(args(&["--nope", "a.pvs"])).is_err());
    }
}
