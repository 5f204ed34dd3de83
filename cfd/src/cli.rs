use std::path::PathBuf;

pub const USAGE: &str = "Usage: cfd <scalefactor> <iterations> [--config <path>]";

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ArgsError {
    #[error("expected <scalefactor> and <iterations>, got {given} positional argument(s)")]
    MissingArguments { given: usize },
    #[error("{name} must be an integer, got {value:?}")]
    InvalidInteger { name: &'static str, value: String },
    #[error("{flag} needs a path")]
    MissingValue { flag: String },
}

/// コマンドライン引数。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub scale_factor: usize,
    pub iterations: usize,
    pub config: Option<PathBuf>,
}

impl Args {
    /// プログラム名を除いた引数列を解釈する。
    pub fn parse<I, S>(args: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut positional: Vec<String> = vec![];
        let mut config = None;
        let mut it = args.into_iter().map(Into::into);
        while let Some(a) = it.next() {
            if a == "--config" || a == "-c" {
                match it.next() {
                    Some(p) => config = Some(PathBuf::from(p)),
                    None => return Err(ArgsError::MissingValue { flag: a }),
                }
            } else {
                positional.push(a);
            }
        }
        if positional.len() < 2 {
            return Err(ArgsError::MissingArguments {
                given: positional.len(),
            });
        }
        Ok(Self {
            scale_factor: parse_int("scalefactor", &positional[0])?,
            iterations: parse_int("iterations", &positional[1])?,
            config,
        })
    }
}

fn parse_int(name: &'static str, value: &str) -> Result<usize, ArgsError> {
    value.trim().parse().map_err(|_| ArgsError::InvalidInteger {
        name,
        value: value.to_string(),
    })
}
