use std::fmt;

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NotifierKind {
    #[clap(name = "dingtalk")]
    DingTalk,
    #[clap(name = "dry-run", alias = "dryrun")]
    DryRun,
}

impl fmt::Display for NotifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DingTalk => write!(f, "dingtalk"),
            Self::DryRun => write!(f, "dry-run"),
        }
    }
}
